use html_escape::encode_text;

use crate::model::{Ingredient, Recipe};

/// Markup shown while a fetch is in flight.
pub const SPINNER_MARKUP: &str = r#"<div class="spinner"></div>"#;

/// Markup shown in the initial and error states.
pub const PLACEHOLDER_MARKUP: &str = r#"<div class="message">
  <p>Start by searching for a recipe or an ingredient. Have fun!</p>
</div>"#;

/// Turns a normalized recipe into renderable content.
///
/// The orchestrator guarantees the recipe handed in is fully normalized;
/// implementations never see a partial record.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, recipe: &Recipe) -> String;
}

/// Default renderer producing the recipe markup.
#[derive(Debug, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn render_ingredient(&self, ingredient: &Ingredient) -> String {
        format!(
            r#"<li class="recipe__ingredient">
  <div class="recipe__quantity">{quantity}</div>
  <div class="recipe__description">
    <span class="recipe__unit">{unit}</span>
    {description}
  </div>
</li>"#,
            quantity = ingredient.quantity_display(),
            unit = encode_text(&ingredient.unit),
            description = encode_text(&ingredient.description),
        )
    }
}

impl TemplateRenderer for HtmlRenderer {
    fn render(&self, recipe: &Recipe) -> String {
        let ingredients = recipe
            .ingredients
            .iter()
            .map(|i| self.render_ingredient(i))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<figure class="recipe__fig">
  <img src="{image_url}" alt="{title}" class="recipe__img" />
  <h1 class="recipe__title"><span>{title}</span></h1>
</figure>

<div class="recipe__details">
  <div class="recipe__info">
    <span class="recipe__info-data recipe__info-data--minutes">{cooking_time}</span>
    <span class="recipe__info-text">minutes</span>
  </div>
  <div class="recipe__info">
    <span class="recipe__info-data recipe__info-data--people">{servings}</span>
    <span class="recipe__info-text">servings</span>
  </div>
</div>

<div class="recipe__ingredients">
  <h2 class="heading--2">Recipe ingredients</h2>
  <ul class="recipe__ingredient-list">
{ingredients}
  </ul>
</div>

<div class="recipe__directions">
  <h2 class="heading--2">How to cook it</h2>
  <p class="recipe__directions-text">
    This recipe was carefully designed and tested by
    <span class="recipe__publisher">{publisher}</span>. Please check out
    directions at their website.
  </p>
  <a class="btn--small recipe__btn" href="{source_url}" target="_blank">
    <span>Directions</span>
  </a>
</div>"#,
            image_url = encode_text(&recipe.image_url),
            title = encode_text(&recipe.title),
            cooking_time = recipe.cooking_time,
            servings = recipe.servings,
            ingredients = ingredients,
            publisher = encode_text(&recipe.publisher),
            source_url = encode_text(&recipe.source_url),
        )
    }
}
