use serde::Deserialize;

/// Success envelope returned by the remote service: `{ "data": { "recipe": ... } }`.
#[derive(Debug, Deserialize)]
pub(crate) struct RecipeEnvelope {
    pub data: RecipePayload,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecipePayload {
    pub recipe: RawRecipe,
}

/// Failure body returned by the remote service alongside a non-2xx status.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

/// The wire-format record as the remote service returns it.
///
/// Field names and casing are the external contract; nothing beyond the
/// fields consumed here is assumed stable.
#[derive(Debug, Deserialize)]
pub struct RawRecipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image_url: String,
    pub servings: u32,
    pub cooking_time: u32,
    pub ingredients: Vec<RawIngredient>,
}

#[derive(Debug, Deserialize)]
pub struct RawIngredient {
    pub quantity: Option<f64>,
    pub unit: String,
    pub description: String,
}

/// The normalized in-memory recipe shape handed to the renderer.
///
/// Created fresh per fetch and replaced wholesale on every new cycle;
/// nothing caches it across cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image_url: String,
    pub servings: u32,
    pub cooking_time: u32,
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub quantity: Option<f64>,
    pub unit: String,
    pub description: String,
}

impl Ingredient {
    /// Display value for the quantity column.
    ///
    /// A null quantity is "unspecified", not "none": it renders as the
    /// empty string, never as `0`.
    pub fn quantity_display(&self) -> String {
        // f64's Display already prints integral values without a
        // trailing ".0", and it never saturates the way an integer
        // cast would.
        match self.quantity {
            Some(q) => format!("{}", q),
            None => String::new(),
        }
    }
}

impl From<RawIngredient> for Ingredient {
    fn from(raw: RawIngredient) -> Self {
        Ingredient {
            quantity: raw.quantity,
            unit: raw.unit,
            description: raw.description,
        }
    }
}

impl From<RawRecipe> for Recipe {
    fn from(raw: RawRecipe) -> Self {
        Recipe {
            id: raw.id,
            title: raw.title,
            publisher: raw.publisher,
            source_url: raw.source_url,
            image_url: raw.image_url,
            servings: raw.servings,
            cooking_time: raw.cooking_time,
            ingredients: raw.ingredients.into_iter().map(Ingredient::from).collect(),
        }
    }
}
