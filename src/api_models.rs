use serde::{Deserialize, Serialize};

/// One ingredient of a drink's recipe. The public listing omits `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipePart {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub parts: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    pub id: i64,
    pub title: String,
    pub recipe: Vec<RecipePart>,
}

#[derive(Debug, Deserialize)]
pub struct DrinksResponse {
    pub success: bool,
    pub drinks: Vec<Drink>,
}

#[derive(Debug, Deserialize)]
pub struct CreateDrinkResponse {
    pub success: bool,
    pub drinks: Drink,
}

#[derive(Debug, Deserialize)]
pub struct DeleteDrinkResponse {
    pub success: bool,
    pub drinks: i64,
}

#[derive(Debug, Serialize)]
pub struct DrinkBody<'a> {
    pub title: &'a str,
    pub recipe: &'a [RecipePart],
}
