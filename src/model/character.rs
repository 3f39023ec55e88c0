use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "especie")]
    pub species: String,
    /// ID of the character's native planet
    #[serde(rename = "planeta_id")]
    pub planet_id: Option<i32>,
    /// Name of the character's native planet, `null` when it has none
    #[serde(rename = "planeta_nombre")]
    pub planet_name: Option<String>,
}
