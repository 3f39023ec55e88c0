use serde::{Deserialize, Serialize};

use crate::model::character::CharacterDto;

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "clima")]
    pub climate: String,
    pub dimension: String,
    /// Characters native to this planet
    #[serde(rename = "residentes")]
    pub residents: Vec<CharacterDto>,
}
