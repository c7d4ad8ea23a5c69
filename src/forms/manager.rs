use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::domain::nest::NewNest;
use crate::domain::specie::NewSpecie;

#[derive(Debug, Deserialize, Validate)]
pub struct AddSpecieForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    #[validate(url(message = "image must be a valid url"))]
    pub image_url: Option<String>,
}

impl From<AddSpecieForm> for NewSpecie {
    fn from(form: AddSpecieForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            image_url: form.image_url,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddNestForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "specie is required"))]
    pub specie: String,
    #[serde(default, deserialize_with = "de_opt_price")]
    pub price: Option<i64>,
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub dad: Option<String>,
    #[serde(default, deserialize_with = "de_opt_trimmed")]
    pub mom: Option<String>,
}

impl From<AddNestForm> for NewNest {
    fn from(form: AddNestForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            specie: form.specie,
            price: form.price.filter(|p| *p >= 0),
            dad: form.dad,
            mom: form.mom,
        }
    }
}

/// Browsers post optional inputs left blank as empty strings; fold those back
/// to `None`.
fn de_opt_trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

fn de_opt_price<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}
