use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Fuel products the station feed publishes prices for.
///
/// The serialized form is the feed's own product label, which is also what
/// gets echoed back in the `producto` field of a search response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Product {
    #[serde(rename = "Gasolina 93")]
    Gasoline93,
    #[serde(rename = "Gasolina 95")]
    Gasoline95,
    #[serde(rename = "Gasolina 97")]
    Gasoline97,
    Diesel,
    Kerosene,
}

impl Product {
    /// Human-readable list of accepted inputs, used in validation messages
    /// and CLI prompts.
    pub const ACCEPTED_INPUTS: &'static str = "93, 95, 97, Diesel, Kerosene";

    /// Maps user input (`"93"`, `"diesel"`, `" KEROSENE "`, ...) onto a product.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Validation`] when the input is blank or is not
    /// one of the accepted values.
    pub fn from_input(input: &str) -> Result<Self, SearchError> {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(SearchError::Validation(
                "Parámetro 'product' inválido".to_string(),
            ));
        }

        match normalized.as_str() {
            "93" => Ok(Self::Gasoline93),
            "95" => Ok(Self::Gasoline95),
            "97" => Ok(Self::Gasoline97),
            "diesel" => Ok(Self::Diesel),
            "kerosene" => Ok(Self::Kerosene),
            _ => Err(SearchError::Validation(format!(
                "Producto inválido. Opciones válidas: {}.",
                Self::ACCEPTED_INPUTS
            ))),
        }
    }

    /// The label the feed uses for this product in each station's price list.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Gasoline93 => "Gasolina 93",
            Self::Gasoline95 => "Gasolina 95",
            Self::Gasoline97 => "Gasolina 97",
            Self::Diesel => "Diesel",
            Self::Kerosene => "Kerosene",
        }
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
