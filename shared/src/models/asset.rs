//! Company asset (inventory item)

use serde::{Deserialize, Serialize};

/// Whether an asset unit comes back to the pool after use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductType {
    /// Laptops, monitors, chairs — returned when the employee leaves
    Returnable,
    /// Consumables — a unit leaves the inventory for good
    NonReturnable,
}

impl ProductType {
    /// Parse from database string value
    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "returnable" => Some(Self::Returnable),
            "non-returnable" => Some(Self::NonReturnable),
            _ => None,
        }
    }

    /// Database string representation
    pub fn as_db(&self) -> &'static str {
        match self {
            Self::Returnable => "returnable",
            Self::NonReturnable => "non-returnable",
        }
    }

    pub fn is_returnable(&self) -> bool {
        matches!(self, Self::Returnable)
    }
}

/// Asset row
///
/// `quantity` is the number of units currently available for assignment.
/// It is only ever changed through the inventory ledger operations
/// (conditional decrement on approval, increment on return) and the
/// database enforces `quantity >= 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Asset {
    pub id: i64,
    pub product_name: String,
    /// "returnable" | "non-returnable"
    pub product_type: String,
    pub product_url: Option<String>,
    pub quantity: i64,
    pub company_name: String,
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_type_db_roundtrip() {
        assert_eq!(
            ProductType::from_db("returnable"),
            Some(ProductType::Returnable)
        );
        assert_eq!(
            ProductType::from_db("non-returnable"),
            Some(ProductType::NonReturnable)
        );
        assert_eq!(ProductType::from_db("perishable"), None);

        assert_eq!(ProductType::Returnable.as_db(), "returnable");
        assert_eq!(ProductType::NonReturnable.as_db(), "non-returnable");
    }

    #[test]
    fn product_type_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ProductType::NonReturnable).unwrap(),
            "\"non-returnable\""
        );
        let parsed: ProductType = serde_json::from_str("\"returnable\"").unwrap();
        assert_eq!(parsed, ProductType::Returnable);
    }

    #[test]
    fn only_returnable_is_returnable() {
        assert!(ProductType::Returnable.is_returnable());
        assert!(!ProductType::NonReturnable.is_returnable());
    }
}
