//! Product Entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Product entity
///
/// No versioning, no soft delete, no relationship to users.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Internal UUID identifier
    pub product_id: Uuid,
    /// Product name (required)
    pub name: String,
    /// Description, defaults to empty
    pub description: String,
    /// Non-negative price, two decimal places
    pub price: Decimal,
    /// Non-negative stock quantity
    pub quantity: i32,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

/// Partial update; `None` means "leave unchanged"
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<i32>,
}

impl Product {
    /// Create a new product with a fresh identity
    pub fn new(name: String, description: String, price: Decimal, quantity: i32) -> Self {
        let now = Utc::now();
        Self {
            product_id: Uuid::new_v4(),
            name,
            description,
            price: price.round_dp(2),
            quantity,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update.
    ///
    /// Preserved input-handling gap: empty strings and zero numerics count as
    /// "not provided", so a quantity of 0 or an empty description cannot be
    /// set through this path.
    pub fn apply(&mut self, changes: &ProductChanges) {
        if let Some(name) = &changes.name {
            if !name.trim().is_empty() {
                self.name = name.clone();
            }
        }
        if let Some(description) = &changes.description {
            if !description.trim().is_empty() {
                self.description = description.clone();
            }
        }
        if let Some(price) = changes.price {
            if !price.is_zero() {
                self.price = price.round_dp(2);
            }
        }
        if let Some(quantity) = changes.quantity {
            if quantity != 0 {
                self.quantity = quantity;
            }
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn widget() -> Product {
        Product::new("Widget".to_string(), "A widget".to_string(), dec!(9.99), 5)
    }

    #[test]
    fn test_new_rounds_price() {
        let product = Product::new("Widget".to_string(), String::new(), dec!(9.999), 5);
        assert_eq!(product.price, dec!(10.00));
    }

    #[test]
    fn test_apply_single_field_leaves_rest() {
        let mut product = widget();
        product.apply(&ProductChanges {
            price: Some(dec!(12.50)),
            ..Default::default()
        });

        assert_eq!(product.price, dec!(12.50));
        assert_eq!(product.name, "Widget");
        assert_eq!(product.description, "A widget");
        assert_eq!(product.quantity, 5);
    }

    #[test]
    fn test_apply_skips_empty_strings() {
        let mut product = widget();
        product.apply(&ProductChanges {
            name: Some(String::new()),
            description: Some("  ".to_string()),
            ..Default::default()
        });

        assert_eq!(product.name, "Widget");
        assert_eq!(product.description, "A widget");
    }

    #[test]
    fn test_apply_skips_zero_numerics() {
        // Documented gap: zero cannot be set through a partial update
        let mut product = widget();
        product.apply(&ProductChanges {
            price: Some(Decimal::ZERO),
            quantity: Some(0),
            ..Default::default()
        });

        assert_eq!(product.price, dec!(9.99));
        assert_eq!(product.quantity, 5);
    }

    #[test]
    fn test_apply_all_fields() {
        let mut product = widget();
        product.apply(&ProductChanges {
            name: Some("Gadget".to_string()),
            description: Some("A gadget".to_string()),
            price: Some(dec!(1.235)),
            quantity: Some(7),
        });

        assert_eq!(product.name, "Gadget");
        assert_eq!(product.description, "A gadget");
        assert_eq!(product.price, dec!(1.24));
        assert_eq!(product.quantity, 7);
    }
}
