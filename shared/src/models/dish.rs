//! Dish Model

use serde::{Deserialize, Serialize};

/// Fixed set of menu categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DishCategory {
    /// House signature dishes
    Signature,
    /// Meat dishes
    Meat,
    /// Vegetable dishes
    Vegetable,
    /// Cold plates
    Cold,
    /// Soups
    Soup,
}

impl DishCategory {
    /// All categories in menu display order
    pub const ALL: [DishCategory; 5] = [
        DishCategory::Signature,
        DishCategory::Meat,
        DishCategory::Vegetable,
        DishCategory::Cold,
        DishCategory::Soup,
    ];
}

/// Quantity of a named ingredient, sourced from a specific vendor,
/// needed per table for one dish
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IngredientRequirement {
    /// Ingredient name
    pub item: String,
    /// Quantity per table (non-negative)
    pub amount: f64,
    /// Unit of measure
    pub unit: String,
    /// Supplying vendor
    pub vendor: String,
}

/// Dish entity (immutable catalog entry)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dish {
    /// Unique, stable identifier
    pub id: String,
    pub name: String,
    pub category: DishCategory,
    /// Cost per table (non-negative)
    pub cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ingredient requirements per table
    #[serde(default)]
    pub ingredients: Vec<IngredientRequirement>,
}

/// Built-in fallback menu, used when the catalog source is empty or
/// unreachable
pub fn default_catalog() -> Vec<Dish> {
    vec![
        Dish {
            id: "1".to_string(),
            name: "Supreme Buddha Jumps Over the Wall".to_string(),
            category: DishCategory::Signature,
            cost: 120.0,
            image: None,
            description: Some("Prized ingredients, the centerpiece of any banquet.".to_string()),
            ingredients: vec![
                IngredientRequirement {
                    item: "sea cucumber".to_string(),
                    amount: 0.1,
                    unit: "kg".to_string(),
                    vendor: "dried goods".to_string(),
                },
                IngredientRequirement {
                    item: "abalone".to_string(),
                    amount: 2.0,
                    unit: "pc".to_string(),
                    vendor: "seafood".to_string(),
                },
            ],
        },
        Dish {
            id: "2".to_string(),
            name: "Braised Pork Belly".to_string(),
            category: DishCategory::Meat,
            cost: 40.0,
            image: None,
            description: Some("Rich but not greasy, melts in the mouth.".to_string()),
            ingredients: vec![IngredientRequirement {
                item: "pork belly".to_string(),
                amount: 0.5,
                unit: "kg".to_string(),
                vendor: "butcher".to_string(),
            }],
        },
        Dish {
            id: "3".to_string(),
            name: "Stir-Fried Seasonal Greens".to_string(),
            category: DishCategory::Vegetable,
            cost: 10.0,
            image: None,
            description: Some("Fresh seasonal vegetables, light and crisp.".to_string()),
            ingredients: vec![IngredientRequirement {
                item: "leafy greens".to_string(),
                amount: 0.4,
                unit: "kg".to_string(),
                vendor: "greengrocer".to_string(),
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_ids_are_unique() {
        let catalog = default_catalog();
        let mut ids: Vec<&str> = catalog.iter().map(|d| d.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_default_catalog_costs_non_negative() {
        for dish in default_catalog() {
            assert!(dish.cost >= 0.0);
            for ing in &dish.ingredients {
                assert!(ing.amount >= 0.0);
            }
        }
    }

    #[test]
    fn test_dish_serde_round_trip() {
        let dish = default_catalog().remove(0);
        let json = serde_json::to_string(&dish).unwrap();
        let back: Dish = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dish);
    }
}
