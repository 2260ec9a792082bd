//! Category and Subcategory models
//!
//! Categories classify transactions and carry an income/expense polarity.
//! Subcategories have no polarity of their own; they inherit it from the
//! parent category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, SubcategoryId};
use super::transaction::TransactionType;

/// A subcategory nested under a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: SubcategoryId,
    pub name: String,
    pub category_id: CategoryId,
}

impl Subcategory {
    /// Create a new subcategory under a category
    pub fn new(name: impl Into<String>, category_id: CategoryId) -> Self {
        Self {
            id: SubcategoryId::new(),
            name: name.into(),
            category_id,
        }
    }
}

fn default_color() -> String {
    "#6b7280".to_string()
}

/// A user-defined transaction category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Income or expense polarity
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Display color (hex string); opaque to the engine
    #[serde(default = "default_color")]
    pub color: String,

    /// Ordered subcategories
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    /// Create a new category with no subcategories
    pub fn new(name: impl Into<String>, kind: TransactionType) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            kind,
            color: default_color(),
            subcategories: Vec::new(),
        }
    }

    /// Append a subcategory and return its id
    pub fn add_subcategory(&mut self, name: impl Into<String>) -> SubcategoryId {
        let sub = Subcategory::new(name, self.id);
        let id = sub.id;
        self.subcategories.push(sub);
        id
    }

    /// Find a subcategory by id
    pub fn subcategory(&self, id: SubcategoryId) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| s.id == id)
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if let Some(sub) = self
            .subcategories
            .iter()
            .find(|s| s.category_id != self.id)
        {
            return Err(CategoryValidationError::ForeignSubcategory(sub.name.clone()));
        }

        if self.subcategories.iter().any(|s| s.name.trim().is_empty()) {
            return Err(CategoryValidationError::EmptyName);
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    ForeignSubcategory(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
            Self::ForeignSubcategory(name) => {
                write!(f, "Subcategory '{}' belongs to another category", name)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_subcategory() {
        let mut food = Category::new("Food", TransactionType::Expense);
        let groceries = food.add_subcategory("Groceries");
        food.add_subcategory("Restaurants");

        assert_eq!(food.subcategories.len(), 2);
        assert_eq!(food.subcategory(groceries).unwrap().name, "Groceries");
        assert_eq!(food.subcategories[0].category_id, food.id);
        assert!(food.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut cat = Category::new("", TransactionType::Income);
        assert_eq!(cat.validate(), Err(CategoryValidationError::EmptyName));

        cat.name = "Salary".into();
        cat.subcategories
            .push(Subcategory::new("Bonus", CategoryId::new()));
        assert_eq!(
            cat.validate(),
            Err(CategoryValidationError::ForeignSubcategory("Bonus".into()))
        );
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Transport",
            "type": "expense"
        }"#;
        let cat: Category = serde_json::from_str(json).unwrap();
        assert_eq!(cat.kind, TransactionType::Expense);
        assert!(cat.subcategories.is_empty());
        assert_eq!(cat.color, "#6b7280");
    }
}
