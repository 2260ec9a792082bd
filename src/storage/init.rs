//! Storage initialization
//!
//! Handles first-run setup and default data creation

use crate::config::paths::FinsightPaths;
use crate::config::settings::Settings;
use crate::error::FinsightError;
use crate::models::{Category, TransactionType};

use super::file_io::write_json_atomic;
use super::json_store::CategoryData;

/// Starter categories with their subcategories
const DEFAULT_CATEGORIES: &[(&str, TransactionType, &[&str])] = &[
    ("Salary", TransactionType::Income, &[]),
    ("Freelance", TransactionType::Income, &[]),
    ("Investments", TransactionType::Income, &["Dividends", "Interest"]),
    ("Housing", TransactionType::Expense, &["Rent", "Utilities", "Maintenance"]),
    ("Food", TransactionType::Expense, &["Groceries", "Dining Out"]),
    ("Transportation", TransactionType::Expense, &["Fuel", "Public Transit"]),
    ("Health", TransactionType::Expense, &[]),
    ("Entertainment", TransactionType::Expense, &["Subscriptions"]),
    ("Education", TransactionType::Expense, &[]),
];

/// Initialize storage for a fresh installation
///
/// Creates the directories, default settings and the starter categories.
/// Existing files are left untouched. Returns whether anything was created.
pub fn initialize_storage(paths: &FinsightPaths) -> Result<bool, FinsightError> {
    paths.ensure_directories()?;
    let mut created = false;

    if !paths.is_initialized() {
        Settings::default().save(paths)?;
        created = true;
    }

    if !paths.categories_file().exists() {
        write_json_atomic(
            paths.categories_file(),
            &CategoryData {
                categories: default_categories(),
            },
        )?;
        created = true;
    }

    if created {
        tracing::info!(dir = %paths.base_dir().display(), "Initialized data directory");
    }
    Ok(created)
}

/// Build the starter category list
pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(name, kind, subs)| {
            let mut category = Category::new(*name, *kind);
            for sub in *subs {
                category.add_subcategory(*sub);
            }
            category
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{JsonStore, RecordStore};
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_defaults_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsightPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(initialize_storage(&paths).unwrap());
        assert!(paths.is_initialized());

        let store = JsonStore::new(paths.clone());
        let categories = store.categories().unwrap();
        assert_eq!(categories.len(), DEFAULT_CATEGORIES.len());
        assert!(categories.iter().all(|c| c.validate().is_ok()));

        assert!(!initialize_storage(&paths).unwrap());
    }

    #[test]
    fn test_default_categories_cover_both_types() {
        let categories = default_categories();
        assert!(categories.iter().any(|c| c.kind == TransactionType::Income));
        let food = categories.iter().find(|c| c.name == "Food").unwrap();
        assert_eq!(food.subcategories.len(), 2);
        assert!(food.subcategories.iter().all(|s| s.category_id == food.id));
    }
}
