//! Ordered category targets for catalog harvests.
//!
//! Categories are read from a YAML sequence so the harvest visits them in
//! file order.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTarget {
    pub name: String,
    /// Search or browse page listing the category's products.
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoriesFile {
    pub categories: Vec<CategoryTarget>,
}

/// Load and validate the category list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_categories(path: &Path) -> Result<CategoriesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CategoriesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: CategoriesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CategoriesFileParse)?;

    validate_categories(&file)?;

    Ok(file)
}

fn validate_categories(file: &CategoriesFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();

    for category in &file.categories {
        if category.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "category name must be non-empty".to_string(),
            ));
        }

        if !(category.url.starts_with("http://") || category.url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "category '{}' has non-http url '{}'",
                category.name, category.url
            )));
        }

        if !seen_names.insert(category.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category name: '{}'",
                category.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(name: &str, url: &str) -> CategoryTarget {
        CategoryTarget {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn yaml_preserves_declaration_order() {
        let yaml = r"
categories:
  - name: Smart Locks
    url: https://us.amazon.com/s?k=smart+locks
  - name: Robot Vacuums
    url: https://us.amazon.com/s?k=robot+vacuum
  - name: Smart Garden
    url: https://us.amazon.com/s?k=smart+garden
";
        let file: CategoriesFile = serde_yaml::from_str(yaml).unwrap();
        let names: Vec<&str> = file.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Smart Locks", "Robot Vacuums", "Smart Garden"]);
        assert!(validate_categories(&file).is_ok());
    }

    #[test]
    fn validate_rejects_empty_name() {
        let file = CategoriesFile {
            categories: vec![target("  ", "https://example.com")],
        };
        let err = validate_categories(&file).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn validate_rejects_non_http_url() {
        let file = CategoriesFile {
            categories: vec![target("Plugs", "ftp://example.com")],
        };
        let err = validate_categories(&file).unwrap_err();
        assert!(err.to_string().contains("non-http url"));
    }

    #[test]
    fn validate_rejects_duplicate_names_case_insensitively() {
        let file = CategoriesFile {
            categories: vec![
                target("Smart Plugs", "https://example.com/a"),
                target("smart plugs", "https://example.com/b"),
            ],
        };
        let err = validate_categories(&file).unwrap_err();
        assert!(err.to_string().contains("duplicate category name"));
    }

    #[test]
    fn load_categories_reports_missing_file() {
        let err = load_categories(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::CategoriesFileIo { .. }));
    }
}
