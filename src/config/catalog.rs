//! Catalog seed configuration loading from config.toml
//!
//! This module provides functionality to load the initial product catalog
//! and the sample reviews from a TOML configuration file. The entries
//! defined there are used to seed the database on first run.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    /// Products to seed the catalog with
    pub products: Vec<ProductSeed>,
    /// Sample reviews to seed the feedback board with
    #[serde(default)]
    pub feedback: Vec<FeedbackSeed>,
}

/// Configuration for a single catalog product
#[derive(Debug, Deserialize, Clone)]
pub struct ProductSeed {
    /// Stable product id (e.g., `"p1"`)
    pub id: String,
    /// Display title
    pub title: String,
    /// Short description
    pub description: String,
    /// Struck-through display price
    pub old_price: f64,
    /// Selling price
    pub price: f64,
}

/// Configuration for a single sample review
#[derive(Debug, Deserialize, Clone)]
pub struct FeedbackSeed {
    /// Reviewer name
    pub name: String,
    /// Star rating, 1 through 5
    pub rating: i32,
    /// Review text
    pub comment: String,
}

/// Loads the catalog seed configuration from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read catalog config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog config: {e}"),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_catalog_config() {
        let toml_str = r#"
            [[products]]
            id = "p1"
            title = "Personalized Video Gift"
            description = "1-2 min emotional edit"
            old_price = 799.0
            price = 99.0

            [[products]]
            id = "p2"
            title = "Couple Story Edit"
            description = "Cinematic couple edit"
            old_price = 899.0
            price = 112.0

            [[feedback]]
            name = "Asha"
            rating = 5
            comment = "Beautiful edit!"
        "#;

        let config: CatalogConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.products.len(), 2);
        assert_eq!(config.products[0].id, "p1");
        assert_eq!(config.products[0].price, 99.0);
        assert_eq!(config.products[1].title, "Couple Story Edit");

        assert_eq!(config.feedback.len(), 1);
        assert_eq!(config.feedback[0].rating, 5);
    }

    #[test]
    fn test_feedback_section_optional() {
        let toml_str = r#"
            [[products]]
            id = "p1"
            title = "Custom Collage"
            description = "Stylish photo collage"
            old_price = 499.0
            price = 60.0
        "#;

        let config: CatalogConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.products.len(), 1);
        assert!(config.feedback.is_empty());
    }
}
