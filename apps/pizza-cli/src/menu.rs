//! Menu loading.
//!
//! The built-in catalog is used unless a menu file is configured. Menu
//! files are JSON in the shape of [`pizza_core::MenuFile`].

use std::fs;
use std::path::Path;

use pizza_core::{Menu, MenuFile};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Loads the menu from `path`, or the built-in catalog when `None`.
pub fn load_menu(path: Option<&Path>) -> CliResult<Menu> {
    let Some(path) = path else {
        debug!("Using built-in menu");
        return Ok(Menu::standard());
    };

    let raw = fs::read_to_string(path).map_err(|source| CliError::MenuRead {
        path: path.to_path_buf(),
        source,
    })?;

    let file: MenuFile = serde_json::from_str(&raw).map_err(|source| CliError::MenuParse {
        path: path.to_path_buf(),
        source,
    })?;

    let menu = Menu::try_from(file).map_err(|source| CliError::MenuInvalid {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        bases = menu.bases().len(),
        sizes = menu.sizes().len(),
        toppings = menu.toppings().len(),
        "Menu loaded"
    );
    Ok(menu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizza_core::{PizzaBase, Topping};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn menu_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_builtin_menu() {
        let menu = load_menu(None).unwrap();
        assert_eq!(menu.bases().len(), 2);
    }

    #[test]
    fn test_menu_from_file() {
        let file = menu_file(
            r#"{
                "bases": [{ "name": "Cauliflower", "price_cents": 800 }],
                "sizes": [{ "name": "Personal", "price_cents": 0 }],
                "toppings": [
                    { "name": "Basil", "price_cents": 50 },
                    { "name": "Feta", "description": "Crumbled feta", "price_cents": 125 }
                ]
            }"#,
        );

        let menu = load_menu(Some(file.path())).unwrap();
        assert_eq!(menu.bases()[0].name(), "Cauliflower");
        assert_eq!(menu.toppings().len(), 2);
        assert_eq!(menu.toppings()[1].description(), "Crumbled feta");
    }

    #[test]
    fn test_missing_file() {
        let err = load_menu(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(err, CliError::MenuRead { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let file = menu_file("{ \"bases\": [");
        let err = load_menu(Some(file.path())).unwrap_err();
        assert!(matches!(err, CliError::MenuParse { .. }));
    }

    #[test]
    fn test_invalid_menu_contents() {
        let file = menu_file(r#"{ "bases": [], "sizes": [], "toppings": [] }"#);
        let err = load_menu(Some(file.path())).unwrap_err();
        assert!(matches!(err, CliError::MenuInvalid { .. }));
    }
}
