//! Parser for menu files.
//!
//! A menu file is a JSON array of dish objects:
//!
//! ```json
//! [
//!   { "name": "Egg Curry", "type": "Curry", "gravy": "Red", "description": "spicy egg curry" }
//! ]
//! ```

use crate::error::{MenuLoadError, Result};
use crate::types::Dish;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read and parse a menu file from disk.
pub fn parse_menu(path: &Path) -> Result<Vec<Dish>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => MenuLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => MenuLoadError::IoError(e),
    })?;

    parse_menu_named(&content, &path.display().to_string())
}

/// Parse menu JSON that is already in memory.
pub fn parse_menu_str(content: &str) -> Result<Vec<Dish>> {
    parse_menu_named(content, "<inline>")
}

fn parse_menu_named(content: &str, source: &str) -> Result<Vec<Dish>> {
    serde_json::from_str(content).map_err(|e| MenuLoadError::ParseError {
        path: source.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_menu_str() {
        let json = r#"[
            {"name": "Egg Curry", "type": "Curry", "gravy": "Red", "description": "spicy egg curry"},
            {"name": "Paneer Rice", "type": "Rice", "gravy": "White", "description": "creamy paneer rice"}
        ]"#;

        let dishes = parse_menu_str(json).unwrap();
        assert_eq!(dishes.len(), 2);
        assert_eq!(dishes[0].kind, "Curry");
        assert_eq!(dishes[1].gravy, "White");
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let json = r#"[{"name": "Egg Curry", "type": "Curry", "gravy": "Red"}]"#;
        let err = parse_menu_str(json).unwrap_err();
        assert!(matches!(err, MenuLoadError::ParseError { .. }));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_menu_str(r#"{"menu": []}"#).unwrap_err();
        assert!(matches!(err, MenuLoadError::ParseError { .. }));
    }

    #[test]
    fn test_parse_keeps_extra_keys() {
        let json = r#"[{"name": "Egg Curry", "type": "Curry", "gravy": "Red",
                        "description": "spicy egg curry", "image": "egg_curry.jpg"}]"#;

        let dishes = parse_menu_str(json).unwrap();
        assert_eq!(dishes[0].extra["image"], "egg_curry.jpg");
        assert!(!dishes[0].extra.contains_key("type"));
    }

    #[test]
    fn test_parse_menu_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Veg Snack", "type": "Snack", "gravy": "None", "description": "crispy veg snack"}}]"#
        )
        .unwrap();

        let dishes = parse_menu(file.path()).unwrap();
        assert_eq!(dishes.len(), 1);
        assert_eq!(dishes[0].name, "Veg Snack");
    }

    #[test]
    fn test_missing_file() {
        let err = parse_menu(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, MenuLoadError::FileNotFound { .. }));
    }
}
