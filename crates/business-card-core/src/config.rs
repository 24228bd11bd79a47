//! Loading attribute sets from JSON files and `name=value` arguments.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::attributes::AttributeSet;
use crate::error::{CardError, CardResult};

/// Default attribute file: `<config dir>/business-card/card.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("business-card").join("card.json"))
}

/// Read an attribute file from disk.
pub fn load_attributes(path: &Path) -> CardResult<AttributeSet> {
    let raw = std::fs::read_to_string(path)?;
    let attrs = parse_attributes(&raw)?;
    tracing::debug!(path = %path.display(), count = attrs.len(), "loaded attribute file");
    Ok(attrs)
}

/// Write an attribute set as a JSON object of strings.
///
/// Presence attributes are written with an empty value, which
/// [`parse_attributes`] reads back as present.
pub fn save_attributes(path: &Path, attrs: &AttributeSet) -> CardResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(attrs)?;
    std::fs::write(path, json)?;
    tracing::debug!(path = %path.display(), count = attrs.len(), "saved attribute file");
    Ok(())
}

/// Parse a JSON object of attribute name to value.
///
/// Strings are taken verbatim and numbers stringified. `true` sets a
/// present attribute with an empty value; `false` and `null` leave the
/// attribute absent.
pub fn parse_attributes(raw: &str) -> CardResult<AttributeSet> {
    let object: Map<String, Value> = serde_json::from_str(raw)?;
    let mut attrs = AttributeSet::new();

    for (name, value) in object {
        match value {
            Value::String(s) => {
                attrs.set(name, s);
            }
            Value::Number(n) => {
                attrs.set(name, n.to_string());
            }
            Value::Bool(true) => {
                attrs.set(name, "");
            }
            Value::Bool(false) | Value::Null => {}
            Value::Array(_) | Value::Object(_) => {
                return Err(CardError::InvalidAttributeValue {
                    name,
                    reason: "expected a string, number, boolean or null".to_string(),
                });
            }
        }
    }

    Ok(attrs)
}

/// Parse one `name=value` argument. A bare `name` is a present attribute
/// with an empty value.
pub fn parse_attribute_arg(arg: &str) -> CardResult<(String, String)> {
    let (name, value) = arg.split_once('=').unwrap_or((arg, ""));
    let name = name.trim();
    if name.is_empty() {
        return Err(CardError::InvalidAttributeArg(arg.to_string()));
    }
    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_value_kinds() {
        let attrs = parse_attributes(
            r#"{"brand": "Acme", "phone": 5551234, "show-qr": true, "floating": false, "logo": null}"#,
        )
        .unwrap();
        assert_eq!(attrs.get("brand"), Some("Acme"));
        assert_eq!(attrs.get("phone"), Some("5551234"));
        assert_eq!(attrs.get("show-qr"), Some(""));
        assert!(!attrs.contains("floating"));
        assert!(!attrs.contains("logo"));
    }

    #[test]
    fn rejects_nested_values() {
        let err = parse_attributes(r#"{"brand": ["a"]}"#).unwrap_err();
        assert!(matches!(err, CardError::InvalidAttributeValue { ref name, .. } if name == "brand"));
    }

    #[test]
    fn rejects_non_object() {
        assert!(matches!(parse_attributes("[]"), Err(CardError::Json(_))));
    }

    #[test]
    fn attribute_args() {
        assert_eq!(
            parse_attribute_arg("brand=Acme Co").unwrap(),
            ("brand".to_string(), "Acme Co".to_string())
        );
        assert_eq!(
            parse_attribute_arg("floating").unwrap(),
            ("floating".to_string(), String::new())
        );
        assert_eq!(
            parse_attribute_arg("address=Calle 1 = 2").unwrap().1,
            "Calle 1 = 2"
        );
        assert!(matches!(
            parse_attribute_arg("=x"),
            Err(CardError::InvalidAttributeArg(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.json");
        std::fs::write(&path, r#"{"variant": "navy"}"#).unwrap();
        let attrs = load_attributes(&path).unwrap();
        assert_eq!(attrs.get("variant"), Some("navy"));
    }

    #[test]
    fn save_then_load_keeps_every_attribute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("card.json");
        let attrs = AttributeSet::new()
            .with("brand", "Acme")
            .with("show-qr", "")
            .with("data-id", "7");
        save_attributes(&path, &attrs).unwrap();
        assert_eq!(load_attributes(&path).unwrap(), attrs);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_attributes(Path::new("/nonexistent/card.json")).unwrap_err();
        assert!(matches!(err, CardError::Io(_)));
    }
}
