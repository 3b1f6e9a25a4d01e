//! Read the list of base colors from an Hjson (or JSON) file:
//!
//! ```hjson
//! [
//!   { name: "blue", hex: "#4287f5" }
//!   {
//!     name: grey
//!     hex: aaaaaa
//!   }
//! ]
//! ```
//!
//! The list may also be given as the `colors` field of an object.

use std::{fs::File, path::Path};
use anyhow::{bail, Context, Result};
use serde_hjson::{Map, Value};
use tint_shade::ColorEntry;

/// Text of a string field, `None` if absent.  Numbers are accepted
/// so that `hex: 123456` is not silently dropped.
fn text_field(entry: &Map<String, Value>, field: &str)
              -> Result<Option<String>> {
    Ok(match entry.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::I64(n)) => Some(n.to_string()),
        Some(Value::U64(n)) => Some(n.to_string()),
        Some(v) => bail!("field {field:?} is not a string: {v:?}"),
    })
}

/// Convert the parsed document to entries.  A missing name defaults
/// to `Color {k}` and a missing hex to the empty string, which is
/// later reported as an invalid color.  Names may not contain `.`
/// since it separates the name from the shade in palette keys.
pub fn entries_of_value(doc: &Value) -> Result<Vec<ColorEntry>> {
    let list = match doc {
        Value::Array(a) => a,
        Value::Object(m) => match m.get("colors") {
            Some(Value::Array(a)) => a,
            _ => bail!("expected a `colors` array"),
        },
        _ => bail!("expected an array of {{ name, hex }} objects"),
    };
    list.iter().enumerate().map(|(i, e)| -> Result<ColorEntry> {
        let e = match e {
            Value::Object(e) => e,
            _ => bail!("color {} is not an object: {e:?}", i + 1),
        };
        let name = text_field(e, "name")
            .with_context(|| format!("color {}", i + 1))?
            .unwrap_or_else(|| format!("Color {}", i + 1));
        if name.contains('.') {
            bail!("color {}: name {name:?} must not contain '.'", i + 1)
        }
        let hex = text_field(e, "hex")
            .with_context(|| format!("color {}", i + 1))?
            .unwrap_or_default();
        Ok(ColorEntry::new(name, hex.trim()))
    }).collect()
}

pub fn read_entries(path: &Path) -> Result<Vec<ColorEntry>> {
    let fh = File::open(path)
        .with_context(|| format!("cannot open {}", path.display()))?;
    let doc: Value = serde_hjson::from_reader(fh)
        .with_context(|| format!("cannot parse {}", path.display()))?;
    entries_of_value(&doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Vec<ColorEntry>> {
        entries_of_value(&serde_hjson::from_str(s)?)
    }

    #[test]
    fn hjson_list() {
        let e = parse("[\n { name: \"blue\", hex: \"#4287f5\" }\n \
                       { hex: \" aaaaaa \" }\n {\n  name: x\n }\n]").unwrap();
        assert_eq!(e, [ColorEntry::new("blue", "#4287f5"),
                       ColorEntry::new("Color 2", "aaaaaa"),
                       ColorEntry::new("x", "")]);
    }

    #[test]
    fn colors_field() {
        let e = parse("{ \"colors\": [ { \"name\": \"r\", \"hex\": \"ff0000\" } ] }")
            .unwrap();
        assert_eq!(e, [ColorEntry::new("r", "ff0000")]);
    }

    #[test]
    fn malformed() {
        assert!(parse("[ 1, 2 ]").is_err());
        assert!(parse("{ \"colours\": [] }").is_err());
        assert!(parse("[ { \"name\": [\"a\"] } ]").is_err());
    }

    #[test]
    fn dotted_name_rejected() {
        let err = parse("[ { \"name\": \"a\", \"hex\": \"aaaaaa\" }, \
                           { \"name\": \"a.b\", \"hex\": \"bbbbbb\" } ]")
            .unwrap_err();
        assert_eq!(err.to_string(), "color 2: name \"a.b\" must not contain '.'");
    }
}
