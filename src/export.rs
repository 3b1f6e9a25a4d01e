//! Text renderings of palettes: CSS custom properties, SCSS maps and
//! design-token JSON.

use std::fmt::{self, Write};
use serde_json::{Map, Value, json};
use crate::Palette;

/// Output formats of [`export`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Css,
    Scss,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] =
        [ExportFormat::Css, ExportFormat::Scss, ExportFormat::Json];

    /// File extension (without the dot).
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Css => "text/css",
            ExportFormat::Scss => "text/x-scss",
            ExportFormat::Json => "application/json",
        }
    }
}

/// Render `palettes` in the given format.
pub fn export<'a>(format: ExportFormat,
                  palettes: impl IntoIterator<Item = &'a Palette>) -> String {
    match format {
        ExportFormat::Css => to_css(palettes),
        ExportFormat::Scss => to_scss(palettes),
        ExportFormat::Json => to_json(palettes),
    }
}

/// Run a writer on a fresh `String`.
fn render(write: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut out = String::new();
    write(&mut out).expect("writing to a String cannot fail");
    out
}

/// One custom property `--{name}-{shade}` per swatch, all in a single
/// `:root` block.
pub fn write_css<'a>(out: &mut impl Write,
                     palettes: impl IntoIterator<Item = &'a Palette>)
                     -> fmt::Result {
    writeln!(out, ":root {{")?;
    for p in palettes {
        for (key, hex) in p.entries() {
            writeln!(out, "  --{}: {hex};", key.replace('.', "-"))?;
        }
    }
    writeln!(out, "}}")
}

/// One map `$palette-{k}` per palette, `k` counting from 1.
pub fn write_scss<'a>(out: &mut impl Write,
                      palettes: impl IntoIterator<Item = &'a Palette>)
                      -> fmt::Result {
    for (i, p) in palettes.into_iter().enumerate() {
        if i > 0 { writeln!(out)? }
        writeln!(out, "$palette-{}: (", i + 1)?;
        for (key, hex) in p.entries() {
            writeln!(out, "  '{key}': {hex},")?;
        }
        writeln!(out, ");")?;
    }
    Ok(())
}

/// See [`write_css`].
pub fn to_css<'a>(palettes: impl IntoIterator<Item = &'a Palette>) -> String {
    render(|out| write_css(out, palettes))
}

/// See [`write_scss`].
pub fn to_scss<'a>(palettes: impl IntoIterator<Item = &'a Palette>) -> String {
    render(|out| write_scss(out, palettes))
}

/// Nested object `{name: {shade: {"value": hex, "type": "color"}}}`,
/// pretty-printed with 2 spaces of indentation.  Groups are keyed by
/// [`Palette::name`], so a name containing `.` stays a group of its
/// own.  Palettes sharing a name are merged, the later ones taking
/// precedence.
pub fn to_json<'a>(palettes: impl IntoIterator<Item = &'a Palette>) -> String {
    let mut root = Map::new();
    for p in palettes {
        let group = root.entry(p.name())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(group) = group {
            for s in p {
                group.insert(s.shade().to_string(),
                             json!({ "value": s.hex(), "type": "color" }));
            }
        }
    }
    format!("{:#}", Value::Object(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palettes() -> Vec<Palette> {
        vec![Palette::generate("#4287f5", "blue").unwrap(),
             Palette::generate("000000", "ink").unwrap()]
    }

    #[test]
    fn css() {
        let css = to_css(&palettes());
        assert!(css.starts_with(":root {\n  --blue-100: #d9e7fd;\n"));
        assert!(css.contains("  --blue-500: #4287f5;\n"));
        assert!(css.contains("  --ink-500: 000000;\n"));
        assert!(css.ends_with("  --ink-900: #000000;\n}\n"));
        assert_eq!(css.matches(":root").count(), 1);
        assert_eq!(css.lines().count(), 2 + 18);
    }

    #[test]
    fn scss() {
        let scss = to_scss(&palettes());
        assert!(scss.starts_with("$palette-1: (\n  'blue.100': #d9e7fd,\n"));
        assert!(scss.contains("  'blue.900': #0d1a30,\n);\n\n$palette-2: (\n"));
        assert!(scss.ends_with("  'ink.900': #000000,\n);\n"));
    }

    #[test]
    fn json() {
        let text = to_json(&palettes());
        let v: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["blue"]["100"], json!({"value": "#d9e7fd", "type": "color"}));
        assert_eq!(v["ink"]["500"]["value"], "000000");
        let names: Vec<_> = v.as_object().unwrap().keys().cloned().collect();
        assert_eq!(names, ["blue", "ink"]);
        let shades: Vec<_> = v["blue"].as_object().unwrap().keys().cloned()
            .collect();
        assert_eq!(shades, ["100", "200", "300", "400", "500",
                            "600", "700", "800", "900"]);
        assert!(text.starts_with("{\n  \"blue\": {\n    \"100\": {\n"));
    }

    #[test]
    fn json_groups_by_palette_name() {
        let ps = [Palette::generate("#4287f5", "a.b").unwrap(),
                  Palette::generate("#000000", "a").unwrap()];
        let v: Value = serde_json::from_str(&to_json(&ps)).unwrap();
        let names: Vec<_> = v.as_object().unwrap().keys().cloned().collect();
        assert_eq!(names, ["a.b", "a"]);
        assert_eq!(v["a.b"]["100"]["value"], "#d9e7fd");
        assert_eq!(v["a"].as_object().unwrap().len(), 9);
        assert!(v["a"].get("b.100").is_none());
    }

    #[test]
    fn writers_append() {
        let ps = palettes();
        let mut out = String::from("/* generated */\n");
        write_css(&mut out, &ps).unwrap();
        assert!(out.starts_with("/* generated */\n:root {\n"));
        assert_eq!(&out["/* generated */\n".len() ..], to_css(&ps));
    }

    #[test]
    fn empty() {
        let none: Vec<Palette> = vec![];
        assert_eq!(export(ExportFormat::Css, &none), ":root {\n}\n");
        assert_eq!(export(ExportFormat::Scss, &none), "");
        assert_eq!(export(ExportFormat::Json, &none), "{}");
        for f in ExportFormat::ALL {
            assert!(f.mime_type().ends_with(f.extension()));
        }
    }
}
