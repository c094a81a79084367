use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque CSS declarations passed through to an element's `style` attribute.
///
/// Property names are used verbatim; no validation or unit handling happens
/// here. Declarations render in property-name order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, String>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; a repeated property replaces the earlier value.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    /// Copy of `self` with `other`'s declarations layered on top.
    pub fn merged(&self, other: &StyleMap) -> StyleMap {
        let mut out = self.clone();
        for (property, value) in &other.0 {
            out.0.insert(property.clone(), value.clone());
        }
        out
    }

    /// Render as an inline `style` attribute value.
    pub fn to_inline(&self) -> String {
        self.0
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_replaces_existing_property() {
        let mut style = StyleMap::new().with("text-align", "left");
        style.insert("text-align", "right");
        assert_eq!(style.to_inline(), "text-align: right;");
    }

    #[test]
    fn empty_renders_empty() {
        assert_eq!(StyleMap::new().to_inline(), "");
    }

    #[test]
    fn renders_sorted_declarations() {
        let style = StyleMap::new()
            .with("width", "300px")
            .with("margin-bottom", "20px");
        assert_eq!(style.to_inline(), "margin-bottom: 20px; width: 300px;");
    }

    #[test]
    fn merged_overrides_base() {
        let base = StyleMap::new().with("padding", "10px").with("color", "#555");
        let over = StyleMap::new().with("padding", "20px");
        let merged = base.merged(&over);
        assert_eq!(merged.to_inline(), "color: #555; padding: 20px;");
        assert_eq!(base.to_inline(), "color: #555; padding: 10px;");
    }

    #[test]
    fn deserializes_from_toml_table() {
        #[derive(Deserialize)]
        struct Wrapper {
            style: StyleMap,
        }
        let parsed: Wrapper = toml::from_str(
            r#"
            [style]
            font-size = "16px"
            padding = "10px"
            "#,
        )
        .unwrap();
        assert_eq!(parsed.style.to_inline(), "font-size: 16px; padding: 10px;");
    }
}
