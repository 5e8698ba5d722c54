//! Page behaviour configuration.
//!
//! Every field defaults to the identifiers used by the site's markup, so an
//! empty JSON object (or no config at all) yields a working setup.

use crate::error::{PageError, PageResult};
use serde::{Deserialize, Serialize};

/// Id of the optional `<script type="application/json">` element carrying
/// a serialized [`PageConfig`].
pub const CONFIG_ELEMENT_ID: &str = "pagekit-config";

/// Classes applied to the navigation panel while the menu is open.
pub const DEFAULT_OPEN_CLASSES: [&str; 8] = [
    "flex",
    "flex-col",
    "absolute",
    "top-16",
    "left-0",
    "right-0",
    "bg-brand-dark",
    "p-4",
];

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Mobile menu toggle settings.
    pub menu: MenuConfig,
    /// Footer settings.
    pub footer: FooterConfig,
}

/// Element lookups and class names for the menu toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Id of the menu button.
    pub button_id: String,
    /// Id of the navigation panel.
    pub panel_id: String,
    /// Selector for the icon, resolved inside the button.
    pub icon_selector: String,
    /// Class that hides the panel.
    pub hidden_class: String,
    /// Layout classes present only while the menu is open.
    pub open_classes: Vec<String>,
    /// Attribute on the button mirroring the open state.
    pub expanded_attribute: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            button_id: "menuBtn".to_string(),
            panel_id: "nav".to_string(),
            icon_selector: "svg".to_string(),
            hidden_class: "hidden".to_string(),
            open_classes: DEFAULT_OPEN_CLASSES.iter().map(|c| c.to_string()).collect(),
            expanded_attribute: "aria-expanded".to_string(),
        }
    }
}

impl MenuConfig {
    /// Every class flipped on a toggle, visibility class first.
    pub fn toggled_classes(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.hidden_class.as_str())
            .chain(self.open_classes.iter().map(String::as_str))
    }

    /// Check lookups are non-empty and every class is a single distinct token.
    pub fn validate(&self) -> PageResult<()> {
        non_empty("menu.button_id", &self.button_id)?;
        non_empty("menu.panel_id", &self.panel_id)?;
        non_empty("menu.icon_selector", &self.icon_selector)?;
        non_empty("menu.expanded_attribute", &self.expanded_attribute)?;

        class_name("menu.hidden_class", &self.hidden_class)?;
        for (i, class) in self.open_classes.iter().enumerate() {
            class_name("menu.open_classes", class)?;
            if *class == self.hidden_class {
                return Err(PageError::InvalidConfig(format!(
                    "hidden class `{class}` is also listed in menu.open_classes"
                )));
            }
            if self.open_classes[..i].contains(class) {
                return Err(PageError::InvalidConfig(format!(
                    "duplicate open class `{class}`"
                )));
            }
        }
        Ok(())
    }
}

/// Footer element lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Id of the element showing the current year.
    pub year_id: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            year_id: "year".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> PageResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that lookups are non-empty and the class sets are coherent.
    pub fn validate(&self) -> PageResult<()> {
        self.menu.validate()?;
        non_empty("footer.year_id", &self.footer.year_id)
    }
}

fn non_empty(field: &str, value: &str) -> PageResult<()> {
    if value.trim().is_empty() {
        return Err(PageError::InvalidConfig(format!("{field} must not be empty")));
    }
    Ok(())
}

fn class_name(field: &str, value: &str) -> PageResult<()> {
    non_empty(field, value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(PageError::InvalidConfig(format!(
            "{field} entry `{value}` contains whitespace"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = PageConfig::from_json("{}").unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.menu.open_classes.len(), 8);
    }

    #[test]
    fn toggled_classes_lead_with_hidden() {
        let menu = MenuConfig::default();
        let classes: Vec<&str> = menu.toggled_classes().collect();
        assert_eq!(classes.len(), 9);
        assert_eq!(classes[0], "hidden");
        assert_eq!(&classes[1..], &DEFAULT_OPEN_CLASSES[..]);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            PageConfig::from_json(r#"{ "menu": { "button_id": "burger" } }"#).unwrap();
        assert_eq!(config.menu.button_id, "burger");
        assert_eq!(config.menu.panel_id, "nav");
        assert_eq!(config.footer.year_id, "year");
    }

    #[test]
    fn rejects_empty_ids() {
        let err = PageConfig::from_json(r#"{ "footer": { "year_id": " " } }"#).unwrap_err();
        assert!(matches!(err, PageError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_hidden_class_among_open_classes() {
        let err = PageConfig::from_json(r#"{ "menu": { "open_classes": ["flex", "hidden"] } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("hidden"));
    }

    #[test]
    fn rejects_duplicate_and_whitespace_classes() {
        assert!(PageConfig::from_json(r#"{ "menu": { "open_classes": ["flex", "flex"] } }"#)
            .is_err());
        assert!(PageConfig::from_json(r#"{ "menu": { "open_classes": ["flex col"] } }"#)
            .is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = PageConfig::from_json("{ menu").unwrap_err();
        assert!(matches!(err, PageError::Json(_)));
    }
}
