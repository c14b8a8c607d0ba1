//! Structural matching rules
//!
//! A [`SelectorSet`] describes where the answers live on the page: the
//! container signature, the result-item class, the name card, and how
//! positional field slots are tagged. Keeping these as data lets a changed
//! page layout be handled with a JSON file instead of a rebuild.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Placeholder replaced by the slot index in [`SelectorSet::field_marker`]
pub const INDEX_PLACEHOLDER: &str = "{index}";

/// Query object passed to the extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorSet {
    /// Classes that must all be present on the container element
    pub container: Vec<String>,
    /// Class carried by each result element inside the container
    pub item: String,
    /// Optional wrapper inside a result element that holds the squares
    pub scope: Option<String>,
    /// Class of the card holding the display name
    pub name_card: String,
    /// Class of the name text element inside the card
    pub name_text: String,
    /// Restrict field lookup to descendants carrying this class
    pub field_class: Option<String>,
    /// Substring template matched against raw class attributes, e.g. `square {index}`
    pub field_marker: String,
}

impl Default for SelectorSet {
    fn default() -> Self {
        Self {
            container: vec![
                "answers-container".to_string(),
                "classic-answers-container".to_string(),
            ],
            item: "classic-answer".to_string(),
            scope: Some("square-container".to_string()),
            name_card: "square".to_string(),
            name_text: "champion-icon-name".to_string(),
            field_class: Some("square".to_string()),
            field_marker: "square {index}".to_string(),
        }
    }
}

impl SelectorSet {
    /// Create a new selector set builder, seeded with the defaults
    pub fn builder() -> SelectorSetBuilder {
        SelectorSetBuilder::default()
    }

    /// Load and validate a selector set from a JSON file
    #[instrument]
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let selectors = Self::from_json_str(&raw)?;
        debug!(?selectors, "Loaded selector set");
        Ok(selectors)
    }

    /// Parse and validate a selector set from JSON text
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let selectors: Self = serde_json::from_str(raw)?;
        selectors.validate()?;
        Ok(selectors)
    }

    /// Reject selector sets that cannot match anything sensibly
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.container.is_empty() {
            return Err(ConfigError::Invalid("container needs at least one class".into()));
        }
        let mut classes: Vec<(&str, &str)> = self
            .container
            .iter()
            .map(|c| ("container", c.as_str()))
            .collect();
        classes.push(("item", self.item.as_str()));
        classes.push(("name_card", self.name_card.as_str()));
        classes.push(("name_text", self.name_text.as_str()));
        if let Some(scope) = &self.scope {
            classes.push(("scope", scope.as_str()));
        }
        if let Some(field_class) = &self.field_class {
            classes.push(("field_class", field_class.as_str()));
        }

        for (key, class) in classes {
            if class.is_empty() {
                return Err(ConfigError::Invalid(format!("{key} class is empty")));
            }
            if class.chars().any(char::is_whitespace) {
                return Err(ConfigError::Invalid(format!(
                    "{key} class {class:?} must be a single class token"
                )));
            }
        }

        if !self.field_marker.contains(INDEX_PLACEHOLDER) {
            return Err(ConfigError::Invalid(format!(
                "field_marker {:?} lacks {INDEX_PLACEHOLDER}",
                self.field_marker
            )));
        }
        Ok(())
    }

    /// Positional marker for slot `index`
    pub fn field_marker_for(&self, index: usize) -> String {
        self.field_marker.replace(INDEX_PLACEHOLDER, &index.to_string())
    }

    /// CSS-style rendering of the container signature, for diagnostics
    pub fn container_signature(&self) -> String {
        self.container.iter().map(|c| format!(".{c}")).collect()
    }
}

/// Builder for SelectorSet
#[derive(Default)]
pub struct SelectorSetBuilder {
    selectors: SelectorSet,
}

impl SelectorSetBuilder {
    /// Set the container classes
    pub fn container<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selectors.container = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the result item class
    pub fn item<S: Into<String>>(mut self, class: S) -> Self {
        self.selectors.item = class.into();
        self
    }

    /// Set or clear the item scope class
    pub fn scope(mut self, class: Option<&str>) -> Self {
        self.selectors.scope = class.map(String::from);
        self
    }

    /// Set the name card and name text classes
    pub fn name<S: Into<String>>(mut self, card: S, text: S) -> Self {
        self.selectors.name_card = card.into();
        self.selectors.name_text = text.into();
        self
    }

    /// Set or clear the field candidate class
    pub fn field_class(mut self, class: Option<&str>) -> Self {
        self.selectors.field_class = class.map(String::from);
        self
    }

    /// Set the positional marker template
    pub fn field_marker<S: Into<String>>(mut self, template: S) -> Self {
        self.selectors.field_marker = template.into();
        self
    }

    /// Build and validate the selector set
    pub fn build(self) -> Result<SelectorSet, ConfigError> {
        self.selectors.validate()?;
        Ok(self.selectors)
    }
}
