//! List configuration.
//!
//! [`ListOptions`] holds the capability toggles of a list widget. Options can
//! be built in code or loaded from TOML:
//!
//! ```
//! use rowkit::ListOptions;
//!
//! let options = ListOptions::from_toml_str(r#"
//! allow_multiple = true
//! allow_reorder = true
//! "#)?;
//!
//! assert!(options.allow_multiple);
//! assert!(options.allow_select); // defaults fill the rest
//! # Ok::<(), rowkit::Error>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Capability toggles for a list widget.
///
/// Defaults: selection and deselection allowed; removal, multiple selection
/// and drag-to-reorder disabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListOptions {
    /// Delete/Backspace removes the selected models from the collection.
    pub allow_remove: bool,
    /// Rows can be selected at all.
    pub allow_select: bool,
    /// Clicking empty space or toggling a selected row deselects.
    pub allow_deselect: bool,
    /// More than one row can be selected.
    pub allow_multiple: bool,
    /// Rows can be reordered by drag and drop.
    pub allow_reorder: bool,
    /// Uniform row height in pixels, used for pointer hit testing.
    pub row_height: f32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            allow_remove: false,
            allow_select: true,
            allow_deselect: true,
            allow_multiple: false,
            allow_reorder: false,
            row_height: Self::DEFAULT_ROW_HEIGHT,
        }
    }
}

impl ListOptions {
    /// Default row height in pixels.
    pub const DEFAULT_ROW_HEIGHT: f32 = 24.0;

    /// Creates options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether removal is allowed.
    pub fn with_remove(mut self, allow: bool) -> Self {
        self.allow_remove = allow;
        self
    }

    /// Sets whether selection is allowed.
    pub fn with_select(mut self, allow: bool) -> Self {
        self.allow_select = allow;
        self
    }

    /// Sets whether deselection is allowed.
    pub fn with_deselect(mut self, allow: bool) -> Self {
        self.allow_deselect = allow;
        self
    }

    /// Sets whether multiple selection is allowed.
    pub fn with_multiple(mut self, allow: bool) -> Self {
        self.allow_multiple = allow;
        self
    }

    /// Sets whether drag-to-reorder is allowed.
    pub fn with_reorder(mut self, allow: bool) -> Self {
        self.allow_reorder = allow;
        self
    }

    /// Sets the uniform row height.
    pub fn with_row_height(mut self, height: f32) -> Self {
        self.row_height = height;
        self
    }

    /// Checks that the options are usable.
    pub fn validate(&self) -> Result<()> {
        if !self.row_height.is_finite() || self.row_height <= 0.0 {
            return Err(Error::InvalidRowHeight(self.row_height));
        }
        Ok(())
    }

    /// Parses and validates options from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let options: Self = toml::from_str(source)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&source)
    }

    /// Serializes the options to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ListOptions::default();
        assert!(!options.allow_remove);
        assert!(options.allow_select);
        assert!(options.allow_deselect);
        assert!(!options.allow_multiple);
        assert!(!options.allow_reorder);
        assert_eq!(options.row_height, 24.0);
    }

    #[test]
    fn test_builder() {
        let options = ListOptions::new()
            .with_remove(true)
            .with_multiple(true)
            .with_reorder(true)
            .with_row_height(30.0);
        assert!(options.allow_remove);
        assert!(options.allow_multiple);
        assert!(options.allow_reorder);
        assert_eq!(options.row_height, 30.0);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let options = ListOptions::from_toml_str("allow_remove = true\n").unwrap();
        assert!(options.allow_remove);
        assert!(options.allow_select);
        assert_eq!(options.row_height, ListOptions::DEFAULT_ROW_HEIGHT);
    }

    #[test]
    fn test_invalid_row_height_rejected() {
        let err = ListOptions::from_toml_str("row_height = 0.0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidRowHeight(h) if h == 0.0));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = ListOptions::from_toml_str("allow_remove = \"yes\"\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let options = ListOptions::new().with_multiple(true);
        let text = options.to_toml_string().unwrap();
        assert_eq!(ListOptions::from_toml_str(&text).unwrap(), options);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ListOptions::load("/nonexistent/rowkit/list.toml").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.toml");
        std::fs::write(&path, "allow_reorder = true\nrow_height = 18.0\n").unwrap();

        let options = ListOptions::load(&path).unwrap();
        assert!(options.allow_reorder);
        assert_eq!(options.row_height, 18.0);
    }
}
