#![forbid(unsafe_code)]

//! Split configuration as data.
//!
//! [`SplitConfig`] groups the divider width, the boundary constraints and
//! the starting defaults. With the `config` feature it can be loaded from
//! TOML or JSON:
//!
//! ```toml
//! # divider.toml
//! divider_width = 4
//!
//! [constraints]
//! left_min_width = 120
//! max_ratio = 80
//!
//! [defaults]
//! default_right_width = 320
//! ```
//!
//! ```rust,ignore
//! let config = SplitConfig::from_toml_file("divider.toml")?;
//! ```
//!
//! Loading rejects values that can never describe a layout (negative or
//! non-finite numbers). Bound pairs that contradict each other are accepted
//! and only logged: they make part of the range unreachable but break nothing.

#[cfg(feature = "config")]
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constraint::ConstraintSet;
use crate::defaults::DefaultSpec;

/// Divider width used when none is configured.
pub const DEFAULT_DIVIDER_WIDTH: f64 = 2.0;

/// Everything a split needs before its first layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Divider width in pixels, subtracted from the container width.
    pub divider_width: f64,
    /// Pane bounds.
    pub constraints: ConstraintSet,
    /// Starting ratio or pane width.
    pub defaults: DefaultSpec,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            divider_width: DEFAULT_DIVIDER_WIDTH,
            constraints: ConstraintSet::unconstrained(),
            defaults: DefaultSpec::default(),
        }
    }
}

impl SplitConfig {
    #[must_use]
    pub const fn with_divider_width(mut self, width: f64) -> Self {
        self.divider_width = width;
        self
    }

    #[must_use]
    pub const fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = constraints;
        self
    }

    #[must_use]
    pub const fn with_defaults(mut self, defaults: DefaultSpec) -> Self {
        self.defaults = defaults;
        self
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, SplitConfigError> {
        let config: Self = toml::from_str(s).map_err(SplitConfigError::Toml)?;
        config.checked()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SplitConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(SplitConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, SplitConfigError> {
        let config: Self = serde_json::from_str(s).map_err(SplitConfigError::Json)?;
        config.checked()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SplitConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(SplitConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Hard errors: negative or non-finite numbers.
    ///
    /// An empty list means the config is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.divider_width.is_finite() || self.divider_width < 0.0 {
            errors.push(format!(
                "divider_width must be finite and >= 0, got {}",
                self.divider_width
            ));
        }

        for (name, value) in self.numeric_fields() {
            if let Some(value) = value
                && (!value.is_finite() || value < 0.0)
            {
                errors.push(format!("{name} must be finite and >= 0, got {value}"));
            }
        }

        errors
    }

    /// Soft findings: contradictory or out-of-range bounds that load fine
    /// but leave part of the split unreachable.
    #[must_use]
    pub fn advisories(&self) -> Vec<String> {
        let c = &self.constraints;
        let mut notes = Vec::new();

        let pairs = [
            ("left_min_width", c.left_min_width, "left_max_width", c.left_max_width),
            ("right_min_width", c.right_min_width, "right_max_width", c.right_max_width),
            ("min_ratio", c.min_ratio, "max_ratio", c.max_ratio),
        ];
        for (min_name, min, max_name, max) in pairs {
            if let (Some(min), Some(max)) = (min, max)
                && min > max
            {
                notes.push(format!("{min_name} ({min}) exceeds {max_name} ({max})"));
            }
        }

        for (name, value) in [
            ("min_ratio", c.min_ratio),
            ("max_ratio", c.max_ratio),
            ("default_ratio", self.defaults.default_ratio),
        ] {
            if let Some(value) = value
                && value > 100.0
            {
                notes.push(format!("{name} ({value}) is above 100"));
            }
        }

        notes
    }

    fn numeric_fields(&self) -> [(&'static str, Option<f64>); 9] {
        let c = &self.constraints;
        let d = &self.defaults;
        [
            ("left_min_width", c.left_min_width),
            ("left_max_width", c.left_max_width),
            ("right_min_width", c.right_min_width),
            ("right_max_width", c.right_max_width),
            ("min_ratio", c.min_ratio),
            ("max_ratio", c.max_ratio),
            ("default_ratio", d.default_ratio),
            ("default_left_width", d.default_left_width),
            ("default_right_width", d.default_right_width),
        ]
    }

    #[cfg(feature = "config")]
    fn checked(self) -> Result<Self, SplitConfigError> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(SplitConfigError::Validation(errors));
        }
        for note in self.advisories() {
            tracing::warn!(advisory = %note, "split config accepted with unreachable range");
        }
        Ok(self)
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a split configuration.
#[derive(Debug)]
pub enum SplitConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for SplitConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for SplitConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid_and_quiet() {
        let config = SplitConfig::default();
        assert_eq!(config.divider_width, 2.0);
        assert!(config.constraints.is_unconstrained());
        assert!(config.validate().is_empty());
        assert!(config.advisories().is_empty());
    }

    #[test]
    fn negative_and_non_finite_values_are_errors() {
        let config = SplitConfig::default()
            .with_divider_width(-1.0)
            .with_constraints(ConstraintSet::default().with_left_min_width(f64::NAN))
            .with_defaults(DefaultSpec::left_width(f64::INFINITY));
        let errors = config.validate();
        assert_eq!(errors.len(), 3, "{errors:?}");
        assert!(errors[0].starts_with("divider_width"));
        assert!(errors[1].starts_with("left_min_width"));
        assert!(errors[2].starts_with("default_left_width"));
    }

    #[test]
    fn inverted_bounds_are_advisories_not_errors() {
        let config = SplitConfig::default().with_constraints(
            ConstraintSet::default()
                .with_left_min_width(300.0)
                .with_left_max_width(200.0)
                .with_min_ratio(70.0)
                .with_max_ratio(30.0),
        );
        assert!(config.validate().is_empty());
        let notes = config.advisories();
        assert_eq!(notes.len(), 2, "{notes:?}");
        assert_eq!(notes[0], "left_min_width (300) exceeds left_max_width (200)");
        assert_eq!(notes[1], "min_ratio (70) exceeds max_ratio (30)");
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_with_nested_tables() {
        let config = SplitConfig::from_toml_str(
            r#"
            divider_width = 4

            [constraints]
            left_min_width = 120
            max_ratio = 80.5

            [defaults]
            default_right_width = 320
            "#,
        )
        .expect("valid toml");
        assert_eq!(config.divider_width, 4.0);
        assert_eq!(config.constraints.left_min_width, Some(120.0));
        assert_eq!(config.constraints.max_ratio, Some(80.5));
        assert_eq!(config.constraints.right_max_width, None);
        assert_eq!(config.defaults.default_right_width, Some(320.0));
    }

    #[cfg(feature = "config")]
    #[test]
    fn empty_sources_give_defaults() {
        assert_eq!(
            SplitConfig::from_toml_str("").expect("empty toml"),
            SplitConfig::default()
        );
        assert_eq!(
            SplitConfig::from_json_str("{}").expect("empty json"),
            SplitConfig::default()
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn json_validation_failure_is_reported() {
        let err = SplitConfig::from_json_str(r#"{"divider_width": -3}"#)
            .expect_err("negative divider");
        assert!(matches!(err, SplitConfigError::Validation(ref e) if e.len() == 1));
        assert!(err.to_string().starts_with("validation errors: divider_width"));
    }

    #[cfg(feature = "config")]
    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SplitConfig::from_toml_str("divider_width = \"wide\"").expect_err("bad type");
        assert!(matches!(err, SplitConfigError::Toml(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[cfg(feature = "config")]
    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = SplitConfig::from_toml_file(dir.path().join("absent.toml"))
            .expect_err("missing file");
        assert!(matches!(err, SplitConfigError::Io(_)));
    }

    #[cfg(feature = "config")]
    #[test]
    fn json_file_round_trip_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("divider.json");
        let config = SplitConfig::default()
            .with_constraints(ConstraintSet::default().with_right_min_width(64.0))
            .with_defaults(DefaultSpec::ratio(35.0));
        std::fs::write(&path, serde_json::to_string(&config).expect("serialize")).expect("write");
        assert_eq!(SplitConfig::from_json_file(&path).expect("load"), config);
    }
}
