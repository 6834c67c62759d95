//! Grid configuration.
//!
//! [`GridConfig`] holds the four values that shape the board: column count,
//! the two spacings and the layout direction. Hosts that read attributes from
//! markup can hand the text to [`GridConfig::from_toml_str`]:
//!
//! ```
//! use horizon_board::{GridConfig, LayoutDirection};
//!
//! let config = GridConfig::from_toml_str(r#"
//!     column_count = 3
//!     column_spacing = 10.0
//!     direction = "rtl"
//! "#).unwrap();
//!
//! assert_eq!(config.column_count, 3);
//! assert_eq!(config.row_spacing, 0.0);
//! assert_eq!(config.direction, LayoutDirection::RightToLeft);
//! ```

use serde::{Deserialize, Serialize};

use horizon_board_core::{ConfigError, Result};

/// Default number of columns.
pub const DEFAULT_COLUMN_COUNT: usize = 2;

/// Horizontal placement order of columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LayoutDirection {
    /// Column 0 sits at the left edge.
    #[default]
    #[serde(rename = "ltr")]
    LeftToRight,
    /// Column 0 sits at the right edge.
    #[serde(rename = "rtl")]
    RightToLeft,
}

impl LayoutDirection {
    /// Check if columns are mirrored.
    #[inline]
    pub fn is_rtl(self) -> bool {
        self == Self::RightToLeft
    }
}

/// Column count, spacing and direction of a board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of columns. Must be at least 1.
    pub column_count: usize,
    /// Gap between adjacent columns.
    pub column_spacing: f32,
    /// Gap between adjacent rows.
    pub row_spacing: f32,
    /// Column placement order.
    pub direction: LayoutDirection,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            column_count: DEFAULT_COLUMN_COUNT,
            column_spacing: 0.0,
            row_spacing: 0.0,
            direction: LayoutDirection::LeftToRight,
        }
    }
}

impl GridConfig {
    /// Create a configuration with the given column count and default spacing.
    pub fn new(column_count: usize) -> Self {
        Self {
            column_count,
            ..Self::default()
        }
    }

    /// Set the column spacing using builder pattern.
    pub fn with_column_spacing(mut self, spacing: f32) -> Self {
        self.column_spacing = spacing;
        self
    }

    /// Set the row spacing using builder pattern.
    pub fn with_row_spacing(mut self, spacing: f32) -> Self {
        self.row_spacing = spacing;
        self
    }

    /// Set the layout direction using builder pattern.
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Parse board attributes from TOML text.
    ///
    /// Missing keys take their defaults. The result is validated before it is
    /// returned.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: GridConfig =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration as TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))?)
    }

    /// Check every value against the grid's requirements.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        validate_column_count(self.column_count)?;
        validate_spacing("column spacing", self.column_spacing)?;
        validate_spacing("row spacing", self.row_spacing)?;
        Ok(())
    }

    /// Number of rows needed for `item_count` items.
    ///
    /// Returns 0 when the column count is invalid.
    pub fn row_count(&self, item_count: usize) -> usize {
        if self.column_count == 0 {
            return 0;
        }
        item_count.div_ceil(self.column_count)
    }

    /// Row and column of a position.
    #[inline]
    pub fn cell_of(&self, position: usize) -> (usize, usize) {
        let columns = self.column_count.max(1);
        (position / columns, position % columns)
    }
}

pub(crate) fn validate_column_count(count: usize) -> std::result::Result<(), ConfigError> {
    if count < 1 {
        return Err(ConfigError::ColumnCount(count));
    }
    Ok(())
}

pub(crate) fn validate_spacing(
    name: &'static str,
    value: f32,
) -> std::result::Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::Spacing { name, value });
    }
    Ok(())
}
