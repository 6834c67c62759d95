//! The measurement pass.
//!
//! Measuring computes a uniform column width, the height of every row and the
//! resulting content size. Rows are rebuilt from scratch on every pass.

use horizon_board_core::{Result, Size};

use crate::config::{validate_column_count, GridConfig};

/// A size constraint handed down by the host, or passed on to an item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeConstraint {
    /// The length is fixed.
    Exact(f32),
    /// The length may be anything up to the limit.
    AtMost(f32),
    /// No constraint.
    Unspecified,
}

impl SizeConstraint {
    /// The constraint's length, or 0 when unspecified.
    #[inline]
    pub fn size(self) -> f32 {
        match self {
            Self::Exact(size) | Self::AtMost(size) => size,
            Self::Unspecified => 0.0,
        }
    }

    /// Check if the length is fixed.
    #[inline]
    pub fn is_exact(self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

/// Maximum measured height per row, indexed by row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowHeightMap {
    heights: Vec<f32>,
}

impl RowHeightMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an item height in `row`, keeping the row's maximum.
    pub fn observe(&mut self, row: usize, height: f32) {
        if row >= self.heights.len() {
            self.heights.resize(row + 1, 0.0);
        }
        let entry = &mut self.heights[row];
        *entry = entry.max(height);
    }

    /// Height of a row, or 0 for a row that was never observed.
    #[inline]
    pub fn height(&self, row: usize) -> f32 {
        self.heights.get(row).copied().unwrap_or(0.0)
    }

    /// Number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.heights.len()
    }

    /// Sum of all row heights.
    pub fn total(&self) -> f32 {
        self.heights.iter().sum()
    }

    /// Vertical offset of `row` from the top of the content area.
    pub fn offset_of(&self, row: usize, row_spacing: f32) -> f32 {
        let prior: f32 = self.heights.iter().take(row).sum();
        prior + row_spacing * row as f32
    }

    /// Iterate over row heights in row order.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.heights.iter().copied()
    }
}

/// The result of a measurement pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GridMeasurement {
    /// Width of every column.
    pub column_width: f32,
    /// The constraint items were measured with.
    pub item_width: SizeConstraint,
    /// Height of every row.
    pub row_heights: RowHeightMap,
    /// Size of the content area, without padding.
    pub content_size: Size,
    /// Number of items measured.
    pub item_count: usize,
}

/// Measure `item_count` items laid out on a grid.
///
/// With an exact width, the column width is the available width minus the
/// inter-column gaps, split evenly and floored, and every item is measured
/// against it. Otherwise items are measured unconstrained and the column
/// width is the width of the last item measured.
///
/// `intrinsic` receives each position with the width constraint to measure
/// it under and returns the item's measured size.
#[tracing::instrument(
    skip(config, intrinsic),
    target = "horizon_board::layout",
    level = "trace"
)]
pub fn measure_grid<F>(
    available_width: f32,
    item_count: usize,
    config: &GridConfig,
    mut intrinsic: F,
    width_is_exact: bool,
) -> Result<GridMeasurement>
where
    F: FnMut(usize, SizeConstraint) -> Result<Size>,
{
    validate_column_count(config.column_count)?;

    let columns = config.column_count;
    let gaps = config.column_spacing * (columns - 1) as f32;

    let (mut column_width, item_width) = if width_is_exact {
        let width = ((available_width - gaps) / columns as f32).floor().max(0.0);
        (width, SizeConstraint::Exact(width))
    } else {
        (0.0, SizeConstraint::Unspecified)
    };

    let mut row_heights = RowHeightMap::new();
    for position in 0..item_count {
        let size = intrinsic(position, item_width)?;
        row_heights.observe(config.cell_of(position).0, size.height);
        if !width_is_exact {
            column_width = size.width;
        }
    }

    let content_height = match config.row_count(item_count) {
        0 => 0.0,
        rows => row_heights.total() + config.row_spacing * (rows - 1) as f32,
    };

    let content_width = if width_is_exact {
        available_width
    } else if item_count > 0 {
        column_width * columns as f32 + gaps
    } else {
        0.0
    };

    tracing::trace!(
        target: "horizon_board::layout",
        column_width,
        rows = row_heights.row_count(),
        content_width,
        content_height,
        "measured grid"
    );

    Ok(GridMeasurement {
        column_width,
        item_width,
        row_heights,
        content_size: Size::new(content_width, content_height),
        item_count,
    })
}
