//! The placement pass.

use horizon_board_core::Rect;

use super::measure::RowHeightMap;
use crate::config::GridConfig;

/// Compute the bounds of every item, indexed by position.
///
/// Rows are stacked from `padding_top` with `row_spacing` between them.
/// Left-to-right, column 0 starts at `padding_start`; right-to-left, columns
/// are mirrored against `container_width` and `padding_start` is measured
/// from the right edge. Every item in a row takes the row's height, so
/// shorter items are top-aligned.
pub fn position_items(
    item_count: usize,
    config: &GridConfig,
    column_width: f32,
    rows: &RowHeightMap,
    container_width: f32,
    padding_start: f32,
    padding_top: f32,
) -> Vec<Rect> {
    let rtl = config.direction.is_rtl();

    let mut bounds = Vec::with_capacity(item_count);
    let mut top = padding_top;

    for position in 0..item_count {
        let (row, column) = config.cell_of(position);
        if column == 0 {
            top = padding_top + rows.offset_of(row, config.row_spacing);
        }

        let spacing = config.column_spacing * column as f32;
        let left = if rtl {
            container_width - padding_start - (column + 1) as f32 * column_width - spacing
        } else {
            padding_start + column as f32 * column_width + spacing
        };

        bounds.push(Rect::new(left, top, column_width, rows.height(row)));
    }

    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutDirection;

    fn rows(heights: &[f32]) -> RowHeightMap {
        let mut map = RowHeightMap::new();
        for (row, &height) in heights.iter().enumerate() {
            map.observe(row, height);
        }
        map
    }

    #[test]
    fn test_ltr_positions() {
        let config = GridConfig::new(3).with_column_spacing(10.0).with_row_spacing(5.0);
        let rows = rows(&[50.0, 25.0, 60.0]);

        let bounds = position_items(9, &config, 96.0, &rows, 310.0, 0.0, 0.0);

        assert_eq!(bounds.len(), 9);
        assert_eq!(bounds[0], Rect::new(0.0, 0.0, 96.0, 50.0));
        assert_eq!(bounds[4], Rect::new(106.0, 55.0, 96.0, 25.0));
        assert_eq!(bounds[8], Rect::new(212.0, 85.0, 96.0, 60.0));
    }

    #[test]
    fn test_rtl_positions_mirror() {
        let config = GridConfig::new(3)
            .with_column_spacing(10.0)
            .with_direction(LayoutDirection::RightToLeft);
        let rows = rows(&[50.0]);

        let bounds = position_items(3, &config, 96.0, &rows, 310.0, 0.0, 0.0);

        assert_eq!(bounds[0].left(), 214.0);
        assert_eq!(bounds[0].right(), 310.0);
        assert_eq!(bounds[1].left(), 108.0);
        assert_eq!(bounds[2].left(), 2.0);
        assert!(bounds[1].right() <= bounds[0].left());
        assert!(bounds[2].right() <= bounds[1].left());
    }

    #[test]
    fn test_padding_offsets() {
        let config = GridConfig::new(2).with_row_spacing(4.0);
        let rows = rows(&[10.0, 10.0]);

        let bounds = position_items(4, &config, 40.0, &rows, 100.0, 8.0, 6.0);

        assert_eq!(bounds[0].origin.x, 8.0);
        assert_eq!(bounds[0].origin.y, 6.0);
        assert_eq!(bounds[3].origin.y, 6.0 + 10.0 + 4.0);

        let rtl = config.with_direction(LayoutDirection::RightToLeft);
        let bounds = position_items(2, &rtl, 40.0, &rows, 100.0, 8.0, 6.0);
        assert_eq!(bounds[0].right(), 92.0);
    }

    #[test]
    fn test_row_shares_height() {
        let config = GridConfig::new(2);
        let rows = rows(&[30.0, 12.0]);

        let bounds = position_items(3, &config, 50.0, &rows, 100.0, 0.0, 0.0);

        assert_eq!(bounds[0].height(), bounds[1].height());
        assert_eq!(bounds[2].height(), 12.0);
        assert!(bounds[0].right() <= bounds[1].left());
    }

    #[test]
    fn test_empty() {
        let bounds = position_items(0, &GridConfig::default(), 50.0, &RowHeightMap::new(), 100.0, 0.0, 0.0);
        assert!(bounds.is_empty());
    }
}
