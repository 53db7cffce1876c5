//! Character canvas built from parsed records.

use std::fmt;

use crate::types::{DocGridError, DocGridResult, Point};

/// Fill character for cells no record writes to.
pub const BLANK: char = ' ';

/// Largest canvas `from_points` will allocate, in cells.
pub const MAX_CELLS: usize = 1 << 24;

/// A row-major character grid sized to the largest record coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Build a grid from records in document order.
    ///
    /// The grid is `max_y + 1` rows by `max_x + 1` columns. Records are
    /// written in order, so a later record at the same coordinates replaces
    /// an earlier one. Returns `Ok(None)` when `points` is empty, and
    /// [`DocGridError::GridTooLarge`] when the canvas would exceed
    /// [`MAX_CELLS`].
    pub fn from_points(points: &[Point]) -> DocGridResult<Option<Self>> {
        let (Some(max_x), Some(max_y)) = (
            points.iter().map(|p| p.x).max(),
            points.iter().map(|p| p.y).max(),
        ) else {
            return Ok(None);
        };

        let too_large = || DocGridError::GridTooLarge {
            max_x,
            max_y,
            limit: MAX_CELLS,
        };

        let width = max_x.checked_add(1).ok_or_else(too_large)?;
        let height = max_y.checked_add(1).ok_or_else(too_large)?;
        let area = width
            .checked_mul(height)
            .filter(|&n| n <= MAX_CELLS)
            .ok_or_else(too_large)?;

        let mut cells = vec![BLANK; area];
        for p in points {
            cells[p.y * width + p.x] = p.ch;
        }

        tracing::debug!(
            "built {height}x{width} grid from {} records",
            points.len()
        );

        Ok(Some(Self {
            width,
            height,
            cells,
        }))
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Character at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    /// Rows from top (y = 0) to bottom, each as a string.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().collect())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(&row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_points_no_grid() {
        assert!(Grid::from_points(&[]).unwrap().is_none());
    }

    #[test]
    fn test_single_origin_point() {
        let grid = Grid::from_points(&[Point::new('x', 0, 0)]).unwrap().unwrap();
        assert_eq!(grid.width(), 1);
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.to_string(), "x");
    }

    #[test]
    fn test_dimensions_follow_max_coordinates() {
        let grid = Grid::from_points(&[Point::new('a', 4, 0), Point::new('b', 0, 2)])
            .unwrap()
            .unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 3);
        assert!(grid.rows().all(|r| r.chars().count() == 5));
    }

    #[test]
    fn test_unassigned_cells_are_blank() {
        let grid = Grid::from_points(&[Point::new('#', 2, 1)]).unwrap().unwrap();
        assert_eq!(grid.get(0, 0), Some(BLANK));
        assert_eq!(grid.get(1, 1), Some(BLANK));
        assert_eq!(grid.get(2, 1), Some('#'));
    }

    #[test]
    fn test_last_write_wins() {
        let grid = Grid::from_points(&[
            Point::new('a', 1, 1),
            Point::new('b', 1, 1),
            Point::new('c', 0, 0),
        ])
        .unwrap()
        .unwrap();
        assert_eq!(grid.get(1, 1), Some('b'));
        assert_eq!(grid.get(0, 0), Some('c'));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::from_points(&[Point::new('a', 1, 1)]).unwrap().unwrap();
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_display_rows_top_to_bottom() {
        let grid = Grid::from_points(&[Point::new('A', 0, 0), Point::new('B', 2, 1)])
            .unwrap()
            .unwrap();
        assert_eq!(grid.rows().collect::<Vec<_>>(), vec!["A  ", "  B"]);
        assert_eq!(grid.to_string(), "A  \n  B");
    }

    #[test]
    fn test_wide_characters_occupy_one_cell() {
        let grid =
            Grid::from_points(&[Point::new('\u{2588}', 0, 0), Point::new('\u{2591}', 1, 0)])
                .unwrap()
                .unwrap();
        assert_eq!(grid.to_string(), "\u{2588}\u{2591}");
    }

    #[test]
    fn test_max_coordinate_rejected() {
        let err = Grid::from_points(&[Point::new('A', usize::MAX, 0)]).unwrap_err();
        assert!(matches!(
            err,
            DocGridError::GridTooLarge { max_x: usize::MAX, max_y: 0, .. }
        ));
    }

    #[test]
    fn test_area_overflow_rejected() {
        let err = Grid::from_points(&[Point::new('A', 1usize << 32, 1usize << 32)]).unwrap_err();
        assert!(matches!(err, DocGridError::GridTooLarge { .. }));
    }

    #[test]
    fn test_area_over_limit_rejected() {
        let err = Grid::from_points(&[Point::new('A', 99_999, 99_999)]).unwrap_err();
        assert!(matches!(err, DocGridError::GridTooLarge { limit: MAX_CELLS, .. }));
    }
}
