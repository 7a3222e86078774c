//! Grid addressing: maps the label alphabet onto screen pixel space.

use std::ops::Range;

use crate::grid::pan::PanOffset;

/// Labels used to address columns and rows, in grid order.
pub const LABELS: [char; 35] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

pub const GRID_SIZE: usize = LABELS.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i64,
    pub y: i64,
}

impl std::fmt::Display for ScreenPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    width: u32,
    height: u32,
    cell_width: u32,
    cell_height: u32,
}

impl GridLayout {
    /// Cell sizes round up so `GRID_SIZE` cells always cover the screen.
    pub fn new(width: u32, height: u32) -> Self {
        let n = GRID_SIZE as u32;
        Self {
            width,
            height,
            cell_width: width.div_ceil(n),
            cell_height: height.div_ceil(n),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_width(&self) -> u32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> u32 {
        self.cell_height
    }

    pub fn grid_size(&self) -> usize {
        GRID_SIZE
    }

    pub fn column_span(&self, index: usize) -> Range<i64> {
        let w = self.cell_width as i64;
        (index as i64 * w)..((index as i64 + 1) * w)
    }

    pub fn row_span(&self, index: usize) -> Range<i64> {
        let h = self.cell_height as i64;
        (index as i64 * h)..((index as i64 + 1) * h)
    }

    /// Column containing buffer x coordinate `x`, if it lies on the grid.
    pub fn column_at(&self, x: i64) -> Option<usize> {
        if x < 0 || self.cell_width == 0 {
            return None;
        }
        let column = (x / self.cell_width as i64) as usize;
        (column < GRID_SIZE).then_some(column)
    }

    /// Screen position addressed by column `cx` and row `cy` with the canvas
    /// panned by `pan` steps of `grid_step` pixels.
    ///
    /// Indices are not bounds checked: the zero key decodes to one past the
    /// last label and still resolves to a position beyond the final cell.
    pub fn coordinate(&self, cx: usize, cy: usize, pan: PanOffset, grid_step: i64) -> ScreenPoint {
        let (ox, oy) = pan.pixel_origin(grid_step);
        ScreenPoint {
            x: self.cell_width as i64 * cx as i64 - ox,
            y: self.cell_height as i64 * cy as i64 - oy,
        }
    }
}

/// Two letter label for the cell at column `x`, row `y`.
pub fn cell_label(x: usize, y: usize) -> String {
    let mut label = String::with_capacity(2);
    label.push(LABELS[x]);
    label.push(LABELS[y]);
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_cover_screen_even_when_not_divisible() {
        for (w, h) in [(1920, 1080), (2560, 1440), (36, 34), (1, 1), (35, 70), (3841, 2161)] {
            let layout = GridLayout::new(w, h);
            assert_eq!(layout.cell_width(), w.div_ceil(35));
            assert_eq!(layout.cell_height(), h.div_ceil(35));
            assert!(layout.cell_width() * 35 >= w);
            assert!(layout.cell_height() * 35 >= h);
        }
    }

    #[test]
    fn column_and_row_spans_are_contiguous() {
        let layout = GridLayout::new(1920, 1080);
        assert_eq!(layout.column_span(0), 0..55);
        assert_eq!(layout.column_span(3), 165..220);
        assert_eq!(layout.row_span(2), 62..93);
    }

    #[test]
    fn column_at_maps_back_into_spans() {
        let layout = GridLayout::new(1920, 1080);
        assert_eq!(layout.column_at(0), Some(0));
        assert_eq!(layout.column_at(54), Some(0));
        assert_eq!(layout.column_at(55), Some(1));
        assert_eq!(layout.column_at(1919), Some(34));
        assert_eq!(layout.column_at(-1), None);
        assert_eq!(layout.column_at(55 * 35), None);
    }

    #[test]
    fn coordinate_subtracts_pan_origin() {
        let layout = GridLayout {
            width: 1050,
            height: 700,
            cell_width: 30,
            cell_height: 20,
        };
        let pan = PanOffset { gx: 2, gy: -1 };
        assert_eq!(
            layout.coordinate(3, 5, pan, 10),
            ScreenPoint { x: 70, y: 110 }
        );
        assert_eq!(layout.coordinate(3, 5, pan, 10).to_string(), "70 110");
    }

    #[test]
    fn labels_pair_column_then_row() {
        assert_eq!(cell_label(0, 0), "aa");
        assert_eq!(cell_label(25, 26), "z1");
        assert_eq!(cell_label(34, 2), "9c");
    }
}
