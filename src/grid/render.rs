//! Render composer: rebuilds the cached overlay whenever grid state changes.
//!
//! The overlay is a screen sized straight-alpha pixel image holding the grid
//! lines and arrow indicators, plus a label layer with the positions and
//! colours of every cell label. Both halves are produced by one
//! [`GridOverlay::compose`] call and never patched afterwards.

use image::RgbaImage;

use crate::grid::colour::Rgba;
use crate::grid::layout::{cell_label, GridLayout, GRID_SIZE, LABELS};
use crate::grid::pan::PanOffset;

const LABEL_DROP_OFFSET: (i64, i64) = (11, 19);
const LABEL_OFFSET: (i64, i64) = (10, 18);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    pub arrow: Rgba,
    pub font: Rgba,
    pub font_drop: Rgba,
    pub line: Rgba,
    pub line_drop: Rgba,
    pub arrow_size: u32,
    pub grid_step: i64,
}

impl RenderSettings {
    fn arrow_for(&self, emphasised: bool) -> Rgba {
        self.arrow.with_alpha(dim(self.arrow.a, emphasised))
    }
}

/// Grid state the overlay depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayView {
    pub pan: PanOffset,
    /// Label of the most recently pressed column key.
    pub active_label: Option<char>,
    pub column_chosen: bool,
}

impl OverlayView {
    /// Everything is bright until a column is chosen; after that only the
    /// active column is.
    pub fn emphasises(&self, column: usize) -> bool {
        !self.column_chosen || LABELS.get(column).copied() == self.active_label
    }
}

fn dim(alpha: u8, emphasised: bool) -> u8 {
    if emphasised {
        alpha
    } else {
        alpha / 4
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelSprite {
    pub text: String,
    /// Left edge of the text baseline, in screen pixels.
    pub x: i64,
    pub y: i64,
    pub colour: Rgba,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridOverlay {
    image: RgbaImage,
    labels: Vec<LabelSprite>,
}

/// Pixel sink addressed in buffer coordinates. The buffer covers
/// `[origin.x, width) x [origin.y, height)` and its origin is shown at the
/// top left of the screen.
struct PannedCanvas {
    image: RgbaImage,
    origin: (i64, i64),
    limit: (i64, i64),
}

impl PannedCanvas {
    fn new(width: u32, height: u32, origin: (i64, i64)) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            origin,
            limit: (width as i64, height as i64),
        }
    }

    fn put(&mut self, bx: i64, by: i64, colour: Rgba) {
        if bx < self.origin.0 || by < self.origin.1 || bx >= self.limit.0 || by >= self.limit.1 {
            return;
        }
        let sx = bx - self.origin.0;
        let sy = by - self.origin.1;
        if sx >= self.image.width() as i64 || sy >= self.image.height() as i64 {
            return;
        }
        self.image.put_pixel(sx as u32, sy as u32, colour.to_pixel());
    }
}

impl GridOverlay {
    pub fn compose(layout: &GridLayout, settings: &RenderSettings, view: &OverlayView) -> Self {
        let origin = view.pan.pixel_origin(settings.grid_step);
        let mut canvas = PannedCanvas::new(layout.width(), layout.height(), origin);
        if layout.cell_width() > 0 && layout.cell_height() > 0 {
            draw_column_lines(&mut canvas, layout, settings, view);
            draw_row_lines(&mut canvas, layout, settings, view);
        }
        Self {
            image: canvas.image,
            labels: layout_labels(layout, settings, view, origin),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        Rgba::from_pixel(self.image.get_pixel(x, y))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn labels(&self) -> &[LabelSprite] {
        &self.labels
    }
}

fn draw_column_lines(
    canvas: &mut PannedCanvas,
    layout: &GridLayout,
    settings: &RenderSettings,
    view: &OverlayView,
) {
    let cell_h = layout.cell_height() as i64;
    let band = settings.arrow_size as i64;
    for x in 0..GRID_SIZE {
        let bx = layout.column_span(x).start;
        let arrow = settings.arrow_for(view.emphasises(x));
        for y in 0..layout.height() as i64 {
            canvas.put(bx, y, settings.line_drop);
            canvas.put(bx - 1, y, settings.line);
            if y % cell_h < band {
                canvas.put(bx, y, arrow);
            }
        }
    }
}

fn draw_row_lines(
    canvas: &mut PannedCanvas,
    layout: &GridLayout,
    settings: &RenderSettings,
    view: &OverlayView,
) {
    let cell_w = layout.cell_width() as i64;
    let band = settings.arrow_size as i64;
    for y in 0..GRID_SIZE {
        let by = layout.row_span(y).start;
        for x in 0..layout.width() as i64 {
            canvas.put(x, by, settings.line_drop);
            canvas.put(x, by - 1, settings.line);
            if x % cell_w < band {
                let emphasised = layout
                    .column_at(x)
                    .map_or(!view.column_chosen, |column| view.emphasises(column));
                canvas.put(x, by, settings.arrow_for(emphasised));
            }
        }
    }
}

fn layout_labels(
    layout: &GridLayout,
    settings: &RenderSettings,
    view: &OverlayView,
    origin: (i64, i64),
) -> Vec<LabelSprite> {
    let mut labels = Vec::with_capacity(GRID_SIZE * GRID_SIZE * 2);
    for x in 0..GRID_SIZE {
        let emphasised = view.emphasises(x);
        let drop = settings
            .font_drop
            .with_alpha(dim(settings.font_drop.a, emphasised));
        let primary = settings.font.with_alpha(dim(settings.font.a, emphasised));
        let left = layout.column_span(x).start - origin.0;
        for y in 0..GRID_SIZE {
            let top = layout.row_span(y).start - origin.1;
            let text = cell_label(x, y);
            labels.push(LabelSprite {
                text: text.clone(),
                x: left + LABEL_DROP_OFFSET.0,
                y: top + LABEL_DROP_OFFSET.1,
                colour: drop,
                column: x,
            });
            labels.push(LabelSprite {
                text,
                x: left + LABEL_OFFSET.0,
                y: top + LABEL_OFFSET.1,
                colour: primary,
                column: x,
            });
        }
    }
    labels
}
