use screenpos::grid::colour::Rgba;
use screenpos::grid::pan::PanOffset;
use screenpos::grid::render::{GridOverlay, OverlayView, RenderSettings};
use screenpos::grid::{GridLayout, LABELS};

const ARROW: Rgba = Rgba::rgba(250, 10, 20, 240);
const FONT: Rgba = Rgba::rgba(255, 255, 255, 200);

fn settings() -> RenderSettings {
    RenderSettings {
        arrow: ARROW,
        font: FONT,
        font_drop: Rgba::rgba(0, 0, 0, 200),
        line: Rgba::rgba(200, 200, 200, 90),
        line_drop: Rgba::rgba(0, 0, 0, 90),
        arrow_size: 3,
        grid_step: 7,
    }
}

fn is_arrow(px: Rgba) -> bool {
    (px.r, px.g, px.b) == (ARROW.r, ARROW.g, ARROW.b)
}

#[test]
fn arrows_outside_chosen_column_use_quarter_opacity() {
    // 700x420 gives 20x12 cells.
    let layout = GridLayout::new(700, 420);
    let chosen = 6;
    let view = OverlayView {
        pan: PanOffset::default(),
        active_label: Some(LABELS[chosen]),
        column_chosen: true,
    };
    let overlay = GridOverlay::compose(&layout, &settings(), &view);
    let span = layout.column_span(chosen);

    let mut bright = 0;
    let mut dim = 0;
    for y in 0..overlay.height() {
        for x in 0..overlay.width() {
            let px = overlay.pixel(x, y);
            if !is_arrow(px) {
                continue;
            }
            if span.contains(&(x as i64)) {
                assert_eq!(px.a, ARROW.a, "({x}, {y})");
                bright += 1;
            } else {
                assert_eq!(px.a, ARROW.a / 4, "({x}, {y})");
                dim += 1;
            }
        }
    }
    assert!(bright > 0);
    assert!(dim > 0);

    for sprite in overlay.labels() {
        let expected = if sprite.column == chosen { 200 } else { 50 };
        assert_eq!(sprite.colour.a, expected);
    }
}

#[test]
fn idle_overlay_has_no_dimmed_elements() {
    let layout = GridLayout::new(700, 420);
    let overlay = GridOverlay::compose(&layout, &settings(), &OverlayView::default());
    for y in 0..overlay.height() {
        for x in 0..overlay.width() {
            let px = overlay.pixel(x, y);
            if is_arrow(px) {
                assert_eq!(px.a, ARROW.a);
            }
        }
    }
    assert!(overlay.labels().iter().all(|s| s.colour.a == 200));
}

#[test]
fn identical_state_rebuilds_bit_identical_images() {
    let layout = GridLayout::new(700, 420);
    let view = OverlayView {
        pan: PanOffset { gx: -2, gy: 5 },
        active_label: Some('z'),
        column_chosen: true,
    };
    let first = GridOverlay::compose(&layout, &settings(), &view);
    let second = GridOverlay::compose(&layout, &settings(), &view);
    assert_eq!(first.image().as_raw(), second.image().as_raw());
    assert_eq!(first.labels(), second.labels());
}
