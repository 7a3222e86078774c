use std::time::Instant;

use crate::grid::layout::GridLayout;
use crate::grid::messages::{GridCommand, SessionOutcome, SessionStep};
use crate::grid::pan::PanOffset;
use crate::grid::render::{GridOverlay, OverlayView, RenderSettings};
use crate::grid::selection::{Selection, SelectionStep};

/// All mutable state of one picking session, owned by the frame driver.
#[derive(Debug)]
pub struct GridSession {
    layout: GridLayout,
    settings: RenderSettings,
    selection: Selection,
    pan: PanOffset,
    overlay: GridOverlay,
    revision: u64,
}

impl GridSession {
    pub fn new(layout: GridLayout, settings: RenderSettings) -> Self {
        let overlay = GridOverlay::compose(&layout, &settings, &OverlayView::default());
        Self {
            layout,
            settings,
            selection: Selection::default(),
            pan: PanOffset::default(),
            overlay,
            revision: 0,
        }
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn pan(&self) -> PanOffset {
        self.pan
    }

    /// Cached overlay; only replaced by a state change.
    pub fn overlay(&self) -> &GridOverlay {
        &self.overlay
    }

    /// Bumped on every rebuild so the surface knows when to re-upload.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn view(&self) -> OverlayView {
        OverlayView {
            pan: self.pan,
            active_label: self.selection.active_label(),
            column_chosen: self.selection.column().is_some(),
        }
    }

    pub fn apply(&mut self, command: GridCommand) -> SessionStep {
        match command {
            GridCommand::Cancel => {
                tracing::info!("selection cancelled");
                SessionStep::Finish(SessionOutcome::Cancelled)
            }
            GridCommand::Pan(direction) => {
                if self.selection.is_done() {
                    return SessionStep::Continue { redraw: false };
                }
                self.pan.step(direction);
                tracing::debug!(?direction, gx = self.pan.gx, gy = self.pan.gy, "grid panned");
                self.rebuild();
                SessionStep::Continue { redraw: true }
            }
            GridCommand::Label { label, index } => match self.selection.on_label(label, index) {
                SelectionStep::ColumnChosen { cx } => {
                    tracing::info!(%label, cx, "column chosen");
                    self.rebuild();
                    SessionStep::Continue { redraw: true }
                }
                SelectionStep::Completed { cx, cy } => {
                    let point = self
                        .layout
                        .coordinate(cx, cy, self.pan, self.settings.grid_step);
                    tracing::info!(%label, cx, cy, x = point.x, y = point.y, "coordinate selected");
                    SessionStep::Finish(SessionOutcome::Selected(point))
                }
                SelectionStep::Ignored => SessionStep::Continue { redraw: false },
            },
        }
    }

    pub fn rebuild(&mut self) {
        let started = Instant::now();
        self.overlay = GridOverlay::compose(&self.layout, &self.settings, &self.view());
        self.revision += 1;
        tracing::debug!(
            revision = self.revision,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            "grid overlay rebuilt"
        );
    }
}
