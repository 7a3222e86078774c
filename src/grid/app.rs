use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::grid::input::dispatch;
use crate::grid::layout::GridLayout;
use crate::grid::messages::{SessionOutcome, SessionStep};
use crate::grid::render::{GridOverlay, RenderSettings};
use crate::grid::session::GridSession;

pub type OutcomeSlot = Arc<Mutex<Option<SessionOutcome>>>;

/// Frame driver: measures the screen once, feeds input to the session and
/// paints the cached overlay.
pub struct ScreenposApp {
    settings: RenderSettings,
    font_size: f32,
    session: Option<GridSession>,
    texture: Option<(egui::TextureHandle, u64)>,
    outcome: OutcomeSlot,
    closing: bool,
}

impl ScreenposApp {
    pub fn new(settings: RenderSettings, font_size: f32, outcome: OutcomeSlot) -> Self {
        Self {
            settings,
            font_size: font_size.max(1.0),
            session: None,
            texture: None,
            outcome,
            closing: false,
        }
    }

    fn ensure_session(&mut self, ctx: &egui::Context) -> &mut GridSession {
        let settings = self.settings;
        self.session.get_or_insert_with(|| {
            let (width, height) = measure_screen(ctx);
            tracing::info!(width, height, "screen measured");
            GridSession::new(GridLayout::new(width, height), settings)
        })
    }

    fn finish(&mut self, ctx: &egui::Context, outcome: SessionOutcome) {
        if let Ok(mut slot) = self.outcome.lock() {
            slot.get_or_insert(outcome);
        }
        self.closing = true;
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    fn update_texture(&mut self, ctx: &egui::Context) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let revision = session.revision();
        match self.texture.as_mut() {
            Some((_, uploaded)) if *uploaded == revision => {}
            Some((texture, uploaded)) => {
                texture.set(color_image(session.overlay()), egui::TextureOptions::NEAREST);
                *uploaded = revision;
            }
            None => {
                let texture = ctx.load_texture(
                    "screenpos-grid",
                    color_image(session.overlay()),
                    egui::TextureOptions::NEAREST,
                );
                self.texture = Some((texture, revision));
            }
        }
    }

    fn paint(&self, ctx: &egui::Context) {
        let (Some(session), Some((texture, _))) = (self.session.as_ref(), self.texture.as_ref())
        else {
            return;
        };
        let ppp = ctx.pixels_per_point();
        let overlay = session.overlay();
        let font = egui::FontId::proportional(self.font_size);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let painter = ui.painter();
                let size = egui::vec2(overlay.width() as f32, overlay.height() as f32) / ppp;
                painter.image(
                    texture.id(),
                    egui::Rect::from_min_size(egui::Pos2::ZERO, size),
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
                for sprite in overlay.labels() {
                    let c = sprite.colour;
                    painter.text(
                        egui::pos2(sprite.x as f32 / ppp, sprite.y as f32 / ppp),
                        egui::Align2::LEFT_BOTTOM,
                        &sprite.text,
                        font.clone(),
                        egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a),
                    );
                }
            });
    }
}

impl eframe::App for ScreenposApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.closing {
            return;
        }

        let command = ctx.input(|i| dispatch(i));
        let session = self.ensure_session(ctx);
        if let Some(command) = command {
            if let SessionStep::Finish(outcome) = session.apply(command) {
                self.finish(ctx, outcome);
                return;
            }
        }

        self.update_texture(ctx);
        self.paint(ctx);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }
}

/// Screen size in physical pixels.
fn measure_screen(ctx: &egui::Context) -> (u32, u32) {
    let ppp = ctx.pixels_per_point();
    let points = ctx
        .input(|i| i.viewport().monitor_size)
        .unwrap_or_else(|| ctx.screen_rect().size());
    (
        (points.x * ppp).round().max(0.0) as u32,
        (points.y * ppp).round().max(0.0) as u32,
    )
}

fn color_image(overlay: &GridOverlay) -> egui::ColorImage {
    let size = [overlay.width() as usize, overlay.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, overlay.image().as_raw())
}

pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Screenpos")
            .with_fullscreen(true)
            .with_decorations(false)
            .with_transparent(true)
            .with_always_on_top(),
        ..Default::default()
    }
}
