use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::grid::colour::resolve;
use crate::grid::render::RenderSettings;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_arrow_colour")]
    pub arrow_colour: String,
    /// Thickness in pixels of the arrow indicator band at each boundary.
    #[serde(default = "default_arrow_size")]
    pub arrow_size: u32,
    #[serde(default = "default_opaque")]
    pub arrow_opacity: u8,
    #[serde(default = "default_font_colour")]
    pub font_colour: String,
    #[serde(default = "default_drop_colour")]
    pub font_drop_colour: String,
    #[serde(default = "default_opaque")]
    pub font_opacity: u8,
    #[serde(default = "default_line_colour")]
    pub line_colour: String,
    #[serde(default = "default_drop_colour")]
    pub line_drop_colour: String,
    #[serde(default = "default_line_opacity")]
    pub line_opacity: u8,
    /// Pixels the canvas moves per arrow key press.
    #[serde(default = "default_grid_step")]
    pub grid_step: i64,
    /// Label size in logical points. Scaled by the display's pixel ratio.
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

fn default_arrow_colour() -> String {
    "#ff3b30".into()
}

fn default_arrow_size() -> u32 {
    4
}

fn default_opaque() -> u8 {
    255
}

fn default_font_colour() -> String {
    "#ffffff".into()
}

fn default_drop_colour() -> String {
    "#000000".into()
}

fn default_line_colour() -> String {
    "#ffffff".into()
}

fn default_line_opacity() -> u8 {
    96
}

fn default_grid_step() -> i64 {
    10
}

fn default_font_size() -> f32 {
    12.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arrow_colour: default_arrow_colour(),
            arrow_size: default_arrow_size(),
            arrow_opacity: default_opaque(),
            font_colour: default_font_colour(),
            font_drop_colour: default_drop_colour(),
            font_opacity: default_opaque(),
            line_colour: default_line_colour(),
            line_drop_colour: default_drop_colour(),
            line_opacity: default_line_opacity(),
            grid_step: default_grid_step(),
            font_size: default_font_size(),
        }
    }
}

impl Settings {
    /// Read a configuration document. Unlike a missing `--config` flag, a
    /// path that cannot be read is an error.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_pretty_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Resolve every colour up front so malformed hex fails before the
    /// overlay is shown.
    pub fn render_settings(&self) -> anyhow::Result<RenderSettings> {
        Ok(RenderSettings {
            arrow: resolve(&self.arrow_colour, self.arrow_opacity).context("arrowColour")?,
            font: resolve(&self.font_colour, self.font_opacity).context("fontColour")?,
            font_drop: resolve(&self.font_drop_colour, self.font_opacity)
                .context("fontDropColour")?,
            line: resolve(&self.line_colour, self.line_opacity).context("lineColour")?,
            line_drop: resolve(&self.line_drop_colour, self.line_opacity)
                .context("lineDropColour")?,
            arrow_size: self.arrow_size,
            grid_step: self.grid_step,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use crate::grid::colour::Rgba;

    #[test]
    fn empty_document_uses_defaults() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let settings =
            Settings::from_json(r##"{"gridStep": 25, "arrowColour": "#00ff00"}"##).unwrap();
        assert_eq!(settings.grid_step, 25);
        assert_eq!(settings.arrow_colour, "#00ff00");
        assert_eq!(settings.arrow_size, 4);
        assert_eq!(settings.font_opacity, 255);
    }

    #[test]
    fn opacity_out_of_range_is_rejected() {
        assert!(Settings::from_json(r#"{"arrowOpacity": 300}"#).is_err());
        assert!(Settings::from_json(r#"{"lineOpacity": -1}"#).is_err());
    }

    #[test]
    fn malformed_hex_fails_when_resolving() {
        let settings = Settings {
            line_colour: "not a colour".into(),
            ..Settings::default()
        };
        let err = settings.render_settings().unwrap_err();
        assert!(format!("{err:#}").contains("lineColour"));
    }

    #[test]
    fn render_settings_attach_opacities() {
        let settings = Settings {
            arrow_opacity: 200,
            line_opacity: 10,
            ..Settings::default()
        };
        let render = settings.render_settings().unwrap();
        assert_eq!(render.arrow, Rgba::rgba(0xff, 0x3b, 0x30, 200));
        assert_eq!(render.line_drop, Rgba::rgba(0, 0, 0, 10));
        assert_eq!(render.font.a, 255);
    }

    #[test]
    fn pretty_json_round_trips_through_camel_case() {
        let json = Settings::default().to_pretty_json().unwrap();
        assert!(json.contains("\"arrowColour\""));
        assert!(json.contains("\"gridStep\""));
        assert_eq!(Settings::from_json(&json).unwrap(), Settings::default());
    }
}
