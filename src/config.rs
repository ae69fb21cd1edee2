//! Configuration for joint count widgets

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Serializable color representation for config storage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl MarkerColor {
    /// CSS `green`
    pub const GREEN: MarkerColor = MarkerColor::from_rgb8(0, 128, 0);
    pub const WHITE: MarkerColor = MarkerColor::from_rgb8(255, 255, 255);
    pub const BLACK: MarkerColor = MarkerColor::from_rgb8(0, 0, 0);

    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Convert to RGBA format (0-255)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            255,
        ]
    }
}

impl From<MarkerColor> for tiny_skia::Color {
    fn from(c: MarkerColor) -> Self {
        let [r, g, b, a] = c.to_rgba_u8();
        tiny_skia::Color::from_rgba8(r, g, b, a)
    }
}

/// Marker colors: stroke plus fill per selection state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPalette {
    pub border: MarkerColor,
    pub selected: MarkerColor,
    pub unselected: MarkerColor,
}

impl MarkerPalette {
    /// Fill color for a marker in the given state
    pub fn fill(&self, selected: bool) -> MarkerColor {
        if selected {
            self.selected
        } else {
            self.unselected
        }
    }
}

impl Default for MarkerPalette {
    fn default() -> Self {
        Self {
            border: MarkerColor::GREEN,
            selected: MarkerColor::GREEN,
            unselected: MarkerColor::WHITE,
        }
    }
}

/// Widget configuration shared by every widget on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Marker colors
    pub palette: MarkerPalette,
    /// Surface size relative to the body diagram image
    pub scale: f64,
    /// Body diagram raster image
    pub background_image: PathBuf,
    /// Clips played on some selections
    pub cue_clips: [PathBuf; 2],
    /// One selection in `cue_odds` plays a clip
    pub cue_odds: u32,
    /// Whether selections may play a clip at all
    pub play_cues: bool,
    /// Program used to play a clip, called with the clip path
    pub cue_command: String,
    /// TrueType font for status text, bundled DejaVu Sans when unset
    pub font: Option<PathBuf>,
    /// Fixed seed for cue selection, random when unset
    pub cue_seed: Option<u64>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            palette: MarkerPalette::default(),
            scale: 0.5,
            background_image: PathBuf::from("resources/images/man-transparent.png"),
            cue_clips: [
                PathBuf::from("resources/audio/ouch.mp3"),
                PathBuf::from("resources/audio/getoff.mp3"),
            ],
            cue_odds: 5,
            play_cues: true,
            cue_command: "paplay".to_string(),
            font: None,
            cue_seed: None,
        }
    }
}

impl WidgetConfig {
    /// Directory name under the user config dir
    pub const ID: &'static str = "jointcount";

    /// Default config file location
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::ID).join("config.json"))
    }

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            log::warn!("No config directory, using defaults");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error loading config, using defaults: {:?}", err);
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) {
        let Some(path) = Self::path() else {
            log::error!("No config directory, not saving");
            return;
        };
        if let Err(err) = self.save_to(&path) {
            log::error!("Failed to save config: {:?}", err);
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion() {
        assert_eq!(MarkerColor::GREEN.to_rgba_u8(), [0, 128, 0, 255]);
        assert_eq!(MarkerColor::WHITE.to_rgba_u8(), [255, 255, 255, 255]);
        let palette = MarkerPalette::default();
        assert_eq!(palette.fill(true), MarkerColor::GREEN);
        assert_eq!(palette.fill(false), MarkerColor::WHITE);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: WidgetConfig =
            serde_json::from_str(r#"{ "scale": 1.0, "play_cues": false }"#).unwrap();
        assert_eq!(config.scale, 1.0);
        assert!(!config.play_cues);
        assert_eq!(config.cue_odds, 5);
        assert_eq!(config.palette, MarkerPalette::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = WidgetConfig {
            scale: 0.75,
            cue_seed: Some(7),
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(WidgetConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_from_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(WidgetConfig::load_from(&path).is_err());
    }
}
