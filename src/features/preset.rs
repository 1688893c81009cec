//! Indicator preset
//!
//! Optional JSON file describing the indicator's starting look. Every field
//! may be omitted; missing fields keep the indicator defaults. The preset is
//! only ever read.
//!
//! Lookup order:
//! 1. `$LOADING_INDICATOR_PRESET`
//! 2. `<config dir>/preset.json`

use std::path::{Path, PathBuf};
use std::str::FromStr;

use iced::Color;
use serde::Deserialize;

use crate::indicator::{Alignment, Indicator, IndicatorError};

/// Environment variable overriding the preset location
pub const PRESET_ENV: &str = "LOADING_INDICATOR_PRESET";

/// Starting configuration for the indicator
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Preset {
    pub minimum_speed: Option<f64>,
    pub maximum_speed: Option<f64>,
    pub segment_size: Option<i32>,
    pub progress_width: Option<i32>,
    pub square: Option<bool>,
    pub shadow: Option<bool>,
    pub progress_rounded_cap: Option<bool>,
    pub enable_bg: Option<bool>,
    pub enable_text: Option<bool>,
    /// Flags joined by `|`, e.g. `"right|vcenter"`
    pub alignment: Option<String>,
    /// `#rrggbb` or `#rrggbbaa`
    pub bg_color: Option<String>,
    pub progress_color: Option<String>,
    pub text_color: Option<String>,
    pub text: Option<String>,
}

impl Preset {
    /// Get the preset file path
    pub fn file_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(PRESET_ENV) {
            return Some(PathBuf::from(path));
        }
        directories::ProjectDirs::from("com", "loading-indicator", "LoadingIndicator")
            .map(|dirs| dirs.config_dir().join("preset.json"))
    }

    /// Parse a preset from JSON text
    pub fn from_json(content: &str) -> Result<Self, PresetError> {
        serde_json::from_str(content).map_err(|e| PresetError::Parse(e.to_string()))
    }

    /// Load a preset from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, PresetError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PresetError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Apply every present field to an idle indicator
    ///
    /// Invalid values are skipped with a warning; the returned list holds one
    /// entry per skipped field.
    pub fn apply(&self, indicator: &mut Indicator) -> Vec<PresetError> {
        let mut errors = Vec::new();

        // Visibility first so the color/text guards see the final state
        if let Some(enable) = self.enable_bg {
            record(&mut errors, indicator.set_enable_bg(enable));
        }
        if let Some(enable) = self.enable_text {
            record(&mut errors, indicator.set_enable_text(enable));
        }
        if let Some(enable) = self.square {
            record(&mut errors, indicator.set_square(enable));
        }
        if let Some(enable) = self.shadow {
            record(&mut errors, indicator.set_shadow(enable));
        }
        if let Some(enable) = self.progress_rounded_cap {
            record(&mut errors, indicator.set_progress_rounded_cap(enable));
        }

        self.apply_speeds(indicator, &mut errors);

        if let Some(size) = self.segment_size {
            record(&mut errors, indicator.set_segment_size(size));
        }
        if let Some(width) = self.progress_width {
            record(&mut errors, indicator.set_progress_width(width));
        }

        if let Some(value) = &self.alignment {
            match Alignment::from_str(value) {
                Ok(alignment) => {
                    record(&mut errors, indicator.set_progress_alignment(alignment))
                }
                Err(_) => errors.push(PresetError::invalid("alignment", value)),
            }
        }

        let colors: [(&'static str, &Option<String>, ColorSetter); 3] = [
            ("bg_color", &self.bg_color, Indicator::set_bg_color),
            ("progress_color", &self.progress_color, Indicator::set_progress_color),
            ("text_color", &self.text_color, Indicator::set_text_color),
        ];
        for (field, value, setter) in colors {
            if let Some(value) = value {
                match parse_hex_color(value) {
                    Some(color) => record(&mut errors, setter(indicator, color)),
                    None => errors.push(PresetError::invalid(field, value)),
                }
            }
        }

        if let Some(text) = &self.text {
            record(&mut errors, indicator.set_text(text.clone()));
        }

        for error in &errors {
            tracing::warn!("Preset value skipped: {}", error);
        }
        errors
    }

    /// Speeds are ordered; apply them so the intermediate state stays valid
    fn apply_speeds(&self, indicator: &mut Indicator, errors: &mut Vec<PresetError>) {
        match (self.minimum_speed, self.maximum_speed) {
            (Some(min), Some(max)) if min > indicator.maximum_speed() => {
                record(errors, indicator.set_maximum_speed(max));
                record(errors, indicator.set_minimum_speed(min));
            }
            (min, max) => {
                if let Some(min) = min {
                    record(errors, indicator.set_minimum_speed(min));
                }
                if let Some(max) = max {
                    record(errors, indicator.set_maximum_speed(max));
                }
            }
        }
    }
}

type ColorSetter = fn(&mut Indicator, Color) -> Result<(), IndicatorError>;

fn record(errors: &mut Vec<PresetError>, result: Result<(), IndicatorError>) {
    if let Err(e) = result {
        errors.push(PresetError::Rejected(e));
    }
}

/// Parse `#rrggbb` / `#rrggbbaa`
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let a = if hex.len() == 8 { channel(6)? } else { 255 };

    Some(Color::from_rgba8(r, g, b, a as f32 / 255.0))
}

/// Errors that can occur with presets
#[derive(Debug, Clone, PartialEq)]
pub enum PresetError {
    Io(String),
    Parse(String),
    /// A field holds a value that cannot be interpreted
    InvalidValue { field: &'static str, value: String },
    /// The indicator refused the value
    Rejected(IndicatorError),
}

impl PresetError {
    fn invalid(field: &'static str, value: &str) -> Self {
        PresetError::InvalidValue {
            field,
            value: value.to_string(),
        }
    }
}

impl std::fmt::Display for PresetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetError::Io(e) => write!(f, "IO error: {}", e),
            PresetError::Parse(e) => write!(f, "Parse error: {}", e),
            PresetError::InvalidValue { field, value } => {
                write!(f, "Invalid value for {}: {:?}", field, value)
            }
            PresetError::Rejected(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PresetError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_preset_keeps_defaults() {
        let preset = Preset::from_json("{}").unwrap();
        assert_eq!(preset, Preset::default());

        let mut indicator = Indicator::new();
        assert!(preset.apply(&mut indicator).is_empty());
        assert_eq!(indicator.segment_size(), 12);
        assert_eq!(indicator.text(), "Loading...");
    }

    #[test]
    fn test_apply_fields() {
        let preset = Preset::from_json(
            r##"{
                "segment_size": 90,
                "progress_width": 6,
                "square": true,
                "enable_text": true,
                "alignment": "right|top",
                "progress_color": "#ff000080",
                "text": "Please wait"
            }"##,
        )
        .unwrap();

        let mut indicator = Indicator::new();
        let errors = preset.apply(&mut indicator);

        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        assert_eq!(indicator.segment_size(), 90);
        assert_eq!(indicator.progress_width(), 6);
        assert!(indicator.square());
        assert!(indicator.enable_text());
        assert_eq!(
            indicator.progress_alignment(),
            Alignment::RIGHT | Alignment::TOP
        );
        assert_eq!(
            indicator.progress_color(),
            Color::from_rgba8(255, 0, 0, 128.0 / 255.0)
        );
        assert_eq!(indicator.text(), "Please wait");
    }

    #[test]
    fn test_speeds_above_current_range() {
        let preset = Preset {
            minimum_speed: Some(5.0),
            maximum_speed: Some(8.0),
            ..Preset::default()
        };

        let mut indicator = Indicator::new();
        let errors = preset.apply(&mut indicator);

        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        assert_eq!(indicator.minimum_speed(), 5.0);
        assert_eq!(indicator.maximum_speed(), 8.0);
    }

    #[test]
    fn test_invalid_values_skipped() {
        let preset = Preset {
            alignment: Some("diagonal".to_string()),
            bg_color: Some("blue".to_string()),
            maximum_speed: Some(0.5),
            ..Preset::default()
        };

        let mut indicator = Indicator::new();
        let errors = preset.apply(&mut indicator);

        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&PresetError::InvalidValue {
            field: "bg_color",
            value: "blue".to_string(),
        }));
        assert!(
            errors
                .iter()
                .any(|e| matches!(e, PresetError::Rejected(IndicatorError::InvalidRange { .. })))
        );
        assert_eq!(indicator.maximum_speed(), 3.0, "rejected speed leaves default");
        assert_eq!(indicator.progress_alignment(), Alignment::CENTER);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Preset::from_json("{ \"square\": 1 "),
            Err(PresetError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = Preset::load_from_file(Path::new("/nonexistent/preset.json"));
        assert!(matches!(result, Err(PresetError::Io(_))));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#498bd1"), Some(iced::color!(0x498bd1)));
        assert_eq!(
            parse_hex_color("#00000050"),
            Some(Color::from_rgba8(0, 0, 0, 80.0 / 255.0))
        );
        assert_eq!(parse_hex_color("498bd1"), None);
        assert_eq!(parse_hex_color("#49"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }
}
