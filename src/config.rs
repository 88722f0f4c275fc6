//! Demo configuration
//!
//! Optional RON file in the working directory. Every field has a default,
//! so a partial file only overrides what it names.

use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::rasterizer::{Color, Point, Triangle};

/// Looked up relative to the working directory
pub const CONFIG_FILE: &str = "triangle.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub font_path: String,
    pub font_size: u16,
    /// Frame budget; the loop sleeps for whatever is left of it
    pub frame_delay_ms: u64,
    pub triangle: Triangle,
    pub background: Color,
    pub fill: Color,
    pub outline: Color,
    pub text: Color,
    /// Top-left corner of the hint text
    pub hint_position: Point,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            font_path: "Arial.ttf".to_string(),
            font_size: 16,
            frame_delay_ms: 16,
            triangle: Triangle::default(),
            background: Color::BLACK,
            fill: Color::SKY,
            outline: Color::WHITE,
            text: Color::WHITE,
            hint_position: Point::new(10, 10),
        }
    }
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn parse_config(s: &str) -> Result<DemoConfig, ConfigError> {
    Ok(ron::from_str(s)?)
}

/// Load config from `path`. A missing file gives `Ok(None)`.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Option<DemoConfig>, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    parse_config(&contents).map(Some)
}

/// Load config or fall back to defaults, logging what happened
pub fn load_or_default<P: AsRef<Path>>(path: P) -> DemoConfig {
    let path = path.as_ref();
    match load_config(path) {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", path.display());
            config
        }
        Ok(None) => {
            log::info!("No {} found, using defaults", path.display());
            DemoConfig::default()
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}", path.display(), e);
            DemoConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_config("()").unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let c = parse_config(r#"(font_path: "fonts/mono.ttf", frame_delay_ms: 33)"#).unwrap();
        assert_eq!(c.font_path, "fonts/mono.ttf");
        assert_eq!(c.frame_delay_ms, 33);
        assert_eq!(c.font_size, 16);
        assert_eq!(c.triangle, Triangle::default());
    }

    #[test]
    fn test_triangle_and_colors() {
        let c = parse_config(
            "(triangle: (points: ((x: 0, y: 0), (x: 10, y: 0), (x: 0, y: 10))), fill: (r: 1, g: 2, b: 3))",
        )
        .unwrap();
        assert_eq!(c.triangle.points[1], Point::new(10, 0));
        assert_eq!(c.fill, Color { r: 1, g: 2, b: 3, a: 255 });
    }

    #[test]
    fn test_malformed_config() {
        assert!(matches!(parse_config("(font_size: \"big\")"), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file() {
        assert!(load_config("definitely/not/here.ron").unwrap().is_none());
    }
}
