//! Game tuning
//!
//! Every gameplay constant can be overridden from a JSON document. Missing
//! fields fall back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play area width
    pub play_width: f32,
    /// Play area height
    pub play_height: f32,
    pub ball_radius: f32,
    /// Per-frame speed on each axis before difficulty scaling
    pub base_speed: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between the paddle's top edge and the bottom of the play area
    pub paddle_bottom_offset: f32,
    /// Paddle displacement per key press
    pub paddle_step: f32,
    /// Added to the speed factor on each speed-up
    pub speed_increment: f32,
    /// Speed up whenever the score reaches a multiple of this
    pub speed_up_every: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            play_width: PLAY_WIDTH,
            play_height: PLAY_HEIGHT,
            ball_radius: BALL_RADIUS,
            base_speed: BALL_BASE_SPEED,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            paddle_step: PADDLE_STEP,
            speed_increment: SPEED_INCREMENT,
            speed_up_every: SPEED_UP_EVERY,
        }
    }
}

impl Settings {
    /// Parse and validate a JSON settings document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file on disk
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Copy of these settings with the play area resized to a host surface
    pub fn with_play_area(&self, width: f32, height: f32) -> Self {
        Self {
            play_width: width,
            play_height: height,
            ..self.clone()
        }
    }

    /// Check that the settings describe a playable session
    pub fn validate(&self) -> Result<(), SettingsError> {
        positive("play_width", self.play_width)?;
        positive("play_height", self.play_height)?;
        positive("ball_radius", self.ball_radius)?;
        positive("base_speed", self.base_speed)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("paddle_step", self.paddle_step)?;

        if self.paddle_width > self.play_width {
            return Err(invalid(
                "paddle_width",
                format!("{} exceeds play width {}", self.paddle_width, self.play_width),
            ));
        }
        if !self.paddle_bottom_offset.is_finite()
            || self.paddle_bottom_offset < self.paddle_height
            || self.paddle_bottom_offset > self.play_height
        {
            return Err(invalid(
                "paddle_bottom_offset",
                format!(
                    "{} must lie between paddle height {} and play height {}",
                    self.paddle_bottom_offset, self.paddle_height, self.play_height
                ),
            ));
        }
        if !self.speed_increment.is_finite() || self.speed_increment < 0.0 {
            return Err(invalid(
                "speed_increment",
                format!("{} must be finite and non-negative", self.speed_increment),
            ));
        }
        if self.speed_up_every == 0 {
            return Err(invalid("speed_up_every", "must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{value} must be finite and positive")))
    }
}

fn invalid(field: &'static str, reason: String) -> SettingsError {
    SettingsError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.play_width, 400.0);
        assert_eq!(settings.speed_up_every, 5);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "base_speed": 4.5 }"#).unwrap();
        assert_eq!(settings.base_speed, 4.5);
        assert_eq!(settings.paddle_width, PADDLE_WIDTH);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_paddle_wider_than_area_rejected() {
        let err = Settings::from_json(r#"{ "play_width": 60.0 }"#).unwrap_err();
        match err {
            SettingsError::Invalid { field, .. } => assert_eq!(field, "paddle_width"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_speed_up_interval_rejected() {
        let err = Settings::from_json(r#"{ "speed_up_every": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid { field: "speed_up_every", .. }
        ));
    }

    #[test]
    fn test_non_positive_radius_rejected() {
        let settings = Settings {
            ball_radius: -1.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_with_play_area_keeps_other_fields() {
        let settings = Settings::default().with_play_area(640.0, 480.0);
        assert_eq!(settings.play_width, 640.0);
        assert_eq!(settings.play_height, 480.0);
        assert_eq!(settings.paddle_step, PADDLE_STEP);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_file("/nonexistent/bounce-ball.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
