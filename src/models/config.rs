use std::path::Path;

use animoji_fx::{AnimationParams, ValidationError, DEFAULT_FRAME_COUNT, DEFAULT_RATE};
use serde::Deserialize;

use crate::error::AppError;

/// Run defaults loaded from a YAML file.
///
/// Every key is optional; anything left out falls back to the built-in
/// default. Values given on the command line win over the file.
///
/// ```yaml
/// frames: 24
/// rate: 12
/// reverse: true
/// resize: 128
/// effects: [kaleidoscope, hue]
/// ```
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AnimationConfig {
    /// Number of frames to generate
    pub frames: Option<i64>,

    /// Frames per second
    pub rate: Option<i64>,

    /// Play the frames last to first
    pub reverse: Option<bool>,

    /// Resize the source to this width first (0 = off)
    pub resize: Option<i64>,

    /// Effect chain used when none is given on the command line
    #[serde(default)]
    pub effects: Vec<String>,
}

impl AnimationConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes as null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            effects = config.effects.len(),
            "Loaded configuration"
        );
        Ok(config)
    }
}

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub frames: Option<i64>,
    pub rate: Option<i64>,
    pub reverse: Option<bool>,
    pub resize: Option<i64>,
    pub effects: Vec<String>,
}

impl Overrides {
    /// Merge with the config file (if any) and the built-in defaults, then
    /// validate.
    ///
    /// Precedence per field: command line, then config file, then default.
    /// The effect chain is taken whole from the first source that has one.
    pub fn resolve(
        &self,
        file: Option<&AnimationConfig>,
    ) -> Result<AnimationParams, ValidationError> {
        let file = file.cloned().unwrap_or_default();

        let effects = if !self.effects.is_empty() {
            &self.effects
        } else {
            &file.effects
        };
        if effects.is_empty() {
            return Err(ValidationError::NoEffects);
        }

        let frames = self
            .frames
            .or(file.frames)
            .unwrap_or(i64::from(DEFAULT_FRAME_COUNT));
        let rate = self.rate.or(file.rate).unwrap_or(i64::from(DEFAULT_RATE));
        let reverse = self.reverse.or(file.reverse).unwrap_or(false);
        let resize = self.resize.or(file.resize).unwrap_or(0);

        let params = AnimationParams::from_raw(effects, frames, rate, reverse, resize)?;
        tracing::debug!(?params, "Resolved animation parameters");
        Ok(params)
    }
}
