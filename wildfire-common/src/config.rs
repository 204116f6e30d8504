use crate::hypothesis::Hypothesis;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

// Configuration for the environmental grid itself
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ForestConfig {
    pub size_x: u32,
    pub size_y: u32,
    pub rain_probability: f64,
    pub lightning_probability: f64,
    pub max_temperature: f64,
}

impl ForestConfig {
    /// Checks the ranges documented for each field. Invalid values fail
    /// here rather than being clamped.
    pub fn validate(&self) -> Result<()> {
        if self.size_x == 0 || self.size_y == 0 {
            anyhow::bail!(
                "grid dimensions must be positive, got {}x{}",
                self.size_x,
                self.size_y
            );
        }
        if !(0.0..=1.0).contains(&self.rain_probability) {
            anyhow::bail!(
                "rain_probability must be in [0, 1], got {}",
                self.rain_probability
            );
        }
        if !(0.0..=1.0).contains(&self.lightning_probability) {
            anyhow::bail!(
                "lightning_probability must be in [0, 1], got {}",
                self.lightning_probability
            );
        }
        if !self.max_temperature.is_finite() {
            anyhow::bail!("max_temperature must be finite, got {}", self.max_temperature);
        }
        Ok(())
    }
}

// Seed for the environmental field draw
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GenerationConfig {
    #[serde(default = "default_field_seed")]
    pub field_seed: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            field_seed: default_field_seed(),
        }
    }
}

fn default_field_seed() -> u64 {
    0
}

/// Which rain state satisfies the ignition rule's second clause. The source
/// material disagrees with itself here; `Raining` is the primary policy and
/// `RainShadow` the documented alternate.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RainCondition {
    Raining,
    RainShadow,
}

// Parameters of the ground-truth ignition classification
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct IgnitionConfig {
    #[serde(default = "default_ignition_threshold")]
    pub temperature_threshold: f64,
    #[serde(default = "default_rain_condition")]
    pub rain_condition: RainCondition,
}

impl Default for IgnitionConfig {
    fn default() -> Self {
        IgnitionConfig {
            temperature_threshold: default_ignition_threshold(),
            rain_condition: default_rain_condition(),
        }
    }
}

impl IgnitionConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.temperature_threshold.is_finite() {
            anyhow::bail!(
                "ignition temperature_threshold must be finite, got {}",
                self.temperature_threshold
            );
        }
        Ok(())
    }
}

fn default_ignition_threshold() -> f64 {
    55.0
}

fn default_rain_condition() -> RainCondition {
    RainCondition::Raining
}

// Screen-space geometry used for sprite placement and hit-testing
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ViewConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    #[serde(default)]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
    #[serde(default = "default_sprite_size")]
    pub sprite_size: f64,
    #[serde(default = "default_sprite_scale_min")]
    pub sprite_scale_min: f64,
    #[serde(default = "default_sprite_scale_max")]
    pub sprite_scale_max: f64,
    #[serde(default = "default_placement_seed")]
    pub placement_seed: u64,
}

impl ViewConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.canvas_width > 0.0 && self.canvas_width.is_finite()) {
            anyhow::bail!("canvas_width must be positive, got {}", self.canvas_width);
        }
        if !(self.canvas_height > 0.0 && self.canvas_height.is_finite()) {
            anyhow::bail!("canvas_height must be positive, got {}", self.canvas_height);
        }
        if !self.offset_x.is_finite() || !self.offset_y.is_finite() {
            anyhow::bail!(
                "canvas offsets must be finite, got ({}, {})",
                self.offset_x,
                self.offset_y
            );
        }
        if !(self.sprite_size > 0.0 && self.sprite_size.is_finite()) {
            anyhow::bail!("sprite_size must be positive, got {}", self.sprite_size);
        }
        if !(self.sprite_scale_min > 0.0 && self.sprite_scale_min <= self.sprite_scale_max) {
            anyhow::bail!(
                "sprite scale range must satisfy 0 < min <= max, got [{}, {}]",
                self.sprite_scale_min,
                self.sprite_scale_max
            );
        }
        Ok(())
    }
}

fn default_sprite_size() -> f64 {
    20.0
}

fn default_sprite_scale_min() -> f64 {
    0.6
}

fn default_sprite_scale_max() -> f64 {
    1.5
}

fn default_placement_seed() -> u64 {
    0
}

// Main configuration structure, loaded from a TOML file.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SimulationConfig {
    pub forest: ForestConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub ignition: IgnitionConfig,
    pub view: ViewConfig,
    #[serde(default)]
    pub hypothesis: Hypothesis,
}

impl SimulationConfig {
    /// Loads the configuration from a TOML file and validates it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        let config_str = std::fs::read_to_string(path_ref).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path_ref.display(), e)
        })?;
        let config: SimulationConfig = toml::from_str(&config_str).map_err(|e| {
            anyhow::anyhow!("Failed to parse TOML from '{}': {}", path_ref.display(), e)
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.forest.validate()?;
        self.ignition.validate()?;
        self.view.validate()?;
        if !self.hypothesis.temperature_threshold.is_finite() {
            anyhow::bail!(
                "hypothesis temperature_threshold must be finite, got {}",
                self.hypothesis.temperature_threshold
            );
        }
        Ok(())
    }
}
