use crate::field::{generate_fields, FieldSet};
use crate::ignition::IgnitionRule;
use anyhow::Result;
use log::info;
use rand::prelude::*;
use wildfire_common::{ForestConfig, Grid};

/// Everything known about one cell, as reported to the annotation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellConditions {
    pub burning: bool,
    pub temperature: f64,
    pub raining: bool,
    pub lightning: bool,
}

/// An immutable forest: the three drawn fields plus the derived fire grid.
///
/// The fire grid is a cached derivation and is never mutated on its own;
/// regenerating draws a whole new `ForestState`, so the grid always agrees
/// with the rule it was built from.
#[derive(Debug, Clone)]
pub struct ForestState {
    config: ForestConfig,
    rule: IgnitionRule,
    lightning: Grid<bool>,
    rain: Grid<bool>,
    temperature: Grid<f64>,
    fire: Grid<bool>,
}

impl ForestState {
    /// Draws fresh fields from `rng` and derives the fire grid once.
    pub fn generate<R: Rng + ?Sized>(
        config: &ForestConfig,
        rule: &IgnitionRule,
        rng: &mut R,
    ) -> Result<Self> {
        let fields = generate_fields(config, rng)?;
        Self::from_fields(config.clone(), *rule, fields)
    }

    /// Convenience constructor over a seeded `StdRng`.
    pub fn from_seed(config: &ForestConfig, rule: &IgnitionRule, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(config, rule, &mut rng)
    }

    /// Builds a forest from explicit grids. Bails unless every grid matches
    /// the configured dimensions.
    pub fn from_grids(
        config: &ForestConfig,
        rule: &IgnitionRule,
        lightning: Grid<bool>,
        rain: Grid<bool>,
        temperature: Grid<f64>,
    ) -> Result<Self> {
        config.validate()?;
        Self::from_fields(
            config.clone(),
            *rule,
            FieldSet {
                lightning,
                rain,
                temperature,
            },
        )
    }

    fn from_fields(config: ForestConfig, rule: IgnitionRule, fields: FieldSet) -> Result<Self> {
        let FieldSet {
            lightning,
            rain,
            temperature,
        } = fields;
        let size_x = config.size_x as usize;
        let size_y = config.size_y as usize;
        for (name, shape) in [
            ("lightning", (lightning.size_x(), lightning.size_y())),
            ("rain", (rain.size_x(), rain.size_y())),
            ("temperature", (temperature.size_x(), temperature.size_y())),
        ] {
            if shape != (size_x, size_y) {
                anyhow::bail!(
                    "{} grid is {}x{}, expected {}x{}",
                    name,
                    shape.0,
                    shape.1,
                    size_x,
                    size_y
                );
            }
        }

        let fire = Grid::from_fn(size_x, size_y, |x, y| {
            rule.classify(lightning[(x, y)], rain[(x, y)], temperature[(x, y)])
        });
        info!(
            "Constructed {}x{} forest: {} of {} cells burning.",
            size_x,
            size_y,
            fire.count_true(),
            size_x * size_y
        );

        Ok(Self {
            config,
            rule,
            lightning,
            rain,
            temperature,
            fire,
        })
    }

    pub fn config(&self) -> &ForestConfig {
        &self.config
    }

    pub fn rule(&self) -> &IgnitionRule {
        &self.rule
    }

    pub fn size_x(&self) -> usize {
        self.lightning.size_x()
    }

    pub fn size_y(&self) -> usize {
        self.lightning.size_y()
    }

    pub fn lightning(&self) -> &Grid<bool> {
        &self.lightning
    }

    pub fn rain(&self) -> &Grid<bool> {
        &self.rain
    }

    pub fn temperature(&self) -> &Grid<f64> {
        &self.temperature
    }

    pub fn fire(&self) -> &Grid<bool> {
        &self.fire
    }

    pub fn is_lightning(&self, x: usize, y: usize) -> bool {
        self.lightning[(x, y)]
    }

    pub fn is_raining(&self, x: usize, y: usize) -> bool {
        self.rain[(x, y)]
    }

    pub fn temperature_at(&self, x: usize, y: usize) -> f64 {
        self.temperature[(x, y)]
    }

    pub fn is_burning(&self, x: usize, y: usize) -> bool {
        self.fire[(x, y)]
    }

    /// Everything about one cell, or `None` when the coordinate is outside
    /// the grid. The pointer path queries this after hit-testing.
    pub fn cell(&self, x: usize, y: usize) -> Option<CellConditions> {
        if !self.lightning.in_bounds(x, y) {
            return None;
        }
        Some(CellConditions {
            burning: self.fire[(x, y)],
            temperature: self.temperature[(x, y)],
            raining: self.rain[(x, y)],
            lightning: self.lightning[(x, y)],
        })
    }
}
