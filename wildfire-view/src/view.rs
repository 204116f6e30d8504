use anyhow::Result;
use log::debug;
use rand::distr::Uniform;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use wildfire_common::{Grid, ViewConfig};
use wildfire_engine::{ForestState, MismatchGrid};

use crate::annotation::describe_cell;

// Absorbs floating-point error in the inverse mapping so a point at a
// cell's nominal corner resolves to that cell.
const EDGE_SNAP: f64 = 1e-9;

/// Screen-space position and sprite scale assigned to one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementEntry {
    pub screen_x: f64,
    pub screen_y: f64,
    pub scale: f64,
}

/// Screen-space rectangle highlighting one mismatched cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Maps between grid and screen coordinates and owns the placement table.
///
/// Drawing and hit-testing both read this table, and the inverse mapping
/// divides by the same factors the forward mapping multiplies by, so the
/// two can never disagree on cell geometry.
#[derive(Debug, Clone)]
pub struct GridView {
    config: ViewConfig,
    size_x: usize,
    size_y: usize,
    placements: Grid<PlacementEntry>,
}

impl GridView {
    pub fn new(config: &ViewConfig, size_x: u32, size_y: u32) -> Result<Self> {
        config.validate()?;
        if size_x == 0 || size_y == 0 {
            anyhow::bail!(
                "grid dimensions must be positive, got {}x{}",
                size_x,
                size_y
            );
        }
        let size_x = size_x as usize;
        let size_y = size_y as usize;
        let placements = build_placements(config, size_x, size_y)?;
        Ok(Self {
            config: config.clone(),
            size_x,
            size_y,
            placements,
        })
    }

    /// Convenience constructor sized to an existing forest.
    pub fn for_forest(config: &ViewConfig, forest: &ForestState) -> Result<Self> {
        Self::new(config, forest.size_x() as u32, forest.size_y() as u32)
    }

    pub fn size_x(&self) -> usize {
        self.size_x
    }

    pub fn size_y(&self) -> usize {
        self.size_y
    }

    /// Rebuilds the placement table for a new render pass. The table is a
    /// render-time cache; with an unchanged placement seed the rebuilt
    /// table is identical to the previous one.
    pub fn rebuild_placements(&mut self) -> Result<()> {
        self.placements = build_placements(&self.config, self.size_x, self.size_y)?;
        Ok(())
    }

    /// The placement of one cell, or `None` outside the grid.
    pub fn place(&self, x: usize, y: usize) -> Option<&PlacementEntry> {
        self.placements.get(x, y)
    }

    pub fn placements(&self) -> &Grid<PlacementEntry> {
        &self.placements
    }

    /// Resolves a pointer position to the cell under it. Points resolving
    /// outside the grid yield `None`; out-of-canvas clicks are expected
    /// input, not errors.
    pub fn locate(&self, px: f64, py: f64) -> Option<(usize, usize)> {
        let fx = (px - self.config.offset_x) * self.size_x as f64 / self.config.canvas_width;
        let fy = (py - self.config.offset_y) * self.size_y as f64 / self.config.canvas_height;
        let gx = (fx + EDGE_SNAP).floor();
        let gy = (fy + EDGE_SNAP).floor();
        let in_range = gx >= 0.0
            && gx < self.size_x as f64
            && gy >= 0.0
            && gy < self.size_y as f64;
        if !in_range {
            debug!("Pointer ({}, {}) outside the mapped canvas region.", px, py);
            return None;
        }
        Some((gx as usize, gy as usize))
    }

    /// Hit-tests a pointer position and formats the four-line annotation
    /// for the cell under it, or `None` for an out-of-grid pointer. Bails
    /// when the forest's shape disagrees with this view.
    pub fn annotate(&self, forest: &ForestState, px: f64, py: f64) -> Result<Option<String>> {
        if (forest.size_x(), forest.size_y()) != (self.size_x, self.size_y) {
            anyhow::bail!(
                "forest is {}x{}, view maps {}x{}",
                forest.size_x(),
                forest.size_y(),
                self.size_x,
                self.size_y
            );
        }
        let Some((x, y)) = self.locate(px, py) else {
            return Ok(None);
        };
        // locate() only returns in-range coordinates and the shapes agree.
        let cell = forest
            .cell(x, y)
            .ok_or_else(|| anyhow::anyhow!("cell ({}, {}) missing from forest", x, y))?;
        Ok(Some(describe_cell(x, y, &cell)))
    }

    /// Highlight rectangles for every mismatched cell, sized by the sprite
    /// footprint recorded in the placement table.
    pub fn overlay_rects(&self, mismatch: &MismatchGrid) -> Result<Vec<OverlayRect>> {
        if !mismatch.same_shape(&self.placements) {
            anyhow::bail!(
                "mismatch grid is {}x{}, view maps {}x{}",
                mismatch.size_x(),
                mismatch.size_y(),
                self.size_x,
                self.size_y
            );
        }
        let side = self.config.sprite_size;
        let rects = mismatch
            .iter()
            .filter(|(_, &flagged)| flagged)
            .map(|((x, y), _)| {
                let entry = self.placements[(x, y)];
                OverlayRect {
                    x: entry.screen_x,
                    y: entry.screen_y,
                    width: side * entry.scale,
                    height: side * entry.scale,
                }
            })
            .collect();
        Ok(rects)
    }
}

// The single authority for the forward mapping; `locate` inverts exactly
// these factors.
fn nominal_position(
    config: &ViewConfig,
    size_x: usize,
    size_y: usize,
    x: usize,
    y: usize,
) -> (f64, f64) {
    (
        config.offset_x + config.canvas_width * x as f64 / size_x as f64,
        config.offset_y + config.canvas_height * y as f64 / size_y as f64,
    )
}

fn build_placements(
    config: &ViewConfig,
    size_x: usize,
    size_y: usize,
) -> Result<Grid<PlacementEntry>> {
    let mut rng = StdRng::seed_from_u64(config.placement_seed);
    let scale_dist = Uniform::new_inclusive(config.sprite_scale_min, config.sprite_scale_max)?;
    Ok(Grid::from_fn(size_x, size_y, |x, y| {
        let (screen_x, screen_y) = nominal_position(config, size_x, size_y, x, y);
        PlacementEntry {
            screen_x,
            screen_y,
            scale: rng.sample(scale_dist),
        }
    }))
}
