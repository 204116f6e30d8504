use anyhow::Result;
use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use wildfire_common::{ForestConfig, Grid};

/// The three environmental grids drawn for one forest.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSet {
    pub lightning: Grid<bool>,
    pub rain: Grid<bool>,
    pub temperature: Grid<f64>,
}

/// Draws the environmental fields for `config`. Lightning and rain are
/// independent per-cell Bernoulli draws; temperature is built column-wise
/// and spatially correlated. The draw order is fixed (lightning, rain,
/// temperature) so a seeded generator reproduces identical fields.
pub fn generate_fields<R: Rng + ?Sized>(config: &ForestConfig, rng: &mut R) -> Result<FieldSet> {
    config.validate()?;
    let size_x = config.size_x as usize;
    let size_y = config.size_y as usize;

    let lightning = Grid::from_fn(size_x, size_y, |_, _| {
        rng.random_bool(config.lightning_probability)
    });
    let rain = Grid::from_fn(size_x, size_y, |_, _| rng.random_bool(config.rain_probability));
    let temperature = temperature_field(config, rng)?;

    debug!(
        "Drew {}x{} fields: {} lightning cells, {} rain cells.",
        size_x,
        size_y,
        lightning.count_true(),
        rain.count_true()
    );

    Ok(FieldSet {
        lightning,
        rain,
        temperature,
    })
}

/// Builds the temperature grid: one noisy base value per column, a linear
/// ramp down the rows, a length-4 moving average along each row, and a
/// final shift pinning the global maximum to `max_temperature`.
fn temperature_field<R: Rng + ?Sized>(config: &ForestConfig, rng: &mut R) -> Result<Grid<f64>> {
    let size_x = config.size_x as usize;
    let size_y = config.size_y as usize;

    let normal = Normal::new(0.0, 1.0)?;
    let low: Vec<f64> = (0..size_x).map(|_| normal.sample(rng) * 10.0).collect();
    let low_max = low.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Every column rises by the same span, chosen so the hottest column
    // tops out at max_temperature before smoothing.
    let span = config.max_temperature - low_max;

    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(size_y);
    for y in 0..size_y {
        let t = if size_y > 1 {
            y as f64 / (size_y - 1) as f64
        } else {
            0.0
        };
        rows.push(low.iter().map(|&base| (base + span * t).trunc()).collect());
    }

    // Length-4 uniform moving average over each row. The window is
    // [i - 2, i + 1], missing boundary taps contribute zero, and the result
    // is truncated back to whole degrees.
    for row in &mut rows {
        let source = row.clone();
        for (i, cell) in row.iter_mut().enumerate() {
            let lo = i.saturating_sub(2);
            let hi = (i + 1).min(size_x - 1);
            let sum: f64 = source[lo..=hi].iter().sum();
            *cell = (0.25 * sum).trunc();
        }
    }

    let grid_max = rows
        .iter()
        .flatten()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    // `(v - max) + max_temperature` keeps the maximum cell bitwise exact.
    for row in &mut rows {
        for cell in row.iter_mut() {
            *cell = (*cell - grid_max) + config.max_temperature;
        }
    }

    Grid::from_rows(rows)
}
