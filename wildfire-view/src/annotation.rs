use wildfire_common::Grid;
use wildfire_engine::{CellConditions, ForestState};

/// The four-line annotation shown for a selected cell: burning state,
/// temperature, rain, lightning.
pub fn describe_cell(x: usize, y: usize, cell: &CellConditions) -> String {
    let burning = if cell.burning { "burning" } else { "not burning" };
    let raining = if cell.raining {
        "It is raining."
    } else {
        "It is not raining."
    };
    let lightning = if cell.lightning {
        "There are lightning strikes in the area."
    } else {
        "There are no lightning strikes in the area."
    };
    format!(
        "The selected area ({}, {}) is {}.\nThe temperature is {}°C.\n{}\n{}",
        x, y, burning, cell.temperature, raining, lightning
    )
}

/// A condition summary for every cell, e.g. for hover tooltips.
pub fn annotation_grid(forest: &ForestState) -> Grid<String> {
    Grid::from_fn(forest.size_x(), forest.size_y(), |x, y| {
        format!(
            "Rain: {}\nTemp: {}\nLightning: {}",
            forest.is_raining(x, y),
            forest.temperature_at(x, y),
            forest.is_lightning(x, y)
        )
    })
}
