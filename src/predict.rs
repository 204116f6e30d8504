use crate::forest::ForestState;
use anyhow::Result;
use log::debug;
use wildfire_common::{Grid, Hypothesis};

/// Cell-wise disagreement between a hypothesis and the ground truth.
pub type MismatchGrid = Grid<bool>;

/// The hypothesis's prediction for one cell.
///
/// Both toggles compare for *equality* against the actual field — "does the
/// user's yes/no match this cell" — which is deliberately not the ignition
/// rule's `lightning == true` check.
pub fn predicted_fire(hyp: &Hypothesis, lightning: bool, rain: bool, temperature: f64) -> bool {
    if lightning == hyp.lightning_required {
        return true;
    }
    temperature > hyp.temperature_threshold && rain == hyp.rain_shadow_required
}

/// Evaluates `hyp` over the whole forest and diffs against the fire grid.
/// Recomputed in full on every hypothesis change; nothing is cached between
/// hypothesis values.
pub fn evaluate(forest: &ForestState, hyp: &Hypothesis) -> Result<MismatchGrid> {
    let predicted = Grid::from_fn(forest.size_x(), forest.size_y(), |x, y| {
        predicted_fire(
            hyp,
            forest.is_lightning(x, y),
            forest.is_raining(x, y),
            forest.temperature_at(x, y),
        )
    });
    let mismatch = diff(&predicted, forest.fire())?;
    debug!(
        "Hypothesis {:?} disagrees with ground truth on {} cells.",
        hyp,
        mismatch.count_true()
    );
    Ok(mismatch)
}

/// Cell-wise inequality of two classification grids. A shape disagreement
/// is a programming error and fails instead of being tolerated by
/// truncation.
pub fn diff(predicted: &Grid<bool>, actual: &Grid<bool>) -> Result<MismatchGrid> {
    if !predicted.same_shape(actual) {
        anyhow::bail!(
            "classification grid shapes differ: {}x{} vs {}x{}",
            predicted.size_x(),
            predicted.size_y(),
            actual.size_x(),
            actual.size_y()
        );
    }
    Ok(Grid::from_fn(
        predicted.size_x(),
        predicted.size_y(),
        |x, y| predicted[(x, y)] != actual[(x, y)],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ignition::IgnitionRule;
    use wildfire_common::ForestConfig;

    fn two_by_two() -> ForestState {
        let config = ForestConfig {
            size_x: 2,
            size_y: 2,
            rain_probability: 0.5,
            lightning_probability: 0.5,
            max_temperature: 90.0,
        };
        ForestState::from_grids(
            &config,
            &IgnitionRule::default(),
            Grid::from_rows(vec![vec![true, false], vec![false, false]]).unwrap(),
            Grid::from_rows(vec![vec![false, true], vec![true, false]]).unwrap(),
            Grid::from_rows(vec![vec![40.0, 60.0], vec![60.0, 40.0]]).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn ground_truth_of_the_reference_grid() {
        let forest = two_by_two();
        assert!(forest.is_burning(0, 0)); // lightning
        assert!(forest.is_burning(1, 0)); // 60 > 55 and raining
        assert!(forest.is_burning(0, 1)); // 60 > 55 and raining
        assert!(!forest.is_burning(1, 1)); // 40, no lightning
    }

    #[test]
    fn equality_form_hypothesis_on_the_reference_grid() {
        let forest = two_by_two();
        let hyp = Hypothesis {
            lightning_required: false,
            temperature_threshold: 55.0,
            rain_shadow_required: true,
        };
        let mismatch = evaluate(&forest, &hyp).unwrap();

        // (0,0): lightning true != required false, temp 40 below threshold
        // => predicted false, actual true.
        assert!(mismatch[(0, 0)]);
        // (1,0) and (0,1): lightning false == required false => predicted
        // true, matching the actual fire.
        assert!(!mismatch[(1, 0)]);
        assert!(!mismatch[(0, 1)]);
        // (1,1): lightning false == required false => predicted true, but
        // the cell is not burning.
        assert!(mismatch[(1, 1)]);
    }

    #[test]
    fn predicted_fire_is_not_a_plain_and() {
        // lightning_required = false predicts fire wherever lightning is
        // absent, which an AND-form rule would never do.
        let hyp = Hypothesis {
            lightning_required: false,
            temperature_threshold: 55.0,
            rain_shadow_required: true,
        };
        assert!(predicted_fire(&hyp, false, false, 0.0));
        assert!(!predicted_fire(&hyp, true, false, 0.0));
        assert!(predicted_fire(&hyp, true, true, 60.0));
    }

    #[test]
    fn evaluate_is_deterministic_for_a_fixed_forest() {
        let forest = two_by_two();
        let hyp = Hypothesis::default();
        let a = evaluate(&forest, &hyp).unwrap();
        let b = evaluate(&forest, &hyp).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn diff_rejects_shape_disagreement() {
        let predicted = Grid::filled(3, 3, false);
        let actual = Grid::filled(3, 2, false);
        assert!(diff(&predicted, &actual).is_err());
    }
}
