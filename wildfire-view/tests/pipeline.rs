//! End-to-end flow: draw a forest, evaluate a hypothesis, map the grid to
//! the canvas, and resolve pointer interaction back to cell annotations.

use wildfire_common::{ForestConfig, Hypothesis, IgnitionConfig, ViewConfig};
use wildfire_engine::{evaluate, ForestState, IgnitionRule};
use wildfire_view::GridView;

fn forest_config() -> ForestConfig {
    ForestConfig {
        size_x: 30,
        size_y: 30,
        rain_probability: 0.4,
        lightning_probability: 0.2,
        max_temperature: 90.0,
    }
}

fn view_config() -> ViewConfig {
    ViewConfig {
        canvas_width: 800.0,
        canvas_height: 800.0,
        offset_x: 200.0,
        offset_y: 100.0,
        sprite_size: 20.0,
        sprite_scale_min: 0.6,
        sprite_scale_max: 1.5,
        placement_seed: 5,
    }
}

#[test]
fn generate_evaluate_locate_annotate() {
    let _ = env_logger::builder().is_test(true).try_init();

    let rule = IgnitionRule::from(&IgnitionConfig::default());
    let forest = ForestState::from_seed(&forest_config(), &rule, 2024).unwrap();

    // Ground truth stays consistent with the rule on every cell.
    for ((x, y), &burning) in forest.fire().iter() {
        assert_eq!(
            burning,
            rule.classify(
                forest.is_lightning(x, y),
                forest.is_raining(x, y),
                forest.temperature_at(x, y)
            )
        );
    }

    // The hottest cell sits exactly at the configured maximum.
    let max = forest
        .temperature()
        .iter()
        .map(|(_, &v)| v)
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(max, 90.0);

    // A hypothesis change runs a full-grid pass against ground truth.
    let hyp = Hypothesis {
        lightning_required: true,
        temperature_threshold: 55.0,
        rain_shadow_required: false,
    };
    let mismatch = evaluate(&forest, &hyp).unwrap();
    assert_eq!(mismatch.size_x(), 30);
    assert_eq!(mismatch.size_y(), 30);

    // The view maps every cell to the canvas and back.
    let view = GridView::for_forest(&view_config(), &forest).unwrap();
    for y in 0..30 {
        for x in 0..30 {
            let entry = view.place(x, y).unwrap();
            assert_eq!(view.locate(entry.screen_x, entry.screen_y), Some((x, y)));
        }
    }

    // Overlay geometry covers exactly the mismatched cells.
    let rects = view.overlay_rects(&mismatch).unwrap();
    assert_eq!(rects.len(), mismatch.count_true());

    // Pointer interaction resolves to a four-line annotation.
    let entry = *view.place(12, 7).unwrap();
    let text = view
        .annotate(&forest, entry.screen_x, entry.screen_y)
        .unwrap()
        .expect("pointer on a cell corner selects that cell");
    assert!(text.starts_with("The selected area (12, 7) is "));
    assert_eq!(text.lines().count(), 4);

    // A click next to the forest is ignored.
    assert_eq!(view.annotate(&forest, 10.0, 10.0).unwrap(), None);
}

#[test]
fn re_rendering_changes_nothing() {
    let rule = IgnitionRule::default();
    let forest = ForestState::from_seed(&forest_config(), &rule, 7).unwrap();
    let hyp = Hypothesis::default();

    let mut view = GridView::for_forest(&view_config(), &forest).unwrap();
    let placements_before = view.placements().clone();
    let mismatch_before = evaluate(&forest, &hyp).unwrap();

    // A second render pass with unchanged state: same table, same diff.
    view.rebuild_placements().unwrap();
    let mismatch_after = evaluate(&forest, &hyp).unwrap();

    assert_eq!(placements_before, *view.placements());
    assert_eq!(mismatch_before, mismatch_after);
}

#[test]
fn regeneration_replaces_the_forest_wholesale() {
    let rule = IgnitionRule::default();
    let config = forest_config();
    let first = ForestState::from_seed(&config, &rule, 1).unwrap();
    let second = ForestState::from_seed(&config, &rule, 2).unwrap();

    // Different draws, same shape; the stale state is simply dropped.
    assert_eq!(first.size_x(), second.size_x());
    assert_eq!(first.size_y(), second.size_y());
    assert!(
        first.temperature() != second.temperature()
            || first.lightning() != second.lightning()
            || first.rain() != second.rain()
    );
}
