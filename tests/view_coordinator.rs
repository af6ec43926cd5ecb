//! Tests for the view coordinator lifecycle.

mod common;

use common::{mounted_view, settings, stat};
use folio::config::Config;
use folio::feed::fallback_projects;
use folio::ui::coordinator::{Lifecycle, ViewCoordinator};
use std::collections::BTreeMap;

fn default_stats() -> Vec<folio::config::StatSpec> {
    vec![
        stat("projects", "stats", 10),
        stat("satisfaction", "stats", 98),
        stat("years", "stats", 1),
        stat("response", "stats", 24),
    ]
}

#[test]
fn fresh_view_reports_empty_state() {
    let view = ViewCoordinator::from_config(&Config::default());
    assert_eq!(view.lifecycle(), Lifecycle::Created);
    assert_eq!(view.displayed(), "");
    assert!(view.visible_regions().is_empty());
    assert!(view.active_projects().is_empty());
    assert_eq!(view.current_slide(), 0);

    let expected: BTreeMap<String, u64> = ["projects", "satisfaction", "years", "response"]
        .iter()
        .map(|id| (id.to_string(), 0))
        .collect();
    let mut mounted = view;
    mounted.mount(0);
    assert_eq!(mounted.counter_values(), expected);
}

#[test]
fn nothing_moves_before_mount() {
    let mut view = ViewCoordinator::new(settings(&["abc"], default_stats()));
    view.advance(10_000);
    view.report_intersection("stats", 1.0, 10_000);
    view.pointer_moved(5, 5);
    assert_eq!(view.displayed(), "");
    assert!(view.visible_regions().is_empty());
    assert_eq!(view.pointer(), (0, 0));
}

#[test]
fn typewriter_follows_the_clock() {
    let mut view = mounted_view(settings(&["abc"], default_stats()), 1_000);
    view.advance(1_099);
    assert_eq!(view.displayed(), "");
    view.advance(1_300);
    assert_eq!(view.displayed(), "abc");
}

#[test]
fn counters_start_when_their_region_is_seen() {
    let mut view = mounted_view(settings(&["abc"], default_stats()), 0);

    view.advance(5_000);
    assert!(view.counter_values().values().all(|value| *value == 0));

    view.report_intersection("stats", 0.05, 5_000);
    assert!(view.counter_values().values().all(|value| *value == 0));

    view.report_intersection("stats", 0.25, 5_000);
    assert!(view.is_visible("stats"));
    assert_eq!(view.counter_values()["satisfaction"], 1);

    view.advance(5_199);
    let expected: BTreeMap<String, u64> = [
        ("projects", 10),
        ("response", 24),
        ("satisfaction", 98),
        ("years", 1),
    ]
    .iter()
    .map(|(id, value)| (id.to_string(), *value))
    .collect();
    assert_eq!(view.counter_values(), expected);
}

#[test]
fn other_regions_do_not_arm_counters() {
    let mut view = mounted_view(settings(&["abc"], default_stats()), 0);
    view.report_intersection("hero", 1.0, 0);
    view.report_intersection("about", 1.0, 0);
    view.advance(1_000);
    assert!(view.counter_values().values().all(|value| *value == 0));
}

#[test]
fn visible_set_only_grows() {
    let mut view = mounted_view(settings(&["abc"], default_stats()), 0);
    view.report_intersection("hero", 1.0, 0);
    view.report_intersection("hero", 0.0, 10);
    view.report_intersection("about", 0.3, 20);
    let visible: Vec<&str> = view.visible_regions().iter().map(String::as_str).collect();
    assert_eq!(visible, vec!["about", "hero"]);
}

#[test]
fn unknown_regions_are_ignored() {
    let mut view = mounted_view(settings(&["abc"], default_stats()), 0);
    view.report_intersection("footer", 1.0, 0);
    assert!(view.visible_regions().is_empty());
}

#[test]
fn projects_replace_wholesale() {
    let mut view = mounted_view(settings(&["abc"], default_stats()), 0);
    view.projects_loaded(fallback_projects());
    assert_eq!(view.active_projects().len(), 2);
    view.projects_loaded(Vec::new());
    assert!(view.active_projects().is_empty());
}

#[test]
fn teardown_freezes_every_observable() {
    let mut view = mounted_view(settings(&["abcdef"], default_stats()), 0);
    view.advance(250);
    view.report_intersection("hero", 1.0, 250);
    view.report_intersection("stats", 1.0, 250);
    view.advance(299);
    view.pointer_moved(12, 4);

    view.teardown();
    assert_eq!(view.lifecycle(), Lifecycle::TornDown);

    let displayed = view.displayed();
    let counters = view.counter_values();
    let visible = view.visible_regions().clone();
    let slide = view.current_slide();
    let pointer = view.pointer();
    assert_eq!(displayed, "ab");
    assert!(counters["satisfaction"] > 0 && counters["satisfaction"] < 98);

    view.advance(600_000);
    view.report_intersection("about", 1.0, 600_000);
    view.pointer_moved(1, 1);
    view.projects_loaded(fallback_projects());
    view.mount(600_000);

    assert_eq!(view.displayed(), displayed);
    assert_eq!(view.counter_values(), counters);
    assert_eq!(view.visible_regions(), &visible);
    assert_eq!(view.current_slide(), slide);
    assert_eq!(view.pointer(), pointer);
    assert!(view.active_projects().is_empty());
    assert!(!view.visibility().is_observing());
}

#[test]
fn second_mount_is_ignored() {
    let mut view = mounted_view(settings(&["abc"], default_stats()), 0);
    view.advance(200);
    view.mount(200);
    assert_eq!(view.displayed(), "ab");
    assert_eq!(view.lifecycle(), Lifecycle::Mounted);
}
