use super::*;
use crate::data::model::{Dataset, Record};

fn rec(city: f64, highway: f64) -> Record {
    Record {
        make: "A".to_string(),
        city,
        highway,
        cylinders: Some(4),
        fuel_type: None,
    }
}

fn area() -> Rect {
    Rect::new(60.0, 60.0, 920.0, 440.0)
}

#[test]
fn map_is_linear_over_the_range() {
    let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
    assert_eq!(scale.map(0.0), 0.0);
    assert_eq!(scale.map(5.0), 50.0);
    assert_eq!(scale.map(10.0), 100.0);
}

#[test]
fn inverted_range_maps_high_values_to_low_pixels() {
    let scale = LinearScale::new((10.0, 50.0), (440.0, 60.0));
    assert_eq!(scale.map(10.0), 440.0);
    assert_eq!(scale.map(50.0), 60.0);
}

#[test]
fn degenerate_domain_is_widened() {
    let scale = LinearScale::new((5.0, 5.0), (0.0, 100.0));
    assert!(scale.map(5.0).is_finite());
    assert_eq!(scale.domain(), (5.0, 6.0));
}

#[test]
fn ticks_stay_inside_the_domain() {
    let scale = LinearScale::new((13.0, 94.0), (0.0, 100.0));
    let ticks = scale.ticks(10);
    assert!(!ticks.is_empty());
    for t in &ticks {
        assert!(*t >= 13.0 && *t <= 94.0, "tick {t} escaped the domain");
    }
}

#[test]
fn ticks_use_decade_steps() {
    let scale = LinearScale::new((0.0, 100.0), (0.0, 100.0));
    let ticks = scale.ticks(10);
    assert_eq!(ticks.first().copied(), Some(0.0));
    assert_eq!(ticks.last().copied(), Some(100.0));
    assert_eq!(ticks.len(), 11); // step 10
}

#[test]
fn tight_domain_matches_observed_extent() {
    let dataset = Dataset::new(vec![rec(10.0, 15.0), rec(40.0, 52.0)]);
    let scales = Scales::compute(&dataset, DomainPolicy::Tight, area());
    assert_eq!(scales.x.domain(), (10.0, 40.0));
    assert_eq!(scales.y.domain(), (15.0, 52.0));
}

#[test]
fn zero_anchored_domain_starts_at_zero_with_headroom() {
    let dataset = Dataset::new(vec![rec(10.0, 15.0), rec(40.0, 50.0)]);
    let scales = Scales::compute(
        &dataset,
        DomainPolicy::ZeroAnchored { headroom: 0.1 },
        area(),
    );
    assert_eq!(scales.x.domain().0, 0.0);
    assert!((scales.x.domain().1 - 44.0).abs() < 1e-9);
    assert_eq!(scales.y.domain().0, 0.0);
    assert!((scales.y.domain().1 - 55.0).abs() < 1e-9);
}

#[test]
fn empty_dataset_falls_back_to_unit_domain() {
    let scales = Scales::compute(&Dataset::default(), DomainPolicy::Tight, area());
    assert_eq!(scales.x.domain(), (0.0, 1.0));
    assert_eq!(scales.y.domain(), (0.0, 1.0));
}

#[test]
fn project_uses_both_axes() {
    let dataset = Dataset::new(vec![rec(10.0, 20.0), rec(40.0, 60.0)]);
    let scales = Scales::compute(&dataset, DomainPolicy::Tight, area());
    let p = scales.project(10.0, 20.0);
    assert_eq!(p, Point::new(60.0, 440.0)); // min city at left, min highway at bottom
    let q = scales.project(40.0, 60.0);
    assert_eq!(q, Point::new(920.0, 60.0));
}
