use super::*;
use crate::scene::story::fuel_economy_story;

fn rec(cylinders: Option<u32>, fuel_type: Option<&str>) -> Record {
    Record {
        make: "Acura".to_string(),
        city: 20.0,
        highway: 28.0,
        cylinders,
        fuel_type: fuel_type.map(str::to_string),
    }
}

fn plain_scene() -> SceneDescriptor {
    SceneDescriptor {
        title: "All cars".to_string(),
        subtitle: String::new(),
        classify: ClassifyRule::uniform(Category::Default),
        filter: None,
        annotation: None,
        hint: None,
        interactive: false,
        aggregate: None,
        palette: Palette::new().with(Category::Default, Rgba8::rgb(0x69, 0xb3, 0xa2)),
    }
}

#[test]
fn empty_catalog_is_rejected() {
    let err = SceneCatalog::new(Vec::new()).unwrap_err();
    assert!(matches!(err, PlotlineError::Validation(_)));
}

#[test]
fn get_out_of_range_reports_index_and_len() {
    let catalog = fuel_economy_story().unwrap();
    let err = catalog.get(9).unwrap_err();
    assert!(matches!(
        err,
        PlotlineError::SceneOutOfRange { index: 9, len: 3 }
    ));
    assert!(catalog.get(catalog.len() - 1).is_ok());
}

#[test]
fn palette_must_cover_every_rule_category() {
    let mut scene = plain_scene();
    scene.classify = ClassifyRule {
        arms: vec![ClassifyArm {
            when: Predicate::CylindersEq(4),
            then: Category::Highlighted,
        }],
        fallback: Category::Default,
    };
    // Palette still only maps Default.
    let err = SceneCatalog::new(vec![scene]).unwrap_err();
    assert!(err.to_string().contains("Highlighted"));
}

#[test]
fn blank_title_is_rejected() {
    let mut scene = plain_scene();
    scene.title = "  ".to_string();
    assert!(SceneCatalog::new(vec![scene]).is_err());
}

#[test]
fn aggregating_scene_may_not_reference_dropped_fields() {
    let mut scene = plain_scene();
    scene.aggregate = Some(GroupKey::Make);
    scene.filter = Some(Predicate::CylindersEq(4));
    let err = SceneCatalog::new(vec![scene]).unwrap_err();
    assert!(err.to_string().contains("aggregates"));

    let mut ok = plain_scene();
    ok.aggregate = Some(GroupKey::Make);
    ok.filter = Some(Predicate::CombinedMpgAbove(50.0));
    assert!(SceneCatalog::new(vec![ok]).is_ok());
}

#[test]
fn predicates_over_missing_fields_never_match() {
    let aggregated = rec(None, None);
    assert!(!Predicate::CylindersEq(4).matches(&aggregated));
    assert!(!Predicate::FuelTypeIs("Gasoline".to_string()).matches(&aggregated));
    assert!(Predicate::CylindersEq(4).matches(&rec(Some(4), None)));
    assert!(Predicate::FuelTypeIs("Diesel".to_string()).matches(&rec(None, Some("Diesel"))));
}

#[test]
fn combined_mpg_predicates_are_strict_comparisons() {
    let record = rec(Some(4), None); // combined = 48
    assert!(!Predicate::CombinedMpgAbove(48.0).matches(&record));
    assert!(!Predicate::CombinedMpgBelow(48.0).matches(&record));
    assert!(Predicate::CombinedMpgAbove(47.9).matches(&record));
    assert!(Predicate::CombinedMpgBelow(48.1).matches(&record));
}

#[test]
fn descriptor_roundtrips_through_json() {
    let catalog = fuel_economy_story().unwrap();
    let json = serde_json::to_string(catalog.get(1).unwrap()).unwrap();
    let back: SceneDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, catalog.get(1).unwrap());
}
