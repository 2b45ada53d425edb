use super::*;
use crate::data::source::InMemorySource;
use crate::foundation::error::PlotlineError;

const HEADERS: &[&str] = &[
    "Make",
    "Fuel",
    "EngineCylinders",
    "AverageHighwayMPG",
    "AverageCityMPG",
];

fn source(rows: &[&[&str]]) -> InMemorySource {
    InMemorySource::new(HEADERS, rows)
}

#[test]
fn invalid_rows_are_dropped() {
    let source = source(&[
        &["Acura", "Gasoline", "6", "28", "20"],
        &["Tesla", "Electricity", "4", "98", "102"],
        &["Bad", "Gasoline", "4", "0", "20"],
        &["Worse", "Gasoline", "4", "30", "0"],
        &["BMW", "Gasoline", "4", "34", "24"],
    ]);
    let dataset = load_dataset(&source, "mem:cars", &LoaderOpts::default()).unwrap();
    assert_eq!(dataset.len(), 3);
    for record in dataset.records() {
        assert!(record.city > 0.0);
        assert!(record.highway > 0.0);
    }
}

#[test]
fn blank_fields_are_coercion_skips_not_errors() {
    let source = source(&[
        &["Acura", "Gasoline", "6", "", "20"],
        &["BMW", "Gasoline", "4", "34", "24"],
    ]);
    let dataset = load_dataset(&source, "mem:cars", &LoaderOpts::default()).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].make, "BMW");
}

#[test]
fn strictness_gates_zero_cylinder_rows() {
    let rows: &[&[&str]] = &[
        &["Tesla", "Electricity", "0", "98", "102"],
        &["BMW", "Gasoline", "4", "34", "24"],
    ];
    let strict = load_dataset(&source(rows), "mem:cars", &LoaderOpts::default()).unwrap();
    assert_eq!(strict.len(), 1);

    let lenient_opts = LoaderOpts {
        strictness: Strictness::MpgOnly,
        ..LoaderOpts::default()
    };
    let lenient = load_dataset(&source(rows), "mem:cars", &lenient_opts).unwrap();
    assert_eq!(lenient.len(), 2);
    assert_eq!(lenient.records()[0].cylinders, None);
    assert_eq!(lenient.records()[1].cylinders, Some(4));
}

#[test]
fn missing_required_column_is_data_unavailable() {
    let source = InMemorySource::new(
        &["Make", "AverageHighwayMPG"],
        &[&["Acura", "28"]],
    );
    let err = load_dataset(&source, "mem:cars", &LoaderOpts::default()).unwrap_err();
    assert!(matches!(err, PlotlineError::DataUnavailable(_)));
}

#[test]
fn empty_after_cleaning_is_data_unavailable() {
    let source = source(&[
        &["Bad", "Gasoline", "4", "0", "20"],
        &["Worse", "Gasoline", "4", "30", "-1"],
    ]);
    let err = load_dataset(&source, "mem:cars", &LoaderOpts::default()).unwrap_err();
    assert!(matches!(err, PlotlineError::DataUnavailable(_)));
}

#[test]
fn field_map_supports_deployment_column_names() {
    let source = InMemorySource::new(
        &["brand", "city_mpg", "hwy_mpg", "cyl"],
        &[&["Acura", "20", "28", "6"]],
    );
    let opts = LoaderOpts {
        fields: FieldMap {
            make: "brand".to_string(),
            city: "city_mpg".to_string(),
            highway: "hwy_mpg".to_string(),
            cylinders: "cyl".to_string(),
            fuel_type: "fuel".to_string(),
        },
        ..LoaderOpts::default()
    };
    let dataset = load_dataset(&source, "mem:cars", &opts).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].make, "Acura");
    assert_eq!(dataset.records()[0].fuel_type, None);
}

#[test]
fn fuel_type_column_is_optional() {
    let source = InMemorySource::new(
        &["Make", "EngineCylinders", "AverageHighwayMPG", "AverageCityMPG"],
        &[&["Acura", "6", "28", "20"]],
    );
    let dataset = load_dataset(&source, "mem:cars", &LoaderOpts::default()).unwrap();
    assert_eq!(dataset.records()[0].fuel_type, None);
    assert_eq!(dataset.records()[0].cylinders, Some(6));
}
