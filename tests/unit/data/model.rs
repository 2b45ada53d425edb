use super::*;

fn rec(make: &str, city: f64, highway: f64) -> Record {
    Record {
        make: make.to_string(),
        city,
        highway,
        cylinders: Some(4),
        fuel_type: Some("Gasoline".to_string()),
    }
}

#[test]
fn aggregate_by_make_averages_and_rounds() {
    let dataset = Dataset::new(vec![rec("A", 20.0, 30.0), rec("A", 30.0, 40.0)]);
    let agg = dataset.aggregate_by(GroupKey::Make);
    assert_eq!(agg.len(), 1);
    let record = &agg.records()[0];
    assert_eq!(record.make, "A");
    assert_eq!(record.city, 25.0);
    assert_eq!(record.highway, 35.0);
    assert_eq!(record.cylinders, None);
    assert_eq!(record.fuel_type, None);
}

#[test]
fn aggregate_rounds_to_nearest_integer() {
    let dataset = Dataset::new(vec![rec("A", 20.0, 30.0), rec("A", 25.0, 30.0)]);
    let agg = dataset.aggregate_by(GroupKey::Make);
    assert_eq!(agg.records()[0].city, 23.0); // mean 22.5
    assert_eq!(agg.records()[0].highway, 30.0);
}

#[test]
fn aggregate_emits_groups_sorted_by_label() {
    let dataset = Dataset::new(vec![
        rec("Citroen", 20.0, 30.0),
        rec("Audi", 25.0, 35.0),
        rec("BMW", 22.0, 33.0),
    ]);
    let agg = dataset.aggregate_by(GroupKey::Make);
    let labels: Vec<&str> = agg.records().iter().map(|r| r.make.as_str()).collect();
    assert_eq!(labels, ["Audi", "BMW", "Citroen"]);
}

#[test]
fn aggregate_skips_records_without_the_group_key() {
    let mut no_fuel = rec("A", 20.0, 30.0);
    no_fuel.fuel_type = None;
    let dataset = Dataset::new(vec![no_fuel, rec("B", 30.0, 40.0)]);
    let agg = dataset.aggregate_by(GroupKey::FuelType);
    assert_eq!(agg.len(), 1);
    assert_eq!(agg.records()[0].make, "Gasoline");
}

#[test]
fn filtered_leaves_the_original_untouched() {
    let dataset = Dataset::new(vec![rec("A", 20.0, 30.0), rec("B", 50.0, 55.0)]);
    let subset = dataset.filtered(|r| r.city > 30.0);
    assert_eq!(subset.len(), 1);
    assert_eq!(subset.records()[0].make, "B");
    assert_eq!(dataset.len(), 2);
}

#[test]
fn combined_mpg_sums_city_and_highway() {
    assert_eq!(rec("A", 20.0, 30.0).combined_mpg(), 50.0);
}
