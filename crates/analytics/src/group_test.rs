//! Tests for grouped summaries

use chrono::NaiveDate;
use vend_dataset::OrderRecord;

use crate::group::{
    Dimension, Measure, group_by, group_by_pair, partition_series, top,
};
use crate::kpi::summarize;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(region: &str, segment: &str, category: &str, product: &str, sales: f64, profit: f64) -> OrderRecord {
    OrderRecord::new(
        "X-1",
        date(2024, 1, 5),
        date(2024, 1, 8),
        segment,
        region,
        category,
        product,
        sales,
        profit,
    )
}

fn records() -> Vec<OrderRecord> {
    vec![
        record("East", "Consumer", "Furniture", "Oak Desk", 100.0, 20.0),
        record("West", "Consumer", "Technology", "Wireless Mouse", 300.0, 30.0),
        record("East", "Corporate", "Furniture", "Bookcase", 50.0, 5.0),
        record("South", "Consumer", "Technology", "Phone Stand", 150.0, 45.0),
    ]
}

#[test]
fn test_dimension_parse() {
    assert_eq!(Dimension::parse("region").unwrap(), Dimension::Region);
    assert_eq!(Dimension::parse("Segment").unwrap(), Dimension::Segment);
    assert_eq!(Dimension::parse("category").unwrap(), Dimension::Category);
    assert_eq!(Dimension::parse("product").unwrap(), Dimension::Product);
    assert_eq!(Dimension::parse("product_name").unwrap(), Dimension::Product);
    assert!(Dimension::parse("warehouse").is_err());
}

#[test]
fn test_measure_parse() {
    assert_eq!(Measure::parse("sales").unwrap(), Measure::Sales);
    assert_eq!(Measure::parse("Profit").unwrap(), Measure::Profit);
    assert!(Measure::parse("margin").is_err());
}

#[test]
fn test_group_by_sums_and_sorts_descending() {
    let rows = group_by(&records(), Dimension::Region, &[Measure::Sales]);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].key, "West");
    assert_eq!(rows[0].values, vec![300.0]);
    assert_eq!(rows[1].key, "East");
    assert_eq!(rows[1].values, vec![150.0]);
    assert_eq!(rows[2].key, "South");
    assert_eq!(rows[2].values, vec![150.0]);
}

#[test]
fn test_group_by_ties_keep_first_appearance_order() {
    let records = vec![
        record("East", "Consumer", "Furniture", "A", 100.0, 1.0),
        record("West", "Consumer", "Furniture", "B", 100.0, 1.0),
        record("South", "Consumer", "Furniture", "C", 200.0, 1.0),
    ];

    let rows = group_by(&records, Dimension::Region, &[Measure::Sales]);
    let keys: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, ["South", "East", "West"]);
}

#[test]
fn test_group_by_keys_are_case_sensitive() {
    let records = vec![
        record("east", "Consumer", "Furniture", "A", 100.0, 1.0),
        record("East", "Consumer", "Furniture", "B", 50.0, 1.0),
    ];

    let rows = group_by(&records, Dimension::Region, &[Measure::Sales]);
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_group_by_multiple_measures() {
    let rows = group_by(&records(), Dimension::Segment, &[Measure::Sales, Measure::Profit]);

    assert_eq!(rows[0].key, "Consumer");
    assert_eq!(rows[0].values, vec![550.0, 95.0]);
    assert_eq!(rows[1].key, "Corporate");
    assert_eq!(rows[1].values, vec![50.0, 5.0]);
}

#[test]
fn test_group_by_empty_records() {
    assert!(group_by(&[], Dimension::Region, &[Measure::Sales]).is_empty());
}

#[test]
fn test_group_totals_reconcile_with_summary() {
    let records = records();
    let rows = group_by(&records, Dimension::Category, &[Measure::Sales]);

    let grouped_total: f64 = rows.iter().map(|r| r.values[0]).sum();
    assert_eq!(grouped_total, summarize(&records).total_sales);
}

#[test]
fn test_top_truncates() {
    let rows = group_by(&records(), Dimension::Product, &[Measure::Profit]);
    assert_eq!(rows.len(), 4);

    let top2 = top(rows.clone(), 2);
    assert_eq!(top2.len(), 2);
    assert_eq!(top2[0].key, "Phone Stand");
    assert_eq!(top2[1].key, "Wireless Mouse");

    // Fewer groups than requested returns everything.
    let top10 = top(rows, 10);
    assert_eq!(top10.len(), 4);
}

#[test]
fn test_top_is_non_increasing() {
    let rows = top(group_by(&records(), Dimension::Product, &[Measure::Profit]), 4);
    for pair in rows.windows(2) {
        assert!(pair[0].values[0] >= pair[1].values[0]);
    }
}

#[test]
fn test_group_by_pair_sums_per_pair() {
    let rows = group_by_pair(&records(), Dimension::Segment, Dimension::Category, Measure::Sales);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].first, "Consumer");
    assert_eq!(rows[0].second, "Technology");
    assert_eq!(rows[0].value, 450.0);

    let consumer_furniture = rows
        .iter()
        .find(|r| r.first == "Consumer" && r.second == "Furniture")
        .unwrap();
    assert_eq!(consumer_furniture.value, 100.0);
}

#[test]
fn test_partition_series_groups_by_first_dimension() {
    let rows = group_by_pair(&records(), Dimension::Segment, Dimension::Category, Measure::Sales);
    let series = partition_series(&rows);

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].label, "Consumer");
    assert_eq!(series[0].points.len(), 2);
    assert_eq!(series[1].label, "Corporate");
    assert_eq!(series[1].points, vec![("Furniture".to_string(), 50.0)]);
}
