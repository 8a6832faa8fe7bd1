use assert_json_diff::assert_json_eq;
use crypto_dash::model::dataset::{Dataset, MonthlyPrice, MonthlyVolume};
use crypto_dash::model::responses::Payload;
use crypto_dash::presentation::chart::{
    ChartConfig, ChartKind, SeriesSpec, charts_for, monthly_price_chart,
};
use crypto_dash::router::Endpoint;
use serde_json::json;

fn month(name: &str, open: f64, high: f64, low: f64) -> MonthlyPrice {
    MonthlyPrice {
        month: name.to_string(),
        open_price: open,
        high_price: high,
        low_price: low,
    }
}

#[test]
fn test_manager_single_instrument_charts() {
    let payload = Payload::Json(json!([
        [{ "Crypto_Key": "BTC", "Open_Price": 1, "High_Price": 2, "Low_Price": 0.5 }],
        [{ "Name": "BTC", "Volume_Traded": 100 }]
    ]));
    let dataset = Dataset::parse(Endpoint::Manager, &payload);
    let pair = charts_for(&dataset).expect("manager dataset is chartable");

    assert_eq!(pair.prices.kind, ChartKind::Bar);
    assert_eq!(pair.prices.labels, vec!["BTC"]);
    let values: Vec<f64> = pair.prices.datasets.iter().map(|s| s.data[0]).collect();
    assert_eq!(values, vec![1.0, 2.0, 0.5]);

    assert_eq!(pair.volumes.kind, ChartKind::Pie);
    assert_eq!(pair.volumes.slices().collect::<Vec<_>>(), vec![("BTC", 100.0)]);
}

#[test]
fn test_manager_chartjs_config() {
    let payload = Payload::Json(json!([
        [{ "Crypto_Key": "BTC", "Open_Price": 1, "High_Price": 2, "Low_Price": 0.5 }],
        [{ "Name": "BTC", "Volume_Traded": 100 }]
    ]));
    let pair = charts_for(&Dataset::parse(Endpoint::Manager, &payload)).unwrap();

    assert_json_eq!(
        pair.prices.to_chartjs(),
        json!({
            "type": "bar",
            "data": {
                "labels": ["BTC"],
                "datasets": [
                    { "label": "Open Price", "data": [1.0], "backgroundColor": "#f2cbae" },
                    { "label": "High Price", "data": [2.0], "backgroundColor": "#ebb4d3" },
                    { "label": "Low Price", "data": [0.5], "backgroundColor": "#2b2a65" }
                ]
            },
            "options": {
                "plugins": {
                    "title": { "display": true, "text": "Crypto Price Breakdown by Token" }
                }
            }
        })
    );

    assert_json_eq!(
        pair.volumes.to_chartjs(),
        json!({
            "type": "pie",
            "data": { "labels": ["BTC"], "datasets": [{ "data": [100.0] }] },
            "options": {
                "plugins": { "title": { "display": true, "text": "Volume Traded by Token" } }
            }
        })
    );
}

#[test]
fn test_months_sorted_with_their_values() {
    let rows = vec![
        month("March", 30.0, 31.0, 29.0),
        month("January", 10.0, 11.0, 9.0),
        month("February", 20.0, 21.0, 19.0),
    ];
    let chart = monthly_price_chart().render(&rows);

    assert_eq!(chart.labels, vec!["January", "February", "March"]);
    assert_eq!(chart.datasets[0].data, vec![10.0, 20.0, 30.0]);
    assert_eq!(chart.datasets[1].data, vec![11.0, 21.0, 31.0]);
    assert_eq!(chart.datasets[2].data, vec![9.0, 19.0, 29.0]);
}

#[test]
fn test_month_sort_is_stable_and_unknown_last() {
    let rows = vec![
        month("Unknown", 0.0, 0.0, 0.0),
        month("May", 1.0, 0.0, 0.0),
        month("May", 2.0, 0.0, 0.0),
        month("April", 3.0, 0.0, 0.0),
    ];
    let chart = monthly_price_chart().render(&rows);
    assert_eq!(chart.labels, vec!["April", "May", "May", "Unknown"]);
    assert_eq!(chart.datasets[0].data, vec![3.0, 1.0, 2.0, 0.0]);
}

#[test]
fn test_employee_pie_follows_calendar_order() {
    let dataset = Dataset::Employee {
        prices: vec![],
        volumes: vec![
            MonthlyVolume { month: "December".to_string(), volume_traded: 12.0 },
            MonthlyVolume { month: "June".to_string(), volume_traded: 6.0 },
        ],
    };
    let pair = charts_for(&dataset).unwrap();
    assert_eq!(pair.volumes.title, "Volume Traded per Month");
    assert_eq!(
        pair.volumes.slices().collect::<Vec<_>>(),
        vec![("June", 6.0), ("December", 12.0)]
    );
    assert!(pair.prices.labels.is_empty());
}

#[test]
fn test_unknown_dataset_has_no_charts() {
    assert!(charts_for(&Dataset::Unknown("raw".to_string())).is_none());
}

#[test]
fn test_custom_config_renders_generic_rows() {
    let config: ChartConfig<(String, f64)> = ChartConfig {
        kind: ChartKind::Pie,
        title: "Custom",
        category: |row: &(String, f64)| row.0.clone(),
        series: vec![SeriesSpec {
            label: Some("Value"),
            color: None,
            value: |row| row.1,
        }],
        sort_key: None,
    }
    .sorted_by(|row| row.1 as u32);

    let chart = config.render(&[("b".to_string(), 2.0), ("a".to_string(), 1.0)]);
    assert_eq!(chart.labels, vec!["a", "b"]);
    assert_eq!(chart.datasets[0].label.as_deref(), Some("Value"));
}
