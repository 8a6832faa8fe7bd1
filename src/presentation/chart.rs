/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Chart descriptors and the single renderer that builds them
//!
//! A [`ChartConfig`] describes how rows map onto a chart: which field names
//! the categories, which fields become series, and an optional sort key.
//! The manager and employee views are two sets of such configurations.

use crate::constants::{HIGH_PRICE_COLOR, LOW_PRICE_COLOR, OPEN_PRICE_COLOR};
use crate::model::dataset::{
    Dataset, InstrumentPrice, InstrumentVolume, MonthlyPrice, MonthlyVolume,
};
use crate::utils::months::month_ordinal;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Chart type understood by the charting library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Grouped bar chart
    Bar,
    /// Pie chart
    Pie,
}

/// One data series of a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    /// Legend label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// One value per category
    pub data: Vec<f64>,
    /// Fill colour
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// Fully built chart, independent of any drawing backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    /// Chart type
    pub kind: ChartKind,
    /// Title shown above the chart
    pub title: String,
    /// Category labels, in display order
    pub labels: Vec<String>,
    /// Series, each aligned with `labels`
    pub datasets: Vec<ChartSeries>,
}

impl ChartDescriptor {
    /// Chart.js configuration object for this chart
    #[must_use]
    pub fn to_chartjs(&self) -> Value {
        json!({
            "type": self.kind,
            "data": {
                "labels": self.labels,
                "datasets": self.datasets,
            },
            "options": {
                "plugins": {
                    "title": {
                        "display": true,
                        "text": self.title,
                    }
                }
            }
        })
    }

    /// Values of the first series, paired with their labels
    pub fn slices(&self) -> impl Iterator<Item = (&str, f64)> {
        let values = self.datasets.first().map(|s| s.data.as_slice()).unwrap_or(&[]);
        self.labels.iter().map(String::as_str).zip(values.iter().copied())
    }
}

/// How one series is read from a row
pub struct SeriesSpec<R> {
    /// Legend label
    pub label: Option<&'static str>,
    /// Fill colour
    pub color: Option<&'static str>,
    /// Field extractor
    pub value: fn(&R) -> f64,
}

/// Parameterized chart renderer
pub struct ChartConfig<R> {
    /// Chart type
    pub kind: ChartKind,
    /// Chart title
    pub title: &'static str,
    /// Category extractor
    pub category: fn(&R) -> String,
    /// Series extractors
    pub series: Vec<SeriesSpec<R>>,
    /// Optional ordering of the rows; the sort is stable
    pub sort_key: Option<fn(&R) -> u32>,
}

impl<R> ChartConfig<R> {
    /// Orders rows by `key` before rendering
    #[must_use]
    pub fn sorted_by(mut self, key: fn(&R) -> u32) -> Self {
        self.sort_key = Some(key);
        self
    }

    /// Builds the chart for `rows`
    ///
    /// When a sort key is set, categories and every series are permuted
    /// together so each value stays with its category.
    pub fn render(&self, rows: &[R]) -> ChartDescriptor {
        let mut order: Vec<&R> = rows.iter().collect();
        if let Some(key) = self.sort_key {
            order.sort_by_key(|row| key(row));
        }

        ChartDescriptor {
            kind: self.kind,
            title: self.title.to_string(),
            labels: order.iter().map(|row| (self.category)(row)).collect(),
            datasets: self
                .series
                .iter()
                .map(|spec| ChartSeries {
                    label: spec.label.map(str::to_string),
                    data: order.iter().map(|row| (spec.value)(row)).collect(),
                    background_color: spec.color.map(str::to_string),
                })
                .collect(),
        }
    }
}

/// The two charts of the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPair {
    /// Price breakdown bar chart
    pub prices: ChartDescriptor,
    /// Volume share pie chart
    pub volumes: ChartDescriptor,
}

fn price_series<R>(
    open: fn(&R) -> f64,
    high: fn(&R) -> f64,
    low: fn(&R) -> f64,
) -> Vec<SeriesSpec<R>> {
    vec![
        SeriesSpec {
            label: Some("Open Price"),
            color: Some(OPEN_PRICE_COLOR),
            value: open,
        },
        SeriesSpec {
            label: Some("High Price"),
            color: Some(HIGH_PRICE_COLOR),
            value: high,
        },
        SeriesSpec {
            label: Some("Low Price"),
            color: Some(LOW_PRICE_COLOR),
            value: low,
        },
    ]
}

fn volume_series<R>(volume: fn(&R) -> f64) -> Vec<SeriesSpec<R>> {
    vec![SeriesSpec {
        label: None,
        color: None,
        value: volume,
    }]
}

/// Bar chart of per-instrument prices
pub fn instrument_price_chart() -> ChartConfig<InstrumentPrice> {
    ChartConfig {
        kind: ChartKind::Bar,
        title: "Crypto Price Breakdown by Token",
        category: |row| row.crypto_key.clone(),
        series: price_series::<InstrumentPrice>(
            |r| r.open_price,
            |r| r.high_price,
            |r| r.low_price,
        ),
        sort_key: None,
    }
}

/// Pie chart of per-instrument volume
pub fn instrument_volume_chart() -> ChartConfig<InstrumentVolume> {
    ChartConfig {
        kind: ChartKind::Pie,
        title: "Volume Traded by Token",
        category: |row| row.name.clone(),
        series: volume_series::<InstrumentVolume>(|r| r.volume_traded),
        sort_key: None,
    }
}

/// Bar chart of monthly prices, in calendar order
pub fn monthly_price_chart() -> ChartConfig<MonthlyPrice> {
    ChartConfig {
        kind: ChartKind::Bar,
        title: "Monthly Crypto Price Breakdown",
        category: |row: &MonthlyPrice| row.month.clone(),
        series: price_series::<MonthlyPrice>(|r| r.open_price, |r| r.high_price, |r| r.low_price),
        sort_key: None,
    }
    .sorted_by(|row| month_ordinal(&row.month))
}

/// Pie chart of monthly volume, in calendar order
pub fn monthly_volume_chart() -> ChartConfig<MonthlyVolume> {
    ChartConfig {
        kind: ChartKind::Pie,
        title: "Volume Traded per Month",
        category: |row: &MonthlyVolume| row.month.clone(),
        series: volume_series::<MonthlyVolume>(|r| r.volume_traded),
        sort_key: None,
    }
    .sorted_by(|row| month_ordinal(&row.month))
}

/// Builds both charts for a dataset, `None` for datasets that cannot be charted
#[must_use]
pub fn charts_for(dataset: &Dataset) -> Option<ChartPair> {
    match dataset {
        Dataset::Manager { prices, volumes } => Some(ChartPair {
            prices: instrument_price_chart().render(prices),
            volumes: instrument_volume_chart().render(volumes),
        }),
        Dataset::Employee { prices, volumes } => Some(ChartPair {
            prices: monthly_price_chart().render(prices),
            volumes: monthly_volume_chart().render(volumes),
        }),
        Dataset::Unknown(_) => None,
    }
}
