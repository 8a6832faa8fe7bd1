/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Typed views over the two-element arrays returned by the data endpoints.
//!
//! Element 0 holds per-item price rows, element 1 the matching volume rows.
//! The row layout depends on the endpoint that produced the body; bodies that
//! do not fit the expected layout become [`Dataset::Unknown`].

use crate::model::responses::Payload;
use crate::model::serialization::{float_or_string, string_or_number};
use crate::router::Endpoint;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Average prices of one instrument (manager view)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstrumentPrice {
    /// Instrument identifier
    #[serde(rename = "Crypto_Key", deserialize_with = "string_or_number")]
    pub crypto_key: String,
    /// Opening price
    #[serde(
        rename = "Open_Price",
        alias = "Open Price",
        deserialize_with = "float_or_string"
    )]
    pub open_price: f64,
    /// Highest price
    #[serde(
        rename = "High_Price",
        alias = "High Price",
        deserialize_with = "float_or_string"
    )]
    pub high_price: f64,
    /// Lowest price
    #[serde(
        rename = "Low_Price",
        alias = "Low Price",
        deserialize_with = "float_or_string"
    )]
    pub low_price: f64,
}

/// Traded volume of one instrument (manager view)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstrumentVolume {
    /// Instrument name
    #[serde(rename = "Name", deserialize_with = "string_or_number")]
    pub name: String,
    /// Volume traded
    #[serde(
        rename = "Volume_Traded",
        alias = "Volume Traded",
        deserialize_with = "float_or_string"
    )]
    pub volume_traded: f64,
}

/// Average prices over one calendar month (employee view)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyPrice {
    /// Month name, e.g. `"March"`
    #[serde(rename = "date")]
    pub month: String,
    /// Opening price
    #[serde(
        rename = "Open_Price",
        alias = "Open Price",
        deserialize_with = "float_or_string"
    )]
    pub open_price: f64,
    /// Highest price
    #[serde(
        rename = "High_Price",
        alias = "High Price",
        deserialize_with = "float_or_string"
    )]
    pub high_price: f64,
    /// Lowest price
    #[serde(
        rename = "Low_Price",
        alias = "Low Price",
        deserialize_with = "float_or_string"
    )]
    pub low_price: f64,
}

/// Traded volume over one calendar month (employee view)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyVolume {
    /// Month name
    #[serde(rename = "date")]
    pub month: String,
    /// Volume traded
    #[serde(
        rename = "Volume_Traded",
        alias = "Volume Traded",
        deserialize_with = "float_or_string"
    )]
    pub volume_traded: f64,
}

/// Data returned by one of the role-scoped endpoints
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    /// Per-instrument prices and volumes
    Manager {
        /// Price rows, one per instrument
        prices: Vec<InstrumentPrice>,
        /// Volume rows, one per instrument
        volumes: Vec<InstrumentVolume>,
    },
    /// Per-month prices and volumes, in server order
    Employee {
        /// Price rows, one per month
        prices: Vec<MonthlyPrice>,
        /// Volume rows, one per month
        volumes: Vec<MonthlyVolume>,
    },
    /// Anything that cannot be charted, kept as raw text
    Unknown(String),
}

impl Dataset {
    /// Interprets a payload according to the endpoint it was fetched from
    #[must_use]
    pub fn parse(endpoint: Endpoint, payload: &Payload) -> Self {
        let unknown = || Dataset::Unknown(payload.raw_text());

        let Some(document) = payload.json() else {
            debug!("Payload from {} is not JSON", endpoint);
            return unknown();
        };

        let parsed = match endpoint {
            Endpoint::Manager => split_pair(&document).map(|(prices, volumes)| Dataset::Manager {
                prices,
                volumes,
            }),
            Endpoint::Employee => {
                split_pair(&document).map(|(prices, volumes)| Dataset::Employee { prices, volumes })
            }
            Endpoint::Common => None,
        };

        parsed.unwrap_or_else(unknown)
    }

    /// Checks whether the dataset can be charted
    #[must_use]
    pub fn is_chartable(&self) -> bool {
        !matches!(self, Dataset::Unknown(_))
    }
}

fn split_pair<P, V>(document: &Value) -> Option<(Vec<P>, Vec<V>)>
where
    P: DeserializeOwned,
    V: DeserializeOwned,
{
    let items = document.as_array()?;
    let (Some(first), Some(second)) = (items.first(), items.get(1)) else {
        warn!("Expected a two-element array, got {} elements", items.len());
        return None;
    };

    match (
        serde_json::from_value::<Vec<P>>(first.clone()),
        serde_json::from_value::<Vec<V>>(second.clone()),
    ) {
        (Ok(prices), Ok(volumes)) => Some((prices, volumes)),
        (Err(e), _) | (_, Err(e)) => {
            warn!("Dataset does not match the expected shape: {e}");
            None
        }
    }
}
