/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::presentation::chart::{ChartDescriptor, ChartPair};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Fixed chart regions of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartSlot {
    /// Bar chart of open/high/low prices
    PriceBreakdown,
    /// Pie chart of traded volume
    VolumeShare,
}

impl ChartSlot {
    /// Both slots, in page order
    pub const ALL: [ChartSlot; 2] = [ChartSlot::PriceBreakdown, ChartSlot::VolumeShare];

    /// Element id of the canvas bound to this slot
    #[must_use]
    pub fn element_id(&self) -> &'static str {
        match self {
            ChartSlot::PriceBreakdown => "separate-pay",
            ChartSlot::VolumeShare => "total-pay",
        }
    }
}

impl fmt::Display for ChartSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// Display regions written by the page controller
///
/// Holds the "Logged in as" banner, the plain-text data region and the two
/// chart slots. A slot holds at most one chart: drawing into an occupied slot
/// destroys the previous chart first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    message: Option<String>,
    data: Option<String>,
    price_chart: Option<ChartDescriptor>,
    volume_chart: Option<ChartDescriptor>,
}

impl Dashboard {
    /// Creates an empty dashboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Banner text, e.g. `Logged in as Admin User`
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Plain-text data region
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// Chart currently drawn in `slot`
    pub fn chart(&self, slot: ChartSlot) -> Option<&ChartDescriptor> {
        match slot {
            ChartSlot::PriceBreakdown => self.price_chart.as_ref(),
            ChartSlot::VolumeShare => self.volume_chart.as_ref(),
        }
    }

    /// Checks whether any chart is drawn
    #[must_use]
    pub fn has_charts(&self) -> bool {
        self.price_chart.is_some() || self.volume_chart.is_some()
    }

    /// Replaces the banner text
    pub fn set_message(&mut self, text: impl Into<String>) {
        self.message = Some(text.into());
    }

    /// Replaces the plain-text data region
    pub fn set_data(&mut self, text: impl Into<String>) {
        self.data = Some(text.into());
    }

    /// Draws a chart into `slot`, destroying the chart already there
    pub fn draw(&mut self, slot: ChartSlot, chart: ChartDescriptor) {
        let target = self.slot_mut(slot);
        if target.take().is_some() {
            debug!("Destroyed previous chart in {}", slot);
        }
        *target = Some(chart);
    }

    /// Draws both charts of a pair into their slots
    pub fn draw_pair(&mut self, pair: ChartPair) {
        self.draw(ChartSlot::PriceBreakdown, pair.prices);
        self.draw(ChartSlot::VolumeShare, pair.volumes);
    }

    /// Destroys the chart in `slot`, if any
    pub fn destroy(&mut self, slot: ChartSlot) {
        if self.slot_mut(slot).take().is_some() {
            debug!("Destroyed chart in {}", slot);
        }
    }

    /// Empties every region
    pub fn clear(&mut self) {
        for slot in ChartSlot::ALL {
            self.destroy(slot);
        }
        self.message = None;
        self.data = None;
    }

    fn slot_mut(&mut self, slot: ChartSlot) -> &mut Option<ChartDescriptor> {
        match slot {
            ChartSlot::PriceBreakdown => &mut self.price_chart,
            ChartSlot::VolumeShare => &mut self.volume_chart,
        }
    }
}
