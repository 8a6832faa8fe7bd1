//! Plain terminal rendering of the dashboard.

use crate::presentation::chart::{ChartDescriptor, ChartKind};
use crate::presentation::dashboard::{ChartSlot, Dashboard};
use prettytable::format;
use prettytable::{Cell, Row, Table};
use std::fmt;

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

impl fmt::Display for ChartDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        match self.kind {
            ChartKind::Bar => {
                let mut header = vec![Cell::new("CATEGORY")];
                header.extend(self.datasets.iter().map(|series| {
                    Cell::new(&series.label.as_deref().unwrap_or("VALUE").to_uppercase())
                }));
                table.set_titles(Row::new(header));

                for (index, label) in self.labels.iter().enumerate() {
                    let mut cells = vec![Cell::new(label)];
                    cells.extend(self.datasets.iter().map(|series| {
                        let value = series.data.get(index).copied().map(format_value);
                        Cell::new(value.as_deref().unwrap_or("-"))
                    }));
                    table.add_row(Row::new(cells));
                }
            }
            ChartKind::Pie => {
                table.set_titles(Row::new(vec![
                    Cell::new("SLICE"),
                    Cell::new("VALUE"),
                    Cell::new("SHARE"),
                ]));

                let total: f64 = self.slices().map(|(_, value)| value).sum();
                for (label, value) in self.slices() {
                    let share = if total > 0.0 {
                        format!("{:.1}%", value / total * 100.0)
                    } else {
                        "-".to_string()
                    };
                    table.add_row(Row::new(vec![
                        Cell::new(label),
                        Cell::new(&format_value(value)),
                        Cell::new(&share),
                    ]));
                }
            }
        }

        writeln!(f, "{}", self.title)?;
        write!(f, "{}", table)
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = self.message() {
            writeln!(f, "{message}")?;
        }
        for slot in ChartSlot::ALL {
            if let Some(chart) = self.chart(slot) {
                writeln!(f)?;
                write!(f, "{chart}")?;
            }
        }
        if let Some(data) = self.data() {
            writeln!(f)?;
            writeln!(f, "{data}")?;
        }
        Ok(())
    }
}
