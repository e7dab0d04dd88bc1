//! Presenter: turns a calculation plan into a renderable table.
//!
//! The table is a render model first (columns, connectors, detail
//! fragments) and a text renderer second, so embedders can lay the model
//! out however they like while the CLI gets a plain-text grid for free.

use std::fmt::Write as _;

use common::{AdditionalServiceItemData, ServiceItemCode, ServiceItemParam, ShipmentType};

use crate::{Calculation, CalculationEngine};

/// Table layout. Small suppresses the connective iconography entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableSize {
    Small,
    #[default]
    Large,
}

/// Connective icon shown before a column in the large layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    Multiply,
    Equals,
}

impl Connector {
    pub fn symbol(self) -> char {
        match self {
            Connector::Multiply => '\u{00D7}',
            Connector::Equals => '=',
        }
    }
}

/// A detail line under a column. The FSC price-difference detail is split
/// into separate label/value fragments; everything else is one line.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailFragment {
    Line(String),
    Split { label: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableColumn {
    /// Icon preceding this column; `None` on the first column.
    pub connector: Option<Connector>,
    pub label: String,
    pub value: String,
    pub details: Vec<DetailFragment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculationTable {
    pub columns: Vec<TableColumn>,
}

impl CalculationEngine {
    /// Build the presenter model for one service item, or `None` when the
    /// item should not render a breakdown at all: code outside the
    /// allow-list, or no parameters delivered. Two independent guards —
    /// the planner's empty-plan fallback is not relied on here.
    pub fn calculation_table(
        &self,
        code: ServiceItemCode,
        total_cents: i64,
        params: &[ServiceItemParam],
        additional: Option<&AdditionalServiceItemData>,
        shipment_type: Option<ShipmentType>,
    ) -> Option<CalculationTable> {
        if !self.is_allowed(code) || params.is_empty() {
            return None;
        }

        let calculations =
            self.make_calculations(code, total_cents, params, additional, shipment_type);
        if calculations.is_empty() {
            return None;
        }

        let last = calculations.len() - 1;
        let columns = calculations
            .into_iter()
            .enumerate()
            .map(|(i, calc)| {
                let connector = if i == 0 {
                    None
                } else if i == last {
                    Some(Connector::Equals)
                } else {
                    Some(Connector::Multiply)
                };
                TableColumn {
                    connector,
                    details: self.detail_fragments(&calc),
                    label: calc.label,
                    value: calc.value,
                }
            })
            .collect();

        Some(CalculationTable { columns })
    }

    fn detail_fragments(&self, calc: &Calculation) -> Vec<DetailFragment> {
        calc.details
            .iter()
            .map(|detail| {
                if detail.contains(self.labels().fsc_price_difference.as_str()) {
                    if let Some((label, value)) = detail.split_once(':') {
                        return DetailFragment::Split {
                            label: label.to_string(),
                            value: value.trim_start().to_string(),
                        };
                    }
                }
                DetailFragment::Line(detail.clone())
            })
            .collect()
    }
}

impl CalculationTable {
    /// Plain-text rendering. Connectors appear only in the large layout.
    pub fn render(&self, size: TableSize) -> String {
        let mut out = String::new();
        for column in &self.columns {
            if size == TableSize::Large {
                if let Some(connector) = column.connector {
                    let _ = writeln!(out, "{}", connector.symbol());
                }
            }
            let _ = writeln!(out, "{}: {}", column.label, column.value);
            for detail in &column.details {
                match detail {
                    DetailFragment::Line(text) if !text.is_empty() => {
                        let _ = writeln!(out, "  {text}");
                    }
                    DetailFragment::Line(_) => {}
                    DetailFragment::Split { label, value } => {
                        let _ = writeln!(out, "  {label}:");
                        let _ = writeln!(out, "  {value}");
                    }
                }
            }
        }
        out
    }
}
