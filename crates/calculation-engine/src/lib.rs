//! Service item pricing calculation engine.
//!
//! Maps the bag of pricing parameters returned by the backend pricing run
//! into an ordered, human-readable breakdown of how each service item's
//! requested amount was derived: one calculation plan per pricing code,
//! one row per priced concept, always terminated by the requested total.
//!
//! All functions here are pure and synchronous — safe to call on every
//! render of the review surface.

pub mod builders;
pub mod formatters;
pub mod labels;
pub mod params;
pub mod planner;
pub mod table;

use std::collections::BTreeSet;

use common::ServiceItemCode;
use serde::Serialize;

pub use labels::Labels;
pub use params::ParamKey;
pub use table::{CalculationTable, Connector, DetailFragment, TableColumn, TableSize};

/// One row of a pricing breakdown. `value` is already display-formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub value: String,
    pub label: String,
    pub details: Vec<String>,
}

impl Calculation {
    pub fn new(
        value: impl Into<String>,
        label: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            details,
        }
    }
}

/// The engine: label table plus the allow-list of codes the presenter may
/// render a breakdown for. Both are injected state, not globals.
#[derive(Debug, Clone)]
pub struct CalculationEngine {
    labels: Labels,
    allowed: BTreeSet<ServiceItemCode>,
}

impl Default for CalculationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculationEngine {
    pub fn new() -> Self {
        Self {
            labels: Labels::default(),
            allowed: Self::default_allowed_codes(),
        }
    }

    pub fn with_labels(labels: Labels) -> Self {
        Self {
            labels,
            allowed: Self::default_allowed_codes(),
        }
    }

    /// Replace the presenter allow-list, e.g. from configuration.
    pub fn with_allowed_codes(mut self, allowed: BTreeSet<ServiceItemCode>) -> Self {
        self.allowed = allowed;
        self
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Whether the presenter may render a breakdown for this code.
    pub fn is_allowed(&self, code: ServiceItemCode) -> bool {
        self.allowed.contains(&code)
    }

    /// Every code with a calculation plan. MS/CS and unknown codes are
    /// deliberately absent: they have no priced breakdown.
    pub fn default_allowed_codes() -> BTreeSet<ServiceItemCode> {
        use ServiceItemCode::*;
        [
            DLH, DSH, FSC, DOSFSC, DDSFSC, DOP, DDP, DOFSIT, DDFSIT, DOASIT, DDASIT, DOPSIT,
            DDDSIT, DPK, DNPK, DUPK, DCRT, DUCRT, DOSHUT, DDSHUT, ISLH, IHPK, IHUPK, ICRT, IUCRT,
        ]
        .into_iter()
        .collect()
    }
}
