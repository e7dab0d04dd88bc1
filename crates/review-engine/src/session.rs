//! Review session: navigation, per-card forms, and aggregate totals.
//!
//! A session owns the card list for one payment request. Cards are sorted
//! by creation time; basic (shipment-less) items are gathered onto a
//! single combined page while shipment items page one at a time. All
//! persistence goes through the injected [`PaymentServiceItemStore`].

use common::{Error, Result, ServiceItemCard, ServiceItemStatus};
use tracing::{debug, warn};

use crate::card::{CardAction, CardForm, StatusUpdate};

/// Persistence seam for approve/reject/clear commits. Implemented by the
/// embedding layer (HTTP client in production, a recorder in tests).
pub trait PaymentServiceItemStore {
    fn patch_payment_service_item(&mut self, item_id: &str, update: &StatusUpdate) -> Result<()>;
}

/// One navigable page: either the combined batch of basic items or a
/// single shipment-attached item. Indices point into the session's
/// sorted card list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewPage {
    Basic(Vec<usize>),
    Shipment(usize),
}

impl ReviewPage {
    pub fn indices(&self) -> Vec<usize> {
        match self {
            ReviewPage::Basic(indices) => indices.clone(),
            ReviewPage::Shipment(index) => vec![*index],
        }
    }
}

/// Running totals over committed decisions. Undecided items count in
/// neither sum.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReviewTotals {
    pub approved: f64,
    pub rejected: f64,
}

/// Derived end-of-review view.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSummary {
    pub totals: ReviewTotals,
    /// Items with no committed decision yet.
    pub pending: usize,
    pub item_count: usize,
}

struct CardState {
    form: CardForm,
    show_calculations: bool,
}

pub struct ReviewSession {
    cards: Vec<ServiceItemCard>,
    states: Vec<CardState>,
    pages: Vec<ReviewPage>,
    cursor: usize,
}

impl ReviewSession {
    pub fn new(mut cards: Vec<ServiceItemCard>) -> Self {
        cards.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let states = cards
            .iter()
            .map(|card| CardState {
                form: CardForm::seeded(card.status, card.rejection_reason.as_deref()),
                show_calculations: false,
            })
            .collect();

        // All basic items share one page, anchored where the earliest
        // basic item falls in the sort order.
        let basic_indices: Vec<usize> = cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_basic())
            .map(|(i, _)| i)
            .collect();
        let mut pages = Vec::new();
        let mut basics_placed = false;
        for (i, card) in cards.iter().enumerate() {
            if card.is_basic() {
                if !basics_placed {
                    pages.push(ReviewPage::Basic(basic_indices.clone()));
                    basics_placed = true;
                }
            } else {
                pages.push(ReviewPage::Shipment(i));
            }
        }

        Self {
            cards,
            states,
            pages,
            cursor: 0,
        }
    }

    // ── navigation ────────────────────────────────────────────────────

    pub fn cards(&self) -> &[ServiceItemCard] {
        &self.cards
    }

    pub fn pages(&self) -> &[ReviewPage] {
        &self.pages
    }

    pub fn current_page(&self) -> Option<&ReviewPage> {
        self.pages.get(self.cursor)
    }

    pub fn has_prev(&self) -> bool {
        self.cursor > 0
    }

    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.pages.len()
    }

    /// Advance to the next page; no wraparound.
    pub fn next(&mut self) {
        if self.has_next() {
            self.cursor += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.cursor -= 1;
        }
    }

    /// 1-based ordinal of the first item on the current page, with the
    /// total item count: the "1 OF 4 ITEMS" pair.
    pub fn item_position(&self) -> (usize, usize) {
        let ordinal = self
            .current_page()
            .and_then(|p| p.indices().first().copied())
            .map(|i| i + 1)
            .unwrap_or(0);
        (ordinal, self.cards.len())
    }

    // ── per-card form actions ─────────────────────────────────────────

    fn index_of(&self, item_id: &str) -> Result<usize> {
        self.cards
            .iter()
            .position(|c| c.id == item_id)
            .ok_or_else(|| Error::UnknownServiceItem(item_id.to_string()))
    }

    pub fn form(&self, item_id: &str) -> Result<&CardForm> {
        Ok(&self.states[self.index_of(item_id)?].form)
    }

    /// Apply a user action to one card, flushing any resulting commit
    /// through the store. If the store fails, the card's local form state
    /// rolls back to its pre-action value and the error propagates.
    pub fn apply(
        &mut self,
        item_id: &str,
        action: CardAction,
        store: &mut dyn PaymentServiceItemStore,
    ) -> Result<Option<StatusUpdate>> {
        let index = self.index_of(item_id)?;
        let snapshot = self.states[index].form.clone();

        let update = self.states[index].form.apply(action);
        if let Some(update) = &update {
            if let Err(err) = store.patch_payment_service_item(item_id, update) {
                warn!(item_id, %err, "patch failed; rolling back card form");
                self.states[index].form = snapshot;
                return Err(err);
            }
            debug!(item_id, status = ?update.status, "committed service item update");
        }
        Ok(update)
    }

    // ── calculation visibility ────────────────────────────────────────

    /// Toggle the pricing breakdown for one card. Cards toggle
    /// independently; default is hidden.
    pub fn toggle_calculations(&mut self, item_id: &str) -> Result<bool> {
        let index = self.index_of(item_id)?;
        let state = &mut self.states[index];
        state.show_calculations = !state.show_calculations;
        Ok(state.show_calculations)
    }

    pub fn calculations_visible(&self, item_id: &str) -> Result<bool> {
        Ok(self.states[self.index_of(item_id)?].show_calculations)
    }

    // ── aggregates ────────────────────────────────────────────────────

    /// Approved and rejected dollar sums over the cards' current form
    /// state. Recomputed on demand; items with no committed decision are
    /// excluded from both.
    pub fn totals(&self) -> ReviewTotals {
        let mut totals = ReviewTotals::default();
        for (card, state) in self.cards.iter().zip(&self.states) {
            match state.form.effective_status() {
                Some(ServiceItemStatus::Approved) => totals.approved += card.amount,
                Some(ServiceItemStatus::Denied) => totals.rejected += card.amount,
                _ => {}
            }
        }
        totals
    }

    pub fn summary(&self) -> ReviewSummary {
        let pending = self
            .states
            .iter()
            .filter(|s| s.form.effective_status().is_none())
            .count();
        ReviewSummary {
            totals: self.totals(),
            pending,
            item_count: self.cards.len(),
        }
    }

    /// Finish the review. Fails while any item still lacks a committed
    /// decision; the caller fires its completion callback on `Ok`.
    pub fn complete_review(&self) -> Result<ReviewSummary> {
        let summary = self.summary();
        if summary.pending > 0 {
            return Err(Error::Validation(format!(
                "{} service item(s) still require review",
                summary.pending
            )));
        }
        Ok(summary)
    }
}
