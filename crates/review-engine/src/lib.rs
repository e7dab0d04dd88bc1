//! Payment service item review workflow.
//!
//! Two layers: [`card`] holds the per-item approve/reject form state
//! machine, and [`session`] composes the forms into a navigable review
//! pass over one payment request, with aggregate totals and the
//! completion gate. Persistence is abstracted behind
//! [`session::PaymentServiceItemStore`] so the engine stays testable
//! without a backend.

pub mod card;
pub mod session;

pub use card::{CardAction, CardDecision, CardForm, StatusUpdate};
pub use session::{
    PaymentServiceItemStore, ReviewPage, ReviewSession, ReviewSummary, ReviewTotals,
};
