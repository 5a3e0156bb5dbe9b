//! Event types emitted by the stream generator
//!
//! This module defines the event kinds, identifiers and the generated event
//! record shared between the generator core and the CSV encoder.

use serde::Serialize;

/// Client identifier
///
/// Supports client IDs from 0 to 4,294,967,295. The population grows by
/// roughly three clients per four iterations, so a million-iteration run
/// introduces far more clients than a u16 could hold.
pub type ClientId = u32;

/// Transaction identifier
///
/// Assigned as the 0-based iteration index of the generation loop.
pub type TransactionId = u32;

/// Kinds of events the generator emits
///
/// Deposits and withdrawals are financial events carrying an amount.
/// Disputes, resolves and chargebacks are lifecycle events that reference
/// an earlier financial event by transaction ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Credit funds to a client account
    Deposit,

    /// Debit funds from a client account
    Withdrawal,

    /// Open a dispute on the current iteration's transaction
    Dispute,

    /// Close an open dispute in favour of the client
    Resolve,

    /// Close an open dispute by reversing the transaction
    Chargeback,
}

impl EventKind {
    /// Whether this kind carries an amount on the wire
    pub fn is_financial(self) -> bool {
        matches!(self, EventKind::Deposit | EventKind::Withdrawal)
    }
}

/// One generated event
///
/// The amount is only present for deposits and withdrawals. Lifecycle events
/// carry no amount field at all (3 columns instead of 4).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamEvent {
    /// The event kind
    pub kind: EventKind,

    /// The client ID the event is attributed to
    pub client: ClientId,

    /// The transaction this event is or refers to
    pub tx: TransactionId,

    /// Amount in `[amount_min, amount_max)`, financial events only
    pub amount: Option<f64>,
}

impl StreamEvent {
    /// Create a deposit or withdrawal event
    pub fn financial(kind: EventKind, client: ClientId, tx: TransactionId, amount: f64) -> Self {
        debug_assert!(kind.is_financial());
        StreamEvent {
            kind,
            client,
            tx,
            amount: Some(amount),
        }
    }

    /// Create a dispute, resolve or chargeback event
    pub fn lifecycle(kind: EventKind, client: ClientId, tx: TransactionId) -> Self {
        debug_assert!(!kind.is_financial());
        StreamEvent {
            kind,
            client,
            tx,
            amount: None,
        }
    }
}
