//! Dispute lifecycle tracking
//!
//! This module maintains the set of transactions currently under dispute and
//! drives the dispute → resolve/chargeback transitions for each iteration.
//!
//! # Referential Consistency
//!
//! A transaction enters the open set only through a dispute on the iteration
//! that emitted it, and leaves it through exactly one resolve or chargeback.
//! Every lifecycle event therefore references a transaction that has already
//! been emitted and, for closes, one that is still open.
//!
//! # Random Member Removal
//!
//! The open set is an index-addressable vector. Closing a dispute picks a
//! uniformly random index and removes it with `swap_remove`, so removal is
//! O(1) and every open member is equally likely to be chosen.

use crate::core::traits::RandomSource;
use crate::types::{ClientId, EventKind, StreamEvent, TransactionId};

/// Transactions that are disputed but neither resolved nor charged back
#[derive(Debug, Clone, Default)]
pub struct OpenDisputeSet {
    members: Vec<TransactionId>,
}

impl OpenDisputeSet {
    /// Create an empty set
    pub fn new() -> Self {
        OpenDisputeSet {
            members: Vec::new(),
        }
    }

    /// Open a dispute on a transaction
    pub fn insert(&mut self, tx_id: TransactionId) {
        self.members.push(tx_id);
    }

    /// Remove and return a uniformly chosen member
    ///
    /// # Returns
    ///
    /// * `Some(TransactionId)` - The member that was closed
    /// * `None` - If the set is empty (nothing is drawn from `rng`)
    pub fn remove_random<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Option<TransactionId> {
        if self.members.is_empty() {
            return None;
        }
        let index = rng.below(self.members.len() as u64) as usize;
        Some(self.members.swap_remove(index))
    }

    /// Whether a transaction is currently under dispute
    pub fn contains(&self, tx_id: TransactionId) -> bool {
        self.members.contains(&tx_id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Drives the per-iteration dispute, resolve and chargeback checks
#[derive(Debug, Clone)]
pub struct DisputeLifecycleTracker {
    open: OpenDisputeSet,
    dispute_probability: f64,
    resolve_probability: f64,
    chargeback_probability: f64,
}

impl DisputeLifecycleTracker {
    /// Create a tracker with an empty open set
    pub fn new(
        dispute_probability: f64,
        resolve_probability: f64,
        chargeback_probability: f64,
    ) -> Self {
        DisputeLifecycleTracker {
            open: OpenDisputeSet::new(),
            dispute_probability,
            resolve_probability,
            chargeback_probability,
        }
    }

    /// Run the three lifecycle checks after the financial event for `tx_id`
    ///
    /// In order:
    /// 1. Dispute `tx_id` and add it to the open set
    /// 2. If the set is non-empty, resolve a random open member
    /// 3. If the set is still non-empty, charge back a random open member
    ///
    /// Each check is an independent trial and fires at most once. An empty set
    /// skips the resolve/chargeback trial entirely. All lifecycle events carry
    /// the iteration's client ID, not the client of the referenced transaction.
    ///
    /// # Arguments
    ///
    /// * `rng` - Random source for the trials and member selection
    /// * `client` - The client ID chosen for this iteration
    /// * `tx_id` - The transaction ID of this iteration's financial event
    /// * `out` - Buffer receiving any lifecycle events, in emission order
    pub fn advance<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
        client: ClientId,
        tx_id: TransactionId,
        out: &mut Vec<StreamEvent>,
    ) {
        if rng.chance(self.dispute_probability) {
            self.open.insert(tx_id);
            out.push(StreamEvent::lifecycle(EventKind::Dispute, client, tx_id));
        }

        if let Some(closed) = self.close(rng, self.resolve_probability) {
            out.push(StreamEvent::lifecycle(EventKind::Resolve, client, closed));
        }

        if let Some(closed) = self.close(rng, self.chargeback_probability) {
            out.push(StreamEvent::lifecycle(EventKind::Chargeback, client, closed));
        }
    }

    fn close<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
        probability: f64,
    ) -> Option<TransactionId> {
        if self.open.is_empty() || !rng.chance(probability) {
            return None;
        }
        self.open.remove_random(rng)
    }

    /// The disputes currently open
    pub fn open_disputes(&self) -> &OpenDisputeSet {
        &self.open
    }
}
