//! Stream generation loop
//!
//! This module provides the StreamGenerator that drives the generation loop by
//! coordinating the event type selector, client population, amount synthesizer
//! and dispute lifecycle tracker.
//!
//! # Per-Iteration State Machine
//!
//! ```text
//! Start → FinancialEventEmitted → {Disputed?} → {Resolved?} → {ChargedBack?} → End
//! ```
//!
//! Iteration `t` (0-based) uses `t` as its transaction ID. Every `?` step is an
//! independent trial that may be skipped. There is no retry or recovery path:
//! the loop always runs for the configured number of iterations.

use crate::core::amount::AmountSynthesizer;
use crate::core::config::GeneratorConfig;
use crate::core::dispute_tracker::DisputeLifecycleTracker;
use crate::core::population::ClientPopulation;
use crate::core::selector::select_financial_kind;
use crate::core::traits::RandomSource;
use crate::types::{ClientId, EventKind, GeneratorError, StreamEvent, TransactionId};

/// Counts of what a run emitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub deposits: u64,
    pub withdrawals: u64,
    pub disputes: u64,
    pub resolves: u64,
    pub chargebacks: u64,
    /// Highest client ID introduced
    pub max_client_id: ClientId,
    /// Disputes left open when the loop ended
    pub open_disputes: usize,
}

impl GenerationReport {
    fn record(&mut self, kind: EventKind) {
        match kind {
            EventKind::Deposit => self.deposits += 1,
            EventKind::Withdrawal => self.withdrawals += 1,
            EventKind::Dispute => self.disputes += 1,
            EventKind::Resolve => self.resolves += 1,
            EventKind::Chargeback => self.chargebacks += 1,
        }
    }

    /// Total number of events emitted
    pub fn total_events(&self) -> u64 {
        self.deposits + self.withdrawals + self.disputes + self.resolves + self.chargebacks
    }
}

/// Events of a finished run, in emission order, plus its report
#[derive(Debug, Clone)]
pub struct GeneratedStream {
    pub events: Vec<StreamEvent>,
    pub report: GenerationReport,
}

/// Generator state for one run
///
/// Owns the client population, the open dispute set and the random source.
/// Nothing is shared or persisted; the state is discarded with the generator.
pub struct StreamGenerator<R: RandomSource> {
    rng: R,
    population: ClientPopulation,
    amounts: AmountSynthesizer,
    disputes: DisputeLifecycleTracker,
    next_tx: TransactionId,
    report: GenerationReport,
}

impl<R: RandomSource> StreamGenerator<R> {
    /// Create a generator from a validated config and a random source
    ///
    /// The `seed` field of the config is ignored here; seeding is the caller's
    /// business when building `rng`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the config fails validation.
    pub fn new(config: &GeneratorConfig, rng: R) -> Result<Self, GeneratorError> {
        config.validate()?;

        Ok(StreamGenerator {
            rng,
            population: ClientPopulation::new(config.new_client_probability),
            amounts: AmountSynthesizer::new(config.amount_min, config.amount_max),
            disputes: DisputeLifecycleTracker::new(
                config.dispute_probability,
                config.resolve_probability,
                config.chargeback_probability,
            ),
            next_tx: 0,
            report: GenerationReport::default(),
        })
    }

    /// Run one iteration, appending its events to `out`
    ///
    /// Emits one financial event followed by zero to three lifecycle events.
    pub fn step(&mut self, out: &mut Vec<StreamEvent>) {
        let tx_id = self.next_tx;
        let start = out.len();

        let kind = select_financial_kind(&mut self.rng);
        let client = self.population.next_client_id(&mut self.rng);
        let amount = self.amounts.next_amount(&mut self.rng);
        out.push(StreamEvent::financial(kind, client, tx_id, amount));

        self.disputes.advance(&mut self.rng, client, tx_id, out);

        for event in &out[start..] {
            self.report.record(event.kind);
        }
        self.next_tx += 1;
    }

    /// Run the loop for `iterations` iterations and return every event
    ///
    /// All events are buffered in memory; memory use grows with the number of
    /// emitted events.
    pub fn run(mut self, iterations: u32) -> GeneratedStream {
        // ~1.3 events per iteration on average with the default probabilities
        let mut events = Vec::with_capacity(iterations as usize + iterations as usize / 3);
        for _ in 0..iterations {
            self.step(&mut events);
        }

        let report = self.report();
        GeneratedStream { events, report }
    }

    /// Report for the iterations run so far
    pub fn report(&self) -> GenerationReport {
        GenerationReport {
            max_client_id: self.population.max_client_id(),
            open_disputes: self.disputes.open_disputes().len(),
            ..self.report.clone()
        }
    }

    /// The dispute tracker, for inspecting the open set
    pub fn disputes(&self) -> &DisputeLifecycleTracker {
        &self.disputes
    }
}
