//! Client population model
//!
//! Tracks the highest client ID introduced so far and decides, per event,
//! whether to mint a new client or reuse an existing one. The population only
//! ever grows; client IDs are never retired.

use crate::core::traits::RandomSource;
use crate::types::ClientId;

/// Growing population of client IDs
#[derive(Debug, Clone)]
pub struct ClientPopulation {
    /// Highest client ID ever introduced (0 before the first new client)
    max_client_id: ClientId,

    /// Most recently used client ID
    current: ClientId,

    /// Probability of introducing a new client on each draw
    new_client_probability: f64,
}

impl ClientPopulation {
    /// Create an empty population
    ///
    /// The first client introduced gets ID 1.
    pub fn new(new_client_probability: f64) -> Self {
        ClientPopulation {
            max_client_id: 0,
            current: 0,
            new_client_probability,
        }
    }

    /// Choose the client for the next financial event
    ///
    /// Either extends the population with `max_client_id + 1`, or draws an
    /// existing ID uniformly from `[0, max_client_id)`. Before any client has
    /// been introduced that range is empty and the reuse branch yields 0.
    ///
    /// # Returns
    ///
    /// A client ID in `[0, max_client_id]` (after the update)
    pub fn next_client_id<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> ClientId {
        if rng.chance(self.new_client_probability) {
            self.max_client_id += 1;
            self.current = self.max_client_id;
        } else if self.max_client_id > 0 {
            self.current = rng.below(u64::from(self.max_client_id)) as ClientId;
        } else {
            self.current = 0;
        }
        self.current
    }

    /// Highest client ID introduced so far
    pub fn max_client_id(&self) -> ClientId {
        self.max_client_id
    }

    /// Most recently chosen client ID
    pub fn current(&self) -> ClientId {
        self.current
    }
}
