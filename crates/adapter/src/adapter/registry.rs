//! Name-keyed registry the host uses to discover bidder adapters.

use std::collections::HashMap;
use std::sync::Arc;

use super::bidder::BidderAdapter;

/// Holds the adapters available to the host, keyed by bidder code.
#[derive(Default)]
pub struct AdapterRegistry {
    adapters: HashMap<&'static str, Arc<dyn BidderAdapter>>,
}

impl AdapterRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter under its bidder code. A later registration for
    /// the same code replaces the earlier one.
    pub fn register(&mut self, adapter: Arc<dyn BidderAdapter>) {
        let code = adapter.bidder_code();
        log::info!("Registering bidder adapter: {}", code);
        self.adapters.insert(code, adapter);
    }

    /// Look up an adapter by bidder code.
    #[must_use]
    pub fn get(&self, bidder_code: &str) -> Option<&Arc<dyn BidderAdapter>> {
        self.adapters.get(bidder_code)
    }

    /// Number of registered adapters.
    #[must_use]
    pub fn adapter_count(&self) -> usize {
        self.adapters.len()
    }
}
