//! Bidder-adapter contract between the host auction framework and vendors.
//!
//! The host owns the auction lifecycle: it validates candidate requests,
//! performs the HTTP exchange for the descriptor an adapter builds, feeds
//! the raw response back for interpretation, and fires the user syncs an
//! adapter collects. Adapters implement [`BidderAdapter`] and are looked up
//! by bidder code through [`AdapterRegistry`].

pub mod bidder;
pub mod registry;
pub mod types;

pub use bidder::BidderAdapter;
pub use registry::AdapterRegistry;
pub use types::{
    BidParams, BidRequest, BidderRequest, MediaTypes, NormalizedBid, ServerRequest,
    ServerResponse, SyncMethod, SyncOptions, TimeoutNotice, UserParams, UserSync,
};
