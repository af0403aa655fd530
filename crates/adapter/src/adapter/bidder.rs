//! Trait definition for bidder adapters.

use error_stack::Report;

use crate::error::AdapterError;
use crate::gdpr::GdprConsent;

use super::types::{
    BidRequest, BidderRequest, NormalizedBid, ServerRequest, ServerResponse, SyncOptions,
    TimeoutNotice, UserSync,
};

/// Capability interface implemented by every bidder adapter.
///
/// The host drives the cycle: it validates candidate requests one by one,
/// aggregates the valid ones into a single outbound request per auction,
/// performs the HTTP exchange itself, and hands the raw response back for
/// interpretation. Every method is a synchronous, pure function of its
/// inputs and the adapter's configuration; adapters own no sockets, timers,
/// or per-auction state.
pub trait BidderAdapter: Send + Sync {
    /// Unique bidder code for this adapter (e.g. "zeta").
    fn bidder_code(&self) -> &'static str;

    /// Whether the bid request carries enough vendor parameters to bid on.
    /// Must not panic; malformed input yields `false`.
    fn is_bid_request_valid(&self, bid: &BidRequest) -> bool;

    /// Build the outbound HTTP request covering all valid bid requests of
    /// one auction.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::InvalidRequest`] when no payload can be built
    /// from the given requests.
    fn build_requests(
        &self,
        valid_bid_requests: &[BidRequest],
        bidder_request: &BidderRequest,
    ) -> Result<ServerRequest, Report<AdapterError>>;

    /// Unpack the vendor response into normalized bids, one per returned
    /// entry, keyed back to the originating requests by id.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::MalformedResponse`] when the body cannot be
    /// parsed at all; a parseable response without bids is not an error.
    fn interpret_response(
        &self,
        response: &ServerResponse,
        request: &ServerRequest,
    ) -> Result<Vec<NormalizedBid>, Report<AdapterError>>;

    /// Collect the user-sync descriptors to fire after the auction.
    /// Descriptors only; the host performs the network calls.
    fn user_syncs(
        &self,
        options: &SyncOptions,
        responses: &[ServerResponse],
        gdpr_consent: Option<&GdprConsent>,
        usp_consent: Option<&str>,
    ) -> Vec<UserSync>;

    /// Called when the host timed this bidder out. Advisory only.
    fn on_timeout(&self, _notice: &TimeoutNotice) {}

    /// Called when a bid from this adapter won the auction.
    fn on_bid_won(&self, _bid: &NormalizedBid) {}

    /// Called when ad-server targeting has been set for a bid from this
    /// adapter.
    fn on_set_targeting(&self, _bid: &NormalizedBid) {}
}
