//! Core types exchanged between the host framework and bidder adapters.

use http::Method;
use serde::{Deserialize, Serialize};

/// One advertising slot's bid request as handed over by the host.
/// Immutable once received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidRequest {
    /// Host-assigned identifier for this slot's request.
    pub bid_id: String,
    /// Vendor-specific parameters from the publisher's setup.
    #[serde(default)]
    pub params: BidParams,
    /// Declared media types and their formats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_types: Option<MediaTypes>,
    /// Legacy flat size list, consulted when media types are absent.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sizes: Vec<(u32, u32)>,
}

impl BidRequest {
    /// The first declared banner size. Media-type sizes win; the legacy
    /// `sizes` list is the fallback. `None` when no size is declared at all.
    #[must_use]
    pub fn first_size(&self) -> Option<(u32, u32)> {
        self.media_types
            .as_ref()
            .and_then(|media| media.banner.as_ref())
            .map(|banner| banner.sizes.as_slice())
            .filter(|sizes| !sizes.is_empty())
            .unwrap_or(&self.sizes)
            .first()
            .copied()
    }
}

/// Vendor placement parameters. A request is biddable with either a
/// placement id or a member/inventory-code pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BidParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inv_code: Option<String>,
    /// End-user IP forwarded by the publisher for geo targeting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserParams>,
}

/// Vendor-side user identifiers copied verbatim into the payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyeruid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// Declared media types for a slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaTypes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<BannerMediaType>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BannerMediaType {
    #[serde(default)]
    pub sizes: Vec<(u32, u32)>,
}

/// Auction-wide context shared by all bid requests in one auction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidderRequest {
    pub auction_id: String,
    /// Referring page URL; its scheme decides the secure flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Outbound HTTP request descriptor. The adapter only constructs this;
/// the host owns the connection and performs the call.
#[derive(Debug, Clone)]
pub struct ServerRequest {
    pub method: Method,
    pub url: String,
    /// JSON-encoded payload body.
    pub body: String,
}

/// Raw vendor response handed back by the host after the HTTP exchange.
#[derive(Debug, Clone)]
pub struct ServerResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ServerResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Framework-shape bid produced from one vendor response entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBid {
    /// Matches the `bid_id` of the originating [`BidRequest`].
    pub request_id: String,
    /// CPM price, passed through from the vendor entry verbatim.
    pub price: f64,
    pub currency: String,
    pub width: u32,
    pub height: u32,
    /// Creative markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad: Option<String>,
    /// Cache lifetime in seconds.
    pub ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creative_id: Option<String>,
    pub net_revenue: bool,
}

/// Which sync mechanisms the host allows for this auction.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    pub iframe_enabled: bool,
    pub pixel_enabled: bool,
}

/// A user-sync descriptor. The host performs the actual firing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSync {
    pub method: SyncMethod,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMethod {
    Iframe,
    Image,
}

/// Timeout notification delivered through `on_timeout`. Advisory only.
#[derive(Debug, Clone)]
pub struct TimeoutNotice {
    pub auction_id: String,
    /// Bid requests that were still outstanding when the host gave up.
    pub bid_ids: Vec<String>,
    pub timeout_ms: u32,
}
