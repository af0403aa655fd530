//! Zeta Global bidder adapter.
//!
//! Translates the host's bid requests into the Zeta RTB wire format and the
//! vendor's OpenRTB-style response back into normalized bids. The endpoint,
//! currency, and sync URLs are injected through [`Settings`] so environments
//! can be switched without code change.

use std::sync::Arc;

use error_stack::{Report, ResultExt};
use http::Method;
use url::Url;

use crate::adapter::types::{
    BidRequest, BidderRequest, NormalizedBid, ServerRequest, ServerResponse, SyncMethod,
    SyncOptions, TimeoutNotice, UserSync,
};
use crate::adapter::{AdapterRegistry, BidderAdapter};
use crate::constants::{BIDDER_CODE, NET_REVENUE};
use crate::error::AdapterError;
use crate::gdpr::{consent_query_params, GdprConsent};
use crate::openrtb::{
    Banner, Bid as WireBid, Device, Imp, OpenRtbRequest, OpenRtbResponse, Site, User,
};
use crate::settings::{BidderConfig, Settings, SyncConfig};
use crate::user_agent;

/// Zeta Global bidder adapter. One instance serves any number of auctions;
/// it keeps no per-auction state.
pub struct ZetaAdapter {
    bidder: BidderConfig,
    sync: SyncConfig,
}

impl ZetaAdapter {
    #[must_use]
    pub fn new(bidder: BidderConfig, sync: SyncConfig) -> Self {
        Self { bidder, sync }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.bidder.clone(), settings.sync.clone())
    }

    /// Build the adapter from the embedded default configuration, with
    /// environment overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError::Configuration`] when the configuration cannot
    /// be loaded or fails validation.
    pub fn from_default_settings() -> Result<Self, Report<AdapterError>> {
        let settings = Settings::new().change_context(AdapterError::Configuration {
            message: "failed to load adapter settings".to_string(),
        })?;
        Ok(Self::from_settings(&settings))
    }

    /// Convert the auction's valid bid requests to the Zeta wire payload.
    fn to_openrtb(&self, valid: &[BidRequest], context: &BidderRequest) -> OpenRtbRequest {
        let secure = secure_flag(context.page_url.as_deref());

        let imps: Vec<Imp> = valid
            .iter()
            .map(|bid| Imp {
                id: bid.bid_id.clone(),
                secure,
                banner: bid.first_size().map(|(w, h)| Banner { w, h }),
            })
            .collect();

        // User and device identifiers ride on the first request's params;
        // the publisher configures them once per page.
        let params = valid.first().map(|bid| &bid.params);

        OpenRtbRequest {
            id: context.auction_id.clone(),
            test: self.bidder.test_mode.then_some(1),
            cur: vec![self.bidder.currency.clone()],
            imp: imps,
            site: Some(Site {
                mobile: user_agent::mobile_flag(context.user_agent.as_deref()),
                page: context.page_url.clone(),
            }),
            device: Some(Device {
                ua: context.user_agent.clone(),
                ip: params.and_then(|p| p.ip.clone()),
            }),
            user: params.and_then(|p| p.user.as_ref()).map(|user| User {
                buyeruid: user.buyeruid.clone(),
                uid: user.uid.clone(),
            }),
        }
    }
}

impl BidderAdapter for ZetaAdapter {
    fn bidder_code(&self) -> &'static str {
        BIDDER_CODE
    }

    fn is_bid_request_valid(&self, bid: &BidRequest) -> bool {
        let params = &bid.params;
        params.placement_id.is_some() || (params.member.is_some() && params.inv_code.is_some())
    }

    fn build_requests(
        &self,
        valid_bid_requests: &[BidRequest],
        bidder_request: &BidderRequest,
    ) -> Result<ServerRequest, Report<AdapterError>> {
        if valid_bid_requests.is_empty() {
            return Err(Report::new(AdapterError::InvalidRequest {
                message: "no valid bid requests to build a payload from".to_string(),
            }));
        }

        let payload = self.to_openrtb(valid_bid_requests, bidder_request);
        let body =
            serde_json::to_string(&payload).change_context(AdapterError::InvalidRequest {
                message: "failed to serialize bid request payload".to_string(),
            })?;

        log::debug!(
            "Zeta: built payload with {} imps for auction {}",
            payload.imp.len(),
            bidder_request.auction_id
        );

        Ok(ServerRequest {
            method: Method::POST,
            url: self.bidder.endpoint.clone(),
            body,
        })
    }

    fn interpret_response(
        &self,
        response: &ServerResponse,
        _request: &ServerRequest,
    ) -> Result<Vec<NormalizedBid>, Report<AdapterError>> {
        if !(200..300).contains(&response.status) {
            log::warn!("Zeta returned non-success status: {}", response.status);
            return Ok(Vec::new());
        }

        let parsed: OpenRtbResponse = serde_json::from_slice(&response.body).change_context(
            AdapterError::MalformedResponse {
                message: "bid response body is not valid JSON".to_string(),
            },
        )?;

        let currency = parsed.cur.as_deref().unwrap_or(&self.bidder.currency);

        let Some(seatbids) = parsed.seatbid.as_ref() else {
            log::warn!("Zeta response has no seatbid array; treating as no-bid");
            return Ok(Vec::new());
        };

        let mut bids = Vec::new();
        for seatbid in seatbids {
            for entry in seatbid.bid.as_deref().unwrap_or_default() {
                match parse_bid(entry, currency, self.bidder.ttl_secs) {
                    Ok(bid) => bids.push(bid),
                    Err(()) => log::warn!("Zeta: skipping bid entry without impid or price"),
                }
            }
        }

        log::info!("Zeta returned {} bids", bids.len());
        Ok(bids)
    }

    fn user_syncs(
        &self,
        options: &SyncOptions,
        responses: &[ServerResponse],
        gdpr_consent: Option<&GdprConsent>,
        _usp_consent: Option<&str>,
    ) -> Vec<UserSync> {
        let mut syncs = Vec::new();
        let consent_params = consent_query_params(gdpr_consent);

        if options.iframe_enabled {
            syncs.push(UserSync {
                method: SyncMethod::Iframe,
                url: append_query_params(&self.sync.iframe_url, &consent_params),
            });
        }

        if options.pixel_enabled {
            if let Some(url) = responses.first().and_then(pixel_sync_url) {
                syncs.push(UserSync {
                    method: SyncMethod::Image,
                    url: append_query_params(&url, &consent_params),
                });
            }
        }

        syncs
    }

    fn on_timeout(&self, notice: &TimeoutNotice) {
        log::debug!(
            "Zeta timed out in auction {} after {}ms ({} requests outstanding)",
            notice.auction_id,
            notice.timeout_ms,
            notice.bid_ids.len()
        );
    }

    fn on_bid_won(&self, bid: &NormalizedBid) {
        log::debug!(
            "Zeta bid won for request {} at {} {}",
            bid.request_id,
            bid.price,
            bid.currency
        );
    }

    fn on_set_targeting(&self, bid: &NormalizedBid) {
        log::debug!("Targeting set for Zeta bid on request {}", bid.request_id);
    }
}

/// Parse a single wire bid entry. Entries without an id or price cannot be
/// keyed back to a request and are skipped by the caller.
fn parse_bid(entry: &WireBid, currency: &str, ttl_secs: u32) -> Result<NormalizedBid, ()> {
    let request_id = entry.impid.clone().ok_or(())?;
    let price = entry.price.ok_or(())?;

    Ok(NormalizedBid {
        request_id,
        price,
        currency: currency.to_string(),
        width: entry.w.unwrap_or(0),
        height: entry.h.unwrap_or(0),
        ad: entry.adm.clone(),
        ttl: ttl_secs,
        creative_id: entry.crid.clone(),
        net_revenue: NET_REVENUE,
    })
}

/// OpenRTB `imp.secure` flag: 1 iff the referring page is served over https.
fn secure_flag(page_url: Option<&str>) -> u8 {
    let https = page_url
        .and_then(|page| Url::parse(page).ok())
        .is_some_and(|url| url.scheme() == "https");
    u8::from(https)
}

/// Sync URL supplied by the vendor on the response body, if any.
fn pixel_sync_url(response: &ServerResponse) -> Option<String> {
    let parsed: OpenRtbResponse = serde_json::from_slice(&response.body).ok()?;
    parsed.user_sync.map(|sync| sync.url)
}

/// Appends query parameters to a URL, handling both URLs with and without
/// existing query strings.
fn append_query_params(url: &str, params: &str) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    if url.contains('?') {
        format!("{}&{}", url, params)
    } else {
        format!("{}?{}", url, params)
    }
}

/// Build the Zeta adapter from settings and register it with the host's
/// registry.
pub fn register(registry: &mut AdapterRegistry, settings: &Settings) {
    log::info!(
        "Registering Zeta bidder adapter (endpoint={})",
        settings.bidder.endpoint
    );
    registry.register(Arc::new(ZetaAdapter::from_settings(settings)));
}
