use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Minimal subset of OpenRTB 2.x bid request used on the Zeta wire.
#[derive(Debug, Serialize, Deserialize)]
pub struct OpenRtbRequest {
    /// Auction ID, provided by the host.
    pub id: String,
    /// Test-mode marker; omitted entirely in production traffic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<u8>,
    /// Currencies the bidder may respond in.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cur: Vec<String>,
    pub imp: Vec<Imp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<Site>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// One advertising slot's request within the payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct Imp {
    pub id: String,
    /// 1 when the slot renders in a secure (https) context.
    pub secure: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Banner>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Banner {
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Site {
    /// 1 when the requesting device looks mobile.
    pub mobile: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Device {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ua: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyeruid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// Minimal subset of OpenRTB 2.x bid response used on the Zeta wire.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct OpenRtbResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cur: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seatbid: Option<Vec<SeatBid>>,
    /// Vendor-supplied user-sync endpoint, consumed by pixel syncing.
    #[serde(rename = "userSync", skip_serializing_if = "Option::is_none")]
    pub user_sync: Option<UserSyncEndpoint>,
    #[serde(default, flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SeatBid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid: Option<Vec<Bid>>,
    #[serde(default, flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Bid {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    /// Creative markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crid: Option<String>,
    #[serde(default, flatten)]
    pub extra: HashMap<String, Value>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct UserSyncEndpoint {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_absent_sections() {
        let request = OpenRtbRequest {
            id: "auction-1".to_string(),
            test: None,
            cur: vec!["USD".to_string()],
            imp: vec![Imp {
                id: "bid-1".to_string(),
                secure: 1,
                banner: Some(Banner { w: 300, h: 250 }),
            }],
            site: None,
            device: None,
            user: None,
        };

        let json = serde_json::to_value(&request).expect("should serialize request");
        assert!(json.get("test").is_none(), "test marker should be omitted");
        assert!(json.get("site").is_none());
        assert!(json.get("user").is_none());
        assert_eq!(json["imp"][0]["banner"]["w"], 300);
    }

    #[test]
    fn response_parses_seatbid_and_sync_endpoint() {
        let body = r#"{
            "id": "auction-1",
            "cur": "EUR",
            "seatbid": [{"seat": "zeta", "bid": [{"impid": "bid-1", "price": 2.5, "w": 728, "h": 90}]}],
            "userSync": {"url": "https://sync.example.com/pixel"},
            "bidid": "ignored-but-preserved"
        }"#;

        let response: OpenRtbResponse =
            serde_json::from_str(body).expect("should parse response");
        let seatbids = response.seatbid.expect("should have seatbid");
        let bids = seatbids[0].bid.as_ref().expect("should have bid array");
        assert_eq!(bids[0].impid.as_deref(), Some("bid-1"));
        assert_eq!(bids[0].price, Some(2.5));
        assert_eq!(
            response.user_sync.expect("should have sync endpoint").url,
            "https://sync.example.com/pixel"
        );
        assert!(
            response.extra.contains_key("bidid"),
            "unknown fields should land in extra"
        );
    }

    #[test]
    fn response_without_seatbid_is_valid() {
        let response: OpenRtbResponse =
            serde_json::from_str(r#"{"id": "auction-1"}"#).expect("should parse no-bid response");
        assert!(response.seatbid.is_none());
        assert!(response.user_sync.is_none());
    }
}
