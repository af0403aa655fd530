/// Bidder code this adapter registers under.
pub const BIDDER_CODE: &str = "zeta";

/// Currency used when neither the response nor the configuration declare one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Cache lifetime advertised for returned bids, in seconds.
pub const BID_TTL_SECS: u32 = 200;

/// Zeta prices are net revenue.
pub const NET_REVENUE: bool = true;
