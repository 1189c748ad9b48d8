//! Network URL and endpoint constants for the ProjectX Gateway API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.topstepx.com/api";

pub const LOGIN_KEY_PATH: &str = "/Auth/loginKey";
pub const RETRIEVE_BARS_PATH: &str = "/History/retrieveBars";
pub const CONTRACT_SEARCH_PATH: &str = "/Contract/search";
pub const ACCOUNT_SEARCH_PATH: &str = "/Account/search";
pub const TRADE_SEARCH_PATH: &str = "/Trade/search";
