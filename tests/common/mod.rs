#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Deeply nested uses in sub-modules are falsely flagged as being unused"
)]

use foresight_client_sdk::auth::Credentials;
use foresight_client_sdk::trade;
use httpmock::MockServer;
use uuid::Uuid;

// publicly known private key
pub const PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const SECRET: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=";

pub const FORESIGHT_ADDRESS: &str = "FORESIGHT-ADDRESS";
pub const FORESIGHT_NONCE: &str = "FORESIGHT-NONCE";
pub const FORESIGHT_SIGNATURE: &str = "FORESIGHT-SIGNATURE";
pub const FORESIGHT_TIMESTAMP: &str = "FORESIGHT-TIMESTAMP";

pub const FORESIGHT_ACCESS_KEY: &str = "FORESIGHT-ACCESS-KEY";
pub const FORESIGHT_ACCESS_SIGNATURE: &str = "FORESIGHT-ACCESS-SIGNATURE";
pub const FORESIGHT_ACCESS_TIMESTAMP: &str = "FORESIGHT-ACCESS-TIMESTAMP";

pub const API_KEY: Uuid = Uuid::nil();

pub const TICKER: &str = "KXBTC-25DEC31";

#[must_use]
pub fn credentials() -> Credentials {
    Credentials::new(API_KEY, SECRET.to_owned())
}

#[must_use]
pub fn trade_client(server: &MockServer) -> trade::Client {
    trade::Client::new(&server.base_url(), credentials()).unwrap()
}
