// Re-exported types for public API convenience
/// The [`Signer`] trait from alloy for signing operations.
/// Implement this trait or use provided signers like [`LocalSigner`].
pub use alloy::signers::Signer;
/// Local wallet signer for signing with a private key.
/// This is the most common signer implementation.
pub use alloy::signers::local::LocalSigner;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use hmac::{Hmac, Mac as _};
use reqwest::{Body, Request};
/// Secret string types that redact values in debug output for security.
pub use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sha2::Sha256;
/// UUID type used for API keys and identifiers.
pub use uuid::Uuid;

use crate::{Result, Timestamp};

/// Type alias for API keys, which are UUIDs.
pub type ApiKey = Uuid;

/// Set of credentials used to authenticate to the Foresight API. These credentials are
/// returned when calling [`crate::trade::Client::derive_credentials`]. The authenticated
/// clients use them to sign each [`Request`] before it is sent.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Credentials {
    #[serde(alias = "api_key")]
    pub(crate) key: ApiKey,
    pub(crate) secret: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(key: Uuid, secret: String) -> Self {
        Self {
            key,
            secret: SecretString::from(secret),
        }
    }

    /// Returns the API key.
    #[must_use]
    pub fn key(&self) -> ApiKey {
        self.key
    }

    /// Returns the secret.
    #[must_use]
    pub fn secret(&self) -> &SecretString {
        &self.secret
    }
}

/// Wallet authentication. An EIP-712 attestation signed by the account wallet,
/// exchanged for API [`Credentials`].
pub(crate) mod wallet {
    use std::borrow::Cow;

    use alloy::core::sol;
    use alloy::dyn_abi::Eip712Domain;
    use alloy::hex::ToHexExt as _;
    use alloy::primitives::{ChainId, U256};
    use alloy::signers::Signer;
    use alloy::sol_types::SolStruct as _;
    use reqwest::header::HeaderMap;

    use crate::{Result, Timestamp};

    pub(crate) const FORESIGHT_ADDRESS: &str = "FORESIGHT-ADDRESS";
    pub(crate) const FORESIGHT_NONCE: &str = "FORESIGHT-NONCE";
    pub(crate) const FORESIGHT_SIGNATURE: &str = "FORESIGHT-SIGNATURE";
    pub(crate) const FORESIGHT_TIMESTAMP: &str = "FORESIGHT-TIMESTAMP";

    sol! {
        #[non_exhaustive]
        struct AccountAuth {
            address account;
            string  timestamp;
            uint256 nonce;
            string  message;
        }
    }

    /// Returns the [`HeaderMap`] needed to obtain [`super::Credentials`].
    pub(crate) async fn create_headers<S: Signer>(
        signer: &S,
        chain_id: ChainId,
        timestamp: Timestamp,
        nonce: Option<u32>,
    ) -> Result<HeaderMap> {
        let naive_nonce = nonce.unwrap_or(0);

        let auth = AccountAuth {
            account: signer.address(),
            timestamp: timestamp.to_string(),
            nonce: U256::from(naive_nonce),
            message: "I attest that I control this wallet and authorize Foresight API access"
                .to_owned(),
        };

        let domain = Eip712Domain {
            name: Some(Cow::Borrowed("ForesightAuth")),
            version: Some(Cow::Borrowed("1")),
            chain_id: Some(U256::from(chain_id)),
            ..Eip712Domain::default()
        };

        let hash = auth.eip712_signing_hash(&domain);
        let signature = signer.sign_hash(&hash).await?;

        let mut map = HeaderMap::new();
        map.insert(
            FORESIGHT_ADDRESS,
            signer.address().encode_hex_with_prefix().parse()?,
        );
        map.insert(FORESIGHT_NONCE, naive_nonce.to_string().parse()?);
        map.insert(FORESIGHT_SIGNATURE, signature.to_string().parse()?);
        map.insert(FORESIGHT_TIMESTAMP, timestamp.to_string().parse()?);

        Ok(map)
    }
}

/// Access authentication. An HMAC over the request, keyed with the [`Credentials`]
/// secret, attached to every authenticated REST call.
pub(crate) mod access {
    use reqwest::Request;
    use reqwest::header::HeaderMap;

    use crate::auth::{Credentials, hmac, to_message};
    use crate::{Result, Timestamp};

    pub(crate) const FORESIGHT_ACCESS_KEY: &str = "FORESIGHT-ACCESS-KEY";
    pub(crate) const FORESIGHT_ACCESS_SIGNATURE: &str = "FORESIGHT-ACCESS-SIGNATURE";
    pub(crate) const FORESIGHT_ACCESS_TIMESTAMP: &str = "FORESIGHT-ACCESS-TIMESTAMP";

    /// Returns the [`HeaderMap`] needed to interact with any authenticated endpoint.
    pub(crate) fn create_headers(
        credentials: &Credentials,
        request: &Request,
        timestamp: Timestamp,
    ) -> Result<HeaderMap> {
        let signature = hmac(&credentials.secret, &to_message(request, timestamp))?;

        let mut map = HeaderMap::new();

        map.insert(FORESIGHT_ACCESS_KEY, credentials.key.to_string().parse()?);
        map.insert(FORESIGHT_ACCESS_SIGNATURE, signature.parse()?);
        map.insert(FORESIGHT_ACCESS_TIMESTAMP, timestamp.to_string().parse()?);

        Ok(map)
    }
}

#[must_use]
fn to_message(request: &Request, timestamp: Timestamp) -> String {
    let method = request.method();
    let body = request.body().and_then(body_to_string).unwrap_or_default();
    let path = request.url().path();

    format!("{timestamp}{method}{path}{body}")
}

#[must_use]
fn body_to_string(body: &Body) -> Option<String> {
    body.as_bytes()
        .map(String::from_utf8_lossy)
        .map(|b| b.replace('\'', "\""))
}

fn hmac(secret: &SecretString, message: &str) -> Result<String> {
    let decoded_secret = URL_SAFE.decode(secret.expose_secret())?;
    let mut mac = Hmac::<Sha256>::new_from_slice(&decoded_secret)?;
    mac.update(message.as_bytes());

    let result = mac.finalize().into_bytes();
    Ok(URL_SAFE.encode(result))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use alloy::signers::local::LocalSigner;
    use reqwest::{Client, Method, RequestBuilder};
    use serde_json::json;
    use url::Url;
    use uuid::Uuid;

    use super::*;
    use crate::BASE_SEPOLIA;
    use crate::types::address;

    // publicly known private key
    const PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[tokio::test]
    async fn wallet_headers_should_succeed() -> anyhow::Result<()> {
        let signer = LocalSigner::from_str(PRIVATE_KEY)?.with_chain_id(Some(BASE_SEPOLIA));

        let headers = wallet::create_headers(&signer, BASE_SEPOLIA, 1_700_000_000, Some(7)).await?;

        assert_eq!(
            signer.address(),
            address!("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266")
        );
        assert_eq!(
            headers[wallet::FORESIGHT_ADDRESS],
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
        assert_eq!(headers[wallet::FORESIGHT_NONCE], "7");
        assert_eq!(
            headers[wallet::FORESIGHT_SIGNATURE],
            "0x0bea8f285acc62064a28cd24338473ad90877f0f1dfd4a2e1843cf8bcae043c81a07c638a09b9dd261310e024fa690c22cf1d2d6327afcaea2940fb3de90536e1c"
        );
        assert_eq!(headers[wallet::FORESIGHT_TIMESTAMP], "1700000000");

        Ok(())
    }

    #[test]
    fn access_headers_should_succeed() -> anyhow::Result<()> {
        let credentials = Credentials {
            key: Uuid::nil(),
            secret: SecretString::from("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=".to_owned()),
        };

        let request = Request::new(Method::GET, Url::parse("http://localhost/")?);
        let headers = access::create_headers(&credentials, &request, 1)?;

        assert_eq!(headers[access::FORESIGHT_ACCESS_KEY], Uuid::nil().to_string());
        assert_eq!(
            headers[access::FORESIGHT_ACCESS_SIGNATURE],
            "eHaylCwqRSOa2LFD77Nt_SaTpbsxzN8eTEI3LryhEj4="
        );
        assert_eq!(headers[access::FORESIGHT_ACCESS_TIMESTAMP], "1");

        Ok(())
    }

    #[test]
    fn request_args_should_succeed() -> crate::Result<()> {
        let request = Request::new(Method::POST, Url::parse("http://localhost/v1/orders")?);
        let request = RequestBuilder::from_parts(Client::new(), request)
            .json(&json!({"side": "yes"}))
            .build()?;

        let timestamp = 1;

        assert_eq!(
            to_message(&request, timestamp),
            r#"1POST/v1/orders{"side":"yes"}"#
        );

        Ok(())
    }

    #[test]
    fn hmac_succeeds() -> crate::Result<()> {
        // Keys deliberately in alphabetical order so the serialized body is
        // stable regardless of serde_json's preserve_order feature
        let json = json!({
            "count": 10,
            "market_ticker": "KXBTC-25DEC31",
            "side": "yes"
        });

        let request = Request::new(Method::POST, Url::parse("http://localhost/v1/orders")?);
        let request = RequestBuilder::from_parts(Client::new(), request)
            .json(&json)
            .build()?;

        let message = to_message(&request, 1_700_000_000);
        let signature = hmac(
            &SecretString::from("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=".to_owned()),
            &message,
        )?;

        assert_eq!(
            message,
            r#"1700000000POST/v1/orders{"count":10,"market_ticker":"KXBTC-25DEC31","side":"yes"}"#
        );
        assert_eq!(signature, "G1DMVsHcTN-pMuF-_zQfLW0STJBtUQs4jeu8aNeVccE=");

        Ok(())
    }

    #[test]
    fn hmac_bodyless_request() -> crate::Result<()> {
        let request = Request::new(
            Method::DELETE,
            Url::parse("http://localhost/v1/orders/0193e7a2-0000-7000-8000-000000000000")?,
        );

        let message = to_message(&request, 1_700_000_000);
        let signature = hmac(
            &SecretString::from("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=".to_owned()),
            &message,
        )?;

        assert_eq!(
            message,
            "1700000000DELETE/v1/orders/0193e7a2-0000-7000-8000-000000000000"
        );
        assert_eq!(signature, "cZMO2sNz6g0OxhWBA3mSSiT3YK0L3RlXPXEuGmOogOk=");

        Ok(())
    }

    #[test]
    fn credentials_key_returns_api_key() {
        let key = Uuid::new_v4();
        let credentials = Credentials::new(key, "secret".to_owned());
        assert_eq!(credentials.key(), key);
    }

    #[test]
    fn debug_does_not_expose_secrets() {
        let secret_value = "my_super_secret_value_12345";
        let credentials = Credentials::new(Uuid::nil(), secret_value.to_owned());

        let debug_output = format!("{credentials:?}");

        // Verify that the secret value is NOT present in the debug output
        assert!(
            !debug_output.contains(secret_value),
            "Debug output should NOT contain the secret value. Got: {debug_output}"
        );
    }
}
