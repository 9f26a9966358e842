use std::borrow::Cow;

use alloy::dyn_abi::Eip712Domain;
use alloy::primitives::{ChainId, U256};
use alloy::signers::Signer;
use alloy::sol_types::SolStruct;
use rand::Rng as _;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use url::Url;

use super::types::{
    BurnAuthorization, BurnRequest, DepositAuthorization, DepositRequest, MintAuthorization,
    MintRequest, SignedAuthorization, VaultReceipt, WithdrawAuthorization, WithdrawRequest,
};
use crate::error::Error;
use crate::trade::client::default_http_client;
use crate::types::{Decimal, Utc};
use crate::units::to_collateral_units;
use crate::{Result, contract_config};

const DOMAIN_NAME: Option<Cow<'static, str>> = Some(Cow::Borrowed("Foresight Vault"));
const DOMAIN_VERSION: Option<Cow<'static, str>> = Some(Cow::Borrowed("1"));

/// How long a signed authorization stays redeemable unless executed first.
const AUTHORIZATION_TTL_SECS: i64 = 600;

/// Client for collateral and outcome-token flows through the settlement vault.
///
/// Every operation signs an EIP-712 authorization with the caller's wallet and
/// submits it over REST; the venue relays it on-chain. The SDK never sends
/// transactions itself, so no RPC endpoint or gas funds are needed.
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    client: ReqwestClient,
    chain_id: ChainId,
    nonce_generator: fn() -> u64,
}

impl Client {
    /// Creates a vault client for the given chain.
    ///
    /// # Errors
    ///
    /// Returns an error if the host URL is invalid or the HTTP client cannot
    /// be created.
    pub fn new(host: &str, chain_id: ChainId) -> Result<Client> {
        Ok(Self {
            host: Url::parse(host)?,
            client: default_http_client()?,
            chain_id,
            nonce_generator: generate_nonce,
        })
    }

    /// Replaces the authorization nonce source, mainly for deterministic
    /// tests.
    #[must_use]
    pub fn with_nonce_generator(mut self, nonce_generator: fn() -> u64) -> Self {
        self.nonce_generator = nonce_generator;
        self
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Returns the chain authorizations are bound to.
    #[must_use]
    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Authorizes moving collateral from the signer's wallet into the vault.
    ///
    /// The wallet must have approved the vault contract for at least the
    /// deposited amount beforehand.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is not positive, the chain has no
    /// deployed vault, signing fails, or the request fails.
    pub async fn deposit<S: Signer>(
        &self,
        signer: &S,
        request: &DepositRequest,
    ) -> Result<VaultReceipt> {
        let amount = positive_collateral_units(request.amount)?;

        let authorization = DepositAuthorization {
            account: signer.address(),
            amount,
            nonce: self.next_nonce(),
            deadline: default_deadline(),
        };
        let signature = self.sign(signer, &authorization).await?;

        self.relay("deposit", authorization, signature).await
    }

    /// Authorizes moving vault collateral back to the signer's wallet.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is not positive, the chain has no
    /// deployed vault, signing fails, or the request fails.
    pub async fn withdraw<S: Signer>(
        &self,
        signer: &S,
        request: &WithdrawRequest,
    ) -> Result<VaultReceipt> {
        let amount = positive_collateral_units(request.amount)?;

        let authorization = WithdrawAuthorization {
            account: signer.address(),
            amount,
            nonce: self.next_nonce(),
            deadline: default_deadline(),
        };
        let signature = self.sign(signer, &authorization).await?;

        self.relay("withdraw", authorization, signature).await
    }

    /// Authorizes minting yes/no outcome-token sets against vault collateral.
    ///
    /// # Errors
    ///
    /// Returns an error if the count is not positive, the chain has no
    /// deployed vault, signing fails, or the request fails.
    pub async fn mint<S: Signer>(&self, signer: &S, request: &MintRequest) -> Result<VaultReceipt> {
        let count = positive_count(request.count)?;

        let authorization = MintAuthorization {
            account: signer.address(),
            marketTicker: request.market_ticker.clone(),
            count,
            nonce: self.next_nonce(),
            deadline: default_deadline(),
        };
        let signature = self.sign(signer, &authorization).await?;

        self.relay("mint", authorization, signature).await
    }

    /// Authorizes burning yes/no outcome-token sets, releasing their
    /// collateral inside the vault.
    ///
    /// # Errors
    ///
    /// Returns an error if the count is not positive, the chain has no
    /// deployed vault, signing fails, or the request fails.
    pub async fn burn<S: Signer>(&self, signer: &S, request: &BurnRequest) -> Result<VaultReceipt> {
        let count = positive_count(request.count)?;

        let authorization = BurnAuthorization {
            account: signer.address(),
            marketTicker: request.market_ticker.clone(),
            count,
            nonce: self.next_nonce(),
            deadline: default_deadline(),
        };
        let signature = self.sign(signer, &authorization).await?;

        self.relay("burn", authorization, signature).await
    }

    async fn sign<S: Signer, A: SolStruct>(&self, signer: &S, authorization: &A) -> Result<String> {
        let vault = contract_config(self.chain_id)
            .ok_or(Error::missing_contract_config(self.chain_id))?
            .vault;

        let domain = Eip712Domain {
            name: DOMAIN_NAME,
            version: DOMAIN_VERSION,
            chain_id: Some(U256::from(self.chain_id)),
            verifying_contract: Some(vault),
            ..Eip712Domain::default()
        };

        let signature = signer
            .sign_hash(&authorization.eip712_signing_hash(&domain))
            .await?;

        Ok(signature.to_string())
    }

    async fn relay<A: Serialize>(
        &self,
        action: &str,
        authorization: A,
        signature: String,
    ) -> Result<VaultReceipt> {
        let body = SignedAuthorization {
            authorization,
            chain_id: self.chain_id,
            signature,
        };
        let request = self
            .client
            .request(Method::POST, format!("{}v1/vault/{action}", self.host))
            .json(&body)
            .build()?;

        crate::request(&self.client, request, None).await
    }

    fn next_nonce(&self) -> U256 {
        U256::from((self.nonce_generator)())
    }
}

fn positive_collateral_units(amount: Decimal) -> Result<U256> {
    if amount <= Decimal::ZERO {
        return Err(Error::validation(format!(
            "Collateral amount {amount} must be positive"
        )));
    }

    to_collateral_units(amount)
}

fn positive_count(count: i64) -> Result<U256> {
    if count <= 0 {
        return Err(Error::validation(format!(
            "Set count {count} must be positive"
        )));
    }

    Ok(U256::from(count.unsigned_abs()))
}

fn default_deadline() -> U256 {
    let expires_at = Utc::now().timestamp().saturating_add(AUTHORIZATION_TTL_SECS);
    U256::from(expires_at.unsigned_abs())
}

fn generate_nonce() -> u64 {
    rand::rng().random()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use alloy::signers::local::LocalSigner;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::error::Kind;
    use crate::{BASE, BASE_SEPOLIA};

    // publicly known private key
    const PRIVATE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[tokio::test]
    async fn deposit_rejects_a_zero_amount() -> anyhow::Result<()> {
        let signer = LocalSigner::from_str(PRIVATE_KEY)?;
        let client = Client::new("http://localhost", BASE_SEPOLIA)?;
        let request = DepositRequest::builder().amount(dec!(0)).build();

        let error = client.deposit(&signer, &request).await.unwrap_err();

        assert_eq!(error.kind(), Kind::Validation);
        Ok(())
    }

    #[tokio::test]
    async fn withdraw_rejects_a_negative_amount() -> anyhow::Result<()> {
        let signer = LocalSigner::from_str(PRIVATE_KEY)?;
        let client = Client::new("http://localhost", BASE)?;
        let request = WithdrawRequest::builder().amount(dec!(-10)).build();

        let error = client.withdraw(&signer, &request).await.unwrap_err();

        assert_eq!(error.kind(), Kind::Validation);
        Ok(())
    }

    #[tokio::test]
    async fn mint_rejects_a_non_positive_count() -> anyhow::Result<()> {
        let signer = LocalSigner::from_str(PRIVATE_KEY)?;
        let client = Client::new("http://localhost", BASE_SEPOLIA)?;
        let request = MintRequest::builder()
            .market_ticker("KXBTC-25DEC31")
            .count(0)
            .build();

        let error = client.mint(&signer, &request).await.unwrap_err();

        assert_eq!(error.kind(), Kind::Validation);
        Ok(())
    }

    #[tokio::test]
    async fn unsupported_chain_is_rejected_before_any_request() -> anyhow::Result<()> {
        let signer = LocalSigner::from_str(PRIVATE_KEY)?;
        let client = Client::new("http://localhost", 1)?;
        let request = DepositRequest::builder().amount(dec!(10)).build();

        let error = client.deposit(&signer, &request).await.unwrap_err();

        assert_eq!(error.kind(), Kind::Validation);
        assert!(error.to_string().contains("chain id 1"));
        Ok(())
    }

    #[test]
    fn counts_convert_only_when_positive() {
        assert!(positive_count(0).is_err());
        assert!(positive_count(-3).is_err());
        assert_eq!(positive_count(10).unwrap(), U256::from(10_u64));
    }
}
