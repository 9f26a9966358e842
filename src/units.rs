//! Conversions between human-readable amounts and on-chain integer units.
//!
//! Foresight settles in USDC, a 6-decimal ERC-20, while the REST and stream
//! surfaces quote prices in whole cents. These helpers move between the three
//! representations without accumulating floating-point error.

use rust_decimal::prelude::ToPrimitive as _;

use crate::Result;
use crate::error::Error;
use crate::types::{Decimal, U256};

/// Decimals of the USDC collateral token on both supported networks.
pub const COLLATERAL_DECIMALS: u32 = 6;

/// Converts a collateral amount in whole tokens to integer on-chain units.
///
/// The amount is quantized to [`COLLATERAL_DECIMALS`] decimal places; any
/// digits beyond that precision are truncated, matching how the vault
/// contract interprets amounts.
///
/// # Errors
///
/// Returns a validation error if `amount` is negative.
pub fn to_collateral_units(amount: Decimal) -> Result<U256> {
    if amount.is_sign_negative() {
        return Err(Error::validation(format!(
            "Collateral amount {amount} must not be negative"
        )));
    }

    let units = amount
        .normalize()
        .trunc_with_scale(COLLATERAL_DECIMALS)
        .mantissa()
        .to_u128()
        .ok_or_else(|| {
            Error::validation(format!(
                "Collateral amount {amount} cannot be represented in integer units"
            ))
        })?;

    Ok(U256::from(units))
}

/// Converts integer on-chain units back to a collateral amount in whole tokens.
///
/// # Errors
///
/// Returns a validation error if `units` exceeds the representable range of
/// [`Decimal`].
pub fn from_collateral_units(units: U256) -> Result<Decimal> {
    let raw = i128::try_from(units).map_err(|_| {
        Error::validation(format!("Collateral units {units} exceed the supported range"))
    })?;

    let amount = Decimal::try_from_i128_with_scale(raw, COLLATERAL_DECIMALS).map_err(|_| {
        Error::validation(format!("Collateral units {units} exceed the supported range"))
    })?;

    Ok(amount.normalize())
}

/// Converts a whole number of cents to a price in collateral terms.
///
/// # Errors
///
/// Returns a validation error unless `1 <= cents <= 99`. Contracts priced at
/// 0 or 100 cents are settled, not tradable.
pub fn price_from_cents(cents: u32) -> Result<Decimal> {
    if !(1..=99).contains(&cents) {
        return Err(Error::validation(format!(
            "Price {cents} must be between 1 and 99 cents"
        )));
    }

    Ok(Decimal::new(cents.into(), 2))
}

/// Converts a price in collateral terms to a whole number of cents.
///
/// # Errors
///
/// Returns a validation error if `price` is not a whole cent, or falls outside
/// the tradable `0.01..=0.99` band.
pub fn price_to_cents(price: Decimal) -> Result<u32> {
    let cents = price * Decimal::ONE_HUNDRED;
    if cents.fract() != Decimal::ZERO {
        return Err(Error::validation(format!(
            "Price {price} is not a whole number of cents"
        )));
    }

    let cents = cents.to_u32().ok_or_else(|| {
        Error::validation(format!("Price {price} must be between 1 and 99 cents"))
    })?;

    if !(1..=99).contains(&cents) {
        return Err(Error::validation(format!(
            "Price {price} must be between 1 and 99 cents"
        )));
    }

    Ok(cents)
}
