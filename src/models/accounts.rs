use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::holding::TokenHolding;
use crate::validation::parse_float_prefix;

#[derive(Debug, Deserialize)]
struct KeyedAccount {
    account: Account,
}

#[derive(Debug, Deserialize)]
struct Account {
    data: AccountData,
}

#[derive(Debug, Deserialize)]
struct AccountData {
    parsed: ParsedAccount,
}

#[derive(Debug, Deserialize)]
struct ParsedAccount {
    info: TokenAccountInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenAccountInfo {
    mint: String,
    token_amount: UiTokenAmount,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UiTokenAmount {
    ui_amount: Option<f64>,
    ui_amount_string: Option<String>,
}

impl UiTokenAmount {
    fn ui_value(&self) -> f64 {
        self.ui_amount
            .filter(|a| *a != 0.0)
            .or_else(|| self.ui_amount_string.as_deref().and_then(parse_float_prefix))
            .unwrap_or(0.0)
    }
}

/// Decodes a `getParsedTokenAccountsByOwner` JSON-RPC response into holdings.
///
/// Accounts whose shape does not match the parsed SPL token layout are skipped.
/// A response without a `result.value` array is an error.
pub fn holdings_from_token_accounts(response: &Value) -> Result<Vec<TokenHolding>> {
    let accounts = match response.pointer("/result/value") {
        Some(Value::Array(accounts)) => accounts,
        _ => {
            let reason = response
                .pointer("/error/message")
                .and_then(Value::as_str)
                .unwrap_or("missing result.value");
            return Err(Error::ParseError(format!(
                "Token account response carried no accounts: {}",
                reason
            )));
        }
    };

    let holdings = accounts
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| match KeyedAccount::deserialize(raw) {
            Ok(keyed) => {
                let info = keyed.account.data.parsed.info;
                Some(TokenHolding::new(info.mint, info.token_amount.ui_value()))
            }
            Err(e) => {
                debug!("Skipping token account {}: {}", index, e);
                None
            }
        })
        .collect();

    Ok(holdings)
}
