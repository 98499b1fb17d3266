use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use tokenmeta::rpc::{RpcClient, RpcError};

use crate::utils::format_lamports;

pub fn create_connection(endpoint: &str, debug: bool) -> Result<RpcClient> {
    RpcClient::builder()
        .endpoint(endpoint)
        .debug(debug)
        .build()
        .with_context(|| format!("failed to create rpc client for {endpoint}"))
}

fn parse_param(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Params that are not valid JSON are sent as plain strings.
pub fn raw_call(client: &RpcClient, method: &str, params: &[String]) -> Result<()> {
    let params = params.iter().map(|raw| parse_param(raw)).collect();
    let body = match client.call(method, params) {
        Ok(body) => body,
        Err(err) => {
            if let Some(body) = err.body() {
                eprintln!("{}", String::from_utf8_lossy(body));
            }
            return Err(err.into());
        }
    };
    match serde_json::from_slice::<Value>(&body) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", String::from_utf8_lossy(&body)),
    }
    Ok(())
}

pub fn get_balance(client: &RpcClient, address: &str) -> Result<()> {
    let pubkey = Pubkey::from_str(address)?;
    let balance = client.get_balance(&pubkey, CommitmentConfig::confirmed())?;
    println!("Balance of {address}: {}", format_lamports(balance));
    Ok(())
}

pub fn get_account(client: &RpcClient, address: &str) -> Result<()> {
    let pubkey = Pubkey::from_str(address)?;
    let account = client
        .get_account_info(&pubkey, CommitmentConfig::confirmed())?
        .ok_or_else(|| anyhow!("Account not found: {address}"))?;
    println!("Account {address}");
    println!("  owner:      {}", account.owner);
    println!("  lamports:   {}", format_lamports(account.lamports));
    println!("  executable: {}", account.executable);
    println!("  rent epoch: {}", account.rent_epoch);
    println!("  data:       {} bytes", account.data.len());
    if !account.data.is_empty() {
        println!("  0x{}", hex::encode(&account.data));
    }
    Ok(())
}

pub fn get_slot(client: &RpcClient) -> Result<()> {
    let slot = client.get_slot(CommitmentConfig::finalized())?;
    println!("Slot: {slot}");
    Ok(())
}

pub fn get_version(client: &RpcClient) -> Result<()> {
    match client.get_version() {
        Ok(version) => {
            println!("solana-core {}", version.solana_core);
            if let Some(feature_set) = version.feature_set {
                println!("feature-set {feature_set}");
            }
            Ok(())
        }
        Err(RpcError::Rpc(error)) => Err(anyhow!(
            "node rejected getVersion ({}): {}",
            error.code,
            error.message
        )),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_param;
    use serde_json::json;

    #[test]
    fn params_parse_as_json_or_string() {
        assert_eq!(parse_param("42"), json!(42));
        assert_eq!(parse_param(r#"{"commitment":"processed"}"#), json!({"commitment": "processed"}));
        assert_eq!(parse_param("[1, 2]"), json!([1, 2]));
        assert_eq!(parse_param("So1ana"), json!("So1ana"));
    }
}
