//! Typed wrappers for the handful of node methods the CLI needs.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Deserialize;
use serde_json::{Value, json};
use solana_commitment_config::{CommitmentConfig, CommitmentLevel};
use solana_sdk::pubkey::Pubkey;

use super::{RpcClient, RpcError, WithContext};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RpcVersion {
    #[serde(rename = "solana-core")]
    pub solana_core: String,
    #[serde(rename = "feature-set", default)]
    pub feature_set: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestBlockhash {
    pub blockhash: String,
    pub last_valid_block_height: u64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UiAccount {
    lamports: u64,
    owner: String,
    data: (String, String),
    executable: bool,
    rent_epoch: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountInfo {
    pub lamports: u64,
    pub owner: Pubkey,
    pub data: Vec<u8>,
    pub executable: bool,
    pub rent_epoch: u64,
}

impl UiAccount {
    fn into_account_info(self) -> Result<AccountInfo, RpcError> {
        let (encoded, encoding) = self.data;
        if encoding != "base64" {
            return Err(RpcError::AccountData(format!(
                "unexpected encoding {encoding}"
            )));
        }
        let data = STANDARD
            .decode(encoded)
            .map_err(|err| RpcError::AccountData(err.to_string()))?;
        let owner = self
            .owner
            .parse()
            .map_err(|_| RpcError::AccountData(format!("invalid owner {}", self.owner)))?;
        Ok(AccountInfo {
            lamports: self.lamports,
            owner,
            data,
            executable: self.executable,
            rent_epoch: self.rent_epoch,
        })
    }
}

fn commitment_param(commitment: CommitmentConfig) -> Value {
    let level = match commitment.commitment {
        CommitmentLevel::Processed => "processed",
        CommitmentLevel::Confirmed => "confirmed",
        CommitmentLevel::Finalized => "finalized",
    };
    json!({ "commitment": level })
}

impl RpcClient {
    pub fn get_version(&self) -> Result<RpcVersion, RpcError> {
        self.call_for("getVersion", Vec::new())
    }

    pub fn get_slot(&self, commitment: CommitmentConfig) -> Result<u64, RpcError> {
        self.call_for("getSlot", vec![commitment_param(commitment)])
    }

    pub fn get_balance(
        &self,
        pubkey: &Pubkey,
        commitment: CommitmentConfig,
    ) -> Result<u64, RpcError> {
        let response: WithContext<u64> = self.call_for(
            "getBalance",
            vec![json!(pubkey.to_string()), commitment_param(commitment)],
        )?;
        Ok(response.value)
    }

    /// `Ok(None)` when the account does not exist.
    pub fn get_account_info(
        &self,
        pubkey: &Pubkey,
        commitment: CommitmentConfig,
    ) -> Result<Option<AccountInfo>, RpcError> {
        let mut config = commitment_param(commitment);
        config["encoding"] = json!("base64");
        let response: WithContext<Option<UiAccount>> =
            self.call_for("getAccountInfo", vec![json!(pubkey.to_string()), config])?;
        response.value.map(UiAccount::into_account_info).transpose()
    }

    pub fn get_latest_blockhash(
        &self,
        commitment: CommitmentConfig,
    ) -> Result<LatestBlockhash, RpcError> {
        let response: WithContext<LatestBlockhash> =
            self.call_for("getLatestBlockhash", vec![commitment_param(commitment)])?;
        Ok(response.value)
    }

    pub fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
        commitment: CommitmentConfig,
    ) -> Result<u64, RpcError> {
        self.call_for(
            "getMinimumBalanceForRentExemption",
            vec![json!(data_len), commitment_param(commitment)],
        )
    }

    /// Submits an already signed transaction in wire format and returns its
    /// signature as reported by the node.
    pub fn send_transaction(&self, wire_transaction: &[u8]) -> Result<String, RpcError> {
        self.call_for(
            "sendTransaction",
            vec![
                json!(STANDARD.encode(wire_transaction)),
                json!({ "encoding": "base64" }),
            ],
        )
    }
}
