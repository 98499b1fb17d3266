use serde::Serialize;
use solana_sdk::instruction::{AccountMeta, Instruction};

pub mod json_ix;

#[derive(Clone, Debug, Serialize)]
pub struct RawAccountMeta {
    pub pubkey: String,
    pub is_signer: bool,
    pub is_writable: bool,
}

/// JSON rendering of a built instruction; data is given as base58 and hex.
#[derive(Clone, Debug, Serialize)]
pub struct RawInstruction {
    pub program_id: String,
    pub accounts: Vec<RawAccountMeta>,
    pub data: String,
    pub data_hex: String,
}

impl From<&AccountMeta> for RawAccountMeta {
    fn from(meta: &AccountMeta) -> Self {
        RawAccountMeta {
            pubkey: meta.pubkey.to_string(),
            is_signer: meta.is_signer,
            is_writable: meta.is_writable,
        }
    }
}

impl From<&Instruction> for RawInstruction {
    fn from(ix: &Instruction) -> Self {
        RawInstruction {
            program_id: ix.program_id.to_string(),
            accounts: ix.accounts.iter().map(RawAccountMeta::from).collect(),
            data: bs58::encode(&ix.data).into_string(),
            data_hex: format!("0x{}", hex::encode(&ix.data)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RawInstruction;
    use serde_json::json;
    use solana_sdk::{
        instruction::{AccountMeta, Instruction},
        pubkey::Pubkey,
    };

    #[test]
    fn raw_instruction_renders_keys_and_data() {
        let program_id = Pubkey::new_unique();
        let signer = Pubkey::new_unique();
        let ix = Instruction {
            program_id,
            accounts: vec![AccountMeta::new(signer, true)],
            data: vec![25],
        };
        let value = serde_json::to_value(RawInstruction::from(&ix)).expect("json");
        assert_eq!(
            value,
            json!({
                "program_id": program_id.to_string(),
                "accounts": [
                    {"pubkey": signer.to_string(), "is_signer": true, "is_writable": true}
                ],
                "data": bs58::encode([25u8]).into_string(),
                "data_hex": "0x19"
            })
        );
    }
}
