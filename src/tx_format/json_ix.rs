use std::{fs, path::Path, str::FromStr};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use tokenmeta::accounts::ProgramIds;
use tokenmeta::metadata::InstructionBuilder;

/// `{"instruction": "<builder name>", "params": {..}, "program_id": ".."}`
#[derive(Clone, Debug, Deserialize)]
pub struct InstructionRequest {
    pub instruction: String,
    #[serde(default)]
    pub params: Value,
    /// Overrides the token-metadata program id.
    #[serde(default)]
    pub program_id: Option<String>,
}

fn params<T: DeserializeOwned>(request: &InstructionRequest) -> Result<T> {
    serde_json::from_value(request.params.clone())
        .with_context(|| format!("Invalid params for {}", request.instruction))
}

fn program_ids(request: &InstructionRequest) -> Result<ProgramIds> {
    match &request.program_id {
        Some(id) => {
            let program = Pubkey::from_str(id)
                .map_err(|err| anyhow!("Invalid program id {id}: {err}"))?;
            Ok(ProgramIds::with_token_metadata(program))
        }
        None => Ok(ProgramIds::default()),
    }
}

pub fn build_instruction(request: &InstructionRequest) -> Result<Instruction> {
    let builder = InstructionBuilder::new(program_ids(request)?);
    let ix = match request.instruction.as_str() {
        "create_metadata_account" => builder.create_metadata_account(&params(request)?)?,
        "create_metadata_account_v2" => builder.create_metadata_account_v2(&params(request)?)?,
        "create_metadata_account_v3" => builder.create_metadata_account_v3(&params(request)?)?,
        "update_metadata_account" => builder.update_metadata_account(&params(request)?)?,
        "update_metadata_account_v2" => builder.update_metadata_account_v2(&params(request)?)?,
        "update_primary_sale_happened_via_token" => {
            builder.update_primary_sale_happened_via_token(&params(request)?)?
        }
        "sign_metadata" => builder.sign_metadata(&params(request)?)?,
        "remove_creator_verification" => builder.remove_creator_verification(&params(request)?)?,
        "create_master_edition" => builder.create_master_edition(&params(request)?)?,
        "create_master_edition_v3" => builder.create_master_edition_v3(&params(request)?)?,
        "mint_new_edition_from_master_edition_via_token" => {
            builder.mint_new_edition_from_master_edition_via_token(&params(request)?)?
        }
        "puff_metadata" => builder.puff_metadata(&params(request)?)?,
        "verify_collection" => builder.verify_collection(&params(request)?)?,
        "unverify_collection" => builder.unverify_collection(&params(request)?)?,
        "set_and_verify_collection" => builder.set_and_verify_collection(&params(request)?)?,
        "set_collection_size" => builder.set_collection_size(&params(request)?)?,
        "burn_nft" => builder.burn_nft(&params(request)?)?,
        other => return Err(anyhow!("Unsupported instruction: {other}")),
    };
    Ok(ix)
}

pub fn load_instruction_request(path: impl AsRef<Path>) -> Result<InstructionRequest> {
    let data = fs::read_to_string(&path)
        .with_context(|| format!("Error reading file {:?}", path.as_ref()))?;
    serde_json::from_str(&data).with_context(|| format!("Invalid JSON in {:?}", path.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::{InstructionRequest, build_instruction};
    use serde_json::json;
    use solana_sdk::pubkey::Pubkey;
    use tokenmeta::accounts::TOKEN_METADATA_PROGRAM_ID;

    fn request(value: serde_json::Value) -> InstructionRequest {
        serde_json::from_value(value).expect("request")
    }

    #[test]
    fn builds_named_instruction() {
        let keys: Vec<String> = (0..7).map(|_| Pubkey::new_unique().to_string()).collect();
        let ix = build_instruction(&request(json!({
            "instruction": "set_and_verify_collection",
            "params": {
                "metadata": keys[0],
                "collection_authority": keys[1],
                "payer": keys[2],
                "update_authority": keys[3],
                "collection_mint": keys[4],
                "collection": keys[5],
                "collection_master_edition": keys[6]
            }
        })))
        .expect("build");
        assert_eq!(ix.program_id, TOKEN_METADATA_PROGRAM_ID);
        assert_eq!(ix.accounts.len(), 7);
        assert_eq!(ix.data, vec![25]);
    }

    #[test]
    fn program_id_override() {
        let program = Pubkey::new_unique();
        let ix = build_instruction(&request(json!({
            "instruction": "puff_metadata",
            "program_id": program.to_string(),
            "params": {"metadata": Pubkey::new_unique().to_string()}
        })))
        .expect("build");
        assert_eq!(ix.program_id, program);
    }

    #[test]
    fn rejects_unknown_names_and_bad_params() {
        assert!(
            build_instruction(&request(json!({"instruction": "mint_everything"}))).is_err()
        );
        assert!(
            build_instruction(&request(json!({
                "instruction": "sign_metadata",
                "params": {"metadata": "nope", "creator": "nope"}
            })))
            .is_err()
        );
    }
}
