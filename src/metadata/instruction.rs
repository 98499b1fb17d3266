use serde::Deserialize;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};

use super::MetadataInstruction;
use super::args::*;
use super::codec::{EncodeError, encode};
use super::data::{CollectionDetails, Data, DataV2};
use super::keys::{serde_key, serde_option_key};
use super::schema::{AccountSchema, Inclusion};
use crate::accounts::ProgramIds;

#[derive(Clone, Debug, Deserialize)]
pub struct CreateMetadataAccountParams {
    #[serde(with = "serde_key")]
    pub metadata: Pubkey,
    #[serde(with = "serde_key")]
    pub mint: Pubkey,
    #[serde(with = "serde_key")]
    pub mint_authority: Pubkey,
    #[serde(with = "serde_key")]
    pub payer: Pubkey,
    #[serde(with = "serde_key")]
    pub update_authority: Pubkey,
    #[serde(default)]
    pub update_authority_is_signer: bool,
    #[serde(default)]
    pub is_mutable: bool,
    pub data: Data,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CreateMetadataAccountV2Params {
    #[serde(with = "serde_key")]
    pub metadata: Pubkey,
    #[serde(with = "serde_key")]
    pub mint: Pubkey,
    #[serde(with = "serde_key")]
    pub mint_authority: Pubkey,
    #[serde(with = "serde_key")]
    pub payer: Pubkey,
    #[serde(with = "serde_key")]
    pub update_authority: Pubkey,
    #[serde(default)]
    pub update_authority_is_signer: bool,
    #[serde(default)]
    pub is_mutable: bool,
    pub data: DataV2,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CreateMetadataAccountV3Params {
    #[serde(with = "serde_key")]
    pub metadata: Pubkey,
    #[serde(with = "serde_key")]
    pub mint: Pubkey,
    #[serde(with = "serde_key")]
    pub mint_authority: Pubkey,
    #[serde(with = "serde_key")]
    pub payer: Pubkey,
    #[serde(with = "serde_key")]
    pub update_authority: Pubkey,
    #[serde(default)]
    pub update_authority_is_signer: bool,
    #[serde(default)]
    pub is_mutable: bool,
    pub data: DataV2,
    #[serde(default)]
    pub collection_details: Option<CollectionDetails>,
}

/// Every field left as `None` keeps its current on-chain value.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateMetadataAccountParams {
    #[serde(with = "serde_key")]
    pub metadata: Pubkey,
    #[serde(with = "serde_key")]
    pub update_authority: Pubkey,
    #[serde(default)]
    pub data: Option<Data>,
    #[serde(default, with = "serde_option_key")]
    pub new_update_authority: Option<Pubkey>,
    #[serde(default)]
    pub primary_sale_happened: Option<bool>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateMetadataAccountV2Params {
    #[serde(with = "serde_key")]
    pub metadata: Pubkey,
    #[serde(with = "serde_key")]
    pub update_authority: Pubkey,
    #[serde(default)]
    pub data: Option<DataV2>,
    #[serde(default, with = "serde_option_key")]
    pub new_update_authority: Option<Pubkey>,
    #[serde(default)]
    pub primary_sale_happened: Option<bool>,
    #[serde(default)]
    pub is_mutable: Option<bool>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdatePrimarySaleHappenedViaTokenParams {
    #[serde(with = "serde_key")]
    pub metadata: Pubkey,
    #[serde(with = "serde_key")]
    pub owner: Pubkey,
    #[serde(with = "serde_key")]
    pub token_account: Pubkey,
}

/// Used by both master edition instructions; only the metadata account's
/// writability differs between them.
#[derive(Clone, Debug, Deserialize)]
pub struct CreateMasterEditionParams {
    #[serde(with = "serde_key")]
    pub edition: Pubkey,
    #[serde(with = "serde_key")]
    pub mint: Pubkey,
    #[serde(with = "serde_key")]
    pub update_authority: Pubkey,
    #[serde(with = "serde_key")]
    pub mint_authority: Pubkey,
    #[serde(with = "serde_key")]
    pub metadata: Pubkey,
    #[serde(with = "serde_key")]
    pub payer: Pubkey,
    #[serde(default)]
    pub max_supply: Option<u64>,
}

/// Creator signs off on its entry in a metadata account.
#[derive(Clone, Debug, Deserialize)]
pub struct SignMetadataParams {
    #[serde(with = "serde_key")]
    pub metadata: Pubkey,
    #[serde(with = "serde_key")]
    pub creator: Pubkey,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MintNewEditionFromMasterEditionViaTokenParams {
    #[serde(with = "serde_key")]
    pub new_metadata: Pubkey,
    #[serde(with = "serde_key")]
    pub new_edition: Pubkey,
    #[serde(with = "serde_key")]
    pub master_edition: Pubkey,
    #[serde(with = "serde_key")]
    pub new_mint: Pubkey,
    #[serde(with = "serde_key")]
    pub edition_mark: Pubkey,
    #[serde(with = "serde_key")]
    pub new_mint_authority: Pubkey,
    #[serde(with = "serde_key")]
    pub payer: Pubkey,
    #[serde(with = "serde_key")]
    pub token_account_owner: Pubkey,
    #[serde(with = "serde_key")]
    pub token_account: Pubkey,
    #[serde(with = "serde_key")]
    pub new_metadata_update_authority: Pubkey,
    #[serde(with = "serde_key")]
    pub master_metadata: Pubkey,
    pub edition: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PuffMetadataParams {
    #[serde(with = "serde_key")]
    pub metadata: Pubkey,
}

#[derive(Clone, Debug, Deserialize)]
pub struct VerifyCollectionParams {
    #[serde(with = "serde_key")]
    pub metadata: Pubkey,
    #[serde(with = "serde_key")]
    pub collection_authority: Pubkey,
    #[serde(with = "serde_key")]
    pub payer: Pubkey,
    #[serde(with = "serde_key")]
    pub collection_mint: Pubkey,
    /// Metadata account of the collection.
    #[serde(with = "serde_key")]
    pub collection: Pubkey,
    #[serde(with = "serde_key")]
    pub collection_master_edition: Pubkey,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UnverifyCollectionParams {
    #[serde(with = "serde_key")]
    pub metadata: Pubkey,
    #[serde(with = "serde_key")]
    pub collection_authority: Pubkey,
    #[serde(with = "serde_key")]
    pub collection_mint: Pubkey,
    #[serde(with = "serde_key")]
    pub collection: Pubkey,
    #[serde(with = "serde_key")]
    pub collection_master_edition: Pubkey,
    #[serde(with = "serde_key")]
    pub collection_authority_record: Pubkey,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SetAndVerifyCollectionParams {
    #[serde(with = "serde_key")]
    pub metadata: Pubkey,
    #[serde(with = "serde_key")]
    pub collection_authority: Pubkey,
    #[serde(with = "serde_key")]
    pub payer: Pubkey,
    #[serde(with = "serde_key")]
    pub update_authority: Pubkey,
    #[serde(with = "serde_key")]
    pub collection_mint: Pubkey,
    #[serde(with = "serde_key")]
    pub collection: Pubkey,
    #[serde(with = "serde_key")]
    pub collection_master_edition: Pubkey,
    /// Only needed when a delegated collection authority signs.
    #[serde(default, with = "serde_option_key")]
    pub collection_authority_record: Option<Pubkey>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RemoveCreatorVerificationParams {
    #[serde(with = "serde_key")]
    pub metadata: Pubkey,
    #[serde(with = "serde_key")]
    pub creator: Pubkey,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BurnNftParams {
    #[serde(with = "serde_key")]
    pub metadata: Pubkey,
    #[serde(with = "serde_key")]
    pub owner: Pubkey,
    #[serde(with = "serde_key")]
    pub mint: Pubkey,
    #[serde(with = "serde_key")]
    pub token_account: Pubkey,
    #[serde(with = "serde_key")]
    pub master_edition: Pubkey,
    #[serde(with = "serde_key")]
    pub spl_token_program: Pubkey,
    #[serde(with = "serde_key")]
    pub collection_metadata: Pubkey,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SetCollectionSizeParams {
    #[serde(with = "serde_key")]
    pub collection_metadata: Pubkey,
    #[serde(with = "serde_key")]
    pub collection_authority: Pubkey,
    #[serde(with = "serde_key")]
    pub collection_mint: Pubkey,
    #[serde(default, with = "serde_option_key")]
    pub collection_authority_record: Option<Pubkey>,
    pub size: u64,
}

/// Builds token-metadata instructions against a set of program ids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InstructionBuilder {
    ids: ProgramIds,
}

impl InstructionBuilder {
    pub fn new(ids: ProgramIds) -> Self {
        Self { ids }
    }

    pub fn ids(&self) -> &ProgramIds {
        &self.ids
    }

    fn instruction(&self, schema: AccountSchema, data: Vec<u8>) -> Instruction {
        Instruction {
            program_id: self.ids.token_metadata,
            accounts: schema.resolve(),
            data,
        }
    }

    fn create_metadata_schema(
        &self,
        metadata: Pubkey,
        mint: Pubkey,
        mint_authority: Pubkey,
        payer: Pubkey,
        update_authority: Pubkey,
        update_authority_is_signer: bool,
    ) -> AccountSchema {
        AccountSchema::new()
            .writable(metadata)
            .readonly(mint)
            .signer(mint_authority)
            .writable_signer(payer)
            .account(update_authority, update_authority_is_signer, false)
            .readonly(self.ids.system)
            .readonly(self.ids.rent)
    }

    fn master_edition_schema(
        &self,
        params: &CreateMasterEditionParams,
        metadata_writable: bool,
    ) -> AccountSchema {
        AccountSchema::new()
            .writable(params.edition)
            .writable(params.mint)
            .signer(params.update_authority)
            .signer(params.mint_authority)
            .writable_signer(params.payer)
            .account(params.metadata, false, metadata_writable)
            .readonly(self.ids.token)
            .readonly(self.ids.system)
            .readonly(self.ids.rent)
    }

    pub fn create_metadata_account(
        &self,
        params: &CreateMetadataAccountParams,
    ) -> Result<Instruction, EncodeError> {
        let data = encode(
            MetadataInstruction::CreateMetadataAccount,
            &CreateMetadataAccountArgs {
                data: params.data.clone(),
                is_mutable: params.is_mutable,
            },
        )?;
        let schema = self.create_metadata_schema(
            params.metadata,
            params.mint,
            params.mint_authority,
            params.payer,
            params.update_authority,
            params.update_authority_is_signer,
        );
        Ok(self.instruction(schema, data))
    }

    pub fn update_metadata_account(
        &self,
        params: &UpdateMetadataAccountParams,
    ) -> Result<Instruction, EncodeError> {
        let data = encode(
            MetadataInstruction::UpdateMetadataAccount,
            &UpdateMetadataAccountArgs {
                data: params.data.clone(),
                update_authority: params.new_update_authority,
                primary_sale_happened: params.primary_sale_happened,
            },
        )?;
        let schema = AccountSchema::new()
            .writable(params.metadata)
            .signer(params.update_authority);
        Ok(self.instruction(schema, data))
    }

    pub fn update_primary_sale_happened_via_token(
        &self,
        params: &UpdatePrimarySaleHappenedViaTokenParams,
    ) -> Result<Instruction, EncodeError> {
        let data = encode(MetadataInstruction::UpdatePrimarySaleHappenedViaToken, &())?;
        let schema = AccountSchema::new()
            .writable(params.metadata)
            .signer(params.owner)
            .readonly(params.token_account);
        Ok(self.instruction(schema, data))
    }

    pub fn sign_metadata(&self, params: &SignMetadataParams) -> Result<Instruction, EncodeError> {
        let data = encode(MetadataInstruction::SignMetadata, &())?;
        let schema = AccountSchema::new()
            .writable(params.metadata)
            .signer(params.creator);
        Ok(self.instruction(schema, data))
    }

    pub fn create_master_edition(
        &self,
        params: &CreateMasterEditionParams,
    ) -> Result<Instruction, EncodeError> {
        let data = encode(
            MetadataInstruction::CreateMasterEdition,
            &CreateMasterEditionArgs {
                max_supply: params.max_supply,
            },
        )?;
        Ok(self.instruction(self.master_edition_schema(params, false), data))
    }

    pub fn mint_new_edition_from_master_edition_via_token(
        &self,
        params: &MintNewEditionFromMasterEditionViaTokenParams,
    ) -> Result<Instruction, EncodeError> {
        let data = encode(
            MetadataInstruction::MintNewEditionFromMasterEditionViaToken,
            &MintNewEditionFromMasterEditionViaTokenArgs {
                edition: params.edition,
            },
        )?;
        let schema = AccountSchema::new()
            .writable(params.new_metadata)
            .writable(params.new_edition)
            .writable(params.master_edition)
            .writable(params.new_mint)
            .writable(params.edition_mark)
            .signer(params.new_mint_authority)
            .writable_signer(params.payer)
            .signer(params.token_account_owner)
            .readonly(params.token_account)
            .readonly(params.new_metadata_update_authority)
            .readonly(params.master_metadata)
            .readonly(self.ids.token)
            .readonly(self.ids.system)
            .readonly(self.ids.rent);
        Ok(self.instruction(schema, data))
    }

    pub fn puff_metadata(&self, params: &PuffMetadataParams) -> Result<Instruction, EncodeError> {
        let data = encode(MetadataInstruction::PuffMetadata, &())?;
        Ok(self.instruction(AccountSchema::new().writable(params.metadata), data))
    }

    pub fn update_metadata_account_v2(
        &self,
        params: &UpdateMetadataAccountV2Params,
    ) -> Result<Instruction, EncodeError> {
        let data = encode(
            MetadataInstruction::UpdateMetadataAccountV2,
            &UpdateMetadataAccountArgsV2 {
                data: params.data.clone(),
                update_authority: params.new_update_authority,
                primary_sale_happened: params.primary_sale_happened,
                is_mutable: params.is_mutable,
            },
        )?;
        let schema = AccountSchema::new()
            .writable(params.metadata)
            .signer(params.update_authority);
        Ok(self.instruction(schema, data))
    }

    pub fn create_metadata_account_v2(
        &self,
        params: &CreateMetadataAccountV2Params,
    ) -> Result<Instruction, EncodeError> {
        let data = encode(
            MetadataInstruction::CreateMetadataAccountV2,
            &CreateMetadataAccountArgsV2 {
                data: params.data.clone(),
                is_mutable: params.is_mutable,
            },
        )?;
        let schema = self.create_metadata_schema(
            params.metadata,
            params.mint,
            params.mint_authority,
            params.payer,
            params.update_authority,
            params.update_authority_is_signer,
        );
        Ok(self.instruction(schema, data))
    }

    pub fn create_master_edition_v3(
        &self,
        params: &CreateMasterEditionParams,
    ) -> Result<Instruction, EncodeError> {
        let data = encode(
            MetadataInstruction::CreateMasterEditionV3,
            &CreateMasterEditionArgs {
                max_supply: params.max_supply,
            },
        )?;
        Ok(self.instruction(self.master_edition_schema(params, true), data))
    }

    pub fn verify_collection(
        &self,
        params: &VerifyCollectionParams,
    ) -> Result<Instruction, EncodeError> {
        let data = encode(MetadataInstruction::VerifyCollection, &())?;
        let schema = AccountSchema::new()
            .writable(params.metadata)
            .writable_signer(params.collection_authority)
            .writable_signer(params.payer)
            .readonly(params.collection_mint)
            .readonly(params.collection)
            .readonly(params.collection_master_edition);
        Ok(self.instruction(schema, data))
    }

    pub fn unverify_collection(
        &self,
        params: &UnverifyCollectionParams,
    ) -> Result<Instruction, EncodeError> {
        let data = encode(MetadataInstruction::UnverifyCollection, &())?;
        let schema = AccountSchema::new()
            .writable(params.metadata)
            .writable_signer(params.collection_authority)
            .readonly(params.collection_mint)
            .readonly(params.collection)
            .readonly(params.collection_master_edition)
            .readonly(params.collection_authority_record);
        Ok(self.instruction(schema, data))
    }

    pub fn set_and_verify_collection(
        &self,
        params: &SetAndVerifyCollectionParams,
    ) -> Result<Instruction, EncodeError> {
        let data = encode(MetadataInstruction::SetAndVerifyCollection, &())?;
        let schema = AccountSchema::new()
            .writable(params.metadata)
            .writable_signer(params.collection_authority)
            .writable_signer(params.payer)
            .readonly(params.update_authority)
            .readonly(params.collection_mint)
            .readonly(params.collection)
            .readonly(params.collection_master_edition)
            .optional(
                params.collection_authority_record,
                false,
                false,
                Inclusion::NonDefault,
            );
        Ok(self.instruction(schema, data))
    }

    pub fn remove_creator_verification(
        &self,
        params: &RemoveCreatorVerificationParams,
    ) -> Result<Instruction, EncodeError> {
        let data = encode(MetadataInstruction::RemoveCreatorVerification, &())?;
        let schema = AccountSchema::new()
            .writable(params.metadata)
            .signer(params.creator);
        Ok(self.instruction(schema, data))
    }

    pub fn burn_nft(&self, params: &BurnNftParams) -> Result<Instruction, EncodeError> {
        let data = encode(MetadataInstruction::BurnNft, &())?;
        let schema = AccountSchema::new()
            .writable(params.metadata)
            .writable_signer(params.owner)
            .writable(params.mint)
            .writable(params.token_account)
            .writable(params.master_edition)
            .readonly(params.spl_token_program)
            .writable(params.collection_metadata);
        Ok(self.instruction(schema, data))
    }

    pub fn create_metadata_account_v3(
        &self,
        params: &CreateMetadataAccountV3Params,
    ) -> Result<Instruction, EncodeError> {
        let data = encode(
            MetadataInstruction::CreateMetadataAccountV3,
            &CreateMetadataAccountArgsV3 {
                data: params.data.clone(),
                is_mutable: params.is_mutable,
                collection_details: params.collection_details.clone(),
            },
        )?;
        let schema = self.create_metadata_schema(
            params.metadata,
            params.mint,
            params.mint_authority,
            params.payer,
            params.update_authority,
            params.update_authority_is_signer,
        );
        Ok(self.instruction(schema, data))
    }

    pub fn set_collection_size(
        &self,
        params: &SetCollectionSizeParams,
    ) -> Result<Instruction, EncodeError> {
        let data = encode(
            MetadataInstruction::SetCollectionSize,
            &SetCollectionSizeArgs { size: params.size },
        )?;
        let schema = AccountSchema::new()
            .writable(params.collection_metadata)
            .writable_signer(params.collection_authority)
            .readonly(params.collection_mint)
            .optional(
                params.collection_authority_record,
                false,
                false,
                Inclusion::NonDefault,
            );
        Ok(self.instruction(schema, data))
    }
}
