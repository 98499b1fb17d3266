//! Payloads that follow the discriminant byte.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;

use super::data::{CollectionDetails, Data, DataV2};
use super::keys::{borsh_option_key, serde_option_key};

#[derive(BorshSerialize, BorshDeserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateMetadataAccountArgs {
    pub data: Data,
    pub is_mutable: bool,
}

#[derive(BorshSerialize, BorshDeserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateMetadataAccountArgsV2 {
    pub data: DataV2,
    pub is_mutable: bool,
}

#[derive(BorshSerialize, BorshDeserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateMetadataAccountArgsV3 {
    pub data: DataV2,
    pub is_mutable: bool,
    pub collection_details: Option<CollectionDetails>,
}

#[derive(BorshSerialize, BorshDeserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct UpdateMetadataAccountArgs {
    pub data: Option<Data>,
    #[borsh(
        serialize_with = "borsh_option_key::serialize",
        deserialize_with = "borsh_option_key::deserialize"
    )]
    #[serde(with = "serde_option_key")]
    pub update_authority: Option<Pubkey>,
    pub primary_sale_happened: Option<bool>,
}

#[derive(BorshSerialize, BorshDeserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct UpdateMetadataAccountArgsV2 {
    pub data: Option<DataV2>,
    #[borsh(
        serialize_with = "borsh_option_key::serialize",
        deserialize_with = "borsh_option_key::deserialize"
    )]
    #[serde(with = "serde_option_key")]
    pub update_authority: Option<Pubkey>,
    pub primary_sale_happened: Option<bool>,
    pub is_mutable: Option<bool>,
}

/// Shared by `CreateMasterEdition` and `CreateMasterEditionV3`.
#[derive(BorshSerialize, BorshDeserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateMasterEditionArgs {
    /// `None` allows unlimited prints.
    pub max_supply: Option<u64>,
}

#[derive(BorshSerialize, BorshDeserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct MintNewEditionFromMasterEditionViaTokenArgs {
    pub edition: u64,
}

#[derive(BorshSerialize, BorshDeserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SetCollectionSizeArgs {
    pub size: u64,
}
