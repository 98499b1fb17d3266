use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use super::keys::{borsh_key, serde_key};

#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Creator {
    #[borsh(
        serialize_with = "borsh_key::serialize",
        deserialize_with = "borsh_key::deserialize"
    )]
    #[serde(with = "serde_key")]
    pub address: Pubkey,
    #[serde(default)]
    pub verified: bool,
    /// Percentage of royalties owed to this creator; shares add up to 100.
    pub share: u8,
}

/// Metadata body used by the first-generation create/update instructions.
#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Data {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    /// Royalty in basis points (0-10000).
    pub seller_fee_basis_points: u16,
    #[serde(default)]
    pub creators: Option<Vec<Creator>>,
}

/// [`Data`] extended with collection membership and usage tracking.
#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DataV2 {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    #[serde(default)]
    pub creators: Option<Vec<Creator>>,
    #[serde(default)]
    pub collection: Option<Collection>,
    #[serde(default)]
    pub uses: Option<Uses>,
}

#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Collection {
    #[serde(default)]
    pub verified: bool,
    #[borsh(
        serialize_with = "borsh_key::serialize",
        deserialize_with = "borsh_key::deserialize"
    )]
    #[serde(with = "serde_key")]
    pub key: Pubkey,
}

#[derive(
    BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq,
)]
#[serde(rename_all = "snake_case")]
pub enum UseMethod {
    Burn,
    Multiple,
    Single,
}

#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Uses {
    pub use_method: UseMethod,
    pub remaining: u64,
    pub total: u64,
}

/// Marks a metadata account as a sized collection parent.
#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CollectionDetails {
    V1 { size: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_creator() -> Creator {
        Creator {
            address: Pubkey::new_unique(),
            verified: true,
            share: 100,
        }
    }

    #[test]
    fn data_layout_matches_program() {
        let creator = sample_creator();
        let data = Data {
            name: "A".to_string(),
            symbol: "SYM".to_string(),
            uri: "".to_string(),
            seller_fee_basis_points: 500,
            creators: Some(vec![creator.clone()]),
        };
        let bytes = borsh::to_vec(&data).expect("serialize");

        let mut expected = Vec::new();
        expected.extend(1u32.to_le_bytes());
        expected.extend(b"A");
        expected.extend(3u32.to_le_bytes());
        expected.extend(b"SYM");
        expected.extend(0u32.to_le_bytes());
        expected.extend(500u16.to_le_bytes());
        expected.push(1);
        expected.extend(1u32.to_le_bytes());
        expected.extend(creator.address.to_bytes());
        expected.push(1);
        expected.push(100);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn absent_optionals_take_one_byte_each() {
        let data = DataV2 {
            name: String::new(),
            symbol: String::new(),
            uri: String::new(),
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        };
        let bytes = borsh::to_vec(&data).expect("serialize");
        assert_eq!(bytes.len(), 4 * 3 + 2 + 3);
        assert_eq!(&bytes[14..], &[0, 0, 0]);
    }

    #[test]
    fn data_v2_survives_borsh_round_trip() {
        let data = DataV2 {
            name: "Collection Item".to_string(),
            symbol: "CI".to_string(),
            uri: "https://example.com/item.json".to_string(),
            seller_fee_basis_points: 250,
            creators: Some(vec![sample_creator()]),
            collection: Some(Collection {
                verified: false,
                key: Pubkey::new_unique(),
            }),
            uses: Some(Uses {
                use_method: UseMethod::Multiple,
                remaining: 3,
                total: 5,
            }),
        };
        let bytes = borsh::to_vec(&data).expect("serialize");
        let decoded: DataV2 = borsh::from_slice(&bytes).expect("deserialize");
        assert_eq!(decoded, data);
    }

    #[test]
    fn use_method_and_collection_details_are_u8_tagged() {
        assert_eq!(borsh::to_vec(&UseMethod::Single).expect("serialize"), vec![2]);
        let details = CollectionDetails::V1 { size: 7 };
        let bytes = borsh::to_vec(&details).expect("serialize");
        assert_eq!(bytes[0], 0);
        assert_eq!(&bytes[1..], &7u64.to_le_bytes());
    }

    #[test]
    fn json_form_uses_base58_keys() {
        let key = Pubkey::new_unique();
        let value = serde_json::json!({
            "name": "N",
            "symbol": "S",
            "uri": "U",
            "seller_fee_basis_points": 10,
            "collection": {"key": key.to_string()},
            "uses": {"use_method": "burn", "remaining": 1, "total": 1}
        });
        let data: DataV2 = serde_json::from_value(value).expect("json");
        assert_eq!(data.collection.as_ref().map(|c| c.key), Some(key));
        assert!(!data.collection.expect("collection").verified);
        assert_eq!(data.creators, None);
        assert_eq!(data.uses.expect("uses").use_method, UseMethod::Burn);
    }
}
