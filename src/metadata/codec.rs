use borsh::{BorshDeserialize, BorshSerialize};
use serde::Serialize;
use thiserror::Error;

use super::MetadataInstruction;
use super::args::*;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to serialize {instruction:?} payload: {source}")]
    Serialize {
        instruction: MetadataInstruction,
        #[source]
        source: borsh::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("instruction data is empty")]
    Empty,
    #[error("unknown instruction discriminant {0}")]
    UnknownDiscriminant(u8),
    #[error("expected {expected:?} instruction, found {found:?}")]
    Mismatch {
        expected: MetadataInstruction,
        found: MetadataInstruction,
    },
    #[error("no payload decoder for {0:?}")]
    Unsupported(MetadataInstruction),
    #[error("invalid {instruction:?} payload: {source}")]
    Payload {
        instruction: MetadataInstruction,
        #[source]
        source: borsh::io::Error,
    },
}

/// Serializes `args` behind the discriminant byte of `instruction`.
pub fn encode<T: BorshSerialize>(
    instruction: MetadataInstruction,
    args: &T,
) -> Result<Vec<u8>, EncodeError> {
    let mut data = vec![u8::from(instruction)];
    borsh::to_writer(&mut data, args)
        .map_err(|source| EncodeError::Serialize { instruction, source })?;
    Ok(data)
}

fn split_tag(data: &[u8]) -> Result<(MetadataInstruction, &[u8]), DecodeError> {
    let (&tag, payload) = data.split_first().ok_or(DecodeError::Empty)?;
    let instruction =
        MetadataInstruction::try_from(tag).map_err(|_| DecodeError::UnknownDiscriminant(tag))?;
    Ok((instruction, payload))
}

fn payload<T: BorshDeserialize>(
    instruction: MetadataInstruction,
    payload: &[u8],
) -> Result<T, DecodeError> {
    borsh::from_slice(payload).map_err(|source| DecodeError::Payload {
        instruction,
        source,
    })
}

/// Decodes data produced for a known instruction. Trailing bytes are an error.
pub fn decode_args<T: BorshDeserialize>(
    expected: MetadataInstruction,
    data: &[u8],
) -> Result<T, DecodeError> {
    let (found, rest) = split_tag(data)?;
    if found != expected {
        return Err(DecodeError::Mismatch { expected, found });
    }
    payload(found, rest)
}

/// Payload of any instruction this crate can build.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "instruction", content = "args", rename_all = "snake_case")]
pub enum DecodedInstruction {
    CreateMetadataAccount(CreateMetadataAccountArgs),
    UpdateMetadataAccount(UpdateMetadataAccountArgs),
    UpdatePrimarySaleHappenedViaToken,
    SignMetadata,
    CreateMasterEdition(CreateMasterEditionArgs),
    MintNewEditionFromMasterEditionViaToken(MintNewEditionFromMasterEditionViaTokenArgs),
    PuffMetadata,
    UpdateMetadataAccountV2(UpdateMetadataAccountArgsV2),
    CreateMetadataAccountV2(CreateMetadataAccountArgsV2),
    CreateMasterEditionV3(CreateMasterEditionArgs),
    VerifyCollection,
    UnverifyCollection,
    SetAndVerifyCollection,
    RemoveCreatorVerification,
    BurnNft,
    CreateMetadataAccountV3(CreateMetadataAccountArgsV3),
    SetCollectionSize(SetCollectionSizeArgs),
}

impl DecodedInstruction {
    pub fn instruction(&self) -> MetadataInstruction {
        match self {
            Self::CreateMetadataAccount(_) => MetadataInstruction::CreateMetadataAccount,
            Self::UpdateMetadataAccount(_) => MetadataInstruction::UpdateMetadataAccount,
            Self::UpdatePrimarySaleHappenedViaToken => {
                MetadataInstruction::UpdatePrimarySaleHappenedViaToken
            }
            Self::SignMetadata => MetadataInstruction::SignMetadata,
            Self::CreateMasterEdition(_) => MetadataInstruction::CreateMasterEdition,
            Self::MintNewEditionFromMasterEditionViaToken(_) => {
                MetadataInstruction::MintNewEditionFromMasterEditionViaToken
            }
            Self::PuffMetadata => MetadataInstruction::PuffMetadata,
            Self::UpdateMetadataAccountV2(_) => MetadataInstruction::UpdateMetadataAccountV2,
            Self::CreateMetadataAccountV2(_) => MetadataInstruction::CreateMetadataAccountV2,
            Self::CreateMasterEditionV3(_) => MetadataInstruction::CreateMasterEditionV3,
            Self::VerifyCollection => MetadataInstruction::VerifyCollection,
            Self::UnverifyCollection => MetadataInstruction::UnverifyCollection,
            Self::SetAndVerifyCollection => MetadataInstruction::SetAndVerifyCollection,
            Self::RemoveCreatorVerification => MetadataInstruction::RemoveCreatorVerification,
            Self::BurnNft => MetadataInstruction::BurnNft,
            Self::CreateMetadataAccountV3(_) => MetadataInstruction::CreateMetadataAccountV3,
            Self::SetCollectionSize(_) => MetadataInstruction::SetCollectionSize,
        }
    }
}

/// Identifies the instruction from its tag and decodes the payload.
pub fn decode_instruction(data: &[u8]) -> Result<DecodedInstruction, DecodeError> {
    use MetadataInstruction as Ix;

    let (instruction, rest) = split_tag(data)?;
    let decoded = match instruction {
        Ix::CreateMetadataAccount => {
            DecodedInstruction::CreateMetadataAccount(payload(instruction, rest)?)
        }
        Ix::UpdateMetadataAccount => {
            DecodedInstruction::UpdateMetadataAccount(payload(instruction, rest)?)
        }
        Ix::UpdatePrimarySaleHappenedViaToken => {
            payload::<()>(instruction, rest)?;
            DecodedInstruction::UpdatePrimarySaleHappenedViaToken
        }
        Ix::SignMetadata => {
            payload::<()>(instruction, rest)?;
            DecodedInstruction::SignMetadata
        }
        Ix::CreateMasterEdition => {
            DecodedInstruction::CreateMasterEdition(payload(instruction, rest)?)
        }
        Ix::MintNewEditionFromMasterEditionViaToken => {
            DecodedInstruction::MintNewEditionFromMasterEditionViaToken(payload(instruction, rest)?)
        }
        Ix::PuffMetadata => {
            payload::<()>(instruction, rest)?;
            DecodedInstruction::PuffMetadata
        }
        Ix::UpdateMetadataAccountV2 => {
            DecodedInstruction::UpdateMetadataAccountV2(payload(instruction, rest)?)
        }
        Ix::CreateMetadataAccountV2 => {
            DecodedInstruction::CreateMetadataAccountV2(payload(instruction, rest)?)
        }
        Ix::CreateMasterEditionV3 => {
            DecodedInstruction::CreateMasterEditionV3(payload(instruction, rest)?)
        }
        Ix::VerifyCollection => {
            payload::<()>(instruction, rest)?;
            DecodedInstruction::VerifyCollection
        }
        Ix::UnverifyCollection => {
            payload::<()>(instruction, rest)?;
            DecodedInstruction::UnverifyCollection
        }
        Ix::SetAndVerifyCollection => {
            payload::<()>(instruction, rest)?;
            DecodedInstruction::SetAndVerifyCollection
        }
        Ix::RemoveCreatorVerification => {
            payload::<()>(instruction, rest)?;
            DecodedInstruction::RemoveCreatorVerification
        }
        Ix::BurnNft => {
            payload::<()>(instruction, rest)?;
            DecodedInstruction::BurnNft
        }
        Ix::CreateMetadataAccountV3 => {
            DecodedInstruction::CreateMetadataAccountV3(payload(instruction, rest)?)
        }
        Ix::SetCollectionSize => {
            DecodedInstruction::SetCollectionSize(payload(instruction, rest)?)
        }
        other => return Err(DecodeError::Unsupported(other)),
    };
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::data::{Creator, Data};
    use solana_sdk::pubkey::Pubkey;

    #[test]
    fn encode_prefixes_discriminant() {
        let data = encode(
            MetadataInstruction::MintNewEditionFromMasterEditionViaToken,
            &MintNewEditionFromMasterEditionViaTokenArgs { edition: 42 },
        )
        .expect("encode");
        assert_eq!(data[0], 11);
        assert_eq!(&data[1..], &42u64.to_le_bytes());
    }

    #[test]
    fn unit_payload_is_a_single_byte() {
        let data = encode(MetadataInstruction::SignMetadata, &()).expect("encode");
        assert_eq!(data, vec![7]);
        assert_eq!(
            decode_instruction(&data).expect("decode"),
            DecodedInstruction::SignMetadata
        );
    }

    #[test]
    fn update_args_round_trip() {
        let args = UpdateMetadataAccountArgs {
            data: Some(Data {
                name: "Renamed".to_string(),
                symbol: "RN".to_string(),
                uri: "ipfs://cid".to_string(),
                seller_fee_basis_points: 0,
                creators: Some(vec![Creator {
                    address: Pubkey::new_unique(),
                    verified: false,
                    share: 100,
                }]),
            }),
            update_authority: Some(Pubkey::new_unique()),
            primary_sale_happened: Some(true),
        };
        let data = encode(MetadataInstruction::UpdateMetadataAccount, &args).expect("encode");
        let decoded: UpdateMetadataAccountArgs =
            decode_args(MetadataInstruction::UpdateMetadataAccount, &data).expect("decode");
        assert_eq!(decoded, args);
    }

    #[test]
    fn decode_rejects_wrong_variant() {
        let data = encode(
            MetadataInstruction::CreateMasterEditionV3,
            &CreateMasterEditionArgs { max_supply: None },
        )
        .expect("encode");
        let err = decode_args::<CreateMasterEditionArgs>(
            MetadataInstruction::CreateMasterEdition,
            &data,
        )
        .expect_err("mismatch");
        assert!(matches!(
            err,
            DecodeError::Mismatch {
                expected: MetadataInstruction::CreateMasterEdition,
                found: MetadataInstruction::CreateMasterEditionV3,
            }
        ));
    }

    #[test]
    fn decode_rejects_trailing_and_truncated_bytes() {
        let mut data = encode(
            MetadataInstruction::SetCollectionSize,
            &SetCollectionSizeArgs { size: 10 },
        )
        .expect("encode");
        data.push(0);
        assert!(matches!(
            decode_instruction(&data),
            Err(DecodeError::Payload { .. })
        ));
        assert!(matches!(
            decode_instruction(&data[..4]),
            Err(DecodeError::Payload { .. })
        ));
    }

    #[test]
    fn decode_reports_empty_unknown_and_unsupported() {
        assert!(matches!(decode_instruction(&[]), Err(DecodeError::Empty)));
        assert!(matches!(
            decode_instruction(&[200]),
            Err(DecodeError::UnknownDiscriminant(200))
        ));
        assert!(matches!(
            decode_instruction(&[19]),
            Err(DecodeError::Unsupported(MetadataInstruction::Utilize))
        ));
    }

    #[test]
    fn decoded_instruction_serializes_tagged() {
        let decoded = DecodedInstruction::SetCollectionSize(SetCollectionSizeArgs { size: 5 });
        assert_eq!(decoded.instruction(), MetadataInstruction::SetCollectionSize);
        let json = serde_json::to_value(&decoded).expect("json");
        assert_eq!(
            json,
            serde_json::json!({"instruction": "set_collection_size", "args": {"size": 5}})
        );
    }
}
