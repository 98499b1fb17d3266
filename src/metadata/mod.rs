//! Instruction builders for the token-metadata program.
//!
//! Every builder maps a parameter struct onto an ordered account list and a
//! borsh payload prefixed with the one-byte [`MetadataInstruction`] tag. The
//! account order and signer/writable flags are dictated by the program; the
//! program rejects any mismatch, so none of that is checked locally.

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Serialize;

pub mod args;
pub mod codec;
pub mod data;
pub mod instruction;
pub mod pda;
pub mod schema;

mod keys;

pub use args::*;
pub use codec::{DecodeError, DecodedInstruction, EncodeError, decode_args, decode_instruction};
pub use data::{Collection, CollectionDetails, Creator, Data, DataV2, UseMethod, Uses};
pub use instruction::*;
pub use schema::{AccountSchema, Inclusion, OptionalSlot};

/// Instruction index understood by the on-chain program.
///
/// Deprecated and unbuilt variants stay in the enum so the numbering keeps
/// matching the program.
#[repr(u8)]
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MetadataInstruction {
    CreateMetadataAccount = 0,
    UpdateMetadataAccount,
    DeprecatedCreateMasterEdition,
    DeprecatedMintNewEditionFromMasterEditionViaPrintingToken,
    UpdatePrimarySaleHappenedViaToken,
    DeprecatedSetReservationList,
    DeprecatedCreateReservationList,
    SignMetadata,
    DeprecatedMintPrintingTokensViaToken,
    DeprecatedMintPrintingTokens,
    CreateMasterEdition,
    MintNewEditionFromMasterEditionViaToken,
    ConvertMasterEditionV1ToV2,
    MintNewEditionFromMasterEditionViaVaultProxy,
    PuffMetadata,
    UpdateMetadataAccountV2,
    CreateMetadataAccountV2,
    CreateMasterEditionV3,
    VerifyCollection,
    Utilize,
    ApproveUseAuthority,
    RevokeUseAuthority,
    UnverifyCollection,
    ApproveCollectionAuthority,
    RevokeCollectionAuthority,
    SetAndVerifyCollection,
    FreezeDelegatedAccount,
    ThawDelegatedAccount,
    RemoveCreatorVerification,
    BurnNft,
    VerifySizedCollectionItem,
    UnverifySizedCollectionItem,
    SetAndVerifySizedCollectionItem,
    CreateMetadataAccountV3,
    SetCollectionSize,
    SetTokenStandard,
}

#[cfg(test)]
mod tests {
    use super::MetadataInstruction;

    #[test]
    fn discriminants_follow_program_numbering() {
        let expected = [
            (MetadataInstruction::CreateMetadataAccount, 0u8),
            (MetadataInstruction::UpdateMetadataAccount, 1),
            (MetadataInstruction::UpdatePrimarySaleHappenedViaToken, 4),
            (MetadataInstruction::SignMetadata, 7),
            (MetadataInstruction::CreateMasterEdition, 10),
            (MetadataInstruction::MintNewEditionFromMasterEditionViaToken, 11),
            (MetadataInstruction::PuffMetadata, 14),
            (MetadataInstruction::UpdateMetadataAccountV2, 15),
            (MetadataInstruction::CreateMetadataAccountV2, 16),
            (MetadataInstruction::CreateMasterEditionV3, 17),
            (MetadataInstruction::VerifyCollection, 18),
            (MetadataInstruction::UnverifyCollection, 22),
            (MetadataInstruction::SetAndVerifyCollection, 25),
            (MetadataInstruction::RemoveCreatorVerification, 28),
            (MetadataInstruction::BurnNft, 29),
            (MetadataInstruction::VerifySizedCollectionItem, 30),
            (MetadataInstruction::CreateMetadataAccountV3, 33),
            (MetadataInstruction::SetCollectionSize, 34),
            (MetadataInstruction::SetTokenStandard, 35),
        ];
        for (instruction, tag) in expected {
            assert_eq!(u8::from(instruction), tag, "{instruction:?}");
            assert_eq!(MetadataInstruction::try_from(tag).expect("known tag"), instruction);
        }
    }

    #[test]
    fn tags_past_the_table_are_rejected() {
        assert!(MetadataInstruction::try_from(36u8).is_err());
        assert!(MetadataInstruction::try_from(u8::MAX).is_err());
    }
}
