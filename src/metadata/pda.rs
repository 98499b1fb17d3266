//! Program-derived addresses owned by the token-metadata program.

use solana_sdk::pubkey::Pubkey;

use crate::accounts::ProgramIds;

pub const PREFIX: &str = "metadata";
pub const EDITION: &str = "edition";
pub const COLLECTION_AUTHORITY: &str = "collection_authority";
/// Editions tracked per edition-marker account.
pub const EDITION_MARKER_BIT_SIZE: u64 = 248;

impl ProgramIds {
    pub fn find_metadata_account(&self, mint: &Pubkey) -> (Pubkey, u8) {
        let program = self.token_metadata;
        let seeds = [PREFIX.as_bytes(), program.as_ref(), mint.as_ref()];
        Pubkey::find_program_address(&seeds, &program)
    }

    /// Master edition and print edition accounts share this derivation.
    pub fn find_master_edition_account(&self, mint: &Pubkey) -> (Pubkey, u8) {
        let program = self.token_metadata;
        let seeds = [
            PREFIX.as_bytes(),
            program.as_ref(),
            mint.as_ref(),
            EDITION.as_bytes(),
        ];
        Pubkey::find_program_address(&seeds, &program)
    }

    /// `mint` is the master edition's mint, not the new print's.
    pub fn find_edition_marker_account(&self, mint: &Pubkey, edition: u64) -> (Pubkey, u8) {
        let program = self.token_metadata;
        let marker = (edition / EDITION_MARKER_BIT_SIZE).to_string();
        let seeds = [
            PREFIX.as_bytes(),
            program.as_ref(),
            mint.as_ref(),
            EDITION.as_bytes(),
            marker.as_bytes(),
        ];
        Pubkey::find_program_address(&seeds, &program)
    }

    pub fn find_collection_authority_record(
        &self,
        mint: &Pubkey,
        authority: &Pubkey,
    ) -> (Pubkey, u8) {
        let program = self.token_metadata;
        let seeds = [
            PREFIX.as_bytes(),
            program.as_ref(),
            mint.as_ref(),
            COLLECTION_AUTHORITY.as_bytes(),
            authority.as_ref(),
        ];
        Pubkey::find_program_address(&seeds, &program)
    }
}
