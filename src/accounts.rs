use solana_sdk::pubkey::Pubkey;

pub const TOKEN_METADATA_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");
pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::from_str_const("11111111111111111111111111111111");
pub const TOKEN_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");
pub const RENT_SYSVAR_ID: Pubkey =
    Pubkey::from_str_const("SysvarRent111111111111111111111111111111111");

/// Program and sysvar ids referenced by the metadata instructions.
///
/// Builders never read the constants above directly; they go through an
/// instance of this struct so a fork of the program (or a local validator
/// with a redeployed copy) can be targeted without touching the builders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgramIds {
    pub token_metadata: Pubkey,
    pub system: Pubkey,
    pub token: Pubkey,
    pub rent: Pubkey,
}

impl Default for ProgramIds {
    fn default() -> Self {
        Self {
            token_metadata: TOKEN_METADATA_PROGRAM_ID,
            system: SYSTEM_PROGRAM_ID,
            token: TOKEN_PROGRAM_ID,
            rent: RENT_SYSVAR_ID,
        }
    }
}

impl ProgramIds {
    pub fn with_token_metadata(token_metadata: Pubkey) -> Self {
        Self {
            token_metadata,
            ..Self::default()
        }
    }
}
