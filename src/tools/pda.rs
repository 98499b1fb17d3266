use std::str::FromStr;

use anyhow::{Result, anyhow};
use solana_sdk::pubkey::Pubkey;
use tokenmeta::accounts::ProgramIds;

fn parse_key(value: &str, label: &str) -> Result<Pubkey> {
    Pubkey::from_str(value).map_err(|err| anyhow!("Invalid {label} {value}: {err}"))
}

pub fn print_addresses(
    mint: &str,
    edition: Option<u64>,
    authority: Option<&str>,
    program_id: Option<&str>,
) -> Result<()> {
    let ids = match program_id {
        Some(id) => ProgramIds::with_token_metadata(parse_key(id, "program id")?),
        None => ProgramIds::default(),
    };
    let mint = parse_key(mint, "mint")?;

    let (metadata, bump) = ids.find_metadata_account(&mint);
    println!("Metadata:       {metadata} (bump {bump})");
    let (master_edition, bump) = ids.find_master_edition_account(&mint);
    println!("Master edition: {master_edition} (bump {bump})");

    if let Some(edition) = edition {
        let (marker, bump) = ids.find_edition_marker_account(&mint, edition);
        println!("Edition marker: {marker} (bump {bump}) for edition {edition}");
    }
    if let Some(authority) = authority {
        let authority = parse_key(authority, "authority")?;
        let (record, bump) = ids.find_collection_authority_record(&mint, &authority);
        println!("Collection authority record: {record} (bump {bump})");
    }
    Ok(())
}
