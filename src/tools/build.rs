use std::path::Path;

use anyhow::{Context, Result};
use tokenmeta::metadata::decode_instruction;

use crate::tx_format::{
    RawInstruction,
    json_ix::{build_instruction, load_instruction_request},
};
use crate::utils::{DataEncoding, decode_data};

pub fn build_from_json(request_path: impl AsRef<Path>) -> Result<()> {
    let request = load_instruction_request(&request_path)?;
    let ix = build_instruction(&request)?;
    let raw = RawInstruction::from(&ix);
    println!("{}", serde_json::to_string_pretty(&raw)?);
    Ok(())
}

pub fn decode_data_arg(input: &str, encoding: DataEncoding) -> Result<()> {
    let data = decode_data(input, encoding)?;
    let decoded = decode_instruction(&data)
        .with_context(|| format!("failed to decode {} bytes of instruction data", data.len()))?;
    println!("{}", serde_json::to_string_pretty(&decoded)?);
    Ok(())
}
