mod tools;
mod tx_format;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use tokenmeta::RpcClient;
use tokenmeta::config::resolve_endpoint;

use crate::tools::{
    build::{build_from_json, decode_data_arg},
    node::{create_connection, get_account, get_balance, get_slot, get_version, raw_call},
    pda::print_addresses,
};
use crate::utils::DataEncoding;

#[derive(Parser)]
#[command(name = "tokenmeta", version, about = "Token Metadata instruction tool")]
struct Cli {
    /// RPC endpoint URL or cluster moniker (mainnet-beta, devnet, testnet, localhost)
    #[arg(short, long, global = true, default_value = "mainnet-beta")]
    url: String,
    /// Dump raw RPC requests and responses
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an instruction described in JSON
    Build { request: PathBuf },
    /// Decode token-metadata instruction data
    Decode {
        data: String,
        #[arg(short, long, value_enum, default_value_t = DataEncoding::Hex)]
        encoding: DataEncoding,
    },
    /// Derive metadata, edition and authority record addresses for a mint
    Pda {
        mint: String,
        #[arg(long)]
        edition: Option<u64>,
        #[arg(long)]
        authority: Option<String>,
        #[arg(long)]
        program_id: Option<String>,
    },
    /// Send a raw JSON-RPC call and print the response body
    Call { method: String, params: Vec<String> },
    /// Retrieve SOL balance for an account
    Balance { pubkey: String },
    /// Fetch an account and print its fields
    Account { pubkey: String },
    /// Print the current finalized slot
    Slot,
    /// Print the node version
    Version,
}

fn init_logger(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_module("tokenmeta", LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn connect(cli: &Cli) -> Result<RpcClient> {
    let endpoint = resolve_endpoint(&cli.url)?;
    create_connection(&endpoint, cli.debug)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    match &cli.command {
        Commands::Build { request } => build_from_json(request)?,
        Commands::Decode { data, encoding } => decode_data_arg(data, *encoding)?,
        Commands::Pda {
            mint,
            edition,
            authority,
            program_id,
        } => print_addresses(mint, *edition, authority.as_deref(), program_id.as_deref())?,
        Commands::Call { method, params } => raw_call(&connect(&cli)?, method, params)?,
        Commands::Balance { pubkey } => get_balance(&connect(&cli)?, pubkey)?,
        Commands::Account { pubkey } => get_account(&connect(&cli)?, pubkey)?,
        Commands::Slot => get_slot(&connect(&cli)?)?,
        Commands::Version => get_version(&connect(&cli)?)?,
    }

    Ok(())
}
