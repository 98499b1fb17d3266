use std::{fmt, str::FromStr};

use anyhow::{Result, anyhow};

pub const LOCALNET_RPC_ENDPOINT: &str = "http://localhost:8899";
pub const DEVNET_RPC_ENDPOINT: &str = "https://api.devnet.solana.com";
pub const TESTNET_RPC_ENDPOINT: &str = "https://api.testnet.solana.com";
pub const MAINNET_RPC_ENDPOINT: &str = "https://api.mainnet-beta.solana.com";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cluster {
    Localnet,
    Devnet,
    Testnet,
    Mainnet,
}

impl Cluster {
    pub fn endpoint(self) -> &'static str {
        match self {
            Cluster::Localnet => LOCALNET_RPC_ENDPOINT,
            Cluster::Devnet => DEVNET_RPC_ENDPOINT,
            Cluster::Testnet => TESTNET_RPC_ENDPOINT,
            Cluster::Mainnet => MAINNET_RPC_ENDPOINT,
        }
    }
}

impl FromStr for Cluster {
    type Err = anyhow::Error;

    fn from_str(moniker: &str) -> Result<Self> {
        match moniker.trim().to_ascii_lowercase().as_str() {
            "localhost" | "localnet" | "l" => Ok(Cluster::Localnet),
            "devnet" | "d" => Ok(Cluster::Devnet),
            "testnet" | "t" => Ok(Cluster::Testnet),
            "mainnet-beta" | "mainnet" | "m" => Ok(Cluster::Mainnet),
            other => Err(anyhow!("Unknown cluster moniker: {other}")),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cluster::Localnet => "localhost",
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            Cluster::Mainnet => "mainnet-beta",
        };
        f.write_str(name)
    }
}

/// Accepts a cluster moniker or a full http(s) URL.
pub fn resolve_endpoint(url_or_moniker: &str) -> Result<String> {
    let value = url_or_moniker.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        return Ok(value.to_string());
    }
    value
        .parse::<Cluster>()
        .map(|cluster| cluster.endpoint().to_string())
        .map_err(|_| anyhow!("Invalid RPC url or moniker: {value}"))
}

#[cfg(test)]
mod tests {
    use super::{Cluster, DEVNET_RPC_ENDPOINT, LOCALNET_RPC_ENDPOINT, resolve_endpoint};

    #[test]
    fn monikers_map_to_endpoints() {
        assert_eq!(resolve_endpoint("l").expect("l"), LOCALNET_RPC_ENDPOINT);
        assert_eq!(resolve_endpoint("Devnet").expect("devnet"), DEVNET_RPC_ENDPOINT);
        assert_eq!(
            resolve_endpoint("mainnet-beta").expect("mainnet"),
            Cluster::Mainnet.endpoint()
        );
    }

    #[test]
    fn urls_pass_through() {
        let url = "https://rpc.example.com/key";
        assert_eq!(resolve_endpoint(url).expect("url"), url);
    }

    #[test]
    fn unknown_moniker_is_an_error() {
        assert!(resolve_endpoint("moon").is_err());
        assert_eq!(Cluster::Testnet.to_string(), "testnet");
    }
}
