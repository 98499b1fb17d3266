use anyhow::{Result, anyhow};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use clap::ValueEnum;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DataEncoding {
    Hex,
    Base58,
    Base64,
}

/// Decodes instruction data. Hex input may carry a `0x` prefix.
pub fn decode_data(input: &str, encoding: DataEncoding) -> Result<Vec<u8>> {
    let input = input.trim();
    match encoding {
        DataEncoding::Hex => {
            let digits = input.strip_prefix("0x").unwrap_or(input);
            hex::decode(digits).map_err(|_| anyhow!("Invalid hex string"))
        }
        DataEncoding::Base58 => bs58::decode(input)
            .into_vec()
            .map_err(|_| anyhow!("Invalid base58 string")),
        DataEncoding::Base64 => STANDARD
            .decode(input)
            .map_err(|_| anyhow!("Invalid base64 string")),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut parts = Vec::new();
    let mut end = digits.len();
    while end > 0 {
        let start = end.saturating_sub(3);
        parts.push(&digits[start..end]);
        end = start;
    }
    parts.reverse();
    parts.join("_")
}

/// `1_500_000_000 lamports (1.5 SOL)`
pub fn format_lamports(lamports: u64) -> String {
    let whole = lamports / LAMPORTS_PER_SOL;
    let frac = lamports % LAMPORTS_PER_SOL;
    let sol = if frac == 0 {
        whole.to_string()
    } else {
        let frac = format!("{frac:09}");
        format!("{whole}.{}", frac.trim_end_matches('0'))
    };
    format!(
        "{} lamports ({sol} SOL)",
        group_thousands(&lamports.to_string())
    )
}

#[cfg(test)]
mod tests {
    use super::{DataEncoding, decode_data, format_lamports};

    #[test]
    fn format_lamports_groups_and_converts() {
        assert_eq!(format_lamports(0), "0 lamports (0 SOL)");
        assert_eq!(
            format_lamports(1_500_000_000),
            "1_500_000_000 lamports (1.5 SOL)"
        );
        assert_eq!(format_lamports(5_000), "5_000 lamports (0.000005 SOL)");
    }

    #[test]
    fn decode_data_per_encoding() {
        assert_eq!(
            decode_data("0x1907", DataEncoding::Hex).expect("hex"),
            vec![0x19, 0x07]
        );
        assert_eq!(
            decode_data("AQI=", DataEncoding::Base64).expect("base64"),
            vec![1, 2]
        );
        let encoded = bs58::encode([7u8, 1]).into_string();
        assert_eq!(
            decode_data(&encoded, DataEncoding::Base58).expect("base58"),
            vec![7, 1]
        );
        assert!(decode_data("zz", DataEncoding::Hex).is_err());
    }
}
