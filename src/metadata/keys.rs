//! Pubkey adapters for the derive macros.
//!
//! Borsh writes a key as its raw 32 bytes; JSON carries it as a base58
//! string. Neither relies on optional features of the sdk's key type.

pub(crate) mod borsh_key {
    use borsh::BorshDeserialize;
    use borsh::io::{Error, Read, Write};
    use solana_sdk::pubkey::Pubkey;

    pub(crate) fn serialize<W: Write>(key: &Pubkey, writer: &mut W) -> Result<(), Error> {
        writer.write_all(key.as_ref())
    }

    pub(crate) fn deserialize<R: Read>(reader: &mut R) -> Result<Pubkey, Error> {
        let bytes = <[u8; 32]>::deserialize_reader(reader)?;
        Ok(Pubkey::new_from_array(bytes))
    }
}

pub(crate) mod borsh_option_key {
    use borsh::BorshDeserialize;
    use borsh::io::{Error, ErrorKind, Read, Write};
    use solana_sdk::pubkey::Pubkey;

    pub(crate) fn serialize<W: Write>(key: &Option<Pubkey>, writer: &mut W) -> Result<(), Error> {
        match key {
            Some(key) => {
                writer.write_all(&[1])?;
                writer.write_all(key.as_ref())
            }
            None => writer.write_all(&[0]),
        }
    }

    pub(crate) fn deserialize<R: Read>(reader: &mut R) -> Result<Option<Pubkey>, Error> {
        match u8::deserialize_reader(reader)? {
            0 => Ok(None),
            1 => super::borsh_key::deserialize(reader).map(Some),
            flag => Err(Error::new(
                ErrorKind::InvalidData,
                format!("invalid option flag {flag}"),
            )),
        }
    }
}

pub(crate) mod serde_key {
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, Serializer, de};
    use solana_sdk::pubkey::Pubkey;

    pub(crate) fn serialize<S: Serializer>(key: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(key)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let text = String::deserialize(deserializer)?;
        Pubkey::from_str(&text).map_err(|err| de::Error::custom(format!("invalid pubkey {text}: {err}")))
    }
}

pub(crate) mod serde_option_key {
    use serde::{Deserialize, Deserializer, Serializer};
    use solana_sdk::pubkey::Pubkey;

    pub(crate) fn serialize<S: Serializer>(
        key: &Option<Pubkey>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match key {
            Some(key) => serializer.collect_str(key),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Pubkey>, D::Error> {
        #[derive(Deserialize)]
        struct Wrapped(#[serde(with = "super::serde_key")] Pubkey);

        Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(key)| key))
    }
}
