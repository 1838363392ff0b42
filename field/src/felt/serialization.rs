use core::fmt::{self, Formatter};
use core::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Felt;

/// Serialized as a `0x`-prefixed hex string of the canonical value.
impl Serialize for Felt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{:#x}", self.to_canonical()))
    }
}

struct FeltVisitor;

impl<'de> Visitor<'de> for FeltVisitor {
    type Value = Felt;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("a hex (0x-prefixed) or decimal field element string, or an unsigned integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Felt, E> {
        Felt::from_str(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Felt, E> {
        Ok(Felt::from_u64(v))
    }
}

impl<'de> Deserialize<'de> for Felt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FeltVisitor)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use serde::{Deserialize, Serialize};

    use crate::Felt;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Wrapper {
        value: Felt,
        others: Vec<Felt>,
    }

    #[test]
    fn json_roundtrip() -> Result<()> {
        let w = Wrapper {
            value: Felt::MAX,
            others: vec![Felt::ZERO, Felt::from_u64(255)],
        };
        let json = serde_json::to_string(&w)?;
        assert_eq!(
            json,
            r#"{"value":"0x800000000000011000000000000000000000000000000000000000000000000","others":["0x0","0xff"]}"#
        );
        let back: Wrapper = serde_json::from_str(&json)?;
        assert_eq!(back, w);
        Ok(())
    }

    #[test]
    fn accepts_decimal_and_integers() -> Result<()> {
        let from_dec: Felt = serde_json::from_str(r#""-1""#)?;
        assert_eq!(from_dec, Felt::MAX);
        let from_int: Felt = serde_json::from_str("42")?;
        assert_eq!(from_int, Felt::from_u64(42));
        assert!(serde_json::from_str::<Felt>(r#""0xzz""#).is_err());
        Ok(())
    }
}
