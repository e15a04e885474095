use crate::foundation::core::Rgb;
use crate::foundation::error::{CreditsError, CreditsResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Parse `#RRGGBB`, `RRGGBB` or the short `#RGB` form (case-insensitive).
pub fn parse_hex(s: &str) -> CreditsResult<Rgb> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> CreditsResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| CreditsError::validation(format!("invalid hex byte \"{pair}\"")))
    }

    if !s.is_ascii() {
        return Err(CreditsError::validation("hex color must be ASCII"));
    }

    match s.len() {
        6 => Ok(Rgb::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        3 => {
            let nib = |i: usize| hex_byte(&s[i..i + 1]).map(|v| v * 17);
            Ok(Rgb::new(nib(0)?, nib(1)?, nib(2)?))
        }
        _ => Err(CreditsError::validation(
            "hex color must be #RRGGBB or #RGB (case-insensitive)",
        )),
    }
}

impl FromStr for Rgb {
    type Err = CreditsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr([u8; 3]),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr([r, g, b]) => Ok(Rgb::new(r, g, b)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
