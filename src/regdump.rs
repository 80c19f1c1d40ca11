//! Register Dump Parsing
//!
//! Decodes the hex text accepted by `--regdump` (a full 32-byte dump) and
//! by each single-byte `--reg-<NAME> HEX` flag (SPEC_FULL.md §6.6).

use nom::bytes::complete::take_while_m_n;
use nom::combinator::{all_consuming, map_res};
use nom::multi::many0;
use nom::IResult;

use crate::error::{Result, Ym7128BError};

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn hex_byte(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, is_hex_digit), |hex| {
        u8::from_str_radix(hex, 16)
    })(input)
}

fn hex_bytes(input: &str) -> IResult<&str, Vec<u8>> {
    all_consuming(many0(hex_byte))(input)
}

/// Parse a hex string (whitespace ignored) into up to 32 raw register
/// bytes. More than 32 bytes, an odd digit count, or a non-hex character
/// is a [`Ym7128BError::ParseError`].
pub fn parse_regdump(hex: &str) -> Result<Vec<u8>> {
    let cleaned: String = hex.chars().filter(|c| !c.is_whitespace()).collect();

    let (_, bytes) = hex_bytes(&cleaned)
        .map_err(|e| Ym7128BError::ParseError(format!("malformed register dump: {e}")))?;

    if bytes.len() > 32 {
        return Err(Ym7128BError::ParseError(format!(
            "register dump has {} bytes, at most 32 are addressable",
            bytes.len()
        )));
    }

    Ok(bytes)
}
