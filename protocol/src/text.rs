//! Line-oriented text form of public keys, cryptograms and signatures.
//!
//! Byte strings are upper-case hex and integers are decimal, one field per
//! line:
//!
//! | object                   | lines                  |
//! |--------------------------|------------------------|
//! | [`PublicKey`]            | `V.x`, `V.y`           |
//! | [`SymmetricCryptogram`]  | `z`, `c`, `t`          |
//! | [`AsymmetricCryptogram`] | `Z.x`, `Z.y`, `c`, `t` |
//! | [`Signature`]            | `h`, `z`               |
//!
//! Parsing trims surrounding whitespace from each line and ignores trailing
//! blank lines; an empty `c` line stands for an empty message.

use curve::Point;
use num_bigint::BigUint;

use crate::constants::{DIGEST_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::ecies::AsymmetricCryptogram;
use crate::errors::FormatError;
use crate::keys::PublicKey;
use crate::signatures::Signature;
use crate::symmetric::SymmetricCryptogram;

/// Conversion to and from the text form.
pub trait TextEncoding: Sized {
    fn to_text(&self) -> String;
    fn from_text(text: &str) -> Result<Self, FormatError>;
}

fn fields<const N: usize>(text: &str) -> Result<[&str; N], FormatError> {
    let lines: Vec<&str> = text.trim_end().lines().map(str::trim).collect();
    lines.try_into().map_err(|lines: Vec<&str>| FormatError::FieldCount {
        expected: N,
        actual: lines.len(),
    })
}

fn decode_hex(field: &'static str, value: &str) -> Result<Vec<u8>, FormatError> {
    hex::decode(value).map_err(|source| FormatError::Hex { field, source })
}

fn decode_hex_exact(
    field: &'static str,
    value: &str,
    expected: usize,
) -> Result<Vec<u8>, FormatError> {
    let bytes = decode_hex(field, value)?;
    if bytes.len() != expected {
        return Err(FormatError::Length {
            field,
            expected,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}

fn decode_decimal(field: &'static str, value: &str) -> Result<BigUint, FormatError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::Decimal { field });
    }
    BigUint::parse_bytes(value.as_bytes(), 10).ok_or(FormatError::Decimal { field })
}

fn decode_point(x: &str, y: &str) -> Result<Point, FormatError> {
    let x = decode_decimal("x", x)?;
    let y = decode_decimal("y", y)?;
    Ok(Point::new(x, y)?)
}

impl TextEncoding for PublicKey {
    fn to_text(&self) -> String {
        format!("{}\n{}\n", self.point().x(), self.point().y())
    }

    fn from_text(text: &str) -> Result<Self, FormatError> {
        let [x, y] = fields::<2>(text)?;
        Ok(PublicKey::from_point(decode_point(x, y)?))
    }
}

impl TextEncoding for SymmetricCryptogram {
    fn to_text(&self) -> String {
        format!(
            "{}\n{}\n{}",
            hex::encode_upper(&self.z),
            hex::encode_upper(&self.c),
            hex::encode_upper(&self.t)
        )
    }

    fn from_text(text: &str) -> Result<Self, FormatError> {
        let [z, c, t] = fields::<3>(text)?;
        Ok(SymmetricCryptogram {
            z: decode_hex_exact("z", z, NONCE_SIZE)?,
            c: decode_hex("c", c)?,
            t: decode_hex_exact("t", t, TAG_SIZE)?,
        })
    }
}

impl TextEncoding for AsymmetricCryptogram {
    fn to_text(&self) -> String {
        format!(
            "{}\n{}\n{}\n{}",
            self.z.x(),
            self.z.y(),
            hex::encode_upper(&self.c),
            hex::encode_upper(&self.t)
        )
    }

    fn from_text(text: &str) -> Result<Self, FormatError> {
        let [x, y, c, t] = fields::<4>(text)?;
        Ok(AsymmetricCryptogram {
            z: decode_point(x, y)?,
            c: decode_hex("c", c)?,
            t: decode_hex_exact("t", t, TAG_SIZE)?,
        })
    }
}

impl TextEncoding for Signature {
    fn to_text(&self) -> String {
        format!("{}\n{}", hex::encode_upper(&self.h), self.z)
    }

    fn from_text(text: &str) -> Result<Self, FormatError> {
        let [h, z] = fields::<2>(text)?;
        Ok(Signature {
            h: decode_hex_exact("h", h, DIGEST_SIZE)?,
            z: decode_decimal("z", z)?,
        })
    }
}
