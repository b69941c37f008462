// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Typed command-line values and the funnel that encodes them.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use canon_hash::{Charset, Funnel, PrimitiveSink};

/// One primitive to feed a sink, parsed from `<kind>:<payload>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I16(i16),
    /// A single UTF-16 code unit.
    Char(u16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Bytes(Vec<u8>),
    /// UTF-16 code units, no charset.
    Chars(String),
    Str(String, Charset),
}

/// Decimal, or `0x` hex read as the raw bit pattern of the unsigned twin.
macro_rules! parse_int {
    ($text:expr, $signed:ty, $unsigned:ty) => {{
        let text: &str = $text;
        match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            Some(digits) => {
                let bits = <$unsigned>::from_str_radix(digits, 16);
                bits.map(<$unsigned>::cast_signed)
            }
            None => text.parse::<$signed>(),
        }
    }};
}

impl FromStr for Value {
    type Err = anyhow::Error;

    fn from_str(arg: &str) -> Result<Self> {
        let (kind, payload) = arg
            .split_once(':')
            .ok_or_else(|| anyhow!("expected <kind>:<payload>, got {arg:?}"))?;
        let bad = || format!("bad {kind} in {arg:?}");
        let value = match kind {
            "bool" => Self::Bool(payload.parse().with_context(bad)?),
            "i16" => Self::I16(parse_int!(payload, i16, u16).with_context(bad)?),
            "i32" => Self::I32(parse_int!(payload, i32, u32).with_context(bad)?),
            "i64" => Self::I64(parse_int!(payload, i64, u64).with_context(bad)?),
            "f32" => Self::F32(payload.parse().with_context(bad)?),
            "f64" => Self::F64(payload.parse().with_context(bad)?),
            "char" => Self::Char(single_unit(payload).with_context(bad)?),
            "hex" => Self::Bytes(hex::decode(payload).with_context(bad)?),
            "chars" => Self::Chars(payload.to_owned()),
            "str" => Self::Str(payload.to_owned(), Charset::Utf8),
            other => match other.strip_prefix("str@") {
                Some(name) => Self::Str(payload.to_owned(), Charset::for_name(name)?),
                None => bail!("unknown value kind {other:?}"),
            },
        };
        Ok(value)
    }
}

fn single_unit(payload: &str) -> Result<u16> {
    let mut units = payload.encode_utf16();
    match (units.next(), units.next()) {
        (Some(unit), None) => Ok(unit),
        _ => bail!("expected exactly one UTF-16 code unit"),
    }
}

/// Feeds a [`Value`] to a sink with the put that matches its kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueFunnel;

impl Funnel<Value> for ValueFunnel {
    fn funnel<S: PrimitiveSink>(&self, from: &Value, into: &mut S) {
        match from {
            Value::Bool(v) => into.put_bool(*v),
            Value::I16(v) => into.put_i16(*v),
            Value::Char(v) => into.put_char(*v),
            Value::I32(v) => into.put_i32(*v),
            Value::I64(v) => into.put_i64(*v),
            Value::F32(v) => into.put_f32(*v),
            Value::F64(v) => into.put_f64(*v),
            Value::Bytes(v) => into.put_bytes(v),
            Value::Chars(v) => into.put_unencoded_chars(v),
            Value::Str(v, charset) => into.put_string(v, *charset),
        };
    }
}
