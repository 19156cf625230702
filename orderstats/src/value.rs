// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Orderable values.
//!
//! Every algorithm in this crate is written once against [`OrderedItem`] and
//! runs unchanged on numeric (`f64`), textual (`String`) and generic
//! ([`Scalar`]) columns.

use std::cmp::Ordering;
use std::fmt;

use crate::codec::ModelBytes;
use crate::codec::ModelSlice;
use crate::error::Error;

/// Trait implemented by item types that can be histogrammed and quantized.
pub trait OrderedItem: Clone + fmt::Debug {
    /// Compare two items.
    fn cmp(a: &Self, b: &Self) -> Ordering;

    /// Returns true if the item is NaN.
    ///
    /// NaN items have no position in the order and are skipped.
    fn is_nan(_value: &Self) -> bool {
        false
    }

    /// Returns the midpoint of two items, if the type has one.
    ///
    /// Only numeric items interpolate; other types return `None` and
    /// averaged-step quantiles fall back to the lower item.
    fn midpoint_of(_a: &Self, _b: &Self) -> Option<Self> {
        None
    }
}

/// Binary encoding of items inside a persisted quantile model.
pub(crate) trait ItemCodec: Sized {
    fn serialize(value: &Self, bytes: &mut ModelBytes);

    fn deserialize(input: &mut ModelSlice<'_>) -> Result<Self, Error>;
}

/// The representation of a column's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// 64-bit floating point values.
    Numeric,
    /// UTF-8 strings.
    Text,
    /// Tagged [`Scalar`] values.
    Generic,
}

impl ValueType {
    pub(crate) const fn tag(self) -> u8 {
        match self {
            ValueType::Numeric => 0,
            ValueType::Text => 1,
            ValueType::Generic => 2,
        }
    }

    pub(crate) fn from_tag(tag: u8) -> Result<Self, Error> {
        match tag {
            0 => Ok(ValueType::Numeric),
            1 => Ok(ValueType::Text),
            2 => Ok(ValueType::Generic),
            _ => Err(Error::malformed(format!("unknown value type tag: {tag}"))),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Numeric => "Numeric",
            ValueType::Text => "Text",
            ValueType::Generic => "Generic",
        };
        f.write_str(name)
    }
}

/// A generic tagged scalar.
///
/// Numeric variants compare with each other by value, and all numeric values
/// order before text.
///
/// ```rust
/// # use orderstats::Scalar;
/// # use orderstats::OrderedItem;
/// use std::cmp::Ordering;
///
/// assert_eq!(Scalar::cmp(&Scalar::Int(2), &Scalar::Float(2.5)), Ordering::Less);
/// assert_eq!(Scalar::cmp(&Scalar::Float(1e9), &Scalar::from("a")), Ordering::Less);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// UTF-8 string.
    Text(String),
}

impl Scalar {
    /// Interprets this scalar as an integer, the way parameter values are read.
    ///
    /// Floats convert only when integral; text is parsed after trimming.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(v) => Some(*v),
            Scalar::Float(v) => {
                if v.fract() == 0.0 && *v >= i64::MIN as f64 && *v <= i64::MAX as f64 {
                    Some(*v as i64)
                } else {
                    None
                }
            }
            Scalar::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Returns the text if this scalar is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{v}"),
            Scalar::Float(v) => write!(f, "{v}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl OrderedItem for f64 {
    fn cmp(a: &Self, b: &Self) -> Ordering {
        a.partial_cmp(b).unwrap_or(Ordering::Greater)
    }

    fn is_nan(value: &Self) -> bool {
        value.is_nan()
    }

    fn midpoint_of(a: &Self, b: &Self) -> Option<Self> {
        Some(0.5 * (a + b))
    }
}

impl OrderedItem for String {
    fn cmp(a: &Self, b: &Self) -> Ordering {
        a.cmp(b)
    }
}

impl OrderedItem for Scalar {
    fn cmp(a: &Self, b: &Self) -> Ordering {
        match (a, b) {
            (Scalar::Int(x), Scalar::Int(y)) => x.cmp(y),
            (Scalar::Float(x), Scalar::Float(y)) => compare_floats(*x, *y),
            (Scalar::Int(x), Scalar::Float(y)) => compare_int_float(*x, *y),
            (Scalar::Float(x), Scalar::Int(y)) => compare_int_float(*y, *x).reverse(),
            (Scalar::Text(x), Scalar::Text(y)) => x.cmp(y),
            (Scalar::Text(_), _) => Ordering::Greater,
            (_, Scalar::Text(_)) => Ordering::Less,
        }
    }

    fn is_nan(value: &Self) -> bool {
        matches!(value, Scalar::Float(v) if v.is_nan())
    }
}

/// Orders floats with NaN after every number and equal to itself.
fn compare_floats(x: f64, y: f64) -> Ordering {
    x.partial_cmp(&y).unwrap_or_else(|| x.is_nan().cmp(&y.is_nan()))
}

/// Compares an integer with a float exactly, without rounding the integer.
fn compare_int_float(x: i64, y: f64) -> Ordering {
    // 2^63, the first float above every i64.
    const I64_END: f64 = 9_223_372_036_854_775_808.0;
    if y.is_nan() || y >= I64_END {
        return Ordering::Less;
    }
    if y < -I64_END {
        return Ordering::Greater;
    }
    let floor = y.floor();
    // floor is integral and within [i64::MIN, i64::MAX], so the cast is exact.
    match x.cmp(&(floor as i64)) {
        Ordering::Equal if y > floor => Ordering::Less,
        ordering => ordering,
    }
}

const SCALAR_INT: u8 = 0;
const SCALAR_FLOAT: u8 = 1;
const SCALAR_TEXT: u8 = 2;

impl ItemCodec for f64 {
    fn serialize(value: &Self, bytes: &mut ModelBytes) {
        bytes.write_f64_le(*value);
    }

    fn deserialize(input: &mut ModelSlice<'_>) -> Result<Self, Error> {
        input
            .read_f64_le()
            .map_err(|_| Error::insufficient_data("f64"))
    }
}

impl ItemCodec for String {
    fn serialize(value: &Self, bytes: &mut ModelBytes) {
        bytes.write_str(value);
    }

    fn deserialize(input: &mut ModelSlice<'_>) -> Result<Self, Error> {
        input
            .read_string()
            .map_err(|err| Error::insufficient_data("string").set_source(err))
    }
}

impl ItemCodec for Scalar {
    fn serialize(value: &Self, bytes: &mut ModelBytes) {
        match value {
            Scalar::Int(v) => {
                bytes.write_u8(SCALAR_INT);
                bytes.write_i64_le(*v);
            }
            Scalar::Float(v) => {
                bytes.write_u8(SCALAR_FLOAT);
                bytes.write_f64_le(*v);
            }
            Scalar::Text(s) => {
                bytes.write_u8(SCALAR_TEXT);
                bytes.write_str(s);
            }
        }
    }

    fn deserialize(input: &mut ModelSlice<'_>) -> Result<Self, Error> {
        let tag = input
            .read_u8()
            .map_err(|_| Error::insufficient_data("scalar_tag"))?;
        match tag {
            SCALAR_INT => input
                .read_i64_le()
                .map(Scalar::Int)
                .map_err(|_| Error::insufficient_data("scalar_int")),
            SCALAR_FLOAT => input
                .read_f64_le()
                .map(Scalar::Float)
                .map_err(|_| Error::insufficient_data("scalar_float")),
            SCALAR_TEXT => input
                .read_string()
                .map(Scalar::Text)
                .map_err(|err| Error::insufficient_data("scalar_text").set_source(err)),
            _ => Err(Error::malformed(format!("unknown scalar tag: {tag}"))),
        }
    }
}
