// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property values carried by predicates.
//!
//! Generated `get_predicate_list` methods convert each present field with
//! `Value::from`. Standard scalar types convert out of the box; domain types
//! (enums, newtypes) opt in with their own `From` impl:
//!
//! ```rust,ignore
//! impl From<Status> for dao_core::Value {
//!     fn from(status: Status) -> Self {
//!         Self::Text(status.as_str().to_owned())
//!     }
//! }
//! ```

use std::fmt;

/// A comparable property value.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum Value {
    /// Boolean value.
    Bool(bool),

    /// Signed integer value, wide enough for every signed primitive.
    Int(i128),

    /// Unsigned integer value, wide enough for every unsigned primitive.
    UInt(u128),

    /// Floating point value.
    Float(f64),

    /// Text value.
    Text(String)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v:?}")
        }
    }
}

macro_rules! impl_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
    (cast $variant:ident as $target:ty: $($source:ty),+) => {
        $(
            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    // Pointer-sized integers never exceed 128 bits.
                    Self::$variant(value as $target)
                }
            }
        )+
    };
}

impl_from!(Int as i128: i8, i16, i32, i64, i128);
impl_from!(UInt as u128: u8, u16, u32, u64, u128);
impl_from!(cast Int as i128: isize);
impl_from!(cast UInt as u128: usize);
impl_from!(Float as f64: f32, f64);
impl_from!(Bool as bool: bool);
impl_from!(Text as String: String, &str, char);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_widen() {
        assert_eq!(Value::from(7_i32), Value::Int(7));
        assert_eq!(Value::from(7_u8), Value::UInt(7));
    }

    #[test]
    fn pointer_sized_and_wide_integers_convert() {
        assert_eq!(Value::from(3_usize), Value::UInt(3));
        assert_eq!(Value::from(-3_isize), Value::Int(-3));
        assert_eq!(Value::from(u128::MAX), Value::UInt(u128::MAX));
        assert_eq!(Value::from(i128::MIN), Value::Int(i128::MIN));
        assert_eq!(Value::from(usize::MAX), Value::UInt(usize::MAX as u128));
    }

    #[test]
    fn text_from_str_and_char() {
        assert_eq!(Value::from("ann"), Value::Text("ann".to_owned()));
        assert_eq!(Value::from('x'), Value::Text("x".to_owned()));
    }

    #[test]
    fn ordering_within_variant() {
        assert!(Value::Int(1) < Value::Int(2));
        assert!(Value::Text("a".into()) < Value::Text("b".into()));
    }

    #[test]
    fn display_quotes_text() {
        assert_eq!(Value::Text("ann".into()).to_string(), "\"ann\"");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
    }
}
