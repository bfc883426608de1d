//! Primitive values exchanged between containers and formats.
//!
//! Formats read and write a closed set of primitive types: booleans, strings,
//! both floating-point widths, and the signed and unsigned integer families.
//! Rather than one container method per primitive, a format implements a single
//! `encode_scalar` / `decode_scalar` pair over [`Scalar`], and the typed
//! conveniences (`encode_bool`, `decode::<u16>`, ...) are derived from the
//! [`Primitive`] trait.

use std::fmt;

/// One primitive value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Str(String),
    F32(f32),
    F64(f64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
}

/// The type of a [`Scalar`], used by decoders to request a specific primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Str,
    F32,
    F64,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
}

impl ScalarKind {
    /// Rust type name, used in error messages.
    pub fn type_name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Str => "String",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::Isize => "isize",
            ScalarKind::U8 => "u8",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::Usize => "usize",
        }
    }

    pub fn is_integer(self) -> bool {
        !matches!(
            self,
            ScalarKind::Bool | ScalarKind::Str | ScalarKind::F32 | ScalarKind::F64
        )
    }

    pub fn is_signed_integer(self) -> bool {
        matches!(
            self,
            ScalarKind::I8 | ScalarKind::I16 | ScalarKind::I32 | ScalarKind::I64 | ScalarKind::Isize
        )
    }

    pub fn is_float(self) -> bool {
        matches!(self, ScalarKind::F32 | ScalarKind::F64)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl Scalar {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::Str(_) => ScalarKind::Str,
            Scalar::F32(_) => ScalarKind::F32,
            Scalar::F64(_) => ScalarKind::F64,
            Scalar::I8(_) => ScalarKind::I8,
            Scalar::I16(_) => ScalarKind::I16,
            Scalar::I32(_) => ScalarKind::I32,
            Scalar::I64(_) => ScalarKind::I64,
            Scalar::Isize(_) => ScalarKind::Isize,
            Scalar::U8(_) => ScalarKind::U8,
            Scalar::U16(_) => ScalarKind::U16,
            Scalar::U32(_) => ScalarKind::U32,
            Scalar::U64(_) => ScalarKind::U64,
            Scalar::Usize(_) => ScalarKind::Usize,
        }
    }

    /// Widens any signed integer scalar to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Scalar::I8(n) => Some(n.into()),
            Scalar::I16(n) => Some(n.into()),
            Scalar::I32(n) => Some(n.into()),
            Scalar::I64(n) => Some(n),
            Scalar::Isize(n) => i64::try_from(n).ok(),
            _ => None,
        }
    }

    /// Widens any unsigned integer scalar to `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Scalar::U8(n) => Some(n.into()),
            Scalar::U16(n) => Some(n.into()),
            Scalar::U32(n) => Some(n.into()),
            Scalar::U64(n) => Some(n),
            Scalar::Usize(n) => u64::try_from(n).ok(),
            _ => None,
        }
    }

    /// Widens either float scalar to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Scalar::F32(n) => Some(n.into()),
            Scalar::F64(n) => Some(n),
            _ => None,
        }
    }

    /// Builds an integer scalar of `kind` from a signed value, if it fits.
    pub fn integer_from_i64(kind: ScalarKind, value: i64) -> Option<Scalar> {
        Some(match kind {
            ScalarKind::I8 => Scalar::I8(value.try_into().ok()?),
            ScalarKind::I16 => Scalar::I16(value.try_into().ok()?),
            ScalarKind::I32 => Scalar::I32(value.try_into().ok()?),
            ScalarKind::I64 => Scalar::I64(value),
            ScalarKind::Isize => Scalar::Isize(value.try_into().ok()?),
            ScalarKind::U8 => Scalar::U8(value.try_into().ok()?),
            ScalarKind::U16 => Scalar::U16(value.try_into().ok()?),
            ScalarKind::U32 => Scalar::U32(value.try_into().ok()?),
            ScalarKind::U64 => Scalar::U64(value.try_into().ok()?),
            ScalarKind::Usize => Scalar::Usize(value.try_into().ok()?),
            _ => return None,
        })
    }

    /// Builds an integer scalar of `kind` from an unsigned value, if it fits.
    pub fn integer_from_u64(kind: ScalarKind, value: u64) -> Option<Scalar> {
        Some(match kind {
            ScalarKind::I8 => Scalar::I8(value.try_into().ok()?),
            ScalarKind::I16 => Scalar::I16(value.try_into().ok()?),
            ScalarKind::I32 => Scalar::I32(value.try_into().ok()?),
            ScalarKind::I64 => Scalar::I64(value.try_into().ok()?),
            ScalarKind::Isize => Scalar::Isize(value.try_into().ok()?),
            ScalarKind::U8 => Scalar::U8(value.try_into().ok()?),
            ScalarKind::U16 => Scalar::U16(value.try_into().ok()?),
            ScalarKind::U32 => Scalar::U32(value.try_into().ok()?),
            ScalarKind::U64 => Scalar::U64(value),
            ScalarKind::Usize => Scalar::Usize(value.try_into().ok()?),
            _ => return None,
        })
    }
}

/// A Rust type that maps one-to-one onto a [`Scalar`] variant.
pub trait Primitive: Sized {
    const KIND: ScalarKind;

    fn into_scalar(self) -> Scalar;

    /// Extracts the value if `scalar` is this type's variant.
    fn from_scalar(scalar: Scalar) -> Option<Self>;
}

macro_rules! impl_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Primitive for $ty {
                const KIND: ScalarKind = ScalarKind::$variant;

                fn into_scalar(self) -> Scalar {
                    Scalar::$variant(self)
                }

                fn from_scalar(scalar: Scalar) -> Option<Self> {
                    match scalar {
                        Scalar::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::$variant(value)
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    String => Str,
    f32 => F32,
    f64 => F64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}
