//! Types used throughout `primcol`.
//!
//! The goal of this crate is to be very lightweight, so take care with adding dependencies.

use std::fmt;

/// A dynamically typed primitive integer.
///
/// Carries both the value and which primitive type it came from, for call sites
/// that handle elements without knowing their concrete type ahead of time. Use
/// [`Primitive::into_dyn`] and [`Primitive::from_dyn`] to move between the
/// static and dynamic representations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DynInt {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
}

impl DynInt {
    /// Name of the underlying primitive type, e.g. `"u32"`.
    pub const fn type_name(self) -> &'static str {
        match self {
            DynInt::U8(_) => "u8",
            DynInt::U16(_) => "u16",
            DynInt::U32(_) => "u32",
            DynInt::U64(_) => "u64",
            DynInt::Usize(_) => "usize",
            DynInt::I8(_) => "i8",
            DynInt::I16(_) => "i16",
            DynInt::I32(_) => "i32",
            DynInt::I64(_) => "i64",
            DynInt::Isize(_) => "isize",
        }
    }
}

impl fmt::Display for DynInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Formats like a Rust literal, e.g. `42u32`.
        match self {
            DynInt::U8(val) => write!(f, "{val}u8"),
            DynInt::U16(val) => write!(f, "{val}u16"),
            DynInt::U32(val) => write!(f, "{val}u32"),
            DynInt::U64(val) => write!(f, "{val}u64"),
            DynInt::Usize(val) => write!(f, "{val}usize"),
            DynInt::I8(val) => write!(f, "{val}i8"),
            DynInt::I16(val) => write!(f, "{val}i16"),
            DynInt::I32(val) => write!(f, "{val}i32"),
            DynInt::I64(val) => write!(f, "{val}i64"),
            DynInt::Isize(val) => write!(f, "{val}isize"),
        }
    }
}

/// A primitive integer element.
///
/// This trait is sealed, it is only implemented for the primitive integer types
/// and cannot be implemented outside this crate.
pub trait Primitive: Copy + fmt::Debug + fmt::Display + private::Sealed + 'static {
    /// Name of this primitive type, e.g. `"u32"`.
    const NAME: &'static str;

    /// Wrap this value into a [`DynInt`].
    fn into_dyn(self) -> DynInt;

    /// Unwrap a [`DynInt`] back into this type.
    ///
    /// Returns `None` if `value` holds a different primitive type.
    fn from_dyn(value: DynInt) -> Option<Self>;
}

mod private {
    /// Part of the sealing pattern for [`super::Primitive`].
    pub trait Sealed {}
}

macro_rules! primitive {
    ($ty:ident) => {
        paste::paste! {
            impl crate::Primitive for $ty {
                const NAME: &'static str = stringify!($ty);

                fn into_dyn(self) -> DynInt {
                    DynInt::[< $ty:camel >](self)
                }

                fn from_dyn(value: DynInt) -> Option<$ty> {
                    match value {
                        DynInt::[< $ty:camel >](val) => Some(val),
                        _ => None,
                    }
                }
            }

            impl crate::private::Sealed for $ty {}

            impl From<$ty> for DynInt {
                fn from(value: $ty) -> DynInt {
                    DynInt::[< $ty:camel >](value)
                }
            }
        }
    };
}

primitive!(u8);
primitive!(u16);
primitive!(u32);
primitive!(u64);
primitive!(usize);
primitive!(i8);
primitive!(i16);
primitive!(i32);
primitive!(i64);
primitive!(isize);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn smoketest_dyn_roundtrip() {
        let value = 42u32.into_dyn();
        assert_eq!(value, DynInt::U32(42));
        assert_eq!(u32::from_dyn(value), Some(42));
    }

    #[test]
    fn smoketest_cross_type() {
        let value = DynInt::from(7u16);
        assert_eq!(u64::from_dyn(value), None);
        assert_eq!(i16::from_dyn(value), None);
    }

    #[test]
    fn smoketest_display() {
        assert_eq!(DynInt::U8(7).to_string(), "7u8");
        assert_eq!(DynInt::Isize(-3).to_string(), "-3isize");
        assert_eq!(DynInt::from(1000u64).to_string(), "1000u64");
    }

    #[test]
    fn smoketest_type_name() {
        assert_eq!(DynInt::U32(0).type_name(), "u32");
        assert_eq!(<i16 as Primitive>::NAME, "i16");
    }
}
