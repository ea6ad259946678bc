//! Conversion of plain Rust values into `Value` trees.
//!
//! Rust has no runtime reflection, so shape matchers ask values to describe
//! themselves. `Inspect` is that capability: standard library types are
//! covered here, and records opt in with a hand-written impl or the
//! [`inspect_struct!`](crate::inspect_struct) macro.
//!
//! Owning smart pointers (`Box`, `Rc`, `Arc`) and `Option` inspect as
//! `Value::Pointer`, with `None` as the nil reference. Shared references
//! are transparent, as are owners of `str` and slices: `Arc<str>` inspects
//! as a string and `Box<[T]>` as a list.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use crate::value::{MapValue, Value};

/// A value that can describe its structural shape.
pub trait Inspect {
    /// Produce the `Value` tree for `self`.
    fn to_value(&self) -> Value;
}

impl Inspect for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl Inspect for () {
    fn to_value(&self) -> Value {
        Value::Unit
    }
}

impl Inspect for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Inspect for char {
    fn to_value(&self) -> Value {
        Value::Char(*self)
    }
}

/// Implements `Inspect` for integer types that widen losslessly.
macro_rules! impl_inspect_int {
    ($variant:ident => $($ty:ty),+ $(,)?) => { $(
        impl Inspect for $ty {
            fn to_value(&self) -> Value {
                Value::$variant((*self).into())
            }
        }
    )+ };
}

impl_inspect_int!(Int => i8, i16, i32, i64);
impl_inspect_int!(UInt => u8, u16, u32, u64);

impl Inspect for isize {
    fn to_value(&self) -> Value {
        // isize is at most 64 bits on every supported target.
        Value::Int(i64::try_from(*self).unwrap_or(i64::MAX))
    }
}

impl Inspect for usize {
    fn to_value(&self) -> Value {
        Value::UInt(u64::try_from(*self).unwrap_or(u64::MAX))
    }
}

impl Inspect for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl Inspect for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl Inspect for str {
    fn to_value(&self) -> Value {
        Value::string(self)
    }
}

impl Inspect for String {
    fn to_value(&self) -> Value {
        Value::string(self.as_str())
    }
}

impl<T: Inspect> Inspect for [T] {
    fn to_value(&self) -> Value {
        Value::list(self.iter().map(Inspect::to_value).collect())
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

/// Implements `Inspect` for tuples as `Value::Tuple`.
macro_rules! impl_inspect_tuple {
    ($(($($name:ident),+)),+ $(,)?) => { $(
        impl<$($name: Inspect),+> Inspect for ($($name,)+) {
            #[allow(non_snake_case)]
            fn to_value(&self) -> Value {
                let ($($name,)+) = self;
                Value::tuple(vec![$($name.to_value()),+])
            }
        }
    )+ };
}

impl_inspect_tuple!((A, B), (A, B, C), (A, B, C, D));

impl<K: Inspect, V: Inspect, S: BuildHasher> Inspect for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        let mut map = MapValue::with_capacity(self.len());
        for (k, v) in self {
            map.insert(k.to_value(), v.to_value());
        }
        Value::map(map)
    }
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::map_from(self.iter().map(|(k, v)| (k.to_value(), v.to_value())))
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(target) => Value::pointer(target.to_value()),
            None => Value::nil(),
        }
    }
}

/// Implements `Inspect` for owning smart pointers.
///
/// A sized payload sits behind one level of indirection. `str` and slice
/// payloads are the string or sequence itself, the same as `String`/`Vec`.
macro_rules! impl_inspect_owner {
    ($($owner:ident),+ $(,)?) => { $(
        impl<T: Inspect> Inspect for $owner<T> {
            fn to_value(&self) -> Value {
                Value::pointer((**self).to_value())
            }
        }

        impl Inspect for $owner<str> {
            fn to_value(&self) -> Value {
                Value::string(&**self)
            }
        }

        impl<T: Inspect> Inspect for $owner<[T]> {
            fn to_value(&self) -> Value {
                (**self).to_value()
            }
        }
    )+ };
}

impl_inspect_owner!(Box, Rc, Arc);

#[cfg(test)]
mod tests;
