//! Shape Value - runtime value model for shape matchers.
//!
//! This crate provides:
//! - Runtime value types (`Value`, `Heap`, `MapValue`, `StructValue`)
//! - Field visibility (`Visibility`) so encapsulated fields can be skipped
//! - The `Inspect` capability that turns plain Rust values into `Value` trees
//! - The `inspect_struct!` macro for records
//!
//! # Value Types
//!
//! - All heap allocations go through `Value::` factory methods
//! - `Heap<T>` wrapper enforces this invariant
//! - Thread-safe reference counting via `Arc`

mod inspect;
mod value;

pub use inspect::Inspect;
pub use value::{
    Heap, MapValue, StructBuilder, StructLayout, StructValue, Value, Visibility,
};

/// Implement [`Inspect`] for a struct by listing its fields.
///
/// Each field is written with its declared visibility; a bare `pub` field is
/// accessible, anything else is private. The struct's name becomes the
/// record's type name.
///
/// ```
/// use shape_value::{inspect_struct, Inspect, Visibility};
///
/// struct User {
///     pub name: String,
///     token: String,
/// }
///
/// inspect_struct!(User { pub name, token });
///
/// let user = User { name: "aereal".into(), token: "t".into() };
/// let value = user.to_value();
/// let record = value.as_struct().unwrap();
/// assert_eq!(record.type_name(), "User");
/// assert_eq!(record.visibility_of("token"), Some(Visibility::Private));
/// ```
#[macro_export]
macro_rules! inspect_struct {
    ($ty:ident { $($vis:vis $field:ident),* $(,)? }) => {
        impl $crate::Inspect for $ty {
            fn to_value(&self) -> $crate::Value {
                $crate::Value::Struct(
                    $crate::StructValue::builder(stringify!($ty))
                        $(.field(
                            stringify!($field),
                            $crate::Visibility::from_declared(stringify!($vis)),
                            $crate::Inspect::to_value(&self.$field),
                        ))*
                        .build(),
                )
            }
        }
    };
}
