//! Runtime values inspected by shape matchers.
//!
//! # Heap Enforcement
//!
//! Heap payloads live behind `Heap<T>`, whose constructor is private to this
//! module. External code builds values through the `Value::` factory
//! methods:
//!
//! ```text
//! let s = Value::string("hello");           // OK
//! let p = Value::pointer(Value::Int(1));    // OK
//! let s = Value::Str(Heap::new(...));       // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Thread Safety
//!
//! `Heap` is `Arc`-backed, so values are `Send + Sync` and cheap to clone.

mod heap;
mod map;
mod structs;

use std::fmt;
use std::hash::{Hash, Hasher};

pub use heap::Heap;
pub use map::MapValue;
pub use structs::{StructBuilder, StructLayout, StructValue, Visibility};

/// Structural shape of a runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    // Primitives (inline, no heap allocation)
    /// Unit value `()`.
    Unit,
    /// Boolean value.
    Bool(bool),
    /// Signed integer of any width.
    Int(i64),
    /// Unsigned integer of any width.
    UInt(u64),
    /// Floating-point value.
    Float(f64),
    /// Character value.
    Char(char),

    // Heap Types
    /// String value.
    Str(Heap<String>),
    /// Sequence of values (slices, vectors, arrays).
    List(Heap<Vec<Value>>),
    /// Tuple of values.
    Tuple(Heap<Vec<Value>>),
    /// Associative container.
    Map(Heap<MapValue>),

    // Records and indirection
    /// Record with named fields.
    Struct(StructValue),
    /// One level of indirection; `None` is a nil reference.
    Pointer(Option<Heap<Value>>),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a tuple value.
    #[inline]
    pub fn tuple(items: Vec<Value>) -> Self {
        Value::Tuple(Heap::new(items))
    }

    /// Create a map value.
    ///
    /// # Example
    ///
    /// ```text
    /// let empty = Value::map(MapValue::new());
    /// ```
    #[inline]
    pub fn map(entries: MapValue) -> Self {
        Value::Map(Heap::new(entries))
    }

    /// Create a map value from key/value pairs.
    ///
    /// Later duplicates overwrite earlier ones.
    pub fn map_from<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Value, Value)>,
    {
        Value::map(entries.into_iter().collect())
    }

    /// Create a non-nil pointer to `target`.
    #[inline]
    pub fn pointer(target: Value) -> Self {
        Value::Pointer(Some(Heap::new(target)))
    }

    /// Create a nil pointer.
    #[inline]
    pub fn nil() -> Self {
        Value::Pointer(None)
    }
}

// Accessors

impl Value {
    /// Get as a signed integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as an unsigned integer.
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Value::UInt(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get as a list slice.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Get as an associative container.
    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            Value::Map(map) => Some(&**map),
            _ => None,
        }
    }

    /// Get as a record.
    pub fn as_struct(&self) -> Option<&StructValue> {
        match self {
            Value::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Follow one level of indirection.
    ///
    /// Returns `None` for nil pointers and for values that are not pointers.
    pub fn deref_pointer(&self) -> Option<&Value> {
        match self {
            Value::Pointer(Some(target)) => Some(&**target),
            _ => None,
        }
    }

    /// Check if this is a nil pointer.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Pointer(None))
    }

    /// Short name of the value's kind, for descriptions and diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Map(_) => "map",
            Value::Struct(_) => "struct",
            Value::Pointer(_) => "pointer",
        }
    }
}

impl From<StructValue> for Value {
    fn from(value: StructValue) -> Self {
        Value::Struct(value)
    }
}

impl From<MapValue> for Value {
    fn from(value: MapValue) -> Self {
        Value::map(value)
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::UInt(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Char(c) => write!(f, "{c:?}"),
            Value::Str(s) => write!(f, "{:?}", s.as_str()),
            Value::List(items) => {
                write!(f, "[")?;
                write_seq(f, items)?;
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_seq(f, items)?;
                write!(f, ")")
            }
            Value::Map(map) => write!(f, "{}", &**map),
            Value::Struct(s) => write!(f, "{s}"),
            Value::Pointer(Some(target)) => write!(f, "&{}", &**target),
            Value::Pointer(None) => write!(f, "nil"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Struct(a), Value::Struct(b)) => a == b,
            (Value::Pointer(a), Value::Pointer(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Value::Unit => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(n) => n.hash(state),
            Value::UInt(n) => n.hash(state),
            // -0.0 == 0.0, so both hash as +0.0.
            Value::Float(f) => (if *f == 0.0 { 0.0f64 } else { *f }).to_bits().hash(state),
            Value::Char(c) => c.hash(state),
            Value::Str(s) => s.hash(state),
            Value::List(items) | Value::Tuple(items) => {
                for item in items.iter() {
                    item.hash(state);
                }
            }
            Value::Map(map) => map.hash(state),
            Value::Struct(s) => s.hash(state),
            Value::Pointer(target) => target.hash(state),
        }
    }
}

#[cfg(test)]
mod tests;
