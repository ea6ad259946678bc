//! Record values: a type name plus named fields with visibility.

use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::heap::Heap;
use super::Value;

/// Whether a field can be observed from outside its defining type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Field is accessible (`pub`).
    Public,
    /// Field is encapsulated; lookups by name do not see it.
    Private,
}

impl Visibility {
    /// Map a declared Rust visibility token to a field visibility.
    ///
    /// Only a bare `pub` counts as accessible; restricted forms such as
    /// `pub(crate)` and the empty (inherited) visibility are private.
    pub fn from_declared(declared: &str) -> Self {
        if declared.trim() == "pub" {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }

    /// Accessibility predicate used when deriving constraints.
    #[inline]
    pub fn is_accessible(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

// StructLayout

/// Field names, visibilities and an index for O(1) field lookup.
#[derive(Clone, Debug)]
pub struct StructLayout {
    /// Map from field name to index.
    field_indices: FxHashMap<String, usize>,
    /// Field names in declaration order.
    names: Vec<String>,
    /// Visibility of each field, parallel to `names`.
    visibility: Vec<Visibility>,
}

impl StructLayout {
    fn new(fields: Vec<(String, Visibility)>) -> Self {
        let mut field_indices = FxHashMap::default();
        let mut names = Vec::with_capacity(fields.len());
        let mut visibility = Vec::with_capacity(fields.len());
        for (i, (name, vis)) in fields.into_iter().enumerate() {
            field_indices.insert(name.clone(), i);
            names.push(name);
            visibility.push(vis);
        }
        StructLayout {
            field_indices,
            names,
            visibility,
        }
    }

    /// Get the index of a field by name, regardless of visibility.
    pub fn get_index(&self, field: &str) -> Option<usize> {
        self.field_indices.get(field).copied()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the layout has no fields.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over field names and visibilities in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Visibility)> + '_ {
        self.names
            .iter()
            .zip(self.visibility.iter())
            .map(|(n, &v)| (n.as_str(), v))
    }
}

// StructValue

/// Struct instance with a type name and fields in declaration order.
#[derive(Clone)]
pub struct StructValue {
    type_name: Heap<String>,
    fields: Heap<Vec<Value>>,
    layout: Heap<StructLayout>,
}

impl StructValue {
    /// Start building a struct value of the given type.
    pub fn builder(type_name: impl Into<String>) -> StructBuilder {
        StructBuilder {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Name of the struct's type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Layout shared by this instance.
    pub fn layout(&self) -> &StructLayout {
        &self.layout
    }

    /// Total number of fields, accessible or not.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the struct has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get an accessible field by name.
    ///
    /// Private fields are reported as absent.
    pub fn get_field(&self, field: &str) -> Option<&Value> {
        let index = self.layout.get_index(field)?;
        if !self.layout.visibility.get(index)?.is_accessible() {
            return None;
        }
        self.fields.get(index)
    }

    /// Visibility of a declared field, or `None` if no such field exists.
    pub fn visibility_of(&self, field: &str) -> Option<Visibility> {
        let index = self.layout.get_index(field)?;
        self.layout.visibility.get(index).copied()
    }

    /// Iterate over every field as `(name, visibility, value)`.
    pub fn fields(&self) -> impl Iterator<Item = (&str, Visibility, &Value)> + '_ {
        self.layout
            .iter()
            .zip(self.fields.iter())
            .map(|((name, vis), value)| (name, vis, value))
    }

    /// Iterate over accessible fields only.
    pub fn public_fields(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.fields()
            .filter(|(_, vis, _)| vis.is_accessible())
            .map(|(name, _, value)| (name, value))
    }
}

impl PartialEq for StructValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
            && self.len() == other.len()
            && self
                .fields()
                .zip(other.fields())
                .all(|((an, _, av), (bn, _, bv))| an == bn && av == bv)
    }
}

impl Eq for StructValue {}

impl Hash for StructValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_name().hash(state);
        for (name, _, value) in self.fields() {
            name.hash(state);
            value.hash(state);
        }
    }
}

impl fmt::Debug for StructValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(self.type_name());
        for (name, _, value) in self.fields() {
            s.field(name, value);
        }
        s.finish()
    }
}

impl fmt::Display for StructValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{} {{}}", self.type_name());
        }
        write!(f, "{} {{ ", self.type_name())?;
        for (i, (name, _, value)) in self.fields().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, " }}")
    }
}

// StructBuilder

/// Builder for `StructValue`.
///
/// Declaring a field name twice replaces the earlier declaration in place.
#[derive(Clone, Debug)]
pub struct StructBuilder {
    type_name: String,
    fields: Vec<(String, Visibility, Value)>,
}

impl StructBuilder {
    /// Declare a field with an explicit visibility.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, visibility: Visibility, value: Value) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _, _)| *n == name) {
            Some(slot) => {
                slot.1 = visibility;
                slot.2 = value;
            }
            None => self.fields.push((name, visibility, value)),
        }
        self
    }

    /// Declare an accessible field.
    #[must_use]
    pub fn public(self, name: impl Into<String>, value: Value) -> Self {
        self.field(name, Visibility::Public, value)
    }

    /// Declare an encapsulated field.
    #[must_use]
    pub fn private(self, name: impl Into<String>, value: Value) -> Self {
        self.field(name, Visibility::Private, value)
    }

    /// Finish the struct value.
    pub fn build(self) -> StructValue {
        let mut layout = Vec::with_capacity(self.fields.len());
        let mut values = Vec::with_capacity(self.fields.len());
        for (name, vis, value) in self.fields {
            layout.push((name, vis));
            values.push(value);
        }
        StructValue {
            type_name: Heap::new(self.type_name),
            fields: Heap::new(values),
            layout: Heap::new(StructLayout::new(layout)),
        }
    }
}
