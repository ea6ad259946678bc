use super::*;

#[test]
fn test_factory_methods() {
    let s = Value::string("hello");
    assert_eq!(s.as_str(), Some("hello"));

    let list = Value::list(vec![Value::Int(1), Value::Int(2)]);
    assert_eq!(list.as_list().map(<[Value]>::len), Some(2));

    let map = Value::map_from([(Value::string("a"), Value::Int(1))]);
    assert_eq!(map.as_map().map(MapValue::len), Some(1));

    let ptr = Value::pointer(Value::Int(42));
    assert_eq!(ptr.deref_pointer(), Some(&Value::Int(42)));
    assert!(!ptr.is_nil());
    assert!(Value::nil().is_nil());
}

#[test]
fn test_deref_pointer_on_non_pointers() {
    assert_eq!(Value::nil().deref_pointer(), None);
    assert_eq!(Value::Int(1).deref_pointer(), None);
}

#[test]
fn test_deref_removes_exactly_one_level() {
    let inner = Value::pointer(Value::Int(7));
    let outer = Value::pointer(inner.clone());
    assert_eq!(outer.deref_pointer(), Some(&inner));
}

#[test]
fn test_equality_is_variant_strict() {
    assert_eq!(Value::Int(1), Value::Int(1));
    assert_ne!(Value::Int(1), Value::UInt(1));
    assert_ne!(Value::Int(1), Value::Float(1.0));
    assert_ne!(
        Value::list(vec![Value::Int(1)]),
        Value::tuple(vec![Value::Int(1)])
    );
    assert_eq!(Value::nil(), Value::nil());
    assert_ne!(Value::nil(), Value::pointer(Value::Unit));
}

#[test]
fn test_accessors_reject_other_kinds() {
    let v = Value::Bool(true);
    assert_eq!(v.as_bool(), Some(true));
    assert_eq!(v.as_int(), None);
    assert_eq!(v.as_uint(), None);
    assert_eq!(v.as_float(), None);
    assert_eq!(v.as_str(), None);
    assert!(v.as_map().is_none());
    assert!(v.as_struct().is_none());
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Unit.type_name(), "unit");
    assert_eq!(Value::Int(0).type_name(), "int");
    assert_eq!(Value::UInt(0).type_name(), "uint");
    assert_eq!(Value::map(MapValue::new()).type_name(), "map");
    assert_eq!(
        Value::from(StructValue::builder("S").build()).type_name(),
        "struct"
    );
    assert_eq!(Value::nil().type_name(), "pointer");
}

#[test]
fn test_display() {
    assert_eq!(Value::Int(42).to_string(), "42");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::string("hi").to_string(), "\"hi\"");
    assert_eq!(Value::Char('x').to_string(), "'x'");
    assert_eq!(Value::Unit.to_string(), "()");
    assert_eq!(
        Value::list(vec![Value::Int(1), Value::Int(2)]).to_string(),
        "[1, 2]"
    );
    assert_eq!(
        Value::tuple(vec![Value::Int(1), Value::string("a")]).to_string(),
        "(1, \"a\")"
    );
    assert_eq!(Value::pointer(Value::Int(1)).to_string(), "&1");
    assert_eq!(Value::nil().to_string(), "nil");
}

#[test]
fn test_values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
}

fn hash_of(value: &Value) -> u64 {
    use std::hash::{DefaultHasher, Hash, Hasher};
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_hash_agrees_with_equality() {
    let forward = Value::map_from([
        (Value::string("a"), Value::Int(1)),
        (Value::string("b"), Value::pointer(Value::Int(2))),
    ]);
    let backward = Value::map_from([
        (Value::string("b"), Value::pointer(Value::Int(2))),
        (Value::string("a"), Value::Int(1)),
    ]);
    assert_eq!(forward, backward);
    assert_eq!(hash_of(&forward), hash_of(&backward));

    let record = |n| Value::from(StructValue::builder("S").public("n", Value::Int(n)).build());
    assert_eq!(hash_of(&record(1)), hash_of(&record(1)));

    assert_eq!(Value::Float(0.0), Value::Float(-0.0));
    assert_eq!(hash_of(&Value::Float(0.0)), hash_of(&Value::Float(-0.0)));
}

#[test]
fn test_hash_separates_kinds() {
    assert_ne!(hash_of(&Value::Int(1)), hash_of(&Value::UInt(1)));
    assert_ne!(
        hash_of(&Value::list(vec![Value::Int(1)])),
        hash_of(&Value::tuple(vec![Value::Int(1)]))
    );
}
