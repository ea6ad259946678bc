use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::*;
use crate::{inspect_struct, StructValue, Visibility};

#[derive(Default)]
struct Account {
    pub name: String,
    pub tags: Vec<String>,
    pub(crate) region: u32,
    secret: Option<i64>,
}

inspect_struct!(Account {
    pub name,
    pub tags,
    pub(crate) region,
    secret,
});

#[derive(Default)]
struct Empty {}

inspect_struct!(Empty {});

#[test]
fn test_scalars() {
    assert_eq!(().to_value(), Value::Unit);
    assert_eq!(true.to_value(), Value::Bool(true));
    assert_eq!('c'.to_value(), Value::Char('c'));
    assert_eq!((-3i8).to_value(), Value::Int(-3));
    assert_eq!(7i32.to_value(), Value::Int(7));
    assert_eq!(7u16.to_value(), Value::UInt(7));
    assert_eq!(7usize.to_value(), Value::UInt(7));
    assert_eq!((-7isize).to_value(), Value::Int(-7));
    assert_eq!(1.5f32.to_value(), Value::Float(1.5));
    assert_eq!("hi".to_value(), Value::string("hi"));
    assert_eq!(String::from("hi").to_value(), Value::string("hi"));
}

#[test]
fn test_sequences_and_tuples() {
    let expected = Value::list(vec![Value::Int(1), Value::Int(2)]);
    assert_eq!(vec![1, 2].to_value(), expected);
    assert_eq!([1, 2].to_value(), expected);
    assert_eq!(
        (1, "a").to_value(),
        Value::tuple(vec![Value::Int(1), Value::string("a")])
    );
}

#[test]
fn test_maps() {
    let mut hashed = HashMap::new();
    hashed.insert("a", 1);
    hashed.insert("b", 2);
    let ordered: BTreeMap<_, _> = hashed.clone().into_iter().collect();

    let from_hash = hashed.to_value();
    let from_tree = ordered.to_value();
    assert_eq!(from_hash, from_tree);

    let map = from_hash.as_map().map(MapValue::len);
    assert_eq!(map, Some(2));
}

#[test]
fn test_owning_pointers_and_options() {
    assert_eq!(Box::new(1).to_value(), Value::pointer(Value::Int(1)));
    assert_eq!(Rc::new(1).to_value(), Value::pointer(Value::Int(1)));
    assert_eq!(Arc::new(1).to_value(), Value::pointer(Value::Int(1)));
    assert_eq!(Some(1).to_value(), Value::pointer(Value::Int(1)));
    assert_eq!(None::<i32>.to_value(), Value::nil());
}

#[test]
fn test_references_are_transparent() {
    let n = 5u8;
    let r = &n;
    assert_eq!(r.to_value(), Value::UInt(5));
    assert_eq!((&r).to_value(), Value::UInt(5));
}

#[test]
fn test_inspect_struct_records_visibility() {
    let account = Account {
        name: "aereal".into(),
        tags: vec!["x".into()],
        region: 3,
        secret: Some(9),
    };
    let value = account.to_value();
    let Some(record) = value.as_struct() else {
        panic!("expected struct, got {}", value.type_name());
    };

    assert_eq!(record.type_name(), "Account");
    assert_eq!(record.len(), 4);
    let fields: Vec<_> = record.fields().map(|(n, v, _)| (n, v)).collect();
    assert_eq!(
        fields,
        vec![
            ("name", Visibility::Public),
            ("tags", Visibility::Public),
            ("region", Visibility::Private),
            ("secret", Visibility::Private),
        ]
    );
    assert_eq!(record.get_field("name"), Some(&Value::string("aereal")));
    assert_eq!(record.get_field("secret"), None);
    assert_eq!(account.secret, Some(9));
    assert_eq!(account.region, 3);
}

#[test]
fn test_inspect_struct_without_fields() {
    let value = Empty::default().to_value();
    assert_eq!(value.as_struct().map(StructValue::len), Some(0));
}

#[test]
fn test_owned_str_and_slices_are_their_payload() {
    assert_eq!(Box::<str>::from("x").to_value(), Value::string("x"));
    assert_eq!(Rc::<str>::from("x").to_value(), Value::string("x"));
    assert_eq!(Arc::<str>::from("x").to_value(), Value::string("x"));

    let expected = Value::list(vec![Value::Int(1), Value::Int(2)]);
    assert_eq!(Box::<[i32]>::from(vec![1, 2]).to_value(), expected);
    assert_eq!(Arc::<[i32]>::from(vec![1, 2]).to_value(), expected);

    let keyed: HashMap<Arc<str>, i32> = HashMap::from([(Arc::from("a"), 1)]);
    let value = keyed.to_value();
    let found = value.as_map().and_then(|map| map.get(&Value::string("a")));
    assert_eq!(found, Some(&Value::Int(1)));
}
