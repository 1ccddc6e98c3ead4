use arrayhelpers::core::{AsFieldValue, FieldAccessible, FieldValue};
use arrayhelpers::cross_reference::KeyedCollection;
use arrayhelpers::field_accessible;
use arrayhelpers::prelude::*;

// Plain struct records, sorted through the macro-generated adapter.
#[derive(Debug, Clone, PartialEq)]
struct TestItem {
    prop1: i32,
    prop2: u64,
    prop3: f32,
    label: Option<String>,
}

field_accessible!(TestItem {
    prop1,
    prop2,
    prop3,
    label,
});

impl TestItem {
    fn new(prop1: i32, prop2: u64, prop3: f32) -> Self {
        Self {
            prop1,
            prop2,
            prop3,
            label: None,
        }
    }
}

#[test]
fn test_struct_records() {
    let mut items = vec![
        TestItem::new(1, 2, 10.0),
        TestItem::new(17, 1, 11.0),
        TestItem::new(1, 900, 12.0),
        TestItem::new(17, 600, 11.0),
        TestItem::new(18, 1, 11.0),
    ];

    multisort_mut(&mut items, &[("prop1", true).into(), ("prop2", false).into()]).unwrap();

    let order: Vec<(i32, u64)> = items.iter().map(|i| (i.prop1, i.prop2)).collect();
    assert_eq!(order, vec![(1, 900), (1, 2), (17, 600), (17, 1), (18, 1)]);
}

#[test]
fn test_struct_unknown_field() {
    let items = vec![TestItem::new(1, 2, 3.0), TestItem::new(4, 5, 6.0)];
    let err = multisort(&items, &[SortKey::asc("prop4")]).unwrap_err();
    assert_eq!(
        err,
        ArrayError::MissingKey {
            key: "prop4".to_string(),
            record: 0,
        }
    );
}

#[test]
fn test_struct_optional_field() {
    let mut labelled = TestItem::new(0, 0, 0.0);
    labelled.label = Some("x".to_string());

    assert_eq!(labelled.field("label"), Some(FieldValue::Text("x")));
    assert_eq!(TestItem::new(0, 0, 0.0).field("label"), Some(FieldValue::Null));
    assert_eq!(labelled.field("prop3"), Some(FieldValue::Float(0.0)));
}

// A record type that computes one of its fields.
struct Rectangle {
    width: u32,
    height: u32,
}

impl FieldAccessible for Rectangle {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        match key {
            "width" => Some(self.width.as_field_value()),
            "height" => Some(self.height.as_field_value()),
            "area" => Some(FieldValue::UInt(u64::from(self.width) * u64::from(self.height))),
            _ => None,
        }
    }
}

#[test]
fn test_external_record_type() {
    let shapes = vec![
        Rectangle { width: 4, height: 4 },
        Rectangle { width: 2, height: 9 },
        Rectangle { width: 10, height: 1 },
    ];

    let indices = multisort(&shapes, &[SortKey::desc("area"), SortKey::asc("width")]).unwrap();

    // areas: 16, 18, 10
    assert_eq!(indices, vec![1, 0, 2]);
}

// A keyed collection from "another crate": sparse slots addressed by id.
struct SparseSlots {
    ids: Vec<u32>,
}

impl KeyedCollection for SparseSlots {
    type Key = u32;

    fn has_key(&self, key: &u32) -> bool {
        self.ids.contains(key)
    }

    fn key_iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }
}

#[test]
fn test_external_keyed_collection() {
    let slots = SparseSlots {
        ids: vec![5, 1, 9],
    };
    let result = cross_reference(&[1, 2, 5], &slots);

    assert_eq!(result.missing, vec![2]);
    assert_eq!(result.extra, vec![9]);
}
