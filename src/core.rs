//! Core traits and types for record sorting.
//!
//! This module defines:
//! - [`FieldAccessible`]: The trait a record implements so it can be sorted by named keys.
//! - [`AsFieldValue`]: Conversion of a stored value into a comparable [`FieldValue`].
//! - [`SortKey`] and [`Order`]: One entry of a multi-key sort order.

use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A borrowed, comparable view of one record field.
///
/// Values of the same kind always compare. Numbers compare numerically across
/// [`FieldValue::Int`], [`FieldValue::UInt`] and [`FieldValue::Float`]. Any other
/// pairing of kinds, and every [`FieldValue::Opaque`] value, is not comparable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(&'a str),
    /// A value without an ordering, tagged with a human-readable kind.
    Opaque(&'static str),
}

impl FieldValue<'_> {
    /// Name of the value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "bool",
            FieldValue::Int(_) => "integer",
            FieldValue::UInt(_) => "unsigned integer",
            FieldValue::Float(_) => "float",
            FieldValue::Text(_) => "text",
            FieldValue::Opaque(kind) => *kind,
        }
    }

    /// Compares two values, returning `None` when their kinds cannot be ordered.
    ///
    /// ```
    /// use arrayhelpers::core::FieldValue;
    /// use std::cmp::Ordering;
    ///
    /// assert_eq!(FieldValue::Int(2).try_cmp(&FieldValue::Float(2.5)), Some(Ordering::Less));
    /// assert_eq!(FieldValue::Text("b").try_cmp(&FieldValue::Text("a")), Some(Ordering::Greater));
    /// assert_eq!(FieldValue::Int(1).try_cmp(&FieldValue::Text("1")), None);
    /// ```
    pub fn try_cmp(&self, other: &FieldValue<'_>) -> Option<Ordering> {
        use FieldValue::*;

        let ordering = match (*self, *other) {
            (Null, Null) => Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(&b),
            (Text(a), Text(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(&b),
            (UInt(a), UInt(b)) => a.cmp(&b),
            (Int(a), UInt(b)) => i128::from(a).cmp(&i128::from(b)),
            (UInt(a), Int(b)) => i128::from(a).cmp(&i128::from(b)),
            // Signed zeros are equal, matching how integer zero compares to both.
            (Float(a), Float(b)) if a == b => Ordering::Equal,
            (Float(a), Float(b)) => a.total_cmp(&b),
            (Int(a), Float(b)) => cmp_integer_float(i128::from(a), b),
            (UInt(a), Float(b)) => cmp_integer_float(i128::from(a), b),
            (Float(a), Int(b)) => cmp_integer_float(i128::from(b), a).reverse(),
            (Float(a), UInt(b)) => cmp_integer_float(i128::from(b), a).reverse(),
            _ => return None,
        };
        Some(ordering)
    }
}

// Exact integer/float comparison. The float comparison settles everything
// except values that round to the same f64, which are then compared as integers.
fn cmp_integer_float(int: i128, float: f64) -> Ordering {
    match (int as f64).total_cmp(&float) {
        Ordering::Equal => int.cmp(&(float as i128)),
        // -0.0 sorts below +0.0 under total_cmp but equals integer zero.
        _ if float == 0.0 && int == 0 => Ordering::Equal,
        other => other,
    }
}

/// Conversion from a stored value into a comparable [`FieldValue`].
pub trait AsFieldValue {
    fn as_field_value(&self) -> FieldValue<'_>;
}

macro_rules! impl_as_field_value {
    ($variant:ident as $target:ty => $($ty:ty),+) => {
        $(
            impl AsFieldValue for $ty {
                #[inline]
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::$variant(*self as $target)
                }
            }
        )+
    };
}

impl_as_field_value!(Int as i64 => i8, i16, i32, i64, isize);
impl_as_field_value!(UInt as u64 => u8, u16, u32, u64, usize);
impl_as_field_value!(Float as f64 => f32, f64);

impl AsFieldValue for bool {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl AsFieldValue for str {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_str())
    }
}

impl<V: AsFieldValue + ?Sized> AsFieldValue for &V {
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

impl<V: AsFieldValue> AsFieldValue for Option<V> {
    fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            Some(value) => value.as_field_value(),
            None => FieldValue::Null,
        }
    }
}

impl AsFieldValue for Value {
    fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    FieldValue::UInt(u)
                } else {
                    // Without arbitrary_precision every JSON number fits one of the three.
                    FieldValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => FieldValue::Text(s.as_str()),
            Value::Array(_) => FieldValue::Opaque("array"),
            Value::Object(_) => FieldValue::Opaque("object"),
        }
    }
}

/// A trait for reading named fields from a record without copying.
///
/// Mapping-like records (`HashMap`, `BTreeMap`, JSON objects) are supported out
/// of the box. Struct-like records can use the [`field_accessible!`](crate::field_accessible)
/// macro or implement the trait by hand.
///
/// # Examples
///
/// ```
/// use arrayhelpers::core::{FieldAccessible, FieldValue};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl FieldAccessible for Point {
///     fn field(&self, key: &str) -> Option<FieldValue<'_>> {
///         match key {
///             "x" => Some(FieldValue::Int(self.x.into())),
///             "y" => Some(FieldValue::Int(self.y.into())),
///             _ => None,
///         }
///     }
/// }
///
/// let p = Point { x: 3, y: 4 };
/// assert_eq!(p.field("y"), Some(FieldValue::Int(4)));
/// assert_eq!(p.field("z"), None);
/// ```
pub trait FieldAccessible {
    /// Returns the value stored under `key`, or `None` if the record has no such field.
    fn field(&self, key: &str) -> Option<FieldValue<'_>>;
}

impl<V: AsFieldValue, S: BuildHasher> FieldAccessible for HashMap<String, V, S> {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        self.get(key).map(AsFieldValue::as_field_value)
    }
}

impl<V: AsFieldValue> FieldAccessible for BTreeMap<String, V> {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        self.get(key).map(AsFieldValue::as_field_value)
    }
}

impl FieldAccessible for Map<String, Value> {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        self.get(key).map(AsFieldValue::as_field_value)
    }
}

// Only objects have named fields; any other JSON value misses every key.
impl FieldAccessible for Value {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        self.as_object().and_then(|object| object.field(key))
    }
}

impl<R: FieldAccessible + ?Sized> FieldAccessible for &R {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        (**self).field(key)
    }
}

impl<R: FieldAccessible + ?Sized> FieldAccessible for Box<R> {
    fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        (**self).field(key)
    }
}

/// Implements [`FieldAccessible`] for a struct by listing the fields that can be sorted on.
///
/// Every listed field must implement [`AsFieldValue`]. The key for a field is
/// its identifier.
///
/// ```
/// use arrayhelpers::field_accessible;
/// use arrayhelpers::core::{FieldAccessible, FieldValue};
///
/// struct Item {
///     prop1: i32,
///     label: String,
/// }
///
/// field_accessible!(Item { prop1, label });
///
/// let item = Item { prop1: 17, label: "x".into() };
/// assert_eq!(item.field("prop1"), Some(FieldValue::Int(17)));
/// assert_eq!(item.field("label"), Some(FieldValue::Text("x")));
/// ```
#[macro_export]
macro_rules! field_accessible {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::core::FieldAccessible for $ty {
            fn field(&self, key: &str) -> ::core::option::Option<$crate::core::FieldValue<'_>> {
                match key {
                    $(
                        ::core::stringify!($field) => ::core::option::Option::Some(
                            $crate::core::AsFieldValue::as_field_value(&self.$field),
                        ),
                    )+
                    _ => ::core::option::Option::None,
                }
            }
        }
    };
}

/// Direction of one sort key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    /// Applies the direction to an ascending comparison result.
    #[inline(always)]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Order::Ascending => ordering,
            Order::Descending => ordering.reverse(),
        }
    }
}

/// `true` is ascending, `false` is descending.
impl From<bool> for Order {
    fn from(ascending: bool) -> Self {
        if ascending {
            Order::Ascending
        } else {
            Order::Descending
        }
    }
}

/// One entry of a multi-key sort order.
///
/// Keys are applied in slice order: a later key only breaks ties left by every
/// earlier one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SortKey {
    pub name: String,
    pub order: Order,
}

impl SortKey {
    pub fn new(name: impl Into<String>, order: Order) -> Self {
        Self {
            name: name.into(),
            order,
        }
    }

    pub fn asc(name: impl Into<String>) -> Self {
        Self::new(name, Order::Ascending)
    }

    pub fn desc(name: impl Into<String>) -> Self {
        Self::new(name, Order::Descending)
    }
}

impl From<&str> for SortKey {
    fn from(name: &str) -> Self {
        SortKey::asc(name)
    }
}

impl From<String> for SortKey {
    fn from(name: String) -> Self {
        SortKey::asc(name)
    }
}

/// `(name, ascending)` pairs, as in `[("prop1", true), ("prop2", false)]`.
impl<S: Into<String>> From<(S, bool)> for SortKey {
    fn from((name, ascending): (S, bool)) -> Self {
        SortKey::new(name, Order::from(ascending))
    }
}
