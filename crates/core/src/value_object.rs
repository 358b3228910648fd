//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two with the
/// same attributes are interchangeable. `Price { cents: 129_99 }` is a value
/// object; an inventory record with an id is not. To "modify" one, build a
/// new value instead.
///
/// The bounds keep value objects cheap to copy around, comparable, and
/// debuggable:
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Price(u64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(12999), Price(12999)); // equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
