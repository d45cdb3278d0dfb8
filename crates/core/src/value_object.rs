//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are never mutated in place. To "change"
/// one, build a new value (e.g. `FilterSelection::with_size` returns a fresh
/// selection and leaves the receiver untouched).
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Price(&'static str);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price("3 200 ₽"), Price("3 200 ₽"));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
