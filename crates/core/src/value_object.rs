//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; two with
/// the same values are the same thing. A pricing breakdown or a client contact
/// block is a value object, a persisted document (which has an id) is not.
///
/// To "modify" a value object, build a new one. That keeps them freely
/// shareable across render passes and recomputations.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
