//! FieldPatch - One field of a partial update

use serde::{Deserialize, Deserializer};

/// A single field of a partial update.
///
/// `Unset` means the caller did not mention the field; `Set` carries the new
/// value. For optional fields `T` is itself an `Option`, so `Set(None)` clears
/// the field while `Unset` leaves it alone.
///
/// When deserializing, pair the field with `#[serde(default)]`: a missing key
/// falls back to `Unset`, any present key (including `null`) becomes `Set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPatch<T> {
    Unset,
    Set(T),
}

impl<T> FieldPatch<T> {
    /// Overwrite `target` if this field was set
    pub fn apply_to(self, target: &mut T) {
        if let FieldPatch::Set(value) = self {
            *target = value;
        }
    }
}

impl<T> Default for FieldPatch<T> {
    fn default() -> Self {
        FieldPatch::Unset
    }
}

impl<'de, T> Deserialize<'de> for FieldPatch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(FieldPatch::Set)
    }
}
