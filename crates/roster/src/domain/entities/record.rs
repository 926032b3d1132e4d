//! Record - Identity and merge contract for stored entities

/// Identity of a record within its repository
pub type RecordId = i64;

/// A stored entity with a repository-assigned integer identity.
///
/// `Draft` carries the fields a caller supplies on create; `Patch` carries the
/// subset of fields a caller wants to change on update. The `id` is never part
/// of either, so it cannot change after creation.
pub trait Record: Clone + Send + Sync + 'static {
    type Draft: Send + 'static;
    type Patch: Send + 'static;

    /// Human-readable kind, used in errors and logs
    const KIND: &'static str;

    fn id(&self) -> RecordId;

    /// Build a record from caller fields and an assigned id
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    /// Merge the fields set in `patch` into this record
    fn apply_patch(&mut self, patch: Self::Patch);
}
