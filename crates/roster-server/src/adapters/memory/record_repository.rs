//! In-memory implementation of RecordRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use roster::{DomainError, Record, RecordId, RecordRepository};

/// Process-local, non-persistent RecordRepository
///
/// Each instance owns its collection behind its own lock. Mutations hold the
/// write lock for the whole operation; reads share the read lock.
pub struct InMemoryRecordRepository<R: Record> {
    records: RwLock<Vec<R>>,
}

impl<R: Record> InMemoryRecordRepository<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl<R: Record> Default for InMemoryRecordRepository<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn position_of<R: Record>(records: &[R], id: RecordId) -> Result<usize, DomainError> {
    records
        .iter()
        .position(|record| record.id() == id)
        .ok_or_else(|| DomainError::not_found(R::KIND, id))
}

#[async_trait]
impl<R: Record> RecordRepository<R> for InMemoryRecordRepository<R> {
    async fn find_all(&self) -> Vec<R> {
        self.records.read().await.clone()
    }

    async fn find_by_id(&self, id: RecordId) -> Result<R, DomainError> {
        let records = self.records.read().await;
        let index = position_of(&records, id)?;
        Ok(records[index].clone())
    }

    async fn insert(&self, draft: R::Draft) -> R {
        let mut records = self.records.write().await;
        // Derived from the current size, so a delete followed by an insert can
        // hand out an id that is still in use.
        let id = records.len() as RecordId + 1;
        let record = R::from_draft(id, draft);
        records.push(record.clone());
        record
    }

    async fn update(&self, id: RecordId, patch: R::Patch) -> Result<R, DomainError> {
        let mut records = self.records.write().await;
        let index = position_of(&records, id)?;
        let record = &mut records[index];
        record.apply_patch(patch);
        Ok(record.clone())
    }

    async fn delete(&self, id: RecordId) -> Result<R, DomainError> {
        let mut records = self.records.write().await;
        let index = position_of(&records, id)?;
        Ok(records.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::{FieldPatch, Item, ItemPatch, NewItem, NewUser, User, UserPatch};

    fn items() -> InMemoryRecordRepository<Item> {
        InMemoryRecordRepository::new(Item::seed_data())
    }

    fn new_item(name: &str) -> NewItem {
        NewItem {
            name: name.to_string(),
            description: None,
        }
    }

    fn ids(records: &[Item]) -> Vec<RecordId> {
        records.iter().map(|item| item.id).collect()
    }

    #[tokio::test]
    async fn test_find_all_returns_seeds_in_order() {
        let repo = items();
        assert_eq!(repo.find_all().await, Item::seed_data());
    }

    #[tokio::test]
    async fn test_insert_assigns_next_id_and_appends() {
        let repo = items();

        let created = repo.insert(new_item("Item 3")).await;
        assert_eq!(
            created,
            Item {
                id: 3,
                name: "Item 3".to_string(),
                description: None,
            }
        );

        let all = repo.find_all().await;
        assert_eq!(all.len(), 3);
        assert_eq!(all.last(), Some(&created));
    }

    #[tokio::test]
    async fn test_insert_into_empty_repository_starts_at_one() {
        let repo = InMemoryRecordRepository::<User>::default();
        let created = repo
            .insert(NewUser {
                username: "first".to_string(),
                email: "first@example.com".to_string(),
            })
            .await;
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_consecutive_inserts_have_distinct_ids() {
        let repo = items();
        for n in 3..=6 {
            repo.insert(new_item(&format!("Item {n}"))).await;
        }
        assert_eq!(ids(&repo.find_all().await), vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn test_delete_last_then_insert_keeps_ids_distinct() {
        let repo = items();

        repo.delete(2).await.unwrap();
        let created = repo.insert(new_item("Replacement")).await;

        assert_eq!(created.id, 2);
        assert_eq!(ids(&repo.find_all().await), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_delete_then_insert_reuses_live_id() {
        let repo = items();

        repo.delete(1).await.unwrap();
        let created = repo.insert(new_item("Item 3")).await;

        // One record left, so the size-derived id collides with record 2.
        assert_eq!(created.id, 2);
        assert_eq!(ids(&repo.find_all().await), vec![2, 2]);
    }

    #[tokio::test]
    async fn test_duplicate_ids_resolve_to_first_match() {
        let repo = items();
        repo.delete(1).await.unwrap();
        repo.insert(new_item("Duplicate")).await;

        let found = repo.find_by_id(2).await.unwrap();
        assert_eq!(found.name, "Item 2");

        let updated = repo
            .update(
                2,
                ItemPatch {
                    name: FieldPatch::Set("Renamed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.description.as_deref(), Some("Description for item 2"));

        let removed = repo.delete(2).await.unwrap();
        assert_eq!(removed.name, "Renamed");
        assert_eq!(repo.find_by_id(2).await.unwrap().name, "Duplicate");
    }

    #[tokio::test]
    async fn test_update_merges_only_set_fields() {
        let repo = items();

        let updated = repo
            .update(
                1,
                ItemPatch {
                    description: FieldPatch::Set(Some("new".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(
            updated,
            Item {
                id: 1,
                name: "Item 1".to_string(),
                description: Some("new".to_string()),
            }
        );
        // Same position in the listing
        assert_eq!(repo.find_all().await[0], updated);
    }

    #[tokio::test]
    async fn test_update_user_keeps_id() {
        let repo = InMemoryRecordRepository::new(User::seed_data());
        let updated = repo
            .update(
                2,
                UserPatch {
                    username: FieldPatch::Set("renamed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.username, "renamed");
        assert_eq!(updated.email, "user2@example.com");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let repo = items();

        let err = repo
            .update(
                99,
                ItemPatch {
                    name: FieldPatch::Set("x".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::not_found("Item", 99));
        assert_eq!(repo.find_all().await, Item::seed_data());
    }

    #[tokio::test]
    async fn test_delete_returns_removed_record() {
        let repo = items();

        let removed = repo.delete(2).await.unwrap();
        assert_eq!(removed, Item::seed_data()[1]);
        assert_eq!(ids(&repo.find_all().await), vec![1]);

        let err = repo.delete(2).await.unwrap_err();
        assert_eq!(err, DomainError::not_found("Item", 2));
        assert_eq!(ids(&repo.find_all().await), vec![1]);
    }

    #[tokio::test]
    async fn test_find_by_id_unknown_is_not_found() {
        let repo = InMemoryRecordRepository::new(User::seed_data());
        let err = repo.find_by_id(7).await.unwrap_err();
        assert_eq!(err, DomainError::not_found("User", 7));
    }
}
