//! Item - Named thing with an optional description
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

use super::record::{Record, RecordId};
use crate::domain::value_objects::FieldPatch;

/// Item record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
}

/// Fields for a new Item
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update for an Item
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemPatch {
    #[serde(default)]
    pub name: FieldPatch<String>,
    #[serde(default)]
    pub description: FieldPatch<Option<String>>,
}

impl Item {
    /// Records every Item repository starts with
    pub fn seed_data() -> Vec<Item> {
        (1..=2)
            .map(|n| Item {
                id: n,
                name: format!("Item {n}"),
                description: Some(format!("Description for item {n}")),
            })
            .collect()
    }
}

impl Record for Item {
    type Draft = NewItem;
    type Patch = ItemPatch;

    const KIND: &'static str = "Item";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewItem) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
        }
    }

    fn apply_patch(&mut self, patch: ItemPatch) {
        patch.name.apply_to(&mut self.name);
        patch.description.apply_to(&mut self.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_one() -> Item {
        Item::seed_data().remove(0)
    }

    #[test]
    fn test_seed_data() {
        let seeds = Item::seed_data();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].id, 1);
        assert_eq!(seeds[0].name, "Item 1");
        assert_eq!(
            seeds[1].description.as_deref(),
            Some("Description for item 2")
        );
    }

    #[test]
    fn test_from_draft_takes_fields_verbatim() {
        let item = Item::from_draft(
            3,
            NewItem {
                name: "Item 3".to_string(),
                description: None,
            },
        );
        assert_eq!(item.id, 3);
        assert_eq!(item.name, "Item 3");
        assert_eq!(item.description, None);
    }

    #[test]
    fn test_patch_description_keeps_name() {
        let mut item = item_one();
        item.apply_patch(ItemPatch {
            description: FieldPatch::Set(Some("new".to_string())),
            ..Default::default()
        });
        assert_eq!(item.name, "Item 1");
        assert_eq!(item.description.as_deref(), Some("new"));
    }

    #[test]
    fn test_patch_can_clear_description() {
        let mut item = item_one();
        item.apply_patch(ItemPatch {
            description: FieldPatch::Set(None),
            ..Default::default()
        });
        assert_eq!(item.description, None);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut item = item_one();
        item.apply_patch(ItemPatch::default());
        assert_eq!(item, item_one());
    }

    #[test]
    fn test_patch_from_json_distinguishes_null_and_missing() {
        let cleared: ItemPatch = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(cleared.description, FieldPatch::Set(None));
        assert_eq!(cleared.name, FieldPatch::Unset);

        let renamed: ItemPatch = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
        assert_eq!(renamed.name, FieldPatch::Set("x".to_string()));
        assert_eq!(renamed.description, FieldPatch::Unset);
    }
}
