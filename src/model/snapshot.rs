use indexmap::IndexMap;

use super::item::{Item, ItemId};

/// Direction of a positional neighbor lookup or move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("duplicate item id: {0}")]
    DuplicateId(ItemId),
}

/// An immutable, position-ordered view of the backing collection.
///
/// A snapshot is produced whole (by the store or by a functional update
/// below) and replaced atomically; nothing mutates one in place. Items are
/// keyed by id and kept in position order, so id lookup and ordered
/// iteration are both cheap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    items: IndexMap<ItemId, Item>,
}

impl Snapshot {
    /// Build a snapshot from a list of items. Sorts by position and rejects
    /// duplicate ids.
    pub fn from_items(mut items: Vec<Item>) -> Result<Snapshot, SnapshotError> {
        items.sort_by_key(|item| item.position);
        let mut map = IndexMap::with_capacity(items.len());
        for item in items {
            let id = item.id.clone();
            if map.insert(id.clone(), item).is_some() {
                return Err(SnapshotError::DuplicateId(id));
            }
        }
        Ok(Snapshot { items: map })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Items in position order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Id of the first item in position order.
    pub fn first_id(&self) -> Option<&ItemId> {
        self.items.first().map(|(id, _)| id)
    }

    /// Id of the last item in position order.
    pub fn last_id(&self) -> Option<&ItemId> {
        self.items.last().map(|(id, _)| id)
    }

    /// Index of an item in position order.
    pub fn index_of(&self, id: &ItemId) -> Option<usize> {
        self.items.get_index_of(id)
    }

    /// The item adjacent to `id` in the given direction, or None at either
    /// boundary (no wrap).
    pub fn neighbor(&self, id: &ItemId, direction: Direction) -> Option<&ItemId> {
        let idx = self.items.get_index_of(id)?;
        let target = match direction {
            Direction::Next => idx.checked_add(1)?,
            Direction::Previous => idx.checked_sub(1)?,
        };
        self.items.get_index(target).map(|(id, _)| id)
    }

    /// A new snapshot with `item` appended (or replacing an existing item
    /// with the same id), re-sorted by position.
    pub fn inserted(&self, item: Item) -> Snapshot {
        let mut items: Vec<Item> = self
            .items
            .values()
            .filter(|existing| existing.id != item.id)
            .cloned()
            .collect();
        items.push(item);
        // Ids are unique by construction here, so from_items cannot fail.
        Snapshot::from_items(items).unwrap_or_default()
    }

    /// Stable list move: a new snapshot with `id` moved to `target_index`,
    /// everything else keeping its relative order. Positions are reassigned
    /// to index order; the returned patch lists every item whose position
    /// changed, for persistence.
    ///
    /// Returns None if `id` is absent or `target_index` is out of range or
    /// equal to the current index.
    pub fn moved(&self, id: &ItemId, target_index: usize) -> Option<(Snapshot, Vec<(ItemId, i64)>)> {
        let from = self.items.get_index_of(id)?;
        if target_index >= self.items.len() || target_index == from {
            return None;
        }

        let mut items: Vec<Item> = self.items.values().cloned().collect();
        let moved = items.remove(from);
        items.insert(target_index, moved);

        let mut patch = Vec::new();
        for (idx, item) in items.iter_mut().enumerate() {
            let position = idx as i64;
            if item.position != position {
                item.position = position;
                patch.push((item.id.clone(), position));
            }
        }

        let snapshot = Snapshot::from_items(items).unwrap_or_default();
        Some((snapshot, patch))
    }
}
