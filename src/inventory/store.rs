//! The ordered item list and its grid grouping.

use bevy::prelude::*;
use std::sync::Arc;

use super::error::InventoryError;
use super::items::{items_match, ItemData, ItemType};

/// Grid filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InventoryTab {
    /// Weapons and gear
    #[default]
    Equipment,
    Consumables,
}

impl InventoryTab {
    pub fn shows(self, item_type: ItemType) -> bool {
        match self {
            InventoryTab::Equipment => matches!(item_type, ItemType::Weapon | ItemType::Gear),
            InventoryTab::Consumables => item_type == ItemType::Consumable,
        }
    }
}

/// One grid cell: a stack of matching items.
#[derive(Debug, Clone)]
pub struct GridEntry {
    /// First-seen instance of the stack
    pub item: Arc<ItemData>,
    pub count: usize,
}

/// The player's carried items.
///
/// Insertion order is display order; duplicate references make up a stack.
#[derive(Resource, Debug, Default, Clone)]
pub struct Inventory {
    items: Vec<Arc<ItemData>>,
}

impl Inventory {
    pub fn items(&self) -> &[Arc<ItemData>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Append `count` references to `item`. Non-positive counts do nothing.
    pub fn add(&mut self, item: &Arc<ItemData>, count: i32) -> usize {
        if count <= 0 {
            return 0;
        }
        let count = count as usize;
        self.items
            .extend(std::iter::repeat_with(|| Arc::clone(item)).take(count));
        count
    }

    /// Number of held items matching `item`.
    pub fn count_of(&self, item: &ItemData) -> usize {
        self.items.iter().filter(|i| items_match(i, item)).count()
    }

    /// Remove `count` matching items, newest first.
    ///
    /// Holding fewer than `count` fails and leaves the list untouched.
    pub fn remove(&mut self, item: &ItemData, count: i32) -> Result<(), InventoryError> {
        if count <= 0 {
            return Ok(());
        }
        let requested = count as usize;
        let held = self.count_of(item);
        if held < requested {
            return Err(InventoryError::Insufficient {
                item: item.name.clone(),
                requested,
                held,
            });
        }

        let mut removed = 0;
        let mut index = self.items.len();
        while removed < requested && index > 0 {
            index -= 1;
            if items_match(&self.items[index], item) {
                self.items.remove(index);
                removed += 1;
            }
        }
        Ok(())
    }

    /// Use up `count` of an item (quick-use, scripted costs).
    pub fn consume(&mut self, item: &ItemData, count: i32) -> Result<(), InventoryError> {
        self.remove(item, count)
    }

    /// Move one matching reference out of the list.
    pub fn take_one(&mut self, item: &ItemData) -> Result<Arc<ItemData>, InventoryError> {
        let index = self
            .items
            .iter()
            .rposition(|i| items_match(i, item))
            .ok_or_else(|| InventoryError::NotInInventory(item.name.clone()))?;
        Ok(self.items.remove(index))
    }

    /// Return a single reference, e.g. from an equip slot.
    pub fn put_back(&mut self, item: Arc<ItemData>) {
        self.items.push(item);
    }

    /// Stacks shown on `tab`, in first-seen order.
    pub fn grouped(&self, tab: InventoryTab) -> Vec<GridEntry> {
        let mut entries: Vec<GridEntry> = Vec::new();
        for item in self.items.iter().filter(|i| tab.shows(i.item_type)) {
            let existing = entries
                .iter_mut()
                .find(|e| e.item.item_type == item.item_type && e.item.name == item.name);
            match existing {
                Some(entry) => entry.count += 1,
                None => entries.push(GridEntry {
                    item: Arc::clone(item),
                    count: 1,
                }),
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, item_type: ItemType) -> Arc<ItemData> {
        Arc::new(ItemData {
            name: name.into(),
            item_type,
            ..Default::default()
        })
    }

    fn names(inventory: &Inventory) -> Vec<String> {
        let mut names: Vec<String> = inventory.items().iter().map(|i| i.name.clone()).collect();
        names.sort();
        names
    }

    #[test]
    fn add_then_remove_preserves_membership() {
        let potion = item("Red Potion", ItemType::Consumable);
        let sword = item("Iron Sword", ItemType::Weapon);
        let mut inventory = Inventory::default();
        inventory.add(&sword, 1);
        inventory.add(&potion, 2);
        let before = names(&inventory);

        assert_eq!(inventory.add(&potion, 3), 3);
        inventory.remove(&potion, 3).unwrap();
        assert_eq!(names(&inventory), before);
    }

    #[test]
    fn non_positive_counts_are_no_ops() {
        let potion = item("Red Potion", ItemType::Consumable);
        let mut inventory = Inventory::default();
        assert_eq!(inventory.add(&potion, 0), 0);
        assert_eq!(inventory.add(&potion, -2), 0);
        assert!(inventory.is_empty());
        assert!(inventory.remove(&potion, 0).is_ok());
    }

    #[test]
    fn insufficient_remove_leaves_list_unchanged() {
        let potion = item("Red Potion", ItemType::Consumable);
        let mut inventory = Inventory::default();
        inventory.add(&potion, 2);

        let err = inventory.consume(&potion, 3).unwrap_err();
        assert_eq!(
            err,
            InventoryError::Insufficient {
                item: "Red Potion".into(),
                requested: 3,
                held: 2
            }
        );
        assert_eq!(inventory.count_of(&potion), 2);
    }

    #[test]
    fn remove_takes_newest_matches_first() {
        let potion = item("Red Potion", ItemType::Consumable);
        let gem = item("Gem", ItemType::Gear);
        let mut inventory = Inventory::default();
        inventory.add(&potion, 1);
        inventory.add(&gem, 1);
        inventory.add(&potion, 1);

        inventory.remove(&potion, 1).unwrap();
        let order: Vec<&str> = inventory.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(order, ["Red Potion", "Gem"]);
    }

    #[test]
    fn grouping_counts_by_type_and_name_per_tab() {
        let red = item("Red Potion", ItemType::Consumable);
        let blue = item("Blue Potion", ItemType::Consumable);
        let sword = item("Iron Sword", ItemType::Weapon);
        let ring = item("Ring", ItemType::Gear);
        let mut inventory = Inventory::default();
        inventory.add(&red, 1);
        inventory.add(&sword, 1);
        inventory.add(&blue, 1);
        inventory.add(&red, 2);
        inventory.add(&ring, 1);

        let consumables = inventory.grouped(InventoryTab::Consumables);
        let summary: Vec<(&str, usize)> = consumables
            .iter()
            .map(|e| (e.item.name.as_str(), e.count))
            .collect();
        assert_eq!(summary, [("Red Potion", 3), ("Blue Potion", 1)]);

        let equipment = inventory.grouped(InventoryTab::Equipment);
        let summary: Vec<&str> = equipment.iter().map(|e| e.item.name.as_str()).collect();
        assert_eq!(summary, ["Iron Sword", "Ring"]);
    }

    #[test]
    fn take_one_reports_missing_item() {
        let ring = item("Ring", ItemType::Gear);
        let mut inventory = Inventory::default();
        assert_eq!(
            inventory.take_one(&ring).unwrap_err(),
            InventoryError::NotInInventory("Ring".into())
        );
        inventory.add(&ring, 1);
        assert!(Arc::ptr_eq(&inventory.take_one(&ring).unwrap(), &ring));
        assert!(inventory.is_empty());
    }
}
