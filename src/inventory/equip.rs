//! Equip slots: one optional item binding per slot.

use bevy::prelude::*;
use std::sync::Arc;

use super::error::InventoryError;
use super::items::{ItemData, ItemType};
use super::store::Inventory;

/// The four equip slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    Weapon,
    Gear,
    ConsumableA,
    ConsumableB,
}

impl SlotId {
    pub const ALL: [SlotId; 4] = [
        SlotId::Weapon,
        SlotId::Gear,
        SlotId::ConsumableA,
        SlotId::ConsumableB,
    ];

    pub fn allowed_type(self) -> ItemType {
        match self {
            SlotId::Weapon => ItemType::Weapon,
            SlotId::Gear => ItemType::Gear,
            SlotId::ConsumableA | SlotId::ConsumableB => ItemType::Consumable,
        }
    }

    pub fn accepts(self, item_type: ItemType) -> bool {
        self.allowed_type() == item_type
    }

    /// Slots an item of `item_type` could go into.
    pub fn targets_for(item_type: ItemType) -> impl Iterator<Item = SlotId> {
        SlotId::ALL.into_iter().filter(move |s| s.accepts(item_type))
    }

    pub fn label(self) -> &'static str {
        match self {
            SlotId::Weapon => "Weapon",
            SlotId::Gear => "Gear",
            SlotId::ConsumableA => "Item A",
            SlotId::ConsumableB => "Item B",
        }
    }

    fn index(self) -> usize {
        match self {
            SlotId::Weapon => 0,
            SlotId::Gear => 1,
            SlotId::ConsumableA => 2,
            SlotId::ConsumableB => 3,
        }
    }
}

/// Sent whenever a slot's binding changes.
#[derive(Event, Debug, Clone)]
pub struct EquipSlotChanged {
    pub slot: SlotId,
    pub item: Option<Arc<ItemData>>,
}

/// Current equip bindings. An equipped item is never also in the inventory.
#[derive(Resource, Debug, Default, Clone)]
pub struct EquipSlots {
    slots: [Option<Arc<ItemData>>; 4],
}

impl EquipSlots {
    pub fn get(&self, slot: SlotId) -> Option<&Arc<ItemData>> {
        self.slots[slot.index()].as_ref()
    }

    pub fn is_empty(&self, slot: SlotId) -> bool {
        self.get(slot).is_none()
    }

    pub fn clear_all(&mut self) {
        self.slots = Default::default();
    }

    /// Move one `item` from the inventory into `slot`.
    ///
    /// A previously bound item goes back to the inventory.
    pub fn equip(
        &mut self,
        inventory: &mut Inventory,
        slot: SlotId,
        item: &ItemData,
    ) -> Result<SlotId, InventoryError> {
        if !slot.accepts(item.item_type) {
            return Err(InventoryError::WrongSlotType {
                slot,
                item_type: item.item_type,
            });
        }

        let taken = inventory.take_one(item)?;
        if let Some(previous) = self.slots[slot.index()].replace(taken) {
            inventory.put_back(previous);
        }
        Ok(slot)
    }

    /// Return the item in `slot` to the inventory.
    pub fn unequip(
        &mut self,
        inventory: &mut Inventory,
        slot: SlotId,
    ) -> Result<Arc<ItemData>, InventoryError> {
        let item = self.slots[slot.index()]
            .take()
            .ok_or(InventoryError::SlotEmpty(slot))?;
        inventory.put_back(Arc::clone(&item));
        Ok(item)
    }

    /// Pick the slot for a grid click: weapon and gear go to their slot,
    /// consumables fill A, then B.
    pub fn quick_slot_for(&self, item_type: ItemType) -> Result<SlotId, InventoryError> {
        match item_type {
            ItemType::Weapon => Ok(SlotId::Weapon),
            ItemType::Gear => Ok(SlotId::Gear),
            ItemType::Consumable => [SlotId::ConsumableA, SlotId::ConsumableB]
                .into_iter()
                .find(|s| self.is_empty(*s))
                .ok_or(InventoryError::SlotsFull),
        }
    }

    /// Equip from a grid click, routing by item type.
    pub fn quick_equip(
        &mut self,
        inventory: &mut Inventory,
        item: &ItemData,
    ) -> Result<SlotId, InventoryError> {
        let slot = self.quick_slot_for(item.item_type)?;
        self.equip(inventory, slot, item)
    }

    /// Use the consumable in `slot`, refilling it from a matching stack.
    pub fn use_consumable(
        &mut self,
        inventory: &mut Inventory,
        slot: SlotId,
    ) -> Result<Arc<ItemData>, InventoryError> {
        let item = self
            .get(slot)
            .cloned()
            .ok_or(InventoryError::SlotEmpty(slot))?;
        if item.item_type != ItemType::Consumable {
            return Err(InventoryError::WrongSlotType {
                slot,
                item_type: item.item_type,
            });
        }

        self.slots[slot.index()] = inventory.take_one(&item).ok();
        Ok(item)
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

    #[test]
    fn equip_moves_a_single_reference() {
        let potion = item("Red Potion", ItemType::Consumable);
        let mut inventory = Inventory::default();
        inventory.add(&potion, 3);
        let mut slots = EquipSlots::default();

        slots
            .equip(&mut inventory, SlotId::ConsumableA, &potion)
            .unwrap();
        assert_eq!(inventory.count_of(&potion), 2);
        assert!(slots.get(SlotId::ConsumableA).is_some());
    }

    #[test]
    fn wrong_type_leaves_everything_unchanged() {
        let ring = item("Ring", ItemType::Gear);
        let mut inventory = Inventory::default();
        inventory.add(&ring, 1);
        let mut slots = EquipSlots::default();

        let err = slots.equip(&mut inventory, SlotId::Weapon, &ring).unwrap_err();
        assert_eq!(
            err,
            InventoryError::WrongSlotType {
                slot: SlotId::Weapon,
                item_type: ItemType::Gear
            }
        );
        assert_eq!(inventory.count_of(&ring), 1);
        assert!(slots.is_empty(SlotId::Weapon));
    }

    #[test]
    fn displaced_item_returns_to_inventory() {
        let sword = item("Iron Sword", ItemType::Weapon);
        let axe = item("Axe", ItemType::Weapon);
        let mut inventory = Inventory::default();
        inventory.add(&sword, 1);
        inventory.add(&axe, 1);
        let mut slots = EquipSlots::default();

        slots.equip(&mut inventory, SlotId::Weapon, &sword).unwrap();
        slots.equip(&mut inventory, SlotId::Weapon, &axe).unwrap();

        assert_eq!(slots.get(SlotId::Weapon).map(|i| i.name.as_str()), Some("Axe"));
        assert_eq!(inventory.count_of(&sword), 1);
        assert_eq!(inventory.count_of(&axe), 0);
    }

    #[test]
    fn unequip_returns_item_or_reports_empty() {
        let ring = item("Ring", ItemType::Gear);
        let mut inventory = Inventory::default();
        inventory.add(&ring, 1);
        let mut slots = EquipSlots::default();

        assert_eq!(
            slots.unequip(&mut inventory, SlotId::Gear).unwrap_err(),
            InventoryError::SlotEmpty(SlotId::Gear)
        );
        slots.equip(&mut inventory, SlotId::Gear, &ring).unwrap();
        slots.unequip(&mut inventory, SlotId::Gear).unwrap();
        assert_eq!(inventory.count_of(&ring), 1);
        assert!(slots.is_empty(SlotId::Gear));
    }

    #[test]
    fn quick_equip_fills_consumable_a_then_b_then_fails() {
        let red = item("Red Potion", ItemType::Consumable);
        let blue = item("Blue Potion", ItemType::Consumable);
        let mut inventory = Inventory::default();
        inventory.add(&red, 2);
        inventory.add(&blue, 1);
        let mut slots = EquipSlots::default();

        assert_eq!(slots.quick_equip(&mut inventory, &red), Ok(SlotId::ConsumableA));
        assert_eq!(slots.quick_equip(&mut inventory, &blue), Ok(SlotId::ConsumableB));
        assert_eq!(
            slots.quick_equip(&mut inventory, &red),
            Err(InventoryError::SlotsFull)
        );
        assert_eq!(inventory.count_of(&red), 1);
    }

    #[test]
    fn using_a_consumable_refills_from_the_stack() {
        let red = item("Red Potion", ItemType::Consumable);
        let mut inventory = Inventory::default();
        inventory.add(&red, 2);
        let mut slots = EquipSlots::default();
        slots.equip(&mut inventory, SlotId::ConsumableA, &red).unwrap();

        let used = slots.use_consumable(&mut inventory, SlotId::ConsumableA).unwrap();
        assert_eq!(used.name, "Red Potion");
        assert!(slots.get(SlotId::ConsumableA).is_some());
        assert_eq!(inventory.count_of(&red), 0);

        slots.use_consumable(&mut inventory, SlotId::ConsumableA).unwrap();
        assert!(slots.is_empty(SlotId::ConsumableA));
        assert_eq!(
            slots.use_consumable(&mut inventory, SlotId::ConsumableA).unwrap_err(),
            InventoryError::SlotEmpty(SlotId::ConsumableA)
        );
    }

    #[test]
    fn targets_for_lists_matching_slots() {
        let targets: Vec<SlotId> = SlotId::targets_for(ItemType::Consumable).collect();
        assert_eq!(targets, [SlotId::ConsumableA, SlotId::ConsumableB]);
    }
}
