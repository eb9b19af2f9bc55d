//! Inventory operation errors.

use thiserror::Error;

use super::equip::SlotId;
use super::items::ItemType;

/// Reasons an inventory or equip operation was refused.
///
/// A refused operation never changes the inventory or the slots.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("not enough '{item}': wanted {requested}, holding {held}")]
    Insufficient {
        item: String,
        requested: usize,
        held: usize,
    },

    #[error("{slot:?} slot does not accept {item_type:?} items")]
    WrongSlotType { slot: SlotId, item_type: ItemType },

    #[error("'{0}' is not in the inventory")]
    NotInInventory(String),

    #[error("{0:?} slot is empty")]
    SlotEmpty(SlotId),

    #[error("both consumable slots are occupied")]
    SlotsFull,

    #[error("no item is being dragged")]
    NothingDragged,
}
