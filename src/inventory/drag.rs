//! Two-phase drag and drop from grid cells onto equip slots.

use bevy::prelude::*;
use std::sync::Arc;

use super::equip::{EquipSlots, SlotId};
use super::error::InventoryError;
use super::items::ItemData;
use super::store::Inventory;

/// Where the current drag started.
#[derive(Debug, Clone)]
pub struct DragSource {
    pub grid_index: usize,
    pub item: Arc<ItemData>,
}

/// Drag bookkeeping. `visible` drives the floating drag icon.
#[derive(Resource, Debug, Default)]
pub struct DragState {
    source: Option<DragSource>,
    visible: bool,
}

impl DragState {
    /// Start dragging the item in grid cell `grid_index`.
    pub fn begin(&mut self, grid_index: usize, item: Arc<ItemData>) {
        self.source = Some(DragSource { grid_index, item });
        self.visible = true;
    }

    pub fn source(&self) -> Option<&DragSource> {
        self.source.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Drop onto `slot`. A refused drop keeps inventory and slots as they were.
    pub fn drop_on(
        &mut self,
        slot: SlotId,
        slots: &mut EquipSlots,
        inventory: &mut Inventory,
    ) -> Result<SlotId, InventoryError> {
        let source = self.source.as_ref().ok_or(InventoryError::NothingDragged)?;
        let item = Arc::clone(&source.item);
        let equipped = slots.equip(inventory, slot, &item)?;
        self.source = None;
        Ok(equipped)
    }

    /// Finish the drag whatever happened.
    pub fn end(&mut self) {
        self.source = None;
        self.visible = false;
    }
}
