//! UI module - menus, HUD and the inventory screen.

mod hud;
mod inventory_panel;
mod plugin;
pub mod status;

pub use inventory_panel::InventoryView;
pub use plugin::UiPlugin;
