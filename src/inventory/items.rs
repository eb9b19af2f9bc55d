//! Item definitions and the item registry.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::data::{load_ron_dir, DataLoadError};
use crate::weapons::{WeaponData, WeaponRegistry};

/// Directory scanned for item definitions.
pub const ITEMS_DIR: &str = "assets/data/items";

/// Item category. Decides which equip slot and which tab an item belongs to.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ItemType {
    #[default]
    Weapon,
    Gear,
    Consumable,
}

/// Static item definition. The inventory and equip slots share these by `Arc`.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct ItemData {
    /// Registry key, taken from the file stem.
    #[serde(skip)]
    pub id: String,
    pub name: String,
    pub item_type: ItemType,
    /// Image path under `assets/`, if any.
    pub icon: Option<String>,
    /// Swatch colour shown when there is no icon image.
    pub icon_color: (f32, f32, f32),
    pub description: String,
    /// Weapon registry id for weapon items.
    pub weapon: Option<String>,
    pub restore_hp: i32,
    pub restore_mp: i32,
    /// Resolved from `weapon` when the registry loads.
    #[serde(skip)]
    pub weapon_data: Option<Arc<WeaponData>>,
}

/// Same item for stacking and removal: same type and the same non-empty name.
pub fn items_match(a: &ItemData, b: &ItemData) -> bool {
    a.item_type == b.item_type && !a.name.is_empty() && a.name == b.name
}

/// Resource holding all loaded item definitions.
#[derive(Resource, Default, Debug)]
pub struct ItemRegistry {
    items: HashMap<String, Arc<ItemData>>,
}

impl ItemRegistry {
    /// Build the registry, resolving weapon links against `weapons`.
    ///
    /// Unknown weapon ids are returned as errors; the item is kept without a
    /// weapon link.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = (String, ItemData)>,
        weapons: &WeaponRegistry,
    ) -> (Self, Vec<DataLoadError>) {
        let mut unresolved = Vec::new();
        let items = definitions
            .into_iter()
            .map(|(id, mut item)| {
                item.id = id.clone();
                if let Some(weapon_id) = &item.weapon {
                    item.weapon_data = weapons.get(weapon_id);
                    if item.weapon_data.is_none() {
                        unresolved.push(DataLoadError::UnknownReference {
                            kind: "weapon",
                            id: weapon_id.clone(),
                            referenced_by: id.clone(),
                        });
                    }
                }
                (id, Arc::new(item))
            })
            .collect();
        (Self { items }, unresolved)
    }

    pub fn get(&self, id: &str) -> Option<Arc<ItemData>> {
        self.items.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Load all item definitions from the assets/data/items/ directory.
pub fn load_item_definitions(mut commands: Commands, weapons: Option<Res<WeaponRegistry>>) {
    let empty = WeaponRegistry::default();
    let weapons = weapons.as_deref().unwrap_or(&empty);

    let (definitions, failures) = match load_ron_dir::<ItemData>(Path::new(ITEMS_DIR)) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{}. No items available.", e);
            commands.insert_resource(ItemRegistry::default());
            return;
        }
    };

    for failure in failures {
        error!("Failed to load item definition: {}", failure);
    }

    let (registry, unresolved) = ItemRegistry::from_definitions(definitions, weapons);
    for e in unresolved {
        warn!("{}", e);
    }

    info!("Loaded {} item definitions", registry.len());
    commands.insert_resource(registry);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_ron;

    fn item(name: &str, item_type: ItemType) -> ItemData {
        ItemData {
            name: name.into(),
            item_type,
            ..Default::default()
        }
    }

    #[test]
    fn match_requires_type_and_non_empty_name() {
        assert!(items_match(
            &item("Red Potion", ItemType::Consumable),
            &item("Red Potion", ItemType::Consumable)
        ));
        assert!(!items_match(
            &item("Red Potion", ItemType::Consumable),
            &item("Red Potion", ItemType::Gear)
        ));
        assert!(!items_match(
            &item("", ItemType::Gear),
            &item("", ItemType::Gear)
        ));
    }

    #[test]
    fn weapon_links_resolve_or_report() {
        let weapons = WeaponRegistry::from_definitions([(
            "iron_sword".to_string(),
            WeaponData {
                display_name: "Iron Sword".into(),
                attack_power: 8,
                ..Default::default()
            },
        )]);
        let sword: ItemData = parse_ron(
            "(name: \"Iron Sword\", item_type: Weapon, weapon: Some(\"iron_sword\"))",
            "inline",
        )
        .unwrap();
        let broken: ItemData = parse_ron(
            "(name: \"Rusty\", item_type: Weapon, weapon: Some(\"nope\"))",
            "inline",
        )
        .unwrap();

        let (registry, unresolved) = ItemRegistry::from_definitions(
            [("iron_sword".to_string(), sword), ("rusty".to_string(), broken)],
            &weapons,
        );

        let linked = registry.get("iron_sword").unwrap();
        assert_eq!(linked.weapon_data.as_ref().map(|w| w.attack_power), Some(8));
        assert!(registry.get("rusty").unwrap().weapon_data.is_none());
        assert_eq!(unresolved.len(), 1);
        assert!(matches!(
            &unresolved[0],
            DataLoadError::UnknownReference { kind: "weapon", id, .. } if id == "nope"
        ));
    }
}
