//! Headless checks of the inventory, equip slots and their hooks into combat.

use bevy::prelude::*;
use std::sync::Arc;

use hollow_grove::combat::{apply_restores, Condition, Health, Mana};
use hollow_grove::core::{ItemPickupEvent, RestoreEvent, SfxEvent};
use hollow_grove::inventory::{
    bridge_weapon_slot, collect_pickups, use_consumable_hotkeys, EquipSlotChanged, EquipSlots,
    Inventory, InventoryConfig, ItemData, ItemPickup, ItemRegistry, ItemType, SlotId,
};
use hollow_grove::player::Player;
use hollow_grove::weapons::{
    apply_equip_requests, BaseCombatStats, WeaponChanged, WeaponData, WeaponEquipRequest,
    WeaponLoadout, WeaponRegistry,
};

fn registry() -> ItemRegistry {
    let weapons = WeaponRegistry::from_definitions([(
        "great_axe".to_string(),
        WeaponData {
            display_name: "Great Axe".into(),
            attack_power: 8,
            attack_range: 1.6,
            ..Default::default()
        },
    )]);
    let (registry, unresolved) = ItemRegistry::from_definitions(
        [
            (
                "great_axe".to_string(),
                ItemData {
                    name: "Great Axe".into(),
                    item_type: ItemType::Weapon,
                    weapon: Some("great_axe".into()),
                    ..Default::default()
                },
            ),
            (
                "red_potion".to_string(),
                ItemData {
                    name: "Red Potion".into(),
                    item_type: ItemType::Consumable,
                    restore_hp: 40,
                    ..Default::default()
                },
            ),
        ],
        &weapons,
    );
    assert!(unresolved.is_empty());
    registry
}

fn base_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(registry())
        .init_resource::<Inventory>()
        .init_resource::<EquipSlots>()
        .init_resource::<InventoryConfig>()
        .add_event::<EquipSlotChanged>()
        .add_event::<WeaponEquipRequest>()
        .add_event::<WeaponChanged>()
        .add_event::<RestoreEvent>()
        .add_event::<ItemPickupEvent>()
        .add_event::<SfxEvent>();
    app
}

fn item(app: &App, id: &str) -> Arc<ItemData> {
    app.world().resource::<ItemRegistry>().get(id).unwrap()
}

#[test]
fn weapon_slot_drives_player_attack_power() {
    let mut app = base_app();
    app.add_systems(Update, (bridge_weapon_slot, apply_equip_requests).chain());
    let player = app
        .world_mut()
        .spawn((Player, WeaponLoadout::new(BaseCombatStats::default())))
        .id();

    let axe = item(&app, "great_axe");
    app.world_mut().send_event(EquipSlotChanged {
        slot: SlotId::Weapon,
        item: Some(axe),
    });
    app.update();

    let loadout = app.world().get::<WeaponLoadout>(player).unwrap();
    assert_eq!(loadout.current_attack_power(), 18);
    assert_eq!(loadout.current_attack_range(), 1.6);

    app.world_mut().send_event(EquipSlotChanged {
        slot: SlotId::Weapon,
        item: None,
    });
    app.update();

    let loadout = app.world().get::<WeaponLoadout>(player).unwrap();
    assert_eq!(loadout.current_attack_power(), 10);
    assert!(loadout.equipped().is_none());
}

#[test]
fn consumable_hotkey_heals_and_refills_the_slot() {
    let mut app = base_app();
    app.add_systems(Update, (use_consumable_hotkeys, apply_restores).chain());

    let potion = item(&app, "red_potion");
    let mut inventory = Inventory::default();
    let mut slots = EquipSlots::default();
    inventory.add(&potion, 2);
    slots
        .equip(&mut inventory, SlotId::ConsumableA, &potion)
        .unwrap();
    app.insert_resource(inventory).insert_resource(slots);

    let mut health = Health::new(100);
    let mut condition = Condition::default();
    condition.take_damage(&mut health, 70, 0.3);
    let player = app
        .world_mut()
        .spawn((Player, health, Mana::new(50), condition))
        .id();

    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::Digit1);
    app.insert_resource(keyboard);
    app.update();

    let world = app.world();
    assert_eq!(world.get::<Health>(player).unwrap().current(), 70);
    assert!(world.resource::<EquipSlots>().get(SlotId::ConsumableA).is_some());
    assert!(world.resource::<Inventory>().is_empty());
}

#[test]
fn duplicate_pickup_events_collect_once() {
    let mut app = base_app();
    app.add_systems(Update, collect_pickups);

    let player = app.world_mut().spawn(Player).id();
    let pickup = app
        .world_mut()
        .spawn(ItemPickup {
            item_id: "red_potion".into(),
            amount: 2,
        })
        .id();

    for _ in 0..2 {
        app.world_mut()
            .send_event(ItemPickupEvent { pickup, player });
    }
    app.update();

    let potion = item(&app, "red_potion");
    assert_eq!(app.world().resource::<Inventory>().count_of(&potion), 2);
    assert!(!app.world().entities().contains(pickup));
}

#[test]
fn unknown_pickup_items_are_left_in_place() {
    let mut app = base_app();
    app.add_systems(Update, collect_pickups);

    let player = app.world_mut().spawn(Player).id();
    let pickup = app
        .world_mut()
        .spawn(ItemPickup {
            item_id: "cursed_idol".into(),
            amount: 1,
        })
        .id();

    app.world_mut()
        .send_event(ItemPickupEvent { pickup, player });
    app.update();

    assert!(app.world().resource::<Inventory>().is_empty());
    assert!(app.world().entities().contains(pickup));
}
