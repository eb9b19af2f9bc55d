//! Inventory systems: pickups, consumable hotkeys and the weapon-slot bridge.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use std::collections::HashSet;

use super::components::{InventoryConfig, ItemPickup};
use super::equip::{EquipSlotChanged, EquipSlots, SlotId};
use super::items::ItemRegistry;
use super::store::Inventory;
use crate::combat::Condition;
use crate::core::{ItemPickupEvent, RestoreEvent, SfxCue, SfxEvent};
use crate::player::Player;
use crate::weapons::WeaponEquipRequest;
use crate::world::LevelEntity;

/// Spawn a pickup sensor at `position`.
pub fn spawn_pickup(
    commands: &mut Commands,
    pickup: ItemPickup,
    color: Color,
    position: Vec2,
) -> Entity {
    commands
        .spawn((
            Name::new(format!("Pickup {}", pickup.item_id)),
            pickup,
            Sprite {
                color,
                custom_size: Some(Vec2::splat(0.4)),
                ..default()
            },
            Transform::from_translation(position.extend(4.0)),
            Collider::ball(0.25),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
            LevelEntity,
        ))
        .id()
}

/// Turn player/pickup contacts into pickup events.
pub fn detect_pickups(
    mut collisions: EventReader<CollisionEvent>,
    players: Query<(), With<Player>>,
    pickups: Query<(), With<ItemPickup>>,
    mut pickup_events: EventWriter<ItemPickupEvent>,
) {
    for collision in collisions.read() {
        let CollisionEvent::Started(a, b, _) = *collision else {
            continue;
        };
        let pair = if players.contains(a) && pickups.contains(b) {
            Some((a, b))
        } else if players.contains(b) && pickups.contains(a) {
            Some((b, a))
        } else {
            None
        };
        if let Some((player, pickup)) = pair {
            pickup_events.send(ItemPickupEvent { pickup, player });
        }
    }
}

/// Add picked-up items to the inventory and remove the pickups.
pub fn collect_pickups(
    mut commands: Commands,
    mut pickup_events: EventReader<ItemPickupEvent>,
    pickups: Query<&ItemPickup>,
    registry: Res<ItemRegistry>,
    mut inventory: ResMut<Inventory>,
    mut sfx: EventWriter<SfxEvent>,
) {
    let mut collected = HashSet::new();
    for event in pickup_events.read() {
        if !collected.insert(event.pickup) {
            continue;
        }
        let Ok(pickup) = pickups.get(event.pickup) else {
            continue;
        };
        let Some(item) = registry.get(&pickup.item_id) else {
            warn!("Pickup refers to unknown item '{}'", pickup.item_id);
            continue;
        };

        let added = inventory.add(&item, pickup.amount);
        info!("Picked up {} x{}", item.name, added);
        sfx.send(SfxEvent::Cue(SfxCue::Pickup));
        commands.entity(event.pickup).despawn_recursive();
    }
}

/// Keys 1 and 2 use the consumables bound to slots A and B.
pub fn use_consumable_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<InventoryConfig>,
    mut slots: ResMut<EquipSlots>,
    mut inventory: ResMut<Inventory>,
    players: Query<(Entity, &Condition), With<Player>>,
    mut restore_events: EventWriter<RestoreEvent>,
    mut slot_events: EventWriter<EquipSlotChanged>,
    mut sfx: EventWriter<SfxEvent>,
) {
    let pressed = [
        (KeyCode::Digit1, SlotId::ConsumableA),
        (KeyCode::Digit2, SlotId::ConsumableB),
    ]
    .into_iter()
    .filter(|(key, _)| keyboard.just_pressed(*key))
    .map(|(_, slot)| slot);

    for slot in pressed {
        let Ok((player, condition)) = players.get_single() else {
            warn!("No player to use a consumable on");
            return;
        };
        if condition.is_dead() {
            return;
        }

        let item = match slots.use_consumable(&mut inventory, slot) {
            Ok(item) => item,
            Err(e) => {
                info!("Cannot use {}: {}", slot.label(), e);
                continue;
            }
        };

        let (health, mana) = config.restore_amounts(&item, slot);
        info!("Used {}, restoring {} HP and {} MP", item.name, health, mana);
        restore_events.send(RestoreEvent {
            target: player,
            health,
            mana,
        });
        slot_events.send(EquipSlotChanged {
            slot,
            item: slots.get(slot).cloned(),
        });
        sfx.send(SfxEvent::Cue(SfxCue::Consume));
    }
}

/// Forward weapon-slot changes to the player's weapon loadout.
pub fn bridge_weapon_slot(
    mut slot_events: EventReader<EquipSlotChanged>,
    players: Query<Entity, With<Player>>,
    mut requests: EventWriter<WeaponEquipRequest>,
) {
    for event in slot_events.read() {
        if event.slot != SlotId::Weapon {
            continue;
        }
        let Ok(player) = players.get_single() else {
            continue;
        };

        let weapon = event.item.as_ref().and_then(|item| {
            if item.weapon_data.is_none() {
                warn!("Weapon item '{}' has no weapon data", item.name);
            }
            item.weapon_data.clone()
        });
        requests.send(WeaponEquipRequest {
            entity: player,
            weapon,
        });
    }
}

/// A freshly spawned player picks up whatever weapon is slotted.
pub fn sync_weapon_on_spawn(
    slots: Res<EquipSlots>,
    players: Query<Entity, Added<Player>>,
    mut requests: EventWriter<WeaponEquipRequest>,
) {
    for player in players.iter() {
        let Some(weapon) = slots.get(SlotId::Weapon).and_then(|i| i.weapon_data.clone()) else {
            continue;
        };
        requests.send(WeaponEquipRequest {
            entity: player,
            weapon: Some(weapon),
        });
    }
}

/// Start a new game with the configured starting items and empty slots.
pub fn reset_inventory(
    config: Res<InventoryConfig>,
    registry: Res<ItemRegistry>,
    mut inventory: ResMut<Inventory>,
    mut slots: ResMut<EquipSlots>,
) {
    inventory.clear();
    slots.clear_all();
    for (id, count) in &config.starting_items {
        match registry.get(id) {
            Some(item) => {
                inventory.add(&item, *count);
            }
            None => warn!("Starting item '{}' is not defined", id),
        }
    }
    info!("Inventory reset with {} items", inventory.len());
}
