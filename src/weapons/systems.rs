//! Weapon equip requests and change notifications.

use bevy::prelude::*;
use std::sync::Arc;

use super::components::{AnimationBinding, WeaponEquippable, WeaponLoadout};
use super::data::WeaponData;

/// Ask an actor to equip `weapon`, or unequip when `None`.
#[derive(Event, Debug, Clone)]
pub struct WeaponEquipRequest {
    pub entity: Entity,
    pub weapon: Option<Arc<WeaponData>>,
}

/// Sent after an actor's active weapon changed.
#[derive(Event, Debug, Clone)]
pub struct WeaponChanged {
    pub entity: Entity,
    pub weapon: Option<Arc<WeaponData>>,
}

/// Apply queued equip requests to loadouts.
pub fn apply_equip_requests(
    mut requests: EventReader<WeaponEquipRequest>,
    mut loadouts: Query<&mut WeaponLoadout>,
    mut changed: EventWriter<WeaponChanged>,
) {
    for request in requests.read() {
        let Ok(mut loadout) = loadouts.get_mut(request.entity) else {
            warn!("Equip request for {:?}, which has no weapon loadout", request.entity);
            continue;
        };

        match &request.weapon {
            Some(weapon) => {
                if !loadout.can_equip(Some(weapon)) {
                    continue;
                }
                loadout.equip_weapon(weapon.clone());
                info!(
                    "Equipped {} (power {}, range {:.2}, cooldown {:.2})",
                    weapon.display_name,
                    loadout.current_attack_power(),
                    loadout.current_attack_range(),
                    loadout.current_attack_cooldown()
                );
            }
            None => {
                if loadout.unequip_weapon().is_none() {
                    continue;
                }
                info!("Unequipped weapon, back to base stats");
            }
        }

        changed.send(WeaponChanged {
            entity: request.entity,
            weapon: request.weapon.clone(),
        });
    }
}

/// Swap animation sets when the active weapon changes.
pub fn bind_weapon_animations(
    mut changes: EventReader<WeaponChanged>,
    mut bindings: Query<&mut AnimationBinding>,
) {
    for change in changes.read() {
        if let Ok(mut binding) = bindings.get_mut(change.entity) {
            binding.bind(change.weapon.as_deref());
            debug!("{:?} animation set -> {}", change.entity, binding.active);
        }
    }
}
