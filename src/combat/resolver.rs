//! Overlap and target-filter rules shared by melee, enemy zones and projectiles.
//!
//! Everything here is pure: physics queries feed candidate entities in, and
//! callers pass closures for hierarchy lookups, so the rules can be tested
//! without a physics world.

use bevy::prelude::*;

/// Detect-zone radius used when an enemy has none configured.
pub const DEFAULT_DETECT_RADIUS: f32 = 3.0;
/// Attack-zone radius used when an enemy has none configured.
pub const DEFAULT_ATTACK_RADIUS: f32 = 1.0;

/// A circle positioned relative to its owner. The x offset mirrors with facing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleZone {
    pub offset: Vec2,
    pub radius: f32,
}

impl CircleZone {
    pub fn new(offset: Vec2, radius: f32) -> Self {
        Self { offset, radius }
    }

    /// Same zone with `fallback` radius if the configured one is unusable.
    pub fn or_radius(self, fallback: f32) -> Self {
        if self.radius > 0.0 {
            self
        } else {
            Self {
                radius: fallback,
                ..self
            }
        }
    }

    /// World-space centre for an owner at `origin` facing `facing` (+1 or -1).
    pub fn center(&self, origin: Vec2, facing: f32) -> Vec2 {
        let facing = if facing < 0.0 { -1.0 } else { 1.0 };
        origin + Vec2::new(self.offset.x * facing, self.offset.y)
    }

    pub fn contains(&self, origin: Vec2, facing: f32, point: Vec2) -> bool {
        self.center(origin, facing).distance_squared(point) <= self.radius * self.radius
    }
}

/// True when `candidate` is `owner` or sits anywhere below it in the hierarchy.
pub fn is_owned_by(
    candidate: Entity,
    owner: Entity,
    parent_of: impl Fn(Entity) -> Option<Entity>,
) -> bool {
    let mut current = Some(candidate);
    while let Some(entity) = current {
        if entity == owner {
            return true;
        }
        current = parent_of(entity);
    }
    false
}

/// Walk up from a collider to the first entity accepted by `is_actor`.
pub fn owning_actor(
    collider: Entity,
    is_actor: impl Fn(Entity) -> bool,
    parent_of: impl Fn(Entity) -> Option<Entity>,
) -> Option<Entity> {
    let mut current = Some(collider);
    while let Some(entity) = current {
        if is_actor(entity) {
            return Some(entity);
        }
        current = parent_of(entity);
    }
    None
}

/// Collapse overlap hits into the distinct actors a melee swing damages.
///
/// `resolve` maps a collider to its target actor, or `None` when the collider
/// does not pass the target filter. The attacker never hits itself.
pub fn melee_targets(
    attacker: Entity,
    hits: impl IntoIterator<Item = Entity>,
    resolve: impl Fn(Entity) -> Option<Entity>,
) -> Vec<Entity> {
    let mut targets = Vec::new();
    for hit in hits {
        let Some(actor) = resolve(hit) else {
            continue;
        };
        if actor != attacker && !targets.contains(&actor) {
            targets.push(actor);
        }
    }
    targets
}

/// Candidate inside `zone` closest to the owner at `origin`.
pub fn nearest_in_zone(
    zone: &CircleZone,
    origin: Vec2,
    facing: f32,
    candidates: impl IntoIterator<Item = (Entity, Vec2)>,
) -> Option<(Entity, Vec2)> {
    candidates
        .into_iter()
        .filter(|(_, position)| zone.contains(origin, facing, *position))
        .min_by(|(_, a), (_, b)| {
            origin
                .distance_squared(*a)
                .total_cmp(&origin.distance_squared(*b))
        })
}

/// What a projectile does with one collider it overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileContact {
    /// Sensors, the owner and the owner's children.
    PassThrough,
    /// Solid geometry or an actor outside the target faction.
    Consumed,
    /// An actor of the target faction: damage it, then consume.
    Hit(Entity),
}

/// Classify an overlap for a projectile owned by `owner`.
///
/// `target_actor` is the collider's owning actor if that actor belongs to the
/// projectile's target faction.
pub fn classify_contact(
    collider: Entity,
    is_sensor: bool,
    owner: Entity,
    target_actor: Option<Entity>,
    parent_of: impl Fn(Entity) -> Option<Entity>,
) -> ProjectileContact {
    if is_sensor || is_owned_by(collider, owner, parent_of) {
        return ProjectileContact::PassThrough;
    }
    match target_actor {
        Some(actor) => ProjectileContact::Hit(actor),
        None => ProjectileContact::Consumed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn hierarchy(pairs: &[(u32, u32)]) -> impl Fn(Entity) -> Option<Entity> {
        let map: HashMap<Entity, Entity> = pairs
            .iter()
            .map(|(child, parent)| (Entity::from_raw(*child), Entity::from_raw(*parent)))
            .collect();
        move |e| map.get(&e).copied()
    }

    #[test]
    fn zone_offset_mirrors_with_facing() {
        let zone = CircleZone::new(Vec2::new(0.5, 0.2), 1.0);
        assert_eq!(zone.center(Vec2::ZERO, 1.0), Vec2::new(0.5, 0.2));
        assert_eq!(zone.center(Vec2::ZERO, -1.0), Vec2::new(-0.5, 0.2));
        assert!(zone.contains(Vec2::ZERO, 1.0, Vec2::new(1.4, 0.2)));
        assert!(!zone.contains(Vec2::ZERO, -1.0, Vec2::new(1.4, 0.2)));
    }

    #[test]
    fn zero_radius_falls_back() {
        let zone = CircleZone::new(Vec2::ZERO, 0.0).or_radius(DEFAULT_DETECT_RADIUS);
        assert_eq!(zone.radius, 3.0);
        let zone = CircleZone::new(Vec2::ZERO, 2.0).or_radius(DEFAULT_DETECT_RADIUS);
        assert_eq!(zone.radius, 2.0);
    }

    #[test]
    fn ownership_walks_the_hierarchy() {
        // 3 -> 2 -> 1
        let parent_of = hierarchy(&[(3, 2), (2, 1)]);
        let owner = Entity::from_raw(1);
        assert!(is_owned_by(Entity::from_raw(3), owner, &parent_of));
        assert!(is_owned_by(owner, owner, &parent_of));
        assert!(!is_owned_by(Entity::from_raw(9), owner, &parent_of));
    }

    #[test]
    fn melee_dedupes_and_skips_attacker() {
        let attacker = Entity::from_raw(1);
        let enemy = Entity::from_raw(5);
        // Colliders 6 and 7 both belong to enemy 5, 8 is scenery.
        let resolve = |e: Entity| match e.index() {
            5..=7 => Some(enemy),
            1 => Some(attacker),
            _ => None,
        };
        let hits = [6, 7, 8, 1].map(Entity::from_raw);
        assert_eq!(melee_targets(attacker, hits, resolve), vec![enemy]);
    }

    #[test]
    fn nearest_in_zone_picks_closest_inside() {
        let zone = CircleZone::new(Vec2::ZERO, 3.0);
        let near = Entity::from_raw(1);
        let far = Entity::from_raw(2);
        let outside = Entity::from_raw(3);
        let candidates = [
            (far, Vec2::new(2.5, 0.0)),
            (outside, Vec2::new(4.0, 0.0)),
            (near, Vec2::new(-1.0, 0.0)),
        ];
        assert_eq!(
            nearest_in_zone(&zone, Vec2::ZERO, 1.0, candidates).map(|(e, _)| e),
            Some(near)
        );
        assert!(nearest_in_zone(&zone, Vec2::ZERO, 1.0, [(outside, Vec2::new(4.0, 0.0))]).is_none());
    }

    #[test]
    fn projectile_contacts() {
        let owner = Entity::from_raw(1);
        let owner_child = Entity::from_raw(2);
        let wall = Entity::from_raw(3);
        let player = Entity::from_raw(4);
        let parent_of = hierarchy(&[(2, 1)]);

        assert_eq!(
            classify_contact(owner_child, false, owner, None, &parent_of),
            ProjectileContact::PassThrough
        );
        assert_eq!(
            classify_contact(player, true, owner, Some(player), &parent_of),
            ProjectileContact::PassThrough
        );
        assert_eq!(
            classify_contact(wall, false, owner, None, &parent_of),
            ProjectileContact::Consumed
        );
        assert_eq!(
            classify_contact(player, false, owner, Some(player), &parent_of),
            ProjectileContact::Hit(player)
        );
    }
}
