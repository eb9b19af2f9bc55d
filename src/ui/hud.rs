//! In-game HUD - health and mana bars plus quick-slot hints.

use bevy::prelude::*;

use crate::combat::{Health, Mana};
use crate::core::GameState;
use crate::inventory::{EquipSlots, SlotId};
use crate::player::Player;

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for health bar fill.
#[derive(Component)]
pub struct HealthBar;

/// Marker for mana bar fill.
#[derive(Component)]
pub struct ManaBar;

/// Text showing what a hotkey slot holds.
#[derive(Component)]
pub struct SlotHint(pub SlotId);

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::Playing), spawn_hud)
        .add_systems(OnExit(GameState::Playing), cleanup_hud)
        .add_systems(
            Update,
            (
                update_health_bar,
                update_mana_bar,
                update_slot_hints.run_if(resource_changed::<EquipSlots>),
            )
                .run_if(in_state(GameState::Playing)),
        );
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands, slots: Res<EquipSlots>) {
    // Top-left corner
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Start,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(20.0)),
                position_type: PositionType::Absolute,
                ..default()
            },
            PickingBehavior::IGNORE,
            HudRoot,
        ))
        .with_children(|parent| {
            spawn_bar(parent, "HP", Color::srgb(0.8, 0.2, 0.2), HealthBar);
            spawn_bar(parent, "MP", Color::srgb(0.25, 0.4, 0.9), ManaBar);

            for (key, slot) in [("1", SlotId::ConsumableA), ("2", SlotId::ConsumableB)] {
                parent.spawn((
                    Text::new(slot_hint_text(key, slot, &slots)),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.75, 0.75, 0.7)),
                    SlotHint(slot),
                ));
            }
        });
}

fn slot_hint_text(key: &str, slot: SlotId, slots: &EquipSlots) -> String {
    let held = slots.get(slot).map_or("-", |item| item.name.as_str());
    format!("[{key}] {held}")
}

/// Spawn a labelled bar. Shared with the inventory panel.
pub fn spawn_bar<M: Component>(parent: &mut ChildBuilder, label: &str, color: Color, bar_marker: M) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            margin: UiRect::bottom(Val::Px(5.0)),
            ..default()
        })
        .with_children(|bar_parent| {
            bar_parent.spawn((
                Text::new(label),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                Node {
                    width: Val::Px(80.0),
                    ..default()
                },
            ));

            bar_parent
                .spawn((
                    Node {
                        width: Val::Px(150.0),
                        height: Val::Px(12.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                ))
                .with_children(|bg| {
                    bg.spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(color),
                        bar_marker,
                    ));
                });
        });
}

/// Update health bar based on player health.
fn update_health_bar(
    player_query: Query<&Health, With<Player>>,
    mut bar_query: Query<&mut Node, With<HealthBar>>,
) {
    let Ok(health) = player_query.get_single() else {
        return;
    };
    let Ok(mut bar) = bar_query.get_single_mut() else {
        return;
    };

    bar.width = Val::Percent(health.percentage() * 100.0);
}

/// Update mana bar based on player mana.
fn update_mana_bar(
    player_query: Query<&Mana, With<Player>>,
    mut bar_query: Query<&mut Node, With<ManaBar>>,
) {
    let Ok(mana) = player_query.get_single() else {
        return;
    };
    let Ok(mut bar) = bar_query.get_single_mut() else {
        return;
    };

    bar.width = Val::Percent(mana.percentage() * 100.0);
}

fn update_slot_hints(slots: Res<EquipSlots>, mut hints: Query<(&mut Text, &SlotHint)>) {
    for (mut text, hint) in hints.iter_mut() {
        let key = match hint.0 {
            SlotId::ConsumableB => "2",
            _ => "1",
        };
        **text = slot_hint_text(key, hint.0, &slots);
    }
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
