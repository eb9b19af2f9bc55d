//! Inventory screen: item grid, equip slots, tabs, weapon readouts and
//! drag and drop.
//!
//! The panel only exists while `PlayState::Inventory` is active. Pointer
//! observers on the cells call into [`EquipSlots`] / [`DragState`] and announce
//! every slot change with [`EquipSlotChanged`].

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::sync::Arc;

use super::status::{attack_max, cooldown_bar, fill_ratio, range_max};
use crate::core::{GameState, PlayState};
use crate::inventory::{
    DragState, EquipSlotChanged, EquipSlots, GridEntry, Inventory, InventoryConfig, InventoryTab,
    ItemData, SlotId,
};
use crate::player::Player;
use crate::weapons::WeaponLoadout;

const PANEL_BG: Color = Color::srgba(0.04, 0.05, 0.04, 0.92);
const CELL_BG: Color = Color::srgb(0.16, 0.17, 0.15);
const SLOT_BG: Color = Color::srgb(0.2, 0.18, 0.14);
const TAB_ACTIVE: Color = Color::srgb(0.85, 0.85, 0.75);
const TAB_IDLE: Color = Color::srgb(0.35, 0.35, 0.3);
const EMPTY_ICON: Color = Color::srgba(1.0, 1.0, 1.0, 0.08);
const CELL_SIZE: f32 = 64.0;
const GRID_COLUMNS: f32 = 5.0;

/// Which tab the grid shows.
#[derive(Resource, Debug, Default)]
pub struct InventoryView {
    pub tab: InventoryTab,
}

/// Item waiting for a choice in the equip dialog.
#[derive(Resource, Debug, Default)]
struct PendingChoice(Option<Arc<ItemData>>);

#[derive(Component)]
struct InventoryPanel;

#[derive(Component)]
struct GridCell(usize);

#[derive(Component)]
struct GridIcon(usize);

#[derive(Component)]
struct GridCount(usize);

#[derive(Component)]
struct EquipSlotCell(SlotId);

#[derive(Component)]
struct EquipSlotText(SlotId);

#[derive(Component)]
struct TabButton(InventoryTab);

#[derive(Component, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Attack,
    Range,
    Cooldown,
}

#[derive(Component)]
struct StatusFill(StatusKind);

#[derive(Component)]
struct StatusText(StatusKind);

#[derive(Component)]
struct DragIcon;

#[derive(Component)]
struct EquipChoiceDialog;

/// `None` cancels the dialog.
#[derive(Component)]
struct ChoiceButton(Option<SlotId>);

pub fn setup_inventory_panel(app: &mut App) {
    app.init_resource::<InventoryView>()
        .init_resource::<PendingChoice>()
        .add_systems(OnEnter(PlayState::Inventory), spawn_inventory_panel)
        .add_systems(OnExit(PlayState::Inventory), close_inventory_panel)
        .add_systems(
            Update,
            toggle_inventory.run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            Update,
            (
                refresh_grid.run_if(
                    resource_changed::<Inventory>.or(resource_changed::<InventoryView>),
                ),
                refresh_equip_slots.run_if(resource_changed::<EquipSlots>),
                refresh_tabs.run_if(resource_changed::<InventoryView>),
                refresh_status_bars,
                move_drag_icon,
            )
                .run_if(in_state(PlayState::Inventory)),
        );
}

/// `I` opens and closes the inventory.
fn toggle_inventory(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<PlayState>>,
    mut next_state: ResMut<NextState<PlayState>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyI) {
        return;
    }
    match state.get() {
        PlayState::Exploring => next_state.set(PlayState::Inventory),
        PlayState::Inventory => next_state.set(PlayState::Exploring),
        PlayState::Paused => {}
    }
}

fn spawn_inventory_panel(
    mut commands: Commands,
    config: Res<InventoryConfig>,
    slots: Res<EquipSlots>,
    mut view: ResMut<InventoryView>,
) {
    view.tab = InventoryTab::Equipment;
    info!("Inventory opened");

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            GlobalZIndex(5),
            InventoryPanel,
        ))
        .with_children(|root| {
            root.spawn((
                Node {
                    flex_direction: FlexDirection::Row,
                    padding: UiRect::all(Val::Px(20.0)),
                    column_gap: Val::Px(24.0),
                    ..default()
                },
                BackgroundColor(PANEL_BG),
            ))
            .with_children(|panel| {
                panel
                    .spawn(Node {
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(8.0),
                        width: Val::Px(260.0),
                        ..default()
                    })
                    .with_children(|left| {
                        spawn_heading(left, "Equipment");
                        for slot in SlotId::ALL {
                            spawn_equip_slot(left, slot, &slots);
                        }
                        spawn_heading(left, "Weapon");
                        for kind in [StatusKind::Attack, StatusKind::Range, StatusKind::Cooldown] {
                            spawn_status_bar(left, kind);
                        }
                    });

                panel
                    .spawn(Node {
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(8.0),
                        ..default()
                    })
                    .with_children(|right| {
                        right
                            .spawn(Node {
                                flex_direction: FlexDirection::Row,
                                column_gap: Val::Px(8.0),
                                ..default()
                            })
                            .with_children(|tabs| {
                                spawn_tab(tabs, "Equipment", InventoryTab::Equipment);
                                spawn_tab(tabs, "Consumables", InventoryTab::Consumables);
                            });

                        right
                            .spawn(Node {
                                flex_direction: FlexDirection::Row,
                                flex_wrap: FlexWrap::Wrap,
                                width: Val::Px((CELL_SIZE + 6.0) * GRID_COLUMNS),
                                ..default()
                            })
                            .with_children(|grid| {
                                for index in 0..config.grid_slot_count {
                                    spawn_grid_cell(grid, index);
                                }
                            });
                    });
            });

            root.spawn((
                Node {
                    width: Val::Px(CELL_SIZE * 0.75),
                    height: Val::Px(CELL_SIZE * 0.75),
                    position_type: PositionType::Absolute,
                    ..default()
                },
                BackgroundColor(EMPTY_ICON),
                Visibility::Hidden,
                PickingBehavior::IGNORE,
                DragIcon,
            ));
        });
}

fn spawn_heading(parent: &mut ChildBuilder, text: &str) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.8, 0.7)),
    ));
}

fn spawn_equip_slot(parent: &mut ChildBuilder, slot: SlotId, slots: &EquipSlots) {
    parent
        .spawn((
            Node {
                height: Val::Px(36.0),
                padding: UiRect::horizontal(Val::Px(8.0)),
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(SLOT_BG),
            EquipSlotCell(slot),
        ))
        .with_children(|cell| {
            cell.spawn((
                Text::new(equip_slot_text(slot, slots)),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.8)),
                EquipSlotText(slot),
            ));
        })
        .observe(drop_on_equip_slot)
        .observe(click_equip_slot);
}

fn equip_slot_text(slot: SlotId, slots: &EquipSlots) -> String {
    let held = slots.get(slot).map_or("(empty)", |item| item.name.as_str());
    format!("{}: {}", slot.label(), held)
}

fn spawn_status_bar(parent: &mut ChildBuilder, kind: StatusKind) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Column,
            ..default()
        })
        .with_children(|column| {
            column.spawn((
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.75, 0.75, 0.7)),
                StatusText(kind),
            ));
            column
                .spawn((
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(10.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                ))
                .with_children(|bg| {
                    bg.spawn((
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.85, 0.6, 0.25)),
                        StatusFill(kind),
                    ));
                });
        });
}

fn spawn_tab(parent: &mut ChildBuilder, label: &str, tab: InventoryTab) {
    parent
        .spawn((
            Node {
                padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                ..default()
            },
            BackgroundColor(TAB_IDLE),
            TabButton(tab),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(label),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.1, 0.1, 0.1)),
            ));
        })
        .observe(
            |trigger: Trigger<Pointer<Click>>,
             tabs: Query<&TabButton>,
             mut view: ResMut<InventoryView>| {
                if let Ok(tab) = tabs.get(trigger.entity()) {
                    view.tab = tab.0;
                }
            },
        );
}

fn spawn_grid_cell(parent: &mut ChildBuilder, index: usize) {
    parent
        .spawn((
            Node {
                width: Val::Px(CELL_SIZE),
                height: Val::Px(CELL_SIZE),
                margin: UiRect::all(Val::Px(3.0)),
                padding: UiRect::all(Val::Px(6.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(CELL_BG),
            GridCell(index),
        ))
        .with_children(|cell| {
            cell.spawn((
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                ImageNode::default().with_color(EMPTY_ICON),
                GridIcon(index),
            ));
            cell.spawn((
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    right: Val::Px(4.0),
                    bottom: Val::Px(2.0),
                    ..default()
                },
                GridCount(index),
            ));
        })
        .observe(click_grid_cell)
        .observe(begin_grid_drag)
        .observe(end_grid_drag);
}

/// The stack shown in grid cell `index` on the current tab.
fn grid_entry(index: usize, inventory: &Inventory, view: &InventoryView) -> Option<GridEntry> {
    inventory.grouped(view.tab).into_iter().nth(index)
}

fn announce(slot: SlotId, slots: &EquipSlots, events: &mut EventWriter<EquipSlotChanged>) {
    events.send(EquipSlotChanged {
        slot,
        item: slots.get(slot).cloned(),
    });
}

/// Left click quick-equips, right click opens the slot choice dialog.
fn click_grid_cell(
    trigger: Trigger<Pointer<Click>>,
    mut commands: Commands,
    cells: Query<&GridCell>,
    panels: Query<Entity, With<InventoryPanel>>,
    dialogs: Query<Entity, With<EquipChoiceDialog>>,
    view: Res<InventoryView>,
    mut inventory: ResMut<Inventory>,
    mut slots: ResMut<EquipSlots>,
    mut pending: ResMut<PendingChoice>,
    mut events: EventWriter<EquipSlotChanged>,
) {
    let Ok(cell) = cells.get(trigger.entity()) else {
        return;
    };
    let Some(entry) = grid_entry(cell.0, &inventory, &view) else {
        return;
    };

    match trigger.event().button {
        PointerButton::Primary => match slots.quick_equip(&mut inventory, &entry.item) {
            Ok(slot) => {
                info!("Equipped {} to {}", entry.item.name, slot.label());
                announce(slot, &slots, &mut events);
            }
            Err(e) => info!("Cannot equip {}: {}", entry.item.name, e),
        },
        PointerButton::Secondary => {
            let Ok(panel) = panels.get_single() else {
                return;
            };
            for dialog in dialogs.iter() {
                commands.entity(dialog).despawn_recursive();
            }
            spawn_equip_choice_dialog(&mut commands, panel, &entry.item);
            pending.0 = Some(entry.item);
        }
        PointerButton::Middle => {}
    }
}

fn begin_grid_drag(
    trigger: Trigger<Pointer<DragStart>>,
    cells: Query<&GridCell>,
    view: Res<InventoryView>,
    inventory: Res<Inventory>,
    mut drag: ResMut<DragState>,
    mut icons: Query<(&mut BackgroundColor, &mut Visibility), With<DragIcon>>,
) {
    if trigger.event().button != PointerButton::Primary {
        return;
    }
    let Ok(cell) = cells.get(trigger.entity()) else {
        return;
    };
    let Some(entry) = grid_entry(cell.0, &inventory, &view) else {
        return;
    };

    let (r, g, b) = entry.item.icon_color;
    drag.begin(cell.0, entry.item);
    for (mut color, mut visibility) in icons.iter_mut() {
        *color = Color::srgba(r, g, b, 0.8).into();
        *visibility = Visibility::Inherited;
    }
}

fn end_grid_drag(
    _trigger: Trigger<Pointer<DragEnd>>,
    mut drag: ResMut<DragState>,
    mut icons: Query<&mut Visibility, With<DragIcon>>,
) {
    drag.end();
    for mut visibility in icons.iter_mut() {
        *visibility = Visibility::Hidden;
    }
}

fn drop_on_equip_slot(
    trigger: Trigger<Pointer<DragDrop>>,
    cells: Query<&EquipSlotCell>,
    mut drag: ResMut<DragState>,
    mut inventory: ResMut<Inventory>,
    mut slots: ResMut<EquipSlots>,
    mut events: EventWriter<EquipSlotChanged>,
) {
    let Ok(cell) = cells.get(trigger.entity()) else {
        return;
    };
    if !drag.is_dragging() {
        return;
    }
    match drag.drop_on(cell.0, &mut slots, &mut inventory) {
        Ok(slot) => {
            info!("Dropped item into {}", slot.label());
            announce(slot, &slots, &mut events);
        }
        Err(e) => info!("Drop refused: {}", e),
    }
}

/// Right click unequips.
fn click_equip_slot(
    trigger: Trigger<Pointer<Click>>,
    cells: Query<&EquipSlotCell>,
    mut inventory: ResMut<Inventory>,
    mut slots: ResMut<EquipSlots>,
    mut events: EventWriter<EquipSlotChanged>,
) {
    if trigger.event().button != PointerButton::Secondary {
        return;
    }
    let Ok(cell) = cells.get(trigger.entity()) else {
        return;
    };
    match slots.unequip(&mut inventory, cell.0) {
        Ok(item) => {
            info!("Unequipped {} from {}", item.name, cell.0.label());
            announce(cell.0, &slots, &mut events);
        }
        Err(e) => debug!("{}", e),
    }
}

fn spawn_equip_choice_dialog(commands: &mut Commands, panel: Entity, item: &ItemData) {
    let dialog = commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                padding: UiRect::all(Val::Px(12.0)),
                ..default()
            },
            BackgroundColor(Color::srgb(0.9, 0.88, 0.78)),
            GlobalZIndex(6),
            EquipChoiceDialog,
        ))
        .with_children(|dialog| {
            dialog.spawn((
                Text::new(item.name.clone()),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.1, 0.1, 0.1)),
            ));
            for slot in SlotId::targets_for(item.item_type) {
                spawn_choice_button(dialog, &format!("Equip to {}", slot.label()), Some(slot));
            }
            spawn_choice_button(dialog, "Cancel", None);
        })
        .id();
    commands.entity(panel).add_child(dialog);
}

fn spawn_choice_button(parent: &mut ChildBuilder, label: &str, slot: Option<SlotId>) {
    parent
        .spawn((
            Node {
                width: Val::Px(200.0),
                height: Val::Px(28.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgb(0.8, 0.8, 0.8)),
            ChoiceButton(slot),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(label),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::BLACK),
            ));
        })
        .observe(choose_equip_slot);
}

fn choose_equip_slot(
    trigger: Trigger<Pointer<Click>>,
    mut commands: Commands,
    buttons: Query<&ChoiceButton>,
    dialogs: Query<Entity, With<EquipChoiceDialog>>,
    mut pending: ResMut<PendingChoice>,
    mut inventory: ResMut<Inventory>,
    mut slots: ResMut<EquipSlots>,
    mut events: EventWriter<EquipSlotChanged>,
) {
    let Ok(choice) = buttons.get(trigger.entity()) else {
        return;
    };
    let item = pending.0.take();

    if let (Some(slot), Some(item)) = (choice.0, item) {
        match slots.equip(&mut inventory, slot, &item) {
            Ok(slot) => {
                info!("Equipped {} to {}", item.name, slot.label());
                announce(slot, &slots, &mut events);
            }
            Err(e) => info!("Cannot equip {}: {}", item.name, e),
        }
    }

    for dialog in dialogs.iter() {
        commands.entity(dialog).despawn_recursive();
    }
}

fn refresh_grid(
    asset_server: Res<AssetServer>,
    view: Res<InventoryView>,
    inventory: Res<Inventory>,
    mut icons: Query<(&mut ImageNode, &GridIcon)>,
    mut counts: Query<(&mut Text, &GridCount)>,
) {
    let entries = inventory.grouped(view.tab);

    for (mut image, icon) in icons.iter_mut() {
        match entries.get(icon.0) {
            Some(entry) => {
                let (r, g, b) = entry.item.icon_color;
                image.color = Color::srgb(r, g, b);
                image.image = entry
                    .item
                    .icon
                    .as_ref()
                    .map(|path| asset_server.load(path.clone()))
                    .unwrap_or_default();
            }
            None => {
                image.color = EMPTY_ICON;
                image.image = Handle::default();
            }
        }
    }

    for (mut text, count) in counts.iter_mut() {
        **text = match entries.get(count.0) {
            Some(entry) if entry.count > 1 => format!("x{}", entry.count),
            _ => String::new(),
        };
    }
}

fn refresh_equip_slots(slots: Res<EquipSlots>, mut texts: Query<(&mut Text, &EquipSlotText)>) {
    for (mut text, slot) in texts.iter_mut() {
        **text = equip_slot_text(slot.0, &slots);
    }
}

fn refresh_tabs(view: Res<InventoryView>, mut tabs: Query<(&mut BackgroundColor, &TabButton)>) {
    for (mut color, tab) in tabs.iter_mut() {
        let tint = if tab.0 == view.tab { TAB_ACTIVE } else { TAB_IDLE };
        *color = BackgroundColor(tint);
    }
}

fn refresh_status_bars(
    players: Query<&WeaponLoadout, With<Player>>,
    mut fills: Query<(&mut Node, &StatusFill)>,
    mut texts: Query<(&mut Text, &StatusText)>,
) {
    let Ok(loadout) = players.get_single() else {
        return;
    };
    let power = loadout.current_attack_power() as f32;
    let range = loadout.current_attack_range();
    let cooldown = loadout.current_attack_cooldown();

    for (mut node, fill) in fills.iter_mut() {
        let ratio = match fill.0 {
            StatusKind::Attack => fill_ratio(power, attack_max(power)),
            StatusKind::Range => fill_ratio(range, range_max(range)),
            StatusKind::Cooldown => {
                let (value, max) = cooldown_bar(cooldown);
                fill_ratio(value, max)
            }
        };
        node.width = Val::Percent(ratio * 100.0);
    }

    for (mut text, status) in texts.iter_mut() {
        **text = match status.0 {
            StatusKind::Attack => format!("Attack: {}", loadout.current_attack_power()),
            StatusKind::Range => format!("Range: {:.1}", range),
            StatusKind::Cooldown => format!("Cooldown: {:.1}s", cooldown),
        };
    }
}

fn move_drag_icon(
    drag: Res<DragState>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut icons: Query<&mut Node, With<DragIcon>>,
) {
    if !drag.is_visible() {
        return;
    }
    let Some(cursor) = windows.get_single().ok().and_then(Window::cursor_position) else {
        return;
    };
    for mut node in icons.iter_mut() {
        node.left = Val::Px(cursor.x - CELL_SIZE * 0.375);
        node.top = Val::Px(cursor.y - CELL_SIZE * 0.375);
    }
}

fn close_inventory_panel(
    mut commands: Commands,
    panels: Query<Entity, With<InventoryPanel>>,
    mut drag: ResMut<DragState>,
    mut pending: ResMut<PendingChoice>,
) {
    for entity in panels.iter() {
        commands.entity(entity).despawn_recursive();
    }
    drag.end();
    pending.0 = None;
    info!("Inventory closed");
}
