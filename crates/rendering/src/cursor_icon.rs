//! Applies [`desired_cursor`] to the primary window.
//!
//! Hover systems only describe what is under the pointer; this is the one
//! place that touches the window's cursor, and only when the wanted icon
//! actually changes.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, SystemCursorIcon};
use bevy::winit::cursor::CursorIcon;

use grove::selection::{desired_cursor, CursorKind, HoverState};

pub fn system_icon(kind: CursorKind) -> SystemCursorIcon {
    match kind {
        CursorKind::Default => SystemCursorIcon::Default,
        CursorKind::Pointer => SystemCursorIcon::Pointer,
    }
}

pub fn apply_cursor_icon(
    mut commands: Commands,
    hover: Res<HoverState>,
    window_q: Query<Entity, With<PrimaryWindow>>,
    mut applied: Local<Option<CursorKind>>,
) {
    let wanted = desired_cursor(&hover);
    if *applied == Some(wanted) {
        return;
    }
    let Ok(window) = window_q.get_single() else {
        return;
    };
    commands
        .entity(window)
        .insert(CursorIcon::from(system_icon(wanted)));
    *applied = Some(wanted);
}
