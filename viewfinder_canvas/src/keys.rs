// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard navigation commands.
//!
//! Keyboard input resolves to the same movement requests as pointer input —
//! there is no separate code path, so a keyboard-only session reaches
//! byte-identical poses.

use viewfinder_space::Compass;

/// A key of interest to canvas navigation, already decoded by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
    /// Arrow left.
    ArrowLeft,
    /// Arrow right.
    ArrowRight,
    /// `+` / `=`.
    Plus,
    /// `-`.
    Minus,
    /// Digit row `1`–`9`: jump directly to a section.
    Digit(u8),
    /// Space: open the radial menu.
    Space,
    /// Enter: confirm the radial highlight.
    Enter,
    /// Escape: dismiss the radial menu.
    Escape,
}

/// A decoded navigation command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavCommand {
    /// Pan one step in a direction.
    PanStep(Compass),
    /// Zoom in (positive) or out (negative) by steps.
    ZoomStep(i32),
    /// Jump to the section at a registration index.
    JumpToIndex(usize),
    /// Open the radial menu (shortcut activation).
    OpenRadial,
    /// Move the radial highlight.
    HighlightRadial(Compass),
    /// Confirm the radial highlight.
    ConfirmRadial,
    /// Dismiss the radial menu.
    CancelRadial,
}

/// Maps a key to a command.
///
/// `radial_open` selects between the two binding sets: while the menu is
/// open, arrows move the highlight and Enter confirms; otherwise arrows pan
/// the canvas.
#[must_use]
pub fn command_for(key: NavKey, radial_open: bool) -> Option<NavCommand> {
    if radial_open {
        return match key {
            NavKey::ArrowUp => Some(NavCommand::HighlightRadial(Compass::North)),
            NavKey::ArrowDown => Some(NavCommand::HighlightRadial(Compass::South)),
            NavKey::ArrowLeft => Some(NavCommand::HighlightRadial(Compass::West)),
            NavKey::ArrowRight => Some(NavCommand::HighlightRadial(Compass::East)),
            NavKey::Enter => Some(NavCommand::ConfirmRadial),
            NavKey::Escape | NavKey::Space => Some(NavCommand::CancelRadial),
            _ => None,
        };
    }
    match key {
        NavKey::ArrowUp => Some(NavCommand::PanStep(Compass::North)),
        NavKey::ArrowDown => Some(NavCommand::PanStep(Compass::South)),
        NavKey::ArrowLeft => Some(NavCommand::PanStep(Compass::West)),
        NavKey::ArrowRight => Some(NavCommand::PanStep(Compass::East)),
        NavKey::Plus => Some(NavCommand::ZoomStep(1)),
        NavKey::Minus => Some(NavCommand::ZoomStep(-1)),
        NavKey::Digit(0) => None,
        NavKey::Digit(n) => Some(NavCommand::JumpToIndex(usize::from(n) - 1)),
        NavKey::Space => Some(NavCommand::OpenRadial),
        NavKey::Enter | NavKey::Escape => None,
    }
}
