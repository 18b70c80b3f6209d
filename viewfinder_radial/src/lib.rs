// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Radial: the cursor-driven radial quick-menu.
//!
//! The radial menu maps compass directions around an anchor point to
//! navigation destinations. It supports three activation methods that all
//! converge on the same open state:
//!
//! - **Press-and-hold**: [`RadialMenu::pointer_down`] arms the menu; once
//!   the pointer has been held past the configured delay,
//!   [`RadialMenu::tick`] promotes it to open.
//! - **Keyboard shortcut** and **explicit click**: [`RadialMenu::open_at`]
//!   opens immediately with the corresponding [`ActivationMethod`].
//!
//! While open, pointer movement outside the dead zone highlights the
//! nearest direction ([`Compass::nearest`] — dot products, no trig).
//! Release over a direction selects it; release inside the dead zone,
//! Escape, or the open-timeout dismisses without selecting. Selection and
//! dismissal are reported as [`RadialSignal`]s carrying the activation
//! method and open-to-resolution latency, which embedders forward to their
//! diagnostics layer.
//!
//! The menu knows nothing about sections or cameras: it resolves gestures
//! to a [`Compass`] direction, and the embedder maps that direction to a
//! destination. Opening the menu while a camera animation is in flight is
//! fine — the menu holds no camera state to conflict with.
//!
//! Like the rest of the workspace, the menu is clock-free: hosts pass a
//! monotonic millisecond timestamp into every time-sensitive call.
//!
//! ## Press-hold-select walkthrough
//!
//! ```
//! use kurbo::Point;
//! use viewfinder_radial::{RadialMenu, RadialSignal};
//! use viewfinder_space::Compass;
//!
//! let mut menu = RadialMenu::default();
//!
//! menu.pointer_down(Point::new(500.0, 300.0), 0.0);
//! assert_eq!(menu.tick(400.0), None); // still arming
//!
//! let opened = menu.tick(850.0); // past the 800ms hold delay
//! assert!(matches!(opened, Some(RadialSignal::Opened { .. })));
//!
//! menu.pointer_move(Point::new(560.0, 300.0)); // highlight east
//! assert_eq!(menu.highlighted(), Some(Compass::East));
//!
//! let signal = menu.pointer_up(Point::new(560.0, 300.0), 1200.0);
//! assert!(matches!(
//!     signal,
//!     Some(RadialSignal::Selected { direction: Compass::East, .. })
//! ));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Point;
use viewfinder_space::Compass;

/// How the radial menu came to be open.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActivationMethod {
    /// Pointer press held past the configured delay.
    HoldPress,
    /// Dedicated keyboard shortcut.
    Shortcut,
    /// Explicit click on an affordance.
    Click,
}

/// Why an open menu went away without a selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DismissReason {
    /// Pointer released inside the dead zone.
    ReleasedInDeadZone,
    /// Cancelled explicitly (Escape or equivalent).
    Cancelled,
    /// Open too long without a resolution.
    TimedOut,
    /// The press moved too far while arming; the gesture is a drag.
    DragStarted,
}

/// Observable transitions of the menu, reported to the embedder.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RadialSignal {
    /// The menu opened.
    Opened {
        /// The activation method that opened it.
        method: ActivationMethod,
    },
    /// A direction was selected; the embedder resolves it to a destination.
    Selected {
        /// The selected compass direction.
        direction: Compass,
        /// The activation method of the session that selected.
        method: ActivationMethod,
        /// Milliseconds from open to selection.
        open_ms: f64,
    },
    /// The menu went away without a selection.
    Dismissed {
        /// Why the menu was dismissed.
        reason: DismissReason,
    },
}

/// Tuning for radial-menu gesture recognition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RadialTuning {
    /// Press-and-hold delay before the menu opens, in milliseconds.
    pub hold_delay_ms: f64,
    /// Radius around the anchor in which no direction is highlighted.
    pub dead_zone: f64,
    /// Milliseconds an open menu waits before dismissing itself.
    pub open_timeout_ms: f64,
}

impl Default for RadialTuning {
    fn default() -> Self {
        Self {
            hold_delay_ms: 800.0,
            dead_zone: 24.0,
            open_timeout_ms: 4000.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum State {
    Idle,
    Arming {
        anchor: Point,
        pressed_at: f64,
    },
    Open {
        anchor: Point,
        opened_at: f64,
        method: ActivationMethod,
        highlighted: Option<Compass>,
    },
}

/// The radial quick-menu state machine.
///
/// See the [crate docs](crate) for the activation and resolution contract.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RadialMenu {
    state: State,
    tuning: RadialTuning,
}

impl Default for RadialMenu {
    fn default() -> Self {
        Self::new(RadialTuning::default())
    }
}

impl RadialMenu {
    /// Creates a menu with the given tuning.
    #[must_use]
    pub fn new(tuning: RadialTuning) -> Self {
        Self {
            state: State::Idle,
            tuning,
        }
    }

    /// Returns `true` while the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open { .. })
    }

    /// Returns the anchor point of an arming or open menu.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        match self.state {
            State::Idle => None,
            State::Arming { anchor, .. } | State::Open { anchor, .. } => Some(anchor),
        }
    }

    /// Returns the currently highlighted direction of an open menu.
    #[must_use]
    pub fn highlighted(&self) -> Option<Compass> {
        match self.state {
            State::Open { highlighted, .. } => highlighted,
            _ => None,
        }
    }

    /// Begins a press-and-hold activation at `pos`.
    ///
    /// Ignored while the menu is already open: the press then participates
    /// in the open menu's highlight/release cycle instead.
    pub fn pointer_down(&mut self, pos: Point, now_ms: f64) {
        if let State::Idle = self.state
            && pos.is_finite()
        {
            self.state = State::Arming {
                anchor: pos,
                pressed_at: now_ms,
            };
        }
    }

    /// Opens the menu immediately at `pos` (shortcut or click activation).
    ///
    /// Any arming press is superseded. Returns the `Opened` signal, or
    /// `None` if the menu was already open or `pos` is malformed.
    pub fn open_at(
        &mut self,
        pos: Point,
        now_ms: f64,
        method: ActivationMethod,
    ) -> Option<RadialSignal> {
        if self.is_open() || !pos.is_finite() {
            return None;
        }
        self.state = State::Open {
            anchor: pos,
            opened_at: now_ms,
            method,
            highlighted: None,
        };
        Some(RadialSignal::Opened { method })
    }

    /// Advances hold-delay and timeout clocks.
    ///
    /// Call once per frame with the current timestamp. Promotes an arming
    /// press to open after the hold delay, and dismisses an open menu after
    /// the open timeout.
    pub fn tick(&mut self, now_ms: f64) -> Option<RadialSignal> {
        match self.state {
            State::Arming { anchor, pressed_at } if now_ms - pressed_at >= self.tuning.hold_delay_ms => {
                self.state = State::Open {
                    anchor,
                    opened_at: now_ms,
                    method: ActivationMethod::HoldPress,
                    highlighted: None,
                };
                Some(RadialSignal::Opened {
                    method: ActivationMethod::HoldPress,
                })
            }
            State::Open { opened_at, .. } if now_ms - opened_at >= self.tuning.open_timeout_ms => {
                self.state = State::Idle;
                Some(RadialSignal::Dismissed {
                    reason: DismissReason::TimedOut,
                })
            }
            _ => None,
        }
    }

    /// Tracks pointer movement.
    ///
    /// While open, updates the highlighted direction (or clears it inside
    /// the dead zone). While arming, movement beyond the dead zone abandons
    /// the hold — the gesture is a drag, not a menu activation.
    pub fn pointer_move(&mut self, pos: Point) -> Option<RadialSignal> {
        if !pos.is_finite() {
            return None;
        }
        match &mut self.state {
            State::Open {
                anchor,
                highlighted,
                ..
            } => {
                let v = pos - *anchor;
                *highlighted = if v.hypot() > self.tuning.dead_zone {
                    Compass::nearest(v)
                } else {
                    None
                };
                None
            }
            State::Arming { anchor, .. } => {
                if (pos - *anchor).hypot() > self.tuning.dead_zone {
                    self.state = State::Idle;
                    Some(RadialSignal::Dismissed {
                        reason: DismissReason::DragStarted,
                    })
                } else {
                    None
                }
            }
            State::Idle => None,
        }
    }

    /// Resolves a pointer release.
    ///
    /// Over an open menu this selects the highlighted direction, or
    /// dismisses if the release lands in the dead zone. Releasing an arming
    /// press before the hold delay quietly returns the menu to idle — the
    /// press was an ordinary click for someone else to handle.
    pub fn pointer_up(&mut self, pos: Point, now_ms: f64) -> Option<RadialSignal> {
        match self.state {
            State::Open {
                anchor,
                opened_at,
                method,
                ..
            } => {
                self.state = State::Idle;
                let direction = if pos.is_finite() {
                    let v = pos - anchor;
                    if v.hypot() > self.tuning.dead_zone {
                        Compass::nearest(v)
                    } else {
                        None
                    }
                } else {
                    None
                };
                match direction {
                    Some(direction) => Some(RadialSignal::Selected {
                        direction,
                        method,
                        open_ms: (now_ms - opened_at).max(0.0),
                    }),
                    None => Some(RadialSignal::Dismissed {
                        reason: DismissReason::ReleasedInDeadZone,
                    }),
                }
            }
            State::Arming { .. } => {
                self.state = State::Idle;
                None
            }
            State::Idle => None,
        }
    }

    /// Moves the keyboard highlight to a direction.
    ///
    /// No-op unless the menu is open.
    pub fn highlight(&mut self, direction: Compass) {
        if let State::Open { highlighted, .. } = &mut self.state {
            *highlighted = Some(direction);
        }
    }

    /// Confirms the highlighted direction from the keyboard.
    pub fn confirm(&mut self, now_ms: f64) -> Option<RadialSignal> {
        if let State::Open {
            opened_at,
            method,
            highlighted: Some(direction),
            ..
        } = self.state
        {
            self.state = State::Idle;
            return Some(RadialSignal::Selected {
                direction,
                method,
                open_ms: (now_ms - opened_at).max(0.0),
            });
        }
        None
    }

    /// Cancels an arming or open menu (Escape or equivalent).
    pub fn cancel(&mut self) -> Option<RadialSignal> {
        match self.state {
            State::Idle => None,
            State::Arming { .. } | State::Open { .. } => {
                self.state = State::Idle;
                Some(RadialSignal::Dismissed {
                    reason: DismissReason::Cancelled,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_menu(at: Point, now_ms: f64) -> RadialMenu {
        let mut menu = RadialMenu::default();
        let opened = menu.open_at(at, now_ms, ActivationMethod::Shortcut);
        assert!(opened.is_some());
        menu
    }

    #[test]
    fn hold_press_opens_after_delay() {
        let mut menu = RadialMenu::default();
        menu.pointer_down(Point::new(500.0, 300.0), 0.0);
        assert!(!menu.is_open());

        assert_eq!(menu.tick(799.0), None);
        assert_eq!(
            menu.tick(800.0),
            Some(RadialSignal::Opened {
                method: ActivationMethod::HoldPress
            })
        );
        assert!(menu.is_open());
        assert_eq!(menu.anchor(), Some(Point::new(500.0, 300.0)));
    }

    #[test]
    fn early_release_is_not_an_activation() {
        let mut menu = RadialMenu::default();
        menu.pointer_down(Point::new(0.0, 0.0), 0.0);
        assert_eq!(menu.pointer_up(Point::new(0.0, 0.0), 300.0), None);
        assert!(!menu.is_open());
        // The hold clock does not keep running after release.
        assert_eq!(menu.tick(2000.0), None);
    }

    #[test]
    fn all_activation_methods_converge() {
        for method in [ActivationMethod::Shortcut, ActivationMethod::Click] {
            let mut menu = RadialMenu::default();
            let signal = menu.open_at(Point::new(10.0, 10.0), 5.0, method);
            assert_eq!(signal, Some(RadialSignal::Opened { method }));
            assert!(menu.is_open());
        }
    }

    #[test]
    fn open_while_open_is_ignored() {
        let mut menu = open_menu(Point::new(0.0, 0.0), 0.0);
        assert_eq!(
            menu.open_at(Point::new(50.0, 50.0), 1.0, ActivationMethod::Click),
            None
        );
        assert_eq!(menu.anchor(), Some(Point::ZERO));
    }

    #[test]
    fn movement_outside_dead_zone_highlights() {
        let mut menu = open_menu(Point::new(100.0, 100.0), 0.0);

        menu.pointer_move(Point::new(100.0, 40.0));
        assert_eq!(menu.highlighted(), Some(Compass::North));

        menu.pointer_move(Point::new(160.0, 160.0));
        assert_eq!(menu.highlighted(), Some(Compass::SouthEast));
    }

    #[test]
    fn movement_inside_dead_zone_clears_highlight() {
        let mut menu = open_menu(Point::new(100.0, 100.0), 0.0);
        menu.pointer_move(Point::new(100.0, 40.0));
        assert!(menu.highlighted().is_some());

        menu.pointer_move(Point::new(105.0, 102.0));
        assert_eq!(menu.highlighted(), None);
    }

    #[test]
    fn release_over_direction_selects_with_latency() {
        let mut menu = open_menu(Point::new(500.0, 300.0), 1000.0);
        menu.pointer_move(Point::new(500.0, 200.0));

        let signal = menu.pointer_up(Point::new(500.0, 200.0), 1250.0);
        assert_eq!(
            signal,
            Some(RadialSignal::Selected {
                direction: Compass::North,
                method: ActivationMethod::Shortcut,
                open_ms: 250.0,
            })
        );
        assert!(!menu.is_open());
    }

    #[test]
    fn release_in_dead_zone_dismisses() {
        let mut menu = open_menu(Point::new(500.0, 300.0), 0.0);
        let signal = menu.pointer_up(Point::new(502.0, 301.0), 100.0);
        assert_eq!(
            signal,
            Some(RadialSignal::Dismissed {
                reason: DismissReason::ReleasedInDeadZone
            })
        );
    }

    #[test]
    fn drag_while_arming_abandons_the_hold() {
        let mut menu = RadialMenu::default();
        menu.pointer_down(Point::new(0.0, 0.0), 0.0);
        let signal = menu.pointer_move(Point::new(200.0, 0.0));
        assert_eq!(
            signal,
            Some(RadialSignal::Dismissed {
                reason: DismissReason::DragStarted
            })
        );
        assert_eq!(menu.tick(5000.0), None);
    }

    #[test]
    fn open_menu_times_out() {
        let mut menu = open_menu(Point::ZERO, 0.0);
        assert_eq!(menu.tick(3999.0), None);
        assert_eq!(
            menu.tick(4000.0),
            Some(RadialSignal::Dismissed {
                reason: DismissReason::TimedOut
            })
        );
        assert!(!menu.is_open());
    }

    #[test]
    fn escape_cancels_arming_and_open() {
        let mut menu = RadialMenu::default();
        assert_eq!(menu.cancel(), None);

        menu.pointer_down(Point::ZERO, 0.0);
        assert_eq!(
            menu.cancel(),
            Some(RadialSignal::Dismissed {
                reason: DismissReason::Cancelled
            })
        );

        let mut menu = open_menu(Point::ZERO, 0.0);
        assert!(menu.cancel().is_some());
        assert!(!menu.is_open());
    }

    #[test]
    fn keyboard_highlight_and_confirm() {
        let mut menu = open_menu(Point::ZERO, 0.0);
        assert_eq!(menu.confirm(10.0), None); // nothing highlighted yet

        menu.highlight(Compass::West);
        let signal = menu.confirm(40.0);
        assert_eq!(
            signal,
            Some(RadialSignal::Selected {
                direction: Compass::West,
                method: ActivationMethod::Shortcut,
                open_ms: 40.0,
            })
        );
    }

    #[test]
    fn malformed_pointer_input_is_inert() {
        let mut menu = RadialMenu::default();
        menu.pointer_down(Point::new(f64::NAN, 0.0), 0.0);
        assert_eq!(menu.anchor(), None);

        let mut menu = open_menu(Point::ZERO, 0.0);
        menu.pointer_move(Point::new(f64::NAN, f64::NAN));
        assert_eq!(menu.highlighted(), None);
        let signal = menu.pointer_up(Point::new(f64::INFINITY, 0.0), 10.0);
        assert_eq!(
            signal,
            Some(RadialSignal::Dismissed {
                reason: DismissReason::ReleasedInDeadZone
            })
        );
    }
}
