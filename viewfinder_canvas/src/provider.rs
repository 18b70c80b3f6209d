// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canvas state provider.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;
use smallvec::SmallVec;

use viewfinder_motion::{CameraDrive, DriveStart, MoveKind};
use viewfinder_perf::{
    InteractionRecorder, QualityGovernor, QualityLevel, classify,
};
use viewfinder_queue::{QueueStats, UpdateQueue};
use viewfinder_radial::{ActivationMethod, RadialMenu, RadialSignal};
use viewfinder_sections::{DetailLevel, SectionId, SectionLayout};
use viewfinder_space::{CameraPose, CanvasBounds, Viewframe};

use crate::config::drive_policy_for;
use crate::keys::command_for;
use crate::{
    CanvasAction, CanvasConfig, CanvasEvent, EventMask, MoveTarget, NavCommand, NavKey,
    SubscriptionId, UnknownSection,
};

/// Snapshot of the provider-owned state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasState {
    /// Current committed camera pose.
    pub pose: CameraPose,
    /// Currently focused section, if navigation has a section target.
    pub focus: Option<SectionId>,
    /// Current quality level.
    pub quality: QualityLevel,
}

/// Diagnostic snapshot for debug overlays and minimaps.
#[derive(Copy, Clone, Debug)]
pub struct CanvasDebugInfo {
    /// Provider state.
    pub state: CanvasState,
    /// Update queue counters.
    pub queue: QueueStats,
    /// Whether a camera animation is in flight.
    pub animating: bool,
    /// Kind of the in-flight animation, if any.
    pub motion_kind: Option<MoveKind>,
    /// Rolling average frame rate, once the sample window is full.
    pub average_fps: Option<f64>,
    /// Whether the radial menu is open.
    pub radial_open: bool,
    /// Total recorded navigation interactions.
    pub interactions: u64,
}

/// Inline capacity for per-frame scratch buffers.
const FRAME_SCRATCH: usize = 8;

struct Subscriber {
    id: SubscriptionId,
    mask: EventMask,
    callback: Box<dyn FnMut(&CanvasEvent)>,
}

/// Owns all navigation state and multiplexes every input source onto the
/// frame boundary.
///
/// The provider is the single writer of [`CanvasState`]. Every mutation —
/// pointer gestures, keyboard commands, radial selections, per-frame camera
/// commits, quality changes — flows through the internal update queue and
/// is applied during [`frame`](Self::frame), in priority order, at most
/// once per frame. Subscribers are notified synchronously within the same
/// flush.
///
/// One instance per canvas; the embedder owns it and calls:
///
/// - [`frame`](Self::frame) once per animation frame with the frame's
///   delta time,
/// - the pointer/key methods from its input events,
/// - [`navigate_to`](Self::navigate_to) from any external navigation UI.
///
/// # Example
///
/// ```
/// use viewfinder_canvas::{CanvasConfig, CanvasProvider};
/// use viewfinder_motion::MoveKind;
/// use viewfinder_sections::SectionLayout;
///
/// let mut provider = CanvasProvider::new(SectionLayout::portfolio(), CanvasConfig::default());
///
/// provider.navigate_to("gallery", MoveKind::DollyZoom).unwrap();
/// for _ in 0..200 {
///     provider.frame(16.0);
/// }
/// assert!(!provider.is_animating());
///
/// let gallery = provider.layout().id("gallery").unwrap();
/// let focus = provider.layout().get(gallery).unwrap().focus();
/// assert_eq!(provider.state().pose, focus);
/// ```
pub struct CanvasProvider {
    layout: SectionLayout,
    view: Viewframe,
    state: CanvasState,
    queue: UpdateQueue<CanvasAction>,
    drive: CameraDrive,
    menu: RadialMenu,
    governor: QualityGovernor,
    recorder: InteractionRecorder,
    subscribers: Vec<Subscriber>,
    next_subscription: u64,
    clock_ms: f64,
    last_pointer: Option<Point>,
    pan_step_px: f64,
    zoom_step_factor: f64,
}

impl CanvasProvider {
    /// Creates a provider over a section layout.
    ///
    /// The camera starts at the first registered section's focus pose, and
    /// the quality level starts at the classified device tier's
    /// recommendation (which is also the recovery ceiling).
    #[must_use]
    pub fn new(layout: SectionLayout, config: CanvasConfig) -> Self {
        let quality = classify(config.signals).initial_quality();
        let mut drive = CameraDrive::new(config.motion);
        drive.set_policy(drive_policy_for(quality));

        // Layouts are never empty by construction.
        let (first_id, first) = match layout.iter().next() {
            Some(entry) => (entry.0, *entry.1),
            None => unreachable!(),
        };
        let state = CanvasState {
            pose: layout.bounds().clamp(first.focus()),
            focus: Some(first_id),
            quality,
        };

        Self {
            layout,
            view: Viewframe::new(config.view_size),
            state,
            queue: UpdateQueue::new(config.queue_len),
            drive,
            menu: RadialMenu::new(config.radial),
            governor: QualityGovernor::new(quality, config.governor),
            recorder: InteractionRecorder::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
            clock_ms: 0.0,
            last_pointer: None,
            pan_step_px: config.pan_step_px,
            zoom_step_factor: if config.zoom_step_factor.is_finite() && config.zoom_step_factor > 1.0
            {
                config.zoom_step_factor
            } else {
                1.25
            },
        }
    }

    /// Returns the current provider state.
    #[must_use]
    pub fn state(&self) -> CanvasState {
        self.state
    }

    /// Returns the section layout.
    #[must_use]
    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    /// Returns the view frame used for coordinate conversion.
    #[must_use]
    pub fn view(&self) -> Viewframe {
        self.view
    }

    /// Returns `true` while a camera animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.drive.is_animating()
    }

    /// Returns `true` while the radial menu is open.
    #[must_use]
    pub fn radial_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Returns the detail level sections should render at the current zoom.
    #[must_use]
    pub fn detail_level(&self) -> DetailLevel {
        DetailLevel::for_scale(self.state.pose.scale)
    }

    /// Returns the interaction diagnostics recorder.
    #[must_use]
    pub fn interactions(&self) -> &InteractionRecorder {
        &self.recorder
    }

    /// Returns a diagnostic snapshot.
    #[must_use]
    pub fn debug_info(&self) -> CanvasDebugInfo {
        CanvasDebugInfo {
            state: self.state,
            queue: self.queue.stats(),
            animating: self.drive.is_animating(),
            motion_kind: self.drive.kind(),
            average_fps: self.governor.average_fps(),
            radial_open: self.menu.is_open(),
            interactions: self.recorder.total(),
        }
    }

    /// Registers a subscriber for the event classes in `mask`.
    ///
    /// Callbacks run synchronously during the frame flush that produced the
    /// event, in subscription order.
    pub fn subscribe(
        &mut self,
        mask: EventMask,
        callback: impl FnMut(&CanvasEvent) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push(Subscriber {
            id,
            mask,
            callback: Box::new(callback),
        });
        id
    }

    /// Removes a subscriber. Returns `true` if it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|sub| sub.id != id);
        self.subscribers.len() != before
    }

    /// Requests navigation to a named section.
    ///
    /// This is the single imperative entry point for external navigation
    /// UI; keyboard jumps and radial selections go through the same path.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownSection`] if `name` is not in the layout — a
    /// configuration error for the application's error boundary.
    pub fn navigate_to(&mut self, name: &str, kind: MoveKind) -> Result<(), UnknownSection> {
        let id = self.layout.id(name).ok_or_else(|| UnknownSection::new(name))?;
        self.dispatch(CanvasAction::RequestMove {
            target: MoveTarget::Section(id),
            kind,
        });
        Ok(())
    }

    /// Enqueues an action at its intrinsic priority.
    ///
    /// The action is applied during the next [`frame`](Self::frame) flush,
    /// never immediately.
    pub fn dispatch(&mut self, action: CanvasAction) {
        let priority = action.priority();
        self.queue.enqueue(action, priority);
    }

    /// Advances one cooperative frame.
    ///
    /// `dt_ms` is the elapsed time since the previous frame. One call:
    /// advances the radial menu's clocks, advances the camera drive
    /// (enqueueing its commit at high priority), flushes the update queue
    /// in priority order, notifies subscribers, and feeds the frame
    /// duration to the quality governor.
    pub fn frame(&mut self, dt_ms: f64) {
        let dt = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
        self.clock_ms += dt;

        if let Some(signal) = self.menu.tick(self.clock_ms) {
            self.on_radial(signal);
        }

        let was_animating = self.drive.is_animating();
        if let Some(pose) = self.drive.tick(dt) {
            self.dispatch(CanvasAction::CommitPose(pose));
        }

        let mut actions: SmallVec<[CanvasAction; FRAME_SCRATCH]> = SmallVec::new();
        self.queue.flush(|action| actions.push(action));

        let mut events: SmallVec<[CanvasEvent; FRAME_SCRATCH]> = SmallVec::new();
        for action in actions {
            self.apply(action, &mut events);
        }
        if was_animating && !self.drive.is_animating() {
            events.push(CanvasEvent::MotionSettled);
        }

        for event in &events {
            self.notify(event);
        }

        if let Some(change) = self.governor.sample(dt) {
            self.dispatch(CanvasAction::SetQuality(change.to));
        }
    }

    /// Forwards a pointer press.
    pub fn pointer_down(&mut self, pos: Point) {
        if pos.is_finite() {
            self.last_pointer = Some(pos);
        }
        self.menu.pointer_down(pos, self.clock_ms);
    }

    /// Forwards pointer movement.
    pub fn pointer_move(&mut self, pos: Point) {
        if pos.is_finite() {
            self.last_pointer = Some(pos);
        }
        if let Some(signal) = self.menu.pointer_move(pos) {
            self.on_radial(signal);
        }
    }

    /// Forwards a pointer release.
    pub fn pointer_up(&mut self, pos: Point) {
        if let Some(signal) = self.menu.pointer_up(pos, self.clock_ms) {
            self.on_radial(signal);
        }
    }

    /// Zooms by `factor` keeping the screen point `anchor` fixed.
    ///
    /// The canonical wiring for wheel and pinch input.
    pub fn zoom_about(&mut self, factor: f64, anchor: Point) {
        self.dispatch(CanvasAction::ZoomAbout { factor, anchor });
    }

    /// Opens the radial menu by shortcut or explicit click.
    ///
    /// The menu anchors at the last known pointer position, falling back to
    /// the view center for keyboard-only sessions.
    pub fn open_radial(&mut self, method: ActivationMethod) {
        let anchor = self.last_pointer.unwrap_or_else(|| self.view.center());
        if let Some(signal) = self.menu.open_at(anchor, self.clock_ms, method) {
            self.on_radial(signal);
        }
    }

    /// Handles a decoded navigation key.
    ///
    /// While the radial menu is open, arrows move its highlight and Enter
    /// confirms; otherwise arrows pan and digits jump. Both paths end in
    /// the same movement requests as pointer navigation.
    pub fn key(&mut self, key: NavKey) {
        let Some(command) = command_for(key, self.menu.is_open()) else {
            return;
        };
        self.command(command);
    }

    /// Executes a navigation command.
    pub fn command(&mut self, command: NavCommand) {
        match command {
            NavCommand::PanStep(direction) => {
                self.dispatch(CanvasAction::PanBy(direction.unit() * self.pan_step_px));
            }
            NavCommand::ZoomStep(steps) => {
                self.dispatch(CanvasAction::ZoomStep(steps));
            }
            NavCommand::JumpToIndex(index) => {
                let id = self.layout.iter().nth(index).map(|(id, _)| id);
                if let Some(id) = id {
                    self.dispatch(CanvasAction::RequestMove {
                        target: MoveTarget::Section(id),
                        kind: MoveKind::PanTilt,
                    });
                }
            }
            NavCommand::OpenRadial => self.open_radial(ActivationMethod::Shortcut),
            NavCommand::HighlightRadial(direction) => self.menu.highlight(direction),
            NavCommand::ConfirmRadial => {
                if let Some(signal) = self.menu.confirm(self.clock_ms) {
                    self.on_radial(signal);
                }
            }
            NavCommand::CancelRadial => {
                let _ = self.menu.cancel();
            }
        }
    }

    fn bounds(&self) -> CanvasBounds {
        self.layout.bounds()
    }

    /// The section radial directions are resolved from: the focused one,
    /// or whichever is nearest the camera after free panning.
    fn current_section(&self) -> Option<SectionId> {
        if self.state.focus.is_some() {
            return self.state.focus;
        }
        let center = self.state.pose.center;
        self.layout
            .iter()
            .min_by(|(_, a), (_, b)| {
                let da = (a.rect().center() - center).hypot();
                let db = (b.rect().center() - center).hypot();
                da.total_cmp(&db)
            })
            .map(|(id, _)| id)
    }

    fn on_radial(&mut self, signal: RadialSignal) {
        match signal {
            RadialSignal::Opened { .. } | RadialSignal::Dismissed { .. } => {}
            RadialSignal::Selected {
                direction,
                method,
                open_ms,
            } => {
                self.dispatch(CanvasAction::Note {
                    label: method_label(method),
                    latency_ms: open_ms,
                });
                if let Some(from) = self.current_section()
                    && let Some(target) = self.layout.target_in_direction(from, direction)
                {
                    self.dispatch(CanvasAction::RequestMove {
                        target: MoveTarget::Section(target),
                        kind: MoveKind::PanTilt,
                    });
                }
            }
        }
    }

    fn apply(&mut self, action: CanvasAction, events: &mut SmallVec<[CanvasEvent; FRAME_SCRATCH]>) {
        match action {
            CanvasAction::CommitPose(pose) => {
                let clamped = self.bounds().clamp(pose);
                if clamped != self.state.pose {
                    self.state.pose = clamped;
                    events.push(CanvasEvent::PoseChanged(clamped));
                }
            }
            CanvasAction::RequestMove { target, kind } => {
                let (destination, focus) = match target {
                    MoveTarget::Section(id) => match self.layout.get(id) {
                        Some(section) => (section.focus(), Some(id)),
                        None => return,
                    },
                    MoveTarget::Pose(pose) => (pose, None),
                };
                if let Some(id) = focus
                    && self.state.focus != Some(id)
                {
                    self.state.focus = Some(id);
                    events.push(CanvasEvent::FocusChanged(Some(id)));
                }
                match self
                    .drive
                    .request(self.state.pose, destination, kind, &self.bounds())
                {
                    DriveStart::Instant(pose) => {
                        if pose != self.state.pose {
                            self.state.pose = pose;
                            events.push(CanvasEvent::PoseChanged(pose));
                        }
                    }
                    DriveStart::Animating { duration_ms } => {
                        events.push(CanvasEvent::MotionStarted {
                            kind: self.drive.kind().unwrap_or(kind),
                            duration_ms,
                        });
                    }
                }
            }
            CanvasAction::PanBy(delta) => {
                // Free panning drops the section focus.
                if self.state.focus.is_some() {
                    self.state.focus = None;
                    events.push(CanvasEvent::FocusChanged(None));
                }
                let scale = self.state.pose.scale;
                let destination = CameraPose::new(
                    self.state.pose.center + delta / scale,
                    scale,
                );
                self.apply(
                    CanvasAction::RequestMove {
                        target: MoveTarget::Pose(destination),
                        kind: MoveKind::PanTilt,
                    },
                    events,
                );
            }
            CanvasAction::ZoomAbout { factor, anchor } => {
                if !factor.is_finite() || factor <= 0.0 || !anchor.is_finite() {
                    return;
                }
                let pose = self.state.pose;
                let bounds = self.bounds();
                let canvas_pt = self.view.screen_to_canvas(anchor, pose);
                let new_scale = (pose.scale * factor).clamp(bounds.min_scale(), bounds.max_scale());
                // Choose the center that keeps `canvas_pt` under `anchor`
                // at the new scale.
                let offset = anchor - self.view.center();
                let destination = CameraPose::new(canvas_pt - offset / new_scale, new_scale);
                let kind = if factor >= 1.0 {
                    MoveKind::ZoomIn
                } else {
                    MoveKind::ZoomOut
                };
                self.apply(
                    CanvasAction::RequestMove {
                        target: MoveTarget::Pose(destination),
                        kind,
                    },
                    events,
                );
            }
            CanvasAction::SetFocus(focus) => {
                if focus != self.state.focus {
                    self.state.focus = focus;
                    events.push(CanvasEvent::FocusChanged(focus));
                }
            }
            CanvasAction::ZoomStep(steps) => {
                let factor = self.zoom_step_factor;
                let mut scale = self.state.pose.scale;
                for _ in 0..steps.unsigned_abs() {
                    if steps > 0 {
                        scale *= factor;
                    } else {
                        scale /= factor;
                    }
                }
                let destination = CameraPose::new(self.state.pose.center, scale);
                let kind = if steps >= 0 {
                    MoveKind::ZoomIn
                } else {
                    MoveKind::ZoomOut
                };
                self.apply(
                    CanvasAction::RequestMove {
                        target: MoveTarget::Pose(destination),
                        kind,
                    },
                    events,
                );
            }
            CanvasAction::SetQuality(level) => {
                if level != self.state.quality {
                    self.state.quality = level;
                    self.drive.set_policy(drive_policy_for(level));
                    events.push(CanvasEvent::QualityChanged(level));
                }
            }
            CanvasAction::Note { label, latency_ms } => {
                self.recorder.record(label, latency_ms);
            }
        }
    }

    fn notify(&mut self, event: &CanvasEvent) {
        let bit = event.mask();
        for sub in &mut self.subscribers {
            if sub.mask.contains(bit) {
                (sub.callback)(event);
            }
        }
    }
}

impl fmt::Debug for CanvasProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasProvider")
            .field("state", &self.state)
            .field("queue", &self.queue.stats())
            .field("animating", &self.drive.is_animating())
            .field("radial_open", &self.menu.is_open())
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

fn method_label(method: ActivationMethod) -> &'static str {
    match method {
        ActivationMethod::HoldPress => "radial.hold-press",
        ActivationMethod::Shortcut => "radial.shortcut",
        ActivationMethod::Click => "radial.click",
    }
}
