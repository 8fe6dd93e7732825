//! Pointer gesture classification.
//!
//! Mouse, pen and touch input arrive as one pointer stream (down / move / up /
//! cancel). Each press starts a session whose kind is fixed at press time by
//! a priority-ordered classifier:
//!
//! 1. second touch point      -> pinch
//! 2. single pointer, zoomed  -> drag-pan
//! 3. single pointer, at rest, main image, several images -> swipe candidate
//! 4. anything else           -> tap candidate
//!
//! Releases without travel become taps, which resolve to double-tap zoom or
//! open-viewer. Hover over the main image is handled separately since it has
//! no press.

use crate::points::Point;
use crate::transforms::HoverZone;
use crate::viewport::{Direction, IndexChange, ViewportState};
use serde::{Deserialize, Serialize};

/// Which viewer element received the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    /// Inline product image on the product page.
    Main,
    /// Full-screen modal viewer.
    Fullscreen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
}

impl PointerKind {
    /// Map a DOM `PointerEvent.pointerType`. Unknown types behave like a mouse.
    pub fn from_pointer_type(pointer_type: &str) -> Self {
        match pointer_type {
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Mouse,
        }
    }

    /// Only devices that can hover without pressing drive hover zones.
    pub fn can_hover(&self) -> bool {
        !matches!(self, PointerKind::Touch)
    }
}

/// One pointer sample, in surface-relative CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub id: i32,
    pub kind: PointerKind,
    pub position: Point<f64>,
}

impl PointerInput {
    pub fn new(id: i32, kind: PointerKind, x: f64, y: f64) -> Self {
        Self {
            id,
            kind,
            position: Point::new(x, y),
        }
    }
}

/// The classified outcome of an input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    Navigated(IndexChange),
    ZoomChanged(f64),
    Panned(Point<f64>),
    ZoomToggled(f64),
    OpenViewer,
    CloseViewer,
    HoverZoneEntered(HoverZone),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SessionKind {
    /// Pointer(s) still down after a pinch ended; waits for a drag or release.
    Idle,
    /// Can only become a tap.
    Pending { start: Point<f64> },
    Swipe { start: Point<f64>, locked: bool },
    Drag { start: Point<f64>, anchor: Point<f64> },
    Pinch { start_distance: f64, start_zoom: f64 },
}

impl SessionKind {
    fn start(&self) -> Option<Point<f64>> {
        match self {
            SessionKind::Pending { start }
            | SessionKind::Swipe { start, .. }
            | SessionKind::Drag { start, .. } => Some(*start),
            SessionKind::Idle | SessionKind::Pinch { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct GestureSession {
    surface: Surface,
    kind: SessionKind,
    /// Moved beyond the tap slop at some point.
    travelled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActivePointer {
    id: i32,
    kind: PointerKind,
    position: Point<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureInterpreter {
    session: Option<GestureSession>,
    pointers: Vec<ActivePointer>,
    hover_zone: Option<HoverZone>,
}

impl GestureInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while any pointer of a session is down.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_pinching(&self) -> bool {
        matches!(
            self.session,
            Some(GestureSession {
                kind: SessionKind::Pinch { .. },
                ..
            })
        )
    }

    pub fn hover_zone(&self) -> Option<HoverZone> {
        self.hover_zone
    }

    /// Forget the hover zone; any index change outside hover calls this.
    pub fn clear_hover(&mut self) {
        self.hover_zone = None;
    }

    /// Drop all in-flight state (viewer closed, image set replaced).
    pub fn reset(&mut self) {
        self.session = None;
        self.pointers.clear();
        self.hover_zone = None;
    }

    fn pointer_index(&self, id: i32) -> Option<usize> {
        self.pointers.iter().position(|p| p.id == id)
    }

    pub fn pointer_down(
        &mut self,
        viewport: &mut ViewportState,
        surface: Surface,
        input: PointerInput,
    ) -> Option<GestureAction> {
        if let Some(i) = self.pointer_index(input.id) {
            self.pointers[i].position = input.position;
            return None;
        }

        let starts_pinch = input.kind == PointerKind::Touch
            && self.pointers.len() == 1
            && self.pointers[0].kind == PointerKind::Touch;

        if !self.pointers.is_empty() && !starts_pinch {
            log::trace!("Ignoring extra pointer {} during active session", input.id);
            return None;
        }

        self.pointers.push(ActivePointer {
            id: input.id,
            kind: input.kind,
            position: input.position,
        });

        let start = input.position;
        let kind = if starts_pinch {
            let start_distance = self.pointers[0].position.distance_to(&start);
            SessionKind::Pinch {
                start_distance,
                start_zoom: viewport.zoom_level(),
            }
        } else if viewport.is_zoomed() {
            SessionKind::Drag {
                start,
                anchor: start.sub(&viewport.pan_offset()),
            }
        } else if surface == Surface::Main && viewport.image_count() > 1 {
            SessionKind::Swipe {
                start,
                locked: false,
            }
        } else {
            SessionKind::Pending { start }
        };

        // A pinch keeps the surface of the first finger.
        let surface = self.session.map_or(surface, |s| s.surface);
        log::debug!("Gesture session on {:?}: {:?}", surface, kind);
        self.session = Some(GestureSession {
            surface,
            kind,
            travelled: false,
        });
        None
    }

    pub fn pointer_move(
        &mut self,
        viewport: &mut ViewportState,
        input: PointerInput,
    ) -> Option<GestureAction> {
        let i = self.pointer_index(input.id)?;
        self.pointers[i].position = input.position;
        let mut session = self.session?;
        let slop = viewport.config().swipe_lock_px;
        let pos = input.position;

        if session.kind == SessionKind::Idle {
            if self.pointers.len() == 1 && viewport.is_zoomed() {
                // Downgraded pinch: the remaining finger starts a fresh drag.
                session.kind = SessionKind::Drag {
                    start: pos,
                    anchor: pos.sub(&viewport.pan_offset()),
                };
                session.travelled = true;
                self.session = Some(session);
                log::debug!("Remaining pointer {} resumes as drag", input.id);
            }
            return None;
        }

        let action = match &mut session.kind {
            SessionKind::Idle => None,
            SessionKind::Pending { start } => {
                session.travelled |= start.distance_to(&pos) > slop;
                None
            }
            SessionKind::Swipe { start, locked } => {
                let delta = pos.sub(start);
                let (dx, dy) = (delta.x().abs(), delta.y().abs());
                if !*locked && dx > dy && dx > slop {
                    *locked = true;
                    log::trace!("Swipe locked after {}px", dx);
                }
                session.travelled |= start.distance_to(&pos) > slop;
                None
            }
            SessionKind::Drag { start, anchor } => {
                session.travelled |= start.distance_to(&pos) > slop;
                viewport
                    .set_pan(pos.sub(anchor))
                    .map(GestureAction::Panned)
            }
            SessionKind::Pinch {
                start_distance,
                start_zoom,
            } => {
                if self.pointers.len() < 2 || *start_distance <= 0.0 {
                    None
                } else {
                    let distance = self.pointers[0]
                        .position
                        .distance_to(&self.pointers[1].position);
                    let scale = distance / *start_distance;
                    viewport
                        .set_zoom(*start_zoom * scale)
                        .map(GestureAction::ZoomChanged)
                }
            }
        };

        self.session = Some(session);
        action
    }

    pub fn pointer_up(
        &mut self,
        viewport: &mut ViewportState,
        input: PointerInput,
        now_ms: f64,
    ) -> Option<GestureAction> {
        let i = self.pointer_index(input.id)?;
        self.pointers.remove(i);
        let mut session = self.session.take()?;
        let slop = viewport.config().swipe_lock_px;
        if let Some(start) = session.kind.start() {
            session.travelled |= start.distance_to(&input.position) > slop;
        }

        match session.kind {
            SessionKind::Pinch { .. } | SessionKind::Idle => {
                if !self.pointers.is_empty() {
                    log::debug!("Pinch ended; {} pointer(s) remain", self.pointers.len());
                    self.session = Some(GestureSession {
                        kind: SessionKind::Idle,
                        ..session
                    });
                }
                None
            }
            SessionKind::Swipe { start, locked } => {
                let delta = input.position.sub(&start);
                let (dx, dy) = (*delta.x(), *delta.y());
                let commit = viewport.config().swipe_commit_px;
                if dx.abs() > commit && dx.abs() > dy.abs() {
                    let direction = if dx < 0.0 {
                        Direction::Next
                    } else {
                        Direction::Prev
                    };
                    let change = viewport.navigate(direction)?;
                    viewport.record_swipe(now_ms);
                    self.hover_zone = None;
                    log::debug!("Swipe {:?} ({}px)", direction, dx);
                    Some(GestureAction::Navigated(change))
                } else if locked || session.travelled {
                    None
                } else {
                    self.tap(viewport, session.surface, now_ms)
                }
            }
            SessionKind::Drag { .. } | SessionKind::Pending { .. } => {
                if session.travelled {
                    None
                } else {
                    self.tap(viewport, session.surface, now_ms)
                }
            }
        }
    }

    /// Abort without classifying. The pointer is forgotten.
    pub fn pointer_cancel(&mut self, input: PointerInput) {
        let Some(i) = self.pointer_index(input.id) else {
            return;
        };
        self.pointers.remove(i);
        self.session = match self.session {
            Some(session) if !self.pointers.is_empty() => Some(GestureSession {
                kind: SessionKind::Idle,
                ..session
            }),
            _ => None,
        };
    }

    fn tap(
        &mut self,
        viewport: &mut ViewportState,
        surface: Surface,
        now_ms: f64,
    ) -> Option<GestureAction> {
        if viewport.register_tap(surface, now_ms) {
            log::debug!("Double tap on {:?}", surface);
            return viewport.toggle_zoom().map(GestureAction::ZoomToggled);
        }
        if surface != Surface::Main || viewport.image_count() == 0 {
            return None;
        }
        if viewport.swipe_recently_completed(now_ms) {
            log::debug!("Tap right after swipe; not opening viewer");
            return None;
        }
        Some(GestureAction::OpenViewer)
    }

    /// Pointer moved over a surface without pressing.
    pub fn hover_move(
        &mut self,
        viewport: &mut ViewportState,
        surface: Surface,
        kind: PointerKind,
        x: f64,
        width: f64,
    ) -> Option<GestureAction> {
        if surface != Surface::Main
            || !kind.can_hover()
            || viewport.image_count() <= 1
            || !self.pointers.is_empty()
        {
            return None;
        }
        let Some(zone) = HoverZone::from_position(x, width) else {
            self.hover_zone = None;
            return None;
        };
        if self.hover_zone == Some(zone) {
            return None;
        }

        let change = match zone {
            HoverZone::Left => viewport.step_toward(Direction::Prev),
            HoverZone::Right => viewport.step_toward(Direction::Next),
            HoverZone::Center => None,
        };
        self.hover_zone = Some(zone);
        Some(change.map_or(
            GestureAction::HoverZoneEntered(zone),
            GestureAction::Navigated,
        ))
    }

    pub fn hover_leave(&mut self) {
        self.hover_zone = None;
    }
}
