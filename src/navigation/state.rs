//! Navigation state machine.
//!
//! Owns the view mode and the active section. All transitions go through
//! methods on [`NavigationState`]; each returns the [`Transition`] that took
//! place or a [`NavigationError`] explaining why the request was dropped.
//! A rejected request never mutates state.

use std::fmt;

use bevy::prelude::*;

use super::anchors::TargetResolver;
use crate::sections::{SECTION_COUNT, SectionId, UnknownSection};

/// View mode of the experience.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Overview of every section in orbit.
    #[default]
    Hub,
    /// Camera flying toward a section.
    WarpingTo,
    /// Camera framing a section, content visible.
    Panel,
    /// Camera flying back to the overview.
    WarpingBack,
}

impl Mode {
    /// Whether a warp is in flight. Index navigation is locked while true.
    pub fn is_warping(self) -> bool {
        matches!(self, Mode::WarpingTo | Mode::WarpingBack)
    }

    /// Lowercase name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Hub => "hub",
            Mode::WarpingTo => "warping-to",
            Mode::Panel => "panel",
            Mode::WarpingBack => "warping-back",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of a sequential navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepDirection {
    /// Next section (scroll down, swipe up, arrow down).
    Forward,
    /// Previous section.
    Backward,
}

/// Where a sequential step lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepDestination {
    Section(usize),
    Hub,
}

/// Resolve a step from the current index.
///
/// Stepping past either end of the sequence returns to the hub; there is no
/// wrap-around. From the hub, forward enters the first section.
pub fn step_destination(current: Option<usize>, direction: StepDirection) -> StepDestination {
    match (current, direction) {
        (None, StepDirection::Forward) => StepDestination::Section(0),
        (None, StepDirection::Backward) => StepDestination::Hub,
        (Some(i), StepDirection::Forward) if i + 1 < SECTION_COUNT => {
            StepDestination::Section(i + 1)
        }
        (Some(i), StepDirection::Backward) if i > 0 => StepDestination::Section(i - 1),
        (Some(_), _) => StepDestination::Hub,
    }
}

/// Outcome of an accepted navigation request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// Began (or retargeted) a warp toward a section.
    Warping(SectionId),
    /// Began the warp back to the hub.
    Returning,
    /// Warp finished; panel is showing.
    Arrived(SectionId),
    /// Back at the hub.
    Home,
    /// Request was valid but there was nothing to do.
    Unchanged,
}

/// Why a navigation request was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum NavigationError {
    #[error(transparent)]
    UnknownSection(#[from] UnknownSection),

    #[error("navigation locked while {mode}")]
    Locked { mode: Mode },

    #[error("world position of section `{0}` is not resolvable")]
    Unresolvable(SectionId),

    #[error("section index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("rig signal `{signal}` does not apply in mode {mode}")]
    UnexpectedSignal { signal: &'static str, mode: Mode },
}

impl NavigationError {
    /// Whether this points at a wiring bug rather than a routine rejection
    /// such as a click during a warp.
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            NavigationError::UnknownSection(_) | NavigationError::UnexpectedSignal { .. }
        )
    }
}

/// Live navigation state.
///
/// Invariants: `Panel` and `WarpingTo` always carry a section; `Hub` and
/// `WarpingBack` never do. The section index is derived from the section so
/// the two cannot drift apart.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    mode: Mode,
    current: Option<SectionId>,
    /// World position recorded at pick time. A hint only; the camera rig
    /// prefers the live position of the section's body.
    target: Option<Vec3>,
}

impl NavigationState {
    /// Fresh state at the hub.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn current_section(&self) -> Option<SectionId> {
        self.current
    }

    pub fn target(&self) -> Option<Vec3> {
        self.target
    }

    /// Index of the active section in navigation order, `None` at the hub.
    pub fn section_index(&self) -> Option<usize> {
        self.current.map(|id| id.index())
    }

    /// Whether index navigation is currently rejected.
    pub fn is_locked(&self) -> bool {
        self.mode.is_warping()
    }

    /// Pick a section whose body is at `world_position`.
    ///
    /// Re-picking the section already on display is a back intent. Picking
    /// while a warp is in flight retargets it.
    pub fn pick(
        &mut self,
        section: SectionId,
        world_position: Vec3,
    ) -> Result<Transition, NavigationError> {
        if !world_position.is_finite() {
            return Err(NavigationError::Unresolvable(section));
        }

        match (self.mode, self.current) {
            (Mode::Panel, Some(active)) if active == section => self.back(),
            (Mode::WarpingTo, Some(active)) if active == section => {
                self.target = Some(world_position);
                Ok(Transition::Unchanged)
            }
            _ => {
                self.current = Some(section);
                self.target = Some(world_position);
                self.mode = Mode::WarpingTo;
                Ok(Transition::Warping(section))
            }
        }
    }

    /// Pick a section by its string key.
    pub fn pick_key(
        &mut self,
        key: &str,
        world_position: Vec3,
    ) -> Result<Transition, NavigationError> {
        let section = key.parse::<SectionId>()?;
        self.pick(section, world_position)
    }

    /// Leave the current section for the hub.
    ///
    /// Idempotent: repeated back intents while already returning (or at the
    /// hub) change nothing.
    pub fn back(&mut self) -> Result<Transition, NavigationError> {
        match self.mode {
            Mode::Panel | Mode::WarpingTo => {
                self.current = None;
                self.target = None;
                self.mode = Mode::WarpingBack;
                Ok(Transition::Returning)
            }
            Mode::Hub | Mode::WarpingBack => Ok(Transition::Unchanged),
        }
    }

    /// The rig reached the framing goal for `section`.
    pub fn warp_arrived(&mut self, section: SectionId) -> Result<Transition, NavigationError> {
        match (self.mode, self.current) {
            (Mode::WarpingTo, Some(active)) if active == section => {
                self.mode = Mode::Panel;
                Ok(Transition::Arrived(section))
            }
            _ => Err(NavigationError::UnexpectedSignal {
                signal: "warp-arrived",
                mode: self.mode,
            }),
        }
    }

    /// The rig reached the hub home position.
    pub fn return_arrived(&mut self) -> Result<Transition, NavigationError> {
        if self.mode != Mode::WarpingBack {
            return Err(NavigationError::UnexpectedSignal {
                signal: "return-arrived",
                mode: self.mode,
            });
        }
        self.mode = Mode::Hub;
        Ok(Transition::Home)
    }

    /// Navigate to the section at `index`, resolving its live position.
    ///
    /// Abandoned without any state change when locked, out of range, or when
    /// the section's body cannot be resolved.
    pub fn navigate_to_index(
        &mut self,
        index: usize,
        resolver: &impl TargetResolver,
    ) -> Result<Transition, NavigationError> {
        if self.is_locked() {
            return Err(NavigationError::Locked { mode: self.mode });
        }
        let section = SectionId::from_index(index).ok_or(NavigationError::IndexOutOfRange {
            index,
            len: SECTION_COUNT,
        })?;
        if self.mode == Mode::Panel && self.current == Some(section) {
            return Ok(Transition::Unchanged);
        }
        let live = resolver
            .resolve(section)
            .ok_or(NavigationError::Unresolvable(section))?;
        self.pick(section, live.position)
    }

    /// Pick a section by id at its live position.
    ///
    /// Unlike index navigation this is not lock-gated: a warp in flight is
    /// retargeted, same as a scene click.
    pub fn pick_section(
        &mut self,
        section: SectionId,
        resolver: &impl TargetResolver,
    ) -> Result<Transition, NavigationError> {
        let live = resolver
            .resolve(section)
            .ok_or(NavigationError::Unresolvable(section))?;
        self.pick(section, live.position)
    }

    /// Step to the next or previous section.
    pub fn step(
        &mut self,
        direction: StepDirection,
        resolver: &impl TargetResolver,
    ) -> Result<Transition, NavigationError> {
        if self.is_locked() {
            return Err(NavigationError::Locked { mode: self.mode });
        }
        match step_destination(self.section_index(), direction) {
            StepDestination::Section(index) => self.navigate_to_index(index, resolver),
            StepDestination::Hub => self.back(),
        }
    }
}
