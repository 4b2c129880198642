//! Knob state and gesture orchestration.
//!
//! [`KnobState`] owns the configuration and the current `(value, angle)` pair.
//! Each press or move runs the pipeline
//!
//! ```text
//! point ──► resolve_angle(point, center) ──► Quantizer::quantize ──► DragGuard::check
//! ```
//!
//! and, if the guard accepts a different angle, commits the angle, derives the
//! value from it, and synchronously notifies every observer with the new pair.
//!
//! # Gesture Lifecycle
//!
//! ```text
//! Idle ──press──► Pressed ──move──► Dragging ──move──► Dragging
//!   ▲                │                  │
//!   └────release─────┴──────release─────┘
//! ```
//!
//! Events are expected in temporal order from a single serialized pointer
//! stream, already hit-tested by the caller. A move while `Idle` is ignored.
//!
//! # Source of Truth
//!
//! A gesture commits the quantized angle and derives the value from it.
//! Everything else ([`set_value`](KnobState::set_value),
//! [`reconfigure`](KnobState::reconfigure)) commits a value and derives the
//! angle from it.

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use crate::{
    DragGuard, GesturePhase, GuardVerdict, KnobConfig, KnobError, KnobRange, Point,
    QuantizeMode, Quantizer, ValueAngleMapper, ValuePolicy, resolve_angle,
};

/// Handle returned by [`KnobState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u32);

/// Why a [`KnobChange`] was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    /// A press or move committed a new angle.
    Gesture(GesturePhase),
    /// [`KnobState::set_value`] committed a new value.
    ValueSet,
    /// Bounds or step changed and the pair was recomputed.
    Reconfigured,
}

/// A committed `(value, angle)` pair delivered to observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnobChange {
    /// Committed value in `[min, max]`.
    pub value: f32,
    /// Committed angle in `[0, 360)`.
    pub angle: f32,
    /// What triggered the commit.
    pub cause: ChangeCause,
}

/// Result of delivering one gesture event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// A new pair was committed and observers were notified.
    Committed {
        /// New value.
        value: f32,
        /// New angle.
        angle: f32,
    },
    /// The quantized angle equals the current angle.
    Unchanged,
    /// The drag guard discarded the candidate angle.
    Rejected {
        /// The discarded quantized angle.
        candidate: f32,
    },
    /// No gesture in progress; the event was dropped.
    Ignored,
}

impl GestureOutcome {
    /// Whether this event committed a new pair.
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }
}

type Observer = Box<dyn FnMut(&KnobChange)>;

/// Interactive state of one rotary knob.
///
/// # Example
///
/// ```rust
/// use detent_core::{GestureOutcome, KnobConfig, KnobState, Point};
///
/// // 36 stops, 10 degrees apart.
/// let mut knob = KnobState::new(KnobConfig::default().with_range(0.0, 35.0)).unwrap();
///
/// knob.press(Point::new(0.0, 10.0));
/// assert_eq!(knob.angle(), 0.0);
///
/// // Dragging straight down is a 180 degree jump: rejected.
/// let outcome = knob.move_to(Point::new(0.0, -10.0));
/// assert_eq!(outcome, GestureOutcome::Rejected { candidate: 180.0 });
/// assert_eq!(knob.value(), 0.0);
/// knob.release();
/// ```
pub struct KnobState {
    config: KnobConfig,
    range: KnobRange,
    mapper: ValueAngleMapper,
    quantizer: Quantizer,
    guard: DragGuard,
    value: f32,
    angle: f32,
    phase: GesturePhase,
    center: Point,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u32,
}

impl KnobState {
    /// Build a knob from `config`.
    ///
    /// The initial value is `config.initial_value`, or `min` when unset, and
    /// is checked against the range under `config.value_policy`. The center
    /// starts at the origin; hosts place it with [`set_center`](Self::set_center).
    ///
    /// # Errors
    ///
    /// Any [`KnobError`] from validating `config` or the initial value.
    pub fn new(config: KnobConfig) -> Result<Self, KnobError> {
        let range = config.validate()?;
        let value = admit_value(
            config.initial_value.unwrap_or(range.min()),
            &range,
            config.value_policy,
        )?;
        let mapper = ValueAngleMapper::new(&range);
        let angle = mapper.value_to_angle(value);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            min = range.min(),
            max = range.max(),
            step = range.step(),
            value,
            angle,
            "knob created"
        );

        Ok(Self {
            config,
            range,
            mapper,
            quantizer: Quantizer::new(&range, config.quantize),
            guard: DragGuard::new(config.drag_jump_limit),
            value,
            angle,
            phase: GesturePhase::Idle,
            center: Point::default(),
            observers: Vec::new(),
            next_observer: 0,
        })
    }

    /// Current value, always in `[min, max]`.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current angle, always in `[0, 360)`.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Degrees between consecutive stops.
    #[inline]
    pub fn angle_step(&self) -> f32 {
        self.quantizer.angle_step()
    }

    /// Current gesture phase.
    #[inline]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Active configuration.
    #[inline]
    pub fn config(&self) -> &KnobConfig {
        &self.config
    }

    /// Validated bounds and step.
    #[inline]
    pub fn range(&self) -> &KnobRange {
        &self.range
    }

    /// Value/angle mapper for the current range.
    #[inline]
    pub fn mapper(&self) -> &ValueAngleMapper {
        &self.mapper
    }

    /// Quantizer for the current range and mode.
    #[inline]
    pub fn quantizer(&self) -> &Quantizer {
        &self.quantizer
    }

    /// Lower bound.
    #[inline]
    pub fn min(&self) -> f32 {
        self.range.min()
    }

    /// Upper bound.
    #[inline]
    pub fn max(&self) -> f32 {
        self.range.max()
    }

    /// Step interval.
    #[inline]
    pub fn step(&self) -> f32 {
        self.range.step()
    }

    /// Marker sweep start angle (rendering input).
    #[inline]
    pub fn marker_start_angle(&self) -> f32 {
        self.config.marker_start_angle
    }

    /// Marker sweep look-ahead in degrees (rendering input).
    #[inline]
    pub fn marker_ahead(&self) -> f32 {
        self.config.marker_ahead
    }

    /// Center of the control, in the same frame as gesture points.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Move the center (e.g. after a layout pass).
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// Register a callback invoked after every committed change.
    pub fn subscribe(&mut self, observer: impl FnMut(&KnobChange) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer = self.next_observer.wrapping_add(1);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a callback. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// First contact at `point`. Any resolved angle is accepted.
    ///
    /// A press while a gesture is already active restarts it.
    pub fn press(&mut self, point: Point) -> GestureOutcome {
        self.phase = GesturePhase::Pressed;
        self.track(point)
    }

    /// Pointer moved to `point` while down.
    ///
    /// Candidates further than the drag jump limit from the current angle are
    /// rejected; the gesture continues.
    pub fn move_to(&mut self, point: Point) -> GestureOutcome {
        if !self.phase.is_active() {
            #[cfg(feature = "tracing")]
            tracing::trace!(x = point.x, y = point.y, "move without press ignored");
            return GestureOutcome::Ignored;
        }
        self.phase = GesturePhase::Dragging;
        self.track(point)
    }

    /// Pointer lifted; the gesture ends.
    pub fn release(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    /// Deliver one event tagged with its phase.
    ///
    /// `Pressed` is a [`press`](Self::press), `Dragging` a
    /// [`move_to`](Self::move_to), and `Idle` a [`release`](Self::release)
    /// (which never commits, so it reports [`GestureOutcome::Ignored`]).
    pub fn on_gesture_event(&mut self, point: Point, phase: GesturePhase) -> GestureOutcome {
        match phase {
            GesturePhase::Pressed => self.press(point),
            GesturePhase::Dragging => self.move_to(point),
            GesturePhase::Idle => {
                self.release();
                GestureOutcome::Ignored
            }
        }
    }

    /// Set the value from outside a gesture (e.g. a preset or automation).
    ///
    /// # Errors
    ///
    /// [`KnobError::NonFinite`] for NaN/inf, or [`KnobError::OutOfRangeValue`]
    /// under [`ValuePolicy::Reject`].
    pub fn set_value(&mut self, value: f32) -> Result<(), KnobError> {
        let value = admit_value(value, &self.range, self.config.value_policy)?;
        self.commit_value(value, ChangeCause::ValueSet);
        Ok(())
    }

    /// Change the bounds, keeping the current value if it still fits.
    ///
    /// # Errors
    ///
    /// Range errors, or [`KnobError::OutOfRangeValue`] if the current value
    /// falls outside the new bounds under [`ValuePolicy::Reject`]. On error
    /// the knob is left unchanged.
    pub fn set_range(&mut self, min: f32, max: f32) -> Result<(), KnobError> {
        self.reconfigure(KnobConfig {
            min,
            max,
            initial_value: None,
            ..self.config
        })
    }

    /// Change the step interval; the angle step is recomputed.
    pub fn set_step(&mut self, step: f32) -> Result<(), KnobError> {
        self.reconfigure(KnobConfig {
            step,
            initial_value: None,
            ..self.config
        })
    }

    /// Change the quantization mode.
    pub fn set_quantize_mode(&mut self, mode: QuantizeMode) {
        self.config.quantize = mode;
        self.quantizer = Quantizer::new(&self.range, mode);
    }

    /// Replace the whole configuration.
    ///
    /// `config.initial_value`, when set, becomes the new value; otherwise the
    /// current value is re-validated against the new bounds. Either way the
    /// angle is recomputed from the value, and observers are notified if the
    /// pair changed. Validation happens before anything is applied.
    pub fn reconfigure(&mut self, config: KnobConfig) -> Result<(), KnobError> {
        let range = config.validate()?;
        let value = admit_value(
            config.initial_value.unwrap_or(self.value),
            &range,
            config.value_policy,
        )?;

        self.config = config;
        self.range = range;
        self.mapper = ValueAngleMapper::new(&range);
        self.quantizer = Quantizer::new(&range, config.quantize);
        self.guard = DragGuard::new(config.drag_jump_limit);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            min = range.min(),
            max = range.max(),
            step = range.step(),
            angle_step = self.quantizer.angle_step(),
            "knob reconfigured"
        );

        self.commit_value(value, ChangeCause::Reconfigured);
        Ok(())
    }

    fn track(&mut self, point: Point) -> GestureOutcome {
        let raw = resolve_angle(point, self.center);
        let candidate = self.quantizer.quantize(raw);

        match self.guard.check(self.phase, candidate, self.angle) {
            GuardVerdict::Accept => {
                self.angle = candidate;
                self.value = self.range.clamp(self.mapper.angle_to_value(candidate));

                #[cfg(feature = "tracing")]
                tracing::trace!(
                    phase = ?self.phase,
                    raw,
                    angle = self.angle,
                    value = self.value,
                    "knob commit"
                );

                self.notify(ChangeCause::Gesture(self.phase));
                GestureOutcome::Committed {
                    value: self.value,
                    angle: self.angle,
                }
            }
            GuardVerdict::Unchanged => GestureOutcome::Unchanged,
            GuardVerdict::Reject => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    candidate,
                    current = self.angle,
                    limit = self.guard.max_jump(),
                    "drag jump rejected"
                );
                GestureOutcome::Rejected { candidate }
            }
        }
    }

    fn commit_value(&mut self, value: f32, cause: ChangeCause) {
        let angle = self.mapper.value_to_angle(value);
        if value == self.value && angle == self.angle {
            return;
        }
        self.value = value;
        self.angle = angle;
        self.notify(cause);
    }

    fn notify(&mut self, cause: ChangeCause) {
        let change = KnobChange {
            value: self.value,
            angle: self.angle,
            cause,
        };
        for (_, observer) in &mut self.observers {
            observer(&change);
        }
    }
}

impl fmt::Debug for KnobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KnobState")
            .field("range", &self.range)
            .field("value", &self.value)
            .field("angle", &self.angle)
            .field("angle_step", &self.quantizer.angle_step())
            .field("phase", &self.phase)
            .field("center", &self.center)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

/// Check a supplied value against `range` under `policy`.
fn admit_value(value: f32, range: &KnobRange, policy: ValuePolicy) -> Result<f32, KnobError> {
    if !value.is_finite() {
        return Err(KnobError::NonFinite("value"));
    }
    if range.contains(value) {
        return Ok(value);
    }
    match policy {
        ValuePolicy::Reject => Err(KnobError::OutOfRangeValue {
            value,
            min: range.min(),
            max: range.max(),
        }),
        ValuePolicy::Clamp => {
            let clamped = range.clamp(value);
            #[cfg(feature = "tracing")]
            tracing::warn!(
                value,
                clamped,
                min = range.min(),
                max = range.max(),
                "value out of range, clamped"
            );
            Ok(clamped)
        }
    }
}
