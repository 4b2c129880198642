//! Detent Core - interaction model for rotary dial controls
//!
//! This crate turns pointer gestures into committed knob values. A bounded
//! numeric value is shown as an angular position; presses and drags are
//! resolved against the control's center into a quantized angle, filtered
//! for erratic jumps, and committed back as a value.
//!
//! # Core Abstractions
//!
//! ## Conversion
//!
//! - [`KnobRange`] - Validated `(min, max, step)` triple
//! - [`ValueAngleMapper`] - Linear value ⇄ angle mapping over `[0, 360)`
//! - [`Quantizer`] - Angular step size and snapping to the nearest stop
//!
//! ## Gesture Resolution
//!
//! - [`resolve_angle`] - Pointer position → clockwise angle from the zero reference
//! - [`DragGuard`] - Rejects large angular jumps while dragging
//! - [`GesturePhase`] - `Idle` → `Pressed` → `Dragging` lifecycle
//!
//! ## State
//!
//! - [`KnobConfig`] - Construction-time configuration
//! - [`KnobState`] - Owns value/angle, orchestrates the pipeline, notifies observers
//!
//! # Pipeline
//!
//! ```text
//! press/move(point) ──► resolve_angle ──► Quantizer ──► DragGuard ──► commit
//!                                                                       │
//!                                              observers ◄── KnobChange ┘
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it needs `alloc` for observer storage).
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! detent-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use detent_core::{GestureOutcome, KnobConfig, KnobState, Point};
//!
//! let mut knob = KnobState::new(KnobConfig::default()).unwrap();
//! knob.set_center(Point::new(50.0, 50.0));
//!
//! // Pointer straight "right" of center: a quarter turn.
//! let outcome = knob.press(Point::new(60.0, 50.0));
//! assert!(matches!(outcome, GestureOutcome::Committed { .. }));
//! assert_eq!(knob.angle(), 89.0);
//! knob.release();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod config;
pub mod error;
pub mod guard;
pub mod mapper;
pub mod quantize;
pub mod range;
pub mod resolver;
pub mod state;

mod angle;

pub use angle::{FULL_TURN, wrap_degrees};
pub use config::{KnobConfig, ValuePolicy};
pub use error::KnobError;
pub use guard::{DEFAULT_DRAG_JUMP_LIMIT, DragGuard, GesturePhase, GuardVerdict};
pub use mapper::ValueAngleMapper;
pub use quantize::{QuantizeMode, Quantizer};
pub use range::KnobRange;
pub use resolver::{Point, Quadrant, quadrant, resolve_angle};
pub use state::{ChangeCause, GestureOutcome, KnobChange, KnobState, ObserverId};
