//! Gesture scripts for `detent replay`.
//!
//! ```toml
//! [[events]]
//! kind = "press"
//! x = 10.0
//! y = 0.0
//!
//! [[events]]
//! kind = "move"
//! x = 0.0
//! y = -10.0
//!
//! [[events]]
//! kind = "release"
//! ```
//!
//! Coordinates are relative to the knob center with Y pointing up.

use std::path::Path;

use anyhow::Context;
use detent_core::{GesturePhase, Point};
use serde::{Deserialize, Serialize};

/// Pointer event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// First contact.
    Press,
    /// Pointer moved while down.
    Move,
    /// Pointer lifted.
    Release,
}

impl EventKind {
    /// Phase the knob receives for this event.
    pub fn phase(self) -> GesturePhase {
        match self {
            EventKind::Press => GesturePhase::Pressed,
            EventKind::Move => GesturePhase::Dragging,
            EventKind::Release => GesturePhase::Idle,
        }
    }
}

/// One scripted pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptEvent {
    /// Event type.
    pub kind: EventKind,
    /// Horizontal offset from the center.
    #[serde(default)]
    pub x: f32,
    /// Vertical offset from the center, up positive.
    #[serde(default)]
    pub y: f32,
}

impl ScriptEvent {
    /// Pointer position of the event.
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Ordered list of pointer events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    /// Events in delivery order.
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl GestureScript {
    /// Parse a script from TOML text.
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid gesture script")
    }

    /// Load a script file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read gesture script '{}'", path.display()))?;
        Self::from_toml(&text)
    }
}
