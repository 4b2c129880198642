//! Bounded log of knob activity shown beside the dials.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use detent_core::{ChangeCause, GestureOutcome, GesturePhase, KnobChange};

/// Entries kept before the oldest are dropped.
const DEFAULT_CAPACITY: usize = 200;

/// One line in the activity log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Knob the entry is about.
    pub knob: String,
    /// Human-readable description.
    pub message: String,
    /// `false` for rejected jumps.
    pub committed: bool,
}

/// Shared, bounded activity log.
///
/// Clones share the same buffer, so observers registered on knobs and the
/// UI that renders the log see the same entries.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: Rc<RefCell<VecDeque<LogEntry>>>,
    capacity: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ActivityLog {
    /// Create a log holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Rc::new(RefCell::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Observer for [`KnobState::subscribe`](detent_core::KnobState::subscribe)
    /// that records every change of the knob called `knob`.
    pub fn observer(&self, knob: impl Into<String>) -> impl FnMut(&KnobChange) + 'static {
        let log = self.clone();
        let knob = knob.into();
        move |change: &KnobChange| log.push(knob.clone(), describe_change(change), true)
    }

    /// Record a rejected jump. Other outcomes reach the log through observers.
    pub fn record_outcome(&self, knob: &str, outcome: GestureOutcome) {
        if let GestureOutcome::Rejected { candidate } = outcome {
            self.push(
                knob.to_string(),
                format!("jump to {candidate:.0}\u{b0} rejected"),
                false,
            );
        }
    }

    /// Snapshot of the entries, newest last.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().iter().cloned().collect()
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    fn push(&self, knob: String, message: String, committed: bool) {
        let mut entries = self.entries.borrow_mut();
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(LogEntry {
            knob,
            message,
            committed,
        });
    }
}

fn describe_change(change: &KnobChange) -> String {
    let source = match change.cause {
        ChangeCause::Gesture(GesturePhase::Pressed) => "press",
        ChangeCause::Gesture(_) => "drag",
        ChangeCause::ValueSet => "set",
        ChangeCause::Reconfigured => "reconfigure",
    };
    format!("{source}: {:.2} at {:.0}\u{b0}", change.value, change.angle)
}
