//! Replay a gesture script against one knob.

use std::path::PathBuf;

use clap::Args;
use detent_core::{GestureOutcome, KnobState};
use serde::Serialize;

use super::common::load_knob;
use crate::script::{EventKind, GestureScript, ScriptEvent};

#[derive(Args)]
pub struct ReplayArgs {
    /// Panel name or path
    panel: String,

    /// Knob name within the panel
    knob: String,

    /// Gesture script (TOML with [[events]])
    script: PathBuf,

    /// Print the steps as JSON
    #[arg(long)]
    json: bool,
}

/// What happened to one scripted event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayStep {
    /// Event position in the script, from one.
    pub index: usize,
    /// Event type.
    pub kind: EventKind,
    /// Pointer x.
    pub x: f32,
    /// Pointer y.
    pub y: f32,
    /// `committed`, `unchanged`, `rejected` or `ignored`.
    pub outcome: &'static str,
    /// Angle the resolver proposed, for rejected events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<f32>,
    /// Knob value after the event.
    pub value: f32,
    /// Knob angle after the event.
    pub angle: f32,
}

pub fn run(args: ReplayArgs) -> anyhow::Result<()> {
    let (_, spec) = load_knob(&args.panel, &args.knob)?;
    let mut knob = spec.build_state()?;
    let script = GestureScript::load(&args.script)?;

    tracing::info!(knob = %spec.name, events = script.events.len(), "replaying");
    let steps = replay(&mut knob, &script);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    for step in &steps {
        let detail = step
            .candidate
            .map(|c| format!(" (candidate {c}\u{b0})"))
            .unwrap_or_default();
        println!(
            "#{:<3} {:<7} ({:>7.2}, {:>7.2}) -> {:<9}{} value={:.4} angle={}",
            step.index,
            format!("{:?}", step.kind).to_lowercase(),
            step.x,
            step.y,
            step.outcome,
            detail,
            step.value,
            step.angle
        );
    }
    println!();
    println!("final: value={:.4} angle={}", knob.value(), knob.angle());
    Ok(())
}

/// Deliver every event of `script` to `knob` in order.
pub fn replay(knob: &mut KnobState, script: &GestureScript) -> Vec<ReplayStep> {
    script
        .events
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let outcome = knob.on_gesture_event(event.point(), event.kind.phase());
            step(i + 1, event, outcome, knob)
        })
        .collect()
}

fn step(index: usize, event: &ScriptEvent, outcome: GestureOutcome, knob: &KnobState) -> ReplayStep {
    let (label, candidate) = match outcome {
        GestureOutcome::Committed { .. } => ("committed", None),
        GestureOutcome::Unchanged => ("unchanged", None),
        GestureOutcome::Rejected { candidate } => ("rejected", Some(candidate)),
        GestureOutcome::Ignored => ("ignored", None),
    };
    ReplayStep {
        index,
        kind: event.kind,
        x: event.x,
        y: event.y,
        outcome: label,
        candidate,
        value: knob.value(),
        angle: knob.angle(),
    }
}
