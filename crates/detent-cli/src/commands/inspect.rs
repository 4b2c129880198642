//! Knob inspection: configuration and the table of stops.

use clap::Args;
use detent_core::{FULL_TURN, KnobState};

use super::common::load_knob;

#[derive(Args)]
pub struct InspectArgs {
    /// Panel name or path
    panel: String,

    /// Knob name within the panel
    knob: String,

    /// Maximum number of stops to print
    #[arg(long, default_value_t = 64)]
    limit: usize,
}

/// One row of the stop table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
    /// Stop index from zero.
    pub index: u64,
    /// Snapped angle.
    pub angle: f32,
    /// Value the knob reports at that angle.
    pub value: f32,
}

pub fn run(args: InspectArgs) -> anyhow::Result<()> {
    let (panel, spec) = load_knob(&args.panel, &args.knob)?;
    let knob = spec.build_state()?;

    println!("{} / {}", panel.name, spec.name);
    println!("  range:       [{}, {}] step {}", knob.min(), knob.max(), knob.step());
    println!("  angle step:  {:.4}\u{b0}", knob.angle_step());
    println!("  quantize:    {:?}", knob.quantizer().mode());
    println!("  policy:      {:?}", knob.config().value_policy);
    println!("  jump limit:  {}\u{b0}", knob.config().drag_jump_limit);
    println!("  value:       {} at {}\u{b0}", knob.value(), knob.angle());
    println!(
        "  marker:      start {}\u{b0}, ahead {}\u{b0}",
        knob.marker_start_angle(),
        knob.marker_ahead()
    );
    println!();

    println!("  {:>5} {:>10} {:>12}", "stop", "angle", "value");
    let mut shown = 0u64;
    for stop in stops(&knob).take(args.limit) {
        println!("  {:>5} {:>10} {:>12.4}", stop.index, stop.angle, stop.value);
        shown += 1;
    }
    let more = stop_total(&knob) - shown as f64;
    if more >= 1.0 {
        println!("  ... {more:.0} more");
    }

    Ok(())
}

/// The stops of one turn, in order, produced on demand.
///
/// Fine steps give millions of stops; callers bound the walk with `take`.
#[allow(clippy::cast_precision_loss)]
pub fn stops(knob: &KnobState) -> impl Iterator<Item = Stop> + '_ {
    let quantizer = knob.quantizer();
    let step = quantizer.angle_step();

    (0u64..)
        .take_while(move |&index| (index as f32) * step < FULL_TURN)
        .map(move |index| {
            let angle = quantizer.stop_angle(index);
            Stop {
                index,
                angle,
                value: knob.range().clamp(knob.mapper().angle_to_value(angle)),
            }
        })
}

/// How many stops one turn holds, without walking them.
pub fn stop_total(knob: &KnobState) -> f64 {
    (f64::from(FULL_TURN) / f64::from(knob.angle_step())).ceil()
}

#[cfg(test)]
mod tests {
    use super::*;
    use detent_core::{KnobConfig, QuantizeMode};

    #[test]
    fn test_coarse_stops() {
        let knob = KnobState::new(KnobConfig::default().with_step(25.0)).unwrap();
        let angles: Vec<f32> = stops(&knob).map(|s| s.angle).collect();
        assert_eq!(angles, vec![0.0, 89.0, 178.0, 267.0, 356.0]);
    }

    #[test]
    fn test_ten_degree_stops() {
        let knob = KnobState::new(KnobConfig::default().with_range(0.0, 35.0)).unwrap();
        let table: Vec<Stop> = stops(&knob).collect();
        assert_eq!(table.len(), 36);
        assert_eq!(stop_total(&knob), 36.0);
        assert_eq!(table[9].angle, 90.0);
        // The last stop sits one step short of a full turn, below max.
        assert!((table[35].value - 34.0278).abs() < 1e-3);
    }

    #[test]
    fn test_fine_step_walks_only_what_is_taken() {
        let knob = KnobState::new(KnobConfig::default().with_step(1e-4)).unwrap();
        let first: Vec<Stop> = stops(&knob).take(64).collect();
        assert_eq!(first.len(), 64);
        assert_eq!(first[63].index, 63);
        // (100 + 1) / 1e-4 stops in the turn.
        assert!((stop_total(&knob) - 1_010_000.0).abs() <= 1.0);
    }

    #[test]
    fn test_exact_stops_keep_fraction() {
        let knob = KnobState::new(
            KnobConfig::default()
                .with_step(25.0)
                .with_quantize(QuantizeMode::Exact),
        )
        .unwrap();
        let table: Vec<Stop> = stops(&knob).collect();
        assert!(table[1].angle > 89.0 && table[1].angle < 89.2);
    }
}
