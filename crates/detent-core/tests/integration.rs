//! Integration tests for detent-core.
//!
//! End-to-end gesture scenarios through [`KnobState`]: pointer positions in,
//! committed values and observer notifications out.

use std::cell::RefCell;
use std::rc::Rc;

use detent_core::{
    ChangeCause, GestureOutcome, GesturePhase, KnobChange, KnobConfig, KnobError, KnobState,
    Point, QuantizeMode, ValuePolicy,
};

/// Pointer at `degrees` clockwise from up, `radius` away from `center`.
fn polar(center: Point, degrees: f32, radius: f32) -> Point {
    let rad = degrees.to_radians();
    Point::new(center.x + radius * rad.sin(), center.y + radius * rad.cos())
}

// ============================================================================
// 1. Concrete scenario: 0..=100, step 1
// ============================================================================

#[test]
fn default_knob_straight_up_is_min() {
    let mut knob = KnobState::new(KnobConfig::default().with_value(40.0)).unwrap();
    knob.set_center(Point::new(0.0, 0.0));

    let outcome = knob.press(Point::new(0.0, 10.0));
    assert_eq!(
        outcome,
        GestureOutcome::Committed {
            value: 0.0,
            angle: 0.0
        }
    );
}

#[test]
fn default_knob_quarter_turn_is_about_25() {
    let mut knob = KnobState::new(KnobConfig::default()).unwrap();
    assert!((knob.angle_step() - 3.564_356).abs() < 1e-4);

    knob.press(Point::new(10.0, 0.0));
    // 90 degrees snaps to stop 25 (89.1 deg), truncated to 89.
    assert_eq!(knob.angle(), 89.0);
    assert!((knob.value() - 24.722).abs() < 0.01, "got {}", knob.value());
}

#[test]
fn pointer_just_left_of_up_wraps_to_min() {
    // 10 degree stops: 359 snaps to stop 36, a full turn, which wraps to 0.
    let mut knob = KnobState::new(KnobConfig::default().with_range(0.0, 35.0)).unwrap();
    knob.set_value(20.0).unwrap();

    let outcome = knob.press(polar(Point::default(), 359.0, 10.0));
    assert_eq!(
        outcome,
        GestureOutcome::Committed {
            value: 0.0,
            angle: 0.0
        }
    );
    assert_eq!(knob.value(), knob.min());
}

#[test]
fn exact_mode_keeps_stop_multiple() {
    let mut knob =
        KnobState::new(KnobConfig::default().with_quantize(QuantizeMode::Exact)).unwrap();
    knob.press(Point::new(10.0, 0.0));
    let stops = knob.angle() / knob.angle_step();
    assert!((stops - 25.0).abs() < 1e-3);
    assert!((knob.value() - 24.752).abs() < 0.01, "got {}", knob.value());
}

// ============================================================================
// 2. Drag guard through the full pipeline
// ============================================================================

#[test]
fn drag_sweep_follows_pointer_in_small_steps() {
    let center = Point::new(120.0, 80.0);
    let mut knob = KnobState::new(KnobConfig::default().with_range(0.0, 35.0)).unwrap();
    knob.set_center(center);

    let log = Rc::new(RefCell::new(Vec::<KnobChange>::new()));
    let sink = Rc::clone(&log);
    knob.subscribe(move |change| sink.borrow_mut().push(*change));

    knob.press(polar(center, 10.0, 40.0));
    for degrees in (20..=340).step_by(10) {
        let outcome = knob.move_to(polar(center, degrees as f32, 40.0));
        assert!(outcome.is_committed(), "{degrees}: {outcome:?}");
    }
    knob.release();

    let log = log.borrow();
    assert_eq!(log.len(), 34);
    assert_eq!(log[0].cause, ChangeCause::Gesture(GesturePhase::Pressed));
    assert!(
        log[1..]
            .iter()
            .all(|c| c.cause == ChangeCause::Gesture(GesturePhase::Dragging))
    );
    assert_eq!(knob.angle(), 340.0);
    assert!((knob.value() - 340.0 * 35.0 / 360.0).abs() < 1e-4);
}

#[test]
fn crossing_zero_while_dragging_is_rejected() {
    let center = Point::default();
    let mut knob = KnobState::new(KnobConfig::default().with_range(0.0, 35.0)).unwrap();

    knob.press(polar(center, 350.0, 50.0));
    let outcome = knob.move_to(polar(center, 10.0, 50.0));
    assert_eq!(outcome, GestureOutcome::Rejected { candidate: 10.0 });
    assert_eq!(knob.angle(), 350.0);

    // A fresh press lands anywhere.
    knob.release();
    assert!(knob.press(polar(center, 10.0, 50.0)).is_committed());
    assert_eq!(knob.angle(), 10.0);
}

#[test]
fn pointer_through_center_does_not_jump() {
    let mut knob = KnobState::new(KnobConfig::default().with_range(0.0, 35.0)).unwrap();
    knob.press(Point::new(0.0, 30.0));
    assert_eq!(knob.angle(), 0.0);

    // Crossing to the opposite side resolves to ~180: rejected.
    let outcome = knob.move_to(Point::new(0.1, -30.0));
    assert!(matches!(outcome, GestureOutcome::Rejected { .. }));
    assert_eq!(knob.value(), 0.0);
}

#[test]
fn custom_jump_limit_tightens_guard() {
    let mut knob = KnobState::new(
        KnobConfig::default()
            .with_range(0.0, 35.0)
            .with_drag_jump_limit(20.0),
    )
    .unwrap();
    let center = Point::default();
    knob.press(polar(center, 50.0, 10.0));
    assert!(matches!(
        knob.move_to(polar(center, 80.0, 10.0)),
        GestureOutcome::Rejected { .. }
    ));
    assert!(knob.move_to(polar(center, 70.0, 10.0)).is_committed());
}

// ============================================================================
// 3. Configuration errors
// ============================================================================

#[test]
fn configuration_errors_are_synchronous() {
    assert_eq!(
        KnobState::new(KnobConfig::default().with_range(50.0, 50.0)).unwrap_err(),
        KnobError::DegenerateRange { value: 50.0 }
    );
    assert_eq!(
        KnobState::new(KnobConfig::default().with_step(0.0)).unwrap_err(),
        KnobError::InvalidStep(0.0)
    );
    assert_eq!(
        KnobState::new(KnobConfig::default().with_range(10.0, -10.0)).unwrap_err(),
        KnobError::InvalidRange {
            min: 10.0,
            max: -10.0
        }
    );
}

#[test]
fn overflowing_span_is_rejected_at_construction() {
    assert_eq!(
        KnobState::new(KnobConfig::default().with_range(-3.0e38, 3.0e38)).unwrap_err(),
        KnobError::NonFinite("max - min")
    );
    let mut knob = KnobState::new(KnobConfig::default()).unwrap();
    assert_eq!(
        knob.set_range(-3.0e38, 3.0e38).unwrap_err(),
        KnobError::NonFinite("max - min")
    );
    assert_eq!(knob.max(), 100.0);
}

#[test]
fn wide_finite_span_commits_finite_state() {
    let mut knob = KnobState::new(KnobConfig::default().with_range(-1.5e38, 1.5e38)).unwrap();
    assert!(knob.angle_step() > 0.0);

    let outcome = knob.press(Point::new(10.0, 0.0));
    assert!(outcome.is_committed(), "{outcome:?}");
    assert!(knob.value().is_finite());
    assert!(knob.value() >= knob.min() && knob.value() <= knob.max());
    assert!((0.0..360.0).contains(&knob.angle()));
}

#[test]
fn reconfigure_then_drag_uses_new_step() {
    let mut knob = KnobState::new(KnobConfig::default()).unwrap();
    knob.set_step(25.0).unwrap();

    knob.press(Point::new(10.0, 0.0));
    assert_eq!(knob.angle(), 89.0);
    knob.move_to(Point::new(-0.5, -10.0));
    assert_eq!(knob.angle(), 178.0);
}

#[test]
fn clamp_policy_survives_shrinking_range() {
    let mut knob = KnobState::new(
        KnobConfig::default()
            .with_value(90.0)
            .with_value_policy(ValuePolicy::Clamp),
    )
    .unwrap();
    knob.set_range(0.0, 60.0).unwrap();
    assert_eq!(knob.value(), 60.0);
    assert!((0.0..360.0).contains(&knob.angle()));
}
