//! Integration tests for the drag -> snap -> settle pipeline
//!
//! Drives a controller the way a host screen would: gesture callbacks from
//! the input side, a frame loop stepping the animation, and a render-side
//! binding reading the offset.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use sash_sheet::{DragSample, SheetConfig, SheetContent, SheetController, SheetState};

const DT: f32 = 1.0 / 60.0;
const RANGE: f32 = 300.0;

fn sheet() -> SheetController {
    SheetController::new(SheetConfig::new(RANGE, 0.0), SheetContent::default()).unwrap()
}

fn sample(delta: f32, velocity: f32) -> DragSample {
    DragSample {
        translation_delta: delta,
        velocity,
    }
}

/// Run the frame loop until the animation settles
fn settle(sheet: &mut SheetController) {
    for _ in 0..1800 {
        if !sheet.tick(DT) {
            return;
        }
    }
    panic!("sheet animation did not settle");
}

#[test]
fn test_offset_stays_in_bounds_for_any_sample_sequence() {
    let mut sheet = sheet();
    sheet.on_drag_start();
    let deltas = [
        -50.0, -400.0, 120.0, 9999.0, -9999.0, 0.0, 42.0, -300.0, 777.0, -0.1,
    ];
    for (i, delta) in deltas.iter().enumerate() {
        sheet.on_drag_sample(sample(*delta, (i as f32) * -100.0));
        let offset = sheet.offset();
        assert!(
            (0.0..=RANGE).contains(&offset),
            "offset {offset} escaped bounds"
        );
    }
    sheet.on_drag_end(0.0);
    assert!((0.0..=RANGE).contains(&sheet.offset()));
}

#[test]
fn test_end_to_end_drag_expands_the_sheet() {
    let mut sheet = sheet();
    assert_eq!(sheet.state(), SheetState::Collapsed);

    sheet.on_drag_start();
    assert_eq!(sheet.state(), SheetState::Dragging);

    sheet.on_drag_sample(sample(-250.0, 0.0));
    assert_eq!(sheet.offset(), 50.0);

    sheet.on_drag_end(0.0);
    assert_eq!(sheet.state(), SheetState::Expanded);

    settle(&mut sheet);
    assert!(sheet.offset().abs() < 0.5);
    assert!(!sheet.is_animating());
}

#[test]
fn test_release_in_lower_half_collapses() {
    let mut sheet = sheet();
    sheet.on_drag_start();
    sheet.on_drag_sample(sample(-90.0, 0.0));
    assert_eq!(sheet.offset(), 210.0);

    sheet.on_drag_end(0.0);
    assert_eq!(sheet.state(), SheetState::Collapsed);

    settle(&mut sheet);
    assert!((sheet.offset() - RANGE).abs() < 0.5);
}

#[test]
fn test_upward_fling_expands_from_near_collapsed() {
    let mut sheet = sheet();
    sheet.on_drag_start();
    sheet.on_drag_sample(sample(-20.0, -600.0));
    assert_eq!(sheet.offset(), 280.0);

    sheet.on_drag_end(-600.0);
    assert_eq!(sheet.state(), SheetState::Expanded);

    settle(&mut sheet);
    assert!(sheet.offset().abs() < 0.5);
}

#[test]
fn test_drag_down_from_expanded_collapses() {
    let mut sheet = sheet();
    sheet.toggle();
    settle(&mut sheet);
    assert_eq!(sheet.state(), SheetState::Expanded);

    sheet.on_drag_start();
    sheet.on_drag_sample(sample(200.0, 400.0));
    assert_eq!(sheet.offset(), 200.0);

    sheet.on_drag_end(400.0);
    assert_eq!(sheet.state(), SheetState::Collapsed);

    settle(&mut sheet);
    assert!((sheet.offset() - RANGE).abs() < 0.5);
}

#[test]
fn test_dragging_never_survives_a_drag_end() {
    for (delta, velocity) in [(-250.0, 0.0), (-90.0, 0.0), (-20.0, -900.0)] {
        let mut sheet = sheet();
        sheet.on_drag_start();
        sheet.on_drag_sample(sample(delta, velocity));
        sheet.on_drag_end(velocity);
        assert!(
            matches!(sheet.state(), SheetState::Expanded | SheetState::Collapsed),
            "still dragging after end ({delta}, {velocity})"
        );
    }

    let mut sheet = sheet();
    sheet.on_drag_start();
    sheet.on_drag_sample(sample(-50.0, -100.0));
    sheet.on_drag_cancel();
    assert_ne!(sheet.state(), SheetState::Dragging);
}

#[test]
fn test_interrupting_a_snap_leaves_no_jump_and_drops_its_callback() {
    let mut sheet = sheet();
    let settles = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&settles);
    sheet.set_on_settle(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    sheet.toggle();
    for _ in 0..30 {
        sheet.tick(DT);
    }
    let mid_flight = sheet.offset();
    assert!(mid_flight > 0.0 && mid_flight < RANGE);

    sheet.on_drag_start();
    assert_eq!(sheet.offset(), mid_flight);
    assert!(!sheet.is_animating());
    assert_eq!(sheet.state(), SheetState::Dragging);

    // The interrupted run's completion never arrives
    for _ in 0..600 {
        sheet.tick(DT);
    }
    assert_eq!(settles.load(Ordering::SeqCst), 0);
    assert_eq!(sheet.offset(), mid_flight);
}

#[test]
fn test_toggle_round_trip_returns_to_collapsed() {
    let mut sheet = sheet();

    sheet.toggle();
    settle(&mut sheet);
    assert_eq!(sheet.state(), SheetState::Expanded);
    assert!(sheet.offset().abs() < 0.5);

    sheet.toggle();
    settle(&mut sheet);
    assert_eq!(sheet.state(), SheetState::Collapsed);
    assert!((sheet.offset() - RANGE).abs() < 0.5);
}

#[test]
fn test_expand_descends_monotonically_with_the_default_spring() {
    let mut sheet = sheet();
    sheet.toggle();

    let mut previous = sheet.offset();
    assert_eq!(previous, RANGE);
    let mut frames = 0;
    while sheet.tick(DT) {
        frames += 1;
        assert!(frames < 1800, "sheet animation did not settle");
        let offset = sheet.offset();
        assert!(
            offset <= previous + 1e-3,
            "offset rose from {previous} to {offset} mid-snap"
        );
        previous = offset;
    }
    assert_eq!(sheet.offset(), 0.0);
}

#[test]
fn test_settle_listener_reports_each_rest_state() {
    let mut sheet = sheet();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    sheet.set_on_settle(move |state| {
        log.lock().unwrap().push(state);
    });

    sheet.toggle();
    settle(&mut sheet);
    sheet.toggle();
    settle(&mut sheet);

    assert_eq!(
        *seen.lock().unwrap(),
        vec![SheetState::Expanded, SheetState::Collapsed]
    );
}

#[test]
fn test_abandoned_drag_snaps_with_last_sampled_velocity() {
    let mut sheet = sheet();
    sheet.on_drag_start();
    // Near-collapsed position, but the last sample was a fast upward fling
    sheet.on_drag_sample(sample(-20.0, -800.0));
    sheet.on_drag_cancel();

    assert_eq!(sheet.state(), SheetState::Expanded);
    settle(&mut sheet);
    assert!(sheet.offset().abs() < 0.5);
}

#[test]
fn test_abandoned_drag_with_no_samples_snaps_on_position_alone() {
    let mut sheet = sheet();
    sheet.on_drag_start();
    sheet.on_drag_cancel();
    assert_eq!(sheet.state(), SheetState::Collapsed);
}

#[test]
fn test_toggle_mid_drag_expands_and_orphans_the_session() {
    let mut sheet = sheet();
    sheet.on_drag_start();
    sheet.on_drag_sample(sample(-100.0, 0.0));
    assert_eq!(sheet.offset(), 200.0);

    sheet.toggle();
    assert_eq!(sheet.state(), SheetState::Expanded);

    // Later events from the dead session change nothing
    sheet.on_drag_sample(sample(-150.0, 0.0));
    assert_eq!(sheet.offset(), 200.0);
    sheet.on_drag_end(0.0);
    assert_eq!(sheet.state(), SheetState::Expanded);

    settle(&mut sheet);
    assert_eq!(sheet.offset(), 0.0);
}

#[test]
fn test_stray_drag_end_does_not_start_an_animation() {
    let mut sheet = sheet();
    sheet.on_drag_end(-900.0);
    assert_eq!(sheet.state(), SheetState::Collapsed);
    assert!(!sheet.is_animating());
    assert_eq!(sheet.offset(), RANGE);
}

#[test]
fn test_render_context_reads_stay_in_bounds_during_a_drag_storm() {
    let mut sheet = sheet();
    let binding = sheet.offset_binding();

    let reader = thread::spawn(move || {
        for _ in 0..20_000 {
            let offset = binding.get();
            assert!(
                (0.0..=RANGE).contains(&offset),
                "render read {offset} escaped bounds"
            );
        }
    });

    sheet.on_drag_start();
    for i in 0..2_000 {
        let delta = if i % 2 == 0 { -800.0 } else { 800.0 };
        sheet.on_drag_sample(sample(delta + (i as f32) * 0.1, -250.0));
    }
    sheet.on_drag_end(-650.0);
    while sheet.tick(DT) {}

    reader.join().unwrap();
    assert_ne!(sheet.state(), SheetState::Dragging);
}
