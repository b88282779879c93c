//! Drag Session Demo
//!
//! Drives the bottom sheet the way a host screen does: gesture callbacks on
//! the input side, a simulated 60 Hz frame loop stepping the snap animation,
//! and the offset binding standing in for the render pass.
//!
//! - Slow drag up past the midpoint (position decides the snap)
//! - Pull down that falls short of the midpoint (sheet springs back open)
//! - Fast upward fling from near-collapsed (velocity overrides position)
//! - Catching the sheet mid-snap (no jump, superseded run cancelled)
//! - Handle taps toggling between the rest positions
//!
//! Run with: cargo run -p sash_sheet --example drag_session
//!
//! Set RUST_LOG=sash_sheet=debug to watch state transitions and snap
//! decisions between the printed frames.

use sash_sheet::{
    DragSample, Result, RiskLevel, RiskRecord, RouteRecord, SheetConfig, SheetContent,
    SheetController,
};

const DT: f32 = 1.0 / 60.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut sheet = SheetController::new(SheetConfig::for_viewport(800.0), mock_content())?;
    sheet.set_on_settle(|state| println!("   -> settled {state:?}"));

    let range = sheet.config().range();
    println!("\n=== Drag Session Demo ===\n");
    println!(
        "viewport 800 px: sheet travels {range} px (offset 0 = expanded, {range} = collapsed)"
    );

    print_body(&sheet);

    println!("\n1. Slow drag up, released past the midpoint:");
    println!("{}", "-".repeat(50));
    drag(
        &mut sheet,
        &[(-60.0, -280.0), (-130.0, -340.0), (-200.0, -310.0)],
        -260.0,
    );
    run_to_rest(&mut sheet);

    println!("\n2. Pull down that falls short of the midpoint:");
    println!("{}", "-".repeat(50));
    drag(&mut sheet, &[(40.0, 220.0), (95.0, 260.0)], 240.0);
    run_to_rest(&mut sheet);

    println!("\n3. Full pull down to close:");
    println!("{}", "-".repeat(50));
    drag(&mut sheet, &[(120.0, 300.0), (250.0, 380.0)], 380.0);
    run_to_rest(&mut sheet);

    println!("\n4. Fast upward fling from near-collapsed:");
    println!("{}", "-".repeat(50));
    drag(&mut sheet, &[(-30.0, -820.0)], -820.0);
    run_to_rest(&mut sheet);

    println!("\n5. Catching the sheet mid-snap:");
    println!("{}", "-".repeat(50));
    sheet.toggle();
    println!("   tap -> {:?}, snapping toward {range:.0}", sheet.state());
    for _ in 0..12 {
        sheet.tick(DT);
    }
    let mid_flight = sheet.offset();
    sheet.on_drag_start();
    println!(
        "   caught at offset {mid_flight:.1}; after the grab it is still {:.1}",
        sheet.offset()
    );
    sheet.on_drag_end(0.0);
    println!("   released -> {:?}", sheet.state());
    run_to_rest(&mut sheet);

    println!("\n6. Handle taps:");
    println!("{}", "-".repeat(50));
    for _ in 0..2 {
        sheet.toggle();
        println!("   tap -> {:?}", sheet.state());
        run_to_rest(&mut sheet);
    }

    Ok(())
}

/// Forward a platform gesture: start, per-frame samples, then the release
/// velocity
fn drag(sheet: &mut SheetController, samples: &[(f32, f32)], release_velocity: f32) {
    sheet.on_drag_start();
    for &(translation_delta, velocity) in samples {
        sheet.on_drag_sample(DragSample {
            translation_delta,
            velocity,
        });
        println!(
            "   finger {translation_delta:>+6.0} px: offset {:>6.1} ({:?})",
            sheet.offset(),
            sheet.state()
        );
    }
    sheet.on_drag_end(release_velocity);
    println!(
        "   released at {release_velocity:+.0} px/s -> {:?}",
        sheet.state()
    );
}

/// Step the frame loop until the snap settles, sampling the render binding
/// the way a draw pass would
fn run_to_rest(sheet: &mut SheetController) {
    let binding = sheet.offset_binding();
    let mut frames = 0u32;
    while sheet.tick(DT) {
        frames += 1;
        if frames % 60 == 0 {
            println!(
                "   frame {frames:>3}: offset {:>6.1}, {:>3.0}% open",
                binding.get(),
                binding.progress() * 100.0
            );
        }
    }
    println!(
        "   at rest after {frames} frames: offset {:.1}, state {:?}",
        binding.get(),
        sheet.state()
    );
}

/// Render the host-supplied body records in the order given
fn print_body(sheet: &SheetController) {
    let content = sheet.content();
    println!("\nLatest in the area...");
    println!("  Nearby Risks (LIVE)");
    for risk in &content.nearby_risks {
        println!(
            "    [{:^6}] {} - {} ({})",
            risk.risk_level.as_str().to_uppercase(),
            risk.location,
            risk.description,
            risk.last_reported
        );
    }
    println!("  Recent Safe Routes");
    for route in &content.recent_routes {
        println!(
            "    {}: {}, {} risk, {} alternatives",
            route.destination, route.duration, route.risk_level, route.alternatives
        );
    }
}

/// The mock records the host screen passes in as props
fn mock_content() -> SheetContent {
    SheetContent::new(
        vec![
            RiskRecord {
                id: "1".into(),
                location: "Downtown Transit Center".into(),
                risk_level: RiskLevel::High,
                description: "ICE checkpoint reported".into(),
                last_reported: "15 min ago".into(),
            },
            RiskRecord {
                id: "2".into(),
                location: "Highway 101 North".into(),
                risk_level: RiskLevel::Medium,
                description: "Heavy patrol presence".into(),
                last_reported: "45 min ago".into(),
            },
            RiskRecord {
                id: "3".into(),
                location: "Market Street".into(),
                risk_level: RiskLevel::Low,
                description: "All clear - community verified".into(),
                last_reported: "2 hours ago".into(),
            },
        ],
        vec![
            RouteRecord {
                destination: "Community Center".into(),
                duration: "12 min".into(),
                risk_level: RiskLevel::Low,
                alternatives: 3,
            },
            RouteRecord {
                destination: "Legal Aid Office".into(),
                duration: "8 min".into(),
                risk_level: RiskLevel::Low,
                alternatives: 2,
            },
            RouteRecord {
                destination: "Immigration Services".into(),
                duration: "18 min".into(),
                risk_level: RiskLevel::Medium,
                alternatives: 4,
            },
        ],
    )
}
