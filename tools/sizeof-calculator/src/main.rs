//! Memory calculator for led-wave-gradient
//!
//! This utility calculates and displays the RAM footprint of gradients, wave
//! sets and full pattern controllers for different capacities. Run it to see
//! what a given strip length, control-point capacity and pattern count cost.
//!
//! Usage:
//!   cd tools/sizeof-calculator
//!   cargo run --release
//!   cat report.md

use led_wave_gradient::{
    ColorSample, ControlPoint, GradientEngine, LedState, Pattern, PatternController,
    SegmentDelta, StaticColor, WaveSet,
};
use std::fs::File;
use std::io::Write;
use std::mem::size_of;

// ============================================================================
// Report Generation Functions
// ============================================================================

fn write_header(f: &mut File) -> std::io::Result<()> {
    writeln!(f, "# LED Wave Gradient Memory Footprint Analysis")?;
    writeln!(f)?;
    writeln!(
        f,
        "**Generated:** {}  ",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(
        f,
        "**Architecture:** {}-bit host",
        size_of::<usize>() * 8
    )?;
    writeln!(f)?;
    Ok(())
}

fn write_component_sizes(f: &mut File) -> std::io::Result<()> {
    writeln!(f, "## Component Sizes")?;
    writeln!(f)?;
    writeln!(f, "| Component | Size |")?;
    writeln!(f, "|-----------|------|")?;
    writeln!(f, "| `ColorSample` | {} B |", size_of::<ColorSample>())?;
    writeln!(f, "| `ControlPoint` | {} B |", size_of::<ControlPoint>())?;
    writeln!(f, "| `SegmentDelta` | {} B |", size_of::<SegmentDelta>())?;
    writeln!(f, "| `LedState` (per LED) | {} B |", size_of::<LedState>())?;
    writeln!(f, "| `StaticColor` | {} B |", size_of::<StaticColor>())?;
    writeln!(f)?;
    Ok(())
}

fn gradient_size(capacity: usize) -> Option<usize> {
    Some(match capacity {
        2 => size_of::<GradientEngine<2>>(),
        4 => size_of::<GradientEngine<4>>(),
        8 => size_of::<GradientEngine<8>>(),
        16 => size_of::<GradientEngine<16>>(),
        32 => size_of::<GradientEngine<32>>(),
        _ => return None,
    })
}

fn write_gradient_table(f: &mut File, capacities: &[usize]) -> std::io::Result<()> {
    writeln!(f, "## `GradientEngine<P>`")?;
    writeln!(f)?;
    writeln!(f, "| Capacity | Total Size | Storage Cost | Overhead |")?;
    writeln!(f, "|----------|------------|--------------|----------|")?;

    let point_size = size_of::<ControlPoint>() + size_of::<SegmentDelta>();

    for &capacity in capacities {
        let Some(total_size) = gradient_size(capacity) else {
            continue;
        };

        let storage_cost = point_size * capacity;
        let overhead = total_size - storage_cost;

        writeln!(
            f,
            "| {} | {} B | {} B | {} B |",
            capacity, total_size, storage_cost, overhead
        )?;
    }

    writeln!(f)?;
    Ok(())
}

fn write_wave_set_table(f: &mut File) -> std::io::Result<()> {
    writeln!(f, "## `WaveSet<P, W>`")?;
    writeln!(f)?;
    writeln!(f, "| Points (P) | Gradients (W) | Total Size |")?;
    writeln!(f, "|------------|---------------|------------|")?;

    let rows = [
        (4, 2, size_of::<WaveSet<4, 2>>()),
        (4, 4, size_of::<WaveSet<4, 4>>()),
        (8, 4, size_of::<WaveSet<8, 4>>()),
        (8, 8, size_of::<WaveSet<8, 8>>()),
        (16, 4, size_of::<WaveSet<16, 4>>()),
    ];
    for (points, gradients, total_size) in rows {
        writeln!(f, "| {} | {} | {} B |", points, gradients, total_size)?;
    }

    writeln!(f)?;
    Ok(())
}

fn write_controller_table(f: &mut File) -> std::io::Result<()> {
    writeln!(f, "## `PatternController<LEDS, MAX_PATTERNS, P, W>`")?;
    writeln!(f)?;
    writeln!(
        f,
        "| LEDs | Patterns | P | W | Total Size | LED Buffer | Pattern Slot |"
    )?;
    writeln!(
        f,
        "|------|----------|---|---|------------|------------|--------------|"
    )?;

    let rows = [
        (30, 4, 4, 2, size_of::<PatternController<30, 4, 4, 2>>(), size_of::<Pattern<4, 2>>()),
        (60, 4, 4, 2, size_of::<PatternController<60, 4, 4, 2>>(), size_of::<Pattern<4, 2>>()),
        (60, 8, 8, 4, size_of::<PatternController<60, 8, 8, 4>>(), size_of::<Pattern<8, 4>>()),
        (144, 4, 8, 2, size_of::<PatternController<144, 4, 8, 2>>(), size_of::<Pattern<8, 2>>()),
        (300, 8, 8, 4, size_of::<PatternController<300, 8, 8, 4>>(), size_of::<Pattern<8, 4>>()),
    ];
    for (leds, patterns, points, gradients, total_size, slot_size) in rows {
        writeln!(
            f,
            "| {} | {} | {} | {} | {} B | {} B | {} B |",
            leds,
            patterns,
            points,
            gradients,
            total_size,
            leds * size_of::<LedState>(),
            slot_size
        )?;
    }

    writeln!(f)?;
    Ok(())
}

fn main() -> std::io::Result<()> {
    let report_path = "report.md";

    // Remove old report if it exists
    let _ = std::fs::remove_file(report_path);

    let mut file = File::create(report_path)?;

    println!("Generating memory footprint analysis...");

    write_header(&mut file)?;
    write_component_sizes(&mut file)?;

    let capacities = [2, 4, 8, 16, 32];
    write_gradient_table(&mut file, &capacities)?;
    write_wave_set_table(&mut file)?;
    write_controller_table(&mut file)?;

    // Key insights
    writeln!(&mut file, "## Key Insights")?;
    writeln!(&mut file)?;
    writeln!(
        &mut file,
        "- Every control point costs one `ControlPoint` plus one cached `SegmentDelta`"
    )?;
    writeln!(
        &mut file,
        "- Every pattern slot is as large as the largest pattern kind, usually the wave set"
    )?;
    writeln!(
        &mut file,
        "- The LED buffer grows linearly with strip length at {} B per LED",
        size_of::<LedState>()
    )?;
    writeln!(&mut file)?;
    writeln!(&mut file, "## Architecture Note")?;
    writeln!(&mut file)?;
    writeln!(
        &mut file,
        "Analysis performed on {}-bit host architecture. Embedded 32-bit targets will have slightly smaller sizes due to `usize` differences (4B vs 8B). Per-LED and per-point costs remain identical across architectures.",
        size_of::<usize>() * 8
    )?;

    println!("✓ Report generated: {}", report_path);
    println!("  View with: cat {}", report_path);

    Ok(())
}
