//! # Shedwright CLI Application
//!
//! Generates the framing model for a building configuration and prints a
//! summary with the cutting list.
//!
//! Usage:
//!   shed_cli [CONFIG] [--json] [--out PATH] [--members]
//!
//! Without a CONFIG file the default 3000 x 4000 mm building is used.
//! Verbosity follows `RUST_LOG` (e.g. `RUST_LOG=shed_core=debug`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use shed_core::errors::{ShedError, ShedResult};
use shed_core::model::{generate, BuildingModel};
use shed_core::{load_configuration, save_report, BuildingConfiguration};

/// Timber outbuilding generator
#[derive(Parser, Debug)]
#[command(name = "shed_cli", version, about)]
struct Args {
    /// Building configuration (JSON); defaults are used when omitted
    config: Option<PathBuf>,

    /// Print the full model as JSON instead of the summary
    #[arg(long)]
    json: bool,

    /// Write a generation report to this path
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// List every placed member
    #[arg(long)]
    members: bool,
}

fn run(args: &Args) -> ShedResult<()> {
    let config = match &args.config {
        Some(path) => load_configuration(path)?,
        None => BuildingConfiguration::default(),
    };

    let model = generate(&config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&model)?);
    } else {
        print_summary(&config, &model);
        if args.members {
            print_members(&model);
        }
    }

    if let Some(out) = &args.out {
        save_report(&model, out)?;
        if !args.json {
            println!();
            println!("Report written to {}", out.display());
        }
    }

    Ok(())
}

fn print_summary(config: &BuildingConfiguration, model: &BuildingModel) {
    let dims = &model.dimensions;
    let roof = &model.roof;

    println!("═══════════════════════════════════════");
    println!("  SHED FRAMING SUMMARY");
    println!("═══════════════════════════════════════");
    println!();
    println!("Footprints:");
    println!("  Base:   {} x {} mm", dims.base.width_mm, dims.base.depth_mm);
    println!("  Frame:  {} x {} mm", dims.frame.width_mm, dims.frame.depth_mm);
    println!("  Roof:   {} x {} mm", dims.roof.width_mm, dims.roof.depth_mm);
    println!();
    println!("Walls:   {} ({})", config.wall_variant.display_name(), config.wall_section());
    println!(
        "Roof:    {} ({}), pitch {:.1}°, rise {:.0} mm",
        config.roof.style.display_name(),
        config.roof.rafter_section,
        roof.pitch_rad.to_degrees(),
        roof.rise_mm
    );
    println!(
        "         bearing {:.0} mm at low edge, {:.0} mm at high edge",
        roof.low_edge_height_mm, roof.high_edge_height_mm
    );

    if !model.overlays.is_empty() {
        println!();
        println!("Doors:");
        for overlay in &model.overlays {
            println!("  {:<12} {:<6} {:?}", overlay.id, overlay.wall.name(), overlay.status);
        }
    }

    if !model.events.is_empty() {
        println!();
        println!("Adjustments:");
        for event in &model.events {
            println!("  {}", event);
        }
    }

    println!();
    println!("Cutting list:");
    for row in &model.bom {
        println!("  {}", row);
    }
    println!("───────────────────────────────────────");
    println!("  {} pieces", shed_core::bom::total_pieces(&model.bom));
}

fn print_members(model: &BuildingModel) {
    println!();
    println!("Members:");
    for m in &model.members {
        println!(
            "  {:<22} {:<10} {:>8.0} x {:>5.0} x {:>5.0}  at ({:>7.1}, {:>7.1}, {:>7.1})",
            m.role,
            m.material.to_string(),
            m.size.x,
            m.size.y,
            m.size.z,
            m.anchor.x,
            m.anchor.y,
            m.anchor.z
        );
    }
}

fn report_error(e: &ShedError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
