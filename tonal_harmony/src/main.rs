// Tonal Harmony: CLI entry point for the harmony report.
//
// Prints the chord map for every scale in the catalog, and optionally the
// chordal relationships between two named scales.
//
// Usage:
//   harmony_report [OPTIONS]
//     --catalog <PATH>             Catalog JSON (default: built-in western catalog)
//     --config <PATH>              Analysis config JSON
//     --relate <SCALE1> <SCALE2>   Also print relationships between two scales
//     --chord <NAME>               Restrict --relate to one chord
//     --measure-second-in-second   Measure second-scale roots in the second scale
//
// Log output goes to stderr and is controlled by RUST_LOG
// (default: tonal_harmony=info).

use std::path::PathBuf;

use tonal_harmony::render::{render_chord_map, render_relationships};
use tonal_harmony::{
    AnalysisConfig, Catalog, Result, RootBasis, all_chordal_relationships, chordal_relationships,
};
use tracing::info;

#[derive(Debug, Default)]
struct Args {
    catalog: Option<PathBuf>,
    config: Option<PathBuf>,
    relate: Option<(String, String)>,
    chord: Option<String>,
    measure_second_in_second: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tonal_harmony=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::western(),
    };
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    if args.measure_second_in_second {
        config.second_root_basis = RootBasis::SecondScale;
    }

    info!(
        scales = catalog.scales.len(),
        chords = catalog.chords.len(),
        "fitting catalog"
    );
    catalog.fit_all();
    for scale in &catalog.scales {
        println!("{}", render_chord_map(scale, &catalog.chords));
    }

    if let Some((name_1, name_2)) = &args.relate {
        let scale_1 = catalog.scale(name_1)?;
        let scale_2 = catalog.scale(name_2)?;
        let relationships = match &args.chord {
            Some(chord_name) => {
                let chord = catalog.chord(chord_name)?;
                vec![chordal_relationships(scale_1, scale_2, chord, &config)]
            }
            None => all_chordal_relationships(scale_1, scale_2, &catalog.chords, &config),
        };
        for rel in &relationships {
            print!("{}", render_relationships(rel));
        }
    }

    Ok(())
}

/// Parse command-line arguments. Plain `std::env::args()` matching.
fn parse_args() -> Args {
    let mut args = Args::default();
    let argv: Vec<String> = std::env::args().collect();
    let mut i = 1;

    while i < argv.len() {
        match argv[i].as_str() {
            "--catalog" => {
                i += 1;
                args.catalog = Some(required_value(&argv, i, "--catalog").into());
            }
            "--config" => {
                i += 1;
                args.config = Some(required_value(&argv, i, "--config").into());
            }
            "--relate" => {
                let first = required_value(&argv, i + 1, "--relate");
                let second = required_value(&argv, i + 2, "--relate");
                args.relate = Some((first, second));
                i += 2;
            }
            "--chord" => {
                i += 1;
                args.chord = Some(required_value(&argv, i, "--chord"));
            }
            "--measure-second-in-second" => {
                args.measure_second_in_second = true;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if args.chord.is_some() && args.relate.is_none() {
        eprintln!("--chord only applies together with --relate");
        std::process::exit(1);
    }

    args
}

fn required_value(argv: &[String], i: usize, flag: &str) -> String {
    argv.get(i).cloned().unwrap_or_else(|| {
        eprintln!("{flag} requires a value");
        std::process::exit(1);
    })
}

fn print_usage() {
    println!("Usage: harmony_report [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --catalog <PATH>             Catalog JSON (default: built-in western catalog)");
    println!("  --config <PATH>              Analysis config JSON");
    println!("  --relate <SCALE1> <SCALE2>   Also print relationships between two scales");
    println!("  --chord <NAME>               Restrict --relate to one chord");
    println!("  --measure-second-in-second   Measure second-scale roots in the second scale");
    println!("  --help, -h                   Show this help");
}
