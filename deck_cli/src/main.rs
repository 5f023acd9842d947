//! # Deckframe CLI
//!
//! Sizes and lays out a deck from the command line.
//!
//! ```text
//! deck_cli --width 16 --depth 12 --height 3 --ledger direct
//! deck_cli --input site.json --settings deck.toml --json
//! ```
//!
//! Exits with status 1 when the deck cannot be built prescriptively.

mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use deck_core::span_tables::JoistSpacing;
use deck_core::structure::DeckStructure;
use deck_core::{generate_structure_with, LedgerAttachment, SiteInput};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Prescriptive deck sizing and framing layout
#[derive(Parser, Debug)]
#[command(name = "deck_cli", version, about)]
struct Cli {
    /// Site description as JSON; flags below override its fields
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Deck width along the house (ft)
    #[arg(long, required_unless_present = "input")]
    width: Option<f64>,

    /// Deck depth away from the house (ft)
    #[arg(long, required_unless_present = "input")]
    depth: Option<f64>,

    /// Deck surface height above grade (ft)
    #[arg(long, required_unless_present = "input")]
    height: Option<f64>,

    /// direct, standoff or freestanding
    #[arg(long)]
    ledger: Option<LedgerAttachment>,

    /// Soil bearing capacity (psf)
    #[arg(long, value_name = "PSF")]
    soil: Option<u32>,

    /// Frost depth (in)
    #[arg(long, value_name = "IN")]
    frost: Option<u32>,

    /// Requested cantilever (ft); attached decks only
    #[arg(long, value_name = "FT")]
    cantilever: Option<f64>,

    /// Joist spacing: 12, 16 or 24 (in)
    #[arg(long, value_parser = parse_spacing)]
    spacing: Option<JoistSpacing>,

    /// Design settings TOML file
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Print the full structure as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_spacing(s: &str) -> Result<JoistSpacing, String> {
    let inches: u32 = s.trim().parse().map_err(|_| format!("'{s}' is not a whole number of inches"))?;
    JoistSpacing::try_from(inches).map_err(|e| e.to_string())
}

impl Cli {
    /// Build the site description from the input file and flags.
    fn site_input(&self) -> Result<SiteInput> {
        let mut site = match &self.input {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str::<SiteInput>(&raw)
                    .with_context(|| format!("invalid site description in {}", path.display()))?
            }
            None => SiteInput::new(
                self.width.context("--width is required")?,
                self.depth.context("--depth is required")?,
                self.height.context("--height is required")?,
            ),
        };

        if self.input.is_some() {
            if let Some(width) = self.width {
                site.width_ft = width;
            }
            if let Some(depth) = self.depth {
                site.depth_ft = depth;
            }
            if let Some(height) = self.height {
                site.height_ft = height;
            }
        }
        if let Some(ledger) = self.ledger {
            site.ledger_attachment = ledger;
        }
        if let Some(soil) = self.soil {
            site.soil_bearing_psf = soil;
        }
        if let Some(frost) = self.frost {
            site.frost_depth_in = frost;
        }
        if let Some(cantilever) = self.cantilever {
            site.cantilever_ft = Some(cantilever);
        }
        Ok(site)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut design = settings::load_settings(cli.settings.as_deref())?;
    if let Some(spacing) = cli.spacing {
        design = design.with_joist_spacing(spacing);
    }

    let site = cli.site_input()?;
    info!(ledger = %site.ledger_attachment, "generating deck");
    let deck = generate_structure_with(&site, &design);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&deck)?);
    } else {
        print_summary(&deck);
    }

    Ok(if deck.compliant {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_summary(deck: &DeckStructure) {
    let site = &deck.input;

    println!("═══════════════════════════════════════");
    println!("  DECK FRAMING");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Size:     {:.1}' x {:.1}' ({:.0} SF)", site.width_ft, site.depth_ft, site.area_sqft());
    println!("  Height:   {:.1}'", site.height_ft);
    println!("  Ledger:   {}", site.ledger_attachment);
    println!("  Soil:     {} psf, frost {}\"", site.soil_bearing_psf, site.frost_depth_in);
    println!();

    if let Some(framing) = &deck.framing {
        println!("Framing:");
        println!("  Cantilever:  {:.2}'", framing.cantilever_ft);
        println!("  Joist span:  {:.2}'", framing.joist_span_ft);
        println!("  Beam span:   {:.2}' ({} posts per row)", framing.beam_span_ft, framing.posts_per_row);
        println!("  Beam rows:   {}", framing.beam_rows_y_ft.len());
        println!();
    }

    println!("Members:");
    print_member("Joists", deck.joist_size.map(|s| format!("{} at {}\" O.C.", s, deck.joist_spacing_in)));
    print_member("Beam", deck.beam_designation());
    print_member("Posts", deck.post_size.map(|s| s.to_string()));
    print_member("Footings", deck.footing_diameter_in.map(|d| format!("{}\" diameter", d)));
    println!();

    if !deck.notes.is_empty() {
        println!("Notes:");
        for note in &deck.notes {
            println!("  {}", note);
        }
        println!();
    }

    if let Some(takeoff) = deck.takeoff() {
        println!("Takeoff:");
        println!("  Footings: {:>3}", takeoff.footing_count);
        println!("  Posts:    {:>3}  ({:.1} LF)", takeoff.post_count, takeoff.post_lf);
        println!("  Joists:   {:>3}  ({:.1} LF)", takeoff.joist_count, takeoff.joist_lf);
        println!("  Beam:          ({:.1} LF)", takeoff.beam_lf);
        println!("  Ledger:        ({:.1} LF)", takeoff.ledger_lf);
        println!("  Rim:           ({:.1} LF)", takeoff.rim_lf);
        println!();
    }

    for error in &deck.errors {
        println!("{} {}", status_icon(false), error);
    }

    println!("═══════════════════════════════════════");
    println!(
        "  RESULT: {} {}",
        if deck.compliant { "COMPLIANT" } else { "NOT COMPLIANT" },
        status_icon(deck.compliant)
    );
    println!("═══════════════════════════════════════");
}

fn print_member(label: &str, value: Option<String>) {
    println!("  {:<9} {}", format!("{}:", label), value.as_deref().unwrap_or("-"));
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("deck_cli").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_fill_site_input() {
        let cli = parse(&[
            "--width", "16", "--depth", "12", "--height", "3",
            "--ledger", "freestanding", "--soil", "2000", "--frost", "24",
        ]);
        let site = cli.site_input().unwrap();
        assert_eq!((site.width_ft, site.depth_ft, site.height_ft), (16.0, 12.0, 3.0));
        assert_eq!(site.ledger_attachment, LedgerAttachment::Freestanding);
        assert_eq!(site.soil_bearing_psf, 2000);
        assert_eq!(site.frost_depth_in, 24);
        assert_eq!(site.cantilever_ft, None);
    }

    #[test]
    fn test_defaults_match_site_input() {
        let site = parse(&["--width", "10", "--depth", "8", "--height", "2"]).site_input().unwrap();
        assert_eq!(site, SiteInput::new(10.0, 8.0, 2.0));
    }

    #[test]
    fn test_dimensions_required_without_input() {
        let result = Cli::try_parse_from(["deck_cli", "--width", "16"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_spacing_flag() {
        let cli = parse(&["--width", "16", "--depth", "12", "--height", "3", "--spacing", "24"]);
        assert_eq!(cli.spacing, Some(JoistSpacing::Oc24));
        assert!(Cli::try_parse_from(["deck_cli", "--input", "x.json", "--spacing", "18"]).is_err());
    }

    #[test]
    fn test_unknown_ledger_rejected() {
        let result = Cli::try_parse_from([
            "deck_cli", "--width", "16", "--depth", "12", "--height", "3", "--ledger", "bolted",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_file_with_overrides() {
        let path = std::env::temp_dir().join(format!("deck_cli_site_{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{ "width_ft": 20, "depth_ft": 8, "height_ft": 3, "ledger_attachment": "standoff" }"#,
        )
        .unwrap();

        let path_arg = path.to_string_lossy().to_string();
        let cli = parse(&["--input", &path_arg, "--height", "5", "--cantilever", "1.5"]);
        let site = cli.site_input().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(site.width_ft, 20.0);
        assert_eq!(site.height_ft, 5.0);
        assert_eq!(site.ledger_attachment, LedgerAttachment::Standoff);
        assert_eq!(site.cantilever_ft, Some(1.5));
    }
}
