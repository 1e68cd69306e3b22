use std::collections::HashMap;

use clap::{Parser, ValueEnum};

use pugh::{render, ScoreMatrix};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Aligned plain-text table
    Table,
    /// Static HTML table
    Html,
    /// Unicode bar chart per criterion
    Chart,
}

#[derive(Parser, Debug)]
#[command(name = "pugh")]
#[command(about = "Pugh decision-matrix demo run", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format for the derived matrix
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Narrate each derivation step on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// The illustrative run: score travel options, rescale into [0,1], derive
/// the favor-one-criterion mixtures and an intuition-weighted column, then
/// print through the chosen adapter.
fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut travel = ScoreMatrix::new(["Car", "Bus", "Train"]);
    travel.set_scores([
        ("Car", "Fuel", -1.0),
        ("Bus", "Fuel", 0.5),
        ("Train", "Fuel", 1.0),
        ("Car", "Price", 0.5),
        ("Bus", "Price", 0.5),
        ("Train", "Price", 1.0),
        ("Car", "Comfort", 1.0),
        ("Bus", "Comfort", -0.5),
    ])?;

    if cli.verbose {
        eprintln!(
            "Scored {} options against {} criteria",
            travel.options().len(),
            travel.criteria().len()
        );
    }

    let mut derived = travel.rescaled()?;
    if cli.verbose {
        eprintln!(
            "Rescaled into [0,1] (was {:.2}..{:.2})",
            travel.min_score()?,
            travel.max_score()?
        );
    }

    derived.weight_mixture()?;
    if cli.verbose {
        eprintln!("Mixture columns: {} criteria total", derived.criteria().len());
    }

    let intuit = HashMap::from([("Fuel".to_string(), 1.0), ("Price".to_string(), 0.1)]);
    derived.weight_criteria("Intuit", &intuit)?;

    let use_colors = !cli.no_color && render::should_use_colors();
    match cli.format {
        OutputFormat::Table => println!("{}", render::format_table(&derived, use_colors)),
        OutputFormat::Html => println!("{}", render::format_html(&derived)),
        OutputFormat::Chart => println!("{}", render::format_bar_charts(&derived, use_colors)?),
    }

    Ok(())
}
