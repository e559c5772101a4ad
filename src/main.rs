use clap::Parser;
use tracing_subscriber::EnvFilter;

use potassium_portions_rs::PortionCalculator;
use potassium_portions_rs::cli::{CalcArgs, Cli, Command};
use potassium_portions_rs::error::Result;
use potassium_portions_rs::interface::{
    display_entries, display_error, display_results, prompt_entry, prompt_intake, prompt_yes_no,
    results_json,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so results on stdout stay clean. `RUST_LOG` overrides the default.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "potassium_portions_rs=debug"
    } else {
        "potassium_portions_rs=warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or_default() {
        Command::Interactive => cmd_interactive(),
        Command::Calc(args) => cmd_calc(args),
    }
}

/// Prompt for vegetables, then the intake, and show the portions.
fn cmd_interactive() -> Result<()> {
    let mut calc = PortionCalculator::new();

    println!("Potassium Intake Calculator");
    println!();

    // Add vegetables until an empty name
    while let Some(raw) = prompt_entry()? {
        match calc.add_entry(&raw.name, &raw.potassium) {
            Ok(entry) => println!("Added: {}", entry.name()),
            Err(e) => display_error(&e.to_string()),
        }
    }

    display_entries(calc.entries());

    loop {
        let raw = prompt_intake()?;
        let outcome = calc.set_intake(&raw).and_then(|_| calc.calculate());

        match outcome {
            Ok(results) => {
                display_results(&results);
                break;
            }
            Err(e) => {
                display_error(&e.to_string());
                if !prompt_yes_no("Try again?", true)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Compute portions from arguments in one shot.
fn cmd_calc(args: CalcArgs) -> Result<()> {
    let results = args.build_calculator()?.calculate()?;

    if args.json {
        println!("{}", results_json(&results)?);
    } else {
        display_results(&results);
    }

    Ok(())
}
