use clap::{Args, Parser, Subcommand};

use crate::error::{PotassiumError, Result};
use crate::state::PortionCalculator;

/// Potassium — compute vegetable portions for a desired potassium intake.
#[derive(Parser, Debug)]
#[command(name = "potassium")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enter vegetables and the desired intake through prompts.
    Interactive,

    /// Compute portions from command-line arguments.
    Calc(CalcArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Vegetable as NAME=MG, where MG is potassium per 100g. Repeatable.
    #[arg(long = "veg", value_name = "NAME=MG")]
    pub vegetables: Vec<String>,

    /// Desired potassium intake in mg.
    #[arg(short, long, value_name = "MG")]
    pub intake: Option<String>,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,
}

impl CalcArgs {
    /// Build a calculator from the arguments, validating every entry and the intake.
    pub fn build_calculator(&self) -> Result<PortionCalculator> {
        let mut calc = PortionCalculator::new();

        for raw in &self.vegetables {
            let (name, potassium) = split_veg_arg(raw)?;
            calc.add_entry(name, potassium)?;
        }

        calc.set_intake(self.intake.as_deref().unwrap_or_default())?;
        Ok(calc)
    }
}

/// Split `NAME=MG` on the last `=`. Both halves are validated by the calculator.
pub fn split_veg_arg(raw: &str) -> Result<(&str, &str)> {
    raw.rsplit_once('=')
        .ok_or_else(|| PotassiumError::InvalidArgument(format!("expected NAME=MG, got {:?}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn calc_args(args: &[&str]) -> CalcArgs {
        let argv = ["potassium", "calc"].iter().chain(args.iter()).copied();
        match Cli::try_parse_from(argv).unwrap().command {
            Some(Command::Calc(args)) => args,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_split_veg_arg() {
        assert_eq!(split_veg_arg("Spinach=558").unwrap(), ("Spinach", "558"));
        assert_eq!(split_veg_arg("Beet=greens=909").unwrap(), ("Beet=greens", "909"));
        assert!(matches!(
            split_veg_arg("Spinach"),
            Err(PotassiumError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_cli_parses_calc() {
        let args = calc_args(&["--veg", "Spinach=558", "--veg", "Kale=320", "--intake", "3500"]);
        assert_eq!(args.vegetables, vec!["Spinach=558", "Kale=320"]);
        assert_eq!(args.intake.as_deref(), Some("3500"));
        assert!(!args.json);

        let calc = args.build_calculator().unwrap();
        assert_eq!(calc.len(), 2);
        assert_eq!(calc.entries()[1].name(), "Kale");
        assert_eq!(calc.intake().map(|t| t.milligrams()), Some(3500.0));
    }

    #[test]
    fn test_invalid_veg_value_is_accepted_by_parser() {
        // Bad values reach build_calculator instead of failing argument parsing
        let args = calc_args(&["--veg", "Spinach=0", "--intake", "3500"]);

        assert!(matches!(
            args.build_calculator(),
            Err(PotassiumError::Validation(ValidationError::NonPositivePotassium))
        ));
    }

    #[test]
    fn test_build_calculator_rejects_malformed() {
        for bad in ["Spinach", "=558", "Spinach=", "Spinach=many"] {
            let args = calc_args(&["--veg", bad, "--intake", "3500"]);
            assert!(args.build_calculator().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_build_calculator_missing_intake() {
        let args = calc_args(&["--veg", "Spinach=558"]);
        assert!(matches!(
            args.build_calculator(),
            Err(PotassiumError::Validation(ValidationError::MissingIntake))
        ));
    }

    #[test]
    fn test_cli_defaults_to_interactive() {
        let cli = Cli::try_parse_from(["potassium"]).unwrap();
        assert!(matches!(cli.command.unwrap_or_default(), Command::Interactive));
        assert!(!cli.verbose);
    }
}
