//! Simple CLI for validating and generating numbers satisfying the Luhn checksum.

use clap::{Args, Parser, Subcommand, ValueEnum};
use codespan_reporting::term::termcolor::ColorChoice;
use is_terminal::IsTerminal;
use rand::{rngs::StdRng, SeedableRng};

use std::{
    io::{self, Read},
    process,
};

use luhn_algorithms::{Generator, ParseError, MAX_LENGTH};

mod common;

use crate::common::{CheckOutcome, Reporter, ERROR_EXIT_CODE};

const ABOUT: &str = "CLI for validating and generating numbers satisfying the Luhn checksum.";

const AFTER_HELP: &str = "\
EXIT CODES:
    0    Normal exit; all checked numbers are valid
    1    Some checked numbers do not satisfy the checksum
    2    Malformed input, invalid generator arguments or command-line options";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorPreference {
    /// Use colors if the output stream is a terminal.
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorPreference {
    fn color_choice(self, is_terminal: bool) -> ColorChoice {
        match self {
            Self::Auto if is_terminal => ColorChoice::Auto,
            Self::Auto | Self::Never => ColorChoice::Never,
            Self::Always => ColorChoice::Always,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about = ABOUT, after_help = AFTER_HELP)]
struct Cli {
    /// Coloring of the output and diagnostics.
    #[arg(long, global = true, env = "COLOR", value_enum, default_value_t = ColorPreference::Auto)]
    color: ColorPreference,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check whether numbers satisfy the Luhn checksum.
    Check(CheckArgs),
    /// Generate random numbers satisfying the Luhn checksum.
    Gen(GenArgs),
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Numbers to check. Each number must consist of ASCII decimal digits only.
    /// If omitted, whitespace-separated numbers will be read from stdin.
    numbers: Vec<String>,
}

#[derive(Debug, Args)]
struct GenArgs {
    /// Total number of digits including the check digit. Lengths greater than 18
    /// are clamped to 18.
    #[arg(long, short = 'l')]
    length: u32,
    /// Lower bound for leading digits; padded with trailing zeros to the length
    /// of the number without the check digit.
    #[arg(long, requires = "upper")]
    lower: Option<u64>,
    /// Upper bound for leading digits; padded with trailing nines to the length
    /// of the number without the check digit.
    #[arg(long, requires = "lower")]
    upper: Option<u64>,
    /// Number of numbers to generate.
    #[arg(long, short = 'n', default_value_t = 1)]
    count: usize,
    /// Seed for the random number generator. If omitted, the generator is seeded from
    /// the OS entropy source.
    #[arg(long, env = "LUHN_SEED")]
    seed: Option<u64>,
}

impl Cli {
    fn run(self) -> anyhow::Result<i32> {
        let mut reporter = Reporter::new(
            self.color.color_choice(io::stdout().is_terminal()),
            self.color.color_choice(io::stderr().is_terminal()),
        );
        match self.command {
            Command::Check(args) => args.run(&mut reporter),
            Command::Gen(args) => args.run(&mut reporter),
        }
    }
}

impl CheckArgs {
    fn run(self, reporter: &mut Reporter) -> anyhow::Result<i32> {
        let (inputs, source) = if self.numbers.is_empty() {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            let inputs: Vec<_> = buffer.split_whitespace().map(str::to_owned).collect();
            (inputs, "stdin")
        } else {
            (self.numbers, "arg")
        };

        if inputs.is_empty() {
            reporter.report_parse_error(source.to_owned(), "", &ParseError::Empty)?;
            return Ok(ERROR_EXIT_CODE);
        }

        let mut outcome = CheckOutcome::AllValid;
        for (i, input) in inputs.iter().enumerate() {
            let name = format!("{source} #{}", i + 1);
            outcome = outcome.max(reporter.check(name, input)?);
        }
        Ok(outcome.exit_code())
    }
}

impl GenArgs {
    fn run(self, reporter: &mut Reporter) -> anyhow::Result<i32> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut generator = Generator::new(rng);
        if self.length > MAX_LENGTH {
            reporter.report_warning(&format!(
                "Length {} exceeds the maximum supported length; it is clamped to {MAX_LENGTH}",
                self.length
            ))?;
        }

        for _ in 0..self.count {
            let generated = match (self.lower, self.upper) {
                (Some(lower), Some(upper)) => {
                    generator.generate_in_range(lower, upper, self.length)
                }
                _ => generator.generate_random(self.length),
            };
            match generated {
                Ok(number) => reporter.report_number(number)?,
                Err(err) => {
                    reporter.report_domain_error(&err)?;
                    return Ok(ERROR_EXIT_CODE);
                }
            }
        }
        Ok(0)
    }
}

fn main() -> anyhow::Result<()> {
    let exit_code = Cli::parse().run()?;
    if exit_code != 0 {
        process::exit(exit_code);
    }
    Ok(())
}
