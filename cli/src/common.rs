//! Common utils.

use codespan_reporting::{
    diagnostic::{Diagnostic, Label},
    files::SimpleFiles,
    term::termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor},
    term::{emit, Config as ReportingConfig},
};

use std::io::{self, Write};

use luhn_algorithms::{DomainError, Number, ParseError};

/// Exit code if some of the checked numbers do not satisfy the checksum.
pub const INVALID_EXIT_CODE: i32 = 1;
/// Exit code on malformed inputs, out-of-domain generator args or invalid command-line usage.
pub const ERROR_EXIT_CODE: i32 = 2;

/// Outcome of checking a batch of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckOutcome {
    AllValid,
    SomeInvalid,
    Errored,
}

impl CheckOutcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::AllValid => 0,
            Self::SomeInvalid => INVALID_EXIT_CODE,
            Self::Errored => ERROR_EXIT_CODE,
        }
    }
}

/// Outputs results to stdout and diagnostics to stderr.
pub struct Reporter {
    files: SimpleFiles<String, String>,
    out: StandardStream,
    err: StandardStream,
    config: ReportingConfig,
}

impl Reporter {
    pub fn new(out_color: ColorChoice, err_color: ColorChoice) -> Self {
        Self {
            files: SimpleFiles::new(),
            out: StandardStream::stdout(out_color),
            err: StandardStream::stderr(err_color),
            config: ReportingConfig::default(),
        }
    }

    /// Parses and checks a single input, reporting the outcome.
    pub fn check(&mut self, name: String, input: &str) -> anyhow::Result<CheckOutcome> {
        match input.parse::<Number>() {
            Ok(number) => {
                let is_valid = number.is_valid();
                self.report_validity(input, is_valid)?;
                Ok(if is_valid {
                    CheckOutcome::AllValid
                } else {
                    CheckOutcome::SomeInvalid
                })
            }
            Err(err) => {
                self.report_parse_error(name, input, &err)?;
                Ok(CheckOutcome::Errored)
            }
        }
    }

    fn report_validity(&mut self, input: &str, is_valid: bool) -> io::Result<()> {
        let (color, verdict) = if is_valid {
            (Color::Green, "valid")
        } else {
            (Color::Red, "invalid")
        };
        write!(self.out, "{input}: ")?;
        self.out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(self.out, "{verdict}")?;
        self.out.reset()?;
        writeln!(self.out)
    }

    pub fn report_number(&mut self, number: u64) -> io::Result<()> {
        writeln!(self.out, "{number}")
    }

    /// Reports a parsing error.
    pub fn report_parse_error(
        &mut self,
        name: String,
        input: &str,
        err: &ParseError,
    ) -> anyhow::Result<()> {
        let file = self.files.add(name, input.to_owned());
        let labels = match err {
            ParseError::Empty => vec![],
            ParseError::Overflow => {
                vec![Label::primary(file, 0..input.len()).with_message("Number is out of range")]
            }
            _ => err
                .span()
                .map(|range| Label::primary(file, range).with_message("Error occurred here"))
                .into_iter()
                .collect(),
        };
        let diagnostic = Diagnostic::error()
            .with_message(err.to_string())
            .with_code("PARSE")
            .with_labels(labels);
        emit(&mut self.err.lock(), &self.config, &self.files, &diagnostic)?;
        Ok(())
    }

    pub fn report_warning(&mut self, message: &str) -> anyhow::Result<()> {
        let diagnostic = Diagnostic::warning().with_message(message);
        emit(&mut self.err.lock(), &self.config, &self.files, &diagnostic)?;
        Ok(())
    }

    /// Reports a domain error for generator args.
    pub fn report_domain_error(&mut self, err: &DomainError) -> anyhow::Result<()> {
        let mut diagnostic = Diagnostic::error()
            .with_message(err.to_string())
            .with_code("DOMAIN");
        if let DomainError::EmptyPaddedRange { .. } = err {
            diagnostic = diagnostic.with_notes(vec![
                "Bounds are padded to the body length: the lower bound with zeros, \
                 the upper bound with nines"
                    .to_owned(),
            ]);
        }
        emit(&mut self.err.lock(), &self.config, &self.files, &diagnostic)?;
        Ok(())
    }
}
