use crate::clock_time::ClockTime;
use crate::config::{Config, OutputFormat};
use crate::error::TimeParseError;
use anyhow::{Context, Result, anyhow};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use serde::Serialize;

/// Either the parsed time or the rejection message; serialized as a
/// `"time"` or `"error"` key.
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Time(ClockTime),
    Error(String),
}

/// Outcome of parsing one input, in the shape it is printed.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub input: &'a str,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl<'a> Report<'a> {
    pub fn new(input: &'a str, result: Result<ClockTime, TimeParseError>) -> Self {
        let outcome = match result {
            Ok(time) => Outcome::Time(time),
            Err(e) => Outcome::Error(e.to_string()),
        };
        Self { input, outcome }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, Outcome::Time(_))
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
            OutputFormat::Text => Ok(match &self.outcome {
                Outcome::Time(time) => format!("{} -> {}", self.input, time),
                Outcome::Error(error) => format!("{} -> error: {}", self.input, error),
            }),
        }
    }
}

pub struct Application {
    config: Config,
}

impl Application {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Parse one input and render the line to print for it.
    pub fn process_input(&self, input: &str) -> Result<(String, bool)> {
        let report = Report::new(input, crate::parse(input));
        let line = report.render(self.config.output.format)?;
        Ok((line, report.is_ok()))
    }

    /// Parse every input, printing one line each. Fails if any input was rejected.
    pub fn run_batch(&self, inputs: &[String]) -> Result<()> {
        let mut failures = 0;
        for input in inputs {
            let (line, ok) = self.process_input(input)?;
            println!("{}", line);
            if !ok {
                failures += 1;
            }
        }

        if failures > 0 {
            return Err(anyhow!("{} of {} inputs could not be parsed", failures, inputs.len()));
        }
        Ok(())
    }

    pub fn run_interactive(&self) -> Result<()> {
        log::info!("Starting interactive mode");
        let mut rl = DefaultEditor::new().context("Failed to initialize line editor")?;
        println!("Enter a time like \"6:37 PM\" or \"13:37\". Type 'exit' to quit.");

        loop {
            let readline = rl.readline(&self.config.output.prompt);
            match readline {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
                        break;
                    }
                    let _ = rl.add_history_entry(line.as_str());
                    let (output, _) = self.process_input(&line)?;
                    println!("{}", output);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    return Err(err).context("Failed to read input line");
                }
            }
        }
        Ok(())
    }

    pub fn run(&self, inputs: &[String]) -> Result<()> {
        if inputs.is_empty() { self.run_interactive() } else { self.run_batch(inputs) }
    }
}
