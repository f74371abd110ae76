//! The text menu loop.

use std::io::Write;

use anyhow::Result;
use calculator::domain::{parse_operand, render_expression};
use calculator_sdk::{CalculatorClientV1, CalculatorError, Operation};

use crate::input::{Input, LineSource};

const RULE_WIDTH: usize = 50;

/// What the user picked at the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Exit,
    Run(Operation),
}

fn parse_choice(raw: &str) -> Option<Choice> {
    match raw.trim().parse::<u8>().ok()? {
        0 => Some(Choice::Exit),
        n => Operation::from_menu_number(n).map(Choice::Run),
    }
}

/// Input ended (EOF or Ctrl-C) while the loop was waiting for a line.
struct Closed;

/// Interactive numbered menu over a [`CalculatorClientV1`].
pub struct Menu<'a, S, W> {
    client: &'a dyn CalculatorClientV1,
    source: S,
    out: W,
    pause_after_result: bool,
}

impl<'a, S: LineSource, W: Write> Menu<'a, S, W> {
    #[must_use]
    pub fn new(
        client: &'a dyn CalculatorClientV1,
        source: S,
        out: W,
        pause_after_result: bool,
    ) -> Self {
        Self {
            client,
            source,
            out,
            pause_after_result,
        }
    }

    /// Run until the user exits or input ends. Calculator failures are
    /// printed and never end the loop.
    ///
    /// # Errors
    /// Returns an error only when reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "Welcome to the calculator!")?;

        loop {
            self.print_menu()?;
            let Ok(choice) = self.read("\nChoose an option (0-11): ")? else {
                return self.say_goodbye_interrupted();
            };

            match parse_choice(&choice) {
                Some(Choice::Exit) => {
                    writeln!(self.out, "\nThank you for using the calculator!")?;
                    return Ok(());
                }
                Some(Choice::Run(operation)) => {
                    if self.run_operation(operation)?.is_err() {
                        return self.say_goodbye_interrupted();
                    }
                }
                None => {
                    writeln!(self.out, "Invalid option! Choose a number from 0 to 11.")?;
                    if self.pause()?.is_err() {
                        return self.say_goodbye_interrupted();
                    }
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "\n{rule}")?;
        writeln!(self.out, "{:^RULE_WIDTH$}", "CALCULATOR")?;
        writeln!(self.out, "{rule}")?;
        for op in Operation::ALL {
            writeln!(self.out, "{}. {}", op.menu_number(), op.label())?;
        }
        writeln!(self.out, "0. Exit")?;
        writeln!(self.out, "{rule}")?;
        Ok(())
    }

    /// Prompt for the operands, evaluate and print the outcome.
    fn run_operation(&mut self, operation: Operation) -> Result<Result<(), Closed>> {
        writeln!(self.out, "\n{}", operation.label())?;

        let mut operands = Vec::with_capacity(operation.arity().count());
        for label in operation.operand_labels() {
            match self.read_operand(label)? {
                Ok(value) => operands.push(value),
                Err(closed) => return Ok(Err(closed)),
            }
        }

        match self.client.evaluate(operation, &operands) {
            Ok(value) => {
                tracing::debug!(%operation, "result printed");
                writeln!(
                    self.out,
                    "Result: {}",
                    render_expression(operation, &operands, &value)
                )?;
            }
            Err(e) => writeln!(self.out, "Error: {e}")?,
        }

        self.pause()
    }

    /// Wait for Enter when pausing is enabled.
    fn pause(&mut self) -> Result<Result<(), Closed>> {
        if !self.pause_after_result {
            return Ok(Ok(()));
        }
        Ok(self.read("\nPress Enter to continue...")?.map(drop))
    }

    /// Re-prompt until the line parses as a finite number.
    fn read_operand(&mut self, label: &str) -> Result<Result<f64, Closed>> {
        let prompt = format!("Enter the {label}: ");
        loop {
            let raw = match self.read(&prompt)? {
                Ok(raw) => raw,
                Err(closed) => return Ok(Err(closed)),
            };
            match parse_operand(&raw) {
                Ok(value) => return Ok(Ok(value)),
                Err(e @ CalculatorError::InvalidInput { .. }) => {
                    writeln!(self.out, "Error: {e}")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn read(&mut self, prompt: &str) -> Result<Result<String, Closed>> {
        Ok(match self.source.read_line(prompt, &mut self.out)? {
            Input::Line(line) => Ok(line),
            Input::Interrupted | Input::Eof => Err(Closed),
        })
    }

    fn say_goodbye_interrupted(&mut self) -> Result<()> {
        writeln!(self.out, "\nCalculator closed by the user.")?;
        Ok(())
    }
}
