//! Server-rendered HTML of the web form.
//!
//! No template engine: the page is a `Display` impl over [`FormPage`], with
//! every interpolated string passed through [`Escaped`].

use std::fmt::{self, Display, Formatter, Write};

use calculator_sdk::Operation;

use super::routes::FORM_PATH;

/// Outcome block shown under the form after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Rendered expression, e.g. `√16 = 4`.
    Success(String),
    /// Failure message.
    Failure(String),
}

/// Everything needed to render the page.
#[derive(Debug, Clone)]
pub struct FormPage {
    pub selected: Operation,
    /// Raw operand text as the user typed it; index 1 is unused for unary operations.
    pub inputs: [String; 2],
    pub outcome: Option<Outcome>,
}

impl FormPage {
    #[must_use]
    pub fn new(selected: Operation) -> Self {
        Self {
            selected,
            inputs: [String::new(), String::new()],
            outcome: None,
        }
    }

    #[must_use]
    pub fn with_inputs(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.inputs = [a.into(), b.into()];
        self
    }

    #[must_use]
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    fn write_selector(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<label for="operation">Operation</label>"#)?;
        writeln!(
            f,
            r#"<select id="operation" name="operation"
 onchange="window.location.search='operation='+this.value">"#
        )?;
        for op in Operation::ALL {
            let selected = if op == self.selected { " selected" } else { "" };
            writeln!(
                f,
                r#"<option value="{}"{selected}>{}</option>"#,
                op.id(),
                Escaped(&op.label())
            )?;
        }
        writeln!(f, "</select>")
    }

    fn write_inputs(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let labels = self.selected.operand_labels();
        for ((name, label), value) in ["a", "b"].iter().zip(labels).zip(&self.inputs) {
            writeln!(
                f,
                r#"<label for="{name}">{}</label>
<input type="text" inputmode="decimal" id="{name}" name="{name}" value="{}" required>"#,
                Escaped(&capitalize(label)),
                Escaped(value)
            )?;
        }
        Ok(())
    }

    fn write_outcome(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            None => Ok(()),
            Some(Outcome::Success(expression)) => writeln!(
                f,
                r#"<div class="result" role="status">Result: {}</div>"#,
                Escaped(expression)
            ),
            Some(Outcome::Failure(message)) => writeln!(
                f,
                r#"<div class="error" role="alert">Error: {}</div>"#,
                Escaped(message)
            ),
        }
    }

    fn write_about(f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<details>\n<summary>About the operations</summary>\n<ul>"
        )?;
        for op in Operation::ALL {
            writeln!(
                f,
                "<li><strong>{}</strong>: {}</li>",
                Escaped(&op.label()),
                Escaped(op.description())
            )?;
        }
        writeln!(
            f,
            "</ul>\n<p>Trigonometric functions take angles in degrees.</p>\n</details>"
        )
    }

    fn write_examples(f: &mut Formatter<'_>) -> fmt::Result {
        const EXAMPLES: [&str; 6] = [
            "5 + 3 = 8",
            "2^3 = 8",
            "\u{221a}16 = 4",
            "sin(30\u{b0}) = 0.5",
            "5! = 120",
            "ln(e) = 1",
        ];
        writeln!(f, "<details>\n<summary>Examples</summary>\n<ul>")?;
        for example in EXAMPLES {
            writeln!(f, "<li><code>{}</code></li>", Escaped(example))?;
        }
        writeln!(f, "</ul>\n</details>")
    }
}

impl Display for FormPage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Calculator</title>
<style>
body {{ font-family: system-ui, sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }}
label, select, input, button {{ display: block; margin: .4rem 0; }}
.result {{ padding: .6rem; background: #e7f6ec; border-left: 4px solid #2e8b57; }}
.error {{ padding: .6rem; background: #fdecea; border-left: 4px solid #c0392b; }}
</style>
</head>
<body>
<h1>Calculator</h1>
<form method="post" action="{FORM_PATH}">"#
        )?;
        self.write_selector(f)?;
        self.write_inputs(f)?;
        writeln!(f, r#"<button type="submit">Calculate</button>"#)?;
        writeln!(f, "</form>")?;
        self.write_outcome(f)?;
        Self::write_about(f)?;
        Self::write_examples(f)?;
        writeln!(f, "</body>\n</html>")
    }
}

/// HTML-escapes the wrapped text on display.
pub struct Escaped<'a>(pub &'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    first.to_uppercase().chain(chars).collect()
}
