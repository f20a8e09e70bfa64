//! Line-oriented prompting with re-prompt on invalid input.

use std::io::{self, BufRead, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    /// The input stream ended; the session is over.
    #[error("input closed")]
    Eof,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// Reads answers from `input`, writing prompts and complaints to `output`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print `prompt` and return the trimmed answer (possibly empty).
    pub fn line(&mut self, prompt: &str) -> PromptResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(PromptError::Eof);
        }
        Ok(buf.trim().to_string())
    }

    /// Ask until the answer is an integer within the inclusive bounds.
    pub fn integer(&mut self, prompt: &str, min: Option<i64>, max: Option<i64>) -> PromptResult<i64> {
        loop {
            let answer = self.line(prompt)?;
            let Ok(value) = answer.parse::<i64>() else {
                writeln!(self.output, "Please enter a valid integer.")?;
                continue;
            };
            if let Some(min) = min.filter(|&m| value < m) {
                writeln!(self.output, "Value must be at least {min}")?;
                continue;
            }
            if let Some(max) = max.filter(|&m| value > m) {
                writeln!(self.output, "Value must be at most {max}")?;
                continue;
            }
            return Ok(value);
        }
    }

    /// Ask until the answer is a finite number of at least `min`.
    pub fn float(&mut self, prompt: &str, min: Option<f64>) -> PromptResult<f64> {
        loop {
            let answer = self.line(prompt)?;
            let value = match answer.parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    writeln!(self.output, "Please enter a valid number.")?;
                    continue;
                }
            };
            if let Some(min) = min.filter(|&m| value < m) {
                writeln!(self.output, "Value must be at least {min}")?;
                continue;
            }
            return Ok(value);
        }
    }

    /// Ask until the trimmed answer has at least `min_len` characters.
    pub fn text(&mut self, prompt: &str, min_len: usize) -> PromptResult<String> {
        loop {
            let answer = self.line(prompt)?;
            if answer.chars().count() >= min_len {
                return Ok(answer);
            }
            writeln!(self.output, "Input must be at least {min_len} character(s) long.")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(script: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(script.as_bytes(), Vec::new())
    }

    fn transcript(p: Prompter<&[u8], Vec<u8>>) -> String {
        String::from_utf8(p.into_parts().1).unwrap()
    }

    #[test]
    fn integer_reprompts_until_in_bounds() {
        let mut p = prompter("abc\n0\n9\n3\n");
        assert_eq!(p.integer("n: ", Some(1), Some(7)).unwrap(), 3);

        let out = transcript(p);
        assert!(out.contains("Please enter a valid integer."));
        assert!(out.contains("Value must be at least 1"));
        assert!(out.contains("Value must be at most 7"));
    }

    #[test]
    fn float_rejects_text_and_values_below_min() {
        let mut p = prompter("cheap\n0\nnan\n1.5\n");
        assert_eq!(p.float("price: ", Some(0.01)).unwrap(), 1.5);
        assert!(transcript(p).contains("Value must be at least 0.01"));
    }

    #[test]
    fn text_trims_and_requires_content() {
        let mut p = prompter("   \n  Fudge  \n");
        assert_eq!(p.text("name: ", 1).unwrap(), "Fudge");
    }

    #[test]
    fn end_of_input_is_reported() {
        let mut p = prompter("");
        assert!(matches!(p.line("x: "), Err(PromptError::Eof)));

        let mut p = prompter("nope\n");
        assert!(matches!(p.integer("x: ", None, None), Err(PromptError::Eof)));
    }
}
