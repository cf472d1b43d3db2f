//! Line-based console prompts
//!
//! Prompts read one line per answer and use its first whitespace-delimited
//! token. The console prompter works over any reader/writer pair so the
//! scaffolding pipeline can be driven by scripted input, such as piped answers
//! or a test script.

use crate::error::{Result, ScaffoldError};
use std::io::{BufRead, Write};

/// Interactive questions asked while scaffolding
pub trait Prompter {
    /// Ask whether to proceed with `what`. Defaults to yes.
    fn confirm(&mut self, what: &str) -> Result<bool>;

    /// Present a numbered menu and return the 0-based index of the chosen
    /// option. Invalid answers re-prompt.
    fn select(&mut self, title: &str, options: &[&str]) -> Result<usize>;
}

/// Interpret a yes/no answer: empty or `y`-prefixed (any case) is yes
pub fn parse_yes_no(answer: &str) -> bool {
    let token = first_token(answer);
    token.is_empty() || token.to_lowercase().starts_with('y')
}

/// Interpret a menu answer against `count` options, returning the 0-based index
pub fn parse_menu_choice(answer: &str, count: usize) -> Option<usize> {
    match first_token(answer).parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(n - 1),
        _ => None,
    }
}

fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

/// Prompter reading answers from `input` and printing questions to `output`
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line; `None` once the input is exhausted
    fn read_answer(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consume the prompter, returning its output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn confirm(&mut self, what: &str) -> Result<bool> {
        write!(
            self.output,
            "\n:> Do you want to proceed with {}? [Yes | No] (Default: Yes): ",
            what
        )?;
        self.output.flush()?;

        // Closed input reads as an empty answer
        let answer = self.read_answer()?.unwrap_or_default();
        writeln!(self.output)?;

        Ok(parse_yes_no(&answer))
    }

    fn select(&mut self, title: &str, options: &[&str]) -> Result<usize> {
        loop {
            writeln!(self.output, "\n{}\n=====================================\n", title)?;
            for (i, option) in options.iter().enumerate() {
                writeln!(self.output, "\t{}: {}", i + 1, option)?;
            }
            writeln!(self.output)?;
            write!(self.output, "Select config provider (ctrl+c to cancel): ")?;
            self.output.flush()?;

            let answer = self.read_answer()?.ok_or(ScaffoldError::InputClosed)?;
            match parse_menu_choice(&answer, options.len()) {
                Some(index) => {
                    writeln!(self.output)?;
                    return Ok(index);
                }
                None => {
                    writeln!(self.output, "\nUnknown option selected, try again.")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const OPTIONS: [&str; 3] = ["one\t- first", "two\t- second", "three\t- third"];

    fn prompter(input: &str) -> ConsolePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no(""));
        assert!(parse_yes_no("\n"));
        assert!(parse_yes_no("y"));
        assert!(parse_yes_no("Yep"));
        assert!(parse_yes_no("YES please"));
        assert!(!parse_yes_no("no"));
        assert!(!parse_yes_no("x"));
        assert!(!parse_yes_no("N"));
    }

    #[test]
    fn test_parse_menu_choice_bounds() {
        assert_eq!(parse_menu_choice("1", 3), Some(0));
        assert_eq!(parse_menu_choice("3\n", 3), Some(2));
        assert_eq!(parse_menu_choice("  2  ", 3), Some(1));
        assert_eq!(parse_menu_choice("0", 3), None);
        assert_eq!(parse_menu_choice("4", 3), None);
        assert_eq!(parse_menu_choice("-1", 3), None);
        assert_eq!(parse_menu_choice("abc", 3), None);
        assert_eq!(parse_menu_choice("", 3), None);
    }

    #[test]
    fn test_confirm_defaults_to_yes() {
        let mut p = prompter("\nno\nyes\n");
        assert!(p.confirm("vendoring").unwrap());
        assert!(!p.confirm("vendoring").unwrap());
        assert!(p.confirm("vendoring").unwrap());

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains(":> Do you want to proceed with vendoring? [Yes | No] (Default: Yes): "));
    }

    #[test]
    fn test_confirm_on_closed_input() {
        let mut p = prompter("");
        assert!(p.confirm("anything").unwrap());
    }

    #[test]
    fn test_select_reprompts_until_valid() {
        let mut p = prompter("0\n4\nfoo\n2\n");
        assert_eq!(p.select("Pick one", &OPTIONS).unwrap(), 1);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches("Unknown option selected").count(), 3);
        assert_eq!(out.matches("Pick one").count(), 4);
        assert!(out.contains("\t1: one\t- first\n"));
        assert!(out.contains("\t3: three\t- third\n"));
    }

    #[test]
    fn test_select_fails_on_closed_input() {
        let mut p = prompter("9\n");
        let err = p.select("Pick one", &OPTIONS).unwrap_err();
        assert!(matches!(err, ScaffoldError::InputClosed));
    }
}
