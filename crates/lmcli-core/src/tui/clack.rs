//! Charm-style prompts using cliclack
//!
//! Questions share the cliclack frame with the pipeline's log lines. Answers
//! are still typed tokens, read with the same rules as the console prompter.

use super::prompts::{parse_menu_choice, parse_yes_no, Prompter};
use crate::error::{Result, ScaffoldError};

/// Prompter for the interactive terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ClackPrompter;

impl Prompter for ClackPrompter {
    fn confirm(&mut self, what: &str) -> Result<bool> {
        let answer: String =
            cliclack::input(format!("Do you want to proceed with {}? [Yes | No]", what))
                .placeholder("Yes")
                .required(false)
                .interact()?;

        Ok(parse_yes_no(&answer))
    }

    fn select(&mut self, title: &str, options: &[&str]) -> Result<usize> {
        let count = options.len();
        cliclack::note(title, menu_listing(options))?;

        // Invalid answers are rejected in place and asked again
        let answer: String = cliclack::input("Select config provider (ctrl+c to cancel)")
            .validate(move |input: &String| validate_menu_answer(input, count))
            .interact()?;

        parse_menu_choice(&answer, count).ok_or(ScaffoldError::InvalidSelection {
            index: 0,
            count,
        })
    }
}

/// Accept only a number in `1..=count`
pub fn validate_menu_answer(answer: &str, count: usize) -> std::result::Result<(), &'static str> {
    parse_menu_choice(answer, count)
        .map(|_| ())
        .ok_or("Unknown option selected")
}

/// One `<n>: <label>` line per option
pub fn menu_listing(options: &[&str]) -> String {
    options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("{}: {}", i + 1, option.replace('\t', " ")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_menu_answer() {
        assert_eq!(validate_menu_answer("1", 3), Ok(()));
        assert_eq!(validate_menu_answer(" 3 ", 3), Ok(()));
        assert_eq!(validate_menu_answer("0", 3), Err("Unknown option selected"));
        assert_eq!(validate_menu_answer("4", 3), Err("Unknown option selected"));
        assert_eq!(validate_menu_answer("yaml", 3), Err("Unknown option selected"));
        assert_eq!(validate_menu_answer("", 3), Err("Unknown option selected"));
    }

    #[test]
    fn test_menu_listing_numbers_options() {
        let listing = menu_listing(&[
            "cmdconfigprovider\t- Command line given parameters",
            "envconfigprovider\t- Environment variables given parameters",
        ]);
        assert_eq!(
            listing,
            "1: cmdconfigprovider - Command line given parameters\n\
             2: envconfigprovider - Environment variables given parameters"
        );
    }
}
