//! Interactive prompts
//!
//! `ClackPrompter` asks on the terminal; `ConsolePrompter` reads answers from
//! any line source, which is how scripted runs drive the pipeline.

mod clack;
mod prompts;

pub use clack::{menu_listing, validate_menu_answer, ClackPrompter};
pub use prompts::{parse_menu_choice, parse_yes_no, ConsolePrompter, Prompter};
