//! External tool execution
//!
//! This module provides:
//! - Tool descriptors for the Go toolchain and git
//! - The `CommandRunner` seam and its child-process implementation

pub mod tool;

pub use tool::{CommandRunner, Invocation, ProcessRunner, ToolConfig, GIT, GO};
