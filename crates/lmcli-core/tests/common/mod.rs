#![allow(dead_code)]

use lmcli_core::runtime::{CommandRunner, Invocation};
use lmcli_core::tui::ConsolePrompter;
use lmcli_core::{ProductConfig, Result, ScaffoldError, Scaffolder, TemplateFetcher};
use std::cell::RefCell;
use std::io::Cursor;
use std::path::Path;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MAIN_TEMPLATE: &str = "package main\n// {{configProvider}}\n";

#[derive(Clone)]
pub struct TestConfig;

impl ProductConfig for TestConfig {
    fn name(&self) -> &'static str {
        "lmcli"
    }

    fn display_name(&self) -> &'static str {
        "LibMicroCMD"
    }

    fn default_template_url(&self) -> &'static str {
        "http://127.0.0.1:1/unused"
    }

    fn template_version(&self) -> &'static str {
        "v1"
    }

    fn project_key_prefix(&self) -> &'static str {
        "com.libmicro"
    }

    fn cli_description(&self) -> &'static str {
        "LibMicro Command Line Interface"
    }
}

/// Records every invocation; optionally fails the one whose args match
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<Invocation>>,
    fail_on: Option<Vec<String>>,
}

impl RecordingRunner {
    pub fn failing_on(args: &[&str]) -> Self {
        Self {
            calls: RefCell::default(),
            fail_on: Some(args.iter().map(|s| s.to_string()).collect()),
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// `program arg arg ...` per call, for compact assertions
    pub fn command_lines(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|c| format!("{} {}", c.program, c.args.join(" ")))
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, invocation: &Invocation) -> Result<()> {
        self.calls.borrow_mut().push(invocation.clone());

        if self.fail_on.as_ref() == Some(&invocation.args) {
            return Err(ScaffoldError::ToolFailed {
                label: invocation.label.clone(),
                status: exit_status(1),
                stdout: "go: finding module for package libmicro".to_string(),
                stderr: "go: libmicro: module not found".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(unix)]
fn exit_status(code: i32) -> std::process::ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    std::process::ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
fn exit_status(code: i32) -> std::process::ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    std::process::ExitStatus::from_raw(code as u32)
}

pub type TestPrompter = ConsolePrompter<Cursor<Vec<u8>>, Vec<u8>>;
pub type TestScaffolder = Scaffolder<TestConfig, TestPrompter, RecordingRunner>;

pub fn prompter(input: &str) -> TestPrompter {
    ConsolePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

pub fn fetcher(server: &MockServer) -> TemplateFetcher {
    TemplateFetcher::new(Url::parse(&server.uri()).unwrap())
}

pub fn scaffolder(
    server: &MockServer,
    base_dir: &Path,
    input: &str,
    runner: RecordingRunner,
) -> TestScaffolder {
    Scaffolder::new(TestConfig, fetcher(server), prompter(input), runner)
        .in_dir(base_dir)
        .reveal_project(false)
}

/// Serve `body` for `<version>.<name>.template` with the given status
pub async fn mount_template(server: &MockServer, file: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{}", file)))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

pub fn prompt_output(scaffolder: &TestScaffolder) -> String {
    String::from_utf8_lossy(scaffolder.prompter().output()).into_owned()
}

pub fn is_empty_dir(dir: &Path) -> bool {
    std::fs::read_dir(dir).unwrap().next().is_none()
}
