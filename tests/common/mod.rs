// Shared test helpers for integration tests.
// Used by cli_contract.rs and cli_flows.rs.
#![allow(dead_code)]

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_githook-runner"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// A project directory holding hook config fixtures.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn new() -> Self {
        Project {
            dir: tempfile::tempdir().expect("failed to create temp project"),
        }
    }

    pub fn with_file(self, name: &str, content: &str) -> Self {
        std::fs::write(self.dir.path().join(name), content).expect("failed to write fixture");
        self
    }

    pub fn with_package_json(self, content: &str) -> Self {
        self.with_file("package.json", content)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name))
            .unwrap_or_else(|e| panic!("failed to read {name}: {e}"))
    }

    pub fn run(&self, args: &[&str], stdin_input: &str) -> RunOutput {
        self.run_with_env(args, stdin_input, &[])
    }

    /// Runs the binary inside the project with the given args, stdin and
    /// extra environment.
    pub fn run_with_env(
        &self,
        args: &[&str],
        stdin_input: &str,
        env: &[(&str, &str)],
    ) -> RunOutput {
        let mut cmd = Command::new(binary_path());
        cmd.args(args)
            .current_dir(self.path())
            .env("SHELL", "sh")
            .env_remove("HUSKY_GIT_PARAMS")
            .env_remove("HUSKY_GIT_STDIN")
            .env_remove("HUSKY_DEBUG")
            .env_remove("RUST_LOG");
        for (key, value) in env {
            cmd.env(key, value);
        }
        let output = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .and_then(|mut child| {
                let write_result = child
                    .stdin
                    .take()
                    .unwrap()
                    .write_all(stdin_input.as_bytes());
                if let Err(e) = write_result {
                    // Hooks that ignore stdin may exit before we finish writing.
                    if e.kind() != ErrorKind::BrokenPipe {
                        return Err(e);
                    }
                }
                child.wait_with_output()
            })
            .expect("failed to execute binary");

        RunOutput {
            stdout: String::from_utf8(output.stdout).expect("stdout not valid UTF-8"),
            stderr: String::from_utf8(output.stderr).expect("stderr not valid UTF-8"),
            exit_code: output.status.code().unwrap_or(-1),
        }
    }
}
