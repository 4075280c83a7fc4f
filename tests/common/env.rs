//! Test environment builder for isolated ntr testing.
//!
//! Provides `TestEnv` - a temporary workspace shaped like the NTR monorepo,
//! with external tools replaced through `ntr.toml`, plus helpers to run the
//! CLI against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running an ntr CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON ({}): {}", e, l))
            })
            .collect()
    }
}

/// Stand-in for an external tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Succeeds,
    Fails,
}

impl Tool {
    /// A command line that exits 0 or non-zero without side effects
    fn command_line(self) -> String {
        let bin = env!("CARGO_BIN_EXE_ntr");
        match self {
            Tool::Succeeds => format!("{} --version", bin),
            Tool::Fails => format!("{} --no-such-flag", bin),
        }
    }
}

/// Isolated workspace in a temp directory
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// An empty directory
    pub fn empty() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_ntr")),
        }
    }

    /// A monorepo skeleton whose installer and hook manager succeed
    pub fn workspace() -> Self {
        Self::with_tools(Tool::Succeeds, Tool::Succeeds)
    }

    /// A monorepo skeleton with the given installer and hook manager behavior
    pub fn with_tools(install: Tool, hooks: Tool) -> Self {
        let env = Self::empty();
        env.write(
            "package.json",
            "{\n  \"name\": \"ntr\",\n  \"private\": true,\n  \"workspaces\": [\"apps/*\", \"packages/*\"],\n  \"scripts\": {\n    \"dev\": \"turbo dev\"\n  }\n}\n",
        );
        env.write(".env.example", "API_PORT=3001\n");
        env.write("apps/api/src/main.ts", "export {};\n");
        env.write("apps/web/src/main.tsx", "export {};\n");
        env.write("packages/eslint-config/index.js", "module.exports = {};\n");
        env.write("packages/typescript-config/base.json", "{}\n");
        env.write_config(install, hooks, "");
        env
    }

    /// Rewrite `ntr.toml` with tool stand-ins plus extra TOML
    pub fn write_config(&self, install: Tool, hooks: Tool, extra: &str) {
        // Literal strings keep Windows paths intact.
        let config = format!(
            "[tools]\ninstall = '{}'\nhooks = '{}'\n{}",
            install.command_line(),
            hooks.command_line(),
            extra
        );
        self.write("ntr.toml", &config);
    }

    /// Get path relative to the workspace root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn exists(&self, relative: &str) -> bool {
        std::fs::symlink_metadata(self.path(relative)).is_ok()
    }

    /// Write a file, creating parent directories
    pub fn write(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn create_dirs(&self, dirs: &[&str]) {
        for dir in dirs {
            std::fs::create_dir_all(self.path(dir)).expect("Failed to create directory");
        }
    }

    /// Run ntr with the workspace as the current directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(self.root.path(), args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("NO_COLOR", "1")
            .env_remove("NTR_ARCHIVE_PREFIX");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute ntr");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
