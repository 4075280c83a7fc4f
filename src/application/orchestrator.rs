//! Orchestrator
//!
//! Declares the provision and cleanup pipelines over the configured
//! workspace and runs them.

use std::cell::RefCell;

use chrono::NaiveDate;

use crate::config::Config;
use crate::domain::entities::{AppTarget, ConfigArtifact, PackageManifest};
use crate::domain::ports::{Archiver, CommandRunner, FileSystem, Invocation, Reporter};
use crate::domain::services::{artifacts, standard_plan};
use crate::domain::value_objects::WorkspaceRoot;
use crate::error::{WorkspaceError, WorkspaceResult};

use super::clean::{CleanupEngine, CleanupOptions, CleanupReport};
use super::config_writer::{ConfigWriter, WriteOutcome};
use super::env_linker::{EnvironmentLinker, LinkOutcome};
use super::git_hooks::GitHookInstaller;
use super::package::PackagingEngine;
use super::pipeline::{Pipeline, PipelineReport, Step};

/// Result of the cleanup pipeline
#[derive(Debug, Clone, Default)]
pub struct CleanupOutcome {
    pub pipeline: PipelineReport,
    pub removals: CleanupReport,
}

impl CleanupOutcome {
    pub fn is_success(&self) -> bool {
        self.pipeline.is_success()
    }
}

/// Result of the packaging pipeline
#[derive(Debug, Clone, Default)]
pub struct PackageOutcome {
    pub pipeline: PipelineReport,
    pub manifest: Option<PackageManifest>,
}

impl PackageOutcome {
    pub fn is_success(&self) -> bool {
        self.pipeline.is_success()
    }
}

/// Runs the workspace pipelines against one root
pub struct Orchestrator<'a> {
    root: &'a WorkspaceRoot,
    config: &'a Config,
    fs: &'a dyn FileSystem,
    runner: &'a dyn CommandRunner,
    archiver: &'a dyn Archiver,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        root: &'a WorkspaceRoot,
        config: &'a Config,
        fs: &'a dyn FileSystem,
        runner: &'a dyn CommandRunner,
        archiver: &'a dyn Archiver,
    ) -> Self {
        Self {
            root,
            config,
            fs,
            runner,
            archiver,
        }
    }

    fn apps(&self) -> Vec<AppTarget> {
        self.config
            .workspace
            .apps
            .iter()
            .map(AppTarget::new)
            .collect()
    }

    /// install → environment → formatter → git hooks → lint-staged → editor
    pub fn provision(&self, reporter: &dyn Reporter) -> PipelineReport {
        Pipeline::new()
            .step(Step::abort("Dependency installation", |r| {
                self.install_dependencies(r)
            }))
            .step(Step::abort("Environment setup", |r| self.setup_environment(r)))
            .step(Step::abort("Prettier setup", |r| self.setup_prettier(r)))
            .step(Step::warn_and_continue("Husky setup", |r| {
                self.setup_git_hooks(r)
            }))
            .step(Step::abort("lint-staged setup", |r| self.setup_lint_staged(r)))
            .step(Step::abort("VS Code setup", |r| self.setup_vscode(r)))
            .run(reporter)
    }

    fn install_dependencies(&self, reporter: &dyn Reporter) -> WorkspaceResult<()> {
        reporter.heading("Installing dependencies...");
        let command = &self.config.tools.install;
        let invocation =
            Invocation::parse(command).ok_or_else(|| WorkspaceError::DependencyInstall {
                command: command.clone(),
                reason: "empty command".to_string(),
            })?;

        self.runner
            .run(&invocation, self.root.path())
            .map_err(|e| match e {
                WorkspaceError::CommandFailed { command, reason } => {
                    WorkspaceError::DependencyInstall { command, reason }
                }
                other => WorkspaceError::DependencyInstall {
                    command: invocation.to_string(),
                    reason: other.to_string(),
                },
            })?;

        reporter.success("Dependencies installed");
        Ok(())
    }

    fn setup_environment(&self, reporter: &dyn Reporter) -> WorkspaceResult<()> {
        reporter.heading("Setting up environment files...");
        let writer = ConfigWriter::new(self.fs);
        match writer.write(self.root, &artifacts::root_env())? {
            WriteOutcome::Preserved => reporter.info("Root .env file already exists"),
            _ => reporter.success("Created root .env file"),
        }

        let linker = EnvironmentLinker::new(self.fs);
        for app in self.apps() {
            match linker.link(self.root, &app)? {
                LinkOutcome::Linked => reporter.success(&format!(
                    "Linked {} -> {}",
                    app.env_path().display(),
                    app.link_target().display()
                )),
                LinkOutcome::Copied { reason } => reporter.warning(&format!(
                    "Could not create symlink ({}), copied .env to {}",
                    reason,
                    app.path().display()
                )),
            }
        }
        Ok(())
    }

    fn write_reporting(
        &self,
        artifact: &ConfigArtifact,
        reporter: &dyn Reporter,
    ) -> WorkspaceResult<()> {
        let outcome = ConfigWriter::new(self.fs).write(self.root, artifact)?;
        let path = artifact.path().display();
        match outcome {
            WriteOutcome::Created => reporter.success(&format!("Created {}", path)),
            WriteOutcome::Rewritten | WriteOutcome::Merged => {
                reporter.success(&format!("Updated {}", path))
            }
            WriteOutcome::Preserved => reporter.info(&format!("Kept existing {}", path)),
        }
        Ok(())
    }

    fn setup_prettier(&self, reporter: &dyn Reporter) -> WorkspaceResult<()> {
        reporter.heading("Setting up Prettier...");
        self.write_reporting(&artifacts::prettier_config(), reporter)?;
        self.write_reporting(&artifacts::prettier_ignore(), reporter)
    }

    fn setup_git_hooks(&self, reporter: &dyn Reporter) -> WorkspaceResult<()> {
        reporter.heading("Setting up Husky...");
        let tools = &self.config.tools;
        let hook = GitHookInstaller::new(self.fs, self.runner).install(
            self.root,
            &tools.hooks,
            &tools.hook_dir,
            &tools.lint_staged,
        )?;
        let shown = self.root.relative(&hook).unwrap_or(&hook);
        reporter.success(&format!("Husky configured with pre-commit hook: {}", shown.display()));
        Ok(())
    }

    fn setup_lint_staged(&self, reporter: &dyn Reporter) -> WorkspaceResult<()> {
        reporter.heading("Setting up lint-staged...");
        ConfigWriter::new(self.fs).write(self.root, &artifacts::lint_staged())?;
        reporter.success(&format!(
            "Added {} configuration to {}",
            artifacts::LINT_STAGED_KEY,
            artifacts::PACKAGE_DESCRIPTOR
        ));
        Ok(())
    }

    fn setup_vscode(&self, reporter: &dyn Reporter) -> WorkspaceResult<()> {
        reporter.heading("Setting up VS Code configuration...");
        self.write_reporting(
            &artifacts::vscode_settings(&self.config.workspace.apps),
            reporter,
        )?;
        self.write_reporting(&artifacts::vscode_extensions(), reporter)
    }

    /// notice → cleanup phases
    ///
    /// `options.package` is left to the caller, which runs [`Self::package`]
    /// once the removals have succeeded.
    pub fn cleanup(&self, options: CleanupOptions, reporter: &dyn Reporter) -> CleanupOutcome {
        let engine = CleanupEngine::new(self.fs);
        let removals = RefCell::new(CleanupReport::new());
        let phases = standard_plan(
            &self.config.workspace.apps,
            &self.config.workspace.packages,
        );

        let mut pipeline = Pipeline::new().step(Step::abort("Workspace check", |r| {
            engine.check_root(self.root)?;
            if !options.assume_yes {
                r.warning("This will remove all node_modules, build files, and caches.");
                r.warning("Make sure you have committed your changes to git.");
                r.info("Proceeding with cleanup...");
            }
            Ok(())
        }));

        for phase in &phases {
            let engine = &engine;
            let removals = &removals;
            pipeline.push(Step::abort(phase.heading.trim_end_matches('.'), move |r| {
                let report = engine.run_phase(self.root, phase, r)?;
                removals.borrow_mut().merge(report);
                Ok(())
            }));
        }

        let pipeline = pipeline.run(reporter);
        CleanupOutcome {
            pipeline,
            removals: removals.into_inner(),
        }
    }

    /// Archive the workspace as `<prefix>-<date>.tar.gz`.
    pub fn package(&self, date: NaiveDate, reporter: &dyn Reporter) -> PackageOutcome {
        let manifest = RefCell::new(None);

        let pipeline = Pipeline::new()
            .step(Step::abort("Package creation", |r| {
                r.heading("Creating project package...");
                let created = PackagingEngine::new(self.archiver).create(
                    self.root,
                    &self.config.package.prefix,
                    date,
                )?;
                r.success(&format!("Package created: {}", created.file_name()));
                r.info(&format!("Package size: {}", created.display_size()));
                *manifest.borrow_mut() = Some(created);
                Ok(())
            }))
            .run(reporter);

        PackageOutcome {
            pipeline,
            manifest: manifest.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{ArchiveRequest, Level};
    use crate::error::ErrorClass;
    use crate::infrastructure::archive::TarGzArchiver;
    use crate::infrastructure::events::RecordingReporter;
    use crate::infrastructure::fs::LocalFs;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    /// Succeeds or fails per program name
    struct FakeRunner {
        failing: Vec<&'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeRunner {
        fn new(failing: &[&'static str]) -> Self {
            Self {
                failing: failing.to_vec(),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, invocation: &Invocation, _cwd: &Path) -> WorkspaceResult<()> {
            let line = invocation.to_string();
            self.calls.borrow_mut().push(line.clone());
            if self.failing.iter().any(|f| line == *f) {
                return Err(WorkspaceError::CommandFailed {
                    command: line,
                    reason: "exited with status 1".to_string(),
                });
            }
            Ok(())
        }
    }

    struct BrokenArchiver;

    impl Archiver for BrokenArchiver {
        fn create(&self, request: &ArchiveRequest) -> WorkspaceResult<u64> {
            Err(WorkspaceError::Packaging {
                archive: request.output().to_path_buf(),
                reason: "disk full".to_string(),
            })
        }
    }

    fn workspace() -> (tempfile::TempDir, WorkspaceRoot) {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("package.json"),
            "{\"name\":\"ntr\",\"private\":true}",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("apps/api")).unwrap();
        fs::create_dir_all(dir.path().join("apps/web")).unwrap();
        let root = WorkspaceRoot::new(dir.path()).unwrap();
        (dir, root)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn provision_creates_every_artifact() {
        let (dir, root) = workspace();
        let config = Config::default();
        let runner = FakeRunner::new(&[]);
        let reporter = RecordingReporter::new();

        let report = Orchestrator::new(&root, &config, &LocalFs, &runner, &TarGzArchiver)
            .provision(&reporter);

        assert!(report.is_success(), "{:?}", report);
        assert_eq!(report.completed.len(), 6);
        assert_eq!(
            *runner.calls.borrow(),
            vec!["npm install", "npx husky install"]
        );

        let p = dir.path();
        for file in [
            ".env",
            ".prettierrc",
            ".prettierignore",
            ".husky/pre-commit",
            ".vscode/settings.json",
            ".vscode/extensions.json",
        ] {
            assert!(p.join(file).is_file(), "missing {}", file);
        }
        assert!(p.join("apps/api/.env").exists());
        assert!(p.join("apps/web/.env").exists());
        assert!(fs::read_to_string(p.join("package.json"))
            .unwrap()
            .contains("\"lint-staged\""));
    }

    #[test]
    fn install_failure_aborts_before_anything_else() {
        let (dir, root) = workspace();
        let config = Config::default();
        let runner = FakeRunner::new(&["npm install"]);
        let reporter = RecordingReporter::new();

        let report = Orchestrator::new(&root, &config, &LocalFs, &runner, &TarGzArchiver)
            .provision(&reporter);

        let aborted = report.aborted.unwrap();
        assert_eq!(aborted.class, ErrorClass::FatalSetup);
        assert_eq!(*runner.calls.borrow(), vec!["npm install"]);
        assert!(!dir.path().join(".env").exists());
        assert!(!dir.path().join(".husky").exists());
    }

    #[test]
    fn hook_failure_warns_and_continues() {
        let (dir, root) = workspace();
        let config = Config::default();
        let runner = FakeRunner::new(&["npx husky install"]);
        let reporter = RecordingReporter::new();

        let report = Orchestrator::new(&root, &config, &LocalFs, &runner, &TarGzArchiver)
            .provision(&reporter);

        assert!(report.is_success());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].step, "Husky setup");
        assert!(!dir.path().join(".husky/pre-commit").exists());
        assert!(dir.path().join(".vscode/settings.json").exists());
        assert!(reporter.contains(Level::Warning, "Husky setup failed, continuing"));
    }

    #[test]
    fn provision_is_idempotent() {
        let (dir, root) = workspace();
        let config = Config::default();
        let runner = FakeRunner::new(&[]);
        let orchestrator = Orchestrator::new(&root, &config, &LocalFs, &runner, &TarGzArchiver);

        orchestrator.provision(&RecordingReporter::new());
        let snapshot = |f: &str| fs::read(dir.path().join(f)).unwrap();
        let before: Vec<_> = ["package.json", ".prettierrc", ".vscode/settings.json", ".env"]
            .iter()
            .map(|f| snapshot(f))
            .collect();

        let reporter = RecordingReporter::new();
        assert!(orchestrator.provision(&reporter).is_success());

        let after: Vec<_> = ["package.json", ".prettierrc", ".vscode/settings.json", ".env"]
            .iter()
            .map(|f| snapshot(f))
            .collect();
        assert_eq!(before, after);
        assert!(reporter.contains(Level::Info, "Root .env file already exists"));
    }

    #[test]
    fn missing_package_descriptor_is_fatal() {
        let (dir, root) = workspace();
        fs::remove_file(dir.path().join("package.json")).unwrap();
        let config = Config::default();
        let runner = FakeRunner::new(&[]);

        let report = Orchestrator::new(&root, &config, &LocalFs, &runner, &TarGzArchiver)
            .provision(&RecordingReporter::new());

        let aborted = report.aborted.unwrap();
        assert_eq!(aborted.step, "lint-staged setup");
        assert_eq!(report.skipped, vec!["VS Code setup"]);
    }

    #[test]
    fn cleanup_without_package() {
        let (dir, root) = workspace();
        fs::create_dir_all(dir.path().join("node_modules/a")).unwrap();
        fs::write(dir.path().join(".env.example"), "A=").unwrap();
        let config = Config::default();
        let runner = FakeRunner::new(&[]);
        let reporter = RecordingReporter::new();

        let outcome = Orchestrator::new(&root, &config, &LocalFs, &runner, &TarGzArchiver)
            .cleanup(CleanupOptions::new(), &reporter);

        assert!(outcome.is_success());
        assert!(!reporter.contains(Level::Heading, "Creating project package"));
        assert!(!dir.path().join("node_modules").exists());
        assert!(dir.path().join(".env.example").exists());
        assert!(reporter.contains(Level::Warning, "This will remove all node_modules"));
        assert!(runner.calls.borrow().is_empty());
    }

    #[test]
    fn cleanup_with_yes_skips_notice() {
        let (_dir, root) = workspace();
        let config = Config::default();
        let runner = FakeRunner::new(&[]);
        let reporter = RecordingReporter::new();

        Orchestrator::new(&root, &config, &LocalFs, &runner, &TarGzArchiver)
            .cleanup(CleanupOptions::new().with_assume_yes(true), &reporter);

        assert!(reporter.messages(Level::Warning).is_empty());
    }

    #[test]
    fn package_creates_archive() {
        let (dir, root) = workspace();
        let config = Config::default();
        let runner = FakeRunner::new(&[]);
        let reporter = RecordingReporter::new();

        let outcome = Orchestrator::new(&root, &config, &LocalFs, &runner, &TarGzArchiver)
            .package(date(), &reporter);

        assert!(outcome.is_success());
        let manifest = outcome.manifest.unwrap();
        assert_eq!(manifest.file_name(), "ntr-clean-2024-01-15.tar.gz");
        assert!(dir.path().join("ntr-clean-2024-01-15.tar.gz").is_file());
        assert!(reporter.contains(Level::Success, "Package created: ntr-clean-2024-01-15.tar.gz"));
        assert!(reporter.contains(Level::Info, "Package size: "));
    }

    #[test]
    fn packaging_failure_is_fatal_and_reports_no_success() {
        let (dir, root) = workspace();
        let config = Config::default();
        let runner = FakeRunner::new(&[]);
        let reporter = RecordingReporter::new();

        let outcome = Orchestrator::new(&root, &config, &LocalFs, &runner, &BrokenArchiver)
            .package(date(), &reporter);

        assert!(!outcome.is_success());
        assert!(outcome.manifest.is_none());
        assert_eq!(
            outcome.pipeline.aborted.unwrap().class,
            ErrorClass::FatalPackaging
        );
        assert!(reporter
            .messages(Level::Success)
            .iter()
            .all(|m| !m.contains("Package created")));
        assert!(reporter.contains(Level::Error, "Package creation failed"));
        assert!(!dir.path().join("ntr-clean-2024-01-15.tar.gz").exists());
    }
}
