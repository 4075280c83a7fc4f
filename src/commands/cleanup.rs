//! Cleanup command handler

use anyhow::Result;

use ntr::application::{CleanupOptions, Orchestrator};
use ntr::domain::entities::PackageManifest;
use ntr::domain::ports::Reporter;
use ntr::infrastructure::{LocalFs, SystemCommandRunner, TarGzArchiver};
use ntr::ui::primitives::Icon;

use super::{GlobalArgs, Session};

const PACKAGE_CONTENTS: [&str; 6] = [
    "Source code for NestJS backend and React frontend",
    "Shared configurations and packages",
    "Setup and cleanup scripts",
    "Documentation and VS Code settings",
    "Environment template (.env.example)",
    "Git configuration and hooks",
];

fn render_package_summary(reporter: &dyn Reporter, manifest: &PackageManifest) {
    reporter.heading("Package contents:");
    for item in PACKAGE_CONTENTS {
        reporter.info(item);
    }

    reporter.heading("To use this package:");
    let steps = [
        format!("1. Extract: tar -xzf {}", manifest.file_name()),
        "2. Navigate: cd ntr".to_string(),
        "3. Setup: npm run setup".to_string(),
        "4. Start development: npm run dev".to_string(),
    ];
    for step in &steps {
        reporter.info(step);
    }
}

/// Execute the cleanup command; returns whether every pipeline completed.
pub fn cmd_cleanup(args: &GlobalArgs, package: bool, yes: bool) -> Result<bool> {
    let session = Session::open("cleanup", args)?;
    let reporter = session.reporter.as_ref();
    let unicode = session.ui.unicode;

    reporter.heading(&format!(
        "{} NTR Project Cleanup",
        Icon::Clean.render(unicode)
    ));

    let options = CleanupOptions::new()
        .with_package(package)
        .with_assume_yes(yes);
    // Archive names carry the UTC calendar date.
    let today = chrono::Utc::now().date_naive();

    let fs = LocalFs::new();
    let runner = SystemCommandRunner::new(session.ui.json);
    let archiver = TarGzArchiver::new();
    let orchestrator = Orchestrator::new(&session.root, &session.config, &fs, &runner, &archiver);

    let outcome = orchestrator.cleanup(options, reporter);
    if !outcome.is_success() {
        return Ok(fail(reporter, "Cleanup did not complete"));
    }

    reporter.heading(&format!(
        "{} Cleanup completed successfully!",
        Icon::Sparkles.render(unicode)
    ));
    reporter.detail(&format!(
        "{} removed, {} not found, {} failed",
        outcome.removals.removed.len(),
        outcome.removals.missing.len(),
        outcome.removals.failed.len()
    ));

    if options.package {
        let packaged = orchestrator.package(today, reporter);
        match &packaged.manifest {
            Some(manifest) if packaged.is_success() => render_package_summary(reporter, manifest),
            _ => return Ok(fail(reporter, "Packaging did not complete")),
        }
    }

    reporter.heading(&format!("{} All done!", Icon::Done.render(unicode)));
    if !options.package {
        reporter.info("To create a distributable package, run: ntr cleanup --package");
    }
    reporter.info("To setup the project again, run: ntr setup");
    reporter.complete("cleanup", true);
    Ok(true)
}

fn fail(reporter: &dyn Reporter, message: &str) -> bool {
    reporter.error(message);
    reporter.complete("cleanup", false);
    false
}
