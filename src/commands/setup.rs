//! Setup command handler

use anyhow::Result;

use ntr::application::Orchestrator;
use ntr::infrastructure::{LocalFs, SystemCommandRunner, TarGzArchiver};
use ntr::ui::primitives::Icon;

use super::{GlobalArgs, Session};

const NEXT_STEPS: [&str; 4] = [
    "Review and update the .env file with your configuration",
    "Run \"npm run dev\" to start the development servers",
    "Open the project in VS Code for the best development experience",
    "Install recommended VS Code extensions when prompted",
];

/// Execute the setup command; returns whether the pipeline completed.
pub fn cmd_setup(args: &GlobalArgs) -> Result<bool> {
    let session = Session::open("setup", args)?;
    let reporter = session.reporter.as_ref();
    let unicode = session.ui.unicode;

    reporter.heading(&format!(
        "{} Setting up NTR monorepo...",
        Icon::Setup.render(unicode)
    ));

    let fs = LocalFs::new();
    let runner = SystemCommandRunner::new(session.ui.json);
    let archiver = TarGzArchiver::new();
    let report = Orchestrator::new(&session.root, &session.config, &fs, &runner, &archiver)
        .provision(reporter);

    if report.is_success() {
        reporter.heading(&format!(
            "{} Setup completed successfully!",
            Icon::Done.render(unicode)
        ));
        reporter.heading("Next steps:");
        for (i, step) in NEXT_STEPS.iter().enumerate() {
            reporter.info(&format!("{}. {}", i + 1, step));
        }
    } else {
        for skipped in &report.skipped {
            reporter.detail(&format!("Skipped: {}", skipped));
        }
        reporter.error("Setup did not complete");
    }

    reporter.complete("setup", report.is_success());
    Ok(report.is_success())
}
