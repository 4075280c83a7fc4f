//! Command handlers

pub mod cleanup;
pub mod setup;

use std::path::PathBuf;

use anyhow::{Context, Result};

use ntr::config::{self, ColorMode, Config};
use ntr::domain::ports::Reporter;
use ntr::infrastructure::{ConsoleReporter, JsonReporter};
use ntr::ui::UiContext;
use ntr::WorkspaceRoot;

/// Flags shared by every command
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub root: Option<PathBuf>,
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorMode>,
}

/// Everything a command needs once the workspace is resolved
pub struct Session {
    pub root: WorkspaceRoot,
    pub config: Config,
    pub ui: UiContext,
    pub reporter: Box<dyn Reporter>,
}

impl Session {
    pub fn open(command: &str, args: &GlobalArgs) -> Result<Self> {
        let dir = match &args.root {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("cannot determine current directory")?,
        };
        let root = WorkspaceRoot::new(&dir)?;
        let (config, warnings) = config::load_for_root(root.path())?;
        let ui = UiContext::new(args.json, args.verbose, args.color, &config);

        let reporter: Box<dyn Reporter> = if ui.json {
            Box::new(JsonReporter::stdout(command))
        } else {
            Box::new(ConsoleReporter::new(ui.color, ui.unicode, ui.verbose > 0))
        };

        for warning in &warnings {
            reporter.warning(&warning.to_string());
        }
        reporter.detail(&format!("Workspace root: {}", root));

        Ok(Self {
            root,
            config,
            ui,
            reporter,
        })
    }
}
