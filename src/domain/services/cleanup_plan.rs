//! Cleanup plan
//!
//! The fixed, ordered list of cleanup targets, derived from the configured
//! workspace members.

use std::path::{Path, PathBuf};

use crate::domain::entities::{CleanupPhase, CleanupTarget, ENV_FILE_NAME};
use crate::domain::value_objects::ExclusionCategory;

const LOCK_FILE: &str = "package-lock.json";

fn label(member: &Path) -> String {
    member
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| member.display().to_string())
}

/// Build the ordered phases for the given apps and shared packages.
pub fn standard_plan(apps: &[PathBuf], packages: &[PathBuf]) -> Vec<CleanupPhase> {
    let members = || apps.iter().chain(packages.iter());

    let mut dependencies = vec![CleanupTarget::directory("node_modules", "Root node_modules")];
    dependencies.extend(members().map(|m| {
        CleanupTarget::directory(m.join("node_modules"), format!("{} node_modules", label(m)))
    }));

    let mut builds = vec![
        CleanupTarget::directory("dist", "Root dist"),
        CleanupTarget::directory("build", "Root build"),
    ];
    for app in apps {
        builds.push(CleanupTarget::directory(
            app.join("dist"),
            format!("{} dist", label(app)),
        ));
        builds.push(CleanupTarget::directory(
            app.join("build"),
            format!("{} build", label(app)),
        ));
    }

    let mut caches = vec![
        CleanupTarget::directory(".turbo", "Turbo cache"),
        CleanupTarget::directory(".next", "Next.js cache"),
    ];
    caches.extend(
        apps.iter()
            .map(|a| CleanupTarget::directory(a.join(".vite"), format!("{} Vite cache", label(a)))),
    );

    let mut locks = vec![CleanupTarget::file(LOCK_FILE, "Root package-lock.json")];
    locks.extend(members().map(|m| {
        CleanupTarget::file(m.join(LOCK_FILE), format!("{} package-lock.json", label(m)))
    }));

    let mut env_files = vec![CleanupTarget::file(ENV_FILE_NAME, "Local .env file")];
    env_files.extend(apps.iter().map(|a| {
        CleanupTarget::file(a.join(ENV_FILE_NAME), format!("{} .env reference", label(a)))
    }));

    vec![
        CleanupPhase::new("Removing node_modules directories...", dependencies),
        CleanupPhase::new("Removing build outputs...", builds),
        CleanupPhase::new("Removing cache directories...", caches),
        CleanupPhase::new("Removing lock files...", locks),
        CleanupPhase::new(
            "Removing log files...",
            vec![CleanupTarget::glob(ExclusionCategory::Log, "log files")],
        ),
        CleanupPhase::new(
            "Removing OS generated files...",
            vec![CleanupTarget::glob(
                ExclusionCategory::OsArtifact,
                "OS generated files",
            )],
        ),
        CleanupPhase::new("Checking environment files...", env_files),
        CleanupPhase::new(
            "Removing temporary files...",
            vec![
                CleanupTarget::directory("tmp", "Temporary directory"),
                CleanupTarget::directory("temp", "Temp directory"),
            ],
        ),
    ]
}
