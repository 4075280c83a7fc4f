//! Cleanup options

/// Options for the cleanup command
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanupOptions {
    /// Create a distributable archive after cleaning
    pub package: bool,
    /// Skip the informational warning
    pub assume_yes: bool,
}

impl CleanupOptions {
    /// Create new cleanup options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set packaging
    pub fn with_package(mut self, package: bool) -> Self {
        self.package = package;
        self
    }

    /// Set confirmation bypass
    pub fn with_assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }
}
