//! Step pipelines
//!
//! A pipeline is an ordered list of named steps, each with a failure policy.
//! The runner executes them in order, stops at the first `Abort` failure and
//! records `WarnAndContinue` failures as warnings.

use std::fmt;

use crate::domain::ports::Reporter;
use crate::error::{ErrorClass, WorkspaceResult};

/// What a failing step does to the rest of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop; later steps are skipped
    Abort,
    /// Report a warning and run the next step
    WarnAndContinue,
}

type StepAction<'a> = Box<dyn FnOnce(&dyn Reporter) -> WorkspaceResult<()> + 'a>;

/// One named unit of work
pub struct Step<'a> {
    name: String,
    policy: FailurePolicy,
    action: StepAction<'a>,
}

impl<'a> Step<'a> {
    pub fn new<F>(name: impl Into<String>, policy: FailurePolicy, action: F) -> Self
    where
        F: FnOnce(&dyn Reporter) -> WorkspaceResult<()> + 'a,
    {
        Self {
            name: name.into(),
            policy,
            action: Box::new(action),
        }
    }

    pub fn abort<F>(name: impl Into<String>, action: F) -> Self
    where
        F: FnOnce(&dyn Reporter) -> WorkspaceResult<()> + 'a,
    {
        Self::new(name, FailurePolicy::Abort, action)
    }

    pub fn warn_and_continue<F>(name: impl Into<String>, action: F) -> Self
    where
        F: FnOnce(&dyn Reporter) -> WorkspaceResult<()> + 'a,
    {
        Self::new(name, FailurePolicy::WarnAndContinue, action)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }
}

impl fmt::Debug for Step<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("name", &self.name)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// A step that failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    pub step: String,
    pub message: String,
    pub class: ErrorClass,
}

/// Outcome of a pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// Steps that succeeded, in order
    pub completed: Vec<String>,
    /// Steps that failed under `WarnAndContinue`
    pub warnings: Vec<StepFailure>,
    /// The step that stopped the pipeline
    pub aborted: Option<StepFailure>,
    /// Steps never run because of the abort
    pub skipped: Vec<String>,
}

impl PipelineReport {
    pub fn is_success(&self) -> bool {
        self.aborted.is_none()
    }
}

/// Ordered list of steps
#[derive(Debug, Default)]
pub struct Pipeline<'a> {
    steps: Vec<Step<'a>>,
}

impl<'a> Pipeline<'a> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn step(mut self, step: Step<'a>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn push(&mut self, step: Step<'a>) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order.
    pub fn run(self, reporter: &dyn Reporter) -> PipelineReport {
        let mut report = PipelineReport::default();
        let mut steps = self.steps.into_iter();

        for step in steps.by_ref() {
            let Step {
                name,
                policy,
                action,
            } = step;

            let err = match action(reporter) {
                Ok(()) => {
                    report.completed.push(name);
                    continue;
                }
                Err(err) => err,
            };

            let failure = StepFailure {
                step: name.clone(),
                message: err.to_string(),
                class: err.class(),
            };
            match policy {
                FailurePolicy::WarnAndContinue => {
                    reporter.warning(&format!("{} failed, continuing: {}", name, err));
                    report.warnings.push(failure);
                }
                FailurePolicy::Abort => {
                    reporter.error(&format!("{} failed: {}", name, err));
                    report.aborted = Some(failure);
                    break;
                }
            }
        }

        report.skipped = steps.map(|s| s.name).collect();
        report
    }
}
