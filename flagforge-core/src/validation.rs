//! Validation System - Findings and Policy Separation
//!
//! Elements produce structured violations.
//! The report separates blocking errors from advisory warnings;
//! callers decide whether to abort.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationViolation {
    pub severity: ViolationSeverity,
    pub message: String,
}

impl ValidationViolation {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: ViolationSeverity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: ViolationSeverity::Warning,
            message: message.into(),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity == ViolationSeverity::Warning
    }

    /// Same finding, with `prefix` prepended to the message.
    pub fn prefixed(self, prefix: &str) -> Self {
        Self {
            severity: self.severity,
            message: format!("{}: {}", prefix, self.message),
        }
    }
}

impl fmt::Display for ValidationViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            ViolationSeverity::Error => f.write_str(&self.message),
            ViolationSeverity::Warning => write!(f, "Warning: {}", self.message),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationViolation>,
    pub warnings: Vec<ValidationViolation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files a finding under errors or warnings by its severity.
    pub fn record(&mut self, violation: ValidationViolation) {
        match violation.severity {
            ViolationSeverity::Error => self.errors.push(violation),
            ViolationSeverity::Warning => self.warnings.push(violation),
        }
    }

    pub fn extend(&mut self, violations: impl IntoIterator<Item = ValidationViolation>) {
        for violation in violations {
            self.record(violation);
        }
    }

    /// True when rendering must not proceed.
    pub fn is_blocking(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn violations(&self) -> impl Iterator<Item = &ValidationViolation> {
        self.errors.iter().chain(self.warnings.iter())
    }
}
