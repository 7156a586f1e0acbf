//! Configuration types for building and analyzing a task network.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use pyo3::prelude::*;
use thiserror::Error;

/// What the builder does with a predecessor name that matches no record.
#[pyclass(eq, eq_int)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnresolvedPolicy {
    /// Drop the reference silently (historical behavior).
    #[default]
    Ignore,
    /// Drop the reference and log it at CHANGES verbosity.
    Warn,
    /// Reject the record set with `NetworkError::UnresolvedPredecessor`.
    Fail,
}

/// Error returned when parsing an unknown policy name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown unresolved-predecessor policy: {0:?} (expected ignore, warn or fail)")]
pub struct UnknownPolicy(pub String);

impl FromStr for UnresolvedPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "warn" => Ok(Self::Warn),
            "fail" => Ok(Self::Fail),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for UnresolvedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Fail => "fail",
        };
        f.write_str(name)
    }
}

/// Configuration for the network builder.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct BuildConfig {
    /// Handling of predecessor names with no matching record.
    #[pyo3(get, set)]
    pub unresolved: UnresolvedPolicy,
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl BuildConfig {
    pub fn with_policy(unresolved: UnresolvedPolicy) -> Self {
        Self {
            unresolved,
            ..Self::default()
        }
    }
}

#[pymethods]
impl BuildConfig {
    #[new]
    #[pyo3(signature = (unresolved="ignore", verbosity=0))]
    fn py_new(unresolved: &str, verbosity: u8) -> PyResult<Self> {
        let unresolved = unresolved
            .parse::<UnresolvedPolicy>()
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            unresolved,
            verbosity,
        })
    }

    fn __repr__(&self) -> String {
        format!(
            "BuildConfig(unresolved={:?}, verbosity={})",
            self.unresolved.to_string(),
            self.verbosity
        )
    }
}

/// Configuration for a [`Project`](crate::Project).
#[pyclass]
#[derive(Clone, Debug)]
pub struct ProjectConfig {
    #[pyo3(get, set)]
    pub build: BuildConfig,
    /// Calendar day that day offset 0 maps to.
    #[pyo3(get, set)]
    pub start_date: NaiveDate,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            build: BuildConfig::default(),
            start_date: chrono::Local::now().date_naive(),
        }
    }
}

#[pymethods]
impl ProjectConfig {
    #[new]
    #[pyo3(signature = (start_date=None, build=None))]
    fn py_new(start_date: Option<NaiveDate>, build: Option<BuildConfig>) -> Self {
        let defaults = Self::default();
        Self {
            build: build.unwrap_or(defaults.build),
            start_date: start_date.unwrap_or(defaults.start_date),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "ProjectConfig(start_date={}, build={})",
            self.start_date,
            self.build.__repr__()
        )
    }
}
