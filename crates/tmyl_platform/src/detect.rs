//! Framework identification and runtime detection

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::PlatformError;

/// Global name whose presence marks the React runtime
pub const REACT_MARKER: &str = "React";

/// Rendering back ends the dispatcher knows how to bind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// Baseline back end, always available
    Vanilla,
    React,
}

impl Framework {
    /// Stable id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Vanilla => "vanilla",
            Self::React => "react",
        }
    }

    pub fn all() -> &'static [Framework] {
        const FRAMEWORKS: [Framework; 2] = [Framework::Vanilla, Framework::React];
        &FRAMEWORKS
    }
}

impl Display for Framework {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Framework {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|fw| fw.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PlatformError::UnknownFramework(s.to_string()))
    }
}

/// Set of global names visible in one execution scope
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlobalScope {
    names: FxHashSet<String>,
}

impl GlobalScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl<S: Into<String>> FromIterator<S> for GlobalScope {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Strategy that picks a framework when the configuration says `auto`.
///
/// The platform calls it exactly once, during construction.
pub trait FrameworkDetector {
    fn detect(&self) -> Framework;
}

impl<F> FrameworkDetector for F
where
    F: Fn() -> Framework,
{
    fn detect(&self) -> Framework {
        self()
    }
}

/// Detects React from browser-like and server-like global scopes.
///
/// Probe order: browser scope, then server scope, then the vanilla
/// baseline. An absent scope is skipped.
#[derive(Clone, Debug, Default)]
pub struct ScopeDetector {
    pub browser: Option<GlobalScope>,
    pub server: Option<GlobalScope>,
}

impl ScopeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn browser(mut self, scope: GlobalScope) -> Self {
        self.browser = Some(scope);
        self
    }

    pub fn server(mut self, scope: GlobalScope) -> Self {
        self.server = Some(scope);
        self
    }
}

impl FrameworkDetector for ScopeDetector {
    fn detect(&self) -> Framework {
        let has_marker =
            |scope: &Option<GlobalScope>| scope.as_ref().is_some_and(|s| s.contains(REACT_MARKER));

        if has_marker(&self.browser) {
            tracing::debug!("ScopeDetector - React found in browser scope");
            Framework::React
        } else if has_marker(&self.server) {
            tracing::debug!("ScopeDetector - React found in server scope");
            Framework::React
        } else {
            Framework::Vanilla
        }
    }
}
