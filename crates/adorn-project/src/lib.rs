//! Adorn Project Metadata
//!
//! Read-only project information consumed by generation decorators:
//! build coordinates and, when the build runs inside a checkout,
//! version-control details.
//!
//! Lookups are synchronous and side-effect-free. Anything optional here
//! is genuinely optional for consumers: a decorator that wants the
//! current commit must tolerate [`ScmInfo::commit`] being absent and skip
//! its mutation silently.

#![warn(unreachable_pub)]

use serde::{Deserialize, Serialize};

/// Build coordinates of the project being generated for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Organization or group identifier
    pub group: String,
    /// Artifact name
    pub artifact: String,
    /// Version string
    pub version: String,
}

impl Coordinates {
    /// Create coordinates
    #[inline]
    #[must_use]
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }
}

/// Version-control information discovered for the build
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScmInfo {
    /// Remote repository URI
    pub uri: Option<String>,
    /// Checked-out branch
    pub branch: Option<String>,
    /// Commit id at build time
    pub commit: Option<String>,
}

impl ScmInfo {
    /// Create empty SCM info
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the remote URI
    #[inline]
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Set the branch
    #[inline]
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Set the commit id
    #[inline]
    #[must_use]
    pub fn with_commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = Some(commit.into());
        self
    }
}

/// Project metadata handed to one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Build coordinates
    pub coordinates: Coordinates,
    /// Version-control info, absent outside a checkout
    pub scm: Option<ScmInfo>,
}

impl Project {
    /// Create a project without version-control info
    #[inline]
    #[must_use]
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            scm: None,
        }
    }

    /// Attach version-control info
    #[inline]
    #[must_use]
    pub fn with_scm(mut self, scm: ScmInfo) -> Self {
        self.scm = Some(scm);
        self
    }

    /// Commit id, when a checkout with a resolved commit is present
    #[inline]
    #[must_use]
    pub fn commit(&self) -> Option<&str> {
        self.scm.as_ref().and_then(|s| s.commit.as_deref())
    }

    /// Remote repository URI, when known
    #[inline]
    #[must_use]
    pub fn scm_uri(&self) -> Option<&str> {
        self.scm.as_ref().and_then(|s| s.uri.as_deref())
    }
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinates() -> Coordinates {
        Coordinates::new("io.example", "frontend", "1.2.3")
    }

    #[test]
    fn project_without_scm_has_no_commit() {
        let project = Project::new(coordinates());
        assert_eq!(project.commit(), None);
        assert_eq!(project.scm_uri(), None);
    }

    #[test]
    fn project_with_partial_scm() {
        let project = Project::new(coordinates())
            .with_scm(ScmInfo::new().with_uri("git@example.com:org/frontend.git"));
        assert_eq!(project.commit(), None);
        assert_eq!(project.scm_uri(), Some("git@example.com:org/frontend.git"));
    }

    #[test]
    fn project_with_commit() {
        let project = Project::new(coordinates())
            .with_scm(ScmInfo::new().with_branch("main").with_commit("abc123"));
        assert_eq!(project.commit(), Some("abc123"));
    }

    #[test]
    fn project_round_trips_through_serde() {
        let project = Project::new(coordinates()).with_scm(ScmInfo::new().with_commit("abc123"));
        let value = serde_json::to_value(&project).unwrap();
        let back: Project = serde_json::from_value(value).unwrap();
        assert_eq!(back, project);
    }
}
