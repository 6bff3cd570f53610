//! Social policy data structures.

use serde::{Deserialize, Serialize};

/// A policy as authored inside its branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyData {
    /// Policy name.
    pub name: String,

    /// Effect description.
    #[serde(default)]
    pub description: String,

    /// Explicit prerequisites. `None` means "available once the branch is
    /// opened".
    #[serde(default)]
    pub requires: Option<Vec<String>>,

    /// Display row.
    #[serde(default)]
    pub row: u32,

    /// Display column.
    #[serde(default)]
    pub column: u32,
}

impl PolicyData {
    /// Create a policy without explicit prerequisites.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            requires: None,
            row: 0,
            column: 0,
        }
    }

    /// Set explicit prerequisites.
    #[must_use]
    pub fn requiring<I, S>(mut self, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires = Some(requires.into_iter().map(Into::into).collect());
        self
    }
}

/// A policy branch with its policies in display order.
///
/// # Example RON
///
/// ```ron
/// PolicyBranchData(
///     name: "Tradition",
///     policies: [
///         PolicyData(name: "Aristocracy"),
///         PolicyData(name: "Legalism", requires: Some(["Aristocracy"])),
///         PolicyData(name: "Tradition Finisher"),
///     ],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyBranchData {
    /// Branch name.
    pub name: String,

    /// Opener description.
    #[serde(default)]
    pub description: String,

    /// Policies in display order; the last one becomes the completion marker.
    #[serde(default)]
    pub policies: Vec<PolicyData>,
}

impl PolicyBranchData {
    /// Create a branch from policy names, none with explicit prerequisites.
    #[must_use]
    pub fn with_policies<I, S>(name: impl Into<String>, policies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: String::new(),
            policies: policies.into_iter().map(PolicyData::named).collect(),
        }
    }
}
