//! Identity → handler code table ("Bearb." column).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full user name → short handler code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandlerCodes(BTreeMap<String, String>);

/// What to do with a user that has no configured code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnmappedPolicy {
    /// Keep the full identity in the output, silently.
    #[default]
    PassThrough,
    /// Keep the full identity and report it on the terminal.
    Warn,
    /// Abort the run.
    Reject,
}

/// Outcome of a lookup in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    Mapped(&'a str),
    Unmapped,
}

impl Default for HandlerCodes {
    fn default() -> Self {
        let pairs = [
            ("Markus Camastral", "mc"),
            ("Simone Frei", "sf"),
            ("Nina Leidenberger", "nl"),
            ("Yasmina Bounaja", "yb"),
            ("Urs Steinegger", "us"),
            ("Simonetta Selva", "ss"),
        ];

        Self(
            pairs
                .iter()
                .map(|(name, code)| (name.to_string(), code.to_string()))
                .collect(),
        )
    }
}

impl HandlerCodes {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, identity: impl Into<String>, code: impl Into<String>) {
        self.0.insert(identity.into(), code.into());
    }

    pub fn resolve(&self, identity: &str) -> Resolution<'_> {
        match self.0.get(identity) {
            Some(code) => Resolution::Mapped(code.as_str()),
            None => Resolution::Unmapped,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Human-readable problems with the table (empty codes, shared codes).
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let mut seen: BTreeMap<&str, &str> = BTreeMap::new();

        for (identity, code) in self.iter() {
            if identity.trim().is_empty() {
                issues.push("handler_codes contains an empty identity".to_string());
            }
            if code.trim().is_empty() {
                issues.push(format!("handler code for '{identity}' is empty"));
                continue;
            }
            if let Some(previous) = seen.insert(code, identity) {
                issues.push(format!(
                    "handler code '{code}' is shared by '{previous}' and '{identity}'"
                ));
            }
        }

        issues
    }
}
