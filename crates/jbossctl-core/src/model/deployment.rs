// ── Deployment domain type ──

use std::fmt;

use serde::{Deserialize, Serialize};

/// A deployment, either from the content registry or assigned to a server
/// group.
///
/// Equality compares `(name, runtime_name, enabled)` only; the owning
/// group does not take part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deployment {
    pub name: String,
    /// Artifact file name, e.g. `app-1.2.war`.
    pub runtime_name: String,
    pub enabled: bool,
    pub server_group: Option<String>,
}

impl Deployment {
    pub fn new(name: impl Into<String>, runtime_name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            runtime_name: runtime_name.into(),
            enabled,
            server_group: None,
        }
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.server_group = Some(group.into());
        self
    }

    /// Only enabled web artifacts are mapped to a context root; EJB jars
    /// never are.
    pub fn may_have_context_root(&self) -> bool {
        self.enabled && !self.runtime_name.ends_with(".jar")
    }
}

impl PartialEq for Deployment {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.runtime_name == other.runtime_name
            && self.enabled == other.enabled
    }
}

impl Eq for Deployment {}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.name,
            self.runtime_name,
            if self.enabled { "enabled" } else { "disabled" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_server_group() {
        let a = Deployment::new("abce-version", "abce.war", true).in_group("group-a");
        let b = Deployment::new("abce-version", "abce.war", true).in_group("group-b");
        let c = Deployment::new("abce-version", "abce.war", true);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a, c);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn equality_covers_each_field_of_the_triple() {
        let base = Deployment::new("abce-version", "abce.war", true);
        assert_ne!(base, Deployment::new("other", "abce.war", true));
        assert_ne!(base, Deployment::new("abce-version", "other.war", true));
        assert_ne!(base, Deployment::new("abce-version", "abce.war", false));
    }

    #[test]
    fn context_root_candidates() {
        assert!(Deployment::new("web", "web.war", true).may_have_context_root());
        assert!(!Deployment::new("web", "web.war", false).may_have_context_root());
        assert!(!Deployment::new("ejb", "ejb.jar", true).may_have_context_root());
    }

    #[test]
    fn display_summarises_state() {
        assert_eq!(
            Deployment::new("ecba-version", "ecba.war", false).to_string(),
            "ecba-version - ecba.war - disabled"
        );
    }
}
