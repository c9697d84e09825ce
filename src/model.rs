use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ResourceKind {
    Pod,
    Service,
    Deployment,
}

impl ResourceKind {
    /// Canonical kind string as the mirror daemon stores it.
    pub fn kind_str(self) -> &'static str {
        match self {
            Self::Pod => "pod",
            Self::Service => "service",
            Self::Deployment => "deployment",
        }
    }

    /// Exact-match lookup of a user-supplied resource token. Aliases are
    /// matched verbatim; there is no case folding or prefix matching.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "po" | "pod" | "pods" => Some(Self::Pod),
            "svc" | "service" | "services" => Some(Self::Service),
            "deployment" | "deployments" => Some(Self::Deployment),
            _ => None,
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind_str())
    }
}

/// Query filter sent to the mirror daemon. Empty namespace/server means
/// "no constraint"; kind is always set once alias resolution succeeds.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MrrFilter {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub server: String,
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub namespace: String,
}

/// Minimal object shape returned by the mirror daemon.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct KubeObject {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub meta: ObjectMeta,
}
