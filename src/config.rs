use crate::model::MrrFilter;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Kubeconfig-shaped document describing the clusters the mirror tracks.
/// Only the fields the filter resolution reads are modelled.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub current_context: String,
    #[serde(default)]
    pub contexts: Vec<NamedContext>,
    #[serde(default)]
    pub clusters: Vec<NamedCluster>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct NamedContext {
    pub name: String,
    #[serde(default)]
    pub context: ContextSpec,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ContextSpec {
    #[serde(default)]
    pub cluster: String,
    #[serde(default)]
    pub namespace: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct NamedCluster {
    pub name: String,
    #[serde(default)]
    pub cluster: ClusterSpec,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ClusterSpec {
    #[serde(default)]
    pub server: String,
}

impl Config {
    /// Derives the configuration half of a query filter from the active
    /// context. Unknown context or cluster references degrade to empty
    /// fields; they are not errors.
    pub fn make_filter(&self) -> MrrFilter {
        let mut filter = MrrFilter::default();

        let Some(context) = self
            .contexts
            .iter()
            .find(|context| context.name == self.current_context)
        else {
            return filter;
        };
        filter.namespace = context.context.namespace.clone();

        if let Some(cluster) = self
            .clusters
            .iter()
            .find(|cluster| cluster.name == context.context.cluster)
        {
            filter.server = strip_port(&cluster.cluster.server).to_string();
        }

        filter
    }
}

/// Drops a trailing `:<digits>` port suffix, leaving the rest untouched.
fn strip_port(server: &str) -> &str {
    match server.rsplit_once(':') {
        Some((host, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => host,
        _ => server,
    }
}

pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = discover_config_path(explicit) else {
        return Ok(Config::default());
    };

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read mirror config {}", path.display()))?;
    let parsed: Config = serde_yaml::from_str(&raw)
        .with_context(|| format!("failed to parse mirror config {}", path.display()))?;

    Ok(parsed)
}

fn discover_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var("KUBECONFIG")
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }

    if let Ok(home) = std::env::var("HOME") {
        let candidate = PathBuf::from(&home).join(".kube/config");
        if candidate.exists() {
            return Some(candidate);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::{ClusterSpec, Config, ContextSpec, NamedCluster, NamedContext, strip_port};
    use crate::model::MrrFilter;

    fn two_cluster_config() -> Config {
        Config {
            current_context: "prod".to_string(),
            contexts: vec![
                NamedContext {
                    name: "dev".to_string(),
                    context: ContextSpec {
                        cluster: "cluster_2".to_string(),
                        namespace: "red".to_string(),
                    },
                },
                NamedContext {
                    name: "prod".to_string(),
                    context: ContextSpec {
                        cluster: "cluster_1".to_string(),
                        namespace: "blue".to_string(),
                    },
                },
            ],
            clusters: vec![
                NamedCluster {
                    name: "cluster_1".to_string(),
                    cluster: ClusterSpec {
                        server: "https://foo.com:8443".to_string(),
                    },
                },
                NamedCluster {
                    name: "cluster_2".to_string(),
                    cluster: ClusterSpec {
                        server: "https://bar.com".to_string(),
                    },
                },
            ],
        }
    }

    #[test]
    fn make_filter_uses_active_context_and_strips_port() {
        let expected = MrrFilter {
            kind: String::new(),
            namespace: "blue".to_string(),
            server: "https://foo.com".to_string(),
        };
        assert_eq!(two_cluster_config().make_filter(), expected);
    }

    #[test]
    fn make_filter_keeps_server_without_port_suffix() {
        let mut config = two_cluster_config();
        config.current_context = "dev".to_string();

        let filter = config.make_filter();
        assert_eq!(filter.namespace, "red");
        assert_eq!(filter.server, "https://bar.com");
    }

    #[test]
    fn unknown_current_context_degrades_to_empty_filter() {
        let mut config = two_cluster_config();
        config.current_context = "staging".to_string();
        assert_eq!(config.make_filter(), MrrFilter::default());
    }

    #[test]
    fn unknown_cluster_reference_leaves_server_empty() {
        let mut config = two_cluster_config();
        config.contexts[1].context.cluster = "cluster_9".to_string();

        let filter = config.make_filter();
        assert_eq!(filter.namespace, "blue");
        assert_eq!(filter.server, "");
    }

    #[test]
    fn strip_port_only_touches_numeric_suffixes() {
        assert_eq!(strip_port("https://foo.com:8443"), "https://foo.com");
        assert_eq!(strip_port("https://foo.com"), "https://foo.com");
        assert_eq!(strip_port("https://foo.com:"), "https://foo.com:");
        assert_eq!(strip_port("foo:8443x"), "foo:8443x");
        assert_eq!(strip_port("localhost:80"), "localhost");
    }

    #[test]
    fn parses_kubeconfig_shaped_yaml() {
        let raw = r#"
current-context: prod
contexts:
  - name: prod
    context:
      cluster: cluster_1
      namespace: blue
clusters:
  - name: cluster_1
    cluster:
      server: https://foo.com:8443
"#;
        let config: Config = serde_yaml::from_str(raw).expect("valid yaml");
        assert_eq!(config.current_context, "prod");
        assert_eq!(config.contexts[0].context.namespace, "blue");
        assert_eq!(config.clusters[0].cluster.server, "https://foo.com:8443");
    }
}
