use crate::client::MirrorClient;
use crate::config::Config;
use crate::flags::extract_flag;
use crate::model::{KubeObject, MrrFilter, ResourceKind};
use std::io::Write;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum GetError {
    #[error("you must specify the resource type to get")]
    MissingResource,
    #[error("expected exactly one argument, got {0}")]
    TooManyArguments(usize),
    #[error("Unsupported resource type [{0}]")]
    UnsupportedResource(String),
    #[error(transparent)]
    Client(#[from] anyhow::Error),
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Resolves the positional resource argument and assembles the query
/// filter. Fails before any client interaction when the argument count
/// is wrong or the resource token is unknown.
pub fn resolve_and_build_filter(
    args: &[String],
    config: &Config,
    override_command: &str,
) -> Result<MrrFilter, GetError> {
    let token = match args {
        [] => return Err(GetError::MissingResource),
        [token] => token,
        _ => return Err(GetError::TooManyArguments(args.len())),
    };

    let Some(kind) = ResourceKind::from_token(token) else {
        return Err(GetError::UnsupportedResource(token.clone()));
    };

    Ok(build_filter(kind, config, override_command))
}

/// Layers configuration defaults under overrides taken from the raw
/// kubectl command string. An override replaces the configured value,
/// it never merges with it. Namespace is the only overridable key.
pub fn build_filter(kind: ResourceKind, config: &Config, override_command: &str) -> MrrFilter {
    let mut filter = config.make_filter();
    filter.kind = kind.kind_str().to_string();

    if let Some(namespace) = extract_flag(override_command, "namespace") {
        filter.namespace = namespace;
    }

    filter
}

pub async fn run_get<C: MirrorClient>(
    client: &C,
    config: &Config,
    args: &[String],
    kubectl_command: &str,
    out: &mut impl Write,
) -> Result<(), GetError> {
    let filter = resolve_and_build_filter(args, config, kubectl_command)?;
    debug!("resolved filter {filter:?}");

    let objects = client.list(&filter).await?;
    render_objects(&objects, out).map_err(GetError::Output)
}

fn render_objects(objects: &[KubeObject], out: &mut impl Write) -> std::io::Result<()> {
    let names = objects
        .iter()
        .map(|object| object.meta.name.as_str())
        .collect::<Vec<_>>();
    writeln!(out, "{}", names.join(" "))
}
