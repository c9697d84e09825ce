use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "mrrctl",
    version,
    about = "Query Kubernetes resources from a cluster mirror daemon."
)]
pub struct CliArgs {
    /// Address of the mirror daemon
    #[arg(long, default_value = "127.0.0.1:33033")]
    pub address: String,

    /// Path to the kubeconfig-style mirror configuration
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// tracing filter (for example: info,debug,trace)
    #[arg(long, default_value = "info")]
    pub log_filter: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List mirrored objects of one resource type
    Get {
        /// Resource type to list (exactly one, e.g. pod, svc, deployments)
        resource: Vec<String>,

        /// Raw kubectl invocation whose flags override configuration defaults
        #[arg(long, default_value = "")]
        kubectl_command: String,
    },
}
