use crate::model::{KubeObject, MrrFilter};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::debug;

/// Capability to list mirrored objects matching a filter.
#[allow(async_fn_in_trait)]
pub trait MirrorClient {
    async fn list(&self, filter: &MrrFilter) -> Result<Vec<KubeObject>>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRequest {
    pub op: String,
    pub filter: MrrFilter,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub objects: Vec<KubeObject>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Talks to a mirror daemon over its line-delimited JSON protocol: one
/// request line out, one response line back, connection per call.
#[derive(Debug, Clone)]
pub struct TcpMirrorClient {
    address: String,
}

impl TcpMirrorClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

impl MirrorClient for TcpMirrorClient {
    async fn list(&self, filter: &MrrFilter) -> Result<Vec<KubeObject>> {
        let request = ListRequest {
            op: "list".to_string(),
            filter: filter.clone(),
        };
        let mut payload =
            serde_json::to_string(&request).context("failed to encode list request")?;
        payload.push('\n');

        let mut stream = TcpStream::connect(&self.address)
            .await
            .with_context(|| format!("failed to connect to mirror daemon at {}", self.address))?;
        stream
            .write_all(payload.as_bytes())
            .await
            .with_context(|| format!("failed to send list request to {}", self.address))?;

        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        reader
            .read_line(&mut line)
            .await
            .with_context(|| format!("failed to read list response from {}", self.address))?;

        let response: ListResponse =
            serde_json::from_str(line.trim_end()).context("failed to decode list response")?;
        if let Some(error) = response.error {
            anyhow::bail!("{error}");
        }

        debug!("mirror returned {} objects", response.objects.len());
        Ok(response.objects)
    }
}
