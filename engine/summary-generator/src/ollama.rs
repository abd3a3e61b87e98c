use std::process::Stdio;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Client for a locally installed `ollama` binary
///
/// Each generation spawns `ollama run <model>`, writes the prompt to
/// stdin, and collects stdout. The process is killed when the per-call
/// timeout elapses.
pub struct OllamaClient {
    model: String,
    timeout: Duration,
}

impl OllamaClient {
    pub fn new(model: impl Into<String>) -> Self {
        Self { model: model.into(), timeout: Duration::from_secs(60) }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run one prompt through the model and return trimmed stdout
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        match tokio::time::timeout(self.timeout, self.run(prompt)).await {
            Ok(result) => result,
            Err(_) => bail!("ollama timed out after {}s", self.timeout.as_secs()),
        }
    }

    async fn run(&self, prompt: &str) -> Result<String> {
        let mut child = Command::new("ollama")
            .arg("run")
            .arg(&self.model)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .context("Failed to spawn ollama process")?;

        let mut stdin = child.stdin.take().context("Failed to open ollama stdin")?;
        stdin.write_all(prompt.as_bytes()).await?;
        stdin.write_all(b"\n").await?;
        drop(stdin);

        let output = child.wait_with_output().await.context("Failed to read ollama output")?;
        if !output.status.success() {
            bail!(
                "ollama exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Extract the first complete top-level JSON object from model output
///
/// Models wrap JSON in prose more often than not. Scans from the first
/// `{` with brace balancing and only accepts a candidate that actually
/// parses.
pub fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;

    for (offset, ch) in text[start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let candidate = &text[start..start + offset + 1];
                    return serde_json::from_str::<serde_json::Value>(candidate)
                        .ok()
                        .map(|_| candidate);
                }
            }
            _ => {}
        }
    }

    None
}
