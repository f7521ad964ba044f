//! FFmpeg-based encoder implementation.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Instant;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::debug;

use super::config::EncoderConfig;
use super::error::EncoderError;
use super::traits::Encoder;
use super::types::{EncodeJob, EncodeResult};

/// Number of trailing stderr lines kept for diagnostics.
const STDERR_TAIL_LINES: usize = 8;

/// FFmpeg-based encoder implementation.
pub struct FfmpegEncoder {
    config: EncoderConfig,
}

impl FfmpegEncoder {
    /// Creates a new ffmpeg encoder with the given configuration.
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Creates an encoder with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(EncoderConfig::default())
    }

    /// Builds the ffmpeg argument vector for a job.
    ///
    /// Pure function of the job and config; channel and sample-rate flags are
    /// emitted only when the job overrides them.
    fn build_args(job: &EncodeJob, config: &EncoderConfig) -> Vec<String> {
        let mut args = vec![
            "-y".to_string(),
            "-i".to_string(),
            job.input_path.to_string_lossy().to_string(),
            "-c:a".to_string(),
            job.codec.ffmpeg_codec().to_string(),
            "-b:a".to_string(),
            job.bitrate.clone(),
        ];

        if let Some(channels) = job.channels {
            args.extend(["-ac".to_string(), channels.to_string()]);
        }

        if let Some(rate) = job.sample_rate {
            args.extend(["-ar".to_string(), rate.to_string()]);
        }

        args.extend(job.codec.extra_codec_args().iter().map(|a| a.to_string()));

        args.extend(["-loglevel".to_string(), config.log_level.clone()]);
        args.extend(config.extra_args.iter().cloned());

        args.push(job.output_path.to_string_lossy().to_string());
        args
    }

    /// Returns the last few lines of captured stderr, trimmed.
    fn stderr_tail(stderr: &str) -> String {
        let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
        let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
        lines[start..].join("\n")
    }
}

#[async_trait]
impl Encoder for FfmpegEncoder {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    async fn encode(&self, job: EncodeJob) -> Result<EncodeResult, EncoderError> {
        let start = Instant::now();
        let args = Self::build_args(&job, &self.config);
        debug!(input = %job.input_path.display(), "spawning ffmpeg with args {:?}", args);

        let mut child = Command::new(&self.config.ffmpeg_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    EncoderError::FfmpegNotFound {
                        path: self.config.ffmpeg_path.clone(),
                    }
                } else {
                    EncoderError::Io(e)
                }
            })?;

        let mut stderr = child.stderr.take().expect("stderr should be captured");

        let timeout_duration = Duration::from_secs(self.config.timeout_secs);
        let result = timeout(timeout_duration, async {
            let mut captured = String::new();
            stderr.read_to_string(&mut captured).await?;
            let status = child.wait().await?;
            Ok::<(std::process::ExitStatus, String), std::io::Error>((status, captured))
        })
        .await;

        let (status, captured) = match result {
            Ok(Ok(pair)) => pair,
            Ok(Err(e)) => return Err(EncoderError::Io(e)),
            Err(_) => {
                // Reap the child so nothing outlives the timeout.
                let _ = child.kill().await;
                return Err(EncoderError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                });
            }
        };

        if !status.success() {
            let tail = Self::stderr_tail(&captured);
            if tail.contains("Unknown encoder") {
                return Err(EncoderError::UnsupportedCodec {
                    codec: job.codec.ffmpeg_codec().to_string(),
                });
            }
            return Err(EncoderError::encode_failed(status.code(), tail));
        }

        Ok(EncodeResult {
            output_path: job.output_path,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    async fn validate(&self) -> Result<(), EncoderError> {
        let result = Command::new(&self.config.ffmpeg_path)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await;

        if let Err(e) = result {
            if e.kind() == std::io::ErrorKind::NotFound {
                return Err(EncoderError::FfmpegNotFound {
                    path: self.config.ffmpeg_path.clone(),
                });
            }
            return Err(EncoderError::Io(e));
        }

        Ok(())
    }
}
