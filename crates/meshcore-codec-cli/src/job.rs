//! Job files: a batch of commands and telemetry entries to encode.
//!
//! ```yaml
//! commands:
//!   - set_time: { timestamp: 1704067200 }
//!   - send_login: { destination: "0123456789ab", password: secret }
//!   - get_contacts
//! telemetry:
//!   - { channel: 1, sensor: temperature, values: [25.5] }
//! ```

use std::path::Path;

use meshcore_codec::{encode_lpp_frame, Command, EncodedFrame, LppEntry};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// Parsed job file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub commands: Vec<Command>,
    #[serde(default)]
    pub telemetry: Vec<LppEntry>,
}

/// One encoded command, labelled for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodedCommand {
    pub kind: String,
    pub hex: String,
}

/// Everything a job produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobOutput {
    pub commands: Vec<EncodedCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<String>,
}

impl Job {
    /// Load a job file, choosing the parser from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let parse: fn(&str) -> Result<Self> = match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml,
            "json" => Self::from_json,
            _ => return Err(CliError::UnsupportedFormat(path.display().to_string())),
        };
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded job file");
        parse(&text)
    }

    /// Parse YAML. Commands are written as single-key maps
    /// (`set_time: { timestamp: 1 }`) rather than YAML tags.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(text);
        Ok(serde_yaml::with::singleton_map_recursive::deserialize(
            deserializer,
        )?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Encode every command, then the telemetry entries as a single payload.
    ///
    /// Stops at the first failure.
    pub fn run(&self) -> Result<JobOutput> {
        let mut output = JobOutput::default();
        for command in &self.commands {
            let frame: EncodedFrame = command.encode()?;
            tracing::debug!(kind = %command.kind(), len = frame.len(), "encoded command");
            output.commands.push(EncodedCommand {
                kind: command.kind().to_string(),
                hex: frame.to_hex(),
            });
        }
        if !self.telemetry.is_empty() {
            let payload = encode_lpp_frame(&self.telemetry)?;
            tracing::debug!(entries = self.telemetry.len(), len = payload.len(), "encoded telemetry");
            output.telemetry = Some(hex::encode(payload));
        }
        tracing::info!(
            commands = output.commands.len(),
            telemetry = output.telemetry.is_some(),
            "job complete"
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshcore_codec::SensorKind;

    const YAML_JOB: &str = r#"
commands:
  - set_time: { timestamp: 1704067200 }
  - send_login: { destination: "0123456789ab", password: secret }
  - get_stats: { stats: radio }
  - get_contacts
telemetry:
  - { channel: 1, sensor: temperature, values: [25.5] }
  - { channel: 2, sensor: humidity, values: [65.0] }
"#;

    #[test]
    fn test_yaml_job() {
        let job = Job::from_yaml(YAML_JOB).unwrap();
        assert_eq!(job.commands.len(), 4);
        assert_eq!(job.commands[3], Command::GetContacts);
        assert_eq!(job.telemetry[1].sensor, SensorKind::Humidity);

        let output = job.run().unwrap();
        assert_eq!(output.commands[0].kind, "set_time");
        assert_eq!(output.commands[0].hex, "0680009265");
        assert_eq!(output.commands[2].hex, "3801");
        assert_eq!(output.commands[1].hex.len(), 2 * (1 + 32 + 6));
        assert_eq!(output.telemetry.as_deref(), Some("016700ff026882"));
    }

    #[test]
    fn test_yaml_map_commands_with_nested_enums() {
        let job = Job::from_yaml(
            "commands:\n  - get_stats: { stats: packets }\n  - send_advertisement: { flood: true }\n  - reboot\n",
        )
        .unwrap();
        assert_eq!(
            job.commands,
            vec![
                Command::GetStats {
                    stats: meshcore_codec::StatsKind::Packets
                },
                Command::SendAdvertisement { flood: true },
                Command::Reboot,
            ]
        );
        assert!(job.telemetry.is_empty());
    }

    #[test]
    fn test_json_job() {
        let job = Job::from_json(
            r#"{"commands": [{"set_channel": {"index": 1, "name": "Ops", "secret": "000102030405060708090a0b0c0d0e0f"}}]}"#,
        )
        .unwrap();
        assert!(job.telemetry.is_empty());

        let output = job.run().unwrap();
        assert_eq!(output.commands[0].hex.len(), 2 * 50);
        assert!(output.commands[0].hex.starts_with("2001"));
        assert!(output.telemetry.is_none());
    }

    #[test]
    fn test_job_errors() {
        assert!(matches!(
            Job::from_yaml("commands: [warp_drive]"),
            Err(CliError::Yaml(_))
        ));

        let job = Job::from_yaml("telemetry: [{ channel: 2, sensor: humidity, values: [200.0] }]")
            .unwrap();
        assert!(matches!(job.run(), Err(CliError::Codec(_))));

        let err = Job::load(Path::new("job.toml")).unwrap_err();
        assert!(matches!(err, CliError::UnsupportedFormat(_)));

        let err = Job::load(Path::new("does/not/exist.yaml")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
