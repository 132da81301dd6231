//! `mccodec`: encode MeshCore companion commands and Cayenne LPP telemetry
//! from a job file, or list the layout registry.

mod error;
mod job;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use meshcore_codec::registry::{command_layouts, sensor_layouts};

use crate::error::Result;
use crate::job::{Job, JobOutput};
use crate::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "mccodec", version, about = "MeshCore command and telemetry encoder")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Encode every command and telemetry entry in a YAML or JSON job file.
    Encode {
        /// Path to the job file (.yaml, .yml or .json).
        file: PathBuf,

        /// Output format.
        #[arg(long, value_enum, default_value = "hex")]
        format: OutputFormat,
    },
    /// List every command and sensor layout.
    List,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Hex,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(command: CliCommand) -> Result<()> {
    match command {
        CliCommand::Encode { file, format } => {
            let job = Job::load(&file)?;
            let output = job.run()?;
            print!("{}", render(&output, format)?);
        }
        CliCommand::List => print!("{}", render_registry()),
    }
    Ok(())
}

fn render(output: &JobOutput, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Hex => {
            let mut out = String::new();
            for command in &output.commands {
                out.push_str(&format!("{}: {}\n", command.kind, command.hex));
            }
            if let Some(telemetry) = &output.telemetry {
                out.push_str(&format!("telemetry: {}\n", telemetry));
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(output)? + "\n"),
    }
}

fn render_registry() -> String {
    let mut out = String::from("Commands:\n");
    for layout in command_layouts() {
        let fields: Vec<&str> = layout
            .fields
            .iter()
            .filter(|f| f.encoding.takes_argument())
            .map(|f| f.name)
            .collect();
        out.push_str(&format!(
            "  {:<24} {:<6} ({})\n",
            layout.kind.name(),
            hex::encode(layout.header()),
            fields.join(", ")
        ));
    }
    out.push_str("Sensors:\n");
    for layout in sensor_layouts() {
        let components: Vec<&str> = layout.components.iter().map(|c| c.name).collect();
        out.push_str(&format!(
            "  {:<24} {:02x}     ({})\n",
            layout.kind.name(),
            layout.type_code,
            components.join(", ")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::EncodedCommand;

    #[test]
    fn parses_encode_subcommand() {
        let cli = Cli::try_parse_from(["mccodec", "-vv", "encode", "job.yaml", "--format", "json"])
            .expect("encode args should parse");
        assert_eq!(cli.verbose, 2);
        match cli.command {
            CliCommand::Encode { file, format } => {
                assert_eq!(file, PathBuf::from("job.yaml"));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_format() {
        let err = Cli::try_parse_from(["mccodec", "encode", "job.yaml", "--format", "xml"])
            .expect_err("xml is not a format");
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn renders_hex_and_json() {
        let output = JobOutput {
            commands: vec![EncodedCommand {
                kind: "get_time".into(),
                hex: "05".into(),
            }],
            telemetry: Some("016700ff".into()),
        };
        assert_eq!(
            render(&output, OutputFormat::Hex).unwrap(),
            "get_time: 05\ntelemetry: 016700ff\n"
        );
        let json: serde_json::Value =
            serde_json::from_str(&render(&output, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["commands"][0]["hex"], "05");
        assert_eq!(json["telemetry"], "016700ff");
    }

    #[test]
    fn lists_every_row() {
        let listing = render_registry();
        assert!(listing.contains("set_time"));
        assert!(listing.contains("0103"));
        assert!(listing.contains("barometer"));
        assert_eq!(
            listing.lines().count(),
            2 + command_layouts().len() + sensor_layouts().len()
        );
    }
}
