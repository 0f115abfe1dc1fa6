use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::generator::BuildDefsGenerator;

#[derive(Parser)]
#[command(name = "gen-build-defs")]
#[command(about = "Generates a BUILD.gn file with build targets from Fuchsia SDK manifest files")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Path to the unpacked SDK directory containing meta/manifest.json
    #[arg(long, default_value = "sdk")]
    pub sdk_dir: PathBuf,

    /// Path of the generated file (defaults to BUILD.gn inside the SDK directory)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let output_path = cli
        .output
        .unwrap_or_else(|| cli.sdk_dir.join("BUILD.gn"));

    let generator = BuildDefsGenerator::new(&cli.sdk_dir, &output_path);
    generator.generate()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let cli = Cli::parse_from(["gen-build-defs"]);
        assert_eq!(cli.sdk_dir, PathBuf::from("sdk"));
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_explicit_paths() {
        let cli = Cli::parse_from([
            "gen-build-defs",
            "--sdk-dir",
            "/opt/fuchsia-sdk",
            "--output",
            "/tmp/BUILD.gn",
        ]);
        assert_eq!(cli.sdk_dir, PathBuf::from("/opt/fuchsia-sdk"));
        assert_eq!(cli.output, Some(PathBuf::from("/tmp/BUILD.gn")));
    }
}
