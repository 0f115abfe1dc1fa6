use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::convert::convert_part;
use crate::gn::GENERATED_PREAMBLE;
use crate::manifest::{PartManifest, SdkManifest};

/// Drives the conversion: loads the root SDK manifest, converts each part in
/// listed order, and writes the generated BUILD.gn.
pub struct BuildDefsGenerator {
    sdk_dir: PathBuf,
    output_path: PathBuf,
}

impl BuildDefsGenerator {
    pub fn new(sdk_dir: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Self {
        Self {
            sdk_dir: sdk_dir.as_ref().to_path_buf(),
            output_path: output_path.as_ref().to_path_buf(),
        }
    }

    /// Generates the output file and returns its path.
    ///
    /// Targets are written incrementally in manifest part order, so a fatal
    /// error partway through can leave a partial file behind. That's fine
    /// for a regenerable build artifact; the next successful run overwrites
    /// it.
    pub fn generate(&self) -> Result<PathBuf> {
        let manifest = SdkManifest::load(&self.sdk_dir)?;

        let mut buildfile = fs::File::create(&self.output_path)
            .with_context(|| format!("Failed to create {}", self.output_path.display()))?;

        buildfile
            .write_all(GENERATED_PREAMBLE.as_bytes())
            .with_context(|| format!("Failed to write to {}", self.output_path.display()))?;

        let mut target_count = 0;
        for part in &manifest.parts {
            let parsed = PartManifest::load(&self.sdk_dir, part)
                .with_context(|| format!("Failed to convert part {}", part))?;

            if let Some(target) = convert_part(&parsed) {
                write!(buildfile, "{}\n\n", target.format())
                    .with_context(|| format!("Failed to write to {}", self.output_path.display()))?;
                target_count += 1;
            }
        }

        println!(
            "Generated {}: {} targets from {} parts",
            self.output_path.display(),
            target_count,
            manifest.parts.len()
        );

        Ok(self.output_path.clone())
    }
}
