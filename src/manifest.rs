use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level SDK manifest. Lists the part manifest files to convert, in the
/// order their targets should appear in the generated output.
#[derive(Debug, Clone, Deserialize)]
pub struct SdkManifest {
    pub parts: Vec<String>,
}

impl SdkManifest {
    /// Loads `meta/manifest.json` from the SDK directory.
    pub fn load(sdk_dir: &Path) -> Result<Self> {
        let manifest_path = sdk_dir.join("meta").join("manifest.json");

        let content = fs::read_to_string(&manifest_path)
            .with_context(|| format!("Failed to read SDK manifest from {}", manifest_path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse SDK manifest JSON from {}", manifest_path.display()))
    }
}

/// One SDK part manifest, dispatched on its `type` key.
///
/// Types that don't need GN targets are unit variants; any other fields in
/// their JSON are ignored. A `type` string outside this set (or a missing
/// `type` key) is a parse error.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PartManifest {
    FidlLibrary(FidlLibrary),
    CcSourceLibrary(CcSourceLibrary),
    CcPrebuiltLibrary(CcPrebuiltLibrary),

    // No need to build targets for these types yet.
    HostTool,
    Image,
    LoadableModule,
    Sysroot,
}

impl PartManifest {
    /// Loads one part manifest, resolved relative to the SDK directory.
    pub fn load(sdk_dir: &Path, part: &str) -> Result<Self> {
        let part_path = sdk_dir.join(part);

        let content = fs::read_to_string(&part_path)
            .with_context(|| format!("Failed to read part manifest from {}", part_path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse part manifest JSON from {}", part_path.display()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FidlLibrary {
    pub name: String,
    pub deps: Vec<String>,
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CcPrebuiltLibrary {
    pub name: String,
    pub deps: Vec<String>,
    pub headers: Vec<String>,
    pub root: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CcSourceLibrary {
    pub name: String,
    pub deps: Vec<String>,
    pub sources: Vec<String>,
    pub headers: Option<Vec<String>>,
    pub files: Option<Vec<String>>,
    pub root: String,
    pub fidl_deps: Vec<String>,
}
