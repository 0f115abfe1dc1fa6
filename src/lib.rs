pub mod cli;
pub mod convert;
pub mod generator;
pub mod gn;
pub mod manifest;

pub use generator::BuildDefsGenerator;
pub use manifest::{PartManifest, SdkManifest};
