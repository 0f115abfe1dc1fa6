use std::collections::HashSet;

use crate::gn::GnTarget;
use crate::manifest::{CcPrebuiltLibrary, CcSourceLibrary, FidlLibrary, PartManifest};

/// Removes the namespace from a manifest name and substitutes characters
/// that are invalid in GN target names (hyphens become underscores).
pub fn reformat_target_name(name: &str) -> String {
    name.split('.').next_back().unwrap_or(name).replace('-', "_")
}

/// Converts one part manifest to a GN target, or `None` for types that
/// don't need build targets.
pub fn convert_part(part: &PartManifest) -> Option<GnTarget> {
    match part {
        PartManifest::FidlLibrary(lib) => Some(convert_fidl_library(lib)),
        PartManifest::CcSourceLibrary(lib) => Some(convert_cc_source_library(lib)),
        PartManifest::CcPrebuiltLibrary(lib) => Some(convert_cc_prebuilt_library(lib)),
        PartManifest::HostTool
        | PartManifest::Image
        | PartManifest::LoadableModule
        | PartManifest::Sysroot => None,
    }
}

/// Turns manifest dependency names into local GN target labels.
fn local_dep_labels(deps: &[String]) -> Vec<String> {
    deps.iter()
        .map(|dep| format!(":{}", reformat_target_name(dep)))
        .collect()
}

fn convert_fidl_library(lib: &FidlLibrary) -> GnTarget {
    // FIDL names need special handling: the namespace is everything before
    // the last dot, and the target keeps the raw last segment with no
    // hyphen substitution (unlike the other target types).
    let (namespace, target_name) = match lib.name.rsplit_once('.') {
        Some((namespace, last)) => (namespace.to_string(), last.to_string()),
        None => (String::new(), lib.name.clone()),
    };

    GnTarget::new("fuchsia_sdk_fidl_pkg", target_name)
        .list_field("public_deps", local_dep_labels(&lib.deps))
        .list_field("sources", lib.sources.clone())
        .str_field("namespace", namespace)
}

fn convert_cc_prebuilt_library(lib: &CcPrebuiltLibrary) -> GnTarget {
    GnTarget::new("fuchsia_sdk_pkg", reformat_target_name(&lib.name))
        .list_field("public_deps", local_dep_labels(&lib.deps))
        .list_field("sources", lib.headers.clone())
        .list_field("libs", vec![lib.name.clone()])
        .list_field("include_dirs", vec![format!("{}/include", lib.root)])
}

fn convert_cc_source_library(lib: &CcSourceLibrary) -> GnTarget {
    let mut public_deps = local_dep_labels(&lib.deps);
    public_deps.extend(local_dep_labels(&lib.fidl_deps));

    // Header and source file paths can be scattered across "sources",
    // "headers", and "files". Merge them into one deduplicated source list.
    let mut sources = lib.sources.clone();
    if let Some(headers) = &lib.headers {
        sources.extend(headers.iter().cloned());
    }
    if let Some(files) = &lib.files {
        sources.extend(files.iter().cloned());
    }
    let mut seen = HashSet::new();
    sources.retain(|source| seen.insert(source.clone()));

    GnTarget::new("fuchsia_sdk_pkg", reformat_target_name(&lib.name))
        .list_field("public_deps", public_deps)
        .list_field("sources", sources)
        .list_field("include_dirs", vec![format!("{}/include", lib.root)])
}
