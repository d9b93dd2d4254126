//! Resolution of resource references against a compiled resource table
//! under a device configuration.

use crate::pb;
use log::debug;

/// The slice of a bundle's resource table that belongs to one package.
///
/// At most one package is retained: the one whose name equals the manifest
/// package. When none matches, every lookup yields nothing; that is not an
/// error.
pub struct ResourceSet {
    package: Option<pb::Package>,
}

impl ResourceSet {
    /// Single-pass filter over the table's packages.
    pub fn from_table(table: pb::ResourceTable, package_name: &str) -> ResourceSet {
        let package = table
            .package
            .into_iter()
            .find(|package| package.package_name == package_name);
        if package.is_none() {
            debug!("resource table has no package named {package_name:?}");
        }
        ResourceSet { package }
    }

    /// No package was retained at load time.
    pub fn is_empty(&self) -> bool {
        self.package.is_none()
    }

    /// Looks up the entry `kind/name` and selects among its
    /// per-configuration values, returning the value's literal content: a
    /// file path for `mipmap`/`drawable`, a string for `string`, nothing
    /// for any other combination.
    ///
    /// Everything here is a linear scan, O(types x entries x configs); the
    /// table is small and this path runs a handful of times per bundle.
    ///
    /// Candidate selection never stops at the first match: each subsequent
    /// matching value overwrites the previous one, so the *last* match in
    /// table order wins. Known quirk, kept for compatibility with existing
    /// consumers; do not replace with closest-density selection.
    pub fn resolve(
        &self,
        kind: &str,
        name: &str,
        config: Option<&pb::Configuration>,
    ) -> Option<String> {
        let package = self.package.as_ref()?;
        let mut selected: Option<&pb::Value> = None;
        for ty in &package.r#type {
            if ty.name != kind {
                continue;
            }
            for entry in &ty.entry {
                if entry.name != name {
                    continue;
                }
                for candidate in &entry.config_value {
                    if config_matches(config, candidate.config.as_ref()) {
                        selected = candidate.value.as_ref();
                    }
                }
            }
        }
        extract_value(kind, selected?)
    }
}

/// A candidate applies when the caller passed no configuration, when the
/// target density is unspecified, when the candidate itself is
/// configuration-unqualified (density 0), or when the densities are equal.
/// All other qualifier fields are accepted but ignored.
fn config_matches(target: Option<&pb::Configuration>, candidate: Option<&pb::Configuration>) -> bool {
    let target = match target {
        Some(target) => target,
        None => return true,
    };
    if target.density == 0 {
        return true;
    }
    let candidate_density = candidate.map(|config| config.density).unwrap_or(0);
    candidate_density == 0 || candidate_density == target.density
}

/// Type-directed extraction: the value kind must agree with the resource
/// type, with no cross-type fallback.
fn extract_value(kind: &str, value: &pb::Value) -> Option<String> {
    let item = value.item.as_ref()?;
    match (kind, item.value.as_ref()?) {
        ("mipmap" | "drawable", pb::item::Value::File(file)) => Some(file.path.clone()),
        ("string", pb::item::Value::Str(text)) => Some(text.value.clone()),
        _ => None,
    }
}
