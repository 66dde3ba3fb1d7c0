//! Capability and entry-point enumeration for the OpenGL loader
//!
//! This crate is pure data: one record per known capability (a core version
//! threshold or a named extension) listing the entry points it owns, plus the
//! list of known extension category suffixes. The tables live in
//! [`generated`] and are produced from the Khronos registry; nothing in here
//! talks to a driver.

mod generated;

pub use generated::{CAPABILITIES, CATEGORIES};

/// One capability record.
///
/// Core versions carry a minimum driver version and a reference to the next
/// higher version that subsumes them; extensions carry neither and are
/// independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilitySpec {
    /// Capability name as the driver advertises it, e.g. `GL_ARB_sync`.
    pub name: &'static str,
    /// Minimum `(major, minor)` driver version for core-version capabilities.
    pub min_version: Option<(u16, u16)>,
    /// Name of the capability whose presence implies this one.
    pub subsumed_by: Option<&'static str>,
    /// Logical names of the entry points this capability owns.
    pub commands: &'static [&'static str],
}

impl CapabilitySpec {
    /// Whether this record is a core version threshold.
    pub const fn is_core(&self) -> bool {
        self.min_version.is_some()
    }
}

/// Record constructor for a core version threshold.
const fn core(
    name: &'static str,
    major: u16,
    minor: u16,
    subsumed_by: Option<&'static str>,
    commands: &'static [&'static str],
) -> CapabilitySpec {
    CapabilitySpec {
        name,
        min_version: Some((major, minor)),
        subsumed_by,
        commands,
    }
}

/// Record constructor for an independent extension.
const fn ext(name: &'static str, commands: &'static [&'static str]) -> CapabilitySpec {
    CapabilitySpec {
        name,
        min_version: None,
        subsumed_by: None,
        commands,
    }
}

/// Look up a capability record by its advertised name.
pub fn find(name: &str) -> Option<&'static CapabilitySpec> {
    CAPABILITIES.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_known_names() {
        assert!(find("GL_VERSION_1_1").is_some());
        assert!(find("GL_ARB_vertex_buffer_object").is_some());
        assert!(find("GL_FAKE_nonsense").is_none());
    }

    #[test]
    fn test_core_versions_ascend_and_chain() {
        let cores: Vec<_> = CAPABILITIES.iter().filter(|s| s.is_core()).collect();
        assert!(!cores.is_empty());
        for pair in cores.windows(2) {
            let a = pair[0].min_version.unwrap();
            let b = pair[1].min_version.unwrap();
            assert!(a < b, "{} not below {}", pair[0].name, pair[1].name);
            assert_eq!(pair[0].subsumed_by, Some(pair[1].name));
        }
        assert_eq!(cores.last().unwrap().subsumed_by, None);
    }

    #[test]
    fn test_subsumption_targets_exist() {
        for spec in CAPABILITIES {
            if let Some(parent) = spec.subsumed_by {
                assert!(find(parent).is_some(), "{} names unknown subsumer", spec.name);
            }
        }
    }

    #[test]
    fn test_extension_categories_are_known() {
        for spec in CAPABILITIES.iter().filter(|s| !s.is_core()) {
            let rest = spec.name.strip_prefix("GL_").unwrap();
            let category = rest.split('_').next().unwrap();
            assert!(
                CATEGORIES.contains(&category),
                "{} has unknown category {}",
                spec.name,
                category
            );
        }
    }

    #[test]
    fn test_names_are_unique() {
        for (i, spec) in CAPABILITIES.iter().enumerate() {
            assert!(
                CAPABILITIES[i + 1..].iter().all(|s| s.name != spec.name),
                "duplicate record {}",
                spec.name
            );
        }
    }
}
