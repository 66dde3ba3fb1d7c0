//! The populated capability table
//!
//! One entry per known capability, built unresolved from the registry data
//! and filled in during initialization. Read-only afterwards: callers pass
//! the table by reference to wherever capability flags or entry points are
//! needed, which keeps multiple driver contexts possible.

use std::collections::HashMap;

use gl_registry::{CapabilitySpec, CAPABILITIES};

use crate::loader::FnAddr;
use crate::GlVersion;

/// One entry-point slot owned by a capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    name: &'static str,
    addr: Option<FnAddr>,
}

impl EntryPoint {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The resolved address, or `None` when the driver does not export this
    /// entry point. Unresolved slots stay `None` even inside an enabled
    /// capability.
    pub fn address(&self) -> Option<FnAddr> {
        self.addr
    }
}

/// A capability together with its flag and entry-point slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capability {
    spec: &'static CapabilitySpec,
    flag: bool,
    entry_points: Vec<EntryPoint>,
}

impl Capability {
    fn unresolved(spec: &'static CapabilitySpec) -> Self {
        let entry_points = spec
            .commands
            .iter()
            .map(|&name| EntryPoint { name, addr: None })
            .collect();
        Self {
            spec,
            flag: false,
            entry_points,
        }
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn spec(&self) -> &'static CapabilitySpec {
        self.spec
    }

    pub fn is_core(&self) -> bool {
        self.spec.is_core()
    }

    /// The capability flag. True means the driver advertised the capability
    /// or its core version met the minimum; it does not promise that every
    /// entry point resolved.
    pub fn is_enabled(&self) -> bool {
        self.flag
    }

    /// Stricter signal: enabled and every owned entry point resolved.
    pub fn fully_resolved(&self) -> bool {
        self.flag && self.entry_points.iter().all(|ep| ep.addr.is_some())
    }

    pub fn entry_points(&self) -> &[EntryPoint] {
        &self.entry_points
    }
}

/// Flat result of initialization: one flag per capability plus the resolved
/// entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityTable {
    version: GlVersion,
    entries: Vec<Capability>,
    by_name: HashMap<&'static str, usize>,
    resolved: HashMap<&'static str, FnAddr>,
}

impl CapabilityTable {
    pub(crate) fn new(version: GlVersion) -> Self {
        let entries: Vec<Capability> = CAPABILITIES.iter().map(Capability::unresolved).collect();
        let by_name = entries
            .iter()
            .enumerate()
            .map(|(index, capability)| (capability.name(), index))
            .collect();
        Self {
            version,
            entries,
            by_name,
            resolved: HashMap::new(),
        }
    }

    pub(crate) fn set_enabled(&mut self, index: usize) {
        self.entries[index].flag = true;
    }

    pub(crate) fn set_entry_point(&mut self, index: usize, slot: usize, addr: FnAddr) {
        let entry = &mut self.entries[index].entry_points[slot];
        entry.addr = Some(addr);
        // Duplicate command names across capabilities resolve to the same
        // exported symbol; the first resolution fills the flat index.
        self.resolved.entry(entry.name).or_insert(addr);
    }

    /// Driver version the table was resolved against.
    pub fn version(&self) -> GlVersion {
        self.version
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.entries
    }

    pub fn capability(&self, name: &str) -> Option<&Capability> {
        self.by_name.get(name).map(|&index| &self.entries[index])
    }

    /// Flag lookup by capability name; unknown names read as unsupported.
    pub fn is_supported(&self, name: &str) -> bool {
        self.capability(name).is_some_and(Capability::is_enabled)
    }

    /// Whether a capability is enabled with every entry point resolved.
    pub fn fully_resolved(&self, name: &str) -> bool {
        self.capability(name).is_some_and(Capability::fully_resolved)
    }

    /// Resolved address of an entry point by logical name.
    pub fn entry_point(&self, command: &str) -> Option<FnAddr> {
        self.resolved.get(command).copied()
    }

    pub fn enabled_count(&self) -> usize {
        self.entries.iter().filter(|c| c.flag).count()
    }

    pub fn resolved_entry_point_count(&self) -> usize {
        self.resolved.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::c_void;

    fn addr(value: usize) -> FnAddr {
        FnAddr::from_ptr(value as *const c_void).unwrap()
    }

    #[test]
    fn test_new_table_is_all_unresolved() {
        let table = CapabilityTable::new(GlVersion { major: 4, minor: 6 });
        assert_eq!(table.enabled_count(), 0);
        assert_eq!(table.resolved_entry_point_count(), 0);
        assert!(!table.is_supported("GL_VERSION_1_1"));
        assert!(table.capability("GL_ARB_sync").is_some());
        assert!(table.capability("GL_NOT_a_capability").is_none());
    }

    #[test]
    fn test_partial_resolution_is_not_fully_resolved() {
        let mut table = CapabilityTable::new(GlVersion { major: 3, minor: 2 });
        let index = *table.by_name.get("GL_ARB_sync").unwrap();
        table.set_enabled(index);
        table.set_entry_point(index, 0, addr(0x1000));

        assert!(table.is_supported("GL_ARB_sync"));
        assert!(!table.fully_resolved("GL_ARB_sync"));

        let capability = table.capability("GL_ARB_sync").unwrap();
        assert_eq!(capability.entry_points()[0].address(), Some(addr(0x1000)));
        assert_eq!(capability.entry_points()[1].address(), None);
    }

    #[test]
    fn test_entry_point_index_keeps_first_resolution() {
        let mut table = CapabilityTable::new(GlVersion { major: 3, minor: 3 });
        let core = *table.by_name.get("GL_VERSION_3_0").unwrap();
        let ext = *table.by_name.get("GL_ARB_vertex_array_object").unwrap();
        let core_slot = gl_registry::find("GL_VERSION_3_0")
            .unwrap()
            .commands
            .iter()
            .position(|&c| c == "glBindVertexArray")
            .unwrap();

        table.set_entry_point(core, core_slot, addr(0x2000));
        table.set_entry_point(ext, 0, addr(0x2000));
        assert_eq!(table.entry_point("glBindVertexArray"), Some(addr(0x2000)));
        assert_eq!(table.entry_point("glNoSuchCommand"), None);
    }
}
