//! End-to-end initialization against an in-memory driver.

use std::collections::HashSet;
use std::ffi::c_void;

use gl_loader::{
    initialize, FnAddr, GlDriver, GlVersion, InitError, LoaderConfig, StringName, SupportQuery,
};

/// Driver double with a fixed version string, advertisement string and
/// exported-symbol set. Addresses are derived from the name so repeated runs
/// resolve identically.
struct FakeDriver {
    version: &'static str,
    extensions: &'static str,
    missing_symbols: HashSet<&'static str>,
}

impl FakeDriver {
    fn new(version: &'static str, extensions: &'static str) -> Self {
        Self {
            version,
            extensions,
            missing_symbols: HashSet::new(),
        }
    }

    fn without_symbol(mut self, symbol: &'static str) -> Self {
        self.missing_symbols.insert(symbol);
        self
    }
}

impl GlDriver for FakeDriver {
    fn query_string(&self, name: StringName) -> Option<&[u8]> {
        match name {
            StringName::Version => (!self.version.is_empty()).then_some(self.version.as_bytes()),
            StringName::Extensions => Some(self.extensions.as_bytes()),
            StringName::Vendor => Some(b"Fake Driver Project"),
            StringName::Renderer => Some(b"fake rasterizer"),
        }
    }

    fn resolve(&self, logical_name: &str) -> Option<FnAddr> {
        if self.missing_symbols.contains(logical_name) {
            return None;
        }
        let fake = 0x1000
            + logical_name
                .bytes()
                .fold(0usize, |acc, byte| acc.wrapping_mul(31).wrapping_add(byte as usize));
        FnAddr::from_ptr(fake as *const c_void)
    }
}

#[test]
fn test_query_agrees_with_table_for_every_known_capability() {
    let driver = FakeDriver::new(
        "3.3 Mesa 23.1",
        "GL_ARB_sync GL_ARB_timer_query GL_KHR_debug GL_EXT_texture_filter_anisotropic \
         GL_ARB_vertex_array_object GL_NVX_gpu_memory_info",
    );
    let table = initialize(&driver, &LoaderConfig::default()).unwrap();
    let query = SupportQuery::from_driver(&driver).unwrap();

    for capability in table.capabilities() {
        assert_eq!(
            query.is_supported(capability.name()),
            capability.is_enabled(),
            "query and table diverge on {}",
            capability.name()
        );
    }
}

#[test]
fn test_core_version_flags_are_monotonic() {
    for version in ["1.1", "2.1", "3.2", "4.6.0 NVIDIA", "9"] {
        let driver = FakeDriver::new(version, "");
        let table = initialize(&driver, &LoaderConfig::default()).unwrap();
        let cores: Vec<_> = table
            .capabilities()
            .iter()
            .filter(|capability| capability.is_core())
            .collect();
        for pair in cores.windows(2) {
            assert!(
                pair[1].is_enabled() <= pair[0].is_enabled(),
                "{} enabled while lower {} is not (driver {version})",
                pair[1].name(),
                pair[0].name()
            );
        }
    }
}

#[test]
fn test_initialization_is_idempotent() {
    let driver = FakeDriver::new("4.1", "GL_ARB_sync GL_KHR_debug GL_ARB_buffer_storage");
    let config = LoaderConfig::default();
    let first = initialize(&driver, &config).unwrap();
    let second = initialize(&driver, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unknown_advertised_names_are_ignored() {
    let driver = FakeDriver::new("2.1", "GL_ARB_sync NAME_C GL_ARB_made_up GL_KHR_debug");
    let table = initialize(&driver, &LoaderConfig::default()).unwrap();

    assert!(table.is_supported("GL_ARB_sync"));
    assert!(table.is_supported("GL_KHR_debug"));
    assert!(!table.is_supported("NAME_C"));
    assert!(!table.is_supported("GL_ARB_made_up"));
    assert_eq!(
        table
            .capabilities()
            .iter()
            .filter(|capability| !capability.is_core() && capability.is_enabled())
            .count(),
        2
    );
}

#[test]
fn test_partial_resolution_keeps_flag_and_null_slot() {
    let driver =
        FakeDriver::new("3.2", "GL_ARB_timer_query").without_symbol("glGetQueryObjectui64v");
    let table = initialize(&driver, &LoaderConfig::default()).unwrap();

    assert!(table.is_supported("GL_ARB_timer_query"));
    assert!(!table.fully_resolved("GL_ARB_timer_query"));

    let capability = table.capability("GL_ARB_timer_query").unwrap();
    for entry_point in capability.entry_points() {
        if entry_point.name() == "glGetQueryObjectui64v" {
            assert_eq!(entry_point.address(), None);
        } else {
            assert!(entry_point.address().is_some());
        }
    }
    assert_eq!(table.entry_point("glGetQueryObjectui64v"), None);
    assert!(table.entry_point("glQueryCounter").is_some());
}

#[test]
fn test_fully_resolved_reported_when_all_slots_fill() {
    let driver = FakeDriver::new("3.2", "GL_ARB_timer_query");
    let table = initialize(&driver, &LoaderConfig::default()).unwrap();
    assert!(table.fully_resolved("GL_ARB_timer_query"));
    assert!(table.fully_resolved("GL_VERSION_3_2"));
    assert!(!table.fully_resolved("GL_VERSION_4_6"));
}

#[test]
fn test_fatal_errors_surface_as_status() {
    let no_version = FakeDriver::new("", "");
    assert_eq!(
        initialize(&no_version, &LoaderConfig::default()),
        Err(InitError::NoVersionString)
    );

    let garbled = FakeDriver::new("OpenGL ES 3.2", "");
    assert_eq!(
        initialize(&garbled, &LoaderConfig::default()),
        Err(InitError::NoVersionString)
    );

    let ancient = FakeDriver::new("1.0", "GL_ARB_sync");
    assert_eq!(
        initialize(&ancient, &LoaderConfig::default()),
        Err(InitError::VersionTooOld)
    );
}

#[test]
fn test_missing_minor_reads_as_zero_with_empty_advertisement() {
    let driver = FakeDriver::new("9", "");
    let table = initialize(&driver, &LoaderConfig::default()).unwrap();
    assert_eq!(table.version(), GlVersion { major: 9, minor: 0 });
    assert!(table.is_supported("GL_VERSION_4_6"));
    assert!(table
        .capabilities()
        .iter()
        .filter(|capability| !capability.is_core())
        .all(|capability| !capability.is_enabled()));
}

#[test]
fn test_force_resolve_covers_unadvertised_extensions() {
    let driver = FakeDriver::new("3.0", "");
    let config = LoaderConfig {
        force_resolve: true,
        ..LoaderConfig::default()
    };
    let table = initialize(&driver, &config).unwrap();
    assert!(table.is_supported("GL_ARB_debug_output"));
    assert!(table.entry_point("glDebugMessageCallbackARB").is_some());
}
