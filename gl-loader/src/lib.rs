//! Runtime OpenGL capability resolution
//!
//! Discovers, at startup, which optional capabilities the active OpenGL
//! driver provides and binds their entry points to callable addresses. It
//! handles:
//!
//! - Opening the platform's GL client library once per process and resolving
//!   symbols through it, with the API's own get-proc-address query as a
//!   fallback for extension-only entry points
//! - Matching capability names against the driver's space-delimited
//!   extension string without copying driver-owned memory
//! - Walking core version thresholds highest to lowest so that a newer
//!   version implies every older one, then sweeping independent extensions
//! - Answering point queries over the same driver strings without consulting
//!   the populated table
//!
//! The result is a [`CapabilityTable`]: one flag per known capability plus a
//! resolved-or-null address per entry point. Callers must null-check entry
//! points individually; an enabled capability may still carry unresolved
//! slots on partially conforming drivers.

pub mod init;
pub mod loader;
pub mod matcher;
pub mod query;
pub mod table;

pub use gl_registry::CapabilitySpec;
pub use init::{initialize, InitError};
pub use loader::{FnAddr, GlDriver, NamingConvention, NativeDriver, StringName, SymbolLoader};
pub use query::SupportQuery;
pub use table::{Capability, CapabilityTable, EntryPoint};

use spin::Once;

/// OpenGL version as reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GlVersion {
    pub major: u16,
    pub minor: u16,
}

impl GlVersion {
    /// Oldest version the loader refuses to work with. Drivers at or below
    /// this have no extension mechanism to resolve against.
    pub const BASELINE: Self = Self { major: 1, minor: 0 };

    /// Whether this version meets the given minimum.
    pub fn at_least(self, major: u16, minor: u16) -> bool {
        self.major > major || (self.major == major && self.minor >= minor)
    }

    /// Tolerant parse of a driver version string, `<major>[.<minor>]` with
    /// arbitrary trailing content.
    ///
    /// The trailing content is driver-defined (release numbers, vendor
    /// banners) and must not abort the parse, so this consumes digits one by
    /// one instead of delegating to a general numeric parser. A missing minor
    /// reads as `0`. Returns `None` when no leading major digit exists.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        let mut rest = bytes;
        let major = take_number(&mut rest)?;
        let minor = match rest.first() {
            Some(b'.') => {
                rest = &rest[1..];
                take_number(&mut rest).unwrap_or(0)
            }
            _ => 0,
        };
        Some(Self { major, minor })
    }
}

fn take_number(rest: &mut &[u8]) -> Option<u16> {
    let mut value: u16 = 0;
    let mut seen = false;
    while let Some(&byte) = rest.first() {
        if !byte.is_ascii_digit() {
            break;
        }
        value = value
            .saturating_mul(10)
            .saturating_add(u16::from(byte - b'0'));
        seen = true;
        *rest = &rest[1..];
    }
    seen.then_some(value)
}

/// Loader configuration, fixed before initialization.
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    /// Resolve and enable every known extension even when the driver does
    /// not advertise it. Some drivers export entry points for extensions
    /// they leave out of the extension string.
    pub force_resolve: bool,
    /// How logical entry-point names map to exported symbol names.
    pub convention: NamingConvention,
    /// Explicit driver library path, tried before the platform candidates.
    pub library_override: Option<std::path::PathBuf>,
}

impl LoaderConfig {
    /// Read overrides from `GL_LOADER_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(val) = std::env::var("GL_LOADER_FORCE_RESOLVE") {
            config.force_resolve = val == "1" || val.eq_ignore_ascii_case("true");
        }
        if let Ok(val) = std::env::var("GL_LOADER_LIBRARY") {
            if !val.is_empty() {
                config.library_override = Some(val.into());
            }
        }
        config
    }
}

/// Resolve the native driver's capabilities with configuration from the
/// environment.
///
/// Must be called on the thread that owns the current GL context.
pub fn init() -> Result<CapabilityTable, InitError> {
    init_with(&LoaderConfig::from_env())
}

/// Resolve the native driver's capabilities with an explicit configuration.
pub fn init_with(config: &LoaderConfig) -> Result<CapabilityTable, InitError> {
    let driver = NativeDriver::open(config)?;
    initialize(&driver, config)
}

static PROCESS_TABLE: Once<Result<CapabilityTable, InitError>> = Once::new();

/// One-shot process-wide initialization.
///
/// The first call runs [`init`] and caches its outcome; every later call
/// returns the cached result, which also makes concurrent first calls safe.
pub fn init_process() -> Result<&'static CapabilityTable, InitError> {
    PROCESS_TABLE
        .call_once(init)
        .as_ref()
        .map_err(|err| err.clone())
}

/// The process-wide table, if [`init_process`] has already succeeded.
pub fn process_table() -> Option<&'static CapabilityTable> {
    PROCESS_TABLE.get().and_then(|result| result.as_ref().ok())
}
