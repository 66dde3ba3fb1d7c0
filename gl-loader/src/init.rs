//! Initialization orchestration
//!
//! Runs the phases in order: bootstrap the version query, enable core
//! versions highest to lowest so a newer version implies every older one,
//! then sweep the independent extensions against the advertisement string.
//! Fatal errors can only arise before the extension sweep; from there on the
//! worst outcome is an unresolved entry-point slot.

use core::fmt;

use gl_registry::CAPABILITIES;

use crate::loader::{GlDriver, StringName};
use crate::matcher;
use crate::table::CapabilityTable;
use crate::{GlVersion, LoaderConfig};

/// Fatal initialization failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    /// The platform loader could not open a usable driver library.
    NoDriver,
    /// The driver answered, but without a parseable version string.
    NoVersionString,
    /// The driver predates the supported baseline and has no extension
    /// mechanism to resolve against.
    VersionTooOld,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::NoDriver => write!(f, "no OpenGL driver library could be opened"),
            InitError::NoVersionString => {
                write!(f, "driver did not report a parseable version string")
            }
            InitError::VersionTooOld => {
                write!(f, "driver OpenGL version is at or below the supported baseline")
            }
        }
    }
}

impl std::error::Error for InitError {}

/// Resolve the full capability table against a driver.
///
/// Idempotent for an unchanged driver: running it again reproduces the same
/// table. Partially resolvable capabilities keep their flag; the missing
/// entry points simply stay unresolved.
pub fn initialize<D: GlDriver>(driver: &D, config: &LoaderConfig) -> Result<CapabilityTable, InitError> {
    let version_bytes = driver
        .query_string(StringName::Version)
        .ok_or(InitError::NoVersionString)?;
    let version = GlVersion::parse(version_bytes).ok_or(InitError::NoVersionString)?;
    if version <= GlVersion::BASELINE {
        return Err(InitError::VersionTooOld);
    }
    log::info!("OpenGL version {}.{}", version.major, version.minor);
    if let Some(vendor) = driver.query_string(StringName::Vendor) {
        log::info!("OpenGL vendor: {}", String::from_utf8_lossy(vendor));
    }
    if let Some(renderer) = driver.query_string(StringName::Renderer) {
        log::info!("OpenGL renderer: {}", String::from_utf8_lossy(renderer));
    }

    let mut table = CapabilityTable::new(version);

    // Core versions, highest first: a version is enabled when the one above
    // it is, or when the driver version meets its minimum.
    let core_count = CAPABILITIES.iter().take_while(|spec| spec.is_core()).count();
    for index in (0..core_count).rev() {
        let spec = &CAPABILITIES[index];
        let Some((major, minor)) = spec.min_version else {
            continue;
        };
        let implied = spec
            .subsumed_by
            .is_some_and(|parent| table.is_supported(parent));
        if implied || version.at_least(major, minor) {
            enable(&mut table, index, driver);
        }
    }

    // Extensions are independent of each other; order does not matter. A
    // null extension string reads as empty rather than as an error.
    let advertised = driver
        .query_string(StringName::Extensions)
        .unwrap_or_default();
    for (index, spec) in CAPABILITIES.iter().enumerate().skip(core_count) {
        if matcher::contains(advertised, spec.name) || config.force_resolve {
            enable(&mut table, index, driver);
        }
    }

    log::info!(
        "Enabled {} of {} known capabilities, {} entry points resolved",
        table.enabled_count(),
        CAPABILITIES.len(),
        table.resolved_entry_point_count()
    );
    Ok(table)
}

/// Flip a capability on and resolve every entry point it owns. The flag
/// stays set even when some entry points fail to resolve; callers observe
/// those as `None` slots.
fn enable<D: GlDriver>(table: &mut CapabilityTable, index: usize, driver: &D) {
    table.set_enabled(index);
    for (slot, &command) in CAPABILITIES[index].commands.iter().enumerate() {
        match driver.resolve(command) {
            Some(addr) => table.set_entry_point(index, slot, addr),
            None => log::debug!(
                "{}: entry point {} did not resolve",
                CAPABILITIES[index].name,
                command
            ),
        }
    }
}
