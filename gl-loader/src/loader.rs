//! Dynamic symbol resolution against the platform's OpenGL client library
//!
//! The library handle is opened lazily, exactly once per process, and kept
//! for the process lifetime. Resolution goes through the OS loader first and
//! falls back to the GL binding API's own get-proc-address query, since some
//! drivers expose extension entry points only there.

use std::borrow::Cow;
use std::ffi::{c_char, c_void, CStr, CString};
use std::path::{Path, PathBuf};

use libloading::Library;
use spin::Once;

use crate::init::InitError;
use crate::LoaderConfig;

/// A resolved entry-point address.
///
/// Stored as an integer so tables holding it stay plain data; callers
/// transmute [`FnAddr::as_ptr`] to the matching function signature before
/// use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FnAddr(usize);

impl FnAddr {
    /// Wrap a raw address, mapping null to `None`.
    pub fn from_ptr(ptr: *const c_void) -> Option<Self> {
        if ptr.is_null() {
            None
        } else {
            Some(Self(ptr as usize))
        }
    }

    pub fn as_ptr(self) -> *const c_void {
        self.0 as *const c_void
    }
}

/// How a logical entry-point name maps to the symbol a driver exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingConvention {
    /// Exported symbol equals the logical name.
    #[default]
    Standard,
    /// Exported symbol carries a leading underscore, the mangling used by
    /// bundle-based resolvers.
    UnderscorePrefixed,
}

impl NamingConvention {
    /// Rewrite a logical name into the exact symbol to request.
    pub fn rewrite<'a>(&self, logical_name: &'a str) -> Cow<'a, str> {
        match self {
            NamingConvention::Standard => Cow::Borrowed(logical_name),
            NamingConvention::UnderscorePrefixed => Cow::Owned(format!("_{logical_name}")),
        }
    }
}

/// String queries answered by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum StringName {
    Vendor = 0x1F00,
    Renderer = 0x1F01,
    Version = 0x1F02,
    Extensions = 0x1F03,
}

/// Driver-facing seam used by initialization and queries.
///
/// The native implementation talks to the real GL library; tests substitute
/// an in-memory fake.
pub trait GlDriver {
    /// Fetch one of the driver's identification strings.
    ///
    /// The returned bytes are driver-owned and only valid until the next
    /// driver call; they must not be cached or copied into long-lived state.
    fn query_string(&self, name: StringName) -> Option<&[u8]>;

    /// Resolve a logical entry-point name to a callable address.
    fn resolve(&self, logical_name: &str) -> Option<FnAddr>;
}

type GetProcAddrFn = unsafe extern "C" fn(*const c_char) -> *const c_void;
type GlGetStringFn = unsafe extern "C" fn(u32) -> *const u8;

/// Per-platform loading parameters, fixed at build time.
struct PlatformProfile {
    library_candidates: &'static [&'static str],
    get_proc_symbol: Option<&'static str>,
}

#[cfg(target_os = "windows")]
const PROFILE: PlatformProfile = PlatformProfile {
    library_candidates: &["opengl32.dll"],
    get_proc_symbol: Some("wglGetProcAddress"),
};

#[cfg(target_os = "macos")]
const PROFILE: PlatformProfile = PlatformProfile {
    library_candidates: &[
        "/System/Library/Frameworks/OpenGL.framework/Versions/Current/OpenGL",
        "/System/Library/Frameworks/OpenGL.framework/OpenGL",
    ],
    get_proc_symbol: None,
};

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const PROFILE: PlatformProfile = PlatformProfile {
    library_candidates: &["libGL.so.1", "libGL.so"],
    get_proc_symbol: Some("glXGetProcAddressARB"),
};

/// The opened driver library plus its optional extension-address query.
pub struct DriverLibrary {
    library: Library,
    get_proc_addr: Option<GetProcAddrFn>,
}

impl DriverLibrary {
    fn open(override_path: Option<&Path>) -> Option<Self> {
        let candidates = override_path
            .iter()
            .map(|path| path.as_os_str().to_os_string())
            .chain(PROFILE.library_candidates.iter().map(|&name| name.into()));

        for candidate in candidates {
            // SAFETY: loading the GL client library runs no constructors
            // beyond the driver's own, which every GL application runs.
            match unsafe { Library::new(&candidate) } {
                Ok(library) => {
                    log::info!("Opened OpenGL driver library {:?}", candidate);
                    let get_proc_addr = PROFILE.get_proc_symbol.and_then(|symbol| {
                        // SAFETY: the signature is fixed by the platform's
                        // GL binding API.
                        unsafe { library.get::<GetProcAddrFn>(symbol.as_bytes()) }
                            .ok()
                            .map(|sym| *sym)
                    });
                    return Some(Self {
                        library,
                        get_proc_addr,
                    });
                }
                Err(err) => log::debug!("Driver candidate {:?} not loadable: {}", candidate, err),
            }
        }

        log::warn!("No OpenGL driver library could be opened");
        None
    }

    /// Resolve an exact symbol name, OS loader first, then the driver's own
    /// extension-address query.
    pub fn resolve_symbol(&self, symbol: &str) -> Option<FnAddr> {
        // SAFETY: the address is only stored; callers transmute to the
        // matching signature before calling it.
        let direct = unsafe { self.library.get::<unsafe extern "C" fn()>(symbol.as_bytes()) };
        if let Ok(sym) = direct {
            let func: unsafe extern "C" fn() = *sym;
            return FnAddr::from_ptr(func as *const c_void);
        }

        let get_proc_addr = self.get_proc_addr?;
        let name = CString::new(symbol).ok()?;
        // SAFETY: get_proc_addr came from the opened driver library and
        // takes a NUL-terminated name.
        FnAddr::from_ptr(unsafe { get_proc_addr(name.as_ptr()) })
    }
}

static DRIVER_LIBRARY: Once<Option<DriverLibrary>> = Once::new();

/// The cached process-wide driver library, opened on first use.
///
/// The override path is honored only by whichever call opens the library
/// first; the handle is deliberately never released.
fn driver_library(override_path: Option<&Path>) -> Option<&'static DriverLibrary> {
    DRIVER_LIBRARY
        .call_once(|| DriverLibrary::open(override_path))
        .as_ref()
}

/// Resolves logical entry-point names through the process driver library.
#[derive(Debug, Clone)]
pub struct SymbolLoader {
    convention: NamingConvention,
    library_override: Option<PathBuf>,
}

impl SymbolLoader {
    pub fn new(config: &LoaderConfig) -> Self {
        Self {
            convention: config.convention,
            library_override: config.library_override.clone(),
        }
    }

    /// Resolve a logical name, or `None` when the driver does not export it.
    ///
    /// Never fails fatally; the returned address must be null-checked by way
    /// of the `Option` before use.
    pub fn resolve(&self, logical_name: &str) -> Option<FnAddr> {
        let library = driver_library(self.library_override.as_deref())?;
        let symbol = self.convention.rewrite(logical_name);
        library.resolve_symbol(&symbol)
    }
}

/// The real driver behind the [`GlDriver`] seam.
pub struct NativeDriver {
    loader: SymbolLoader,
    get_string: GlGetStringFn,
}

impl NativeDriver {
    /// Open the driver library and bootstrap-resolve `glGetString`, the one
    /// entry point needed before any capability flags exist.
    pub fn open(config: &LoaderConfig) -> Result<Self, InitError> {
        let loader = SymbolLoader::new(config);
        let addr = loader.resolve("glGetString").ok_or(InitError::NoDriver)?;
        // SAFETY: the symbol was resolved from the GL client library and has
        // the documented glGetString signature.
        let get_string = unsafe { std::mem::transmute::<*const c_void, GlGetStringFn>(addr.as_ptr()) };
        Ok(Self { loader, get_string })
    }
}

impl GlDriver for NativeDriver {
    fn query_string(&self, name: StringName) -> Option<&[u8]> {
        // SAFETY: requires a current GL context on this thread, which is the
        // caller's documented precondition for initialization.
        let ptr = unsafe { (self.get_string)(name as u32) };
        if ptr.is_null() {
            return None;
        }
        // SAFETY: the driver returns a NUL-terminated string it owns; the
        // bytes are borrowed in place, never copied or mutated.
        Some(unsafe { CStr::from_ptr(ptr as *const c_char) }.to_bytes())
    }

    fn resolve(&self, logical_name: &str) -> Option<FnAddr> {
        self.loader.resolve(logical_name)
    }
}
