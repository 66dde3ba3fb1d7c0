//! Point queries over the driver strings
//!
//! Answers "is capability X supported?" without walking the capability
//! table. A query session borrows the advertisement string once and parses
//! the driver version once, then each name is decomposed into its namespace,
//! category and specific segments and checked hierarchically: version names
//! against the parsed version, extension names against the advertisement
//! string with the same token semantics as the matcher.

use gl_registry::CATEGORIES;

use crate::loader::{GlDriver, StringName};
use crate::matcher;
use crate::GlVersion;

/// One query session against a driver's version and advertisement strings.
pub struct SupportQuery<'a> {
    version: GlVersion,
    advertised: &'a [u8],
}

impl<'a> SupportQuery<'a> {
    pub fn new(version: GlVersion, advertised: &'a [u8]) -> Self {
        Self {
            version,
            advertised,
        }
    }

    /// Build a session from live driver strings.
    ///
    /// `None` when the driver has no parseable version string; a missing
    /// advertisement string reads as empty.
    pub fn from_driver<D: GlDriver>(driver: &'a D) -> Option<Self> {
        let version = GlVersion::parse(driver.query_string(StringName::Version)?)?;
        let advertised = driver
            .query_string(StringName::Extensions)
            .unwrap_or_default();
        Some(Self {
            version,
            advertised,
        })
    }

    /// Whether every space-separated capability name in `names` is
    /// supported. An empty query is unsupported.
    pub fn is_supported(&self, names: &str) -> bool {
        let mut checked_any = false;
        for name in names.split(' ').filter(|name| !name.is_empty()) {
            checked_any = true;
            if !self.check_one(name) {
                return false;
            }
        }
        checked_any
    }

    fn check_one(&self, name: &str) -> bool {
        let Some(qualified) = name.strip_prefix("GL_") else {
            return false;
        };
        let Some((category, specific)) = qualified.split_once('_') else {
            return false;
        };
        if specific.is_empty() {
            return false;
        }
        if category == "VERSION" {
            return self.core_version_supported(specific);
        }
        // Names in categories the registry does not know are unsupported
        // even when a driver advertises them.
        CATEGORIES.contains(&category) && matcher::contains(self.advertised, name)
    }

    fn core_version_supported(&self, specific: &str) -> bool {
        let Some((major, minor)) = specific.split_once('_') else {
            return false;
        };
        let (Ok(major), Ok(minor)) = (major.parse(), minor.parse()) else {
            return false;
        };
        self.version.at_least(major, minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> SupportQuery<'static> {
        SupportQuery::new(
            GlVersion { major: 3, minor: 2 },
            b"GL_ARB_sync GL_KHR_debug GL_EXT_texture_sRGB",
        )
    }

    #[test]
    fn test_version_names_answer_from_parsed_version() {
        let query = session();
        assert!(query.is_supported("GL_VERSION_1_1"));
        assert!(query.is_supported("GL_VERSION_3_2"));
        assert!(!query.is_supported("GL_VERSION_3_3"));
        assert!(!query.is_supported("GL_VERSION_4_6"));
    }

    #[test]
    fn test_extension_names_answer_from_advertisement() {
        let query = session();
        assert!(query.is_supported("GL_ARB_sync"));
        assert!(query.is_supported("GL_KHR_debug"));
        assert!(!query.is_supported("GL_ARB_timer_query"));
    }

    #[test]
    fn test_multi_name_queries_require_all() {
        let query = session();
        assert!(query.is_supported("GL_ARB_sync GL_KHR_debug"));
        assert!(query.is_supported("GL_ARB_sync GL_VERSION_3_0"));
        assert!(!query.is_supported("GL_ARB_sync GL_ARB_timer_query"));
        assert!(!query.is_supported(""));
        assert!(!query.is_supported("   "));
    }

    #[test]
    fn test_malformed_and_foreign_names_unsupported() {
        let query = SupportQuery::new(
            GlVersion { major: 3, minor: 2 },
            b"GLX_ARB_create_context GL_FOO_bar GL_ARB_",
        );
        assert!(!query.is_supported("GLX_ARB_create_context"));
        assert!(!query.is_supported("GL_FOO_bar"));
        assert!(!query.is_supported("GL_ARB_"));
        assert!(!query.is_supported("GL_VERSION_x_y"));
        assert!(!query.is_supported("GLARB"));
    }
}
