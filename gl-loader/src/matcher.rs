//! Membership tests over the driver's extension string
//!
//! The extension string is driver-owned memory, possibly read-only, so the
//! scan borrows the bytes in place. No allocation, no mutation, no cursor
//! state carried between calls.

/// Whether `needle` occurs as an exact space-delimited token in `haystack`.
///
/// Single left-to-right pass. Token length is compared before token bytes,
/// and the scan stops at the first match. An empty haystack or needle never
/// matches.
pub fn contains(haystack: &[u8], needle: &str) -> bool {
    let needle = needle.as_bytes();
    if haystack.is_empty() || needle.is_empty() {
        return false;
    }

    let mut rest = haystack;
    loop {
        let end = rest
            .iter()
            .position(|&byte| byte == b' ')
            .unwrap_or(rest.len());
        let token = &rest[..end];
        if token.len() == needle.len() && token == needle {
            return true;
        }
        if end == rest.len() {
            return false;
        }
        rest = &rest[end + 1..];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Obvious split-and-compare reference for cross-checking.
    fn reference(haystack: &str, needle: &str) -> bool {
        !needle.is_empty() && haystack.split(' ').any(|token| token == needle)
    }

    #[test]
    fn test_matches_each_position() {
        let haystack = b"GL_ARB_sync GL_KHR_debug GL_EXT_blend_minmax";
        assert!(contains(haystack, "GL_ARB_sync"));
        assert!(contains(haystack, "GL_KHR_debug"));
        assert!(contains(haystack, "GL_EXT_blend_minmax"));
    }

    #[test]
    fn test_rejects_substrings_and_superstrings() {
        let haystack = b"GL_ARB_shadow_ambient GL_ARB_texture_storage";
        assert!(!contains(haystack, "GL_ARB_shadow"));
        assert!(!contains(haystack, "GL_ARB_texture"));
        assert!(!contains(haystack, "GL_ARB_texture_storage_multisample"));
        assert!(contains(haystack, "GL_ARB_shadow_ambient"));
    }

    #[test]
    fn test_empty_inputs_never_match() {
        assert!(!contains(b"", "GL_ARB_sync"));
        assert!(!contains(b"GL_ARB_sync", ""));
        assert!(!contains(b"", ""));
    }

    #[test]
    fn test_tolerates_repeated_spaces() {
        let haystack = b"GL_ARB_sync  GL_KHR_debug";
        assert!(contains(haystack, "GL_ARB_sync"));
        assert!(contains(haystack, "GL_KHR_debug"));
    }

    #[test]
    fn test_agrees_with_reference() {
        let haystacks = [
            "",
            "GL_ARB_sync",
            "GL_ARB_sync GL_KHR_debug",
            "GL_ARB_sync_extra GL_ARB_sync",
            " GL_ARB_sync ",
            "NAME_A NAME_C NAME_B",
        ];
        let needles = ["GL_ARB_sync", "GL_KHR_debug", "NAME_B", "NAME", "GL_ARB_sync_extra"];
        for haystack in haystacks {
            for needle in needles {
                assert_eq!(
                    contains(haystack.as_bytes(), needle),
                    reference(haystack, needle),
                    "diverged on ({haystack:?}, {needle:?})"
                );
            }
        }
    }
}
