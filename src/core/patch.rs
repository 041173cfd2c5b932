//! Portability patches for the generated C sources.
//!
//! The xtensa toolchain is strict about printf format specifiers for the
//! fixed-width types HVCC emits, so two generated files get a small textual
//! rewrite after copying. Both rewrites are idempotent.

use crate::utils::error::Result;
use std::fs;
use std::path::Path;

const MESSAGE_SOURCE: &str = "HvMessage.c";
const UTILS_HEADER: &str = "HvUtils.h";

const HEX_FORMAT_OLD: &str = "\"0x%X\"";
const HEX_FORMAT_NEW: &str = "\"0x%\" PRIX32";

const STDINT_INCLUDE: &str = "#include <stdint.h>";
const INTTYPES_INCLUDE: &str = "#include <inttypes.h>";

/// Replace the 32-bit hex format fragment with its `<inttypes.h>` macro form.
pub fn widen_hex_format(source: &str) -> String {
    source.replace(HEX_FORMAT_OLD, HEX_FORMAT_NEW)
}

/// Make `<inttypes.h>` available next to `<stdint.h>`. No-op when the include
/// is already present, or when there is no stdint include to anchor on.
pub fn ensure_inttypes_include(source: &str) -> String {
    if source.contains(INTTYPES_INCLUDE) || !source.contains(STDINT_INCLUDE) {
        return source.to_string();
    }
    source.replace(
        STDINT_INCLUDE,
        &format!("{}\n{}", STDINT_INCLUDE, INTTYPES_INCLUDE),
    )
}

/// Apply both patches in-place to the copied sources under `c_dir`. Files
/// that are absent are skipped.
pub fn apply_portability_patches(c_dir: &Path) -> Result<()> {
    let message_path = c_dir.join(MESSAGE_SOURCE);
    if message_path.exists() {
        let source = fs::read_to_string(&message_path)?;
        let patched = widen_hex_format(&source);
        if patched != source {
            tracing::debug!("Patched hex format specifier in {}", MESSAGE_SOURCE);
            fs::write(&message_path, patched)?;
        }
    }

    let utils_path = c_dir.join(UTILS_HEADER);
    if utils_path.exists() {
        let source = fs::read_to_string(&utils_path)?;
        let patched = ensure_inttypes_include(&source);
        if patched != source {
            tracing::debug!("Injected inttypes include into {}", UTILS_HEADER);
            fs::write(&utils_path, patched)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_format_is_widened() {
        let source = "hv_snprintf(buf, 32, \"0x%X\", value);";
        let patched = widen_hex_format(source);
        assert_eq!(patched, "hv_snprintf(buf, 32, \"0x%\" PRIX32, value);");
    }

    #[test]
    fn hex_format_patch_is_idempotent() {
        let source = "hv_snprintf(buf, 32, \"0x%X\", value);";
        let once = widen_hex_format(source);
        let twice = widen_hex_format(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn hex_format_patch_leaves_other_sources_alone() {
        let source = "printf(\"%d\", x);";
        assert_eq!(widen_hex_format(source), source);
    }

    #[test]
    fn inttypes_include_is_injected_after_stdint() {
        let source = "#include <stdlib.h>\n#include <stdint.h>\n";
        let patched = ensure_inttypes_include(source);
        assert_eq!(
            patched,
            "#include <stdlib.h>\n#include <stdint.h>\n#include <inttypes.h>\n"
        );
    }

    #[test]
    fn inttypes_include_patch_is_idempotent() {
        let source = "#include <stdint.h>\n";
        let once = ensure_inttypes_include(source);
        let twice = ensure_inttypes_include(&once);
        assert_eq!(once, twice);
        assert_eq!(once.matches("#include <inttypes.h>").count(), 1);
    }

    #[test]
    fn inttypes_include_needs_stdint_anchor() {
        let source = "#include <stdlib.h>\n";
        assert_eq!(ensure_inttypes_include(source), source);
    }

    #[test]
    fn apply_skips_absent_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(apply_portability_patches(dir.path()).is_ok());
    }

    #[test]
    fn apply_patches_files_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("HvMessage.c"),
            "hv_snprintf(buf, 32, \"0x%X\", value);",
        )
        .unwrap();
        std::fs::write(dir.path().join("HvUtils.h"), "#include <stdint.h>\n").unwrap();

        apply_portability_patches(dir.path()).unwrap();
        apply_portability_patches(dir.path()).unwrap(); // second pass must not change anything

        let message = std::fs::read_to_string(dir.path().join("HvMessage.c")).unwrap();
        assert_eq!(message, "hv_snprintf(buf, 32, \"0x%\" PRIX32, value);");

        let utils = std::fs::read_to_string(dir.path().join("HvUtils.h")).unwrap();
        assert_eq!(utils, "#include <stdint.h>\n#include <inttypes.h>\n");
    }
}
