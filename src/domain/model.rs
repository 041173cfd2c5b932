use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Generated Heavy context header and the constructor derived from it.
///
/// HVCC names the context header after the patch (`Heavy_<name>.h`) and the
/// constructor `hv_<name>_new`. When no header is found the stock names for a
/// patch called "heavy" are assumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeavyBinding {
    pub header: String,
    pub new_fn: String,
}

impl Default for HeavyBinding {
    fn default() -> Self {
        Self {
            header: "Heavy_heavy.h".to_string(),
            new_fn: "hv_heavy_new".to_string(),
        }
    }
}

impl HeavyBinding {
    /// Derive the binding from a header file name, if it matches the
    /// `Heavy_<name>.h` convention.
    pub fn from_header_name(name: &str) -> Option<Self> {
        let base = name.strip_prefix("Heavy_")?.strip_suffix(".h")?;
        if base.is_empty() {
            return None;
        }
        Some(Self {
            header: name.to_string(),
            new_fn: format!("hv_{}_new", base),
        })
    }
}

/// I2S GPIO assignment for the rendered wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinAssignment {
    pub ws: u8,
    pub bclk: u8,
    pub dout: u8,
}

impl Default for PinAssignment {
    fn default() -> Self {
        // ESP32 -> DAC wiring used by the reference board
        Self {
            ws: 26,
            bclk: 27,
            dout: 25,
        }
    }
}

/// Summary of a generator run.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratorReport {
    pub stage: String,
    pub compile_time: f64,
    pub in_dir: PathBuf,
    pub out_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_derived_from_matching_header() {
        let binding = HeavyBinding::from_header_name("Heavy_myPatch.h").unwrap();
        assert_eq!(binding.header, "Heavy_myPatch.h");
        assert_eq!(binding.new_fn, "hv_myPatch_new");
    }

    #[test]
    fn binding_rejects_non_matching_names() {
        assert!(HeavyBinding::from_header_name("HvMessage.h").is_none());
        assert!(HeavyBinding::from_header_name("Heavy_foo.c").is_none());
        assert!(HeavyBinding::from_header_name("Heavy_.h").is_none());
    }

    #[test]
    fn binding_defaults_match_stock_patch_name() {
        let binding = HeavyBinding::default();
        assert_eq!(binding.header, "Heavy_heavy.h");
        assert_eq!(binding.new_fn, "hv_heavy_new");
    }
}
