//! Compile-time embedded template sources.

/// Root `CMakeLists.txt` of the generated project.
pub const ROOT_CMAKELISTS: &str = include_str!("../../templates/root_CMakeLists.txt.tmpl");

/// `main/CMakeLists.txt` registering the wrapper and the copied HVCC sources.
pub const MAIN_CMAKELISTS: &str = include_str!("../../templates/main_CMakeLists.txt.tmpl");

/// I2S wrapper `main/hvcc_i2s_main.c` driving the generated Heavy context.
pub const I2S_WRAPPER: &str = include_str!("../../templates/hvcc_i2s_main.c.tmpl");
