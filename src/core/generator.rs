use crate::config::toml_config::ProjectConfig;
use crate::core::patch::apply_portability_patches;
use crate::domain::model::{GeneratorReport, HeavyBinding};
use crate::templates::renderer::TemplateRenderer;
use crate::utils::error::{GenError, Result};
use std::fs;
use std::path::Path;
use std::time::Instant;

const STAGE: &str = "espidf";
const DEFAULT_PROJECT_NAME: &str = "hvcc_esp32_audio";

/// Turns a directory of HVCC-generated C sources into an ESP-IDF project
/// skeleton: copied sources under `main/hvcc/c/`, rendered CMake files and
/// the I2S wrapper, plus the portability patches.
pub struct EspIdfGenerator {
    config: ProjectConfig,
    renderer: TemplateRenderer,
}

impl EspIdfGenerator {
    pub fn new(config: ProjectConfig) -> Result<Self> {
        Ok(Self {
            config,
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Generate the project under `out_dir` from the C sources in
    /// `c_src_dir`. `patch_name` (when given) names the project.
    pub fn compile(
        &self,
        c_src_dir: &Path,
        out_dir: &Path,
        patch_name: Option<&str>,
    ) -> Result<GeneratorReport> {
        let started = Instant::now();

        // Fail before any output path is created.
        if !c_src_dir.is_dir() {
            return Err(GenError::MissingSourceDir {
                path: c_src_dir.to_path_buf(),
            });
        }

        let project_name = self.project_name(patch_name);
        tracing::info!("Generating ESP-IDF project '{}'", project_name);

        let main_dir = out_dir.join("main");
        let hvcc_c_dir = main_dir.join("hvcc").join("c");
        fs::create_dir_all(&hvcc_c_dir)?;

        let copied = copy_regular_files(c_src_dir, &hvcc_c_dir)?;
        tracing::debug!("Copied {} generated source files", copied);

        let binding = detect_heavy_binding(&hvcc_c_dir)?;
        tracing::debug!(
            "Using context header '{}' with constructor '{}'",
            binding.header,
            binding.new_fn
        );

        fs::write(
            out_dir.join("CMakeLists.txt"),
            self.renderer.render_root_cmakelists(&project_name)?,
        )?;
        fs::write(
            main_dir.join("CMakeLists.txt"),
            self.renderer.render_main_cmakelists()?,
        )?;
        fs::write(
            main_dir.join("hvcc_i2s_main.c"),
            self.renderer.render_i2s_wrapper(
                &binding,
                self.config.audio.pins,
                self.config.audio.sample_rate,
            )?,
        )?;

        apply_portability_patches(&hvcc_c_dir)?;

        Ok(GeneratorReport {
            stage: STAGE.to_string(),
            compile_time: started.elapsed().as_secs_f64(),
            in_dir: c_src_dir.to_path_buf(),
            out_dir: out_dir.to_path_buf(),
        })
    }

    fn project_name(&self, patch_name: Option<&str>) -> String {
        self.config
            .project
            .name
            .as_deref()
            .or(patch_name)
            .unwrap_or(DEFAULT_PROJECT_NAME)
            .replace(' ', "_")
    }
}

/// Copy every regular file (non-recursive) from `src` into `dst`. Returns the
/// number of files copied.
fn copy_regular_files(src: &Path, dst: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() {
            fs::copy(&path, dst.join(entry.file_name()))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Find the generated `Heavy_<name>.h` header among the copied sources.
/// Entries are scanned in sorted order so the result is deterministic; when
/// no header matches, the stock binding is assumed.
fn detect_heavy_binding(c_dir: &Path) -> Result<HeavyBinding> {
    let mut names: Vec<String> = fs::read_dir(c_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    Ok(names
        .iter()
        .find_map(|name| HeavyBinding::from_header_name(name))
        .unwrap_or_default())
}
