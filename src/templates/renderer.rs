use crate::domain::model::{HeavyBinding, PinAssignment};
use crate::templates::embedded;
use crate::utils::error::Result;
use handlebars::{no_escape, Handlebars};
use serde::Serialize;

const ROOT_CMAKELISTS: &str = "root_cmakelists";
const MAIN_CMAKELISTS: &str = "main_cmakelists";
const I2S_WRAPPER: &str = "i2s_wrapper";

#[derive(Debug, Serialize)]
struct RootCmakeParams<'a> {
    project_name: &'a str,
}

#[derive(Debug, Serialize)]
struct WrapperParams<'a> {
    heavy_header: &'a str,
    hv_new_fn: &'a str,
    ws_pin: u8,
    bclk_pin: u8,
    dout_pin: u8,
    sample_rate: u32,
}

/// Renders the embedded project templates.
///
/// Strict mode, so a template referencing an unknown variable is a hard error
/// rather than an empty substitution. HTML escaping is disabled: the outputs
/// are C and CMake sources.
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(no_escape);
        registry.register_template_string(ROOT_CMAKELISTS, embedded::ROOT_CMAKELISTS)?;
        registry.register_template_string(MAIN_CMAKELISTS, embedded::MAIN_CMAKELISTS)?;
        registry.register_template_string(I2S_WRAPPER, embedded::I2S_WRAPPER)?;
        Ok(Self { registry })
    }

    pub fn render_root_cmakelists(&self, project_name: &str) -> Result<String> {
        let rendered = self
            .registry
            .render(ROOT_CMAKELISTS, &RootCmakeParams { project_name })?;
        Ok(rendered)
    }

    pub fn render_main_cmakelists(&self) -> Result<String> {
        let rendered = self.registry.render(MAIN_CMAKELISTS, &serde_json::json!({}))?;
        Ok(rendered)
    }

    pub fn render_i2s_wrapper(
        &self,
        binding: &HeavyBinding,
        pins: PinAssignment,
        sample_rate: u32,
    ) -> Result<String> {
        let rendered = self.registry.render(
            I2S_WRAPPER,
            &WrapperParams {
                heavy_header: &binding.header,
                hv_new_fn: &binding.new_fn,
                ws_pin: pins.ws,
                bclk_pin: pins.bclk,
                dout_pin: pins.dout,
                sample_rate,
            },
        )?;
        Ok(rendered)
    }
}
