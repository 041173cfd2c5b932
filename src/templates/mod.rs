//! Project-skeleton templates.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`]
//! in the [`embedded`] module, then rendered at runtime with Handlebars via
//! the [`renderer::TemplateRenderer`].
//!
//! Template files under `templates/` and the constants in [`embedded`] must
//! stay in sync; the `include_str!` paths are checked at compile-time.

pub mod embedded;
pub mod renderer;
