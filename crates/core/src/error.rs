use thiserror::Error;

/// The top-level error for the whole pipeline: data binding, measurement,
/// pagination, and byte emission each report through their own crate-local
/// enum, unified here so a caller only has one type to match on.
#[derive(Error, Debug)]
pub enum EscpError {
    #[error("paper configuration error: {0}")]
    Paper(#[from] escp_types::PaperConfigError),
    #[error("template resolution error: {0}")]
    Template(#[from] escp_traits::TemplateError),
    #[error("layout error: {0}")]
    Layout(#[from] escp_layout::LayoutError),
    #[error("render error: {0}")]
    Render(#[from] escp_render::RenderError),
}
