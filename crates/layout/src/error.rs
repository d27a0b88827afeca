use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("node has height {0} dots, which exceeds the page content height of {1} dots")]
    ElementTooLarge(escp_types::Dots, escp_types::Dots),
    #[error("a Fill dimension was used inside an unbounded container")]
    UnboundedFill,
    #[error("layout error: {0}")]
    Generic(String),
}
