use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("barcode data must not be empty")]
    EmptyBarcodeData,
    #[error("barcode data length {0} exceeds the 255-byte frame limit")]
    BarcodeDataTooLong(usize),
    #[error("bit image data length {0} does not fill {1} vertical dots")]
    BitImageDataMismatch(usize, u16),
}
