use escp_types::Dots;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarcodeType {
    UpcA,
    UpcE,
    Ean13,
    Ean8,
    Code39,
    Itf,
    Codabar,
    Code128,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Default)]
pub enum HriPosition {
    #[default]
    None,
    Above,
    Below,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Default)]
pub enum HriFont {
    #[default]
    A,
    B,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Barcode {
    pub data: String,
    pub kind: BarcodeType,
    pub module_width: Dots,
    pub height: Dots,
    pub hri_position: HriPosition,
    pub hri_font: HriFont,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Default)]
pub enum Dithering {
    #[default]
    None,
    Threshold,
    Ordered,
    FloydSteinberg,
}
