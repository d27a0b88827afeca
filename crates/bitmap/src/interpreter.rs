use escp_printer_state::PrinterState;
use escp_style::{Cpi, Quality, Typeface};
use escp_types::{Dots, Paper};

use crate::font;
use crate::page::VirtualPage;

const ESC: u8 = 0x1B;
const GS: u8 = 0x1D;

/// The engine's native dot grid, independent of whatever DPI the virtual
/// page rasterizes at.
const NATIVE_DPI: f64 = 360.0;

/// Replays a raw ESC/P2 byte stream against an independent printer-state
/// tracker and rasterizes the visible result. This exists purely as a
/// test oracle: it never shares code with the command-encoding crate, so
/// a bug that exists in both the encoder and this interpreter is the only
/// kind that would slip past a byte-stream/bitmap comparison.
pub struct Interpreter {
    state: PrinterState,
    pages: Vec<VirtualPage>,
    current: VirtualPage,
    single_line_double_width: bool,
    barcode_module_width: u8,
    barcode_height: u8,
    horizontal_dpi: f64,
    vertical_dpi: f64,
    scale: f64,
}

impl Interpreter {
    pub fn new(paper: Paper) -> Self {
        Self::with_dpi(paper, NATIVE_DPI as u32, NATIVE_DPI as u32, 1.0)
    }

    /// Rasterizes at a different resolution than the engine's native 360
    /// DPI dot grid (e.g. a lower-DPI preview). `scale` is an additional
    /// multiplier applied after the DPI conversion.
    pub fn with_dpi(paper: Paper, horizontal_dpi: u32, vertical_dpi: u32, scale: f32) -> Self {
        let horizontal_dpi = horizontal_dpi as f64;
        let vertical_dpi = vertical_dpi as f64;
        let scale = scale as f64;
        let width = Self::scale_dim(paper.width, horizontal_dpi, scale);
        let height = Self::scale_dim(paper.height, vertical_dpi, scale);
        Self {
            state: PrinterState::new(paper),
            pages: Vec::new(),
            current: VirtualPage::blank(width, height),
            single_line_double_width: false,
            barcode_module_width: 2,
            barcode_height: 60,
            horizontal_dpi,
            vertical_dpi,
            scale,
        }
    }

    fn scale_dim(dots: Dots, dpi: f64, scale: f64) -> Dots {
        ((dots as f64 * dpi / NATIVE_DPI) * scale).round() as Dots
    }

    fn px_x(&self, dots: Dots) -> Dots {
        Self::scale_dim(dots, self.horizontal_dpi, self.scale)
    }

    fn px_y(&self, dots: Dots) -> Dots {
        Self::scale_dim(dots, self.vertical_dpi, self.scale)
    }

    pub fn run(mut self, bytes: &[u8]) -> Vec<VirtualPage> {
        self.execute(bytes);
        self.pages.push(self.current.clone());
        self.pages
    }

    /// Like `run`, but also returns the interpreter's final printer state —
    /// used to assert that the render crate's own `PrinterState` ends up in
    /// the same cursor position as this independent reimplementation.
    pub fn run_to_completion(mut self, bytes: &[u8]) -> (Vec<VirtualPage>, PrinterState) {
        self.execute(bytes);
        self.pages.push(self.current.clone());
        (self.pages, self.state)
    }

    fn execute(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            i += 1;
            match b {
                ESC => i = self.handle_escape(bytes, i),
                GS => i = self.handle_gs(bytes, i),
                0x0F => self.state.style.condensed = true,
                0x12 => self.state.style.condensed = false,
                0x0E => self.single_line_double_width = true,
                0x0D => {
                    self.state.carriage_return();
                    self.single_line_double_width = false;
                }
                0x0A => {
                    self.state.line_feed();
                    self.roll_page_if_needed();
                }
                0x0C => self.eject_page(),
                0x09 => self.state.horizontal_tab(),
                0x20..=0x7E => self.draw_glyph(b),
                b if font::is_box_drawing(b) => self.draw_glyph(b),
                other => log::debug!("unhandled control byte 0x{other:02X}"),
            }
        }
    }

    fn handle_escape(&mut self, bytes: &[u8], mut i: usize) -> usize {
        let Some(&op) = bytes.get(i) else {
            log::warn!("truncated ESC sequence at end of stream");
            return i;
        };
        i += 1;
        match op {
            b'@' => self.state.reset(),
            b'E' => self.state.style.bold = true,
            b'F' => self.state.style.bold = false,
            b'4' => self.state.style.italic = true,
            b'5' => self.state.style.italic = false,
            b'G' => self.state.style.double_strike = true,
            b'H' => self.state.style.double_strike = false,
            b'-' => i = self.read_u8(bytes, i, |s, n| s.state.style.underline = n != 0),
            b'W' => i = self.read_u8(bytes, i, |s, n| s.state.style.double_width = n != 0),
            b'w' => i = self.read_u8(bytes, i, |s, n| s.state.style.double_height = n != 0),
            b'P' => self.state.style.cpi = Cpi::Ten,
            b'M' => self.state.style.cpi = Cpi::Twelve,
            b'g' => self.state.style.cpi = Cpi::Fifteen,
            b'p' => i = self.read_u8(bytes, i, |_, _| {}),
            b'k' => {
                i = self.read_u8(bytes, i, |s, n| {
                    s.state.style.typeface = match n {
                        1 => Typeface::SansSerif,
                        2 => Typeface::Courier,
                        _ => Typeface::Roman,
                    };
                })
            }
            b'x' => {
                i = self.read_u8(bytes, i, |s, n| {
                    s.state.style.quality = if n == 0 { Quality::Draft } else { Quality::Lq };
                })
            }
            b'$' => {
                if let (Some(&lo), Some(&hi)) = (bytes.get(i), bytes.get(i + 1)) {
                    let units = u16::from_le_bytes([lo, hi]);
                    let dots: Dots = units as Dots * 6;
                    let margin_x = self.state.paper.printable_area().x;
                    self.state.move_to(margin_x + dots, self.state.cursor.y);
                    i += 2;
                } else {
                    log::warn!("truncated ESC $ sequence");
                }
            }
            b'J' => i = self.read_u8(bytes, i, |s, n| s.state.move_by(0, n as Dots * 2)),
            b'2' => self.state.line_spacing = 60,
            b'0' => self.state.line_spacing = 45,
            b'3' => i = self.read_u8(bytes, i, |s, n| s.state.line_spacing = n as Dots * 2),
            b'+' => i = self.read_u8(bytes, i, |s, n| s.state.line_spacing = n as Dots),
            b'*' => i = self.handle_bit_image(bytes, i),
            b'R' => i = self.read_u8(bytes, i, |s, n| s.state.international_charset = n),
            b'(' => i = self.handle_esc_paren(bytes, i),
            other => log::warn!("unknown ESC op 0x{other:02X}, stopping interpretation"),
        }
        i
    }

    fn handle_esc_paren(&mut self, bytes: &[u8], mut i: usize) -> usize {
        if bytes.get(i) != Some(&b'U') {
            log::warn!("unsupported ESC ( sequence");
            return i;
        }
        i += 1;
        // ESC ( U, 01 00, n: two length bytes (always 1, 0) then the unit value.
        if let (Some(_), Some(_), Some(&n)) = (bytes.get(i), bytes.get(i + 1), bytes.get(i + 2)) {
            self.state.units = n;
            i + 3
        } else {
            log::warn!("truncated ESC ( U sequence");
            i
        }
    }

    fn handle_gs(&mut self, bytes: &[u8], mut i: usize) -> usize {
        let Some(&op) = bytes.get(i) else {
            log::warn!("truncated GS sequence");
            return i;
        };
        i += 1;
        match op {
            b'w' => i = self.read_u8(bytes, i, |s, n| s.barcode_module_width = n.max(1)),
            b'h' => i = self.read_u8(bytes, i, |s, n| s.barcode_height = n.max(1)),
            b'H' | b'f' => i = self.read_u8(bytes, i, |_, _| {}),
            b'k' => i = self.handle_barcode(bytes, i),
            other => log::warn!("unknown GS op 0x{other:02X}, stopping interpretation"),
        }
        i
    }

    fn handle_barcode(&mut self, bytes: &[u8], i: usize) -> usize {
        let Some(&kind) = bytes.get(i) else {
            log::warn!("truncated barcode command");
            return i;
        };
        let mut i = i + 1;
        let data_len = if kind == 73 {
            let Some(&len) = bytes.get(i) else {
                log::warn!("truncated barcode length byte");
                return i;
            };
            i += 1;
            i += len as usize;
            len as usize
        } else {
            let start = i;
            while bytes.get(i).map(|&b| b != 0x00).unwrap_or(false) {
                i += 1;
            }
            let len = i - start;
            i += 1; // consume trailing NUL
            len
        };
        let width = self.barcode_module_width as Dots * data_len as Dots;
        self.current.fill_rect(
            self.px_x(self.state.cursor.x),
            self.px_y(self.state.cursor.y),
            self.px_x(width),
            self.px_y(self.barcode_height as Dots),
            255,
        );
        self.state.advance_x(width);
        i
    }

    fn handle_bit_image(&mut self, bytes: &[u8], i: usize) -> usize {
        let Some(&mode) = bytes.get(i) else {
            log::warn!("truncated bit image command");
            return i;
        };
        let (Some(&lo), Some(&hi)) = (bytes.get(i + 1), bytes.get(i + 2)) else {
            log::warn!("truncated bit image width");
            return i + 1;
        };
        let width = u16::from_le_bytes([lo, hi]) as usize;
        let vertical_dots: usize = if matches!(mode, 32 | 33) { 24 } else { 8 };
        let bytes_per_col = vertical_dots.div_ceil(8);
        let data_start = i + 3;
        let data_end = data_start + width * bytes_per_col;
        let Some(data) = bytes.get(data_start..data_end) else {
            log::warn!("bit image data runs past end of stream");
            return bytes.len();
        };

        for col in 0..width {
            for row in 0..vertical_dots {
                let byte = data[col * bytes_per_col + row / 8];
                let bit = byte & (0x80 >> (row % 8)) != 0;
                if bit {
                    let x = self.px_x(self.state.cursor.x + col as Dots);
                    let y = self.px_y(self.state.cursor.y + row as Dots);
                    self.current.set(x, y, 255);
                }
            }
        }
        self.state.advance_x(width as Dots);
        data_end
    }

    fn draw_glyph(&mut self, byte: u8) {
        let double_width = self.state.style.double_width || self.single_line_double_width;
        let mut cell_width = self.state.hmi();
        if double_width {
            cell_width *= 2;
        }
        let mut cell_height = 60;
        if self.state.style.double_height {
            cell_height *= 2;
        }

        if byte != b' ' {
            if font::is_box_drawing(byte) {
                let bitmap = font::box_drawing_bitmap(byte);
                self.draw_bitmap_glyph(&bitmap, cell_width, cell_height);
            } else {
                self.current.fill_rect(
                    self.px_x(self.state.cursor.x),
                    self.px_y(self.state.cursor.y),
                    self.px_x(cell_width).max(1),
                    self.px_y(cell_height).max(1),
                    255,
                );
            }
            if self.state.style.underline {
                self.draw_underline(cell_width, cell_height);
            }
        }
        self.state.advance_x(cell_width);
    }

    /// Draws a box-drawing glyph's 8x16 bitmap scaled to fill the
    /// character cell. Bold is a second copy offset by one pixel in X —
    /// the same mechanism a real dot-matrix bitmap font uses instead of a
    /// distinct bold typeface.
    fn draw_bitmap_glyph(&mut self, bitmap: &[u8; font::GLYPH_HEIGHT], cell_width: Dots, cell_height: Dots) {
        let x0 = self.state.cursor.x;
        let y0 = self.state.cursor.y;
        let col_width = (cell_width / font::GLYPH_WIDTH as Dots).max(1);
        let row_height = (cell_height / font::GLYPH_HEIGHT as Dots).max(1);
        let bold = self.state.style.bold;
        for (row, &bits) in bitmap.iter().enumerate() {
            for col in 0..font::GLYPH_WIDTH {
                if bits & (0x80 >> col) == 0 {
                    continue;
                }
                let x = x0 + col as Dots * col_width;
                let y = y0 + row as Dots * row_height;
                self.current
                    .fill_rect(self.px_x(x), self.px_y(y), self.px_x(col_width).max(1), self.px_y(row_height).max(1), 255);
                if bold {
                    self.current.fill_rect(
                        self.px_x(x + 1),
                        self.px_y(y),
                        self.px_x(col_width).max(1),
                        self.px_y(row_height).max(1),
                        255,
                    );
                }
            }
        }
    }

    /// A horizontal run on row 14 of the 8x16 cell, the font row spec.md
    /// §4.9 designates for underlining.
    fn draw_underline(&mut self, cell_width: Dots, cell_height: Dots) {
        let row_height = (cell_height / font::GLYPH_HEIGHT as Dots).max(1);
        let y = self.state.cursor.y + 14 * row_height;
        self.current
            .fill_rect(self.px_x(self.state.cursor.x), self.px_y(y), self.px_x(cell_width).max(1), self.px_y(row_height).max(1), 255);
    }

    fn roll_page_if_needed(&mut self) {
        if self.state.check_page_break() {
            self.eject_page();
        }
    }

    fn eject_page(&mut self) {
        let paper = self.state.paper;
        let width = self.px_x(paper.width);
        let height = self.px_y(paper.height);
        let finished = std::mem::replace(&mut self.current, VirtualPage::blank(width, height));
        self.pages.push(finished);
        self.state.form_feed();
    }

    fn read_u8(&mut self, bytes: &[u8], i: usize, f: impl FnOnce(&mut Self, u8)) -> usize {
        match bytes.get(i) {
            Some(&n) => {
                f(self, n);
                i + 1
            }
            None => {
                log::warn!("truncated single-byte parameter sequence");
                i
            }
        }
    }
}

pub fn render(bytes: &[u8], paper: Paper) -> Vec<VirtualPage> {
    Interpreter::new(paper).run(bytes)
}
