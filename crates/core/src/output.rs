use escp_bitmap::VirtualPage;

/// The two artifacts a render pass produces: the raw ESC/P2 byte stream
/// meant for the printer, and a per-page virtual bitmap for on-screen
/// preview (rendered by a second, independent interpreter of those same
/// bytes, so a mismatch between the two is itself a bug signal).
#[derive(Debug, Clone)]
pub struct EscpOutput {
    pub bytes: Vec<u8>,
    pub pages: Vec<VirtualPage>,
}
