use pdf_writer::{Name, Pdf, Ref};

/// PDF resource names for the two base fonts every page carries.
pub(crate) const REGULAR_PDF_NAME: &[u8] = b"F1";
pub(crate) const BOLD_PDF_NAME: &[u8] = b"F2";

/// Register Helvetica and Helvetica-Bold as built-in Type1 fonts with
/// WinAnsi encoding. No font files are read or embedded; the report renderer
/// only ever draws with these two faces.
pub(crate) fn register_base_fonts(
    pdf: &mut Pdf,
    alloc: &mut impl FnMut() -> Ref,
) -> (Ref, Ref) {
    let regular_ref = alloc();
    pdf.type1_font(regular_ref)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let bold_ref = alloc();
    pdf.type1_font(bold_ref)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    (regular_ref, bold_ref)
}

/// Convert a UTF-8 string to WinAnsi (Windows-1252) bytes for PDF Str
/// encoding. Unmappable characters are dropped.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .filter_map(|c| match c as u32 {
            0x0000..=0x007F => Some(c as u8),
            0x00A0..=0x00FF => Some(c as u8), // Latin-1 supplement maps directly
            0x20AC => Some(0x80),
            0x201A => Some(0x82),
            0x0192 => Some(0x83),
            0x201E => Some(0x84),
            0x2026 => Some(0x85),
            0x2039 => Some(0x8B),
            0x2018 => Some(0x91),
            0x2019 => Some(0x92),
            0x201C => Some(0x93),
            0x201D => Some(0x94),
            0x2022 => Some(0x95), // bullet
            0x2013 => Some(0x96),
            0x2014 => Some(0x97),
            0x203A => Some(0x9B),
            _ => None,
        })
        .collect()
}

/// Approximate Helvetica advance width for one WinAnsi byte, in 1000
/// units/em. Close enough for centering the footer lines; body text is drawn
/// left-aligned and never measured.
fn glyph_width_1000(byte: u8, bold: bool) -> f32 {
    let w = match byte {
        32 => 278.0,                          // space
        33..=47 => 333.0,                     // punctuation
        48..=57 => 556.0,                     // digits
        58..=64 => 333.0,                     // more punctuation
        73 | 74 => 278.0,                     // I J (narrow uppercase)
        77 => 833.0,                          // M (wide)
        65..=90 => 667.0,                     // uppercase A-Z (average)
        91..=96 => 333.0,                     // brackets etc.
        102 | 105 | 106 | 108 | 116 => 278.0, // narrow lowercase: f i j l t
        109 | 119 => 833.0,                   // m w (wide)
        97..=122 => 556.0,                    // lowercase a-z (average)
        _ => 556.0,
    };
    if bold { w * 1.08 } else { w }
}

/// Measured width of `text` at `font_size` points.
pub(crate) fn text_width(text: &str, font_size: f32, bold: bool) -> f32 {
    to_winansi_bytes(text)
        .iter()
        .map(|&b| glyph_width_1000(b, bold) * font_size / 1000.0)
        .sum()
}
