//! Shared helpers for inspecting rendered PDF bytes without a PDF parser.

/// Page count as written to the page-tree `/Count` entry.
pub fn page_count(pdf: &[u8]) -> Option<usize> {
    let needle = b"/Count ";
    let pos = pdf
        .windows(needle.len())
        .position(|w| w == needle)?;
    let digits: Vec<u8> = pdf[pos + needle.len()..]
        .iter()
        .copied()
        .take_while(|b| b.is_ascii_digit())
        .collect();
    String::from_utf8(digits).ok()?.parse().ok()
}

/// Inflate every FlateDecode stream and return the concatenated content, so
/// tests can look for `(literal string)` draw operations. `<hex>` strings —
/// which pdf-writer emits whenever a string holds a non-ASCII byte — are
/// appended in decoded form so their text is searchable too.
pub fn content_streams(pdf: &[u8]) -> String {
    let open = b"stream\n";
    let close = b"\nendstream";
    let mut out = String::new();
    let mut at = 0;
    while let Some(start) = find(&pdf[at..], open).map(|p| at + p + open.len()) {
        let Some(end) = find(&pdf[start..], close).map(|p| start + p) else {
            break;
        };
        if let Ok(raw) = miniz_oxide::inflate::decompress_to_vec_zlib(&pdf[start..end]) {
            out.push_str(&String::from_utf8_lossy(&raw));
            out.push_str(&decoded_hex_strings(&raw));
        }
        at = end + close.len();
    }
    out
}

/// Lossy decode of every `<hex>` string in a content stream, concatenated.
fn decoded_hex_strings(raw: &[u8]) -> String {
    let mut out = String::new();
    let mut rest = raw;
    while let Some(open) = rest.iter().position(|&b| b == b'<') {
        rest = &rest[open + 1..];
        let Some(close) = rest.iter().position(|&b| b == b'>') else {
            break;
        };
        let hex = &rest[..close];
        if hex.iter().all(|b| b.is_ascii_hexdigit()) {
            let bytes: Vec<u8> = hex
                .chunks(2)
                .filter_map(|pair| {
                    let s = std::str::from_utf8(pair).ok()?;
                    u8::from_str_radix(s, 16).ok()
                })
                .collect();
            out.push_str(&String::from_utf8_lossy(&bytes));
        }
        rest = &rest[close + 1..];
    }
    out
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
