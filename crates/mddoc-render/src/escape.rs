//! Escaping for documentation markup element content and URL attributes.

use crate::emitter::DocWriter;

const HEX: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// ASCII characters that pass through URL escaping unchanged.
#[rustfmt::skip]
const URL_SAFE: [bool; 128] = [
    false, false, false, false, false, false, false, false, false, false, false, false, false, false, false, false,
    false, false, false, false, false, false, false, false, false, false, false, false, false, false, false, false,
    false, true,  false, true,  true,  true,  false, false, true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  false, true,  false, true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  false, false, false, false, true,
    false, true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  true,
    true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  true,  false, false, false, false, false,
];

/// Escape element content: `&`, `<`, `>` and `"` become named entities.
///
/// Runs of clean characters go through the writer's variable path because
/// they may contain newlines; the entities themselves are constant.
pub fn escape_markup(text: &str, writer: &mut DocWriter) {
    let bytes = text.as_bytes();
    let mut last_pos = 0;
    for (pos, &byte) in bytes.iter().enumerate() {
        let entity = match byte {
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'&' => "&amp;",
            b'"' => "&quot;",
            _ => continue,
        };
        writer.write(&text[last_pos..pos]);
        writer.write_constant(entity);
        last_pos = pos + 1;
    }
    writer.write(&text[last_pos..]);
}

/// Escape a URL for use in a reference attribute.
///
/// `&` becomes its entity; any other ASCII character outside [`URL_SAFE`]
/// becomes a percent-encoded pair; non-ASCII characters are emitted as the
/// percent-encoded bytes of their UTF-8 sequence. Since `\r` and `\n` are
/// not URL-safe, every run can use the writer's constant path.
pub fn escape_url(text: &str, writer: &mut DocWriter) {
    let bytes = text.as_bytes();
    let mut last_pos = 0;
    let mut pos = 0;
    while pos < bytes.len() {
        let byte = bytes[pos];
        if byte == b'&' {
            writer.write_constant(&text[last_pos..pos]);
            writer.write_constant("&amp;");
            pos += 1;
            last_pos = pos;
        } else if byte < 128 {
            if URL_SAFE[usize::from(byte)] {
                pos += 1;
            } else {
                writer.write_constant(&text[last_pos..pos]);
                write_percent(byte, writer);
                pos += 1;
                last_pos = pos;
            }
        } else {
            // Encode the whole UTF-8 sequence so `pos` stays on a character
            // boundary for the next run slice.
            writer.write_constant(&text[last_pos..pos]);
            for &sequence_byte in &bytes[pos..pos + utf8_len(byte)] {
                write_percent(sequence_byte, writer);
            }
            pos += utf8_len(byte);
            last_pos = pos;
        }
    }
    writer.write_constant(&text[last_pos..]);
}

fn write_percent(byte: u8, writer: &mut DocWriter) {
    writer.write_char('%');
    writer.write_char(HEX[usize::from(byte >> 4)]);
    writer.write_char(HEX[usize::from(byte & 0x0f)]);
}

/// Sequence length implied by a UTF-8 leading byte. The input slice comes
/// from a `&str`, so the byte is a valid leading byte.
fn utf8_len(leading: u8) -> usize {
    if leading >= 0xf0 {
        4
    } else if leading >= 0xe0 {
        3
    } else {
        2
    }
}
