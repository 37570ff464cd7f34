use encoding_rs::{UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const UTF16LE_BOM: &[u8] = b"\xFF\xFE";
const UTF16BE_BOM: &[u8] = b"\xFE\xFF";

/// Text encodings tried, in order, for delimited input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16,
    Utf8Sig,
    Latin1,
    Windows1252,
}

pub const CANDIDATE_ENCODINGS: [TextEncoding; 5] = [
    TextEncoding::Utf8,
    TextEncoding::Utf16,
    TextEncoding::Utf8Sig,
    TextEncoding::Latin1,
    TextEncoding::Windows1252,
];

impl TextEncoding {
    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf16 => "utf-16",
            TextEncoding::Utf8Sig => "utf-8-sig",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Windows1252 => "cp1252",
        }
    }

    /// Strict decode; malformed input is an error, never replaced. A leading
    /// byte-order mark is dropped from the result.
    pub fn decode(self, bytes: &[u8]) -> Result<String, &'static str> {
        let text = match self {
            TextEncoding::Utf8 => UTF_8
                .decode_without_bom_handling_and_without_replacement(bytes)
                .ok_or("invalid utf-8 byte sequence")?
                .into_owned(),
            TextEncoding::Utf16 => {
                let (encoding, body) = if let Some(body) = bytes.strip_prefix(UTF16LE_BOM) {
                    (UTF_16LE, body)
                } else if let Some(body) = bytes.strip_prefix(UTF16BE_BOM) {
                    (UTF_16BE, body)
                } else {
                    return Err("missing utf-16 byte-order mark");
                };
                encoding
                    .decode_without_bom_handling_and_without_replacement(body)
                    .ok_or("invalid utf-16 byte sequence")?
                    .into_owned()
            }
            TextEncoding::Utf8Sig => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                UTF_8
                    .decode_without_bom_handling_and_without_replacement(body)
                    .ok_or("invalid utf-8 byte sequence")?
                    .into_owned()
            }
            TextEncoding::Latin1 => encoding_rs::mem::decode_latin1(bytes).into_owned(),
            TextEncoding::Windows1252 => WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(bytes)
                .ok_or("invalid cp1252 byte sequence")?
                .into_owned(),
        };

        match text.strip_prefix('\u{feff}') {
            Some(rest) => Ok(rest.to_string()),
            None => Ok(text),
        }
    }
}
