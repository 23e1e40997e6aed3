use super::html::named_entity;
use super::Codepoint;

/// маска, исключающая 2 старших бита в 2, 3, 4 байтах последовательности UTF-8
const CONT_MASK: u8 = 0x3F;
/// маркер байта продолжения последовательности UTF-8
const CONT_TAG: u8 = 0x80;

/// символы, которые не кодируются в URI
const URI_SAFE: &[u8] = b"_.-~/";

/// кодпоинт можно закодировать в UTF-8/16/32 (суррогаты не кодируются)
#[inline]
fn encodable(codepoint: Codepoint) -> bool
{
    codepoint.is_valid() && !codepoint.is_surrogate()
}

/// байт продолжения последовательности UTF-8 из младших 6 бит
#[inline(always)]
fn utf8_cont_byte(code: u32) -> u8
{
    CONT_TAG | (code as u8 & CONT_MASK)
}

/// байты последовательности UTF-8
pub fn utf8_bytes(codepoint: Codepoint) -> Vec<u8>
{
    if !encodable(codepoint) {
        return vec![];
    }

    let code = codepoint.code();

    match code {
        0 ..= 0x7F => vec![code as u8],
        0x80 ..= 0x7FF => vec![0xC0 | (code >> 6) as u8, utf8_cont_byte(code)],
        0x800 ..= 0xFFFF => vec![
            0xE0 | (code >> 12) as u8,
            utf8_cont_byte(code >> 6),
            utf8_cont_byte(code),
        ],
        _ => vec![
            0xF0 | (code >> 18) as u8,
            utf8_cont_byte(code >> 12),
            utf8_cont_byte(code >> 6),
            utf8_cont_byte(code),
        ],
    }
}

/// кодовые единицы UTF-16 (big-endian)
pub fn utf16_units(codepoint: Codepoint) -> Vec<u16>
{
    if !encodable(codepoint) {
        return vec![];
    }

    let code = codepoint.code();

    match code < 0x10000 {
        true => vec![code as u16],
        false => {
            let code = code - 0x10000;

            vec![0xD800 | (code >> 10) as u16, 0xDC00 | (code & 0x3FF) as u16]
        }
    }
}

/// "0xE2 0x82 0xAC"
pub fn utf8_value(codepoint: Codepoint) -> String
{
    utf8_hex_bytes(codepoint)
        .iter()
        .map(|b| format!("0x{}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// ["E2", "82", "AC"]
pub fn utf8_hex_bytes(codepoint: Codepoint) -> Vec<String>
{
    utf8_bytes(codepoint)
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect()
}

/// [226, 130, 172]
pub fn utf8_dec_bytes(codepoint: Codepoint) -> Vec<i64>
{
    utf8_bytes(codepoint).into_iter().map(i64::from).collect()
}

/// "0xD83D 0xDE00"
pub fn utf16_value(codepoint: Codepoint) -> String
{
    utf16_hex_bytes(codepoint)
        .iter()
        .map(|u| format!("0x{}", u))
        .collect::<Vec<_>>()
        .join(" ")
}

/// ["D83D", "DE00"]
pub fn utf16_hex_bytes(codepoint: Codepoint) -> Vec<String>
{
    utf16_units(codepoint)
        .iter()
        .map(|u| format!("{:04X}", u))
        .collect()
}

/// [55357, 56832]
pub fn utf16_dec_bytes(codepoint: Codepoint) -> Vec<i64>
{
    utf16_units(codepoint).into_iter().map(i64::from).collect()
}

/// "0x0001F600"
pub fn utf32_value(codepoint: Codepoint) -> String
{
    match encodable(codepoint) {
        true => format!("0x{:08X}", codepoint.code()),
        false => String::new(),
    }
}

/// ["0001F600"]
pub fn utf32_hex_bytes(codepoint: Codepoint) -> Vec<String>
{
    match encodable(codepoint) {
        true => vec![format!("{:08X}", codepoint.code())],
        false => vec![],
    }
}

/// [128512]
pub fn utf32_dec_bytes(codepoint: Codepoint) -> Vec<i64>
{
    match encodable(codepoint) {
        true => vec![i64::from(codepoint.code())],
        false => vec![],
    }
}

/// процентное кодирование байтов UTF-8, латиница, цифры и "_.-~/" не кодируются
pub fn uri_encoded(codepoint: Codepoint) -> String
{
    let mut result = String::new();

    for byte in utf8_bytes(codepoint) {
        match byte.is_ascii_alphanumeric() || URI_SAFE.contains(&byte) {
            true => result.push(byte as char),
            false => result.push_str(&format!("%{:02X}", byte)),
        }
    }

    result
}

/// числовые ссылки HTML и, если есть, именованная сущность
pub fn html_entities(codepoint: Codepoint) -> Vec<String>
{
    let code = codepoint.code();
    let mut entities = vec![format!("&#{};", code), format!("&#x{:02X};", code)];

    if let Some(name) = named_entity(code) {
        entities.push(format!("&{}", name));
    }

    entities
}
