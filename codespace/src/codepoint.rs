use core::str::FromStr;

use crate::error::CodepointError;

pub use encoding::*;

mod encoding;
mod html;

/// последний кодпоинт Unicode
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// кодпоинт Unicode, универсальный ключ всех запросов
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codepoint(u32);

impl From<u32> for Codepoint
{
    #[inline(always)]
    fn from(code: u32) -> Self
    {
        Self(code)
    }
}

impl From<char> for Codepoint
{
    #[inline(always)]
    fn from(c: char) -> Self
    {
        Self(c as u32)
    }
}

impl From<Codepoint> for u32
{
    #[inline(always)]
    fn from(value: Codepoint) -> Self
    {
        value.0
    }
}

impl core::fmt::Debug for Codepoint
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "U+{:04X}", self.0)
    }
}

impl core::fmt::Display for Codepoint
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "U+{:04X}", self.0)
    }
}

impl Codepoint
{
    #[inline(always)]
    pub const fn new(code: u32) -> Self
    {
        Self(code)
    }

    #[inline(always)]
    pub fn code(&self) -> u32
    {
        self.0
    }

    /// кодпоинт в пределах пространства Unicode
    #[inline]
    pub fn is_valid(&self) -> bool
    {
        self.0 <= MAX_CODEPOINT
    }

    /// номер плоскости (0 ..= 16 для допустимых кодпоинтов)
    #[inline]
    pub fn plane_number(&self) -> u32
    {
        self.0 >> 16
    }

    /// U+D800 ..= U+DFFF
    #[inline]
    pub fn is_surrogate(&self) -> bool
    {
        matches!(self.0, 0xD800 ..= 0xDFFF)
    }

    /// управляющие символы C0 и C1 (включая DEL)
    #[inline]
    pub fn is_control(&self) -> bool
    {
        matches!(self.0, 0 ..= 0x1F | 0x7F ..= 0x9F)
    }

    /// FDD0 ..= FDEF и два последних кодпоинта каждой плоскости
    #[inline]
    pub fn is_noncharacter(&self) -> bool
    {
        self.is_valid() && (matches!(self.0, 0xFDD0 ..= 0xFDEF) || self.0 & 0xFFFE == 0xFFFE)
    }

    #[inline]
    pub fn to_char(&self) -> Option<char>
    {
        char::from_u32(self.0)
    }

    /// отображаемый символ: для управляющих C0 и DEL используются символы из блока Control Pictures,
    /// для суррогатов - пустая строка
    pub fn glyph(&self) -> String
    {
        let code = match self.0 {
            0x7F => 0x2421,
            0 ..= 0x1F => 0x2400 + self.0,
            _ => self.0,
        };

        char::from_u32(code).map(String::from).unwrap_or_default()
    }
}

impl FromStr for Codepoint
{
    type Err = CodepointError;

    /// допустимые форматы: U+XXXX (4 - 6 цифр), 0xXX (2 - 6 цифр), XX (2 - 6 цифр)
    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        let value = s.trim();

        let (digits, min_len, prefixed_u) = match value.get(.. 2) {
            Some("U+") | Some("u+") => (&value[2 ..], 4, true),
            Some("0x") | Some("0X") => (&value[2 ..], 2, false),
            _ => (value, 2, false),
        };

        let invalid = invalid_hex_digits(digits);

        if !invalid.is_empty() {
            return Err(CodepointError::InvalidHexDigits {
                value: value.to_owned(),
                invalid,
            });
        }

        if digits.is_empty() {
            return Err(CodepointError::Unrecognized(value.to_owned()));
        }

        if digits.len() < min_len {
            return Err(match prefixed_u {
                true => CodepointError::NeedsLeadingZeros(value.to_owned()),
                false => CodepointError::Unrecognized(value.to_owned()),
            });
        }

        if digits.len() > 6 {
            return Err(CodepointError::OutOfRange(value.to_owned()));
        }

        let code = u32::from_str_radix(digits, 16)
            .map_err(|_| CodepointError::Unrecognized(value.to_owned()))?;

        match code <= MAX_CODEPOINT {
            true => Ok(Self(code)),
            false => Err(CodepointError::OutOfRange(value.to_owned())),
        }
    }
}

/// символы строки, не являющиеся шестнадцатеричными цифрами, без повторов
fn invalid_hex_digits(digits: &str) -> Vec<String>
{
    let mut invalid: Vec<String> = vec![];

    for c in digits.chars().filter(|c| !c.is_ascii_hexdigit()) {
        let c = c.to_string();

        if !invalid.contains(&c) {
            invalid.push(c);
        }
    }

    invalid
}

/// кодпоинты, записанные в строке в виде U+XXXX (например, "U+5F8C<kMatthews U+540E<kMatthews")
pub fn find_prefixed_codepoints(source: &str) -> Vec<Codepoint>
{
    let mut result = vec![];
    let mut rest = source;

    while let Some(position) = rest.find("U+") {
        rest = &rest[position + 2 ..];

        let digits: &str = match rest.find(|c: char| !c.is_ascii_hexdigit()) {
            Some(end) => &rest[.. end],
            None => rest,
        };

        if (4 ..= 6).contains(&digits.len()) {
            if let Ok(code) = u32::from_str_radix(digits, 16) {
                result.push(Codepoint(code));
            }
        }
    }

    result
}
