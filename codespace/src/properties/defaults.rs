use core::ops::RangeInclusive;

use crate::codepoint::Codepoint;
use crate::codespace::Codespace;
use crate::interval::RangeSet;

/// значения по умолчанию, не зависящие от кодпоинта
const CONSTANT_DEFAULTS: &[(&str, &str)] = &[
    ("Bidi_Paired_Bracket_Type", "None"),
    ("Canonical_Combining_Class", "Not_Reordered"),
    ("Decomposition_Type", "None"),
    ("Hangul_Syllable_Type", "Not_Applicable"),
    ("Joining_Type", "Non_Joining"),
    ("Line_Break", "Unknown"),
    ("Numeric_Type", "None"),
    ("Script", "Unknown"),
];

/// Bidi_Class = European_Terminator
const DEFAULT_BIDI_ET: RangeInclusive<u32> = 0x20A0 ..= 0x20CF;

/// плоскости, в которых Vertical_Orientation по умолчанию - Upright
const DEFAULT_VO_UPRIGHT_PLANES: &[i32] = &[2, 3, 15, 16];

/// Extended_Pictographic для кодпоинтов без сохраненного значения
const DEFAULT_EXTENDED_PICTOGRAPHIC: [RangeInclusive<u32>; 2] = [0x1F000 ..= 0x1FAFF, 0x1FC00 ..= 0x1FFFD];

/// блоки, в которых Vertical_Orientation по умолчанию - Upright
pub const DEFAULT_VO_UPRIGHT_BLOCK_NAMES: &[&str] = &[
    "Unified Canadian Aboriginal Syllabics Extended",
    "Number Forms",
    "Control Pictures",
    "Miscellaneous Symbols and Arrows",
    "CJK Radicals Supplement",
    "Kangxi Radicals",
    "Ideographic Description Characters",
    "CJK Symbols and Punctuation",
    "Hiragana",
    "Katakana",
    "Bopomofo",
    "Hangul Compatibility Jamo",
    "Kanbun",
    "Bopomofo Extended",
    "CJK Strokes",
    "Katakana Phonetic Extensions",
    "Enclosed CJK Letters and Months",
    "CJK Compatibility",
    "CJK Unified Ideographs Extension A",
    "Yijing Hexagram Symbols",
    "CJK Unified Ideographs",
    "Yi Syllables",
    "Yi Radicals",
    "Hangul Jamo Extended-A",
    "Meetei Mayek",
    "Hangul Syllables",
    "Hangul Jamo Extended-B",
    "Private Use Area",
    "CJK Compatibility Ideographs",
    "Vertical Forms",
    "Small Form Variants",
    "Specials",
    "Siddham",
    "Zanabazar Square",
    "Soyombo",
    "Egyptian Hieroglyphs",
    "Egyptian Hieroglyph Format Controls",
    "Anatolian Hieroglyphs",
    "Ideographic Symbols and Punctuation",
    "Tangut",
    "Tangut Components",
    "Khitan Small Script",
    "Tangut Supplement",
    "Kana Extended-B",
    "Kana Extended-A",
    "Small Kana Extension",
    "Nushu",
    "Znamenny Musical Notation",
    "Byzantine Musical Symbols",
    "Musical Symbols",
    "Mayan Numerals",
    "Tai Xuan Jing Symbols",
    "Counting Rod Numerals",
    "Sutton SignWriting",
    "Mahjong Tiles",
    "Domino Tiles",
    "Playing Cards",
    "Enclosed Alphanumeric Supplement",
    "Enclosed Ideographic Supplement",
    "Transport and Map Symbols",
    "Alchemical Symbols",
    "Supplemental Symbols and Pictographs",
    "Chess Symbols",
    "Symbols and Pictographs Extended-A",
];

lazy_static! {
    /// Bidi_Class = Right_To_Left
    static ref DEFAULT_BIDI_R: RangeSet = RangeSet::new([
        0x0590 ..= 0x05FF,
        0x07C0 ..= 0x085F,
        0xFB1D ..= 0xFB4F,
        0x10800 ..= 0x10CFF,
        0x10D40 ..= 0x10EBF,
        0x10F00 ..= 0x10F2F,
        0x10F70 ..= 0x10FFF,
        0x1E800 ..= 0x1EC6F,
        0x1ECC0 ..= 0x1ECFF,
        0x1ED50 ..= 0x1EDFF,
        0x1EF00 ..= 0x1EFFF,
    ]);

    /// Bidi_Class = Arabic_Letter
    static ref DEFAULT_BIDI_AL: RangeSet = RangeSet::new([
        0x0600 ..= 0x07BF,
        0x0860 ..= 0x08FF,
        0xFB50 ..= 0xFDCF,
        0xFDF0 ..= 0xFDFF,
        0xFE70 ..= 0xFEFF,
        0x10D00 ..= 0x10D3F,
        0x10EC0 ..= 0x10EFF,
        0x10F30 ..= 0x10F6F,
        0x1EC70 ..= 0x1ECBF,
        0x1ED00 ..= 0x1ED4F,
        0x1EE00 ..= 0x1EEFF,
    ]);
}

/// название значения по умолчанию для кодпоинта, у которого нет сохраненного значения свойства
pub fn default_value_name(codespace: &Codespace, group: &str, codepoint: Codepoint) -> Option<&'static str>
{
    if let Some(&(_, name)) = CONSTANT_DEFAULTS.iter().find(|(g, _)| *g == group) {
        return Some(name);
    }

    let name = match group {
        "Age" => default_age(codespace, codepoint),
        "Bidi_Class" => default_bidi_class(codepoint),
        "East_Asian_Width" => default_east_asian_width(codespace, codepoint),
        "General_Category" => default_general_category(codespace, codepoint),
        "Vertical_Orientation" => default_vertical_orientation(codespace, codepoint),
        _ => return None,
    };

    Some(name)
}

fn default_age(codespace: &Codespace, codepoint: Codepoint) -> &'static str
{
    let block = codespace.block_containing(codepoint);

    if block.is_null() {
        return "NA";
    }

    // блок без плоскости в данных считается блоком вне BMP
    match codespace.plane_containing(block.id).abbreviation == "BMP" {
        true => "V1_1",
        false => "V2_0",
    }
}

fn default_bidi_class(codepoint: Codepoint) -> &'static str
{
    let code = codepoint.code();

    if DEFAULT_BIDI_R.contains(code) {
        return "Right_To_Left";
    }

    if DEFAULT_BIDI_AL.contains(code) {
        return "Arabic_Letter";
    }

    match DEFAULT_BIDI_ET.contains(&code) {
        true => "European_Terminator",
        false => "Left_To_Right",
    }
}

fn default_east_asian_width(codespace: &Codespace, codepoint: Codepoint) -> &'static str
{
    let classifier = codespace.classifier();

    if classifier.is_private_use(codepoint.code()) {
        return "Ambiguous";
    }

    let block_id = codespace.block_containing(codepoint).id;

    match classifier.is_cjk_unified_block(block_id) || classifier.is_cjk_compatibility_block(block_id) {
        true => "Wide",
        false => "Neutral",
    }
}

fn default_general_category(codespace: &Codespace, codepoint: Codepoint) -> &'static str
{
    let classifier = codespace.classifier();

    if classifier.is_surrogate(codepoint.code()) {
        return "Surrogate";
    }

    match classifier.is_private_use(codepoint.code()) {
        true => "Private_Use",
        false => "Unassigned",
    }
}

fn default_vertical_orientation(codespace: &Codespace, codepoint: Codepoint) -> &'static str
{
    let block = codespace.block_containing(codepoint);
    let plane = codespace.plane_containing(block.id);

    let upright = (!plane.is_null() && DEFAULT_VO_UPRIGHT_PLANES.contains(&plane.number))
        || codespace.is_vertical_upright_block(block.id);

    match upright {
        true => "Upright",
        false => "Rotated",
    }
}

/// Extended_Pictographic, если значение не сохранено
pub fn default_extended_pictographic(codepoint: Codepoint) -> bool
{
    DEFAULT_EXTENDED_PICTOGRAPHIC
        .iter()
        .any(|range| range.contains(&codepoint.code()))
}
