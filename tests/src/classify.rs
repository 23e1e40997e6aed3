use unicode_codespace::{CharacterType, Codepoint};

use crate::data::CODESPACE;

fn cp(code: u32) -> Codepoint
{
    Codepoint::new(code)
}

/// класс каждого вида кодпоинтов
#[test]
fn character_types()
{
    for (code, expected) in [
        (0x0041, CharacterType::NonUnihan),
        (0x4E00, CharacterType::Unihan),
        (0xF900, CharacterType::Unihan),
        (0x17000, CharacterType::Tangut),
        (0x18801, CharacterType::Tangut),
        (0xFDD0, CharacterType::Noncharacter),
        (0x1FFFF, CharacterType::Noncharacter),
        (0xD800, CharacterType::Surrogate),
        (0xE000, CharacterType::PrivateUse),
        (0xF0000, CharacterType::PrivateUse),
        (0x0378, CharacterType::Reserved),
        (0x9FFE, CharacterType::Reserved),
        (0x110000, CharacterType::Invalid),
    ] {
        assert_eq!(CODESPACE.classify(cp(code)), expected, "U+{:04X}", code);
    }
}

/// названия символов, в том числе сгенерированные
#[test]
fn character_names()
{
    for (code, expected) in [
        (0x0041, "LATIN CAPITAL LETTER A"),
        (0x4E00, "CJK UNIFIED IDEOGRAPH-4E00"),
        (0x20000, "CJK UNIFIED IDEOGRAPH-20000"),
        (0xF900, "CJK COMPATIBILITY IDEOGRAPH-F900"),
        (0x17000, "TANGUT IDEOGRAPH-17000"),
        (0x18800, "TANGUT COMPONENT-001"),
        (0x18801, "TANGUT COMPONENT-002"),
        (0xE000, "<private-use-E000>"),
        (0xD800, "<surrogate-D800>"),
        (0xFFFF, "<noncharacter-FFFF>"),
        (0x0378, "<reserved-0378>"),
        (0x110000, "Invalid Codepoint (U+110000)"),
    ] {
        assert_eq!(CODESPACE.character_name(cp(code)), expected, "U+{:04X}", code);
    }
}

#[test]
fn blocks_and_planes()
{
    let block = CODESPACE.block_containing(cp(0x10300));
    assert_eq!(block.long_name, "Old Italic");
    assert_eq!(CODESPACE.plane_containing(block.id).abbreviation, "SMP");

    let missing = CODESPACE.block_containing(cp(0x0378));
    assert!(missing.is_null(), "U+0378 не входит ни в один блок");
    assert!(CODESPACE.plane_containing(missing.id).is_null());

    assert_eq!(CODESPACE.block_by_id(15).map(|b| b.short_name.as_str()), Some("CJK_Ext_B"));
    assert_eq!(CODESPACE.block_by_id(17), None);
}

#[test]
fn loose_block_names()
{
    let id = |name: &str| CODESPACE.loose_match_block_name(name).map(|b| b.id);

    assert_eq!(id("Latin-1 Supplement"), Some(2));
    assert_eq!(id("latin_1_sup"), Some(2));
    assert_eq!(id("LATIN 1 SUPPLEMENT"), Some(2));
    assert_eq!(id("cjk"), Some(5));
    assert_eq!(id("Tangut Components"), Some(13));
    assert_eq!(id("Klingon"), None);
}

#[test]
fn planes_by_number()
{
    assert_eq!(CODESPACE.plane_by_number(0).abbreviation, "BMP");
    assert_eq!(CODESPACE.plane_by_number(15).start_block_id, 16);

    let unassigned = CODESPACE.plane_by_number(5);
    assert_eq!((unassigned.name.as_str(), unassigned.start), ("Unassigned Plane", 0x50000));

    assert!(CODESPACE.plane_by_number(3).is_null(), "плоскости 3 нет в тестовых данных");
    assert!(CODESPACE.plane_by_number(17).is_null());
    assert!(CODESPACE.plane_by_number(-1).is_null());

    assert_eq!(CODESPACE.plane_by_abbreviation("SIP").map(|p| p.number), Some(2));
}

#[test]
fn mapped_codepoints()
{
    assert_eq!(CODESPACE.mapped_codepoint(cp(0x0041)), "A (U+0041 LATIN CAPITAL LETTER A)");
    assert_eq!(CODESPACE.mapped_codepoint(cp(0)), "");

    assert_eq!(CODESPACE.mapped_codepoint_from_hex("0061"), "a (U+0061 LATIN SMALL LETTER A)");
    assert_eq!(CODESPACE.mapped_codepoint_from_hex("U+20AC"), "€ (U+20AC EURO SIGN)");
    assert_eq!(CODESPACE.mapped_codepoint_from_hex("0x4E00"), "一 (U+4E00 CJK UNIFIED IDEOGRAPH-4E00)");
    assert_eq!(CODESPACE.mapped_codepoint_from_hex(""), "");
    assert_eq!(
        CODESPACE.mapped_codepoint_from_hex("XYZ"),
        "Invalid Codepoint (XYZ is not a valid hex value)"
    );
    assert_eq!(
        CODESPACE.mapped_codepoint_from_hex("110000"),
        "Invalid Codepoint (1114112 is not within the Unicode codespace)"
    );
}

/// значения по умолчанию для кодпоинтов без сохраненных свойств
#[test]
fn default_values()
{
    let display = |group: &str, code: u32| CODESPACE.display_name_for_property_value(group, None, cp(code));

    assert_eq!(display("Age", 0x06FF), "1.1");
    assert_eq!(display("Age", 0x1FA60), "2.0");
    assert_eq!(display("Age", 0x0378), "NA");

    assert_eq!(display("Bidi_Class", 0x06FF), "Arabic_Letter (AL)");
    assert_eq!(display("Bidi_Class", 0x20C5), "European_Terminator (ET)");
    assert_eq!(display("Bidi_Class", 0x0378), "Left_To_Right (L)");

    assert_eq!(display("General_Category", 0xD800), "Surrogate (Cs)");
    assert_eq!(display("General_Category", 0xE000), "Private_Use (Co)");
    assert_eq!(display("General_Category", 0x0378), "Unassigned (Cn)");

    assert_eq!(display("East_Asian_Width", 0x9FFE), "Wide (W)");
    assert_eq!(display("East_Asian_Width", 0xE000), "Ambiguous (A)");
    assert_eq!(display("East_Asian_Width", 0x0378), "Neutral (N)");

    assert_eq!(display("Vertical_Orientation", 0x1FA60), "Upright (U)");
    assert_eq!(display("Vertical_Orientation", 0x20001), "Upright (U)");
    assert_eq!(display("Vertical_Orientation", 0x0378), "Rotated (R)");

    assert_eq!(display("Line_Break", 0x0378), "Unknown (XX)");
    assert_eq!(display("Script", 0x0378), "Unknown (Zzzz)");
}

#[test]
fn stored_values()
{
    let display = |group: &str, id: u32| CODESPACE.display_name_for_property_value(group, Some(id), cp(0x41));

    assert_eq!(display("General_Category", 1), "Uppercase_Letter (Lu)");
    assert_eq!(display("Age", 7), "12.0");
    assert_eq!(display("General_Category", 100), "", "неизвестный идентификатор");
    assert_eq!(display("Indic_Conjunct_Break", 1), "", "группы нет в справочных данных");
}

#[test]
fn character_flags()
{
    let flags = CODESPACE.character_flags();

    assert_eq!(flags.len(), 15);
    assert_eq!(flags.first().map(String::as_str), Some("alphabetic"));
    assert!(flags.windows(2).all(|w| w[0] < w[1]), "флаги отсортированы");
    assert!(flags.iter().any(|f| f == "extended_pictographic"));
}

#[test]
fn all_characters()
{
    let plane = CODESPACE.all_characters_plane();
    assert_eq!((plane.start_block_id, plane.finish_block_id), (1, 16));
    assert_eq!(plane.total_defined, CODESPACE.official_character_count());

    let block = CODESPACE.all_characters_block();
    assert_eq!((block.start, block.finish), (0, 0x10FFFF));

    assert_eq!(CODESPACE.unicode_version(), "15.0.0");
}
