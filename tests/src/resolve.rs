use std::collections::HashMap;

use unicode_codespace::data::{Block, Plane, PropertyValue, PropertyValues, ReferenceData, PROP_GROUP_INVALID_FOR_VERSION_ID};
use unicode_codespace::error::StoreError;
use unicode_codespace::properties::Number;
use unicode_codespace::{
    CharacterStore, CharacterTable, Codepoint, Codespace, ColumnValue, MemoryStore, PropertyGroup, PropertyMap,
    Value,
};

use crate::data::{CODESPACE, STORE};

fn resolve(code: u32, groups: &[PropertyGroup], verbose: bool) -> PropertyMap
{
    CODESPACE
        .resolve_properties(&*STORE, Codepoint::new(code), groups, verbose)
        .unwrap()
}

fn text(value: &str) -> Value
{
    Value::from(value)
}

fn list(values: &[&str]) -> Value
{
    Value::TextList(values.iter().map(|v| v.to_string()).collect())
}

/// минимальная и базовая группы, порядок свойств
#[test]
fn basic_properties()
{
    let props = resolve(0x0041, &[PropertyGroup::Basic], false);
    let keys: Vec<&str> = props.keys().map(String::as_str).collect();

    assert_eq!(
        keys,
        [
            "character",
            "name",
            "codepoint",
            "uri_encoded",
            "block",
            "plane",
            "age",
            "general_category",
            "combining_class",
            "html_entities",
        ]
    );

    assert_eq!(props["character"], text("A"));
    assert_eq!(props["name"], text("LATIN CAPITAL LETTER A"));
    assert_eq!(props["codepoint"], text("U+0041"));
    assert_eq!(props["block"], text("Basic Latin"));
    assert_eq!(props["plane"], text("BMP"));
    assert_eq!(props["age"], text("1.1"));
    assert_eq!(props["general_category"], text("Uppercase_Letter (Lu)"));
    assert_eq!(props["combining_class"], text("Not_Reordered (NR)"));

    match &props["html_entities"] {
        Value::TextList(entities) => assert_eq!(&entities[.. 2], ["&#65;", "&#x41;"]),
        other => panic!("html_entities: {:?}", other),
    }
}

/// без запрошенных групп возвращается только минимальная
#[test]
fn minimum_only()
{
    let props = resolve(0x10300, &[], false);

    assert_eq!(props.len(), 4);
    assert_eq!(props["name"], text("OLD ITALIC LETTER A"));
    assert_eq!(props["uri_encoded"], text("%F0%90%8C%80"));

    let tangut = resolve(0x17000, &[PropertyGroup::Minimum], false);
    assert_eq!(tangut["name"], text("TANGUT IDEOGRAPH-17000"));
}

#[test]
fn encodings()
{
    let props = resolve(
        0x20AC,
        &[PropertyGroup::Utf8, PropertyGroup::Utf16, PropertyGroup::Utf32],
        false,
    );

    assert_eq!(props["utf8"], text("0xE2 0x82 0xAC"));
    assert_eq!(props["utf8_hex_bytes"], list(&["E2", "82", "AC"]));
    assert_eq!(props["utf8_dec_bytes"], Value::IntegerList(vec![226, 130, 172]));
    assert_eq!(props["utf16"], text("0x20AC"));
    assert_eq!(props["utf32"], text("0x000020AC"));
    assert_eq!(props["utf32_dec_bytes"], Value::IntegerList(vec![8364]));
}

/// неинформативные значения удаляются, если не запрошен подробный вывод
#[test]
fn trimmed_properties()
{
    let props = resolve(0x0041, &[PropertyGroup::All], false);

    assert_eq!(props["uppercase"], Value::Flag(true));
    assert_eq!(props["simple_lowercase_mapping"], text("a (U+0061 LATIN SMALL LETTER A)"));
    assert_eq!(props["script"], text("Latin (Latn)"));
    assert_eq!(props["script_extensions"], list(&["Latin (Latn)"]));
    assert_eq!(props["bidi_class"], text("Left_To_Right (L)"));
    assert_eq!(props["east_asian_width"], text("Narrow (Na)"));
    assert_eq!(props["NFC_QC"], text("Yes"));

    for removed in [
        "lowercase",
        "simple_uppercase_mapping",
        "simple_titlecase_mapping",
        "decomposition_type",
        "numeric_type",
        "numeric_value",
        "numeric_value_parsed",
        "joining_type",
        "joining_group",
        "hangul_syllable_type",
        "indic_syllabic_category",
        "indic_matra_category",
        "indic_positional_category",
        "bidi_mirrored",
        "bidi_mirroring_glyph",
        "equivalent_unified_ideograph",
        "dash",
        "emoji",
        "extended_pictographic",
    ] {
        assert!(!props.contains_key(removed), "{} должно быть удалено", removed);
    }

    assert!(!props.contains_key("description"), "у символов, не являющихся иероглифами, нет описания");
    assert!(!props.contains_key("mandarin"), "группы CJK не выводятся для латиницы");
}

#[test]
fn verbose_properties()
{
    let props = resolve(0x0041, &[PropertyGroup::All], true);

    assert_eq!(props["lowercase"], Value::Flag(false));
    assert_eq!(props["decomposition_type"], text("None (none)"));
    assert_eq!(props["bidi_mirroring_glyph"], text(""), "без зеркального символа значение пустое");
    assert_eq!(props["numeric_value"], list(&["NaN"]));
    assert_eq!(props["numeric_value_parsed"], Value::Numbers(vec![]));
    assert_eq!(props["simple_uppercase_mapping"], text(""));
    assert_eq!(props["equivalent_unified_ideograph"], text(""));
}

#[test]
fn numeric_and_joining()
{
    let digit = resolve(0x0032, &[PropertyGroup::Numeric], false);

    assert_eq!(digit["numeric_type"], text("Decimal (De)"));
    assert_eq!(digit["numeric_value"], list(&["2"]));
    assert_eq!(digit["numeric_value_parsed"], Value::Numbers(vec![Number::Integer(2)]));

    let alef = resolve(0x0627, &[PropertyGroup::Joining, PropertyGroup::Bidirectionality], false);

    assert_eq!(alef["joining_type"], text("Right_Joining (R)"));
    assert_eq!(alef["joining_group"], text("Alef"));
    assert_eq!(alef["bidi_class"], text("Arabic_Letter (AL)"));

    let acute = resolve(0x00E9, &[PropertyGroup::Decomposition, PropertyGroup::QuickCheck], false);

    assert_eq!(acute["decomposition_type"], text("Canonical (can)"));
    assert_eq!(acute["NFC_QC"], text("Yes"));
    assert_eq!(acute["NFD_QC"], text("No"));
}

/// свойства иероглифа берутся из таблицы иероглифов
#[test]
fn unihan_properties()
{
    let props = resolve(
        0x4E00,
        &[PropertyGroup::Basic, PropertyGroup::CjkVariants, PropertyGroup::CjkReadings],
        false,
    );

    assert_eq!(props["name"], text("CJK UNIFIED IDEOGRAPH-4E00"));
    assert_eq!(props["description"], text("one; a, an; alone"));
    assert_eq!(props["ideo_frequency"], Value::Integer(1));
    assert_eq!(props["total_strokes"], Value::Numbers(vec![Number::Integer(1)]));
    assert_eq!(props["semantic_variant"], list(&["二 (U+4E8C CJK UNIFIED IDEOGRAPH-4E8C)"]));
    assert_eq!(props["mandarin"], text("yī"));

    assert!(!props.contains_key("traditional_variant"));
    assert!(!props.contains_key("hangul"));
    assert!(!props.contains_key("bidi_class"));

    let sparse = resolve(0x4E8C, &[PropertyGroup::Basic], false);

    assert_eq!(sparse["combining_class"], text("Not_Reordered (NR)"), "значение по умолчанию");
    assert!(!sparse.contains_key("ideo_frequency"));
    assert!(!sparse.contains_key("total_strokes"));
}

/// пустое описание иероглифа удаляется, в подробном выводе остается
#[test]
fn empty_cjk_description()
{
    let concise = resolve(0x20000, &[PropertyGroup::CjkMinimum], false);
    assert!(!concise.contains_key("description"));
    assert_eq!(concise["name"], text("CJK UNIFIED IDEOGRAPH-20000"));

    let verbose = resolve(0x20000, &[PropertyGroup::CjkMinimum], true);
    assert_eq!(verbose["description"], text(""));
}

/// повторное разрешение дает тот же результат, подробный вывод включает краткий
#[test]
fn repeatable_and_verbose_superset()
{
    for code in [0x0020, 0x0041, 0x00E9, 0x0378, 0x4E00, 0x17000, 0x1FA00, 0xE000] {
        let concise = resolve(code, &[PropertyGroup::All], false);
        assert_eq!(concise, resolve(code, &[PropertyGroup::All], false), "U+{:04X}", code);

        let verbose = resolve(code, &[PropertyGroup::All], true);
        for (key, value) in concise.iter() {
            assert_eq!(verbose.get(key), Some(value), "U+{:04X}: {}", code, key);
        }

        let concise_keys: Vec<&String> = concise.keys().collect();
        let verbose_keys: Vec<&String> = verbose.keys().filter(|k| concise.contains_key(*k)).collect();
        assert_eq!(concise_keys, verbose_keys, "порядок ключей U+{:04X}", code);
    }
}

/// для кодпоинта без строки в хранилище используются значения по умолчанию
#[test]
fn unassigned_defaults()
{
    let props = resolve(0x0378, &[PropertyGroup::Basic, PropertyGroup::Bidirectionality], false);

    assert_eq!(props["name"], text("<reserved-0378>"));
    assert_eq!(props["block"], text("None"));
    assert_eq!(props["plane"], text("None"));
    assert_eq!(props["age"], text("NA"));
    assert_eq!(props["general_category"], text("Unassigned (Cn)"));
    assert_eq!(props["bidi_class"], text("Left_To_Right (L)"));
    assert!(!props.contains_key("bidi_mirrored"));
    assert!(!props.contains_key("bidi_mirroring_glyph"));

    let arabic = resolve(0x06FF, &[PropertyGroup::Bidirectionality], true);
    assert_eq!(arabic["bidi_class"], text("Arabic_Letter (AL)"));
}

/// флаги эмодзи не удаляются, если установлен хотя бы один из них
#[test]
fn emoji_flags()
{
    let king = resolve(0x1FA00, &[PropertyGroup::Emoji], false);

    assert_eq!(king["extended_pictographic"], Value::Flag(true));
    assert_eq!(king["emoji"], Value::Flag(false));

    let unassigned = resolve(0x1FA70, &[PropertyGroup::Emoji], false);
    assert_eq!(unassigned["extended_pictographic"], Value::Flag(true), "значение по умолчанию");
    assert_eq!(unassigned["emoji_presentation"], Value::Flag(false));

    let latin = resolve(0x0061, &[PropertyGroup::Emoji], false);
    assert!(!latin.contains_key("extended_pictographic"));
    assert!(!latin.contains_key("emoji"));
}

#[test]
fn json_output()
{
    let props = resolve(0x0032, &[PropertyGroup::Numeric], false);

    assert_eq!(
        serde_json::to_string(&props).unwrap(),
        r#"{"character":"2","name":"DIGIT TWO","codepoint":"U+0032","uri_encoded":"2","numeric_type":"Decimal (De)","numeric_value":["2"],"numeric_value_parsed":[2]}"#
    );
}

/// группа значений, которой нет в версии Unicode, не попадает в результат
#[test]
fn missing_property_group()
{
    let property_values = PropertyValues::new(
        Vec::<(String, Vec<PropertyValue>)>::new(),
        ["Vertical_Orientation".to_owned()],
        Vec::<String>::new(),
    );

    let data = ReferenceData::new(
        "9.0.0",
        Plane::defaults(),
        vec![],
        property_values,
        HashMap::new(),
        HashMap::new(),
        HashMap::new(),
    )
    .unwrap();

    let codespace = Codespace::new(data);
    let codepoint = Codepoint::new(0x0041);

    let props = codespace
        .resolve_properties(&MemoryStore::new(), codepoint, &[PropertyGroup::FunctionAndGraphic], true)
        .unwrap();

    assert!(!props.contains_key("vertical_orientation"));
    assert!(props.contains_key("radical"));

    assert_eq!(
        codespace.display_name_for_property_value("Vertical_Orientation", None, codepoint),
        "N/A"
    );
    assert_eq!(
        codespace.default_value_id("Vertical_Orientation", codepoint),
        Some(PROP_GROUP_INVALID_FOR_VERSION_ID)
    );
}

/// текстовые свойства групп, которых нет в версии Unicode, тоже не выводятся
#[test]
fn missing_text_property_groups()
{
    let property_values = PropertyValues::new(
        Vec::<(String, Vec<PropertyValue>)>::new(),
        [
            "indic_positional_category".to_owned(),
            "indic_syllabic_category".to_owned(),
            "joining_group".to_owned(),
        ],
        Vec::<String>::new(),
    );

    let data = ReferenceData::new(
        "7.0.0",
        Plane::defaults(),
        vec![],
        property_values,
        HashMap::from([(0x0915, "DEVANAGARI LETTER KA".to_owned())]),
        HashMap::new(),
        HashMap::new(),
    )
    .unwrap();

    let store = MemoryStore::new().with_row(
        CharacterTable::NonUnihan,
        0x0915,
        vec![
            ("joining_group", ColumnValue::from("No_Joining_Group")),
            ("join_control", false.into()),
            ("indic_syllabic_category", "Consonant".into()),
            ("indic_matra_category", "NA".into()),
            ("indic_positional_category", "NA".into()),
        ],
    );

    let codespace = Codespace::new(data);
    let props = codespace
        .resolve_properties(
            &store,
            Codepoint::new(0x0915),
            &[PropertyGroup::Joining, PropertyGroup::Indic],
            true,
        )
        .unwrap();

    for removed in ["joining_group", "indic_syllabic_category", "indic_positional_category"] {
        assert!(!props.contains_key(removed), "{} отсутствует в версии 7.0.0", removed);
    }

    assert_eq!(props["name"], text("DEVANAGARI LETTER KA"));
    assert_eq!(props["join_control"], Value::Flag(false));
    assert_eq!(props["indic_matra_category"], text("NA"));
    assert!(props.contains_key("joining_type"));
}

/// возраст по умолчанию для блока, плоскости которого нет в справочных данных
#[test]
fn default_age_without_plane()
{
    let age = |id: u32, short_name: &str| PropertyValue {
        id,
        short_name: short_name.to_owned(),
        long_name: format!("V{}", short_name.replace('.', "_")),
        is_group: false,
        grouped_values: String::new(),
    };

    let property_values = PropertyValues::new(
        [(
            "Age".to_owned(),
            vec![
                PropertyValue {
                    id: 0,
                    short_name: "NA".to_owned(),
                    long_name: "Unassigned".to_owned(),
                    is_group: false,
                    grouped_values: String::new(),
                },
                age(1, "1.1"),
                age(2, "2.0"),
            ],
        )],
        Vec::<String>::new(),
        Vec::<String>::new(),
    );

    let arabic: Block = serde_json::from_value(serde_json::json!({
        "id": 1,
        "long_name": "Arabic",
        "short_name": "Arabic",
        "plane_id": 0,
        "start_dec": 0x0600,
        "finish_dec": 0x06FF,
    }))
    .unwrap();

    let data = ReferenceData::new(
        "15.0.0",
        Plane::defaults(),
        vec![arabic],
        property_values,
        HashMap::new(),
        HashMap::new(),
        HashMap::new(),
    )
    .unwrap();

    let codespace = Codespace::new(data);

    assert!(codespace.plane_containing(1).is_null(), "у плоскостей по умолчанию нет блоков");
    assert_eq!(codespace.display_name_for_property_value("Age", None, Codepoint::new(0x06FF)), "2.0");
    assert_eq!(codespace.display_name_for_property_value("Age", None, Codepoint::new(0x0700)), "NA");
}

#[test]
fn unknown_column()
{
    let result = STORE.fetch_columns(CharacterTable::NonUnihan, 0x0041, &["name", "kangxi"]);

    assert!(matches!(
        result,
        Err(StoreError::UnknownColumn { table: "character", ref column }) if column == "kangxi"
    ));

    let row = STORE
        .fetch_columns(CharacterTable::NonUnihan, 0x0041, &["name"])
        .unwrap()
        .unwrap();
    assert_eq!(row.len(), 1);

    assert_eq!(STORE.fetch_columns(CharacterTable::Unihan, 0x0041, &["description"]).unwrap(), None);
}
