use super::group::PropertyGroup;

/// способ получения значения свойства
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind
{
    /// изображение символа
    Glyph,
    Name,
    /// U+XXXX
    Codepoint,
    UriEncoded,
    /// название блока, содержащего кодпоинт
    Block,
    /// аббревиатура плоскости
    Plane,
    HtmlEntities,
    Utf8,
    Utf8Hex,
    Utf8Dec,
    Utf16,
    Utf16Hex,
    Utf16Dec,
    Utf32,
    Utf32Hex,
    Utf32Dec,
    /// идентификатор значения перечислимого свойства из указанной группы
    Enumerated(&'static str),
    Text,
    Flag,
    Integer,
    /// строка, разделенная пробелами
    TextList,
    /// числа из строки, разделенной пробелами; колонка-источник
    Numbers(&'static str),
    /// кодпоинт в hex, выводится как "{символ} (U+XXXX NAME)"
    Mapped,
    /// список кодпоинтов с префиксом U+
    MappedList,
    /// 1 / 0 / -1 -> Yes / No / Maybe
    QuickCheck,
    ScriptExtensions,
    ExtendedPictographic,
}

/// свойство символа: колонка хранилища, название в результате, способ получения значения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDefinition
{
    pub name_in: &'static str,
    pub name_out: &'static str,
    /// значение хранится в колонке name_in
    pub db_column: bool,
    pub kind: PropertyKind,
    /// группа свойств Unicode; в версиях, где ее нет, свойство не выводится
    pub unicode_group: Option<&'static str>,
}

impl PropertyDefinition
{
    /// колонка, которую нужно получить из хранилища
    pub fn column(&self) -> Option<&'static str>
    {
        match (self.db_column, self.kind) {
            (true, _) => Some(self.name_in),
            (false, PropertyKind::Numbers(source)) => Some(source),
            _ => None,
        }
    }

    /// то же свойство, отнесенное к группе свойств Unicode
    const fn in_group(self, group: &'static str) -> Self
    {
        PropertyDefinition {
            unicode_group: Some(group),
            ..self
        }
    }
}

use PropertyKind::*;

const fn stored(name_in: &'static str, name_out: &'static str, kind: PropertyKind) -> PropertyDefinition
{
    PropertyDefinition {
        name_in,
        name_out,
        db_column: true,
        kind,
        unicode_group: kind_group(kind),
    }
}

const fn computed(name: &'static str, kind: PropertyKind) -> PropertyDefinition
{
    PropertyDefinition {
        name_in: name,
        name_out: name,
        db_column: false,
        kind,
        unicode_group: kind_group(kind),
    }
}

const fn column(name: &'static str, kind: PropertyKind) -> PropertyDefinition
{
    stored(name, name, kind)
}

/// группа, которая следует из способа получения значения
const fn kind_group(kind: PropertyKind) -> Option<&'static str>
{
    match kind {
        Enumerated(group) => Some(group),
        ScriptExtensions => Some("Script"),
        _ => None,
    }
}

const MINIMUM_HEAD: &[PropertyDefinition] = &[computed("character", Glyph), computed("name", Name)];

const DESCRIPTION: &[PropertyDefinition] = &[column("description", Text)];

const MINIMUM_TAIL: &[PropertyDefinition] = &[computed("codepoint", Codepoint), computed("uri_encoded", UriEncoded)];

const BASIC: &[PropertyDefinition] = &[
    computed("block", Block),
    computed("plane", Plane),
    stored("age_id", "age", Enumerated("Age")),
    stored("general_category_id", "general_category", Enumerated("General_Category")),
    stored("combining_class_id", "combining_class", Enumerated("Canonical_Combining_Class")),
    computed("html_entities", HtmlEntities),
];

const CJK_BASIC_EXTRA: &[PropertyDefinition] = &[
    column("ideo_frequency", Integer),
    column("ideo_grade_level", Integer),
    column("rs_count_unicode", Text),
    column("rs_count_kangxi", Text),
    computed("total_strokes", Numbers("total_strokes")),
];

const UTF8: &[PropertyDefinition] = &[
    computed("utf8", Utf8),
    computed("utf8_hex_bytes", Utf8Hex),
    computed("utf8_dec_bytes", Utf8Dec),
];

const UTF16: &[PropertyDefinition] = &[
    computed("utf16", Utf16),
    computed("utf16_hex_bytes", Utf16Hex),
    computed("utf16_dec_bytes", Utf16Dec),
];

const UTF32: &[PropertyDefinition] = &[
    computed("utf32", Utf32),
    computed("utf32_hex_bytes", Utf32Hex),
    computed("utf32_dec_bytes", Utf32Dec),
];

const BIDIRECTIONALITY: &[PropertyDefinition] = &[
    stored("bidi_class_id", "bidi_class", Enumerated("Bidi_Class")),
    column("bidi_mirrored", Flag),
    column("bidi_mirroring_glyph", Mapped),
    column("bidi_control", Flag),
    stored(
        "bidi_paired_bracket_type_id",
        "bidi_paired_bracket_type",
        Enumerated("Bidi_Paired_Bracket_Type"),
    ),
    column("bidi_paired_bracket_property", Mapped),
];

const DECOMPOSITION: &[PropertyDefinition] = &[stored(
    "decomposition_type_id",
    "decomposition_type",
    Enumerated("Decomposition_Type"),
)];

const QUICK_CHECK: &[PropertyDefinition] = &[
    column("NFC_QC", QuickCheck).in_group("NFC_Quick_Check"),
    column("NFD_QC", QuickCheck).in_group("NFD_Quick_Check"),
    column("NFKC_QC", QuickCheck).in_group("NFKC_Quick_Check"),
    column("NFKD_QC", QuickCheck).in_group("NFKD_Quick_Check"),
];

const NUMERIC: &[PropertyDefinition] = &[
    stored("numeric_type_id", "numeric_type", Enumerated("Numeric_Type")),
    column("numeric_value", TextList),
    computed("numeric_value_parsed", Numbers("numeric_value")),
];

const JOINING: &[PropertyDefinition] = &[
    stored("joining_type_id", "joining_type", Enumerated("Joining_Type")),
    column("joining_group", Text).in_group("Joining_Group"),
    column("join_control", Flag),
];

const LINEBREAK: &[PropertyDefinition] = &[stored("line_break_id", "line_break", Enumerated("Line_Break"))];

const EAST_ASIAN_WIDTH: &[PropertyDefinition] = &[stored(
    "east_asian_width_id",
    "east_asian_width",
    Enumerated("East_Asian_Width"),
)];

const CASE: &[PropertyDefinition] = &[
    column("uppercase", Flag),
    column("lowercase", Flag),
    column("simple_uppercase_mapping", Mapped),
    column("simple_lowercase_mapping", Mapped),
    column("simple_titlecase_mapping", Mapped),
    column("simple_case_folding", Mapped),
];

const SCRIPT: &[PropertyDefinition] = &[
    stored("script_id", "script", Enumerated("Script")),
    column("script_extensions", ScriptExtensions),
];

const HANGUL: &[PropertyDefinition] = &[stored(
    "hangul_syllable_type_id",
    "hangul_syllable_type",
    Enumerated("Hangul_Syllable_Type"),
)];

const INDIC: &[PropertyDefinition] = &[
    column("indic_syllabic_category", Text).in_group("Indic_Syllabic_Category"),
    column("indic_matra_category", Text),
    column("indic_positional_category", Text).in_group("Indic_Positional_Category"),
];

const CJK_VARIANTS: &[PropertyDefinition] = &[
    column("traditional_variant", MappedList),
    column("simplified_variant", MappedList),
    column("z_variant", MappedList),
    column("compatibility_variant", MappedList),
    column("semantic_variant", MappedList),
    column("specialized_semantic_variant", MappedList),
    column("spoofing_variant", MappedList),
];

const CJK_NUMERIC: &[PropertyDefinition] = &[
    column("accounting_numeric", Text),
    column("primary_numeric", Text),
    column("other_numeric", Text),
];

const CJK_READINGS: &[PropertyDefinition] = &[
    column("hangul", Text),
    column("cantonese", Text),
    column("mandarin", Text),
    column("japanese_kun", Text),
    column("japanese_on", Text),
    column("vietnamese", Text),
];

const FUNCTION_AND_GRAPHIC: &[PropertyDefinition] = &[
    column("ideographic", Flag),
    column("unified_ideograph", Flag),
    column("equivalent_unified_ideograph", Mapped),
    column("radical", Flag),
    column("dash", Flag),
    column("hyphen", Flag),
    column("quotation_mark", Flag),
    column("terminal_punctuation", Flag),
    column("sentence_terminal", Flag),
    column("diacritic", Flag),
    column("extender", Flag),
    column("soft_dotted", Flag),
    column("alphabetic", Flag),
    column("math", Flag),
    column("hex_digit", Flag),
    column("ascii_hex_digit", Flag),
    column("default_ignorable_code_point", Flag),
    column("logical_order_exception", Flag),
    column("prepended_concatenation_mark", Flag),
    column("white_space", Flag),
    stored(
        "vertical_orientation_id",
        "vertical_orientation",
        Enumerated("Vertical_Orientation"),
    ),
    column("regional_indicator", Flag),
];

const EMOJI: &[PropertyDefinition] = &[
    column("emoji", Flag),
    column("emoji_presentation", Flag),
    column("emoji_modifier", Flag),
    column("emoji_modifier_base", Flag),
    column("emoji_component", Flag),
    column("extended_pictographic", ExtendedPictographic),
];

/// свойства группы в порядке вывода
pub fn definitions_for(group: PropertyGroup) -> Vec<&'static PropertyDefinition>
{
    let parts: &[&[PropertyDefinition]] = match group {
        PropertyGroup::All => &[],
        PropertyGroup::Minimum => &[MINIMUM_HEAD, MINIMUM_TAIL],
        PropertyGroup::CjkMinimum => &[MINIMUM_HEAD, DESCRIPTION, MINIMUM_TAIL],
        PropertyGroup::Basic => &[BASIC],
        PropertyGroup::CjkBasic => &[BASIC, CJK_BASIC_EXTRA],
        PropertyGroup::Utf8 => &[UTF8],
        PropertyGroup::Utf16 => &[UTF16],
        PropertyGroup::Utf32 => &[UTF32],
        PropertyGroup::Bidirectionality => &[BIDIRECTIONALITY],
        PropertyGroup::Decomposition => &[DECOMPOSITION],
        PropertyGroup::QuickCheck => &[QUICK_CHECK],
        PropertyGroup::Numeric => &[NUMERIC],
        PropertyGroup::Joining => &[JOINING],
        PropertyGroup::Linebreak => &[LINEBREAK],
        PropertyGroup::EastAsianWidth => &[EAST_ASIAN_WIDTH],
        PropertyGroup::Case => &[CASE],
        PropertyGroup::Script => &[SCRIPT],
        PropertyGroup::Hangul => &[HANGUL],
        PropertyGroup::Indic => &[INDIC],
        PropertyGroup::CjkVariants => &[CJK_VARIANTS],
        PropertyGroup::CjkNumeric => &[CJK_NUMERIC],
        PropertyGroup::CjkReadings => &[CJK_READINGS],
        PropertyGroup::FunctionAndGraphic => &[FUNCTION_AND_GRAPHIC],
        PropertyGroup::Emoji => &[EMOJI],
    };

    parts.iter().flat_map(|part| part.iter()).collect()
}

/// колонки, которые нужно получить для набора групп, без повторов, в порядке появления
pub fn required_columns(groups: &[PropertyGroup]) -> Vec<&'static str>
{
    let mut columns: Vec<&'static str> = vec![];

    for column in groups
        .iter()
        .flat_map(|&g| definitions_for(g))
        .filter_map(|d| d.column())
    {
        if !columns.contains(&column) {
            columns.push(column);
        }
    }

    columns
}
