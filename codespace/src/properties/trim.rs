use indexmap::IndexMap;

use super::value::Value;

/// условие правила; если свойства нет в результате, условие не выполняется
#[derive(Debug, Clone, Copy)]
enum Condition
{
    /// свойство присутствует
    Present(&'static str),
    /// пустая строка или список, false, 0
    Blank(&'static str),
    /// флаг снят
    Unset(&'static str),
    /// строковое значение содержит подстроку
    Contains(&'static str, &'static str),
    /// отображение указывает на сам символ или пустое
    SelfOrEmpty(&'static str),
    /// значение содержит U+XXXX самого символа
    ContainsCodepoint(&'static str),
    /// список из одной пустой строки
    EmptyPlaceholder(&'static str),
}

/// если выполнены все условия - свойства удаляются из результата
#[derive(Debug)]
struct TrimRule
{
    when: &'static [Condition],
    remove: &'static [&'static str],
    unihan_only: bool,
}

use Condition::*;

const fn rule(when: &'static [Condition], remove: &'static [&'static str]) -> TrimRule
{
    TrimRule {
        when,
        remove,
        unihan_only: false,
    }
}

const fn unihan(when: &'static [Condition], remove: &'static [&'static str]) -> TrimRule
{
    TrimRule {
        when,
        remove,
        unihan_only: true,
    }
}

const RULES: &[TrimRule] = &[
    // регистр
    rule(&[Unset("uppercase")], &["uppercase"]),
    rule(&[Unset("lowercase")], &["lowercase"]),
    rule(&[SelfOrEmpty("simple_uppercase_mapping")], &["simple_uppercase_mapping"]),
    rule(&[SelfOrEmpty("simple_lowercase_mapping")], &["simple_lowercase_mapping"]),
    rule(&[SelfOrEmpty("simple_titlecase_mapping")], &["simple_titlecase_mapping"]),
    rule(&[SelfOrEmpty("simple_case_folding")], &["simple_case_folding"]),
    // индийские письменности
    rule(
        &[
            Contains("indic_syllabic_category", "Other"),
            Contains("indic_matra_category", "NA"),
            Contains("indic_positional_category", "NA"),
        ],
        &["indic_syllabic_category", "indic_matra_category", "indic_positional_category"],
    ),
    rule(&[Blank("description")], &["description"]),
    rule(
        &[Unset("bidi_mirrored"), Present("bidi_mirroring_glyph")],
        &["bidi_mirroring_glyph"],
    ),
    rule(
        &[
            Contains("bidi_paired_bracket_type", "None"),
            ContainsCodepoint("bidi_paired_bracket_property"),
        ],
        &["bidi_paired_bracket_type", "bidi_paired_bracket_property"],
    ),
    rule(&[Contains("decomposition_type", "None")], &["decomposition_type"]),
    rule(
        &[Contains("numeric_type", "None")],
        &["numeric_type", "numeric_value", "numeric_value_parsed"],
    ),
    rule(&[Contains("joining_type", "Non_Joining")], &["joining_type", "joining_group"]),
    rule(&[Contains("hangul_syllable_type", "Not_Applicable")], &["hangul_syllable_type"]),
    rule(&[Blank("equivalent_unified_ideograph")], &["equivalent_unified_ideograph"]),
    // иероглифы
    unihan(&[EmptyPlaceholder("traditional_variant")], &["traditional_variant"]),
    unihan(&[EmptyPlaceholder("simplified_variant")], &["simplified_variant"]),
    unihan(&[EmptyPlaceholder("z_variant")], &["z_variant"]),
    unihan(&[EmptyPlaceholder("compatibility_variant")], &["compatibility_variant"]),
    unihan(&[EmptyPlaceholder("semantic_variant")], &["semantic_variant"]),
    unihan(
        &[EmptyPlaceholder("specialized_semantic_variant")],
        &["specialized_semantic_variant"],
    ),
    unihan(&[EmptyPlaceholder("spoofing_variant")], &["spoofing_variant"]),
    unihan(&[Blank("ideo_frequency")], &["ideo_frequency"]),
    unihan(&[Blank("ideo_grade_level")], &["ideo_grade_level"]),
    unihan(&[Blank("rs_count_unicode")], &["rs_count_unicode"]),
    unihan(&[Blank("rs_count_kangxi")], &["rs_count_kangxi"]),
    unihan(&[Blank("total_strokes")], &["total_strokes"]),
    unihan(&[Blank("accounting_numeric")], &["accounting_numeric"]),
    unihan(&[Blank("primary_numeric")], &["primary_numeric"]),
    unihan(&[Blank("other_numeric")], &["other_numeric"]),
    unihan(&[Blank("hangul")], &["hangul"]),
    unihan(&[Blank("cantonese")], &["cantonese"]),
    unihan(&[Blank("mandarin")], &["mandarin"]),
    unihan(&[Blank("japanese_kun")], &["japanese_kun"]),
    unihan(&[Blank("japanese_on")], &["japanese_on"]),
    unihan(&[Blank("vietnamese")], &["vietnamese"]),
];

/// сведения о символе, которые нужны для проверки условий
pub struct TrimContext<'a>
{
    /// "U+XXXX"
    pub codepoint: &'a str,
    /// "{символ} (U+XXXX NAME)"
    pub mapped_self: &'a str,
    pub unihan: bool,
    /// названия флагов символа (булевых свойств)
    pub flags: &'a [String],
}

impl Condition
{
    fn holds(&self, props: &IndexMap<String, Value>, context: &TrimContext) -> bool
    {
        let get = |name: &str| props.get(name);

        match *self {
            Present(name) => get(name).is_some(),
            Blank(name) => get(name).map_or(false, Value::is_blank),
            Unset(name) => get(name).map_or(false, |v| v.as_bool() == Some(false)),
            Contains(name, needle) => get(name).map_or(false, |v| v.contains(needle)),
            SelfOrEmpty(name) => get(name)
                .and_then(Value::as_str)
                .map_or(false, |v| v.is_empty() || v == context.mapped_self),
            ContainsCodepoint(name) => get(name).map_or(false, |v| v.contains(context.codepoint)),
            EmptyPlaceholder(name) => matches!(get(name), Some(Value::TextList(l)) if l.len() == 1 && l[0].is_empty()),
        }
    }
}

/// флаг относится к эмодзи
#[inline]
pub fn is_emoji_flag(name: &str) -> bool
{
    name.contains("emoji") || name.contains("pictographic")
}

/// снятые флаги; если установлен хотя бы один флаг эмодзи, флаги эмодзи не удаляются
fn unset_flags<'a>(props: &IndexMap<String, Value>, flags: &'a [String]) -> Vec<&'a str>
{
    let is_set = |flag: &str| props.get(flag).and_then(Value::as_bool) == Some(true);
    let emoji_set = flags.iter().any(|f| is_emoji_flag(f) && is_set(f));

    flags
        .iter()
        .map(String::as_str)
        .filter(|f| !(emoji_set && is_emoji_flag(f)))
        .filter(|f| props.get(*f).and_then(Value::as_bool) == Some(false))
        .collect()
}

/// удалить из результата свойства с неинформативными значениями
///
/// условия проверяются по исходному результату, удаление выполняется после проверки всех правил
pub fn trim_irrelevant(props: &mut IndexMap<String, Value>, context: &TrimContext)
{
    let mut remove: Vec<&str> = unset_flags(props, context.flags);

    for rule in RULES {
        if rule.unihan_only && !context.unihan {
            continue;
        }

        if rule.when.iter().all(|c| c.holds(props, context)) {
            remove.extend_from_slice(rule.remove);
        }
    }

    for name in remove {
        props.shift_remove(name);
    }
}
