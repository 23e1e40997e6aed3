use crate::data::normalize_loosely;
use crate::error::ParameterError;

/// группа свойств символа, которые возвращаются вместе
///
/// порядок вариантов определяет порядок свойств в результате
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyGroup
{
    All,
    Minimum,
    Basic,
    Utf8,
    Utf16,
    Utf32,
    Bidirectionality,
    Decomposition,
    QuickCheck,
    Numeric,
    Joining,
    Linebreak,
    EastAsianWidth,
    Case,
    Script,
    Hangul,
    Indic,
    CjkMinimum,
    CjkBasic,
    CjkVariants,
    CjkNumeric,
    CjkReadings,
    FunctionAndGraphic,
    Emoji,
}

use PropertyGroup::*;

impl PropertyGroup
{
    pub const ALL: [PropertyGroup; 24] = [
        All,
        Minimum,
        Basic,
        Utf8,
        Utf16,
        Utf32,
        Bidirectionality,
        Decomposition,
        QuickCheck,
        Numeric,
        Joining,
        Linebreak,
        EastAsianWidth,
        Case,
        Script,
        Hangul,
        Indic,
        CjkMinimum,
        CjkBasic,
        CjkVariants,
        CjkNumeric,
        CjkReadings,
        FunctionAndGraphic,
        Emoji,
    ];

    /// название в стиле SCREAMING_SNAKE_CASE
    pub fn key(&self) -> &'static str
    {
        match self {
            All => "ALL",
            Minimum => "MINIMUM",
            Basic => "BASIC",
            Utf8 => "UTF8",
            Utf16 => "UTF16",
            Utf32 => "UTF32",
            Bidirectionality => "BIDIRECTIONALITY",
            Decomposition => "DECOMPOSITION",
            QuickCheck => "QUICK_CHECK",
            Numeric => "NUMERIC",
            Joining => "JOINING",
            Linebreak => "LINEBREAK",
            EastAsianWidth => "EAST_ASIAN_WIDTH",
            Case => "CASE",
            Script => "SCRIPT",
            Hangul => "HANGUL",
            Indic => "INDIC",
            CjkMinimum => "CJK_MINIMUM",
            CjkBasic => "CJK_BASIC",
            CjkVariants => "CJK_VARIANTS",
            CjkNumeric => "CJK_NUMERIC",
            CjkReadings => "CJK_READINGS",
            FunctionAndGraphic => "FUNCTION_AND_GRAPHIC",
            Emoji => "EMOJI",
        }
    }

    /// короткий псевдоним, который принимается наравне с названием
    pub fn short_alias(&self) -> Option<&'static str>
    {
        Some(match self {
            Bidirectionality => "bidi",
            Decomposition => "decomp",
            QuickCheck => "qc",
            Numeric => "num",
            Joining => "join",
            Linebreak => "lb",
            EastAsianWidth => "eaw",
            FunctionAndGraphic => "function",
            CjkMinimum => "cjk_m",
            CjkBasic => "cjk_b",
            CjkVariants => "cjk_v",
            CjkNumeric => "cjk_n",
            CjkReadings => "cjk_r",
            _ => return None,
        })
    }

    /// группа имеет смысл только для иероглифов
    #[inline]
    pub fn is_unihan_only(&self) -> bool
    {
        matches!(self, CjkMinimum | CjkBasic | CjkVariants | CjkNumeric | CjkReadings)
    }

    /// найти группу по названию или псевдониму без учета регистра, пробелов, "-" и "_"
    pub fn match_loosely(name: &str) -> Option<Self>
    {
        let name = normalize_loosely(name);

        Self::ALL.into_iter().find(|group| {
            normalize_loosely(group.key()) == name
                || group.short_alias().map(normalize_loosely).as_deref() == Some(name.as_str())
        })
    }

    /// все группы для символа, не являющегося иероглифом
    pub fn all_non_unihan() -> Vec<Self>
    {
        Self::ALL
            .into_iter()
            .filter(|g| *g != All && !g.is_unihan_only())
            .collect()
    }

    /// все группы для иероглифа
    pub fn all_unihan() -> Vec<Self>
    {
        Self::ALL
            .into_iter()
            .filter(|g| !matches!(g, All | Minimum | Basic))
            .collect()
    }

    /// выбор групп для символа: "All" раскрывается в полный список, минимальная группа добавляется всегда,
    /// для иероглифов Basic заменяется на CJK Basic, для остальных символов группы CJK отбрасываются
    pub fn select(requested: &[Self], unihan: bool) -> Vec<Self>
    {
        if requested.contains(&All) {
            return match unihan {
                true => Self::all_unihan(),
                false => Self::all_non_unihan(),
            };
        }

        let substitute = |group: Self| match (unihan, group) {
            (true, Minimum) => Some(CjkMinimum),
            (true, Basic) => Some(CjkBasic),
            (false, g) if g.is_unihan_only() => None,
            (_, g) => Some(g),
        };

        let minimum = match unihan {
            true => CjkMinimum,
            false => Minimum,
        };

        let mut groups: Vec<Self> = requested
            .iter()
            .copied()
            .filter_map(substitute)
            .chain(core::iter::once(minimum))
            .collect();

        groups.sort();
        groups.dedup();

        groups
    }
}

impl core::fmt::Display for PropertyGroup
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        match self {
            Utf8 => f.write_str("UTF-8"),
            Utf16 => f.write_str("UTF-16"),
            Utf32 => f.write_str("UTF-32"),
            _ => {
                let words: Vec<String> = self
                    .key()
                    .split('_')
                    .map(|word| match word {
                        "CJK" => "CJK".to_owned(),
                        "AND" => "and".to_owned(),
                        _ => {
                            let lower = word.to_lowercase();
                            let mut chars = lower.chars();

                            match chars.next() {
                                Some(first) => first.to_uppercase().chain(chars).collect(),
                                None => String::new(),
                            }
                        }
                    })
                    .collect();

                f.write_str(&words.join(" "))
            }
        }
    }
}

/// разбор списка названий групп, все нераспознанные названия попадают в одну ошибку
pub fn parse_property_groups<S: AsRef<str>>(names: &[S]) -> Result<Vec<PropertyGroup>, ParameterError>
{
    let mut groups = vec![];
    let mut invalid = vec![];

    for name in names {
        match PropertyGroup::match_loosely(name.as_ref()) {
            Some(group) => groups.push(group),
            None => invalid.push(name.as_ref().to_owned()),
        }
    }

    match invalid.is_empty() {
        true => Ok(groups),
        false => Err(ParameterError::InvalidValues {
            parameter: "show_props",
            invalid,
        }),
    }
}
