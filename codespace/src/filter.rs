use crate::codespace::Codespace;
use crate::data::normalize_loosely;
use crate::error::ParameterError;
use crate::store::{CharacterTable, ColumnValue, Row};

/// условие выборки кодпоинтов из хранилища
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate
{
    /// название символа содержит слово или фразу целиком, регистр не учитывается
    NameMatches(String),
    /// определение иероглифа содержит слово или фразу целиком
    DescriptionMatches(String),
    /// значение колонки - один из идентификаторов
    ColumnIn
    {
        column: &'static str, ids: Vec<u32>
    },
    /// основная письменность - одна из ids, или Script_Extensions содержит одно из названий
    ScriptIn
    {
        names: Vec<String>, ids: Vec<u32>
    },
    /// установлен хотя бы один из флагов
    AnyFlagSet(Vec<String>),
}

impl Predicate
{
    /// проверка строки хранилища, используется хранилищем в памяти
    pub fn matches(&self, row: &Row) -> bool
    {
        let text = |column: &str| row.get(column).and_then(ColumnValue::as_str).unwrap_or("");
        let id = |column: &str| row.get(column).and_then(ColumnValue::as_int);
        let id_in = |column: &str, ids: &[u32]| id(column).map_or(false, |v| ids.iter().any(|&i| i as i64 == v));

        match self {
            Predicate::NameMatches(word) => contains_word(text("name"), word),
            Predicate::DescriptionMatches(word) => contains_word(text("description"), word),
            Predicate::ColumnIn { column, ids } => id_in(*column, ids.as_slice()),
            Predicate::ScriptIn { names, ids } => {
                id_in("script_id", ids.as_slice()) || names.iter().any(|n| text("script_extensions").contains(n.as_str()))
            }
            Predicate::AnyFlagSet(flags) => flags
                .iter()
                .any(|f| row.get(f.as_str()).map_or(false, ColumnValue::as_bool)),
        }
    }
}

#[inline]
fn is_word_char(c: char) -> bool
{
    c.is_alphanumeric() || c == '_'
}

/// вхождение needle, ограниченное границами слов, без учета регистра
pub fn contains_word(haystack: &str, needle: &str) -> bool
{
    let haystack = haystack.to_lowercase();
    let needle = needle.trim().to_lowercase();

    if needle.is_empty() {
        return false;
    }

    let starts_with_word = needle.chars().next().map_or(false, is_word_char);
    let ends_with_word = needle.chars().last().map_or(false, is_word_char);

    haystack.match_indices(needle.as_str()).any(|(position, _)| {
        let before = haystack[.. position].chars().last();
        let after = haystack[position + needle.len() ..].chars().next();

        let left = !starts_with_word || before.map_or(true, |c| !is_word_char(c));
        let right = !ends_with_word || after.map_or(true, |c| !is_word_char(c));

        left && right
    })
}

/// проверенные условия фильтрации: только идентификаторы значений свойств, без пользовательских строк
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria
{
    pub name: Option<String>,
    pub cjk_definition: Option<String>,
    pub blocks: Vec<u32>,
    /// категории с раскрытыми группами (L -> Lu, Ll, Lt, Lm, Lo)
    pub categories: Vec<u32>,
    pub ages: Vec<u32>,
    pub script_names: Vec<String>,
    pub script_ids: Vec<u32>,
    pub bidi_classes: Vec<u32>,
    pub decomposition_types: Vec<u32>,
    pub line_breaks: Vec<u32>,
    pub combining_classes: Vec<u32>,
    pub numeric_types: Vec<u32>,
    pub joining_types: Vec<u32>,
    pub flags: Vec<String>,
}

impl FilterCriteria
{
    pub fn builder(codespace: &Codespace) -> FilterBuilder<'_>
    {
        FilterBuilder {
            codespace,
            criteria: FilterCriteria::default(),
            provided: false,
            errors: vec![],
        }
    }

    /// условия выборки для таблицы; None - если строки таблицы не могут удовлетворять условиям
    pub fn predicates(&self, table: CharacterTable) -> Option<Vec<Predicate>>
    {
        if table == CharacterTable::NonUnihan && self.cjk_definition.is_some() {
            return None;
        }

        let mut predicates = vec![];

        if let Some(name) = &self.name {
            predicates.push(Predicate::NameMatches(name.clone()));
        }

        if let Some(definition) = &self.cjk_definition {
            predicates.push(Predicate::DescriptionMatches(definition.clone()));
        }

        let columns: [(&'static str, &Vec<u32>); 3] = [
            ("block_id", &self.blocks),
            ("general_category_id", &self.categories),
            ("age_id", &self.ages),
        ];

        for (column, ids) in columns {
            if !ids.is_empty() {
                predicates.push(Predicate::ColumnIn {
                    column,
                    ids: ids.clone(),
                });
            }
        }

        if !self.script_ids.is_empty() {
            predicates.push(Predicate::ScriptIn {
                names: self.script_names.clone(),
                ids: self.script_ids.clone(),
            });
        }

        let columns: [(&'static str, &Vec<u32>); 6] = [
            ("bidi_class_id", &self.bidi_classes),
            ("decomposition_type_id", &self.decomposition_types),
            ("line_break_id", &self.line_breaks),
            ("combining_class_id", &self.combining_classes),
            ("numeric_type_id", &self.numeric_types),
            ("joining_type_id", &self.joining_types),
        ];

        for (column, ids) in columns {
            if !ids.is_empty() {
                predicates.push(Predicate::ColumnIn {
                    column,
                    ids: ids.clone(),
                });
            }
        }

        if !self.flags.is_empty() {
            predicates.push(Predicate::AnyFlagSet(self.flags.clone()));
        }

        Some(predicates)
    }
}

/// сборка условий фильтрации из пользовательских значений
///
/// нераспознанные значения накапливаются по параметрам и возвращаются одной ошибкой из build()
pub struct FilterBuilder<'a>
{
    codespace: &'a Codespace,
    criteria: FilterCriteria,
    provided: bool,
    errors: Vec<ParameterError>,
}

impl<'a> FilterBuilder<'a>
{
    pub fn name(mut self, name: &str) -> Self
    {
        if !name.trim().is_empty() {
            self.criteria.name = Some(name.trim().to_owned());
            self.provided = true;
        }
        self
    }

    pub fn cjk_definition(mut self, definition: &str) -> Self
    {
        if !definition.trim().is_empty() {
            self.criteria.cjk_definition = Some(definition.trim().to_owned());
            self.provided = true;
        }
        self
    }

    pub fn blocks<S: AsRef<str>>(mut self, values: &[S]) -> Self
    {
        let codespace = self.codespace;

        if let Some(blocks) = self.match_all("block", values, move |v| codespace.loose_match_block_name(v)) {
            self.criteria.blocks = blocks.iter().map(|b| b.id).filter(|&id| id != 0).collect();
        }
        self
    }

    pub fn categories<S: AsRef<str>>(mut self, values: &[S]) -> Self
    {
        let codespace = self.codespace;
        let property_values = codespace.property_values();

        if let Some(matched) = self.match_property("category", "General_Category", values) {
            let mut ids: Vec<u32> = matched
                .iter()
                .flat_map(|&id| {
                    property_values
                        .value("General_Category", id)
                        .map(|v| v.category_values())
                        .unwrap_or_default()
                })
                .filter_map(|name| property_values.id_by_name("General_Category", name))
                .collect();

            ids.sort_unstable();
            ids.dedup();

            self.criteria.categories = ids;
        }
        self
    }

    pub fn ages<S: AsRef<str>>(mut self, values: &[S]) -> Self
    {
        if let Some(ids) = self.match_property("age", "Age", values) {
            self.criteria.ages = ids;
        }
        self
    }

    pub fn scripts<S: AsRef<str>>(mut self, values: &[S]) -> Self
    {
        let codespace = self.codespace;
        let property_values = codespace.property_values();

        if let Some(ids) = self.match_property("script", "Script", values) {
            self.criteria.script_names = ids
                .iter()
                .filter_map(|&id| property_values.value("Script", id))
                .map(|v| v.short_name.clone())
                .collect();
            self.criteria.script_ids = ids;
        }
        self
    }

    pub fn bidi_classes<S: AsRef<str>>(mut self, values: &[S]) -> Self
    {
        if let Some(ids) = self.match_property("bidi_class", "Bidi_Class", values) {
            self.criteria.bidi_classes = ids;
        }
        self
    }

    pub fn decomposition_types<S: AsRef<str>>(mut self, values: &[S]) -> Self
    {
        if let Some(ids) = self.match_property("decomp_type", "Decomposition_Type", values) {
            self.criteria.decomposition_types = ids;
        }
        self
    }

    pub fn line_breaks<S: AsRef<str>>(mut self, values: &[S]) -> Self
    {
        if let Some(ids) = self.match_property("line_break", "Line_Break", values) {
            self.criteria.line_breaks = ids;
        }
        self
    }

    pub fn combining_classes<S: AsRef<str>>(mut self, values: &[S]) -> Self
    {
        if let Some(ids) = self.match_property("ccc", "Canonical_Combining_Class", values) {
            self.criteria.combining_classes = ids;
        }
        self
    }

    pub fn numeric_types<S: AsRef<str>>(mut self, values: &[S]) -> Self
    {
        if let Some(ids) = self.match_property("num_type", "Numeric_Type", values) {
            self.criteria.numeric_types = ids;
        }
        self
    }

    pub fn joining_types<S: AsRef<str>>(mut self, values: &[S]) -> Self
    {
        if let Some(ids) = self.match_property("join_type", "Joining_Type", values) {
            self.criteria.joining_types = ids;
        }
        self
    }

    pub fn flags<S: AsRef<str>>(mut self, values: &[S]) -> Self
    {
        let codespace = self.codespace;
        let known = codespace.character_flags();

        let matched = self.match_all("flag", values, move |v| {
            let v = normalize_loosely(v);
            known.iter().find(|f| normalize_loosely(f) == v).cloned()
        });

        if let Some(flags) = matched {
            self.criteria.flags = flags;
        }
        self
    }

    /// проверенные условия; ошибка, если есть нераспознанные значения или не задано ни одного условия
    pub fn build(self) -> Result<FilterCriteria, ParameterError>
    {
        if !self.errors.is_empty() {
            return Err(ParameterError::Multiple(
                self.errors.iter().map(ToString::to_string).collect(),
            ));
        }

        match self.provided {
            true => Ok(self.criteria),
            false => Err(ParameterError::NoFilterSettings),
        }
    }

    /// значения перечислимого свойства -> идентификаторы
    fn match_property<S: AsRef<str>>(&mut self, parameter: &'static str, group: &str, values: &[S]) -> Option<Vec<u32>>
    {
        let codespace = self.codespace;
        let group = codespace.property_values().group(group);

        self.match_all(parameter, values, move |v| {
            group.and_then(|g| g.match_loosely(v)).map(|pv| pv.id)
        })
    }

    /// сопоставить все значения параметра; нераспознанные попадают в ошибку параметра
    fn match_all<S: AsRef<str>, T>(
        &mut self,
        parameter: &'static str,
        values: &[S],
        matcher: impl Fn(&str) -> Option<T>,
    ) -> Option<Vec<T>>
    {
        let values: Vec<&str> = values
            .iter()
            .map(|v| v.as_ref().trim())
            .filter(|v| !v.is_empty())
            .collect();

        if values.is_empty() {
            return None;
        }

        let mut matched = vec![];
        let mut invalid = vec![];

        for value in values {
            match matcher(value) {
                Some(m) => matched.push(m),
                None => invalid.push(value.to_owned()),
            }
        }

        if !invalid.is_empty() {
            self.errors.push(ParameterError::InvalidValues { parameter, invalid });
            return None;
        }

        self.provided = true;
        Some(matched)
    }
}
