use indexmap::IndexMap;

use crate::codepoint::*;
use crate::codespace::Codespace;
use crate::error::StoreError;
use crate::store::{CharacterStore, CharacterTable, ColumnValue, Row};

pub use definitions::{definitions_for, required_columns, PropertyDefinition, PropertyKind};
pub use group::{parse_property_groups, PropertyGroup};
pub use trim::is_emoji_flag;
pub use value::{Number, Value};

pub(crate) mod defaults;
mod definitions;
mod group;
mod trim;
mod value;

/// свойства символа: название -> значение, в порядке групп и определений
pub type PropertyMap = IndexMap<String, Value>;

/// свойства кодпоинта для запрошенных групп
pub(crate) fn resolve(
    codespace: &Codespace,
    store: &dyn CharacterStore,
    codepoint: Codepoint,
    requested: &[PropertyGroup],
    verbose: bool,
) -> Result<PropertyMap, StoreError>
{
    let code = codepoint.code();
    let unihan = codespace.classify(codepoint).is_unihan();
    let groups = PropertyGroup::select(requested, unihan);

    let table = match codespace.classifier().is_non_unihan(code) {
        true => CharacterTable::NonUnihan,
        false => CharacterTable::Unihan,
    };

    let columns = required_columns(&groups);

    tracing::debug!(
        codepoint = %codepoint,
        table = table.name(),
        groups = ?groups,
        columns = columns.len(),
        "resolving character properties"
    );

    let row = match columns.is_empty() {
        true => None,
        false => store.fetch_columns(table, code, &columns)?,
    };

    if row.is_none() && !columns.is_empty() {
        tracing::debug!(codepoint = %codepoint, "no stored row, using default values");
    }

    let row = row.unwrap_or_default();
    let resolver = ValueResolver {
        codespace,
        codepoint,
        row: &row,
    };

    let property_values = codespace.property_values();
    let mut props = PropertyMap::new();

    for definition in groups.iter().flat_map(|&g| definitions_for(g)) {
        // группы значений, отсутствующие в версии Unicode, в результат не попадают
        if let Some(group) = definition.unicode_group {
            if property_values.is_missing(group) {
                continue;
            }
        }

        props.insert(definition.name_out.to_owned(), resolver.value(definition));
    }

    if !verbose {
        let codepoint_string = codepoint.to_string();
        let mapped_self = codespace.mapped_codepoint(codepoint);

        trim::trim_irrelevant(
            &mut props,
            &trim::TrimContext {
                codepoint: &codepoint_string,
                mapped_self: &mapped_self,
                unihan,
                flags: codespace.character_flags(),
            },
        );
    }

    Ok(props)
}

/// получение значений свойств из строки хранилища и справочных данных
struct ValueResolver<'a>
{
    codespace: &'a Codespace,
    codepoint: Codepoint,
    row: &'a Row,
}

impl<'a> ValueResolver<'a>
{
    fn column(&self, name: &str) -> Option<&'a ColumnValue>
    {
        self.row.get(name)
    }

    fn text(&self, name: &str) -> &'a str
    {
        self.column(name).and_then(ColumnValue::as_str).unwrap_or("")
    }

    fn flag(&self, name: &str) -> bool
    {
        self.column(name).map_or(false, ColumnValue::as_bool)
    }

    fn integer(&self, name: &str) -> i64
    {
        match self.column(name) {
            Some(ColumnValue::Text(s)) => s.trim().parse().unwrap_or(0),
            Some(value) => value.as_int().unwrap_or(0),
            None => 0,
        }
    }

    fn id(&self, name: &str) -> Option<u32>
    {
        self.column(name)
            .and_then(ColumnValue::as_int)
            .and_then(|id| u32::try_from(id).ok())
    }

    fn value(&self, definition: &PropertyDefinition) -> Value
    {
        let codespace = self.codespace;
        let codepoint = self.codepoint;
        let name = definition.name_in;

        match definition.kind {
            PropertyKind::Glyph => codepoint.glyph().into(),
            PropertyKind::Name => codespace.character_name(codepoint).into(),
            PropertyKind::Codepoint => codepoint.to_string().into(),
            PropertyKind::UriEncoded => uri_encoded(codepoint).into(),
            PropertyKind::Block => codespace.block_containing(codepoint).long_name.as_str().into(),
            PropertyKind::Plane => {
                let block = codespace.block_containing(codepoint);
                codespace.plane_containing(block.id).abbreviation.as_str().into()
            }
            PropertyKind::HtmlEntities => html_entities(codepoint).into(),
            PropertyKind::Utf8 => utf8_value(codepoint).into(),
            PropertyKind::Utf8Hex => utf8_hex_bytes(codepoint).into(),
            PropertyKind::Utf8Dec => Value::IntegerList(utf8_dec_bytes(codepoint)),
            PropertyKind::Utf16 => utf16_value(codepoint).into(),
            PropertyKind::Utf16Hex => utf16_hex_bytes(codepoint).into(),
            PropertyKind::Utf16Dec => Value::IntegerList(utf16_dec_bytes(codepoint)),
            PropertyKind::Utf32 => utf32_value(codepoint).into(),
            PropertyKind::Utf32Hex => utf32_hex_bytes(codepoint).into(),
            PropertyKind::Utf32Dec => Value::IntegerList(utf32_dec_bytes(codepoint)),
            PropertyKind::Enumerated(group) => codespace
                .display_name_for_property_value(group, self.id(name), codepoint)
                .into(),
            PropertyKind::Text => self.text(name).into(),
            PropertyKind::Flag => self.flag(name).into(),
            PropertyKind::Integer => self.integer(name).into(),
            PropertyKind::TextList => Value::TextList(split_words(self.text(name))),
            PropertyKind::Numbers(source) => Value::Numbers(
                self.text(source)
                    .split(' ')
                    .filter_map(Number::parse)
                    .collect(),
            ),
            PropertyKind::Mapped => codespace.mapped_codepoint_from_hex(self.text(name)).into(),
            PropertyKind::MappedList => {
                let source = self.text(name);

                match source.is_empty() {
                    true => Value::TextList(vec![String::new()]),
                    false => Value::TextList(
                        find_prefixed_codepoints(source)
                            .into_iter()
                            .map(|c| codespace.mapped_codepoint(c))
                            .collect(),
                    ),
                }
            }
            PropertyKind::QuickCheck => quick_check(self.column(name)).into(),
            PropertyKind::ScriptExtensions => match self.column(name) {
                Some(_) => Value::TextList(self.script_extensions(self.text(name))),
                None => Value::TextList(vec![codespace.display_name_for_property_value(
                    "Script",
                    None,
                    codepoint,
                )]),
            },
            PropertyKind::ExtendedPictographic => match self.column(name) {
                Some(value) => value.as_bool().into(),
                None => defaults::default_extended_pictographic(codepoint).into(),
            },
        }
    }

    /// коды письменностей через пробел -> названия; если хотя бы один код неизвестен - ["N/A"]
    fn script_extensions(&self, source: &str) -> Vec<String>
    {
        let property_values = self.codespace.property_values();
        let mut ids = vec![];

        for script in source.split(' ') {
            match property_values.id_by_name("Script", script) {
                Some(id) if id != 0 => ids.push(id),
                _ => return vec!["N/A".to_owned()],
            }
        }

        ids.into_iter()
            .map(|id| {
                self.codespace
                    .display_name_for_property_value("Script", Some(id), self.codepoint)
            })
            .collect()
    }
}

fn split_words(source: &str) -> Vec<String>
{
    match source.is_empty() {
        true => vec![],
        false => source.split(' ').map(str::to_owned).collect(),
    }
}

/// значения NF*_QC: 1 - Yes, 0 - No, -1 - Maybe; без значения - Yes
fn quick_check(value: Option<&ColumnValue>) -> &'static str
{
    let code = match value {
        None => return "Yes",
        Some(ColumnValue::Text(s)) => match s.as_str() {
            "Y" => 1,
            "M" => -1,
            _ => 0,
        },
        Some(value) => value.as_int().unwrap_or(0),
    };

    match code {
        1 => "Yes",
        -1 => "Maybe",
        _ => "No",
    }
}
