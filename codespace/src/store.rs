use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::StoreError;
use crate::filter::Predicate;
use crate::properties::{definitions_for, PropertyGroup};

/// значение колонки таблицы свойств символов
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValue
{
    Int(i64),
    Text(String),
    Bool(bool),
}

impl ColumnValue
{
    pub fn as_int(&self) -> Option<i64>
    {
        match self {
            ColumnValue::Int(i) => Some(*i),
            ColumnValue::Bool(b) => Some(*b as i64),
            ColumnValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str>
    {
        match self {
            ColumnValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// булево значение, числа и строки приводятся как в SQL
    pub fn as_bool(&self) -> bool
    {
        match self {
            ColumnValue::Bool(b) => *b,
            ColumnValue::Int(i) => *i != 0,
            ColumnValue::Text(s) => !s.is_empty(),
        }
    }
}

impl From<i64> for ColumnValue
{
    fn from(value: i64) -> Self
    {
        ColumnValue::Int(value)
    }
}

impl From<bool> for ColumnValue
{
    fn from(value: bool) -> Self
    {
        ColumnValue::Bool(value)
    }
}

impl From<&str> for ColumnValue
{
    fn from(value: &str) -> Self
    {
        ColumnValue::Text(value.to_owned())
    }
}

/// строка таблицы: колонка -> значение
pub type Row = HashMap<String, ColumnValue>;

/// таблица, в которой хранятся свойства символа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterTable
{
    NonUnihan,
    Unihan,
}

impl CharacterTable
{
    pub const ALL: [CharacterTable; 2] = [CharacterTable::NonUnihan, CharacterTable::Unihan];

    pub fn name(&self) -> &'static str
    {
        match self {
            CharacterTable::NonUnihan => "character",
            CharacterTable::Unihan => "character_unihan",
        }
    }

    /// все колонки, которые могут понадобиться при получении свойств или фильтрации
    pub fn columns(&self) -> HashSet<&'static str>
    {
        let groups = match self {
            CharacterTable::NonUnihan => PropertyGroup::all_non_unihan(),
            CharacterTable::Unihan => PropertyGroup::all_unihan(),
        };

        let text_column = match self {
            CharacterTable::NonUnihan => "name",
            CharacterTable::Unihan => "description",
        };

        groups
            .into_iter()
            .flat_map(definitions_for)
            .filter_map(|d| d.column())
            .chain(["block_id", text_column])
            .collect()
    }
}

/// хранилище свойств символов, доступное только на чтение
///
/// каждый запрос независим, реализация может обслуживать запросы из нескольких потоков
pub trait CharacterStore: Send + Sync
{
    /// значения указанных колонок для кодпоинта, None - если строки нет
    fn fetch_columns(&self, table: CharacterTable, code: u32, columns: &[&str]) -> Result<Option<Row>, StoreError>;

    /// кодпоинты строк, удовлетворяющих всем условиям, по возрастанию
    fn select_codepoints(&self, table: CharacterTable, predicates: &[Predicate]) -> Result<Vec<u32>, StoreError>;
}

/// хранилище в памяти
#[derive(Debug, Default)]
pub struct MemoryStore
{
    tables: HashMap<CharacterTable, BTreeMap<u32, Row>>,
}

impl MemoryStore
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// добавить (или заменить) строку таблицы
    pub fn insert(&mut self, table: CharacterTable, code: u32, row: impl IntoIterator<Item = (String, ColumnValue)>)
    {
        self.tables
            .entry(table)
            .or_default()
            .insert(code, row.into_iter().collect());
    }

    pub fn with_row<K: Into<String>>(
        mut self,
        table: CharacterTable,
        code: u32,
        row: impl IntoIterator<Item = (K, ColumnValue)>,
    ) -> Self
    {
        self.insert(table, code, row.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    pub fn len(&self, table: CharacterTable) -> usize
    {
        self.tables.get(&table).map_or(0, |rows| rows.len())
    }
}

impl CharacterStore for MemoryStore
{
    fn fetch_columns(&self, table: CharacterTable, code: u32, columns: &[&str]) -> Result<Option<Row>, StoreError>
    {
        let known = table.columns();

        if let Some(column) = columns.iter().find(|c| !known.contains(**c)) {
            return Err(StoreError::UnknownColumn {
                table: table.name(),
                column: column.to_string(),
            });
        }

        let row = match self.tables.get(&table).and_then(|rows| rows.get(&code)) {
            Some(row) => row,
            None => return Ok(None),
        };

        Ok(Some(
            columns
                .iter()
                .filter_map(|&c| row.get(c).map(|v| (c.to_owned(), v.clone())))
                .collect(),
        ))
    }

    fn select_codepoints(&self, table: CharacterTable, predicates: &[Predicate]) -> Result<Vec<u32>, StoreError>
    {
        let rows = match self.tables.get(&table) {
            Some(rows) => rows,
            None => return Ok(vec![]),
        };

        Ok(rows
            .iter()
            .filter(|(_, row)| predicates.iter().all(|p| p.matches(row)))
            .map(|(&code, _)| code)
            .collect())
    }
}
