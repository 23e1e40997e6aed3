use std::path::PathBuf;

use thiserror::Error;

/// общий тип ошибки библиотеки
#[derive(Debug, Error)]
pub enum Error
{
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Codepoint(#[from] CodepointError),
    #[error(transparent)]
    Pagination(#[from] PaginationError),
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// ошибки загрузки справочных данных
#[derive(Debug, Error)]
pub enum LoadError
{
    #[error("failed to read {}: {source}", .path.display())]
    Io
    {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Json
    {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Unicode version {0} is not supported")]
    UnsupportedVersion(String),
    #[error("invalid reference data in {file}: {message}")]
    InvalidData
    {
        file: &'static str, message: String
    },
}

/// ошибки разбора строкового представления кодпоинта
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodepointError
{
    #[error("'{0}' is not a valid codepoint: values with the 'U+' prefix must contain at least 4 hex digits (e.g. U+0041)")]
    NeedsLeadingZeros(String),
    #[error("'{value}' contains {} invalid hexadecimal character{}: {}", .invalid.len(), plural(.invalid.len()), .invalid.join(", "))]
    InvalidHexDigits
    {
        value: String, invalid: Vec<String>
    },
    #[error("'{0}' is outside the range of valid codepoints (U+0000 ..= U+10FFFF)")]
    OutOfRange(String),
    #[error("'{0}' is not a valid codepoint, expected one of the formats U+XXXX, 0xXXXX or XXXX")]
    Unrecognized(String),
}

/// ошибки расчета окна выборки
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError
{
    #[error("Request contained values for BOTH 'ending_before' and 'starting_after', you must specify ONLY ONE of these two values.")]
    BothCursors,
    #[error("The starting value ({start}) is not within the range of values which comprise {scope}: first: {first}, last: {last}")]
    StartOutOfScope
    {
        start: String,
        scope: String,
        first: String,
        last: String,
    },
    #[error("Request for page #{page} is invalid since there {} {total_pages} total page{}.", there_are(*.total_pages), plural(*.total_pages))]
    PageOutOfRange
    {
        page: usize, total_pages: usize
    },
    #[error("'{name}' must be between {min} and {max}, got {value}")]
    InvalidSize
    {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

/// ошибки сопоставления пользовательских значений параметров
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError
{
    #[error("{} value{} provided for the '{parameter}' parameter {} invalid: [{}]", .invalid.len(), plural(.invalid.len()), is_are(.invalid.len()), quoted(.invalid))]
    InvalidValues
    {
        parameter: &'static str,
        invalid: Vec<String>,
    },
    #[error("Invalid values were provided for the following {} parameter{}:\n\n{}", .0.len(), plural(.0.len()), .0.join("\n\n"))]
    Multiple(Vec<String>),
    #[error("no filter settings were provided")]
    NoFilterSettings,
}

/// ошибки хранилища свойств символов
#[derive(Debug, Error)]
pub enum StoreError
{
    #[error("column '{column}' is not available in the {table} table")]
    UnknownColumn
    {
        table: &'static str, column: String
    },
    #[error("store backend failure: {0}")]
    Backend(String),
}

fn plural(n: usize) -> &'static str
{
    match n == 1 {
        true => "",
        false => "s",
    }
}

fn is_are(n: usize) -> &'static str
{
    match n == 1 {
        true => "is",
        false => "are",
    }
}

fn there_are(n: usize) -> &'static str
{
    match n == 1 {
        true => "is only",
        false => "are",
    }
}

fn quoted(values: &[String]) -> String
{
    values
        .iter()
        .map(|v| format!("'{}'", v))
        .collect::<Vec<_>>()
        .join(", ")
}
