use serde::Serialize;

use crate::codepoint::Codepoint;
use crate::error::PaginationError;

/// наибольший размер окна и страницы
pub const MAX_PAGE_SIZE: usize = 100;
/// размер окна и страницы по умолчанию
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// как выводить границы области в сообщениях об ошибках
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeUnit
{
    /// идентификаторы блоков
    BlockId,
    /// кодпоинты, U+XXXX
    Codepoint,
}

impl ScopeUnit
{
    fn format(&self, value: i64) -> String
    {
        match (self, u32::try_from(value)) {
            (ScopeUnit::Codepoint, Ok(code)) => Codepoint::new(code).to_string(),
            _ => value.to_string(),
        }
    }
}

/// упорядоченная последовательность идентификаторов [lo, hi], по которой перемещается курсор
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope
{
    pub lo: u32,
    pub hi: u32,
    /// описание области для сообщений об ошибках: "the Unicode plane (Basic Multilingual Plane)"
    pub label: String,
    pub unit: ScopeUnit,
}

impl Scope
{
    pub fn new(lo: u32, hi: u32, label: impl Into<String>, unit: ScopeUnit) -> Self
    {
        Self {
            lo,
            hi,
            label: label.into(),
            unit,
        }
    }
}

/// окно [start, stop) внутри области
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CursorWindow
{
    pub start: u32,
    pub stop: u32,
    pub has_more: bool,
}

impl CursorWindow
{
    pub fn ids(&self) -> core::ops::Range<u32>
    {
        self.start .. self.stop
    }
}

/// окно по курсору: после starting_after или перед ending_before, не более limit значений
pub fn paginate_cursor(
    scope: &Scope,
    starting_after: Option<u32>,
    ending_before: Option<u32>,
    limit: usize,
) -> Result<CursorWindow, PaginationError>
{
    if starting_after.is_some() && ending_before.is_some() {
        return Err(PaginationError::BothCursors);
    }

    check_size("limit", limit, MAX_PAGE_SIZE)?;

    let lo = scope.lo as i64;
    let hi = scope.hi as i64;
    let limit = limit as i64;

    let start = match (starting_after, ending_before) {
        (Some(after), _) => after as i64 + 1,
        (_, Some(before)) => before as i64 - limit,
        _ => lo,
    };

    if start < lo || start > hi {
        return Err(PaginationError::StartOutOfScope {
            start: scope.unit.format(start),
            scope: scope.label.clone(),
            first: scope.unit.format(lo),
            last: scope.unit.format(hi),
        });
    }

    let stop = (hi + 1).min(start + limit);

    Ok(CursorWindow {
        start: start as u32,
        stop: stop as u32,
        has_more: stop <= hi,
    })
}

/// страница списка результатов поиска
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow
{
    pub total_results: usize,
    /// номер страницы, начиная с 1; 0 - если результатов нет
    pub current_page: usize,
    #[serde(skip)]
    pub start: usize,
    #[serde(skip)]
    pub end: usize,
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<usize>,
}

impl PageWindow
{
    pub fn range(&self) -> core::ops::Range<usize>
    {
        self.start .. self.end
    }

    pub fn len(&self) -> usize
    {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool
    {
        self.start == self.end
    }
}

/// страница page (с 1) из total результатов по per_page на странице
pub fn paginate_page(total: usize, per_page: usize, page: usize) -> Result<PageWindow, PaginationError>
{
    check_size("per_page", per_page, MAX_PAGE_SIZE)?;

    if total == 0 {
        return Ok(PageWindow {
            total_results: 0,
            current_page: 0,
            start: 0,
            end: 0,
            has_more: false,
            next_page: None,
        });
    }

    let total_pages = (total + per_page - 1) / per_page;

    check_size("page", page, usize::MAX)?;

    if page > total_pages {
        return Err(PaginationError::PageOutOfRange { page, total_pages });
    }

    let start = per_page * (page - 1);
    let end = total.min(start + per_page);
    let has_more = page < total_pages;

    Ok(PageWindow {
        total_results: total,
        current_page: page,
        start,
        end,
        has_more,
        next_page: has_more.then_some(page + 1),
    })
}

fn check_size(name: &'static str, value: usize, max: usize) -> Result<(), PaginationError>
{
    match (1 ..= max).contains(&value) {
        true => Ok(()),
        false => Err(PaginationError::InvalidSize {
            name,
            value,
            min: 1,
            max,
        }),
    }
}
