#[macro_use]
extern crate lazy_static;

pub mod codepoint;
pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod properties;
pub mod search;
pub mod store;

mod character_type;
mod classifier;
mod codespace;
mod interval;

pub use character_type::CharacterType;
pub use classifier::Classifier;
pub use codepoint::Codepoint;
pub use codepoint::MAX_CODEPOINT;
pub use codespace::Codespace;
pub use config::Settings;
pub use interval::RangeSet;

pub use error::Error;
pub use error::Result;

pub use filter::FilterCriteria;
pub use pagination::{paginate_cursor, paginate_page, CursorWindow, PageWindow, Scope, ScopeUnit};
pub use properties::{parse_property_groups, PropertyGroup, PropertyMap, Value};
pub use search::{CorpusKind, SearchResult};
pub use store::{CharacterStore, CharacterTable, ColumnValue, MemoryStore, Row};
