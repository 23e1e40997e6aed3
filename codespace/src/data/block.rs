use serde::{Deserialize, Serialize};

use crate::codepoint::MAX_CODEPOINT;

/// блок Unicode - именованный непрерывный диапазон кодпоинтов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block
{
    pub id: u32,
    pub long_name: String,
    pub short_name: String,
    /// -1 у пустого блока
    pub plane_id: i32,
    /// первый кодпоинт блока
    #[serde(rename = "start_dec")]
    pub start: u32,
    /// последний кодпоинт блока
    #[serde(rename = "finish_dec")]
    pub finish: u32,
    /// размер блока
    #[serde(default)]
    pub total_allocated: u32,
    /// количество назначенных кодпоинтов
    #[serde(default)]
    pub total_defined: u32,
}

impl Block
{
    /// блок-заглушка для кодпоинтов, не входящих ни в один блок
    pub fn null() -> Self
    {
        Self {
            id: 0,
            long_name: "None".to_owned(),
            short_name: "None".to_owned(),
            plane_id: -1,
            start: 0,
            finish: 0,
            total_allocated: 0,
            total_defined: 0,
        }
    }

    /// псевдоблок, включающий все пространство Unicode
    pub fn all_characters(total_defined: u32) -> Self
    {
        Self {
            id: 0,
            long_name: "All Unicode Characters".to_owned(),
            short_name: "All".to_owned(),
            plane_id: -1,
            start: 0,
            finish: MAX_CODEPOINT,
            total_allocated: MAX_CODEPOINT + 1,
            total_defined,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool
    {
        self.id == 0
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        (self.start ..= self.finish).contains(&code)
    }
}
