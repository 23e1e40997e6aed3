use serde::{Deserialize, Serialize};

use crate::codepoint::MAX_CODEPOINT;

/// плоскость Unicode, 65536 кодпоинтов, непрерывный диапазон идентификаторов блоков
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plane
{
    /// номер плоскости, -1 у пустой плоскости и у псевдоплоскости "все символы"
    pub number: i32,
    pub name: String,
    pub abbreviation: String,
    #[serde(rename = "start_dec")]
    pub start: u32,
    #[serde(rename = "finish_dec")]
    pub finish: u32,
    pub start_block_id: u32,
    pub finish_block_id: u32,
    #[serde(default)]
    pub total_allocated: u32,
    #[serde(default)]
    pub total_defined: u32,
}

/// плоскости, которые используются, если в данных версии нет planes.json
const DEFAULT_PLANES: &[(i32, &str, &str)] = &[
    (0, "Basic Multilingual Plane", "BMP"),
    (1, "Supplementary Multilingual Plane", "SMP"),
    (2, "Supplementary Ideographic Plane", "SIP"),
    (3, "Tertiary Ideographic Plane", "TIP"),
    (14, "Supplementary Special-purpose Plane", "SSP"),
    (15, "Supplementary Private Use Area-A", "SPUA-A"),
    (16, "Supplementary Private Use Area-B", "SPUA-B"),
];

impl Plane
{
    /// плоскость-заглушка
    pub fn null() -> Self
    {
        Self {
            number: -1,
            name: "None".to_owned(),
            abbreviation: "None".to_owned(),
            start: 0,
            finish: 0,
            start_block_id: 0,
            finish_block_id: 0,
            total_allocated: 0,
            total_defined: 0,
        }
    }

    /// плоскости 4 ..= 13, в которых нет ни одного блока
    pub fn unassigned(number: i32) -> Self
    {
        let start = (number as u32) << 16;

        Self {
            number,
            name: "Unassigned Plane".to_owned(),
            abbreviation: "N/A".to_owned(),
            start,
            finish: start | 0xFFFF,
            start_block_id: 0,
            finish_block_id: 0,
            total_allocated: 0,
            total_defined: 0,
        }
    }

    /// псевдоплоскость, включающая все пространство Unicode
    pub fn all_characters(finish_block_id: u32, total_defined: u32) -> Self
    {
        Self {
            number: -1,
            name: "All Unicode Characters".to_owned(),
            abbreviation: "ALL".to_owned(),
            start: 0,
            finish: MAX_CODEPOINT,
            start_block_id: 1,
            finish_block_id,
            total_allocated: MAX_CODEPOINT + 1,
            total_defined,
        }
    }

    /// семь плоскостей с назначенными блоками, без информации о блоках
    pub fn defaults() -> Vec<Self>
    {
        DEFAULT_PLANES
            .iter()
            .map(|&(number, name, abbreviation)| {
                let start = (number as u32) << 16;

                Self {
                    number,
                    name: name.to_owned(),
                    abbreviation: abbreviation.to_owned(),
                    start,
                    finish: start | 0xFFFF,
                    start_block_id: 0,
                    finish_block_id: 0,
                    total_allocated: 0,
                    total_defined: 0,
                }
            })
            .collect()
    }

    #[inline]
    pub fn is_null(&self) -> bool
    {
        self.number < 0 && self.abbreviation == "None"
    }

    #[inline]
    pub fn contains_block(&self, block_id: u32) -> bool
    {
        (self.start_block_id ..= self.finish_block_id).contains(&block_id)
    }
}
