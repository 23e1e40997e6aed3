use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::config::*;
use crate::error::LoadError;

pub use block::Block;
pub use plane::Plane;
pub use property_values::*;

mod block;
mod plane;
mod property_values;

/// справочные данные одной версии Unicode, после загрузки не изменяются
#[derive(Debug, Default)]
pub struct ReferenceData
{
    pub unicode_version: String,
    /// плоскости, отсортированы по номеру
    pub planes: Vec<Plane>,
    /// блоки, отсортированы по первому кодпоинту
    pub blocks: Vec<Block>,
    pub property_values: PropertyValues,
    /// названия символов, не являющихся иероглифами
    pub character_names: HashMap<u32, String>,
    /// иероглифы CJK: кодпоинт -> идентификатор блока
    pub unihan_characters: HashMap<u32, u32>,
    /// тангутские иероглифы и компоненты: кодпоинт -> идентификатор блока
    pub tangut_characters: HashMap<u32, u32>,
}

impl ReferenceData
{
    /// загрузить JSON-файлы версии, указанной в настройках
    pub fn load(settings: &Settings) -> Result<Self, LoadError>
    {
        let folder = settings.json_folder();

        let planes = match folder.join(PLANES_JSON).exists() {
            true => read_json(&folder, PLANES_JSON)?,
            false => {
                tracing::warn!(
                    folder = %folder.display(),
                    "{} not found, using default plane list",
                    PLANES_JSON
                );
                Plane::defaults()
            }
        };

        let property_values: PropertyValuesFile = read_json(&folder, PROP_VALUES_JSON)?;

        let data = Self::new(
            &settings.unicode_version,
            planes,
            read_json(&folder, BLOCKS_JSON)?,
            property_values.into(),
            read_json(&folder, CHAR_NAME_MAP_JSON)?,
            read_optional_json(&folder, UNIHAN_CHARS_JSON)?,
            read_optional_json(&folder, TANGUT_CHARS_JSON)?,
        )?;

        tracing::info!(
            version = %data.unicode_version,
            planes = data.planes.len(),
            blocks = data.blocks.len(),
            property_groups = data.property_values.group_count(),
            characters = data.character_names.len(),
            unihan = data.unihan_characters.len(),
            tangut = data.tangut_characters.len(),
            "loaded unicode reference data"
        );

        Ok(data)
    }

    /// собрать справочные данные из готовых таблиц, блоки и плоскости сортируются,
    /// пересекающиеся блоки считаются ошибкой
    pub fn new(
        unicode_version: &str,
        mut planes: Vec<Plane>,
        mut blocks: Vec<Block>,
        property_values: PropertyValues,
        character_names: HashMap<u32, String>,
        unihan_characters: HashMap<u32, u32>,
        tangut_characters: HashMap<u32, u32>,
    ) -> Result<Self, LoadError>
    {
        planes.sort_by_key(|p| p.number);
        blocks.sort_by_key(|b| b.start);

        for pair in blocks.windows(2) {
            if pair[1].start <= pair[0].finish {
                return Err(LoadError::InvalidData {
                    file: BLOCKS_JSON,
                    message: format!(
                        "blocks '{}' and '{}' overlap",
                        pair[0].long_name, pair[1].long_name
                    ),
                });
            }
        }

        if let Some(block) = blocks.iter().find(|b| b.id == 0 || b.start > b.finish) {
            return Err(LoadError::InvalidData {
                file: BLOCKS_JSON,
                message: format!("block '{}' has an invalid id or range", block.long_name),
            });
        }

        Ok(Self {
            unicode_version: unicode_version.to_owned(),
            planes,
            blocks,
            property_values,
            character_names,
            unihan_characters,
            tangut_characters,
        })
    }
}

fn read_json<T: DeserializeOwned>(folder: &Path, file: &str) -> Result<T, LoadError>
{
    let path = folder.join(file);

    let text = fs::read_to_string(&path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| LoadError::Json { path, source })
}

/// файлы, которых нет в старых версиях Unicode (например, тангутские символы до 9.0.0)
fn read_optional_json<T: DeserializeOwned + Default>(folder: &Path, file: &str) -> Result<T, LoadError>
{
    match folder.join(file).exists() {
        true => read_json(folder, file),
        false => {
            tracing::debug!(folder = %folder.display(), "{} not found, assuming empty", file);
            Ok(T::default())
        }
    }
}
