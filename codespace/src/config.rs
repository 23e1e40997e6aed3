use std::env;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::LoadError;

/// поддерживаемые версии Unicode и даты их выхода
pub const SUPPORTED_UNICODE_VERSIONS: &[(&str, &str)] = &[
    ("5.1.0", "2008-04-04"),
    ("5.2.0", "2009-10-01"),
    ("6.0.0", "2010-10-11"),
    ("6.1.0", "2012-01-31"),
    ("6.2.0", "2012-09-26"),
    ("6.3.0", "2013-09-30"),
    ("7.0.0", "2014-06-16"),
    ("8.0.0", "2015-06-17"),
    ("9.0.0", "2016-06-21"),
    ("10.0.0", "2017-06-20"),
    ("11.0.0", "2018-06-05"),
    ("12.0.0", "2019-03-05"),
    ("12.1.0", "2019-05-11"),
    ("13.0.0", "2020-03-10"),
    ("14.0.0", "2021-09-14"),
    ("15.0.0", "2022-09-13"),
    ("15.1.0", "2023-09-12"),
    ("16.0.0", "2024-09-10"),
    ("17.0.0", "2025-09-05"),
];

pub const ENV_UNICODE_VERSION: &str = "UNICODE_VERSION";
pub const ENV_DATA_DIR: &str = "UNICODE_DATA_DIR";

const DEFAULT_DATA_DIR: &str = "data";

pub const PLANES_JSON: &str = "planes.json";
pub const BLOCKS_JSON: &str = "blocks.json";
pub const PROP_VALUES_JSON: &str = "prop_values.json";
pub const CHAR_NAME_MAP_JSON: &str = "char_name_map.json";
pub const UNIHAN_CHARS_JSON: &str = "unihan_chars.json";
pub const TANGUT_CHARS_JSON: &str = "tangut_chars.json";

/// настройки загрузки справочных данных
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings
{
    pub unicode_version: String,
    pub data_dir: PathBuf,
}

impl Default for Settings
{
    fn default() -> Self
    {
        Self {
            unicode_version: latest_unicode_version().to_owned(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl Settings
{
    pub fn new(unicode_version: &str, data_dir: impl Into<PathBuf>) -> Result<Self, LoadError>
    {
        if !is_supported_version(unicode_version) {
            return Err(LoadError::UnsupportedVersion(unicode_version.to_owned()));
        }

        Ok(Self {
            unicode_version: unicode_version.to_owned(),
            data_dir: data_dir.into(),
        })
    }

    /// UNICODE_VERSION и UNICODE_DATA_DIR из окружения, для отсутствующих - значения по умолчанию
    pub fn from_env() -> Result<Self, LoadError>
    {
        let defaults = Self::default();

        let version = env::var(ENV_UNICODE_VERSION).unwrap_or(defaults.unicode_version);
        let data_dir = env::var_os(ENV_DATA_DIR)
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        Self::new(&version, data_dir)
    }

    /// {data_dir}/unicode_versions/{version}/json
    pub fn json_folder(&self) -> PathBuf
    {
        self.data_dir
            .join("unicode_versions")
            .join(&self.unicode_version)
            .join("json")
    }

    pub fn json_file(&self, name: &str) -> PathBuf
    {
        self.json_folder().join(name)
    }
}

pub fn is_supported_version(version: &str) -> bool
{
    SUPPORTED_UNICODE_VERSIONS.iter().any(|&(v, _)| v == version)
}

pub fn latest_unicode_version() -> &'static str
{
    SUPPORTED_UNICODE_VERSIONS
        .last()
        .map(|&(v, _)| v)
        .unwrap_or("17.0.0")
}
