use std::collections::HashSet;

use crate::character_type::CharacterType;
use crate::classifier::Classifier;
use crate::codepoint::Codepoint;
use crate::config::Settings;
use crate::data::*;
use crate::error::{LoadError, StoreError};
use crate::filter::FilterCriteria;
use crate::interval::{find_block, find_plane};
use crate::pagination::{Scope, ScopeUnit};
use crate::properties::defaults::{default_value_name, DEFAULT_VO_UPRIGHT_BLOCK_NAMES};
use crate::properties::{definitions_for, PropertyGroup, PropertyKind, PropertyMap};
use crate::search::{CorpusKind, SearchCorpus, SearchResult};
use crate::store::{CharacterStore, CharacterTable};

/// пространство кодпоинтов одной версии Unicode: справочные данные и построенные по ним индексы
///
/// после создания не изменяется, может использоваться из нескольких потоков без блокировок
#[derive(Debug)]
pub struct Codespace
{
    data: ReferenceData,
    classifier: Classifier,
    null_block: Block,
    null_plane: Plane,
    block_corpus: SearchCorpus,
    character_corpus: SearchCorpus,
    vertical_upright_blocks: HashSet<u32>,
    /// булевы свойства, которые хранятся в колонках таблиц символов, по алфавиту
    character_flags: Vec<String>,
}

impl Codespace
{
    /// загрузить справочные данные версии и построить индексы
    pub fn load(settings: &Settings) -> Result<Self, LoadError>
    {
        ReferenceData::load(settings).map(Self::new)
    }

    pub fn new(data: ReferenceData) -> Self
    {
        let classifier = Classifier::new(&data);

        let block_corpus = SearchCorpus::new(
            data.blocks
                .iter()
                .map(|b| (b.id, b.long_name.as_str())),
        );

        let character_corpus = SearchCorpus::new(
            data.character_names
                .iter()
                .map(|(&code, name)| (code, name.as_str())),
        );

        let mut codespace = Self {
            data,
            classifier,
            null_block: Block::null(),
            null_plane: Plane::null(),
            block_corpus,
            character_corpus,
            vertical_upright_blocks: HashSet::new(),
            character_flags: vec![],
        };

        codespace.vertical_upright_blocks = DEFAULT_VO_UPRIGHT_BLOCK_NAMES
            .iter()
            .filter_map(|name| codespace.loose_match_block_name(name))
            .map(|b| b.id)
            .collect();

        codespace.character_flags = character_flags(codespace.property_values());

        tracing::debug!(
            version = %codespace.data.unicode_version,
            flags = codespace.character_flags.len(),
            upright_blocks = codespace.vertical_upright_blocks.len(),
            "codespace indexes built"
        );

        codespace
    }

    pub fn unicode_version(&self) -> &str
    {
        &self.data.unicode_version
    }

    pub fn data(&self) -> &ReferenceData
    {
        &self.data
    }

    pub fn property_values(&self) -> &PropertyValues
    {
        &self.data.property_values
    }

    pub fn classifier(&self) -> &Classifier
    {
        &self.classifier
    }

    pub fn blocks(&self) -> &[Block]
    {
        &self.data.blocks
    }

    pub fn planes(&self) -> &[Plane]
    {
        &self.data.planes
    }

    /// названия булевых свойств, которые можно использовать как флаги фильтрации
    pub fn character_flags(&self) -> &[String]
    {
        &self.character_flags
    }

    #[inline]
    pub fn classify(&self, codepoint: Codepoint) -> CharacterType
    {
        self.classifier.classify(codepoint)
    }

    /// блок, содержащий кодпоинт, или блок-заглушка
    pub fn block_containing(&self, codepoint: Codepoint) -> &Block
    {
        find_block(&self.data.blocks, codepoint.code()).unwrap_or(&self.null_block)
    }

    /// плоскость, содержащая блок, или плоскость-заглушка
    pub fn plane_containing(&self, block_id: u32) -> &Plane
    {
        match block_id {
            0 => &self.null_plane,
            _ => find_plane(&self.data.planes, block_id).unwrap_or(&self.null_plane),
        }
    }

    pub fn block_by_id(&self, id: u32) -> Option<&Block>
    {
        self.data.blocks.iter().find(|b| b.id == id)
    }

    /// блок по полному или короткому названию без учета регистра, пробелов, "-" и "_"
    pub fn loose_match_block_name(&self, name: &str) -> Option<&Block>
    {
        let name = normalize_loosely(name);

        self.data
            .blocks
            .iter()
            .find(|b| normalize_loosely(&b.long_name) == name)
            .or_else(|| {
                self.data
                    .blocks
                    .iter()
                    .find(|b| normalize_loosely(&b.short_name) == name)
            })
    }

    /// плоскость по номеру; для 4 ..= 13 - неназначенная плоскость, для остальных номеров без данных - заглушка
    pub fn plane_by_number(&self, number: i32) -> Plane
    {
        if let Some(plane) = self.data.planes.iter().find(|p| p.number == number) {
            return plane.clone();
        }

        match number {
            4 ..= 13 => Plane::unassigned(number),
            _ => Plane::null(),
        }
    }

    pub fn plane_by_abbreviation(&self, abbreviation: &str) -> Option<&Plane>
    {
        self.data.planes.iter().find(|p| p.abbreviation == abbreviation)
    }

    #[inline]
    pub(crate) fn is_vertical_upright_block(&self, block_id: u32) -> bool
    {
        self.vertical_upright_blocks.contains(&block_id)
    }

    /// название символа; для иероглифов строится из кодпоинта, для неназначенных - из класса
    pub fn character_name(&self, codepoint: Codepoint) -> String
    {
        let code = codepoint.code();

        match self.classify(codepoint) {
            CharacterType::NonUnihan => self
                .data
                .character_names
                .get(&code)
                .cloned()
                .unwrap_or_default(),
            CharacterType::Unihan | CharacterType::Tangut => self.generic_name(codepoint),
            CharacterType::Invalid => format!("Invalid Codepoint ({})", codepoint),
            other => format!("<{}-{:04X}>", other.label(), code),
        }
    }

    fn generic_name(&self, codepoint: Codepoint) -> String
    {
        let code = codepoint.code();
        let block = self.block_containing(codepoint);

        if self.classifier.is_cjk_compatibility_block(block.id) {
            return format!("CJK COMPATIBILITY IDEOGRAPH-{:04X}", code);
        }

        if self.classifier.is_tangut_ideograph_block(block.id) {
            return format!("TANGUT IDEOGRAPH-{:04X}", code);
        }

        if self.classifier.is_tangut_component_block(block.id) {
            // нумерация компонентов сквозная, с 1, от начала первого блока компонентов
            let first = self
                .data
                .blocks
                .iter()
                .find(|b| self.classifier.is_tangut_component_block(b.id))
                .map_or(block.start, |b| b.start);

            return format!("TANGUT COMPONENT-{:03}", code - first + 1);
        }

        format!("CJK UNIFIED IDEOGRAPH-{:04X}", code)
    }

    /// "{символ} (U+XXXX NAME)"
    pub fn mapped_codepoint(&self, codepoint: Codepoint) -> String
    {
        let code = codepoint.code();

        if code == 0 {
            return String::new();
        }

        if !codepoint.is_valid() {
            return format!("Invalid Codepoint ({} is not within the Unicode codespace)", code);
        }

        let character = codepoint.to_char().map(String::from).unwrap_or_default();

        format!("{} ({} {})", character, codepoint, self.character_name(codepoint))
    }

    /// то же для строки вида "1F600", "U+1F600" или "0x1F600"
    pub fn mapped_codepoint_from_hex(&self, hex: &str) -> String
    {
        let hex = hex.trim();

        if hex.is_empty() {
            return String::new();
        }

        let digits = hex
            .strip_prefix("U+")
            .or_else(|| hex.strip_prefix("0x"))
            .unwrap_or(hex);

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return format!("Invalid Codepoint ({} is not a valid hex value)", digits);
        }

        match u32::from_str_radix(digits, 16) {
            Ok(code) => self.mapped_codepoint(Codepoint::new(code)),
            Err(_) => format!("Invalid Codepoint ({} is not within the Unicode codespace)", digits),
        }
    }

    /// отображаемое значение перечислимого свойства: "{long} ({short})", для Age - короткое название;
    /// без идентификатора используется значение по умолчанию
    pub fn display_name_for_property_value(&self, group: &str, id: Option<u32>, codepoint: Codepoint) -> String
    {
        let property_values = self.property_values();

        if property_values.is_missing(group) {
            return "N/A".to_owned();
        }

        let values = match property_values.group(group) {
            Some(values) => values,
            None => return String::new(),
        };

        let id = match id.or_else(|| self.default_value_id(group, codepoint)) {
            Some(id) => id,
            None => return String::new(),
        };

        match values.get(id) {
            Some(value) => match group {
                "Age" => value.short_name.clone(),
                _ => format!("{} ({})", value.long_name, value.short_name),
            },
            None => {
                tracing::warn!(group, id, codepoint = %codepoint, "property value id not found");
                String::new()
            }
        }
    }

    /// идентификатор значения по умолчанию для кодпоинта без сохраненного значения
    pub fn default_value_id(&self, group: &str, codepoint: Codepoint) -> Option<u32>
    {
        let property_values = self.property_values();

        if property_values.is_missing(group) {
            return Some(PROP_GROUP_INVALID_FOR_VERSION_ID);
        }

        let name = match default_value_name(self, group, codepoint) {
            Some(name) => name,
            None => {
                tracing::warn!(group, codepoint = %codepoint, "no default value for property group");
                return None;
            }
        };

        let id = property_values.id_by_name(group, name);

        if id.is_none() {
            tracing::warn!(group, name, "default property value is missing from reference data");
        }

        id
    }

    /// свойства кодпоинта для запрошенных групп; verbose - не удалять неинформативные значения
    pub fn resolve_properties(
        &self,
        store: &dyn CharacterStore,
        codepoint: Codepoint,
        groups: &[PropertyGroup],
        verbose: bool,
    ) -> Result<PropertyMap, StoreError>
    {
        crate::properties::resolve(self, store, codepoint, groups, verbose)
    }

    /// нечеткий поиск по названиям блоков или символов
    pub fn search_names(&self, query: &str, corpus: CorpusKind, score_cutoff: f64) -> Vec<SearchResult>
    {
        match corpus {
            CorpusKind::Blocks => self.block_corpus.search(query, score_cutoff),
            CorpusKind::Characters => self.character_corpus.search(query, score_cutoff),
        }
    }

    /// количество символов версии без управляющих символов, суррогатов, символов для частного
    /// использования и несимволов
    pub fn official_character_count(&self) -> u32
    {
        self.classifier.official_character_count()
    }

    /// псевдоблок для перебора всего пространства кодпоинтов
    pub fn all_characters_block(&self) -> Block
    {
        Block::all_characters(self.official_character_count())
    }

    /// псевдоплоскость для перебора всех блоков
    pub fn all_characters_plane(&self) -> Plane
    {
        let last_block_id = self.data.blocks.iter().map(|b| b.id).max().unwrap_or(0);

        Plane::all_characters(last_block_id, self.official_character_count())
    }

    /// область перебора кодпоинтов блока
    pub fn codepoint_scope(&self, block: &Block) -> Scope
    {
        Scope::new(block.start, block.finish, block.long_name.as_str(), ScopeUnit::Codepoint)
    }

    /// область перебора идентификаторов блоков плоскости
    pub fn block_scope(&self, plane: &Plane) -> Scope
    {
        Scope::new(
            plane.start_block_id,
            plane.finish_block_id,
            format!("the Unicode plane ({})", plane.name),
            ScopeUnit::BlockId,
        )
    }

    /// кодпоинты символов обеих таблиц, удовлетворяющих условиям, по возрастанию
    pub fn filter_characters(&self, store: &dyn CharacterStore, criteria: &FilterCriteria) -> Result<Vec<u32>, StoreError>
    {
        let mut codepoints = vec![];

        for table in CharacterTable::ALL {
            if let Some(predicates) = criteria.predicates(table) {
                codepoints.extend(store.select_codepoints(table, &predicates)?);
            }
        }

        codepoints.sort_unstable();
        codepoints.dedup();

        tracing::debug!(found = codepoints.len(), "filtered characters");

        Ok(codepoints)
    }
}

/// булевы свойства из prop_values.json, для которых есть колонки флагов
fn character_flags(property_values: &PropertyValues) -> Vec<String>
{
    let boolean_properties = property_values.boolean_properties();

    let mut flags: Vec<String> = PropertyGroup::ALL
        .into_iter()
        .flat_map(definitions_for)
        .filter(|d| matches!(d.kind, PropertyKind::Flag | PropertyKind::ExtendedPictographic))
        .map(|d| d.name_in)
        .filter(|name| boolean_properties.iter().any(|p| p == name))
        .map(str::to_owned)
        .collect();

    flags.sort();
    flags.dedup();

    flags
}
