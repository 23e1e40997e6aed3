use std::collections::HashSet;

use crate::character_type::CharacterType;
use crate::codepoint::Codepoint;
use crate::data::{Block, ReferenceData};
use crate::interval::RangeSet;

/// количество управляющих символов C0 (U+0000 ..= U+001F) и C1 с DEL (U+007F ..= U+009F)
pub const CONTROL_CHARACTER_COUNT: u32 = 0x20 + 0x21;

/// производные множества, по которым определяется класс кодпоинта
#[derive(Debug, Default)]
pub struct Classifier
{
    non_unihan: HashSet<u32>,
    unihan: HashSet<u32>,
    tangut: HashSet<u32>,
    surrogates: RangeSet,
    private_use: RangeSet,

    cjk_unified_blocks: HashSet<u32>,
    cjk_compatibility_blocks: HashSet<u32>,
    tangut_ideograph_blocks: HashSet<u32>,
    tangut_component_blocks: HashSet<u32>,
    private_use_blocks: HashSet<u32>,
}

/// признак блока определяется по его полному названию
fn block_ids(blocks: &[Block], matches: impl Fn(&str) -> bool) -> HashSet<u32>
{
    blocks
        .iter()
        .filter(|b| matches(b.long_name.to_lowercase().as_str()))
        .map(|b| b.id)
        .collect()
}

fn block_ranges(blocks: &[Block], ids: &HashSet<u32>) -> RangeSet
{
    RangeSet::new(
        blocks
            .iter()
            .filter(|b| ids.contains(&b.id))
            .map(|b| b.start ..= b.finish),
    )
}

impl Classifier
{
    pub fn new(data: &ReferenceData) -> Self
    {
        let blocks = &data.blocks;

        let cjk_unified_blocks = block_ids(blocks, |n| n.contains("cjk unified ideographs"));
        let cjk_compatibility_blocks = block_ids(blocks, |n| n.contains("cjk compatibility ideographs"));
        let tangut_ideograph_blocks = block_ids(blocks, |n| n.contains("tangut") && !n.contains("component"));
        let tangut_component_blocks = block_ids(blocks, |n| n.contains("tangut components"));
        let surrogate_blocks = block_ids(blocks, |n| n.contains("surrogate"));
        let private_use_blocks = block_ids(blocks, |n| n.contains("private use") && !n.contains("surrogate"));

        let tangut = data
            .tangut_characters
            .iter()
            .filter(|&(_, block_id)| {
                tangut_ideograph_blocks.contains(block_id) || tangut_component_blocks.contains(block_id)
            })
            .map(|(&code, _)| code)
            .collect();

        Self {
            non_unihan: data.character_names.keys().copied().collect(),
            unihan: data.unihan_characters.keys().copied().collect(),
            tangut,
            surrogates: block_ranges(blocks, &surrogate_blocks),
            private_use: block_ranges(blocks, &private_use_blocks),
            cjk_unified_blocks,
            cjk_compatibility_blocks,
            tangut_ideograph_blocks,
            tangut_component_blocks,
            private_use_blocks,
        }
    }

    /// класс кодпоинта, проверки выполняются в порядке приоритета
    pub fn classify(&self, codepoint: Codepoint) -> CharacterType
    {
        let code = codepoint.code();

        if self.non_unihan.contains(&code) {
            return CharacterType::NonUnihan;
        }

        if self.unihan.contains(&code) {
            return CharacterType::Unihan;
        }

        if self.tangut.contains(&code) {
            return CharacterType::Tangut;
        }

        if codepoint.is_noncharacter() {
            return CharacterType::Noncharacter;
        }

        if self.surrogates.contains(code) {
            return CharacterType::Surrogate;
        }

        if self.private_use.contains(code) {
            return CharacterType::PrivateUse;
        }

        match codepoint.is_valid() {
            true => CharacterType::Reserved,
            false => CharacterType::Invalid,
        }
    }

    #[inline]
    pub fn is_non_unihan(&self, code: u32) -> bool
    {
        self.non_unihan.contains(&code)
    }

    #[inline]
    pub fn is_cjk_unified_block(&self, block_id: u32) -> bool
    {
        self.cjk_unified_blocks.contains(&block_id)
    }

    #[inline]
    pub fn is_cjk_compatibility_block(&self, block_id: u32) -> bool
    {
        self.cjk_compatibility_blocks.contains(&block_id)
    }

    #[inline]
    pub fn is_tangut_ideograph_block(&self, block_id: u32) -> bool
    {
        self.tangut_ideograph_blocks.contains(&block_id)
    }

    #[inline]
    pub fn is_tangut_component_block(&self, block_id: u32) -> bool
    {
        self.tangut_component_blocks.contains(&block_id)
    }

    #[inline]
    pub fn is_private_use_block(&self, block_id: u32) -> bool
    {
        self.private_use_blocks.contains(&block_id)
    }

    #[inline]
    pub fn is_surrogate(&self, code: u32) -> bool
    {
        self.surrogates.contains(code)
    }

    #[inline]
    pub fn is_private_use(&self, code: u32) -> bool
    {
        self.private_use.contains(code)
    }

    /// "официальное" количество символов версии: графические и форматирующие символы,
    /// без управляющих, суррогатов, символов для частного использования и несимволов
    pub fn official_character_count(&self) -> u32
    {
        let total = self.non_unihan.len() + self.unihan.len() + self.tangut.len();

        (total as u32).saturating_sub(CONTROL_CHARACTER_COUNT)
    }
}
