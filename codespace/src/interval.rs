use core::ops::RangeInclusive;

use crate::data::{Block, Plane};

/// отсортированный набор непересекающихся диапазонов кодпоинтов
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSet
{
    ranges: Vec<RangeInclusive<u32>>,
}

impl RangeSet
{
    /// диапазоны сортируются, пересекающиеся и соседние - объединяются
    pub fn new(ranges: impl IntoIterator<Item = RangeInclusive<u32>>) -> Self
    {
        let mut sorted: Vec<RangeInclusive<u32>> = ranges.into_iter().filter(|r| !r.is_empty()).collect();
        sorted.sort_by_key(|r| *r.start());

        let mut ranges: Vec<RangeInclusive<u32>> = Vec::with_capacity(sorted.len());

        for range in sorted {
            match ranges.last_mut() {
                Some(last) if *range.start() <= last.end().saturating_add(1) => {
                    let end = *last.end().max(range.end());
                    *last = *last.start() ..= end;
                }
                _ => ranges.push(range),
            }
        }

        Self { ranges }
    }

    /// двоичный поиск диапазона, содержащего кодпоинт
    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        let position = self.ranges.partition_point(|r| *r.start() <= code);

        position > 0 && self.ranges[position - 1].contains(&code)
    }

    pub fn ranges(&self) -> &[RangeInclusive<u32>]
    {
        &self.ranges
    }

    /// количество кодпоинтов во всех диапазонах
    pub fn count(&self) -> u32
    {
        self.ranges.iter().map(|r| r.end() - r.start() + 1).sum()
    }
}

/// блок, содержащий кодпоинт; блоки отсортированы по первому кодпоинту и не пересекаются
pub fn find_block(blocks: &[Block], code: u32) -> Option<&Block>
{
    let position = blocks.partition_point(|b| b.start <= code);

    match position {
        0 => None,
        _ => Some(&blocks[position - 1]).filter(|b| b.contains(code)),
    }
}

/// плоскость, в диапазон блоков которой входит блок
pub fn find_plane(planes: &[Plane], block_id: u32) -> Option<&Plane>
{
    planes.iter().find(|p| p.contains_block(block_id))
}
