use serde::Serialize;

pub use score::weighted_ratio;

mod score;

/// порог, ниже которого совпадения не возвращаются при любом пороге, указанном в запросе
pub const MIN_SCORE_CUTOFF: f64 = 70.0;

/// порог по умолчанию
pub const DEFAULT_SCORE_CUTOFF: f64 = 80.0;

/// набор названий, по которым выполняется нечеткий поиск
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorpusKind
{
    Blocks,
    Characters,
}

/// найденная запись и ее оценка, 0 ..= 100
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchResult
{
    pub id: u32,
    pub score: f64,
}

/// идентификатор -> название в нижнем регистре, отсортировано по идентификатору
#[derive(Debug, Default)]
pub struct SearchCorpus
{
    entries: Vec<(u32, String)>,
}

impl SearchCorpus
{
    pub fn new<S: AsRef<str>>(names: impl IntoIterator<Item = (u32, S)>) -> Self
    {
        let mut entries: Vec<(u32, String)> = names
            .into_iter()
            .map(|(id, name)| (id, name.as_ref().to_lowercase()))
            .collect();

        entries.sort_by_key(|e| e.0);

        Self { entries }
    }

    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }

    /// записи с оценкой не ниже max(70, score_cutoff), по убыванию оценки;
    /// при равной оценке - по возрастанию идентификатора
    pub fn search(&self, query: &str, score_cutoff: f64) -> Vec<SearchResult>
    {
        let cutoff = score_cutoff.max(MIN_SCORE_CUTOFF);
        let query = query.trim().to_lowercase();

        if query.is_empty() {
            return vec![];
        }

        let mut results: Vec<SearchResult> = self
            .entries
            .iter()
            .map(|(id, name)| SearchResult {
                id: *id,
                score: weighted_ratio(&query, name),
            })
            .filter(|r| r.score >= cutoff)
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score));

        tracing::debug!(
            query = %query,
            cutoff,
            corpus = self.entries.len(),
            found = results.len(),
            "fuzzy name search"
        );

        results
    }
}
