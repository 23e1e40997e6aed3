use std::collections::BTreeSet;

use similar::{DiffOp, TextDiff};

/// похожесть строк по наибольшей общей подпоследовательности символов:
/// 200 * LCS / (len_a + len_b), 0 ..= 100
pub fn ratio(a: &str, b: &str) -> f64
{
    let total = a.chars().count() + b.chars().count();

    if total == 0 {
        return 100.0;
    }

    let common: usize = TextDiff::from_chars(a, b)
        .ops()
        .iter()
        .map(|op| match op {
            DiffOp::Equal { len, .. } => *len,
            _ => 0,
        })
        .sum();

    (200 * common) as f64 / total as f64
}

/// лучшее совпадение более короткой строки с подстрокой такой же длины в более длинной строке
pub fn partial_ratio(a: &str, b: &str) -> f64
{
    let (shorter, longer) = match a.chars().count() <= b.chars().count() {
        true => (a, b),
        false => (b, a),
    };

    let window = shorter.chars().count();

    if window == 0 {
        return 0.0;
    }

    let chars: Vec<char> = longer.chars().collect();

    if window == chars.len() {
        return ratio(shorter, longer);
    }

    let mut best: f64 = 0.0;

    for start in 0 ..= chars.len() - window {
        let candidate: String = chars[start .. start + window].iter().collect();
        best = best.max(ratio(shorter, &candidate));

        if best >= 100.0 {
            break;
        }
    }

    best
}

fn sorted_tokens(s: &str) -> String
{
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join(tokens: &BTreeSet<&str>) -> String
{
    tokens.iter().copied().collect::<Vec<_>>().join(" ")
}

/// слова сортируются, порядок слов не учитывается
pub fn token_sort_ratio(a: &str, b: &str) -> f64
{
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// общие слова сравниваются с остатками каждой строки
pub fn token_set_ratio(a: &str, b: &str) -> f64
{
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    let common = join(&tokens_a.intersection(&tokens_b).copied().collect());
    let diff_ab = join(&tokens_a.difference(&tokens_b).copied().collect());
    let diff_ba = join(&tokens_b.difference(&tokens_a).copied().collect());

    let combined_ab = format!("{} {}", common, diff_ab).trim().to_owned();
    let combined_ba = format!("{} {}", common, diff_ba).trim().to_owned();

    let mut best = ratio(&combined_ab, &combined_ba);

    if !common.is_empty() {
        best = best
            .max(ratio(&common, &combined_ab))
            .max(ratio(&common, &combined_ba));
    }

    best
}

/// частичное совпадение по словам, общее слово дает 100
pub fn partial_token_ratio(a: &str, b: &str) -> f64
{
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    if tokens_a.intersection(&tokens_b).next().is_some() {
        return 100.0;
    }

    partial_ratio(&join(&tokens_a), &join(&tokens_b))
}

/// взвешенная оценка: выбирает способ сравнения в зависимости от соотношения длин строк
pub fn weighted_ratio(a: &str, b: &str) -> f64
{
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let len_a = a.chars().count() as f64;
    let len_b = b.chars().count() as f64;
    let len_ratio = len_a.max(len_b) / len_a.min(len_b);

    let base = ratio(a, b);

    if len_ratio < 1.5 {
        let token = token_sort_ratio(a, b).max(token_set_ratio(a, b));
        return base.max(token * 0.95);
    }

    let partial_scale = match len_ratio < 8.0 {
        true => 0.9,
        false => 0.6,
    };

    base.max(partial_ratio(a, b) * partial_scale)
        .max(partial_token_ratio(a, b) * 0.95 * partial_scale)
}
