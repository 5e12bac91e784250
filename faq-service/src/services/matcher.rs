//! Approximate question matching.
//!
//! Similarity is the Ratcliff/Obershelp ratio: `2 * M / (|a| + |b|)`, where
//! `M` counts characters in the matching blocks found by repeatedly taking the
//! longest common run and recursing on either side of it. The user question
//! is indexed once and every catalog question is scored against it.

use crate::models::{FaqCatalog, FaqEntry};
use std::collections::HashMap;

/// Minimum similarity for a catalog question to count as a match.
pub const MATCH_CUTOFF: f64 = 0.5;

/// Sequences at least this long drop "popular" characters from the index.
const AUTOJUNK_MIN_LEN: usize = 200;

/// Best catalog hit for a question.
#[derive(Debug, Clone, Copy)]
pub struct FaqMatch<'a> {
    pub index: usize,
    pub entry: &'a FaqEntry,
    pub score: f64,
}

impl<'a> FaqMatch<'a> {
    pub fn answer(&self) -> &'a str {
        &self.entry.answer
    }
}

/// Character-level matcher with a fixed second sequence.
pub struct SequenceMatcher {
    b: Vec<char>,
    b2j: HashMap<char, Vec<usize>>,
    b_counts: HashMap<char, usize>,
}

impl SequenceMatcher {
    pub fn new(b: &str) -> Self {
        let b: Vec<char> = b.chars().collect();

        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, c) in b.iter().enumerate() {
            b2j.entry(*c).or_default().push(j);
        }

        let b_counts = b2j.iter().map(|(c, js)| (*c, js.len())).collect();

        let n = b.len();
        if n >= AUTOJUNK_MIN_LEN {
            let ntest = n / 100 + 1;
            b2j.retain(|_, js| js.len() <= ntest);
        }

        Self { b, b2j, b_counts }
    }

    /// Upper bound on `ratio` from character multiset overlap.
    pub fn quick_ratio(&self, a: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let mut avail: HashMap<char, isize> = HashMap::new();
        let mut matches = 0usize;

        for c in &a {
            let left = avail
                .entry(*c)
                .or_insert_with(|| self.b_counts.get(c).copied().unwrap_or(0) as isize);
            *left -= 1;
            if *left >= 0 {
                matches += 1;
            }
        }

        calculate_ratio(matches, a.len() + self.b.len())
    }

    pub fn ratio(&self, a: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let matches = self.matching_characters(&a);
        calculate_ratio(matches, a.len() + self.b.len())
    }

    fn matching_characters(&self, a: &[char]) -> usize {
        let mut total = 0;
        let mut queue = vec![(0, a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.find_longest_match(a, alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            total += k;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        total
    }

    /// Longest common run in `a[alo..ahi]` and `b[blo..bhi]`, earliest in `a`
    /// then earliest in `b`. Returns `(i, j, size)`.
    fn find_longest_match(
        &self,
        a: &[char],
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let b = &self.b;
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0);
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut new_j2len = HashMap::new();
            if let Some(js) = self.b2j.get(c) {
                for &j in js {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let prev = if j > 0 {
                        j2len.get(&(j - 1)).copied().unwrap_or(0)
                    } else {
                        0
                    };
                    let k = prev + 1;
                    new_j2len.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            j2len = new_j2len;
        }

        // Popular characters never anchor a run but may still extend one.
        while besti > alo && bestj > blo && a[besti - 1] == b[bestj - 1] {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi
            && bestj + bestsize < bhi
            && a[besti + bestsize] == b[bestj + bestsize]
        {
            bestsize += 1;
        }

        (besti, bestj, bestsize)
    }
}

fn calculate_ratio(matches: usize, length: usize) -> f64 {
    if length == 0 {
        return 1.0;
    }
    2.0 * matches as f64 / length as f64
}

/// Similarity of `candidate` to `question` in `[0, 1]`.
pub fn similarity(candidate: &str, question: &str) -> f64 {
    SequenceMatcher::new(question).ratio(candidate)
}

/// Highest scoring catalog entry at or above `cutoff`; ties keep the earliest.
pub fn best_match<'a>(question: &str, catalog: &'a FaqCatalog, cutoff: f64) -> Option<FaqMatch<'a>> {
    let matcher = SequenceMatcher::new(question);
    let mut best: Option<FaqMatch<'a>> = None;

    for (index, entry) in catalog.entries().iter().enumerate() {
        let floor = best.map_or(cutoff, |b| b.score);
        if matcher.quick_ratio(&entry.question) < floor {
            continue;
        }

        let score = matcher.ratio(&entry.question);
        if score < cutoff {
            continue;
        }
        if best.is_none_or(|b| score > b.score) {
            best = Some(FaqMatch {
                index,
                entry,
                score,
            });
        }
    }

    best
}

/// Answer of the best match under [`MATCH_CUTOFF`], if any.
pub fn find_best_answer<'a>(question: &str, catalog: &'a FaqCatalog) -> Option<&'a str> {
    best_match(question, catalog, MATCH_CUTOFF).map(|m| m.answer())
}
