use std::collections::{HashMap, HashSet};

use crate::domain::{DuplicateGroup, DuplicateReport};

use super::sentences::split_into_sentences;

const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.75;

/// Finds groups of near-duplicate sentences in extracted text.
///
/// Similarity metric: Jaccard overlap of lowercased alphanumeric token sets.
/// Pairs at or above the threshold are merged through union-find, so
/// grouping is transitive by construction: A~B and B~C put A, B and C in the
/// same group even when A and C alone fall below the threshold. The detector
/// only reports; it never rewrites the text.
pub struct DuplicateDetector {
    similarity_threshold: f64,
}

impl DuplicateDetector {
    pub fn new(similarity_threshold: f64) -> Self {
        Self {
            similarity_threshold,
        }
    }

    #[tracing::instrument(skip(self, text))]
    pub fn find_duplicates(&self, text: &str) -> DuplicateReport {
        let sentences = split_into_sentences(text);
        if sentences.len() < 2 {
            return DuplicateReport {
                sentences,
                groups: Vec::new(),
            };
        }

        let token_sets: Vec<HashSet<String>> = sentences.iter().map(|s| tokenize(s)).collect();

        let mut union_find = UnionFind::new(sentences.len());
        for i in 0..sentences.len() {
            for j in (i + 1)..sentences.len() {
                if jaccard(&token_sets[i], &token_sets[j]) >= self.similarity_threshold {
                    union_find.union(i, j);
                }
            }
        }

        let mut components: HashMap<usize, Vec<usize>> = HashMap::new();
        for i in 0..sentences.len() {
            components.entry(union_find.find(i)).or_default().push(i);
        }

        let mut groups: Vec<DuplicateGroup> = components
            .into_values()
            .filter(|members| members.len() >= 2)
            .map(DuplicateGroup::new)
            .collect();
        groups.sort_by_key(|g| g.representative());

        tracing::debug!(
            sentence_count = sentences.len(),
            group_count = groups.len(),
            "duplicate detection complete"
        );

        DuplicateReport { sentences, groups }
    }
}

impl Default for DuplicateDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILARITY_THRESHOLD)
    }
}

fn tokenize(sentence: &str) -> HashSet<String> {
    sentence
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            let root = self.find(self.parent[i]);
            self.parent[i] = root;
        }
        self.parent[i]
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            // Attach the later root to the earlier so representatives keep
            // source order.
            let (keep, merge) = if root_a < root_b {
                (root_a, root_b)
            } else {
                (root_b, root_a)
            };
            self.parent[merge] = keep;
        }
    }
}
