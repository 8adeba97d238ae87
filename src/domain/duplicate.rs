/// A cluster of near-identical sentences judged to express the same content.
///
/// `indices` point into the sentence sequence of the [`DuplicateReport`] the
/// group belongs to, are sorted ascending, and always hold at least two
/// entries. Groups within one report are disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub indices: Vec<usize>,
}

impl DuplicateGroup {
    pub fn new(indices: Vec<usize>) -> Self {
        debug_assert!(indices.len() >= 2);
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Self { indices }
    }

    /// Index of the sentence kept when the group is collapsed.
    pub fn representative(&self) -> usize {
        self.indices[0]
    }

    pub fn members<'a>(&self, sentences: &'a [String]) -> Vec<&'a str> {
        self.indices.iter().map(|&i| sentences[i].as_str()).collect()
    }
}

/// Output of duplicate detection: the sentence sequence in source order plus
/// the duplicate groups found in it, ordered by first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DuplicateReport {
    pub sentences: Vec<String>,
    pub groups: Vec<DuplicateGroup>,
}

impl DuplicateReport {
    pub fn has_duplicates(&self) -> bool {
        !self.groups.is_empty()
    }
}
