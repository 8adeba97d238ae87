/// Final pipeline output: one markdown string with hierarchical headings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredDocument(String);

impl StructuredDocument {
    pub fn new(markdown: String) -> Self {
        Self(markdown)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for StructuredDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
