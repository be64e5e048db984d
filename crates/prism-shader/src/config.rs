use crate::stage::{Section, ShaderStage};

/// Splitter configuration.
///
/// All matching is case-sensitive substring containment: a line that merely
/// contains `marker` anywhere is a section marker, and the keyword may appear
/// anywhere after it (`#shader  vertex_main` selects the vertex stage).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SplitConfig {
    pub marker: String,
    pub vertex_keyword: String,
    pub fragment_keyword: String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            marker: "#shader".to_string(),
            vertex_keyword: ShaderStage::Vertex.keyword().to_string(),
            fragment_keyword: ShaderStage::Fragment.keyword().to_string(),
        }
    }
}

impl SplitConfig {
    /// Default keywords with a custom marker token.
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self { marker: marker.into(), ..Self::default() }
    }

    /// Classifies a line.
    ///
    /// Returns `None` when the line carries no marker, otherwise the section
    /// it switches to. Only the text after the first marker occurrence is
    /// searched for keywords; vertex wins when both are present.
    pub fn classify(&self, line: &str) -> Option<Section> {
        // An empty marker would turn every line into a marker line.
        if self.marker.is_empty() {
            return None;
        }
        let at = line.find(self.marker.as_str())?;
        let rest = &line[at + self.marker.len()..];

        let section = if rest.contains(self.vertex_keyword.as_str()) {
            Section::Stage(ShaderStage::Vertex)
        } else if rest.contains(self.fragment_keyword.as_str()) {
            Section::Stage(ShaderStage::Fragment)
        } else {
            Section::None
        };
        Some(section)
    }
}
