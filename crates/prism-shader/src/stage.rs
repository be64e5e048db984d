/// A programmable pipeline stage carried by a combined shader resource.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub const ALL: [ShaderStage; 2] = [ShaderStage::Vertex, ShaderStage::Fragment];

    /// Default keyword following the section marker (`#shader vertex`).
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::Fragment => "fragment",
        }
    }

    /// Conventional file extension for a standalone source of this stage.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Vertex => "vert",
            Self::Fragment => "frag",
        }
    }
}

/// The section the splitter is currently accumulating into.
///
/// `None` covers both "before the first marker" and "after an unrecognized
/// marker"; lines seen in that state are dropped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Section {
    #[default]
    None,
    Stage(ShaderStage),
}

/// Per-stage sources extracted from one resource.
///
/// Every accumulated line keeps its trailing `\n`, so a stage is either empty
/// or ends in a newline.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ShaderProgramSources {
    pub vertex_source: String,
    pub fragment_source: String,
}

impl ShaderProgramSources {
    pub fn get(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex_source,
            ShaderStage::Fragment => &self.fragment_source,
        }
    }

    pub(crate) fn push_line(&mut self, stage: ShaderStage, line: &str) {
        let acc = match stage {
            ShaderStage::Vertex => &mut self.vertex_source,
            ShaderStage::Fragment => &mut self.fragment_source,
        };
        acc.push_str(line);
        acc.push('\n');
    }

    /// True when neither stage received any line.
    pub fn is_empty(&self) -> bool {
        self.vertex_source.is_empty() && self.fragment_source.is_empty()
    }
}
