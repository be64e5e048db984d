use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::SplitConfig;
use crate::error::ShaderError;
use crate::stage::{Section, ShaderProgramSources};

/// A marker line whose keyword matched neither stage.
///
/// Lines following it are dropped until the next recognized marker.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UnrecognizedSection {
    /// Name of the resource, as given to the splitter.
    pub origin: String,
    /// 1-based line number of the marker line.
    pub line: usize,
    pub text: String,
}

/// Result of one splitting pass.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Split {
    pub sources: ShaderProgramSources,
    pub unrecognized: Vec<UnrecognizedSection>,
}

/// Splits combined shader resources into per-stage sources.
#[derive(Debug, Clone, Default)]
pub struct Splitter {
    config: SplitConfig,
}

impl Splitter {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Opens `path` and splits its contents.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<ShaderProgramSources, ShaderError> {
        self.load_split(path).map(|split| split.sources)
    }

    /// Like [`load`](Self::load), but also returns the diagnostics.
    pub fn load_split(&self, path: impl AsRef<Path>) -> Result<Split, ShaderError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ShaderError::not_found(path, e))?;
        let split = self.split_reader(path, BufReader::new(file))?;

        log::debug!(
            "loaded shader {}: vertex {} bytes, fragment {} bytes",
            path.display(),
            split.sources.vertex_source.len(),
            split.sources.fragment_source.len(),
        );
        Ok(split)
    }

    /// Splits a line-oriented reader. `origin` names the resource in
    /// diagnostics and errors.
    pub fn split_reader<R: BufRead>(
        &self,
        origin: impl AsRef<Path>,
        reader: R,
    ) -> Result<Split, ShaderError> {
        let origin = origin.as_ref();
        let mut state = SplitState::new(&self.config, origin.display().to_string());
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| ShaderError::read(origin, idx + 1, e))?;
            state.feed(idx + 1, &line);
        }
        Ok(state.finish())
    }

    /// Splits an in-memory source, e.g. one embedded with `include_str!`.
    pub fn split_str(&self, origin: &str, text: &str) -> Split {
        let mut state = SplitState::new(&self.config, origin.to_string());
        for (idx, line) in text.lines().enumerate() {
            state.feed(idx + 1, line);
        }
        state.finish()
    }
}

// ── State machine ─────────────────────────────────────────────────────────

struct SplitState<'c> {
    config: &'c SplitConfig,
    origin: String,
    section: Section,
    split: Split,
}

impl<'c> SplitState<'c> {
    fn new(config: &'c SplitConfig, origin: String) -> Self {
        Self { config, origin, section: Section::None, split: Split::default() }
    }

    fn feed(&mut self, line_no: usize, line: &str) {
        match self.config.classify(line) {
            Some(Section::None) => {
                log::warn!(
                    "unrecognized shader section in {}:{}: {:?}",
                    self.origin, line_no, line
                );
                self.split.unrecognized.push(UnrecognizedSection {
                    origin: self.origin.clone(),
                    line: line_no,
                    text: line.to_string(),
                });
                self.section = Section::None;
            }
            Some(section) => {
                log::debug!("{}:{}: entering {:?}", self.origin, line_no, section);
                self.section = section;
            }
            None => {
                if let Section::Stage(stage) = self.section {
                    self.split.sources.push_line(stage, line);
                }
            }
        }
    }

    fn finish(self) -> Split {
        self.split
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    fn split(src: &str) -> Split {
        Splitter::default().split_str("test.shader", src)
    }

    // ── stages ────────────────────────────────────────────────────────────

    #[test]
    fn vertex_then_fragment() {
        let s = split("#shader vertex\nA\nB\n#shader fragment\nC\n");
        assert_eq!(s.sources.vertex_source, "A\nB\n");
        assert_eq!(s.sources.fragment_source, "C\n");
        assert!(s.unrecognized.is_empty());
    }

    #[test]
    fn no_markers_yields_empty_sources() {
        let s = split("A\nB\nC\n");
        assert_eq!(s.sources, ShaderProgramSources::default());
    }

    #[test]
    fn empty_input() {
        assert_eq!(split(""), Split::default());
    }

    #[test]
    fn lines_before_first_marker_dropped() {
        let s = split("// header\n#version 330 core\n#shader fragment\nout vec4 c;\n");
        assert_eq!(s.sources.vertex_source, "");
        assert_eq!(s.sources.fragment_source, "out vec4 c;\n");
    }

    #[test]
    fn repeated_vertex_blocks_concatenate() {
        let s = split("#shader vertex\nA\n#shader vertex\nB\n");
        assert_eq!(s.sources.vertex_source, "A\nB\n");
        assert_eq!(s.sources.fragment_source, "");
    }

    #[test]
    fn interleaved_blocks_keep_order() {
        let s = split("#shader vertex\n1\n#shader fragment\n2\n#shader vertex\n3\n#shader fragment\n4\n");
        assert_eq!(s.sources.vertex_source, "1\n3\n");
        assert_eq!(s.sources.fragment_source, "2\n4\n");
    }

    #[test]
    fn blank_lines_preserved() {
        let s = split("#shader vertex\n\nA\n\n");
        assert_eq!(s.sources.vertex_source, "\nA\n\n");
    }

    #[test]
    fn last_line_without_newline_still_terminated() {
        let s = split("#shader fragment\nC");
        assert_eq!(s.sources.fragment_source, "C\n");
    }

    #[test]
    fn crlf_input_is_normalized() {
        let s = split("#shader vertex\r\nA\r\n#shader fragment\r\nB\r\n");
        assert_eq!(s.sources.vertex_source, "A\n");
        assert_eq!(s.sources.fragment_source, "B\n");
    }

    // ── unrecognized sections ─────────────────────────────────────────────

    #[test]
    fn unrecognized_section_drops_until_next_marker() {
        let s = split("#shader vertex\nA\n#shader geometry\nG1\nG2\n#shader fragment\nF\n");
        assert_eq!(s.sources.vertex_source, "A\n");
        assert_eq!(s.sources.fragment_source, "F\n");
        assert_eq!(
            s.unrecognized,
            vec![UnrecognizedSection {
                origin: "test.shader".into(),
                line: 3,
                text: "#shader geometry".into(),
            }]
        );
    }

    #[test]
    fn unrecognized_section_at_end() {
        let s = split("#shader fragment\nF\n#shader compute\nX\n");
        assert_eq!(s.sources.fragment_source, "F\n");
        assert_eq!(s.unrecognized.len(), 1);
        assert_eq!(s.unrecognized[0].line, 3);
    }

    #[test]
    fn marker_inside_content_switches_section() {
        let s = split("#shader vertex\nA\n// moved to #shader fragment\nB\n");
        assert_eq!(s.sources.vertex_source, "A\n");
        assert_eq!(s.sources.fragment_source, "B\n");
    }

    #[test]
    fn marker_lines_never_emitted() {
        let s = split("#shader vertex\n#shader fragment\n#shader vertex\n");
        assert!(s.sources.is_empty());
    }

    // ── config ────────────────────────────────────────────────────────────

    #[test]
    fn custom_marker_ignores_default_marker() {
        let splitter = Splitter::new(SplitConfig::with_marker("//!stage"));
        let s = splitter.split_str("custom", "//!stage vertex\n#shader fragment\nA\n");
        assert_eq!(s.sources.vertex_source, "#shader fragment\nA\n");
        assert_eq!(splitter.config().marker, "//!stage");
    }

    // ── readers ───────────────────────────────────────────────────────────

    #[test]
    fn reader_matches_str() {
        let src = "pre\n#shader vertex\nA\n#shader nope\nB\n#shader fragment\nC\n";
        let splitter = Splitter::default();
        let from_reader = splitter.split_reader("test.shader", Cursor::new(src)).unwrap();
        assert_eq!(from_reader, splitter.split_str("test.shader", src));
    }

    #[test]
    fn idempotent() {
        let src = "#shader vertex\nA\n#shader fragment\nB\n";
        assert_eq!(split(src), split(src));
    }

    #[test]
    fn invalid_utf8_is_read_error() {
        let bytes: &[u8] = b"#shader vertex\nA\n\xff\xfe\n";
        let err = Splitter::default().split_reader("bad.shader", bytes).unwrap_err();
        match err {
            ShaderError::Read { line, ref source, .. } => {
                assert_eq!(line, 3);
                assert_eq!(source.kind(), io::ErrorKind::InvalidData);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn failing_reader_is_read_error() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk on fire"))
            }
        }
        let err = Splitter::default()
            .split_reader("broken", io::BufReader::new(Broken))
            .unwrap_err();
        assert!(matches!(err, ShaderError::Read { line: 1, .. }));
    }

    #[test]
    fn missing_file_is_resource_not_found() {
        let err = Splitter::default()
            .load("definitely/not/here/Basic.shader")
            .unwrap_err();
        match err {
            ShaderError::ResourceNotFound { path, source } => {
                assert_eq!(path, Path::new("definitely/not/here/Basic.shader"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
