use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use prism_shader::{ShaderStage, SplitConfig, Splitter};

/// Split a combined `#shader vertex` / `#shader fragment` resource into its stages.
#[derive(Debug, Parser)]
#[command(name = "prism", version)]
pub struct Args {
    /// Combined shader resource to split.
    pub path: PathBuf,

    /// Only emit this stage. Printed without a banner so it can be piped.
    #[arg(long, value_enum)]
    pub stage: Option<StageArg>,

    /// Write `<stem>.vert` / `<stem>.frag` into this directory instead of stdout.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Section marker token.
    #[arg(long, default_value = "#shader")]
    pub marker: String,

    /// Log filter in `env_logger` syntax; overrides `RUST_LOG`.
    #[arg(long)]
    pub log: Option<String>,

    /// Fail if the resource contains unrecognized sections.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum StageArg {
    Vertex,
    Fragment,
}

impl From<StageArg> for ShaderStage {
    fn from(arg: StageArg) -> Self {
        match arg {
            StageArg::Vertex => ShaderStage::Vertex,
            StageArg::Fragment => ShaderStage::Fragment,
        }
    }
}

/// What a run produced.
#[derive(Debug, Default)]
pub struct Report {
    pub unrecognized: usize,
    pub written: Vec<PathBuf>,
}

impl Args {
    fn stages(&self) -> Vec<ShaderStage> {
        match self.stage {
            Some(stage) => vec![stage.into()],
            None => ShaderStage::ALL.to_vec(),
        }
    }
}

pub fn run(args: &Args, out: &mut dyn Write) -> Result<Report> {
    let splitter = Splitter::new(SplitConfig::with_marker(args.marker.as_str()));
    let split = splitter
        .load_split(&args.path)
        .with_context(|| format!("failed to load {}", args.path.display()))?;

    if args.strict && !split.unrecognized.is_empty() {
        let first = &split.unrecognized[0];
        bail!(
            "{} unrecognized section(s) in {}, first at line {}: {:?}",
            split.unrecognized.len(),
            args.path.display(),
            first.line,
            first.text,
        );
    }

    let stages = args.stages();
    for &stage in &stages {
        if split.sources.get(stage).is_empty() {
            log::warn!("{}: {} stage is empty", args.path.display(), stage.keyword());
        }
    }

    let mut report = Report { unrecognized: split.unrecognized.len(), written: Vec::new() };

    match &args.out_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            let stem = file_stem(&args.path);
            for &stage in &stages {
                let target = dir.join(format!("{stem}.{}", stage.extension()));
                fs::write(&target, split.sources.get(stage))
                    .with_context(|| format!("failed to write {}", target.display()))?;
                log::info!("wrote {}", target.display());
                report.written.push(target);
            }
        }
        None if args.stage.is_some() => {
            for &stage in &stages {
                out.write_all(split.sources.get(stage).as_bytes())?;
            }
        }
        None => {
            for (i, &stage) in stages.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "// ---- {} ----", stage.keyword())?;
                out.write_all(split.sources.get(stage).as_bytes())?;
            }
        }
    }
    out.flush()?;

    Ok(report)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "shader".to_string())
}
