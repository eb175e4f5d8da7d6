//! Run record written next to a `--out` summary as `<stem>.provenance.json`.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::StatsRow;

/// Command inputs that reproduce a run (same seed + count/arcs → same topology).
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RunParams {
    pub command: &'static str,
    pub seed: u64,
    /// Target vertex count for `generate`, random insertions for `grow`.
    pub count: usize,
    /// Explicit `VP:VQ` insertions, in order.
    pub arcs: Vec<String>,
    pub redraw: bool,
    pub optimize: bool,
}

#[derive(Serialize, Debug)]
struct RunRecord<'a> {
    version: &'static str,
    code_rev: &'static str,
    params: &'a RunParams,
    statistics: &'a StatsRow,
    output: String,
}

/// Build revision baked in at compile time, `"unknown"` otherwise.
pub fn code_rev() -> &'static str {
    option_env!("GIT_COMMIT")
        .filter(|s| !s.is_empty())
        .unwrap_or("unknown")
}

/// `runs/stats.json` → `runs/stats.provenance.json`.
fn sidecar_path(summary: &Path) -> PathBuf {
    let stem = summary
        .file_stem()
        .map_or_else(|| "summary".into(), |s| s.to_string_lossy().into_owned());
    summary.with_file_name(format!("{stem}.provenance.json"))
}

pub fn write_sidecar(summary: &Path, params: &RunParams, statistics: &StatsRow) -> Result<PathBuf> {
    let record = RunRecord {
        version: periphery::VERSION,
        code_rev: code_rev(),
        params,
        statistics,
        output: summary.display().to_string(),
    };
    let path = sidecar_path(summary);
    std::fs::write(&path, serde_json::to_vec_pretty(&record)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote run record");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use periphery::GraphStore;
    use serde_json::Value;
    use tempfile::tempdir;

    fn params() -> RunParams {
        RunParams {
            command: "generate",
            seed: 7,
            count: 10,
            arcs: Vec::new(),
            redraw: false,
            optimize: true,
        }
    }

    #[test]
    fn sidecar_sits_next_to_summary() {
        let derived = sidecar_path(Path::new("/tmp/runs/stats.json"));
        assert_eq!(derived, Path::new("/tmp/runs/stats.provenance.json"));
        let bare = sidecar_path(Path::new("stats"));
        assert_eq!(bare, Path::new("stats.provenance.json"));
    }

    #[test]
    fn record_carries_params_and_statistics() {
        let dir = tempdir().unwrap();
        let summary = dir.path().join("stats.json");
        let mut g = GraphStore::new();
        g.start_basic_graph();
        let row = StatsRow::from(&g.statistics());
        let path = write_sidecar(&summary, &params(), &row).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["params"]["seed"], 7);
        assert_eq!(parsed["params"]["command"], "generate");
        assert_eq!(parsed["statistics"]["vertices"], 3);
        assert_eq!(parsed["version"], periphery::VERSION);
        assert_eq!(parsed["code_rev"], code_rev());
    }
}
