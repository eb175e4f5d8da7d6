use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use periphery::diagnostics::Statistics;
use periphery::{GraphStore, VertexId};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::RunParams;

#[derive(Parser, Debug)]
#[command(name = "cli")]
#[command(about = "Grow and inspect periphery-built planar triangulations")]
struct Cmd {
    /// Log per-insertion detail
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Grow a random graph to COUNT vertices and print its statistics
    Generate {
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Apply distance-ring coloring afterwards
        #[arg(long)]
        optimize: bool,
        /// Run a final redraw
        #[arg(long)]
        redraw: bool,
        /// Write statistics JSON (plus provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Start from the triangle and apply explicit arc insertions `VP:VQ`
    Grow {
        #[arg(long = "arc", value_parser = parse_arc)]
        arcs: Vec<(VertexId, VertexId)>,
        /// Random insertions after the explicit ones
        #[arg(long, default_value_t = 0)]
        random: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        redraw: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print version and code revision
    Report,
}

/// Flat statistics row for JSON output.
#[derive(Serialize, Debug, PartialEq)]
pub(crate) struct StatsRow {
    vertices: usize,
    edges: usize,
    periphery_size: usize,
    interior_vertices: usize,
    validation_issues: usize,
    avg_degree: Option<f64>,
    min_degree: Option<usize>,
    max_degree: Option<usize>,
}

impl From<&Statistics> for StatsRow {
    fn from(s: &Statistics) -> Self {
        Self {
            vertices: s.vertices,
            edges: s.edges,
            periphery_size: s.periphery,
            interior_vertices: s.interior,
            validation_issues: s.issues,
            avg_degree: s.degree.map(|d| d.avg),
            min_degree: s.degree.map(|d| d.min),
            max_degree: s.degree.map(|d| d.max),
        }
    }
}

fn parse_arc(s: &str) -> Result<(VertexId, VertexId), String> {
    let (p, q) = s
        .split_once(':')
        .ok_or_else(|| format!("expected VP:VQ, got {s:?}"))?;
    let p: usize = p.trim().parse().map_err(|e| format!("bad VP {p:?}: {e}"))?;
    let q: usize = q.trim().parse().map_err(|e| format!("bad VQ {q:?}: {e}"))?;
    Ok((VertexId(p), VertexId(q)))
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Generate {
            count,
            seed,
            optimize,
            redraw,
            out,
        } => generate(count, seed, optimize, redraw, out),
        Action::Grow {
            arcs,
            random,
            seed,
            redraw,
            out,
        } => grow(&arcs, random, seed, redraw, out),
        Action::Report => report(),
    }
}

fn generate(
    count: usize,
    seed: u64,
    optimize: bool,
    redraw: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    tracing::info!(count, seed, optimize, redraw, "generate");
    if count < 3 {
        bail!("count must be at least 3 (got {count})");
    }
    let mut g = GraphStore::new();
    let mut rng = StdRng::seed_from_u64(seed);
    g.generate(count, &mut rng)?;
    if redraw {
        g.redraw();
    }
    if optimize && !g.optimize_for_scale() {
        tracing::info!(vertices = g.vertex_count(), "below ring-coloring threshold");
    }
    let params = RunParams {
        command: "generate",
        seed,
        count,
        arcs: Vec::new(),
        redraw,
        optimize,
    };
    emit(&g, &params, out.as_deref())
}

fn grow(
    arcs: &[(VertexId, VertexId)],
    random: usize,
    seed: u64,
    redraw: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    let mut g = GraphStore::new();
    g.start_basic_graph();
    for &(vp, vq) in arcs {
        let ins = g
            .insert_on_arc(vp, vq)
            .with_context(|| format!("inserting on arc {vp}:{vq}"))?;
        tracing::info!(id = ins.id.0, arc = ?ins.arc, "inserted");
    }
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..random {
        g.insert_random(&mut rng)?;
    }
    if redraw {
        g.redraw();
    }
    let issues = g.validate();
    for issue in &issues {
        tracing::warn!(%issue, "validation");
    }
    let params = RunParams {
        command: "grow",
        seed,
        count: random,
        arcs: arcs.iter().map(|(p, q)| format!("{}:{}", p.0, q.0)).collect(),
        redraw,
        optimize: false,
    };
    emit(&g, &params, out.as_deref())
}

/// Print statistics and periphery; optionally persist them with a provenance sidecar.
fn emit(g: &GraphStore, params: &RunParams, out: Option<&Path>) -> Result<()> {
    let row = StatsRow::from(&g.statistics());
    let doc = summary(g, &row);
    let text = serde_json::to_string_pretty(&doc)?;
    println!("{text}");
    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(out, &text).with_context(|| format!("writing {}", out.display()))?;
        provenance::write_sidecar(out, params, &row)?;
    }
    Ok(())
}

fn summary(g: &GraphStore, row: &StatsRow) -> serde_json::Value {
    let periphery: Vec<usize> = g.periphery().iter().map(|v| v.0).collect();
    let bb = g.bounding_box();
    json!({
        "statistics": row,
        "periphery": periphery,
        "bounding_box": [bb.min_x, bb.min_y, bb.width, bb.height],
    })
}

fn report() -> Result<()> {
    let obj = json!({
        "version": periphery::VERSION,
        "code_rev": provenance::code_rev(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
