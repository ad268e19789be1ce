mod io;
mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;
use tri2d::prelude::*;

use crate::io::{from_points, read_input, write_json, Input, TriangulationDoc};
use crate::provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls and polygon triangulation")]
struct Cmd {
    /// Orientation/spread tolerance (all `GeomCfg` epsilons)
    #[arg(long, global = true)]
    eps: Option<f64>,

    /// Treat collinear vertices as concave (never clip zero-area ears)
    #[arg(long, global = true)]
    collinear_concave: bool,

    /// Use the seeded hull candidate strategy with this seed
    #[arg(long, global = true)]
    hull_seed: Option<u64>,

    /// Fixed iteration cap for hull wrapping and ear clipping
    #[arg(long, global = true)]
    max_iterations: Option<usize>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull of a point cloud (CSV/Parquet with x,y or JSON)
    Hull {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Triangulate a point cloud or a polygon with holes
    Triangulate {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Keep interior points as vertices (point clouds only)
        #[arg(long)]
        interior: bool,
        /// Sweep the points in x order instead (point clouds only)
        #[arg(long, conflicts_with = "interior")]
        incremental: bool,
    },
    /// Write a seeded random input
    Gen {
        #[arg(long, value_enum)]
        kind: GenKind,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Points, or outer vertices for polygons
        #[arg(long, default_value_t = 32)]
        count: usize,
        #[arg(long, default_value_t = 3)]
        holes: usize,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GenKind {
    Points,
    Polygon,
    Holes,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = tri_cfg(&cmd);
    match cmd.action {
        Action::Hull { input, out } => hull(cfg, input, out),
        Action::Triangulate {
            input,
            out,
            interior,
            incremental,
        } => triangulate(cfg, input, out, interior, incremental),
        Action::Gen {
            kind,
            seed,
            count,
            holes,
            out,
        } => generate(kind, seed, count, holes, out),
        Action::Report => report(cfg),
    }
}

fn tri_cfg(cmd: &Cmd) -> TriCfg {
    let mut cfg = TriCfg {
        collinear_concave: cmd.collinear_concave,
        max_iterations: cmd.max_iterations,
        ..TriCfg::default()
    };
    if let Some(eps) = cmd.eps {
        cfg.geom = GeomCfg {
            eps_orient: eps,
            eps_spread: eps,
            eps_angle: eps,
        };
    }
    if let Some(seed) = cmd.hull_seed {
        cfg.hull_strategy = HullStrategy::Seeded { seed };
    }
    cfg
}

fn cfg_params(cfg: &TriCfg) -> serde_json::Value {
    json!({
        "eps_orient": cfg.geom.eps_orient,
        "eps_spread": cfg.geom.eps_spread,
        "eps_angle": cfg.geom.eps_angle,
        "collinear_concave": cfg.collinear_concave,
        "hull_strategy": format!("{:?}", cfg.hull_strategy),
        "max_iterations": cfg.max_iterations,
    })
}

fn hull(cfg: TriCfg, input: String, out: String) -> Result<()> {
    let Input::Points(points) = read_input(&input)? else {
        bail!("{input}: hull needs a point cloud, got a polygon");
    };
    let hull = Triangulator::new(cfg)
        .convex_hull(&points)
        .with_context(|| format!("hull of {input}"))?;
    let ring: Vec<Point2> = hull.points().collect();
    write_json(
        &out,
        &json!({ "ids": hull.ids(), "points": from_points(&ring) }),
    )?;
    write_sidecar(&out, Payload::new("hull", cfg_params(&cfg)).with_input(&input))?;
    tracing::info!(input, out, points = points.len(), hull = ring.len(), "hull");
    Ok(())
}

fn triangulate(
    cfg: TriCfg,
    input: String,
    out: String,
    interior: bool,
    incremental: bool,
) -> Result<()> {
    let t = Triangulator::new(cfg);
    let tri = match read_input(&input)? {
        Input::Points(points) if interior => t.triangulate_points_with_interior(&points),
        Input::Points(points) if incremental => t.triangulate_points_incremental(&points),
        Input::Points(points) => t.triangulate_points(&points),
        Input::Polygon { outer, holes } => {
            if interior || incremental {
                tracing::warn!("--interior/--incremental apply to point clouds only; ignored");
            }
            t.triangulate_polygon_with_holes(&outer, &holes)
        }
    }
    .with_context(|| format!("triangulating {input}"))?;
    for d in &tri.diagnostics {
        tracing::warn!(%d, "diagnostic");
    }
    write_json(&out, &TriangulationDoc::from(&tri))?;
    let mut params = cfg_params(&cfg);
    params["interior"] = json!(interior);
    params["incremental"] = json!(incremental);
    write_sidecar(&out, Payload::new("triangulate", params).with_input(&input))?;
    tracing::info!(
        input,
        out,
        vertices = tri.vertices.len(),
        triangles = tri.len(),
        area = tri.area(),
        "triangulate"
    );
    Ok(())
}

fn generate(kind: GenKind, seed: u64, count: usize, holes: usize, out: String) -> Result<()> {
    let tok = ReplayToken { seed, index: 0 };
    let star = StarCfg {
        vertex_count: VertexCount::Fixed(count),
        ..StarCfg::default()
    };
    let doc = match kind {
        GenKind::Points => json!({ "points": from_points(&random_points(count, 1.0, tok)) }),
        GenKind::Polygon => json!({ "outer": from_points(&draw_star_polygon(star, tok)) }),
        GenKind::Holes => {
            let pwh = draw_polygon_with_holes(
                HolesCfg {
                    outer: star,
                    holes,
                    ..HolesCfg::default()
                },
                tok,
            );
            let holes: Vec<_> = pwh.holes.iter().map(|h| from_points(h)).collect();
            json!({ "outer": from_points(&pwh.outer), "holes": holes })
        }
    };
    write_json(&out, &doc)?;
    let params = json!({
        "kind": format!("{kind:?}"),
        "seed": seed,
        "count": count,
        "holes": holes,
    });
    write_sidecar(&out, Payload::new("gen", params))?;
    tracing::info!(out, seed, count, kind = ?kind, "gen");
    Ok(())
}

fn report(cfg: TriCfg) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "tri2d": tri2d::VERSION,
        "params": cfg_params(&cfg),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
