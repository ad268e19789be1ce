//! Input and output documents.
//!
//! Inputs
//! - `.csv` / `.parquet`: a point cloud with numeric `x` and `y` columns,
//!   read lazily through polars.
//! - `.json`: either `{"points": [[x, y], ...]}` or
//!   `{"outer": [[x, y], ...], "holes": [[[x, y], ...], ...]}`.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tri2d::{Point2, Triangulation};

/// Parsed input geometry.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    Points(Vec<Point2>),
    Polygon {
        outer: Vec<Point2>,
        holes: Vec<Vec<Point2>>,
    },
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum InputDoc {
    Points {
        points: Vec<[f64; 2]>,
    },
    Polygon {
        outer: Vec<[f64; 2]>,
        #[serde(default)]
        holes: Vec<Vec<[f64; 2]>>,
    },
}

impl From<InputDoc> for Input {
    fn from(doc: InputDoc) -> Self {
        match doc {
            InputDoc::Points { points } => Input::Points(to_points(&points)),
            InputDoc::Polygon { outer, holes } => Input::Polygon {
                outer: to_points(&outer),
                holes: holes.iter().map(|h| to_points(h)).collect(),
            },
        }
    }
}

/// Serialized triangulation: index triples into `vertices`.
#[derive(Debug, Deserialize, Serialize)]
pub struct TriangulationDoc {
    pub vertices: Vec<[f64; 2]>,
    pub triangles: Vec<[usize; 3]>,
    pub hull: Option<Vec<usize>>,
    pub merged: Vec<usize>,
    pub diagnostics: Vec<String>,
}

impl From<&Triangulation> for TriangulationDoc {
    fn from(t: &Triangulation) -> Self {
        Self {
            vertices: from_points(&t.vertices),
            triangles: t.triangles.clone(),
            hull: t.hull.clone(),
            merged: t.merged.clone(),
            diagnostics: t.diagnostics.iter().map(|d| d.to_string()).collect(),
        }
    }
}

pub fn to_points(raw: &[[f64; 2]]) -> Vec<Point2> {
    raw.iter().map(|&[x, y]| Point2::new(x, y)).collect()
}

pub fn from_points(points: &[Point2]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

pub fn read_input(path: &str) -> Result<Input> {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ext.as_str() {
        "csv" => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("opening {path}"))?;
            Ok(Input::Points(collect_xy(lf).with_context(|| format!("reading {path}"))?))
        }
        "parquet" => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("opening {path}"))?;
            Ok(Input::Points(collect_xy(lf).with_context(|| format!("reading {path}"))?))
        }
        _ => {
            let bytes = fs::read(path).with_context(|| format!("reading {path}"))?;
            let doc: InputDoc =
                serde_json::from_slice(&bytes).with_context(|| format!("parsing {path}"))?;
            Ok(doc.into())
        }
    }
}

fn collect_xy(lf: LazyFrame) -> Result<Vec<Point2>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point2::new(x, y)),
            _ => bail!("row {row}: missing x or y"),
        }
    }
    Ok(out)
}

/// Write `value` as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &str, value: &T) -> Result<()> {
    let out_path = Path::new(path);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out_path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {path}"))?;
    Ok(())
}
