use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use nalgebra::Vector2;
use polysplit::api::{
    draw_star_polygon, edge_crossings, nearest_edge, point_in_polygon, polygon_area,
    segment_meets_polygon, triangle_area, triangulate_with, AnchorRetry, GeomCfg,
    HorizontalEdgePolicy, PolygonReplay, RadialCfg, TriangulateCfg, VertexCount,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "polysplit-cli")]
#[command(about = "Triangulate polygons and run 2D geometric queries")]
struct Cmd {
    /// Treatment of horizontal edges in the containment test
    #[arg(long, global = true, value_enum, default_value_t = HorizontalEdges::Ignore)]
    horizontal_edges: HorizontalEdges,

    /// Anchor rotations tried before a section is reported as unsplittable
    #[arg(long, global = true, default_value_t = 1)]
    max_rotations: usize,

    /// Single absolute tolerance for every geometric comparison
    #[arg(long, global = true)]
    eps: Option<f64>,

    /// Log at DEBUG level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum HorizontalEdges {
    Ignore,
    CountIfLeft,
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate a polygon file and write the index triangles
    Triangulate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Report whether a point lies inside the polygon
    Contains {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },
    /// Boundary edge closest to a point
    NearestEdge {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },
    /// Boundary edges crossed by a segment
    Crossings {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        from_x: f64,
        #[arg(long, allow_negative_numbers = true)]
        from_y: f64,
        #[arg(long, allow_negative_numbers = true)]
        to_x: f64,
        #[arg(long, allow_negative_numbers = true)]
        to_y: f64,
    },
    /// Write a random star-shaped polygon
    Sample {
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

impl Cmd {
    fn geom(&self) -> GeomCfg {
        let base = self.eps.map(GeomCfg::with_eps).unwrap_or_default();
        GeomCfg {
            horizontal_edges: match self.horizontal_edges {
                HorizontalEdges::Ignore => HorizontalEdgePolicy::Ignore,
                HorizontalEdges::CountIfLeft => HorizontalEdgePolicy::CountIfLeft,
            },
            ..base
        }
    }

    fn cfg(&self) -> TriangulateCfg {
        TriangulateCfg {
            geom: self.geom(),
            retry: AnchorRetry {
                max_rotations: self.max_rotations,
            },
        }
    }

    fn params(&self) -> Value {
        let g = self.geom();
        json!({
            "eps_orient": g.eps_orient,
            "eps_parallel": g.eps_parallel,
            "eps_length": g.eps_length,
            "horizontal_edges": format!("{:?}", self.horizontal_edges),
            "max_rotations": self.max_rotations,
        })
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let printed = dispatch(&cmd)?;
    println!("{}", serde_json::to_string_pretty(&printed)?);
    Ok(())
}

fn dispatch(cmd: &Cmd) -> Result<Value> {
    let geom = cmd.geom();
    match &cmd.action {
        Action::Triangulate { input, out } => {
            run_triangulate(input, out, cmd.cfg(), cmd.params())
        }
        Action::Contains { input, x, y } => {
            let points = io::read_polygon(input)?;
            let inside = point_in_polygon(&points, Vector2::new(*x, *y), geom);
            Ok(json!({ "inside": inside }))
        }
        Action::NearestEdge { input, x, y } => {
            let points = io::read_polygon(input)?;
            let Some((edge, distance)) = nearest_edge(&points, Vector2::new(*x, *y), geom) else {
                bail!("{} has fewer than 2 points", input.display());
            };
            Ok(json!({ "edge": edge, "distance": distance }))
        }
        Action::Crossings {
            input,
            from_x,
            from_y,
            to_x,
            to_y,
        } => {
            let points = io::read_polygon(input)?;
            let a = Vector2::new(*from_x, *from_y);
            let b = Vector2::new(*to_x, *to_y);
            let crossings: Vec<Value> = edge_crossings(&points, a, b, geom)
                .into_iter()
                .map(|c| json!({ "edge": c.edge, "point": [c.point.x, c.point.y] }))
                .collect();
            Ok(json!({
                "crossings": crossings,
                "meets": segment_meets_polygon(&points, a, b, geom),
            }))
        }
        Action::Sample {
            vertices,
            seed,
            index,
            out,
        } => run_sample(*vertices, *seed, *index, out),
        Action::Report => Ok(provenance::block(&Payload::new("report", cmd.params()))),
    }
}

#[derive(Serialize)]
struct TriangulationOut {
    triangles: Vec<[usize; 3]>,
    polygon_area: f64,
    triangle_area: f64,
}

fn run_triangulate(input: &Path, out: &Path, cfg: TriangulateCfg, params: Value) -> Result<Value> {
    let points = io::read_polygon(input)?;
    tracing::info!(input = %input.display(), vertices = points.len(), "triangulate");
    let tris = triangulate_with(&points, cfg)
        .with_context(|| format!("triangulating {}", input.display()))?;
    let result = TriangulationOut {
        triangles: tris.iter().map(|t| t.indices()).collect(),
        polygon_area: polygon_area(&points),
        triangle_area: tris
            .iter()
            .map(|t| {
                let [a, b, c] = t.indices();
                triangle_area(points[a], points[b], points[c])
            })
            .sum(),
    };
    io::write_json(out, &result)?;
    provenance::write_sidecar(out, &Payload::new("triangulate", params).with_input(input))?;
    Ok(json!({
        "out": out.to_string_lossy(),
        "triangles": result.triangles.len(),
        "polygon_area": result.polygon_area,
        "triangle_area": result.triangle_area,
    }))
}

fn run_sample(vertices: usize, seed: u64, index: u64, out: &Path) -> Result<Value> {
    if vertices < 3 {
        bail!("--vertices must be at least 3, got {vertices}");
    }
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..RadialCfg::default()
    };
    let points = draw_star_polygon(cfg, PolygonReplay { seed, index });
    io::write_polygon(out, &points)?;
    let params = json!({ "vertices": vertices, "seed": seed, "index": index });
    provenance::write_sidecar(out, &Payload::new("sample", params))?;
    tracing::info!(out = %out.display(), vertices, "sampled");
    Ok(json!({ "out": out.to_string_lossy(), "vertices": points.len() }))
}
