//! Triangulate a few random star polygons and print the counts.
//!
//! Usage:
//!   cargo run -p polysplit --example star_polygons -- [vertices] [seed]
//!
//! Each line shows the vertex count, triangle count and the area check
//! (polygon area against the summed triangle areas).

use polysplit::geom2::rand::{draw_star_polygon, RadialCfg, ReplayToken, VertexCount};
use polysplit::geom2::{area, triangle_area};
use polysplit::triangulate::triangulate;

fn main() {
    let mut args = std::env::args().skip(1);
    let n: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(16);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    for index in 0..5 {
        let pts = draw_star_polygon(cfg, ReplayToken { seed, index });
        match triangulate(&pts) {
            Ok(tris) => {
                let sum: f64 = tris
                    .iter()
                    .map(|t| {
                        let [a, b, c] = t.indices();
                        triangle_area(pts[a], pts[b], pts[c])
                    })
                    .sum();
                println!(
                    "sample {index}: V={}, T={}, area={:.6}, sum={:.6}",
                    pts.len(),
                    tris.len(),
                    area(&pts),
                    sum
                );
            }
            Err(e) => eprintln!("sample {index}: {e}"),
        }
    }
}
