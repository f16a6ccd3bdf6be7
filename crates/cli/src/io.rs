use anyhow::{Context, Result};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Polygon file: `{"points": [[x, y], ...]}` or a bare `[[x, y], ...]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PolygonFile {
    Wrapped { points: Vec<[f64; 2]> },
    Bare(Vec<[f64; 2]>),
}

#[derive(Serialize)]
struct PolygonOut<'a> {
    points: &'a [[f64; 2]],
}

pub fn parse_polygon(text: &str) -> Result<Vec<Vector2<f64>>> {
    let file: PolygonFile = serde_json::from_str(text).context("parsing polygon JSON")?;
    let raw = match file {
        PolygonFile::Wrapped { points } | PolygonFile::Bare(points) => points,
    };
    Ok(raw.into_iter().map(|[x, y]| Vector2::new(x, y)).collect())
}

pub fn read_polygon<P: AsRef<Path>>(path: P) -> Result<Vec<Vector2<f64>>> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_polygon(&text).with_context(|| format!("in {}", path.display()))
}

pub fn write_polygon<P: AsRef<Path>>(path: P, points: &[Vector2<f64>]) -> Result<()> {
    let raw: Vec<[f64; 2]> = points.iter().map(|p| [p.x, p.y]).collect();
    write_json(path, &PolygonOut { points: &raw })
}

/// Pretty-print `value` to `path`, creating parent directories.
pub fn write_json<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn accepts_wrapped_and_bare_forms() {
        let wrapped = parse_polygon(r#"{"points": [[0, 0], [4, 0], [4, 4]]}"#).unwrap();
        let bare = parse_polygon("[[0, 0], [4, 0], [4, 4]]").unwrap();
        assert_eq!(wrapped, bare);
        assert_eq!(bare[1], Vector2::new(4.0, 0.0));
    }

    #[test]
    fn rejects_malformed_points() {
        assert!(parse_polygon(r#"{"points": [[0, 0, 1]]}"#).is_err());
        assert!(parse_polygon(r#"{"vertices": []}"#).is_err());
    }

    #[test]
    fn polygon_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("poly.json");
        let pts = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.5, -0.25),
            Vector2::new(0.0, 2.0),
        ];
        write_polygon(&path, &pts).unwrap();
        assert_eq!(read_polygon(&path).unwrap(), pts);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = read_polygon(&path).unwrap_err();
        assert!(format!("{err:#}").contains("absent.json"));
    }
}
