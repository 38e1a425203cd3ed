//! Minimal OFF (Object File Format) reader/writer. This is the crate's one
//! external collaborator: the hull core never touches the filesystem, only
//! the CLI binary calls into this module. See `SPEC_FULL.md` §4.9.

use std::fs;
use std::path::Path;

use crate::dcel::Dcel;
use crate::error::HullError;
use crate::geometry::Point;

/// Reads the vertex list out of an OFF file. Only the vertex count and
/// coordinates are used; any faces already present in the file (there
/// won't usually be any, since the typical input is a bare point cloud)
/// are ignored.
pub fn read_off(path: impl AsRef<Path>) -> Result<Vec<Point>, HullError> {
    let text = fs::read_to_string(path).map_err(|e| HullError::Io(e.to_string()))?;
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'));

    let header = lines
        .next()
        .ok_or_else(|| HullError::Io("empty OFF file".to_string()))?;
    if header != "OFF" {
        return Err(HullError::Io(format!(
            "expected an OFF header, found {header:?}"
        )));
    }

    let counts = lines
        .next()
        .ok_or_else(|| HullError::Io("missing OFF vertex/face/edge counts".to_string()))?;
    let mut counts = counts.split_whitespace();
    let vertex_count: usize = parse_field(counts.next(), "vertex count")?;

    let mut points = Vec::with_capacity(vertex_count);
    for _ in 0..vertex_count {
        let line = lines
            .next()
            .ok_or_else(|| HullError::Io("truncated OFF vertex list".to_string()))?;
        let mut fields = line.split_whitespace();
        let x: f64 = parse_field(fields.next(), "vertex x")?;
        let y: f64 = parse_field(fields.next(), "vertex y")?;
        let z: f64 = parse_field(fields.next(), "vertex z")?;
        points.push(Point::new(x, y, z));
    }
    Ok(points)
}

fn parse_field<T: std::str::FromStr>(field: Option<&str>, name: &str) -> Result<T, HullError> {
    field
        .ok_or_else(|| HullError::Io(format!("missing {name}")))?
        .parse()
        .map_err(|_| HullError::Io(format!("could not parse {name}")))
}

/// Writes a hull's vertices and triangular faces out as an OFF file.
pub fn write_off(path: impl AsRef<Path>, dcel: &Dcel) -> Result<(), HullError> {
    let mut out = String::new();
    out.push_str("OFF\n");
    out.push_str(&format!(
        "{} {} {}\n",
        dcel.vertex_count(),
        dcel.face_count(),
        0
    ));
    for v in dcel.vertex_ids() {
        let c = dcel.vertex(v).coord;
        out.push_str(&format!("{} {} {}\n", c.x, c.y, c.z));
    }
    for f in dcel.face_ids() {
        let (v1, v2, v3) = dcel.face_triangle_vertices(f);
        out.push_str(&format!("3 {} {} {}\n", v1.0, v2.0, v3.0));
    }
    fs::write(path, out).map_err(|e| HullError::Io(e.to_string()))
}
