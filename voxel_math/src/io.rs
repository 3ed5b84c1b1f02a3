//! File input and output helpers for point data.

use std::fs::File;
use std::io::{self, Read, Write};

use crate::vector::Vector3;

/// Reads vectors from a CSV file with one `x,y,z` row per line.
/// Blank lines are skipped; malformed rows produce an error naming the
/// offending line.
pub fn read_vectors_csv(path: &str) -> io::Result<Vec<Vector3>> {
    let mut buffer = String::new();
    File::open(path)?.read_to_string(&mut buffer)?;
    let mut out = Vec::new();
    for (idx, line) in buffer.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != 3 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: expected x,y,z", idx + 1),
            ));
        }
        let x = parts[0].trim().parse::<f64>().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: {}", idx + 1, e),
            )
        })?;
        let y = parts[1].trim().parse::<f64>().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: {}", idx + 1, e),
            )
        })?;
        let z = parts[2].trim().parse::<f64>().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: {}", idx + 1, e),
            )
        })?;
        out.push(Vector3::new(x, y, z));
    }
    Ok(out)
}

/// Writes vectors to a CSV file, one `x,y,z` row per line.
pub fn write_vectors_csv(path: &str, vectors: &[Vector3]) -> io::Result<()> {
    let mut file = File::create(path)?;
    for v in vectors {
        writeln!(file, "{},{},{}", v.x, v.y, v.z)?;
    }
    Ok(())
}
