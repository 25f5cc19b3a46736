//! Reader for the ANN_SIFT fvecs vector format.
//!
//! Each record is a little-endian `i32` dimension followed by that many
//! little-endian `f32` components. All records in one file must share the
//! dimension. Labels are assigned by file order, starting at 0.

use anyhow::{bail, Context, Result};
use flatknn_core::{Point, PointSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Summary of an fvecs file, computed without loading the vectors.
#[derive(Debug, Clone, Copy)]
pub struct FvecsInfo {
    /// Number of vectors in the file.
    pub count: usize,
    /// Dimension shared by every vector.
    pub dimension: usize,
    /// File size in bytes.
    pub file_size: u64,
}

/// Reads the record header and file length to describe an fvecs file.
///
/// Validates that the file length is an exact multiple of the record size
/// implied by the first header.
pub fn probe(path: &Path) -> Result<FvecsInfo> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let file_size = file.metadata()?.len();

    let mut reader = BufReader::new(file);
    let dimension = read_dimension(&mut reader)
        .with_context(|| format!("{} is not an fvecs file", path.display()))?;

    let record_size = 4 + 4 * dimension as u64;
    if file_size % record_size != 0 {
        bail!(
            "{}: file size {} is not a multiple of the {}-byte record size",
            path.display(),
            file_size,
            record_size
        );
    }

    Ok(FvecsInfo {
        count: (file_size / record_size) as usize,
        dimension,
        file_size,
    })
}

/// Loads at most `limit` vectors from an fvecs file into a `PointSet`.
///
/// Truncated records and dimension drift between records are load errors:
/// they signal a corrupted dataset, and no partial set is returned.
pub fn read_fvecs(path: &Path, limit: Option<usize>) -> Result<PointSet> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut reader = BufReader::with_capacity(128 * 1024, file);

    let mut points = Vec::new();
    let mut expected_dimension: Option<usize> = None;

    loop {
        if limit.is_some_and(|l| points.len() >= l) {
            break;
        }

        // EOF between records is the normal end of the file.
        let mut header = [0u8; 4];
        match reader.read_exact(&mut header) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e).context("Failed to read record header"),
        }

        let dimension = i32::from_le_bytes(header);
        if dimension <= 0 {
            bail!(
                "{}: record {} has invalid dimension {}",
                path.display(),
                points.len(),
                dimension
            );
        }
        let dimension = dimension as usize;

        match expected_dimension {
            None => expected_dimension = Some(dimension),
            Some(expected) if expected != dimension => bail!(
                "{}: record {} has dimension {}, expected {}",
                path.display(),
                points.len(),
                dimension,
                expected
            ),
            Some(_) => {}
        }

        let mut buf = vec![0u8; dimension * 4];
        reader.read_exact(&mut buf).with_context(|| {
            format!(
                "{}: record {} is truncated",
                path.display(),
                points.len()
            )
        })?;

        let vector: Vec<f32> = buf
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        points.push(Point::new(points.len() as u64, vector));
    }

    PointSet::new(points)
        .with_context(|| format!("{} holds no usable vectors", path.display()))
}

fn read_dimension(reader: &mut impl Read) -> Result<usize> {
    let mut header = [0u8; 4];
    reader.read_exact(&mut header)?;
    let dimension = i32::from_le_bytes(header);
    if dimension <= 0 {
        bail!("Invalid leading dimension {dimension}");
    }
    Ok(dimension as usize)
}
