use crate::dataset::DataSet;
use crate::error::{KMeansError, Result};
use csv::WriterBuilder;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Layout of the per-point result records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `x y cluster`, coordinates with six decimals, no header
    #[default]
    Plain,
    /// Tab separated with an `x y cluster` header
    Tsv,
}

/// One line per point, in input order: `x y cluster`
pub fn write_plain<W: Write>(mut writer: W, data: &DataSet, assignments: &[usize]) -> io::Result<()> {
    debug_assert_eq!(assignments.len(), data.len());
    for (p, c) in data.points().zip(assignments) {
        writeln!(writer, "{:.6} {:.6} {}", p.x, p.y, c)?;
    }
    writer.flush()
}

pub fn write_tsv<W: Write>(writer: W, data: &DataSet, assignments: &[usize]) -> io::Result<()> {
    debug_assert_eq!(assignments.len(), data.len());
    let mut wtr = WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    wtr.write_record(["x", "y", "cluster"])?;
    for (p, c) in data.points().zip(assignments) {
        wtr.write_record([p.x.to_string(), p.y.to_string(), c.to_string()])?;
    }
    wtr.flush()
}

/// Write the clustering of `data` to the file at `path`
pub fn write_output<P: AsRef<Path>>(
    path: P,
    data: &DataSet,
    assignments: &[usize],
    format: OutputFormat,
) -> Result<()> {
    let path = path.as_ref();
    let unavailable = |source: io::Error| KMeansError::SinkUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let writer = BufWriter::new(File::create(path).map_err(unavailable)?);
    match format {
        OutputFormat::Plain => write_plain(writer, data, assignments),
        OutputFormat::Tsv => write_tsv(writer, data, assignments),
    }
    .map_err(unavailable)
}
