use crate::config::KMeansConfig;
use crate::error::{KMeansError, Result};
use crate::kmeans::{kmeans, KMeansResult};
use crate::point::Point;
use csv::ReaderBuilder;
use log::{debug, warn};
use ndarray::{Array2, ArrayView2};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// The 2D points of a run, one row per point. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    data: Array2<f64>,
}

impl DataSet {
    pub fn from_points(points: &[Point]) -> Self {
        let data = Array2::from_shape_fn((points.len(), 2), |(i, j)| match j {
            0 => points[i].x,
            _ => points[i].y,
        });
        Self { data }
    }

    /// Read a whitespace (or comma) separated text file, one point per line
    pub fn from_txt<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let unavailable = |source: io::Error| KMeansError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;
        let ds = Self::from_reader(BufReader::new(file)).map_err(unavailable)?;
        debug!("Read {} points from {:?}", ds.len(), path);
        Ok(ds)
    }

    /// Scan points from any line source. Blank lines are skipped, and so are
    /// lines without two leading numbers (with a warning). Bytes that are not
    /// UTF-8 are replaced, so such a line is skipped like any other bad line.
    pub fn from_reader<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut points = Vec::new();
        let mut buf = Vec::new();
        let mut lineno = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            lineno += 1;

            let line = String::from_utf8_lossy(&buf);
            if line.trim().is_empty() {
                continue;
            }
            match Point::scan(&line) {
                Some(p) => points.push(p),
                None => warn!("Skipping line {}: no x y pair in {:?}", lineno, line.trim_end()),
            }
        }

        Ok(Self::from_points(&points))
    }

    /// Read a delimited file without header, x in the first column and y in the second
    pub fn from_delimited<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| KMeansError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_delimited_reader(file, delimiter).map_err(|e| KMeansError::SourceUnavailable {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_delimited_reader<R: Read>(reader: R, delimiter: u8) -> csv::Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut points = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let record = result?;
            let coords: Option<(f64, f64)> = match (record.get(0), record.get(1)) {
                (Some(x), Some(y)) => x.parse().ok().zip(y.parse().ok()),
                _ => None,
            };
            match coords {
                Some(xy) => points.push(Point::from(xy)),
                None if record.iter().all(str::is_empty) => {}
                None => warn!("Skipping record {}: no x y pair in {:?}", i + 1, record),
            }
        }

        Ok(Self::from_points(&points))
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The point at index `i`
    #[inline]
    pub fn point(&self, i: usize) -> Point {
        let row = self.data.row(i);
        Point::new(row[0], row[1])
    }

    /// All points in input order
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.data.outer_iter().map(|row| Point::new(row[0], row[1]))
    }

    /// (N, 2) view of the coordinates
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Cluster these points into `k` groups, seeding from `initial` when given
    /// and from the first `k` points otherwise.
    pub fn kmeans(
        &self,
        k: usize,
        initial: Option<Vec<Point>>,
        config: &KMeansConfig,
    ) -> Result<KMeansResult> {
        kmeans(self, k, initial, config)
    }
}

impl From<Vec<Point>> for DataSet {
    fn from(points: Vec<Point>) -> Self {
        Self::from_points(&points)
    }
}
