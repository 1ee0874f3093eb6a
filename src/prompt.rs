//! Interactive providers for the cluster count and the initial centroids.

use crate::error::{KMeansError, Result};
use crate::kmeans::validate_cluster_count;
use crate::point::Point;
use std::io::{BufRead, Write};

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    let io_err = |e: std::io::Error| KMeansError::InvalidInput(e.to_string());

    write!(output, "{}", question).map_err(io_err)?;
    output.flush().map_err(io_err)?;

    let mut line = String::new();
    if input.read_line(&mut line).map_err(io_err)? == 0 {
        return Err(KMeansError::InvalidInput("unexpected end of input".to_string()));
    }
    Ok(line.trim().to_string())
}

/// Ask for the number of clusters and check it against the `n` points available
pub fn read_cluster_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    n: usize,
) -> Result<usize> {
    let answer = ask(input, output, "Enter number of clusters: ")?;
    let k = answer
        .parse::<i64>()
        .map_err(|_| KMeansError::InvalidInput(format!("not a cluster count: {:?}", answer)))?;
    let k = usize::try_from(k).map_err(|_| KMeansError::InvalidClusterCount { k, n })?;
    validate_cluster_count(k, n)?;
    Ok(k)
}

/// Ask whether the user wants to type in the initial centroids. Only `y`/`Y` says yes.
pub fn wants_initial_centroids<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    let answer = ask(input, output, "Input initial centroids? (y/n): ")?;
    Ok(matches!(answer.chars().next(), Some('y' | 'Y')))
}

/// Ask for `k` centroids, one `x y` pair per line
pub fn read_centroids<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    k: usize,
) -> Result<Vec<Point>> {
    let mut centroids = Vec::new();
    centroids.try_reserve_exact(k)?;

    for i in 0..k {
        let answer = ask(input, output, &format!("Enter centroid {} (x y): ", i + 1))?;
        let p = answer.parse::<Point>().map_err(KMeansError::InvalidInput)?;
        centroids.push(p);
    }
    Ok(centroids)
}

/// Parse a centroid list given on the command line, `x,y;x,y;...`
pub fn parse_centroid_list(s: &str) -> Result<Vec<Point>> {
    s.split(';')
        .filter(|item| !item.trim().is_empty())
        .map(|item| item.parse::<Point>().map_err(KMeansError::InvalidInput))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_cluster_count() {
        let mut out = Vec::new();
        let k = read_cluster_count(&mut Cursor::new("3\n"), &mut out, 5).unwrap();
        assert_eq!(k, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "Enter number of clusters: ");
    }

    #[test]
    fn test_read_cluster_count_out_of_range() {
        for answer in ["0\n", "6\n", "-1\n"] {
            let err = read_cluster_count(&mut Cursor::new(answer), &mut Vec::new(), 5).unwrap_err();
            assert!(matches!(err, KMeansError::InvalidClusterCount { n: 5, .. }));
        }

        let err = read_cluster_count(&mut Cursor::new("-3\n"), &mut Vec::new(), 5).unwrap_err();
        assert!(matches!(err, KMeansError::InvalidClusterCount { k: -3, n: 5 }));
        assert_eq!(err.to_string(), "Invalid number of clusters: -3 (must be between 1 and 5)");
    }

    #[test]
    fn test_read_cluster_count_garbage() {
        let err = read_cluster_count(&mut Cursor::new("three\n"), &mut Vec::new(), 5).unwrap_err();
        assert!(matches!(err, KMeansError::InvalidInput(_)));

        let err = read_cluster_count(&mut Cursor::new("2.5\n"), &mut Vec::new(), 5).unwrap_err();
        assert!(matches!(err, KMeansError::InvalidInput(_)));

        let err = read_cluster_count(&mut Cursor::new(""), &mut Vec::new(), 5).unwrap_err();
        assert!(matches!(err, KMeansError::InvalidInput(_)));
    }

    #[test]
    fn test_wants_initial_centroids() {
        assert!(wants_initial_centroids(&mut Cursor::new("y\n"), &mut Vec::new()).unwrap());
        assert!(wants_initial_centroids(&mut Cursor::new(" Yes\n"), &mut Vec::new()).unwrap());
        assert!(!wants_initial_centroids(&mut Cursor::new("n\n"), &mut Vec::new()).unwrap());
        assert!(!wants_initial_centroids(&mut Cursor::new("\n"), &mut Vec::new()).unwrap());
    }

    #[test]
    fn test_read_centroids() {
        let mut out = Vec::new();
        let c = read_centroids(&mut Cursor::new("0 0\n10.5 -1\n"), &mut out, 2).unwrap();
        assert_eq!(c, vec![Point::new(0.0, 0.0), Point::new(10.5, -1.0)]);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Enter centroid 1 (x y): Enter centroid 2 (x y): "
        );
    }

    #[test]
    fn test_read_centroids_short_input() {
        let err = read_centroids(&mut Cursor::new("0 0\n"), &mut Vec::new(), 2).unwrap_err();
        assert!(matches!(err, KMeansError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_centroid_list() {
        let c = parse_centroid_list("0,0; 10,0;").unwrap();
        assert_eq!(c, vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
        assert!(parse_centroid_list("0,0;1").is_err());
    }
}
