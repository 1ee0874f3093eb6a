use std::fmt;
use std::str::FromStr;

/// A point in the plane. Two points are the same point when their coordinates are.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Best-effort scan of a text line: the first two fields that parse as numbers.
    /// Fields are separated by whitespace or commas. Anything after them is ignored.
    pub fn scan(line: &str) -> Option<Self> {
        let mut fields = split_fields(line);
        let x = fields.next()?.parse().ok()?;
        let y = fields.next()?.parse().ok()?;
        Some(Self { x, y })
    }
}

fn split_fields(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|f| !f.is_empty())
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Strict parse of exactly two coordinates, `"x y"` or `"x,y"`.
impl FromStr for Point {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = split_fields(s).collect();
        if fields.len() != 2 {
            return Err(format!("expected two coordinates, got {:?}", s.trim()));
        }
        let coord = |f: &str| {
            f.parse::<f64>()
                .map_err(|e| format!("bad coordinate {:?}: {}", f, e))
        };
        Ok(Self {
            x: coord(fields[0])?,
            y: coord(fields[1])?,
        })
    }
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(distance(&a, &b), 5.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Point::new(-1.5, 2.25);
        let b = Point::new(7.0, -3.0);
        assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn test_distance_zero_only_for_same_point() {
        let a = Point::new(1.0, 2.0);
        assert_eq!(distance(&a, &a), 0.0);
        assert!(distance(&a, &Point::new(1.0, 2.0 + 1e-9)) > 0.0);
    }

    #[test]
    fn test_scan() {
        assert_eq!(Point::scan("1.5 -2"), Some(Point::new(1.5, -2.0)));
        assert_eq!(Point::scan("  3\t4  trailing"), Some(Point::new(3.0, 4.0)));
        assert_eq!(Point::scan("5,6"), Some(Point::new(5.0, 6.0)));
        assert_eq!(Point::scan("7"), None);
        assert_eq!(Point::scan("x y"), None);
        assert_eq!(Point::scan(""), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("1 2".parse::<Point>(), Ok(Point::new(1.0, 2.0)));
        assert_eq!(" 1e1 , -0.5 ".parse::<Point>(), Ok(Point::new(10.0, -0.5)));
        assert!("1 2 3".parse::<Point>().is_err());
        assert!("1".parse::<Point>().is_err());
        assert!("a b".parse::<Point>().is_err());
    }
}
