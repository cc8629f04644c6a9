//! Classifies a point against a polygon given on the command line.
//!
//! Usage:
//! ```text
//! cargo run --example classify -- 0,0 10,0 10,10 0,10 @ 5,5
//! cargo run --example classify -- --tolerance 1.5 0,0 10,0 10,10 0,10 @ 11,5
//! RUST_LOG=polyprobe=trace cargo run --example classify -- 0,0 10,0 5,8 @ 20,20
//! ```

use polyprobe::error::OperationError;
use polyprobe::geometry::Polygon;
use polyprobe::math::point_2d::is_valid_point;
use polyprobe::math::Point2;
use polyprobe::operations::query::{BoundingBox, IsValid, PointInPolygon, PolygonsEqual};
use polyprobe::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for polyprobe.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polyprobe=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("polyprobe=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse(std::env::args().skip(1)).inspect_err(|e| {
        tracing::error!("{e}");
    })?;

    if !IsValid::new(&args.polygon).execute() {
        tracing::warn!("input is not a valid polygon");
    }
    let polygon = Polygon::try_from_coords(&args.polygon)?;

    let aabb = BoundingBox::new(polygon.points())
        .tolerance(args.tolerance)
        .extents()?;
    let bbox = aabb.to_polygon();
    println!(
        "bounding box: {} ({} x {})",
        format_points(bbox.points()),
        aabb.width(),
        aabb.height()
    );

    let is_rectangle = PolygonsEqual::new(polygon.points(), bbox.points()).execute();
    if is_rectangle {
        println!("polygon is its own bounding box");
    }

    if let Some(point) = args.point {
        let result = PointInPolygon::new(polygon.points(), point)
            .tolerance(args.tolerance)
            .execute();
        let verdict = if result.inside { "inside" } else { "outside" };
        let (x, y) = (point.x, point.y);
        match result.reason {
            Some(reason) => println!("({x}, {y}) is {verdict} the polygon ({reason})"),
            None => println!("({x}, {y}) is {verdict} the polygon"),
        }
        let boundary = polygon
            .edges()
            .map(|edge| edge.distance_to(&point))
            .fold(f64::INFINITY, f64::min);
        println!("distance to boundary: {boundary}");
    }

    Ok(())
}

#[derive(Debug)]
struct Args {
    polygon: Vec<Vec<f64>>,
    point: Option<Point2>,
    tolerance: f64,
}

impl Args {
    /// Polygon coordinates that fail to parse become NaN so that polygon
    /// validation reports them with their index. The tolerance and the query
    /// point are checked here.
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut parsed = Self {
            polygon: Vec::new(),
            point: None,
            tolerance: 0.0,
        };
        let mut after_separator = false;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--tolerance" | "-t" => {
                    let raw = args.next().ok_or_else(|| invalid("--tolerance needs a value"))?;
                    parsed.tolerance = raw
                        .parse::<f64>()
                        .ok()
                        .filter(|t| t.is_finite() && *t >= 0.0)
                        .ok_or_else(|| {
                            invalid(format!("tolerance {raw:?} is not a non-negative number"))
                        })?;
                }
                "@" => after_separator = true,
                coords => {
                    let values = parse_coords(coords);
                    if !after_separator {
                        parsed.polygon.push(values);
                    } else if parsed.point.is_some() {
                        return Err(invalid(format!("unexpected extra query point {coords:?}")));
                    } else if let [x, y] = values[..] {
                        if !is_valid_point(&values) {
                            return Err(invalid(format!("query point {coords:?} is not finite")));
                        }
                        parsed.point = Some(Point2::new(x, y));
                    } else {
                        return Err(invalid(format!(
                            "query point {coords:?} needs exactly two coordinates"
                        )));
                    }
                }
            }
        }
        if after_separator && parsed.point.is_none() {
            return Err(invalid("no query point after '@'"));
        }
        Ok(parsed)
    }
}

fn parse_coords(coords: &str) -> Vec<f64> {
    coords
        .split(',')
        .map(|c| c.trim().parse().unwrap_or(f64::NAN))
        .collect()
}

fn invalid(message: impl Into<String>) -> polyprobe::PolyprobeError {
    OperationError::InvalidInput(message.into()).into()
}

fn format_points(points: &[Point2]) -> String {
    points
        .iter()
        .map(|p| format!("({}, {})", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
