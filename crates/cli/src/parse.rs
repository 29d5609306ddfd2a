//! Argument parsing for coordinate lists and bounds.
//!
//! Points are whitespace-separated `x,y` pairs: `"-2,0.5 0,0.5 0,-0.5"`.
//! Bounds are `minx,miny,maxx,maxy`.

use anyhow::{bail, Context, Result};
use geoline::geom::{Bound, LineString, Point};

fn parse_f64(s: &str) -> Result<f64> {
    let v: f64 = s
        .trim()
        .parse()
        .with_context(|| format!("not a number: {s:?}"))?;
    if !v.is_finite() {
        bail!("coordinate must be finite: {s:?}");
    }
    Ok(v)
}

pub fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("expected x,y but got {s:?}"))?;
    Ok(Point::new(parse_f64(x)?, parse_f64(y)?))
}

pub fn parse_points(s: &str) -> Result<LineString> {
    s.split_whitespace().map(parse_point).collect()
}

pub fn parse_bound(s: &str) -> Result<Bound> {
    let vals = s
        .split(',')
        .map(parse_f64)
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("invalid bound {s:?}"))?;
    let [minx, miny, maxx, maxy] = vals[..] else {
        bail!("bound needs 4 values minx,miny,maxx,maxy, got {}", vals.len());
    };
    Ok(Bound::new(Point::new(minx, miny), Point::new(maxx, maxy)))
}
