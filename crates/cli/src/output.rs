//! Result rendering and writing (stdout or file).

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use geoline::codec::Precision;
use geoline::geojson::Geometry;
use geoline::geom::{LineString, Ring};
use geoline::wkt::ToWkt;
use serde::Serialize;

/// Text format for geometry results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Well-Known Text.
    #[default]
    Wkt,
    /// GeoJSON Feature.
    Json,
}

pub fn render_line_string(ls: &LineString, format: Format) -> Result<String> {
    Ok(match format {
        Format::Wkt => ls.to_wkt(),
        Format::Json => ls.to_feature().to_json()?,
    })
}

pub fn render_ring(ring: &Ring, format: Format) -> Result<String> {
    Ok(match format {
        Format::Wkt => ring.to_wkt(),
        Format::Json => {
            geoline::geojson::Feature::new(Geometry::from(ring)).to_json()?
        }
    })
}

/// JSON summary of an encode result.
#[derive(Debug, Serialize)]
pub struct EncodedReport<'a> {
    pub encoded: &'a str,
    pub points: usize,
    pub factor: u32,
}

/// The bare polyline text, or an `EncodedReport` as pretty JSON.
pub fn render_encoded(
    text: &str,
    points: usize,
    precision: Precision,
    json: bool,
) -> Result<String> {
    if !json {
        return Ok(text.to_owned());
    }
    let report = EncodedReport {
        encoded: text,
        points,
        factor: precision.factor(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Print `text` to stdout, or write it (plus newline) to `out`, creating
/// parent directories as needed.
pub fn emit(text: &str, out: Option<&Path>) -> Result<()> {
    match out {
        None => {
            println!("{text}");
            Ok(())
        }
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            std::fs::write(path, format!("{text}\n"))
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = text.len() + 1, "wrote output");
            Ok(())
        }
    }
}
