use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use geoline::codec::{decode, encode, Precision};
use geoline::geom::rand::{draw_line_string, ReplayToken, WalkCfg};
use geoline::geom::Orientation;
use geoline::wrap::wrap_ring;
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;
mod parse;

use output::{emit, render_encoded, render_line_string, render_ring, Format};

#[derive(Parser)]
#[command(name = "geoline")]
#[command(about = "Encode, decode and wrap 2-D coordinate sequences")]
struct Cmd {
    /// Write the result to this file instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Encode "x,y x,y ..." as polyline text
    Encode {
        #[arg(long, allow_hyphen_values = true)]
        points: String,
        /// Decimal places kept (factor 10^N)
        #[arg(long, default_value_t = 5)]
        precision: u32,
        /// Print a JSON report instead of the bare text
        #[arg(long)]
        json: bool,
    },
    /// Decode polyline text into a line string
    Decode {
        #[arg(long)]
        text: String,
        #[arg(long, default_value_t = 5)]
        precision: u32,
        #[arg(long, value_enum, default_value_t = Format::Wkt)]
        format: Format,
    },
    /// Close a ring along a bound's perimeter
    Wrap {
        /// minx,miny,maxx,maxy
        #[arg(long, allow_hyphen_values = true)]
        bound: String,
        #[arg(long, allow_hyphen_values = true)]
        points: String,
        #[arg(long, value_enum)]
        orient: Orient,
        #[arg(long, value_enum, default_value_t = Format::Wkt)]
        format: Format,
    },
    /// Draw a seeded random walk and print it encoded
    Sample {
        #[arg(long, default_value_t = 100)]
        len: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 5)]
        precision: u32,
        /// Print a JSON report instead of the bare text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Orient {
    Cw,
    Ccw,
}

impl From<Orient> for Orientation {
    fn from(o: Orient) -> Self {
        match o {
            Orient::Cw => Orientation::Cw,
            Orient::Ccw => Orientation::Ccw,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let text = match cmd.action {
        Action::Encode {
            points,
            precision,
            json,
        } => run_encode(&points, precision, json)?,
        Action::Decode {
            text,
            precision,
            format,
        } => run_decode(&text, precision, format)?,
        Action::Wrap {
            bound,
            points,
            orient,
            format,
        } => run_wrap(&bound, &points, orient.into(), format)?,
        Action::Sample {
            len,
            seed,
            index,
            precision,
            json,
        } => run_sample(len, ReplayToken { seed, index }, precision, json)?,
    };
    emit(&text, cmd.out.as_deref())
}

fn precision(decimals: u32) -> Result<Precision> {
    Precision::from_decimals(decimals)
        .with_context(|| format!("precision 10^{decimals} does not fit in 32 bits"))
}

fn run_encode(points: &str, decimals: u32, json: bool) -> Result<String> {
    let ls = parse::parse_points(points)?;
    tracing::debug!(?ls, "parsed points");
    let p = precision(decimals)?;
    let text = encode(&ls.points, p);
    tracing::info!(points = ls.len(), decimals, chars = text.len(), "encode");
    render_encoded(&text, ls.len(), p, json)
}

fn run_decode(text: &str, decimals: u32, format: Format) -> Result<String> {
    let ls = decode(text, precision(decimals)?).context("decoding polyline text")?;
    tracing::info!(chars = text.len(), decimals, points = ls.len(), "decode");
    render_line_string(&ls, format)
}

fn run_wrap(bound: &str, points: &str, orient: Orientation, format: Format) -> Result<String> {
    let bound = parse::parse_bound(bound)?;
    let ring = parse::parse_points(points)?;
    tracing::debug!(?bound, ?ring, "parsed wrap input");
    let out = wrap_ring(&bound, &ring.points, orient).context("wrapping ring")?;
    tracing::info!(
        input = ring.len(),
        output = out.len(),
        orient = %orient,
        "wrap"
    );
    render_ring(&out, format)
}

fn run_sample(len: usize, tok: ReplayToken, decimals: u32, json: bool) -> Result<String> {
    let cfg = WalkCfg {
        len,
        ..WalkCfg::default()
    };
    let ls = draw_line_string(cfg, tok);
    let p = precision(decimals)?;
    let text = ls.encode(p);
    tracing::info!(len, seed = tok.seed, index = tok.index, chars = text.len(), "sample");
    render_encoded(&text, ls.len(), p, json)
}
