//! Random line strings (seeded random walk + replay tokens).
//!
//! Purpose
//! - Deterministic coordinate sequences for benches, property tests and the
//!   CLI `sample` command. The same `(seed, index)` always replays the same
//!   walk.
//!
//! Model
//! - Start uniformly inside `[-start_range, start_range]²`, then take `len-1`
//!   steps with a uniform heading and a length in `[0, max_step]`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{LineString, Point};

/// Random-walk configuration.
#[derive(Clone, Copy, Debug)]
pub struct WalkCfg {
    /// Number of points drawn.
    pub len: usize,
    /// Half-width of the square the first point is drawn from.
    pub start_range: f64,
    /// Upper bound on a single step length.
    pub max_step: f64,
}

impl Default for WalkCfg {
    fn default() -> Self {
        Self {
            len: 100,
            start_range: 90.0,
            max_step: 0.01,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random-walk line string.
pub fn draw_line_string(cfg: WalkCfg, tok: ReplayToken) -> LineString {
    let mut rng = tok.to_std_rng();
    let mut out = LineString::with_capacity(cfg.len);
    if cfg.len == 0 {
        return out;
    }
    let r = cfg.start_range.abs();
    let mut p = if r > 0.0 {
        Point::new(rng.gen_range(-r..=r), rng.gen_range(-r..=r))
    } else {
        Point::zeros()
    };
    out.push(p);
    let step = cfg.max_step.max(0.0);
    for _ in 1..cfg.len {
        let th = rng.gen::<f64>() * std::f64::consts::TAU;
        let s = rng.gen::<f64>() * step;
        p += Point::new(th.cos() * s, th.sin() * s);
        out.push(p);
    }
    out
}
