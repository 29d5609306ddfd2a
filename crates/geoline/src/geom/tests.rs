use super::rand::{draw_line_string, ReplayToken, WalkCfg};
use super::*;
use nalgebra::vector;

fn unit_square_ccw() -> Vec<Point> {
    vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ]
}

#[test]
fn orientation_of_known_square() {
    let ccw = unit_square_ccw();
    assert_eq!(orientation_of(&ccw), Some(Orientation::Ccw));
    assert!((signed_area2(&ccw) - 2.0).abs() < 1e-12);

    let mut cw = ccw.clone();
    cw.reverse();
    assert_eq!(orientation_of(&cw), Some(Orientation::Cw));

    // Explicit closure does not change the sum.
    let mut closed = ccw.clone();
    closed.push(ccw[0]);
    assert_eq!(signed_area2(&closed), signed_area2(&ccw));
}

#[test]
fn orientation_of_degenerate_is_none() {
    assert_eq!(orientation_of(&[]), None);
    assert_eq!(orientation_of(&[vector![1.0, 2.0]]), None);
    let line = [vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
    assert_eq!(orientation_of(&line), None);
}

#[test]
fn ring_orientation_and_reverse() {
    let mut r = Ring::from(unit_square_ccw());
    assert_eq!(r.orientation(), Some(Orientation::Ccw));
    r.reverse();
    assert_eq!(r.orientation(), Some(Orientation::Ccw.reversed()));
}

#[test]
fn ring_close_is_idempotent() {
    let mut r = Ring::from(unit_square_ccw());
    assert!(!r.is_closed());
    r.close();
    assert!(r.is_closed());
    assert_eq!(r.len(), 5);
    r.close();
    assert_eq!(r.len(), 5);

    let mut empty = Ring::default();
    empty.close();
    assert!(empty.is_empty());
    assert!(!empty.is_closed());
}

#[test]
fn bound_normalizes_and_contains() {
    let b = Bound::new(vector![1.0, -1.0], vector![-1.0, 1.0]);
    assert_eq!(b.min, vector![-1.0, -1.0]);
    assert_eq!(b.max, vector![1.0, 1.0]);
    assert!(b.contains(vector![0.0, 0.0]));
    assert!(b.contains(vector![1.0, 1.0]));
    assert!(!b.contains(vector![1.5, 0.0]));
    assert_eq!(b.center(), vector![0.0, 0.0]);
    assert_eq!((b.width(), b.height()), (2.0, 2.0));
    assert!(!b.is_degenerate());
    assert!(Bound::from_point(vector![3.0, 4.0]).is_degenerate());
    assert!(Bound::new(vector![0.0, 0.0], vector![1.0, 0.0]).is_degenerate());
}

#[test]
fn bound_from_points_and_ring() {
    assert!(Bound::from_points(&[]).is_none());
    let b = Bound::from_points(&unit_square_ccw()).unwrap();
    assert_eq!(b, Bound::new(vector![0.0, 0.0], vector![1.0, 1.0]));
    let r = b.to_ring();
    assert!(r.is_closed());
    assert_eq!(r.orientation(), Some(Orientation::Ccw));
    assert_eq!((b.left(), b.right(), b.bottom(), b.top()), (0.0, 1.0, 0.0, 1.0));
}

#[test]
fn line_string_preallocate() {
    let ls = LineString::preallocate(10, 1000);
    assert_eq!(ls.len(), 10);
    assert!(ls.points.capacity() >= 1000);
    assert!(ls.points.iter().all(|p| *p == Point::zeros()));
}

#[test]
fn line_string_from_xy_and_yx_data() {
    let data = [[1.0, 2.0], [3.0, 4.0]];
    let xy = LineString::from_xy_data(&data);
    assert_eq!(xy.points, vec![vector![1.0, 2.0], vector![3.0, 4.0]]);
    let yx = LineString::from_yx_data(&data);
    assert_eq!(yx.points, vec![vector![2.0, 1.0], vector![4.0, 3.0]]);
}

#[test]
fn line_string_from_slices_skips_short_entries() {
    let data: Vec<Vec<f64>> = vec![vec![1.0, 2.0, -1.0], vec![], vec![3.0, 4.0]];
    let xy = LineString::from_xy_slices(&data);
    assert_eq!(xy.points, vec![vector![1.0, 2.0], vector![3.0, 4.0]]);

    let data: Vec<Vec<f64>> = vec![vec![1.0, 2.0], vec![3.0, 4.0, -1.0]];
    let yx = LineString::from_yx_slices(&data);
    assert_eq!(yx.points, vec![vector![2.0, 1.0], vector![4.0, 3.0]]);
}

#[test]
fn line_string_bound_and_ends() {
    let ls: LineString = [vector![1.0, 5.0], vector![-2.0, 3.0]].into_iter().collect();
    assert_eq!(ls.first(), Some(vector![1.0, 5.0]));
    assert_eq!(ls.last(), Some(vector![-2.0, 3.0]));
    let b = ls.bound().unwrap();
    assert_eq!(b.min, vector![-2.0, 3.0]);
    assert_eq!(b.max, vector![1.0, 5.0]);
    assert!(LineString::new().bound().is_none());
}

#[test]
fn sampler_replays_by_token() {
    let cfg = WalkCfg {
        len: 50,
        ..WalkCfg::default()
    };
    let tok = ReplayToken { seed: 7, index: 3 };
    let a = draw_line_string(cfg, tok);
    let b = draw_line_string(cfg, tok);
    assert_eq!(a, b);
    assert_eq!(a.len(), 50);
    let c = draw_line_string(cfg, ReplayToken { seed: 7, index: 4 });
    assert_ne!(a, c);
    assert!(draw_line_string(WalkCfg { len: 0, ..cfg }, tok).is_empty());
}
