use {
  super::*,
  crate::{
    error::Error,
    geometry::{Circle, Line, P2}
  },
  euclid::Angle,
  std::f64::consts::{PI, FRAC_PI_2}
};

fn horizontal(y: f64) -> Line {
  Line::new(P2::new(32.0, y), Angle::radians(0.0))
}

fn filter(x: f64, y: f64, r: f64) -> Circle {
  Circle::new(P2::new(x, y), r)
}

#[test] fn exact_far_field_saturates() {
  let line = horizontal(32.0);
  let exact = ExactPeriodic::new(8.0);
  assert_eq!(exact.coverage(&line, &filter(10.0, 0.0, 3.0)), 1.0);
  assert_eq!(exact.coverage(&line, &filter(10.0, 64.0, 3.0)), 0.0);
  // inside the short-circuit reach but still clear of the staircase
  assert!(exact.coverage(&line, &filter(10.0, 27.0, 3.0)) > 1.0 - 1e-12);
  assert!(exact.coverage(&line, &filter(10.0, 37.0, 3.0)) < 1e-12);
}

#[test] fn exact_zero_radius_is_binary() {
  let line = horizontal(32.0);
  for y in 0..64 {
    for x in [0.0, 3.5, 17.0, 63.0] {
      let c = filter_line(&line, 8.0, &filter(x, y as f64, 0.0));
      assert_eq!(c, if y < 32 { 1.0 } else { 0.0 }, "({}, {})", x, y);
    }
  }
}

#[test] fn exact_zero_radius_follows_staircase() {
  // y = 0.25·x + 30 on a raster of 8: the boundary steps from 32 to 40 at column 24
  let line = Line::new(P2::new(0.0, 30.0), Angle::radians(0.25f64.atan()));
  assert_eq!(filter_line(&line, 8.0, &filter(4.0, 31.0, 0.0)), 1.0);
  assert_eq!(filter_line(&line, 8.0, &filter(4.0, 33.0, 0.0)), 0.0);
  assert_eq!(filter_line(&line, 8.0, &filter(44.0, 39.0, 0.0)), 1.0);
  assert_eq!(filter_line(&line, 8.0, &filter(44.0, 41.0, 0.0)), 0.0);
}

#[test] fn exact_half_on_the_line() {
  let line = horizontal(32.0);
  let c = filter_line(&line, 8.0, &filter(13.7, 32.0, 3.0));
  assert!((c - 0.5).abs() < 1e-9, "{}", c);
}

#[test] fn exact_matches_segment_on_grid_aligned_line() {
  // a horizontal line on a raster boundary is not changed by quantization
  let line = horizontal(32.0);
  for i in 0..40 {
    let f = filter(5.3, 26.0 + i as f64 * 0.3, 4.0);
    let exact = filter_line(&line, 8.0, &f);
    let segment = SegmentEstimate.coverage(&line, &f);
    assert!((exact - segment).abs() < 1e-9, "{} vs {}", exact, segment);
  }
}

#[test] fn exact_is_monotone_across_the_line() {
  let line = Line::new(P2::new(31.3, 29.8), Angle::radians(0.2));
  let mut previous = 1.0;
  for i in 0..200 {
    let c = filter_line(&line, 4.0, &filter(20.0, 10.0 + i as f64 * 0.2, 2.5));
    assert!((0.0..=1.0).contains(&c));
    assert!(c <= previous + 1e-12, "{} > {}", c, previous);
    previous = c;
  }
  assert_eq!(previous, 0.0);
}

#[test] fn exact_opposite_orientation_is_complement() {
  let up = horizontal(32.0);
  let down = Line::new(P2::new(32.0, 32.0), Angle::radians(PI));
  for i in 0..30 {
    let f = filter(9.0, 27.0 + i as f64 * 0.35, 3.0);
    let a = filter_line(&up, 8.0, &f);
    let b = filter_line(&down, 8.0, &f);
    assert!((a + b - 1.0).abs() < 1e-9, "{} + {}", a, b);
  }
}

#[test] fn exact_vertical_line() {
  // normal (-1, 0): positive side is x > 20
  let line = Line::new(P2::new(20.0, 0.0), Angle::radians(FRAC_PI_2));
  assert_eq!(filter_line(&line, 4.0, &filter(30.0, 5.0, 2.0)), 1.0);
  assert_eq!(filter_line(&line, 4.0, &filter(10.0, 5.0, 2.0)), 0.0);
  let c = filter_line(&line, 4.0, &filter(20.0, 5.0, 2.0));
  assert!((c - 0.5).abs() < 1e-9, "{}", c);
  assert_eq!(filter_line(&line, 4.0, &filter(21.0, 5.0, 0.0)), 1.0);
  assert_eq!(filter_line(&line, 4.0, &filter(19.0, 5.0, 0.0)), 0.0);
}

#[test] fn segment_estimate() {
  let line = horizontal(10.0);
  assert!((SegmentEstimate.coverage(&line, &filter(0.0, 10.0, 2.0)) - 0.5).abs() < 1e-12);
  assert_eq!(SegmentEstimate.coverage(&line, &filter(0.0, 12.5, 2.0)), 0.0);
  assert_eq!(SegmentEstimate.coverage(&line, &filter(0.0, 7.5, 2.0)), 1.0);
  let a = SegmentEstimate.coverage(&line, &filter(0.0, 9.2, 2.0));
  let b = SegmentEstimate.coverage(&line, &filter(0.0, 10.8, 2.0));
  assert!((a + b - 1.0).abs() < 1e-12);
  assert!(a > 0.5);
  assert_eq!(SegmentEstimate.coverage(&line, &filter(0.0, 9.9, 0.0)), 1.0);
  assert_eq!(SegmentEstimate.coverage(&line, &filter(0.0, 10.1, 0.0)), 0.0);

  let area = estimate_circle_segment_area(&line, &filter(0.0, 10.0, 2.0));
  assert!((area - 2.0 * PI).abs() < 1e-12);
}

#[test] fn single_orientation_supersample_matches_exact() {
  let line = horizontal(32.0);
  let supersampled = AngleSupersampled::new(8.0, 1, P2::new(32.0, 32.0));
  for f in [filter(40.0, 30.0, 3.0), filter(12.5, 33.25, 2.0), filter(50.0, 31.0, 5.0)] {
    let a = supersampled.coverage(&line, &f);
    let b = filter_line(&line, 8.0, &f);
    assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
  }
}

#[test] fn supersample_saturates() {
  let line = Line::new(P2::new(32.0, 32.0), Angle::radians(0.1));
  let supersampled = AngleSupersampled::new(4.0, 3, P2::new(32.0, 32.0));
  assert_eq!(supersampled.coverage(&line, &filter(32.0, 0.0, 2.0)), 1.0);
  assert_eq!(supersampled.coverage(&line, &filter(32.0, 64.0, 2.0)), 0.0);
  let c = supersampled.coverage(&line, &filter(32.0, 32.0, 2.0));
  assert!(0.0 < c && c < 1.0);
}

#[test] fn strategy_dispatch() {
  let line = Line::new(P2::new(30.0, 30.0), Angle::radians(0.3));
  let f = filter(28.0, 31.0, 3.0);
  let strategy: CoverageStrategy = ExactPeriodic::new(4.0).into();
  assert_eq!(strategy.coverage(&line, &f), filter_line(&line, 4.0, &f));
  let strategy: CoverageStrategy = SegmentEstimate.into();
  assert_eq!(strategy.coverage(&line, &f), SegmentEstimate.coverage(&line, &f));
}

#[test] fn validation() {
  assert_eq!(ExactPeriodic::new(8.0).validate(2.0), Ok(()));
  assert_eq!(ExactPeriodic::new(0.0).validate(2.0), Err(Error::InvalidPeriod(0.0)));
  assert_eq!(ExactPeriodic::new(-2.0).validate(2.0), Err(Error::InvalidPeriod(-2.0)));
  assert!(ExactPeriodic::new(f64::NAN).validate(2.0).is_err());
  assert_eq!(SegmentEstimate.validate(2.0), Ok(()));
  assert_eq!(
    AngleSupersampled::new(4.0, 0, P2::origin()).validate(2.0),
    Err(Error::InvalidSamples(0))
  );
  let strategy: CoverageStrategy = AngleSupersampled::new(-1.0, 2, P2::origin()).into();
  assert_eq!(strategy.validate(2.0), Err(Error::InvalidPeriod(-1.0)));
}

#[test] fn fine_period_is_bounded_by_filter_columns() {
  assert_eq!(ExactPeriodic::new(1e-14).validate(1.0), Err(Error::InvalidPeriod(1e-14)));
  assert_eq!(ExactPeriodic::new(1e-14).validate(0.0), Ok(()));
  // 2 * 1 / 2^-15 = 65536 columns, the last accepted count
  assert_eq!(ExactPeriodic::new(1.0 / 32768.0).validate(1.0), Ok(()));
  assert_eq!(
    ExactPeriodic::new(1.0 / 65536.0).validate(1.0),
    Err(Error::InvalidPeriod(1.0 / 65536.0))
  );
  let strategy: CoverageStrategy = AngleSupersampled::new(1e-9, 2, P2::origin()).into();
  assert_eq!(strategy.validate(3.0), Err(Error::InvalidPeriod(1e-9)));
  // the segment estimate walks no raster
  assert_eq!(SegmentEstimate.validate(1e12), Ok(()));
}

#[test] fn far_filter_terminates() {
  // one period is below the spacing of f64 at this offset
  let line = Line::new(P2::new(1e17, 0.0), Angle::radians(0.0));
  let c = filter_line(&line, 1.0, &filter(1e17, 0.5, 2.0));
  assert!((0.0..=1.0).contains(&c), "{}", c);
}
