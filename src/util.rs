/// Run a statement and log how long it took.
macro_rules! profile(
  ($title: literal, $stmt: stmt) => {{
    let t0 = std::time::Instant::now();
    $stmt
    log::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
  }}
);

pub(crate) use profile;
