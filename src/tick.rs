use serde::Deserialize;

/// Raw measurements for one refresh of a tracked task.
///
/// `None` means the upstream estimator has nothing yet (for example no
/// completed units), which is different from a measured zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Tick {
    pub elapsed: f64,
    #[serde(default)]
    pub remaining: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,
}

impl Tick {
    pub fn new(elapsed: f64, remaining: Option<f64>, speed: Option<f64>) -> Self {
        Self { elapsed, remaining, speed }
    }
}
