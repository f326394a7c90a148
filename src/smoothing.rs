/// Exponential moving average over a stream of samples.
///
/// The first sample passes through untouched; every later sample is blended
/// as `alpha * x + (1 - alpha) * previous`. The blended value is both the
/// stored state and the value handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoother {
    alpha: f64,
    average: Option<f64>,
}

impl Smoother {
    pub fn new(alpha: f64) -> Self {
        Self { alpha, average: None }
    }

    pub fn update(&mut self, x: f64) -> f64 {
        let next = match self.average {
            None => x,
            Some(prev) => self.alpha * x + (1.0 - self.alpha) * prev,
        };
        self.average = Some(next);
        next
    }

    pub fn average(&self) -> Option<f64> {
        self.average
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}
