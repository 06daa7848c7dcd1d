use super::constants::COUNTER_STEPS;

/// Displayed value for one counter tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFrame {
    Running(i64),
    /// Snapped to the exact target; stop ticking.
    Done(i64),
}

/// Count-up state for a single stat element.
#[derive(Clone, Copy, Debug)]
pub struct CounterAnimation {
    current: f64,
    target: f64,
}

impl CounterAnimation {
    pub fn new(target: f64) -> Self {
        Self {
            current: 0.0,
            target,
        }
    }

    /// Advance by one fixed-interval tick. Intermediate frames carry the
    /// floor of the running value; the final frame carries the exact target.
    pub fn tick(&mut self) -> CounterFrame {
        self.current += self.target / COUNTER_STEPS;
        if self.current >= self.target {
            self.current = self.target;
            CounterFrame::Done(self.target as i64)
        } else {
            CounterFrame::Running(self.current.floor() as i64)
        }
    }

    pub fn value(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}
