use serde_derive::Serialize;

/// Samples averaged at each end of the analysis window.
const EDGE: usize = 2;

/// Coarse vertical motion. Image coordinates: `Falling` means `y` grows.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Unknown,
    Rising,
    Falling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Falling -> Rising, the ball was struck back up.
    Bounce,
    /// Rising -> Falling, top of the arc.
    Peak,
}

impl Direction {
    #[inline]
    pub fn transition(self, next: Direction) -> Option<Transition> {
        match (self, next) {
            (Direction::Falling, Direction::Rising) => Some(Transition::Bounce),
            (Direction::Rising, Direction::Falling) => Some(Transition::Peak),
            _ => None,
        }
    }
}

/// Mean of the last `EDGE` heights minus mean of the first `EDGE`.
/// `None` when the window is too short to have two ends.
pub fn movement(window: &[f64]) -> Option<f64> {
    if window.len() < EDGE {
        return None;
    }

    let mean = |xs: &[f64]| xs.iter().sum::<f64>() / xs.len() as f64;
    let start = mean(&window[..EDGE]);
    let end = mean(&window[window.len() - EDGE..]);

    Some(end - start)
}

/// Classifies the window. Motion within `min_movement` of zero keeps `prev`.
pub fn infer(window: &[f64], prev: Direction, min_movement: f64) -> Direction {
    match movement(window) {
        Some(m) if m > min_movement => Direction::Falling,
        Some(m) if m < -min_movement => Direction::Rising,
        _ => prev,
    }
}
