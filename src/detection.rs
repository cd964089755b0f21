use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

/// Ball found by the external detector: centre in pixel space and enclosing
/// radius. Larger `y` is lower in the frame.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub x: f64,
    pub y: f64,
    #[serde(rename = "r", default)]
    pub radius: u32,
}

impl Detection {
    #[inline]
    pub fn new(x: f64, y: f64, radius: u32) -> Self {
        Self { x, y, radius }
    }

    #[inline(always)]
    pub fn center(&self) -> na::Point2<f64> {
        na::Point2::new(self.x, self.y)
    }
}

/// One observed position kept in the trajectory trail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub pos: na::Point2<f64>,
    pub t: f64,
}

impl Sample {
    #[inline]
    pub fn new(t: f64, det: &Detection) -> Self {
        Self {
            pos: det.center(),
            t,
        }
    }

    #[inline(always)]
    pub fn height(&self) -> f64 {
        self.pos.y
    }
}
