use serde_derive::Serialize;

/// First time the juggle count reached a multiple of the milestone interval.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub count: u32,
}

/// Emitted synchronously by the tracker for a tick.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Top of the arc reached.
    Touch { touches: u32 },
    /// A counted juggle.
    Juggle {
        count: u32,
        interval: f64,
        milestone: Option<Milestone>,
    },
}

impl Event {
    #[inline]
    pub fn milestone(&self) -> Option<Milestone> {
        match self {
            Event::Juggle { milestone, .. } => *milestone,
            Event::Touch { .. } => None,
        }
    }

    #[inline]
    pub fn is_juggle(&self) -> bool {
        matches!(self, Event::Juggle { .. })
    }
}
