use serde_derive::Serialize;

use crate::running_stats::RunningStats;

/// How evenly spaced the juggles were, from the interval standard deviation.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regularity {
    Excellent,
    Good,
    Variable,
}

impl Regularity {
    pub fn from_std_dev(std: f64) -> Self {
        if std < 0.5 {
            Regularity::Excellent
        } else if std < 1.0 {
            Regularity::Good
        } else {
            Regularity::Variable
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Beginner,
    Decent,
    VeryGood,
    Excellent,
    Master,
}

impl Level {
    pub fn from_juggles(juggles: u32) -> Self {
        match juggles {
            100.. => Level::Master,
            50..=99 => Level::Excellent,
            20..=49 => Level::VeryGood,
            10..=19 => Level::Decent,
            _ => Level::Beginner,
        }
    }
}

/// Rhythm advice from the mean interval.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tempo {
    /// Under 0.8s per juggle, slow down for control.
    Fast,
    Steady,
    /// Over 2s per juggle, room to speed up.
    Slow,
}

impl Tempo {
    pub fn from_mean_interval(mean: f64) -> Option<Self> {
        if mean <= 0.0 {
            None
        } else if mean < 0.8 {
            Some(Tempo::Fast)
        } else if mean > 2.0 {
            Some(Tempo::Slow)
        } else {
            Some(Tempo::Steady)
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct IntervalSummary {
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
    pub regularity: Regularity,
}

impl IntervalSummary {
    pub fn from_running(stats: &RunningStats<f64>) -> Option<Self> {
        let std_dev = stats.std_dev()?;

        Some(Self {
            min: stats.min()?,
            max: stats.max()?,
            std_dev,
            regularity: Regularity::from_std_dev(std_dev),
        })
    }
}

/// Point-in-time copy of the session figures.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Stats {
    pub juggles: u32,
    pub touches: u32,
    pub session_duration: f64,
    pub juggles_per_minute: f64,
    pub mean_interval: f64,
    pub intervals: Option<IntervalSummary>,
    pub milestone_interval: u32,
}

impl Stats {
    pub fn new(
        juggles: u32,
        touches: u32,
        session_duration: f64,
        intervals: &RunningStats<f64>,
        milestone_interval: u32,
    ) -> Self {
        let juggles_per_minute = if session_duration > 0.0 {
            juggles as f64 / session_duration * 60.0
        } else {
            0.0
        };

        Self {
            juggles,
            touches,
            session_duration,
            juggles_per_minute,
            mean_interval: intervals.mean().unwrap_or(0.0),
            intervals: IntervalSummary::from_running(intervals),
            milestone_interval,
        }
    }

    #[inline]
    pub fn regularity(&self) -> Option<Regularity> {
        self.intervals.map(|s| s.regularity)
    }

    #[inline]
    pub fn next_milestone(&self) -> u32 {
        let step = self.milestone_interval.max(1);
        (self.juggles / step + 1) * step
    }

    #[inline]
    pub fn milestone_progress(&self) -> u32 {
        self.juggles % self.milestone_interval.max(1)
    }

    pub fn milestones_reached(&self) -> Vec<u32> {
        let step = self.milestone_interval.max(1);
        (1..=self.juggles / step).map(|i| i * step).collect()
    }

    #[inline]
    pub fn juggles_to_first_milestone(&self) -> u32 {
        self.milestone_interval.saturating_sub(self.juggles)
    }

    #[inline]
    pub fn level(&self) -> Level {
        Level::from_juggles(self.juggles)
    }

    #[inline]
    pub fn tempo(&self) -> Option<Tempo> {
        Tempo::from_mean_interval(self.mean_interval)
    }
}
