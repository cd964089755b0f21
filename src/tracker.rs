use tracing::{debug, info, trace};

use crate::circular_queue::CircularQueue;
use crate::config::TrackerConfig;
use crate::detection::{Detection, Sample};
use crate::direction::{self, Direction, Transition};
use crate::error::Error;
use crate::event::{Event, Milestone};
use crate::running_stats::RunningStats;
use crate::stats::Stats;
use crate::{Frame, Tracking};

/// Counts juggles of a single ball from per-frame detections.
#[derive(Debug, Clone)]
pub struct JuggleTracker {
    config: TrackerConfig,
    trail: CircularQueue<Sample>,
    heights: CircularQueue<f64>,
    window: Vec<f64>,
    direction: Direction,
    juggle_count: u32,
    touch_count: u32,
    session_start: f64,
    last_juggle_time: Option<f64>,
    intervals: Vec<f64>,
    interval_stats: RunningStats<f64>,
    frames_without_sample: u32,
    last_milestone: u32,
}

impl JuggleTracker {
    pub fn new(session_start: f64) -> Self {
        Self::build(TrackerConfig::default(), session_start)
    }

    pub fn with_config(config: TrackerConfig, session_start: f64) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::build(config, session_start))
    }

    fn build(config: TrackerConfig, session_start: f64) -> Self {
        Self {
            trail: CircularQueue::with_capacity(config.trail_capacity),
            heights: CircularQueue::with_capacity(config.height_capacity),
            window: Vec::with_capacity(config.min_window),
            direction: Direction::Unknown,
            juggle_count: 0,
            touch_count: 0,
            session_start,
            last_juggle_time: None,
            intervals: Vec::new(),
            interval_stats: RunningStats::new(),
            frames_without_sample: 0,
            last_milestone: 0,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn juggle_count(&self) -> u32 {
        self.juggle_count
    }

    #[inline]
    pub fn touch_count(&self) -> u32 {
        self.touch_count
    }

    /// One entry per counted juggle.
    #[inline]
    pub fn intervals(&self) -> &[f64] {
        &self.intervals
    }

    /// Recent positions, oldest first.
    #[inline]
    pub fn trail(&self) -> impl DoubleEndedIterator<Item = &Sample> {
        self.trail.iter()
    }

    #[inline]
    pub fn frames_without_sample(&self) -> u32 {
        self.frames_without_sample
    }

    #[inline]
    pub fn is_ball_visible(&self) -> bool {
        self.frames_without_sample == 0 && !self.trail.is_empty()
    }

    #[inline]
    pub fn session_start(&self) -> f64 {
        self.session_start
    }

    #[inline]
    pub fn last_juggle_time(&self) -> Option<f64> {
        self.last_juggle_time
    }

    fn lose_sample(&mut self) {
        self.frames_without_sample = self.frames_without_sample.saturating_add(1);

        if self.frames_without_sample > self.config.lost_frames_threshold
            && self.direction != Direction::Unknown
        {
            debug!(
                frames = self.frames_without_sample,
                "ball lost, forgetting direction"
            );
            self.direction = Direction::Unknown;
        }
    }

    fn observe(&mut self, ts: f64, det: &Detection) -> Option<Event> {
        self.frames_without_sample = 0;

        let sample = Sample::new(ts, det);
        self.heights.push(sample.height());
        self.trail.push(sample);

        if self.heights.len() < self.config.min_window {
            return None;
        }

        self.analyze(ts)
    }

    fn analyze(&mut self, ts: f64) -> Option<Event> {
        self.window.clear();
        self.window
            .extend(self.heights.last_n(self.config.min_window).copied());

        let prev = self.direction;
        let next = direction::infer(&self.window, prev, self.config.min_movement);
        self.direction = next;

        if prev != next {
            trace!(?prev, ?next, ts, "direction changed");
        }

        match prev.transition(next)? {
            Transition::Bounce => self.register_juggle(ts),
            Transition::Peak => {
                self.touch_count += 1;
                debug!(touches = self.touch_count, ts, "peak reached");

                Some(Event::Touch {
                    touches: self.touch_count,
                })
            }
        }
    }

    fn register_juggle(&mut self, ts: f64) -> Option<Event> {
        if let Some(last) = self.last_juggle_time {
            if ts - last <= self.config.debounce {
                debug!(since_last = ts - last, "juggle rejected by debounce");
                return None;
            }
        }

        self.juggle_count += 1;
        self.last_juggle_time = Some(ts);

        let interval = ts - (self.session_start + self.intervals.iter().sum::<f64>());
        self.intervals.push(interval);
        self.interval_stats.push(interval);

        debug!(count = self.juggle_count, interval, "juggle");

        let step = self.config.milestone_interval;
        let milestone = if self.juggle_count % step == 0 && self.juggle_count > self.last_milestone
        {
            self.last_milestone = self.juggle_count;
            info!(count = self.juggle_count, "milestone reached");

            Some(Milestone {
                count: self.juggle_count,
            })
        } else {
            None
        };

        Some(Event::Juggle {
            count: self.juggle_count,
            interval,
            milestone,
        })
    }
}

impl Tracking for JuggleTracker {
    fn update(&mut self, frame: &Frame) -> Option<Event> {
        match &frame.detection {
            Some(det) => self.observe(frame.timestamp, det),
            None => {
                self.lose_sample();
                None
            }
        }
    }

    fn reset(&mut self, now: f64) {
        info!(
            juggles = self.juggle_count,
            touches = self.touch_count,
            "session reset"
        );

        let config = std::mem::take(&mut self.config);
        *self = Self::build(config, now);
    }

    fn snapshot_stats(&self, now: f64) -> Stats {
        Stats::new(
            self.juggle_count,
            self.touch_count,
            now - self.session_start,
            &self.interval_stats,
            self.config.milestone_interval,
        )
    }
}
