use num_traits::Float;

/// Incremental statistics over a stream of values.
///
/// Mean and variance follow Welford's update. Variance is the population
/// variance (divides by `n`).
#[derive(Debug, Clone)]
pub struct RunningStats<T> {
    count: usize,
    mean: T,
    m2: T,
    min: T,
    max: T,
}

impl<T: Float> Default for RunningStats<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RunningStats<T> {
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: T::zero(),
            m2: T::zero(),
            min: T::infinity(),
            max: T::neg_infinity(),
        }
    }

    pub fn push(&mut self, value: T) {
        self.count += 1;

        let n = T::from(self.count).unwrap_or_else(T::one);
        let delta = value - self.mean;
        self.mean = self.mean + delta / n;
        self.m2 = self.m2 + delta * (value - self.mean);

        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    #[inline]
    pub fn mean(&self) -> Option<T> {
        (self.count > 0).then_some(self.mean)
    }

    pub fn variance(&self) -> Option<T> {
        if self.count == 0 {
            return None;
        }

        let n = T::from(self.count)?;
        Some((self.m2 / n).max(T::zero()))
    }

    #[inline]
    pub fn std_dev(&self) -> Option<T> {
        self.variance().map(T::sqrt)
    }

    #[inline]
    pub fn min(&self) -> Option<T> {
        (self.count > 0).then_some(self.min)
    }

    #[inline]
    pub fn max(&self) -> Option<T> {
        (self.count > 0).then_some(self.max)
    }
}

impl<T: Float> Extend<T> for RunningStats<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RunningStats;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_has_no_moments() {
        let stats = RunningStats::<f64>::new();

        assert_eq!(stats.mean(), None);
        assert_eq!(stats.std_dev(), None);
        assert_eq!(stats.min(), None);
        assert_eq!(stats.max(), None);
    }

    #[test]
    fn matches_population_moments() {
        let mut stats = RunningStats::new();
        stats.extend([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);

        assert!(close(stats.mean().unwrap(), 5.0));
        assert!(close(stats.variance().unwrap(), 4.0));
        assert!(close(stats.std_dev().unwrap(), 2.0));
        assert_eq!(stats.min(), Some(2.0));
        assert_eq!(stats.max(), Some(9.0));
    }

    #[test]
    fn long_streams_stay_stable() {
        let mut stats = RunningStats::new();
        for i in 0..100_000 {
            stats.push(1e9 + (i % 2) as f64);
        }

        assert!((stats.mean().unwrap() - (1e9 + 0.5)).abs() < 1e-6);
        assert!((stats.std_dev().unwrap() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn single_value_has_zero_spread() {
        let mut stats = RunningStats::new();
        stats.push(0.75f32);

        assert_eq!(stats.mean(), Some(0.75));
        assert_eq!(stats.std_dev(), Some(0.0));
    }
}
