use ahash::RandomState;
use hashbrown::HashMap;
use log::trace;

use crate::{
    Integer, Sample, Summary,
    helper::{median_from_sorted_slice, modes_from_sorted_slice},
};

/// Central tendency of a [`Sample`]
///
/// Every method takes `&self` and leaves the sample untouched; sorting happens on
/// a copy. Because a sample always holds at least one value, none of them can fail.
impl<T: Integer> Sample<T> {
    /// Returns the exact sum of all values
    ///
    /// The values are widened to `i128`, which holds the sum of any sample of
    /// 64-bit integers that fits in memory without overflow.
    ///
    /// # Returns
    ///
    /// * `i128` - The sum of the sample
    pub fn sum(&self) -> i128 {
        self.iter().map(|&value| Into::<i128>::into(value)).sum()
    }

    /// Returns the arithmetic mean of the sample
    ///
    /// The exact sum is converted to `f64` once and divided by the count using real
    /// division, never floor division.
    ///
    /// # Returns
    ///
    /// * `f64` - The arithmetic mean
    ///
    /// # Examples
    ///
    /// ```
    /// # use sample_stats::Sample;
    /// # use assert_approx_eq::assert_approx_eq;
    /// let sample: Sample = "1 2 3 4".parse().unwrap();
    /// assert_approx_eq!(sample.mean(), 2.5);
    ///
    /// let sample: Sample = "-3 4".parse().unwrap();
    /// assert_approx_eq!(sample.mean(), 0.5);
    /// ```
    pub fn mean(&self) -> f64 {
        self.sum() as f64 / self.len() as f64
    }

    /// Returns a copy of the values in ascending order
    pub fn sorted(&self) -> Vec<T> {
        let mut sorted = self.as_slice().to_vec();
        sorted.sort();
        sorted
    }

    /// Returns the median (middle value) of the sample
    ///
    /// For an odd count this is the middle element of the sorted values, for an
    /// even count the average of the two central elements.
    ///
    /// # Returns
    ///
    /// * `f64` - The median
    ///
    /// # Examples
    ///
    /// ```
    /// # use sample_stats::Sample;
    /// let sample: Sample = "9 1 5".parse().unwrap();
    /// assert_eq!(sample.median(), 5.0);
    ///
    /// let sample: Sample = "4 1 3 2".parse().unwrap();
    /// assert_eq!(sample.median(), 2.5);
    /// ```
    pub fn median(&self) -> f64 {
        median_from_sorted_slice(&self.sorted())
    }

    /// Returns how many times each distinct value occurs
    ///
    /// # Returns
    ///
    /// * `HashMap<T, usize, RandomState>` - Maps each value to its frequency count
    pub fn frequencies(&self) -> HashMap<T, usize, RandomState> {
        let mut freq = HashMap::with_hasher(RandomState::default());
        for &value in self.iter() {
            *freq.entry(value).or_insert(0) += 1;
        }
        freq
    }

    /// Returns the mode(s) of the sample in ascending order
    ///
    /// All values sharing the highest frequency are reported. When every value
    /// occurs exactly once there is no mode and the result is empty; a sample of
    /// a single value is the exception and reports that value.
    ///
    /// # Returns
    ///
    /// * `Vec<T>` - The modes in ascending order, empty if there is no mode
    ///
    /// # Examples
    ///
    /// ```
    /// # use sample_stats::Sample;
    /// let sample: Sample = "1 1 2 2 3".parse().unwrap();
    /// assert_eq!(sample.mode(), vec![1, 2]);
    ///
    /// let sample: Sample = "1 2 3 4".parse().unwrap();
    /// assert!(sample.mode().is_empty());
    ///
    /// let sample: Sample = "5".parse().unwrap();
    /// assert_eq!(sample.mode(), vec![5]);
    /// ```
    pub fn mode(&self) -> Vec<T> {
        self.mode_from_sorted(&self.sorted())
    }

    /// Computes count, mean, median and mode in one go
    ///
    /// The values are sorted once and the median and modes are both read off the
    /// sorted copy.
    ///
    /// # Returns
    ///
    /// * `Summary<T>` - The statistics of the sample
    pub fn summary(&self) -> Summary<T> {
        let sorted = self.sorted();

        let summary = Summary {
            count: self.len(),
            mean: self.mean(),
            median: median_from_sorted_slice(&sorted),
            modes: self.mode_from_sorted(&sorted),
        };
        trace!("{summary:?}");
        summary
    }

    // A lone value is its own mode, otherwise some value has to repeat
    fn mode_from_sorted(&self, sorted: &[T]) -> Vec<T> {
        let (modes, max_freq) = modes_from_sorted_slice(sorted);
        if max_freq > 1 || self.len() == 1 {
            modes
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn sample(line: &str) -> Sample {
        line.parse().unwrap()
    }

    #[test]
    fn test_mean() {
        assert_approx_eq!(sample("1 2 2 3").mean(), 2.0);
        assert_approx_eq!(sample("1 2 3 4").mean(), 2.5);
        assert_approx_eq!(sample("5").mean(), 5.0);
        assert_approx_eq!(sample("-1 -2").mean(), -1.5);
        assert_approx_eq!(sample("1 2").mean(), 1.5);
    }

    #[test]
    fn test_mean_is_order_independent() {
        assert_eq!(sample("10 -4 7 3").mean(), sample("3 7 -4 10").mean());
    }

    #[test]
    fn test_sum_is_exact() {
        let s = sample("9007199254740000 1000 -1000 7");
        assert_eq!(s.sum(), 9_007_199_254_740_007);
        let s = sample("9223372036854775807 9223372036854775807 -9223372036854775808");
        assert_eq!(s.sum(), i64::MAX as i128 - 1);
    }

    #[test]
    fn test_mean_does_not_overflow() {
        let s = sample("9223372036854775807 9223372036854775807");
        assert_eq!(s.mean(), i64::MAX as f64);
    }

    #[test]
    fn test_mean_and_median_above_2_pow_53() {
        let s = sample("9007199254740993 -9007199254740992");
        assert_eq!(s.sum(), 1);
        assert_approx_eq!(s.mean(), 0.5);
        assert_approx_eq!(s.median(), 0.5);
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(sample("5").median(), 5.0);
        assert_eq!(sample("3 1 2").median(), 2.0);
        assert_eq!(sample("7 -2 9 4 4").median(), 4.0);
    }

    #[test]
    fn test_median_even() {
        assert_eq!(sample("1 2 3 4").median(), 2.5);
        assert_eq!(sample("4 1 2 2").median(), 2.0);
        assert_eq!(sample("-5 -2").median(), -3.5);
    }

    #[test]
    fn test_median_leaves_sample_untouched() {
        let s = sample("3 1 2");
        s.median();
        assert_eq!(s.as_slice(), &[3, 1, 2]);
        assert_eq!(s.sorted(), vec![1, 2, 3]);
    }

    #[test]
    fn test_frequencies() {
        let freq = sample("1 2 2 3 2").frequencies();
        assert_eq!(freq.len(), 3);
        assert_eq!(freq.get(&2), Some(&3));
        assert_eq!(freq.get(&1), Some(&1));
        assert_eq!(freq.get(&4), None);
    }

    #[test]
    fn test_mode_single() {
        assert_eq!(sample("1 2 2 3").mode(), vec![2]);
        assert_eq!(sample("7 7 7 1 1").mode(), vec![7]);
    }

    #[test]
    fn test_mode_multiple_sorted() {
        assert_eq!(sample("1 1 2 2 3").mode(), vec![1, 2]);
        assert_eq!(sample("9 2 9 -4 2 -4 0").mode(), vec![-4, 2, 9]);
    }

    #[test]
    fn test_mode_none_when_all_distinct() {
        assert!(sample("1 2 3 4").mode().is_empty());
        assert!(sample("-1 1").mode().is_empty());
    }

    #[test]
    fn test_mode_lone_value() {
        assert_eq!(sample("5").mode(), vec![5]);
        assert_eq!(sample("5 5").mode(), vec![5]);
    }

    #[test]
    fn test_mode_agrees_with_frequencies() {
        for line in ["1 2 2 3", "1 1 2 2 3", "8 -3 8 -3 0 12 12", "4 4 4 4"] {
            let s = sample(line);
            let freq = s.frequencies();
            let max_freq = freq.values().copied().max().unwrap();
            for mode in s.mode() {
                assert_eq!(freq[&mode], max_freq, "{line:?}");
            }
            let expected = freq.values().filter(|&&count| count == max_freq).count();
            assert_eq!(s.mode().len(), expected, "{line:?}");
        }
    }

    #[test]
    fn test_summary_matches_individual_statistics() {
        for line in ["1 2 2 3", "1 2 3 4", "5", "1 1 2 2 3", "8 -3 8 -3 0 12 12", "4 4 4 4"] {
            let s = sample(line);
            let summary = s.summary();
            assert_eq!(summary.count, s.len());
            assert_eq!(summary.mean, s.mean());
            assert_eq!(summary.median, s.median());
            assert_eq!(summary.modes, s.mode(), "modes differ for {line:?}");
        }
    }

    #[test]
    fn test_narrow_integer_type() {
        let s: Sample<u8> = "255 255 1".parse().unwrap();
        assert_approx_eq!(s.mean(), 170.333, 0.001);
        assert_eq!(s.median(), 255.0);
        assert_eq!(s.mode(), vec![255]);
    }
}
