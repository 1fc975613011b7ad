use core::fmt;

use crate::helper::is_whole;

/// Count, mean, median and mode of a [`Sample`](crate::Sample)
///
/// Its [`Display`](fmt::Display) implementation renders the fixed four-line report:
///
/// ```text
/// Count: 4
/// Mean: 2.50
/// Median: 2.50
/// Mode: None
/// ```
///
/// The mean always carries two decimals. The median is printed as an integer when
/// it is whole and with two decimals otherwise. Modes are listed in ascending
/// order separated by single spaces, or as `None`.
///
/// # Examples
///
/// ```
/// # use sample_stats::Sample;
/// let sample: Sample = "1 2 2 3".parse().unwrap();
/// assert_eq!(
///     sample.summary().to_string(),
///     "Count: 4\nMean: 2.00\nMedian: 2\nMode: 2\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<T> {
    /// Number of values in the sample
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Middle value, or the average of the two middle values
    pub median: f64,
    /// Most frequent values in ascending order, empty if there is no mode
    pub modes: Vec<T>,
}

impl<T: fmt::Display> fmt::Display for Summary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Count: {}", self.count)?;
        writeln!(f, "Mean: {:.2}", self.mean)?;

        if is_whole(self.median) {
            writeln!(f, "Median: {:.0}", self.median)?;
        } else {
            writeln!(f, "Median: {:.2}", self.median)?;
        }

        write!(f, "Mode:")?;
        if self.modes.is_empty() {
            write!(f, " None")?;
        }
        for mode in &self.modes {
            write!(f, " {mode}")?;
        }
        writeln!(f)
    }
}
