use log::debug;
use num_traits::PrimInt;

use core::{
    fmt::{Debug, Display},
    hash::Hash,
    num::ParseIntError,
    str::FromStr,
};

use crate::{Error, Result};

/// Integer types a [`Sample`] can hold
///
/// Implemented for `i8` through `i64` and `u8` through `u64`, all of which widen
/// losslessly to `i128`; the binary uses `i64`.
pub trait Integer:
    PrimInt + Hash + Debug + Display + Into<i128> + FromStr<Err = ParseIntError>
{
}

impl<T> Integer for T where
    T: PrimInt + Hash + Debug + Display + Into<i128> + FromStr<Err = ParseIntError>
{
}

/// A non-empty, immutable sequence of integers, kept in the order it was read.
///
/// A `Sample` can only be built from at least one value, so every statistic it
/// exposes is defined and none of them return an `Option`.
///
/// # Examples
///
/// ```
/// # use sample_stats::Sample;
/// let sample: Sample = "3 -1 +4".parse().unwrap();
/// assert_eq!(sample.as_slice(), &[3, -1, 4]);
/// assert_eq!(sample.len(), 3);
///
/// assert!("".parse::<Sample>().is_err());
/// assert!("1 a 3".parse::<Sample>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample<T = i64> {
    /// Values in input order
    data: Vec<T>,
}

impl<T: Integer> Sample<T> {
    /// Creates a new sample from the given values
    ///
    /// # Arguments
    ///
    /// * `data` - The values, in input order
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - The sample, or [`Error::Empty`] if `data` is empty
    pub fn new(data: Vec<T>) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::Empty);
        }
        Ok(Self { data })
    }

    /// Returns the number of values in the sample, always at least one
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the values in input order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator over the values in input order
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the sample and returns its values
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

impl<T: Integer> TryFrom<Vec<T>> for Sample<T> {
    type Error = Error;

    fn try_from(data: Vec<T>) -> Result<Self> {
        Self::new(data)
    }
}

impl<T: Integer> FromStr for Sample<T> {
    type Err = Error;

    /// Parses one line of whitespace-separated base-10 integers
    ///
    /// Surrounding whitespace is ignored and tokens may carry a leading `+` or `-`.
    /// A blank line yields [`Error::Empty`]; the first token that is not an integer
    /// of type `T` (including one out of its range) yields [`Error::InvalidToken`].
    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Err(Error::Empty);
        }

        let data = line
            .split_whitespace()
            .map(|token| {
                token.parse::<T>().map_err(|source| Error::InvalidToken {
                    token: token.to_owned(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("parsed {} integers", data.len());
        Self::new(data)
    }
}

impl<'a, T> IntoIterator for &'a Sample<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
