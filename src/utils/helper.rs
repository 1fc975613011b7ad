/// Returns the median from a sorted, non-empty slice of integers
///
/// The two central values of an even-length slice are added exactly as `i128`
/// and only the total is converted to `f64`, so the midpoint neither overflows
/// nor loses the low bits of large values.
///
/// # Arguments
///
/// * `ss` - The sorted slice, must not be empty
///
/// # Returns
///
/// * `f64` - The median
#[inline]
pub fn median_from_sorted_slice<T: Copy + Into<i128>>(ss: &[T]) -> f64 {
    let len = ss.len();
    let mid = len / 2;
    let upper: i128 = ss[mid].into();
    if len % 2 == 0 {
        let lower: i128 = ss[mid - 1].into();
        (lower + upper) as f64 / 2.0
    } else {
        upper as f64
    }
}

/// Returns the values with the longest run in a sorted slice, together with that run length
///
/// Equal values are adjacent in a sorted slice, so one pass over the runs finds
/// every value sharing the highest frequency, already in ascending order.
///
/// # Arguments
///
/// * `ss` - The sorted slice
///
/// # Returns
///
/// * `(Vec<T>, usize)` - The most frequent values and their frequency, `(vec![], 0)` if the slice is empty
pub fn modes_from_sorted_slice<T: Copy + PartialEq>(ss: &[T]) -> (Vec<T>, usize) {
    let mut modes = Vec::new();
    let mut max_freq = 0;

    for run in ss.chunk_by(|a, b| a == b) {
        if run.len() > max_freq {
            max_freq = run.len();
            modes.clear();
        }
        if run.len() == max_freq {
            modes.push(run[0]);
        }
    }

    (modes, max_freq)
}

/// Returns `true` if the value has no fractional part
///
/// # Arguments
///
/// * `value` - The value to check
///
/// # Returns
///
/// * `bool` - True if `value` is finite and whole
#[inline]
pub fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}
