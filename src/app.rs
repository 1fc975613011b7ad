use log::{debug, warn};

use std::io::{self, BufRead, Write};

use crate::{Integer, Result, Sample};

/// Prompt written before the input line is read
pub const PROMPT: &str = "Enter integers separated by spaces:";

/// Line written instead of the report when the input is empty or not all integers
pub const INVALID_INPUT: &str = "Error: please enter at least one integer.";

/// Reads a single line from `input` and parses it into a [`Sample`]
///
/// End of input before any line is treated as an empty line.
///
/// # Arguments
///
/// * `input` - The reader to take the line from
///
/// # Returns
///
/// * `Result<Sample<T>>` - The parsed sample, or the reason the line was rejected
pub fn read_sample<T: Integer, R: BufRead>(input: &mut R) -> Result<Sample<T>> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    line.parse()
}

/// Runs one prompt, read, compute and print cycle
///
/// Writes the prompt, reads one line of integers from `input` and writes either the
/// four-line summary or the invalid-input message to `output`. Rejected input is not
/// an error: the only errors returned are failures to write to `output`.
///
/// # Examples
///
/// ```
/// let mut output = Vec::new();
/// sample_stats::run("1 1 2 2 3\n".as_bytes(), &mut output).unwrap();
/// assert_eq!(
///     String::from_utf8(output).unwrap(),
///     "Enter integers separated by spaces:\nCount: 5\nMean: 1.80\nMedian: 2\nMode: 1 2\n"
/// );
/// ```
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "{PROMPT}")?;
    output.flush()?;

    match read_sample::<i64, _>(&mut input) {
        Ok(sample) => write!(output, "{}", sample.summary())?,
        Err(err) => {
            if err.is_invalid_input() {
                debug!("rejected input: {err}");
            } else {
                warn!("{err}");
            }
            writeln!(output, "{INVALID_INPUT}")?;
        }
    }

    output.flush()
}
