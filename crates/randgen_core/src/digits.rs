//! Middle-digit extraction shared by all three generators.
//!
//! Each recurrence step renders its raw square or product as decimal text,
//! left-zero-pads it to at least [`PAD_WIDTH`] characters, and reads out the
//! four digits at positions [2, 6). The parsed middle both feeds the next
//! recurrence state and, divided by 10000, yields the normalised ratio Ri.

use serde::{Deserialize, Serialize};

/// Minimum width the decimal rendering is zero-padded to before slicing.
pub const PAD_WIDTH: usize = 8;

/// The extracted middle digits of one arithmetic step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiddleDigits {
    /// Decimal rendering of the input, left-zero-padded to at least
    /// [`PAD_WIDTH`] characters.
    pub padded: String,
    /// The 4-character middle slice.
    pub middle: String,
    /// The middle slice parsed as an integer, in 0..=9999.
    pub value: u32,
}

impl MiddleDigits {
    /// Normalised ratio `value / 10000`, in [0, 0.9999].
    #[inline]
    pub fn ratio(&self) -> f64 {
        f64::from(self.value) / 10_000.0
    }
}

/// Extracts the four middle digits of a non-negative integer.
///
/// The input is rendered as decimal text, left-zero-padded to at least 8
/// characters, and sliced at byte positions [2, 6). A slice that comes out
/// 3 characters long is left-padded with a single `'0'` — a fixed
/// one-character correction from the classical extraction recipe. With the
/// minimum-8 padding the slice is always 4 characters, so the correction
/// is a documented guard rather than a reachable path; it deliberately
/// under-corrects slices short by more than one character.
///
/// # Examples
/// ```
/// use randgen_core::digits::extract_middle;
///
/// // 1234² = 1522756, padded to "01522756"; positions [2, 6) are "5227".
/// let d = extract_middle(1_522_756);
/// assert_eq!(d.padded, "01522756");
/// assert_eq!(d.middle, "5227");
/// assert_eq!(d.value, 5227);
/// assert_eq!(d.ratio(), 0.5227);
/// ```
pub fn extract_middle(value: u128) -> MiddleDigits {
    let padded = format!("{value:08}");
    // Padded text is ASCII digits, so byte indexing is character indexing.
    let mut middle = padded[2..6].to_string();
    if middle.len() == 3 {
        middle.insert(0, '0');
    }
    let value = middle.parse::<u32>().unwrap_or(0);
    MiddleDigits {
        padded,
        middle,
        value,
    }
}
