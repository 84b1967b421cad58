//! Left-to-right delimiter scanning
//!
//! The first phase of the pipeline: locate every non-overlapping occurrence
//! of the delimiter token and record its byte offset, in scan order.

/// The two-character token that opens and closes an embedded math expression.
pub const DELIMITER: &str = "$$";

/// Collect the byte offset of every non-overlapping occurrence of
/// [`DELIMITER`] in `input`, ascending.
///
/// Scanning resumes immediately past the end of each match, so `"$$$"`
/// yields one offset and `"$$$$"` yields two adjacent ones. Offsets are byte
/// offsets into `input`; the token is ASCII, so slicing at them is always
/// valid even for inputs containing multi-byte characters.
pub fn scan_delimiters(input: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut cursor = 0;

    while let Some(found) = input[cursor..].find(DELIMITER) {
        let offset = cursor + found;
        positions.push(offset);
        cursor = offset + DELIMITER.len();
    }

    positions
}
