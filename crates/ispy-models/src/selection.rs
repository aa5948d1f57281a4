//! Cell index extraction from inference replies.
//!
//! The inference endpoint answers in free-form prose ("The object is
//! in section 4, maybe also 5."). This module pulls the referenced
//! grid indices back out so the next round knows where to look.

use thiserror::Error;

/// Errors that can occur during cell index extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Reply text contained no index values at all
    #[error("no cell indices found in reply: {0:?}")]
    NoIndices(String),
}

/// Result type for cell index extraction.
pub type SelectionResult<T> = Result<T, SelectionError>;

/// Extract grid cell indices from a free-form inference reply.
///
/// Scans the text for runs of ASCII digits and parses each run as one
/// index, so "sections 4 and 5" yields `[4, 5]`. Duplicates are
/// dropped, first occurrence order is kept. Values are not range
/// checked here: an out-of-range index must surface as a section
/// lookup failure downstream, not be silently discarded.
pub fn extract_cell_indices(text: &str) -> SelectionResult<Vec<u32>> {
    let mut indices = Vec::new();
    let mut digits = String::new();

    for c in text.chars().chain(std::iter::once(' ')) {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        if !digits.is_empty() {
            // Runs longer than u32 are not index references; skip them.
            if let Ok(value) = digits.parse::<u32>() {
                if !indices.contains(&value) {
                    indices.push(value);
                }
            }
            digits.clear();
        }
    }

    if indices.is_empty() {
        return Err(SelectionError::NoIndices(text.to_string()));
    }

    Ok(indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_index() {
        assert_eq!(extract_cell_indices("Section 4").unwrap(), vec![4]);
    }

    #[test]
    fn test_multiple_indices() {
        assert_eq!(
            extract_cell_indices("The object spans sections 4 and 5.").unwrap(),
            vec![4, 5]
        );
    }

    #[test]
    fn test_duplicates_preserve_order() {
        assert_eq!(
            extract_cell_indices("7, then 2, then 7 again").unwrap(),
            vec![7, 2]
        );
    }

    #[test]
    fn test_multi_digit_run_is_one_value() {
        // "45" is one value, not sections 4 and 5.
        assert_eq!(extract_cell_indices("cell 45").unwrap(), vec![45]);
    }

    #[test]
    fn test_no_indices() {
        let err = extract_cell_indices("I cannot see it").unwrap_err();
        assert!(matches!(err, SelectionError::NoIndices(_)));
    }

    #[test]
    fn test_out_of_range_passes_through() {
        // Range enforcement belongs to the section map lookup.
        assert_eq!(extract_cell_indices("section 11").unwrap(), vec![11]);
    }
}
