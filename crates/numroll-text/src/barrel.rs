#![forbid(unsafe_code)]

//! Barrel-wheel transition detection.
//!
//! When a single selected digit is replaced by a single different digit,
//! the display can roll the position through every intermediate digit like
//! a mechanical counter. This module detects that edit and produces the
//! digit sequence; re-indexing of an in-flight wheel after later edits is
//! pure integer bookkeeping in [`shift_barrel_wheel`].

use smallvec::SmallVec;

/// Playback direction of a rolling digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    /// The new digit is greater than the old one.
    Up,
    /// The new digit is less than the old one.
    Down,
}

/// One rolling-digit transition.
///
/// `sequence` is always in ascending numeric order, even for
/// [`WheelDirection::Down`]; the direction flag alone tells the animation
/// layer which end to start from. For `Down` the last element is therefore
/// the *old* digit. Long-standing consumer contract; do not reorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarrelWheelSpec {
    /// Raw-string index of the replaced digit.
    pub index: usize,
    /// Inclusive run of digits from the lower to the higher of the pair.
    pub sequence: SmallVec<[char; 10]>,
    /// Which way the animation plays through `sequence`.
    pub direction: WheelDirection,
}

/// Detect a single-digit selection replacement.
///
/// Fires only when a one-character selection (`[selection_start,
/// selection_end)`) was replaced by exactly one typed character, and both
/// the old and new character are decimal digits with different values.
#[must_use]
pub fn detect_barrel_wheel(
    old_raw: &str,
    new_raw: &str,
    selection_start: usize,
    selection_end: usize,
    new_cursor: usize,
) -> Option<BarrelWheelSpec> {
    if selection_end <= selection_start {
        return None; // no active selection
    }
    if selection_end - selection_start != 1 {
        return None; // more than one character replaced
    }
    if new_cursor != selection_start + 1 {
        return None; // more (or less) than one character typed
    }

    let old_ch = old_raw.chars().nth(selection_start)?;
    let new_ch = new_raw.chars().nth(selection_start)?;
    let old_digit = old_ch.to_digit(10)?;
    let new_digit = new_ch.to_digit(10)?;
    if old_digit == new_digit {
        return None;
    }

    let (direction, low, high) = if new_digit > old_digit {
        (WheelDirection::Up, old_digit, new_digit)
    } else {
        (WheelDirection::Down, new_digit, old_digit)
    };
    let sequence = (low..=high)
        .map(|digit| char::from_digit(digit, 10).unwrap_or('0'))
        .collect();

    Some(BarrelWheelSpec {
        index: selection_start,
        sequence,
        direction,
    })
}

/// Re-index an in-flight wheel after a later edit of `delta` characters
/// (positive insertion, negative deletion) at `edit_position`.
///
/// Returns `None` when the wheel's own digit was deleted, or when the
/// adjustment cannot be resolved; discarding beats animating the wrong
/// character.
#[must_use]
pub fn shift_barrel_wheel(
    spec: BarrelWheelSpec,
    edit_position: usize,
    delta: isize,
) -> Option<BarrelWheelSpec> {
    if delta == 0 || edit_position > spec.index {
        return Some(spec);
    }
    if delta > 0 {
        let mut spec = spec;
        spec.index += delta.unsigned_abs();
        return Some(spec);
    }
    let deleted = delta.unsigned_abs();
    if spec.index < edit_position + deleted {
        return None; // the wheel's character is inside the deleted span
    }
    let mut spec = spec;
    spec.index -= deleted;
    Some(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(spec: &BarrelWheelSpec) -> String {
        spec.sequence.iter().collect()
    }

    // -----------------------------------------------------------------------
    // Detection
    // -----------------------------------------------------------------------

    #[test]
    fn upward_roll() {
        // Replace 2 with 5 in "123" at index 1.
        let spec = detect_barrel_wheel("123", "153", 1, 2, 2).expect("wheel");
        assert_eq!(spec.index, 1);
        assert_eq!(seq(&spec), "2345");
        assert_eq!(spec.direction, WheelDirection::Up);
    }

    #[test]
    fn downward_roll_keeps_ascending_sequence() {
        // Replace 5 with 2 in "153" at index 1: same digits, opposite flag.
        let spec = detect_barrel_wheel("153", "123", 1, 2, 2).expect("wheel");
        assert_eq!(spec.index, 1);
        assert_eq!(seq(&spec), "2345");
        assert_eq!(spec.direction, WheelDirection::Down);
    }

    #[test]
    fn adjacent_digits() {
        let spec = detect_barrel_wheel("19", "29", 0, 1, 1).expect("wheel");
        assert_eq!(seq(&spec), "12");
        assert_eq!(spec.direction, WheelDirection::Up);
    }

    #[test]
    fn full_span_roll() {
        let spec = detect_barrel_wheel("09", "99", 0, 1, 1).expect("wheel");
        assert_eq!(seq(&spec), "0123456789");
    }

    #[test]
    fn no_wheel_without_selection() {
        assert!(detect_barrel_wheel("123", "153", 1, 1, 2).is_none());
    }

    #[test]
    fn no_wheel_for_multi_char_selection() {
        assert!(detect_barrel_wheel("1234", "154", 1, 3, 2).is_none());
    }

    #[test]
    fn no_wheel_for_multi_char_insertion() {
        assert!(detect_barrel_wheel("123", "1553", 1, 2, 3).is_none());
    }

    #[test]
    fn no_wheel_for_same_digit() {
        assert!(detect_barrel_wheel("123", "123", 1, 2, 2).is_none());
    }

    #[test]
    fn no_wheel_for_non_digits() {
        assert!(detect_barrel_wheel("1.3", "123", 1, 2, 2).is_none());
        assert!(detect_barrel_wheel("123", "1.3", 1, 2, 2).is_none());
        assert!(detect_barrel_wheel("-23", "123", 0, 1, 1).is_none());
    }

    #[test]
    fn no_wheel_past_the_string() {
        assert!(detect_barrel_wheel("12", "12", 5, 6, 6).is_none());
    }

    // -----------------------------------------------------------------------
    // Re-indexing
    // -----------------------------------------------------------------------

    fn wheel_at(index: usize) -> BarrelWheelSpec {
        BarrelWheelSpec {
            index,
            sequence: "23".chars().collect(),
            direction: WheelDirection::Up,
        }
    }

    #[test]
    fn insertion_before_shifts_right() {
        let spec = shift_barrel_wheel(wheel_at(3), 1, 2).expect("kept");
        assert_eq!(spec.index, 5);
    }

    #[test]
    fn insertion_at_the_wheel_shifts_right() {
        let spec = shift_barrel_wheel(wheel_at(3), 3, 1).expect("kept");
        assert_eq!(spec.index, 4);
    }

    #[test]
    fn insertion_after_leaves_index() {
        let spec = shift_barrel_wheel(wheel_at(3), 4, 2).expect("kept");
        assert_eq!(spec.index, 3);
    }

    #[test]
    fn deletion_before_shifts_left() {
        let spec = shift_barrel_wheel(wheel_at(3), 0, -2).expect("kept");
        assert_eq!(spec.index, 1);
    }

    #[test]
    fn deleting_the_wheel_discards_it() {
        assert!(shift_barrel_wheel(wheel_at(3), 3, -1).is_none());
        assert!(shift_barrel_wheel(wheel_at(3), 2, -2).is_none());
    }

    #[test]
    fn deletion_after_leaves_index() {
        let spec = shift_barrel_wheel(wheel_at(3), 4, -1).expect("kept");
        assert_eq!(spec.index, 3);
    }

    #[test]
    fn zero_delta_is_identity() {
        let spec = shift_barrel_wheel(wheel_at(3), 0, 0).expect("kept");
        assert_eq!(spec.index, 3);
    }
}
