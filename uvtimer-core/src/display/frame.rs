//! Glyph frame
//!
//! A frame is four segment bitmaps, one per digit, left to right. Bit 0 is
//! segment a through bit 6 for segment g; bit 7 of the second digit is the
//! colon between minutes and seconds.

use crate::config::{DIGIT_COUNT, SEGMENT_LINES};

/// Segment bitmaps for the digits 0-9
pub const SEGMENTS: [u8; 10] = [
    0x3f, // 0
    0x06, // 1
    0x5b, // 2
    0x4f, // 3
    0x66, // 4
    0x6d, // 5
    0x7d, // 6
    0x07, // 7
    0x7f, // 8
    0x6f, // 9
];

/// Separator bit, carried by the second digit
pub const SEPARATOR: u8 = 1 << 7;

/// Digit that carries the separator
const SEPARATOR_DIGIT: usize = 1;

/// Seconds above which the display switches to hours:minutes
const HOURS_FROM_S: u16 = 60 * 60;

/// Glyph buffer for one display refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    glyphs: [u8; DIGIT_COUNT],
}

impl Frame {
    /// All segments off
    pub const fn blank() -> Self {
        Self {
            glyphs: [0; DIGIT_COUNT],
        }
    }

    /// Remaining time while running
    ///
    /// Up to an hour reads `M:SS`; above that reads `HH:MM` with the
    /// leading zero kept, so the two ranges are told apart at a glance.
    pub fn seconds(total_s: u16) -> Self {
        if total_s > HOURS_FROM_S {
            Self::pair(total_s / 60, true)
        } else {
            Self::pair(total_s, false)
        }
    }

    /// Configured interval while idle, read as `H:MM`
    pub fn minutes(minutes: u16) -> Self {
        Self::pair(minutes, false)
    }

    /// Split `value` into a base-60 pair and lay it out as `AB:CD`
    ///
    /// The tens digit of the upper unit is blanked below 10 unless
    /// `leading_zero` is set.
    fn pair(value: u16, leading_zero: bool) -> Self {
        let upper = value / 60;
        let lower = value % 60;
        let tens = if upper < 10 && !leading_zero {
            0
        } else {
            Self::digit(upper / 10)
        };

        Self {
            glyphs: [
                tens,
                Self::digit(upper % 10),
                Self::digit(lower / 10),
                Self::digit(lower % 10),
            ],
        }
    }

    /// Glyph for a single decimal digit; out-of-range values wrap
    fn digit(value: u16) -> u8 {
        SEGMENTS[usize::from(value % 10)]
    }

    /// Set or clear the separator
    pub fn with_separator(mut self, on: bool) -> Self {
        if on {
            self.glyphs[SEPARATOR_DIGIT] |= SEPARATOR;
        } else {
            self.glyphs[SEPARATOR_DIGIT] &= !SEPARATOR;
        }
        self
    }

    /// Check if the separator is lit
    pub fn separator(&self) -> bool {
        self.glyphs[SEPARATOR_DIGIT] & SEPARATOR != 0
    }

    /// Segment bitmap for digit `index`
    pub fn glyph(&self, index: usize) -> u8 {
        self.glyphs[index]
    }

    /// Digits lit on segment line `line`
    ///
    /// Bit `i` of the result is set when digit `i` has that segment on.
    pub fn line_mask(&self, line: usize) -> u8 {
        debug_assert!(line < SEGMENT_LINES);
        let segment = 1 << line;
        self.glyphs
            .iter()
            .enumerate()
            .filter(|(_, glyph)| *glyph & segment != 0)
            .fold(0, |mask, (i, _)| mask | (1 << i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLANK: u8 = 0;

    fn digits(frame: &Frame) -> [u8; DIGIT_COUNT] {
        [
            frame.glyph(0),
            frame.glyph(1) & !SEPARATOR,
            frame.glyph(2),
            frame.glyph(3),
        ]
    }

    #[test]
    fn test_minutes_seconds_blanks_leading_zero() {
        let frame = Frame::seconds(125);
        assert_eq!(digits(&frame), [BLANK, SEGMENTS[2], SEGMENTS[0], SEGMENTS[5]]);
    }

    #[test]
    fn test_full_hour_still_minutes_seconds() {
        let frame = Frame::seconds(3600);
        assert_eq!(
            digits(&frame),
            [SEGMENTS[6], SEGMENTS[0], SEGMENTS[0], SEGMENTS[0]]
        );
    }

    #[test]
    fn test_above_hour_shows_hours_minutes_with_zero() {
        let frame = Frame::seconds(5400);
        assert_eq!(
            digits(&frame),
            [SEGMENTS[0], SEGMENTS[1], SEGMENTS[3], SEGMENTS[0]]
        );
        let frame = Frame::seconds(36_000);
        assert_eq!(
            digits(&frame),
            [SEGMENTS[1], SEGMENTS[0], SEGMENTS[0], SEGMENTS[0]]
        );
    }

    #[test]
    fn test_zero_seconds() {
        let frame = Frame::seconds(0);
        assert_eq!(digits(&frame), [BLANK, SEGMENTS[0], SEGMENTS[0], SEGMENTS[0]]);
    }

    #[test]
    fn test_interval_reads_hours_minutes() {
        let frame = Frame::minutes(90);
        assert_eq!(digits(&frame), [BLANK, SEGMENTS[1], SEGMENTS[3], SEGMENTS[0]]);
        let frame = Frame::minutes(600);
        assert_eq!(
            digits(&frame),
            [SEGMENTS[1], SEGMENTS[0], SEGMENTS[0], SEGMENTS[0]]
        );
        let frame = Frame::minutes(10);
        assert_eq!(digits(&frame), [BLANK, SEGMENTS[0], SEGMENTS[1], SEGMENTS[0]]);
    }

    #[test]
    fn test_separator_toggles_only_its_bit() {
        let frame = Frame::seconds(125).with_separator(true);
        assert!(frame.separator());
        assert_eq!(frame.glyph(1), SEGMENTS[2] | SEPARATOR);

        let frame = frame.with_separator(false);
        assert!(!frame.separator());
        assert_eq!(frame.glyph(1), SEGMENTS[2]);
    }

    #[test]
    fn test_line_mask_selects_lit_digits() {
        // " 1:07": segment a (line 0) is lit on 0 and 7 only
        let frame = Frame::seconds(67).with_separator(true);
        assert_eq!(frame.line_mask(0), 0b1100);
        // segment b (line 1): 1, 0, 7
        assert_eq!(frame.line_mask(1), 0b1110);
        // separator line
        assert_eq!(frame.line_mask(7), 0b0010);
        assert_eq!(Frame::blank().line_mask(3), 0);
    }
}
