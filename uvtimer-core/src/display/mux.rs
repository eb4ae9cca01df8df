//! Display multiplexer
//!
//! Digits share eight cathode lines (segments a-g plus the separator).
//! One line is driven at a time: its cathode pulled low, every digit that
//! lights that segment has its anode driven high. Scanning all eight lines
//! fast enough reads as a steady image.

use uvtimer_hal::OutputPin;

use super::frame::Frame;
use crate::config::{DIGIT_COUNT, SEGMENT_LINES};

/// Anode and cathode pins of a common-cathode-per-segment display
pub struct Multiplexer<P> {
    /// Digit anodes, active high, left to right
    digits: [P; DIGIT_COUNT],
    /// Segment cathodes, active low, a-g then separator
    segments: [P; SEGMENT_LINES],
}

impl<P: OutputPin> Multiplexer<P> {
    /// Create the multiplexer with everything dark
    pub fn new(digits: [P; DIGIT_COUNT], segments: [P; SEGMENT_LINES]) -> Self {
        let mut mux = Self { digits, segments };
        mux.blank();
        mux
    }

    /// Drive segment line `line` for `frame`
    ///
    /// Anodes are released before the cathodes move so the previous line
    /// never ghosts onto the new one.
    pub fn show_line(&mut self, frame: &Frame, line: usize) {
        for digit in self.digits.iter_mut() {
            digit.set_low();
        }

        for (i, segment) in self.segments.iter_mut().enumerate() {
            segment.set_state(i != line);
        }

        let mask = frame.line_mask(line);
        for (i, digit) in self.digits.iter_mut().enumerate() {
            if mask & (1 << i) != 0 {
                digit.set_high();
            }
        }
    }

    /// Turn every digit off
    pub fn blank(&mut self) {
        for digit in self.digits.iter_mut() {
            digit.set_low();
        }
        for segment in self.segments.iter_mut() {
            segment.set_high();
        }
    }

    /// Digit anodes currently driven, bit `i` for digit `i`
    pub fn lit_digits(&self) -> u8 {
        self.digits
            .iter()
            .enumerate()
            .filter(|(_, pin)| pin.is_set_high())
            .fold(0, |mask, (i, _)| mask | (1 << i))
    }

    /// Segment cathodes currently pulled low, bit `i` for line `i`
    pub fn active_lines(&self) -> u8 {
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, pin)| pin.is_set_low())
            .fold(0, |mask, (i, _)| mask | (1 << i))
    }
}
