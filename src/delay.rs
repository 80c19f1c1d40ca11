//! Delay Memory
//!
//! A circular buffer of samples addressed by a tap offset from a single
//! monotonically advancing write cursor (spec.md §4.3). Shared between the
//! Fixed/IdealShort engines (`T = i16`) and the Float/IdealFloat engines
//! (`T = f32`) via [`num_traits::Zero`].

use num_traits::Zero;

/// Circular sample buffer with a single write cursor.
#[derive(Debug, Clone)]
pub struct DelayLine<T> {
    buffer: Vec<T>,
    mask: usize,
    cursor: usize,
}

impl<T: Copy + Zero> DelayLine<T> {
    /// Create a delay line able to hold at least `min_capacity` samples.
    /// Capacity is rounded up to the next power of two so taps can be
    /// addressed with a mask instead of a modulo.
    pub fn new(min_capacity: usize) -> Self {
        let capacity = min_capacity.max(1).next_power_of_two();
        DelayLine {
            buffer: vec![T::zero(); capacity],
            mask: capacity - 1,
            cursor: 0,
        }
    }

    /// Resize the delay line to hold at least `min_capacity` samples,
    /// zeroing all state (used by `Setup` on the Ideal engines).
    pub fn resize(&mut self, min_capacity: usize) {
        *self = Self::new(min_capacity);
    }

    /// Store `sample` at the write cursor, then advance the cursor.
    #[inline]
    pub fn write(&mut self, sample: T) {
        self.buffer[self.cursor] = sample;
        self.cursor = (self.cursor + 1) & self.mask;
    }

    /// Read the sample written `delay` steps ago (`delay = 0` is the most
    /// recently written sample).
    #[inline]
    pub fn read(&self, delay: u32) -> T {
        let offset = (self.cursor.wrapping_sub(1).wrapping_sub(delay as usize)) & self.mask;
        self.buffer[offset]
    }

    /// Zero every slot and rewind the cursor to zero.
    pub fn reset(&mut self) {
        self.buffer.iter_mut().for_each(|s| *s = T::zero());
        self.cursor = 0;
    }

    /// Current buffer capacity (a power of two).
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }
}

impl DelayLine<f32> {
    /// Read at a fractional delay, linearly interpolating between the two
    /// neighboring integer-delay samples (spec.md §4.3, Ideal-Float only).
    pub fn read_fractional(&self, delay: f64) -> f32 {
        let base = delay.floor();
        let frac = (delay - base) as f32;
        let d0 = base.max(0.0) as u32;
        let s0 = self.read(d0);
        let s1 = self.read(d0 + 1);
        (1.0 - frac) * s0 + frac * s1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_rounds_up_to_power_of_two() {
        let line: DelayLine<i16> = DelayLine::new(100);
        assert_eq!(line.capacity(), 128);
    }

    #[test]
    fn fresh_line_reads_zero() {
        let line: DelayLine<i16> = DelayLine::new(16);
        assert_eq!(line.read(0), 0);
        assert_eq!(line.read(10), 0);
    }

    #[test]
    fn impulse_round_trip_exact() {
        let mut line: DelayLine<i16> = DelayLine::new(64);
        line.write(1000);
        for _ in 0..5 {
            line.write(0);
        }
        // impulse was written 6 steps ago (5 writes followed it)
        assert_eq!(line.read(5), 1000);
        assert_eq!(line.read(4), 0);
        assert_eq!(line.read(6), 0);
    }

    #[test]
    fn write_cursor_wraps_modulo_capacity() {
        let mut line: DelayLine<i16> = DelayLine::new(4);
        for i in 0..10 {
            line.write(i as i16);
        }
        assert_eq!(line.read(0), 9);
        assert_eq!(line.read(3), 6);
    }

    #[test]
    fn reset_clears_buffer_and_cursor() {
        let mut line: DelayLine<i16> = DelayLine::new(8);
        line.write(42);
        line.reset();
        assert_eq!(line.read(0), 0);
    }

    #[test]
    fn fractional_read_interpolates() {
        let mut line: DelayLine<f32> = DelayLine::new(8);
        line.write(1.0);
        line.write(0.0);
        // one step ago is 0.0, two steps ago is 1.0; delay 1.5 -> halfway
        let v = line.read_fractional(0.5);
        assert!((v - 0.5).abs() < 1e-6);
    }

    #[test]
    fn resize_zeroes_state() {
        let mut line: DelayLine<i16> = DelayLine::new(8);
        line.write(42);
        line.resize(32);
        assert_eq!(line.capacity(), 32);
        assert_eq!(line.read(0), 0);
    }
}
