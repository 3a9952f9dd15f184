use crate::error::{GcgenError, Result};

/// The GC-content target a generated sequence must hold in every window:
/// desired percentage, symmetric ± tolerance, and the window size in bases.
#[derive(Clone, Copy, Debug)]
pub struct Constraint {
    pub desired_gc: u8,
    pub tolerance: u8,
    pub window_size: usize,
}

impl Constraint {
    /// Inclusive acceptance band `(lower, upper)` in percent. The lower bound
    /// saturates at 0; an upper bound above 100 admits everything up to 100.
    pub fn band(&self) -> (u8, u8) {
        (
            self.desired_gc.saturating_sub(self.tolerance),
            self.desired_gc.saturating_add(self.tolerance),
        )
    }

    /// True if a measured GC percentage falls inside the acceptance band.
    pub fn admits(&self, gc: u8) -> bool {
        let (lo, hi) = self.band();
        lo <= gc && gc <= hi
    }
}

/// GC content of `seq` as an integer percentage, rounded to the nearest whole
/// percent with halves rounding up (1 G/C base out of 8 reports 13%). Counts
/// `G` and `C` in either case. Fails on an empty sequence, where the ratio is
/// undefined.
pub fn percent(seq: &[u8]) -> Result<u8> {
    if seq.is_empty() {
        return Err(GcgenError::EmptySequence);
    }
    let gc = seq
        .iter()
        .filter(|&&b| matches!(b, b'G' | b'C' | b'g' | b'c'))
        .count();
    Ok((100.0 * gc as f64 / seq.len() as f64).round() as u8)
}

/// Measures every window of `window_size` bases at step 1, offsets 0 through
/// `seq.len() - window_size` inclusive, and returns `(highest, lowest)` GC
/// percentage seen. With `window_size == seq.len()` there is exactly one
/// window and both values equal it.
pub fn windowed_range(seq: &[u8], window_size: usize) -> Result<(u8, u8)> {
    if window_size == 0 {
        return Err(GcgenError::ZeroWindow);
    }
    if window_size > seq.len() {
        return Err(GcgenError::WindowTooLarge {
            window_size,
            length: seq.len(),
        });
    }

    // Extremes start from the first window, not fixed 0/100 sentinels.
    let mut highest = percent(&seq[..window_size])?;
    let mut lowest = highest;

    for window in seq.windows(window_size).skip(1) {
        let gc = percent(window)?;
        if gc > highest {
            highest = gc;
        }
        if gc < lowest {
            lowest = gc;
        }
    }

    Ok((highest, lowest))
}
