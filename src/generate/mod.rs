use log::debug;
use rand::Rng;

use crate::error::{GcgenError, Result};
use crate::gc::{self, Constraint};
use crate::seq;

/// Rejected candidates allowed per window replacement before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Window repairs allowed per generated sequence before giving up.
pub const DEFAULT_MAX_REPAIRS: usize = 10_000;

/// A finished sequence together with the composition statistics reported for
/// it: overall GC percentage and the extremes seen across all windows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedSequence {
    pub sequence: Vec<u8>,
    pub length: usize,
    pub overall_gc_percent: u8,
    pub windowed_gc_max: u8,
    pub windowed_gc_min: u8,
}

/// Samples random windows of `constraint.window_size` bases until one lands
/// inside the acceptance band, and returns it. Each candidate is drawn fresh;
/// nothing is kept between attempts. Fails with
/// [`GcgenError::ConstraintUnsatisfiable`] after `max_attempts` rejections
/// rather than sampling forever on a band no window can reach.
pub fn conforming_window<R: Rng>(
    constraint: &Constraint,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Vec<u8>> {
    if constraint.window_size == 0 {
        return Err(GcgenError::ZeroWindow);
    }

    for _ in 0..max_attempts {
        let candidate = seq::random_sequence(constraint.window_size, rng);
        if constraint.admits(gc::percent(&candidate)?) {
            return Ok(candidate);
        }
    }

    let (lo, hi) = constraint.band();
    Err(GcgenError::ConstraintUnsatisfiable {
        window_size: constraint.window_size,
        lo,
        hi,
        attempts: max_attempts,
    })
}

/// Generates a sequence of `length` bases whose every `window_size`-base
/// window has a GC percentage inside the constraint band.
///
/// Starts from a fully random candidate, then scans it window by window at
/// step 1. A window outside the band is overwritten in place with a freshly
/// sampled conforming window of the same length, and the scan starts over
/// from the first offset. A complete pass with no repair accepts the
/// candidate, and the reported GC statistics are measured on it.
///
/// Individually conforming windows overlap, so a tight band over a wide
/// window can leave the scan repairing forever without converging.
/// `max_repairs` bounds the loop: once that many windows have been
/// replaced, the next out-of-band window ends the run with
/// [`GcgenError::RepairLimitExceeded`].
pub fn sequence<R: Rng>(
    length: usize,
    constraint: &Constraint,
    max_attempts: usize,
    max_repairs: usize,
    rng: &mut R,
) -> Result<GeneratedSequence> {
    if length == 0 {
        return Err(GcgenError::ZeroLength);
    }
    if constraint.window_size == 0 {
        return Err(GcgenError::ZeroWindow);
    }
    if constraint.window_size > length {
        return Err(GcgenError::WindowTooLarge {
            window_size: constraint.window_size,
            length,
        });
    }

    let window_size = constraint.window_size;
    let mut candidate = seq::random_sequence(length, rng);
    let mut repairs = 0usize;
    let mut offset = 0;

    while offset + window_size <= length {
        let measured = gc::percent(&candidate[offset..offset + window_size])?;
        if constraint.admits(measured) {
            offset += 1;
            continue;
        }

        let (lo, hi) = constraint.band();
        if repairs == max_repairs {
            return Err(GcgenError::RepairLimitExceeded {
                window_size,
                lo,
                hi,
                repairs,
            });
        }
        debug!(
            "window at {} has GC {}%, outside {}-{}%; replacing",
            offset, measured, lo, hi
        );
        let replacement = conforming_window(constraint, max_attempts, rng)?;
        candidate[offset..offset + window_size].copy_from_slice(&replacement);
        repairs += 1;
        // The splice shifts the GC content of every window overlapping it,
        // including already-checked ones to its left, so the scan restarts
        // from zero. Cost grows quadratically with the number of repairs.
        offset = 0;
    }

    debug!("candidate accepted after {} repair(s)", repairs);

    let overall_gc_percent = gc::percent(&candidate)?;
    let (windowed_gc_max, windowed_gc_min) = gc::windowed_range(&candidate, window_size)?;

    Ok(GeneratedSequence {
        sequence: candidate,
        length,
        overall_gc_percent,
        windowed_gc_max,
        windowed_gc_min,
    })
}
