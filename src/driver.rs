//! The measurement loop.

use std::io::Write;
use tracing::{info, info_span};

use crate::{
    error::{Error, IterationError},
    parse,
    probe::Probe,
    series::TimingSeries,
};

/// Largest number of common bits measured by default.
pub const MAX_BITS: u32 = 31;

/// Measure `1 ..= max_bits` common bits in order, writing
/// `Finished <bits>` to `progress` after each measurement.
///
/// The first failure stops the run: no later iteration is attempted
/// and no progress line is written for the failing one.
pub fn run<P, W>(probe: &mut P, max_bits: u32, progress: &mut W)
                 -> Result<TimingSeries, Error>
where P: Probe + ?Sized, W: Write + ?Sized {
    // Only a hint: the run may stop long before `max_bits`.
    let capacity = (max_bits as usize).min(64) + 1;
    let mut series = TimingSeries::with_capacity(capacity);
    for bits in 1 ..= max_bits {
        let _span = info_span!("iteration", bits).entered();
        let seconds = measure(probe, bits)
            .map_err(|source| Error::Iteration { bits, source })?;
        info!(seconds, "collision found");
        series.push(seconds);
        writeln!(progress, "Finished {bits}")?;
        progress.flush()?;
    }
    Ok(series)
}

fn measure<P>(probe: &mut P, bits: u32) -> Result<f64, IterationError>
where P: Probe + ?Sized {
    let output = probe.measure(bits)?;
    Ok(parse::elapsed_seconds(&output)?)
}
