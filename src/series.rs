//! The sequence of collision times indexed by common bits.

use std::io::{self, Write};

/// Collision times in seconds, indexed by the number of common bits.
///
/// Entry 0 is always `0.0`: matching zero bits takes no time.  Each
/// measurement is appended in increasing order of common bits.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingSeries {
    seconds: Vec<f64>,
}

impl TimingSeries {
    /// Return a series holding only the zero-bits entry.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Like [`TimingSeries::new`], with room for `n` entries.
    pub fn with_capacity(n: usize) -> Self {
        let mut seconds = Vec::with_capacity(n.max(1));
        seconds.push(0.);
        TimingSeries { seconds }
    }

    /// Append the time measured for the next number of common bits.
    pub fn push(&mut self, seconds: f64) {
        self.seconds.push(seconds)
    }

    /// Number of entries, the zero-bits entry included.
    pub fn len(&self) -> usize {
        self.seconds.len()
    }

    /// Always `false`: the zero-bits entry is present from the start.
    pub fn is_empty(&self) -> bool {
        self.seconds.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.seconds
    }

    /// Time measured for `bits` common bits, if it was measured.
    pub fn get(&self, bits: usize) -> Option<f64> {
        self.seconds.get(bits).copied()
    }

    /// The x coordinates `0, 1, ..., len - 1` of the entries.
    pub fn bits(&self) -> Vec<f64> {
        (0 .. self.seconds.len()).map(|i| i as f64).collect()
    }

    /// Iterate over `(common bits, seconds)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.seconds.iter().copied().enumerate()
    }

    /// Write one `<bits> <seconds>` line per entry.
    pub fn write_table<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for (bits, seconds) in self.iter() {
            writeln!(w, "{bits} {seconds}")?;
        }
        Ok(())
    }
}

impl Default for TimingSeries {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_zero_bits_entry() {
        let s = TimingSeries::new();
        assert_eq!(s.values(), &[0.]);
        assert_eq!(s.len(), 1);
        assert!(!s.is_empty());
        assert_eq!(s, TimingSeries::default());
        assert_eq!(TimingSeries::with_capacity(0).values(), &[0.]);
    }

    #[test]
    fn push_in_order() {
        let mut s = TimingSeries::with_capacity(4);
        s.push(0.5);
        s.push(1.5);
        s.push(4.);
        assert_eq!(s.values(), &[0., 0.5, 1.5, 4.]);
        assert_eq!(s.get(2), Some(1.5));
        assert_eq!(s.get(4), None);
        assert_eq!(s.bits(), vec![0., 1., 2., 3.]);
    }

    #[test]
    fn table() -> io::Result<()> {
        let mut s = TimingSeries::new();
        s.push(0.25);
        s.push(2.);
        let mut out = Vec::new();
        s.write_table(&mut out)?;
        assert_eq!(String::from_utf8_lossy(&out), "0 0\n1 0.25\n2 2\n");
        Ok(())
    }
}
