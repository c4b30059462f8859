use std::time::{Duration, Instant};

/// The operations counted while processing an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Counter {
    /// A read or write of one pixel in a pixel buffer.
    PixelAccess,
    /// A comparison between two pixels.
    PixelCompare,
    /// An addition or subtraction of pixel sums.
    PixelAdd,
}

impl Counter {
    /// All counters, in report order.
    pub const ALL: [Counter; 3] = [
        Counter::PixelAccess,
        Counter::PixelCompare,
        Counter::PixelAdd,
    ];

    /// Short name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Counter::PixelAccess => "pixmem",
            Counter::PixelCompare => "pixcmp",
            Counter::PixelAdd => "pixadd",
        }
    }

    fn index(&self) -> usize {
        match self {
            Counter::PixelAccess => 0,
            Counter::PixelCompare => 1,
            Counter::PixelAdd => 2,
        }
    }
}

impl std::fmt::Display for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A sink for operation counts.
///
/// Every image operation takes a recorder and reports what it did. Recording is purely
/// observational and never changes the result of an operation.
pub trait Recorder {
    /// Add `n` to the given counter.
    fn record(&mut self, counter: Counter, n: u64);
}

/// A recorder that discards every count.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopRecorder;

impl Recorder for NoopRecorder {
    #[inline(always)]
    fn record(&mut self, _counter: Counter, _n: u64) {}
}

/// A recorder that accumulates the counts and the elapsed time since the last reset.
///
/// # Examples
///
/// ```
/// use graymap_image::instrument::{Counter, Counters, Recorder};
///
/// let mut counters = Counters::new();
/// counters.record(Counter::PixelAccess, 3);
/// counters.record(Counter::PixelCompare, 1);
///
/// assert_eq!(counters.get(Counter::PixelAccess), 3);
/// assert_eq!(counters.get(Counter::PixelCompare), 1);
/// assert_eq!(counters.get(Counter::PixelAdd), 0);
///
/// counters.reset();
/// assert_eq!(counters.get(Counter::PixelAccess), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Counters {
    start: Instant,
    counts: [u64; 3],
}

impl Counters {
    /// Creates a new set of zeroed counters and starts the clock.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            counts: [0; 3],
        }
    }

    /// Returns the current value of a counter.
    #[inline]
    pub fn get(&self, counter: Counter) -> u64 {
        self.counts[counter.index()]
    }

    /// Zeroes all counters and restarts the clock.
    pub fn reset(&mut self) {
        self.counts = [0; 3];
        self.start = Instant::now();
    }

    /// Time elapsed since creation or the last reset.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Logs the current counters at info level.
    pub fn report(&self) {
        log::info!("{self}");
    }
}

impl Default for Counters {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder for Counters {
    #[inline]
    fn record(&mut self, counter: Counter, n: u64) {
        self.counts[counter.index()] += n;
    }
}

impl std::fmt::Display for Counters {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "time: {:.6}s", self.elapsed().as_secs_f64())?;
        for counter in Counter::ALL {
            write!(f, " {}: {}", counter, self.get(counter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Counter, Counters, NoopRecorder, Recorder};

    fn touch<R: Recorder + ?Sized>(rec: &mut R) {
        rec.record(Counter::PixelAdd, 2);
        rec.record(Counter::PixelAdd, 3);
    }

    #[test]
    fn test_counters_accumulate() {
        let mut counters = Counters::new();
        touch(&mut counters);
        assert_eq!(counters.get(Counter::PixelAdd), 5);
        assert_eq!(counters.get(Counter::PixelAccess), 0);
    }

    #[test]
    fn test_counters_reset() {
        let mut counters = Counters::new();
        for counter in Counter::ALL {
            counters.record(counter, 7);
        }
        counters.reset();
        for counter in Counter::ALL {
            assert_eq!(counters.get(counter), 0);
        }
    }

    #[test]
    fn test_counters_display() {
        let mut counters = Counters::new();
        counters.record(Counter::PixelCompare, 42);
        let line = counters.to_string();
        assert!(line.contains("pixmem: 0"));
        assert!(line.contains("pixcmp: 42"));
        assert!(line.contains("pixadd: 0"));
    }

    #[test]
    fn test_dyn_recorder() {
        let mut counters = Counters::new();
        {
            let rec: &mut dyn Recorder = &mut counters;
            touch(rec);
        }
        assert_eq!(counters.get(Counter::PixelAdd), 5);

        // discarded counts leave nothing behind
        touch(&mut NoopRecorder);
    }
}
