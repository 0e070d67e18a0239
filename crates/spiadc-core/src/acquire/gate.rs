// crates/spiadc-core/src/acquire/gate.rs

use std::time::{Duration, Instant};

/// Blocking wait for a rising edge on a data-ready line.
///
/// Returns true if an edge was seen before `timeout` elapsed.
pub trait EdgeWait {
    fn wait_rising_edge(&mut self, timeout: Duration) -> bool;
}

impl<T: EdgeWait + ?Sized> EdgeWait for &mut T {
    fn wait_rising_edge(&mut self, timeout: Duration) -> bool {
        (**self).wait_rising_edge(timeout)
    }
}

impl<T: EdgeWait + ?Sized> EdgeWait for Box<T> {
    fn wait_rising_edge(&mut self, timeout: Duration) -> bool {
        (**self).wait_rising_edge(timeout)
    }
}

/// A line that never fires. Every wait runs to its timeout.
///
/// Used as the edge for free-running runs, where it is never consulted.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEdge;

impl EdgeWait for NoEdge {
    fn wait_rising_edge(&mut self, timeout: Duration) -> bool {
        std::thread::sleep(timeout);
        false
    }
}

/// Emulated data-ready line with a fixed period, first edge one period after creation.
///
/// An edge that passed while nobody was waiting stays latched and is returned
/// immediately by the next wait, like an edge-triggered GPIO.
#[derive(Clone, Debug)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now() + period,
        }
    }

    fn advance_past(&mut self, now: Instant) {
        if self.period.is_zero() {
            self.next = now;
            return;
        }
        if self.next > now {
            return;
        }
        let period = self.period.as_nanos();
        let missed = (now - self.next).as_nanos() / period + 1;
        let step = u64::try_from(period * missed).unwrap_or(u64::MAX);
        self.next += Duration::from_nanos(step);
    }
}

impl EdgeWait for Ticker {
    fn wait_rising_edge(&mut self, timeout: Duration) -> bool {
        let now = Instant::now();
        if self.next <= now {
            self.advance_past(now);
            return true;
        }
        let until = self.next - now;
        if until > timeout {
            std::thread::sleep(timeout);
            return false;
        }
        std::thread::sleep(until);
        let edge = self.next;
        self.advance_past(edge);
        true
    }
}
