// Defines a trait for per-tick noise seed sources and provides implementations
// Copyright © 2026 pressure_loop developers
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense,
// and/or sell copies of the Software, and to permit persons to whom the
// Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included
// in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES
// OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
// IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM,
// DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,
// TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE
// OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::time::{SystemTime, UNIX_EPOCH};

/// A source of per-tick noise seeds for the pressure model.
/// The simulation loop draws one seed per tick and passes it to
/// [`PressureModel::sample`](crate::pressure::PressureModel::sample), so
/// swapping the source swaps the run between live wall-clock noise and a
/// reproducible sequence.
pub trait SeedSource {
    /// Returns the seed for the next tick.
    fn next_seed(&mut self) -> u64;
}

/// Seeds drawn from the system wall clock, one per call.
///
/// This is the production source: successive calls observe an advancing
/// clock, so successive readings wobble independently.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl SeedSource for SystemClock {
    fn next_seed(&mut self) -> u64 {
        // Nanosecond resolution so sub-millisecond ticks still vary.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }
}

/// A deterministic seed source counting up from a starting value.
///
/// Intended for tests and reproducible runs; the nth call always returns
/// `start + n`.
#[derive(Clone, Copy, Debug)]
pub struct SeedSequence {
    next: u64,
}

impl SeedSequence {
    /// Creates a sequence whose first seed is `start`.
    pub fn new(start: u64) -> Self {
        Self { next: start }
    }
}

impl SeedSource for SeedSequence {
    fn next_seed(&mut self) -> u64 {
        let seed = self.next;
        self.next = self.next.wrapping_add(1);
        seed
    }
}
