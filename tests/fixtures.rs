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

#[cfg(test)]
pub mod test_loop {

    use std::time::Duration;

    use pressure_loop::aperture::Aperture;
    use pressure_loop::pid::{PidConfig, PidController};
    use pressure_loop::seed::SeedSequence;
    use pressure_loop::sim::{SimConfig, SimulationLoop};

    /// The reference controller: Kp=0.5, Ki=0.01, Kd=0.1, setpoint 50.
    pub fn make_controller() -> PidController {
        PidController::new(PidConfig::default())
    }

    /// A headless simulation with a deterministic seed sequence.
    pub fn make_sim(iterations: usize, first_seed: u64) -> SimulationLoop<SeedSequence> {
        let config = SimConfig {
            iterations,
            tick_delay: Duration::ZERO,
        };
        SimulationLoop::new(
            make_controller(),
            Aperture::new(),
            SeedSequence::new(first_seed),
            config,
        )
    }
}
