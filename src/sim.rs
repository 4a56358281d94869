use std::time::Duration;

use log::{debug, info};

use crate::aperture::Aperture;
use crate::pid::PidController;
use crate::pressure::PressureModel;
use crate::seed::SeedSource;

/// Run length and pacing of a simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of ticks to run. Defaults to 100.
    pub iterations: usize,

    /// Real-time pause between ticks, purely for human-readable pacing of
    /// the output. Defaults to 100ms. A zero delay skips sleeping entirely,
    /// which is the right setting for tests and headless runs; correctness
    /// does not depend on the delay.
    pub tick_delay: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            tick_delay: Duration::from_millis(100),
        }
    }
}

/// One tick's worth of loop state, as handed to the report sink.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickRecord {
    /// Zero-based tick index.
    pub iteration: usize,
    /// The noisy pressure reading sensed this tick.
    pub pressure: f64,
    /// The control output the PID produced from that reading.
    pub control: f64,
    /// The aperture position after actuation.
    pub position: f64,
}

/// The closed control loop: sensor, controller, and actuator wired
/// output-to-input.
///
/// Each tick senses the pressure at the current aperture position, feeds the
/// reading to the PID controller, commands the aperture toward the control
/// output, and advances the mechanism one step. The loop exclusively owns
/// all three components for the lifetime of a run; nothing is shared and
/// nothing runs concurrently.
pub struct SimulationLoop<S: SeedSource> {
    pid: PidController,
    aperture: Aperture,
    model: PressureModel,
    seeds: S,
    config: SimConfig,
    iteration: usize,
}

impl<S: SeedSource> SimulationLoop<S> {
    /// Assembles a loop from its components and a noise seed source.
    pub fn new(pid: PidController, aperture: Aperture, seeds: S, config: SimConfig) -> Self {
        Self {
            pid,
            aperture,
            model: PressureModel::new(),
            seeds,
            config,
            iteration: 0,
        }
    }

    pub fn pid(&self) -> &PidController {
        &self.pid
    }

    pub fn aperture(&self) -> &Aperture {
        &self.aperture
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Advances the loop by one tick: sense, compute, actuate.
    pub fn step(&mut self) -> TickRecord {
        let seed = self.seeds.next_seed();
        let pressure = self.model.sample(self.aperture.position(), seed);
        let control = self.pid.compute(pressure);
        self.aperture.set_target(control);
        let position = self.aperture.update();

        let record = TickRecord {
            iteration: self.iteration,
            pressure,
            control,
            position,
        };
        self.iteration += 1;
        record
    }

    /// Runs the configured number of ticks, handing each [`TickRecord`] to
    /// `on_tick` as it is produced.
    ///
    /// The iteration count running out is the only terminal condition; there
    /// is no retry or recovery path because no tick can fail.
    pub fn run(&mut self, mut on_tick: impl FnMut(&TickRecord)) {
        info!(
            "starting simulation: {} ticks, setpoint {}",
            self.config.iterations,
            self.pid.config().setpoint()
        );

        for _ in 0..self.config.iterations {
            let record = self.step();
            debug!(
                "tick {}: pressure {:.2}, control {:.2}, aperture {:.2}",
                record.iteration, record.pressure, record.control, record.position
            );
            on_tick(&record);

            if !self.config.tick_delay.is_zero() {
                std::thread::sleep(self.config.tick_delay);
            }
        }

        info!("simulation complete after {} ticks", self.iteration);
    }
}
