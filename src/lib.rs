#![warn(missing_docs)]

//! # Closed-Loop Pressure Control Simulator
//!
//! This crate simulates a PID-regulated water pressure loop: a controller
//! drives a slow mechanical aperture toward a target pressure, reading a
//! noisy simulated sensor each tick.
//!
//! ## Components
//!
//! - [`pid::PidController`] — the control law, with validated configuration
//!   and a bounded output.
//! - [`aperture::Aperture`] — the actuator, a coarse mechanism that steps
//!   toward its commanded position by half a percent per tick.
//! - [`pressure::PressureModel`] — the plant, producing noisy readings that
//!   fall as the aperture opens.
//! - [`sim::SimulationLoop`] — the orchestration wiring sensor → controller
//!   → actuator for a fixed number of ticks.
//!
//! ## Usage
//!
//! ### Running the closed loop
//!
//! ```rust
//! use std::time::Duration;
//!
//! use pressure_loop::aperture::Aperture;
//! use pressure_loop::pid::{PidConfigBuilder, PidController};
//! use pressure_loop::seed::SeedSequence;
//! use pressure_loop::sim::{SimConfig, SimulationLoop};
//!
//! let config = PidConfigBuilder::default()
//!     .kp(0.5)
//!     .ki(0.01)
//!     .kd(0.1)
//!     .setpoint(50.0)
//!     .build()
//!     .expect("invalid PID config");
//!
//! let sim_config = SimConfig {
//!     iterations: 10,
//!     tick_delay: Duration::ZERO, // headless: skip pacing
//! };
//!
//! // A fixed seed sequence makes the noisy sensor reproducible.
//! let mut sim = SimulationLoop::new(
//!     PidController::new(config),
//!     Aperture::new(),
//!     SeedSequence::new(0),
//!     sim_config,
//! );
//!
//! sim.run(|tick| {
//!     println!("Pressure: {:.2}, Aperture: {:.2}%", tick.pressure, tick.position);
//! });
//! ```
//!
//! ### Driving the controller directly
//!
//! ```rust
//! use pressure_loop::pid::{PidConfig, PidController};
//!
//! let mut pid = PidController::new(PidConfig::default());
//!
//! let reading = 62.0;
//! let command = pid.compute(reading); // always within [0, 100]
//! assert!((0.0..=100.0).contains(&command));
//! ```
//!
//! ## Fidelity notes
//!
//! Two quirks of the modeled hardware are preserved on purpose and are
//! documented where they live:
//!
//! - The controller's integral term accumulates without bound (no
//!   anti-windup); see [`pid::PidController`].
//! - The aperture steps by a fixed 0.5% and settles into a band around its
//!   target instead of converging exactly; see [`aperture::Aperture`].

/// The PID controller, its configuration, and configuration errors.
pub mod pid;

/// The simulated mechanical aperture actuator.
pub mod aperture;

/// The simulated noisy pressure sensor.
pub mod pressure;

/// Pluggable noise seed sources backing the sensor's fluctuation.
pub mod seed;

/// The simulation loop tying sensor, controller, and actuator together.
pub mod sim;

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
