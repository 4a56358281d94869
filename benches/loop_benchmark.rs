//! Benchmark for the pressure-loop controller and one full simulation tick
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

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pressure_loop::aperture::Aperture;
use pressure_loop::pid::{PidConfig, PidController};
use pressure_loop::seed::SeedSequence;
use pressure_loop::sim::{SimConfig, SimulationLoop};

fn bench_pid_compute(c: &mut Criterion) {
    let mut pid = PidController::new(PidConfig::default());
    let mut reading = 49.0;
    let mut output: f64 = 0.0;

    c.bench_function("PID compute", |b| {
        b.iter(|| {
            output = pid.compute(black_box(reading));
            reading += 0.0001; // prevent constant inputs
            black_box(output);
        });
    });
}

/// One full closed-loop tick: seeded sensor sample, PID compute, aperture
/// command and actuation. The seeded RNG construction inside the pressure
/// model dominates this number.
fn bench_simulation_tick(c: &mut Criterion) {
    let config = SimConfig {
        iterations: 1,
        tick_delay: Duration::ZERO,
    };
    let mut sim = SimulationLoop::new(
        PidController::new(PidConfig::default()),
        Aperture::new(),
        SeedSequence::new(0),
        config,
    );

    c.bench_function("simulation tick", |b| {
        b.iter(|| {
            black_box(sim.step());
        });
    });
}

// The naive law skips the config indirection and the output clamp guardrails
// and just applies the PID arithmetic inline. The PidController should not be
// meaningfully slower than this.
fn bench_naive_pid(c: &mut Criterion) {
    let kp = 0.5;
    let ki = 0.01;
    let kd = 0.1;
    let setpoint = 50.0;
    let mut err_sum: f64 = 0.0;
    let mut last_err: f64 = 0.0;

    let mut reading = 49.0;
    let mut output: f64 = 0.0;

    c.bench_function("naive PID", |b| {
        b.iter(|| {
            let error = setpoint - black_box(reading);
            err_sum += error;
            let d_err = error - last_err;

            output = kp * error + ki * err_sum + kd * d_err;
            output = output.clamp(0.0, 100.0);
            last_err = error;
            black_box(output);

            reading += 0.0001; // prevent constant inputs
        });
    });
}

criterion_group!(
    benches,
    bench_pid_compute,
    bench_simulation_tick,
    bench_naive_pid,
);
criterion_main!(benches);
