use pressure_loop::aperture::Aperture;
use pressure_loop::pid::{PidConfig, PidController};
use pressure_loop::seed::SystemClock;
use pressure_loop::sim::{SimConfig, SimulationLoop};

fn main() {
    env_logger::init();

    // Reference run: Kp=0.5, Ki=0.01, Kd=0.1 toward 50 units of pressure,
    // 100 ticks at 10 Hz. These are the PidConfig/SimConfig defaults.
    let mut sim = SimulationLoop::new(
        PidController::new(PidConfig::default()),
        Aperture::new(),
        SystemClock,
        SimConfig::default(),
    );

    sim.run(|tick| {
        println!(
            "Pressure: {:.2}, Aperture: {:.2}%",
            tick.pressure, tick.position
        );
    });
}
