use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pressure measured against a fully closed aperture, in arbitrary units.
pub const FULL_SCALE_PRESSURE: f64 = 100.0;

/// Magnitude bound of the simulated turbulence, in pressure units.
pub const FLUCTUATION_SPAN: i64 = 10;

/// A simulated water pressure sensor.
///
/// The plant model is deliberately simple: pressure falls linearly as the
/// aperture opens, and a turbulence term wobbles each reading. The model is
/// stateless; the time-varying character of the noise comes entirely from
/// the seed the caller supplies, so a fixed seed sequence reproduces a run
/// exactly.
#[derive(Clone, Copy, Debug, Default)]
pub struct PressureModel;

impl PressureModel {
    /// Creates the sensor model.
    pub fn new() -> Self {
        Self
    }

    /// Produces one noisy pressure reading for the given aperture position.
    ///
    /// The base pressure is `100 - position`; the fluctuation derived from
    /// `seed` lies in `[-10, 10)`, and the final reading is floored at zero
    /// (a real gauge does not read negative).
    pub fn sample(&self, aperture_position: f64, seed: u64) -> f64 {
        let base_pressure = FULL_SCALE_PRESSURE - aperture_position;
        (base_pressure + fluctuation(seed)).max(0.0)
    }
}

/// Derives the turbulence term for one reading from a seed.
///
/// Deterministic per seed: the seed initializes a [`StdRng`] which draws a
/// single integer uniform in `[-10, 10)`. Callers feeding wall-clock seeds
/// get a fresh wobble every tick; tests feeding fixed seeds get repeatable
/// readings.
pub fn fluctuation(seed: u64) -> f64 {
    let mut rng = StdRng::seed_from_u64(seed);
    rng.gen_range(-FLUCTUATION_SPAN..FLUCTUATION_SPAN) as f64
}
