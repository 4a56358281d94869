/// Lower end of the aperture's travel, in percent open.
pub const APERTURE_MIN: f64 = 0.0;

/// Upper end of the aperture's travel, in percent open.
pub const APERTURE_MAX: f64 = 100.0;

/// Distance the aperture moves toward its target per update, in percent.
pub const APERTURE_STEP: f64 = 0.5;

/// Gap below which the aperture stops chasing its target, in percent.
pub const APERTURE_DEADBAND: f64 = 1.0;

/// A slow mechanical aperture tracking a commanded position.
///
/// The aperture is a coarse actuator: each [`update`](Aperture::update)
/// moves the position by a fixed half-percent step toward the target, and
/// movement stops once the remaining gap is within the one-percent deadband.
/// Because the step has fixed magnitude, the position generally settles into
/// a narrow band around the target rather than landing on it exactly. That
/// slew-rate-limited behavior is intentional and callers should not expect
/// exact convergence.
///
/// The commanded target is clamped to the physical travel on every set; the
/// position itself starts mid-travel and is only ever moved in half-percent
/// steps, so it stays within travel in practice without being re-clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aperture {
    position: f64,
    target_position: f64,
}

impl Default for Aperture {
    fn default() -> Self {
        Self::new()
    }
}

impl Aperture {
    /// Creates an aperture resting at mid-travel (50%), with its target at
    /// the same position.
    pub fn new() -> Self {
        Self {
            position: 50.0,
            target_position: 50.0,
        }
    }

    /// Returns the current physical position, in percent open.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Returns the commanded target position, in percent open.
    pub fn target_position(&self) -> f64 {
        self.target_position
    }

    /// Commands a new target position, clamped to the physical travel.
    ///
    /// Only the stored target changes; the position does not move until the
    /// next [`update`](Aperture::update).
    pub fn set_target(&mut self, target: f64) {
        self.target_position = target.clamp(APERTURE_MIN, APERTURE_MAX);
    }

    /// Advances the mechanism by one actuation cycle and returns the
    /// position.
    ///
    /// Moves the position by [`APERTURE_STEP`] toward the target if the gap
    /// exceeds [`APERTURE_DEADBAND`], otherwise holds still.
    pub fn update(&mut self) -> f64 {
        if (self.target_position - self.position).abs() > APERTURE_DEADBAND {
            if self.target_position > self.position {
                self.position += APERTURE_STEP;
            } else {
                self.position -= APERTURE_STEP;
            }
        }
        self.position
    }
}
