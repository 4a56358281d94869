use thiserror::Error;

/// Errors raised when a PID configuration is given values the controller
/// cannot compute with.
///
/// Zero and negative gains are deliberately *not* errors: they are legal
/// configurations that merely change the loop behavior. Only non-finite
/// values (NaN or infinity) are rejected, since they would poison every
/// subsequent `compute` call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PidConfigError {
    /// The proportional gain is NaN or infinite.
    #[error("proportional gain must be finite")]
    NonFiniteProportionalGain,

    /// The integral gain is NaN or infinite.
    #[error("integral gain must be finite")]
    NonFiniteIntegralGain,

    /// The derivative gain is NaN or infinite.
    #[error("derivative gain must be finite")]
    NonFiniteDerivativeGain,

    /// The setpoint is NaN or infinite.
    #[error("setpoint must be finite")]
    NonFiniteSetpoint,

    /// The output limits are NaN, infinite, or not ordered min < max.
    #[error("output limits must be finite with min < max")]
    InvalidOutputLimits,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PidConfig {
    /// Proportional gain coefficient.
    /// Defaults to 0.5.
    kp: f64,

    /// Integral gain coefficient.
    /// Defaults to 0.01. The integral term is an unweighted per-tick sum, so
    /// this gain is not rescaled by any sample time.
    ki: f64,

    /// Derivative gain coefficient.
    /// Defaults to 0.1.
    kd: f64,

    /// Target process value the controller regulates toward.
    /// Defaults to 50.0, the reference pressure of the nominal run.
    setpoint: f64,

    /// Minimum output value of the PID controller.
    /// Defaults to 0.0, the fully closed aperture command.
    output_min: f64,

    /// Maximum output value of the PID controller.
    /// Defaults to 100.0, the fully open aperture command.
    output_max: f64,
}

impl Default for PidConfig {
    fn default() -> Self {
        PidConfig {
            kp: 0.5,
            ki: 0.01,
            kd: 0.1,
            setpoint: 50.0,
            output_min: 0.0,
            output_max: 100.0,
        }
    }
}

impl PidConfig {
    /// Returns the proportional gain.
    pub fn kp(&self) -> f64 {
        self.kp
    }

    /// Returns the integral gain.
    pub fn ki(&self) -> f64 {
        self.ki
    }

    /// Returns the derivative gain.
    pub fn kd(&self) -> f64 {
        self.kd
    }

    /// Convenience method that returns the proportional, integral, and derivative gains together as a tuple.
    pub fn gains(&self) -> (f64, f64, f64) {
        (self.kp, self.ki, self.kd)
    }

    /// Returns the setpoint.
    pub fn setpoint(&self) -> f64 {
        self.setpoint
    }

    /// Returns the minimum output limit.
    pub fn output_min(&self) -> f64 {
        self.output_min
    }

    /// Returns the maximum output limit.
    pub fn output_max(&self) -> f64 {
        self.output_max
    }

    /// Sets the proportional gain.
    ///
    /// Any finite value is accepted, including zero and negative gains; a
    /// zero gain disables the proportional term rather than being an error.
    ///
    /// # Arguments
    /// - `kp`: The new proportional gain.
    ///
    /// # Returns
    /// - `Ok(())` if the gain was set successfully.
    /// - `Err(PidConfigError::NonFiniteProportionalGain)` if the gain is NaN or infinite.
    pub fn set_kp(&mut self, kp: f64) -> Result<(), PidConfigError> {
        if !kp.is_finite() {
            return Err(PidConfigError::NonFiniteProportionalGain);
        }
        self.kp = kp;
        Ok(())
    }

    /// Sets the integral gain.
    ///
    /// # Arguments
    /// - `ki`: The new integral gain.
    ///
    /// # Returns
    /// - `Ok(())` if the gain was set successfully.
    /// - `Err(PidConfigError::NonFiniteIntegralGain)` if the gain is NaN or infinite.
    pub fn set_ki(&mut self, ki: f64) -> Result<(), PidConfigError> {
        if !ki.is_finite() {
            return Err(PidConfigError::NonFiniteIntegralGain);
        }
        self.ki = ki;
        Ok(())
    }

    /// Sets the derivative gain.
    ///
    /// # Arguments
    /// - `kd`: The new derivative gain.
    ///
    /// # Returns
    /// - `Ok(())` if the gain was set successfully.
    /// - `Err(PidConfigError::NonFiniteDerivativeGain)` if the gain is NaN or infinite.
    pub fn set_kd(&mut self, kd: f64) -> Result<(), PidConfigError> {
        if !kd.is_finite() {
            return Err(PidConfigError::NonFiniteDerivativeGain);
        }
        self.kd = kd;
        Ok(())
    }

    /// Convenience method to set the proportional, integral, and derivative gains together.
    pub fn set_gains(&mut self, kp: f64, ki: f64, kd: f64) -> Result<(), PidConfigError> {
        self.set_kp(kp)?;
        self.set_ki(ki)?;
        self.set_kd(kd)
    }

    /// Sets the setpoint the controller regulates toward.
    ///
    /// # Arguments
    /// - `setpoint`: The new target process value.
    ///
    /// # Returns
    /// - `Ok(())` if the setpoint was set successfully.
    /// - `Err(PidConfigError::NonFiniteSetpoint)` if the setpoint is NaN or infinite.
    pub fn set_setpoint(&mut self, setpoint: f64) -> Result<(), PidConfigError> {
        if !setpoint.is_finite() {
            return Err(PidConfigError::NonFiniteSetpoint);
        }
        self.setpoint = setpoint;
        Ok(())
    }

    /// Sets the minimum and maximum output limits for the PID controller.
    ///
    /// # Arguments
    /// - `output_min`: The minimum output limit.
    /// - `output_max`: The maximum output limit.
    ///
    /// # Returns
    /// - `Ok(())` if the limits were set successfully.
    /// - `Err(PidConfigError::InvalidOutputLimits)` if either limit is
    ///   non-finite, or the minimum is not strictly less than the maximum.
    pub fn set_output_limits(
        &mut self,
        output_min: f64,
        output_max: f64,
    ) -> Result<(), PidConfigError> {
        if !output_min.is_finite() || !output_max.is_finite() || output_min >= output_max {
            return Err(PidConfigError::InvalidOutputLimits);
        }

        self.output_min = output_min;
        self.output_max = output_max;

        Ok(())
    }
}

/// A builder for [`PidConfig`] that defers validation to `build`.
///
/// Field methods accept raw values without checking them; `build` applies
/// the same validation as the [`PidConfig`] setters and reports the first
/// offending field.
#[derive(Copy, Clone, Debug, Default)]
pub struct PidConfigBuilder {
    kp: Option<f64>,
    ki: Option<f64>,
    kd: Option<f64>,
    setpoint: Option<f64>,
    output_limits: Option<(f64, f64)>,
}

impl PidConfigBuilder {
    /// Sets the proportional gain to apply at `build` time.
    pub fn kp(mut self, kp: f64) -> Self {
        self.kp = Some(kp);
        self
    }

    /// Sets the integral gain to apply at `build` time.
    pub fn ki(mut self, ki: f64) -> Self {
        self.ki = Some(ki);
        self
    }

    /// Sets the derivative gain to apply at `build` time.
    pub fn kd(mut self, kd: f64) -> Self {
        self.kd = Some(kd);
        self
    }

    /// Sets the setpoint to apply at `build` time.
    pub fn setpoint(mut self, setpoint: f64) -> Self {
        self.setpoint = Some(setpoint);
        self
    }

    /// Sets the output limits to apply at `build` time.
    pub fn output_limits(mut self, output_min: f64, output_max: f64) -> Self {
        self.output_limits = Some((output_min, output_max));
        self
    }

    /// Validates the staged values and produces a [`PidConfig`].
    ///
    /// Unset fields keep their [`PidConfig::default`] values.
    ///
    /// # Returns
    /// - `Ok(PidConfig)` if all staged values pass validation.
    /// - The first [`PidConfigError`] encountered otherwise.
    pub fn build(self) -> Result<PidConfig, PidConfigError> {
        let mut config = PidConfig::default();
        if let Some(kp) = self.kp {
            config.set_kp(kp)?;
        }
        if let Some(ki) = self.ki {
            config.set_ki(ki)?;
        }
        if let Some(kd) = self.kd {
            config.set_kd(kd)?;
        }
        if let Some(setpoint) = self.setpoint {
            config.set_setpoint(setpoint)?;
        }
        if let Some((lo, hi)) = self.output_limits {
            config.set_output_limits(lo, hi)?;
        }
        Ok(config)
    }
}

/// A stateful PID (Proportional-Integral-Derivative) controller.
///
/// The controller computes a control output from the error between its
/// configured setpoint and a measured process value, accumulating the
/// integral of the error and differencing consecutive errors for the
/// derivative term.
///
/// The integral is an **unbounded** running sum: no decay, no anti-windup
/// clamp. This is faithful to the plant this controller regulates, whose
/// closed-loop dynamics depend on the free-running sum; clamping it would
/// change the simulated response. Only the final output is clamped, to the
/// configured limits.
#[derive(Clone, Debug)]
pub struct PidController {
    config: PidConfig,
    integral: f64,
    previous_error: f64,
}

impl PidController {
    /// Creates a controller with the given configuration and zeroed state.
    pub fn new(config: PidConfig) -> Self {
        Self {
            config,
            integral: 0.0,
            previous_error: 0.0,
        }
    }

    pub fn config(&self) -> &PidConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut PidConfig {
        &mut self.config
    }

    /// Returns the accumulated integral of the error.
    pub fn integral(&self) -> f64 {
        self.integral
    }

    /// Returns the error computed on the most recent `compute` call, or 0.0
    /// if `compute` has not been called yet.
    pub fn error(&self) -> f64 {
        self.previous_error
    }

    /// Computes the control output for one measured process value.
    ///
    /// The output is the textbook discrete PID law over per-tick samples:
    ///
    /// ```text
    /// e  = setpoint - reading
    /// Σe += e
    /// Δe = e - e_prev
    /// u  = Kp·e + Ki·Σe + Kd·Δe
    /// ```
    ///
    /// clamped to the configured output limits. Every call mutates the
    /// integral and the stored previous error, so `compute` is not
    /// idempotent and has no undo.
    pub fn compute(&mut self, current_reading: f64) -> f64 {
        let error = self.config.setpoint - current_reading;

        // Unbounded by design; see the type-level docs.
        self.integral += error;

        let derivative = error - self.previous_error;

        let output =
            self.config.kp * error + self.config.ki * self.integral + self.config.kd * derivative;

        self.previous_error = error;

        output.clamp(self.config.output_min, self.config.output_max)
    }

    /// Clears the accumulated integral and the stored previous error,
    /// returning the controller to its just-constructed state. The
    /// configuration is untouched.
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.previous_error = 0.0;
    }
}
