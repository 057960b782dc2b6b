use nalgebra::SVector;
use tracing::trace;

use crate::resources::IntegratorConfig;
use crate::utils::{Result, SimError};

// Dormand-Prince 5(4) tableau
const C2: f64 = 1.0 / 5.0;
const C3: f64 = 3.0 / 10.0;
const C4: f64 = 4.0 / 5.0;
const C5: f64 = 8.0 / 9.0;

const A21: f64 = 1.0 / 5.0;
const A31: f64 = 3.0 / 40.0;
const A32: f64 = 9.0 / 40.0;
const A41: f64 = 44.0 / 45.0;
const A42: f64 = -56.0 / 15.0;
const A43: f64 = 32.0 / 9.0;
const A51: f64 = 19372.0 / 6561.0;
const A52: f64 = -25360.0 / 2187.0;
const A53: f64 = 64448.0 / 6561.0;
const A54: f64 = -212.0 / 729.0;
const A61: f64 = 9017.0 / 3168.0;
const A62: f64 = -355.0 / 33.0;
const A63: f64 = 46732.0 / 5247.0;
const A64: f64 = 49.0 / 176.0;
const A65: f64 = -5103.0 / 18656.0;

// Fifth order weights, also the last stage row (first same as last)
const B1: f64 = 35.0 / 384.0;
const B3: f64 = 500.0 / 1113.0;
const B4: f64 = 125.0 / 192.0;
const B5: f64 = -2187.0 / 6784.0;
const B6: f64 = 11.0 / 84.0;

// Fifth minus fourth order weights
const E1: f64 = 71.0 / 57600.0;
const E3: f64 = -71.0 / 16695.0;
const E4: f64 = 71.0 / 1920.0;
const E5: f64 = -17253.0 / 339200.0;
const E6: f64 = 22.0 / 525.0;
const E7: f64 = -1.0 / 40.0;

const SAFETY: f64 = 0.9;
const MIN_FACTOR: f64 = 0.2;
const MAX_FACTOR: f64 = 10.0;

/// Result of one trial step
struct TrialStep<const N: usize> {
    state: SVector<f64, N>,
    derivative: SVector<f64, N>,
    error: f64,
}

/// Integrates `dy/dt = derivatives(t, y)` forward from `initial_time`, returning
/// the state at each of `sample_times`.
///
/// Steps are adaptive and are shortened to land on every sample time exactly.
/// Errors returned by `derivatives` propagate unchanged.
///
/// # Errors
/// * `InvalidParameter` - sample times unsorted or before `initial_time`.
/// * `IntegrationFailure` - the step shrank below `min_step`, the step budget
///   ran out, or the state stopped being finite.
pub fn integrate<const N: usize, F>(
    mut derivatives: F,
    initial_time: f64,
    initial_state: SVector<f64, N>,
    sample_times: &[f64],
    config: &IntegratorConfig,
) -> Result<Vec<(f64, SVector<f64, N>)>>
where
    F: FnMut(f64, &SVector<f64, N>) -> Result<SVector<f64, N>>,
{
    if !initial_time.is_finite() || initial_state.iter().any(|v| !v.is_finite()) {
        return Err(SimError::InvalidParameter(
            "initial condition must be finite".to_string(),
        ));
    }
    let mut previous = initial_time;
    for &sample in sample_times {
        if !(sample >= previous) {
            return Err(SimError::InvalidParameter(format!(
                "sample times must be sorted and start at or after {}, got {}",
                initial_time, sample
            )));
        }
        previous = sample;
    }

    let mut samples = Vec::with_capacity(sample_times.len());
    let mut t = initial_time;
    let mut y = initial_state;
    let mut k1 = derivatives(t, &y)?;
    if k1.iter().any(|v| !v.is_finite()) {
        return Err(SimError::IntegrationFailure(format!(
            "non-finite derivative at t = {}",
            t
        )));
    }

    let mut h = config.initial_step.unwrap_or_else(|| {
        let span = sample_times
            .iter()
            .copied()
            .find(|&s| s > initial_time)
            .map(|s| s - initial_time)
            .unwrap_or(1.0);
        (span * 1e-3).max(config.min_step)
    });
    let mut steps = 0usize;

    for &target in sample_times {
        while t < target {
            if steps >= config.max_steps {
                return Err(SimError::IntegrationFailure(format!(
                    "step budget of {} exhausted at t = {}",
                    config.max_steps, t
                )));
            }
            steps += 1;

            let remaining = target - t;
            let landing = h >= remaining;
            let step = if landing { remaining } else { h };

            let trial = dormand_prince_step(&mut derivatives, t, &y, &k1, step, config)?;

            if trial.error <= 1.0 {
                t = if landing { target } else { t + step };
                y = trial.state;
                k1 = trial.derivative;
                if y.iter().any(|v| !v.is_finite()) {
                    return Err(SimError::IntegrationFailure(format!(
                        "state became non-finite at t = {}",
                        t
                    )));
                }
                // A landing step is artificially short; don't let it cap the next one
                let factor = step_factor(trial.error);
                h = if landing { h.max(step * factor) } else { step * factor };
            } else {
                h = step * step_factor(trial.error);
                trace!(t, step, error = trial.error, "step rejected");
                if h < config.min_step {
                    return Err(SimError::IntegrationFailure(format!(
                        "step size {:.3e} below minimum {:.3e} at t = {}",
                        h, config.min_step, t
                    )));
                }
            }
        }
        samples.push((target, y));
    }

    trace!(steps, samples = samples.len(), "integration complete");
    Ok(samples)
}

fn step_factor(error: f64) -> f64 {
    if !error.is_finite() {
        MIN_FACTOR
    } else if error == 0.0 {
        MAX_FACTOR
    } else {
        (SAFETY * error.powf(-0.2)).clamp(MIN_FACTOR, MAX_FACTOR)
    }
}

fn dormand_prince_step<const N: usize, F>(
    derivatives: &mut F,
    t: f64,
    y: &SVector<f64, N>,
    k1: &SVector<f64, N>,
    h: f64,
    config: &IntegratorConfig,
) -> Result<TrialStep<N>>
where
    F: FnMut(f64, &SVector<f64, N>) -> Result<SVector<f64, N>>,
{
    let k2 = derivatives(t + C2 * h, &(y + k1 * (A21 * h)))?;
    let k3 = derivatives(t + C3 * h, &(y + (k1 * A31 + k2 * A32) * h))?;
    let k4 = derivatives(t + C4 * h, &(y + (k1 * A41 + k2 * A42 + k3 * A43) * h))?;
    let k5 = derivatives(
        t + C5 * h,
        &(y + (k1 * A51 + k2 * A52 + k3 * A53 + k4 * A54) * h),
    )?;
    let k6 = derivatives(
        t + h,
        &(y + (k1 * A61 + k2 * A62 + k3 * A63 + k4 * A64 + k5 * A65) * h),
    )?;

    let state = y + (k1 * B1 + k3 * B3 + k4 * B4 + k5 * B5 + k6 * B6) * h;
    let k7 = derivatives(t + h, &state)?;

    let error_estimate = (k1 * E1 + k3 * E3 + k4 * E4 + k5 * E5 + k6 * E6 + k7 * E7) * h;

    // RMS of the error scaled by the per-component tolerance
    let mut sum = 0.0;
    for i in 0..N {
        let scale = config.absolute_tolerance
            + config.relative_tolerance * y[i].abs().max(state[i].abs());
        sum += (error_estimate[i] / scale).powi(2);
    }
    let error = if N == 0 { 0.0 } else { (sum / N as f64).sqrt() };

    Ok(TrialStep {
        state,
        derivative: k7,
        error,
    })
}
