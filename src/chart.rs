//! One-variable sweeps for the speed and wind charts
//!
//! Sweeps are lazy and finite. [`SpeedRange`] is `Copy`, so iterating it again
//! restarts from the first sample.

use std::io;

use crate::environment::EnvironmentConditions;
use crate::error::{ManeuverError, Result};
use crate::physics::compute_wind_force;
use crate::types::*;
use crate::vessel::VesselProfile;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Most samples a single sweep may produce
pub const MAX_SWEEP_SAMPLES: usize = 1_000_000;

/// Evenly spaced speeds from `start` to `end` inclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedRange {
    start_kn: f64,
    end_kn: f64,
    step_kn: f64,
}

impl SpeedRange {
    pub fn new(start: Velocity, end: Velocity, step: Velocity) -> Result<Self> {
        Self::knots(start.get::<knot>(), end.get::<knot>(), step.get::<knot>())
    }

    pub fn knots(start_kn: f64, end_kn: f64, step_kn: f64) -> Result<Self> {
        if !(step_kn > 0.0 && step_kn.is_finite()) {
            return Err(ManeuverError::InvalidRange(format!(
                "step must be positive, got {step_kn} kn"
            )));
        }
        if !(start_kn.is_finite() && end_kn.is_finite()) || end_kn < start_kn {
            return Err(ManeuverError::InvalidRange(format!(
                "end {end_kn} kn is before start {start_kn} kn"
            )));
        }

        let steps = Self::step_count(start_kn, end_kn, step_kn);
        if !(steps.is_finite() && steps < MAX_SWEEP_SAMPLES as f64) {
            return Err(ManeuverError::InvalidRange(format!(
                "{start_kn}..={end_kn} kn by {step_kn} kn exceeds {MAX_SWEEP_SAMPLES} samples"
            )));
        }

        Ok(Self {
            start_kn,
            end_kn,
            step_kn,
        })
    }

    /// Number of samples, counting `end` when it falls on a step
    pub fn len(&self) -> usize {
        Self::step_count(self.start_kn, self.end_kn, self.step_kn) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn step_count(start_kn: f64, end_kn: f64, step_kn: f64) -> f64 {
        // Absorb rounding so 0.0..=3.0 by 0.1 still ends at 3.0
        ((end_kn - start_kn) / step_kn + 1e-9).floor()
    }

    pub fn get(&self, index: usize) -> Option<Velocity> {
        (index < self.len())
            .then(|| Velocity::new::<knot>(self.start_kn + index as f64 * self.step_kn))
    }
}

#[derive(Debug, Clone)]
pub struct SpeedRangeIter {
    range: SpeedRange,
    index: usize,
}

impl Iterator for SpeedRangeIter {
    type Item = Velocity;

    fn next(&mut self) -> Option<Velocity> {
        let speed = self.range.get(self.index)?;
        self.index += 1;
        Some(speed)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SpeedRangeIter {}

impl IntoIterator for SpeedRange {
    type Item = Velocity;
    type IntoIter = SpeedRangeIter;

    fn into_iter(self) -> SpeedRangeIter {
        SpeedRangeIter {
            range: self,
            index: 0,
        }
    }
}

/// Wind force as the mean wind varies, everything else held fixed
#[derive(Debug, Clone)]
pub struct WindForceCurve<I> {
    vessel: VesselProfile,
    environment: EnvironmentConditions,
    winds: I,
}

impl<I> Iterator for WindForceCurve<I>
where
    I: Iterator<Item = Velocity>,
{
    type Item = (Velocity, Force);

    fn next(&mut self) -> Option<Self::Item> {
        let mean_wind = self.winds.next()?;
        let environment = EnvironmentConditions {
            mean_wind,
            ..self.environment
        };
        Some((mean_wind, compute_wind_force(&self.vessel, &environment)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.winds.size_hint()
    }
}

pub fn sweep_wind_force_curve<S>(
    vessel: &VesselProfile,
    environment: &EnvironmentConditions,
    winds: S,
) -> WindForceCurve<S::IntoIter>
where
    S: IntoIterator<Item = Velocity>,
{
    WindForceCurve {
        vessel: *vessel,
        environment: *environment,
        winds: winds.into_iter(),
    }
}

/// Write a (speed, force) series as CSV: `<x_header>,force_t`, speeds in knots
pub fn write_curve_csv<W, I>(writer: W, x_header: &str, points: I) -> Result<(), ExportError>
where
    W: io::Write,
    I: IntoIterator<Item = (Velocity, Force)>,
{
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([x_header, "force_t"])?;

    for (speed, force) in points {
        wtr.write_record(&[
            format!("{:.3}", speed.get::<knot>()),
            format!("{:.3}", to_tonnes(force)),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
