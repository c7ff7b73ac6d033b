//! One-call evaluation of a full maneuver snapshot
//!
//! The [`Calculator`] owns nothing but its calibration. Each call to
//! [`Calculator::evaluate`] is independent: the same inputs always give the
//! same report.

use std::io;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::advisory::*;
use crate::chart::{SpeedRange, SpeedRangeIter};
use crate::config::Calibration;
use crate::environment::{EnvironmentConditions, ManeuverTarget, TugAssistConfig};
use crate::error::{Result, ensure_non_negative};
use crate::physics::*;
use crate::types::*;
use crate::vessel::VesselProfile;

/// Conditions alongside the berth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DockingConditions {
    /// Wind at the berth
    pub wind_speed: Velocity,
    pub tugs: TugAssistConfig,
    pub operation: DockingOperation,
}

/// Everything the pilot has entered
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManeuverInputs {
    pub vessel: VesselProfile,
    pub environment: EnvironmentConditions,
    pub target: ManeuverTarget,
    pub transit_tugs: TugAssistConfig,
    pub docking: DockingConditions,
}

impl ManeuverInputs {
    pub fn validate(&self) -> Result<()> {
        self.vessel.validate()?;
        self.environment.validate()?;
        self.target.validate()?;
        self.transit_tugs.validate()?;
        self.docking.tugs.validate()?;
        ensure_non_negative("docking wind (kn)", self.docking.wind_speed.get::<knot>())?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub wind_force: Force,
    pub kb: f64,
    pub critical_speed: Velocity,
    pub crab_angle: Angle,
    pub speed_over_ground: Velocity,
    pub required_tug_force: Force,
    pub engine_load_percent: f64,
    pub docking_static_force: Force,
    pub docking_margin: Force,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManeuverReport {
    pub result: CalculationResult,
    pub docking: DockingBalance,
    pub advisories: Vec<Advisory>,
    pub tactics: DockingTactics,
}

impl ManeuverReport {
    /// Worst severity across all advisories
    pub fn overall_severity(&self) -> Severity {
        self.advisories
            .iter()
            .map(|a| a.severity)
            .max()
            .unwrap_or(Severity::Ok)
    }

    pub fn advisory(&self, topic: &str) -> Option<&Advisory> {
        self.advisories.iter().find(|a| a.topic == topic)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Calculator {
    calibration: Calibration,
}

impl Calculator {
    pub fn new(calibration: Calibration) -> Self {
        Self { calibration }
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Compute every derived number for a snapshot
    pub fn compute(&self, inputs: &ManeuverInputs) -> Result<CalculationResult> {
        inputs.validate()?;

        let ManeuverInputs {
            vessel,
            environment,
            target,
            docking,
            ..
        } = inputs;

        let wind_force = compute_wind_force(vessel, environment);
        let drift = compute_drift_model(vessel, environment, target.tolerated_drift)?;
        let crab_angle = compute_crab_angle(
            environment,
            target.surface_speed,
            self.calibration.drift_constant,
        )?;
        let speed_over_ground = compute_sog(
            target.surface_speed,
            environment.current_speed,
            environment.current_direction,
        );
        let required_tug_force =
            compute_required_tug_force(wind_force, drift.critical_speed, target.surface_speed);
        let engine_load_percent =
            compute_engine_load_percent(wind_force, vessel.engine_thrust(&self.calibration));
        let balance =
            compute_docking_balance(vessel, docking.wind_speed, &docking.tugs, &self.calibration);

        debug!(
            wind_t = to_tonnes(wind_force),
            kb = drift.kb,
            critical_kn = drift.critical_speed.get::<knot>(),
            required_t = to_tonnes(required_tug_force),
            margin_t = balance.margin_tonnes(),
            "computed maneuver snapshot"
        );

        Ok(CalculationResult {
            wind_force,
            kb: drift.kb,
            critical_speed: drift.critical_speed,
            crab_angle,
            speed_over_ground,
            required_tug_force,
            engine_load_percent,
            docking_static_force: balance.static_force,
            docking_margin: balance.margin,
        })
    }

    /// Compute and classify a snapshot
    pub fn evaluate(&self, inputs: &ManeuverInputs) -> Result<ManeuverReport> {
        let result = self.compute(inputs)?;
        let docking = compute_docking_balance(
            &inputs.vessel,
            inputs.docking.wind_speed,
            &inputs.docking.tugs,
            &self.calibration,
        );

        let advisories = vec![
            critical_speed_advisory(result.critical_speed, inputs.target.surface_speed),
            speed_margin_advisory(result.critical_speed, &inputs.target),
            transit_tug_advisory(result.required_tug_force, &inputs.transit_tugs),
            engine_load_advisory(result.engine_load_percent, &self.calibration),
            docking_advisory(&docking, &self.calibration),
        ];

        for advisory in advisories.iter().filter(|a| a.severity == Severity::Critical) {
            warn!(topic = %advisory.topic, "{}", advisory.message);
        }

        let tactics = docking_tactics(inputs.docking.tugs.tug_count, inputs.docking.operation);

        Ok(ManeuverReport {
            result,
            docking,
            advisories,
            tactics,
        })
    }

    /// Required tug force across a speed range for the snapshot's wind and drift target
    pub fn tug_force_curve(
        &self,
        inputs: &ManeuverInputs,
        speeds: SpeedRange,
    ) -> Result<TugForceCurve<SpeedRangeIter>> {
        inputs.validate()?;
        let wind_force = compute_wind_force(&inputs.vessel, &inputs.environment);
        let drift = compute_drift_model(
            &inputs.vessel,
            &inputs.environment,
            inputs.target.tolerated_drift,
        )?;
        Ok(sweep_tug_force_curve(wind_force, drift.critical_speed, speeds))
    }
}

/// Presentation layer fed by the calculator
pub trait View {
    fn render(&mut self, report: &ManeuverReport) -> io::Result<()>;
}

/// Plain-text report for a terminal or a log file
#[derive(Debug)]
pub struct TextView<W: io::Write> {
    out: W,
}

impl<W: io::Write> TextView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn symbol(severity: Severity) -> &'static str {
    match severity {
        Severity::Ok => "✅",
        Severity::Warning => "⚠️",
        Severity::Critical => "❌",
    }
}

impl<W: io::Write> View for TextView<W> {
    fn render(&mut self, report: &ManeuverReport) -> io::Result<()> {
        let r = &report.result;
        let out = &mut self.out;

        writeln!(out, "╔════════════════════════════════════════════╗")?;
        writeln!(out, "║         PILOTAGE DECISION SUPPORT          ║")?;
        writeln!(out, "╚════════════════════════════════════════════╝")?;
        writeln!(
            out,
            "{} Overall: {}\n",
            symbol(report.overall_severity()),
            report.overall_severity()
        )?;

        writeln!(out, "Transit:")?;
        writeln!(out, "{}", "─".repeat(50))?;
        writeln!(out, "  Wind force:          {}", DisplayForce(r.wind_force))?;
        writeln!(out, "  Drift coefficient:   {:.4}", r.kb)?;
        writeln!(out, "  Critical speed:      {}", DisplayVelocity(r.critical_speed))?;
        writeln!(out, "  Crab angle:          {} into the wind", DisplayAngle(r.crab_angle))?;
        writeln!(out, "  Speed over ground:   {}", DisplayVelocity(r.speed_over_ground))?;
        writeln!(out, "  Required tug force:  {}", DisplayForce(r.required_tug_force))?;
        writeln!(out, "  Engine load:         {:.1}%", r.engine_load_percent)?;

        writeln!(out, "\nDocking:")?;
        writeln!(out, "{}", "─".repeat(50))?;
        writeln!(out, "  Wind pressure:       {}", DisplayForce(report.docking.static_force))?;
        writeln!(out, "  Thruster thrust:     {}", DisplayForce(report.docking.thruster_force))?;
        writeln!(out, "  Tug bollard pull:    {}", DisplayForce(report.docking.tug_force))?;
        writeln!(out, "  Safety margin:       {}", DisplayForce(report.docking.margin))?;

        writeln!(out, "\nAdvisories:")?;
        writeln!(out, "{}", "─".repeat(50))?;
        for advisory in &report.advisories {
            writeln!(out, "{} {}", symbol(advisory.severity), advisory.topic)?;
            writeln!(out, "   {}", advisory.message)?;
        }

        writeln!(out, "\nPlacement ({}):", report.tactics.work_mode)?;
        writeln!(out, "{}", "─".repeat(50))?;
        for placement in &report.tactics.placements {
            writeln!(out, "  • {}", placement)?;
        }
        for instruction in &report.tactics.instructions {
            writeln!(out, "  - {}", instruction)?;
        }

        writeln!(out, "\n{}", "═".repeat(50))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{CurrentDirection, WindSector};
    use crate::error::ManeuverError;
    use approx::assert_relative_eq;

    fn kn(v: f64) -> Velocity {
        Velocity::new::<knot>(v)
    }

    /// Lpp 330, draft 12.5, Cb 0.7, Aw 12500, 20 kn gusting 1.3 on the beam, 7° drift
    fn reference_inputs(surface_kn: f64) -> ManeuverInputs {
        ManeuverInputs {
            vessel: VesselProfile::new(
                Length::new::<meter>(330.0),
                Length::new::<meter>(12500.0 / 330.0),
                Length::new::<meter>(12.5),
                0.7,
                1.0,
                Power::new::<kilowatt>(45000.0),
                Power::new::<kilowatt>(2500.0),
            ),
            environment: EnvironmentConditions::new(
                kn(20.0),
                1.3,
                WindSector::Beam,
                kn(1.0),
                CurrentDirection::Opposing,
            ),
            target: ManeuverTarget::new(kn(surface_kn), Angle::new::<degree>(7.0), kn(0.0)),
            transit_tugs: TugAssistConfig::from_tonnes(60.0, 2),
            docking: DockingConditions {
                wind_speed: kn(15.0),
                tugs: TugAssistConfig::from_tonnes(60.0, 2),
                operation: DockingOperation::Berthing,
            },
        }
    }

    #[test]
    fn test_reference_snapshot() {
        let calc = Calculator::default();
        let r = calc.compute(&reference_inputs(3.5)).unwrap();

        let aw: f64 = 12500.0;
        let wind_t = 0.5 * 1.225 * (26.0_f64 * 0.514).powi(2) * aw / 9806.0;
        let kb = 0.1 * (0.7 + 0.5 * 12.5 / 330.0) * (aw / (330.0 * 12.5)).sqrt();
        let v_min = 26.0 * (kb / 7.0).sqrt();

        assert_relative_eq!(to_tonnes(r.wind_force), wind_t, max_relative = 1e-9);
        assert_relative_eq!(r.kb, kb, max_relative = 1e-9);
        assert_relative_eq!(r.critical_speed.get::<knot>(), v_min, max_relative = 1e-9);
        assert_relative_eq!(r.speed_over_ground.get::<knot>(), 2.5, epsilon = 1e-9);
        assert_relative_eq!(
            r.crab_angle.get::<degree>(),
            (26.0_f64 * 0.15 / 3.5).atan().to_degrees(),
            max_relative = 1e-9
        );
        // 3.5 kn is above v_min (about 3.48 kn): no tugs needed
        assert_eq!(to_tonnes(r.required_tug_force), 0.0);
        assert_relative_eq!(
            r.engine_load_percent,
            wind_t / 585.0 * 100.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_critical_speed_advisory_flips_at_v_min() {
        let calc = Calculator::default();
        let critical = calc.compute(&reference_inputs(3.5)).unwrap().critical_speed;
        assert!(critical.get::<knot>() < 3.5);

        let mut at_critical = reference_inputs(3.5);
        at_critical.target.surface_speed = critical;
        let at = calc.evaluate(&at_critical).unwrap();
        assert_eq!(at.advisory("Critical speed").unwrap().severity, Severity::Ok);
        assert_eq!(to_tonnes(at.result.required_tug_force), 0.0);

        let below = calc
            .evaluate(&reference_inputs(critical.get::<knot>() - 0.01))
            .unwrap();
        assert_eq!(
            below.advisory("Critical speed").unwrap().severity,
            Severity::Critical
        );
        assert!(to_tonnes(below.result.required_tug_force) > 0.0);
    }

    #[test]
    fn test_slow_ship_needs_tugs() {
        let report = Calculator::default().evaluate(&reference_inputs(2.0)).unwrap();
        let transit = report.advisory("Transit towage").unwrap();

        // About 139 T of wind; at 2 kn the tugs carry roughly 93 T of it
        assert_eq!(transit.severity, Severity::Warning);
        assert_eq!(report.overall_severity(), Severity::Critical);

        // At 1 kn the requirement outgrows two 60 T tugs
        let crawling = Calculator::default().evaluate(&reference_inputs(1.0)).unwrap();
        assert_eq!(
            crawling.advisory("Transit towage").unwrap().severity,
            Severity::Critical
        );
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let calc = Calculator::default();
        let inputs = reference_inputs(2.0);
        assert_eq!(calc.evaluate(&inputs).unwrap(), calc.evaluate(&inputs).unwrap());
    }

    #[test]
    fn test_drift_constant_from_calibration() {
        let inputs = reference_inputs(3.5);
        let default = Calculator::default().compute(&inputs).unwrap();
        let softer = Calculator::new(Calibration {
            drift_constant: 0.10,
            ..Calibration::default()
        })
        .compute(&inputs)
        .unwrap();

        assert!(softer.crab_angle < default.crab_angle);
        assert_eq!(softer.wind_force, default.wind_force);
    }

    #[test]
    fn test_invalid_inputs_fail_fast() {
        let mut inputs = reference_inputs(3.5);
        inputs.target.tolerated_drift = Angle::new::<degree>(0.0);
        assert!(matches!(
            Calculator::default().evaluate(&inputs),
            Err(ManeuverError::NonPositive { .. })
        ));

        let mut inputs = reference_inputs(3.5);
        inputs.target.surface_speed = kn(0.0);
        assert!(Calculator::default().compute(&inputs).is_err());
    }

    #[test]
    fn test_report_docking_matches_result() {
        let report = Calculator::default().evaluate(&reference_inputs(3.5)).unwrap();
        assert_eq!(report.docking.margin, report.result.docking_margin);
        assert_eq!(report.docking.static_force, report.result.docking_static_force);
        assert_eq!(report.tactics.work_mode, WorkMode::Pushing);
    }

    #[test]
    fn test_tug_curve_ends_at_zero() {
        let calc = Calculator::default();
        let inputs = reference_inputs(3.5);
        let curve: Vec<_> = calc
            .tug_force_curve(&inputs, SpeedRange::knots(0.0, 6.0, 0.5).unwrap())
            .unwrap()
            .collect();

        assert_eq!(curve.len(), 13);
        assert_relative_eq!(
            to_tonnes(curve[0].1),
            to_tonnes(calc.compute(&inputs).unwrap().wind_force),
            max_relative = 1e-9
        );
        assert_eq!(to_tonnes(curve[12].1), 0.0);
    }

    #[test]
    fn test_text_view_renders_every_advisory() {
        let report = Calculator::default().evaluate(&reference_inputs(1.0)).unwrap();
        let mut view = TextView::new(Vec::new());
        view.render(&report).unwrap();

        let text = String::from_utf8(view.into_inner()).unwrap();
        for advisory in &report.advisories {
            assert!(text.contains(&advisory.message));
        }
        assert!(text.contains("Overall: CRITICAL"));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = Calculator::default().evaluate(&reference_inputs(3.5)).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["advisories"].as_array().unwrap().len(), 5);
        assert_eq!(json["tactics"]["work_mode"], "Pushing");
    }
}
