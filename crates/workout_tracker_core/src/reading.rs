//! Workout reading variants and the metric formulas attached to them.

use crate::{WorkoutError, WorkoutReport};

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;
const CM_IN_M: f64 = 100.0;
const KMH_IN_MSEC: f64 = 0.278;

/// Step length in meters for running and walking.
const LEN_STEP: f64 = 0.65;
/// Stroke length in meters for swimming.
const LEN_STROKE: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// One raw workout record. Immutable once constructed; construct via
/// [`classify`] which validates arity and value ranges positionally.
#[derive(Clone, Debug, PartialEq)]
pub enum WorkoutReading {
    Swimming {
        /// Stroke count.
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_length_count: u32,
    },
    Running {
        /// Step count.
        action: u32,
        duration_h: f64,
        weight_kg: f64,
    },
    Walking {
        /// Step count.
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    },
}

impl WorkoutReading {
    /// Display name of the workout kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            WorkoutReading::Swimming { .. } => "Swimming",
            WorkoutReading::Running { .. } => "Running",
            WorkoutReading::Walking { .. } => "SportsWalking",
        }
    }

    pub fn duration_h(&self) -> f64 {
        match *self {
            WorkoutReading::Swimming { duration_h, .. }
            | WorkoutReading::Running { duration_h, .. }
            | WorkoutReading::Walking { duration_h, .. } => duration_h,
        }
    }

    fn weight_kg(&self) -> f64 {
        match *self {
            WorkoutReading::Swimming { weight_kg, .. }
            | WorkoutReading::Running { weight_kg, .. }
            | WorkoutReading::Walking { weight_kg, .. } => weight_kg,
        }
    }

    /// Distance covered, in kilometers.
    pub fn distance_km(&self) -> f64 {
        let (action, step) = match *self {
            WorkoutReading::Swimming { action, .. } => (action, LEN_STROKE),
            WorkoutReading::Running { action, .. } | WorkoutReading::Walking { action, .. } => {
                (action, LEN_STEP)
            }
        };
        f64::from(action) * step / M_IN_KM
    }

    /// Average speed, in km/h. Swimming is measured by pool laps rather
    /// than stroke distance.
    pub fn avg_speed_kmh(&self) -> f64 {
        match *self {
            WorkoutReading::Swimming {
                duration_h,
                pool_length_m,
                pool_length_count,
                ..
            } => pool_length_m * f64::from(pool_length_count) / M_IN_KM / duration_h,
            _ => self.distance_km() / self.duration_h(),
        }
    }

    /// Calories burned, in kcal. Each variant has its own formula; there
    /// is no shared default.
    pub fn calories_kcal(&self) -> f64 {
        let speed = self.avg_speed_kmh();
        let weight = self.weight_kg();
        let duration = self.duration_h();
        match *self {
            WorkoutReading::Running { .. } => {
                (RUN_SPEED_MULTIPLIER * speed + RUN_SPEED_SHIFT) * weight / M_IN_KM
                    * duration
                    * MIN_IN_H
            }
            WorkoutReading::Walking { height_cm, .. } => {
                let base = WLK_WEIGHT_MULTIPLIER * weight;
                let speed_term = (speed * KMH_IN_MSEC).powi(2) / (height_cm / CM_IN_M);
                (base + speed_term * WLK_SPEED_HEIGHT_MULTIPLIER * weight) * duration * MIN_IN_H
            }
            WorkoutReading::Swimming { .. } => {
                (speed + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULTIPLIER * weight * duration
            }
        }
    }

    /// Derive the display-ready summary for this reading.
    pub fn report(&self) -> WorkoutReport {
        WorkoutReport {
            workout_type: self.type_name(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            avg_speed_kmh: self.avg_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}

/// Construct a [`WorkoutReading`] from a workout-type tag and positionally
/// bound numeric values.
///
/// Arity per tag: `SWM` takes 5 values (action, duration, weight, pool
/// length, pool lap count), `RUN` takes 3 (action, duration, weight),
/// `WLK` takes 4 (action, duration, weight, height). A tag outside that
/// set yields [`WorkoutError::UnknownWorkoutType`]; a wrong value count,
/// a fractional or negative count value, or a non-positive duration yields
/// [`WorkoutError::MalformedReading`].
pub fn classify(tag: &str, values: &[f64]) -> Result<WorkoutReading, WorkoutError> {
    enum Kind {
        Swm,
        Run,
        Wlk,
    }

    let kind = match tag {
        "SWM" => Kind::Swm,
        "RUN" => Kind::Run,
        "WLK" => Kind::Wlk,
        _ => return Err(WorkoutError::UnknownWorkoutType { tag: tag.into() }),
    };
    let arity = match kind {
        Kind::Swm => 5,
        Kind::Run => 3,
        Kind::Wlk => 4,
    };
    if values.len() != arity {
        return Err(malformed(
            tag,
            format!("expected {} readings, got {}", arity, values.len()),
        ));
    }

    let action = count_value(tag, "action", values[0])?;
    let duration_h = values[1];
    if !(duration_h.is_finite() && duration_h > 0.0) {
        return Err(malformed(
            tag,
            format!("duration must be a positive number of hours, got {duration_h}"),
        ));
    }
    let weight_kg = values[2];

    Ok(match kind {
        Kind::Swm => WorkoutReading::Swimming {
            action,
            duration_h,
            weight_kg,
            pool_length_m: values[3],
            pool_length_count: count_value(tag, "pool length count", values[4])?,
        },
        Kind::Run => WorkoutReading::Running {
            action,
            duration_h,
            weight_kg,
        },
        Kind::Wlk => WorkoutReading::Walking {
            action,
            duration_h,
            weight_kg,
            height_cm: values[3],
        },
    })
}

fn malformed(tag: &str, reason: String) -> WorkoutError {
    WorkoutError::MalformedReading {
        tag: tag.into(),
        reason,
    }
}

/// Counts (steps, strokes, pool laps) must be non-negative whole numbers.
fn count_value(tag: &str, field: &str, value: f64) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(malformed(
            tag,
            format!("{field} must be a non-negative integer, got {value}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} !~ {b}");
    }

    #[test]
    fn swimming_reference_scenario() {
        let reading = classify("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).expect("classify");
        close(reading.distance_km(), 0.9936);
        // Speed comes from pool laps, not stroke distance.
        close(reading.avg_speed_kmh(), 1.0);
        close(reading.calories_kcal(), 336.0);
    }

    #[test]
    fn running_reference_scenario() {
        let reading = classify("RUN", &[15000.0, 1.0, 75.0]).expect("classify");
        close(reading.distance_km(), 9.75);
        close(reading.avg_speed_kmh(), 9.75);
        close(reading.calories_kcal(), (18.0 * 9.75 + 1.79) * 75.0 / 1000.0 * 60.0);
    }

    #[test]
    fn walking_reference_scenario() {
        let reading = classify("WLK", &[9000.0, 1.0, 75.0, 180.0]).expect("classify");
        close(reading.distance_km(), 5.85);
        close(reading.avg_speed_kmh(), 5.85);
        let expected = (0.035 * 75.0
            + (5.85f64 * 0.278).powi(2) / 1.8 * 0.029 * 75.0)
            * 60.0;
        close(reading.calories_kcal(), expected);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = classify("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
        assert_eq!(err, WorkoutError::UnknownWorkoutType { tag: "XYZ".into() });
    }

    #[test]
    fn arity_mismatch_is_rejected() {
        let err = classify("SWM", &[720.0, 1.0, 80.0]).unwrap_err();
        match err {
            WorkoutError::MalformedReading { tag, reason } => {
                assert_eq!(tag, "SWM");
                assert_eq!(reason, "expected 5 readings, got 3");
            }
            other => panic!("expected MalformedReading, got {other:?}"),
        }
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = classify("RUN", &[15000.0, 0.0, 75.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::MalformedReading { .. }));
    }

    #[test]
    fn negative_and_nan_duration_are_rejected() {
        assert!(classify("RUN", &[15000.0, -1.0, 75.0]).is_err());
        assert!(classify("RUN", &[15000.0, f64::NAN, 75.0]).is_err());
        assert!(classify("RUN", &[15000.0, f64::INFINITY, 75.0]).is_err());
    }

    #[test]
    fn fractional_action_is_rejected() {
        let err = classify("RUN", &[150.5, 1.0, 75.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::MalformedReading { .. }));
    }

    #[test]
    fn distance_is_non_negative_for_every_variant() {
        for (tag, values) in [
            ("SWM", vec![0.0, 1.0, 80.0, 25.0, 0.0]),
            ("RUN", vec![0.0, 1.0, 75.0]),
            ("WLK", vec![0.0, 1.0, 75.0, 180.0]),
        ] {
            let reading = classify(tag, &values).expect("classify");
            assert!(reading.distance_km() >= 0.0);
        }
    }

    #[test]
    fn running_calories_monotone_in_speed_and_duration() {
        // Higher step count at fixed duration raises speed, which must
        // raise calories; longer duration at fixed speed likewise.
        let slow = classify("RUN", &[10000.0, 1.0, 75.0]).expect("classify");
        let fast = classify("RUN", &[15000.0, 1.0, 75.0]).expect("classify");
        assert!(fast.calories_kcal() > slow.calories_kcal());

        let short = classify("RUN", &[10000.0, 1.0, 75.0]).expect("classify");
        let long = classify("RUN", &[20000.0, 2.0, 75.0]).expect("classify");
        assert_eq!(short.avg_speed_kmh(), long.avg_speed_kmh());
        assert!(long.calories_kcal() > short.calories_kcal());
    }
}
