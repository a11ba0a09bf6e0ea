//! Display-ready workout summaries.

use schemars::JsonSchema;
use serde::Serialize;

/// Derived summary of a single reading. Produced once per reading via
/// [`WorkoutReading::report`](crate::WorkoutReading::report), never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, JsonSchema)]
pub struct WorkoutReport {
    pub workout_type: &'static str,
    pub duration_h: f64,
    pub distance_km: f64,
    pub avg_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl std::fmt::Display for WorkoutReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout_type,
            self.duration_h,
            self.distance_km,
            self.avg_speed_kmh,
            self.calories_kcal
        )
    }
}
