use tracing::debug;

use crate::breed::BreedProfile;
use crate::models::{
    SafetyAssessment, SafetyLevel, TimeRange, WalkDuration, WarningSet, WarningType,
    WeatherReading,
};

pub const HEAT_CUTOFF_F: f64 = 85.0;
pub const WARM_CUTOFF_F: f64 = 75.0;
pub const EVENING_CUTOFF_F: f64 = 80.0;
pub const HUMIDITY_CUTOFF: f64 = 70.0;
pub const FREEZING_CUTOFF_F: f64 = 32.0;
pub const WIND_CHILL_TEMP_F: f64 = 45.0;
pub const WIND_CHILL_SPEED_MPH: f64 = 15.0;

pub const SAFE_MESSAGE: &str = "Perfect for walks!";
pub const CAUTION_MESSAGE: &str = "Exercise caution during walks";
pub const UNSAFE_MESSAGE: &str = "Avoid outdoor activities";
pub const TOO_HOT_MESSAGE: &str = "Too hot for walks! Risk of paw burns and overheating.";
pub const TOO_COLD_MESSAGE: &str = "Too cold for most dogs! Keep walks very short.";

pub fn assess(weather: &WeatherReading, breed: &BreedProfile) -> SafetyAssessment {
    let safety_level = breed.assess_reading(weather);
    let active_warnings = warnings_for(weather, breed);
    let walk_duration = walk_duration_for(safety_level);
    let recommendation = recommendation_for(safety_level, &active_warnings);
    let best_time_recommendations = suggested_times(weather);

    debug!(
        breed = breed.name,
        temperature = weather.temperature,
        humidity = weather.humidity,
        wind_speed = weather.wind_speed,
        level = safety_level.label(),
        warnings = active_warnings.len(),
        "assessed walking conditions"
    );

    SafetyAssessment {
        safety_level,
        active_warnings,
        walk_duration,
        recommendation,
        best_time_recommendations,
    }
}

pub fn warnings_for(weather: &WeatherReading, breed: &BreedProfile) -> WarningSet {
    let temperature = weather.temperature;
    let mut warnings = WarningSet::new();

    if temperature > HEAT_CUTOFF_F {
        warnings.insert(WarningType::Heatstroke);
        warnings.insert(WarningType::PawBurn);
    } else if temperature > WARM_CUTOFF_F && weather.humidity > HUMIDITY_CUTOFF {
        warnings.insert(WarningType::Dehydration);
    }

    if temperature < FREEZING_CUTOFF_F {
        warnings.insert(WarningType::Hypothermia);
    }

    if temperature < WIND_CHILL_TEMP_F && weather.wind_speed > WIND_CHILL_SPEED_MPH {
        warnings.insert(WarningType::WindChill);
    }

    if breed.is_heat_sensitive() && temperature > WARM_CUTOFF_F {
        warnings.insert(WarningType::Heatstroke);
    }

    warnings
}

pub fn walk_duration_for(level: SafetyLevel) -> WalkDuration {
    match level {
        SafetyLevel::Safe => WalkDuration::Recommended,
        SafetyLevel::Caution => WalkDuration::Moderate,
        SafetyLevel::Unsafe => WalkDuration::Short,
    }
}

pub fn recommendation_for(level: SafetyLevel, warnings: &WarningSet) -> String {
    match level {
        SafetyLevel::Safe => SAFE_MESSAGE.to_string(),
        SafetyLevel::Caution => {
            if warnings.is_empty() {
                CAUTION_MESSAGE.to_string()
            } else {
                format!(
                    "{CAUTION_MESSAGE} Active warnings: {}.",
                    warnings.display_names().join(", ")
                )
            }
        }
        SafetyLevel::Unsafe => {
            if warnings.contains(WarningType::Heatstroke) || warnings.contains(WarningType::PawBurn)
            {
                TOO_HOT_MESSAGE.to_string()
            } else if warnings.contains(WarningType::Hypothermia) {
                TOO_COLD_MESSAGE.to_string()
            } else {
                UNSAFE_MESSAGE.to_string()
            }
        }
    }
}

/// Rule-of-thumb walking slots for the current conditions, in a fixed
/// morning, evening, mid-day order.
pub fn suggested_times(weather: &WeatherReading) -> Vec<TimeRange> {
    let mut ranges = Vec::new();

    if weather.temperature > WARM_CUTOFF_F || weather.humidity > HUMIDITY_CUTOFF {
        ranges.push(TimeRange::new("6:00 AM", "8:00 AM", "Early Morning"));
    }

    if weather.temperature > EVENING_CUTOFF_F {
        ranges.push(TimeRange::new("7:00 PM", "9:00 PM", "Evening"));
    }

    if weather.temperature < WIND_CHILL_TEMP_F {
        ranges.push(TimeRange::new("12:00 PM", "2:00 PM", "Mid-day"));
    }

    ranges
}
