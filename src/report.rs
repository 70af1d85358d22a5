use std::fmt::Write;

use crate::breed::BreedProfile;
use crate::models::{OptimalWalkTime, SafetyAssessment, WeatherReading};

pub fn build_report(
    breed: &BreedProfile,
    current: &WeatherReading,
    assessment: &SafetyAssessment,
    best_times: &[OptimalWalkTime],
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Walk Safety Report");
    let _ = writeln!(
        output,
        "Generated for {} ({} coat, {} size, {} heat sensitivity)",
        breed.name,
        breed.coat_type.display_name(),
        breed.size_category.display_name(),
        breed.heat_sensitivity.display_name()
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Current Conditions");
    let _ = writeln!(
        output,
        "- {}, {} humidity, wind {}",
        current.formatted_temperature(),
        current.formatted_humidity(),
        current.formatted_wind_speed()
    );
    let _ = writeln!(output, "- Safety: {}", assessment.safety_level.label());
    let _ = writeln!(
        output,
        "- Walk length: {}",
        assessment.walk_duration.display_name()
    );
    let _ = writeln!(output, "- {}", assessment.recommendation);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Active Warnings");

    if assessment.active_warnings.is_empty() {
        let _ = writeln!(output, "No active warnings.");
    } else {
        for warning in assessment.active_warnings.iter() {
            let _ = writeln!(output, "- {}", warning.display_name());
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Suggested Times");

    if assessment.best_time_recommendations.is_empty() {
        let _ = writeln!(output, "No special timing needed.");
    } else {
        for range in assessment.best_time_recommendations.iter() {
            let _ = writeln!(output, "- {}", range.display_text());
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Today's Best Times");

    if best_times.is_empty() {
        let _ = writeln!(output, "No walking windows available.");
    } else {
        for time in best_times {
            let _ = writeln!(
                output,
                "- {} ({}, {}, {}) score {:.2}: {}. {}",
                time.time_range,
                time.safety_level.label(),
                time.temperature,
                time.uv_index,
                time.score,
                time.reasoning,
                time.recommendation
            );
        }
    }

    output
}
