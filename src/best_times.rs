use chrono::NaiveTime;
use tracing::debug;
use uuid::Uuid;

use crate::breed::BreedProfile;
use crate::config::BestTimesConfig;
use crate::models::{format_temperature, OptimalWalkTime, SafetyLevel, WeatherReading};

/// A daily walking window in whole hours, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: u32,
    pub end: u32,
}

impl TimeWindow {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains_hour(&self, hour: u32) -> bool {
        hour >= self.start && hour < self.end
    }

    pub fn label(&self) -> String {
        format!("{} - {}", format_hour(self.start), format_hour(self.end))
    }
}

pub const DAILY_WINDOWS: [TimeWindow; 4] = [
    TimeWindow::new(6, 9),
    TimeWindow::new(9, 12),
    TimeWindow::new(15, 18),
    TimeWindow::new(18, 21),
];

pub const FALLBACK_SCORE: f64 = 0.7;
pub const FALLBACK_TEMPERATURE: &str = "70°F";

/// Ranks the daily windows for a breed, best first, keeping at most
/// `config.max_time_windows` of them.
pub fn calculate_best_times(
    breed: &BreedProfile,
    current_weather: Option<&WeatherReading>,
    hourly_forecast: Option<&[WeatherReading]>,
    config: &BestTimesConfig,
) -> Vec<OptimalWalkTime> {
    debug!(
        breed = breed.name,
        forecast_entries = hourly_forecast.map_or(0, <[WeatherReading]>::len),
        has_current = current_weather.is_some(),
        uv_weight = config.uv_weight,
        "ranking daily walking windows"
    );

    let mut times: Vec<OptimalWalkTime> = DAILY_WINDOWS
        .iter()
        .map(|window| {
            match reading_for_window(window, current_weather, hourly_forecast) {
                Some(reading) => scored_time(breed, window, reading, config),
                None => fallback_time(breed, window),
            }
        })
        .collect();

    times.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    times.truncate(config.max_time_windows);
    times
}

/// First forecast entry whose hour lands in the window, else the current
/// reading.
pub fn reading_for_window<'a>(
    window: &TimeWindow,
    current_weather: Option<&'a WeatherReading>,
    hourly_forecast: Option<&'a [WeatherReading]>,
) -> Option<&'a WeatherReading> {
    hourly_forecast
        .and_then(|forecast| {
            forecast
                .iter()
                .find(|reading| reading.hour().is_some_and(|hour| window.contains_hour(hour)))
        })
        .or(current_weather)
}

pub fn score(breed: &BreedProfile, reading: &WeatherReading, config: &BestTimesConfig) -> f64 {
    let temp_score = if breed.safe_temperature_range.contains(&reading.temperature) {
        1.0
    } else if breed.caution_temperature_range.contains(&reading.temperature) {
        0.6
    } else {
        0.2
    };
    let humidity_score = if reading.humidity <= breed.max_humidity {
        1.0
    } else {
        0.5
    };
    let wind_score = if reading.wind_speed <= breed.max_wind_speed {
        1.0
    } else {
        0.5
    };

    let weighted = temp_score * config.temperature_weight
        + humidity_score * config.humidity_weight
        + wind_score * config.wind_weight;
    weighted.clamp(0.0, 1.0)
}

/// Maps a window score to a level. Independent of `BreedProfile::assess`,
/// so the two can disagree for the same reading.
pub fn level_for_score(score: f64) -> SafetyLevel {
    if (0.8..=1.0).contains(&score) {
        SafetyLevel::Safe
    } else if (0.5..0.8).contains(&score) {
        SafetyLevel::Caution
    } else {
        SafetyLevel::Unsafe
    }
}

fn scored_time(
    breed: &BreedProfile,
    window: &TimeWindow,
    reading: &WeatherReading,
    config: &BestTimesConfig,
) -> OptimalWalkTime {
    let score = score(breed, reading, config);
    let safety_level = level_for_score(score);

    debug!(
        breed = breed.name,
        start = window.start,
        end = window.end,
        score,
        "scored walking window"
    );

    OptimalWalkTime {
        id: window_id(breed, window),
        time_range: window.label(),
        safety_level,
        temperature: format_temperature(reading.temperature),
        reasoning: reasoning(breed, reading.temperature),
        uv_index: uv_label(window).to_string(),
        recommendation: recommendation(breed, safety_level),
        score,
    }
}

fn fallback_time(breed: &BreedProfile, window: &TimeWindow) -> OptimalWalkTime {
    debug!(
        breed = breed.name,
        start = window.start,
        end = window.end,
        "no weather for window, using typical conditions"
    );

    OptimalWalkTime {
        id: window_id(breed, window),
        time_range: window.label(),
        safety_level: SafetyLevel::Caution,
        temperature: FALLBACK_TEMPERATURE.to_string(),
        reasoning: format!("Typical conditions for {}", breed.name),
        uv_index: "Low UV".to_string(),
        recommendation: format!("Standard walking time for {}", breed.name),
        score: FALLBACK_SCORE,
    }
}

fn window_id(breed: &BreedProfile, window: &TimeWindow) -> Uuid {
    let key = format!("{}:{}-{}", breed.name, window.start, window.end);
    Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes())
}

pub fn format_hour(hour: u32) -> String {
    NaiveTime::from_hms_opt(hour % 24, 0, 0)
        .map(|time| time.format("%-I:%M %p").to_string())
        .unwrap_or_else(|| format!("{hour}:00"))
}

fn reasoning(breed: &BreedProfile, temperature: f64) -> String {
    let name = breed.name;
    let temp = temperature.round() as i64;

    if (70.0..=80.0).contains(&temperature) {
        format!("Perfect {temp}°F conditions for {name}")
    } else if (60.0..70.0).contains(&temperature) {
        format!("Good {temp}°F weather for {name} walks")
    } else if (50.0..60.0).contains(&temperature) {
        format!("Cool {temp}°F - suitable for {name} with proper gear")
    } else if temperature > 80.0 {
        format!("Warm {temp}°F - keep walks short for {name}")
    } else {
        format!("Cold {temp}°F - limit outdoor time for {name}")
    }
}

// Coarse guess from the clock alone; afternoon windows are never rated high.
fn uv_label(window: &TimeWindow) -> &'static str {
    if window.start >= 6 && window.end <= 10 {
        "Low UV"
    } else if window.start >= 10 && window.end <= 16 {
        "Moderate UV"
    } else {
        "Low UV"
    }
}

fn recommendation(breed: &BreedProfile, level: SafetyLevel) -> String {
    match level {
        SafetyLevel::Safe => format!("Ideal for longer walks with {}", breed.name),
        SafetyLevel::Caution => format!("Moderate walks recommended for {}", breed.name),
        SafetyLevel::Unsafe => format!("Short walks only for {}", breed.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breed::Breed;
    use chrono::NaiveDate;

    fn at_hour(reading: WeatherReading, hour: u32) -> WeatherReading {
        let at = NaiveDate::from_ymd_opt(2026, 10, 16)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .unwrap();
        reading.at(at)
    }

    #[test]
    fn hours_render_on_a_twelve_hour_clock() {
        assert_eq!(format_hour(6), "6:00 AM");
        assert_eq!(format_hour(12), "12:00 PM");
        assert_eq!(format_hour(21), "9:00 PM");
        assert_eq!(TimeWindow::new(15, 18).label(), "3:00 PM - 6:00 PM");
    }

    #[test]
    fn no_weather_falls_back_for_every_window() {
        let config = BestTimesConfig::default();
        let times = calculate_best_times(Breed::Beagle.profile(), None, None, &config);

        assert_eq!(times.len(), 4);
        for time in &times {
            assert_eq!(time.score, FALLBACK_SCORE);
            assert_eq!(time.safety_level, SafetyLevel::Caution);
            assert_eq!(time.temperature, "70°F");
            assert_eq!(time.reasoning, "Typical conditions for Beagle");
            assert_eq!(time.recommendation, "Standard walking time for Beagle");
            assert_eq!(time.uv_index, "Low UV");
        }
        let ranges: Vec<&str> = times.iter().map(|t| t.time_range.as_str()).collect();
        assert_eq!(
            ranges,
            vec![
                "6:00 AM - 9:00 AM",
                "9:00 AM - 12:00 PM",
                "3:00 PM - 6:00 PM",
                "6:00 PM - 9:00 PM"
            ]
        );
    }

    #[test]
    fn empty_forecast_without_current_also_falls_back() {
        let config = BestTimesConfig::default();
        let times = calculate_best_times(Breed::Poodle.profile(), None, Some(&[][..]), &config);
        assert!(times.iter().all(|t| t.score == FALLBACK_SCORE));
    }

    #[test]
    fn current_weather_fills_every_window() {
        let config = BestTimesConfig::default();
        let current = WeatherReading::new(72.0, 50.0, 10.0);
        let times =
            calculate_best_times(Breed::LabradorRetriever.profile(), Some(&current), None, &config);

        assert_eq!(times.len(), 4);
        for time in &times {
            assert!((time.score - 0.8).abs() < 1e-9);
            assert_eq!(time.safety_level, SafetyLevel::Safe);
            assert_eq!(time.temperature, "72°F");
            assert_eq!(time.reasoning, "Perfect 72°F conditions for Labrador Retriever");
            assert_eq!(
                time.recommendation,
                "Ideal for longer walks with Labrador Retriever"
            );
        }
    }

    #[test]
    fn forecast_entries_are_matched_by_hour_and_ranked() {
        let config = BestTimesConfig::default();
        let profile = Breed::Bulldog.profile();
        let current = WeatherReading::new(88.0, 70.0, 20.0);
        let forecast = vec![
            at_hour(WeatherReading::new(68.0, 50.0, 5.0), 7),
            at_hour(WeatherReading::new(66.0, 55.0, 5.0), 8),
            at_hour(WeatherReading::new(80.0, 55.0, 5.0), 10),
            at_hour(WeatherReading::new(90.0, 40.0, 5.0), 16),
        ];

        let times = calculate_best_times(
            profile,
            Some(&current),
            Some(forecast.as_slice()),
            &config,
        );
        let ranges: Vec<&str> = times.iter().map(|t| t.time_range.as_str()).collect();
        assert_eq!(
            ranges,
            vec![
                "6:00 AM - 9:00 AM",
                "9:00 AM - 12:00 PM",
                "3:00 PM - 6:00 PM",
                "6:00 PM - 9:00 PM"
            ]
        );

        // 7 AM entry, not the 8 AM one.
        assert_eq!(times[0].temperature, "68°F");
        assert_eq!(times[0].safety_level, SafetyLevel::Safe);
        assert!((times[1].score - 0.64).abs() < 1e-9);
        assert!((times[2].score - 0.48).abs() < 1e-9);
        // Evening has no forecast entry and uses the current reading.
        assert_eq!(times[3].temperature, "88°F");
        assert!((times[3].score - 0.28).abs() < 1e-9);
        assert_eq!(times[3].safety_level, SafetyLevel::Unsafe);
        assert_eq!(times[3].recommendation, "Short walks only for Bulldog");
    }

    #[test]
    fn later_window_with_better_weather_ranks_first() {
        let profile = Breed::Beagle.profile();
        let forecast = vec![
            at_hour(WeatherReading::new(95.0, 50.0, 5.0), 7),
            at_hour(WeatherReading::new(70.0, 50.0, 5.0), 19),
        ];

        let times = calculate_best_times(
            profile,
            None,
            Some(forecast.as_slice()),
            &BestTimesConfig::default(),
        );
        let ranges: Vec<&str> = times.iter().map(|t| t.time_range.as_str()).collect();
        assert_eq!(
            ranges,
            vec![
                "6:00 PM - 9:00 PM",
                "9:00 AM - 12:00 PM",
                "3:00 PM - 6:00 PM",
                "6:00 AM - 9:00 AM"
            ]
        );
        assert_eq!(times[0].temperature, "70°F");
        assert_eq!(times[3].temperature, "95°F");

        let config = BestTimesConfig::default().with_max_time_windows(Some(1));
        let top = calculate_best_times(profile, None, Some(forecast.as_slice()), &config);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].time_range, "6:00 PM - 9:00 PM");
        assert_eq!(top[0].safety_level, SafetyLevel::Safe);
    }

    #[test]
    fn forecast_readings_without_time_never_match() {
        let window = DAILY_WINDOWS[0];
        let forecast = vec![WeatherReading::new(60.0, 40.0, 5.0)];
        assert!(reading_for_window(&window, None, Some(forecast.as_slice())).is_none());
    }

    #[test]
    fn ties_keep_window_order_and_truncate() {
        let config = BestTimesConfig::default().with_max_time_windows(Some(2));
        let current = WeatherReading::new(72.0, 50.0, 10.0);
        let times = calculate_best_times(Breed::Beagle.profile(), Some(&current), None, &config);
        assert_eq!(times.len(), 2);
        assert_eq!(times[0].time_range, "6:00 AM - 9:00 AM");
        assert_eq!(times[1].time_range, "9:00 AM - 12:00 PM");
    }

    #[test]
    fn score_stays_in_unit_interval_and_sorted() {
        let config = BestTimesConfig::default();
        for breed in Breed::ALL {
            for temperature in [-20.0, 0.0, 45.0, 62.0, 77.0, 84.0, 99.0, 130.0] {
                for humidity in [0.0, 55.0, 100.0] {
                    for wind in [0.0, 18.0, 60.0] {
                        let reading = WeatherReading::new(temperature, humidity, wind);
                        let value = score(breed.profile(), &reading, &config);
                        assert!((0.0..=1.0).contains(&value));

                        let times =
                            calculate_best_times(breed.profile(), Some(&reading), None, &config);
                        assert!(times.len() <= config.max_time_windows);
                        assert!(times.windows(2).all(|pair| pair[0].score >= pair[1].score));
                    }
                }
            }
        }
    }

    #[test]
    fn oversized_weights_are_clamped() {
        let config = BestTimesConfig {
            temperature_weight: 2.0,
            ..BestTimesConfig::default()
        };
        let reading = WeatherReading::new(70.0, 40.0, 5.0);
        assert_eq!(score(Breed::Poodle.profile(), &reading, &config), 1.0);
    }

    #[test]
    fn score_levels_and_reasoning_bands() {
        assert_eq!(level_for_score(1.0), SafetyLevel::Safe);
        assert_eq!(level_for_score(0.8), SafetyLevel::Safe);
        assert_eq!(level_for_score(0.7), SafetyLevel::Caution);
        assert_eq!(level_for_score(0.5), SafetyLevel::Caution);
        assert_eq!(level_for_score(0.48), SafetyLevel::Unsafe);

        let profile = Breed::Husky.profile();
        assert_eq!(reasoning(profile, 65.0), "Good 65°F weather for Husky walks");
        assert_eq!(
            reasoning(profile, 55.0),
            "Cool 55°F - suitable for Husky with proper gear"
        );
        assert_eq!(reasoning(profile, 85.0), "Warm 85°F - keep walks short for Husky");
        assert_eq!(reasoning(profile, 30.0), "Cold 30°F - limit outdoor time for Husky");
    }

    #[test]
    fn uv_label_is_low_outside_midday() {
        for window in DAILY_WINDOWS {
            assert_eq!(uv_label(&window), "Low UV");
        }
        assert_eq!(uv_label(&TimeWindow::new(10, 14)), "Moderate UV");
    }

    #[test]
    fn concurrent_callers_agree() {
        let config = BestTimesConfig::default();
        let current = WeatherReading::new(77.0, 66.0, 9.0);
        let profile = Breed::Chihuahua.profile();
        let expected = calculate_best_times(profile, Some(&current), None, &config);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| calculate_best_times(profile, Some(&current), None, &config))
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn identical_inputs_give_identical_rankings() {
        let config = BestTimesConfig::default();
        let current = WeatherReading::new(83.0, 75.0, 22.0);
        let profile = Breed::GoldenRetriever.profile();
        assert_eq!(
            calculate_best_times(profile, Some(&current), None, &config),
            calculate_best_times(profile, Some(&current), None, &config)
        );
    }
}
