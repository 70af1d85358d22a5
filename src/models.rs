use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single weather observation or forecast entry, in imperial units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub observed_at: Option<NaiveDateTime>,
}

impl WeatherReading {
    pub fn new(temperature: f64, humidity: f64, wind_speed: f64) -> Self {
        Self {
            temperature,
            humidity,
            wind_speed,
            observed_at: None,
        }
    }

    pub fn at(mut self, observed_at: NaiveDateTime) -> Self {
        self.observed_at = Some(observed_at);
        self
    }

    /// Hour of day (0-23) this reading belongs to, if it carries a time.
    pub fn hour(&self) -> Option<u32> {
        self.observed_at.map(|at| at.hour())
    }

    pub fn formatted_temperature(&self) -> String {
        format_temperature(self.temperature)
    }

    pub fn formatted_humidity(&self) -> String {
        format!("{}%", self.humidity.round() as i64)
    }

    pub fn formatted_wind_speed(&self) -> String {
        format!("{} mph", self.wind_speed.round() as i64)
    }
}

pub fn format_temperature(temperature: f64) -> String {
    format!("{}°F", temperature.round() as i64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyLevel {
    Safe,
    Caution,
    Unsafe,
}

impl SafetyLevel {
    pub fn label(self) -> &'static str {
        match self {
            SafetyLevel::Safe => "Safe",
            SafetyLevel::Caution => "Caution",
            SafetyLevel::Unsafe => "Unsafe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    Heatstroke,
    Dehydration,
    PawBurn,
    Hypothermia,
    WindChill,
}

impl WarningType {
    pub fn display_name(self) -> &'static str {
        match self {
            WarningType::Heatstroke => "Heatstroke Risk",
            WarningType::Dehydration => "Dehydration Risk",
            WarningType::PawBurn => "Paw Burn Risk",
            WarningType::Hypothermia => "Hypothermia Risk",
            WarningType::WindChill => "Wind Chill Risk",
        }
    }
}

/// Insertion-ordered set of warnings. The first insert of a warning wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarningSet(Vec<WarningType>);

impl WarningSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the warning was already present.
    pub fn insert(&mut self, warning: WarningType) -> bool {
        if self.0.contains(&warning) {
            return false;
        }
        self.0.push(warning);
        true
    }

    pub fn contains(&self, warning: WarningType) -> bool {
        self.0.contains(&warning)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = WarningType> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[WarningType] {
        &self.0
    }

    pub fn display_names(&self) -> Vec<&'static str> {
        self.iter().map(WarningType::display_name).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkDuration {
    Short,
    Moderate,
    Recommended,
    Extended,
}

impl WalkDuration {
    pub fn display_name(self) -> &'static str {
        match self {
            WalkDuration::Short => "5-15 minutes",
            WalkDuration::Moderate => "20-30 minutes",
            WalkDuration::Recommended => "30-45 minutes",
            WalkDuration::Extended => "45+ minutes",
        }
    }

    pub fn max_minutes(self) -> u32 {
        match self {
            WalkDuration::Short => 15,
            WalkDuration::Moderate => 30,
            WalkDuration::Recommended => 45,
            WalkDuration::Extended => 120,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
    pub period: String,
}

impl TimeRange {
    pub fn new(start: &str, end: &str, period: &str) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            period: period.to_string(),
        }
    }

    pub fn display_text(&self) -> String {
        format!("{} - {} ({})", self.start, self.end, self.period)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafetyAssessment {
    pub safety_level: SafetyLevel,
    pub active_warnings: WarningSet,
    pub walk_duration: WalkDuration,
    pub recommendation: String,
    pub best_time_recommendations: Vec<TimeRange>,
}

/// One ranked daily walking window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimalWalkTime {
    pub id: Uuid,
    pub time_range: String,
    pub safety_level: SafetyLevel,
    pub temperature: String,
    pub reasoning: String,
    pub uv_index: String,
    pub recommendation: String,
    pub score: f64,
}
