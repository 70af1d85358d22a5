use std::ops::RangeInclusive;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::{SafetyLevel, WeatherReading};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Breed {
    LabradorRetriever,
    GoldenRetriever,
    Bulldog,
    Husky,
    GermanShepherd,
    Chihuahua,
    Poodle,
    Beagle,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CoatType {
    Short,
    Medium,
    Long,
    Double,
    Mixed,
}

impl CoatType {
    pub fn display_name(self) -> &'static str {
        match self {
            CoatType::Short => "Short",
            CoatType::Medium => "Medium",
            CoatType::Long => "Long",
            CoatType::Double => "Double",
            CoatType::Mixed => "Mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
    ExtraLarge,
    Varies,
}

impl SizeCategory {
    pub fn display_name(self) -> &'static str {
        match self {
            SizeCategory::Small => "Small",
            SizeCategory::Medium => "Medium",
            SizeCategory::Large => "Large",
            SizeCategory::ExtraLarge => "XL",
            SizeCategory::Varies => "Varies",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeatSensitivity {
    Low,
    Moderate,
    High,
    Extreme,
}

impl HeatSensitivity {
    pub fn display_name(self) -> &'static str {
        match self {
            HeatSensitivity::Low => "Low",
            HeatSensitivity::Moderate => "Moderate",
            HeatSensitivity::High => "High",
            HeatSensitivity::Extreme => "Extreme",
        }
    }
}

/// Walking thresholds for one breed. Temperatures in °F, humidity in
/// percent, wind in mph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreedProfile {
    pub name: &'static str,
    pub safe_temperature_range: RangeInclusive<f64>,
    pub caution_temperature_range: RangeInclusive<f64>,
    /// Additional temperature bands that count as caution when outside
    /// both primary ranges. Only the mixed breed has any.
    pub extra_caution_bands: &'static [RangeInclusive<f64>],
    pub max_humidity: f64,
    pub max_wind_speed: f64,
    pub coat_type: CoatType,
    pub size_category: SizeCategory,
    pub heat_sensitivity: HeatSensitivity,
}

impl BreedProfile {
    pub fn assess(&self, temperature: f64, humidity: f64, wind_speed: f64) -> SafetyLevel {
        if self.safe_temperature_range.contains(&temperature) {
            if humidity > self.max_humidity || wind_speed > self.max_wind_speed {
                return SafetyLevel::Caution;
            }
            return SafetyLevel::Safe;
        }

        if self.caution_temperature_range.contains(&temperature)
            || self
                .extra_caution_bands
                .iter()
                .any(|band| band.contains(&temperature))
        {
            return SafetyLevel::Caution;
        }

        SafetyLevel::Unsafe
    }

    pub fn assess_reading(&self, reading: &WeatherReading) -> SafetyLevel {
        self.assess(reading.temperature, reading.humidity, reading.wind_speed)
    }

    /// One-line verdict for a reading, without warning detail.
    pub fn quick_recommendation(&self, reading: &WeatherReading) -> &'static str {
        match self.assess_reading(reading) {
            SafetyLevel::Safe => "Perfect for walks!",
            SafetyLevel::Caution => "Use caution - check breed-specific recommendations",
            SafetyLevel::Unsafe => {
                if reading.temperature > *self.safe_temperature_range.end() {
                    "Too hot for walks! Risk of paw burns and overheating."
                } else {
                    "Too cold for most dogs! Keep walks very short."
                }
            }
        }
    }

    pub fn is_heat_sensitive(&self) -> bool {
        matches!(
            self.heat_sensitivity,
            HeatSensitivity::High | HeatSensitivity::Extreme
        )
    }
}

static LABRADOR_RETRIEVER: BreedProfile = BreedProfile {
    name: "Labrador Retriever",
    safe_temperature_range: 60.0..=80.0,
    caution_temperature_range: 81.0..=90.0,
    extra_caution_bands: &[],
    max_humidity: 70.0,
    max_wind_speed: 20.0,
    coat_type: CoatType::Short,
    size_category: SizeCategory::Large,
    heat_sensitivity: HeatSensitivity::Moderate,
};

static GOLDEN_RETRIEVER: BreedProfile = BreedProfile {
    name: "Golden Retriever",
    safe_temperature_range: 60.0..=80.0,
    caution_temperature_range: 81.0..=90.0,
    extra_caution_bands: &[],
    max_humidity: 70.0,
    max_wind_speed: 20.0,
    coat_type: CoatType::Long,
    size_category: SizeCategory::Large,
    heat_sensitivity: HeatSensitivity::Moderate,
};

static BULLDOG: BreedProfile = BreedProfile {
    name: "Bulldog",
    safe_temperature_range: 60.0..=75.0,
    caution_temperature_range: 76.0..=85.0,
    extra_caution_bands: &[],
    max_humidity: 60.0,
    max_wind_speed: 15.0,
    coat_type: CoatType::Short,
    size_category: SizeCategory::Medium,
    heat_sensitivity: HeatSensitivity::High,
};

static HUSKY: BreedProfile = BreedProfile {
    name: "Husky",
    safe_temperature_range: 20.0..=75.0,
    caution_temperature_range: 76.0..=85.0,
    extra_caution_bands: &[],
    max_humidity: 50.0,
    max_wind_speed: 25.0,
    coat_type: CoatType::Double,
    size_category: SizeCategory::Large,
    heat_sensitivity: HeatSensitivity::High,
};

static GERMAN_SHEPHERD: BreedProfile = BreedProfile {
    name: "German Shepherd",
    safe_temperature_range: 55.0..=80.0,
    caution_temperature_range: 81.0..=90.0,
    extra_caution_bands: &[],
    max_humidity: 65.0,
    max_wind_speed: 20.0,
    coat_type: CoatType::Double,
    size_category: SizeCategory::Large,
    heat_sensitivity: HeatSensitivity::Moderate,
};

static CHIHUAHUA: BreedProfile = BreedProfile {
    name: "Chihuahua",
    safe_temperature_range: 50.0..=80.0,
    caution_temperature_range: 81.0..=85.0,
    extra_caution_bands: &[],
    max_humidity: 70.0,
    max_wind_speed: 15.0,
    coat_type: CoatType::Short,
    size_category: SizeCategory::Small,
    heat_sensitivity: HeatSensitivity::Moderate,
};

static POODLE: BreedProfile = BreedProfile {
    name: "Poodle",
    safe_temperature_range: 60.0..=80.0,
    caution_temperature_range: 81.0..=90.0,
    extra_caution_bands: &[],
    max_humidity: 70.0,
    max_wind_speed: 20.0,
    coat_type: CoatType::Long,
    size_category: SizeCategory::Medium,
    heat_sensitivity: HeatSensitivity::Moderate,
};

static BEAGLE: BreedProfile = BreedProfile {
    name: "Beagle",
    safe_temperature_range: 60.0..=80.0,
    caution_temperature_range: 81.0..=90.0,
    extra_caution_bands: &[],
    max_humidity: 70.0,
    max_wind_speed: 20.0,
    coat_type: CoatType::Short,
    size_category: SizeCategory::Medium,
    heat_sensitivity: HeatSensitivity::Moderate,
};

static MIXED: BreedProfile = BreedProfile {
    name: "Mixed Breed",
    safe_temperature_range: 65.0..=78.0,
    caution_temperature_range: 55.0..=64.0,
    extra_caution_bands: &[79.0..=85.0],
    max_humidity: 65.0,
    max_wind_speed: 18.0,
    coat_type: CoatType::Mixed,
    size_category: SizeCategory::Varies,
    heat_sensitivity: HeatSensitivity::Moderate,
};

impl Breed {
    pub const ALL: [Breed; 9] = [
        Breed::LabradorRetriever,
        Breed::GoldenRetriever,
        Breed::Bulldog,
        Breed::Husky,
        Breed::GermanShepherd,
        Breed::Chihuahua,
        Breed::Poodle,
        Breed::Beagle,
        Breed::Mixed,
    ];

    pub fn profile(self) -> &'static BreedProfile {
        match self {
            Breed::LabradorRetriever => &LABRADOR_RETRIEVER,
            Breed::GoldenRetriever => &GOLDEN_RETRIEVER,
            Breed::Bulldog => &BULLDOG,
            Breed::Husky => &HUSKY,
            Breed::GermanShepherd => &GERMAN_SHEPHERD,
            Breed::Chihuahua => &CHIHUAHUA,
            Breed::Poodle => &POODLE,
            Breed::Beagle => &BEAGLE,
            Breed::Mixed => &MIXED,
        }
    }

    pub fn name(self) -> &'static str {
        self.profile().name
    }
}
