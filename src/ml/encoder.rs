use crate::models::PredictionRequest;
use chrono::{Datelike, Local, NaiveDate};
use ndarray::Array1;

/// Column order of the training schema. The model was fit against exactly
/// this layout; any reordering or omission silently corrupts predictions
/// without raising an error, so all encoding below goes through this table's
/// order.
pub const FEATURE_COLUMNS: [&str; 35] = [
    "year",
    "month",
    "day",
    "hour",
    "latitude",
    "longitude",
    "completed",
    "precinct",
    "in_park",
    "in_public_housing",
    "in_station",
    "borough_bronx",
    "borough_brooklyn",
    "borough_manhattan",
    "borough_queens",
    "borough_staten_island",
    "borough_unknown",
    "age_18_24",
    "age_25_44",
    "age_45_64",
    "age_65_plus",
    "age_under_18",
    "age_unknown",
    "race_american_indian_alaskan_native",
    "race_asian_pacific_islander",
    "race_black",
    "race_black_hispanic",
    "race_other",
    "race_unknown",
    "race_white",
    "race_white_hispanic",
    "sex_d",
    "sex_f",
    "sex_m",
    "sex_u",
];

/// Borough names recognized for one-hot encoding (input is uppercased first).
const BOROUGHS: [&str; 5] = ["BRONX", "BROOKLYN", "MANHATTAN", "QUEENS", "STATEN ISLAND"];

/// Race categories recognized for one-hot encoding, in schema column order.
/// Matching is exact and case-sensitive, as in the source data.
const RACES: [&str; 8] = [
    "AMERICAN INDIAN/ALASKAN NATIVE",
    "ASIAN / PACIFIC ISLANDER",
    "BLACK",
    "BLACK HISPANIC",
    "OTHER",
    "UNKNOWN",
    "WHITE",
    "WHITE HISPANIC",
];

/// Feature encoder for prediction requests.
///
/// Pure and deterministic given a fallback date: the same request always
/// yields the same vector. Unrecognized categorical values never fail;
/// they degrade to all-zero one-hot blocks. Two quirks are intentionally
/// preserved for parity with the trained model:
///
/// - An unparseable date silently becomes the current date rather than an
///   error.
/// - The race block has no catch-all column (`race_unknown` is only set by a
///   literal `"UNKNOWN"` input), so unmatched race strings leave the whole
///   block at zero, unlike borough which always sets one of its six flags.
///
/// The `age_unknown`, `sex_d`, and `sex_u` columns are permanently-zero
/// placeholders that exist only to match the training schema width.
#[derive(Debug, Clone, Default)]
pub struct FeatureEncoder;

impl FeatureEncoder {
    /// Create a new feature encoder
    pub fn new() -> Self {
        Self
    }

    /// Encode a request, substituting today's date when `date` fails to
    /// parse.
    pub fn encode(&self, request: &PredictionRequest) -> Array1<f64> {
        self.encode_with_fallback(request, Local::now().date_naive())
    }

    /// Encode a request with an explicit fallback date for unparseable
    /// `date` values. This is the deterministic entry point used by tests.
    pub fn encode_with_fallback(
        &self,
        request: &PredictionRequest,
        fallback_date: NaiveDate,
    ) -> Array1<f64> {
        let date = NaiveDate::parse_from_str(&request.date, "%Y-%m-%d").unwrap_or(fallback_date);

        // Hours wrap to 0 at 24; negative values pass through unchanged.
        let hour = if request.hour >= 24 { 0 } else { request.hour };

        let borough = request.borough.to_uppercase();
        let age = request.age;

        let features = vec![
            f64::from(date.year()),
            f64::from(date.month()),
            f64::from(date.day()),
            f64::from(hour),
            request.latitude,
            request.longitude,
            // Constant COMPLETED flag from the training data
            1.0,
            f64::from(request.precinct),
            flag(request.place == "In park"),
            flag(request.place == "In public housing"),
            flag(request.place == "In station"),
            flag(borough == BOROUGHS[0]),
            flag(borough == BOROUGHS[1]),
            flag(borough == BOROUGHS[2]),
            flag(borough == BOROUGHS[3]),
            flag(borough == BOROUGHS[4]),
            flag(!BOROUGHS.contains(&borough.as_str())),
            flag((18..=24).contains(&age)),
            flag((25..=44).contains(&age)),
            flag((45..=64).contains(&age)),
            flag(age >= 65),
            flag(age < 18),
            // age_unknown: schema placeholder, never set
            0.0,
            flag(request.race == RACES[0]),
            flag(request.race == RACES[1]),
            flag(request.race == RACES[2]),
            flag(request.race == RACES[3]),
            flag(request.race == RACES[4]),
            flag(request.race == RACES[5]),
            flag(request.race == RACES[6]),
            flag(request.race == RACES[7]),
            // sex_d: schema placeholder, never set
            0.0,
            flag(request.gender == "Female"),
            flag(request.gender == "Male"),
            // sex_u: schema placeholder, never set
            0.0,
        ];

        debug_assert_eq!(features.len(), FEATURE_COLUMNS.len());

        Array1::from(features)
    }
}

fn flag(condition: bool) -> f64 {
    if condition {
        1.0
    } else {
        0.0
    }
}
