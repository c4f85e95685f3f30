use serde::{Deserialize, Serialize};

/// Incident attributes submitted for classification.
///
/// Categorical fields are accepted as free-form strings and matched against
/// the training vocabulary during encoding; values outside the recognized
/// sets degrade silently rather than being rejected (see
/// [`crate::ml::FeatureEncoder`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Incident date, `YYYY-MM-DD`
    pub date: String,

    /// Hour of day; values >= 24 wrap to 0, negative values pass through
    pub hour: i32,

    pub latitude: f64,

    pub longitude: f64,

    /// Location category ("In park", "In public housing", "In station")
    pub place: String,

    /// Victim age; bucketed into brackets during encoding
    pub age: i32,

    /// Victim race, matched against the NYPD reporting categories
    pub race: String,

    /// Victim gender ("Male" / "Female")
    pub gender: String,

    /// NYPD precinct number
    pub precinct: i32,

    /// NYC borough name, matched case-insensitively
    pub borough: String,
}
