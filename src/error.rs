use thiserror::Error;

#[derive(Error, Debug)]
pub enum HiveError {
    #[error("Invalid Coordinate: ({lat}, {lng}) is outside lat [-90, 90] / lng [-180, 180]")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("Invalid Coordinate: '{0}' is not of the form 'lat,lng'")]
    InvalidCoordinateText(String),

    #[error("Invalid Step Count: {steps} (allowed 1..={max})")]
    InvalidStepCount { steps: u32, max: u32 },

    #[error("Invalid Leap Count: {leaps} (allowed 0..={max})")]
    InvalidLeapCount { leaps: u32, max: u32 },

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type HiveResult<T> = Result<T, HiveError>;
