mod flight_analyzer;

pub use flight_analyzer::{
    AltitudeTrend, FlightAnalyzer, FlightSample, FlightSummary, ForceTrend, OscillationMetrics,
    SpeedTrend, TrendAnalysis,
};
