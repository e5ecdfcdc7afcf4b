/// Weather observed for one city. Created once per city by the fetch stage
/// and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature_f: f32,
    pub wind_speed_mph: f32,
}
