/// Temperature range the color gradient spans, in Fahrenheit. Values
/// outside clamp to the endpoints.
pub const MIN_TEMP_F: f32 = 0.0;
pub const MAX_TEMP_F: f32 = 100.0;

/// Continental-US bounding box used to project city coordinates onto the
/// window.
pub const MIN_LATITUDE: f64 = 25.0;
pub const MAX_LATITUDE: f64 = 50.0;
pub const MIN_LONGITUDE: f64 = -125.0;
pub const MAX_LONGITUDE: f64 = -65.0;

pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;

pub const DEFAULT_BALL_RADIUS: f32 = 10.0;
/// Launch speed in pixels per second per mph of wind, and its cap.
pub const DEFAULT_SPEED_SCALE: f32 = 10.0;
pub const DEFAULT_MAX_SPEED: f32 = 400.0;

pub const DEFAULT_BASE_URL: &str = "https://api.weather.gov";
/// The NWS API rejects requests without a User-Agent.
pub const DEFAULT_USER_AGENT: &str =
    concat!("weatherballs/", env!("CARGO_PKG_VERSION"), " (weather visualization demo)");
pub const DEFAULT_MAX_IN_FLIGHT: usize = 8;

pub const CONFIG_FILE: &str = "weatherballs.toml";
