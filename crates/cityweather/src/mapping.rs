use crate::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use glam::Vec2;

/// Wind speed in mph to a launch speed in pixels per second. Proportional
/// up to `cap`; negative inputs (which the weather service should never
/// produce) count as calm.
pub fn wind_to_speed(wind_speed_mph: f32, scale: f32, cap: f32) -> f32 {
    (wind_speed_mph.max(0.0) * scale).min(cap)
}

/// Project a latitude/longitude onto window coordinates, origin top-left.
/// The projection spans the continental-US bounding box; coordinates
/// outside it clamp to the window edge.
pub fn geo_to_screen(latitude: f64, longitude: f64, width: f32, height: f32) -> Vec2 {
    let u = ((longitude - MIN_LONGITUDE) / (MAX_LONGITUDE - MIN_LONGITUDE)).clamp(0.0, 1.0);
    let v = (1.0 - (latitude - MIN_LATITUDE) / (MAX_LATITUDE - MIN_LATITUDE)).clamp(0.0, 1.0);
    Vec2::new(u as f32 * width, v as f32 * height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(5.0, 50.0)]
    #[case(20.0, 200.0)]
    #[case(-3.0, 0.0)]
    fn test_wind_to_speed_is_proportional(#[case] wind_mph: f32, #[case] expected: f32) {
        assert_eq!(wind_to_speed(wind_mph, 10.0, 400.0), expected);
    }

    #[test]
    fn test_wind_to_speed_caps_out() {
        assert_eq!(wind_to_speed(80.0, 10.0, 400.0), 400.0);
    }

    #[test]
    fn test_wind_to_speed_is_monotonic() {
        let mut previous = -1.0;
        for wind in 0..60 {
            let speed = wind_to_speed(wind as f32, 10.0, 400.0);
            assert!(speed >= previous);
            previous = speed;
        }
    }

    #[test]
    fn test_geo_to_screen_corners() {
        // North-west corner of the box lands at the window origin.
        assert_eq!(
            geo_to_screen(MAX_LATITUDE, MIN_LONGITUDE, 800.0, 600.0),
            Vec2::new(0.0, 0.0)
        );
        // South-east corner lands at the opposite corner.
        assert_eq!(
            geo_to_screen(MIN_LATITUDE, MAX_LONGITUDE, 800.0, 600.0),
            Vec2::new(800.0, 600.0)
        );
    }

    #[test]
    fn test_geo_to_screen_clamps_out_of_box_points() {
        let anchorage = geo_to_screen(61.2, -149.9, 800.0, 600.0);
        assert_eq!(anchorage, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_known_city_lands_inside_the_window() {
        let denver = geo_to_screen(39.74, -104.99, 800.0, 600.0);
        assert!(denver.x > 0.0 && denver.x < 800.0);
        assert!(denver.y > 0.0 && denver.y < 600.0);
    }
}
