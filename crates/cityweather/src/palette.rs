use crate::constants::{MAX_TEMP_F, MIN_TEMP_F};
use glam::Vec3;

/// Map a temperature in Fahrenheit to a rainbow gradient color.
///
/// 0 °F is pure blue and 100 °F pure red, passing through cyan, green,
/// yellow and orange. Temperatures outside the range clamp to the
/// endpoints, so the blue channel never increases with temperature.
///
/// Channels are in 0.0..=1.0.
pub fn temperature_to_color(temp_f: f32) -> Vec3 {
    let t = ((temp_f - MIN_TEMP_F) / (MAX_TEMP_F - MIN_TEMP_F)).clamp(0.0, 1.0);

    if t <= 0.2 {
        // Blue to cyan
        let local_t = t / 0.2;
        Vec3::new(0.0, local_t, 1.0)
    } else if t <= 0.4 {
        // Cyan to green
        let local_t = (t - 0.2) / 0.2;
        Vec3::new(0.0, 1.0, 1.0 - local_t)
    } else if t <= 0.6 {
        // Green to yellow
        let local_t = (t - 0.4) / 0.2;
        Vec3::new(local_t, 1.0, 0.0)
    } else if t <= 0.8 {
        // Yellow to orange
        let local_t = (t - 0.6) / 0.2;
        Vec3::new(1.0, 1.0 - 0.5 * local_t, 0.0)
    } else {
        // Orange to red
        let local_t = (t - 0.8) / 0.2;
        Vec3::new(1.0, 0.5 - 0.5 * local_t, 0.0)
    }
}
