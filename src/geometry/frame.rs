use super::FrameTransform;
use serde::Deserialize;

/// Rigid transform from the world frame into the landmark frame.
///
/// The range sensor is mounted `sensor_offset` ahead of the robot centre along its heading, so the
/// transformed point is the sensor position rather than the robot centre. The landmark frame has
/// its origin at `(origin_x, origin_y)` in world coordinates and its x-axis rotated by
/// `orientation` radians. With every field zero the transform is the identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LandmarkFrame {
    pub origin_x: f64,
    pub origin_y: f64,
    pub orientation: f64,
    pub sensor_offset: f64,
}

impl FrameTransform for LandmarkFrame {
    fn to_landmark_frame(&self, pose_x: f64, pose_y: f64, heading: f64) -> (f64, f64) {
        let (sin_heading, cos_heading) = heading.sin_cos();
        let dx = pose_x + self.sensor_offset * cos_heading - self.origin_x;
        let dy = pose_y + self.sensor_offset * sin_heading - self.origin_y;

        let (sin_o, cos_o) = self.orientation.sin_cos();
        (cos_o * dx + sin_o * dy, -sin_o * dx + cos_o * dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn default_frame_is_identity() {
        let frame = LandmarkFrame::default();
        assert_eq!(frame.to_landmark_frame(0.25, -1.5, 2.0), (0.25, -1.5));
    }

    #[test]
    fn translates_then_rotates_into_landmark_frame() {
        let frame = LandmarkFrame {
            origin_x: 1.0,
            origin_y: 1.0,
            orientation: FRAC_PI_2,
            sensor_offset: 0.0,
        };
        let (x, y) = frame.to_landmark_frame(1.0, 2.0, 0.0);
        assert!((x - 1.0).abs() < 1e-12);
        assert!(y.abs() < 1e-12);
    }

    #[test]
    fn sensor_offset_follows_heading() {
        let frame = LandmarkFrame {
            sensor_offset: 0.1,
            ..LandmarkFrame::default()
        };
        let (x, y) = frame.to_landmark_frame(0.0, 0.0, FRAC_PI_2);
        assert!(x.abs() < 1e-12);
        assert!((y - 0.1).abs() < 1e-12);
    }
}
