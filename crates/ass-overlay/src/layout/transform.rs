//! Rotation/skew origin resolution

use super::BoxMetrics;
use ass_script::Event;

/// Resolve the transform origin for an event box, relative to the box
/// top-left.
///
/// Defaults to the alignment anchor point on the box; an `\org` override
/// moves it to the scaled override point. Expressing the origin relative
/// to the box keeps rotation anchored correctly when the box size changes.
#[must_use]
pub fn transform_origin(
    event: &Event,
    box_pos: (f32, f32),
    metrics: BoxMetrics,
    scale: f32,
) -> (f32, f32) {
    let (x, y) = box_pos;
    let w = metrics.width;
    let h = metrics.height;
    let org_x = event.org.map_or(x, |org| org.x * scale) + [0.0, w / 2.0, w][event.alignment.h];
    let org_y = event.org.map_or(y, |org| org.y * scale) + [h, h / 2.0, 0.0][event.alignment.v];
    (org_x - x, org_y - y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ass_script::{Alignment, Point};

    fn metrics() -> BoxMetrics {
        BoxMetrics {
            width: 120.0,
            height: 60.0,
        }
    }

    #[test]
    fn default_origin_is_the_alignment_anchor() {
        let mut event = Event::dialogue(0.0, 1.0, "Default");
        event.alignment = Alignment::from_code(2); // bottom-center
        let origin = transform_origin(&event, (400.0, 300.0), metrics(), 2.0);
        assert_eq!(origin, (60.0, 60.0));

        event.alignment = Alignment::from_code(7); // top-left
        assert_eq!(
            transform_origin(&event, (400.0, 300.0), metrics(), 2.0),
            (0.0, 0.0)
        );
    }

    #[test]
    fn org_override_is_scaled_and_box_relative() {
        let mut event = Event::dialogue(0.0, 1.0, "Default");
        event.alignment = Alignment::from_code(7);
        event.org = Some(Point::new(100.0, 50.0));
        // scaled org (200, 100) against a box at (150, 80)
        let origin = transform_origin(&event, (150.0, 80.0), metrics(), 2.0);
        assert_eq!(origin, (50.0, 20.0));
    }
}
