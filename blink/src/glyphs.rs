//! Vector stand-ins for the back and rotate icons.

use blink_views::{Circle, Output, Path, Point, Transform, K};

/// A hollow triangle pointing left.
pub struct Back {
    pub rgba: [u8; 4],
}

impl Path for Back {
    fn draw(&self, x: f32, y: f32, w: f32, h: f32, transform: &Transform, onto: &mut impl Output) {
        let outer = [
            Point::new(x + w, y),
            Point::new(x, y + h / 2.0),
            Point::new(x + w, y + h),
        ];

        let centroid = Point::new(x + w * 2.0 / 3.0, y + h / 2.0);
        let inner = outer.map(|p| centroid + (p - centroid) * 0.45);

        polygon(&outer, self.rgba, transform, onto);
        // reversed so it cuts a hole
        polygon(&[inner[0], inner[2], inner[1]], self.rgba, transform, onto);
    }
}

/// A ring with an arrowhead on top.
pub struct Rotate {
    pub rgba: [u8; 4],
}

impl Path for Rotate {
    fn draw(&self, x: f32, y: f32, w: f32, h: f32, transform: &Transform, onto: &mut impl Output) {
        let centre = Point::new(x + w / 2.0, y + h / 2.0);
        let outer = f32::min(w, h) / 2.0 * 0.8;
        let inner = outer * 0.7;

        let (x, y, r) = (centre.x, centre.y, outer);
        Circle { rgba: self.rgba }.draw(x - r, y - r, 2.0 * r, 2.0 * r, transform, onto);
        hole(centre, inner, self.rgba, transform, onto);

        let top = centre.y - (outer + inner) / 2.0;
        let a = (outer - inner) * 1.2;
        let arrow = [
            Point::new(centre.x - a, top - a),
            Point::new(centre.x + a, top),
            Point::new(centre.x - a, top + a),
        ];

        polygon(&arrow, self.rgba, transform, onto);
    }
}

fn polygon(points: &[Point], rgba: [u8; 4], transform: &Transform, onto: &mut impl Output) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    onto.begin(first.x, first.y, rgba, transform);
    for point in rest {
        onto.line_to(point.x, point.y);
    }
    onto.close();
}

/// A circle wound against [`Circle`], so that it cuts a hole out of one.
///
/// It has to share the sub-path colour and transform of what it cuts; outputs split
/// their nodes whenever either changes.
fn hole(centre: Point, r: f32, rgba: [u8; 4], transform: &Transform, onto: &mut impl Output) {
    let (left, top) = (centre.x - r, centre.y - r);
    let (right, bottom) = (centre.x + r, centre.y + r);
    let k = r * K;

    onto.begin(centre.x, top, rgba, transform);
    onto.cubic_bezier_to(left + k, top, left, top + k, left, centre.y);
    onto.cubic_bezier_to(left, bottom - k, left + k, bottom, centre.x, bottom);
    onto.cubic_bezier_to(right - k, bottom, right, bottom - k, right, centre.y);
    onto.cubic_bezier_to(right, top + k, right - k, top, centre.x, top);
    onto.close();
}
