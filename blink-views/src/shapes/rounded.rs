use crate::{Output, Transform};

/// Emits a rectangle whose corners are cubic arcs of radii `rx`, `ry`.
///
/// `k` places the control points: `K` gives circular corners, `0.0` gives square ones.
#[allow(clippy::too_many_arguments)]
#[inline(never)]
pub(super) fn rectangle(
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    rx: f32,
    ry: f32,
    k: f32,
    rgba: [u8; 4],
    transform: &Transform,
    onto: &mut impl Output,
) {
    let rx = rx.clamp(0.0, f32::max(w / 2.0, 0.0));
    let ry = ry.clamp(0.0, f32::max(h / 2.0, 0.0));
    let corners = rx > 0.0 && ry > 0.0;

    let (left, top, right, bottom) = (x, y, x + w, y + h);

    onto.begin(left + rx, top, rgba, transform);

    onto.line_to(right - rx, top);
    if corners {
        let (x1, y1) = (right - rx * k, top);
        let (x2, y2) = (right, top + ry * k);
        onto.cubic_bezier_to(x1, y1, x2, y2, right, top + ry);
    }

    onto.line_to(right, bottom - ry);
    if corners {
        let (x1, y1) = (right, bottom - ry * k);
        let (x2, y2) = (right - rx * k, bottom);
        onto.cubic_bezier_to(x1, y1, x2, y2, right - rx, bottom);
    }

    onto.line_to(left + rx, bottom);
    if corners {
        let (x1, y1) = (left + rx * k, bottom);
        let (x2, y2) = (left, bottom - ry * k);
        onto.cubic_bezier_to(x1, y1, x2, y2, left, bottom - ry);
    }

    onto.line_to(left, top + ry);
    if corners {
        let (x1, y1) = (left, top + ry * k);
        let (x2, y2) = (left + rx * k, top);
        onto.cubic_bezier_to(x1, y1, x2, y2, left + rx, top);
    }

    onto.close();
}
