use crate::{Output, Transform};

mod rounded;

/// A filled outline placed within an `x`, `y`, `w`, `h` frame.
pub trait Path {
    fn draw(&self, x: f32, y: f32, w: f32, h: f32, transform: &Transform, onto: &mut impl Output);
}

/// [Least-squares approximation of the circle using cubic Bézier curves][site]
///
/// > David Ellsworth found the optimal value of c:
/// >
/// > c ≈ 0.5519703814011128603134107
///
/// [site]: https://spencermortensen.com/articles/least-squares-bezier-circle/
pub const K: f32 = 0.4480296; // 1 - 0.5519703814011128603134107 rounded to f32

pub struct Rectangle {
    pub rgba: [u8; 4],
}

impl Path for Rectangle {
    #[inline(always)]
    fn draw(&self, x: f32, y: f32, w: f32, h: f32, transform: &Transform, onto: &mut impl Output) {
        rounded::rectangle(x, y, w, h, 0.0, 0.0, 0.0, self.rgba, transform, onto);
    }
}

impl Rectangle {
    pub fn rounded(self, rx: f32, ry: f32) -> RoundedRectangle {
        RoundedRectangle {
            rgba: self.rgba,
            rx,
            ry,
        }
    }
}

pub struct RoundedRectangle {
    rgba: [u8; 4],
    rx: f32,
    ry: f32,
}

impl Path for RoundedRectangle {
    #[inline(always)]
    fn draw(&self, x: f32, y: f32, w: f32, h: f32, transform: &Transform, onto: &mut impl Output) {
        rounded::rectangle(x, y, w, h, self.rx, self.ry, K, self.rgba, transform, onto);
    }
}

pub struct Circle {
    pub rgba: [u8; 4],
}

impl Path for Circle {
    #[inline(always)]
    fn draw(&self, x: f32, y: f32, w: f32, h: f32, transform: &Transform, onto: &mut impl Output) {
        let r = f32::min(w, h) / 2.0;
        // centred in the frame when it is not square
        let x = x + (w - 2.0 * r) / 2.0;
        let y = y + (h - 2.0 * r) / 2.0;
        rounded::rectangle(x, y, 2.0 * r, 2.0 * r, r, r, K, self.rgba, transform, onto);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records the stream of commands as text.
    #[derive(Default)]
    pub(crate) struct Recorder {
        pub(crate) commands: Vec<String>,
    }

    impl Output for Recorder {
        fn begin(&mut self, x: f32, y: f32, rgba: [u8; 4], _transform: &Transform) {
            self.commands.push(format!("M {x} {y} {rgba:?}"));
        }

        fn line_to(&mut self, x: f32, y: f32) {
            self.commands.push(format!("L {x} {y}"));
        }

        fn quadratic_bezier_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
            self.commands.push(format!("Q {x1} {y1} {x} {y}"));
        }

        fn cubic_bezier_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
            self.commands.push(format!("C {x1} {y1} {x2} {y2} {x} {y}"));
        }

        fn close(&mut self) {
            self.commands.push("Z".into());
        }

        fn begin_clip(&mut self) {
            self.commands.push("clip".into());
        }

        fn end_clip(&mut self) {
            self.commands.push("/clip".into());
        }

        fn reset_clip(&mut self) {
            self.commands.push("unclip".into());
        }
    }

    #[test]
    fn rectangles_are_four_lines() {
        let mut recorder = Recorder::default();
        let rectangle = Rectangle { rgba: [1, 2, 3, 4] };
        rectangle.draw(0.0, 0.0, 10.0, 20.0, &Transform::identity(), &mut recorder);

        insta::assert_snapshot!(
            recorder.commands.join("; "),
            @"M 0 0 [1, 2, 3, 4]; L 10 0; L 10 20; L 0 20; L 0 0; Z"
        );
    }

    #[test]
    fn pills_are_only_curves_at_the_ends() {
        let mut recorder = Recorder::default();
        let pill = Rectangle { rgba: [0; 4] }.rounded(2.0, 2.0);
        pill.draw(0.0, 0.0, 20.0, 4.0, &Transform::identity(), &mut recorder);

        let curves = recorder.commands.iter().filter(|c| c.starts_with('C'));
        assert_eq!(curves.count(), 4);
        assert_eq!(recorder.commands.first().map(String::as_str), Some("M 2 0 [0, 0, 0, 0]"));
        assert_eq!(recorder.commands.last().map(String::as_str), Some("Z"));
    }

    #[test]
    fn circles_are_centred_in_wide_frames() {
        let mut recorder = Recorder::default();
        Circle { rgba: [0; 4] }.draw(0.0, 0.0, 20.0, 10.0, &Transform::identity(), &mut recorder);

        // leftmost point of the circle sits at x = 5
        assert!(recorder.commands.iter().any(|c| c.ends_with(" 5 5")));
    }
}
