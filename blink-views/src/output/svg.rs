//! SVG [`Output`] for `Views`

use svg::node::element::path::{Command, Data, Position};
use svg::node::element::{ClipPath, Path};
use svg::{Document, Node};

use crate::Transform;

pub struct Output {
    svg: Document,
    transform: Transform,
    data: Data,
    rgba: [u8; 4],
    clip: Clip,
    clips: usize,
}

#[derive(Default)]
enum Clip {
    #[default]
    None,
    Recording {
        data: Data,
        transform: Transform,
        within: Option<String>,
    },
    Active(String),
}

impl Output {
    /// Creates a Scalable Vector Graphics `Output`.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            svg: Document::new()
                .set("viewBox", (0, 0, width, height))
                .set("width", width)
                .set("height", height),
            transform: Default::default(),
            data: Default::default(),
            rgba: [0; 4],
            clip: Clip::None,
            clips: 0,
        }
    }

    fn end_current_node(&mut self) {
        if self.data.is_empty() {
            return;
        }

        let data = std::mem::take(&mut self.data);

        let fill = format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.rgba[0], self.rgba[1], self.rgba[2], self.rgba[3]
        );

        let mut path = Path::new()
            .set("transform", matrix(&self.transform))
            .set("fill", fill)
            .set("d", data);

        if let Clip::Active(id) = &self.clip {
            path = path.set("clip-path", format!("url(#{id})"));
        }

        self.svg.append(path);
    }

    /// The sub-path currently being built; the clip region while one is being recorded.
    fn current(&mut self) -> &mut Data {
        match &mut self.clip {
            Clip::Recording { data, .. } => data,
            _ => &mut self.data,
        }
    }

    /// Consumes the `Output` and returns the constructed SVG string.
    pub fn into_inner(mut self) -> String {
        self.end_current_node();
        self.svg.to_string()
    }
}

fn matrix(transform: &Transform) -> String {
    let array = transform.to_array();
    format!(
        "matrix({} {} {} {} {} {})",
        array[0], array[1], array[2], array[3], array[4], array[5]
    )
}

impl crate::Output for Output {
    fn begin(&mut self, x: f32, y: f32, rgba: [u8; 4], transform: &Transform) {
        if let Clip::Recording {
            data,
            transform: clip,
            ..
        } = &mut self.clip
        {
            *clip = *transform;
            data.append(Command::Move(Position::Absolute, (x, y).into()));
            return;
        }

        if !self.data.is_empty() && (rgba != self.rgba || !transform.approx_eq(&self.transform)) {
            self.end_current_node();
        }

        self.rgba = rgba;
        self.transform = *transform;

        self.data
            .append(Command::Move(Position::Absolute, (x, y).into()));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.current()
            .append(Command::Line(Position::Absolute, (x, y).into()));
    }

    fn quadratic_bezier_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.current().append(Command::QuadraticCurve(
            Position::Absolute,
            (x1, y1, x, y).into(),
        ));
    }

    fn cubic_bezier_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.current().append(Command::CubicCurve(
            Position::Absolute,
            (x1, y1, x2, y2, x, y).into(),
        ));
    }

    fn close(&mut self) {
        self.current().append(Command::Close);
    }

    fn begin_clip(&mut self) {
        self.end_current_node();

        let within = match std::mem::take(&mut self.clip) {
            Clip::Active(id) => Some(id),
            _ => None,
        };

        self.clip = Clip::Recording {
            data: Default::default(),
            transform: self.transform,
            within,
        };
    }

    fn end_clip(&mut self) {
        let Clip::Recording {
            data,
            transform,
            within,
        } = std::mem::take(&mut self.clip)
        else {
            return;
        };

        if data.is_empty() {
            self.clip = within.map(Clip::Active).unwrap_or_default();
            return;
        }

        let id = format!("clip{}", self.clips);
        self.clips += 1;

        let mut clip = ClipPath::new().set("id", id.clone());
        if let Some(outer) = within {
            // nested clips intersect
            clip = clip.set("clip-path", format!("url(#{outer})"));
        }

        self.svg.append(clip.add(
            Path::new()
                .set("transform", matrix(&transform))
                .set("d", data),
        ));

        self.clip = Clip::Active(id);
    }

    fn reset_clip(&mut self) {
        self.end_current_node();
        self.clip = Clip::None;
    }
}
