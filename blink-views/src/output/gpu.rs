//! GPU [`Output`] for `Views`
use std::ops::Range;

use lyon::path::builder::{NoAttributes, Transformed};
use lyon::path::{BuilderImpl as Builder, Path};
use lyon::tessellation::{
    FillGeometryBuilder, FillOptions, FillTessellator, FillVertex, GeometryBuilder,
    GeometryBuilderError, VertexId,
};

use crate::Transform;

/// Indexed-triangle data.
/// - vertices are stored as (x, y, rgba) tuples
/// - indices are stored as 32-bit offsets
#[derive(Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<(i16, i16, [u8; 4])>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangles(&self) -> usize {
        self.indices.len() / 3
    }
}

/// A run of fill indices and the mask index ranges it must be stencilled by.
///
/// A batch is drawn only where it lies inside every one of its `masks`; a batch with no
/// masks is unclipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Batch {
    pub fill: Range<u32>,
    pub masks: Vec<Range<u32>>,
}

///
pub struct Output {
    storage: Storage,
    mask: Storage,
    clipping: bool,
    clip_start: u32,
    clips: Vec<Range<u32>>,
    batches: Vec<Batch>,
    options: FillOptions,
    builder: NoAttributes<Transformed<Builder, Transform>>,
}

impl Output {
    /// Creates an indexed-triangle data `Output`.
    pub fn new(rounding: f32) -> Self {
        let builder = Self::builder();

        let options = FillOptions::non_zero().with_tolerance(if rounding > 0.0 {
            rounding
        } else {
            FillOptions::DEFAULT_TOLERANCE
        });

        Self {
            storage: Storage::default(),
            mask: Storage::default(),
            clipping: false,
            clip_start: 0,
            clips: Vec::new(),
            batches: Vec::new(),
            options,
            builder,
        }
    }

    /// Consumes the `Output` and returns the filled geometry, the geometry of every clip
    /// region, and the [`Batch`]es saying which clip regions stencil which fills.
    pub fn into_inner(mut self) -> (Mesh, Mesh, Vec<Batch>) {
        self.tessellate();
        (self.storage.into_inner(), self.mask.into_inner(), self.batches)
    }

    #[inline(never)]
    fn tessellate(&mut self) {
        let builder = std::mem::replace(&mut self.builder, Self::builder());

        let path = builder.build();
        let storage = match self.clipping {
            true => &mut self.mask,
            false => &mut self.storage,
        };

        let start = storage.indices.len() as u32;

        let mut tessellator = FillTessellator::default();
        if let Err(err) = tessellator.tessellate_path(&path, &self.options, storage) {
            tracing::warn!(?err, "path could not be tessellated; skipping it");
        }

        let end = storage.indices.len() as u32;
        if self.clipping || start == end {
            return;
        }

        match self.batches.last_mut() {
            Some(last) if last.fill.end == start && last.masks == self.clips => {
                last.fill.end = end;
            }
            _ => self.batches.push(Batch {
                fill: start..end,
                masks: self.clips.clone(),
            }),
        }
    }

    fn builder() -> NoAttributes<Transformed<Builder, Transform>> {
        Path::builder().transformed(Default::default())
    }
}

impl super::Output for Output {
    #[inline]
    fn begin(&mut self, x: f32, y: f32, rgba: [u8; 4], transform: &Transform) {
        if !self.clipping && rgba != self.storage.rgba {
            self.tessellate();
            self.storage.rgba = rgba;
        }

        self.builder.inner_mut().set_transform(*transform);
        self.builder.begin((x, y).into());
    }

    #[inline]
    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to((x, y).into());
    }

    #[inline]
    fn quadratic_bezier_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder
            .quadratic_bezier_to((x1, y1).into(), (x, y).into());
    }

    #[inline]
    fn cubic_bezier_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder
            .cubic_bezier_to((x1, y1).into(), (x2, y2).into(), (x, y).into());
    }

    #[inline]
    fn close(&mut self) {
        self.builder.close();
    }

    fn begin_clip(&mut self) {
        self.tessellate();
        self.clipping = true;
        self.clip_start = self.mask.indices.len() as u32;
    }

    fn end_clip(&mut self) {
        self.tessellate();
        self.clipping = false;

        // an empty region is ignored, as it is by the SVG output
        let region = self.clip_start..self.mask.indices.len() as u32;
        if !region.is_empty() {
            self.clips.push(region);
        }
    }

    fn reset_clip(&mut self) {
        self.tessellate();
        self.clips.clear();
    }
}

///
#[derive(Default)]
struct Storage {
    vertices: Vec<(i16, i16, [u8; 4])>,
    indices: Vec<u32>,
    rgba: [u8; 4],
}

impl Storage {
    pub fn into_inner(self) -> Mesh {
        Mesh {
            vertices: self.vertices,
            indices: self.indices,
        }
    }
}

#[doc(hidden)]
impl FillGeometryBuilder for Storage {
    #[inline]
    fn add_fill_vertex(&mut self, vertex: FillVertex) -> Result<VertexId, GeometryBuilderError> {
        let id = self.vertices.len() as u32;
        let (x, y) = vertex.position().into();

        self.vertices.push((x as i16, y as i16, self.rgba));
        Ok(id.into())
    }
}

#[doc(hidden)]
impl GeometryBuilder for Storage {
    #[inline]
    fn add_triangle(&mut self, a: VertexId, b: VertexId, c: VertexId) {
        let triangle: [u32; 3] = [a, b, c].map(|id| id.into());
        self.indices.extend_from_slice(&triangle);
    }
}
