//! Lyon-based tessellation canvas.
//!
//! Drawing commands are tessellated on the CPU into a flat triangle-list
//! vertex buffer the host reads over the wasm boundary and uploads as-is.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::{point, Box2D};
use lyon::path::builder::BorderRadii;
use lyon::path::{Path, Winding};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};
use serde::{Deserialize, Serialize};

/// Per-vertex data: position + RGBA. 6 floats = 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct CanvasVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl CanvasVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24
}

/// RGBA color for drawing operations. Serde-enabled so style sheets can
/// override entries from JSON; alpha defaults to opaque when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Rgba {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGB u8 values (0-255) with full opacity.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create a color with the given alpha value.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Vertex constructor for lyon fill tessellation.
struct FillVertexCtor {
    color: Rgba,
}

impl FillVertexConstructor<CanvasVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> CanvasVertex {
        CanvasVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// Vertex constructor for lyon stroke tessellation.
struct StrokeVertexCtor {
    color: Rgba,
}

impl StrokeVertexConstructor<CanvasVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> CanvasVertex {
        CanvasVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// The draw surface. Holds lyon tessellators and the output vertex buffer;
/// cleared at the start of every redraw and repopulated back-to-front.
pub struct Canvas {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<CanvasVertex, u32>,
    buffer: Vec<f32>,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(4096 * CanvasVertex::FLOATS),
        }
    }

    /// Clear the vertex buffer. Called at the start of each redraw.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / CanvasVertex::FLOATS
    }

    /// Raw pointer to the flat float buffer (for the wasm-side copy).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Flush indexed geometry to the flat buffer as a triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    /// Tessellate and fill a polygon. Closed automatically; supports convex
    /// and concave shapes.
    pub fn fill_polygon(&mut self, points: &[Vec2], color: Rgba) {
        if points.len() < 3 {
            return;
        }

        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.close();
        let path = builder.build();

        self.fill_path(&path, color);
    }

    /// Tessellate and fill a rectangle.
    pub fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, color: Rgba) {
        let points = [
            pos,
            Vec2::new(pos.x + width, pos.y),
            Vec2::new(pos.x + width, pos.y + height),
            Vec2::new(pos.x, pos.y + height),
        ];
        self.fill_polygon(&points, color);
    }

    /// Tessellate and fill a rectangle with rounded corners.
    pub fn fill_rounded_rect(
        &mut self,
        pos: Vec2,
        width: f32,
        height: f32,
        radius: f32,
        color: Rgba,
    ) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.add_rounded_rectangle(
            &Box2D::new(point(pos.x, pos.y), point(pos.x + width, pos.y + height)),
            &BorderRadii::new(radius),
            Winding::Positive,
        );
        let path = builder.build();

        self.fill_path(&path, color);
    }

    /// Tessellate and fill a circle, approximated at lyon's tolerance.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, Winding::Positive);
        let path = builder.build();

        self.fill_path(&path, color);
    }

    /// Tessellate a stroked circle outline.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, Winding::Positive);
        let path = builder.build();

        self.stroke_path(&path, width, color);
    }

    /// Tessellate a stroked polyline (open path).
    pub fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Rgba) {
        if points.len() < 2 {
            return;
        }

        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(false); // open path

        let path = builder.build();
        self.stroke_path(&path, width, color);
    }

    fn fill_path(&mut self, path: &Path, color: Rgba) {
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(0.5),
            &mut BuffersBuilder::new(&mut self.geometry, FillVertexCtor { color }),
        );

        if result.is_ok() {
            self.flush_geometry();
        }
    }

    fn stroke_path(&mut self, path: &Path, width: f32, color: Rgba) {
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(0.5).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { color }),
        );

        if result.is_ok() {
            self.flush_geometry();
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
