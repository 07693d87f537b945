use std::rc::Rc;

use crate::{
    backend::Backend,
    enums::{Capability, Face},
};

gl_enum! {
    /// Winding order of front facing polygons
    pub enum FrontFace {
        Clockwise = gles::CW,
        CounterClockwise = gles::CCW,
    }
}

/// Primitive rasterization, face culling and the viewport transform
pub struct Rasterizer<B> {
    gl: Rc<B>,
}

impl<B: Backend> Rasterizer<B> {
    pub fn new(gl: Rc<B>) -> Self {
        Rasterizer { gl }
    }

    pub fn set_cull_face(&self, enabled: bool) {
        if enabled {
            self.gl.enable(Capability::CullFace.to_gl());
        } else {
            self.gl.disable(Capability::CullFace.to_gl());
        }
    }

    pub fn cull_face(&self, face: Face) {
        self.gl.cull_face(face.to_gl());
    }

    pub fn front_face(&self, mode: FrontFace) {
        self.gl.front_face(mode.to_gl());
    }

    pub fn line_width(&self, width: f32) {
        self.gl.line_width(width);
    }

    pub fn set_polygon_offset_fill(&self, enabled: bool) {
        if enabled {
            self.gl.enable(Capability::PolygonOffsetFill.to_gl());
        } else {
            self.gl.disable(Capability::PolygonOffsetFill.to_gl());
        }
    }

    pub fn polygon_offset(&self, factor: f32, units: f32) {
        self.gl.polygon_offset(factor, units);
    }

    /// (x, y) is the lower left corner, in window coordinates
    pub fn viewport(&self, x: i32, y: i32, width: u32, height: u32) {
        self.gl.viewport(x, y, width as _, height as _);
    }

    pub fn depth_range(&self, near: f32, far: f32) {
        self.gl.depth_rangef(near, far);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingBackend;
    use std::convert::TryFrom;

    #[test]
    fn forwards_culling_and_viewport() {
        let gl = Rc::new(RecordingBackend::new());
        let rasterizer = Rasterizer::new(gl.clone());

        rasterizer.set_cull_face(true);
        rasterizer.cull_face(Face::Front);
        rasterizer.front_face(FrontFace::Clockwise);
        rasterizer.viewport(0, 0, 800, 600);
        rasterizer.depth_range(0.0, 1.0);
        rasterizer.set_polygon_offset_fill(true);
        rasterizer.polygon_offset(1.0, 2.0);
        rasterizer.line_width(3.0);

        assert_eq!(
            gl.take_calls(),
            vec![
                call!(enable(gles::CULL_FACE)),
                call!(cull_face(gles::FRONT)),
                call!(front_face(gles::CW)),
                call!(viewport(0, 0, 800, 600)),
                call!(depth_rangef(0.0, 1.0)),
                call!(enable(gles::POLYGON_OFFSET_FILL)),
                call!(polygon_offset(1.0, 2.0)),
                call!(line_width(3.0)),
            ]
        );
    }

    #[test]
    fn winding_round_trips() {
        assert_eq!(FrontFace::try_from(gles::CCW).unwrap(), FrontFace::CounterClockwise);
    }
}
