use std::rc::Rc;

use crate::{
    backend::Backend,
    enums::{Capability, Comparison, Face},
};

gl_enum! {
    /// Source and destination weights of the blend equation
    pub enum BlendFactor {
        Zero = gles::ZERO,
        One = gles::ONE,
        SrcColor = gles::SRC_COLOR,
        OneMinusSrcColor = gles::ONE_MINUS_SRC_COLOR,
        DstColor = gles::DST_COLOR,
        OneMinusDstColor = gles::ONE_MINUS_DST_COLOR,
        SrcAlpha = gles::SRC_ALPHA,
        OneMinusSrcAlpha = gles::ONE_MINUS_SRC_ALPHA,
        DstAlpha = gles::DST_ALPHA,
        OneMinusDstAlpha = gles::ONE_MINUS_DST_ALPHA,
        ConstantColor = gles::CONSTANT_COLOR,
        OneMinusConstantColor = gles::ONE_MINUS_CONSTANT_COLOR,
        ConstantAlpha = gles::CONSTANT_ALPHA,
        OneMinusConstantAlpha = gles::ONE_MINUS_CONSTANT_ALPHA,
        /// only valid as a source factor
        SrcAlphaSaturate = gles::SRC_ALPHA_SATURATE,
    }
}

gl_enum! {
    pub enum BlendEquation {
        Add = gles::FUNC_ADD,
        Subtract = gles::FUNC_SUBTRACT,
        ReverseSubtract = gles::FUNC_REVERSE_SUBTRACT,
    }
}

gl_enum! {
    /// Action taken on the stored stencil value
    pub enum StencilOp {
        Keep = gles::KEEP,
        Zero = gles::ZERO,
        Replace = gles::REPLACE,
        Increment = gles::INCR,
        IncrementWrap = gles::INCR_WRAP,
        Decrement = gles::DECR,
        DecrementWrap = gles::DECR_WRAP,
        Invert = gles::INVERT,
    }
}

/// Complete blending configuration, applied with `Fragment::apply_blend`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendState {
    pub equation_rgb: BlendEquation,
    pub equation_alpha: BlendEquation,
    pub src_rgb: BlendFactor,
    pub dst_rgb: BlendFactor,
    pub src_alpha: BlendFactor,
    pub dst_alpha: BlendFactor,
}

impl BlendState {
    /// Blending with equal weights for color and alpha
    pub fn new(src: BlendFactor, dst: BlendFactor) -> Self {
        BlendState {
            equation_rgb: BlendEquation::Add,
            equation_alpha: BlendEquation::Add,
            src_rgb: src,
            dst_rgb: dst,
            src_alpha: src,
            dst_alpha: dst,
        }
    }

    /// Standard non premultiplied alpha blending
    pub fn alpha() -> Self {
        BlendState::new(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha)
    }

    pub fn additive() -> Self {
        BlendState::new(BlendFactor::One, BlendFactor::One)
    }
}

impl Default for BlendState {
    /// The initial state of a context, source replaces destination
    fn default() -> Self {
        BlendState::new(BlendFactor::One, BlendFactor::Zero)
    }
}

/// Stencil test configuration for one or both faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StencilState {
    pub func: Comparison,
    pub reference: i32,
    pub read_mask: u32,
    pub write_mask: u32,
    pub stencil_fail: StencilOp,
    pub depth_fail: StencilOp,
    pub depth_pass: StencilOp,
}

impl Default for StencilState {
    fn default() -> Self {
        StencilState {
            func: Comparison::Always,
            reference: 0,
            read_mask: !0,
            write_mask: !0,
            stencil_fail: StencilOp::Keep,
            depth_fail: StencilOp::Keep,
            depth_pass: StencilOp::Keep,
        }
    }
}

/// Per-fragment operations. The scissor, stencil and depth tests, blending,
/// dithering and multisample coverage
pub struct Fragment<B> {
    gl: Rc<B>,
}

impl<B: Backend> Fragment<B> {
    pub fn new(gl: Rc<B>) -> Self {
        Fragment { gl }
    }

    fn set(&self, cap: Capability, enabled: bool) {
        if enabled {
            self.gl.enable(cap.to_gl());
        } else {
            self.gl.disable(cap.to_gl());
        }
    }

    pub fn set_scissor_test(&self, enabled: bool) {
        self.set(Capability::ScissorTest, enabled);
    }

    pub fn scissor(&self, x: i32, y: i32, width: u32, height: u32) {
        self.gl.scissor(x, y, width as _, height as _);
    }

    pub fn set_stencil_test(&self, enabled: bool) {
        self.set(Capability::StencilTest, enabled);
    }

    /// The reference value is clamped by the implementation to the range of
    /// the stencil buffer
    pub fn stencil_func(&self, func: Comparison, reference: i32, mask: u32) {
        self.gl.stencil_func(func.to_gl(), reference, mask);
    }

    pub fn stencil_func_separate(&self, face: Face, func: Comparison, reference: i32, mask: u32) {
        self.gl
            .stencil_func_separate(face.to_gl(), func.to_gl(), reference, mask);
    }

    pub fn stencil_op(
        &self,
        stencil_fail: StencilOp,
        depth_fail: StencilOp,
        depth_pass: StencilOp,
    ) {
        self.gl
            .stencil_op(stencil_fail.to_gl(), depth_fail.to_gl(), depth_pass.to_gl());
    }

    pub fn stencil_op_separate(
        &self,
        face: Face,
        stencil_fail: StencilOp,
        depth_fail: StencilOp,
        depth_pass: StencilOp,
    ) {
        self.gl.stencil_op_separate(
            face.to_gl(),
            stencil_fail.to_gl(),
            depth_fail.to_gl(),
            depth_pass.to_gl(),
        );
    }

    /// Enable the stencil test and set function, operations and write mask
    /// of `face`
    pub fn apply_stencil(&self, face: Face, state: &StencilState) {
        self.set_stencil_test(true);
        self.stencil_func_separate(face, state.func, state.reference, state.read_mask);
        self.stencil_op_separate(face, state.stencil_fail, state.depth_fail, state.depth_pass);
        self.gl.stencil_mask_separate(face.to_gl(), state.write_mask);
    }

    pub fn set_depth_test(&self, enabled: bool) {
        self.set(Capability::DepthTest, enabled);
    }

    pub fn depth_func(&self, func: Comparison) {
        self.gl.depth_func(func.to_gl());
    }

    pub fn set_blend(&self, enabled: bool) {
        self.set(Capability::Blend, enabled);
    }

    pub fn blend_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.gl.blend_color(red, green, blue, alpha);
    }

    pub fn blend_equation(&self, mode: BlendEquation) {
        self.gl.blend_equation(mode.to_gl());
    }

    pub fn blend_equation_separate(&self, rgb: BlendEquation, alpha: BlendEquation) {
        self.gl.blend_equation_separate(rgb.to_gl(), alpha.to_gl());
    }

    pub fn blend_func(&self, src: BlendFactor, dst: BlendFactor) {
        self.gl.blend_func(src.to_gl(), dst.to_gl());
    }

    pub fn blend_func_separate(
        &self,
        src_rgb: BlendFactor,
        dst_rgb: BlendFactor,
        src_alpha: BlendFactor,
        dst_alpha: BlendFactor,
    ) {
        self.gl.blend_func_separate(
            src_rgb.to_gl(),
            dst_rgb.to_gl(),
            src_alpha.to_gl(),
            dst_alpha.to_gl(),
        );
    }

    /// Enable blending and set both equations and all four factors
    pub fn apply_blend(&self, state: &BlendState) {
        self.set_blend(true);
        self.blend_equation_separate(state.equation_rgb, state.equation_alpha);
        self.blend_func_separate(state.src_rgb, state.dst_rgb, state.src_alpha, state.dst_alpha);
    }

    pub fn set_dither(&self, enabled: bool) {
        self.set(Capability::Dither, enabled);
    }

    pub fn set_sample_coverage(&self, enabled: bool) {
        self.set(Capability::SampleCoverage, enabled);
    }

    pub fn set_sample_alpha_to_coverage(&self, enabled: bool) {
        self.set(Capability::SampleAlphaToCoverage, enabled);
    }

    pub fn sample_coverage(&self, value: f32, invert: bool) {
        self.gl.sample_coverage(value, invert);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingBackend;

    fn fragment() -> (Rc<RecordingBackend>, Fragment<RecordingBackend>) {
        let gl = Rc::new(RecordingBackend::new());
        (gl.clone(), Fragment::new(gl))
    }

    #[test]
    fn toggles_tests() {
        let (gl, fragment) = fragment();
        fragment.set_scissor_test(true);
        fragment.set_depth_test(false);
        fragment.set_dither(false);

        assert_eq!(
            gl.take_calls(),
            vec![
                call!(enable(gles::SCISSOR_TEST)),
                call!(disable(gles::DEPTH_TEST)),
                call!(disable(gles::DITHER)),
            ]
        );
    }

    #[test]
    fn forwards_stencil_arguments_unchanged() {
        let (gl, fragment) = fragment();
        // out of range references are left for the implementation to clamp
        fragment.stencil_func(Comparison::Equal, 300, 0xff);
        fragment.stencil_op(StencilOp::Keep, StencilOp::IncrementWrap, StencilOp::Replace);

        assert_eq!(
            gl.take_calls(),
            vec![
                call!(stencil_func(gles::EQUAL, 300, 0xff)),
                call!(stencil_op(gles::KEEP, gles::INCR_WRAP, gles::REPLACE)),
            ]
        );
    }

    #[test]
    fn applies_stencil_state_to_one_face() {
        let (gl, fragment) = fragment();
        let state = StencilState {
            func: Comparison::Less,
            reference: 1,
            depth_pass: StencilOp::Invert,
            ..Default::default()
        };

        fragment.apply_stencil(Face::Back, &state);

        assert_eq!(
            gl.take_calls(),
            vec![
                call!(enable(gles::STENCIL_TEST)),
                call!(stencil_func_separate(gles::BACK, gles::LESS, 1, u32::MAX)),
                call!(stencil_op_separate(gles::BACK, gles::KEEP, gles::KEEP, gles::INVERT)),
                call!(stencil_mask_separate(gles::BACK, u32::MAX)),
            ]
        );
    }

    #[test]
    fn applies_blend_state() {
        let (gl, fragment) = fragment();
        fragment.apply_blend(&BlendState::alpha());

        assert_eq!(
            gl.take_calls(),
            vec![
                call!(enable(gles::BLEND)),
                call!(blend_equation_separate(gles::FUNC_ADD, gles::FUNC_ADD)),
                call!(blend_func_separate(
                    gles::SRC_ALPHA,
                    gles::ONE_MINUS_SRC_ALPHA,
                    gles::SRC_ALPHA,
                    gles::ONE_MINUS_SRC_ALPHA
                )),
            ]
        );
    }

    #[test]
    fn sets_blend_parameters() {
        let (gl, fragment) = fragment();
        fragment.blend_color(0.5, 0.25, 0.0, 1.0);
        fragment.blend_equation(BlendEquation::ReverseSubtract);
        fragment.blend_func(BlendFactor::ConstantColor, BlendFactor::Zero);
        fragment.sample_coverage(0.5, true);

        assert_eq!(
            gl.take_calls(),
            vec![
                call!(blend_color(0.5, 0.25, 0.0, 1.0)),
                call!(blend_equation(gles::FUNC_REVERSE_SUBTRACT)),
                call!(blend_func(gles::CONSTANT_COLOR, gles::ZERO)),
                call!(sample_coverage(0.5, true)),
            ]
        );
    }

    #[test]
    fn default_blend_state_matches_context() {
        let state = BlendState::default();
        assert_eq!(state.src_rgb, BlendFactor::One);
        assert_eq!(state.dst_alpha, BlendFactor::Zero);
        assert_eq!(state.equation_alpha, BlendEquation::Add);
    }
}
