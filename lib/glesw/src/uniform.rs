use nalgebra::{Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4};
use std::rc::Rc;

use crate::{
    backend::Backend,
    handle::{Handle, Program, UniformLocation},
};

/// A value that can be stored in a uniform of the current program
pub trait Uniform {
    fn set_uniform<B: Backend>(&self, uniforms: &Uniforms<B>, location: UniformLocation);
}

/// Uniform setters and getters.  Setters apply to the current program, and a
/// `None` location is silently ignored like location -1 is natively.
pub struct Uniforms<B> {
    gl: Rc<B>,
}

impl<B: Backend> Uniforms<B> {
    pub fn new(gl: Rc<B>) -> Self {
        Uniforms { gl }
    }

    /// Set any supported value type
    pub fn set(&self, location: Option<UniformLocation>, value: &impl Uniform) {
        if let Some(location) = location {
            value.set_uniform(self, location);
        }
    }

    pub fn uniform_1f(&self, location: Option<UniformLocation>, x: f32) {
        if let Some(location) = location {
            self.gl.uniform_1f(location.raw(), x);
        }
    }

    pub fn uniform_2f(&self, location: Option<UniformLocation>, x: f32, y: f32) {
        if let Some(location) = location {
            self.gl.uniform_2f(location.raw(), x, y);
        }
    }

    pub fn uniform_3f(&self, location: Option<UniformLocation>, x: f32, y: f32, z: f32) {
        if let Some(location) = location {
            self.gl.uniform_3f(location.raw(), x, y, z);
        }
    }

    pub fn uniform_4f(&self, location: Option<UniformLocation>, x: f32, y: f32, z: f32, w: f32) {
        if let Some(location) = location {
            self.gl.uniform_4f(location.raw(), x, y, z, w);
        }
    }

    pub fn uniform_1i(&self, location: Option<UniformLocation>, x: i32) {
        if let Some(location) = location {
            self.gl.uniform_1i(location.raw(), x);
        }
    }

    pub fn uniform_2i(&self, location: Option<UniformLocation>, x: i32, y: i32) {
        if let Some(location) = location {
            self.gl.uniform_2i(location.raw(), x, y);
        }
    }

    pub fn uniform_3i(&self, location: Option<UniformLocation>, x: i32, y: i32, z: i32) {
        if let Some(location) = location {
            self.gl.uniform_3i(location.raw(), x, y, z);
        }
    }

    pub fn uniform_4i(&self, location: Option<UniformLocation>, x: i32, y: i32, z: i32, w: i32) {
        if let Some(location) = location {
            self.gl.uniform_4i(location.raw(), x, y, z, w);
        }
    }

    /// Set consecutive elements of a float array uniform
    pub fn uniform_1fv(&self, location: Option<UniformLocation>, values: &[f32]) {
        if let Some(location) = location {
            self.gl.uniform_1fv(location.raw(), values);
        }
    }

    /// `values` holds whole vectors, a trailing partial vector is not sent
    pub fn uniform_2fv(&self, location: Option<UniformLocation>, values: &[f32]) {
        if let Some(location) = location {
            self.gl.uniform_2fv(location.raw(), values);
        }
    }

    pub fn uniform_3fv(&self, location: Option<UniformLocation>, values: &[f32]) {
        if let Some(location) = location {
            self.gl.uniform_3fv(location.raw(), values);
        }
    }

    pub fn uniform_4fv(&self, location: Option<UniformLocation>, values: &[f32]) {
        if let Some(location) = location {
            self.gl.uniform_4fv(location.raw(), values);
        }
    }

    pub fn uniform_1iv(&self, location: Option<UniformLocation>, values: &[i32]) {
        if let Some(location) = location {
            self.gl.uniform_1iv(location.raw(), values);
        }
    }

    pub fn uniform_2iv(&self, location: Option<UniformLocation>, values: &[i32]) {
        if let Some(location) = location {
            self.gl.uniform_2iv(location.raw(), values);
        }
    }

    pub fn uniform_3iv(&self, location: Option<UniformLocation>, values: &[i32]) {
        if let Some(location) = location {
            self.gl.uniform_3iv(location.raw(), values);
        }
    }

    pub fn uniform_4iv(&self, location: Option<UniformLocation>, values: &[i32]) {
        if let Some(location) = location {
            self.gl.uniform_4iv(location.raw(), values);
        }
    }

    /// Column major matrices.  ES 2.0 requires `transpose` to be false.
    pub fn uniform_matrix_2fv(
        &self,
        location: Option<UniformLocation>,
        transpose: bool,
        values: &[f32],
    ) {
        if let Some(location) = location {
            self.gl
                .uniform_matrix_2fv(location.raw(), transpose, values);
        }
    }

    pub fn uniform_matrix_3fv(
        &self,
        location: Option<UniformLocation>,
        transpose: bool,
        values: &[f32],
    ) {
        if let Some(location) = location {
            self.gl
                .uniform_matrix_3fv(location.raw(), transpose, values);
        }
    }

    pub fn uniform_matrix_4fv(
        &self,
        location: Option<UniformLocation>,
        transpose: bool,
        values: &[f32],
    ) {
        if let Some(location) = location {
            self.gl
                .uniform_matrix_4fv(location.raw(), transpose, values);
        }
    }

    /// Read a uniform of `program` as floats, `values` must fit the uniform's
    /// type
    pub fn get_f(&self, program: Program, location: UniformLocation, values: &mut [f32]) {
        self.gl
            .get_uniformfv(program.name(), location.raw(), values);
    }

    pub fn get_i(&self, program: Program, location: UniformLocation, values: &mut [i32]) {
        self.gl
            .get_uniformiv(program.name(), location.raw(), values);
    }
}

impl Uniform for f32 {
    fn set_uniform<B: Backend>(&self, uniforms: &Uniforms<B>, location: UniformLocation) {
        uniforms.uniform_1f(Some(location), *self);
    }
}

impl Uniform for i32 {
    fn set_uniform<B: Backend>(&self, uniforms: &Uniforms<B>, location: UniformLocation) {
        uniforms.uniform_1i(Some(location), *self);
    }
}

impl Uniform for bool {
    fn set_uniform<B: Backend>(&self, uniforms: &Uniforms<B>, location: UniformLocation) {
        uniforms.uniform_1i(Some(location), *self as i32);
    }
}

macro_rules! vector_uniform {
    ($($ty:ty => $method:ident,)+) => {
        $(impl Uniform for $ty {
            fn set_uniform<B: Backend>(&self, uniforms: &Uniforms<B>, location: UniformLocation) {
                uniforms.$method(Some(location), &self[..]);
            }
        })+
    };
}

vector_uniform! {
    [f32; 2] => uniform_2fv,
    [f32; 3] => uniform_3fv,
    [f32; 4] => uniform_4fv,
    [i32; 2] => uniform_2iv,
    [i32; 3] => uniform_3iv,
    [i32; 4] => uniform_4iv,
}

macro_rules! nalgebra_uniform {
    ($($ty:ty => $method:ident,)+) => {
        $(impl Uniform for $ty {
            fn set_uniform<B: Backend>(&self, uniforms: &Uniforms<B>, location: UniformLocation) {
                uniforms.$method(Some(location), self.as_slice());
            }
        })+
    };
}

nalgebra_uniform! {
    Vector2<f32> => uniform_2fv,
    Vector3<f32> => uniform_3fv,
    Vector4<f32> => uniform_4fv,
}

macro_rules! matrix_uniform {
    ($($ty:ty => $method:ident,)+) => {
        $(impl Uniform for $ty {
            /// nalgebra stores matrices column major, as OpenGL expects
            fn set_uniform<B: Backend>(&self, uniforms: &Uniforms<B>, location: UniformLocation) {
                uniforms.$method(Some(location), false, self.as_slice());
            }
        })+
    };
}

matrix_uniform! {
    Matrix2<f32> => uniform_matrix_2fv,
    Matrix3<f32> => uniform_matrix_3fv,
    Matrix4<f32> => uniform_matrix_4fv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingBackend;

    fn uniforms() -> (Rc<RecordingBackend>, Uniforms<RecordingBackend>) {
        let gl = Rc::new(RecordingBackend::new());
        (gl.clone(), Uniforms::new(gl))
    }

    #[test]
    fn missing_location_is_ignored() {
        let (gl, uniforms) = uniforms();
        uniforms.uniform_1f(None, 1.0);
        uniforms.uniform_matrix_4fv(None, false, &[0.0; 16]);
        uniforms.set(None, &Matrix4::<f32>::identity());

        assert!(gl.take_calls().is_empty());
    }

    #[test]
    fn sets_scalars() {
        let (gl, uniforms) = uniforms();
        let location = UniformLocation::from_raw(3);

        uniforms.set(location, &0.5f32);
        uniforms.set(location, &7);
        uniforms.set(location, &true);
        uniforms.uniform_4i(location, 1, 2, 3, 4);

        assert_eq!(
            gl.take_calls(),
            vec![
                call!(uniform_1f(3, 0.5)),
                call!(uniform_1i(3, 7)),
                call!(uniform_1i(3, 1)),
                call!(uniform_4i(3, 1, 2, 3, 4)),
            ]
        );
    }

    #[test]
    fn sets_vectors() {
        let (gl, uniforms) = uniforms();
        let location = UniformLocation::from_raw(0);

        uniforms.set(location, &[1.0f32, 2.0, 3.0]);
        uniforms.set(location, &[4, 5]);
        uniforms.set(location, &Vector4::new(0.0f32, 0.25, 0.5, 1.0));

        assert_eq!(
            gl.take_calls(),
            vec![
                call!(uniform_3fv(0, [1.0f32, 2.0, 3.0])),
                call!(uniform_2iv(0, [4, 5])),
                call!(uniform_4fv(0, [0.0f32, 0.25, 0.5, 1.0])),
            ]
        );
    }

    #[test]
    fn matrices_are_column_major() {
        let (gl, uniforms) = uniforms();
        let location = UniformLocation::from_raw(1);
        let matrix = Matrix2::new(1.0f32, 2.0, 3.0, 4.0);

        uniforms.set(location, &matrix);

        assert_eq!(
            gl.take_calls(),
            vec![call!(uniform_matrix_2fv(1, false, [1.0f32, 3.0, 2.0, 4.0]))]
        );
    }

    #[test]
    fn reads_back_values() {
        let (gl, uniforms) = uniforms();
        gl.uniform_values.borrow_mut().extend(&[1.5, 2.5]);
        let program = Program::from_raw(2).unwrap();
        let location = UniformLocation::from_raw(4).unwrap();

        let mut floats = [0.0; 2];
        uniforms.get_f(program, location, &mut floats);
        assert_eq!(floats, [1.5, 2.5]);

        let mut ints = [0; 1];
        uniforms.get_i(program, location, &mut ints);
        assert_eq!(ints, [1]);

        assert_eq!(
            gl.take_calls(),
            vec![call!(get_uniformfv(2, 4)), call!(get_uniformiv(2, 4))]
        );
    }
}
