use bytemuck::{Pod, Zeroable};
use gles_derive::VertexAttribPointers;
use glesw::Normalized;

/// Attribute names, bound to the locations of the `Vertex` fields before
/// linking
pub const ATTRIBUTES: [(u32, &str); 3] = [(0, "a_position"), (1, "a_uv"), (2, "a_colour")];

#[derive(VertexAttribPointers, Pod, Zeroable, Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Vertex {
    #[location = 0]
    pub position: [f32; 2],

    #[location = 1]
    pub uv: [f32; 2],

    #[location = 2]
    pub colour: Normalized<[u8; 4]>,
}

impl Vertex {
    const fn new(position: [f32; 2], uv: [f32; 2], colour: [u8; 4]) -> Self {
        Vertex {
            position,
            uv,
            colour: Normalized(colour),
        }
    }
}

/// A quad covering clip space, drawn as a triangle fan
pub const QUAD: [Vertex; 4] = [
    Vertex::new([-1.0, -1.0], [0.0, 0.0], [255, 255, 255, 255]),
    Vertex::new([1.0, -1.0], [1.0, 0.0], [255, 160, 160, 255]),
    Vertex::new([1.0, 1.0], [1.0, 1.0], [160, 255, 160, 255]),
    Vertex::new([-1.0, 1.0], [0.0, 1.0], [160, 160, 255, 255]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use glesw::{gles, testing::RecordingBackend, Context};

    #[test]
    fn layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 20);
        assert_eq!(bytemuck::cast_slice::<Vertex, u8>(&QUAD).len(), 80);
    }

    #[test]
    fn derive_points_every_field() {
        let context = Context::new(RecordingBackend::new());
        Vertex::vertex_attrib_pointers(&context.vertices());

        let float = gles::FLOAT;
        let unsigned_byte = gles::UNSIGNED_BYTE;
        assert_eq!(
            context.backend().take_calls(),
            vec![
                "enable_vertex_attrib_array(0)".to_string(),
                format!("vertex_attrib_pointer(0, 2, {}, false, 20, 0)", float),
                "enable_vertex_attrib_array(1)".to_string(),
                format!("vertex_attrib_pointer(1, 2, {}, false, 20, 8)", float),
                "enable_vertex_attrib_array(2)".to_string(),
                format!("vertex_attrib_pointer(2, 4, {}, true, 20, 16)", unsigned_byte),
            ]
        );
    }

    #[test]
    fn attribute_names_match_locations() {
        let locations: Vec<u32> = ATTRIBUTES.iter().map(|&(location, _)| location).collect();
        assert_eq!(locations, vec![0, 1, 2]);
    }
}
