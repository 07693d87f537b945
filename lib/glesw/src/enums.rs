use gles::types::*;

/// Declares a typed enum over native constants, with `to_gl` and a checked
/// `TryFrom<GLenum>` conversion back
macro_rules! gl_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// The native constant for this value
            pub fn to_gl(self) -> ::gles::types::GLenum {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl ::std::convert::TryFrom<::gles::types::GLenum> for $name {
            type Error = $crate::Error;

            fn try_from(value: ::gles::types::GLenum) -> Result<Self, Self::Error> {
                $(if value == $value {
                    return Ok($name::$variant);
                })+

                Err($crate::Error::UnknownEnum {
                    kind: stringify!($name),
                    value,
                })
            }
        }
    };
}

gl_enum! {
    /// Server side capabilities toggled by `glEnable` and `glDisable`
    pub enum Capability {
        Blend = gles::BLEND,
        CullFace = gles::CULL_FACE,
        DepthTest = gles::DEPTH_TEST,
        Dither = gles::DITHER,
        PolygonOffsetFill = gles::POLYGON_OFFSET_FILL,
        SampleAlphaToCoverage = gles::SAMPLE_ALPHA_TO_COVERAGE,
        SampleCoverage = gles::SAMPLE_COVERAGE,
        ScissorTest = gles::SCISSOR_TEST,
        StencilTest = gles::STENCIL_TEST,
    }
}

gl_enum! {
    /// Polygon faces, used for culling and two sided stencil state
    pub enum Face {
        Front = gles::FRONT,
        Back = gles::BACK,
        FrontAndBack = gles::FRONT_AND_BACK,
    }
}

gl_enum! {
    /// Comparison function of the depth and stencil tests
    pub enum Comparison {
        Never = gles::NEVER,
        Less = gles::LESS,
        Equal = gles::EQUAL,
        LessEqual = gles::LEQUAL,
        Greater = gles::GREATER,
        NotEqual = gles::NOTEQUAL,
        GreaterEqual = gles::GEQUAL,
        Always = gles::ALWAYS,
    }
}

/// Convert an integer state query result into the matching typed enum
pub(crate) fn from_gl_int<T>(value: GLint) -> crate::Result<T>
where
    T: std::convert::TryFrom<GLenum, Error = crate::Error>,
{
    T::try_from(value as GLenum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::convert::TryFrom;

    #[test]
    fn converts_to_native() {
        assert_eq!(Capability::Blend.to_gl(), gles::BLEND);
        assert_eq!(Face::FrontAndBack.to_gl(), gles::FRONT_AND_BACK);
        assert_eq!(Comparison::LessEqual.to_gl(), gles::LEQUAL);
    }

    #[test]
    fn converts_from_native() {
        assert_eq!(Comparison::try_from(gles::GEQUAL).unwrap(), Comparison::GreaterEqual);
        assert_eq!(Capability::try_from(gles::DITHER).unwrap(), Capability::Dither);
    }

    #[test]
    fn rejects_unknown_values() {
        match Face::try_from(gles::BLEND) {
            Err(Error::UnknownEnum { kind, value }) => {
                assert_eq!(kind, "Face");
                assert_eq!(value, gles::BLEND);
            }
            other => panic!("expected unknown enum error, got {:?}", other),
        }
    }
}
