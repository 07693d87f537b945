//! Raw OpenGL ES 2.0 bindings, generated by `gl_generator`. With the `debug`
//! feature every call is traced and followed by a `glGetError` check.

#[allow(clippy::all)]
mod bindings {
    include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
}

pub use bindings::Gles2 as InnerGles;
pub use bindings::*;

use std::{fmt, ops::Deref, rc::Rc};

/// A loaded OpenGL ES 2.0 function table, shared by reference count so every
/// wrapper object can hold its own copy of the context.
#[derive(Clone)]
pub struct Gles {
    table: Rc<InnerGles>,
}

impl Gles {
    pub fn load_with<F>(loadfn: F) -> Gles
    where
        F: FnMut(&'static str) -> *const types::GLvoid,
    {
        Gles {
            table: Rc::new(InnerGles::load_with(loadfn)),
        }
    }

    /// Whether the loader resolved the entry points every frame needs. A
    /// `false` result usually means no context was current while loading.
    pub fn is_loaded(&self) -> bool {
        let table = &self.table;

        table.GetError.is_loaded()
            && table.GetString.is_loaded()
            && table.Clear.is_loaded()
            && table.DrawArrays.is_loaded()
            && table.UseProgram.is_loaded()
    }
}

impl Deref for Gles {
    type Target = InnerGles;

    fn deref(&self) -> &InnerGles {
        &self.table
    }
}

impl fmt::Debug for Gles {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Gles")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
