use std::{
    collections::HashMap,
    io::{Read, Seek},
};

use anyhow::{anyhow, Result};

use crate::{
    format::tds,
    model::{Mesh, Model},
};

pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek> ReadSeek for T {}

/// Appends one mesh from `reader` into `model`.
pub type ModelLoader = fn(&mut Model, &mut dyn ReadSeek) -> Result<Mesh>;

/// Maps file extensions to model loaders. The 3ds loader is registered out
/// of the box; hosts can add their own formats next to it.
pub struct LoaderRegistry {
    loaders: HashMap<&'static str, ModelLoader>,
}

impl LoaderRegistry {
    pub fn new() -> Self {
        let mut registry = Self { loaders: HashMap::new() };
        registry.register("3ds", load_3ds);
        registry
    }

    pub fn register(&mut self, extension: &'static str, loader: ModelLoader) {
        self.loaders.insert(extension, loader);
    }

    pub fn load(
        &self,
        model: &mut Model,
        extension: &str,
        reader: &mut dyn ReadSeek,
    ) -> Result<Mesh> {
        let loader = self
            .loaders
            .get(extension)
            .ok_or_else(|| anyhow!("no model loader registered for '.{extension}'"))?;
        loader(model, reader)
    }
}

impl Default for LoaderRegistry {
    fn default() -> Self { Self::new() }
}

fn load_3ds(model: &mut Model, mut reader: &mut dyn ReadSeek) -> Result<Mesh> {
    tds::load_mesh(model, &mut reader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_is_an_error() {
        let registry = LoaderRegistry::new();
        let mut model = Model::new();
        let err =
            registry.load(&mut model, "obj", &mut std::io::Cursor::new(Vec::new())).unwrap_err();
        assert!(err.to_string().contains("no model loader"), "{err}");
    }

    #[test]
    fn tds_loader_is_registered() {
        let registry = LoaderRegistry::new();
        let mut model = Model::new();
        // An empty stream reaches the end with no geometry chunks seen
        let err =
            registry.load(&mut model, "3ds", &mut std::io::Cursor::new(Vec::new())).unwrap_err();
        assert!(err.to_string().contains("no face list"), "{err}");
    }
}
