mod cube;
mod quad;

pub use cube::Cube;
pub use quad::Quad;

/// Everything the scene can ingest. Cubes are face generators, not
/// renderable primitives: ingestion flattens them to quads, and the render
/// loops only ever see quads.
#[derive(Copy, Clone, Debug)]
pub enum SceneObject {
    Quad(Quad),
    Cube(Cube),
}

impl SceneObject {
    pub fn flatten_into(&self, quads: &mut Vec<Quad>) {
        match self {
            SceneObject::Quad(quad) => quads.push(*quad),
            SceneObject::Cube(cube) => quads.extend(cube.faces()),
        }
    }
}

impl From<Quad> for SceneObject {
    fn from(data: Quad) -> Self {
        SceneObject::Quad(data)
    }
}

impl From<Cube> for SceneObject {
    fn from(data: Cube) -> Self {
        SceneObject::Cube(data)
    }
}
