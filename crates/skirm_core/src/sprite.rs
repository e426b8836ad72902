/// Non-owning handle to a single frame inside a loaded sprite sheet.
/// The renderer owns the pixel data, this core only resolves indices.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    bincode::Encode,
    bincode::Decode,
)]
pub struct SpriteRef(pub u32);

/// Frame lookup over a sprite sheet, by frame-index-within-sheet.
pub trait SpriteSheet {
    fn frame(&self, index: i32) -> Option<SpriteRef>;
}

/// A contiguous run of frames registered with the renderer.
/// Enough to resolve terrain sprite indices without owning any surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceSet {
    pub first_frame: u32,
    pub len: u32,
}

impl SurfaceSet {
    pub fn new(first_frame: u32, len: u32) -> Self {
        Self { first_frame, len }
    }
}

impl SpriteSheet for SurfaceSet {
    fn frame(&self, index: i32) -> Option<SpriteRef> {
        (0..self.len as i64)
            .contains(&(index as i64))
            .then(|| SpriteRef(self.first_frame + index as u32))
    }
}
