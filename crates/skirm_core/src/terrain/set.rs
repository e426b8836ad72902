use std::io;

use tracing::trace;

use super::*;
use crate::sprite::SpriteSheet;

/// The ordered collection of terrain objects for one terrain set.
/// Record index in the source file is the object's index here, which is what
/// alternate/death references and the external tile grid point at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerrainObjectSet {
    name: String,
    objects: Vec<TerrainObject>,
}

#[derive(Debug)]
pub enum TerrainLoadError {
    ReadingFile {
        error: io::Error,
        path: String,
    },
    /// The file length is not a whole number of records, so the trailing bytes
    /// cannot form one. Treated as corrupt data, never as benign truncation.
    TruncatedRecord {
        name: String,
        length: usize,
    },
}

impl TerrainObjectSet {
    /// Loads a terrain set from a binary tileset file.
    /// All-or-nothing: any failure discards the whole attempt.
    pub fn load(name: &str, path: &str) -> Result<TerrainObjectSet, TerrainLoadError> {
        let bytes = std::fs::read(path).map_err(|io_err| TerrainLoadError::ReadingFile {
            error: io_err,
            path: path.to_string(),
        })?;
        Self::from_bytes(name, &bytes)
    }

    /// Decodes a whole terrain file image. An empty input is a valid set with
    /// zero objects.
    pub fn from_bytes(name: &str, bytes: &[u8]) -> Result<TerrainObjectSet, TerrainLoadError> {
        if bytes.len() % MCD_RECORD_SIZE != 0 {
            return Err(TerrainLoadError::TruncatedRecord {
                name: name.to_string(),
                length: bytes.len(),
            });
        }
        let mut objects = Vec::with_capacity(bytes.len() / MCD_RECORD_SIZE);
        for chunk in bytes.chunks_exact(MCD_RECORD_SIZE) {
            let mut raw = [0u8; MCD_RECORD_SIZE];
            raw.copy_from_slice(chunk);
            objects.push(TerrainObject::from_record(&McdRecord::parse(&raw)));
        }
        trace!(target: "terrain.load", "{}: {} objects", name, objects.len());
        let mut set = TerrainObjectSet {
            name: name.to_string(),
            objects,
        };
        set.fix_floor_blocks();
        Ok(set)
    }

    /// The source data leaves explosive blockage off floor tiles, put it there
    /// from the tile armor so explosions stop at floors.
    fn fix_floor_blocks(&mut self) {
        for index in 0..self.objects.len() {
            let object = &self.objects[index];
            if object.object_type() != TilePart::Floor || object.block(BlockType::He) != 0 {
                continue;
            }
            let armor = object.armor();
            let die_index = object.die_index() as usize;
            self.objects[index].set_block_values(1, 1, armor, 1, 1, 1);
            if die_index != 0 {
                if let Some(die_object) = self.objects.get_mut(die_index) {
                    die_object.set_block_values(1, 1, armor, 1, 1, 1);
                }
            }
        }
    }

    /// Second pass after load: resolve each object's stored sprite indices
    /// against the sheet. Unresolvable indices stay unlinked.
    pub fn link_sprites(&mut self, sheet: &impl SpriteSheet) {
        for object in self.objects.iter_mut() {
            for frame in 0..8 {
                let sprite = object.sprite(frame).and_then(|index| sheet.frame(index));
                object.set_frame(frame, sprite);
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TerrainObject> {
        self.objects.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TerrainObject> {
        self.objects.iter()
    }

    /// The alternate object (open door, burnt variant) of `object`, if any.
    /// Index 0 means no alternate.
    pub fn alt_object(&self, object: &TerrainObject) -> Option<&TerrainObject> {
        self.follow_index(object.alt_index())
    }

    /// The object replacing `object` when it is destroyed, if any.
    /// Index 0 means no replacement.
    pub fn die_object(&self, object: &TerrainObject) -> Option<&TerrainObject> {
        self.follow_index(object.die_index())
    }

    fn follow_index(&self, index: i32) -> Option<&TerrainObject> {
        (index > 0).then(|| self.objects.get(index as usize)).flatten()
    }
}
