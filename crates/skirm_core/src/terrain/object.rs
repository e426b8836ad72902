use super::mcd::McdRecord;
use crate::sprite::SpriteRef;

/// Which part of a tile the object occupies.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TilePart {
    #[default]
    Floor,
    WestWall,
    NorthWall,
    Object,
}

impl TilePart {
    pub fn from_byte(value: u8) -> TilePart {
        match value {
            1 => TilePart::WestWall,
            2 => TilePart::NorthWall,
            3 => TilePart::Object,
            _ => TilePart::Floor,
        }
    }
}

/// Scripted role of a tile, used by mission objectives and spawn logic.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialTileType {
    #[default]
    Tile,
    StartPoint,
    IonBeamAccel,
    DestroyObjective,
    MagneticNav,
    AlienCryo,
    AlienClon,
    AlienLearn,
    AlienImplant,
    Unknown09,
    AlienPlastics,
    ExamRoom,
    DeadTile,
    EndPoint,
    MustDestroy,
}

impl SpecialTileType {
    pub fn from_byte(value: u8) -> SpecialTileType {
        match value {
            1 => SpecialTileType::StartPoint,
            2 => SpecialTileType::IonBeamAccel,
            3 => SpecialTileType::DestroyObjective,
            4 => SpecialTileType::MagneticNav,
            5 => SpecialTileType::AlienCryo,
            6 => SpecialTileType::AlienClon,
            7 => SpecialTileType::AlienLearn,
            8 => SpecialTileType::AlienImplant,
            9 => SpecialTileType::Unknown09,
            10 => SpecialTileType::AlienPlastics,
            11 => SpecialTileType::ExamRoom,
            12 => SpecialTileType::DeadTile,
            13 => SpecialTileType::EndPoint,
            14 => SpecialTileType::MustDestroy,
            _ => SpecialTileType::Tile,
        }
    }
}

/// How a unit is moving when paying a tile's time-unit cost.
#[derive(
    Debug,
    Default,
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
pub enum MovementType {
    #[default]
    Walk,
    Fly,
    Slide,
}

/// The six blockage slots of a terrain object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Light,
    Vision,
    He,
    Smoke,
    Fire,
    Gas,
}

/// A light block of 10 in the source data means the object blocks all light.
const LIGHT_BLOCK_FULL_RAW: i32 = 10;
const LIGHT_BLOCK_FULL: i32 = 16;
/// Boolean blockage bytes collapse to full blockage or none.
const BLOCK_FULL: i32 = 255;

/// One placeable terrain graphic plus its movement, blocking and special-role
/// properties. Populated from a binary record, cross-linked to alternates and
/// sprites by the owning [`super::TerrainObjectSet`], immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerrainObject {
    sprites: [i32; 8],
    frames: [Option<SpriteRef>; 8],
    loft: [i32; 12],
    scan_g: u16,
    is_ufo_door: bool,
    stop_los: bool,
    is_no_floor: bool,
    is_big_wall: bool,
    is_gravlift: bool,
    is_door: bool,
    block_fire: bool,
    block_smoke: bool,
    tu_walk: i32,
    tu_fly: i32,
    tu_slide: i32,
    block: [i32; 6],
    y_offset: i32,
    terrain_level: i32,
    footstep_sound: i32,
    special_type: SpecialTileType,
    object_type: TilePart,
    die_index: i32,
    alt_index: i32,
    armor: i32,
    flammable: i32,
    fuel: i32,
    he_type: i32,
    he_strength: i32,
    light_source: i32,
}

impl TerrainObject {
    pub fn from_record(record: &McdRecord) -> TerrainObject {
        let mut object = TerrainObject::default();
        for frame in 0..8 {
            object.sprites[frame] = record.frames[frame] as i32;
        }
        for layer in 0..12 {
            object.loft[layer] = record.loft[layer] as i32;
        }
        object.scan_g = record.scan_g;
        object.set_flags(
            record.ufo_door == 1,
            record.stop_los == 1,
            record.no_floor == 1,
            record.big_wall == 1,
            record.gravlift == 1,
            record.door == 1,
            record.block_fire == 1,
            record.block_smoke == 1,
        );
        object.tu_walk = record.tu_walk as i32;
        object.tu_fly = record.tu_fly as i32;
        object.tu_slide = record.tu_slide as i32;
        object.set_block_values(
            record.light_block as i32,
            record.stop_los as i32,
            record.he_block as i32,
            record.block_smoke as i32,
            record.block_fire as i32,
            record.block_smoke as i32,
        );
        object.y_offset = record.p_level as i32;
        object.terrain_level = record.terrain_level as i32;
        object.footstep_sound = record.footstep as i32;
        object.special_type = SpecialTileType::from_byte(record.tile_type);
        object.object_type = TilePart::from_byte(record.target_type);
        object.die_index = record.die_index as i32;
        object.alt_index = record.alt_index as i32;
        object.armor = record.armor as i32;
        object.flammable = record.flammable as i32;
        object.fuel = record.fuel as i32;
        object.he_type = record.he_type as i32;
        object.he_strength = record.he_strength as i32;
        object.light_source = record.light_source as i32;
        object
    }

    /// Sets all the tile-interaction flags in one go.
    pub fn set_flags(
        &mut self,
        is_ufo_door: bool,
        stop_los: bool,
        is_no_floor: bool,
        is_big_wall: bool,
        is_gravlift: bool,
        is_door: bool,
        block_fire: bool,
        block_smoke: bool,
    ) {
        self.is_ufo_door = is_ufo_door;
        self.stop_los = stop_los;
        self.is_no_floor = is_no_floor;
        self.is_big_wall = is_big_wall;
        self.is_gravlift = is_gravlift;
        self.is_door = is_door;
        self.block_fire = block_fire;
        self.block_smoke = block_smoke;
    }

    /// Sets the blockage for all six slots from raw source values.
    /// Vision, smoke, fire and gas are boolean in the source data and collapse
    /// to 255 or 0; a light block of 10 blocks all light.
    pub fn set_block_values(
        &mut self,
        light: i32,
        vision: i32,
        he: i32,
        smoke: i32,
        fire: i32,
        gas: i32,
    ) {
        self.block[0] = if light == LIGHT_BLOCK_FULL_RAW {
            LIGHT_BLOCK_FULL
        } else {
            light
        };
        self.block[1] = if vision == 1 { BLOCK_FULL } else { 0 };
        self.block[2] = he;
        self.block[3] = if smoke == 1 { BLOCK_FULL } else { 0 };
        self.block[4] = if fire == 1 { BLOCK_FULL } else { 0 };
        self.block[5] = if gas == 1 { BLOCK_FULL } else { 0 };
    }

    pub fn block(&self, block_type: BlockType) -> i32 {
        self.block[block_type as usize]
    }

    /// The stored sprite-sheet index for a frame slot.
    pub fn sprite(&self, frame: usize) -> Option<i32> {
        self.sprites.get(frame).copied()
    }

    /// The resolved sprite handle for a frame slot, set by the linking pass.
    pub fn frame(&self, frame: usize) -> Option<SpriteRef> {
        self.frames.get(frame).copied().flatten()
    }

    pub(super) fn set_frame(&mut self, frame: usize, sprite: Option<SpriteRef>) {
        if let Some(slot) = self.frames.get_mut(frame) {
            *slot = sprite;
        }
    }

    pub fn loft(&self, layer: usize) -> Option<i32> {
        self.loft.get(layer).copied()
    }

    pub fn scan_g(&self) -> u16 {
        self.scan_g
    }

    pub fn tu_cost(&self, movement: MovementType) -> i32 {
        match movement {
            MovementType::Walk => self.tu_walk,
            MovementType::Fly => self.tu_fly,
            MovementType::Slide => self.tu_slide,
        }
    }

    pub fn is_ufo_door(&self) -> bool {
        self.is_ufo_door
    }

    pub fn stop_los(&self) -> bool {
        self.stop_los
    }

    pub fn is_no_floor(&self) -> bool {
        self.is_no_floor
    }

    /// Whether this blocks all four surrounding paths.
    pub fn is_big_wall(&self) -> bool {
        if self.terrain_level < 0 {
            return false; // this is a hack for eg. dropship ramps
        }
        self.is_big_wall
    }

    pub fn is_gravlift(&self) -> bool {
        self.is_gravlift
    }

    pub fn is_door(&self) -> bool {
        self.is_door
    }

    pub fn block_fire(&self) -> bool {
        self.block_fire
    }

    pub fn block_smoke(&self) -> bool {
        self.block_smoke
    }

    /// Added to the graphical Y offset of units or objects on this tile.
    pub fn terrain_level(&self) -> i32 {
        self.terrain_level
    }

    /// Y offset in pixels for drawing this object.
    pub fn y_offset(&self) -> i32 {
        self.y_offset
    }

    pub fn footstep_sound(&self) -> i32 {
        self.footstep_sound
    }

    pub fn special_type(&self) -> SpecialTileType {
        self.special_type
    }

    pub fn object_type(&self) -> TilePart {
        self.object_type
    }

    /// Index of the replacement object when this one is destroyed, 0 for none.
    pub fn die_index(&self) -> i32 {
        self.die_index
    }

    /// Index of the alternate object (open door, burnt variant), 0 for none.
    pub fn alt_index(&self) -> i32 {
        self.alt_index
    }

    pub fn armor(&self) -> i32 {
        self.armor
    }

    pub fn flammable(&self) -> i32 {
        self.flammable
    }

    pub fn fuel(&self) -> i32 {
        self.fuel
    }

    pub fn he_type(&self) -> i32 {
        self.he_type
    }

    pub fn he_strength(&self) -> i32 {
        self.he_strength
    }

    pub fn light_source(&self) -> i32 {
        self.light_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_wall_suppressed_on_negative_terrain_level() {
        for (big_wall, terrain_level, expected) in [
            (true, 0, true),
            (true, 4, true),
            (true, -1, false),
            (true, -8, false),
            (false, -8, false),
            (false, 0, false),
        ] {
            let mut object = TerrainObject::default();
            object.set_flags(false, false, false, big_wall, false, false, false, false);
            object.terrain_level = terrain_level;
            assert_eq!(
                object.is_big_wall(),
                expected,
                "big_wall {} level {}",
                big_wall,
                terrain_level
            );
        }
    }

    #[test]
    fn light_block_ten_means_full() {
        let mut object = TerrainObject::default();
        object.set_block_values(10, 0, 0, 0, 0, 0);
        assert_eq!(object.block(BlockType::Light), 16);
        object.set_block_values(9, 0, 0, 0, 0, 0);
        assert_eq!(object.block(BlockType::Light), 9);
        object.set_block_values(11, 0, 0, 0, 0, 0);
        assert_eq!(object.block(BlockType::Light), 11);
    }

    #[test]
    fn boolean_blocks_collapse() {
        let mut object = TerrainObject::default();
        object.set_block_values(0, 1, 40, 1, 1, 1);
        assert_eq!(object.block(BlockType::Vision), 255);
        assert_eq!(object.block(BlockType::He), 40);
        assert_eq!(object.block(BlockType::Smoke), 255);
        assert_eq!(object.block(BlockType::Fire), 255);
        assert_eq!(object.block(BlockType::Gas), 255);
        object.set_block_values(0, 2, 40, 0, 3, 255);
        assert_eq!(object.block(BlockType::Vision), 0);
        assert_eq!(object.block(BlockType::Smoke), 0);
        assert_eq!(object.block(BlockType::Fire), 0);
        assert_eq!(object.block(BlockType::Gas), 0);
    }
}
