/// Size in bytes of one on-disk terrain record.
/// The format has no header and no record count, the file length is the only framing.
pub const MCD_RECORD_SIZE: usize = 62;

/// One raw terrain record as stored on disk.
///
/// Decoded field by field at fixed byte offsets so the layout never depends on
/// struct packing. Unused filler bytes of the historical format are skipped,
/// everything else is carried verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct McdRecord {
    pub frames: [u8; 8],
    pub loft: [u8; 12],
    pub scan_g: u16,
    pub ufo_door: u8,
    pub stop_los: u8,
    pub no_floor: u8,
    pub big_wall: u8,
    pub gravlift: u8,
    pub door: u8,
    pub block_fire: u8,
    pub block_smoke: u8,
    pub tu_walk: u8,
    pub tu_slide: u8,
    pub tu_fly: u8,
    pub armor: u8,
    pub he_block: u8,
    pub die_index: u8,
    pub flammable: u8,
    pub alt_index: u8,
    pub terrain_level: i8,
    pub p_level: u8,
    pub light_block: u8,
    pub footstep: u8,
    pub tile_type: u8,
    pub he_type: u8,
    pub he_strength: u8,
    pub smoke_blockage: u8,
    pub fuel: u8,
    pub light_source: u8,
    pub target_type: u8,
}

impl McdRecord {
    pub fn parse(raw: &[u8; MCD_RECORD_SIZE]) -> McdRecord {
        let mut frames = [0; 8];
        frames.copy_from_slice(&raw[0..8]);
        let mut loft = [0; 12];
        loft.copy_from_slice(&raw[8..20]);
        McdRecord {
            frames,
            loft,
            // the scan-map graphic id is the only multi-byte field, little-endian
            scan_g: u16::from_le_bytes([raw[20], raw[21]]),
            ufo_door: raw[30],
            stop_los: raw[31],
            no_floor: raw[32],
            big_wall: raw[33],
            gravlift: raw[34],
            door: raw[35],
            block_fire: raw[36],
            block_smoke: raw[37],
            tu_walk: raw[39],
            tu_slide: raw[40],
            tu_fly: raw[41],
            armor: raw[42],
            he_block: raw[43],
            die_index: raw[44],
            flammable: raw[45],
            alt_index: raw[46],
            terrain_level: raw[48] as i8,
            p_level: raw[49],
            light_block: raw[51],
            footstep: raw[52],
            tile_type: raw[53],
            he_type: raw[54],
            he_strength: raw[55],
            smoke_blockage: raw[56],
            fuel: raw[57],
            light_source: raw[58],
            target_type: raw[59],
        }
    }
}
