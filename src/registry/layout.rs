// Mon Oct 19 2026 - Alex

//! Memory map of the watched game state (NTSC 1.02).
//!
//! Per-player data lives in four regions, each with its own addressing rule:
//!
//! ```text
//! Region         Rule                               Stride
//! ────────────────────────────────────────────────────────────
//! cursor         base - stride * player             0xB80
//! status word    base + stride * player             0x24
//! static block   base + stride * player + offset    0xE90
//! data block     base + stride * player + offset    0xE90
//! ```

use crate::decode::{Decoder, IntDecoder, BYTE_MASK};
use crate::memory::Address;

pub const MAX_PLAYERS: u8 = 4;
pub const DEFAULT_PLAYERS: [u8; MAX_PLAYERS as usize] = [0, 1, 2, 3];
pub const PLAYERS_KEY: &str = "players";

/// An entity-independent field at a fixed address, written to a top-level key.
#[derive(Debug, Clone, Copy)]
pub struct GlobalField {
    pub address: Address,
    pub name: &'static str,
    pub decoder: Decoder,
}

/// A per-player field living in a region where each player owns one address.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub decoder: Decoder,
}

#[derive(Debug, Clone, Copy)]
pub struct CursorField {
    pub base: Address,
    pub name: &'static str,
    pub decoder: Decoder,
}

#[derive(Debug, Clone, Copy)]
pub struct OffsetField {
    pub offset: u32,
    pub name: &'static str,
    pub decoder: Decoder,
}

/// Fields whose addresses walk downwards by `stride` per player.
#[derive(Debug, Clone)]
pub struct CursorRegion {
    pub stride: u32,
    pub fields: Vec<CursorField>,
}

/// One word per player packing several independent sub-fields.
#[derive(Debug, Clone)]
pub struct StatusWord {
    pub base: Address,
    pub stride: u32,
    pub fields: Vec<FieldSpec>,
}

/// A per-player block addressed as `base + stride * player + offset`.
#[derive(Debug, Clone)]
pub struct OffsetTable {
    pub name: &'static str,
    pub base: Address,
    pub stride: u32,
    pub fields: Vec<OffsetField>,
}

#[derive(Debug, Clone)]
pub struct PlayerLayout {
    pub cursor: CursorRegion,
    pub status: StatusWord,
    pub tables: Vec<OffsetTable>,
}

impl Default for PlayerLayout {
    fn default() -> Self {
        Self {
            cursor: CursorRegion {
                stride: CURSOR_STRIDE,
                fields: CURSOR_FIELDS.to_vec(),
            },
            status: StatusWord {
                base: STATUS_BASE,
                stride: STATUS_STRIDE,
                fields: STATUS_FIELDS.to_vec(),
            },
            tables: vec![
                OffsetTable {
                    name: "static",
                    base: STATIC_BASE,
                    stride: BLOCK_STRIDE,
                    fields: STATIC_FIELDS.to_vec(),
                },
                OffsetTable {
                    name: "data",
                    base: DATA_BASE,
                    stride: BLOCK_STRIDE,
                    fields: DATA_FIELDS.to_vec(),
                },
            ],
        }
    }
}

pub const GLOBAL_FIELDS: &[GlobalField] = &[
    GlobalField { address: Address::new(0x8047_9D60), name: "frame", decoder: Decoder::WORD },
    GlobalField { address: Address::new(0x8047_9D30), name: "menu", decoder: Decoder::Int(IntDecoder::masked(BYTE_MASK)) },
    GlobalField { address: Address::new(0x804D_6CAD), name: "stage", decoder: Decoder::TOP_SHORT },
];

pub const CURSOR_STRIDE: u32 = 0xB80;

pub const CURSOR_FIELDS: &[CursorField] = &[
    CursorField { base: Address::new(0x8111_8DEC), name: "cursor_x", decoder: Decoder::FLOAT },
    CursorField { base: Address::new(0x8111_8DF0), name: "cursor_y", decoder: Decoder::FLOAT },
];

pub const STATUS_BASE: Address = Address::new(0x803F_0E08);
pub const STATUS_STRIDE: u32 = 0x24;

// player type in bits 24..32, character id in bits 8..16
pub const STATUS_FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "type", decoder: Decoder::TOP_BYTE },
    FieldSpec { name: "character", decoder: Decoder::Int(IntDecoder::new(8, BYTE_MASK)) },
];

pub const BLOCK_STRIDE: u32 = 0xE90;
pub const STATIC_BASE: Address = Address::new(0x8045_3080);
pub const DATA_BASE: Address = Address::new(0x8045_3130);

pub const STATIC_FIELDS: &[OffsetField] = &[
    OffsetField { offset: 0x60, name: "percent", decoder: Decoder::TOP_SHORT },
    OffsetField { offset: 0x8E, name: "stock", decoder: Decoder::TOP_BYTE },
    // hitbox position
    OffsetField { offset: 0x18B4, name: "x", decoder: Decoder::FLOAT },
    OffsetField { offset: 0x18B8, name: "y", decoder: Decoder::FLOAT },
    OffsetField { offset: 0x18BC, name: "z", decoder: Decoder::FLOAT },
];

pub const DATA_FIELDS: &[OffsetField] = &[
    OffsetField { offset: 0x70, name: "action_state", decoder: Decoder::WORD },
    OffsetField { offset: 0x20CC, name: "action_counter", decoder: Decoder::WORD },
    OffsetField { offset: 0x8F4, name: "action_frame", decoder: Decoder::FLOAT },
    OffsetField { offset: 0x19EC, name: "vulnerable", decoder: Decoder::WORD },
    OffsetField { offset: 0x19BC, name: "hitlag_frames_left", decoder: Decoder::FLOAT },
    OffsetField { offset: 0x23A0, name: "hitstun_frames_left", decoder: Decoder::FLOAT },
    OffsetField { offset: 0x2174, name: "charging_smash", decoder: Decoder::Int(IntDecoder::masked(0x2)) },
    OffsetField { offset: 0x19C8, name: "jumps_used", decoder: Decoder::TOP_BYTE },
    OffsetField { offset: 0x140, name: "in_air", decoder: Decoder::WORD },
    OffsetField { offset: 0xE0, name: "speed_air_x_self", decoder: Decoder::FLOAT },
    OffsetField { offset: 0xE4, name: "speed_air_y_self", decoder: Decoder::FLOAT },
    OffsetField { offset: 0xEC, name: "speed_x_attack", decoder: Decoder::FLOAT },
    OffsetField { offset: 0xF0, name: "speed_y_attack", decoder: Decoder::FLOAT },
    OffsetField { offset: 0x14C, name: "speed_ground_x_self", decoder: Decoder::FLOAT },
    // 1.0 is right, -1.0 is left
    OffsetField { offset: 0x8C, name: "facing", decoder: Decoder::FLOAT },
    OffsetField { offset: 0x1E4, name: "speed_fastfall_self", decoder: Decoder::FLOAT },
];
