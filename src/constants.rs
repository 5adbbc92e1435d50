use crate::buttons::{DestButton, SourceButton, StickDirection};

// Names in the adapter firmware
pub const FUNCTION_NAME: &str = "mapGamecubeToN64";
pub const STATUS_VAR: &str = "gc_status";
pub const BUFFER_VAR: &str = "n64_buffer";

// C-Stick axis fields & thresholds
pub const STICK_X_FIELD: &str = "cstick_x";
pub const STICK_Y_FIELD: &str = "cstick_y";
pub const STICK_HIGH: u8 = 0xB0;
pub const STICK_LOW: u8 = 0x50;

// Export
pub const DEFAULT_MAPPING_FILE: &str = "gc_n64_mappings.json";

/// GameCube status register holding a button bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    Data1,
    Data2,
}

impl Register {
    pub fn field(self) -> &'static str {
        match self {
            Register::Data1 => "data1",
            Register::Data2 => "data2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceBit {
    pub register: Register,
    pub mask: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestBit {
    pub index: usize,
    pub mask: u8,
}

const fn gc(register: Register, mask: u8) -> SourceBit {
    SourceBit { register, mask }
}

const fn n64(index: usize, mask: u8) -> DestBit {
    DestBit { index, mask }
}

// GameCube status bits
pub mod gc_bits {
    use super::{Register::*, SourceBit, gc};

    pub const A: SourceBit = gc(Data1, 0x01);
    pub const B: SourceBit = gc(Data1, 0x02);
    pub const X: SourceBit = gc(Data1, 0x04);
    pub const Y: SourceBit = gc(Data1, 0x08);
    pub const START: SourceBit = gc(Data1, 0x10);
    pub const L: SourceBit = gc(Data2, 0x40);
    pub const R: SourceBit = gc(Data2, 0x20);
    pub const Z: SourceBit = gc(Data2, 0x10);
    pub const DUP: SourceBit = gc(Data2, 0x08);
    pub const DDOWN: SourceBit = gc(Data2, 0x04);
    pub const DRIGHT: SourceBit = gc(Data2, 0x02);
    pub const DLEFT: SourceBit = gc(Data2, 0x01);
}

// N64 buffer bits
pub mod n64_bits {
    use super::{DestBit, n64};

    pub const A: DestBit = n64(0, 0x80);
    pub const B: DestBit = n64(0, 0x40);
    pub const Z: DestBit = n64(0, 0x20);
    pub const START: DestBit = n64(0, 0x10);
    pub const DUP: DestBit = n64(0, 0x08);
    pub const DDOWN: DestBit = n64(0, 0x04);
    pub const DLEFT: DestBit = n64(0, 0x02);
    pub const DRIGHT: DestBit = n64(0, 0x01);
    pub const L: DestBit = n64(1, 0x20);
    pub const R: DestBit = n64(1, 0x10);
    pub const CUP: DestBit = n64(1, 0x08);
    pub const CDOWN: DestBit = n64(1, 0x04);
    pub const CLEFT: DestBit = n64(1, 0x02);
    pub const CRIGHT: DestBit = n64(1, 0x01);
}

/// Status bit tested for a digital GameCube button. The C-Stick directions have none.
pub fn source_bit(button: SourceButton) -> Option<SourceBit> {
    use SourceButton::*;

    Some(match button {
        A => gc_bits::A,
        B => gc_bits::B,
        X => gc_bits::X,
        Y => gc_bits::Y,
        Start => gc_bits::START,
        L => gc_bits::L,
        R => gc_bits::R,
        Z => gc_bits::Z,
        DUp => gc_bits::DUP,
        DDown => gc_bits::DDOWN,
        DLeft => gc_bits::DLEFT,
        DRight => gc_bits::DRIGHT,
        CStickUp | CStickDown | CStickLeft | CStickRight => return None,
    })
}

pub fn dest_bit(button: DestButton) -> DestBit {
    use DestButton::*;

    match button {
        A => n64_bits::A,
        B => n64_bits::B,
        Z => n64_bits::Z,
        Start => n64_bits::START,
        L => n64_bits::L,
        R => n64_bits::R,
        DUp => n64_bits::DUP,
        DDown => n64_bits::DDOWN,
        DLeft => n64_bits::DLEFT,
        DRight => n64_bits::DRIGHT,
        CUp => n64_bits::CUP,
        CDown => n64_bits::CDOWN,
        CLeft => n64_bits::CLEFT,
        CRight => n64_bits::CRIGHT,
    }
}

/// `gc_status.<field> <comparison> <threshold>` test for one C-Stick direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickTest {
    pub field: &'static str,
    pub comparison: &'static str,
    pub threshold: u8,
}

pub fn stick_test(direction: StickDirection) -> StickTest {
    let field = if direction.is_vertical() { STICK_Y_FIELD } else { STICK_X_FIELD };
    let (comparison, threshold) = if direction.is_positive() {
        (">", STICK_HIGH)
    } else {
        ("<", STICK_LOW)
    };
    StickTest {
        field,
        comparison,
        threshold,
    }
}
