pub const BOARD_SIZE: i32 = 6;

/// Standard loadout, longest first: one cruiser, two destroyers, four boats.
pub const FLEET_LENGTHS: [u32; 7] = [3, 2, 2, 1, 1, 1, 1];
