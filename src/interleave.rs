use crate::Axis;

/// Magic masks for the interleaving steps, indexed by level. Level `l` spreads groups of bits apart by `2^l` positions,
/// the mask clears everything that ended up outside of the target pattern. Level 0 is the identity
const MASKS: [u32; 5] = [0, 0x4924_9249, 0xC30C_30C3, 0x0F00_F00F, 0xFF00_00FF];

/// Interleaves the low bits of `x` by recursive doubling, starting at `level` and going down to level 0:
///
/// ```text
/// x = (x | x << 16) & 0xFF0000FF
/// x = (x | x <<  8) & 0x0F00F00F
/// x = (x | x <<  4) & 0xC30C30C3
/// x = (x | x <<  2) & 0x49249249
/// ```
const fn interleave(x: u32, level: u32) -> u32 {
    if level == 0 {
        x
    } else {
        interleave((x | x << (1u32 << level)) & MASKS[level as usize], level - 1)
    }
}

/// Spreads the 8 bits of `byte` over 24 bits, so that bit `i` of `byte` ends up at bit `3i` of the result. All other
/// bits of the result are zero. This is evaluable at compile time and is what the packing tables are built from
pub const fn interleave_byte(byte: u8) -> u32 {
    interleave(byte as u32, 4)
}

/// Builds the table of interleaved patterns for all 256 byte values, shifted into the given bit `lane`
const fn build_packing_table(lane: u32) -> [u32; 256] {
    let mut table = [0; 256];
    let mut byte = 0;
    while byte < 256 {
        table[byte] = interleave_byte(byte as u8) << lane;
        byte += 1;
    }
    table
}

static X_TABLE: [u32; 256] = build_packing_table(Axis::X.lane());
static Y_TABLE: [u32; 256] = build_packing_table(Axis::Y.lane());
static Z_TABLE: [u32; 256] = build_packing_table(Axis::Z.lane());

/// Returns the packing table for `axis`. Entry `i` is `interleave_byte(i) << axis.lane()`. The tables are computed at
/// compile time, so this is free to call from any thread
pub fn packing_table(axis: Axis) -> &'static [u32; 256] {
    match axis {
        Axis::X => &X_TABLE,
        Axis::Y => &Y_TABLE,
        Axis::Z => &Z_TABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_interleave(byte: u8) -> u32 {
        (0..8)
            .filter(|bit| (byte >> bit) & 1 == 1)
            .fold(0, |acc, bit| acc | (1 << (3 * bit)))
    }

    #[test]
    fn interleave_known_values() {
        assert_eq!(0, interleave_byte(0));
        assert_eq!(1, interleave_byte(1));
        assert_eq!(0b1000, interleave_byte(2));
        assert_eq!(0x1249, interleave_byte(0x1F));
        assert_eq!(0x20_8208, interleave_byte(0xAA));
        assert_eq!(0x24_9249, interleave_byte(0xFF));
    }

    #[test]
    fn interleave_matches_naive_for_all_bytes() {
        for byte in 0..=u8::MAX {
            assert_eq!(
                naive_interleave(byte),
                interleave_byte(byte),
                "byte {:#04x}",
                byte
            );
        }
    }

    #[test]
    fn tables_match_shifted_interleave() {
        for axis in Axis::ALL {
            let table = packing_table(axis);
            for (byte, entry) in table.iter().enumerate() {
                assert_eq!(naive_interleave(byte as u8) << axis.lane(), *entry);
            }
        }
    }

    #[test]
    fn tables_occupy_disjoint_lanes() {
        for byte in 0..256 {
            let x = packing_table(Axis::X)[byte];
            let y = packing_table(Axis::Y)[byte];
            let z = packing_table(Axis::Z)[byte];
            assert_eq!(0, x & y);
            assert_eq!(0, y & z);
            assert_eq!(0, x & z);
        }
    }

    #[test]
    fn full_tables_fill_the_low_24_bits() {
        let combined =
            packing_table(Axis::X)[255] | packing_table(Axis::Y)[255] | packing_table(Axis::Z)[255];
        assert_eq!(0x00FF_FFFF, combined);
    }
}
