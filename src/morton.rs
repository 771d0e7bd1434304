use nalgebra::Vector3;

use crate::{packing_table, Axis};

/// Number of bits per coordinate component that fit into a 64-bit Morton code
pub const COMPONENT_BITS: u32 = 21;
/// Mask for the bits of a coordinate component that survive encoding
pub const COMPONENT_MASK: u32 = (1 << COMPONENT_BITS) - 1;

/// Interleaves the bits of `value` into the bit lane of `axis`. Bit `k` of `value` ends up at bit `3k + axis.lane()`
/// of the result.
///
/// Only the low 21 bits of `value` are used, the rest are silently dropped. A 64-bit code has room for exactly
/// three 21-bit components, so there is no check here: callers that care about the valid range of their coordinates
/// have to enforce it themselves.
pub fn encode_axis(value: u32, axis: Axis) -> u64 {
    let table = packing_table(axis);

    let low = (value & 0xFF) as usize;
    let middle = (value >> 8 & 0xFF) as usize;
    // Only 5 bits of the high byte fit, bit 21 would otherwise land on the topmost bit of the code
    let high = (value >> 16 & 0x1F) as usize;

    (table[high] as u64) << 48 | (table[middle] as u64) << 24 | table[low] as u64
}

/// Extracts the component in the bit lane of `axis` from the Morton `code`. This is the inverse of `encode_axis`
pub fn decode_axis(code: u64, axis: Axis) -> u32 {
    let mut x = code >> axis.lane();

    x &= 0x9249_2492_4924_9249;
    x = (x | (x >> 2)) & 0x30C3_0C30_C30C_30C3;
    x = (x | (x >> 4)) & 0xF00F_00F0_0F00_F00F;
    x = (x | (x >> 8)) & 0x00FF_0000_FF00_00FF;
    x = (x | (x >> 16)) & 0xFFFF_0000_0000_FFFF;
    x = (x | (x >> 32)) & 0x0000_0000_FFFF_FFFF;

    x as u32
}

/// Computes the Morton code of the 3D coordinate `(x, y, z)` by interleaving the bits of all three components. Each
/// component contributes its low 21 bits, higher bits are ignored
///
/// ```
/// # use morton_code3d::encode;
/// assert_eq!(0b111, encode(1, 1, 1));
/// assert_eq!(0b001_100, encode(2, 0, 1));
/// ```
pub fn encode(x: u32, y: u32, z: u32) -> u64 {
    encode_axis(x, Axis::X) | encode_axis(y, Axis::Y) | encode_axis(z, Axis::Z)
}

/// Unpacks the Morton `code` into its `(x, y, z)` coordinate
pub fn decode(code: u64) -> (u32, u32, u32) {
    (
        decode_axis(code, Axis::X),
        decode_axis(code, Axis::Y),
        decode_axis(code, Axis::Z),
    )
}

/// Like `encode`, but takes the coordinate as a vector
pub fn encode_vector(coordinates: &Vector3<u32>) -> u64 {
    encode(coordinates.x, coordinates.y, coordinates.z)
}

/// Like `decode`, but returns the coordinate as a vector
pub fn decode_vector(code: u64) -> Vector3<u32> {
    let (x, y, z) = decode(code);
    Vector3::new(x, y, z)
}
