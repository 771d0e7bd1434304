use std::fmt::Display;

use bytemuck::{Pod, Zeroable};
use nalgebra::Vector3;

use crate::{decode, decode_axis, encode, number::Component, Axis, COMPONENT_BITS};

/// When converting a `MortonCode` to a string, these are the different ways to construct the string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MortonCodeNaming {
    /// The raw code as a zero-padded hexadecimal number, e.g. `0x000000000000001d`
    Hex,
    /// The 63 significant bits of the code as a zero-padded binary number. Read in groups of three from the right, each
    /// group is one octree level in `zyx` order
    Binary,
    /// The decoded coordinate as `x-y-z`, e.g. `3-2-1`
    GridIndex,
}

/// A 3D Morton code. This is a thin wrapper around the raw `u64` code, which orders, hashes and compares exactly like
/// the raw value, so sorting a slice of `MortonCode`s sorts the encoded coordinates in Z-order.
///
/// The type is `#[repr(transparent)]` and `Pod`, so a slice of codes can be reinterpreted as bytes without copying, see
/// `MortonCode::as_bytes`.
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable,
)]
#[repr(transparent)]
pub struct MortonCode {
    bits: u64,
}

impl MortonCode {
    /// Encodes the coordinate `(x, y, z)`. Only the low 21 bits of each component are used
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self {
            bits: encode(x, y, z),
        }
    }

    /// Wraps an already encoded value. Any `u64` is accepted
    pub const fn from_raw(bits: u64) -> Self {
        Self { bits }
    }

    /// Encodes a coordinate given in any `Component` type
    pub fn from_components<T: Component>(x: T, y: T, z: T) -> Self {
        Self::new(x.to_lane_input(), y.to_lane_input(), z.to_lane_input())
    }

    pub const fn raw(&self) -> u64 {
        self.bits
    }

    /// Decodes this code into its `(x, y, z)` coordinate
    pub fn coordinates(&self) -> (u32, u32, u32) {
        decode(self.bits)
    }

    /// Decodes the component of a single `axis`
    pub fn component(&self, axis: Axis) -> u32 {
        decode_axis(self.bits, axis)
    }

    /// Decodes this code into a coordinate of type `T`. Returns `None` if any of the components does not fit into `T`
    pub fn components<T: Component>(&self) -> Option<(T, T, T)> {
        let (x, y, z) = self.coordinates();
        Some((
            T::from_lane_output(x)?,
            T::from_lane_output(y)?,
            T::from_lane_output(z)?,
        ))
    }

    /// Converts this `MortonCode` into a `String` representation, using the given `naming` convention
    pub fn to_string(&self, naming: MortonCodeNaming) -> String {
        match naming {
            MortonCodeNaming::Hex => format!("{:#018x}", self.bits),
            MortonCodeNaming::Binary => {
                format!("{:0width$b}", self.bits, width = (3 * COMPONENT_BITS) as usize)
            }
            MortonCodeNaming::GridIndex => {
                let (x, y, z) = self.coordinates();
                format!("{}-{}-{}", x, y, z)
            }
        }
    }

    /// Views a slice of codes as its underlying bytes, in native endianness
    pub fn as_bytes(codes: &[MortonCode]) -> &[u8] {
        bytemuck::cast_slice(codes)
    }
}

impl Display for MortonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string(MortonCodeNaming::Hex))
    }
}

impl From<u64> for MortonCode {
    fn from(bits: u64) -> Self {
        Self::from_raw(bits)
    }
}

impl From<MortonCode> for u64 {
    fn from(code: MortonCode) -> Self {
        code.bits
    }
}

impl From<Vector3<u32>> for MortonCode {
    fn from(coordinates: Vector3<u32>) -> Self {
        Self::new(coordinates.x, coordinates.y, coordinates.z)
    }
}

impl From<MortonCode> for Vector3<u32> {
    fn from(code: MortonCode) -> Self {
        let (x, y, z) = code.coordinates();
        Vector3::new(x, y, z)
    }
}
