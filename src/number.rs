use num_traits::{AsPrimitive, NumCast, PrimInt, Unsigned};

/// Trait for unsigned integer types that can be used as coordinate components of a Morton code. Voxel and grid types
/// often store their coordinates in narrower types than `u32`, this trait lets them encode and decode without manual
/// casts.
///
/// Conversion into the lane input truncates (`as` semantics), so for `u64` only the low 32 bits are passed on, of which
/// in turn only the low 21 bits make it into the code. Conversion back is checked and fails if the decoded value does
/// not fit into `Self`.
pub trait Component: PrimInt + Unsigned + AsPrimitive<u32> + NumCast {
    /// The maximum number of bits of this type that survive a roundtrip through a Morton code
    const SIGNIFICANT_BITS: u32;

    fn to_lane_input(self) -> u32 {
        self.as_()
    }

    fn from_lane_output(value: u32) -> Option<Self> {
        <Self as NumCast>::from(value)
    }
}

impl Component for u8 {
    const SIGNIFICANT_BITS: u32 = 8;
}

impl Component for u16 {
    const SIGNIFICANT_BITS: u32 = 16;
}

impl Component for u32 {
    const SIGNIFICANT_BITS: u32 = crate::COMPONENT_BITS;
}

impl Component for u64 {
    const SIGNIFICANT_BITS: u32 = crate::COMPONENT_BITS;
}
