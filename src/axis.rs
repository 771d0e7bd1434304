/// A coordinate axis of 3D space. The axis determines the bit lane that its component occupies inside a Morton code:
/// the bits of the X component start at bit 0, Y at bit 1 and Z at bit 2, so a code reads `...zyxzyxzyx` from the most
/// significant bit downwards.
///
/// This order is fixed. It decides the traversal order of the octree cells that the Morton codes describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes, in lane order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The bit offset of this axis within an interleaved Morton code
    pub const fn lane(self) -> u32 {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn index(&self) -> usize {
        self.into()
    }
}

impl Into<usize> for Axis {
    fn into(self) -> usize {
        self.lane() as usize
    }
}

impl Into<usize> for &Axis {
    fn into(self) -> usize {
        (*self).into()
    }
}

impl TryFrom<usize> for Axis {
    type Error = crate::Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(crate::Error::AxisIndexOutOfRange { index: value }),
        }
    }
}
