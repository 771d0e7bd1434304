use morton_code3d::{
    decode, encode, make_displayable, Axis, MortonCode, MortonCodeNaming, COMPONENT_MASK,
};
use nalgebra::Vector3;

fn main() -> morton_code3d::Result<()> {
    // A Morton code interleaves the bits of the three components of a coordinate. The X component occupies
    // the lowest bit of every group of three, then Y, then Z:
    let code = encode(3, 2, 1);
    assert_eq!(0b011_101, code);
    assert_eq!((3, 2, 1), decode(code));

    // Each component has room for 21 bits. Anything above is dropped without an error, checking the range
    // is up to the code that defines the coordinate system
    assert_eq!(encode(COMPONENT_MASK, 0, 0), encode(u32::MAX, 0, 0));

    // The `MortonCode` type wraps the raw value and can be built from vectors or narrower integer types
    let code = MortonCode::from(Vector3::new(10u32, 22, 1));
    assert_eq!(22, code.component(Axis::Y));
    assert_eq!(Some((10u8, 22u8, 1u8)), code.components::<u8>());

    // Axes can also be addressed by index, which fails for anything but 0, 1 and 2
    assert_eq!(Axis::Z, Axis::try_from(2)?);
    assert!(Axis::try_from(3).is_err());

    // Sorting codes sorts the cells of a grid in Z-order
    let mut cells = Vec::new();
    for z in 0..2 {
        for y in 0..2 {
            for x in 0..2 {
                cells.push(MortonCode::new(x, y, z));
            }
        }
    }
    cells.reverse();
    cells.sort();
    println!(
        "{}",
        make_displayable(&cells, MortonCodeNaming::GridIndex)
    );

    // Codes can be written out as raw bytes without copying
    let bytes = MortonCode::as_bytes(&cells);
    assert_eq!(cells.len() * 8, bytes.len());

    Ok(())
}
