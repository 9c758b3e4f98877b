//! Window icon rasterized in-process, no asset file needed.

use macroquad::miniquad::conf::Icon;

/// Glider motif on an 8x8 canvas, one bit per pixel, MSB leftmost
const MOTIF: [u8; 8] = [
    0b0000_0000,
    0b0000_0000,
    0b0001_0000,
    0b0000_1000,
    0b0011_1000,
    0b0000_0000,
    0b0000_0000,
    0b0000_0000,
];

const ON: [u8; 4] = [46, 139, 87, 255];
const OFF: [u8; 4] = [10, 10, 10, 255];

fn rasterize<const BYTES: usize>(size: usize) -> [u8; BYTES] {
    let scale = size / 8;
    let mut rgba = [0u8; BYTES];
    for y in 0..size {
        for x in 0..size {
            let lit = (MOTIF[y / scale] >> (7 - x / scale)) & 1 == 1;
            let px = if lit { ON } else { OFF };
            rgba[(y * size + x) * 4..(y * size + x) * 4 + 4].copy_from_slice(&px);
        }
    }
    rgba
}

/// Build the window icon at the three sizes miniquad wants
pub fn glider_icon() -> Icon {
    Icon {
        small: rasterize::<{ 16 * 16 * 4 }>(16),
        medium: rasterize::<{ 32 * 32 * 4 }>(32),
        big: rasterize::<{ 64 * 64 * 4 }>(64),
    }
}
