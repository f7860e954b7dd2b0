//! Color types and constants.

/// Color represented by a 4-byte hexadecimal number, `0xRRGGBB`.
pub type Color = u32;

/// Black.
pub const BLACK: Color = 0x000000;
/// White.
pub const WHITE: Color = 0xFFFFFF;
/// Red.
pub const RED: Color = 0xFF0000;
/// Green.
pub const GREEN: Color = 0x00FF00;
/// Blue.
pub const BLUE: Color = 0x0000FF;

/// Converts the color into a linear RGB triple, suitable for upload to a
/// GPU backend that blends in linear space.
pub fn to_linear_rgb(c: Color) -> [f32; 3] {
    let f = |xu: u32| {
        let x = (xu & 0xFF) as f32 / 255.0;
        if x > 0.04045 {
            ((x + 0.055) / 1.055).powf(2.4)
        } else {
            x / 12.92
        }
    };
    [f(c >> 16), f(c >> 8), f(c)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_rgb_endpoints() {
        assert_eq!(to_linear_rgb(BLACK), [0.0, 0.0, 0.0]);
        assert_eq!(to_linear_rgb(WHITE), [1.0, 1.0, 1.0]);
        let red = to_linear_rgb(RED);
        assert_eq!(red[0], 1.0);
        assert_eq!(red[1], 0.0);
        assert_eq!(red[2], 0.0);
    }
}
