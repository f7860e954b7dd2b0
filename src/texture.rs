use mint;

use std::fmt;
use std::sync::Arc;

/// An image applied (mapped) to the surface of a [`Sprite`].
///
/// `two` keeps textures on the CPU side; the host renderer is expected to
/// upload [`pixels`](struct.Texture.html#method.pixels) to its own backend
/// and sample it with [`uv_range`](struct.Texture.html#method.uv_range).
///
/// [`Sprite`]: struct.Sprite.html
#[derive(Clone, PartialEq)]
pub struct Texture {
    data: Arc<Vec<u8>>,
    total_size: [u32; 2],
    tex0: [f32; 2],
    tex1: [f32; 2],
}

impl Texture {
    /// Creates a texture from raw RGBA pixel data, tightly packed,
    /// `width * height * 4` bytes, bottom row first.
    pub fn from_pixels(data: Vec<u8>, width: u32, height: u32) -> Self {
        Texture {
            data: Arc::new(data),
            total_size: [width, height],
            tex0: [0.0; 2],
            tex1: [width as f32, height as f32],
        }
    }

    /// Full size of the underlying image in pixels.
    pub fn size(&self) -> mint::Vector2<u32> {
        self.total_size.into()
    }

    /// Raw RGBA pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    /// See [`Sprite::set_texel_range`](struct.Sprite.html#method.set_texel_range).
    pub fn set_texel_range(
        &mut self,
        base: mint::Point2<i16>,
        size: mint::Vector2<u16>,
    ) {
        self.tex0 = [
            base.x as f32,
            self.total_size[1] as f32 - base.y as f32 - size.y as f32,
        ];
        self.tex1 = [
            base.x as f32 + size.x as f32,
            self.total_size[1] as f32 - base.y as f32,
        ];
    }

    /// Returns normalized UV rectangle (x0, y0, x1, y1) of the current texel range.
    pub fn uv_range(&self) -> [f32; 4] {
        [
            self.tex0[0] / self.total_size[0] as f32,
            self.tex0[1] / self.total_size[1] as f32,
            self.tex1[0] / self.total_size[0] as f32,
            self.tex1[1] / self.total_size[1] as f32,
        ]
    }
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Texture")
            .field("total_size", &self.total_size)
            .field("tex0", &self.tex0)
            .field("tex1", &self.tex1)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texel_range_flips_vertically() {
        let mut map = Texture::from_pixels(vec![0; 64 * 64 * 4], 64, 64);
        assert_eq!(map.uv_range(), [0.0, 0.0, 1.0, 1.0]);

        map.set_texel_range([16, 0].into(), [16, 16].into());
        assert_eq!(map.uv_range(), [0.25, 0.75, 0.5, 1.0]);
    }
}
