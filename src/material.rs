//! Materials, describing the appearance of renderable rectangles.

use color::Color;
use texture::Texture;

/// Solid fill with a single color.
#[derive(Clone, Debug, PartialEq)]
pub struct Solid {
    /// Fill color.
    pub color: Color,
}

/// Texture-mapped material for [`Sprite`](../struct.Sprite.html) objects.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    /// The texture the sprite samples from.
    pub map: Texture,
}

/// Specifies the appearance of a renderable object.
#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    /// Solid fill. See [`Solid`](struct.Solid.html).
    Solid(Solid),
    /// Texture-mapped. See [`Sprite`](struct.Sprite.html).
    Sprite(Sprite),
}

impl From<Solid> for Material {
    fn from(params: Solid) -> Self {
        Material::Solid(params)
    }
}

impl From<Sprite> for Material {
    fn from(params: Sprite) -> Self {
        Material::Sprite(params)
    }
}
