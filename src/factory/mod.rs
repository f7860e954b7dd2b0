mod load_texture;

pub use self::load_texture::TextureError;

use std::collections;

use cgmath::Vector2;
use mint;

use clipped::ClippedSprite;
use color::{self, Color};
use group::Group;
use hub::{self, ClipData, Hub, VisualData};
use material::{self, Material};
use quad::Quad;
use scene::Scene;
use sprite::Sprite;
use texture::Texture;

type TextureCache = collections::HashMap<String, Texture>;

/// `Factory` is used to instantiate display objects.
///
/// All objects created by the same factory share one scene storage, so
/// they can be combined freely into the scenes the factory creates.
pub struct Factory {
    hub: hub::Pointer,
    texture_cache: TextureCache,
}

impl Factory {
    /// Constructor.
    pub fn new() -> Self {
        let hub = Hub::new();
        let texture_cache = Default::default();
        Factory { hub, texture_cache }
    }

    /// Create new empty [`Scene`](struct.Scene.html) with the given stage
    /// size in points.
    pub fn scene(&mut self, size: mint::Vector2<f32>) -> Scene {
        Scene {
            hub: self.hub.clone(),
            first_child: None,
            background: color::BLACK,
            size,
        }
    }

    /// Create new [`Group`](struct.Group.html).
    pub fn group(&mut self) -> Group {
        let mut hub = self.hub.lock().unwrap();
        Group::new(&mut hub)
    }

    /// Create new [`Quad`](struct.Quad.html) with the given extents and
    /// fill color.
    pub fn quad(&mut self, size: mint::Vector2<f32>, color: Color) -> Quad {
        let mut hub = self.hub.lock().unwrap();
        let object = hub.spawn_visual(VisualData {
            size: Vector2::new(size.x, size.y),
            material: Material::Solid(material::Solid { color }),
        });
        Quad::new(object)
    }

    /// Create new [`Sprite`](struct.Sprite.html) sized to its texture.
    pub fn sprite(&mut self, map: Texture) -> Sprite {
        let size = map.size();
        let mut hub = self.hub.lock().unwrap();
        let object = hub.spawn_visual(VisualData {
            size: Vector2::new(size.x as f32, size.y as f32),
            material: Material::Sprite(material::Sprite { map }),
        });
        Sprite::new(object)
    }

    /// Create new [`ClippedSprite`](struct.ClippedSprite.html) whose clip
    /// window has the given extents, anchored at the container's origin.
    ///
    /// The new container comes with clipping disabled, both scroll axes
    /// forbidden, and a zero scroll offset.
    pub fn clipped_sprite(&mut self, size: mint::Vector2<f32>) -> ClippedSprite {
        let mut hub = self.hub.lock().unwrap();
        // The clip quad never joins the child chain: it defines the
        // window but is neither rendered nor scrolled.
        let clip = Quad::new(hub.spawn_visual(VisualData {
            size: Vector2::new(size.x, size.y),
            material: Material::Solid(material::Solid { color: color::BLACK }),
        }));
        let object = hub.spawn_clipped(ClipData {
            first_child: None,
            clip: clip.object.node.clone(),
            clipping: false,
            scroll: Vector2::new(0.0, 0.0),
        });
        ClippedSprite::new(object, clip)
    }
}

impl Default for Factory {
    fn default() -> Self {
        Factory::new()
    }
}
