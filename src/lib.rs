//! `two` is a sprite-based 2D scene graph.
//!
//! The crate is meant to be embedded into a host game engine: the host owns
//! the window, the render backend, and touch dispatch, while `two` owns the
//! display-object tree. Handles such as [`Group`], [`Quad`], [`Sprite`] and
//! [`ClippedSprite`] send operations to a central hub; once per frame the
//! host calls [`Scene::sync_guard`] to flush pending operations, update
//! world transforms, and read back the data it needs for drawing.
//!
//! ## Walkthrough
//!
//! ```rust,no_run
//! extern crate two;
//!
//! use two::Object;
//!
//! fn main() {
//!     let mut factory = two::Factory::new();
//!     let mut scene = factory.scene([480.0, 320.0].into());
//!
//!     // A panel that masks its children to a 200x100 window and lets a
//!     // touch drag them vertically.
//!     let mut panel = factory.clipped_sprite([200.0, 100.0].into());
//!     panel.set_clipping(true);
//!     panel.set_can_scroll_y(true);
//!
//!     let content = factory.quad([200.0, 400.0].into(), two::color::RED);
//!     panel.add(&content);
//!     scene.add(&panel);
//!
//!     let mut input = two::Input::new();
//!     loop {
//!         // ... the host pushes this frame's touches into `input` ...
//!         panel.update(&input);
//!
//!         let mut sync = scene.sync_guard();
//!         let node = sync.resolve(&content);
//!         let _scissor = sync.clip_bounds(&panel);
//!         let _matrix = node.world_transform;
//!         // ... the host draws `content` with `_matrix`, `_scissor` ...
//!
//!         input.reset();
//!     }
//! }
//! ```

extern crate cgmath;
extern crate froggy;
extern crate image;
#[macro_use]
extern crate log;
extern crate mint;
#[macro_use]
extern crate quick_error;

macro_rules! two_object {
    ($name:ident::$field:ident) => {
        impl AsRef<::object::Base> for $name {
            fn as_ref(&self) -> &::object::Base {
                &self.$field
            }
        }

        impl AsMut<::object::Base> for $name {
            fn as_mut(&mut self) -> &mut ::object::Base {
                &mut self.$field
            }
        }

        impl ::Object for $name {}
    };
}

mod clipped;
pub mod color;
mod factory;
mod group;
mod hub;
mod input;
pub mod material;
mod node;
pub mod object;
mod quad;
mod rect;
mod scene;
mod scroll;
mod sprite;
mod texture;

pub use clipped::ClippedSprite;
pub use color::Color;
pub use factory::{Factory, TextureError};
pub use group::Group;
pub use input::{Input, Touch, TouchPhase};
pub use material::Material;
pub use node::{Node, Transform};
pub use object::Object;
pub use quad::Quad;
pub use rect::Rect;
pub use scene::{Scene, SyncGuard};
pub use sprite::Sprite;
pub use texture::Texture;
