use image;

use image::GenericImageView;
use std::io;
use std::path::Path;
use texture::Texture;

quick_error! {
    /// Error decoding a texture from disk.
    #[derive(Debug)]
    pub enum TextureError {
        /// The underlying file could not be read.
        Io(err: io::Error) {
            from()
            display("i/o error: {}", err)
            cause(err)
        }
        /// The image data could not be decoded.
        Image(err: image::ImageError) {
            from()
            display("image decoding failed: {}", err)
            cause(err)
        }
    }
}

fn load_texture_impl(path: &Path) -> Result<Texture, TextureError> {
    let image = image::open(path)?;
    let (width, height) = image.dimensions();
    let pixels = image.flipv().to_rgba8().into_raw();
    Ok(Texture::from_pixels(pixels, width, height))
}

impl super::Factory {
    /// Loads a texture, reusing a cached copy if the path was seen before.
    pub fn load_texture<P>(&mut self, path: P) -> Result<Texture, TextureError>
        where P: AsRef<Path>
    {
        let path = path.as_ref();
        let key = path.to_string_lossy().into_owned();
        if let Some(texture) = self.texture_cache.get(&key) {
            return Ok(texture.clone());
        }
        let texture = load_texture_impl(path)?;
        info!("loaded texture {:?} ({}x{})",
              path, texture.size().x, texture.size().y);
        self.texture_cache.insert(key, texture.clone());
        Ok(texture)
    }
}
