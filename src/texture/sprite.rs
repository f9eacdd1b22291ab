use std::collections::HashMap;

use glam::Vec2;
use sdl2::image::LoadTexture;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget, Texture, TextureCreator};
use sdl2::video::WindowContext;
use tracing::{debug, warn};

use crate::asset::{Asset, AssetRoot};
use crate::error::{GameError, TextureError};

/// Every image the game draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Bird,
    TopPipe,
    BottomPipe,
    Background,
}

impl Sprite {
    pub const ALL: [Sprite; 4] = [Sprite::Bird, Sprite::TopPipe, Sprite::BottomPipe, Sprite::Background];

    pub fn asset(&self) -> Asset {
        match self {
            Sprite::Bird => Asset::BirdImage,
            Sprite::TopPipe => Asset::TopPipeImage,
            Sprite::BottomPipe => Asset::BottomPipeImage,
            Sprite::Background => Asset::BackgroundImage,
        }
    }
}

/// Destination rectangle for a box at `position` (top-left) with `size`, in canvas pixels.
pub fn to_rect(position: Vec2, size: Vec2) -> Rect {
    Rect::new(
        position.x.round() as i32,
        position.y.round() as i32,
        size.x.round().max(1.0) as u32,
        size.y.round().max(1.0) as u32,
    )
}

/// Loaded sprite textures.
///
/// A sprite whose image is missing or unreadable is simply absent, and is skipped when drawing.
pub struct SpriteTextures {
    textures: HashMap<Sprite, Texture>,
}

impl SpriteTextures {
    pub fn load(texture_creator: &TextureCreator<WindowContext>, assets: &AssetRoot) -> Self {
        let mut textures = HashMap::new();
        for sprite in Sprite::ALL {
            match Self::load_one(texture_creator, assets, sprite) {
                Ok(texture) => {
                    debug!(?sprite, "Loaded sprite");
                    textures.insert(sprite, texture);
                }
                Err(e) => warn!(?sprite, "Sprite unavailable: {e}"),
            }
        }
        Self { textures }
    }

    fn load_one(
        texture_creator: &TextureCreator<WindowContext>,
        assets: &AssetRoot,
        sprite: Sprite,
    ) -> Result<Texture, GameError> {
        let bytes = assets.get_bytes(sprite.asset()).map_err(GameError::from)?;
        texture_creator.load_texture_bytes(&bytes).map_err(|e| {
            if e.contains("format") || e.contains("unsupported") {
                TextureError::InvalidFormat(format!("Unsupported texture format: {e}")).into()
            } else {
                TextureError::LoadFailed(e).into()
            }
        })
    }

    pub fn get(&self, sprite: Sprite) -> Option<&Texture> {
        self.textures.get(&sprite)
    }

    /// Draws `sprite` stretched over `dest`, doing nothing if it was never loaded.
    pub fn render<C: RenderTarget>(&self, canvas: &mut Canvas<C>, sprite: Sprite, dest: Rect) -> Result<(), TextureError> {
        match self.get(sprite) {
            Some(texture) => canvas.copy(texture, None, dest).map_err(TextureError::RenderFailed),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rect_rounds() {
        let rect = to_rect(Vec2::new(44.6, -128.4), Vec2::new(64.0, 512.0));
        assert_eq!(rect, Rect::new(45, -128, 64, 512));
    }

    #[test]
    fn test_sprite_assets_are_distinct() {
        let mut paths: Vec<_> = Sprite::ALL.iter().map(|s| s.asset().path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Sprite::ALL.len());
    }
}
