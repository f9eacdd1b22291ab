//! TTF text rendering for the HUD.
//!
//! Each distinct string is rendered to a texture once and cached. The HUD only ever shows the
//! score and a couple of banners, so the cache stays tiny; it is flushed if it ever grows past
//! [`MAX_CACHED`] entries.

use std::collections::HashMap;

use glam::IVec2;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, RenderTarget, Texture, TextureCreator};
use sdl2::rwops::RWops;
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::WindowContext;
use tracing::{trace, warn};

use crate::asset::{Asset, AssetRoot};
use crate::constants::ui;
use crate::error::{GameError, TextureError};

const MAX_CACHED: usize = 64;

/// How a text position is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The position is the left end of the text's baseline.
    BaselineLeft,
    /// The position is the center of the text's bounding box.
    Center,
}

impl Anchor {
    /// Top-left corner of a `width` x `height` text box placed at `position`.
    pub fn top_left(&self, position: IVec2, width: u32, height: u32, ascent: i32) -> IVec2 {
        match self {
            Anchor::BaselineLeft => IVec2::new(position.x, position.y - ascent),
            Anchor::Center => IVec2::new(position.x - width as i32 / 2, position.y - height as i32 / 2),
        }
    }
}

pub struct TextRenderer {
    font: Option<Font<'static, 'static>>,
    texture_creator: TextureCreator<WindowContext>,
    cache: HashMap<String, Texture>,
}

impl TextRenderer {
    /// Loads the HUD font. Without a font, rendering text is a no-op.
    pub fn new(ttf: &'static Sdl2TtfContext, texture_creator: TextureCreator<WindowContext>, assets: &AssetRoot) -> Self {
        let font = match Self::load_font(ttf, assets) {
            Ok(font) => Some(font),
            Err(e) => {
                warn!("Font unavailable, text will not be drawn: {e}");
                None
            }
        };

        Self {
            font,
            texture_creator,
            cache: HashMap::new(),
        }
    }

    fn load_font(ttf: &'static Sdl2TtfContext, assets: &AssetRoot) -> Result<Font<'static, 'static>, GameError> {
        // The font reads from this buffer for its whole lifetime.
        let data: &'static [u8] = assets.get_bytes(Asset::Font)?.leak();
        let rwops = RWops::from_bytes(data).map_err(GameError::Sdl)?;
        ttf.load_font_from_rwops(rwops, ui::FONT_SIZE).map_err(GameError::Sdl)
    }

    /// Draws `text` in the HUD color at `position`, interpreted according to `anchor`.
    pub fn render<C: RenderTarget>(
        &mut self,
        canvas: &mut Canvas<C>,
        text: &str,
        position: IVec2,
        anchor: Anchor,
    ) -> Result<(), TextureError> {
        let Some(font) = &self.font else {
            return Ok(());
        };
        if text.is_empty() {
            return Ok(());
        }

        if !self.cache.contains_key(text) {
            if self.cache.len() >= MAX_CACHED {
                trace!(entries = self.cache.len(), "Flushing text cache");
                for (_, texture) in self.cache.drain() {
                    // SAFETY: the texture creator and its renderer outlive every cached texture.
                    unsafe { texture.destroy() };
                }
            }

            let surface = font
                .render(text)
                .blended(ui::TEXT_COLOR)
                .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
            let texture = self
                .texture_creator
                .create_texture_from_surface(&surface)
                .map_err(|e| TextureError::LoadFailed(e.to_string()))?;
            self.cache.insert(text.to_string(), texture);
        }

        let Some(texture) = self.cache.get(text) else {
            return Ok(());
        };
        let query = texture.query();
        let top_left = anchor.top_left(position, query.width, query.height, font.ascent());
        let dest = Rect::new(top_left.x, top_left.y, query.width, query.height);
        canvas.copy(texture, None, dest).map_err(TextureError::RenderFailed)
    }
}
