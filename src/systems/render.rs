use bevy_ecs::event::EventWriter;
use bevy_ecs::system::{NonSend, NonSendMut, Query};
use glam::Vec2;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::constants::{board, ui};
use crate::error::GameError;
use crate::systems::components::{Collider, Position, Renderable};
use crate::texture::sprite::{to_rect, Sprite, SpriteTextures};

/// Clears the frame and draws the background and every sprite, lowest layer first.
pub fn render_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    textures: NonSend<SpriteTextures>,
    renderables: Query<(&Renderable, &Position, &Collider)>,
    mut errors: EventWriter<GameError>,
) {
    canvas.set_draw_color(ui::BACKGROUND_COLOR);
    canvas.clear();

    let board_rect = to_rect(Vec2::ZERO, Vec2::new(board::WIDTH, board::HEIGHT));
    if let Err(e) = textures.render(&mut *canvas, Sprite::Background, board_rect) {
        errors.write(e.into());
    }

    for (renderable, position, collider) in renderables.iter().sort_by_key::<&Renderable, _>(|renderable| renderable.layer) {
        let dest = to_rect(position.0, collider.size);
        if let Err(e) = textures.render(&mut *canvas, renderable.sprite, dest) {
            errors.write(e.into());
        }
    }
}

pub fn present_system(mut canvas: NonSendMut<Canvas<Window>>) {
    canvas.present();
}
