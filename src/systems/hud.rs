use bevy_ecs::event::EventWriter;
use bevy_ecs::system::{NonSendMut, Res};
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::constants::ui;
use crate::error::GameError;
use crate::systems::components::ScoreResource;
use crate::systems::state::{GameStage, PauseState};
use crate::texture::text::{Anchor, TextRenderer};

/// Draws the score, plus a banner on the game over and pause screens.
pub fn hud_render_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    mut text: NonSendMut<TextRenderer>,
    score: Res<ScoreResource>,
    stage: Res<GameStage>,
    pause: Res<PauseState>,
    mut errors: EventWriter<GameError>,
) {
    let score_text = score.to_string();
    if let Err(e) = text.render(&mut *canvas, &score_text, ui::SCORE_POSITION, Anchor::BaselineLeft) {
        errors.write(e.into());
    }

    let banner = match (*stage, pause.active()) {
        (GameStage::GameOver(_), _) => Some(ui::GAME_OVER_TEXT),
        (GameStage::Playing, true) => Some(ui::PAUSED_TEXT),
        (GameStage::Playing, false) => None,
    };

    if let Some(banner) = banner {
        if let Err(e) = text.render(&mut *canvas, banner, ui::BANNER_POSITION, Anchor::Center) {
            errors.write(e.into());
        }
    }
}
