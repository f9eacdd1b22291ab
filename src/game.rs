//! This module contains the main game logic and state.

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::system::Res;
use bevy_ecs::world::World;
use rand::rngs::SmallRng;
use sdl2::event::EventType;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use tracing::{debug, info};

use crate::audio::Audio;
use crate::config::LaunchOptions;
use crate::error::{GameError, GameResult};
use crate::events::GameEvent;
use crate::systems::{
    self, audio_system, bird_physics_system, collision_system, control_system, error_log_system, hud_render_system, in_play,
    pause_command_system, pipe_cleanup_system, pipe_scroll_system, present_system, render_system, spawn_system, AudioEvent,
    AudioResource, AudioState, BirdBundle, Bindings, DeltaTime, GameStage, GlobalState, PauseState, PipeQueue, PipeRng,
    ScoreResource, SpawnTimer,
};
use crate::texture::sprite::SpriteTextures;
use crate::texture::text::TextRenderer;

/// System set for all gameplay systems to ensure they run after input processing
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameplaySet {
    /// Systems that turn input into commands and apply them
    Input,
    /// Systems that advance the simulation by one tick
    Update,
    /// The pipe spawner, which runs on its own wall-clock timer
    Spawn,
}

/// System set for all rendering systems to ensure they run after gameplay logic
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum RenderSet {
    Draw,
    Present,
}

/// Core game state manager built on the Bevy ECS architecture.
///
/// The simulation (bird, pipes, score, stage) lives entirely in ECS resources and
/// components and can run headless. The SDL2 window, renderer, input pump and mixer are
/// added on top as `NonSend` resources by [`Game::new`].
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Builds the full game: simulation plus window, input, rendering and audio.
    ///
    /// Missing images, font or sounds are logged and skipped; the game stays playable.
    pub fn new(
        canvas: Canvas<Window>,
        ttf_context: &'static Sdl2TtfContext,
        texture_creator: TextureCreator<WindowContext>,
        mut event_pump: EventPump,
        options: &LaunchOptions,
    ) -> GameResult<Game> {
        info!(assets = %options.assets.path().display(), "Starting game initialization");

        debug!("Disabling unnecessary SDL events");
        Self::disable_sdl_events(&mut event_pump);

        let mut game = Self::headless(crate::platform::rng());

        debug!("Loading sprites and font");
        let sprites = SpriteTextures::load(&texture_creator, &options.assets);
        let text = TextRenderer::new(ttf_context, texture_creator, &options.assets);

        debug!("Initializing audio");
        let audio = Audio::new(&options.assets);
        if audio.is_disabled() {
            info!("Audio is unavailable; continuing without sound");
        }

        let world = &mut game.world;
        world.resource_mut::<AudioState>().muted = options.muted;
        world.insert_non_send_resource(event_pump);
        world.insert_non_send_resource(canvas);
        world.insert_non_send_resource(sprites);
        world.insert_non_send_resource(text);
        world.insert_non_send_resource(AudioResource(audio));

        Self::configure_presentation(&mut game.schedule);

        info!("Game initialization completed");
        Ok(game)
    }

    /// Builds only the simulation, with no window, input pump, renderer or mixer.
    ///
    /// Commands are fed in by writing [`GameEvent`]s into the world.
    pub fn headless(rng: SmallRng) -> Game {
        let mut world = World::default();
        let mut schedule = Schedule::default();

        setup_simulation(&mut world, rng);
        configure_simulation(&mut schedule);

        Game { world, schedule }
    }

    fn disable_sdl_events(event_pump: &mut EventPump) {
        for event_type in [
            EventType::JoyAxisMotion,
            EventType::JoyBallMotion,
            EventType::JoyHatMotion,
            EventType::JoyButtonDown,
            EventType::JoyButtonUp,
            EventType::ControllerAxisMotion,
            EventType::ControllerButtonDown,
            EventType::ControllerButtonUp,
            EventType::FingerMotion,
            EventType::FingerUp,
            EventType::MouseMotion,
            EventType::MouseWheel,
            EventType::TextEditing,
            EventType::TextInput,
            EventType::DollarGesture,
            EventType::DollarRecord,
            EventType::MultiGesture,
            EventType::DropFile,
            EventType::DropText,
            EventType::DropBegin,
            EventType::DropComplete,
        ] {
            event_pump.disable_event(event_type);
        }
    }

    fn configure_presentation(schedule: &mut Schedule) {
        schedule
            .add_systems((
                systems::input_system.before(pause_command_system).in_set(GameplaySet::Input),
                (render_system, hud_render_system).chain().in_set(RenderSet::Draw),
                (present_system, audio_system, error_log_system).chain().in_set(RenderSet::Present),
            ))
            .configure_sets((RenderSet::Draw, RenderSet::Present).chain().after(GameplaySet::Spawn));
    }

    /// Executes one frame: drains input, advances the simulation and draws.
    ///
    /// `dt` is the wall-clock time since the previous frame in seconds; it only drives the
    /// pipe spawner. Returns `true` once the game has asked to exit.
    pub fn tick(&mut self, dt: f32) -> bool {
        // Events from the previous frame move to the stale buffer; readers have already seen them.
        self.world.resource_mut::<Events<GameEvent>>().update();
        self.world.resource_mut::<Events<AudioEvent>>().update();
        self.world.resource_mut::<Events<GameError>>().update();

        self.world.insert_resource(DeltaTime(dt));
        self.schedule.run(&mut self.world);

        self.world.resource::<GlobalState>().exit
    }

    pub fn stage(&self) -> GameStage {
        *self.world.resource::<GameStage>()
    }

    pub fn score(&self) -> ScoreResource {
        *self.world.resource::<ScoreResource>()
    }

    /// Whether the window currently has input focus.
    pub fn focused(&self) -> bool {
        self.world.resource::<GlobalState>().focused
    }
}

/// Registers events, inserts every simulation resource and spawns the bird.
pub fn setup_simulation(world: &mut World, rng: SmallRng) {
    EventRegistry::register_event::<GameError>(world);
    EventRegistry::register_event::<GameEvent>(world);
    EventRegistry::register_event::<AudioEvent>(world);

    world.insert_resource(GlobalState::default());
    world.insert_resource(GameStage::default());
    world.insert_resource(PauseState::default());
    world.insert_resource(ScoreResource::default());
    world.insert_resource(DeltaTime::default());
    world.insert_resource(SpawnTimer::default());
    world.insert_resource(PipeQueue::default());
    world.insert_resource(PipeRng(rng));
    world.insert_resource(Bindings::default());
    world.insert_resource(AudioState::default());

    world.spawn(BirdBundle::default());
}

/// Adds the simulation systems, ordered input, update, then spawn.
///
/// Every update system re-checks the stage, so a run that ends partway through a tick
/// freezes the world from the next system on. The system that ended the run still
/// finishes its own pass.
pub fn configure_simulation(schedule: &mut Schedule) {
    schedule
        .add_systems((
            (pause_command_system, control_system).chain().in_set(GameplaySet::Input),
            (bird_physics_system, pipe_scroll_system, collision_system, pipe_cleanup_system)
                .chain()
                .distributive_run_if(in_play)
                .in_set(GameplaySet::Update),
            spawn_system.in_set(GameplaySet::Spawn),
        ))
        .configure_sets((
            GameplaySet::Input,
            GameplaySet::Update.run_if(|paused: Res<PauseState>| !paused.active()),
            GameplaySet::Spawn.run_if(|paused: Res<PauseState>| !paused.active()),
        ))
        .configure_sets((GameplaySet::Input, GameplaySet::Update, GameplaySet::Spawn).chain());
}
