use std::collections::HashMap;

use bevy_ecs::{
    event::EventWriter,
    resource::Resource,
    system::{NonSendMut, Res, ResMut},
};
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
    mouse::MouseButton,
    EventPump,
};
use smallvec::SmallVec;
use tracing::trace;

use crate::events::{GameCommand, GameEvent};
use crate::systems::components::GlobalState;

/// Mouse id SDL reports for clicks synthesized from touch input.
const TOUCH_MOUSE_ID: u32 = u32::MAX;

#[derive(Debug, Clone, Resource)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        // Flap / restart
        key_bindings.insert(Keycode::Space, GameCommand::Activate);
        key_bindings.insert(Keycode::Up, GameCommand::Activate);
        key_bindings.insert(Keycode::Return, GameCommand::Activate);
        key_bindings.insert(Keycode::KpEnter, GameCommand::Activate);

        // Game actions
        key_bindings.insert(Keycode::P, GameCommand::TogglePause);
        key_bindings.insert(Keycode::M, GameCommand::MuteAudio);
        key_bindings.insert(Keycode::Escape, GameCommand::Exit);
        key_bindings.insert(Keycode::Q, GameCommand::Exit);

        Self { key_bindings }
    }
}

impl Bindings {
    pub fn get(&self, key: Keycode) -> Option<GameCommand> {
        self.key_bindings.get(&key).copied()
    }
}

/// The subset of platform input the game cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput {
    KeyDown { key: Keycode, repeat: bool },
    /// A primary mouse button press; `synthetic` if SDL generated it from a touch.
    PointerDown { synthetic: bool },
    TouchDown,
    Quit,
    Focus(bool),
}

impl RawInput {
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::Quit { .. } => Some(RawInput::Quit),
            Event::KeyDown {
                keycode: Some(key), repeat, ..
            } => Some(RawInput::KeyDown {
                key: *key,
                repeat: *repeat,
            }),
            Event::MouseButtonDown {
                which,
                mouse_btn: MouseButton::Left,
                ..
            } => Some(RawInput::PointerDown {
                synthetic: *which == TOUCH_MOUSE_ID,
            }),
            Event::FingerDown { .. } => Some(RawInput::TouchDown),
            Event::Window { win_event, .. } => match win_event {
                WindowEvent::FocusGained => Some(RawInput::Focus(true)),
                WindowEvent::FocusLost => Some(RawInput::Focus(false)),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Turns a frame's worth of raw input into game events, applying focus changes to `state`.
///
/// Held-key repeats and touch-synthesized clicks are dropped, so one press or one tap
/// yields exactly one command.
pub fn process_raw_inputs(bindings: &Bindings, inputs: &[RawInput], state: &mut GlobalState) -> SmallVec<[GameEvent; 4]> {
    let mut events = SmallVec::new();
    for input in inputs {
        let command = match *input {
            RawInput::KeyDown { repeat: true, .. } => None,
            RawInput::KeyDown { key, repeat: false } => bindings.get(key),
            RawInput::PointerDown { synthetic: true } => None,
            RawInput::PointerDown { synthetic: false } | RawInput::TouchDown => Some(GameCommand::Activate),
            RawInput::Quit => Some(GameCommand::Exit),
            RawInput::Focus(focused) => {
                trace!(focused, "Window focus changed");
                state.focused = focused;
                None
            }
        };

        if let Some(command) = command {
            events.push(command.into());
        }
    }
    events
}

pub fn input_system(
    bindings: Res<Bindings>,
    mut state: ResMut<GlobalState>,
    mut writer: EventWriter<GameEvent>,
    mut pump: NonSendMut<EventPump>,
) {
    let inputs: SmallVec<[RawInput; 8]> = pump.poll_iter().filter_map(|event| RawInput::from_event(&event)).collect();

    for event in process_raw_inputs(&bindings, &inputs, &mut state) {
        writer.write(event);
    }
}
