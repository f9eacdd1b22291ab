use flappy::events::{GameCommand, GameEvent};
use flappy::systems::input::{process_raw_inputs, Bindings, RawInput};
use flappy::systems::GlobalState;
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Mod, Scancode};
use sdl2::mouse::MouseButton;
use speculoos::prelude::*;

fn process(inputs: &[RawInput]) -> Vec<GameEvent> {
    let mut state = GlobalState::default();
    process_raw_inputs(&Bindings::default(), inputs, &mut state).into_vec()
}

fn key(key: Keycode) -> RawInput {
    RawInput::KeyDown { key, repeat: false }
}

mod keyboard_tests {
    use super::*;

    #[test]
    fn activation_keys_emit_activate() {
        for k in [Keycode::Space, Keycode::Up, Keycode::Return, Keycode::KpEnter] {
            assert_that(&process(&[key(k)])).is_equal_to(vec![GameEvent::Command(GameCommand::Activate)]);
        }
    }

    #[test]
    fn action_keys_emit_their_commands() {
        assert_that(&process(&[key(Keycode::P)])).contains(GameEvent::Command(GameCommand::TogglePause));
        assert_that(&process(&[key(Keycode::M)])).contains(GameEvent::Command(GameCommand::MuteAudio));
        assert_that(&process(&[key(Keycode::Escape)])).contains(GameEvent::Command(GameCommand::Exit));
        assert_that(&process(&[key(Keycode::Q)])).contains(GameEvent::Command(GameCommand::Exit));
    }

    #[test]
    fn unbound_key_emits_nothing() {
        assert_that(&process(&[key(Keycode::Z)])).is_empty();
        assert_that(&process(&[key(Keycode::Down)])).is_empty();
    }

    #[test]
    fn held_key_repeats_are_dropped() {
        let events = process(&[
            key(Keycode::Space),
            RawInput::KeyDown {
                key: Keycode::Space,
                repeat: true,
            },
            RawInput::KeyDown {
                key: Keycode::Space,
                repeat: true,
            },
        ]);
        assert_that(&events.len()).is_equal_to(1);
    }

    #[test]
    fn separate_presses_each_count() {
        let events = process(&[key(Keycode::Space), key(Keycode::Up)]);
        assert_that(&events.len()).is_equal_to(2);
    }
}

mod pointer_tests {
    use super::*;

    #[test]
    fn click_activates() {
        assert_that(&process(&[RawInput::PointerDown { synthetic: false }]))
            .is_equal_to(vec![GameEvent::Command(GameCommand::Activate)]);
    }

    #[test]
    fn touch_activates() {
        assert_that(&process(&[RawInput::TouchDown])).is_equal_to(vec![GameEvent::Command(GameCommand::Activate)]);
    }

    #[test]
    fn tap_with_synthesized_click_activates_once() {
        let events = process(&[RawInput::TouchDown, RawInput::PointerDown { synthetic: true }]);
        assert_that(&events.len()).is_equal_to(1);
    }
}

mod window_tests {
    use super::*;

    fn key_down(repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 1,
            keycode: Some(Keycode::Space),
            scancode: Some(Scancode::Space),
            keymod: Mod::NOMOD,
            repeat,
        }
    }

    fn mouse_down(which: u32, mouse_btn: MouseButton) -> Event {
        Event::MouseButtonDown {
            timestamp: 0,
            window_id: 1,
            which,
            mouse_btn,
            clicks: 1,
            x: 180,
            y: 320,
        }
    }

    #[test]
    fn key_repeat_flag_is_kept() {
        assert_that(&RawInput::from_event(&key_down(false))).is_equal_to(Some(RawInput::KeyDown {
            key: Keycode::Space,
            repeat: false,
        }));
        assert_that(&RawInput::from_event(&key_down(true))).is_equal_to(Some(RawInput::KeyDown {
            key: Keycode::Space,
            repeat: true,
        }));
    }

    #[test]
    fn held_space_activates_once() {
        let inputs: Vec<RawInput> = [key_down(false), key_down(true), key_down(true)]
            .iter()
            .filter_map(RawInput::from_event)
            .collect();
        assert_that(&process(&inputs)).is_equal_to(vec![GameEvent::Command(GameCommand::Activate)]);
    }

    #[test]
    fn left_click_from_mouse_is_real() {
        assert_that(&RawInput::from_event(&mouse_down(0, MouseButton::Left)))
            .is_equal_to(Some(RawInput::PointerDown { synthetic: false }));
    }

    #[test]
    fn left_click_from_touch_is_synthetic() {
        assert_that(&RawInput::from_event(&mouse_down(u32::MAX, MouseButton::Left)))
            .is_equal_to(Some(RawInput::PointerDown { synthetic: true }));
    }

    #[test]
    fn right_click_is_ignored() {
        assert_that(&RawInput::from_event(&mouse_down(0, MouseButton::Right))).is_none();
    }

    #[test]
    fn tap_activates_once() {
        let finger = Event::FingerDown {
            timestamp: 0,
            touch_id: 1,
            finger_id: 0,
            x: 0.5,
            y: 0.5,
            dx: 0.0,
            dy: 0.0,
            pressure: 1.0,
        };
        assert_that(&RawInput::from_event(&finger)).is_equal_to(Some(RawInput::TouchDown));

        let inputs: Vec<RawInput> = [finger, mouse_down(u32::MAX, MouseButton::Left)]
            .iter()
            .filter_map(RawInput::from_event)
            .collect();
        assert_that(&process(&inputs)).is_equal_to(vec![GameEvent::Command(GameCommand::Activate)]);
    }

    #[test]
    fn quit_event_exits() {
        let raw = RawInput::from_event(&Event::Quit { timestamp: 0 });
        assert_that(&raw).is_equal_to(Some(RawInput::Quit));
        assert_that(&process(&[RawInput::Quit])).contains(GameEvent::Command(GameCommand::Exit));
    }

    #[test]
    fn focus_changes_update_state() {
        let mut state = GlobalState::default();
        let events = process_raw_inputs(&Bindings::default(), &[RawInput::Focus(false)], &mut state);
        assert_that(&events.is_empty()).is_true();
        assert_that(&state.focused).is_false();

        process_raw_inputs(&Bindings::default(), &[RawInput::Focus(true)], &mut state);
        assert_that(&state.focused).is_true();
    }
}
