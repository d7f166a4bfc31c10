use std::collections::{HashMap, VecDeque};

use winit::{
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
enum KeyCode {
    Left,
    Right,
    A,
    D,
    Q,
    R,
    Any,
}

impl From<&PhysicalKey> for KeyCode {
    fn from(key: &PhysicalKey) -> Self {
        match key {
            PhysicalKey::Code(WinitKeyCode::ArrowLeft) => KeyCode::Left,
            PhysicalKey::Code(WinitKeyCode::ArrowRight) => KeyCode::Right,
            PhysicalKey::Code(WinitKeyCode::KeyA) => KeyCode::A,
            PhysicalKey::Code(WinitKeyCode::KeyD) => KeyCode::D,
            PhysicalKey::Code(WinitKeyCode::KeyQ) => KeyCode::Q,
            PhysicalKey::Code(WinitKeyCode::KeyR) => KeyCode::R,
            _ => KeyCode::Any,
        }
    }
}

/// Discrete commands the game reacts to.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub enum Command {
    MoveLeft,
    MoveRight,
    /// Window close request.
    Quit,
    /// Replay from the game over screen.
    KeyR,
    /// Quit from the game over screen.
    KeyQ,
}

/// Turns window events into commands and buffers them until the next tick.
pub struct InputHandler {
    keybindings: HashMap<KeyCode, Command>,
    pending: VecDeque<Command>,
}

impl InputHandler {
    pub fn new() -> Self {
        let mut keybindings = HashMap::new();

        keybindings.insert(KeyCode::A, Command::MoveLeft);
        keybindings.insert(KeyCode::Left, Command::MoveLeft);
        keybindings.insert(KeyCode::D, Command::MoveRight);
        keybindings.insert(KeyCode::Right, Command::MoveRight);
        keybindings.insert(KeyCode::R, Command::KeyR);
        keybindings.insert(KeyCode::Q, Command::KeyQ);

        Self {
            keybindings,
            pending: VecDeque::new(),
        }
    }

    pub fn handle_window_event(&mut self, window_event: &WindowEvent) {
        match window_event {
            WindowEvent::CloseRequested => self.push(Command::Quit),
            WindowEvent::KeyboardInput { event, .. } => self.handle_keyboard_input(event),
            _ => {}
        }
    }

    fn handle_keyboard_input(&mut self, event: &KeyEvent) {
        // Held keys only count once.
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        self.handle_key(KeyCode::from(&event.physical_key));
    }

    fn handle_key(&mut self, keycode: KeyCode) {
        if let Some(command) = self.keybindings.get(&keycode) {
            self.push(*command);
        }
    }

    fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    /// Takes every command received since the previous call, oldest first.
    pub fn drain(&mut self) -> Vec<Command> {
        self.pending.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_letters_and_arrows() {
        let mut input = InputHandler::new();
        for key in [
            WinitKeyCode::KeyA,
            WinitKeyCode::ArrowRight,
            WinitKeyCode::KeyR,
            WinitKeyCode::KeyQ,
            WinitKeyCode::ArrowLeft,
            WinitKeyCode::KeyD,
        ] {
            input.handle_key(KeyCode::from(&PhysicalKey::Code(key)));
        }

        assert_eq!(
            input.drain(),
            vec![
                Command::MoveLeft,
                Command::MoveRight,
                Command::KeyR,
                Command::KeyQ,
                Command::MoveLeft,
                Command::MoveRight,
            ]
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut input = InputHandler::new();
        input.handle_key(KeyCode::from(&PhysicalKey::Code(WinitKeyCode::Space)));
        input.handle_key(KeyCode::Any);
        assert!(input.drain().is_empty());
    }

    #[test]
    fn close_request_becomes_quit() {
        let mut input = InputHandler::new();
        input.handle_window_event(&WindowEvent::CloseRequested);
        input.handle_window_event(&WindowEvent::Focused(true));
        assert_eq!(input.drain(), vec![Command::Quit]);
    }

    #[test]
    fn drain_empties_the_queue() {
        let mut input = InputHandler::new();
        input.handle_key(KeyCode::A);
        assert_eq!(input.drain().len(), 1);
        assert!(input.drain().is_empty());
    }
}
