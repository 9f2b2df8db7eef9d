//! Keyboard commands understood by a running flow.

use crossterm::event::KeyCode;

/// What a key press asks the flow to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowCommand {
    Next,
    Back,
    Stop,
}

/// Map a key to a flow command. Unbound keys return `None` and fall through
/// to the application.
pub fn command_for_key(code: KeyCode) -> Option<FlowCommand> {
    match code {
        KeyCode::Right | KeyCode::Enter => Some(FlowCommand::Next),
        KeyCode::Left => Some(FlowCommand::Back),
        KeyCode::Esc => Some(FlowCommand::Stop),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_keys() {
        assert_eq!(command_for_key(KeyCode::Right), Some(FlowCommand::Next));
        assert_eq!(command_for_key(KeyCode::Enter), Some(FlowCommand::Next));
    }

    #[test]
    fn test_back_and_stop() {
        assert_eq!(command_for_key(KeyCode::Left), Some(FlowCommand::Back));
        assert_eq!(command_for_key(KeyCode::Esc), Some(FlowCommand::Stop));
    }

    #[test]
    fn test_unbound_keys_fall_through() {
        assert_eq!(command_for_key(KeyCode::Char('q')), None);
        assert_eq!(command_for_key(KeyCode::Up), None);
        assert_eq!(command_for_key(KeyCode::Tab), None);
    }
}
