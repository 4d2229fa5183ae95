//! Device input mapping
//!
//! Translates browser key names, on-screen button ids and canvas touches
//! into simulation commands. Kept free of web-sys so it can be tested
//! natively.

use crate::sim::InputCommand;

/// Height of the on-screen button strip at the bottom of the canvas
pub const CONTROL_STRIP_HEIGHT: f32 = 120.0;

/// On-screen touch/mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    Left,
    Right,
    Jump,
}

impl ControlButton {
    pub const ALL: [ControlButton; 3] = [ControlButton::Left, ControlButton::Right, ControlButton::Jump];

    /// DOM element id
    pub fn element_id(&self) -> &'static str {
        match self {
            ControlButton::Left => "leftBtn",
            ControlButton::Right => "rightBtn",
            ControlButton::Jump => "jumpBtn",
        }
    }

    /// Command for touchstart/mousedown
    pub fn press(&self) -> InputCommand {
        match self {
            ControlButton::Left => InputCommand::SetLeft(true),
            ControlButton::Right => InputCommand::SetRight(true),
            ControlButton::Jump => InputCommand::JumpTrigger,
        }
    }

    /// Command for touchend/mouseup (the jump button only fires on press)
    pub fn release(&self) -> Option<InputCommand> {
        match self {
            ControlButton::Left => Some(InputCommand::SetLeft(false)),
            ControlButton::Right => Some(InputCommand::SetRight(false)),
            ControlButton::Jump => None,
        }
    }
}

/// Command for a `keydown` event, by `KeyboardEvent.key`
pub fn key_down(key: &str) -> Option<InputCommand> {
    match key {
        " " | "ArrowUp" => Some(InputCommand::JumpTrigger),
        "ArrowLeft" => Some(InputCommand::SetLeft(true)),
        "ArrowRight" => Some(InputCommand::SetRight(true)),
        _ => None,
    }
}

/// Command for a `keyup` event
pub fn key_up(key: &str) -> Option<InputCommand> {
    match key {
        "ArrowLeft" => Some(InputCommand::SetLeft(false)),
        "ArrowRight" => Some(InputCommand::SetRight(false)),
        _ => None,
    }
}

/// Whether a key toggles the autopilot
pub fn is_autopilot_toggle(key: &str) -> bool {
    matches!(key, "i" | "I")
}

/// A touch on the canvas jumps unless it lands on the button strip
pub fn canvas_touch(y: f32, canvas_height: f32) -> Option<InputCommand> {
    (y < canvas_height - CONTROL_STRIP_HEIGHT).then_some(InputCommand::JumpTrigger)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_mapping() {
        assert_eq!(key_down(" "), Some(InputCommand::JumpTrigger));
        assert_eq!(key_down("ArrowUp"), Some(InputCommand::JumpTrigger));
        assert_eq!(key_down("ArrowLeft"), Some(InputCommand::SetLeft(true)));
        assert_eq!(key_up("ArrowRight"), Some(InputCommand::SetRight(false)));
        assert_eq!(key_down("a"), None);
        // Releasing jump does nothing
        assert_eq!(key_up(" "), None);
    }

    #[test]
    fn test_buttons() {
        assert_eq!(ControlButton::Jump.press(), InputCommand::JumpTrigger);
        assert_eq!(ControlButton::Jump.release(), None);
        assert_eq!(ControlButton::Left.release(), Some(InputCommand::SetLeft(false)));
        let ids: Vec<_> = ControlButton::ALL.iter().map(|b| b.element_id()).collect();
        assert_eq!(ids, vec!["leftBtn", "rightBtn", "jumpBtn"]);
    }

    #[test]
    fn test_canvas_touch_skips_button_strip() {
        assert_eq!(canvas_touch(100.0, 600.0), Some(InputCommand::JumpTrigger));
        assert_eq!(canvas_touch(479.0, 600.0), Some(InputCommand::JumpTrigger));
        assert_eq!(canvas_touch(480.0, 600.0), None);
        assert_eq!(canvas_touch(590.0, 600.0), None);
    }

    #[test]
    fn test_autopilot_toggle() {
        assert!(is_autopilot_toggle("i"));
        assert!(is_autopilot_toggle("I"));
        assert!(!is_autopilot_toggle(" "));
    }
}
