//! Input commands
//!
//! Device callbacks never touch the world directly. They enqueue commands
//! here and the next tick drains them in arrival order.

use std::collections::VecDeque;

/// A single player intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Left direction pressed or released
    SetLeft(bool),
    /// Right direction pressed or released
    SetRight(bool),
    /// Start, jump or restart depending on phase
    JumpTrigger,
}

/// FIFO of commands waiting for the next tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: VecDeque<InputCommand>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: InputCommand) {
        self.pending.push_back(command);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Take every pending command, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = InputCommand> + '_ {
        self.pending.drain(..)
    }
}

impl Extend<InputCommand> for InputQueue {
    fn extend<T: IntoIterator<Item = InputCommand>>(&mut self, iter: T) {
        self.pending.extend(iter);
    }
}

impl FromIterator<InputCommand> for InputQueue {
    fn from_iter<T: IntoIterator<Item = InputCommand>>(iter: T) -> Self {
        Self {
            pending: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut queue = InputQueue::new();
        queue.push(InputCommand::SetRight(true));
        queue.push(InputCommand::JumpTrigger);
        queue.push(InputCommand::SetRight(false));
        assert_eq!(queue.len(), 3);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                InputCommand::SetRight(true),
                InputCommand::JumpTrigger,
                InputCommand::SetRight(false),
            ]
        );
        assert!(queue.is_empty());
    }
}
