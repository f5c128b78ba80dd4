//! Bounded conversation memory
//!
//! One instance per chat session, discarded when the session ends. Keeping
//! only the most recent turns caps prompt growth on long conversations.

use std::collections::VecDeque;

use crate::ConversationTurn;

#[derive(Debug, Clone)]
pub struct ChatMemory {
    turns: VecDeque<ConversationTurn>,
    max_turns: usize,
}

impl ChatMemory {
    pub fn new(max_turns: usize) -> Self {
        Self {
            turns: VecDeque::with_capacity(max_turns),
            max_turns,
        }
    }

    /// Append a completed exchange, evicting the oldest turn once full.
    /// Callers only push after the answer arrived; a failed question never
    /// lands here.
    pub fn push(&mut self, turn: ConversationTurn) {
        if self.max_turns == 0 {
            return;
        }
        while self.turns.len() >= self.max_turns {
            self.turns.pop_front();
        }
        self.turns.push_back(turn);
    }

    /// Recent turns, oldest first.
    pub fn turns(&self) -> Vec<ConversationTurn> {
        self.turns.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(n: usize) -> ConversationTurn {
        ConversationTurn::new(format!("q{}", n), format!("a{}", n))
    }

    #[test]
    fn never_exceeds_bound() {
        let mut memory = ChatMemory::new(3);
        for n in 0..10 {
            memory.push(turn(n));
            assert!(memory.len() <= 3);
        }
        assert_eq!(memory.len(), 3);
    }

    #[test]
    fn evicts_oldest_first() {
        let mut memory = ChatMemory::new(2);
        memory.push(turn(1));
        memory.push(turn(2));
        memory.push(turn(3));

        let turns = memory.turns();
        assert_eq!(turns[0].question, "q2");
        assert_eq!(turns[1].question, "q3");
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut memory = ChatMemory::new(0);
        memory.push(turn(1));
        assert!(memory.is_empty());
    }

    #[test]
    fn clear_empties_the_session() {
        let mut memory = ChatMemory::new(4);
        memory.push(turn(1));
        memory.push(turn(2));
        memory.clear();
        assert!(memory.is_empty());
    }
}
