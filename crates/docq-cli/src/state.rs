//! Chat session state machine
//!
//! The UI accepts exactly one in-flight question: input is only read in
//! `Idle`, submitting moves to `AwaitingAnswer`, and both success and
//! failure land back in `Idle`. Keeping the transition as a pure function
//! leaves the rendering code free of state logic.

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    /// Ready for the next question.
    Idle,
    /// A question is in flight; input is disabled.
    AwaitingAnswer,
}

/// Everything that can happen to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatEvent {
    Submitted,
    Answered,
    Failed,
}

impl ChatState {
    /// The single transition function. Events that make no sense in the
    /// current state leave it unchanged.
    pub fn transition(self, event: ChatEvent) -> ChatState {
        match (self, event) {
            (ChatState::Idle, ChatEvent::Submitted) => ChatState::AwaitingAnswer,
            (ChatState::AwaitingAnswer, ChatEvent::Answered) => ChatState::Idle,
            (ChatState::AwaitingAnswer, ChatEvent::Failed) => ChatState::Idle,
            (state, _) => state,
        }
    }

    pub fn accepts_input(self) -> bool {
        self == ChatState::Idle
    }
}
