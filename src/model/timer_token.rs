/// Cancellation token for the round countdown. `start_round` arms a fresh
/// generation; any round end bumps it, so a tick scheduled before the round
/// ended arrives with a dead token and is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    generation: u64,
}

impl TimerToken {
    pub(crate) fn new(generation: u64) -> Self {
        Self { generation }
    }

    pub(crate) fn matches(&self, generation: u64) -> bool {
        self.generation == generation
    }
}
