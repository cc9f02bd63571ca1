use crate::{
    config::GameConfig,
    journal::{InputJournal, InputPayload},
    session::Session,
    types::{AdvanceStopReason, RunOutcome},
};

/// Ticks simulated per `advance` call while replaying. Any value works;
/// this just bounds how much one loop iteration does.
pub const REPLAY_STEP_BUDGET: u32 = 512;

#[derive(Debug, PartialEq, Eq)]
pub enum ReplayError {
    /// The journal was recorded under a different ruleset.
    ContentHashMismatch { expected: u64, found: u64 },
    /// The journal ran out of moves before the run finished.
    MissingInput { at_seq: u64 },
    /// The session refused a step the journal implies was accepted.
    RejectedInput { seq: u64 },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_outcome: RunOutcome,
    pub final_level: u32,
    pub final_tick: u64,
    pub final_snapshot_hash: u64,
}

/// Replay the journal's recorded moves and hand back the live session,
/// stopped where the journal ends. Moves are fed in at each input stop
/// and level resets are re-derived at each completed level, so only
/// accepted moves need to have been recorded. Crash recovery resumes
/// play from the returned session.
pub fn replay_journal_inputs(
    config: &GameConfig,
    journal: &InputJournal,
) -> Result<Session, ReplayError> {
    let found = config.content_hash();
    if journal.content_hash != found {
        return Err(ReplayError::ContentHashMismatch { expected: journal.content_hash, found });
    }

    let mut session = Session::new(journal.seed, config.clone());
    let mut consumed = 0usize;

    loop {
        let batch = session.advance(REPLAY_STEP_BUDGET);
        match batch.stop_reason {
            AdvanceStopReason::Finished(_) => return Ok(session),
            AdvanceStopReason::AwaitingInput => {
                let Some(record) = journal.inputs.get(consumed) else {
                    return Ok(session);
                };
                let InputPayload::Move { direction } = record.payload;
                if session.submit_move(direction).is_err() {
                    return Err(ReplayError::RejectedInput { seq: record.seq });
                }
                consumed += 1;
            }
            AdvanceStopReason::LevelComplete { .. } => {
                if session.reset_level().is_err() {
                    return Err(ReplayError::RejectedInput { seq: consumed as u64 });
                }
            }
            AdvanceStopReason::BudgetExhausted => {}
        }
    }
}

/// Replay a complete run. The journal must carry every move through to
/// the session's end; running dry beforehand is `MissingInput`.
pub fn replay_to_end(
    config: &GameConfig,
    journal: &InputJournal,
) -> Result<ReplayResult, ReplayError> {
    let session = replay_journal_inputs(config, journal)?;
    match session.outcome() {
        Some(outcome) => Ok(ReplayResult {
            final_outcome: outcome,
            final_level: session.level(),
            final_tick: session.current_tick(),
            final_snapshot_hash: session.snapshot_hash(),
        }),
        None => Err(ReplayError::MissingInput { at_seq: journal.inputs.len() as u64 }),
    }
}
