//! Blocking session loop
//!
//! Pulls guesses from a [`GuessSource`], feeds them through a [`Session`], and
//! reports every step to a [`FeedbackSink`].

use super::state::{GuessError, Session, SessionState};
use super::{FeedbackSink, GuessSource, SessionOutcome};
use crate::config::GameConfig;
use crate::core::Word;
use std::io;
use tracing::{debug, info};

/// Play one session to completion
///
/// Malformed guesses are reported to `output` and re-requested on the same
/// attempt, with no limit. The loop blocks on `input` and has no timeout. On a
/// loss the hidden word is handed to the caller-supplied `output` sink and
/// returned in the outcome.
///
/// # Errors
///
/// Returns an I/O error if reading input or writing feedback fails.
pub fn run_session<G, F>(
    hidden: Word,
    config: &GameConfig,
    input: &mut G,
    output: &mut F,
) -> io::Result<SessionOutcome>
where
    G: GuessSource + ?Sized,
    F: FeedbackSink + ?Sized,
{
    let mut session = Session::new(hidden, config);

    while session.state() == SessionState::AwaitingGuess {
        let attempt = session.attempt();
        output.attempt_started(attempt)?;

        loop {
            let Some(line) = input.next_guess(attempt)? else {
                info!(attempt, "input closed before the session ended");
                return Ok(SessionOutcome::Abandoned {
                    attempts_used: attempt - 1,
                });
            };

            match session.submit(&line) {
                Ok(result) => {
                    output.evaluation(attempt, &result)?;
                    break;
                }
                Err(GuessError::InvalidGuessFormat(err)) => {
                    debug!(attempt, input = %line.trim(), %err, "rejected guess");
                    output.invalid_guess(&line, &err)?;
                }
                Err(GuessError::SessionOver) => break,
            }
        }
    }

    let attempts = session.attempt();
    if session.state() == SessionState::Won {
        info!(attempts, "hidden word guessed");
        let message = config.messages.message_for(attempts);
        output.won(attempts, message, session.history())?;
        Ok(SessionOutcome::Won { attempts })
    } else {
        info!(attempts, "attempts exhausted");
        let hidden = session.hidden().clone();
        output.lost(&hidden)?;
        Ok(SessionOutcome::Lost { hidden })
    }
}
