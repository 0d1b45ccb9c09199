//! Match lifecycle: config handshake, then one decision pass per
//! deploy frame until the engine closes the channel.

use crate::engine::io::Channel;
use crate::engine::state::{FramePhase, TurnState};
use crate::engine::{UnitClass, UnitRoster};
use crate::strategy::orchestrator::{AgentState, TurnOrchestrator};
use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use std::io::{BufRead, Write};

/// Drive a full match over `channel`. Returns when the engine hangs up.
///
/// A turn whose snapshot fails to parse is contained: the turn's
/// decisions are skipped and an empty turn is submitted, because a
/// crashed agent forfeits the match while an idle one merely wastes a
/// turn. Cross-turn state survives such failures untouched.
pub fn run_match<R: BufRead, W: Write>(channel: &mut Channel<R, W>) -> Result<()> {
    // The seed is logged for reproducibility only; no decision path
    // currently samples from it.
    let seed: u64 = rand::random();
    info!("match seed {seed:#018x}");

    let config_line = channel
        .next_line()
        .context("reading match config")?
        .ok_or_else(|| anyhow!("engine closed the channel before sending a config"))?;
    let roster = UnitRoster::from_config_str(&config_line).context("resolving unit roster")?;
    let tower = roster.attrs(UnitClass::Destructor);
    info!(
        "roster resolved: destructor damage {} range {}",
        tower.damage, tower.range
    );

    let mut agent_state = AgentState::new(roster.starting_health());
    let mut orchestrator = TurnOrchestrator::new(&roster);

    while let Some(line) = channel.next_line().context("reading turn snapshot")? {
        match TurnState::parse(&roster, &line) {
            Ok(mut state) => match state.phase() {
                FramePhase::Deploy => {
                    orchestrator.decide(&mut state, &mut agent_state);
                    submit(channel, &state)?;
                    orchestrator.mark_submitted();
                    orchestrator.mark_awaiting();
                }
                FramePhase::Action => {
                    let turn = state.turn_number();
                    for breach in state.breaches() {
                        if !breach.by_us {
                            debug!("breached at {:?} on turn {turn}", breach.location);
                            agent_state.ledger.record(breach.location, turn);
                        }
                    }
                }
                FramePhase::EndOfRound => {
                    debug!("round {} complete", state.turn_number());
                }
            },
            Err(err) => {
                warn!("malformed snapshot, submitting an empty turn: {err}");
                channel.send_line("[]")?;
                channel.send_line("[]")?;
            }
        }
    }

    info!(
        "match over after {} recorded breaches, final threshold {}",
        agent_state.ledger.len(),
        agent_state.threshold.minimum()
    );
    Ok(())
}

fn submit<R: BufRead, W: Write>(
    channel: &mut Channel<R, W>,
    state: &TurnState<'_>,
) -> Result<()> {
    let (builds, deploys) = state.submission_lines();
    channel.send_line(&builds)?;
    channel.send_line(&deploys)?;
    Ok(())
}
