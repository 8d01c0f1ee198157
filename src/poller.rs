//! Background thread that keeps the song panel fresh.
//!
//! The thread polls `playerctl` right away and then once per interval. It
//! also runs player control commands so the UI thread never waits on a
//! subprocess; each command is followed by an immediate refresh.

use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::playerctl::{PlayerCommand, Playerctl, PlayerctlError};
use crate::song::{FieldWidths, NowPlaying};

#[derive(Debug)]
pub enum PollerCmd {
    /// Poll now instead of waiting for the next tick.
    Refresh,
    /// Forward a control command to the player, then refresh.
    Control(PlayerCommand),
    /// Stop the thread.
    Stop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollUpdate {
    NowPlaying(NowPlaying),
    ControlFailed {
        command: PlayerCommand,
        message: String,
    },
}

pub struct Poller {
    tx: Sender<PollerCmd>,
    join: Option<JoinHandle<()>>,
}

impl Poller {
    /// Start the poller thread. Updates arrive on the returned receiver.
    pub fn spawn(
        playerctl: Playerctl,
        widths: FieldWidths,
        interval: Duration,
    ) -> io::Result<(Self, Receiver<PollUpdate>)> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<PollerCmd>();
        let (update_tx, update_rx) = mpsc::channel::<PollUpdate>();

        let join = thread::Builder::new()
            .name("playerctl-poller".to_string())
            .spawn(move || poll_loop(&playerctl, widths, interval, &cmd_rx, &update_tx))?;

        Ok((
            Self {
                tx: cmd_tx,
                join: Some(join),
            },
            update_rx,
        ))
    }

    pub fn send(&self, cmd: PollerCmd) -> Result<(), mpsc::SendError<PollerCmd>> {
        self.tx.send(cmd)
    }

    /// Ask the thread to stop and wait for it.
    pub fn stop(&mut self) {
        let _ = self.tx.send(PollerCmd::Stop);
        if let Some(h) = self.join.take() {
            let _ = h.join();
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}

fn poll_loop(
    playerctl: &Playerctl,
    widths: FieldWidths,
    interval: Duration,
    rx: &Receiver<PollerCmd>,
    tx: &Sender<PollUpdate>,
) {
    info!(player = ?playerctl.player(), ?interval, "poller started");
    let mut next_tick = Instant::now();

    loop {
        if Instant::now() >= next_tick {
            let update = PollUpdate::NowPlaying(poll_once(playerctl, widths));
            if tx.send(update).is_err() {
                break;
            }
            next_tick = Instant::now() + interval;
        }

        match rx.recv_timeout(next_tick.saturating_duration_since(Instant::now())) {
            Ok(PollerCmd::Refresh) => next_tick = Instant::now(),
            Ok(PollerCmd::Control(command)) => {
                debug!(%command, "sending player command");
                if let Err(e) = playerctl.send(command) {
                    log_failure(&e);
                    warn!(%command, error = %e, "player command failed");
                    let failed = PollUpdate::ControlFailed {
                        command,
                        message: e.to_string(),
                    };
                    if tx.send(failed).is_err() {
                        break;
                    }
                }
                next_tick = Instant::now();
            }
            Ok(PollerCmd::Stop) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
    }

    info!("poller stopped");
}

/// One tick: errors from the external tool become `NowPlaying::Error`.
fn poll_once(playerctl: &Playerctl, widths: FieldWidths) -> NowPlaying {
    match playerctl.song_info(widths) {
        Ok(now_playing) => now_playing,
        Err(e) => {
            log_failure(&e);
            NowPlaying::Error(e.to_string())
        }
    }
}

fn log_failure(e: &PlayerctlError) {
    match e {
        PlayerctlError::Spawn { binary, source } => {
            debug!(%binary, error = %source, "could not start playerctl");
        }
        PlayerctlError::Failed {
            binary,
            args,
            status,
            stderr,
        } => {
            debug!(%binary, %args, %status, %stderr, "playerctl exited unsuccessfully");
        }
    }
}
