//! Best-effort Japanese text-to-speech through whatever synthesizer the
//! platform ships. Nothing here reports failure to the caller: when no
//! synthesizer is found the speaker is simply unsupported and the UI hides
//! the affordance.

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

const WATCH_INTERVAL: Duration = Duration::from_millis(50);

pub trait Speaker {
    /// Fire-and-forget; any utterance in flight is cancelled first
    fn speak(&self, text: &str);
    fn is_supported(&self) -> bool;
    fn is_speaking(&self) -> bool;
}

/// Speaker for platforms without a synthesizer
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn speak(&self, _text: &str) {}

    fn is_supported(&self) -> bool {
        false
    }

    fn is_speaking(&self) -> bool {
        false
    }
}

/// External synthesizer invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechCommand {
    pub program: PathBuf,
    /// arguments placed before the text
    pub args: Vec<String>,
}

impl SpeechCommand {
    /// Find a synthesizer with a Japanese voice on `PATH`, spoken slowly
    pub fn detect() -> Option<Self> {
        let path = env::var_os("PATH")?;
        let dirs: Vec<PathBuf> = env::split_paths(&path).collect();

        let candidates: [(&str, &[&str]); 3] = [
            ("say", &["-v", "Kyoko", "-r", "90"]),
            ("espeak-ng", &["-v", "ja", "-s", "80"]),
            ("espeak", &["-v", "ja", "-s", "80"]),
        ];

        candidates.iter().find_map(|(name, args)| {
            find_in_dirs(name, &dirs).map(|program| SpeechCommand {
                program,
                args: args.iter().map(|a| a.to_string()).collect(),
            })
        })
    }
}

fn find_in_dirs(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file() || path.with_extension("exe").is_file()
}

#[derive(Debug, Default)]
struct Utterance {
    child: Option<Child>,
    generation: u64,
}

/// Speaks by spawning a synthesizer process per utterance
#[derive(Debug)]
pub struct CommandSpeaker {
    command: Option<SpeechCommand>,
    speaking: Arc<AtomicBool>,
    current: Arc<Mutex<Utterance>>,
    generation: AtomicU64,
}

impl CommandSpeaker {
    /// Detect the platform synthesizer once
    pub fn detect() -> Self {
        let command = SpeechCommand::detect();
        match &command {
            Some(cmd) => log::info!("speech available via {}", cmd.program.display()),
            None => log::info!("no speech synthesizer found, speech disabled"),
        }
        Self::with_command(command)
    }

    pub fn with_command(command: Option<SpeechCommand>) -> Self {
        Self {
            command,
            speaking: Arc::new(AtomicBool::new(false)),
            current: Arc::new(Mutex::new(Utterance::default())),
            generation: AtomicU64::new(0),
        }
    }

    pub fn cancel(&self) {
        if let Some(mut child) = self.utterance().child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
        self.speaking.store(false, Ordering::SeqCst);
    }

    /// Utterance slot, usable even after a thread panicked while holding it
    fn utterance(&self) -> MutexGuard<'_, Utterance> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn watch(&self, generation: u64) {
        let speaking = Arc::clone(&self.speaking);
        let current = Arc::clone(&self.current);

        thread::spawn(move || loop {
            {
                let mut utterance = current.lock().unwrap_or_else(PoisonError::into_inner);
                // superseded by a newer utterance which owns the flag now
                if utterance.generation != generation {
                    break;
                }
                let finished = match utterance.child.as_mut() {
                    Some(child) => match child.try_wait() {
                        Ok(Some(status)) => {
                            if !status.success() {
                                log::debug!("speech exited with {status}");
                            }
                            true
                        }
                        Ok(None) => false,
                        Err(err) => {
                            log::warn!("lost track of speech process: {err}");
                            true
                        }
                    },
                    None => true,
                };
                if finished {
                    utterance.child = None;
                    speaking.store(false, Ordering::SeqCst);
                    break;
                }
            }
            thread::sleep(WATCH_INTERVAL);
        });
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&self, text: &str) {
        let Some(command) = &self.command else {
            return;
        };
        self.cancel();

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let spawned = Command::new(&command.program)
            .args(&command.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => {
                let mut current = self.utterance();
                current.child = Some(child);
                current.generation = generation;
                self.speaking.store(true, Ordering::SeqCst);
                drop(current);
                self.watch(generation);
            }
            Err(err) => {
                log::warn!("unable to start {}: {err}", command.program.display());
                self.speaking.store(false, Ordering::SeqCst);
            }
        }
    }

    fn is_supported(&self) -> bool {
        self.command.is_some()
    }

    fn is_speaking(&self) -> bool {
        self.speaking.load(Ordering::SeqCst)
    }
}

impl Drop for CommandSpeaker {
    fn drop(&mut self) {
        self.cancel();
    }
}
