use std::io::{Read, Write};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::models::{Language, UserConfig};
use super::{BuildOutput, Builder, Execution, Executor};

const POLL_INTERVAL: Duration = Duration::from_millis(10);
/// How long captured output may keep draining once a time-limited process is gone.
const DRAIN_GRACE: Duration = Duration::from_millis(250);

/// Builds solutions with the system compilers.
#[derive(Debug, Clone)]
pub struct Toolchain {
    cpp_flags: Vec<String>,
    c_flags: Vec<String>,
    rust_flags: Vec<String>,
}

impl Toolchain {
    pub fn from_config(config: &UserConfig) -> Self {
        Self {
            cpp_flags: config.flags_for(Language::Cpp).to_vec(),
            c_flags: config.flags_for(Language::C).to_vec(),
            rust_flags: config.flags_for(Language::Rs).to_vec(),
        }
    }

    fn flags(&self, language: Language) -> &[String] {
        match language {
            Language::Cpp => &self.cpp_flags,
            Language::C => &self.c_flags,
            Language::Rs => &self.rust_flags,
        }
    }

    fn command(&self, source: &Path, language: Language, executable: &Path) -> Command {
        let mut cmd = Command::new(language.compiler());
        cmd.args(self.flags(language)).arg(source).arg("-o").arg(executable);
        cmd
    }
}

impl Builder for Toolchain {
    fn build(&self, source: &Path, language: Language, executable: &Path) -> Result<BuildOutput> {
        let mut cmd = self.command(source, language, executable);
        log::debug!("building with {:?}", cmd);

        let output = cmd.output().map_err(|source| Error::Spawn {
            command: language.compiler().to_string(),
            source,
        })?;

        Ok(BuildOutput {
            success: output.status.success(),
            diagnostics: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Spawns the built solution as a child process, one case at a time.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor {
    timeout: Option<Duration>,
}

impl ProcessExecutor {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

impl Executor for ProcessExecutor {
    fn execute(&self, executable: &Path, stdin: &[u8]) -> Result<Execution> {
        let started = Instant::now();
        let mut child = Command::new(executable)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| Error::Spawn {
                command: executable.display().to_string(),
                source,
            })?;

        // Not joined: the solution may exit without consuming its input.
        spawn_writer(child.stdin.take(), stdin.to_vec());
        let stdout = spawn_reader(child.stdout.take());
        let stderr = spawn_reader(child.stderr.take());

        let (status, timed_out) = match self.timeout {
            Some(limit) => wait_with_deadline(&mut child, started, limit)?,
            None => (child.wait()?, false),
        };
        let elapsed = started.elapsed();

        // A forked grandchild can hold the pipes open past the kill, so with a
        // limit set the drain is bounded too.
        let drain_until = self.timeout.map(|_| Instant::now() + DRAIN_GRACE);
        let stdout = collect(stdout, drain_until);
        let stderr = collect(stderr, drain_until);

        Ok(Execution {
            stdout: String::from_utf8_lossy(&stdout).to_string(),
            stderr: String::from_utf8_lossy(&stderr).to_string(),
            status: status.code(),
            timed_out,
            elapsed,
        })
    }
}

fn spawn_writer<W: Write + Send + 'static>(pipe: Option<W>, data: Vec<u8>) {
    thread::spawn(move || {
        if let Some(mut pipe) = pipe {
            let _ = pipe.write_all(&data);
        }
    });
}

fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        let _ = tx.send(buf);
    });
    rx
}

fn collect(rx: Receiver<Vec<u8>>, until: Option<Instant>) -> Vec<u8> {
    match until {
        Some(until) => rx
            .recv_timeout(until.saturating_duration_since(Instant::now()))
            .unwrap_or_default(),
        None => rx.recv().unwrap_or_default(),
    }
}

fn wait_with_deadline(
    child: &mut Child,
    started: Instant,
    limit: Duration,
) -> Result<(ExitStatus, bool)> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok((status, false));
        }
        if started.elapsed() >= limit {
            log::warn!("killing process {} after {:?}", child.id(), limit);
            // It may have exited between the poll and the kill.
            let _ = child.kill();
            return Ok((child.wait()?, true));
        }
        thread::sleep(POLL_INTERVAL);
    }
}
