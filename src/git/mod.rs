pub mod blame_parser;
pub mod log_parser;

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{Result, StewardError};

const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs `git <args>` inside `repo` and returns its stdout as text,
/// enforcing a wall-clock deadline on the subprocess.
///
/// Both pipes are drained on helper threads so a chatty subprocess cannot
/// fill its pipe buffer and deadlock while we poll for exit.
pub fn run_git(repo: &Path, args: &[&str], timeout: Duration) -> Result<String> {
    let command = args.first().copied().unwrap_or("git").to_string();

    let mut child = Command::new("git")
        .args(args)
        .current_dir(repo)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| StewardError::GitInvocation(format!("could not run git: {e}")))?;

    let stdout_reader = drain_pipe(child.stdout.take());
    let stderr_reader = drain_pipe(child.stderr.take());

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {}
            Err(e) => {
                return Err(StewardError::GitInvocation(format!(
                    "could not wait on git {command}: {e}"
                )))
            }
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Err(StewardError::GitTimeout {
                command,
                seconds: timeout.as_secs(),
            });
        }
        thread::sleep(EXIT_POLL_INTERVAL);
    };

    let stdout = stdout_reader.join().unwrap_or_default();
    let stderr = stderr_reader.join().unwrap_or_default();

    if !status.success() {
        let detail = String::from_utf8_lossy(&stderr).trim().to_string();
        return Err(StewardError::GitInvocation(format!("git {command}: {detail}")));
    }

    Ok(String::from_utf8_lossy(&stdout).into_owned())
}

fn drain_pipe<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

/// Lists the tracked files under `target`, one repo-relative path per line.
/// Used to expand a folder target into blameable files.
pub fn list_tracked_files(repo: &Path, target: &str, timeout: Duration) -> Result<Vec<String>> {
    let out = run_git(repo, &["ls-files", "--", target], timeout)?;
    Ok(out
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}
