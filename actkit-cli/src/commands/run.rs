//! Run command implementation.
//!
//! This module implements the `run` command. The child's stdout and stderr
//! are passed through unchanged while the last few KiB of both streams are
//! kept in a shared [`TailRing`]. When the child fails, that tail is printed
//! again at the end of the step log so the cause is visible without
//! scrolling.

use crate::error::CliError;
use crate::utils::{publish_output, GlobalOptions};
use actkit::{parse_uint_env, ProcessEnv, TailRing, Tee};
use clap::Args;
use std::io::{self, Read, Write};
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Environment variable overriding the default tail size.
pub const TAIL_KB_VAR: &str = "ACTKIT_TAIL_KB";

/// Tail size in KiB when neither the flag nor the variable is set.
pub const DEFAULT_TAIL_KB: usize = 64;

/// Run a command, keeping the tail of its output.
#[derive(Args)]
pub struct RunCommand {
    /// KiB of output to keep [default: $ACTKIT_TAIL_KB or 64]
    #[arg(long, value_name = "KIB")]
    pub tail_kb: Option<usize>,

    /// Publish the captured tail under this output name
    #[arg(long, value_name = "NAME")]
    pub output: Option<String>,

    /// Command to run, with its arguments
    #[arg(
        value_name = "COMMAND",
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl RunCommand {
    /// Execute the run command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let tail_kb = match self.tail_kb {
            Some(0) => {
                return Err(CliError::InvalidArguments(
                    "--tail-kb must be at least 1".to_string(),
                ))
            }
            Some(kb) => kb,
            None => parse_uint_env(&ProcessEnv, TAIL_KB_VAR, DEFAULT_TAIL_KB),
        };

        let Some((program, args)) = self.command.split_first() else {
            return Err(CliError::InvalidArguments("no command given".to_string()));
        };

        let ring = Arc::new(TailRing::with_kib(tail_kb));
        log::info!("running {program} (keeping last {tail_kb} KiB of output)");

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| CliError::Io(io::Error::new(e.kind(), format!("{program}: {e}"))))?;

        let relays = [
            child
                .stdout
                .take()
                .map(|out| relay(out, io::stdout(), Arc::clone(&ring))),
            child
                .stderr
                .take()
                .map(|err| relay(err, io::stderr(), Arc::clone(&ring))),
        ];

        let status = child.wait()?;
        for handle in relays.into_iter().flatten() {
            handle
                .join()
                .map_err(|_| CliError::Io(io::Error::other("output relay thread panicked")))??;
        }

        let tail = ring.to_string_lossy();

        if !status.success() && !global.quiet && !tail.is_empty() {
            report_tail(&tail, ring.capacity());
        }

        if let Some(name) = &self.output {
            publish_output(name, tail.trim_end_matches('\n'))?;
        }

        if status.success() {
            Ok(())
        } else {
            Err(CliError::ChildFailed {
                program: program.clone(),
                code: status.code(),
            })
        }
    }
}

/// Copy `reader` into `dst` on a background thread, teeing into `ring`.
fn relay<R, W>(mut reader: R, dst: W, ring: Arc<TailRing>) -> JoinHandle<io::Result<u64>>
where
    R: Read + Send + 'static,
    W: Write + Send + 'static,
{
    thread::spawn(move || {
        let mut tee = Tee::new(Some(dst), ring);
        let copied = io::copy(&mut reader, &mut tee)?;
        tee.flush()?;
        Ok(copied)
    })
}

fn report_tail(tail: &str, limit: usize) {
    let mut stderr = io::stderr().lock();
    // Write errors on stderr are ignored.
    let _ = writeln!(stderr, "----- last {limit} bytes of output -----");
    let _ = stderr.write_all(tail.as_bytes());
    if !tail.ends_with('\n') {
        let _ = writeln!(stderr);
    }
    let _ = writeln!(stderr, "----- end of output -----");
}
