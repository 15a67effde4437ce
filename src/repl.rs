//! Interactive read-eval-print loop.

use crate::assistant::Assistant;
use anyhow::Result;
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Printed once when the session starts.
pub const WELCOME_MESSAGE: &str = "Welcome to the assistant bot!";

/// Run the assistant over `input` until `exit`, `close`, or end of input.
///
/// Every reply is written to `output` on its own line, preceded by the
/// configured prompt.
pub fn run<R: BufRead, W: Write>(assistant: &mut Assistant, mut input: R, mut output: W) -> Result<()> {
    writeln!(output, "{}", WELCOME_MESSAGE)?;
    info!("Session started");

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", assistant.config().prompt)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            info!("Input closed, ending session");
            break;
        }

        // Undecodable bytes become U+FFFD instead of ending the session
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            warn!("Input line was not valid UTF-8");
        }

        let reply = assistant.handle_line(&line);
        writeln!(output, "{}", reply.text())?;

        if reply.is_exit() {
            info!("Session ended by user");
            break;
        }
    }

    output.flush()?;
    Ok(())
}
