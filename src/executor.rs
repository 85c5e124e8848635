use anyhow::{Result, bail};
use std::process::{Command, Stdio};

/// Spawn a catalog command detached from the launcher. Placeholder
/// tokens were already stripped at parse time, so the stored string is
/// invoked as-is. A successful spawn is the "command executed" event
/// the usage cache records.
pub fn launch(exec: &str) -> Result<()> {
    let mut parts = exec.split_whitespace();
    let Some(program) = parts.next() else {
        bail!("refusing to launch an empty command");
    };

    Command::new(program)
        .args(parts)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    Ok(())
}
