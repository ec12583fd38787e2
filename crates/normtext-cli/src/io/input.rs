use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};

/// Read raw bytes from a path, or from stdin when the argument is `-`.
///
/// Bytes are passed through undecoded; encoding resolution happens in the
/// core library so file input exercises the same byte path as library
/// callers.
pub fn read_bytes(input: &str) -> Result<Vec<u8>> {
    if input == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }

    fs::read(input).with_context(|| format!("failed to read {input}"))
}
