//! Clipboard helper for copying the composed message
//!
//! Uses `arboard` for cross-platform support. A fresh clipboard handle is
//! created per copy so no resource is held between actions. Fails on
//! headless setups without a display server; the caller decides how to
//! surface that.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Write text to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}
