//! Clipboard integration.

use crate::data::Record;
use crate::error::Result;
use arboard::Clipboard;

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Copy a record's link to clipboard.
pub fn copy_record_link(record: &Record) -> Result<()> {
    copy_to_clipboard(&record.url)
}
