//! Writing wordlists to disk.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::Wordlist;

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Failed to write wordlist to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes one entry per line to `writer`.
pub fn write_wordlist_to<W: Write>(wordlist: &Wordlist, writer: W) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for word in wordlist.iter() {
        writeln!(writer, "{}", word)?;
    }
    writer.flush()
}

/// Writes the wordlist to `path`, replacing any existing file.
///
/// An empty wordlist produces an empty file. Returns the number of entries
/// written.
///
/// # Errors
///
/// Returns [`WordlistError::Write`] with the path when the file cannot be
/// created or written.
pub fn write_wordlist<P: AsRef<Path>>(wordlist: &Wordlist, path: P) -> Result<usize, WordlistError> {
    let path = path.as_ref();
    let to_error = |source| WordlistError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    write_wordlist_to(wordlist, file).map_err(to_error)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Exported {} entries to {}", wordlist.len(), path.display());

    Ok(wordlist.len())
}
