// src/core/replacer.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use std::str;

/// The encoding a file's bytes decoded under.
///
/// UTF-8 is always attempted first; Latin-1 (ISO-8859-1) is the fallback.
/// Latin-1 maps every byte to the codepoint of the same value, so the
/// fallback decode cannot fail and no third attempt exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
}

/// Decodes raw file bytes, reporting which encoding succeeded.
#[must_use]
pub fn decode(bytes: &[u8]) -> (String, TextEncoding) {
    match str::from_utf8(bytes) {
        Ok(text) => (text.to_owned(), TextEncoding::Utf8),
        Err(_) => (
            bytes.iter().map(|&b| char::from(b)).collect(),
            TextEncoding::Latin1,
        ),
    }
}

/// Encodes text back into the encoding it was read under.
///
/// A Latin-1 file whose replacement text introduced a codepoint above
/// U+00FF cannot be re-encoded as Latin-1; the text falls back to UTF-8
/// bytes instead, mirroring the single-step fallback used for reading.
#[must_use]
pub fn encode(text: &str, encoding: TextEncoding) -> Vec<u8> {
    match encoding {
        TextEncoding::Utf8 => text.as_bytes().to_vec(),
        TextEncoding::Latin1 => {
            let mut bytes = Vec::with_capacity(text.len());
            for ch in text.chars() {
                match u8::try_from(u32::from(ch)) {
                    Ok(byte) => bytes.push(byte),
                    Err(_) => return text.as_bytes().to_vec(),
                }
            }
            bytes
        }
    }
}

/// Replaces every non-overlapping literal occurrence of `old` in a file
/// with `new`, preserving the file's encoding.
///
/// The file is only written back when at least one occurrence was found;
/// otherwise it is left byte-for-byte untouched.
///
/// # Arguments
///
/// * `path` - The file to rewrite
/// * `old` - The literal substring to search for (not a pattern)
/// * `new` - The replacement text
///
/// # Returns
///
/// * `Ok(usize)` - The number of occurrences replaced. A file that could
///   not be read is reported on stdout and counts as zero occurrences.
///
/// # Errors
///
/// Returns an error only if the rewritten content cannot be written back
/// to disk.
#[inline]
pub fn replace_in_file(path: &Path, old: &str, new: &str) -> Result<usize> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            println!("Could not read {}: {err}", path.display());
            return Ok(0);
        }
    };

    let (content, encoding) = decode(&bytes);
    let count = content.matches(old).count();
    if count == 0 {
        return Ok(0);
    }

    let replaced = content.replace(old, new);
    fs::write(path, encode(&replaced, encoding))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(count)
}
