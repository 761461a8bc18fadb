use crate::{Error, Result};

/// Configuration for character-based chunking.
#[derive(Debug, Clone)]
pub struct ChunkConfig {
    /// Target chunk size in characters
    pub chunk_size: usize,
    /// Number of overlapping characters between consecutive chunks
    pub overlap: usize,
    /// How far past the nominal end a chunk may grow to reach a space
    pub slack: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            overlap: 200,
            slack: 200,
        }
    }
}

/// Compute the actual end of the window starting at `start`.
///
/// The nominal end is `start + chunk_size`. When that lands inside a word
/// and a space exists within `slack` characters of the nominal end, the
/// window extends to that space so words stay intact. Offsets are character
/// indices into `chars`, never byte positions.
pub fn window_end(chars: &[char], start: usize, chunk_size: usize, slack: usize) -> usize {
    let nominal = start + chunk_size;
    if nominal >= chars.len() {
        return chars.len();
    }
    if let Some(offset) = chars[nominal..].iter().position(|c| *c == ' ') {
        let space = nominal + offset;
        if space - start <= chunk_size + slack {
            return space;
        }
    }
    nominal
}

/// Split `text` into overlapping chunks of roughly `chunk_size` characters.
///
/// Texts at or below the chunk size come back as a single trimmed chunk.
/// Otherwise the cursor advances by `chunk_size - overlap` from each chunk's
/// *nominal* end, regardless of any word-boundary extension. The heuristic
/// is not sentence-aware and can slice mid-sentence.
///
/// `overlap >= chunk_size` would stall the cursor and loop forever, so such
/// configurations are rejected up front.
pub fn chunk_text(text: &str, config: &ChunkConfig) -> Result<Vec<String>> {
    if config.chunk_size == 0 {
        return Err(Error::Chunking("chunk_size must be non-zero".to_string()));
    }
    if config.overlap >= config.chunk_size {
        return Err(Error::Chunking(format!(
            "overlap ({}) must be smaller than chunk_size ({})",
            config.overlap, config.chunk_size
        )));
    }

    let text = text.trim();
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= config.chunk_size {
        return Ok(vec![text.to_string()]);
    }

    let mut chunks = Vec::new();
    let mut start = 0usize;
    while start < chars.len() {
        let nominal = start + config.chunk_size;
        let end = window_end(&chars, start, config.chunk_size, config.slack);
        let chunk: String = chars[start..end].iter().collect();
        let chunk = chunk.trim();
        if !chunk.is_empty() {
            chunks.push(chunk.to_string());
        }
        // Advance from the nominal end; clamped so the cursor never goes
        // negative. overlap < chunk_size guarantees forward progress.
        start = nominal.saturating_sub(config.overlap);
    }

    Ok(chunks)
}
