//! Stream assembly: collecting a fragmented byte stream into one buffer.
//!
//! A GPS receiver emits NMEA text in arbitrarily-sized bursts. The assembler
//! repeatedly pulls whatever the transport has available and appends it to a
//! caller-owned fixed-capacity buffer until either the buffer fills or the
//! empty-read budget runs out, leaving a contiguous text snapshot ready for
//! field extraction.

use crate::source::ByteSource;
use heapless::Vec;

/// Byte substituted for embedded NUL bytes in the incoming stream.
///
/// Receivers occasionally emit stray `0x00` bytes (power-up glitches, line
/// noise). They are rewritten to a carriage return so the assembled buffer
/// stays ordinary inter-sentence text and a NUL can never masquerade as a
/// terminator to downstream consumers.
pub const NUL_SUBSTITUTE: u8 = b'\r';

/// Largest chunk pulled from the transport in one read call.
pub const READ_CHUNK: usize = 64;

/// Observable outcome of one assembly pass.
///
/// The pass itself never fails; starvation and a legitimately idle stream
/// both end it with whatever was collected (possibly nothing).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AssemblyReport {
    /// Total bytes appended to the buffer during this pass.
    pub bytes_assembled: usize,
    /// The pass ended because the empty-read budget ran out (rather than
    /// because the buffer filled).
    pub attempts_exhausted: bool,
    /// At least one chunk was dropped because it would not fit; the buffer
    /// holds a prefix of the stream, not all of it.
    pub truncated: bool,
}

/// Run one assembly pass: fill `buffer` from `source`.
///
/// The buffer is cleared first; on return it holds everything collected
/// during this pass. Chunks are sanitized (NUL bytes rewritten to
/// [`NUL_SUBSTITUTE`]) before appending. A chunk that would overflow the
/// remaining capacity is dropped whole and flagged in the report instead of
/// being split; total buffer size is capped at the expense of losing that
/// data.
///
/// Reads that return `Ok(0)` or any error count against `max_attempts`,
/// with [`ByteSource::retry_delay`] awaited between them; reads that return
/// data do not. The pass terminates when the budget is exhausted or the
/// buffer is full.
pub async fn assemble<S: ByteSource, const C: usize>(
    source: &mut S,
    buffer: &mut Vec<u8, C>,
    max_attempts: u32,
) -> AssemblyReport {
    buffer.clear();

    let mut scratch = [0u8; READ_CHUNK];
    let mut attempts_left = max_attempts;
    let mut truncated = false;

    while attempts_left > 0 && !buffer.is_full() {
        match source.read(&mut scratch).await {
            Ok(n) if n > 0 => {
                let chunk = &mut scratch[..n];
                sanitize(chunk);
                if buffer.extend_from_slice(chunk).is_err() {
                    truncated = true;
                }
            }
            _ => {
                attempts_left -= 1;
                source.retry_delay().await;
            }
        }
    }

    AssemblyReport {
        bytes_assembled: buffer.len(),
        attempts_exhausted: attempts_left == 0,
        truncated,
    }
}

/// Rewrite embedded NUL bytes so the chunk is plain text throughout.
#[inline]
fn sanitize(chunk: &mut [u8]) {
    for byte in chunk.iter_mut() {
        if *byte == 0 {
            *byte = NUL_SUBSTITUTE;
        }
    }
}
