//! SentenceReader: sequences stream assembly and field extraction.

use crate::assembler::{assemble, AssemblyReport};
use crate::source::ByteSource;
use heapless::Vec;
use nmea_proto::{extract_field, ExtractError, SentenceKind};

/// Reads a GPS byte stream and serves raw sentence fields out of it.
///
/// The reader owns a [`ByteSource`], the accumulation buffer (capacity `C`),
/// and the empty-read budget. One [`poll`](Self::poll) runs one assembly
/// pass; any number of [`extract`](Self::extract) calls can then pick fields
/// out of the assembled snapshot without touching the transport again.
///
/// # Error Handling
///
/// Assembly never fails; an incomplete stream simply surfaces as
/// [`ExtractError::SentenceNotFound`] at extraction time. Polling again to
/// collect more data and re-extracting is the caller's policy.
pub struct SentenceReader<S, const C: usize> {
    source: S,
    buffer: Vec<u8, C>,
    max_attempts: u32,
    last_report: AssemblyReport,
}

impl<S: ByteSource, const C: usize> SentenceReader<S, C> {
    /// Create a new reader over a byte source.
    ///
    /// `max_attempts` is the empty-read budget of each assembly pass.
    pub fn new(source: S, max_attempts: u32) -> Self {
        Self {
            source,
            buffer: Vec::new(),
            max_attempts,
            last_report: AssemblyReport::default(),
        }
    }

    /// Run one assembly pass, replacing the buffered snapshot.
    pub async fn poll(&mut self) -> AssemblyReport {
        let report = assemble(&mut self.source, &mut self.buffer, self.max_attempts).await;
        self.last_report = report;
        report
    }

    /// Extract one field from the currently assembled snapshot.
    ///
    /// Does not touch the transport; the snapshot is whatever the most
    /// recent [`poll`](Self::poll) collected (empty before the first poll).
    pub fn extract(&self, kind: SentenceKind, index: usize) -> Result<&[u8], ExtractError> {
        extract_field(&self.buffer, kind, index)
    }

    /// Run one assembly pass and extract one field from the result.
    pub async fn poll_field(
        &mut self,
        kind: SentenceKind,
        index: usize,
    ) -> Result<&[u8], ExtractError> {
        self.poll().await;
        self.extract(kind, index)
    }

    /// The currently assembled snapshot.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Report of the most recent assembly pass.
    pub fn last_report(&self) -> AssemblyReport {
        self.last_report
    }

    /// Get a reference to the byte source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the byte source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Decompose the reader, returning the byte source.
    pub fn into_source(self) -> S {
        self.source
    }
}
