//! Sources of rasterized sections.
//!
//! Rasterizing a section may suspend (it is usually done by an external renderer), so the
//! pipeline pulls sections through an async [`SectionSource`]. Sections are always requested
//! one at a time, in order, and the next one is only requested after the previous section's
//! last band has been placed.

use crate::error::BoxError;
use pagecast_layout::Section;
use std::future::{self, Future};
use tokio::sync::mpsc;

pub trait SectionSource {
    /// Produces the next section, `Ok(None)` once the input is exhausted.
    fn next_section(&mut self) -> impl Future<Output = Result<Option<Section>, BoxError>>;
}

/// Adapts an iterator of fallible sections into a [`SectionSource`].
#[derive(Debug, Clone)]
pub struct IterSource<I>(I);

impl<I> IterSource<I> {
    pub fn new<T>(iter: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self(iter.into_iter())
    }
}

impl<I, E> SectionSource for IterSource<I>
where
    I: Iterator<Item = Result<Section, E>>,
    E: Into<BoxError>,
{
    fn next_section(&mut self) -> impl Future<Output = Result<Option<Section>, BoxError>> {
        future::ready(self.0.next().transpose().map_err(Into::into))
    }
}

/// Sections produced by a rasterizer running on another task.
impl SectionSource for mpsc::Receiver<Result<Section, BoxError>> {
    async fn next_section(&mut self) -> Result<Option<Section>, BoxError> {
        self.recv().await.transpose()
    }
}
