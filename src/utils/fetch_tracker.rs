/// Bookkeeping for the single outstanding menu request.
///
/// Each request gets a generation number. A response is only applied when its
/// generation is still the latest one and the owning component is still mounted,
/// so a retry can never be overwritten by an older, slower response.
#[derive(Debug, Default)]
pub struct FetchTracker {
    generation: u64,
    in_flight: bool,
    closed: bool,
}

impl FetchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request, returning its generation, or `None` if one is already running.
    pub fn begin(&mut self) -> Option<u64> {
        if self.in_flight || self.closed {
            return None;
        }
        self.generation += 1;
        self.in_flight = true;
        Some(self.generation)
    }

    /// Marks `generation` as settled. Returns whether its result should be applied.
    pub fn settle(&mut self, generation: u64) -> bool {
        if self.closed || generation != self.generation {
            return false;
        }
        self.in_flight = false;
        true
    }

    /// Called on teardown; every pending and future response is dropped.
    pub fn close(&mut self) {
        self.closed = true;
        self.in_flight = false;
        self.generation += 1;
    }
}
