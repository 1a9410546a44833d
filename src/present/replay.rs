/// Progressive reveal of an already-computed sequence.
///
/// Yields growing prefixes, `stride` items more each time, ending with
/// the whole slice. An empty slice yields nothing.
#[derive(Debug, Clone)]
pub struct Replay<'a, T> {
    items: &'a [T],
    shown: usize,
    stride: usize,
    done: bool,
}

impl<'a, T> Replay<'a, T> {
    pub fn new(items: &'a [T], stride: usize) -> Self {
        Self {
            items,
            shown: 0,
            stride: stride.max(1),
            done: items.is_empty(),
        }
    }

    /// Number of frames the replay will produce.
    pub fn frame_count(&self) -> usize {
        self.items.len().div_ceil(self.stride)
    }
}

impl<'a, T> Iterator for Replay<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.shown = (self.shown + self.stride).min(self.items.len());
        self.done = self.shown == self.items.len();
        Some(&self.items[..self.shown])
    }
}
