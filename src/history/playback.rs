use super::{History, Snapshot};

/// Navigation cursor over a finished history. Never mutates what it reads.
#[derive(Debug, Clone)]
pub struct Playback<'a> {
    history: &'a History,
    index: usize,
    playing: bool,
}

impl<'a> Playback<'a> {
    pub fn new(history: &'a History) -> Self {
        Self {
            history,
            index: 0,
            playing: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    fn last_index(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    pub fn current(&self) -> Option<&'a Snapshot> {
        self.history.at(self.index)
    }

    pub fn first(&mut self) -> Option<&'a Snapshot> {
        self.index = 0;
        self.current()
    }

    pub fn last(&mut self) -> Option<&'a Snapshot> {
        self.index = self.last_index();
        self.current()
    }

    /// Moves forward one frame; stays put on the last frame.
    pub fn next(&mut self) -> Option<&'a Snapshot> {
        if self.index < self.last_index() {
            self.index += 1;
        }
        self.current()
    }

    /// Moves back one frame; stays put on the first frame.
    pub fn prev(&mut self) -> Option<&'a Snapshot> {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    /// Jumps to `index`. Out-of-range indices leave the cursor where it was.
    pub fn jump(&mut self, index: usize) -> Option<&'a Snapshot> {
        let snapshot = self.history.at(index)?;
        self.index = index;
        Some(snapshot)
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    /// One auto-play frame. Returns the new frame while playing, and stops at the end.
    pub fn advance(&mut self) -> Option<&'a Snapshot> {
        if !self.playing {
            return None;
        }
        if self.index >= self.last_index() {
            self.playing = false;
            return None;
        }
        self.index += 1;
        self.current()
    }
}
