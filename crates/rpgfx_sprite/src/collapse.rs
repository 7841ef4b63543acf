//! Frames on which an enemy collapse sound was requested.
//!
//! The battle flow asks for the collapse sound when an enemy dies; the sprite
//! plays it when its collapse effect actually starts on the same frame. The
//! ledger holds the requests of a single frame and discards them as soon as a
//! request for another frame arrives.

/// Collapse sound requests for the most recent frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseSoundLedger {
	frames: Vec<u64>,
}

impl CollapseSoundLedger {
	/// Creates an empty ledger.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records a request made on `frame`.
	pub fn record(&mut self, frame: u64) {
		if self.frames.first().is_some_and(|&first| first != frame) {
			self.frames.clear();
		}
		self.frames.push(frame);
	}

	/// Returns `true` if a request was recorded on `frame`.
	///
	/// Checking does not consume the request: every enemy collapsing on that
	/// frame plays the sound.
	pub fn contains(&self, frame: u64) -> bool {
		self.frames.contains(&frame)
	}

	/// Number of requests held.
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Returns `true` when no request is held.
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}
}
