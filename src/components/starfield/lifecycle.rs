//! Frame loop bookkeeping for the background.
//!
//! The browser drives frames through `requestAnimationFrame`; this type only
//! tracks whether the loop should keep going and which frame request is still
//! outstanding, so teardown can cancel it. A callback that slips through after
//! [`FrameLoop::stop`] sees `begin_frame() == false` and must neither draw nor
//! reschedule.

/// Loop state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
	/// Not mounted, nothing scheduled.
	#[default]
	Idle,
	/// Mounted; `pending` is the outstanding animation frame request, if any.
	Running { pending: Option<i32> },
}

#[derive(Debug, Default)]
pub struct FrameLoop {
	state: LoopState,
	frames: u64,
}

impl FrameLoop {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> LoopState {
		self.state
	}

	pub fn is_running(&self) -> bool {
		matches!(self.state, LoopState::Running { .. })
	}

	/// Frames run since the last start.
	pub fn frames(&self) -> u64 {
		self.frames
	}

	/// Idle -> Running. Returns `false` if the loop was already running.
	pub fn start(&mut self) -> bool {
		if self.is_running() {
			return false;
		}
		self.state = LoopState::Running { pending: None };
		self.frames = 0;
		true
	}

	/// Called at the top of each frame callback. The request that fired is no
	/// longer pending. Returns whether the frame should run.
	pub fn begin_frame(&mut self) -> bool {
		match &mut self.state {
			LoopState::Idle => false,
			LoopState::Running { pending } => {
				*pending = None;
				self.frames += 1;
				true
			}
		}
	}

	/// Record the handle of the next frame request. Ignored while idle.
	pub fn scheduled(&mut self, handle: i32) {
		if let LoopState::Running { pending } = &mut self.state {
			*pending = Some(handle);
		}
	}

	/// Running -> Idle. Returns the outstanding request to cancel, if any.
	pub fn stop(&mut self) -> Option<i32> {
		match std::mem::take(&mut self.state) {
			LoopState::Idle => None,
			LoopState::Running { pending } => pending,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_idle() {
		let mut lp = FrameLoop::new();
		assert_eq!(lp.state(), LoopState::Idle);
		assert!(!lp.begin_frame());
		lp.scheduled(3);
		assert_eq!(lp.stop(), None);
	}

	#[test]
	fn running_loop_tracks_pending_frame() {
		let mut lp = FrameLoop::new();
		assert!(lp.start());
		assert!(!lp.start());

		lp.scheduled(1);
		assert_eq!(lp.state(), LoopState::Running { pending: Some(1) });
		assert!(lp.begin_frame());
		assert_eq!(lp.state(), LoopState::Running { pending: None });
		lp.scheduled(2);

		assert_eq!(lp.stop(), Some(2));
		assert_eq!(lp.state(), LoopState::Idle);
		assert_eq!(lp.frames(), 1);
	}

	#[test]
	fn frames_after_stop_do_nothing() {
		let mut lp = FrameLoop::new();
		lp.start();
		lp.scheduled(10);
		lp.stop();

		// A callback already queued by the browser still fires once.
		assert!(!lp.begin_frame());
		lp.scheduled(11);
		assert_eq!(lp.state(), LoopState::Idle);
		assert_eq!(lp.stop(), None);
	}

	#[test]
	fn can_restart_after_stop() {
		let mut lp = FrameLoop::new();
		lp.start();
		lp.begin_frame();
		lp.stop();
		assert!(lp.start());
		assert_eq!(lp.frames(), 0);
		assert!(lp.begin_frame());
	}
}
