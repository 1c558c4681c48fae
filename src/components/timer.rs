//! Timeout and interval handles that never stack.
//!
//! A [`TimerSlot`] owns at most one pending timer. Installing a new one
//! clears the previous one first, and dropping the slot clears whatever is
//! still pending, so a torn-down component can't be called back.

use std::time::Duration;

use log::warn;
use wasm_bindgen::prelude::*;

/// A scheduled callback that can be cancelled.
pub trait TimerHandle: Sized {
	/// Run `f` once after `delay`. `None` when nothing could be scheduled.
	fn timeout(delay: Duration, f: impl FnOnce() + 'static) -> Option<Self>;
	/// Run `f` every `period` until cleared.
	fn interval(period: Duration, f: impl FnMut() + 'static) -> Option<Self>;
	fn clear(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerKind {
	Timeout,
	Interval,
}

/// A browser `setTimeout`/`setInterval` registration. Clears itself on drop.
pub struct BrowserTimer {
	id: Option<i32>,
	kind: TimerKind,
	_callback: Closure<dyn FnMut()>,
}

fn millis(d: Duration) -> i32 {
	d.as_millis().min(i32::MAX as u128) as i32
}

impl TimerHandle for BrowserTimer {
	fn timeout(delay: Duration, f: impl FnOnce() + 'static) -> Option<Self> {
		let callback: Closure<dyn FnMut()> = Closure::once(f);
		let window = web_sys::window()?;
		let id = window
			.set_timeout_with_callback_and_timeout_and_arguments_0(
				callback.as_ref().unchecked_ref(),
				millis(delay),
			)
			.map_err(|e| warn!("setTimeout failed: {e:?}"))
			.ok()?;
		Some(Self {
			id: Some(id),
			kind: TimerKind::Timeout,
			_callback: callback,
		})
	}

	fn interval(period: Duration, f: impl FnMut() + 'static) -> Option<Self> {
		let callback: Closure<dyn FnMut()> = Closure::new(f);
		let window = web_sys::window()?;
		let id = window
			.set_interval_with_callback_and_timeout_and_arguments_0(
				callback.as_ref().unchecked_ref(),
				millis(period),
			)
			.map_err(|e| warn!("setInterval failed: {e:?}"))
			.ok()?;
		Some(Self {
			id: Some(id),
			kind: TimerKind::Interval,
			_callback: callback,
		})
	}

	fn clear(&mut self) {
		let (Some(id), Some(window)) = (self.id.take(), web_sys::window()) else {
			return;
		};
		match self.kind {
			TimerKind::Timeout => window.clear_timeout_with_handle(id),
			TimerKind::Interval => window.clear_interval_with_handle(id),
		}
	}
}

impl Drop for BrowserTimer {
	fn drop(&mut self) {
		self.clear();
	}
}

/// Holds at most one live timer.
pub struct TimerSlot<H: TimerHandle = BrowserTimer> {
	handle: Option<H>,
}

impl<H: TimerHandle> Default for TimerSlot<H> {
	fn default() -> Self {
		Self { handle: None }
	}
}

impl<H: TimerHandle> TimerSlot<H> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Clear whatever is pending, then hold `handle`.
	fn replace(&mut self, handle: Option<H>) {
		self.clear();
		self.handle = handle;
	}

	pub fn clear(&mut self) {
		if let Some(mut handle) = self.handle.take() {
			handle.clear();
		}
	}

	pub fn set_timeout(&mut self, delay: Duration, f: impl FnOnce() + 'static) {
		self.replace(H::timeout(delay, f));
	}

	pub fn set_interval(&mut self, period: Duration, f: impl FnMut() + 'static) {
		self.replace(H::interval(period, f));
	}
}

impl<H: TimerHandle> Drop for TimerSlot<H> {
	fn drop(&mut self) {
		self.clear();
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;

	#[derive(Default)]
	struct Clock {
		next_id: u32,
		cleared: Vec<u32>,
		pending: Vec<(u32, Box<dyn FnMut()>)>,
	}

	thread_local! {
		static CLOCK: RefCell<Clock> = RefCell::new(Clock::default());
	}

	/// Records schedules in a thread-local clock so tests can fire them.
	struct FakeTimer {
		id: u32,
	}

	impl FakeTimer {
		fn schedule(f: Box<dyn FnMut()>) -> Option<Self> {
			CLOCK.with_borrow_mut(|c| {
				c.next_id += 1;
				let id = c.next_id;
				c.pending.push((id, f));
				Some(Self { id })
			})
		}
	}

	impl TimerHandle for FakeTimer {
		fn timeout(_: Duration, f: impl FnOnce() + 'static) -> Option<Self> {
			let mut f = Some(f);
			Self::schedule(Box::new(move || {
				if let Some(f) = f.take() {
					f();
				}
			}))
		}

		fn interval(_: Duration, f: impl FnMut() + 'static) -> Option<Self> {
			Self::schedule(Box::new(f))
		}

		fn clear(&mut self) {
			CLOCK.with_borrow_mut(|c| {
				c.cleared.push(self.id);
				c.pending.retain(|(id, _)| *id != self.id);
			});
		}
	}

	fn reset_clock() {
		CLOCK.with_borrow_mut(|c| *c = Clock::default());
	}

	fn fire_all() {
		let mut pending = CLOCK.with_borrow_mut(|c| std::mem::take(&mut c.pending));
		for (_, f) in &mut pending {
			f();
		}
		CLOCK.with_borrow_mut(|c| c.pending.append(&mut pending));
	}

	fn cleared() -> Vec<u32> {
		CLOCK.with_borrow(|c| c.cleared.clone())
	}

	fn pending() -> usize {
		CLOCK.with_borrow(|c| c.pending.len())
	}

	#[test]
	fn new_timeout_clears_the_previous_one() {
		reset_clock();
		let hits = Rc::new(RefCell::new(Vec::new()));
		let mut slot = TimerSlot::<FakeTimer>::new();
		let h = hits.clone();
		slot.set_timeout(Duration::from_secs(4), move || h.borrow_mut().push("success"));
		let h = hits.clone();
		slot.set_timeout(Duration::from_secs(5), move || h.borrow_mut().push("error"));
		assert_eq!(cleared(), vec![1]);
		assert_eq!(pending(), 1);
		fire_all();
		assert_eq!(*hits.borrow(), vec!["error"]);
	}

	#[test]
	fn interval_replaced_by_timeout_stops_ticking() {
		reset_clock();
		let ticks = Rc::new(RefCell::new(0));
		let mut slot = TimerSlot::<FakeTimer>::new();
		let t = ticks.clone();
		slot.set_interval(Duration::from_millis(50), move || *t.borrow_mut() += 1);
		fire_all();
		fire_all();
		assert_eq!(*ticks.borrow(), 2);
		slot.set_timeout(Duration::from_secs(1), || {});
		fire_all();
		assert_eq!(*ticks.borrow(), 2);
		assert_eq!(cleared(), vec![1]);
	}

	#[test]
	fn clear_is_idempotent() {
		reset_clock();
		let mut slot = TimerSlot::<FakeTimer>::new();
		slot.set_timeout(Duration::from_secs(1), || {});
		slot.clear();
		slot.clear();
		assert_eq!(cleared(), vec![1]);
		assert!(slot.handle.is_none());
		assert_eq!(pending(), 0);
	}

	#[test]
	fn drop_clears_pending_timer() {
		reset_clock();
		{
			let mut slot = TimerSlot::<FakeTimer>::new();
			slot.set_interval(Duration::from_millis(10), || {});
		}
		assert_eq!(cleared(), vec![1]);
		assert_eq!(pending(), 0);
	}
}
