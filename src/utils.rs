//! Internal helpers for the `log` feature. Everything in here compiles to nothing without it.

macro_rules! debug_log {
	($($arg:tt)*) => {{
		#[cfg(feature = "log")]
		{
			log::debug!($($arg)*);
		}
	}};
}

macro_rules! trace_log {
	($($arg:tt)*) => {{
		#[cfg(feature = "log")]
		{
			log::trace!($($arg)*);
		}
	}};
}

/// Logs how long a phase took once it is dropped
#[derive(Debug)]
pub(crate) struct Timer {
	#[cfg(feature = "log")]
	name: &'static str,
	#[cfg(feature = "log")]
	start: std::time::Instant,
}

impl Timer {
	#[allow(unused_variables)]
	pub(crate) fn start(name: &'static str) -> Timer {
		Timer {
			#[cfg(feature = "log")]
			name,
			#[cfg(feature = "log")]
			start: std::time::Instant::now(),
		}
	}
}

#[cfg(feature = "log")]
impl Drop for Timer {
	fn drop(&mut self) {
		log::debug!("{} took {:?}", self.name, self.start.elapsed());
	}
}
