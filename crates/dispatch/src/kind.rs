use core::fmt;

/// Identifies a concrete kind in the host object model.
///
/// Kind ids are plain `&'static str` names; equality is by name, so two ids
/// carrying the same name refer to the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KindId(&'static str);

impl KindId {
	/// Creates a kind id from its canonical name.
	pub const fn new(name: &'static str) -> Self {
		Self(name)
	}

	/// Returns the canonical name.
	pub const fn name(self) -> &'static str {
		self.0
	}
}

impl fmt::Display for KindId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.0)
	}
}

/// Implemented by host-model values so dispatch can observe their kind at
/// runtime.
pub trait Kinded {
	/// Returns the concrete kind of this value.
	fn kind(&self) -> KindId;
}
