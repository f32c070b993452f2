use core::fmt;

use crate::kind::KindId;

/// One side of a registration key.
///
/// A specifier describes which runtime values satisfy that side of a
/// registered pair, from most to least specific:
///
/// - [`Specifier::Exact`] names a concrete kind. It is satisfied exactly by
///   values of that kind and, less specifically, by values whose kind
///   descends from it.
/// - [`Specifier::Capable`] names a capability. It is satisfied by any value
///   whose kind carries that capability, directly or by inheritance.
/// - [`Specifier::Any`] is the wildcard for an unknown value. It is the only
///   specifier satisfied by an absent value, and it matches present values
///   only as a last resort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specifier {
	/// A concrete kind, matched exactly or through the ancestor chain.
	Exact(KindId),
	/// A capability the value's kind must carry.
	Capable(&'static str),
	/// Matches anything, absent values included.
	Any,
}

impl fmt::Display for Specifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Exact(kind) => write!(f, "{kind}"),
			Self::Capable(cap) => write!(f, "[{cap}]"),
			Self::Any => f.write_str("*"),
		}
	}
}
