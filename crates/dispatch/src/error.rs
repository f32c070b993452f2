use crate::kind::KindId;

/// Fatal taxonomy construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaxonomyError {
	/// Two definitions share the same kind id.
	#[error("duplicate kind: {id}")]
	DuplicateKind { id: &'static str },

	/// A definition names a parent that was never registered.
	#[error("unknown parent kind: {kind} extends {parent}")]
	UnknownParent {
		kind: &'static str,
		parent: &'static str,
	},

	/// Parent links form a cycle.
	#[error("parent cycle reached from kind: {id}")]
	ParentCycle { id: &'static str },

	/// More distinct capability names than a capability set holds.
	#[error("too many distinct capabilities, starting at: {cap}")]
	TooManyCapabilities { cap: &'static str },
}

/// Resolution failure.
///
/// With a wildcard/wildcard baseline registered this error is unreachable,
/// so in practice it signals a configuration error (a missing baseline), not
/// a runtime data error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
	/// No registration matched the pair.
	#[error("no registration matches pair ({container}, {})", absent_or(.contained))]
	NoHandlerFound {
		container: KindId,
		contained: Option<KindId>,
	},
}

fn absent_or(contained: &Option<KindId>) -> &'static str {
	match contained {
		Some(kind) => kind.name(),
		None => "<absent>",
	}
}
