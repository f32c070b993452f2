//! Containment strategies for nesting one element within another.
//!
//! Hosts ask, per (parent, item) pair, whether the parent can hold the item
//! and how the two are linked and unlinked. Which strategy answers is
//! decided by the runtime kinds of *both* values through an
//! [`arbor_dispatch::PairTable`], so independent extensions add new pair
//! rules by registering them instead of editing a central table. Typical
//! rules in a diagram model: an artifact deployed within a node, a class
//! within a package, a component within a node.
//!
//! A strategy can be requested before the item exists, while it is only
//! about to be created. [`Group::can_contain`] must therefore work with an
//! absent item, and the wildcard specifier matches exactly that case.

mod grouper;

pub use arbor_dispatch::{
	InsertAction, KindDef, KindId, Kinded, Specifier, Taxonomy, TaxonomyBuilder, TaxonomyError,
};
pub use grouper::{GroupFactory, Grouper};

/// One containment decision, bound to a concrete (parent, item) pair.
///
/// Strategies are short-lived: one is created per query or per group/ungroup
/// operation and dropped afterwards, never cached across calls.
///
/// Callers drive the pair through `ungrouped -> group() -> grouped ->
/// ungroup() -> ungrouped`. Calling [`group`](Self::group) twice without an
/// intervening [`ungroup`](Self::ungroup), or calling it at all when
/// [`can_contain`](Self::can_contain) reports false, is a caller error the
/// strategy does not detect. [`ungroup`](Self::ungroup) on a pair that was
/// never grouped must stay safe.
pub trait Group {
	/// Reports whether the parent can hold an item of the bound kind.
	///
	/// Must work while the item is still absent, and must not mutate either
	/// value.
	fn can_contain(&self) -> bool {
		true
	}

	/// Establishes the containment link between parent and item.
	///
	/// Both values must exist by the time this is called.
	fn group(&mut self);

	/// Reverses [`group`](Self::group), restoring the prior relationship.
	fn ungroup(&mut self);
}

/// Fallback strategy for pairs without a specific rule: containment is
/// refused and linking is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGrouping;

impl Group for NoGrouping {
	fn can_contain(&self) -> bool {
		false
	}

	fn group(&mut self) {}

	fn ungroup(&mut self) {}
}
