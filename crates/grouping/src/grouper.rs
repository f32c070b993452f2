//! Pair-dispatched lookup of containment strategies.

use arbor_dispatch::{InsertAction, Kinded, PairTable, Specifier, Taxonomy};

use crate::{Group, NoGrouping};

/// Constructor producing a [`Group`] strategy bound to a concrete pair.
///
/// The item side is optional so a strategy can be built, and
/// [`Group::can_contain`] asked, before the item exists. The strategy
/// borrows both values; it never owns their lifetime.
pub type GroupFactory<E> = for<'a> fn(&'a E, Option<&'a E>) -> Box<dyn Group + 'a>;

/// Registry of containment rules for one host element type.
///
/// Construction installs the wildcard/wildcard baseline mapped to
/// [`NoGrouping`], so every lookup yields a strategy: unmatched pairs refuse
/// containment instead of failing. Registrations cannot be removed, only
/// replaced.
///
/// ```
/// use arbor_grouping::{Grouper, KindId, Kinded, Taxonomy};
///
/// struct Item(KindId);
///
/// impl Kinded for Item {
/// 	fn kind(&self) -> KindId {
/// 		self.0
/// 	}
/// }
///
/// let grouper: Grouper<Item> = Grouper::new(Taxonomy::default());
/// let parent = Item(KindId::new("node"));
/// // Nothing registered yet, so the baseline refuses the pair.
/// assert!(!grouper.can_contain(&parent, None));
/// ```
pub struct Grouper<E> {
	table: PairTable<GroupFactory<E>>,
}

impl<E: Kinded> Grouper<E> {
	/// Creates a grouper with the baseline fallback installed.
	pub fn new(taxonomy: Taxonomy) -> Self {
		let mut table = PairTable::new(taxonomy);
		table.register(Specifier::Any, Specifier::Any, no_grouping as GroupFactory<E>);
		Self { table }
	}

	/// Registers a containment rule for a specifier pair.
	///
	/// Registering an already-present pair replaces its rule (last write
	/// wins).
	pub fn register(
		&mut self,
		container: Specifier,
		contained: Specifier,
		factory: GroupFactory<E>,
	) -> InsertAction {
		self.table.register(container, contained, factory)
	}

	/// Returns the strategy for a concrete (parent, item) pair.
	///
	/// `item` may be absent while the element is only about to be created;
	/// the returned strategy then answers [`Group::can_contain`] for the
	/// hypothetical pair.
	pub fn strategy<'a>(&self, parent: &'a E, item: Option<&'a E>) -> Box<dyn Group + 'a> {
		match self.table.resolve(parent.kind(), item.map(Kinded::kind)) {
			Ok(factory) => {
				tracing::trace!(
					domain = "grouping",
					parent = %parent.kind(),
					item = item.map(|item| item.kind().name()),
					"strategy selected",
				);
				factory(parent, item)
			}
			// The baseline wildcard pair is installed in `new` and
			// registrations cannot be removed.
			Err(_) => unreachable!("wildcard baseline registered at construction"),
		}
	}

	/// Reports whether `parent` can hold `item`, or a yet-to-be-created item
	/// of unknown kind when `item` is absent.
	pub fn can_contain(&self, parent: &E, item: Option<&E>) -> bool {
		self.strategy(parent, item).can_contain()
	}
}

fn no_grouping<'a, E>(_parent: &'a E, _item: Option<&'a E>) -> Box<dyn Group + 'a> {
	Box::new(NoGrouping)
}
