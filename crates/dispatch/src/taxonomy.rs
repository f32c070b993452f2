//! Ancestor and capability lookup for host-model kinds.
//!
//! The taxonomy is built once from the host object model and queried during
//! resolution. It records, per kind, the transitive ancestor chain (single
//! inheritance) and the capabilities the kind carries. Kinds never declared
//! here are still tolerated at resolution time: they exact-match and
//! wildcard-match, but have no ancestors and no capabilities.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::TaxonomyError;
use crate::kind::KindId;

/// A set of capability bits.
///
/// Capability names are open-ended; [`TaxonomyBuilder`] assigns each distinct
/// name a bit in first-seen order, up to [`CapabilitySet::MAX_CAPS`] names
/// per taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CapabilitySet(u64);

impl CapabilitySet {
	/// Maximum number of distinct capability names per taxonomy.
	pub const MAX_CAPS: u32 = u64::BITS;

	/// Returns the empty set.
	pub const fn empty() -> Self {
		Self(0)
	}

	/// Returns true if the set holds no capabilities.
	pub const fn is_empty(self) -> bool {
		self.0 == 0
	}

	/// Returns true if every bit of `other` is present in `self`.
	pub const fn contains(self, other: Self) -> bool {
		self.0 & other.0 == other.0
	}

	/// Returns the union of the two sets.
	pub const fn union(self, other: Self) -> Self {
		Self(self.0 | other.0)
	}

	const fn bit(index: u32) -> Self {
		Self(1 << index)
	}
}

/// Static definition of one kind in the host model.
///
/// Definitions are const-constructible so hosts can declare them next to the
/// model types they describe:
///
/// ```
/// use arbor_dispatch::KindDef;
///
/// static NODE: KindDef = KindDef::new("node").parent("element").caps(&["namespace"]);
/// assert_eq!(NODE.id, "node");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KindDef {
	/// Canonical kind name.
	pub id: &'static str,
	/// Parent kind, if any (single inheritance).
	pub parent: Option<&'static str>,
	/// Capability names this kind carries directly.
	pub caps: &'static [&'static str],
}

impl KindDef {
	/// Creates a root definition with no parent and no capabilities.
	pub const fn new(id: &'static str) -> Self {
		Self {
			id,
			parent: None,
			caps: &[],
		}
	}

	/// Sets the parent kind.
	pub const fn parent(mut self, parent: &'static str) -> Self {
		self.parent = Some(parent);
		self
	}

	/// Sets the capability names this kind carries directly.
	pub const fn caps(mut self, caps: &'static [&'static str]) -> Self {
		self.caps = caps;
		self
	}
}

#[derive(Debug)]
struct KindInfo {
	/// Transitive ancestors, nearest first; never holds the kind itself.
	ancestors: Vec<&'static str>,
	/// Own capabilities unioned with every ancestor's.
	caps: CapabilitySet,
}

/// Frozen ancestor/capability table, built via [`Taxonomy::builder`].
///
/// The default taxonomy is empty: every kind is then unrelated to every
/// other, and only exact and wildcard matches apply.
#[derive(Debug, Default)]
pub struct Taxonomy {
	kinds: FxHashMap<&'static str, KindInfo>,
	cap_bits: FxHashMap<&'static str, u32>,
}

impl Taxonomy {
	/// Starts an empty builder.
	pub fn builder() -> TaxonomyBuilder {
		TaxonomyBuilder::default()
	}

	/// Returns true if `kind` was declared.
	pub fn contains(&self, kind: KindId) -> bool {
		self.kinds.contains_key(kind.name())
	}

	/// Returns true if `ancestor` appears in `kind`'s transitive ancestor
	/// chain. A kind is not its own ancestor.
	pub fn is_ancestor(&self, ancestor: KindId, kind: KindId) -> bool {
		self.kinds
			.get(kind.name())
			.is_some_and(|info| info.ancestors.contains(&ancestor.name()))
	}

	/// Returns true if `kind` carries the capability, directly or by
	/// inheritance. Unknown capability names match nothing.
	pub fn has_capability(&self, kind: KindId, cap: &str) -> bool {
		let Some(&bit) = self.cap_bits.get(cap) else {
			return false;
		};
		self.kinds
			.get(kind.name())
			.is_some_and(|info| info.caps.contains(CapabilitySet::bit(bit)))
	}
}

/// Collects [`KindDef`]s and freezes them into a [`Taxonomy`].
///
/// Duplicate ids are rejected at registration. Parent links are resolved at
/// [`build`](Self::build), so a definition may name a parent registered
/// later.
#[derive(Debug, Default)]
pub struct TaxonomyBuilder {
	defs: Vec<KindDef>,
	seen: FxHashSet<&'static str>,
}

impl TaxonomyBuilder {
	/// Registers one kind definition.
	pub fn register(&mut self, def: &KindDef) -> Result<(), TaxonomyError> {
		if !self.seen.insert(def.id) {
			return Err(TaxonomyError::DuplicateKind { id: def.id });
		}
		self.defs.push(*def);
		Ok(())
	}

	/// Resolves parent links and capability bits into a frozen [`Taxonomy`].
	pub fn build(self) -> Result<Taxonomy, TaxonomyError> {
		let by_id: FxHashMap<&'static str, &KindDef> =
			self.defs.iter().map(|def| (def.id, def)).collect();

		let mut cap_bits: FxHashMap<&'static str, u32> = FxHashMap::default();
		let mut own_caps: FxHashMap<&'static str, CapabilitySet> = FxHashMap::default();
		for def in &self.defs {
			let mut set = CapabilitySet::empty();
			for &cap in def.caps {
				let next = cap_bits.len() as u32;
				let bit = *cap_bits.entry(cap).or_insert(next);
				if bit >= CapabilitySet::MAX_CAPS {
					return Err(TaxonomyError::TooManyCapabilities { cap });
				}
				set = set.union(CapabilitySet::bit(bit));
			}
			own_caps.insert(def.id, set);
		}

		let mut kinds = FxHashMap::default();
		for def in &self.defs {
			let mut ancestors: Vec<&'static str> = Vec::new();
			let mut caps = own_caps[def.id];
			let mut cursor = def.parent;
			while let Some(parent) = cursor {
				let parent_def = by_id.get(parent).ok_or(TaxonomyError::UnknownParent {
					kind: def.id,
					parent,
				})?;
				if parent == def.id || ancestors.contains(&parent) {
					return Err(TaxonomyError::ParentCycle { id: def.id });
				}
				ancestors.push(parent);
				caps = caps.union(own_caps[parent]);
				cursor = parent_def.parent;
			}
			kinds.insert(def.id, KindInfo { ancestors, caps });
		}

		Ok(Taxonomy { kinds, cap_bits })
	}
}
