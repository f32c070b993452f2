//! The pair table: registrations keyed by a specifier pair, and resolution
//! of the most specific registration for a concrete runtime pair.

use crate::error::ResolveError;
use crate::kind::{KindId, Kinded};
use crate::specifier::Specifier;
use crate::taxonomy::Taxonomy;


/// Result of a successful registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAction {
	/// The pair was new; the registration was appended.
	InsertedNew,
	/// The pair was already registered; its factory was replaced in place.
	ReplacedExisting,
}

/// How strongly one side of a registration matched a runtime value.
///
/// Ranks order per-side specificity: an exact kind match beats a capability
/// match, which beats an ancestor match, which beats the wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchRank {
	/// [`Specifier::Any`] matched; the weakest possible match.
	Wildcard = 0,
	/// The specifier names an ancestor of the value's kind.
	Ancestor = 1,
	/// The value's kind carries the named capability.
	Capability = 2,
	/// The specifier names the value's kind itself.
	Exact = 3,
}

/// One (container specifier, contained specifier, factory) entry.
#[derive(Debug)]
pub struct Registration<F> {
	container: Specifier,
	contained: Specifier,
	factory: F,
	seq: u64,
}

impl<F> Registration<F> {
	/// Returns the container-side specifier.
	pub fn container(&self) -> Specifier {
		self.container
	}

	/// Returns the contained-side specifier.
	pub fn contained(&self) -> Specifier {
		self.contained
	}

	/// Returns the registered factory.
	pub fn factory(&self) -> &F {
		&self.factory
	}
}

/// Combined specificity of a satisfied registration.
///
/// The derived ordering is the resolution total order: rank sum first, then
/// the container-side rank (the tie-break between equal sums of different
/// composition), then the registration sequence number, so the most recent
/// write wins a full tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Specificity {
	sum: u8,
	container: MatchRank,
	seq: u64,
}

/// Open table of pair registrations with specificity-scored resolution.
///
/// `register` mutates through `&mut self` and `resolve` reads through
/// `&self`; the borrow checker enforces the caller-serialization contract
/// and the table performs no internal locking. Resolution walks every
/// registration, so both operations run in time proportional to the table
/// size.
pub struct PairTable<F> {
	taxonomy: Taxonomy,
	entries: Vec<Registration<F>>,
	next_seq: u64,
}

impl<F> PairTable<F> {
	/// Creates an empty table resolving against `taxonomy`.
	pub fn new(taxonomy: Taxonomy) -> Self {
		Self {
			taxonomy,
			entries: Vec::new(),
			next_seq: 0,
		}
	}

	/// Returns the number of active registrations.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if nothing was registered.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over active registrations in insertion order.
	pub fn entries(&self) -> impl Iterator<Item = &Registration<F>> {
		self.entries.iter()
	}

	/// Returns the taxonomy the table resolves against.
	pub fn taxonomy(&self) -> &Taxonomy {
		&self.taxonomy
	}

	/// Adds a registration for a specifier pair.
	///
	/// Registering a pair that is already present replaces its factory (last
	/// write wins) instead of adding a duplicate; the entry then counts as
	/// the most recent registration for tie-breaking purposes. Specifiers
	/// are not validated for reachability; an unreachable registration is
	/// simply never selected.
	pub fn register(&mut self, container: Specifier, contained: Specifier, factory: F) -> InsertAction {
		let seq = self.next_seq;
		self.next_seq += 1;
		match self
			.entries
			.iter_mut()
			.find(|entry| entry.container == container && entry.contained == contained)
		{
			Some(existing) => {
				existing.factory = factory;
				existing.seq = seq;
				tracing::debug!(
					domain = "dispatch",
					container = %container,
					contained = %contained,
					"registration replaced",
				);
				InsertAction::ReplacedExisting
			}
			None => {
				self.entries.push(Registration {
					container,
					contained,
					factory,
					seq,
				});
				tracing::debug!(
					domain = "dispatch",
					container = %container,
					contained = %contained,
					"registration added",
				);
				InsertAction::InsertedNew
			}
		}
	}

	/// Resolves the most specific factory for a runtime pair.
	///
	/// Each side of every registration is ranked against the pair (see
	/// [`MatchRank`]); a side that does not match disqualifies the
	/// registration, and an absent contained value is matched by the
	/// wildcard alone. The winner has the highest rank sum; equal sums fall
	/// back to the container-side rank, then to the most recent
	/// registration. Resolution is a pure read: for a fixed table and pair
	/// it always returns the same factory.
	///
	/// # Errors
	///
	/// [`ResolveError::NoHandlerFound`] if no registration matches. With a
	/// wildcard/wildcard baseline registered this cannot happen; treat the
	/// error as a configuration problem, not a runtime data error.
	pub fn resolve(&self, container: KindId, contained: Option<KindId>) -> Result<&F, ResolveError> {
		self.resolve_registration(container, contained)
			.map(Registration::factory)
	}

	/// Like [`resolve`](Self::resolve), reading the kinds off [`Kinded`]
	/// values.
	pub fn resolve_pair<C, I>(&self, container: &C, contained: Option<&I>) -> Result<&F, ResolveError>
	where
		C: Kinded + ?Sized,
		I: Kinded + ?Sized,
	{
		self.resolve(container.kind(), contained.map(Kinded::kind))
	}

	/// Resolves to the full winning [`Registration`].
	pub fn resolve_registration(
		&self,
		container: KindId,
		contained: Option<KindId>,
	) -> Result<&Registration<F>, ResolveError> {
		let mut best: Option<(Specificity, &Registration<F>)> = None;
		for entry in &self.entries {
			let Some(container_rank) = self.rank_side(entry.container, Some(container)) else {
				continue;
			};
			let Some(contained_rank) = self.rank_side(entry.contained, contained) else {
				continue;
			};
			let specificity = Specificity {
				sum: container_rank as u8 + contained_rank as u8,
				container: container_rank,
				seq: entry.seq,
			};
			let better = match &best {
				Some((current, _)) => specificity > *current,
				None => true,
			};
			if better {
				best = Some((specificity, entry));
			}
		}
		match best {
			Some((_, entry)) => Ok(entry),
			None => {
				tracing::warn!(
					domain = "dispatch",
					container = %container,
					contained = contained.map(KindId::name),
					"no registration matches; wildcard baseline missing",
				);
				Err(ResolveError::NoHandlerFound { container, contained })
			}
		}
	}

	fn rank_side(&self, spec: Specifier, value: Option<KindId>) -> Option<MatchRank> {
		let Some(kind) = value else {
			// Absence is matched by the wildcard alone.
			return matches!(spec, Specifier::Any).then_some(MatchRank::Wildcard);
		};
		match spec {
			Specifier::Any => Some(MatchRank::Wildcard),
			Specifier::Exact(id) if id == kind => Some(MatchRank::Exact),
			Specifier::Exact(id) if self.taxonomy.is_ancestor(id, kind) => Some(MatchRank::Ancestor),
			Specifier::Exact(_) => None,
			Specifier::Capable(cap) if self.taxonomy.has_capability(kind, cap) => {
				Some(MatchRank::Capability)
			}
			Specifier::Capable(_) => None,
		}
	}
}
