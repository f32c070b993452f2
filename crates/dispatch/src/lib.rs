//! Pair-specifier dispatch.
//!
//! A [`PairTable`] holds an open set of registrations keyed by a pair of
//! [`Specifier`]s and resolves, for the runtime kinds of a concrete
//! (container, contained) pair, the most specific registered factory. The
//! contained side may be absent: a decision can be asked while the value is
//! only about to be created, and [`Specifier::Any`] exists to match exactly
//! that case.
//!
//! Kinds are plain names ([`KindId`]) reported by host values through
//! [`Kinded`]. Subtype and capability relations between kinds live in a
//! [`Taxonomy`] built once from the host object model, so resolution never
//! inspects a value beyond its kind.
//!
//! # Example
//!
//! ```
//! use arbor_dispatch::{KindDef, KindId, PairTable, Specifier, Taxonomy};
//!
//! let mut b = Taxonomy::builder();
//! b.register(&KindDef::new("element"))?;
//! b.register(&KindDef::new("node").parent("element"))?;
//! let taxonomy = b.build()?;
//!
//! let mut table: PairTable<&str> = PairTable::new(taxonomy);
//! table.register(Specifier::Any, Specifier::Any, "fallback");
//! table.register(Specifier::Exact(KindId::new("node")), Specifier::Any, "node rule");
//!
//! assert_eq!(table.resolve(KindId::new("node"), None)?, &"node rule");
//! assert_eq!(table.resolve(KindId::new("element"), None)?, &"fallback");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The table is single-threaded by design: registration happens during an
//! initialization phase through `&mut self`, resolution is a pure `&self`
//! read, and no internal locking is provided. Callers that must mutate and
//! resolve concurrently wrap the table themselves.

mod error;
mod kind;
mod specifier;
mod table;
mod taxonomy;

pub use error::{ResolveError, TaxonomyError};
pub use kind::{KindId, Kinded};
pub use specifier::Specifier;
pub use table::{InsertAction, MatchRank, PairTable, Registration};
pub use taxonomy::{CapabilitySet, KindDef, Taxonomy, TaxonomyBuilder};
