//! Containment scenarios over a small diagram-like element model.

use std::cell::RefCell;

use arbor_grouping::{Group, Grouper, KindDef, KindId, Kinded, Specifier, Taxonomy};

const PACKAGE: KindId = KindId::new("package");
const CLASS: KindId = KindId::new("class");
const NODE: KindId = KindId::new("node");
const ARTIFACT: KindId = KindId::new("artifact");
const COMPONENT: KindId = KindId::new("component");

struct Element {
	kind: KindId,
	name: &'static str,
	parent: RefCell<Option<&'static str>>,
}

impl Element {
	fn new(kind: KindId, name: &'static str) -> Self {
		Self {
			kind,
			name,
			parent: RefCell::new(None),
		}
	}

	fn parent_name(&self) -> Option<&'static str> {
		*self.parent.borrow()
	}
}

impl Kinded for Element {
	fn kind(&self) -> KindId {
		self.kind
	}
}

fn taxonomy() -> Taxonomy {
	let mut builder = Taxonomy::builder();
	for def in [
		KindDef::new("element"),
		KindDef::new("package").parent("element").caps(&["namespace"]),
		KindDef::new("class").parent("element"),
		KindDef::new("node").parent("element").caps(&["namespace"]),
		KindDef::new("artifact").parent("element"),
		KindDef::new("component").parent("element"),
	] {
		builder.register(&def).expect("unique kind");
	}
	builder.build().expect("well-formed taxonomy")
}

/// Re-parents the item under the parent element; ungrouping restores the
/// prior parent link exactly.
struct Reparent<'a> {
	parent: &'a Element,
	item: Option<&'a Element>,
	prior: Option<Option<&'static str>>,
}

impl Group for Reparent<'_> {
	fn group(&mut self) {
		let item = self.item.expect("grouping requires the item to exist");
		self.prior = Some(item.parent.borrow_mut().replace(self.parent.name));
	}

	fn ungroup(&mut self) {
		if let (Some(item), Some(prior)) = (self.item, self.prior.take()) {
			*item.parent.borrow_mut() = prior;
		}
	}
}

fn reparent<'a>(parent: &'a Element, item: Option<&'a Element>) -> Box<dyn Group + 'a> {
	Box::new(Reparent {
		parent,
		item,
		prior: None,
	})
}

/// Accepts any item kind without linking; answers the "about to be created"
/// query. `can_contain` comes from the trait default.
struct AllowAny;

impl Group for AllowAny {
	fn group(&mut self) {}

	fn ungroup(&mut self) {}
}

fn allow_any<'a>(_parent: &'a Element, _item: Option<&'a Element>) -> Box<dyn Group + 'a> {
	Box::new(AllowAny)
}

#[test]
fn unregistered_pair_refuses_containment() {
	let grouper: Grouper<Element> = Grouper::new(taxonomy());
	let node = Element::new(NODE, "n1");
	let artifact = Element::new(ARTIFACT, "a1");

	assert!(!grouper.can_contain(&node, Some(&artifact)));

	// The fallback strategy must leave the model untouched.
	let mut strategy = grouper.strategy(&node, Some(&artifact));
	strategy.group();
	assert_eq!(artifact.parent_name(), None);
	strategy.ungroup();
	assert_eq!(artifact.parent_name(), None);
}

#[test]
fn query_before_item_exists_uses_wildcard_rule() {
	let mut grouper: Grouper<Element> = Grouper::new(taxonomy());
	grouper.register(Specifier::Exact(NODE), Specifier::Any, allow_any);
	grouper.register(Specifier::Exact(NODE), Specifier::Exact(ARTIFACT), reparent);

	let node = Element::new(NODE, "n1");
	assert!(grouper.can_contain(&node, None));

	// A package has no wildcard rule, so the hypothetical pair is refused.
	let package = Element::new(PACKAGE, "p1");
	assert!(!grouper.can_contain(&package, None));
}

#[test]
fn artifact_deploys_into_node() {
	let mut grouper: Grouper<Element> = Grouper::new(taxonomy());
	grouper.register(Specifier::Exact(NODE), Specifier::Any, allow_any);
	grouper.register(Specifier::Exact(NODE), Specifier::Exact(ARTIFACT), reparent);

	let node = Element::new(NODE, "n1");
	let artifact = Element::new(ARTIFACT, "a1");

	assert!(grouper.can_contain(&node, Some(&artifact)));
	let mut strategy = grouper.strategy(&node, Some(&artifact));
	strategy.group();
	assert_eq!(artifact.parent_name(), Some("n1"));

	// No rule for packages beyond the baseline: refused, no linking.
	let package = Element::new(PACKAGE, "p1");
	assert!(!grouper.can_contain(&package, Some(&artifact)));
	grouper.strategy(&package, Some(&artifact)).group();
	assert_eq!(artifact.parent_name(), Some("n1"));
}

#[test]
fn ungroup_restores_the_prior_link() {
	let mut grouper: Grouper<Element> = Grouper::new(taxonomy());
	grouper.register(Specifier::Exact(NODE), Specifier::Exact(ARTIFACT), reparent);

	let node = Element::new(NODE, "n1");
	let artifact = Element::new(ARTIFACT, "a1");
	*artifact.parent.borrow_mut() = Some("old home");

	let mut strategy = grouper.strategy(&node, Some(&artifact));
	strategy.group();
	assert_eq!(artifact.parent_name(), Some("n1"));
	strategy.ungroup();
	assert_eq!(artifact.parent_name(), Some("old home"));
}

#[test]
fn ungroup_without_group_is_safe() {
	let mut grouper: Grouper<Element> = Grouper::new(taxonomy());
	grouper.register(Specifier::Exact(NODE), Specifier::Exact(ARTIFACT), reparent);

	let node = Element::new(NODE, "n1");
	let artifact = Element::new(ARTIFACT, "a1");
	*artifact.parent.borrow_mut() = Some("old home");

	grouper.strategy(&node, Some(&artifact)).ungroup();
	assert_eq!(artifact.parent_name(), Some("old home"));
}

#[test]
fn namespace_capability_rule_covers_package_and_node() {
	let mut grouper: Grouper<Element> = Grouper::new(taxonomy());
	grouper.register(Specifier::Capable("namespace"), Specifier::Exact(CLASS), reparent);
	grouper.register(Specifier::Exact(NODE), Specifier::Exact(COMPONENT), reparent);

	let package = Element::new(PACKAGE, "p1");
	let node = Element::new(NODE, "n1");
	let class = Element::new(CLASS, "c1");
	let component = Element::new(COMPONENT, "c2");

	// Both namespace kinds accept a class.
	assert!(grouper.can_contain(&package, Some(&class)));
	assert!(grouper.can_contain(&node, Some(&class)));
	grouper.strategy(&package, Some(&class)).group();
	assert_eq!(class.parent_name(), Some("p1"));

	// Composite structure: a component nests within a node.
	grouper.strategy(&node, Some(&component)).group();
	assert_eq!(component.parent_name(), Some("n1"));

	// An artifact is no namespace, so a class will not nest within it.
	let artifact = Element::new(ARTIFACT, "a1");
	assert!(!grouper.can_contain(&artifact, Some(&class)));
}

#[test]
fn replacing_a_rule_takes_effect() {
	let mut grouper: Grouper<Element> = Grouper::new(taxonomy());
	grouper.register(Specifier::Exact(NODE), Specifier::Exact(ARTIFACT), allow_any);

	let node = Element::new(NODE, "n1");
	let artifact = Element::new(ARTIFACT, "a1");

	// The first rule accepts the pair but never links it.
	grouper.strategy(&node, Some(&artifact)).group();
	assert_eq!(artifact.parent_name(), None);

	grouper.register(Specifier::Exact(NODE), Specifier::Exact(ARTIFACT), reparent);
	grouper.strategy(&node, Some(&artifact)).group();
	assert_eq!(artifact.parent_name(), Some("n1"));
}

#[test]
fn overriding_the_baseline_changes_the_default_answer() {
	let mut grouper: Grouper<Element> = Grouper::new(taxonomy());
	grouper.register(Specifier::Any, Specifier::Any, allow_any);

	let package = Element::new(PACKAGE, "p1");
	let artifact = Element::new(ARTIFACT, "a1");
	assert!(grouper.can_contain(&package, Some(&artifact)));
}
