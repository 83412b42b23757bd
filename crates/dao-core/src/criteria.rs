// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Criteria values assembled by generated search methods.
//!
//! The shape follows the classic criteria API: a [`CriteriaBuilder`] creates
//! a [`CriteriaQuery`], the query exposes a [`Root`], the root resolves
//! property [`Path`]s, and the builder turns paths into [`Predicate`]s and
//! [`Order`]s.
//!
//! ```text
//! CriteriaBuilder ──create_query──▶ CriteriaQuery<E> ──from──▶ Root<E>
//!        │                               ▲                       │
//!        ├── equal(path, value) ──▶ Predicate ── restrict ───────┤
//!        └── asc / desc(path) ───▶ Order ───── order_by          get("name")
//!                                                                 ▼
//!                                                               Path
//! ```
//!
//! All values are plain data: building criteria never touches a session.

use std::{fmt, marker::PhantomData};

use crate::{Entity, SortType, Value};

/// Factory for criteria queries, predicates and orderings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CriteriaBuilder;

impl CriteriaBuilder {
    /// Create a builder.
    pub const fn new() -> Self {
        Self
    }

    /// Create an empty criteria query selecting `E`.
    pub fn create_query<E: Entity>(&self) -> CriteriaQuery<E> {
        CriteriaQuery::new()
    }

    /// Equality predicate: `path = value`.
    pub fn equal(&self, path: Path, value: impl Into<Value>) -> Predicate {
        Predicate::Equal {
            property: path.property,
            value:    value.into()
        }
    }

    /// Ascending ordering on `path`.
    pub fn asc(&self, path: Path) -> Order {
        Order::new(path.property, SortType::Asc)
    }

    /// Descending ordering on `path`.
    pub fn desc(&self, path: Path) -> Order {
        Order::new(path.property, SortType::Desc)
    }
}

/// Property path resolved from a [`Root`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    property: String
}

impl Path {
    /// Property name.
    pub fn property(&self) -> &str {
        &self.property
    }
}

/// Query root for entity `E`.
pub struct Root<E> {
    entity: PhantomData<fn() -> E>
}

impl<E: Entity> Root<E> {
    fn new() -> Self {
        Self {
            entity: PhantomData
        }
    }

    /// Resolve a property path by field name.
    pub fn get(&self, property: &str) -> Path {
        Path {
            property: property.to_owned()
        }
    }

    /// Persistence name of the rooted entity.
    pub fn entity_name(&self) -> &'static str {
        E::NAME
    }
}

impl<E> Clone for Root<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Root<E> {}

impl<E: Entity> fmt::Debug for Root<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Root").field("entity", &E::NAME).finish()
    }
}

/// A single restriction over one property.
///
/// Restrictions in a query combine conjunctively.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `property = value`.
    Equal {
        /// Property name.
        property: String,
        /// Expected value.
        value:    Value
    }
}

impl Predicate {
    /// Property the predicate restricts.
    pub fn property(&self) -> &str {
        match self {
            Self::Equal {
                property, ..
            } => property
        }
    }

    /// Evaluate the predicate against an entity.
    pub fn matches<E: Entity>(&self, entity: &E) -> bool {
        match self {
            Self::Equal {
                property,
                value
            } => entity.property(property).as_ref() == Some(value)
        }
    }
}

/// Ordering on one property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Order {
    property:  String,
    direction: SortType
}

impl Order {
    fn new(property: String, direction: SortType) -> Self {
        Self {
            property,
            direction
        }
    }

    /// Property to order by.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Sort direction.
    pub const fn direction(&self) -> SortType {
        self.direction
    }
}

/// Criteria query selecting entity `E`.
///
/// Mirrors the fluent criteria style: [`select`](Self::select),
/// [`restrict`](Self::restrict) and [`order_by`](Self::order_by) consume and
/// return the query. Restricting or ordering again replaces the previous
/// value.
pub struct CriteriaQuery<E> {
    selected:     bool,
    restrictions: Vec<Predicate>,
    order:        Vec<Order>,
    entity:       PhantomData<fn() -> E>
}

impl<E: Entity> CriteriaQuery<E> {
    fn new() -> Self {
        Self {
            selected:     false,
            restrictions: Vec::new(),
            order:        Vec::new(),
            entity:       PhantomData
        }
    }

    /// Root of the query.
    pub fn from(&self) -> Root<E> {
        Root::new()
    }

    /// Select the given root.
    #[must_use]
    pub fn select(mut self, _root: &Root<E>) -> Self {
        self.selected = true;
        self
    }

    /// Replace the WHERE clause with the conjunction of `predicates`.
    ///
    /// An empty list removes every restriction.
    #[must_use]
    pub fn restrict(mut self, predicates: Vec<Predicate>) -> Self {
        self.restrictions = predicates;
        self
    }

    /// Replace the ORDER BY clause.
    #[must_use]
    pub fn order_by(mut self, order: Order) -> Self {
        self.order = vec![order];
        self
    }

    /// Whether a root has been selected.
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Current restrictions, in insertion order.
    pub fn restrictions(&self) -> &[Predicate] {
        &self.restrictions
    }

    /// Current orderings.
    pub fn orders(&self) -> &[Order] {
        &self.order
    }

    /// Evaluate every restriction against an entity.
    pub fn matches(&self, entity: &E) -> bool {
        self.restrictions.iter().all(|p| p.matches(entity))
    }
}

impl<E> Clone for CriteriaQuery<E> {
    fn clone(&self) -> Self {
        Self {
            selected:     self.selected,
            restrictions: self.restrictions.clone(),
            order:        self.order.clone(),
            entity:       PhantomData
        }
    }
}

impl<E: Entity> fmt::Debug for CriteriaQuery<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CriteriaQuery")
            .field("entity", &E::NAME)
            .field("restrictions", &self.restrictions)
            .field("order", &self.order)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Item {
        id:   Option<i64>,
        name: Option<String>
    }

    impl Entity for Item {
        type Id = i64;
        const NAME: &'static str = "Item";

        fn id(&self) -> Option<i64> {
            self.id
        }

        fn property(&self, name: &str) -> Option<Value> {
            match name {
                "id" => self.id.map(Value::from),
                "name" => self.name.clone().map(Value::from),
                _ => None
            }
        }
    }

    #[test]
    fn equal_predicate_matches() {
        let cb = CriteriaBuilder::new();
        let query = cb.create_query::<Item>();
        let from = query.from();
        let predicate = cb.equal(from.get("name"), "ann");

        let ann = Item {
            id:   Some(1),
            name: Some("ann".into())
        };
        let bob = Item {
            id:   Some(2),
            name: Some("bob".into())
        };
        assert!(predicate.matches(&ann));
        assert!(!predicate.matches(&bob));
        assert_eq!(predicate.property(), "name");
    }

    #[test]
    fn absent_property_never_matches() {
        let cb = CriteriaBuilder::new();
        let from = cb.create_query::<Item>().from();
        let predicate = cb.equal(from.get("name"), "ann");
        let nameless = Item {
            id:   Some(1),
            name: None
        };
        assert!(!predicate.matches(&nameless));
    }

    #[test]
    fn restrict_replaces_and_conjoins() {
        let cb = CriteriaBuilder::new();
        let query = cb.create_query::<Item>();
        let from = query.from();
        let query = query
            .select(&from)
            .restrict(vec![cb.equal(from.get("id"), 9_i64)])
            .restrict(vec![
                cb.equal(from.get("id"), 1_i64),
                cb.equal(from.get("name"), "ann"),
            ]);
        assert!(query.is_selected());
        assert_eq!(query.restrictions().len(), 2);

        let ann = Item {
            id:   Some(1),
            name: Some("ann".into())
        };
        let other = Item {
            id:   Some(1),
            name: Some("bob".into())
        };
        assert!(query.matches(&ann));
        assert!(!query.matches(&other));
    }

    #[test]
    fn empty_restrictions_match_everything() {
        let query = CriteriaBuilder::new().create_query::<Item>().restrict(Vec::new());
        let item = Item {
            id:   None,
            name: None
        };
        assert!(query.matches(&item));
    }

    #[test]
    fn order_by_replaces_previous_order() {
        let cb = CriteriaBuilder::new();
        let query = cb.create_query::<Item>();
        let from = query.from();
        let query = query
            .order_by(cb.asc(from.get("id")))
            .order_by(cb.desc(from.get("name")));
        assert_eq!(query.orders().len(), 1);
        assert_eq!(query.orders()[0].property(), "name");
        assert_eq!(query.orders()[0].direction(), SortType::Desc);
    }

    #[test]
    fn root_knows_entity_name() {
        let from = CriteriaBuilder::new().create_query::<Item>().from();
        assert_eq!(from.entity_name(), "Item");
        assert_eq!(format!("{from:?}"), "Root { entity: \"Item\" }");
    }
}
