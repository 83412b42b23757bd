// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! In-memory session for tests and prototypes.
//!
//! Rows live in a shared table keyed by entity type. Queries are a linear
//! scan: filter by restrictions, stable sort by orderings, then apply the
//! window. Absent property values sort before present ones.
//!
//! ```rust
//! use dao_core::{SessionFactory, memory::MemorySessionFactory};
//!
//! let factory = MemorySessionFactory::new();
//! let a = factory.current_session().unwrap();
//! let b = factory.session();
//! assert_eq!(format!("{a:?}"), format!("{b:?}"));
//! ```

use std::{
    any::{Any, TypeId},
    cmp::Ordering,
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard}
};

use tracing::{debug, trace};

use crate::{CriteriaQuery, DaoError, Entity, Session, SessionFactory, SortType, Window};

type Row = Box<dyn Any + Send + Sync>;
type Tables = HashMap<TypeId, Vec<Row>>;

/// Factory handing out sessions over one shared in-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionFactory {
    session: MemorySession
}

impl MemorySessionFactory {
    /// Create a factory over an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session over the shared store, without going through `Result`.
    pub fn session(&self) -> MemorySession {
        self.session.clone()
    }
}

impl SessionFactory for MemorySessionFactory {
    type Session = MemorySession;

    fn current_session(&self) -> Result<MemorySession, DaoError> {
        Ok(self.session.clone())
    }
}

/// Session over a shared in-memory store. Clones share the store.
#[derive(Clone, Default)]
pub struct MemorySession {
    tables: Arc<RwLock<Tables>>
}

impl MemorySession {
    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, DaoError> {
        self.tables
            .read()
            .map_err(|_| DaoError::session("in-memory store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, DaoError> {
        self.tables
            .write()
            .map_err(|_| DaoError::session("in-memory store lock poisoned"))
    }

    /// Number of stored rows of entity `E`.
    ///
    /// # Errors
    ///
    /// Returns [`DaoError::Session`] if the store lock is poisoned.
    pub fn count<E: Entity>(&self) -> Result<usize, DaoError> {
        Ok(self
            .read()?
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len))
    }

    /// Remove every row of entity `E`.
    ///
    /// # Errors
    ///
    /// Returns [`DaoError::Session`] if the store lock is poisoned.
    pub fn clear<E: Entity>(&self) -> Result<(), DaoError> {
        self.write()?.remove(&TypeId::of::<E>());
        Ok(())
    }
}

impl std::fmt::Debug for MemorySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tables = self.tables.read().map(|t| t.len()).unwrap_or_default();
        f.debug_struct("MemorySession")
            .field("tables", &tables)
            .finish()
    }
}

fn rows<E: Entity>(rows: &[Row]) -> impl Iterator<Item = &E> {
    rows.iter().filter_map(|row| row.downcast_ref::<E>())
}

fn compare<E: Entity>(a: &E, b: &E, property: &str) -> Ordering {
    match (a.property(property), b.property(property)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}

impl Session for MemorySession {
    fn persist<E: Entity>(&self, entity: E) -> Result<E, DaoError> {
        let id = entity.id().ok_or(DaoError::MissingIdentifier {
            entity: E::NAME
        })?;
        let mut tables = self.write()?;
        let table = tables.entry(TypeId::of::<E>()).or_default();

        let existing = table
            .iter_mut()
            .filter_map(|row| row.downcast_mut::<E>())
            .find(|row| row.id().as_ref() == Some(&id));
        match existing {
            Some(row) => {
                trace!(entity = E::NAME, id = ?id, "updating row");
                *row = entity.clone();
            }
            None => {
                trace!(entity = E::NAME, id = ?id, "inserting row");
                table.push(Box::new(entity.clone()));
            }
        }
        Ok(entity)
    }

    fn get<E: Entity>(&self, id: &E::Id) -> Result<Option<E>, DaoError> {
        let tables = self.read()?;
        Ok(tables.get(&TypeId::of::<E>()).and_then(|table| {
            rows::<E>(table)
                .find(|row| row.id().as_ref() == Some(id))
                .cloned()
        }))
    }

    fn list<E: Entity>(&self, criteria: &CriteriaQuery<E>, window: Window) -> Result<Vec<E>, DaoError> {
        let tables = self.read()?;
        let Some(table) = tables.get(&TypeId::of::<E>()) else {
            return Ok(Vec::new());
        };

        let mut matched: Vec<E> = rows::<E>(table)
            .filter(|row| criteria.matches(row))
            .cloned()
            .collect();

        for order in criteria.orders().iter().rev() {
            if !matched.is_empty() && matched.iter().all(|row| row.property(order.property()).is_none()) {
                debug!(
                    entity = E::NAME,
                    property = order.property(),
                    "sort property absent on every row, keeping scan order"
                );
                continue;
            }
            matched.sort_by(|a, b| {
                let ordering = compare(a, b, order.property());
                match order.direction() {
                    SortType::Asc => ordering,
                    SortType::Desc => ordering.reverse()
                }
            });
        }

        trace!(
            entity = E::NAME,
            matched = matched.len(),
            ?window,
            "in-memory query"
        );

        let paged = matched.into_iter().skip(window.offset());
        Ok(match window.limit() {
            Some(limit) => paged.take(limit).collect(),
            None => paged.collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id:    Option<i64>,
        title: Option<String>,
        rank:  Option<i32>
    }

    impl Entity for Note {
        type Id = i64;
        const NAME: &'static str = "Note";

        fn id(&self) -> Option<i64> {
            self.id
        }

        fn property(&self, name: &str) -> Option<Value> {
            match name {
                "id" => self.id.map(Value::from),
                "title" => self.title.clone().map(Value::from),
                "rank" => self.rank.map(Value::from),
                _ => None
            }
        }
    }

    fn note(id: i64, title: &str, rank: Option<i32>) -> Note {
        Note {
            id: Some(id),
            title: Some(title.to_owned()),
            rank
        }
    }

    fn seeded() -> MemorySession {
        let session = MemorySessionFactory::new().session();
        session.persist(note(1, "b", Some(2))).unwrap();
        session.persist(note(2, "a", None)).unwrap();
        session.persist(note(3, "c", Some(1))).unwrap();
        session
    }

    #[test]
    fn persist_upserts_by_id() {
        let session = seeded();
        session.persist(note(1, "changed", Some(9))).unwrap();
        assert_eq!(session.count::<Note>().unwrap(), 3);
        let loaded = session.get::<Note>(&1).unwrap().unwrap();
        assert_eq!(loaded.title.as_deref(), Some("changed"));
    }

    #[test]
    fn persist_requires_identifier() {
        let session = MemorySession::default();
        let err = session
            .persist(Note {
                id:    None,
                title: None,
                rank:  None
            })
            .unwrap_err();
        assert!(matches!(err, DaoError::MissingIdentifier { entity: "Note" }));
    }

    #[test]
    fn get_missing_is_none() {
        let session = seeded();
        assert_eq!(session.get::<Note>(&42).unwrap(), None);
    }

    #[test]
    fn list_filters_sorts_and_pages() {
        let session = seeded();
        let cb = session.criteria_builder();
        let query = cb.create_query::<Note>();
        let from = query.from();
        let query = query.select(&from).order_by(cb.asc(from.get("rank")));

        let all = session.list(&query, Window::unbounded()).unwrap();
        let ids: Vec<_> = all.iter().filter_map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        let window = Window {
            max_results:  Some(1),
            first_result: Some(1)
        };
        let page = session.list(&query, window).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, Some(3));
    }

    #[test]
    fn list_descending() {
        let session = seeded();
        let cb = session.criteria_builder();
        let query = cb.create_query::<Note>();
        let from = query.from();
        let query = query.order_by(cb.desc(from.get("title")));
        let titles: Vec<_> = session
            .list(&query, Window::unbounded())
            .unwrap()
            .into_iter()
            .filter_map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["c", "b", "a"]);
    }

    #[test]
    fn unknown_sort_property_keeps_scan_order() {
        let session = seeded();
        let cb = session.criteria_builder();
        let query = cb.create_query::<Note>();
        let from = query.from();
        let query = query.order_by(cb.desc(from.get("ttile")));
        let ids: Vec<_> = session
            .list(&query, Window::unbounded())
            .unwrap()
            .into_iter()
            .filter_map(|n| n.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn list_with_restriction() {
        let session = seeded();
        let cb = session.criteria_builder();
        let query = cb.create_query::<Note>();
        let from = query.from();
        let query = query.restrict(vec![cb.equal(from.get("title"), "a")]);
        let found = session.list(&query, Window::unbounded()).unwrap();
        assert_eq!(found, vec![note(2, "a", None)]);
    }

    #[test]
    fn unique_result_rejects_many_rows() {
        let session = seeded();
        let query = session.create_query(session.criteria_builder().create_query::<Note>());
        let err = query.unique_result().unwrap_err();
        assert!(matches!(
            err,
            DaoError::NonUniqueResult {
                entity: "Note",
                count:  3
            }
        ));
    }

    #[test]
    fn unique_result_single_and_empty() {
        let session = seeded();
        let cb = session.criteria_builder();
        let criteria = cb.create_query::<Note>();
        let from = criteria.from();
        let one = session.create_query(criteria.clone().restrict(vec![cb.equal(from.get("id"), 3_i64)]));
        assert_eq!(one.unique_result().unwrap().and_then(|n| n.id), Some(3));

        let none = session.create_query(criteria.restrict(vec![cb.equal(from.get("id"), 7_i64)]));
        assert_eq!(none.unique_result().unwrap(), None);
    }

    #[test]
    fn clones_share_store() {
        let factory = MemorySessionFactory::new();
        factory.session().persist(note(5, "x", None)).unwrap();
        let other = factory.current_session().unwrap();
        assert_eq!(other.count::<Note>().unwrap(), 1);
        other.clear::<Note>().unwrap();
        assert_eq!(factory.session().count::<Note>().unwrap(), 0);
    }
}
