// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generated DAO over a hand-written session backend.

use dao_derive::{CriteriaQuery, Dao, Window, prelude::*};

#[derive(Debug, Clone, Default, Dao)]
#[entity]
pub struct Event {
    #[id]
    pub id: Option<i64>,

    pub kind: Option<String>
}

#[derive(Debug, Clone, Copy)]
struct NullSession;

impl Session for NullSession {
    fn persist<E: Entity>(&self, entity: E) -> Result<E, DaoError> {
        Ok(entity)
    }

    fn get<E: Entity>(&self, _id: &E::Id) -> Result<Option<E>, DaoError> {
        Ok(None)
    }

    fn list<E: Entity>(&self, _criteria: &CriteriaQuery<E>, _window: Window) -> Result<Vec<E>, DaoError> {
        Ok(Vec::new())
    }
}

#[derive(Debug)]
struct NullFactory;

impl SessionFactory for NullFactory {
    type Session = NullSession;

    fn current_session(&self) -> Result<NullSession, DaoError> {
        Ok(NullSession)
    }
}

fn main() -> Result<(), DaoError> {
    let dao = EventDao::new(NullFactory);
    let event = dao.create_or_update(Event {
        id:   Some(1),
        kind: Some("login".into())
    })?;
    assert_eq!(event.id, Some(1));
    assert!(dao.search(&Event::default())?.is_empty());
    assert!(format!("{dao:?}").contains("EventDao"));
    Ok(())
}
