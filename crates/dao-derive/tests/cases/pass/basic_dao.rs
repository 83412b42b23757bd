// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Minimal entity: identifier and one searchable field.

use dao_derive::{Dao, prelude::*};

#[derive(Debug, Clone, Default, Dao)]
#[entity]
pub struct User {
    #[id]
    pub id: Option<i64>,

    pub name: Option<String>
}

fn main() -> Result<(), DaoError> {
    let dao = UserDao::new(MemorySessionFactory::new());

    dao.create_or_update(User {
        id:   Some(1),
        name: Some("ann".into())
    })?;

    let found = dao.get_by_id(1)?;
    assert_eq!(found.and_then(|user| user.name).as_deref(), Some("ann"));

    let example = User {
        name: Some("ann".into()),
        ..User::default()
    };
    assert_eq!(dao.search(&example)?.len(), 1);
    assert!(dao.search_unique_result(&example)?.is_some());

    assert_eq!(<User as Entity>::NAME, "User");
    Ok(())
}
