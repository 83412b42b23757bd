// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Enum and scalar defaults, transient and relational fields.

use dao_derive::{Dao, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Blocked
}

impl From<Status> for Value {
    fn from(status: Status) -> Self {
        Self::Text(format!("{status:?}"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub label: String
}

#[derive(Debug, Clone, Default, Dao)]
#[entity]
pub struct Member {
    #[id]
    pub id: Option<u64>,

    #[default_value(value = "Active", kind = "enum")]
    pub status: Option<Status>,

    #[default_value = "3"]
    pub level: Option<u8>,

    #[transient]
    pub session_token: Option<String>,

    #[one_to_many]
    pub tags: Option<Vec<Tag>>,

    #[many_to_one]
    pub parent: Vec<Tag>
}

fn main() -> Result<(), DaoError> {
    let dao = MemberDao::new(MemorySessionFactory::new());
    let member = dao.create_or_update(Member {
        id: Some(7),
        ..Member::default()
    })?;
    assert_eq!(member.status, Some(Status::Active));
    assert_eq!(member.level, Some(3));

    let blocked = dao.create_or_update(Member {
        id: Some(8),
        status: Some(Status::Blocked),
        ..Member::default()
    })?;
    assert_eq!(blocked.status, Some(Status::Blocked));

    let example = Member {
        status: Some(Status::Active),
        ..Member::default()
    };
    assert_eq!(dao.search(&example)?.len(), 1);
    Ok(())
}
