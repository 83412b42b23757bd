// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Prefix, entity name and every search variation.

use dao_derive::{Dao, prelude::*};

#[derive(Debug, Clone, Default, Dao)]
#[entity(name = "accounts")]
#[dao(prefix = "Brahma", variations, max_results = 50)]
pub struct Account {
    #[id]
    pub id: Option<String>,

    pub owner: Option<String>
}

fn main() -> Result<(), DaoError> {
    let dao = BrahmaAccountDao::new(MemorySessionFactory::new());
    dao.create_or_update(Account {
        id:    Some("a-1".into()),
        owner: Some("ann".into())
    })?;

    let example = Account::default();
    let params = SearchMeta::new().sort_by("owner").max_results(10);

    assert_eq!(dao.search_with_params(&example, Some(&params))?.len(), 1);

    let session = dao.current_session()?;
    let builder = session.criteria_builder();
    let query = builder.create_query::<Account>();
    let from = query.from();
    let restrictions = vec![builder.equal(from.get("owner"), "ann")];
    assert_eq!(dao.search_with_predicate_list(&example, restrictions, from, query)?.len(), 1);

    let query = builder.create_query::<Account>();
    let from = query.from();
    let rows = dao.search_with_params_and_predicate_list(&example, Some(&params), Vec::new(), from, query)?;
    assert_eq!(rows.len(), 1);

    assert_eq!(<Account as Entity>::NAME, "accounts");
    Ok(())
}
