// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! DAO module with lazily built singletons.

use dao_derive::{Dao, dao_module, prelude::*};

mod model {
    use dao_derive::Dao;

    #[derive(Debug, Clone, Default, Dao)]
    #[entity]
    #[dao(prefix = "Brahma")]
    pub struct Order {
        #[id]
        pub id: Option<i64>
    }
}

#[derive(Debug, Clone, Default, Dao)]
#[entity]
pub struct Customer {
    #[id]
    pub id: Option<i64>
}

dao_module! {
    pub struct Daos {
        CustomerDao,
        model::BrahmaOrderDao,
    }
}

dao_module! {
    pub struct Nothing {}
}

fn main() {
    let daos = Daos::new(MemorySessionFactory::new());
    let first = daos.get_customer_dao();
    let second = daos.get_customer_dao();
    assert!(std::ptr::eq(first, second));

    let orders = daos.get_brahma_order_dao();
    assert!(orders.get_by_id(1).unwrap().is_none());
    let _ = daos.session_factory();
}
