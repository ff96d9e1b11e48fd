//! Seed data.
//!
//! Users and ratings always start from this data; stores start from it only
//! when no persisted store file exists.

use chrono::{TimeZone, Utc};

use storeboard_core::{Email, RatingId, Role, Score, StoreId, UserId};

use crate::models::{Rating, Store, User};

fn email(s: &str) -> Email {
    Email::parse(s).expect("seed email is valid")
}

fn score(n: u8) -> Score {
    Score::new(n).expect("seed score is in range")
}

/// The six seeded users: one admin, two regular users, and three store
/// owners - two with stores and one (Carol) still to create hers.
#[must_use]
pub fn users() -> Vec<User> {
    vec![
        User {
            id: UserId::new(1),
            name: "Admin User".to_string(),
            email: email("admin@example.com"),
            address: "123 Admin St, City".to_string(),
            role: Role::Admin,
            store_id: None,
        },
        User {
            id: UserId::new(2),
            name: "John Doe".to_string(),
            email: email("john.doe@example.com"),
            address: "456 User Ave, Town".to_string(),
            role: Role::RegularUser,
            store_id: None,
        },
        User {
            id: UserId::new(3),
            name: "Jane Smith".to_string(),
            email: email("jane.smith@example.com"),
            address: "789 Voter Rd, Village".to_string(),
            role: Role::RegularUser,
            store_id: None,
        },
        User {
            id: UserId::new(4),
            name: "Alice Owner".to_string(),
            email: email("alice.owner@example.com"),
            address: "101 Owner Blvd, Metropolis".to_string(),
            role: Role::StoreOwner,
            store_id: Some(StoreId::new(1)),
        },
        User {
            id: UserId::new(5),
            name: "Bob Merchant".to_string(),
            email: email("bob.merchant@example.com"),
            address: "202 Merchant Way, City".to_string(),
            role: Role::StoreOwner,
            store_id: Some(StoreId::new(2)),
        },
        User {
            id: UserId::new(6),
            name: "Carol Vendor".to_string(),
            email: email("carol.vendor@example.com"),
            address: "303 Startup Sq, Village".to_string(),
            role: Role::StoreOwner,
            store_id: None,
        },
    ]
}

/// The three seeded stores. Store 3 is owned by the admin.
#[must_use]
pub fn stores() -> Vec<Store> {
    vec![
        Store {
            id: StoreId::new(1),
            name: "Alice's Awesome Appliances".to_string(),
            email: email("contact@alices.com"),
            address: "555 Commerce St, Metropolis".to_string(),
            owner_id: UserId::new(4),
        },
        Store {
            id: StoreId::new(2),
            name: "Bob's Brilliant Books".to_string(),
            email: email("help@bobsbooks.com"),
            address: "777 Library Ln, City".to_string(),
            owner_id: UserId::new(5),
        },
        Store {
            id: StoreId::new(3),
            name: "General Goods & More".to_string(),
            email: email("info@generalgoods.com"),
            address: "999 Market Pl, Town".to_string(),
            owner_id: UserId::new(1),
        },
    ]
}

/// The four seeded ratings. Store 1 averages 4.5 from scores {5, 4}.
#[must_use]
pub fn ratings() -> Vec<Rating> {
    let ts = |y, m, d, h, min| {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0)
            .single()
            .expect("seed timestamp is valid")
    };

    vec![
        Rating {
            id: RatingId::new(1),
            user_id: UserId::new(2),
            store_id: StoreId::new(1),
            score: score(5),
            created_at: ts(2023, 10, 1, 10, 0),
        },
        Rating {
            id: RatingId::new(2),
            user_id: UserId::new(3),
            store_id: StoreId::new(1),
            score: score(4),
            created_at: ts(2023, 10, 2, 11, 30),
        },
        Rating {
            id: RatingId::new(3),
            user_id: UserId::new(2),
            store_id: StoreId::new(2),
            score: score(3),
            created_at: ts(2023, 10, 3, 14, 0),
        },
        Rating {
            id: RatingId::new(4),
            user_id: UserId::new(3),
            store_id: StoreId::new(3),
            score: score(5),
            created_at: ts(2023, 10, 4, 9, 0),
        },
    ]
}
