// Test fixtures - reusable test data
// Provides consistent instants, galleries and forms across test files

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use spark_fest::models::carousel::ImageRef;
use spark_fest::models::registration::{Category, RegistrationForm};

/// Festival opening: 15 Mar 2025 09:00 in Tirupati
pub fn opening() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 15, 3, 30, 0).unwrap()
}

/// One week before opening
pub fn week_before() -> DateTime<Utc> {
    opening() - chrono::Duration::days(7)
}

pub fn gallery(n: usize) -> Vec<ImageRef> {
    (0..n)
        .map(|i| ImageRef::new(format!("bytes://gallery-{i}.jpg"), "Event shot"))
        .collect()
}

pub fn filled_form() -> RegistrationForm {
    RegistrationForm {
        name: "Meera Iyer".to_string(),
        email: "meera@example.com".to_string(),
        phone: "+91 98765 43210".to_string(),
        category: Category::Cultural,
        notes: "Dance crew of five".to_string(),
    }
}
