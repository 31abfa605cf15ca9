//! Demonstration records loaded into a fresh store.

use roster_people::NewPerson;

pub fn demo_people() -> Vec<NewPerson> {
    vec![
        NewPerson {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: Some("+1-555-0123".to_string()),
            address: Some("123 Main St, Anytown, USA".to_string()),
        },
        NewPerson {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            phone: Some("+1-555-0456".to_string()),
            address: Some("456 Oak Ave, Somewhere, USA".to_string()),
        },
        NewPerson {
            first_name: "Bob".to_string(),
            last_name: "Johnson".to_string(),
            email: "bob.johnson@example.com".to_string(),
            phone: Some("+1-555-0789".to_string()),
            address: None,
        },
    ]
}
