use roster_core::{DomainError, DomainResult, PersonId};
use roster_people::{NewPerson, Person};

/// In-memory person store.
///
/// Records are kept in insertion order. The store is plain data: callers
/// that share it across tasks wrap it in a lock (see `SimulatedPeopleApi`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonStore {
    people: Vec<Person>,
}

impl PersonStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the demonstration records.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for data in super::seed::demo_people() {
            store.insert(data);
        }
        store
    }

    pub fn list(&self) -> &[Person] {
        &self.people
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Id the next insert will receive: highest existing id + 1, or 1.
    pub fn next_id(&self) -> PersonId {
        self.people
            .iter()
            .map(|p| p.id)
            .max()
            .map(|max| max.next())
            .unwrap_or(PersonId::FIRST)
    }

    /// Append a new record, assigning its id.
    pub fn insert(&mut self, data: NewPerson) -> Person {
        let person = Person::with_id(self.next_id(), data);
        self.people.push(person.clone());
        person
    }

    /// Replace the record with `person.id` in place.
    pub fn update(&mut self, person: Person) -> DomainResult<Person> {
        let slot = self
            .people
            .iter_mut()
            .find(|p| p.id == person.id)
            .ok_or(DomainError::not_found(person.id))?;
        *slot = person.clone();
        Ok(person)
    }

    /// Remove the record with `id`, returning it.
    pub fn delete(&mut self, id: PersonId) -> DomainResult<Person> {
        let index = self
            .people
            .iter()
            .position(|p| p.id == id)
            .ok_or(DomainError::not_found(id))?;
        Ok(self.people.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn data(first: &str) -> NewPerson {
        NewPerson {
            first_name: first.to_string(),
            last_name: "Lee".to_string(),
            email: format!("{}@x.com", first.to_lowercase()),
            phone: None,
            address: None,
        }
    }

    #[test]
    fn first_insert_into_empty_store_gets_id_one() {
        let mut store = PersonStore::new();
        let person = store.insert(data("Ann"));
        assert_eq!(person.id, PersonId::FIRST);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn seeded_store_holds_demo_people_in_order() {
        let store = PersonStore::seeded();
        let names: Vec<&str> = store.list().iter().map(|p| p.first_name.as_str()).collect();
        assert_eq!(names, vec!["John", "Jane", "Bob"]);
        assert_eq!(store.next_id(), PersonId::new(4));
        assert_eq!(store.get(PersonId::new(3)).and_then(|p| p.address.clone()), None);
    }

    #[test]
    fn next_id_follows_the_highest_id_not_the_count() {
        let mut store = PersonStore::seeded();
        store.delete(PersonId::new(1)).unwrap();
        assert_eq!(store.insert(data("Ann")).id, PersonId::new(4));

        store.delete(PersonId::new(4)).unwrap();
        assert_eq!(store.insert(data("Bo")).id, PersonId::new(4));
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = PersonStore::seeded();
        let mut jane = store.get(PersonId::new(2)).cloned().unwrap();
        jane.email = "jane@new.org".to_string();
        jane.phone = None;

        store.update(jane.clone()).unwrap();
        assert_eq!(store.list()[1], jane);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn update_and_delete_of_missing_id_leave_store_unchanged() {
        let mut store = PersonStore::seeded();
        let before = store.clone();

        let ghost = Person::with_id(PersonId::new(99), data("Ghost"));
        assert_eq!(store.update(ghost), Err(DomainError::not_found(PersonId::new(99))));
        assert_eq!(store.delete(PersonId::new(99)), Err(DomainError::not_found(PersonId::new(99))));
        assert_eq!(store, before);
    }

    #[test]
    fn get_of_never_issued_id_is_none() {
        assert!(PersonStore::seeded().get(PersonId::new(1000)).is_none());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: for any interleaving of inserts and deletes, every insert
        /// receives max(existing) + 1 (or 1) and ids stay unique.
        #[test]
        fn insert_assigns_max_plus_one(ops in prop::collection::vec(any::<(bool, u8)>(), 1..40)) {
            let mut store = PersonStore::new();

            for (is_insert, pick) in ops {
                if is_insert || store.is_empty() {
                    let expected = store
                        .list()
                        .iter()
                        .map(|p| p.id.get())
                        .max()
                        .map(|m| m + 1)
                        .unwrap_or(1);
                    let person = store.insert(data("Ann"));
                    prop_assert_eq!(person.id.get(), expected);
                } else {
                    let victim = store.list()[pick as usize % store.len()].id;
                    store.delete(victim).unwrap();
                }

                let mut ids: Vec<u64> = store.list().iter().map(|p| p.id.get()).collect();
                let total = ids.len();
                ids.sort_unstable();
                ids.dedup();
                prop_assert_eq!(ids.len(), total);
            }
        }
    }
}
