//! Property-Based Tests for the Store Module
//!
//! Uses proptest to check the collection invariants over arbitrary
//! sequences of inserts, updates and deletes.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::error::StudentError;
use crate::store::{StudentCollection, StudentFields, StudentId};

// == Strategies ==
/// Emails from a small pool so collisions are frequent
fn email_strategy() -> impl Strategy<Value = String> {
    "[a-d]{1}@x\\.com".prop_map(|s| s)
}

fn fields_strategy() -> impl Strategy<Value = StudentFields> {
    ("[A-Za-z]{1,12}", email_strategy(), "[A-Z]{2,4}").prop_map(|(name, email, course)| {
        StudentFields {
            name,
            email,
            course,
            department: "Eng".to_string(),
            fees: "100".to_string(),
        }
    })
}

#[derive(Debug, Clone)]
enum StoreOp {
    Insert(StudentFields),
    /// Index into the ids seen so far
    Update(usize, StudentFields),
    Delete(usize),
}

fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        fields_strategy().prop_map(StoreOp::Insert),
        (any::<usize>(), fields_strategy()).prop_map(|(i, f)| StoreOp::Update(i, f)),
        any::<usize>().prop_map(StoreOp::Delete),
    ]
}

fn pick(ids: &[StudentId], index: usize) -> StudentId {
    if ids.is_empty() {
        StudentId::generate()
    } else {
        ids[index % ids.len()]
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // No two stored documents ever share an email.
    #[test]
    fn prop_email_uniqueness(ops in prop::collection::vec(store_op_strategy(), 1..60)) {
        let mut collection = StudentCollection::new();
        let mut ids: Vec<StudentId> = Vec::new();

        for op in ops {
            match op {
                StoreOp::Insert(fields) => {
                    let taken = collection.find_by_email(&fields.email, None).is_some();
                    match collection.insert(fields) {
                        Ok(id) => {
                            prop_assert!(!taken);
                            ids.push(id);
                        }
                        Err(err) => {
                            prop_assert!(taken);
                            prop_assert!(matches!(err, StudentError::Conflict(_)));
                        }
                    }
                }
                StoreOp::Update(i, fields) => {
                    let _ = collection.update(pick(&ids, i), fields);
                }
                StoreOp::Delete(i) => {
                    collection.delete(pick(&ids, i));
                }
            }

            let emails: HashSet<&str> = collection.iter().map(|d| d.fields.email.as_str()).collect();
            prop_assert_eq!(emails.len(), collection.len(), "Duplicate email stored");
        }
    }

    // Deleted ids stay deleted and are never handed out again.
    #[test]
    fn prop_ids_never_reused(ops in prop::collection::vec(store_op_strategy(), 1..60)) {
        let mut collection = StudentCollection::new();
        let mut ids: Vec<StudentId> = Vec::new();
        let mut issued: HashSet<StudentId> = HashSet::new();
        let mut deleted: HashSet<StudentId> = HashSet::new();

        for op in ops {
            match op {
                StoreOp::Insert(fields) => {
                    if let Ok(id) = collection.insert(fields) {
                        prop_assert!(issued.insert(id), "Id issued twice");
                        ids.push(id);
                    }
                }
                StoreOp::Update(i, fields) => {
                    let id = pick(&ids, i);
                    if let Ok(outcome) = collection.update(id, fields) {
                        prop_assert_eq!(outcome.matched, !deleted.contains(&id) && issued.contains(&id));
                    }
                }
                StoreOp::Delete(i) => {
                    let id = pick(&ids, i);
                    if collection.delete(id).is_some() {
                        deleted.insert(id);
                    }
                }
            }
        }

        for id in &deleted {
            prop_assert!(collection.get(*id).is_none());
        }
    }
}
