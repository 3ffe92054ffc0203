//! Concurrent use of the rating ledger.

use std::sync::Arc;
use std::thread;

use skill_core::errors::LedgerError;
use skill_rating::{adjust_distribution, Rating, RatingLedger};

fn seeded() -> RatingLedger {
    let ledger = RatingLedger::default();
    ledger.insert_user("u1", Rating::from_std(300.0, 500.0).unwrap());
    ledger.insert_user("u2", Rating::from_std(900.0, 300.0).unwrap());
    ledger.insert_problem("easy", Rating::from_std(150.0, 100.0).unwrap());
    ledger.insert_problem("hard", Rating::from_std(1900.0, 100.0).unwrap());
    ledger
}

#[test]
fn test_disjoint_updates_match_sequential() {
    let ledger = Arc::new(seeded());

    let a = {
        let ledger = Arc::clone(&ledger);
        thread::spawn(move || ledger.record_outcome("u1", "easy", true).map(|_| ()))
    };
    let b = {
        let ledger = Arc::clone(&ledger);
        thread::spawn(move || ledger.record_outcome("u2", "hard", false).map(|_| ()))
    };
    a.join().unwrap().unwrap();
    b.join().unwrap().unwrap();

    let (u1, easy) = adjust_distribution(
        &Rating::from_std(300.0, 500.0).unwrap(),
        &Rating::from_std(150.0, 100.0).unwrap(),
        true,
    )
    .unwrap();
    assert_eq!(ledger.user("u1"), Some(u1));
    assert_eq!(ledger.problem("easy"), Some(easy));
}

#[test]
fn test_contended_updates_are_not_lost() {
    let ledger = Arc::new(seeded());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || ledger.record_outcome("u1", "easy", true))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    // Identical outcomes commute, so the stored pair must equal eight
    // back-to-back updates. A lost write would leave it short.
    let mut user = Rating::from_std(300.0, 500.0).unwrap();
    let mut problem = Rating::from_std(150.0, 100.0).unwrap();
    for _ in 0..8 {
        (user, problem) = adjust_distribution(&user, &problem, true).unwrap();
    }
    assert_eq!(ledger.user("u1"), Some(user));
    assert_eq!(ledger.problem("easy"), Some(problem));
}

#[test]
fn test_errors_name_the_missing_entity() {
    let ledger = seeded();
    let err = ledger.record_outcome("nobody", "easy", true).unwrap_err();
    assert!(matches!(err, LedgerError::UnknownUser(ref id) if id == "nobody"));
}
