//! Property tests for the streak rules and generic CRUD.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use studyone_core::model::Task;
use studyone_core::repo::Repository;
use studyone_core::storage::Store;
use studyone_core::StreakRecord;

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    // A few decades around the epoch is plenty of calendar variety.
    (0u64..25_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

proptest! {
    #[test]
    fn recording_twice_equals_recording_once(today in arb_date(), count in 0u32..1000) {
        let mut streak = StreakRecord {
            count,
            last_date: today.checked_sub_days(Days::new(1)),
            history: Default::default(),
        };
        streak.record_completion(today);
        let once = streak.clone();
        streak.record_completion(today);
        prop_assert_eq!(streak, once);
    }

    #[test]
    fn next_day_increments_by_one(last in arb_date(), count in 1u32..1000) {
        let mut streak = StreakRecord {
            count,
            last_date: Some(last),
            history: Default::default(),
        };
        let today = last.checked_add_days(Days::new(1)).unwrap();
        streak.record_completion(today);
        prop_assert_eq!(streak.count, count + 1);
        prop_assert_eq!(streak.last_date, Some(today));
    }

    #[test]
    fn any_gap_resets_to_one(last in arb_date(), count in 1u32..1000, gap in 2u64..365) {
        let mut streak = StreakRecord {
            count,
            last_date: Some(last),
            history: Default::default(),
        };
        let today = last.checked_add_days(Days::new(gap)).unwrap();
        streak.record_completion(today);
        prop_assert_eq!(streak.count, 1);
    }

    #[test]
    fn display_is_count_or_zero(last in arb_date(), count in 0u32..1000, ahead in 0u64..10) {
        let streak = StreakRecord {
            count,
            last_date: Some(last),
            history: Default::default(),
        };
        let today = last.checked_add_days(Days::new(ahead)).unwrap();
        let shown = streak.current_streak(today);
        if ahead <= 1 {
            prop_assert_eq!(shown, count);
        } else {
            prop_assert_eq!(shown, 0);
        }
    }

    #[test]
    fn delete_removes_exactly_the_target(texts in prop::collection::vec("[a-z]{1,8}", 1..8), pick in any::<prop::sample::Index>()) {
        let store = Store::open_memory().unwrap();
        let repo = Repository::<Task>::new(&store);
        for text in &texts {
            repo.create(Task::new(text.clone())).unwrap();
        }
        let before = repo.load().unwrap();
        let victim = before[pick.index(before.len())].id.clone();

        prop_assert!(repo.delete(&victim).unwrap());
        let after = repo.load().unwrap();
        prop_assert_eq!(after.len(), before.len() - 1);
        prop_assert!(after.iter().all(|t| t.id != victim));
    }
}
