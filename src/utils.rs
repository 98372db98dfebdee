use core::sync::atomic::{AtomicI64, Ordering};

use chrono::{TimeZone, Utc};

use crate::entities::{Date, PostId};

pub(crate) trait LetChain {
    fn let_<F, R>(self, f: F) -> R
    where
        Self: Sized,
        F: FnOnce(Self) -> R;
}
impl<T> LetChain for T {
    #[inline]
    fn let_<F, R>(self, f: F) -> R
    where
        Self: Sized,
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Time-derived id (epoch millis), bumped past the last issued one so two
/// calls within the same millisecond still increase.
pub fn next_post_id() -> PostId {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ID.load(Ordering::Relaxed);

    loop {
        let next = now.max(last + 1);
        match LAST_ID.compare_exchange_weak(last, next, Ordering::SeqCst, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}

pub fn date_from_millis(ms: i64) -> Date { Utc.timestamp_millis_opt(ms).single().unwrap_or_default() }

#[inline]
pub fn is_blank(s: &str) -> bool { s.trim().is_empty() }

#[test]
fn post_ids_strictly_increase() {
    let a = next_post_id();
    let b = next_post_id();
    let c = next_post_id();

    assert!(a < b && b < c);
}

#[test]
fn millis_round_trip() {
    let d = date_from_millis(1_700_000_000_123);
    assert_eq!(d.timestamp_millis(), 1_700_000_000_123);
}
