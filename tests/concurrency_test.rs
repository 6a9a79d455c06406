use branded::{make, make_with, Brand, Brander, Identity, Validated};
use crossbeam_utils::thread;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

enum Shard {}
type ShardId = Brand<u32, Shard>;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_branders_and_brands_are_thread_safe() {
    assert_send_sync::<ShardId>();
    assert_send_sync::<Identity<ShardId>>();
    assert_send_sync::<Validated<ShardId, fn(&u32) -> Result<(), String>>>();

    // Markers never affect auto traits: only the base does.
    assert_send_sync::<Brand<u32, std::rc::Rc<u8>>>();
    assert_send_sync::<Identity<Brand<u32, std::cell::Cell<u8>>>>();
}

#[test]
fn test_identity_brander_shared_across_threads() {
    let brander = make::<ShardId>();

    let totals = thread::scope(|s| {
        let handles: Vec<_> = (0..8_u32)
            .map(|worker| {
                s.spawn(move |_| {
                    (0..1000_u32)
                        .map(|i| brander.call(worker * 1000 + i).into_base())
                        .map(u64::from)
                        .sum::<u64>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .sum::<u64>()
    })
    .unwrap();

    assert_eq!(totals, (0..8000_u64).sum::<u64>());
}

#[test]
fn test_validated_brander_shared_across_threads() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&calls);
    let brander = make_with::<ShardId, _>(move |v: &u32| {
        counted.fetch_add(1, Ordering::Relaxed);
        if *v < 64 {
            Ok(())
        } else {
            Err(format!("shard {v} out of range"))
        }
    });

    let rejected = thread::scope(|s| {
        let brander = &brander;
        let handles: Vec<_> = (0..4_u32)
            .map(|worker| {
                s.spawn(move |_| {
                    (0..32_u32)
                        .filter(|i| brander.brand(worker * 32 + i).is_err())
                        .count()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .sum::<usize>()
    })
    .unwrap();

    // 128 candidates, 64 accepted.
    assert_eq!(rejected, 64);
    assert_eq!(calls.load(Ordering::Relaxed), 128);
}
