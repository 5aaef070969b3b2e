//! Transforms share nothing mutable, so one Transformer serves many threads.

use skysearch_domain::{Did, Handle, Identity, PostRecord, SearchDocument};
use skysearch_transform::{FixedClock, TransformConfig, Transformer};
use std::sync::Arc;
use std::thread;

#[test]
fn test_parallel_post_transforms_are_independent() {
    let clock = FixedClock::from_rfc3339("2006-01-02T15:04:05Z").unwrap();
    let transformer = Arc::new(Transformer::with_clock(clock, TransformConfig::default()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let transformer = Arc::clone(&transformer);
            thread::spawn(move || {
                let ident = Identity::new(Did::new(format!("did:plc:user{}", i)), Handle::new("u.test"));
                let post = PostRecord {
                    text: format!("#thread{} #shared 🧵", ["a", "b", "c", "d", "e", "f", "g", "h"][i]),
                    created_at: "2024-01-01T00:00:00Z".to_string(),
                    ..PostRecord::default()
                };
                (0..100)
                    .map(|n| transformer.transform_post(&post, &ident, &format!("rk{}", n), "bafy"))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let docs = handle.join().unwrap();
        assert_eq!(docs.len(), 100);
        for (n, doc) in docs.iter().enumerate() {
            assert_eq!(doc.doc_id(), format!("did:plc:user{}_rk{}", i, n));
            assert_eq!(doc.hashtag.as_ref().map(Vec::len), Some(2));
            assert_eq!(doc.emoji, Some(vec!["🧵".to_string()]));
        }
    }
}
