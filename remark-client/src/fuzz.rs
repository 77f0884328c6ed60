#![cfg(test)]

use std::{cmp, collections::HashSet, ops::RangeTo};

use crate::{
    api::{CommentId, CommentUpdate, Error, Vote},
    CommentStore, DataDump, MemoryStorage, DEFAULT_STORAGE_KEY,
};

#[derive(Clone, Debug, bolero::generator::TypeGenerator)]
enum FuzzOp {
    Create {
        #[generator(bolero::generator::gen_with::<String>().len(0..20usize))]
        content: String,
        parent: Option<usize>,
    },
    Edit {
        target: usize,
        #[generator(bolero::generator::gen_with::<String>().len(0..20usize))]
        content: String,
    },
    SetScore {
        target: usize,
        score: i64,
    },
    Vote {
        target: usize,
        up: bool,
    },
    Delete {
        target: usize,
    },
    DeleteMissing,
    Reload,
}

fn resize_int(fuzz_id: usize, RangeTo { end }: RangeTo<usize>) -> Option<usize> {
    if end == 0 {
        return None;
    }
    let bucket_size = cmp::max(1, usize::MAX / end); // in case we rounded to 0
    let id = fuzz_id / bucket_size;
    Some(cmp::min(id, end - 1)) // in case id was actually over end - 1 due to rounding
}

fn pick(store: &CommentStore<MemoryStorage>, fuzz_id: usize) -> Option<CommentId> {
    resize_int(fuzz_id, ..store.comments().len()).map(|i| store.comments()[i].id.clone())
}

fn check_invariants(store: &CommentStore<MemoryStorage>) {
    let ids = store.comments().iter().map(|c| &c.id).collect::<HashSet<_>>();
    assert_eq!(ids.len(), store.comments().len(), "duplicate comment ids");

    let roots = store.root_comments();
    assert!(roots.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(
        roots.len(),
        store.comments().iter().filter(|c| c.is_root()).count()
    );
    for c in store.comments() {
        let replies = store.get_replies(&c.id);
        assert!(replies.windows(2).all(|w| w[0].created_at <= w[1].created_at));
        assert!(replies.iter().all(|r| r.is_reply_to(&c.id)));
    }

    let persisted: DataDump = serde_json::from_str(
        store
            .storage()
            .get(DEFAULT_STORAGE_KEY)
            .expect("store did not persist anything"),
    )
    .expect("persisted state does not parse");
    assert_eq!(persisted, *store.dump(), "persisted state diverged");
}

fn execute_fuzz_op(store: &mut CommentStore<MemoryStorage>, op: FuzzOp) {
    match op {
        FuzzOp::Create { content, parent } => {
            let parent = parent.and_then(|p| pick(store, p));
            let len_before = store.comments().len();
            match store.create_comment(&content, parent.clone()) {
                Ok(id) => {
                    assert_eq!(store.comments().len(), len_before + 1);
                    let c = store.comment(&id).expect("created comment is missing");
                    assert_eq!((c.score, &c.replying_to), (0, &parent));
                    assert!(store.is_own(c));
                }
                Err(Error::EmptyContent) => {
                    assert!(content.trim().is_empty());
                    assert_eq!(store.comments().len(), len_before);
                }
                Err(e) => panic!("unexpected error creating comment: {e}"),
            }
        }
        FuzzOp::Edit { target, content } => {
            if let Some(id) = pick(store, target) {
                let before = store.comment(&id).cloned();
                match store.update_comment(CommentUpdate::content(id.clone(), content.clone())) {
                    Ok(()) => {
                        let after = store.comment(&id).expect("edited comment vanished");
                        assert_eq!(after.content, content.trim());
                        assert_eq!(Some(after.score), before.map(|c| c.score));
                    }
                    Err(Error::EmptyContent) => {
                        assert_eq!(store.comment(&id).cloned(), before)
                    }
                    Err(e) => panic!("unexpected error editing comment: {e}"),
                }
            }
        }
        FuzzOp::SetScore { target, score } => {
            if let Some(id) = pick(store, target) {
                let content = store.comment(&id).map(|c| c.content.clone());
                store
                    .update_comment(CommentUpdate::score(id.clone(), score))
                    .expect("setting score of existing comment");
                let after = store.comment(&id).expect("scored comment vanished");
                assert_eq!((after.score, Some(after.content.clone())), (score, content));
            }
        }
        FuzzOp::Vote { target, up } => {
            if let Some(id) = pick(store, target) {
                let vote = if up { Vote::Up } else { Vote::Down };
                let before = store.comment(&id).map(|c| c.score).unwrap_or_default();
                store.vote(&id, vote).expect("voting on existing comment");
                let after = store.comment(&id).map(|c| c.score).unwrap_or_default();
                assert_eq!(after, vote.apply(before));
            }
        }
        FuzzOp::Delete { target } => {
            if let Some(id) = pick(store, target) {
                let thread = store.dump().thread(&id);
                let survivors = store
                    .comments()
                    .iter()
                    .filter(|c| !thread.contains(&c.id))
                    .cloned()
                    .collect::<Vec<_>>();
                let removed = store.delete_comment(&id);
                assert_eq!(removed, thread.len());
                assert_eq!(store.comments(), &survivors[..]);
            }
        }
        FuzzOp::DeleteMissing => {
            let before = store.dump();
            assert_eq!(store.delete_comment(&CommentId::from("not-a-comment")), 0);
            assert_eq!(store.dump(), before);
        }
        FuzzOp::Reload => {
            let reloaded = CommentStore::initialize(store.storage().clone());
            assert_eq!(reloaded.dump(), store.dump());
            *store = reloaded;
        }
    }
}

#[test]
fn fuzz_store_operations() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt::try_init();
    }
    bolero::check!()
        .with_generator(bolero::generator::gen_with::<Vec<FuzzOp>>().len(1..100usize))
        .cloned()
        .for_each(|ops: Vec<FuzzOp>| {
            let mut store = CommentStore::initialize(MemoryStorage::new());
            check_invariants(&store);
            for op in ops {
                execute_fuzz_op(&mut store, op);
                check_invariants(&store);
            }
        })
}

#[test]
fn resize_int_stays_in_range() {
    assert_eq!(resize_int(12, ..0), None);
    assert_eq!(resize_int(0, ..3), Some(0));
    assert_eq!(resize_int(usize::MAX, ..3), Some(2));
    assert_eq!(resize_int(usize::MAX, ..1), Some(0));
}
