use std::rc::Rc;

use anyhow::Context;

use crate::{
    api::{self, Action, Comment, CommentId, CommentUpdate, Error, User, Vote},
    DataDump, Storage, StoreConfig,
};

/// Owner of the comment widget state
///
/// Every mutation replaces the whole persisted state. Snapshots returned by
/// [`CommentStore::dump`] are never affected by later mutations.
pub struct CommentStore<S> {
    storage: S,
    key: String,
    db: Rc<DataDump>,
}

impl<S: Storage> CommentStore<S> {
    pub fn initialize(storage: S) -> CommentStore<S> {
        CommentStore::initialize_with(storage, StoreConfig::default())
    }

    /// Loads the state persisted in `storage`, or the configured seed if there is none
    pub fn initialize_with(storage: S, config: StoreConfig) -> CommentStore<S> {
        let StoreConfig { storage_key, seed } = config;
        let loaded = load_dump(&storage, &storage_key).unwrap_or_else(|err| {
            tracing::warn!(?err, "ignoring unusable persisted state");
            None
        });
        let mut this = CommentStore {
            storage,
            key: storage_key,
            db: Rc::new(DataDump::stub()),
        };
        match loaded {
            Some(db) => {
                tracing::debug!(num_comments = db.comments.len(), "loaded persisted state");
                this.db = Rc::new(db);
            }
            None => {
                tracing::debug!("no persisted state, starting from seed");
                this.db = Rc::new(seed);
                this.persist();
            }
        }
        this
    }

    pub fn current_user(&self) -> &User {
        &self.db.current_user
    }

    pub fn comments(&self) -> &[Comment] {
        &self.db.comments
    }

    pub fn dump(&self) -> Rc<DataDump> {
        self.db.clone()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn comment(&self, id: &CommentId) -> Option<&Comment> {
        self.db.comment(id)
    }

    pub fn is_own(&self, c: &Comment) -> bool {
        self.db.is_own(c)
    }

    pub fn root_comments(&self) -> Vec<&Comment> {
        self.db.root_comments()
    }

    pub fn get_replies(&self, id: &CommentId) -> Vec<&Comment> {
        self.db.replies(id)
    }

    pub fn create_comment(
        &mut self,
        content: &str,
        replying_to: Option<CommentId>,
    ) -> Result<CommentId, Error> {
        let content = content.trim();
        if content.is_empty() {
            return Err(Error::EmptyContent);
        }
        let id = CommentId::generate();
        let db = Rc::make_mut(&mut self.db);
        let comment = Comment {
            id: id.clone(),
            content: String::from(content),
            created_at: api::now(),
            score: 0,
            user: db.current_user.clone(),
            replying_to,
        };
        db.add_comment(comment);
        tracing::debug!(%id, "created comment");
        self.persist();
        Ok(id)
    }

    pub fn update_comment(&mut self, u: CommentUpdate) -> Result<(), Error> {
        let u = u.validate()?;
        // check first so that a failed update does not unshare the snapshot
        if self.db.comment(&u.id).is_none() {
            return Err(Error::CommentNotFound(u.id));
        }
        Rc::make_mut(&mut self.db).update_comment(&u)?;
        tracing::debug!(update = ?u, "updated comment");
        self.persist();
        Ok(())
    }

    pub fn vote(&mut self, id: &CommentId, vote: Vote) -> Result<(), Error> {
        let score = self
            .db
            .comment(id)
            .ok_or_else(|| Error::CommentNotFound(id.clone()))?
            .score;
        self.update_comment(CommentUpdate::score(id.clone(), vote.apply(score)))
    }

    /// Deletes `id` and every comment transitively replying to it
    ///
    /// Returns the number of comments removed.
    pub fn delete_comment(&mut self, id: &CommentId) -> usize {
        let thread = self.db.thread(id);
        // only unshare the snapshot once something is known to go away
        if thread.iter().all(|i| self.db.comment(i).is_none()) {
            tracing::debug!(%id, "nothing to delete");
            return 0;
        }
        let removed = Rc::make_mut(&mut self.db).remove_all(&thread);
        tracing::debug!(%id, removed, "deleted comment thread");
        self.persist();
        removed
    }

    pub fn apply(&mut self, a: Action) -> Result<(), Error> {
        match a {
            Action::CreateComment {
                content,
                replying_to,
            } => self.create_comment(&content, replying_to).map(|_| ()),
            Action::UpdateComment(u) => self.update_comment(u),
            Action::Vote(id, vote) => self.vote(&id, vote),
            Action::DeleteComment(id) => {
                self.delete_comment(&id);
                Ok(())
            }
        }
    }

    fn persist(&mut self) {
        let res = serde_json::to_string(&*self.db)
            .context("serializing comment state")
            .and_then(|json| {
                self.storage
                    .store(&self.key, &json)
                    .with_context(|| format!("writing comment state to key {:?}", self.key))
            });
        if let Err(err) = res {
            tracing::error!(?err, "failed persisting comment state");
        }
    }
}

fn load_dump<S: Storage>(storage: &S, key: &str) -> anyhow::Result<Option<DataDump>> {
    let json = match storage
        .load(key)
        .with_context(|| format!("reading key {key:?} from storage"))?
    {
        None => return Ok(None),
        Some(json) => json,
    };
    let db = serde_json::from_str(&json)
        .with_context(|| format!("parsing comment state stored at key {key:?}"))?;
    Ok(Some(db))
}
