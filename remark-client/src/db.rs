use std::{
    cmp::Reverse,
    collections::{HashMap, HashSet},
};

use crate::api::{Comment, CommentId, CommentUpdate, Error, User};

/// The whole comment widget state, in the shape it is persisted with
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataDump {
    pub current_user: User,
    pub comments: Vec<Comment>,
}

impl DataDump {
    pub fn stub() -> DataDump {
        DataDump {
            current_user: User::stub(),
            comments: Vec::new(),
        }
    }

    pub fn comment(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == *id)
    }

    /// Whether `c` was written by the current user
    pub fn is_own(&self, c: &Comment) -> bool {
        c.user.username == self.current_user.username
    }

    /// Returns the top-level comments, highest score first
    ///
    /// Comments with the same score keep their insertion order.
    pub fn root_comments(&self) -> Vec<&Comment> {
        let mut res = self
            .comments
            .iter()
            .filter(|c| c.is_root())
            .collect::<Vec<_>>();
        res.sort_by_key(|c| Reverse(c.score));
        res
    }

    /// Returns the direct replies to `parent`, oldest first
    ///
    /// Replies with the same timestamp keep their insertion order.
    pub fn replies(&self, parent: &CommentId) -> Vec<&Comment> {
        let mut res = self
            .comments
            .iter()
            .filter(|c| c.is_reply_to(parent))
            .collect::<Vec<_>>();
        res.sort_by_key(|c| c.created_at);
        res
    }

    /// Returns `root` along with the ids of all comments transitively replying to it
    ///
    /// `root` is included even if no comment has this id.
    pub fn thread(&self, root: &CommentId) -> HashSet<CommentId> {
        let mut children: HashMap<&CommentId, Vec<&CommentId>> = HashMap::new();
        for c in self.comments.iter() {
            if let Some(parent) = &c.replying_to {
                children.entry(parent).or_insert_with(Vec::new).push(&c.id);
            }
        }

        let mut res = HashSet::new();
        let mut todo = vec![root];
        while let Some(id) = todo.pop() {
            // persisted data could hold a cycle, visit each id only once
            if !res.insert(id.clone()) {
                continue;
            }
            if let Some(c) = children.get(id) {
                todo.extend(c.iter().copied());
            }
        }
        res
    }

    pub fn add_comment(&mut self, c: Comment) {
        if self.comment(&c.id).is_some() {
            tracing::warn!(id = %c.id, "adding a comment whose id is already in use");
        }
        self.comments.push(c);
    }

    pub fn update_comment(&mut self, u: &CommentUpdate) -> Result<(), Error> {
        let c = self
            .comments
            .iter_mut()
            .find(|c| c.id == u.id)
            .ok_or_else(|| Error::CommentNotFound(u.id.clone()))?;
        u.apply_to(c);
        Ok(())
    }

    /// Removes `root` and all its replies, returning how many comments were dropped
    pub fn remove_thread(&mut self, root: &CommentId) -> usize {
        let thread = self.thread(root);
        self.remove_all(&thread)
    }

    /// Removes every comment whose id is in `ids`, returning how many were dropped
    pub fn remove_all(&mut self, ids: &HashSet<CommentId>) -> usize {
        let len_before = self.comments.len();
        self.comments.retain(|c| !ids.contains(&c.id));
        len_before - self.comments.len()
    }
}
