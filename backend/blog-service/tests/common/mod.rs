//! Shared fixtures for service tests
//!
//! Provides mockall mocks of the three store traits (for interaction-level
//! assertions) and in-memory fakes backed by `Mutex<HashMap>` (for
//! scenario tests exercising real data flow without a database).
#![allow(dead_code)]

use async_trait::async_trait;
use blog_service::db::{CommentStore, PostStore, UserDirectory};
use blog_service::error::Result as ServiceResult;
use blog_service::models::{Comment, Post, User};
use chrono::{DateTime, Duration, TimeZone, Utc};
use mockall::mock;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

mock! {
    pub Users {}

    #[async_trait]
    impl UserDirectory for Users {
        async fn find_by_id(&self, id: i64) -> ServiceResult<Option<User>>;
    }
}

mock! {
    pub Posts {}

    #[async_trait]
    impl PostStore for Posts {
        async fn insert(&self, title: &str, content: &str, author_id: i64) -> ServiceResult<Post>;
        async fn find_by_id(&self, id: Uuid) -> ServiceResult<Option<Post>>;
        async fn update_content(&self, id: Uuid, title: &str, content: &str) -> ServiceResult<Option<Post>>;
        async fn delete(&self, id: Uuid) -> ServiceResult<()>;
        async fn find_page(&self, limit: i64, offset: i64) -> ServiceResult<Vec<Post>>;
        async fn search_page(&self, term: &str, limit: i64, offset: i64) -> ServiceResult<Vec<Post>>;
        async fn count(&self) -> ServiceResult<i64>;
        async fn count_matching(&self, term: &str) -> ServiceResult<i64>;
    }
}

mock! {
    pub Comments {}

    #[async_trait]
    impl CommentStore for Comments {
        async fn insert(&self, post_id: Uuid, body: &str, author_id: i64) -> ServiceResult<Comment>;
        async fn find_by_id(&self, id: Uuid) -> ServiceResult<Option<Comment>>;
        async fn update_body(&self, id: Uuid, body: &str) -> ServiceResult<Option<Comment>>;
        async fn delete(&self, id: Uuid) -> ServiceResult<()>;
        async fn delete_by_post_id(&self, post_id: Uuid) -> ServiceResult<u64>;
        async fn find_page_by_post(&self, post_id: Uuid, limit: i64, offset: i64) -> ServiceResult<Vec<Comment>>;
        async fn count_by_post(&self, post_id: Uuid) -> ServiceResult<i64>;
    }
}

/// Fixed reference instant so fakes can hand out distinct, ordered
/// creation timestamps.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
}

pub fn user(id: i64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: "$2b$12$fixture".to_string(),
        created_at: base_time(),
        updated_at: base_time(),
    }
}

pub fn post(author_id: i64, title: &str, content: &str) -> Post {
    Post {
        id: Uuid::new_v4(),
        title: title.to_string(),
        content: content.to_string(),
        author_id,
        created_at: base_time(),
    }
}

pub fn comment(post_id: Uuid, author_id: i64, body: &str) -> Comment {
    Comment {
        id: Uuid::new_v4(),
        post_id,
        body: body.to_string(),
        author_id,
        created_at: base_time(),
    }
}

fn page_slice<T>(rows: Vec<T>, limit: i64, offset: i64) -> Vec<T> {
    rows.into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect()
}

/// In-memory user directory
pub struct InMemoryUsers {
    users: HashMap<i64, User>,
}

impl InMemoryUsers {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.id, u)).collect(),
        }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUsers {
    async fn find_by_id(&self, id: i64) -> ServiceResult<Option<User>> {
        Ok(self.users.get(&id).cloned())
    }
}

/// In-memory post store. Each insert gets a creation timestamp one second
/// after the previous one, so newest-first ordering is deterministic.
#[derive(Default)]
pub struct InMemoryPosts {
    rows: Mutex<HashMap<Uuid, Post>>,
    ticks: Mutex<i64>,
}

impl InMemoryPosts {
    pub fn new() -> Self {
        Self::default()
    }

    fn newest_first(&self) -> Vec<Post> {
        let mut rows: Vec<Post> = self.rows.lock().unwrap().values().cloned().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }

    fn matching(&self, term: &str) -> Vec<Post> {
        let needle = term.to_lowercase();
        self.newest_first()
            .into_iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.content.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[async_trait]
impl PostStore for InMemoryPosts {
    async fn insert(&self, title: &str, content: &str, author_id: i64) -> ServiceResult<Post> {
        let mut ticks = self.ticks.lock().unwrap();
        *ticks += 1;
        let post = Post {
            id: Uuid::new_v4(),
            title: title.to_string(),
            content: content.to_string(),
            author_id,
            created_at: base_time() + Duration::seconds(*ticks),
        };
        self.rows.lock().unwrap().insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> ServiceResult<Option<Post>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn update_content(
        &self,
        id: Uuid,
        title: &str,
        content: &str,
    ) -> ServiceResult<Option<Post>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&id).map(|p| {
            p.title = title.to_string();
            p.content = content.to_string();
            p.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn find_page(&self, limit: i64, offset: i64) -> ServiceResult<Vec<Post>> {
        Ok(page_slice(self.newest_first(), limit, offset))
    }

    async fn search_page(&self, term: &str, limit: i64, offset: i64) -> ServiceResult<Vec<Post>> {
        Ok(page_slice(self.matching(term), limit, offset))
    }

    async fn count(&self) -> ServiceResult<i64> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }

    async fn count_matching(&self, term: &str) -> ServiceResult<i64> {
        Ok(self.matching(term).len() as i64)
    }
}

/// In-memory comment store
#[derive(Default)]
pub struct InMemoryComments {
    rows: Mutex<HashMap<Uuid, Comment>>,
    ticks: Mutex<i64>,
}

impl InMemoryComments {
    pub fn new() -> Self {
        Self::default()
    }

    fn newest_first_for(&self, post_id: Uuid) -> Vec<Comment> {
        let mut rows: Vec<Comment> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }
}

#[async_trait]
impl CommentStore for InMemoryComments {
    async fn insert(&self, post_id: Uuid, body: &str, author_id: i64) -> ServiceResult<Comment> {
        let mut ticks = self.ticks.lock().unwrap();
        *ticks += 1;
        let comment = Comment {
            id: Uuid::new_v4(),
            post_id,
            body: body.to_string(),
            author_id,
            created_at: base_time() + Duration::seconds(*ticks),
        };
        self.rows.lock().unwrap().insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: Uuid) -> ServiceResult<Option<Comment>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn update_body(&self, id: Uuid, body: &str) -> ServiceResult<Option<Comment>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&id).map(|c| {
            c.body = body.to_string();
            c.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn delete_by_post_id(&self, post_id: Uuid) -> ServiceResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|_, c| c.post_id != post_id);
        Ok((before - rows.len()) as u64)
    }

    async fn find_page_by_post(
        &self,
        post_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<Vec<Comment>> {
        Ok(page_slice(self.newest_first_for(post_id), limit, offset))
    }

    async fn count_by_post(&self, post_id: Uuid) -> ServiceResult<i64> {
        Ok(self.newest_first_for(post_id).len() as i64)
    }
}
