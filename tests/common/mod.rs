#![allow(dead_code)]

//! Shared fixtures for HTTP tests.
//!
//! All repositories are backed by one in-memory store so that cascading
//! deletes and cross-entity lookups behave like the PostgreSQL schema.

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard};

use news_api::application::services::hash_token;
use news_api::domain::entities::{
    AUTHOR_NOT_FOUND, Author, CATEGORY_NOT_FOUND, Category, NEWS_NOT_FOUND, NewAuthor, NewCategory,
    NewNews, NewUser, News, UpdateAuthor, UpdateNews, User,
};
use news_api::domain::identity::Principal;
use news_api::domain::policy::{AccessPolicy, CategoryWrites};
use news_api::domain::repositories::{
    ApiToken, AuthorRepository, CategoryRepository, NewsRepository, TokenRepository,
    UserRepository,
};
use news_api::error::AppError;
use news_api::routes::router;
use news_api::state::{AppState, Repositories};

pub const SIGNING_SECRET: &str = "test-signing-secret";

#[derive(Default)]
pub struct Store {
    next_id: i64,
    users: Vec<User>,
    authors: Vec<Author>,
    categories: Vec<Category>,
    news: Vec<News>,
    tokens: Vec<ApiToken>,
    /// When set, every repository call fails with an internal error.
    broken: bool,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone, Default)]
pub struct InMemoryDb(Arc<Mutex<Store>>);

impl InMemoryDb {
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.0.lock().unwrap()
    }

    fn check(&self) -> Result<MutexGuard<'_, Store>, AppError> {
        let store = self.lock();
        if store.broken {
            return Err(AppError::internal("store unavailable"));
        }
        Ok(store)
    }

    pub fn break_store(&self) {
        self.lock().broken = true;
    }

    pub fn add_user(&self, username: &str, is_staff: bool) -> User {
        let mut s = self.lock();
        let user = User {
            id: s.next_id(),
            username: username.to_string(),
            is_staff,
            created_at: Utc::now(),
        };
        s.users.push(user.clone());
        user
    }

    pub fn add_author(&self, user_id: i64, name: &str) -> Author {
        let mut s = self.lock();
        let now = Utc::now();
        let author = Author {
            id: s.next_id(),
            user_id,
            name: name.to_string(),
            bio: None,
            created_at: now,
            updated_at: now,
        };
        s.authors.push(author.clone());
        author
    }

    pub fn add_category(&self, name: &str) -> Category {
        let mut s = self.lock();
        let category = Category {
            id: s.next_id(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        s.categories.push(category.clone());
        category
    }

    pub fn add_news(&self, author_id: i64, category_id: i64, title: &str) -> News {
        let mut s = self.lock();
        let now = Utc::now();
        let news = News {
            id: s.next_id(),
            title: title.to_string(),
            body: format!("{title} body"),
            author_id,
            category_id,
            created_at: now,
            updated_at: now,
        };
        s.news.push(news.clone());
        news
    }

    /// Stores a token for `user_id` and returns the raw value to send.
    pub fn add_token(&self, user_id: i64, raw: &str) -> String {
        let mut s = self.lock();
        let token = ApiToken {
            id: s.next_id(),
            user_id,
            name: format!("token-{raw}"),
            token_hash: hash_token(SIGNING_SECRET, raw),
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        };
        s.tokens.push(token);
        raw.to_string()
    }

    pub fn revoke_all_tokens(&self) {
        for t in self.lock().tokens.iter_mut() {
            t.revoked_at = Some(Utc::now());
        }
    }

    pub fn token_last_used(&self, raw: &str) -> Option<chrono::DateTime<Utc>> {
        let hash = hash_token(SIGNING_SECRET, raw);
        self.lock()
            .tokens
            .iter()
            .find(|t| t.token_hash == hash)
            .and_then(|t| t.last_used_at)
    }

    pub fn news(&self) -> Vec<News> {
        self.lock().news.clone()
    }

    pub fn find_news(&self, id: i64) -> Option<News> {
        self.lock().news.iter().find(|n| n.id == id).cloned()
    }

    pub fn authors(&self) -> Vec<Author> {
        self.lock().authors.clone()
    }

    pub fn categories(&self) -> Vec<Category> {
        self.lock().categories.clone()
    }
}

#[async_trait]
impl NewsRepository for InMemoryDb {
    async fn create(&self, new_news: NewNews) -> Result<News, AppError> {
        let mut s = self.check()?;
        if !s.authors.iter().any(|a| a.id == new_news.author_id)
            || !s.categories.iter().any(|c| c.id == new_news.category_id)
        {
            return Err(AppError::field("non_field_errors", "Referenced object does not exist."));
        }
        let now = Utc::now();
        let news = News {
            id: s.next_id(),
            title: new_news.title,
            body: new_news.body,
            author_id: new_news.author_id,
            category_id: new_news.category_id,
            created_at: now,
            updated_at: now,
        };
        s.news.push(news.clone());
        Ok(news)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<News>, AppError> {
        Ok(self.check()?.news.iter().find(|n| n.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<News>, AppError> {
        Ok(self.check()?.news.clone())
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<News>, AppError> {
        Ok(self
            .check()?
            .news
            .iter()
            .filter(|n| n.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, update: UpdateNews) -> Result<News, AppError> {
        let mut s = self.check()?;
        let news = s
            .news
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::not_found(NEWS_NOT_FOUND))?;
        news.title = update.title;
        news.body = update.body;
        news.category_id = update.category_id;
        news.updated_at = Utc::now();
        Ok(news.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut s = self.check()?;
        let before = s.news.len();
        s.news.retain(|n| n.id != id);
        if s.news.len() == before {
            return Err(AppError::not_found(NEWS_NOT_FOUND));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryDb {
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError> {
        let mut s = self.check()?;
        let category = Category {
            id: s.next_id(),
            name: new_category.name,
            created_at: Utc::now(),
        };
        s.categories.push(category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError> {
        Ok(self.check()?.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.check()?.categories.clone())
    }

    async fn update(&self, id: i64, update: NewCategory) -> Result<Category, AppError> {
        let mut s = self.check()?;
        let category = s
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::not_found(CATEGORY_NOT_FOUND))?;
        category.name = update.name;
        Ok(category.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut s = self.check()?;
        let before = s.categories.len();
        s.categories.retain(|c| c.id != id);
        if s.categories.len() == before {
            return Err(AppError::not_found(CATEGORY_NOT_FOUND));
        }
        s.news.retain(|n| n.category_id != id);
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.check()?.categories.len() as i64)
    }
}

#[async_trait]
impl AuthorRepository for InMemoryDb {
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let mut s = self.check()?;
        if s.authors.iter().any(|a| a.user_id == new_author.user_id) {
            return Err(AppError::conflict("Unique constraint violation (authors_user_id_key)"));
        }
        let now = Utc::now();
        let author = Author {
            id: s.next_id(),
            user_id: new_author.user_id,
            name: new_author.name,
            bio: new_author.bio,
            created_at: now,
            updated_at: now,
        };
        s.authors.push(author.clone());
        Ok(author)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Author>, AppError> {
        Ok(self.check()?.authors.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Option<Author>, AppError> {
        Ok(self
            .check()?
            .authors
            .iter()
            .find(|a| a.user_id == user_id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Author>, AppError> {
        Ok(self.check()?.authors.clone())
    }

    async fn update(&self, id: i64, update: UpdateAuthor) -> Result<Author, AppError> {
        let mut s = self.check()?;
        let author = s
            .authors
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::not_found(AUTHOR_NOT_FOUND))?;
        let mut updated = update.apply(author.clone());
        updated.updated_at = Utc::now();
        *author = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut s = self.check()?;
        let before = s.authors.len();
        s.authors.retain(|a| a.id != id);
        if s.authors.len() == before {
            return Err(AppError::not_found(AUTHOR_NOT_FOUND));
        }
        s.news.retain(|n| n.author_id != id);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryDb {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut s = self.check()?;
        let user = User {
            id: s.next_id(),
            username: new_user.username,
            is_staff: new_user.is_staff,
            created_at: Utc::now(),
        };
        s.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .check()?
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.check()?.users.clone())
    }
}

#[async_trait]
impl TokenRepository for InMemoryDb {
    async fn resolve_principal(&self, token_hash: &str) -> Result<Option<Principal>, AppError> {
        let s = self.check()?;
        let Some(token) = s
            .tokens
            .iter()
            .find(|t| t.token_hash == token_hash && t.revoked_at.is_none())
        else {
            return Ok(None);
        };
        let Some(user) = s.users.iter().find(|u| u.id == token.user_id) else {
            return Ok(None);
        };
        Ok(Some(Principal {
            user_id: user.id,
            username: user.username.clone(),
            is_staff: user.is_staff,
            author_id: s.authors.iter().find(|a| a.user_id == user.id).map(|a| a.id),
        }))
    }

    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError> {
        let mut s = self.check()?;
        if let Some(t) = s.tokens.iter_mut().find(|t| t.token_hash == token_hash) {
            t.last_used_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn create_token(
        &self,
        user_id: i64,
        name: &str,
        token_hash: &str,
    ) -> Result<ApiToken, AppError> {
        let mut s = self.check()?;
        let token = ApiToken {
            id: s.next_id(),
            user_id,
            name: name.to_string(),
            token_hash: token_hash.to_string(),
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        };
        s.tokens.push(token.clone());
        Ok(token)
    }

    async fn list_tokens(&self) -> Result<Vec<ApiToken>, AppError> {
        Ok(self.check()?.tokens.clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ApiToken>, AppError> {
        Ok(self.check()?.tokens.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ApiToken>, AppError> {
        Ok(self.check()?.tokens.iter().find(|t| t.name == name).cloned())
    }

    async fn revoke_token(&self, id: i64) -> Result<(), AppError> {
        let mut s = self.check()?;
        if let Some(t) = s.tokens.iter_mut().find(|t| t.id == id) {
            t.revoked_at = Some(Utc::now());
        }
        Ok(())
    }
}

pub fn create_test_state(db: &InMemoryDb, category_writes: CategoryWrites) -> AppState {
    let repositories = Repositories {
        news: Arc::new(db.clone()),
        categories: Arc::new(db.clone()),
        authors: Arc::new(db.clone()),
        tokens: Arc::new(db.clone()),
    };
    AppState::new(
        repositories,
        SIGNING_SECRET.to_string(),
        AccessPolicy::new(category_writes),
    )
}

pub struct TestApp {
    pub server: TestServer,
    pub db: InMemoryDb,
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(CategoryWrites::StaffOnly)
}

pub fn spawn_app_with(category_writes: CategoryWrites) -> TestApp {
    let db = InMemoryDb::default();
    let state = create_test_state(&db, category_writes);
    let server = TestServer::new(router(state, None)).unwrap();
    TestApp { server, db }
}

/// A caller with an account, an optional author profile and a token.
pub struct Caller {
    pub user: User,
    pub author: Option<Author>,
    pub token: String,
}

impl Caller {
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub fn author_id(&self) -> i64 {
        self.author.as_ref().map(|a| a.id).unwrap()
    }
}

pub fn staff_author(db: &InMemoryDb, username: &str) -> Caller {
    caller(db, username, true, true)
}

pub fn plain_author(db: &InMemoryDb, username: &str) -> Caller {
    caller(db, username, false, true)
}

pub fn caller(db: &InMemoryDb, username: &str, is_staff: bool, with_author: bool) -> Caller {
    let user = db.add_user(username, is_staff);
    let author = with_author.then(|| db.add_author(user.id, username));
    let token = db.add_token(user.id, &format!("{username}-token"));
    Caller {
        user,
        author,
        token,
    }
}
