//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, AuthorService, CategoryService, NewsService};
use crate::domain::policy::AccessPolicy;
use crate::domain::repositories::{
    AuthorRepository, CategoryRepository, NewsRepository, TokenRepository,
};

/// Repository implementations the services are built from.
#[derive(Clone)]
pub struct Repositories {
    pub news: Arc<dyn NewsRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub authors: Arc<dyn AuthorRepository>,
    pub tokens: Arc<dyn TokenRepository>,
}

#[derive(Clone)]
pub struct AppState {
    pub news_service: Arc<NewsService>,
    pub category_service: Arc<CategoryService>,
    pub author_service: Arc<AuthorService>,
    pub auth_service: Arc<AuthService>,
    pub policy: AccessPolicy,
}

impl AppState {
    /// Wires services on top of the given repositories.
    pub fn new(repositories: Repositories, token_signing_secret: String, policy: AccessPolicy) -> Self {
        let Repositories {
            news,
            categories,
            authors,
            tokens,
        } = repositories;

        Self {
            news_service: Arc::new(NewsService::new(news, categories.clone())),
            category_service: Arc::new(CategoryService::new(categories)),
            author_service: Arc::new(AuthorService::new(authors)),
            auth_service: Arc::new(AuthService::new(tokens, token_signing_secret)),
            policy,
        }
    }
}
