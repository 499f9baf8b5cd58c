use crate::domain::{Account, Credentials, LogoutParams, UserLoginParams};
use crate::ports::{
    AuthenticationRepository, CacheRepository, LogoutRepository, UserLoginRepository,
};
use async_trait::async_trait;
use shared::Result;
use std::sync::Arc;

/// Cache key holding the current access token
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Cache key holding the current refresh token
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

#[async_trait]
pub trait Logout: Send + Sync {
    async fn logout(&self, params: LogoutParams) -> Result<()>;
}

#[async_trait]
pub trait AddUserLogin: Send + Sync {
    async fn perform(&self, params: UserLoginParams) -> Result<()>;
}

#[async_trait]
pub trait Authentication: Send + Sync {
    async fn auth(&self, credentials: Credentials) -> Result<Account>;
}

#[async_trait]
pub trait SaveCurrentAccount: Send + Sync {
    /// `None` clears the stored tokens.
    async fn save(&self, account: Option<Account>) -> Result<()>;
}

#[async_trait]
pub trait LoadCurrentAccount: Send + Sync {
    async fn load(&self) -> Result<Option<Account>>;
}

pub struct LogoutService {
    repository: Arc<dyn LogoutRepository>,
}

impl LogoutService {
    pub fn new(repository: Arc<dyn LogoutRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Logout for LogoutService {
    async fn logout(&self, params: LogoutParams) -> Result<()> {
        self.repository.logout(params).await
    }
}

pub struct AddUserLoginService {
    repository: Arc<dyn UserLoginRepository>,
}

impl AddUserLoginService {
    pub fn new(repository: Arc<dyn UserLoginRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AddUserLogin for AddUserLoginService {
    async fn perform(&self, params: UserLoginParams) -> Result<()> {
        self.repository.add_login(params).await
    }
}

pub struct AuthenticationService {
    repository: Arc<dyn AuthenticationRepository>,
}

impl AuthenticationService {
    pub fn new(repository: Arc<dyn AuthenticationRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Authentication for AuthenticationService {
    async fn auth(&self, credentials: Credentials) -> Result<Account> {
        self.repository.auth(credentials).await
    }
}

pub struct CacheSaveCurrentAccount {
    cache: Arc<dyn CacheRepository>,
}

impl CacheSaveCurrentAccount {
    pub fn new(cache: Arc<dyn CacheRepository>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl SaveCurrentAccount for CacheSaveCurrentAccount {
    async fn save(&self, account: Option<Account>) -> Result<()> {
        let (access_token, refresh_token) = match &account {
            Some(account) => (account.access_token.as_str(), account.refresh_token.as_str()),
            None => ("", ""),
        };
        self.cache.set(ACCESS_TOKEN_KEY, access_token).await?;
        self.cache.set(REFRESH_TOKEN_KEY, refresh_token).await
    }
}

pub struct CacheLoadCurrentAccount {
    cache: Arc<dyn CacheRepository>,
}

impl CacheLoadCurrentAccount {
    pub fn new(cache: Arc<dyn CacheRepository>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl LoadCurrentAccount for CacheLoadCurrentAccount {
    async fn load(&self) -> Result<Option<Account>> {
        // An empty value is what a cleared account leaves behind
        let access_token = self
            .cache
            .get(ACCESS_TOKEN_KEY)
            .await?
            .filter(|token| !token.is_empty());
        let refresh_token = self
            .cache
            .get(REFRESH_TOKEN_KEY)
            .await?
            .filter(|token| !token.is_empty());

        Ok(access_token
            .zip(refresh_token)
            .map(|(access_token, refresh_token)| Account {
                access_token,
                refresh_token,
            }))
    }
}
