use crate::domain::{
    Account, AddUserParams, Book, City, Credentials, Loan, LogoutParams, State, User,
    UserLoginParams,
};
use async_trait::async_trait;
use shared::Result;

// Ports are the contracts each backing store (HTTP, mock, key/value) satisfies.
// Errors are returned exactly as the adapter produced them.

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn add(&self, params: AddUserParams) -> Result<User>;

    /// Overwrite the stored user and return the new snapshot
    async fn update(&self, id: &str, params: AddUserParams) -> Result<User>;

    async fn delete(&self, id: &str) -> Result<()>;

    async fn load_by_id(&self, id: &str) -> Result<User>;

    async fn load_all(&self) -> Result<Vec<User>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn load_all(&self) -> Result<Vec<Book>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanRepository: Send + Sync {
    async fn load_all(&self) -> Result<Vec<Loan>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn load_all(&self) -> Result<Vec<City>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StateRepository: Send + Sync {
    async fn load_all(&self) -> Result<Vec<State>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogoutRepository: Send + Sync {
    async fn logout(&self, params: LogoutParams) -> Result<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserLoginRepository: Send + Sync {
    async fn add_login(&self, params: UserLoginParams) -> Result<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationRepository: Send + Sync {
    async fn auth(&self, credentials: Credentials) -> Result<Account>;
}

/// Raw string key/value store. A missing key is `Ok(None)`, never an error.
/// No expiry or eviction is implied; concurrent writes to one key race and
/// the last one wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheRepository: Send + Sync {
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    async fn get(&self, key: &str) -> Result<Option<String>>;
}
