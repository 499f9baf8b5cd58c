//! Composition root.
//!
//! Every factory wires Transport Client -> Repository Adapter -> Use-Case and
//! returns the use-case behind its trait. Each call builds a fresh graph;
//! the only shared piece, the Cache Store, is passed in by the caller.

use library::http::HttpClient;
use library::mock::{SeededBookRepository, SeededLoanRepository};
use library::ports::{
    AuthenticationRepository, BookRepository, CacheRepository, CityRepository, LoanRepository,
    LogoutRepository, StateRepository, UserLoginRepository, UserRepository,
};
use library::usecases::{
    AddUser, AddUserLogin, AddUserLoginService, AddUserService, Authentication,
    AuthenticationService, CacheLoadCurrentAccount, CacheSaveCurrentAccount, DeleteUser,
    DeleteUserService, LoadBooks, LoadBooksService, LoadCities, LoadCitiesService,
    LoadCurrentAccount, LoadLoans, LoadLoansService, LoadStates, LoadStatesService,
    LoadUserById, LoadUserByIdService, LoadUsers, LoadUsersService, Logout, LogoutService,
    SaveCurrentAccount, UpdateUser, UpdateUserService,
};
use library_http::{
    AuthorizedHttpClient, RemoteAuthenticationRepository, RemoteCityRepository,
    RemoteLogoutRepository, RemoteStateRepository, RemoteUserLoginRepository,
    RemoteUserRepository, ReqwestHttpClient,
};
use shared::Result;
use shared::config::{CacheBackend, Config};
use std::sync::Arc;
use storage_engine::{MokaCacheStore, SledCacheStore};
use tracing::info;

// === Infrastructure ===

pub fn make_api_url(config: &Config, path: &str) -> String {
    config.api_url(path)
}

pub fn make_http_client() -> Arc<dyn HttpClient> {
    Arc::new(ReqwestHttpClient::new())
}

pub fn make_authorized_http_client(cache: Arc<dyn CacheRepository>) -> Arc<dyn HttpClient> {
    Arc::new(AuthorizedHttpClient::new(make_http_client(), cache))
}

pub fn make_cache_repository(config: &Config) -> Result<Arc<dyn CacheRepository>> {
    match &config.cache {
        CacheBackend::Memory => {
            info!("Using in-memory cache store");
            Ok(Arc::new(MokaCacheStore::default()))
        }
        CacheBackend::Sled(path) => {
            info!("Using sled cache store at {}", path.display());
            Ok(Arc::new(SledCacheStore::new(path)?))
        }
    }
}

// === Repositories ===

pub fn make_remote_user_repository(
    config: &Config,
    cache: Arc<dyn CacheRepository>,
) -> Arc<dyn UserRepository> {
    Arc::new(RemoteUserRepository::new(
        make_api_url(config, "/users"),
        make_authorized_http_client(cache),
    ))
}

pub fn make_remote_user_login_repository(
    config: &Config,
    cache: Arc<dyn CacheRepository>,
) -> Arc<dyn UserLoginRepository> {
    Arc::new(RemoteUserLoginRepository::new(
        make_api_url(config, "/users/login"),
        make_authorized_http_client(cache),
    ))
}

pub fn make_remote_logout_repository(config: &Config) -> Arc<dyn LogoutRepository> {
    Arc::new(RemoteLogoutRepository::new(
        make_api_url(config, "/logout"),
        make_http_client(),
    ))
}

pub fn make_remote_authentication_repository(
    config: &Config,
) -> Arc<dyn AuthenticationRepository> {
    Arc::new(RemoteAuthenticationRepository::new(
        make_api_url(config, "/login"),
        make_http_client(),
    ))
}

pub fn make_remote_city_repository(
    config: &Config,
    cache: Arc<dyn CacheRepository>,
) -> Arc<dyn CityRepository> {
    Arc::new(RemoteCityRepository::new(
        make_api_url(config, "/cities"),
        make_authorized_http_client(cache),
    ))
}

pub fn make_remote_state_repository(
    config: &Config,
    cache: Arc<dyn CacheRepository>,
) -> Arc<dyn StateRepository> {
    Arc::new(RemoteStateRepository::new(
        make_api_url(config, "/states"),
        make_authorized_http_client(cache),
    ))
}

/// Books are not served by the API yet
pub fn make_mock_book_repository() -> Arc<dyn BookRepository> {
    Arc::new(SeededBookRepository::new())
}

/// Loans are not served by the API yet
pub fn make_mock_loan_repository() -> Arc<dyn LoanRepository> {
    Arc::new(SeededLoanRepository::new())
}

// === Use-cases ===

pub fn make_add_user(config: &Config, cache: Arc<dyn CacheRepository>) -> Arc<dyn AddUser> {
    Arc::new(AddUserService::new(make_remote_user_repository(config, cache)))
}

pub fn make_update_user(config: &Config, cache: Arc<dyn CacheRepository>) -> Arc<dyn UpdateUser> {
    Arc::new(UpdateUserService::new(make_remote_user_repository(
        config, cache,
    )))
}

pub fn make_delete_user(config: &Config, cache: Arc<dyn CacheRepository>) -> Arc<dyn DeleteUser> {
    Arc::new(DeleteUserService::new(make_remote_user_repository(
        config, cache,
    )))
}

pub fn make_load_users(config: &Config, cache: Arc<dyn CacheRepository>) -> Arc<dyn LoadUsers> {
    Arc::new(LoadUsersService::new(make_remote_user_repository(
        config, cache,
    )))
}

pub fn make_load_user_by_id(
    config: &Config,
    cache: Arc<dyn CacheRepository>,
) -> Arc<dyn LoadUserById> {
    Arc::new(LoadUserByIdService::new(make_remote_user_repository(
        config, cache,
    )))
}

pub fn make_add_user_login(
    config: &Config,
    cache: Arc<dyn CacheRepository>,
) -> Arc<dyn AddUserLogin> {
    Arc::new(AddUserLoginService::new(make_remote_user_login_repository(
        config, cache,
    )))
}

pub fn make_load_books() -> Arc<dyn LoadBooks> {
    Arc::new(LoadBooksService::new(make_mock_book_repository()))
}

pub fn make_load_loans() -> Arc<dyn LoadLoans> {
    Arc::new(LoadLoansService::new(make_mock_loan_repository()))
}

pub fn make_load_cities(config: &Config, cache: Arc<dyn CacheRepository>) -> Arc<dyn LoadCities> {
    Arc::new(LoadCitiesService::new(make_remote_city_repository(
        config, cache,
    )))
}

pub fn make_load_states(config: &Config, cache: Arc<dyn CacheRepository>) -> Arc<dyn LoadStates> {
    Arc::new(LoadStatesService::new(make_remote_state_repository(
        config, cache,
    )))
}

pub fn make_logout(config: &Config) -> Arc<dyn Logout> {
    Arc::new(LogoutService::new(make_remote_logout_repository(config)))
}

pub fn make_authentication(config: &Config) -> Arc<dyn Authentication> {
    Arc::new(AuthenticationService::new(
        make_remote_authentication_repository(config),
    ))
}

pub fn make_save_current_account(cache: Arc<dyn CacheRepository>) -> Arc<dyn SaveCurrentAccount> {
    Arc::new(CacheSaveCurrentAccount::new(cache))
}

pub fn make_load_current_account(cache: Arc<dyn CacheRepository>) -> Arc<dyn LoadCurrentAccount> {
    Arc::new(CacheLoadCurrentAccount::new(cache))
}
