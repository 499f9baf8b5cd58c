use async_trait::async_trait;
use library::domain::{
    Account, AddUserParams, City, Credentials, LogoutParams, State, User, UserLoginParams,
};
use library::http::{HttpClient, HttpRequest};
use library::ports::{
    AuthenticationRepository, CityRepository, LogoutRepository, StateRepository,
    UserLoginRepository, UserRepository,
};
use shared::Result;
use std::sync::Arc;

// Each adapter is handed the absolute URL of its resource (for example
// `http://host/users`) and issues exactly one request per repository call.

/// `/users` resource
pub struct RemoteUserRepository {
    url: String,
    client: Arc<dyn HttpClient>,
}

impl RemoteUserRepository {
    pub fn new(url: impl Into<String>, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.url, id)
    }
}

#[async_trait]
impl UserRepository for RemoteUserRepository {
    async fn add(&self, params: AddUserParams) -> Result<User> {
        let request = HttpRequest::post(&self.url).with_body(&params)?;
        self.client.request(request).await?.into_json()
    }

    async fn update(&self, id: &str, params: AddUserParams) -> Result<User> {
        let request = HttpRequest::put(self.item_url(id)).with_body(&params)?;
        self.client.request(request).await?.into_json()
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .request(HttpRequest::delete(self.item_url(id)))
            .await?;
        Ok(())
    }

    async fn load_by_id(&self, id: &str) -> Result<User> {
        self.client
            .request(HttpRequest::get(self.item_url(id)))
            .await?
            .into_json()
    }

    async fn load_all(&self) -> Result<Vec<User>> {
        self.client
            .request(HttpRequest::get(&self.url))
            .await?
            .into_json()
    }
}

/// `POST /users/login`
pub struct RemoteUserLoginRepository {
    url: String,
    client: Arc<dyn HttpClient>,
}

impl RemoteUserLoginRepository {
    pub fn new(url: impl Into<String>, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl UserLoginRepository for RemoteUserLoginRepository {
    async fn add_login(&self, params: UserLoginParams) -> Result<()> {
        let request = HttpRequest::post(&self.url).with_body(&params)?;
        self.client.request(request).await?;
        Ok(())
    }
}

/// `POST /logout`
pub struct RemoteLogoutRepository {
    url: String,
    client: Arc<dyn HttpClient>,
}

impl RemoteLogoutRepository {
    pub fn new(url: impl Into<String>, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl LogoutRepository for RemoteLogoutRepository {
    async fn logout(&self, params: LogoutParams) -> Result<()> {
        let request = HttpRequest::post(&self.url).with_body(&params)?;
        self.client.request(request).await?;
        Ok(())
    }
}

/// `POST /login`
pub struct RemoteAuthenticationRepository {
    url: String,
    client: Arc<dyn HttpClient>,
}

impl RemoteAuthenticationRepository {
    pub fn new(url: impl Into<String>, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl AuthenticationRepository for RemoteAuthenticationRepository {
    async fn auth(&self, credentials: Credentials) -> Result<Account> {
        let request = HttpRequest::post(&self.url).with_body(&credentials)?;
        self.client.request(request).await?.into_json()
    }
}

/// `GET /cities`
pub struct RemoteCityRepository {
    url: String,
    client: Arc<dyn HttpClient>,
}

impl RemoteCityRepository {
    pub fn new(url: impl Into<String>, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl CityRepository for RemoteCityRepository {
    async fn load_all(&self) -> Result<Vec<City>> {
        self.client
            .request(HttpRequest::get(&self.url))
            .await?
            .into_json()
    }
}

/// `GET /states`
pub struct RemoteStateRepository {
    url: String,
    client: Arc<dyn HttpClient>,
}

impl RemoteStateRepository {
    pub fn new(url: impl Into<String>, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }
}

#[async_trait]
impl StateRepository for RemoteStateRepository {
    async fn load_all(&self) -> Result<Vec<State>> {
        self.client
            .request(HttpRequest::get(&self.url))
            .await?
            .into_json()
    }
}
