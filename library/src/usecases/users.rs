use crate::domain::{AddUserParams, User};
use crate::ports::UserRepository;
use async_trait::async_trait;
use shared::Result;
use std::sync::Arc;

#[async_trait]
pub trait AddUser: Send + Sync {
    async fn perform(&self, params: AddUserParams) -> Result<User>;
}

#[async_trait]
pub trait UpdateUser: Send + Sync {
    async fn perform(&self, id: &str, params: AddUserParams) -> Result<User>;
}

#[async_trait]
pub trait DeleteUser: Send + Sync {
    async fn perform(&self, id: &str) -> Result<()>;
}

#[async_trait]
pub trait LoadUsers: Send + Sync {
    async fn perform(&self) -> Result<Vec<User>>;
}

#[async_trait]
pub trait LoadUserById: Send + Sync {
    async fn perform(&self, id: &str) -> Result<User>;
}

pub struct AddUserService {
    repository: Arc<dyn UserRepository>,
}

impl AddUserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AddUser for AddUserService {
    async fn perform(&self, params: AddUserParams) -> Result<User> {
        self.repository.add(params).await
    }
}

pub struct UpdateUserService {
    repository: Arc<dyn UserRepository>,
}

impl UpdateUserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UpdateUser for UpdateUserService {
    async fn perform(&self, id: &str, params: AddUserParams) -> Result<User> {
        self.repository.update(id, params).await
    }
}

pub struct DeleteUserService {
    repository: Arc<dyn UserRepository>,
}

impl DeleteUserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl DeleteUser for DeleteUserService {
    async fn perform(&self, id: &str) -> Result<()> {
        self.repository.delete(id).await
    }
}

pub struct LoadUsersService {
    repository: Arc<dyn UserRepository>,
}

impl LoadUsersService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl LoadUsers for LoadUsersService {
    async fn perform(&self) -> Result<Vec<User>> {
        self.repository.load_all().await
    }
}

pub struct LoadUserByIdService {
    repository: Arc<dyn UserRepository>,
}

impl LoadUserByIdService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl LoadUserById for LoadUserByIdService {
    async fn perform(&self, id: &str) -> Result<User> {
        self.repository.load_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockUserRepository;
    use shared::Error;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: "Ana Souza".to_string(),
            email: "ana@example.org".to_string(),
            phone: None,
            address: None,
        }
    }

    fn params() -> AddUserParams {
        AddUserParams {
            name: "Ana Souza".to_string(),
            email: "ana@example.org".to_string(),
            phone: Some("+55 11 99999-0000".to_string()),
            address: None,
        }
    }

    #[tokio::test]
    async fn test_load_users_returns_repository_result() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_load_all()
            .times(1)
            .returning(|| Ok(vec![user("u1")]));

        let load_users = LoadUsersService::new(Arc::new(repository));
        let users = load_users.perform().await.unwrap();

        assert_eq!(users, vec![user("u1")]);
    }

    #[tokio::test]
    async fn test_load_users_propagates_error() {
        let mut repository = MockUserRepository::new();
        repository.expect_load_all().times(1).returning(|| {
            Err(Error::Status {
                status: 500,
                body: "boom".to_string(),
            })
        });

        let load_users = LoadUsersService::new(Arc::new(repository));
        let result = load_users.perform().await;

        assert_eq!(
            result,
            Err(Error::Status {
                status: 500,
                body: "boom".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_add_user_passes_params_through() {
        let expected = params();
        let mut repository = MockUserRepository::new();
        repository
            .expect_add()
            .withf(move |p| *p == expected)
            .times(1)
            .returning(|_| Ok(user("u1")));

        let add_user = AddUserService::new(Arc::new(repository));
        let created = add_user.perform(params()).await.unwrap();

        assert_eq!(created, user("u1"));
    }

    #[tokio::test]
    async fn test_update_user_returns_new_snapshot() {
        let expected = params();
        let mut repository = MockUserRepository::new();
        repository
            .expect_update()
            .withf(move |id, p| id == "u1" && *p == expected)
            .times(1)
            .returning(|id, p| {
                Ok(User {
                    id: id.to_string(),
                    name: p.name,
                    email: p.email,
                    phone: p.phone,
                    address: p.address,
                })
            });

        let update_user = UpdateUserService::new(Arc::new(repository));
        let updated = update_user.perform("u1", params()).await.unwrap();

        assert_eq!(updated.id, "u1");
        assert_eq!(updated.phone.as_deref(), Some("+55 11 99999-0000"));
    }

    #[tokio::test]
    async fn test_delete_user_calls_repository_once() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_delete()
            .withf(|id| id == "u1")
            .times(1)
            .returning(|_| Ok(()));

        let delete_user = DeleteUserService::new(Arc::new(repository));

        assert_eq!(delete_user.perform("u1").await, Ok(()));
    }

    #[tokio::test]
    async fn test_load_user_by_id_propagates_not_found() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_load_by_id()
            .withf(|id| id == "missing")
            .times(1)
            .returning(|_| {
                Err(Error::Status {
                    status: 404,
                    body: String::new(),
                })
            });

        let load_user = LoadUserByIdService::new(Arc::new(repository));
        let result = load_user.perform("missing").await;

        assert_eq!(result.unwrap_err().status(), Some(404));
    }
}
