use crate::domain::{Book, City, Loan, State};
use crate::ports::{BookRepository, CityRepository, LoanRepository, StateRepository};
use async_trait::async_trait;
use shared::Result;
use std::sync::Arc;

#[async_trait]
pub trait LoadBooks: Send + Sync {
    async fn perform(&self) -> Result<Vec<Book>>;
}

#[async_trait]
pub trait LoadLoans: Send + Sync {
    async fn perform(&self) -> Result<Vec<Loan>>;
}

#[async_trait]
pub trait LoadCities: Send + Sync {
    async fn perform(&self) -> Result<Vec<City>>;
}

#[async_trait]
pub trait LoadStates: Send + Sync {
    async fn perform(&self) -> Result<Vec<State>>;
}

pub struct LoadBooksService {
    repository: Arc<dyn BookRepository>,
}

impl LoadBooksService {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl LoadBooks for LoadBooksService {
    async fn perform(&self) -> Result<Vec<Book>> {
        self.repository.load_all().await
    }
}

pub struct LoadLoansService {
    repository: Arc<dyn LoanRepository>,
}

impl LoadLoansService {
    pub fn new(repository: Arc<dyn LoanRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl LoadLoans for LoadLoansService {
    async fn perform(&self) -> Result<Vec<Loan>> {
        self.repository.load_all().await
    }
}

pub struct LoadCitiesService {
    repository: Arc<dyn CityRepository>,
}

impl LoadCitiesService {
    pub fn new(repository: Arc<dyn CityRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl LoadCities for LoadCitiesService {
    async fn perform(&self) -> Result<Vec<City>> {
        self.repository.load_all().await
    }
}

pub struct LoadStatesService {
    repository: Arc<dyn StateRepository>,
}

impl LoadStatesService {
    pub fn new(repository: Arc<dyn StateRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl LoadStates for LoadStatesService {
    async fn perform(&self) -> Result<Vec<State>> {
        self.repository.load_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{SeededBookRepository, SeededLoanRepository};
    use crate::ports::{MockBookRepository, MockCityRepository, MockStateRepository};
    use shared::Error;

    #[tokio::test]
    async fn test_load_books_from_seeded_repository() {
        let repository = Arc::new(SeededBookRepository::new());
        let load_books = LoadBooksService::new(repository.clone());

        let books = load_books.perform().await.unwrap();

        assert_eq!(books, repository.load_all().await.unwrap());
        assert!(!books.is_empty());
    }

    #[tokio::test]
    async fn test_load_books_propagates_error() {
        let mut repository = MockBookRepository::new();
        repository
            .expect_load_all()
            .times(1)
            .returning(|| Err(Error::Network("connection refused".to_string())));

        let load_books = LoadBooksService::new(Arc::new(repository));

        assert_eq!(
            load_books.perform().await,
            Err(Error::Network("connection refused".to_string()))
        );
    }

    #[tokio::test]
    async fn test_load_loans_from_seeded_repository() {
        let load_loans = LoadLoansService::new(Arc::new(SeededLoanRepository::new()));

        let loans = load_loans.perform().await.unwrap();

        assert_eq!(loans, SeededLoanRepository::new().load_all().await.unwrap());
    }

    #[tokio::test]
    async fn test_load_cities_and_states() {
        let mut cities = MockCityRepository::new();
        cities.expect_load_all().times(1).returning(|| {
            Ok(vec![City {
                id: "c1".to_string(),
                name: "Campinas".to_string(),
                state_id: "sp".to_string(),
            }])
        });
        let mut states = MockStateRepository::new();
        states.expect_load_all().times(1).returning(|| {
            Ok(vec![State {
                id: "sp".to_string(),
                name: "São Paulo".to_string(),
                abbreviation: "SP".to_string(),
            }])
        });

        let loaded_cities = LoadCitiesService::new(Arc::new(cities))
            .perform()
            .await
            .unwrap();
        let loaded_states = LoadStatesService::new(Arc::new(states))
            .perform()
            .await
            .unwrap();

        assert_eq!(loaded_cities[0].state_id, loaded_states[0].id);
    }
}
