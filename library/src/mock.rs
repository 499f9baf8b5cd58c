use crate::domain::{Book, Loan};
use crate::ports::{BookRepository, LoanRepository};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::Result;
use tracing::debug;

// Static data sources for screens that are not wired to the API yet. They
// always succeed and hand out a copy of the same seed on every call.

pub struct SeededBookRepository {
    books: Vec<Book>,
}

impl SeededBookRepository {
    pub fn new() -> Self {
        Self::with_books(seed_books())
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl Default for SeededBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepository for SeededBookRepository {
    async fn load_all(&self) -> Result<Vec<Book>> {
        debug!("Serving {} seeded books", self.books.len());
        Ok(self.books.clone())
    }
}

pub struct SeededLoanRepository {
    loans: Vec<Loan>,
}

impl SeededLoanRepository {
    pub fn new() -> Self {
        Self::with_loans(seed_loans())
    }

    pub fn with_loans(loans: Vec<Loan>) -> Self {
        Self { loans }
    }
}

impl Default for SeededLoanRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LoanRepository for SeededLoanRepository {
    async fn load_all(&self) -> Result<Vec<Loan>> {
        debug!("Serving {} seeded loans", self.loans.len());
        Ok(self.loans.clone())
    }
}

fn book(id: &str, title: &str, author: &str, isbn: &str, year: u16) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        isbn: Some(isbn.to_string()),
        publisher: None,
        published_year: Some(year),
    }
}

pub fn seed_books() -> Vec<Book> {
    vec![
        book("1", "Dom Casmurro", "Machado de Assis", "9788535910667", 1899),
        book("2", "Grande Sertão: Veredas", "João Guimarães Rosa", "9788535908435", 1956),
        book("3", "A Hora da Estrela", "Clarice Lispector", "9788532508126", 1977),
        book("4", "Vidas Secas", "Graciliano Ramos", "9788501067340", 1938),
        book("5", "O Cortiço", "Aluísio Azevedo", "9788508133147", 1890),
    ]
}

// Dates are fixed so the seed never depends on the wall clock
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn loan(id: &str, book_id: &str, user_id: &str, loaned_at: NaiveDate, returned: bool) -> Loan {
    let due_at = loaned_at + chrono::Duration::days(14);
    Loan {
        id: id.to_string(),
        book_id: book_id.to_string(),
        user_id: user_id.to_string(),
        loaned_at,
        due_at,
        returned_at: returned.then(|| due_at - chrono::Duration::days(2)),
    }
}

pub fn seed_loans() -> Vec<Loan> {
    vec![
        loan("1", "1", "1", date(2024, 2, 5), true),
        loan("2", "3", "2", date(2024, 3, 1), false),
        loan("3", "4", "1", date(2024, 3, 10), false),
    ]
}
