use asynctrack::{AsyncTracker, OperationState, Scope};

#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    pub id: u32,
    pub title: String,
}

impl Book {
    pub fn new(id: u32, title: &str) -> Self {
        Book {
            id,
            title: title.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

pub type BookTracker = AsyncTracker<Vec<Book>, ApiError>;

#[allow(dead_code)]
pub fn mount() -> (Scope, BookTracker) {
    let scope = Scope::new();
    let tracker = AsyncTracker::new(&scope);
    (scope, tracker)
}

#[allow(dead_code)]
pub fn mount_with(books: Vec<Book>) -> (Scope, BookTracker) {
    let scope = Scope::new();
    let tracker = AsyncTracker::with_state(&scope, OperationState::with_data(books));
    (scope, tracker)
}
