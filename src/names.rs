pub const API_PREFIX: &str = "/api";

// Pagination
pub const QUESTIONS_PER_PAGE: usize = 10;
pub const DEFAULT_PAGE: i64 = 1;

// Quiz
/// Quiz category id meaning "questions from every category".
pub const ALL_CATEGORIES: i64 = 0;
pub const QUIZ_EXHAUSTED_MESSAGE: &str = "No more questions available";

// Fixed error messages
pub const BAD_REQUEST_MESSAGE: &str = "Bad request";
pub const NOT_FOUND_MESSAGE: &str = "Page not found";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Invalid method!";
pub const UNPROCESSABLE_MESSAGE: &str = "Unprocessable resource";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
