//! Data access for resources and request-body validation.

mod repository;
mod validation;
pub use repository::ResourceRepository;
pub use validation::RequestValidator;
