//! Presentation feature: dto, handlers and routes.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{ApiError, PresentationAppState};
pub use routes::presentation_router;
