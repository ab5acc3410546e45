// Services layer - cross-cutting helpers
pub mod crypto;
pub mod session_service;

pub use session_service::SessionService;
