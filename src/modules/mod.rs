pub mod health;
pub mod media;

mod router;
pub use router::get_router;
