pub mod health;
pub mod instruments;
pub mod screening;
pub mod slides;
