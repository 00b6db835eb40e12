pub mod clean;
pub mod health;
pub mod pages;
