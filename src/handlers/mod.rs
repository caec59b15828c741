pub mod health;
pub mod pokemon;
