pub mod body;
pub mod system;
