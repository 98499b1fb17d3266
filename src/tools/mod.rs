pub mod build;
pub mod node;
pub mod pda;
