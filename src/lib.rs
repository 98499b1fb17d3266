//! Client bindings for the token-metadata program: instruction builders and
//! a minimal JSON-RPC transport.

pub mod accounts;
pub mod config;
pub mod metadata;
pub mod rpc;

pub use accounts::ProgramIds;
pub use metadata::{InstructionBuilder, MetadataInstruction};
pub use rpc::{RpcClient, RpcError};
