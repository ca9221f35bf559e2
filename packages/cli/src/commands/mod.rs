pub mod compile;
pub mod emit;
pub mod init;

pub use compile::{compile, CompileArgs};
pub use emit::{emit, EmitArgs};
pub use init::{init, InitArgs};
