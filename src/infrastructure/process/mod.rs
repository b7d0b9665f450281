pub mod command_executor;

pub use command_executor::{
    CommandExecutor,
    CommandExecutorError,
    CommandRunner,
    ExecutionConfig,
    ExecutionResult,
    OutputLine,
    OutputStream,
};
