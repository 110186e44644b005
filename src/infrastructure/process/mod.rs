pub mod git_invoker;

pub use git_invoker::{CapturedOutput, GitInvocation, GitInvoker, ProcessInvoker};

#[cfg(test)]
pub use git_invoker::MockProcessInvoker;
