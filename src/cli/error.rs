// Exit handling shared by the binaries

use std::process;

use crate::error::MockDataError;

/// Exit with a user error (exit code 1)
/// User errors are for invalid input, missing files, bad configuration, etc.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Exit with an internal error (exit code 2)
pub fn internal_error(err: &anyhow::Error) -> ! {
    eprintln!("Internal error: {}", err);
    let mut chain = err.chain().skip(1).peekable();
    if chain.peek().is_some() {
        eprintln!("\nCaused by:");
        for (indent, cause) in chain.enumerate() {
            eprintln!("{:indent$}  {}", "", cause, indent = indent + 1);
        }
    }
    process::exit(2);
}

/// Report the outcome of a binary's `run` function and exit.
///
/// Configuration problems are user errors; anything else that escapes `run`
/// (unreadable working directory, broken stdout) is internal.
pub fn exit_with(result: anyhow::Result<i32>) -> ! {
    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            let is_config = e.chain().any(|cause| {
                matches!(cause.downcast_ref::<MockDataError>(), Some(MockDataError::Config { .. }))
            });
            if is_config {
                user_error(&format!("{:#}", e));
            }
            internal_error(&e)
        }
    }
}
