//! Interactive read-eval-print loop.

use crate::cli::dispatcher::CommandDispatcher;
use crate::models::AddressBook;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

/// Prompt shown before each command.
pub const PROMPT: &str = "Enter a command: ";

/// Read commands from `input` until `exit`/`close` or end of input,
/// writing prompts and replies to `output`.
///
/// Always hands back the address book as it stands when the session ends,
/// together with any I/O error that ended it early, so the caller can save
/// the book either way. Input that is not valid UTF-8 is decoded lossily.
pub async fn run<R, W>(
    mut dispatcher: CommandDispatcher,
    input: R,
    output: W,
) -> (AddressBook, std::io::Result<()>)
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let result = session(&mut dispatcher, input, output).await;
    if let Err(e) = &result {
        warn!("Session ended by I/O error: {}", e);
    }
    (dispatcher.into_book(), result)
}

async fn session<R, W>(
    dispatcher: &mut CommandDispatcher,
    mut input: R,
    mut output: W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            info!("End of input, ending session");
            output.write_all(b"\n").await?;
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let Some(reply) = dispatcher.handle_line(&line) else {
            continue;
        };

        output.write_all(reply.text.as_bytes()).await?;
        output.write_all(b"\n").await?;

        if reply.exit {
            info!("Exit requested, ending session");
            break;
        }
    }

    output.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn dispatcher() -> CommandDispatcher {
        CommandDispatcher::new(AddressBook::new(), &Config::default())
    }

    #[tokio::test]
    async fn test_run_until_exit() {
        let input: &[u8] = b"hello\n\nadd Alice 0123456789\nexit\nadd Bob 1111111111\n";
        let mut output = Vec::new();

        let (book, result) = run(dispatcher(), input, &mut output).await;

        assert!(result.is_ok());
        assert_eq!(book.len(), 1);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("How can I help you?"));
        assert!(text.ends_with("Good bye!\n"));
        assert!(!text.contains("Bob"));
    }

    #[tokio::test]
    async fn test_run_until_end_of_input() {
        let input: &[u8] = b"add Alice 0123456789";
        let mut output = Vec::new();

        let (book, result) = run(dispatcher(), input, &mut output).await;

        assert!(result.is_ok());
        assert!(book.find_record("Alice").is_some());
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches(PROMPT).count(), 2);
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_does_not_end_session() {
        let input: &[u8] = b"add Alice 0123456789\nfind \xff\xfe\nadd Bob 1111111111\nexit\n";
        let mut output = Vec::new();

        let (book, result) = run(dispatcher(), input, &mut output).await;

        assert!(result.is_ok());
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["Alice", "Bob"]);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("No such name in the records: \u{FFFD}\u{FFFD}"));
        assert!(text.ends_with("Good bye!\n"));
    }

    #[tokio::test]
    async fn test_write_failure_still_returns_book() {
        let input: &[u8] = b"add Alice 0123456789\nexit\n";
        let mut buf = [0u8; 24];
        let output = std::io::Cursor::new(&mut buf[..]);

        let (book, result) = run(dispatcher(), input, output).await;

        assert!(result.is_err());
        assert!(book.find_record("Alice").is_some());
    }
}
