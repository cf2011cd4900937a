use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Line-oriented prompt/print over any async reader and writer.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prints `label` without a newline and reads one line back.
    ///
    /// The line ending is stripped; any other trimming is left to the caller.
    /// End of input is reported as `UnexpectedEof`.
    pub async fn prompt(&mut self, label: &str) -> io::Result<String> {
        self.writer.write_all(label.as_bytes()).await?;
        self.writer.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for a line",
            ));
        }

        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(line)
    }

    pub async fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        self.writer.write_all(line.as_ref().as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prompt_strips_line_endings_only() {
        let input: &[u8] = b"  hello \r\nnext\n";
        let mut console = Console::new(input, Vec::new());

        assert_eq!(console.prompt("> ").await.unwrap(), "  hello ");
        assert_eq!(console.prompt("> ").await.unwrap(), "next");
        assert_eq!(console.into_writer(), b"> > ".to_vec());
    }

    #[tokio::test]
    async fn prompt_at_end_of_input_fails() {
        let input: &[u8] = b"";
        let mut console = Console::new(input, Vec::new());

        let err = console.prompt("> ").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[tokio::test]
    async fn last_line_without_newline_is_read() {
        let input: &[u8] = b"9";
        let mut console = Console::new(input, Vec::new());

        assert_eq!(console.prompt("").await.unwrap(), "9");
    }
}
