use futures_channel::mpsc::unbounded;
use futures_util::{
    future::{self, Either},
    pin_mut, StreamExt,
};
use log::{info, warn};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
    task,
};

use crate::{
    config::OutputFormat,
    error::{QuizError, Result},
    handlers::{
        command_handler::{execute_command, render},
        session_handler::SessionHost,
    },
    helpers::parse_command,
    models::communication::{Command, Response},
    screen_messages::send_message,
};

/// Drives a started session from line-based input until `quit` or end of
/// input. Every line is handled to completion before the next one is read;
/// rendered screens go through a channel to the writer. A failing writer ends
/// the loop before the next line is dispatched.
pub async fn handle_terminal<R, W>(
    host: &mut SessionHost,
    reader: R,
    writer: &mut W,
    format: OutputFormat,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (tx, mut rx) = unbounded();

    let incoming = async move {
        let session = host.session()?;
        info!("Terminal attached to session {}", session.id());
        send_message(&render(session), &tx, format)?;
        task::yield_now().await;

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(error) => {
                    warn!("Error parsing command!: {}", error);
                    let response = Response::ErrorResponse {
                        error_text: error.to_string(),
                    };
                    send_message(&response, &tx, format)?;
                    task::yield_now().await;
                    continue;
                }
            };

            let response = execute_command(command, host)?;
            send_message(&response, &tx, format)?;
            // let the writer drain before reading on
            task::yield_now().await;
            if command == Command::Quit {
                break;
            }
        }

        info!("Terminal input closed");
        Ok::<(), QuizError>(())
    };

    let outgoing = async {
        while let Some(text) = rx.next().await {
            writer.write_all(text.as_bytes()).await?;
            writer.flush().await?;
        }
        Ok::<(), QuizError>(())
    };

    pin_mut!(incoming, outgoing);
    match future::select(incoming, outgoing).await {
        // input is done and its sender dropped, flush what is still queued
        Either::Left((incoming_result, outgoing)) => {
            incoming_result?;
            outgoing.await
        }
        Either::Right((outgoing_result, _)) => {
            if let Err(error) = &outgoing_result {
                warn!("Screen writer failed, closing terminal: {}", error);
            }
            outgoing_result
        }
    }
}
