use futures_channel::mpsc::UnboundedSender;
use log::{debug, warn};

use crate::{
    config::OutputFormat,
    error::{QuizError, Result},
    models::communication::Response,
};

pub type Tx = UnboundedSender<String>;

pub fn format_response(response: &Response, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{}\n", response),
        OutputFormat::Json => match serde_json::to_string(response) {
            Ok(json) => format!("{}\n", json),
            Err(error) => {
                warn!("Could not serialize response: {}", error);
                let fallback = serde_json::json!({
                    "response": "errorResponse",
                    "data": { "errorText": error.to_string() },
                });
                format!("{}\n", fallback)
            }
        },
    }
}

/// Queues a rendered response for the screen writer. Fails once the writer
/// has stopped, which ends the input loop.
pub fn send_message(response: &Response, tx: &Tx, format: OutputFormat) -> Result<()> {
    debug!("Sending response to screen");

    tx.unbounded_send(format_response(response, format))
        .map_err(|error| {
            warn!("Screen writer is gone: {}", error);
            QuizError::ScreenClosed
        })
}
