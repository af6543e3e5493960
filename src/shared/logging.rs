//! Structured logging helpers for the Steppy front-end
//!
//! Every event carries an `operation` field so chat, export and page events can be
//! filtered the same way in the browser console and in native logs.

/// Operations that emit log events
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    SendMessage,
    ExportChat,
    RestoreHistory,
    ClearChat,
    TokenStatus,
    Navigation,
    ProfileMenu,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::SendMessage => "send_message",
            LogOperation::ExportChat => "export_chat",
            LogOperation::RestoreHistory => "restore_history",
            LogOperation::ClearChat => "clear_chat",
            LogOperation::TokenStatus => "token_status",
            LogOperation::Navigation => "navigation",
            LogOperation::ProfileMenu => "profile_menu",
        }
    }
}

/// Log a send leaving the client
pub fn log_send_start(request_id: &str, length: usize, message_count: usize) {
    tracing::debug!(
        operation = LogOperation::SendMessage.as_str(),
        request_id = request_id,
        message_length = length,
        message_count = message_count,
        "Sending chat message"
    );
}

/// Log a successful reply
pub fn log_send_success(request_id: &str, history_len: usize, message_count: usize) {
    tracing::info!(
        operation = LogOperation::SendMessage.as_str(),
        request_id = request_id,
        history_len = history_len,
        message_count = message_count,
        "Assistant reply received"
    );
}

/// Log a non-2xx reply
pub fn log_send_http_error(request_id: &str, status: u16, error: &str, details: Option<&str>) {
    tracing::warn!(
        operation = LogOperation::SendMessage.as_str(),
        request_id = request_id,
        status = status,
        error = error,
        details = details.unwrap_or(""),
        "Chat endpoint returned an error"
    );
}

/// Log a request that never completed
pub fn log_send_transport_error(request_id: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::SendMessage.as_str(),
        request_id = request_id,
        error = error,
        "Chat request failed"
    );
}

/// Log the result of an operation that is not a send
pub fn log_operation_result(operation: LogOperation, outcome: Result<&str, &str>) {
    match outcome {
        Ok(detail) => tracing::info!(
            operation = operation.as_str(),
            detail = detail,
            "Operation completed"
        ),
        Err(error) => tracing::error!(
            operation = operation.as_str(),
            error = error,
            "Operation failed"
        ),
    }
}

/// Log a page navigation
pub fn log_navigation(path: &str) {
    tracing::info!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        "Navigating"
    );
}

/// Log a profile dropdown state change
pub fn log_profile_menu(open: bool) {
    tracing::trace!(
        operation = LogOperation::ProfileMenu.as_str(),
        open = open,
        "Profile menu toggled"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::SendMessage.as_str(), "send_message");
        assert_eq!(LogOperation::ExportChat.as_str(), "export_chat");
        assert_eq!(LogOperation::RestoreHistory.as_str(), "restore_history");
        assert_eq!(LogOperation::ClearChat.as_str(), "clear_chat");
        assert_eq!(LogOperation::TokenStatus.as_str(), "token_status");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::ProfileMenu.as_str(), "profile_menu");
    }
}
