use dioxus::prelude::*;
use dioxus_logger::tracing;

/// Asks the user a yes/no question with the webview's native confirm dialog.
///
/// Anything that prevents the dialog from being shown counts as "no".
pub async fn confirm_dialog(message: &str) -> bool {
    let message = match serde_json::to_string(message) {
        Ok(message) => message,
        Err(err) => {
            tracing::warn!("Failed to encode confirmation message: {}", err);
            return false;
        }
    };

    match document::eval(&format!("return window.confirm({});", message))
        .join::<bool>()
        .await
    {
        Ok(confirmed) => confirmed,
        Err(err) => {
            tracing::warn!("Confirmation dialog failed: {:?}", err);
            false
        }
    }
}
