use once_cell::sync::Lazy;

use crate::api::error::ApiError;

pub static RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("contacts-net")
        .build()
        .expect("Failed to build Tokio runtime")
});

/// Runs `fut` on the Tokio runtime and hands the result back to whichever
/// executor awaits it (the GLib main loop, in the app).
pub async fn on_runtime<T, Fut>(fut: Fut) -> Result<T, ApiError>
where
    T: Send + 'static,
    Fut: std::future::Future<Output = Result<T, ApiError>> + Send + 'static,
{
    match RUNTIME.spawn(fut).await {
        Ok(res) => res,
        Err(e) => {
            log::error!("network task failed: {e}");
            Err(ApiError::Task(e.to_string()))
        }
    }
}

pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}
