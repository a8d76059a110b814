use once_cell::sync::OnceCell;
use std::env;

static INIT_DOTENV: OnceCell<String> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file named by `DOTENV_OVERRIDE` is used when set, `.env` otherwise. Loading happens at
/// most once per process; a missing file is not an error. Returns the path that was used.
pub fn ensure_dotenv_loaded() -> String {
    INIT_DOTENV
        .get_or_init(|| {
            let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());
            if dotenv::from_filename(&dotenv_path).is_err() {
                tracing::debug!(path = %dotenv_path, "No dotenv file loaded");
            }
            dotenv_path
        })
        .clone()
}
