mod app;
pub use app::App;
mod cli;
pub use cli::Args;
mod list_files;
pub use list_files::FileListStore;
mod logging;
pub use logging::setup_logging;
mod refresh;
pub use refresh::{CommandRefresh, NoopRefresh};
