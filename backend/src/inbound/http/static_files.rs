//! Static file trees served beside the API.
//!
//! `/portfolio/...` and `/static/...` map onto the same-named subdirectories
//! of the serve directory, so `/static/site.css` reads
//! `<serve_dir>/static/site.css`.

use std::path::Path;

use actix_files::Files;
use actix_web::web;

/// URL prefixes backed by a directory of the same name.
pub const STATIC_MOUNTS: [&str; 2] = ["portfolio", "static"];

/// Register one file service per entry in [`STATIC_MOUNTS`].
///
/// Directory requests serve `index.html` when present and fall back to a
/// file listing.
///
/// # Examples
/// ```
/// use std::path::PathBuf;
///
/// use actix_web::App;
/// use user_directory::inbound::http::static_files::mount_static_files;
///
/// let serve_dir = PathBuf::from(".");
/// let _app = App::new().configure(|cfg| mount_static_files(cfg, &serve_dir));
/// ```
pub fn mount_static_files(cfg: &mut web::ServiceConfig, serve_dir: &Path) {
    for mount in STATIC_MOUNTS {
        cfg.service(
            Files::new(&format!("/{mount}"), serve_dir.join(mount))
                .index_file("index.html")
                .show_files_listing(),
        );
    }
}
