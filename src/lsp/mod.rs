mod lsp_impl;
mod settings_manager;

pub use lsp_impl::{HieroglyphServer, server_capabilities, url_to_uri};
