//! App module - contains the main application state and logic

mod fetch;
mod filters;
mod state;
mod views;

pub use state::PostsView;

use crate::constants::POSTS_URL;
use crate::error::FetchError;
use crate::settings::{Settings, ThemeChoice};
use crate::theme;
use crate::types::Post;
use eframe::egui;
use std::path::PathBuf;
use tokio::sync::oneshot;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) view: PostsView,
    pub(crate) posts_url: String,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) pending_fetch: Option<oneshot::Receiver<Result<Vec<Post>, FetchError>>>,
    pub(crate) fetch_started: bool,
    pub(crate) focus_search: bool,
    // Settings
    pub(crate) theme: ThemeChoice,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> std::io::Result<Self> {
        cc.egui_ctx.set_theme(settings.theme);

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("posts-fetch")
            .enable_all()
            .build()?;

        Ok(Self {
            view: PostsView::default(),
            posts_url: POSTS_URL.to_string(),
            runtime,
            pending_fetch: None,
            fetch_started: false,
            focus_search: false,
            theme: settings.theme,
            window_pos: settings.window_pos(),
            window_size: settings.window_size(),
            needs_center: settings.window_pos().is_none(),
            data_dir,
        })
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            theme: self.theme,
        };
        settings.save(&self.data_dir);
    }
}
