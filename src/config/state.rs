// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Results → show the raw numeric type code next to Final/Midterm
    pub show_type_code: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 520,
            window_h: 640,
            show_type_code: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
