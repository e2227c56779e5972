// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use qldt_grades::{config::state::AppState, gui};
use eframe::egui::{IconData, ViewportBuilder};

/// 32×32 rounded badge in the portal's red, drawn in code.
fn app_icon() -> IconData {
    const N: u32 = 32;
    let c = (N as f32 - 1.0) / 2.0;
    let img = image::RgbaImage::from_fn(N, N, |x, y| {
        let dx = (x as f32 - c).abs();
        let dy = (y as f32 - c).abs();
        // rounded square: corners cut by a radius-6 arc
        let r = 6.0;
        let edge = c - r;
        let inside = if dx > edge && dy > edge {
            (dx - edge).powi(2) + (dy - edge).powi(2) <= r * r
        } else {
            dx <= c + 0.5 && dy <= c + 0.5
        };
        // white bar across the middle third
        let bar = inside && dy <= 3.0 && dx <= c - 6.0;
        match (inside, bar) {
            (_, true) => image::Rgba([0xFF, 0xFF, 0xFF, 0xFF]),
            (true, false) => image::Rgba([0xB7, 0x1C, 0x1C, 0xFF]),
            (false, _) => image::Rgba([0, 0, 0, 0]),
        }
    });
    let (w, h) = img.dimensions();
    IconData { rgba: img.into_raw(), width: w, height: h }
}

fn main() {
    let state = AppState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
