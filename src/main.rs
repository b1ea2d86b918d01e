use eframe::egui;
use kattkiosk::gui::KattkioskApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_min_inner_size([360.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native("Kattkiosk", options, Box::new(|cc| Ok(Box::new(KattkioskApp::new(cc)))))
}
