use eframe::egui::{
    self,
    Color32,
    RichText,
};

use crate::gui::{
    fade::FadeIn,
    theme::Theme,
};

/// What the result area is currently showing. Exactly one of these exists at
/// a time; swapping it is the only way content reaches the screen.
pub enum DisplayContent {
    Empty,
    Loading(String),
    Fact(String),
    Image { texture: egui::TextureHandle, url: String },
    Failure { message: String, details: String },
}

pub fn show(ui: &mut egui::Ui, theme: &Theme, fade: &FadeIn, content: &DisplayContent) {
    let alpha = fade.alpha();

    ui.add_space(12.0);
    ui.vertical_centered(|ui| match content {
        DisplayContent::Empty => {
            ui.label(RichText::new("Pick a mode and hit Fetch.").color(theme.comment()));
        }
        DisplayContent::Loading(message) => {
            ui.add(egui::Spinner::new());
            ui.add_space(6.0);
            ui.label(RichText::new(message).color(theme.comment()));
        }
        DisplayContent::Fact(fact) => {
            let color = ui.visuals().text_color().gamma_multiply(alpha);
            ui.add(egui::Label::new(RichText::new(fact).size(18.0).color(color)).wrap());
        }
        DisplayContent::Image { texture, url } => {
            let tint = Color32::WHITE.gamma_multiply(alpha);
            ui.add(egui::Image::from_texture(texture).max_size(ui.available_size()).tint(tint));
            ui.add_space(4.0);
            ui.label(RichText::new(url).small().color(theme.comment()));
        }
        DisplayContent::Failure { message, details } => {
            ui.label(RichText::new(message).color(theme.red()));
            ui.add_space(4.0);
            ui.label(RichText::new(details).small().color(theme.comment()));
        }
    });
}
