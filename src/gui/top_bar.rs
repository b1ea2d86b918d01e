use eframe::egui::{
    self,
    containers,
};

use crate::gui::settings::{
    SettingsData,
    SettingsModal,
};

pub enum TopBarAction {
    RefreshCategories,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        settings_modal: &mut SettingsModal,
        current_settings: &SettingsData,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);

                ui.menu_button("File", |ui| {
                    if ui.button("Refresh Categories").clicked() {
                        action = Some(TopBarAction::RefreshCategories);
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Settings", |ui| {
                    if ui.button("Fetch Settings").clicked() {
                        settings_modal.open_settings(current_settings.clone());
                    }
                });
            });
        });

        action
    }
}
