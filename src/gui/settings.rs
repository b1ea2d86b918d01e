use eframe::egui;
use serde::{
    Deserialize,
    Serialize,
};

use crate::api::providers::ImageProvider;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsData {
    pub fact_max_length: u32,
    pub image_provider: ImageProvider,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { fact_max_length: 140, image_provider: ImageProvider::TheCatApi }
    }
}

pub struct SettingsModal {
    open: bool,
    temp: SettingsData,
    original: SettingsData,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self { open: false, temp: SettingsData::default(), original: SettingsData::default() }
    }

    pub fn open_settings(&mut self, current: SettingsData) {
        self.temp = current.clone();
        self.original = current;
        self.open = true;
    }

    fn is_dirty(&self) -> bool {
        self.temp != self.original
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut result: Option<SettingsData> = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(320.0);

            ui.heading("Fetch Settings");
            ui.add_space(10.0);

            ui.label("Maximum fact length (characters):");
            ui.add(egui::Slider::new(&mut self.temp.fact_max_length, 20..=500));

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            ui.horizontal(|ui| {
                let save_clicked =
                    ui.add_enabled(self.is_dirty(), egui::Button::new("Save")).clicked();
                let cancel_clicked = ui.button("Cancel").clicked();

                if save_clicked {
                    self.original = self.temp.clone();
                    result = Some(self.temp.clone());
                    self.open = false;
                }

                if cancel_clicked {
                    self.open = false;
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
