use eframe::egui;

use super::{
    display::{
        self,
        DisplayContent,
    },
    fade::FadeIn,
    settings::{
        SettingsData,
        SettingsModal,
        SETTINGS_FILE,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    api::providers::ImageProvider,
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        CategoryOption,
        FetchError,
        FetchMode,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub struct KattkioskApp {
    // Configuration
    settings: SettingsData,

    // UI State
    theme: Theme,
    mode: FetchMode,
    categories: Vec<CategoryOption>,
    selected_category: Option<String>,
    content: DisplayContent,
    fade: FadeIn,
    settings_modal: SettingsModal,

    // The sequence number of the most recent dispatch. Results stamped with
    // an older number lost the race to a newer action and are dropped.
    dispatched_seq: u64,

    task_manager: TaskManager,
}

impl KattkioskApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let task_manager = TaskManager::new();
        let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);

        task_manager.load_categories(settings.image_provider);

        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, theme.clone());

        Self {
            settings,
            theme,
            mode: FetchMode::Fact,
            categories: Vec::new(),
            selected_category: None,
            content: DisplayContent::Empty,
            fade: FadeIn::default(),
            settings_modal: SettingsModal::new(),
            dispatched_seq: 0,
            task_manager,
        }
    }

    fn handle_task_result(&mut self, ctx: &egui::Context, result: TaskResult) {
        match result {
            TaskResult::Categories { provider, options } => {
                if provider != self.settings.image_provider {
                    println!("Dropping categories for {}: provider changed", provider.label());
                    return;
                }

                println!("Loaded {} categories from {}", options.len(), provider.label());
                self.categories = options;

                // A refresh can remove the entry the user had picked.
                if let Some(selected) = &self.selected_category {
                    if !self.categories.iter().any(|c| &c.value == selected) {
                        self.selected_category = None;
                    }
                }
            }
            TaskResult::Fact { seq, result } => {
                if seq != self.dispatched_seq {
                    println!("Dropping superseded fact result (seq {seq})");
                    return;
                }

                match result {
                    Ok(fact) => self.swap_content(DisplayContent::Fact(fact)),
                    Err(e) => self.show_failure("Couldn't fetch a cat fact.", e),
                }
            }
            TaskResult::Image { seq, result } => {
                if seq != self.dispatched_seq {
                    println!("Dropping superseded image result (seq {seq})");
                    return;
                }

                match result {
                    Ok(image) => {
                        // The bytes decoded already; building the texture here
                        // means the swap below is the first visible change.
                        let texture = ctx.load_texture(
                            "cat-image",
                            egui::ColorImage::from_rgba_unmultiplied(
                                [image.width as usize, image.height as usize],
                                &image.rgba,
                            ),
                            egui::TextureOptions::LINEAR,
                        );

                        self.swap_content(DisplayContent::Image { texture, url: image.url });
                    }
                    Err(e) => self.show_failure("Couldn't fetch a cat picture.", e),
                }
            }
        }
    }

    fn swap_content(&mut self, content: DisplayContent) {
        self.content = content;
        self.fade.trigger();
    }

    // Failures swap in as plain text; the fade only replays for new content.
    fn show_failure(&mut self, message: &str, error: FetchError) {
        eprintln!("{message} {error}");
        self.content = DisplayContent::Failure {
            message: message.to_string(),
            details: error.to_string(),
        };
    }

    fn dispatch_fetch(&mut self) {
        self.dispatched_seq += 1;

        match self.mode {
            FetchMode::Fact => {
                self.content = DisplayContent::Loading("Fetching a cat fact…".to_string());
                self.task_manager.fetch_fact(self.dispatched_seq, self.settings.fact_max_length);
            }
            FetchMode::Image => {
                self.content = DisplayContent::Loading("Fetching a cat picture…".to_string());
                self.task_manager.fetch_image(
                    self.dispatched_seq,
                    self.settings.image_provider,
                    self.selected_category.clone(),
                );
            }
        }
    }

    fn on_provider_changed(&mut self) {
        self.categories.clear();
        self.selected_category = None;
        self.task_manager.load_categories(self.settings.image_provider);
        self.save_settings();
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings, SETTINGS_FILE) {
            eprintln!("Failed to save settings: {e}");
        }
    }

    fn ui_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_salt("fetch_mode")
                .selected_text(self.mode.label())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.mode, FetchMode::Fact, FetchMode::Fact.label());
                    ui.selectable_value(
                        &mut self.mode,
                        FetchMode::Image,
                        FetchMode::Image.label(),
                    );
                });

            if self.mode == FetchMode::Image {
                let previous_provider = self.settings.image_provider;

                egui::ComboBox::from_id_salt("image_provider")
                    .selected_text(self.settings.image_provider.label())
                    .show_ui(ui, |ui| {
                        for provider in ImageProvider::ALL {
                            ui.selectable_value(
                                &mut self.settings.image_provider,
                                provider,
                                provider.label(),
                            );
                        }
                    });

                if self.settings.image_provider != previous_provider {
                    self.on_provider_changed();
                }

                let selected_label = match &self.selected_category {
                    Some(value) => self
                        .categories
                        .iter()
                        .find(|c| &c.value == value)
                        .map(|c| c.label.clone())
                        .unwrap_or_else(|| value.clone()),
                    None => "Random".to_string(),
                };

                egui::ComboBox::from_id_salt("category")
                    .selected_text(selected_label)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.selected_category, None, "Random");
                        for option in &self.categories {
                            ui.selectable_value(
                                &mut self.selected_category,
                                Some(option.value.clone()),
                                &option.label,
                            );
                        }
                    });
            }

            if ui.button("Fetch").clicked() {
                self.dispatch_fetch();
            }
        });
    }
}

impl eframe::App for KattkioskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(ctx, result);
        }

        if let Some(action) = TopBar::show(ctx, &mut self.settings_modal, &self.settings) {
            match action {
                TopBarAction::RefreshCategories => {
                    self.task_manager.load_categories(self.settings.image_provider);
                }
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.heading(self.theme.heading("Kattkiosk"));
            });
            ui.add_space(8.0);

            self.ui_controls(ui);
            ui.separator();

            display::show(ui, &self.theme, &self.fade, &self.content);
        });

        if let Some(settings) = self.settings_modal.show(ctx) {
            self.settings = settings;
            self.save_settings();
        }

        if self.fade.is_animating() {
            ctx.request_repaint();
        }
    }
}
