//! Theme presets and the appearance settings persisted between sessions.

use std::collections::BTreeMap;

use eframe::egui;
use serde::{Deserialize, Serialize};
use shared::domain::Column;

pub const SETTINGS_STORAGE_KEY: &str = "order_board.settings";

const MIN_TEXT_SCALE: f32 = 0.8;
const MAX_TEXT_SCALE: f32 = 1.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemePreset {
    KitchenDark,
    AtomOneDark,
    EguiLight,
}

impl ThemePreset {
    pub const ALL: [ThemePreset; 3] = [
        ThemePreset::KitchenDark,
        ThemePreset::AtomOneDark,
        ThemePreset::EguiLight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ThemePreset::KitchenDark => "Kitchen (Dark)",
            ThemePreset::AtomOneDark => "Atom One Dark",
            ThemePreset::EguiLight => "Egui Light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeSettings {
    pub preset: ThemePreset,
    pub accent_color: egui::Color32,
    pub panel_rounding: u8,
    pub text_scale: f32,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            preset: ThemePreset::KitchenDark,
            accent_color: egui::Color32::from_rgb(76, 175, 80),
            panel_rounding: 8,
            text_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedBoardSettings {
    theme_preset: ThemePreset,
    accent_color: [u8; 4],
    panel_rounding: u8,
    text_scale: f32,
}

impl Default for PersistedBoardSettings {
    fn default() -> Self {
        Self::from_runtime(ThemeSettings::default())
    }
}

impl PersistedBoardSettings {
    pub fn into_runtime(self) -> ThemeSettings {
        ThemeSettings {
            preset: self.theme_preset,
            accent_color: egui::Color32::from_rgba_unmultiplied(
                self.accent_color[0],
                self.accent_color[1],
                self.accent_color[2],
                self.accent_color[3],
            ),
            panel_rounding: self.panel_rounding.min(16),
            text_scale: self.text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE),
        }
    }

    pub fn from_runtime(theme: ThemeSettings) -> Self {
        Self {
            theme_preset: theme.preset,
            accent_color: [
                theme.accent_color.r(),
                theme.accent_color.g(),
                theme.accent_color.b(),
                theme.accent_color.a(),
            ],
            panel_rounding: theme.panel_rounding,
            text_scale: theme.text_scale.clamp(MIN_TEXT_SCALE, MAX_TEXT_SCALE),
        }
    }

    /// Missing or unreadable stored settings fall back to the defaults.
    pub fn from_storage_text(text: Option<&str>) -> Self {
        text.and_then(|text| serde_json::from_str::<Self>(text).ok())
            .unwrap_or_default()
    }
}

pub fn text_scale_range() -> std::ops::RangeInclusive<f32> {
    MIN_TEXT_SCALE..=MAX_TEXT_SCALE
}

pub fn visuals_for_theme(theme: ThemeSettings) -> egui::Visuals {
    let mut visuals = match theme.preset {
        ThemePreset::KitchenDark => {
            let mut v = egui::Visuals::dark();
            v.window_fill = egui::Color32::from_rgb(36, 38, 41);
            v.panel_fill = egui::Color32::from_rgb(28, 30, 33);
            v.extreme_bg_color = egui::Color32::from_rgb(20, 21, 23);
            v.faint_bg_color = egui::Color32::from_rgb(44, 47, 51);
            v
        }
        ThemePreset::AtomOneDark => {
            let mut v = egui::Visuals::dark();
            v.override_text_color = Some(egui::Color32::from_rgb(171, 178, 191));
            v.window_fill = egui::Color32::from_rgb(40, 44, 52);
            v.panel_fill = egui::Color32::from_rgb(33, 37, 43);
            v.extreme_bg_color = egui::Color32::from_rgb(24, 26, 31);
            v.faint_bg_color = egui::Color32::from_rgb(52, 57, 66);
            v
        }
        ThemePreset::EguiLight => egui::Visuals::light(),
    };

    let radius = theme.panel_rounding.clamp(2, 16);
    visuals.hyperlink_color = theme.accent_color;
    visuals.window_corner_radius = egui::CornerRadius::same(radius);
    visuals.menu_corner_radius = egui::CornerRadius::same(radius);
    visuals.selection.bg_fill = theme.accent_color;
    visuals.widgets.active.bg_fill = theme.accent_color;
    visuals.widgets.hovered.bg_fill = theme.accent_color.gamma_multiply(0.85);
    visuals
}

pub fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}

/// Stripe drawn along the top of each column.
pub fn column_color(column: Column) -> egui::Color32 {
    match column {
        Column::Ordered => egui::Color32::from_rgb(229, 115, 115),
        Column::Preparing => egui::Color32::from_rgb(255, 183, 77),
        Column::Served => egui::Color32::from_rgb(129, 199, 132),
    }
}
