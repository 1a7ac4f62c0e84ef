use super::BackgroundChoice;
use crate::model::{AppIcon, AppSettings};

pub(super) fn select_icon(settings: &mut AppSettings, icon: AppIcon) {
    settings.app_icon = icon;
    settings.custom_app_icon_data = None;
}

/// The global level has no "inherit" target, so `Inherit` only drops the
/// custom color and image and keeps the preset.
pub(super) fn set_background(settings: &mut AppSettings, choice: BackgroundChoice) {
    match choice {
        BackgroundChoice::Preset(token) => {
            settings.background = token;
            settings.custom_background_color = None;
            settings.custom_background_image_data = None;
        }
        BackgroundChoice::Color(color) => {
            settings.custom_background_color = Some(color);
            settings.custom_background_image_data = None;
        }
        BackgroundChoice::Image(data) => {
            settings.custom_background_image_data = Some(data);
            settings.custom_background_color = None;
        }
        BackgroundChoice::Inherit => {
            settings.custom_background_color = None;
            settings.custom_background_image_data = None;
        }
    }
}

pub(super) fn set_header_preset(settings: &mut AppSettings, token: String) {
    settings.header_style = token;
    settings.custom_header_color = None;
}

pub(super) fn set_header_color(settings: &mut AppSettings, color: String) {
    settings.custom_header_color = Some(color);
    settings.header_style.clear();
}
