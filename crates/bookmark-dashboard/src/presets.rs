//! Built-in style presets, default settings and the seed dashboard.
//!
//! Preset values are opaque class tokens handed straight to the rendering
//! surface; nothing here interprets them.

use crate::id::generate_id;
use crate::model::{
    AppIcon, AppSettings, AppState, Bookmark, GridItemSize, Page, ViewStyle, Widget, WidgetKind,
    WidgetSize,
};

/// A named preset token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Human-readable name.
    pub name: &'static str,
    /// Class token applied by the rendering surface.
    pub value: &'static str,
}

/// Default dark radial gradient background.
pub const BACKGROUND_DEFAULT_DARK: &str = "bg-slate-950 bg-[radial-gradient(ellipse_at_top,_var(--tw-gradient-stops))] from-slate-900 via-slate-950 to-black";

/// Glass-effect dark header.
pub const HEADER_GLASS_DARK: &str = "bg-slate-900/60";

/// Background presets, in picker order.
pub const BACKGROUND_PRESETS: &[Preset] = &[
    Preset {
        name: "Default Dark",
        value: BACKGROUND_DEFAULT_DARK,
    },
    Preset {
        name: "Midnight Blue",
        value: "bg-slate-950 bg-[radial-gradient(ellipse_at_top,_var(--tw-gradient-stops))] from-blue-950 via-slate-950 to-black",
    },
    Preset {
        name: "Deep Forest",
        value: "bg-slate-950 bg-[radial-gradient(ellipse_at_top,_var(--tw-gradient-stops))] from-emerald-950 via-slate-950 to-black",
    },
    Preset {
        name: "Royal Purple",
        value: "bg-slate-950 bg-[radial-gradient(ellipse_at_top,_var(--tw-gradient-stops))] from-purple-950 via-slate-950 to-black",
    },
    Preset {
        name: "Slate Grey",
        value: "bg-slate-900",
    },
];

/// Header presets, in picker order.
pub const HEADER_PRESETS: &[Preset] = &[
    Preset {
        name: "Glass Dark",
        value: HEADER_GLASS_DARK,
    },
    Preset {
        name: "Glass Light",
        value: "bg-white/10",
    },
    Preset {
        name: "Solid Dark",
        value: "bg-slate-900",
    },
    Preset {
        name: "Solid Blue",
        value: "bg-blue-900/80",
    },
];

/// Description given to pages created through [`Action::AddPage`](crate::state::Action::AddPage).
pub const NEW_PAGE_DESCRIPTION: &str = "New page description";

/// Finds a preset by name (case-insensitive) or by exact token.
///
/// Lets callers accept either "Midnight Blue" or the raw class string.
pub fn find_preset<'a>(presets: &'a [Preset], query: &str) -> Option<&'a Preset> {
    presets
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(query) || p.value == query)
}

/// Settings used on first run and for records stored without settings.
pub fn default_settings() -> AppSettings {
    AppSettings {
        app_name: "The Woodlands Law Firm Portal".to_string(),
        app_icon: AppIcon::Layout,
        custom_app_icon_data: None,
        background: BACKGROUND_DEFAULT_DARK.to_string(),
        custom_background_image_data: None,
        custom_background_color: None,
        header_style: HEADER_GLASS_DARK.to_string(),
        custom_header_color: None,
        custom_widget_color: None,
    }
}

/// The hardcoded first-run dashboard: `home` is active.
pub fn initial_state() -> AppState {
    let pages = initial_pages();
    let active_page_id = pages
        .first()
        .map(|p| p.id.clone())
        .unwrap_or_default();
    AppState {
        pages,
        active_page_id,
        settings: default_settings(),
    }
}

fn bookmark(title: &str, url: &str, description: &str) -> Bookmark {
    Bookmark {
        id: generate_id(),
        title: title.to_string(),
        url: url.to_string(),
        description: Some(description.to_string()),
        icon_url: None,
    }
}

fn widget(
    title: &str,
    size: WidgetSize,
    view_style: ViewStyle,
    bookmarks: Vec<Bookmark>,
) -> Widget {
    Widget {
        id: generate_id(),
        title: title.to_string(),
        kind: WidgetKind::Bookmarks,
        size,
        view_style,
        grid_item_size: Some(GridItemSize::Large),
        bookmarks,
        custom_background_color: None,
    }
}

/// Seed pages shipped with the dashboard.
pub fn initial_pages() -> Vec<Page> {
    let mut home = Page::new(
        "home".to_string(),
        "Home Dashboard".to_string(),
        Some("Central hub for firm resources, news, and daily operations.".to_string()),
    );
    home.widgets = vec![
        widget(
            "Firm Resources",
            WidgetSize::Medium,
            ViewStyle::Grid,
            vec![
                bookmark("Office 365", "https://www.office.com", "Email, OneDrive, and Office Apps"),
                bookmark("Clio", "https://www.clio.com", "Case Management System"),
                bookmark("Slack", "https://slack.com", "Internal Communication"),
                bookmark("Zoom", "https://zoom.us", "Video Conferencing"),
                bookmark("ADP", "https://www.adp.com", "Payroll & HR"),
                bookmark("DocuSign", "https://www.docusign.com", "E-Signatures"),
            ],
        ),
        widget(
            "Legal Research",
            WidgetSize::Medium,
            ViewStyle::Detailed,
            vec![
                bookmark(
                    "Westlaw",
                    "https://legal.thomsonreuters.com/en/products/westlaw",
                    "Primary legal research database",
                ),
                bookmark("LexisNexis", "https://www.lexisnexis.com", "Legal research and analytics"),
                bookmark("Google Scholar", "https://scholar.google.com", "Free case law search"),
                bookmark("Cornell LII", "https://www.law.cornell.edu", "Legal Information Institute"),
            ],
        ),
        widget(
            "Courts & Filing",
            WidgetSize::Small,
            ViewStyle::List,
            vec![
                bookmark(
                    "PACER",
                    "https://pacer.uscourts.gov",
                    "Public Access to Court Electronic Records",
                ),
                bookmark("Supreme Court", "https://www.supremecourt.gov", "SCOTUS Opinions and Dockets"),
                bookmark("State Courts", "https://www.ncsc.org", "National Center for State Courts"),
                bookmark("USPTO", "https://www.uspto.gov", "Patent and Trademark Office"),
            ],
        ),
        widget(
            "News & Updates",
            WidgetSize::Large,
            ViewStyle::List,
            vec![
                bookmark("SCOTUSblog", "https://www.scotusblog.com", "Supreme Court of the United States Blog"),
                bookmark("ABA Journal", "https://www.abajournal.com", "American Bar Association News"),
                bookmark("Law.com", "https://www.law.com", "Legal News and Analysis"),
                bookmark("Wall Street Journal", "https://www.wsj.com", "Financial News"),
                bookmark("New York Times", "https://www.nytimes.com", "Daily News"),
            ],
        ),
    ];

    let mut litigation = Page::new(
        "litigation".to_string(),
        "Litigation Tools".to_string(),
        Some("Specialized tools for e-discovery, document review, and trial prep.".to_string()),
    );
    litigation.widgets = vec![widget(
        "E-Discovery",
        WidgetSize::Full,
        ViewStyle::Grid,
        vec![
            bookmark("Relativity", "https://www.relativity.com", "E-Discovery Platform"),
            bookmark("Logikcull", "https://www.logikcull.com", "Cloud-based Discovery"),
            bookmark("Everlaw", "https://www.everlaw.com", "Modern Litigation Support"),
        ],
    )];

    vec![home, litigation]
}
