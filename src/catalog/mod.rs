//! Static catalog of well-known apps: package name, display name, category
//! and brand color. Used by UI layers to render app pickers and to resolve
//! display names when recording blocked attempts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppCategory {
    Social,
    Entertainment,
    Productivity,
    Games,
    News,
    Shopping,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownApp {
    pub package_name: &'static str,
    pub name: &'static str,
    pub category: AppCategory,
    /// Brand color, display-only.
    pub color: &'static str,
}

const fn app(
    package_name: &'static str,
    name: &'static str,
    category: AppCategory,
    color: &'static str,
) -> KnownApp {
    KnownApp {
        package_name,
        name,
        category,
        color,
    }
}

/// Popular apps by Android package name.
pub const KNOWN_APPS: &[KnownApp] = &[
    // Social media
    app("com.instagram.android", "Instagram", AppCategory::Social, "#E4405F"),
    app("com.zhiliaoapp.musically", "TikTok", AppCategory::Social, "#FF2D55"),
    app("com.twitter.android", "Twitter", AppCategory::Social, "#1DA1F2"),
    app("com.facebook.katana", "Facebook", AppCategory::Social, "#1877F2"),
    app("com.snapchat.android", "Snapchat", AppCategory::Social, "#FFFC00"),
    app("com.linkedin.android", "LinkedIn", AppCategory::Social, "#0077B5"),
    app("com.discord", "Discord", AppCategory::Social, "#5865F2"),
    // Entertainment & video
    app("com.google.android.youtube", "YouTube", AppCategory::Entertainment, "#FF0000"),
    app("com.netflix.mediaclient", "Netflix", AppCategory::Entertainment, "#E50914"),
    app("com.spotify.music", "Spotify", AppCategory::Entertainment, "#1ED760"),
    app("com.amazon.avod.thirdpartyclient", "Prime Video", AppCategory::Entertainment, "#00A8E1"),
    // Games
    app("com.supercell.clashofclans", "Clash of Clans", AppCategory::Games, "#FFC40C"),
    app("com.king.candycrushsaga", "Candy Crush", AppCategory::Games, "#FF6B9D"),
    app("com.mojang.minecraftpe", "Minecraft", AppCategory::Games, "#00AF54"),
    // Shopping
    app("com.amazon.mShop.android.shopping", "Amazon", AppCategory::Shopping, "#FF9900"),
    app("com.ebay.mobile", "eBay", AppCategory::Shopping, "#E53238"),
    // Productivity
    app("com.microsoft.office.outlook", "Outlook", AppCategory::Productivity, "#0078D4"),
    app("com.slack", "Slack", AppCategory::Productivity, "#4A154B"),
    app("com.google.android.gm", "Gmail", AppCategory::Productivity, "#EA4335"),
    // News
    app("com.reddit.frontpage", "Reddit", AppCategory::News, "#FF4500"),
];

/// Fallback color for apps not in the catalog.
pub const UNKNOWN_APP_COLOR: &str = "#6B7280";

/// Look up a known app by exact package name.
pub fn lookup(package_name: &str) -> Option<&'static KnownApp> {
    KNOWN_APPS.iter().find(|a| a.package_name == package_name)
}

/// Display name for a package: the catalog name when known, otherwise a
/// capitalized form of the package's last segment.
pub fn display_name(package_name: &str) -> String {
    if let Some(known) = lookup(package_name) {
        return known.name.to_string();
    }

    let segment = package_name.rsplit('.').next().unwrap_or(package_name);
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => package_name.to_string(),
    }
}

/// Category for a package; unknown apps fall into `Other`.
pub fn category_of(package_name: &str) -> AppCategory {
    lookup(package_name).map_or(AppCategory::Other, |a| a.category)
}

/// Brand color for a package; unknown apps get the neutral fallback.
pub fn color_of(package_name: &str) -> &'static str {
    lookup(package_name).map_or(UNKNOWN_APP_COLOR, |a| a.color)
}

/// All catalog apps in the given category.
pub fn by_category(category: AppCategory) -> Vec<&'static KnownApp> {
    KNOWN_APPS.iter().filter(|a| a.category == category).collect()
}

/// Case-insensitive substring search over display names and package names.
pub fn search(query: &str) -> Vec<&'static KnownApp> {
    let query = query.to_lowercase();
    KNOWN_APPS
        .iter()
        .filter(|a| {
            a.name.to_lowercase().contains(&query)
                || a.package_name.to_lowercase().contains(&query)
        })
        .collect()
}
