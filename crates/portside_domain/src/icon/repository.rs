use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconFormat {
    Svg,
    Png,
    Webp,
}

impl IconFormat {
    pub const ALL: [IconFormat; 3] = [IconFormat::Svg, IconFormat::Png, IconFormat::Webp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Webp => "webp",
        }
    }
}

impl fmt::Display for IconFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconVariant {
    Default,
    Dark,
    Light,
}

impl IconVariant {
    pub const ALL: [IconVariant; 3] = [IconVariant::Default, IconVariant::Dark, IconVariant::Light];

    fn suffix(&self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Dark => "-dark",
            Self::Light => "-light",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconCandidate {
    pub url: String,
    pub format: IconFormat,
    pub variant: IconVariant,
}

/// A public icon collection laid out as `{base}/{format}/{slug}{-variant}.{format}`.
#[derive(Debug, Clone)]
pub struct IconRepository {
    base_url: String,
}

impl IconRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Lowercased, whitespace runs collapsed to single dashes. Only ASCII
    /// alphanumerics, `-` and `_` survive, so the slug is safe as a path
    /// segment.
    pub fn slug(name: &str) -> String {
        name.split_whitespace()
            .map(|word| {
                word.chars()
                    .filter(|c: &char| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                    .map(|c| c.to_ascii_lowercase())
                    .collect::<String>()
            })
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Every URL worth probing for `name`, formats outermost.
    pub fn candidates(&self, name: &str) -> Vec<IconCandidate> {
        let slug = Self::slug(name);
        if slug.is_empty() {
            return Vec::new();
        }

        let mut out = Vec::with_capacity(IconFormat::ALL.len() * IconVariant::ALL.len());
        for format in IconFormat::ALL {
            for variant in IconVariant::ALL {
                out.push(IconCandidate {
                    url: format!("{}/{}/{}{}.{}", self.base_url, format, slug, variant.suffix(), format),
                    format,
                    variant,
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        assert_eq!(IconRepository::slug("  Home   Assistant "), "home-assistant");
        assert_eq!(IconRepository::slug("Plex"), "plex");
        assert_eq!(IconRepository::slug("Uptime_Kuma"), "uptime_kuma");
    }

    #[test]
    fn test_slug_drops_url_syntax() {
        assert_eq!(IconRepository::slug("a/b?c#d"), "abcd");
        assert_eq!(IconRepository::slug("../../etc/passwd"), "etcpasswd");
        assert_eq!(IconRepository::slug("Sonarr %2F / Radarr"), "sonarr-2f-radarr");
        assert_eq!(IconRepository::slug("Café Ünïcode"), "caf-ncode");
    }

    #[test]
    fn test_candidate_urls_stay_under_base() {
        let repo = IconRepository::new("https://icons.example.com");
        let candidates = repo.candidates("../admin?x=1#top");
        assert_eq!(candidates[0].url, "https://icons.example.com/svg/adminx1top.svg");
        assert!(repo.candidates("?/#").is_empty());
    }

    #[test]
    fn test_candidates_cover_formats_and_variants() {
        let repo = IconRepository::new("https://icons.example.com/");
        let candidates = repo.candidates("Plex");
        assert_eq!(candidates.len(), 9);
        assert_eq!(candidates[0].url, "https://icons.example.com/svg/plex.svg");
        assert_eq!(candidates[1].url, "https://icons.example.com/svg/plex-dark.svg");
        assert_eq!(candidates[2].url, "https://icons.example.com/svg/plex-light.svg");
        assert_eq!(candidates[8].url, "https://icons.example.com/webp/plex-light.webp");
        assert_eq!(candidates[8].format, IconFormat::Webp);
        assert_eq!(candidates[8].variant, IconVariant::Light);
    }

    #[test]
    fn test_blank_name_has_no_candidates() {
        let repo = IconRepository::new("https://icons.example.com");
        assert!(repo.candidates("   ").is_empty());
    }
}
