use super::types::ShowType;

/// Keyword priority table for title classification.
///
/// Order matters: a title containing keywords from several categories
/// resolves to the earliest listed one (e.g. "生日演唱会" is a special
/// performance, not a concert). Scanned top to bottom, first match wins,
/// no match falls through to [`ShowType::Other`].
const TYPE_KEYWORDS: &[(ShowType, &[&str])] = &[
    (ShowType::Regular, &["定期公演", "定期"]),
    (ShowType::Special, &["生日", "特别"]),
    (ShowType::MeetAndGreet, &["见面会", "粉丝"]),
    (ShowType::Concert, &["演唱会", "音乐会"]),
];

/// Classifies a show title into its category.
pub fn classify_title(title: &str) -> ShowType {
    for (show_type, keywords) in TYPE_KEYWORDS {
        if keywords.iter().any(|kw| title.contains(kw)) {
            return *show_type;
        }
    }
    ShowType::Other
}
