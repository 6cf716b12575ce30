use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal columns taken by `s`.
pub fn display_width(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

/// Truncate to `max_width` columns, appending "…" if truncated 🛡️
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Essence", 10), "Essence");
        assert_eq!(truncate("Essence (feat. Tems)", 8), "Essence…");
        assert_eq!(truncate("日本語の歌", 5), "日本…");
    }

    #[test]
    fn test_emoji_width() {
        assert_eq!(display_width("🎸"), 2);
        assert_eq!(display_width("Rock"), 4);
    }
}
