//! Block letter banner art.
//!
//! Seven-line block glyphs for the handful of letters the intro and home
//! banners need. Unknown characters are skipped rather than rendered.

/// Glyph height in lines.
pub const GLYPH_HEIGHT: usize = 7;

/// Columns inserted between glyphs.
const LETTER_GAP: usize = 1;

/// Look up the block glyph for a character (case-insensitive).
pub fn glyph(ch: char) -> Option<&'static [&'static str; GLYPH_HEIGHT]> {
    let art: &[&str; GLYPH_HEIGHT] = match ch.to_ascii_uppercase() {
        'A' => &[
            " ████ ",
            "██  ██",
            "██  ██",
            "██████",
            "██  ██",
            "██  ██",
            "██  ██",
        ],
        'C' => &[
            " ████ ",
            "██  ██",
            "██    ",
            "██    ",
            "██    ",
            "██  ██",
            " ████ ",
        ],
        'E' => &[
            "██████",
            "██    ",
            "██    ",
            "█████ ",
            "██    ",
            "██    ",
            "██████",
        ],
        'L' => &[
            "██    ",
            "██    ",
            "██    ",
            "██    ",
            "██    ",
            "██    ",
            "██████",
        ],
        'M' => &[
            "██    ██",
            "███  ███",
            "████████",
            "██ ██ ██",
            "██    ██",
            "██    ██",
            "██    ██",
        ],
        'O' => &[
            " ████ ",
            "██  ██",
            "██  ██",
            "██  ██",
            "██  ██",
            "██  ██",
            " ████ ",
        ],
        'P' => &[
            "█████ ",
            "██  ██",
            "██  ██",
            "█████ ",
            "██    ",
            "██    ",
            "██    ",
        ],
        'S' => &[
            " █████",
            "██    ",
            "██    ",
            " ████ ",
            "    ██",
            "    ██",
            "█████ ",
        ],
        'W' => &[
            "██    ██",
            "██    ██",
            "██    ██",
            "██ ██ ██",
            "██ ██ ██",
            "██ ██ ██",
            " ██  ██ ",
        ],
        '!' => &["██", "██", "██", "██", "██", "  ", "██"],
        ' ' => &["    ", "    ", "    ", "    ", "    ", "    ", "    "],
        _ => return None,
    };
    Some(art)
}

/// Build banner lines for `text`, glyphs joined with a one-column gap.
pub fn build_banner(text: &str) -> Vec<String> {
    build_banner_masked(text, usize::MAX)
}

/// Build banner lines with only the first `visible` characters painted.
///
/// Hidden characters still occupy their columns, so a staggered reveal
/// never shifts the letters that are already showing.
pub fn build_banner_masked(text: &str, visible: usize) -> Vec<String> {
    let mut lines = vec![String::new(); GLYPH_HEIGHT];
    let mut first = true;

    for (index, ch) in text.chars().enumerate() {
        let Some(art) = glyph(ch) else {
            continue;
        };
        let width = art[0].chars().count();
        for (line, row) in lines.iter_mut().zip(art.iter()) {
            if !first {
                line.push_str(&" ".repeat(LETTER_GAP));
            }
            if index < visible {
                line.push_str(row);
            } else {
                line.push_str(&" ".repeat(width));
            }
        }
        first = false;
    }
    lines
}

/// Display width of the banner for `text`, in columns.
pub fn banner_width(text: &str) -> usize {
    build_banner(text)
        .first()
        .map(|line| line.chars().count())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_is_seven_lines_of_equal_width() {
        let banner = build_banner("SPACE");
        assert_eq!(banner.len(), GLYPH_HEIGHT);
        let width = banner[0].chars().count();
        assert!(width > 0);
        assert!(banner.iter().all(|line| line.chars().count() == width));
    }

    #[test]
    fn test_masked_banner_keeps_full_width() {
        let full = build_banner("SPACE");
        let masked = build_banner_masked("SPACE", 2);
        assert_eq!(
            full[0].chars().count(),
            masked[0].chars().count(),
        );
        // Fully masked banner is blank but still sized.
        let blank = build_banner_masked("SPACE", 0);
        assert!(blank.iter().all(|line| line.trim().is_empty()));
        assert_eq!(blank[0].chars().count(), full[0].chars().count());
    }

    #[test]
    fn test_unknown_characters_are_skipped() {
        assert!(glyph('Z').is_none());
        let banner = build_banner("SZP");
        let expected = build_banner("SP");
        assert_eq!(banner, expected);
    }

    #[test]
    fn test_welcome_banner_has_every_glyph() {
        for ch in "WELCOME!".chars() {
            assert!(glyph(ch).is_some(), "missing glyph for {ch}");
        }
    }
}
