//! Derives clean song titles from raw file names.

use std::fmt;

/// Number of characters taken up by a dot and a three letter extension.
const EXTENSION_LENGTH: usize = 4;

/// Strips the extension from `song` and keeps the text after the first
/// occurrence of `separator`, trimmed. Without `separator`, the
/// extension-stripped name is returned unchanged.
///
/// The extension is assumed to be a dot and three letters; it is not
/// validated.
pub fn fix_song_name(separator: char, song: &str) -> String {
    let length = song.chars().count();
    let stem: String = song
        .chars()
        .take(length.saturating_sub(EXTENSION_LENGTH))
        .collect();

    match stem.split_once(separator) {
        Some((_, rest)) => rest.trim().to_owned(),
        None => stem,
    }
}

/// How to derive a title from a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixRule {
    /// Use the part after the dash.
    Dash,
    /// Use the part after the space.
    Space,
    /// Use the part after the dot.
    Dot,
}

impl FixRule {
    /// All rules, in the order they are offered.
    pub const ALL: [FixRule; 3] = [FixRule::Dash, FixRule::Space, FixRule::Dot];

    /// Parses a menu selection. Only the literal `1`, `2` or `3` is
    /// accepted.
    pub fn from_selection(selection: &str) -> Option<FixRule> {
        match selection {
            "1" => Some(FixRule::Dash),
            "2" => Some(FixRule::Space),
            "3" => Some(FixRule::Dot),
            _ => None,
        }
    }

    /// Menu selection for this rule.
    pub fn selection(self) -> char {
        match self {
            FixRule::Dash => '1',
            FixRule::Space => '2',
            FixRule::Dot => '3',
        }
    }

    /// Character split on.
    pub fn separator(self) -> char {
        match self {
            FixRule::Dash => '-',
            FixRule::Space => ' ',
            FixRule::Dot => '.',
        }
    }

    /// Applies the rule to `song`, see [`fix_song_name`].
    pub fn apply(self, song: &str) -> String {
        fix_song_name(self.separator(), song)
    }
}

impl fmt::Display for FixRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FixRule::Dash => "dash",
            FixRule::Space => "space",
            FixRule::Dot => "dot",
        };

        write!(
            f,
            "({}) Use part after {name} '{}'",
            self.selection(),
            self.separator()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_after_dash() {
        assert_eq!(fix_song_name('-', "Artist - Song.mp3"), "Song");
    }

    #[test]
    fn test_fix_after_dot() {
        assert_eq!(fix_song_name('.', "01.Track Name.mp3"), "Track Name");
    }

    #[test]
    fn test_fix_without_separator() {
        assert_eq!(fix_song_name('-', "NoSeparator.mp3"), "NoSeparator");
    }

    #[test]
    fn test_fix_keeps_later_separators() {
        assert_eq!(
            fix_song_name('-', "01 - Artist - Song.mp3"),
            "Artist - Song"
        );
        assert_eq!(fix_song_name(' ', "01 Some Song.mp3"), "Some Song");
    }

    #[test]
    fn test_fix_always_strips_four_characters() {
        assert_eq!(fix_song_name('-', "song.flac"), "song.");
        assert_eq!(fix_song_name('-', "x-y.ogg"), "y");
        assert_eq!(fix_song_name('-', "abc"), "");
    }

    #[test]
    fn test_fix_counts_characters_not_bytes() {
        assert_eq!(fix_song_name('-', "Björk - Jóga.mp3"), "Jóga");
        assert_eq!(fix_song_name('-', "日本.mp3"), "日本");
    }

    #[test]
    fn test_fix_is_idempotent_on_fixed_names() {
        let once = fix_song_name('-', "A - One.mp3");
        let twice = fix_song_name('-', &format!("{once}.mp3"));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_rule_selection() {
        assert_eq!(FixRule::from_selection("1"), Some(FixRule::Dash));
        assert_eq!(FixRule::from_selection("2"), Some(FixRule::Space));
        assert_eq!(FixRule::from_selection("3"), Some(FixRule::Dot));

        for rejected in ["", "0", "4", "12", "123", " 1", "a"] {
            assert_eq!(FixRule::from_selection(rejected), None, "{rejected:?}");
        }

        for rule in FixRule::ALL {
            let selection = rule.selection().to_string();
            assert_eq!(FixRule::from_selection(&selection), Some(rule));
        }
    }

    #[test]
    fn test_rule_apply() {
        assert_eq!(FixRule::Dash.apply("B - Two.mp3"), "Two");
        assert_eq!(FixRule::Space.apply("03 Three.mp3"), "Three");
        assert_eq!(FixRule::Dot.apply("04.Four.mp3"), "Four");
    }
}
