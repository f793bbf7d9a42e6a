pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();

/// Every stored word has exactly this many letters.
pub const WORD_LEN: usize = 6;

/// Slot of a letter in a node's child array, `None` for anything outside `a..=z`.
pub fn get_idx(a: char) -> Option<usize> {
    if a.is_ascii_lowercase() {
        Some((a as u8 - b'a') as usize)
    } else {
        None
    }
}

pub fn get_letter(idx: usize) -> char {
    ALPHABET[idx] as char
}

pub fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use crate::alphabet::{get_idx, get_letter, normalize, ALPHABET};

    #[test]
    fn letters_map_to_their_slots() {
        assert_eq!(get_idx('a'), Some(0));
        assert_eq!(get_idx('z'), Some(25));
        (0..ALPHABET.len()).for_each(|i| assert_eq!(get_idx(get_letter(i)), Some(i)));
    }

    #[test]
    fn rejects_non_letters() {
        assert_eq!(get_idx('A'), None);
        assert_eq!(get_idx(' '), None);
        assert_eq!(get_idx('é'), None);
        assert_eq!(get_idx('1'), None);
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  AmaZon\r"), "amazon");
    }
}
