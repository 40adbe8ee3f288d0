//! Telephone keypad letter groups.

/// Keys that carry letters, in keypad order.
pub const LETTER_KEYS: [char; 8] = ['2', '3', '4', '5', '6', '7', '8', '9'];

/// Letters on `digit`'s key, in keypad order.
///
/// Total over `char`: `0`, `1` and anything that is not a keypad digit map to
/// the empty group.
pub fn letters_for(digit: char) -> &'static [char] {
    match digit {
        '2' => &['a', 'b', 'c'],
        '3' => &['d', 'e', 'f'],
        '4' => &['g', 'h', 'i'],
        '5' => &['j', 'k', 'l'],
        '6' => &['m', 'n', 'o'],
        '7' => &['p', 'q', 'r', 's'],
        '8' => &['t', 'u', 'v'],
        '9' => &['w', 'x', 'y', 'z'],
        _ => &[],
    }
}

/// Key digit for a lowercase ASCII letter.
pub fn digit_for(letter: char) -> Option<char> {
    match letter {
        'a'..='c' => Some('2'),
        'd'..='f' => Some('3'),
        'g'..='i' => Some('4'),
        'j'..='l' => Some('5'),
        'm'..='o' => Some('6'),
        'p'..='s' => Some('7'),
        't'..='v' => Some('8'),
        'w'..='z' => Some('9'),
        _ => None,
    }
}

/// Digit sequence that types `word`, or `None` if any character is not on
/// the keypad (such words can never be returned by a digit query).
pub fn digits_for_word(word: &str) -> Option<String> {
    word.chars().map(digit_for).collect()
}
