/// Whitespace as the `\s` regex class knows it: Unicode whitespace except
/// NEL, plus the byte order mark.
#[inline]
pub fn is_css_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Character cursor over the source text.
///
/// The cursor starts *before* the first character, so the first `advance`
/// yields character 0. `at_end` holds once no character remains after the
/// cursor.
#[derive(Debug)]
pub struct Scanner {
    input: Vec<char>,
    // index of the character right after the cursor
    next: usize,
}

impl Scanner {
    pub fn new(source: &str) -> Scanner {
        Scanner {
            input: source.chars().collect(),
            next: 0,
        }
    }

    /// Char offset of the character `peek` would return.
    #[inline]
    pub fn offset(&self) -> usize {
        self.next
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.next).copied()
    }

    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.next += 1;

        Some(c)
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.next >= self.input.len()
    }

    pub fn consume_while<F>(&mut self, predicate: F) -> String
    where
        F: Fn(char) -> bool,
    {
        let mut result = String::new();

        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }

            result.push(c);
            self.next += 1;
        }

        result
    }

    pub fn consume_whitespace(&mut self) {
        self.consume_while(is_css_whitespace);
    }

    /// Reads the two characters after the cursor and moves the cursor past
    /// both in one step. This is the only place the cursor moves by more
    /// than one character. Returns `None` without moving if fewer than two
    /// characters remain.
    pub fn take_pair(&mut self) -> Option<(char, char)> {
        let pair = match self.input.get(self.next..self.next + 2)? {
            [high, low] => (*high, *low),
            _ => return None,
        };
        self.next += 2;

        Some(pair)
    }

    /// Up to `n` characters after the cursor, for error messages.
    pub fn lookahead(&self, n: usize) -> String {
        self.input[self.next..].iter().take(n).collect()
    }
}
