fn is_operator(character: char) -> bool {
    matches!(character, '+' | '-' | '*' | '/' | '^' | '%')
}

fn is_punctuation(character: char) -> bool {
    matches!(character, '(' | ')')
}

struct FragmentBuffer {
    fragments: Vec<String>,
    pending: String,
}

impl FragmentBuffer {
    fn new() -> Self {
        Self{fragments: Vec::new(), pending: String::new()}
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            self.fragments.push(std::mem::take(&mut self.pending));
        }
    }

    fn push_single(&mut self, character: char) {
        self.flush();
        self.fragments.push(character.to_string());
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.fragments
    }
}

/// Splits a line into fragments: runs of literal characters, and single
/// operator or parenthesis characters. Whitespace only separates fragments.
pub fn scan(line: &str) -> Vec<String> {
    let mut buffer = FragmentBuffer::new();
    for character in line.chars() {
        if character.is_whitespace() {
            buffer.flush();
        } else if is_operator(character) || is_punctuation(character) {
            buffer.push_single(character);
        } else {
            buffer.pending.push(character);
        }
    }
    buffer.finish()
}
