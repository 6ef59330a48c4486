/// Represents an open Go document in the LSP server
pub struct Document {
    /// The current text content of the document
    text: String,
    /// Lines of the document (cached for position calculations)
    lines: Vec<String>,
}

impl Document {
    pub fn new(text: String) -> Self {
        let lines = split_lines(&text);
        Self { text, lines }
    }

    pub fn update_text(&mut self, new_text: String) {
        self.lines = split_lines(&new_text);
        self.text = new_text;
    }

    #[allow(dead_code)]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line(&self, line: u32) -> Option<&str> {
        self.lines.get(line as usize).map(String::as_str)
    }
}

fn split_lines(text: &str) -> Vec<String> {
    // `str::lines` drops a trailing empty line, which is where the cursor
    // usually is after typing a newline
    text.split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
        .collect()
}

/// Convert an LSP (UTF-16) column to a `char` column, clamped to the line
pub fn char_column(line: &str, utf16_column: u32) -> usize {
    let mut units = 0u32;
    for (idx, c) in line.chars().enumerate() {
        if units >= utf16_column {
            return idx;
        }
        units += c.len_utf16() as u32;
    }
    line.chars().count()
}

/// Convert a `char` column back to an LSP (UTF-16) column
pub fn utf16_column(line: &str, char_column: usize) -> u32 {
    line.chars()
        .take(char_column)
        .map(|c| c.len_utf16() as u32)
        .sum()
}
