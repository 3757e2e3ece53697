//! Line-oriented script assembly.

/// Accumulates generated script text with indentation tracking.
pub(super) struct ScriptBuilder {
    out: String,
    indent: usize,
}

impl ScriptBuilder {
    pub(super) fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
        }
    }

    pub(super) fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    pub(super) fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Emits a multi-line fragment verbatim at the current indent level.
    /// Used for action code splices, which must not be reformatted.
    pub(super) fn fragment(&mut self, text: &str) {
        for line in text.lines() {
            self.line(line);
        }
    }

    pub(super) fn open(&mut self, text: &str) {
        self.line(text);
        self.indent += 1;
    }

    pub(super) fn close(&mut self, text: &str) {
        self.indent = self.indent.saturating_sub(1);
        self.line(text);
    }

    pub(super) fn finish(self) -> String {
        self.out
    }
}

/// Turns a block or action id into a valid JavaScript identifier suffix.
pub(super) fn ident(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    for c in id.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else {
            out.push('_');
        }
    }
    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// JSON-escapes a string into a double-quoted JS string literal.
pub(super) fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
