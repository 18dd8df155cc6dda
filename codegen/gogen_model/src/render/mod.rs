//! Rendering Context
//!
//! Tracks indentation while nodes write Go source text. Indentation is
//! applied lazily: the first fragment emitted on a fresh line is preceded by
//! the current indentation, so nested bodies (a struct inside a struct field,
//! an interface inside a parameter list) line up without the caller tracking
//! columns.

mod emitter;

pub use emitter::{Emitter, StringEmitter};

/// Indentation unit for member lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    /// One tab per level, as `gofmt` writes.
    #[default]
    Tab,
    /// A fixed number of spaces per level.
    Spaces(usize),
}

impl Indent {
    fn unit(self) -> String {
        match self {
            Indent::Tab => "\t".to_owned(),
            Indent::Spaces(n) => " ".repeat(n),
        }
    }
}

/// Configuration for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub indent: Indent,
}

/// Rendering context that tracks indentation state during output.
pub struct RenderContext<E: Emitter = StringEmitter> {
    emitter: E,
    unit: String,
    depth: usize,
    at_line_start: bool,
}

impl RenderContext<StringEmitter> {
    /// Create a context with a string emitter and default config.
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self::with_emitter(StringEmitter::new(), config)
    }

    /// Finish rendering and return the text.
    pub fn finish(self) -> String {
        self.emitter.output()
    }
}

impl Default for RenderContext<StringEmitter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Emitter> RenderContext<E> {
    pub fn with_emitter(emitter: E, config: RenderConfig) -> Self {
        RenderContext {
            emitter,
            unit: config.indent.unit(),
            depth: 0,
            at_line_start: true,
        }
    }

    pub fn into_emitter(self) -> E {
        self.emitter
    }

    /// Emit a fragment that contains no line breaks.
    pub fn emit(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            self.emitter.emit_indent(&self.unit, self.depth);
            self.at_line_start = false;
        }
        self.emitter.emit(text);
    }

    pub fn newline(&mut self) {
        self.emitter.emit_newline();
        self.at_line_start = true;
    }

    /// Emit text verbatim, line breaks and indentation included.
    pub fn emit_raw(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.emitter.emit(text);
        self.at_line_start = text.ends_with('\n');
    }

    /// Emit `text` as `// ` comment lines at the current indentation.
    pub fn comment(&mut self, text: &str) {
        let text = text.trim_end_matches(['\n', '\r']);
        if text.is_empty() {
            return;
        }
        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                self.emit("//");
            } else {
                self.emit("// ");
                self.emit(line);
            }
            self.newline();
        }
    }

    /// Run `body` one indentation level deeper.
    pub fn indented<T>(&mut self, body: impl FnOnce(&mut Self) -> T) -> T {
        self.depth += 1;
        let result = body(self);
        self.depth -= 1;
        result
    }
}
