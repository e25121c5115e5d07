//! Code builder utility for generating properly indented code.

/// One indentation level of Java sources.
const JAVA_INDENT: &str = "    ";
/// One indentation level of TypeScript sources.
const TYPESCRIPT_INDENT: &str = "  ";

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for loops.
///
/// # Example (Consuming API)
///
/// ```
/// use dtogen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::java()
///     .line("public class User {")
///     .indent()
///     .line("private long id;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "public class User {\n    private long id;\n}\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use dtogen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("export class User {")
///     .push_indent()
///     .push_line("public id: number;")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(builder.build(), "export class User {\n  public id: number;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    unit: &'static str,
    buffer: String,
}

impl CodeBuilder {
    fn with_unit(unit: &'static str) -> Self {
        Self {
            indent_level: 0,
            unit,
            buffer: String::new(),
        }
    }

    /// 4-space indentation.
    pub fn java() -> Self {
        Self::with_unit(JAVA_INDENT)
    }

    /// 2-space indentation.
    pub fn typescript() -> Self {
        Self::with_unit(TYPESCRIPT_INDENT)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add every line of a multi-line text with current indentation (mutable).
    ///
    /// Blank lines stay unindented. Empty text adds nothing.
    pub fn push_lines(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `/** ... */` documentation block, one ` * ` line per entry (mutable).
    ///
    /// Empty entries become bare ` *` separator lines.
    pub fn push_doc_block<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) -> &mut Self {
        self.push_line("/**");
        for line in lines {
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {line}"));
            }
        }
        self.push_line(" */")
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add every line of a multi-line text with current indentation.
    pub fn lines(mut self, text: &str) -> Self {
        self.push_lines(text);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use dtogen_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::java()
    ///     .block_with_close("public User() {", "}", |b: CodeBuilder| b.line("this.id = 0L;"))
    ///     .build();
    ///
    /// assert_eq!(code, "public User() {\n    this.id = 0L;\n}\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a `/** ... */` documentation block.
    pub fn doc_block<'a>(mut self, lines: impl IntoIterator<Item = &'a str>) -> Self {
        self.push_doc_block(lines);
        self
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.unit);
        }
    }
}
