use super::escape_xml;

const INDENT: &str = "  ";

/// Line-oriented builder for a tool's tagged-text document.
///
/// ```
/// use tool_xml::xml::XmlWriter;
///
/// let mut xml = XmlWriter::new("list_files");
/// xml.leaf(1, "path", "src");
/// assert_eq!(xml.finish(), "<list_files>\n  <path>src</path>\n</list_files>");
/// ```
#[derive(Debug, Clone)]
pub struct XmlWriter {
    root: String,
    buf: String,
}

impl XmlWriter {
    /// Starts a document with `root` as the outermost element.
    pub fn new(root: &str) -> Self {
        let root = escape_xml(root);
        let mut buf = String::with_capacity(128);
        buf.push('<');
        buf.push_str(&root);
        buf.push_str(">\n");
        Self { root, buf }
    }

    /// Writes `<tag>text</tag>` on its own line, escaping both tag and text.
    pub fn leaf(&mut self, depth: usize, tag: &str, text: &str) -> &mut Self {
        let tag = escape_xml(tag);
        self.indent(depth);
        self.buf.push('<');
        self.buf.push_str(&tag);
        self.buf.push('>');
        self.buf.push_str(&escape_xml(text));
        self.buf.push_str("</");
        self.buf.push_str(&tag);
        self.buf.push_str(">\n");
        self
    }

    /// Writes `<tag>` only when `text` is present.
    pub fn optional_leaf(&mut self, depth: usize, tag: &str, text: Option<&str>) -> &mut Self {
        if let Some(text) = text {
            self.leaf(depth, tag, text);
        }
        self
    }

    /// Opens a wrapper element.
    pub fn open(&mut self, depth: usize, tag: &str) -> &mut Self {
        self.indent(depth);
        self.buf.push('<');
        self.buf.push_str(&escape_xml(tag));
        self.buf.push_str(">\n");
        self
    }

    /// Closes a wrapper element opened with [`XmlWriter::open`].
    pub fn close(&mut self, depth: usize, tag: &str) -> &mut Self {
        self.indent(depth);
        self.buf.push_str("</");
        self.buf.push_str(&escape_xml(tag));
        self.buf.push_str(">\n");
        self
    }

    /// Closes the root element and returns the document.
    pub fn finish(mut self) -> String {
        self.buf.push_str("</");
        self.buf.push_str(&self.root);
        self.buf.push('>');
        self.buf
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.buf.push_str(INDENT);
        }
    }
}
