use yansi::Paint;

/// Color palette for consistent theming
pub struct ColorPalette {
    pub muted: (u8, u8, u8),     // file paths
    pub accent: (u8, u8, u8),    // mode, summaries
    pub timestamp: (u8, u8, u8), // entry stamps
    pub highlight: (u8, u8, u8), // search matches
    pub error: (u8, u8, u8),
}

impl ColorPalette {
    pub const TWILIGHT: Self = Self {
        muted: (108, 112, 134),
        accent: (183, 189, 248),
        timestamp: (137, 180, 250),
        highlight: (243, 139, 168),
        error: (255, 169, 167),
    };
}

/// Formatting context passed to everything that prints.
pub struct FormatContext {
    pub use_color: bool,
    pub palette: ColorPalette,
}

impl FormatContext {
    pub fn new(use_color: bool) -> Self {
        Self { use_color, palette: ColorPalette::TWILIGHT }
    }

    pub fn from_env() -> Self {
        let use_color = std::env::var("NO_COLOR").is_err();
        Self::new(use_color)
    }

    fn paint(&self, text: &str, (r, g, b): (u8, u8, u8), bold: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }
        let painted = Paint::rgb(text, r, g, b);
        if bold { painted.bold().to_string() } else { painted.to_string() }
    }

    pub fn format_path(&self, path: &str) -> String {
        self.paint(path, self.palette.muted, false)
    }

    pub fn format_header(&self, text: &str) -> String {
        self.paint(text, self.palette.accent, true)
    }

    pub fn format_timestamp(&self, ts: &str) -> String {
        self.paint(ts, self.palette.timestamp, false)
    }

    pub fn format_error(&self, text: &str) -> String {
        self.paint(text, self.palette.error, true)
    }

    /// Paint every case-insensitive occurrence of `query` inside `text`.
    pub fn highlight_match(&self, text: &str, query: Option<&str>) -> String {
        let Some(q) = query else { return text.to_string() };
        if q.is_empty() || !self.use_color {
            return text.to_string();
        }

        let q_lower = q.to_lowercase();
        let mut out = String::new();
        let mut remaining = text;

        loop {
            let lowered = remaining.to_lowercase();
            // Lowercasing can change byte lengths outside ASCII; bail out
            // rather than slice at a shifted offset.
            if lowered.len() != remaining.len() {
                break;
            }
            let Some(pos) = lowered.find(&q_lower) else { break };
            let end = pos + q_lower.len();
            if !remaining.is_char_boundary(pos)
                || !remaining.is_char_boundary(end)
            {
                break;
            }
            out.push_str(&remaining[..pos]);
            out.push_str(&self.paint(
                &remaining[pos..end],
                self.palette.highlight,
                true,
            ));
            remaining = &remaining[end..];
        }
        out.push_str(remaining);
        out
    }
}
