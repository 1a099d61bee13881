use crate::formatting::FormatContext;
use crate::search::{SearchOutcome, format_detail};
use crate::shared::layout::truncate_with_ellipsis;

const LINE_INDENT: &str = "    ";

/// Summary line, then one `Found in <file> at <stamp>` per hit. With
/// `show_lines` each hit is followed by the matched line, cut to `width`.
pub fn render_search(
    outcome: &SearchOutcome,
    term: &str,
    show_lines: bool,
    width: usize,
    ctx: &FormatContext,
) -> String {
    let mut out = ctx.format_header(&outcome.summary(term));
    for hit in outcome.hits() {
        out.push('\n');
        out.push_str(&format_detail(
            &ctx.format_path(&hit.file.display().to_string()),
            &ctx.format_timestamp(&hit.timestamp),
        ));
        if show_lines {
            let room = width.saturating_sub(LINE_INDENT.len());
            let line = truncate_with_ellipsis(&hit.line, room);
            out.push('\n');
            out.push_str(LINE_INDENT);
            out.push_str(&ctx.highlight_match(&line, Some(term)));
        }
    }
    out
}
