use crate::parsing::{chars::is_terminator, inline::InlineState};

/// Consumes bytes up to the next one another rule could start on.
pub fn text(state: &mut InlineState<'_>, silent: bool) -> bool {
    let start = state.cursor.pos();
    while let Some(b) = state.cursor.peek() {
        if is_terminator(b) {
            break;
        }
        state.cursor.bump();
    }

    let end = state.cursor.pos();
    if end == start {
        return false;
    }
    if !silent {
        let run = state.cursor.slice(start, end);
        state.pending.push_str(run);
    }
    true
}
