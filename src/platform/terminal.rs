//! Terminal setup and teardown

use std::io::{self, Write};

use crossterm::event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags};
use crossterm::{ExecutableCommand, cursor, execute, terminal};

/// Run `undo` if `result` is an error, then pass the result through
pub fn rollback_on_err<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

/// Raw mode, alternate screen, hidden cursor. Returns whether key release
/// reporting was enabled.
///
/// If the screen cannot be switched, raw mode is turned back off before the
/// error is returned.
pub fn enter(out: &mut impl Write) -> io::Result<bool> {
    terminal::enable_raw_mode()?;
    rollback_on_err(
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
        ),
        || {
            let _ = terminal::disable_raw_mode();
        },
    )?;

    // Terminals without the kitty protocol reject this; held keys then fall
    // back to the repeat window
    let enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    log::debug!("Keyboard enhancement: {enhanced}");
    Ok(enhanced)
}

pub fn leave(out: &mut impl Write, keyboard_enhanced: bool) -> io::Result<()> {
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    execute!(
        out,
        terminal::LeaveAlternateScreen,
        cursor::Show,
        terminal::EnableLineWrap,
    )?;
    terminal::disable_raw_mode()
}
