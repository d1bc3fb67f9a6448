//! Model of the host's color options dialog.
//!
//! Three color slots with live preview: selections apply to the host
//! immediately, cancel restores the colors captured when the dialog
//! opened. The widgetry itself belongs to the host; this is only the
//! state and the host calls.

use crate::color::{Color, BLACK, WHITE, YELLOW};
use crate::named;

/// Host color slots the options model drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Foreground,
    Background,
    Selection,
}

/// The host side of the dialog: the three current colors plus a redraw
/// hook, invoked when the selection outline changes on screen.
pub trait ColorHost {
    fn foreground(&self) -> Color;
    fn set_foreground(&mut self, color: Color);
    fn background(&self) -> Color;
    fn set_background(&mut self, color: Color);
    fn selection(&self) -> Color;
    fn set_selection(&mut self, color: Color);
    fn request_redraw(&mut self);
}

/// Dialog state captured at open time.
#[derive(Debug)]
pub struct ColorOptions {
    original: [Color; 3],
}

impl ColorOptions {
    pub fn open(host: &impl ColorHost) -> Self {
        Self {
            original: [host.foreground(), host.background(), host.selection()],
        }
    }

    /// Names preselected in the three selectors, with the usual
    /// defaults for colors outside the table.
    pub fn initial_names(&self) -> [String; 3] {
        let [fg, bg, sel] = self.original;
        [
            named::name_or_default(Some(fg), "black"),
            named::name_or_default(Some(bg), "white"),
            named::name_or_default(Some(sel), "yellow"),
        ]
    }

    /// The choices offered by each selector, in table order.
    pub fn choices() -> Vec<&'static str> {
        named::NAMED_COLORS.iter().map(|(name, _)| *name).collect()
    }

    /// Live preview: apply a selected name to the host right away.
    pub fn select(&self, slot: Slot, name: &str, host: &mut impl ColorHost) {
        let color = named::from_name(name, BLACK);
        match slot {
            Slot::Foreground => host.set_foreground(color),
            Slot::Background => host.set_background(color),
            Slot::Selection => {
                host.set_selection(color);
                host.request_redraw();
            }
        }
    }

    /// Apply the final choices, touching only slots that changed.
    pub fn confirm(&self, fg: &str, bg: &str, sel: &str, host: &mut impl ColorHost) {
        let fg = named::from_name(fg, BLACK);
        let bg = named::from_name(bg, WHITE);
        let sel = named::from_name(sel, YELLOW);
        if fg != self.original[0] {
            host.set_foreground(fg);
        }
        if bg != self.original[1] {
            host.set_background(bg);
        }
        if sel != self.original[2] {
            host.set_selection(sel);
            host.request_redraw();
        }
    }

    /// Revert the live preview to the colors captured at open.
    pub fn cancel(&self, host: &mut impl ColorHost) {
        log::debug!("Revert color options");
        let [fg, bg, sel] = self.original;
        if host.foreground() != fg {
            host.set_foreground(fg);
        }
        if host.background() != bg {
            host.set_background(bg);
        }
        if host.selection() != sel {
            host.set_selection(sel);
            host.request_redraw();
        }
    }
}
