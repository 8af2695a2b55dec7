//! Terminal capabilities used by the pager loop.
//!
//! [`Screen`] is the whole surface the interaction loop draws on. The one
//! implementation, [`TuiScreen`], keeps a shadow grid of the terminal and
//! hands it to ratatui on `present`, which emits only the cells that changed.

use super::console::Console;
use super::styles::{Attr, BarStyles};
use crossterm::event::Event;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io;

/// Character-grid terminal as seen by the pager loop.
///
/// Drawing calls only touch an off-screen grid; nothing reaches the terminal
/// until [`Screen::present`].
pub trait Screen {
    /// Terminal size as `(cols, rows)`, status row included.
    fn size(&self) -> (u16, u16);

    /// Shift rows `0..height` by `lines` (positive moves content up).
    /// Rows scrolled into view are blank.
    fn scroll_region(&mut self, height: u16, lines: isize);

    /// Write `text` starting at `(row, col)`, clipped at the right edge.
    fn write_clipped(&mut self, row: u16, col: u16, text: &str, attr: Attr);

    /// Blank a whole row.
    fn clear_row(&mut self, row: u16);

    /// Adopt a new terminal size. The grid is blanked.
    fn resize(&mut self, cols: u16, rows: u16) -> io::Result<()>;

    /// Ring the bell.
    fn bell(&mut self) -> io::Result<()>;

    /// Flush pending drawing to the terminal.
    fn present(&mut self) -> io::Result<()>;

    /// Block until the next input event.
    fn next_event(&mut self) -> io::Result<Event>;
}

/// [`Screen`] over a ratatui terminal and a [`Console`].
///
/// Generic over backend to support testing with `TestBackend`.
pub struct TuiScreen<B: Backend, C: Console> {
    terminal: Terminal<B>,
    console: C,
    shadow: Buffer,
    styles: BarStyles,
}

impl<B: Backend, C: Console> TuiScreen<B, C> {
    /// Wrap a backend. The grid starts blank at the backend's current size.
    pub fn new(backend: B, console: C, styles: BarStyles) -> io::Result<Self> {
        let terminal = Terminal::new(backend)?;
        let size = terminal.size()?;
        Ok(Self {
            terminal,
            console,
            shadow: Buffer::empty(Rect::new(0, 0, size.width, size.height)),
            styles,
        })
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    /// Mutable access to the underlying backend.
    pub fn backend_mut(&mut self) -> &mut B {
        self.terminal.backend_mut()
    }

    /// The input console.
    pub fn console(&self) -> &C {
        &self.console
    }
}

impl<B: Backend, C: Console> Screen for TuiScreen<B, C> {
    fn size(&self) -> (u16, u16) {
        (self.shadow.area.width, self.shadow.area.height)
    }

    fn scroll_region(&mut self, height: u16, lines: isize) {
        let width = usize::from(self.shadow.area.width);
        let height = usize::from(height.min(self.shadow.area.height));
        let shift = lines.unsigned_abs().min(height);
        if shift == 0 {
            return;
        }

        let region = &mut self.shadow.content[..width * height];
        let exposed = if lines > 0 {
            region.rotate_left(shift * width);
            (height - shift) * width..height * width
        } else {
            region.rotate_right(shift * width);
            0..shift * width
        };
        for cell in &mut region[exposed] {
            cell.reset();
        }
    }

    fn write_clipped(&mut self, row: u16, col: u16, text: &str, attr: Attr) {
        let area = self.shadow.area;
        if row >= area.height || col >= area.width {
            return;
        }
        // Raw control characters would move the real cursor.
        let printable: String = text
            .chars()
            .map(|c| if c.is_control() { '?' } else { c })
            .collect();
        let max_width = usize::from(area.width - col);
        self.shadow
            .set_stringn(col, row, printable, max_width, self.styles.style(attr));
    }

    fn clear_row(&mut self, row: u16) {
        if row >= self.shadow.area.height {
            return;
        }
        for col in 0..self.shadow.area.width {
            self.shadow[(col, row)].reset();
        }
    }

    fn resize(&mut self, cols: u16, rows: u16) -> io::Result<()> {
        let area = Rect::new(0, 0, cols, rows);
        self.terminal.resize(area)?;
        self.shadow = Buffer::empty(area);
        Ok(())
    }

    fn bell(&mut self) -> io::Result<()> {
        self.console.bell()
    }

    fn present(&mut self) -> io::Result<()> {
        let Self {
            terminal, shadow, ..
        } = self;
        terminal.draw(|frame| {
            let area = frame.area().intersection(shadow.area);
            let buf = frame.buffer_mut();
            for y in area.top()..area.bottom() {
                for x in area.left()..area.right() {
                    buf[(x, y)] = shadow[(x, y)].clone();
                }
            }
        })?;
        Ok(())
    }

    fn next_event(&mut self) -> io::Result<Event> {
        self.console.next_event()
    }
}
