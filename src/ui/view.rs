//! Crossterm rendering for the search view.
//!
//! The renderer writes through a generic [`io::Write`] so tests can capture
//! output in a byte buffer. Layout is a pure function of the view state:
//! before the first search the input sits centered on an otherwise empty
//! screen (hero layout); afterwards it moves into a compact header with the
//! result area below.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use hyperserp_client::SearchResult;

use crate::config::UiSettings;

use super::state::{DisplayState, SearchViewState};

/// Input prompt shown before the query text.
const PROMPT: &str = "› ";

/// App title shown in the hero and the compact header.
const TITLE: &str = "HyperSerp";

/// Message shown when a completed search has no results.
const EMPTY_MESSAGE: &str = "No results yet.";

/// Key hint shown under the hero input.
const HERO_HINT: &str = "Enter to search · Esc to clear";

/// Renders the search view to a terminal-like writer.
pub struct Renderer<W: Write> {
    out: W,
    width: u16,
    height: u16,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer for a `width` × `height` cell surface.
    pub fn new(out: W, width: u16, height: u16) -> Self {
        Self { out, width, height }
    }

    /// Update the surface size after a terminal resize.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Consume the renderer and return the writer (used by tests).
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Draw the full view for the current state and flush.
    pub fn render(&mut self, state: &SearchViewState, ui: &UiSettings) -> io::Result<()> {
        queue!(self.out, Hide, Clear(ClearType::All))?;

        let display = state.display_state();
        let cursor = if display == DisplayState::Landing {
            self.render_hero(state)?
        } else {
            let cursor = self.render_header(state)?;
            match display {
                DisplayState::Loading => self.render_skeletons(ui)?,
                DisplayState::Empty => self.render_empty()?,
                DisplayState::Populated => self.render_results(state)?,
                DisplayState::Landing => {}
            }
            cursor
        };

        queue!(self.out, MoveTo(cursor.0, cursor.1), Show)?;
        self.out.flush()
    }

    /// Centered title + input, vertically centered. Returns the cursor cell.
    fn render_hero(&mut self, state: &SearchViewState) -> io::Result<(u16, u16)> {
        let mid = self.height / 2;
        let title_row = mid.saturating_sub(2);
        let input_row = mid;
        let hint_row = mid + 2;

        let title_col = center_col(self.width, TITLE.len());
        queue!(
            self.out,
            MoveTo(title_col, title_row),
            SetAttribute(Attribute::Bold),
            Print(TITLE),
            SetAttribute(Attribute::Reset)
        )?;

        let input = format!("{PROMPT}{}", state.query());
        let input_cells = input.chars().count();
        let input_col = center_col(self.width, input_cells.max(24));
        queue!(self.out, MoveTo(input_col, input_row), Print(&input))?;

        let hint_col = center_col(self.width, HERO_HINT.chars().count());
        queue!(
            self.out,
            MoveTo(hint_col, hint_row),
            SetAttribute(Attribute::Dim),
            Print(HERO_HINT),
            SetAttribute(Attribute::Reset)
        )?;

        Ok((input_col + input_cells as u16, input_row))
    }

    /// Compact sticky header: title + input on one row, separator below.
    /// Returns the cursor cell at the end of the input.
    fn render_header(&mut self, state: &SearchViewState) -> io::Result<(u16, u16)> {
        queue!(
            self.out,
            MoveTo(0, 0),
            SetAttribute(Attribute::Bold),
            Print(TITLE),
            SetAttribute(Attribute::Reset),
            Print("  "),
            Print(PROMPT),
            Print(state.query())
        )?;

        let separator = "─".repeat(self.width as usize);
        queue!(
            self.out,
            MoveTo(0, 1),
            SetAttribute(Attribute::Dim),
            Print(&separator),
            SetAttribute(Attribute::Reset)
        )?;

        let cursor_col =
            (TITLE.len() + 2 + PROMPT.chars().count() + state.query().chars().count()) as u16;
        Ok((cursor_col.min(self.width.saturating_sub(1)), 0))
    }

    /// Fixed count of dim placeholder rows while a search is in flight.
    fn render_skeletons(&mut self, ui: &UiSettings) -> io::Result<()> {
        let len = skeleton_len(self.width);
        let bar = "░".repeat(len);
        for i in 0..ui.skeleton_rows {
            let row = 3 + (i as u16) * 2;
            if row >= self.height {
                break;
            }
            queue!(
                self.out,
                MoveTo(2, row),
                SetAttribute(Attribute::Dim),
                Print(&bar),
                SetAttribute(Attribute::Reset)
            )?;
        }
        Ok(())
    }

    fn render_empty(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(2, 3),
            SetAttribute(Attribute::Dim),
            Print(EMPTY_MESSAGE),
            SetAttribute(Attribute::Reset)
        )
    }

    /// Ordered result rows: expansions hint, then per result a title line,
    /// URL, snippet, and an optional summary block.
    fn render_results(&mut self, state: &SearchViewState) -> io::Result<()> {
        let text_width = self.width.saturating_sub(4) as usize;
        let mut row: u16 = 3;

        if !state.expansions().is_empty() {
            let hint = format!("did you mean: {}", state.expansions().join(", "));
            queue!(
                self.out,
                MoveTo(2, row),
                SetAttribute(Attribute::Dim),
                Print(truncate_width(&hint, text_width)),
                SetAttribute(Attribute::Reset)
            )?;
            row += 2;
        }

        for result in state.results() {
            if row + 2 >= self.height {
                break;
            }

            let mut title = display_title(result).to_string();
            if let Some(topic) = result.topic.as_deref() {
                title.push_str(&format!("  [{topic}]"));
            }
            queue!(
                self.out,
                MoveTo(2, row),
                SetAttribute(Attribute::Bold),
                Print(truncate_width(&title, text_width)),
                SetAttribute(Attribute::Reset)
            )?;
            row += 1;

            if let Some(url) = result.url.as_deref() {
                queue!(
                    self.out,
                    MoveTo(2, row),
                    SetForegroundColor(Color::Blue),
                    SetAttribute(Attribute::Underlined),
                    Print(truncate_width(url, text_width)),
                    SetAttribute(Attribute::Reset),
                    ResetColor
                )?;
                row += 1;
            }

            if let Some(snippet) = result.snippet.as_deref() {
                if row < self.height {
                    queue!(
                        self.out,
                        MoveTo(2, row),
                        Print(truncate_width(snippet, text_width))
                    )?;
                    row += 1;
                }
            }

            if let Some(summary) = result.summary.as_deref() {
                if row < self.height {
                    let line = format!("AI summary: {summary}");
                    queue!(
                        self.out,
                        MoveTo(2, row),
                        SetForegroundColor(Color::Green),
                        Print(truncate_width(&line, text_width)),
                        ResetColor
                    )?;
                    row += 1;
                }
            }

            row += 1;
        }
        Ok(())
    }
}

/// Column that centers `len` cells on a `width`-cell row.
fn center_col(width: u16, len: usize) -> u16 {
    (width as usize).saturating_sub(len) as u16 / 2
}

/// Skeleton bar length for a given terminal width.
fn skeleton_len(width: u16) -> usize {
    (width.saturating_sub(4) as usize).min(56)
}

/// Title text for a result row: title, else URL, else a placeholder.
fn display_title(result: &SearchResult) -> &str {
    result
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .or(result.url.as_deref())
        .unwrap_or("(untitled)")
}

/// Truncate to `max` characters, appending an ellipsis when cut.
fn truncate_width(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}
