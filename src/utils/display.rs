//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::engine::{Grid, GridEngine};
use crate::interop::GridFrame;
use anyhow::Result;

/// Format grids and frames for the terminal
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height * (grid.width + 1) * 3);
        for y in 0..grid.height {
            for x in 0..grid.width {
                output.push(if grid.is_alive(y, x) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Column numbers, last digit only
        output.push_str("   ");
        for x in 0..grid.width {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for y in 0..grid.height {
            output.push_str(&format!("{:2} ", y));
            for x in 0..grid.width {
                output.push_str(if grid.is_alive(y, x) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// One-line status for a generation
    pub fn format_status(engine: &GridEngine) -> String {
        let (width, height) = engine.dimensions();
        let live = engine.live_count();
        format!(
            "Generation {} | {}x{} | Living: {} ({:.1}%)",
            engine.generation(),
            width,
            height,
            live,
            live as f64 / (width * height) as f64 * 100.0
        )
    }

    /// Render the engine's current frame in the requested format
    pub fn render_frame(engine: &GridEngine, format: OutputFormat, show_coordinates: bool) -> Result<Option<String>> {
        let rendered = match format {
            OutputFormat::Text => {
                let grid = if show_coordinates {
                    Self::format_grid_with_coords(engine.grid())
                } else {
                    Self::format_grid_compact(engine.grid())
                };
                Some(format!("{}\n{}", Self::format_status(engine), grid))
            }
            OutputFormat::Json => Some(serde_json::to_string(&GridFrame::capture(engine))?),
            OutputFormat::None => None,
        };
        Ok(rendered)
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_formatting() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        let compact = GridFormatter::format_grid_compact(&grid);
        assert_eq!(compact, "█·█\n·█·\n█·█\n");

        let with_coords = GridFormatter::format_grid_with_coords(&grid);
        assert!(with_coords.contains(" 0 1 2"));
    }

    #[test]
    fn test_render_formats() {
        let mut engine = GridEngine::with_dimensions(4, 2).unwrap();
        engine.toggle_cell(1, 1);

        let text = GridFormatter::render_frame(&engine, OutputFormat::Text, false)
            .unwrap()
            .unwrap();
        assert!(text.starts_with("Generation 0 | 4x2 | Living: 1"));
        assert!(text.ends_with("····\n·█··\n"));

        let json = GridFormatter::render_frame(&engine, OutputFormat::Json, false)
            .unwrap()
            .unwrap();
        let frame: GridFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(frame.cells, vec![0, 0, 0, 0, 0, 1, 0, 0]);

        assert!(GridFormatter::render_frame(&engine, OutputFormat::None, false)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Blue);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
