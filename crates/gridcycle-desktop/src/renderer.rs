use macroquad::color::{BLACK, Color, WHITE};
use macroquad::shapes::draw_rectangle;
use macroquad::text::{draw_text, measure_text};
use macroquad::window::clear_background;

use gridcycle_core::grid::Position;
use gridcycle_core::player::PlayerColor;
use gridcycle_tron::TronState;

const POWER_UP_COLOR: Color = Color::new(0.0, 0.0, 1.0, 1.0);
const OBSTACLE_COLOR: Color = Color::new(0.5, 0.5, 0.5, 1.0);
const BANNER_BG: Color = Color::new(0.0, 0.0, 0.0, 0.7);

const SCORE_FONT_SIZE: u16 = 36;
const BANNER_FONT_SIZE: u16 = 48;
const SCORE_TOP_MARGIN: f32 = 10.0;

/// Screen rectangle `(x, y, w, h)` of the cell whose top-left corner is `pos`.
pub fn cell_rect(pos: Position, cell_size: i32) -> (f32, f32, f32, f32) {
    let size = cell_size as f32;
    (pos.x as f32, pos.y as f32, size, size)
}

pub fn to_color(c: PlayerColor) -> Color {
    Color::from_rgba(c.r, c.g, c.b, 255)
}

/// Left edge that centers text of `text_width` on a screen `screen_width` wide.
pub fn centered_x(text_width: f32, screen_width: f32) -> f32 {
    (screen_width - text_width) / 2.0
}

/// Text for the overlay banner, if one should be shown.
pub fn banner_text(paused: bool, round_messages: &[String]) -> Option<String> {
    if !round_messages.is_empty() {
        Some(round_messages.join("  "))
    } else if paused {
        Some("Paused (P to resume)".to_string())
    } else {
        None
    }
}

fn fill_cell(pos: Position, cell_size: i32, color: Color) {
    let (x, y, w, h) = cell_rect(pos, cell_size);
    draw_rectangle(x, y, w, h, color);
}

fn draw_centered(text: &str, y_top: f32, font_size: u16, color: Color, screen_width: f32) {
    let dims = measure_text(text, None, font_size, 1.0);
    let x = centered_x(dims.width, screen_width);
    draw_text(text, x, y_top + dims.offset_y, f32::from(font_size), color);
}

/// Draw one frame: trails, power-up, obstacles, the score line, and an
/// optional centered banner.
pub fn draw_frame(state: &TronState, score_line: &str, banner: Option<&str>) {
    clear_background(BLACK);

    let cell = state.board.cell_size;
    let screen_width = state.board.width as f32;

    for cycle in &state.cycles {
        let color = to_color(cycle.color);
        for &pos in &cycle.trail {
            fill_cell(pos, cell, color);
        }
        fill_cell(cycle.position, cell, color);
    }

    if let Some(pos) = state.power_up {
        fill_cell(pos, cell, POWER_UP_COLOR);
    }

    for &pos in &state.obstacles {
        fill_cell(pos, cell, OBSTACLE_COLOR);
    }

    draw_centered(score_line, SCORE_TOP_MARGIN, SCORE_FONT_SIZE, WHITE, screen_width);

    if let Some(text) = banner {
        let screen_height = state.board.height as f32;
        let band = f32::from(BANNER_FONT_SIZE) * 1.8;
        let top = (screen_height - band) / 2.0;
        draw_rectangle(0.0, top, screen_width, band, BANNER_BG);
        draw_centered(
            text,
            top + f32::from(BANNER_FONT_SIZE) * 0.4,
            BANNER_FONT_SIZE,
            WHITE,
            screen_width,
        );
    }
}
