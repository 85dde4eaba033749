//! Rendering tests against ratatui's test backend.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect, style::Modifier};
use tictactoe_tui::{Action, App, CursorMove, Theme, ui};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 24;

fn render(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn lines(buffer: &Buffer) -> Vec<String> {
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|c| c.symbol()).collect())
        .collect()
}

fn screen_contains(buffer: &Buffer, needle: &str) -> bool {
    lines(buffer).iter().any(|l| l.contains(needle))
}

fn cell_centre(index: usize) -> (u16, u16) {
    let cell = ui::board_cells(Rect::new(0, 0, WIDTH, HEIGHT))[index];
    (cell.x + cell.width / 2, cell.y + cell.height / 2)
}

fn play(app: &mut App, indices: &[usize]) {
    for &i in indices {
        app.handle(Action::Select(i));
    }
}

#[test]
fn test_initial_screen() {
    let buffer = render(&App::default());
    assert!(screen_contains(&buffer, "Tic Tac Toe"));
    assert!(screen_contains(&buffer, "Turn: X"));
    assert!(screen_contains(&buffer, "Cell 5, empty"));
}

#[test]
fn test_marks_are_drawn_in_their_cells() {
    let mut app = App::default();
    play(&mut app, &[0, 8]);
    let buffer = render(&app);

    let (x, y) = cell_centre(0);
    assert_eq!(buffer[(x, y)].symbol(), "X");
    let (x, y) = cell_centre(8);
    assert_eq!(buffer[(x, y)].symbol(), "O");
    assert!(screen_contains(&buffer, "Turn: X"));
    assert!(screen_contains(&buffer, "Cell 9, filled by O"));
}

#[test]
fn test_winning_cells_are_highlighted() {
    let mut app = App::default();
    play(&mut app, &[0, 3, 1, 4, 2]);
    let buffer = render(&app);
    let theme = Theme::default();

    assert!(screen_contains(&buffer, "Winner: X"));
    for i in [0, 1, 2] {
        let (x, y) = cell_centre(i);
        assert_eq!(buffer[(x, y)].bg, theme.accent, "cell {i} not highlighted");
    }
    for i in [3, 4] {
        let (x, y) = cell_centre(i);
        assert_ne!(buffer[(x, y)].bg, theme.accent);
        assert!(buffer[(x, y)].modifier.contains(Modifier::DIM));
    }
}

#[test]
fn test_draw_message() {
    let mut app = App::default();
    play(&mut app, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let buffer = render(&app);
    assert!(screen_contains(&buffer, "It's a Draw!"));
}

#[test]
fn test_cursor_highlight_moves_with_selection() {
    let mut app = App::default();
    let theme = Theme::default();

    let (x, y) = cell_centre(4);
    assert_eq!(render(&app)[(x, y)].bg, theme.primary);

    app.handle(Action::Select(6));
    app.handle(Action::MoveCursor(CursorMove::Right));
    let buffer = render(&app);
    let (x, y) = cell_centre(7);
    assert_eq!(buffer[(x, y)].bg, theme.primary);
    let (x, y) = cell_centre(4);
    assert_ne!(buffer[(x, y)].bg, theme.primary);
}

#[test]
fn test_filled_cell_is_disabled_during_play() {
    let mut app = App::default();
    let theme = Theme::default();
    app.handle(Action::Select(0));
    app.handle(Action::MoveCursor(CursorMove::Down));
    let buffer = render(&app);

    let (x, y) = cell_centre(0);
    assert_eq!(buffer[(x, y)].symbol(), "X");
    assert!(buffer[(x, y)].modifier.contains(Modifier::DIM));
    assert_ne!(buffer[(x, y)].bg, theme.primary);

    // The cursor cell is still playable.
    let (x, y) = cell_centre(3);
    assert_eq!(buffer[(x, y)].bg, theme.primary);
    assert!(!buffer[(x, y)].modifier.contains(Modifier::DIM));
}

#[test]
fn test_cursor_on_filled_cell_uses_muted_background() {
    let mut app = App::default();
    let theme = Theme::default();
    app.handle(Action::Select(4));
    assert_eq!(app.cursor().to_index(), 4);

    let buffer = render(&app);
    let (x, y) = cell_centre(4);
    assert_eq!(buffer[(x, y)].bg, theme.muted);
    assert!(buffer[(x, y)].modifier.contains(Modifier::DIM));
}

#[test]
fn test_cell_numbers_can_be_hidden() {
    let app = App::new(Theme::default(), false);
    let buffer = render(&app);
    let (x, y) = cell_centre(0);
    assert_eq!(buffer[(x, y)].symbol(), " ");

    let buffer = render(&App::default());
    assert_eq!(buffer[(x, y)].symbol(), "1");
}
