//! Fruit Board Example
//!
//! Drives a three-column board of fruit tiles through a scripted session:
//! - Layout at a fixed width, printed as a table of bounds
//! - A quick tap, a held press and a long press
//! - Keyboard navigation and confirmation
//! - A data change followed by a fresh layout
//!
//! Run with: cargo run -p horizon-board --example fruit_board
//! Set `RUST_LOG=horizon_board=trace` to watch the input state machine.

use std::sync::Arc;
use std::time::{Duration, Instant};

use horizon_board::{
    BoardView, GridConfig, ItemFactory, Key, KeyEvent, PointerAction, PointerEvent,
    SizeConstraint, VecAdapter,
};
use horizon_board_core::{BoardError, Point, Rect, Size};
use tracing_subscriber::EnvFilter;

const FRUITS: [&str; 9] = [
    "apple", "mango", "fruit", "orange", "mango", "apple", "orange", "fruit", "orange",
];

/// A text tile: one label, wrapped to the column width.
struct FruitTile {
    label: String,
    pressed: bool,
    selected: bool,
}

/// Renders tiles from the shared adapter.
struct FruitTiles {
    adapter: Arc<VecAdapter<&'static str>>,
}

impl FruitTiles {
    const CHAR_WIDTH: f32 = 9.0;
    const LINE_HEIGHT: f32 = 18.0;
}

impl ItemFactory for FruitTiles {
    type Item = FruitTile;

    fn create_or_reuse(&mut self, position: usize, previous: Option<FruitTile>) -> Option<FruitTile> {
        let name = self.adapter.get(position)?;
        let mut tile = previous.unwrap_or(FruitTile {
            label: String::new(),
            pressed: false,
            selected: false,
        });
        tile.label.clear();
        tile.label.push_str(name);
        Some(tile)
    }

    fn measure(&mut self, _position: usize, item: &mut FruitTile, width: SizeConstraint) -> Size {
        let natural = item.label.len() as f32 * Self::CHAR_WIDTH;
        let width = if width.is_exact() { width.size() } else { natural };
        let lines = (natural / width.max(Self::CHAR_WIDTH)).ceil().max(1.0);
        Size::new(width, lines * Self::LINE_HEIGHT)
    }

    fn set_pressed(&mut self, _position: usize, item: &mut FruitTile, pressed: bool) {
        item.pressed = pressed;
    }

    fn set_selected(&mut self, _position: usize, item: &mut FruitTile, selected: bool) {
        item.selected = selected;
    }

    fn long_press_feedback(&mut self, position: usize) {
        println!("  * buzz ({position})");
    }
}

fn print_board(board: &BoardView<FruitTile>) {
    for position in 0..board.item_count() {
        let (Some(tile), Some(bounds)) = (board.item(position), board.item_bounds(position)) else {
            continue;
        };
        let marker = match (tile.selected, tile.pressed) {
            (_, true) => '#',
            (true, false) => '>',
            _ => ' ',
        };
        println!(
            "  {marker} {position}: {:<8} at ({:>5.1}, {:>5.1}) {}x{}",
            tile.label,
            bounds.left(),
            bounds.top(),
            bounds.width(),
            bounds.height()
        );
    }
}

fn relayout(board: &mut BoardView<FruitTile>, tiles: &mut FruitTiles) -> Result<(), BoardError> {
    let size = board.measure(SizeConstraint::Exact(200.0), SizeConstraint::Unspecified, tiles)?;
    board.layout(true, Rect::new(0.0, 0.0, size.width, size.height), tiles)?;
    println!("board: {}x{}", size.width, size.height);
    print_board(board);
    Ok(())
}

fn tap(board: &mut BoardView<FruitTile>, tiles: &mut FruitTiles, at: Point, hold: Duration, start: Instant) {
    board.handle_pointer(&PointerEvent::new(PointerAction::Down, at, start), tiles);
    board.process_timers(start + hold, tiles);
    board.handle_pointer(&PointerEvent::new(PointerAction::Up, at, start + hold), tiles);
    board.process_timers(start + hold + Duration::from_millis(100), tiles);
}

fn main() -> Result<(), BoardError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let adapter = Arc::new(VecAdapter::new(FRUITS.to_vec()));
    let mut tiles = FruitTiles {
        adapter: adapter.clone(),
    };

    let config = GridConfig::from_toml_str("column_count = 3\ncolumn_spacing = 4.0\nrow_spacing = 2.0\n")?;
    let mut board = BoardView::with_config(config);
    board.set_adapter(Some(adapter.clone()));
    board.attached_to_window();

    board.item_clicked.connect(|click| {
        println!("  clicked {} (id {})", click.position, click.item_id);
    });
    let names = adapter.clone();
    board.set_on_item_long_click(move |position, _item_id| {
        let name = names.get(position).unwrap_or_default();
        println!("  long-clicked {name}");
        name.starts_with('o')
    });

    relayout(&mut board, &mut tiles)?;

    let start = Instant::now();
    let center = |board: &BoardView<FruitTile>, position: usize| {
        board.item_bounds(position).map(|bounds| bounds.center()).unwrap_or(Point::ZERO)
    };

    println!("quick tap on 1:");
    let at = center(&board, 1);
    tap(&mut board, &mut tiles, at, Duration::from_millis(30), start);

    println!("held press on 4:");
    let held = start + Duration::from_secs(1);
    let at = center(&board, 4);
    board.set_long_clickable(false);
    tap(&mut board, &mut tiles, at, Duration::from_millis(150), held);
    board.set_long_clickable(true);

    println!("long press on 3:");
    let long = start + Duration::from_secs(2);
    let at = center(&board, 3);
    board.handle_pointer(&PointerEvent::new(PointerAction::Down, at, long), &mut tiles);
    board.process_timers(long + Duration::from_millis(100), &mut tiles);
    board.process_timers(long + Duration::from_millis(600), &mut tiles);
    board.handle_pointer(&PointerEvent::new(PointerAction::Up, at, long + Duration::from_millis(700)), &mut tiles);

    println!("keyboard:");
    let keys = start + Duration::from_secs(3);
    board.set_focused(true, false, &mut tiles);
    for key in [Key::ArrowDown, Key::ArrowDown, Key::ArrowUp] {
        board.handle_key(&KeyEvent::pressed(key, keys), &mut tiles);
    }
    board.handle_key(&KeyEvent::pressed(Key::Enter, keys), &mut tiles);
    board.handle_key(&KeyEvent::released(Key::Enter, keys), &mut tiles);
    print_board(&board);

    println!("add a kiwi:");
    adapter.push("kiwi");
    relayout(&mut board, &mut tiles)?;

    if let Some(description) = board.describe_item(9) {
        println!("item 9 supports {:?}", description.actions);
    }

    board.detached_from_window();
    Ok(())
}
