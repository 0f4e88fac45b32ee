// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - render: Shell; mounts the search screen full-bleed and overlays the alert
// - screen: Search screen orchestration
// - layout: Screen layout (banner, input, results, legend)
// - banner: Title and tagline
// - input: One-character input box
// - results: Loading indicator, error text, or word list
// - legend: Hotkey legend
// - dialogs: Blocking alert

pub mod banner;
pub mod dialogs;
pub mod input;
pub mod layout;
pub mod legend;
pub mod render;
pub mod results;
pub mod screen;

pub use render::render;
