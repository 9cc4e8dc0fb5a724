#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate lazy_static;

use ggez::{event, ContextBuilder};
use log::info;

use crate::app::{prefs::Prefs, App, AppResult};

mod app;
mod basic;

fn main() -> AppResult {
    pretty_env_logger::init();

    let prefs = Prefs::default();
    let (ctx, event_loop) = ContextBuilder::new("grid_snake", "gorilskij")
        .window_mode(App::wm(&prefs))
        .window_setup(App::ws())
        .build()?;

    let app = App::new(&ctx, prefs)?;
    info!("window open, press Esc to quit");
    event::run(ctx, event_loop, app)
}
