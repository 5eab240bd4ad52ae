#![allow(warnings)]
//! Aventuras na Terra da Água Frontend Entry Point

mod app;
mod components;
mod game_controller;
mod logging;
mod storage;
mod timers;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
