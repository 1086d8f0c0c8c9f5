//! veil mocks - Web demo for the dialog
//!
//! Mounts a `Modal` under `ModalRoot` with a control panel for every prop.

use veil_mocks::App;

fn main() {
    dioxus::launch(App);
}
