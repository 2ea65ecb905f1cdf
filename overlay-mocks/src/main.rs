//! overlay mocks - Storybook-like workbench for the overlay components

fn main() {
    dioxus::launch(overlay_mocks::App);
}
